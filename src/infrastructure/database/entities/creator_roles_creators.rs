// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "creator_roles_creators")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub creator_role_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub creator_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::creator_role::Entity",
        from = "Column::CreatorRoleId",
        to = "super::creator_role::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    CreatorRole,
    #[sea_orm(
        belongs_to = "super::creator::Entity",
        from = "Column::CreatorId",
        to = "super::creator::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Creator,
}

impl Related<super::creator_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CreatorRole.def()
    }
}

impl Related<super::creator::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Creator.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
