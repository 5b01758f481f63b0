// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::isbn::RegistrationGroup;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

/// 登记组实体
///
/// `(element, prefix_id)` 唯一；`prefix_id` 可空
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "registration_groups")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub element: String,
    pub prefix_id: Option<Uuid>,
    pub region_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::prefix::Entity",
        from = "Column::PrefixId",
        to = "super::prefix::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Prefix,
    #[sea_orm(
        belongs_to = "super::region::Entity",
        from = "Column::RegionId",
        to = "super::region::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Region,
    #[sea_orm(has_many = "super::registrant::Entity")]
    Registrants,
}

impl Related<super::prefix::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Prefix.def()
    }
}

impl Related<super::region::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Region.def()
    }
}

impl Related<super::registrant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Registrants.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for RegistrationGroup {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            element: model.element,
            prefix_id: model.prefix_id,
            region_id: model.region_id,
        }
    }
}

impl From<&RegistrationGroup> for ActiveModel {
    fn from(group: &RegistrationGroup) -> Self {
        Self {
            id: Set(group.id),
            element: Set(group.element.clone()),
            prefix_id: Set(group.prefix_id),
            region_id: Set(group.region_id),
        }
    }
}
