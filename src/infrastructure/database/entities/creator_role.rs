// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::creator::CreatorRole;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "creator_roles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::creator_roles_creators::Entity")]
    CreatorRolesCreators,
    #[sea_orm(has_many = "super::books_creators::Entity")]
    BooksCreators,
}

impl Related<super::creator_roles_creators::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CreatorRolesCreators.def()
    }
}

impl Related<super::books_creators::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BooksCreators.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for CreatorRole {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

impl From<&CreatorRole> for ActiveModel {
    fn from(role: &CreatorRole) -> Self {
        Self {
            id: Set(role.id),
            name: Set(role.name.clone()),
        }
    }
}
