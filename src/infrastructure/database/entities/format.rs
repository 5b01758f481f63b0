// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::catalog::Format;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "formats")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub length: i32,
    pub name: String,
    pub width: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::book::Entity")]
    Books,
}

impl Related<super::book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Books.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Format {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            length: model.length,
            name: model.name,
            width: model.width,
        }
    }
}

impl From<&Format> for ActiveModel {
    fn from(format: &Format) -> Self {
        Self {
            id: Set(format.id),
            length: Set(format.length),
            name: Set(format.name.clone()),
            width: Set(format.width),
        }
    }
}
