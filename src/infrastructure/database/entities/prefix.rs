// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::isbn::Prefix;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "prefixes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub element: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::registration_group::Entity")]
    RegistrationGroups,
}

impl Related<super::registration_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RegistrationGroups.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Prefix {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            element: model.element,
        }
    }
}

impl From<&Prefix> for ActiveModel {
    fn from(prefix: &Prefix) -> Self {
        Self {
            id: Set(prefix.id),
            element: Set(prefix.element.clone()),
        }
    }
}
