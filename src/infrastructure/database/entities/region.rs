// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::isbn::Region;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "regions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub image: Option<String>,
    #[sea_orm(unique)]
    pub name: String,
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

impl From<Model> for Region {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            image: model.image,
            name: model.name,
        }
    }
}

impl From<&Region> for ActiveModel {
    fn from(region: &Region) -> Self {
        Self {
            id: Set(region.id),
            image: Set(region.image.clone()),
            name: Set(region.name.clone()),
        }
    }
}
