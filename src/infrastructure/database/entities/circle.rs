// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::{links_from_json, links_to_json};
use crate::domain::models::creator::Circle;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "circles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub image: Option<String>,
    pub links: Json,
    pub name: String,
    pub name_ruby: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::circles_creators::Entity")]
    CirclesCreators,
    #[sea_orm(has_many = "super::fanzine::Entity")]
    Fanzines,
}

impl Related<super::circles_creators::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CirclesCreators.def()
    }
}

impl Related<super::fanzine::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fanzines.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Circle {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            image: model.image,
            links: links_from_json(Entity.table_name(), model.id, model.links),
            name: model.name,
            name_ruby: model.name_ruby,
        }
    }
}

impl From<&Circle> for ActiveModel {
    fn from(circle: &Circle) -> Self {
        Self {
            id: Set(circle.id),
            image: Set(circle.image.clone()),
            links: Set(links_to_json(&circle.links)),
            name: Set(circle.name.clone()),
            name_ruby: Set(circle.name_ruby.clone()),
        }
    }
}
