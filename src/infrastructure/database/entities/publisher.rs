// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::{links_from_json, links_to_json};
use crate::domain::models::publisher::Publisher;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

/// 出版社数据库实体模型
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "publishers")]
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
    #[sea_orm(has_many = "super::label::Entity")]
    Labels,
    #[sea_orm(has_many = "super::registrant::Entity")]
    Registrants,
}

impl Related<super::label::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Labels.def()
    }
}

impl Related<super::registrant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Registrants.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Publisher {
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

impl From<&Publisher> for ActiveModel {
    fn from(publisher: &Publisher) -> Self {
        Self {
            id: Set(publisher.id),
            image: Set(publisher.image.clone()),
            links: Set(links_to_json(&publisher.links)),
            name: Set(publisher.name.clone()),
            name_ruby: Set(publisher.name_ruby.clone()),
        }
    }
}
