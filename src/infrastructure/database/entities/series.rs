// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::{links_from_json, links_to_json};
use crate::domain::models::book::Series;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "series")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub links: Json,
    pub title: String,
    pub title_ruby: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::book::Entity")]
    Books,
    #[sea_orm(has_many = "super::creators_series::Entity")]
    CreatorsSeries,
}

impl Related<super::book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Books.def()
    }
}

impl Related<super::creators_series::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CreatorsSeries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Series {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            links: links_from_json(Entity.table_name(), model.id, model.links),
            title: model.title,
            title_ruby: model.title_ruby,
        }
    }
}

impl From<&Series> for ActiveModel {
    fn from(series: &Series) -> Self {
        Self {
            id: Set(series.id),
            links: Set(links_to_json(&series.links)),
            title: Set(series.title.clone()),
            title_ruby: Set(series.title_ruby.clone()),
        }
    }
}
