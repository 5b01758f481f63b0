// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::{links_from_json, links_to_json};
use crate::domain::models::event::EventSeries;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "event_series")]
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
    #[sea_orm(has_many = "super::event::Entity")]
    Events,
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Events.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for EventSeries {
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

impl From<&EventSeries> for ActiveModel {
    fn from(series: &EventSeries) -> Self {
        Self {
            id: Set(series.id),
            image: Set(series.image.clone()),
            links: Set(links_to_json(&series.links)),
            name: Set(series.name.clone()),
            name_ruby: Set(series.name_ruby.clone()),
        }
    }
}
