// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::event::Event;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

/// 即卖会场次实体
///
/// 对应 events 表，`(name, number)` 上有唯一索引
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub date_from: Date,
    pub date_to: Date,
    pub name: String,
    pub name_ruby: String,
    pub number: i32,
    pub event_series_id: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::event_series::Entity",
        from = "Column::EventSeriesId",
        to = "super::event_series::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    EventSeries,
    #[sea_orm(has_many = "super::fanzine::Entity")]
    Fanzines,
}

impl Related<super::event_series::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventSeries.def()
    }
}

impl Related<super::fanzine::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fanzines.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Event {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            date_from: model.date_from,
            date_to: model.date_to,
            name: model.name,
            name_ruby: model.name_ruby,
            number: model.number,
            event_series_id: model.event_series_id,
        }
    }
}

impl From<&Event> for ActiveModel {
    fn from(event: &Event) -> Self {
        Self {
            id: Set(event.id),
            date_from: Set(event.date_from),
            date_to: Set(event.date_to),
            name: Set(event.name.clone()),
            name_ruby: Set(event.name_ruby.clone()),
            number: Set(event.number),
            event_series_id: Set(event.event_series_id),
        }
    }
}
