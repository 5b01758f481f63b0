// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::book::Fanzine;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "fanzines")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub circle_id: Option<Uuid>,
    pub event_id: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::circle::Entity",
        from = "Column::CircleId",
        to = "super::circle::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Circle,
    #[sea_orm(
        belongs_to = "super::event::Entity",
        from = "Column::EventId",
        to = "super::event::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Event,
    #[sea_orm(has_one = "super::book::Entity")]
    Book,
}

impl Related<super::circle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Circle.def()
    }
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl Related<super::book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Book.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Fanzine {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            circle_id: model.circle_id,
            event_id: model.event_id,
        }
    }
}

impl From<&Fanzine> for ActiveModel {
    fn from(fanzine: &Fanzine) -> Self {
        Self {
            id: Set(fanzine.id),
            circle_id: Set(fanzine.circle_id),
            event_id: Set(fanzine.event_id),
        }
    }
}
