// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::{links_from_json, links_to_json};
use crate::domain::models::publisher::Label;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "labels")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub image: Option<String>,
    pub links: Json,
    pub name: String,
    pub name_ruby: String,
    pub publisher_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::publisher::Entity",
        from = "Column::PublisherId",
        to = "super::publisher::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Publisher,
    #[sea_orm(has_many = "super::publication_detail::Entity")]
    PublicationDetails,
}

impl Related<super::publisher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Publisher.def()
    }
}

impl Related<super::publication_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PublicationDetails.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Label {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            image: model.image,
            links: links_from_json(Entity.table_name(), model.id, model.links),
            name: model.name,
            name_ruby: model.name_ruby,
            publisher_id: model.publisher_id,
        }
    }
}

impl From<&Label> for ActiveModel {
    fn from(label: &Label) -> Self {
        Self {
            id: Set(label.id),
            image: Set(label.image.clone()),
            links: Set(links_to_json(&label.links)),
            name: Set(label.name.clone()),
            name_ruby: Set(label.name_ruby.clone()),
            publisher_id: Set(label.publisher_id),
        }
    }
}
