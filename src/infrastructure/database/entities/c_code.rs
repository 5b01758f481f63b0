// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::isbn::CCode;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "c_codes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub target: String,
    pub format: String,
    pub content: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::publication_detail::Entity")]
    PublicationDetails,
}

impl Related<super::publication_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PublicationDetails.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for CCode {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            target: model.target,
            format: model.format,
            content: model.content,
        }
    }
}

impl From<&CCode> for ActiveModel {
    fn from(code: &CCode) -> Self {
        Self {
            id: Set(code.id),
            target: Set(code.target.clone()),
            format: Set(code.format.clone()),
            content: Set(code.content.clone()),
        }
    }
}
