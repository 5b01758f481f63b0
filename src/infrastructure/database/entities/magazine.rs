// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::book::Magazine;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "magazines")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::book::Entity")]
    Book,
    #[sea_orm(has_one = "super::publication_detail::Entity")]
    PublicationDetail,
}

impl Related<super::book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Book.def()
    }
}

impl Related<super::publication_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PublicationDetail.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Magazine {
    fn from(model: Model) -> Self {
        Self { id: model.id }
    }
}

impl From<&Magazine> for ActiveModel {
    fn from(magazine: &Magazine) -> Self {
        Self {
            id: Set(magazine.id),
        }
    }
}
