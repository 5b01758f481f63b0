// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::catalog::Genre;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

/// 体裁实体，`parent_id` 自引用形成树
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "genres")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub depth: i32,
    pub name: String,
    pub parent_id: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::ParentId",
        to = "Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Parent,
    #[sea_orm(has_many = "super::books_genres::Entity")]
    BooksGenres,
}

impl Related<super::books_genres::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BooksGenres.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Genre {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            depth: model.depth,
            name: model.name,
            parent_id: model.parent_id,
        }
    }
}

impl From<&Genre> for ActiveModel {
    fn from(genre: &Genre) -> Self {
        Self {
            id: Set(genre.id),
            depth: Set(genre.depth),
            name: Set(genre.name.clone()),
            parent_id: Set(genre.parent_id),
        }
    }
}
