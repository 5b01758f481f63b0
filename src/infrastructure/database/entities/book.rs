// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::{links_from_json, links_to_json};
use crate::domain::models::book::Book;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

/// 书籍数据库实体模型
///
/// 对应 books 表。`fanzine_id` 与 `magazine_id` 恰有一个非空，
/// 两列各自唯一，保证同人志、杂志与书籍一对一。
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "books")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub image: Option<String>,
    pub length: i32,
    pub links: Json,
    pub release_date: Date,
    pub subtitle: Option<String>,
    pub subtitle_ruby: Option<String>,
    pub title: String,
    pub title_ruby: String,
    #[sea_orm(column_type = "Double", nullable)]
    pub volume: Option<f64>,
    #[sea_orm(unique)]
    pub fanzine_id: Option<Uuid>,
    pub format_id: Uuid,
    #[sea_orm(unique)]
    pub magazine_id: Option<Uuid>,
    pub series_id: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::fanzine::Entity",
        from = "Column::FanzineId",
        to = "super::fanzine::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Fanzine,
    #[sea_orm(
        belongs_to = "super::format::Entity",
        from = "Column::FormatId",
        to = "super::format::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Format,
    #[sea_orm(
        belongs_to = "super::magazine::Entity",
        from = "Column::MagazineId",
        to = "super::magazine::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Magazine,
    #[sea_orm(
        belongs_to = "super::series::Entity",
        from = "Column::SeriesId",
        to = "super::series::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Series,
    #[sea_orm(has_many = "super::books_genres::Entity")]
    BooksGenres,
    #[sea_orm(has_many = "super::books_creators::Entity")]
    BooksCreators,
}

impl Related<super::fanzine::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fanzine.def()
    }
}

impl Related<super::format::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Format.def()
    }
}

impl Related<super::magazine::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Magazine.def()
    }
}

impl Related<super::series::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Series.def()
    }
}

impl Related<super::books_genres::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BooksGenres.def()
    }
}

impl Related<super::books_creators::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BooksCreators.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Book {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            image: model.image,
            length: model.length,
            links: links_from_json(Entity.table_name(), model.id, model.links),
            release_date: model.release_date,
            subtitle: model.subtitle,
            subtitle_ruby: model.subtitle_ruby,
            title: model.title,
            title_ruby: model.title_ruby,
            volume: model.volume,
            fanzine_id: model.fanzine_id,
            format_id: model.format_id,
            magazine_id: model.magazine_id,
            series_id: model.series_id,
        }
    }
}

impl From<&Book> for ActiveModel {
    fn from(book: &Book) -> Self {
        Self {
            id: Set(book.id),
            image: Set(book.image.clone()),
            length: Set(book.length),
            links: Set(links_to_json(&book.links)),
            release_date: Set(book.release_date),
            subtitle: Set(book.subtitle.clone()),
            subtitle_ruby: Set(book.subtitle_ruby.clone()),
            title: Set(book.title.clone()),
            title_ruby: Set(book.title_ruby.clone()),
            volume: Set(book.volume),
            fanzine_id: Set(book.fanzine_id),
            format_id: Set(book.format_id),
            magazine_id: Set(book.magazine_id),
            series_id: Set(book.series_id),
        }
    }
}
