// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::book::BookCreatorAssociation;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

/// 书籍署名关联实体
///
/// 复合主键包含角色，同一作者可以多个角色署名同一本书
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "books_creators")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub book_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub creator_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub creator_role_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::book::Entity",
        from = "Column::BookId",
        to = "super::book::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Book,
    #[sea_orm(
        belongs_to = "super::creator::Entity",
        from = "Column::CreatorId",
        to = "super::creator::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Creator,
    #[sea_orm(
        belongs_to = "super::creator_role::Entity",
        from = "Column::CreatorRoleId",
        to = "super::creator_role::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    CreatorRole,
}

impl Related<super::book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Book.def()
    }
}

impl Related<super::creator::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Creator.def()
    }
}

impl Related<super::creator_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CreatorRole.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for BookCreatorAssociation {
    fn from(model: Model) -> Self {
        Self {
            book_id: model.book_id,
            creator_id: model.creator_id,
            creator_role_id: model.creator_role_id,
        }
    }
}

impl From<&BookCreatorAssociation> for ActiveModel {
    fn from(credit: &BookCreatorAssociation) -> Self {
        Self {
            book_id: Set(credit.book_id),
            creator_id: Set(credit.creator_id),
            creator_role_id: Set(credit.creator_role_id),
        }
    }
}
