// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::{links_from_json, links_to_json};
use crate::domain::models::creator::Creator;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

/// 作者数据库实体模型
///
/// 对应 creators 表；与社团、角色、系列的多对多关系经由关联表表达
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "creators")]
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
    #[sea_orm(has_many = "super::circles_creators::Entity")]
    CirclesCreators,
    #[sea_orm(has_many = "super::creator_roles_creators::Entity")]
    CreatorRolesCreators,
    #[sea_orm(has_many = "super::creators_series::Entity")]
    CreatorsSeries,
    #[sea_orm(has_many = "super::books_creators::Entity")]
    BooksCreators,
}

impl Related<super::circles_creators::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CirclesCreators.def()
    }
}

impl Related<super::creator_roles_creators::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CreatorRolesCreators.def()
    }
}

impl Related<super::creators_series::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CreatorsSeries.def()
    }
}

impl Related<super::books_creators::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BooksCreators.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Creator {
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

impl From<&Creator> for ActiveModel {
    fn from(creator: &Creator) -> Self {
        Self {
            id: Set(creator.id),
            image: Set(creator.image.clone()),
            links: Set(links_to_json(&creator.links)),
            name: Set(creator.name.clone()),
            name_ruby: Set(creator.name_ruby.clone()),
        }
    }
}
