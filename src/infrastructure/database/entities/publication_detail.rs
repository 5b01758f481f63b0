// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::isbn::PublicationDetail;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

/// 发行信息实体
///
/// 与出版物、杂志各自一对一（`publication_id`、`magazine_id` 均唯一）
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "publication_details")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub price: i32,
    pub c_code_id: Uuid,
    pub label_id: Option<Uuid>,
    #[sea_orm(unique)]
    pub magazine_id: Uuid,
    #[sea_orm(unique)]
    pub publication_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::c_code::Entity",
        from = "Column::CCodeId",
        to = "super::c_code::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    CCode,
    #[sea_orm(
        belongs_to = "super::label::Entity",
        from = "Column::LabelId",
        to = "super::label::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Label,
    #[sea_orm(
        belongs_to = "super::magazine::Entity",
        from = "Column::MagazineId",
        to = "super::magazine::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Magazine,
    #[sea_orm(
        belongs_to = "super::publication::Entity",
        from = "Column::PublicationId",
        to = "super::publication::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Publication,
}

impl Related<super::c_code::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CCode.def()
    }
}

impl Related<super::label::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Label.def()
    }
}

impl Related<super::magazine::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Magazine.def()
    }
}

impl Related<super::publication::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Publication.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for PublicationDetail {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            price: model.price,
            c_code_id: model.c_code_id,
            label_id: model.label_id,
            magazine_id: model.magazine_id,
            publication_id: model.publication_id,
        }
    }
}

impl From<&PublicationDetail> for ActiveModel {
    fn from(detail: &PublicationDetail) -> Self {
        Self {
            id: Set(detail.id),
            price: Set(detail.price),
            c_code_id: Set(detail.c_code_id),
            label_id: Set(detail.label_id),
            magazine_id: Set(detail.magazine_id),
            publication_id: Set(detail.publication_id),
        }
    }
}
