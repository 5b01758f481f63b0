// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::isbn::Publication;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "publications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub element: String,
    pub registrant_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::registrant::Entity",
        from = "Column::RegistrantId",
        to = "super::registrant::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Registrant,
    #[sea_orm(has_one = "super::publication_detail::Entity")]
    PublicationDetail,
}

impl Related<super::registrant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Registrant.def()
    }
}

impl Related<super::publication_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PublicationDetail.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Publication {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            element: model.element,
            registrant_id: model.registrant_id,
        }
    }
}

impl From<&Publication> for ActiveModel {
    fn from(publication: &Publication) -> Self {
        Self {
            id: Set(publication.id),
            element: Set(publication.element.clone()),
            registrant_id: Set(publication.registrant_id),
        }
    }
}
