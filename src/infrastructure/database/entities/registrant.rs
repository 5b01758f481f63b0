// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::isbn::Registrant;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "registrants")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub element: String,
    pub publisher_id: Uuid,
    pub registration_group_id: Uuid,
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
    #[sea_orm(
        belongs_to = "super::registration_group::Entity",
        from = "Column::RegistrationGroupId",
        to = "super::registration_group::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    RegistrationGroup,
    #[sea_orm(has_many = "super::publication::Entity")]
    Publications,
}

impl Related<super::publisher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Publisher.def()
    }
}

impl Related<super::registration_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RegistrationGroup.def()
    }
}

impl Related<super::publication::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Publications.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Registrant {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            element: model.element,
            publisher_id: model.publisher_id,
            registration_group_id: model.registration_group_id,
        }
    }
}

impl From<&Registrant> for ActiveModel {
    fn from(registrant: &Registrant) -> Self {
        Self {
            id: Set(registrant.id),
            element: Set(registrant.element.clone()),
            publisher_id: Set(registrant.publisher_id),
            registration_group_id: Set(registrant.registration_group_id),
        }
    }
}
