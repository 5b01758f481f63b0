// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::book::Series;
use crate::domain::models::constraint::Row;
use crate::domain::models::creator::{Circle, Creator, CreatorRole};
use crate::domain::repositories::creator_repository::CreatorRepository;
use crate::domain::repositories::error::RepositoryError;
use crate::infrastructure::database::catalog::Catalog;
use crate::infrastructure::database::entities::{
    circle as circle_entity, circles_creators, creator as creator_entity,
    creator_role as creator_role_entity, creator_roles_creators, creators_series,
    series as series_entity,
};
use crate::infrastructure::database::integrity::{delete_row, ensure_exists, prepare_write};
use crate::infrastructure::repositories::{insert_link, remove_link};
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

const CIRCLES_CREATORS: &str = "circles_creators";
const CREATOR_ROLES_CREATORS: &str = "creator_roles_creators";
const CREATORS_SERIES: &str = "creators_series";

/// 作者仓库实现
///
/// 三张关联表只有复合主键，建立关联前在同一事务内确认两端都存在
pub struct CreatorRepositoryImpl {
    db: Arc<DatabaseConnection>,
    catalog: Arc<Catalog>,
}

impl CreatorRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>, catalog: Arc<Catalog>) -> Self {
        Self { db, catalog }
    }
}

#[async_trait]
impl CreatorRepository for CreatorRepositoryImpl {
    async fn create_creator_role(&self, role: &CreatorRole) -> Result<CreatorRole, RepositoryError> {
        let txn = self.db.begin().await?;
        prepare_write(&txn, &self.catalog, role).await?;

        let model = creator_role_entity::ActiveModel::from(role)
            .insert(&txn)
            .await
            .map_err(|e| self.catalog.classify(e))?;
        txn.commit().await?;

        debug!(id = %model.id, name = %model.name, "Creator role created");
        Ok(model.into())
    }

    async fn find_creator_role(&self, id: Uuid) -> Result<Option<CreatorRole>, RepositoryError> {
        let model = creator_role_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn find_creator_role_by_name(
        &self,
        name: &str,
    ) -> Result<Option<CreatorRole>, RepositoryError> {
        let model = creator_role_entity::Entity::find()
            .filter(creator_role_entity::Column::Name.eq(name))
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn update_creator_role(&self, role: &CreatorRole) -> Result<CreatorRole, RepositoryError> {
        let txn = self.db.begin().await?;
        ensure_exists(&txn, CreatorRole::TABLE, role.id).await?;
        prepare_write(&txn, &self.catalog, role).await?;

        let model = creator_role_entity::ActiveModel::from(role)
            .update(&txn)
            .await
            .map_err(|e| self.catalog.classify(e))?;
        txn.commit().await?;

        Ok(model.into())
    }

    async fn delete_creator_role(&self, id: Uuid) -> Result<(), RepositoryError> {
        let txn = self.db.begin().await?;
        delete_row(&txn, &self.catalog, CreatorRole::TABLE, id).await?;
        txn.commit().await?;

        debug!(%id, "Creator role deleted");
        Ok(())
    }

    async fn create_creator(&self, creator: &Creator) -> Result<Creator, RepositoryError> {
        let txn = self.db.begin().await?;
        prepare_write(&txn, &self.catalog, creator).await?;

        let model = creator_entity::ActiveModel::from(creator)
            .insert(&txn)
            .await
            .map_err(|e| self.catalog.classify(e))?;
        txn.commit().await?;

        debug!(id = %model.id, name = %model.name, "Creator created");
        Ok(model.into())
    }

    async fn find_creator(&self, id: Uuid) -> Result<Option<Creator>, RepositoryError> {
        let model = creator_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn update_creator(&self, creator: &Creator) -> Result<Creator, RepositoryError> {
        let txn = self.db.begin().await?;
        ensure_exists(&txn, Creator::TABLE, creator.id).await?;
        prepare_write(&txn, &self.catalog, creator).await?;

        let model = creator_entity::ActiveModel::from(creator)
            .update(&txn)
            .await
            .map_err(|e| self.catalog.classify(e))?;
        txn.commit().await?;

        Ok(model.into())
    }

    async fn delete_creator(&self, id: Uuid) -> Result<(), RepositoryError> {
        let txn = self.db.begin().await?;
        delete_row(&txn, &self.catalog, Creator::TABLE, id).await?;
        txn.commit().await?;

        debug!(%id, "Creator deleted");
        Ok(())
    }

    async fn create_circle(&self, circle: &Circle) -> Result<Circle, RepositoryError> {
        let txn = self.db.begin().await?;
        prepare_write(&txn, &self.catalog, circle).await?;

        let model = circle_entity::ActiveModel::from(circle)
            .insert(&txn)
            .await
            .map_err(|e| self.catalog.classify(e))?;
        txn.commit().await?;

        debug!(id = %model.id, name = %model.name, "Circle created");
        Ok(model.into())
    }

    async fn find_circle(&self, id: Uuid) -> Result<Option<Circle>, RepositoryError> {
        let model = circle_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn update_circle(&self, circle: &Circle) -> Result<Circle, RepositoryError> {
        let txn = self.db.begin().await?;
        ensure_exists(&txn, Circle::TABLE, circle.id).await?;
        prepare_write(&txn, &self.catalog, circle).await?;

        let model = circle_entity::ActiveModel::from(circle)
            .update(&txn)
            .await
            .map_err(|e| self.catalog.classify(e))?;
        txn.commit().await?;

        Ok(model.into())
    }

    async fn delete_circle(&self, id: Uuid) -> Result<(), RepositoryError> {
        let txn = self.db.begin().await?;
        delete_row(&txn, &self.catalog, Circle::TABLE, id).await?;
        txn.commit().await?;

        debug!(%id, "Circle deleted");
        Ok(())
    }

    async fn add_circle_member(
        &self,
        circle_id: Uuid,
        creator_id: Uuid,
    ) -> Result<(), RepositoryError> {
        insert_link(
            &self.db,
            &self.catalog,
            CIRCLES_CREATORS,
            &[("circle_id", Some(circle_id)), ("creator_id", Some(creator_id))],
            circles_creators::ActiveModel {
                circle_id: Set(circle_id),
                creator_id: Set(creator_id),
            },
        )
        .await
    }

    async fn remove_circle_member(
        &self,
        circle_id: Uuid,
        creator_id: Uuid,
    ) -> Result<(), RepositoryError> {
        remove_link(
            &self.db,
            CIRCLES_CREATORS,
            &[("circle_id", circle_id), ("creator_id", creator_id)],
        )
        .await
    }

    async fn list_circle_members(&self, circle_id: Uuid) -> Result<Vec<Creator>, RepositoryError> {
        let models = creator_entity::Entity::find()
            .inner_join(circles_creators::Entity)
            .filter(circles_creators::Column::CircleId.eq(circle_id))
            .order_by_asc(creator_entity::Column::Name)
            .order_by_asc(creator_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn list_creator_circles(&self, creator_id: Uuid) -> Result<Vec<Circle>, RepositoryError> {
        let models = circle_entity::Entity::find()
            .inner_join(circles_creators::Entity)
            .filter(circles_creators::Column::CreatorId.eq(creator_id))
            .order_by_asc(circle_entity::Column::Name)
            .order_by_asc(circle_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn grant_creator_role(
        &self,
        creator_id: Uuid,
        creator_role_id: Uuid,
    ) -> Result<(), RepositoryError> {
        insert_link(
            &self.db,
            &self.catalog,
            CREATOR_ROLES_CREATORS,
            &[
                ("creator_role_id", Some(creator_role_id)),
                ("creator_id", Some(creator_id)),
            ],
            creator_roles_creators::ActiveModel {
                creator_role_id: Set(creator_role_id),
                creator_id: Set(creator_id),
            },
        )
        .await
    }

    async fn revoke_creator_role(
        &self,
        creator_id: Uuid,
        creator_role_id: Uuid,
    ) -> Result<(), RepositoryError> {
        remove_link(
            &self.db,
            CREATOR_ROLES_CREATORS,
            &[("creator_role_id", creator_role_id), ("creator_id", creator_id)],
        )
        .await
    }

    async fn list_creator_roles_of(
        &self,
        creator_id: Uuid,
    ) -> Result<Vec<CreatorRole>, RepositoryError> {
        let models = creator_role_entity::Entity::find()
            .inner_join(creator_roles_creators::Entity)
            .filter(creator_roles_creators::Column::CreatorId.eq(creator_id))
            .order_by_asc(creator_role_entity::Column::Name)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn list_creators_with_role(
        &self,
        creator_role_id: Uuid,
    ) -> Result<Vec<Creator>, RepositoryError> {
        let models = creator_entity::Entity::find()
            .inner_join(creator_roles_creators::Entity)
            .filter(creator_roles_creators::Column::CreatorRoleId.eq(creator_role_id))
            .order_by_asc(creator_entity::Column::Name)
            .order_by_asc(creator_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn add_series_creator(
        &self,
        series_id: Uuid,
        creator_id: Uuid,
    ) -> Result<(), RepositoryError> {
        insert_link(
            &self.db,
            &self.catalog,
            CREATORS_SERIES,
            &[("creator_id", Some(creator_id)), ("series_id", Some(series_id))],
            creators_series::ActiveModel {
                creator_id: Set(creator_id),
                series_id: Set(series_id),
            },
        )
        .await
    }

    async fn remove_series_creator(
        &self,
        series_id: Uuid,
        creator_id: Uuid,
    ) -> Result<(), RepositoryError> {
        remove_link(
            &self.db,
            CREATORS_SERIES,
            &[("creator_id", creator_id), ("series_id", series_id)],
        )
        .await
    }

    async fn list_series_creators(&self, series_id: Uuid) -> Result<Vec<Creator>, RepositoryError> {
        let models = creator_entity::Entity::find()
            .inner_join(creators_series::Entity)
            .filter(creators_series::Column::SeriesId.eq(series_id))
            .order_by_asc(creator_entity::Column::Name)
            .order_by_asc(creator_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn list_creator_series(&self, creator_id: Uuid) -> Result<Vec<Series>, RepositoryError> {
        let models = series_entity::Entity::find()
            .inner_join(creators_series::Entity)
            .filter(creators_series::Column::CreatorId.eq(creator_id))
            .order_by_asc(series_entity::Column::Title)
            .order_by_asc(series_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }
}
