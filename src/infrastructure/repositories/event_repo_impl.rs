// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::constraint::Row;
use crate::domain::models::event::{Event, EventSeries};
use crate::domain::repositories::error::RepositoryError;
use crate::domain::repositories::event_repository::EventRepository;
use crate::infrastructure::database::catalog::Catalog;
use crate::infrastructure::database::entities::{
    event as event_entity, event_series as event_series_entity,
};
use crate::infrastructure::database::integrity::{delete_row, ensure_exists, prepare_write};
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// 即卖会仓库实现
pub struct EventRepositoryImpl {
    db: Arc<DatabaseConnection>,
    catalog: Arc<Catalog>,
}

impl EventRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>, catalog: Arc<Catalog>) -> Self {
        Self { db, catalog }
    }
}

#[async_trait]
impl EventRepository for EventRepositoryImpl {
    async fn create_event_series(&self, series: &EventSeries) -> Result<EventSeries, RepositoryError> {
        let txn = self.db.begin().await?;
        prepare_write(&txn, &self.catalog, series).await?;

        let model = event_series_entity::ActiveModel::from(series)
            .insert(&txn)
            .await
            .map_err(|e| self.catalog.classify(e))?;
        txn.commit().await?;

        debug!(id = %model.id, name = %model.name, "Event series created");
        Ok(model.into())
    }

    async fn find_event_series(&self, id: Uuid) -> Result<Option<EventSeries>, RepositoryError> {
        let model = event_series_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn update_event_series(&self, series: &EventSeries) -> Result<EventSeries, RepositoryError> {
        let txn = self.db.begin().await?;
        ensure_exists(&txn, EventSeries::TABLE, series.id).await?;
        prepare_write(&txn, &self.catalog, series).await?;

        let model = event_series_entity::ActiveModel::from(series)
            .update(&txn)
            .await
            .map_err(|e| self.catalog.classify(e))?;
        txn.commit().await?;

        Ok(model.into())
    }

    async fn delete_event_series(&self, id: Uuid) -> Result<(), RepositoryError> {
        let txn = self.db.begin().await?;
        delete_row(&txn, &self.catalog, EventSeries::TABLE, id).await?;
        txn.commit().await?;

        debug!(%id, "Event series deleted");
        Ok(())
    }

    async fn create_event(&self, event: &Event) -> Result<Event, RepositoryError> {
        let txn = self.db.begin().await?;
        prepare_write(&txn, &self.catalog, event).await?;

        let model = event_entity::ActiveModel::from(event)
            .insert(&txn)
            .await
            .map_err(|e| self.catalog.classify(e))?;
        txn.commit().await?;

        debug!(id = %model.id, name = %model.name, number = model.number, "Event created");
        Ok(model.into())
    }

    async fn find_event(&self, id: Uuid) -> Result<Option<Event>, RepositoryError> {
        let model = event_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn find_event_by_name_and_number(
        &self,
        name: &str,
        number: i32,
    ) -> Result<Option<Event>, RepositoryError> {
        let model = event_entity::Entity::find()
            .filter(event_entity::Column::Name.eq(name))
            .filter(event_entity::Column::Number.eq(number))
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn update_event(&self, event: &Event) -> Result<Event, RepositoryError> {
        let txn = self.db.begin().await?;
        ensure_exists(&txn, Event::TABLE, event.id).await?;
        prepare_write(&txn, &self.catalog, event).await?;

        let model = event_entity::ActiveModel::from(event)
            .update(&txn)
            .await
            .map_err(|e| self.catalog.classify(e))?;
        txn.commit().await?;

        Ok(model.into())
    }

    async fn delete_event(&self, id: Uuid) -> Result<(), RepositoryError> {
        let txn = self.db.begin().await?;
        delete_row(&txn, &self.catalog, Event::TABLE, id).await?;
        txn.commit().await?;

        debug!(%id, "Event deleted");
        Ok(())
    }

    async fn list_events_in_series(
        &self,
        event_series_id: Uuid,
    ) -> Result<Vec<Event>, RepositoryError> {
        let models = event_entity::Entity::find()
            .filter(event_entity::Column::EventSeriesId.eq(event_series_id))
            .order_by_asc(event_entity::Column::Number)
            .order_by_asc(event_entity::Column::DateFrom)
            .order_by_asc(event_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }
}
