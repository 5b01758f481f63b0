// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::constraint::Row;
use crate::domain::models::publisher::{Label, Publisher};
use crate::domain::repositories::error::RepositoryError;
use crate::domain::repositories::publisher_repository::PublisherRepository;
use crate::infrastructure::database::catalog::Catalog;
use crate::infrastructure::database::entities::{label as label_entity, publisher as publisher_entity};
use crate::infrastructure::database::integrity::{delete_row, ensure_exists, prepare_write};
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// 出版社仓库实现
pub struct PublisherRepositoryImpl {
    db: Arc<DatabaseConnection>,
    catalog: Arc<Catalog>,
}

impl PublisherRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>, catalog: Arc<Catalog>) -> Self {
        Self { db, catalog }
    }
}

#[async_trait]
impl PublisherRepository for PublisherRepositoryImpl {
    async fn create_publisher(&self, publisher: &Publisher) -> Result<Publisher, RepositoryError> {
        let txn = self.db.begin().await?;
        prepare_write(&txn, &self.catalog, publisher).await?;

        let model = publisher_entity::ActiveModel::from(publisher)
            .insert(&txn)
            .await
            .map_err(|e| self.catalog.classify(e))?;
        txn.commit().await?;

        debug!(id = %model.id, name = %model.name, "Publisher created");
        Ok(model.into())
    }

    async fn find_publisher(&self, id: Uuid) -> Result<Option<Publisher>, RepositoryError> {
        let model = publisher_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn update_publisher(&self, publisher: &Publisher) -> Result<Publisher, RepositoryError> {
        let txn = self.db.begin().await?;
        ensure_exists(&txn, Publisher::TABLE, publisher.id).await?;
        prepare_write(&txn, &self.catalog, publisher).await?;

        let model = publisher_entity::ActiveModel::from(publisher)
            .update(&txn)
            .await
            .map_err(|e| self.catalog.classify(e))?;
        txn.commit().await?;

        Ok(model.into())
    }

    async fn delete_publisher(&self, id: Uuid) -> Result<(), RepositoryError> {
        let txn = self.db.begin().await?;
        delete_row(&txn, &self.catalog, Publisher::TABLE, id).await?;
        txn.commit().await?;

        debug!(%id, "Publisher deleted");
        Ok(())
    }

    async fn create_label(&self, label: &Label) -> Result<Label, RepositoryError> {
        let txn = self.db.begin().await?;
        prepare_write(&txn, &self.catalog, label).await?;

        let model = label_entity::ActiveModel::from(label)
            .insert(&txn)
            .await
            .map_err(|e| self.catalog.classify(e))?;
        txn.commit().await?;

        debug!(id = %model.id, publisher_id = %model.publisher_id, "Label created");
        Ok(model.into())
    }

    async fn find_label(&self, id: Uuid) -> Result<Option<Label>, RepositoryError> {
        let model = label_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn update_label(&self, label: &Label) -> Result<Label, RepositoryError> {
        let txn = self.db.begin().await?;
        ensure_exists(&txn, Label::TABLE, label.id).await?;
        prepare_write(&txn, &self.catalog, label).await?;

        let model = label_entity::ActiveModel::from(label)
            .update(&txn)
            .await
            .map_err(|e| self.catalog.classify(e))?;
        txn.commit().await?;

        Ok(model.into())
    }

    async fn delete_label(&self, id: Uuid) -> Result<(), RepositoryError> {
        let txn = self.db.begin().await?;
        delete_row(&txn, &self.catalog, Label::TABLE, id).await?;
        txn.commit().await?;

        debug!(%id, "Label deleted");
        Ok(())
    }

    async fn list_publisher_labels(&self, publisher_id: Uuid) -> Result<Vec<Label>, RepositoryError> {
        let models = label_entity::Entity::find()
            .filter(label_entity::Column::PublisherId.eq(publisher_id))
            .order_by_asc(label_entity::Column::Name)
            .order_by_asc(label_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }
}
