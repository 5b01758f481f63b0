// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::constraint::Row;
use crate::domain::models::isbn::{
    CCode, Isbn, Prefix, Publication, PublicationDetail, Region, Registrant, RegistrationGroup,
};
use crate::domain::repositories::error::RepositoryError;
use crate::domain::repositories::isbn_repository::IsbnRepository;
use crate::infrastructure::database::catalog::Catalog;
use crate::infrastructure::database::entities::{
    c_code as c_code_entity, prefix as prefix_entity, publication as publication_entity,
    publication_detail as publication_detail_entity, region as region_entity,
    registrant as registrant_entity, registration_group as registration_group_entity,
};
use crate::infrastructure::database::integrity::{delete_row, ensure_exists, prepare_write};
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

/// ISBN 登记链仓库实现
pub struct IsbnRepositoryImpl {
    db: Arc<DatabaseConnection>,
    catalog: Arc<Catalog>,
}

impl IsbnRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>, catalog: Arc<Catalog>) -> Self {
        Self { db, catalog }
    }
}

#[async_trait]
impl IsbnRepository for IsbnRepositoryImpl {
    async fn create_c_code(&self, code: &CCode) -> Result<CCode, RepositoryError> {
        let txn = self.db.begin().await?;
        prepare_write(&txn, &self.catalog, code).await?;

        let model = c_code_entity::ActiveModel::from(code)
            .insert(&txn)
            .await
            .map_err(|e| self.catalog.classify(e))?;
        txn.commit().await?;

        debug!(id = %model.id, code = %code, "C-Code created");
        Ok(model.into())
    }

    async fn find_c_code(&self, id: Uuid) -> Result<Option<CCode>, RepositoryError> {
        let model = c_code_entity::Entity::find_by_id(id).one(self.db.as_ref()).await?;
        Ok(model.map(Into::into))
    }

    async fn update_c_code(&self, code: &CCode) -> Result<CCode, RepositoryError> {
        let txn = self.db.begin().await?;
        ensure_exists(&txn, CCode::TABLE, code.id).await?;
        prepare_write(&txn, &self.catalog, code).await?;

        let model = c_code_entity::ActiveModel::from(code)
            .update(&txn)
            .await
            .map_err(|e| self.catalog.classify(e))?;
        txn.commit().await?;

        Ok(model.into())
    }

    async fn delete_c_code(&self, id: Uuid) -> Result<(), RepositoryError> {
        let txn = self.db.begin().await?;
        delete_row(&txn, &self.catalog, CCode::TABLE, id).await?;
        txn.commit().await?;

        debug!(%id, "C-Code deleted");
        Ok(())
    }

    async fn create_region(&self, region: &Region) -> Result<Region, RepositoryError> {
        let txn = self.db.begin().await?;
        prepare_write(&txn, &self.catalog, region).await?;

        let model = region_entity::ActiveModel::from(region)
            .insert(&txn)
            .await
            .map_err(|e| self.catalog.classify(e))?;
        txn.commit().await?;

        debug!(id = %model.id, name = %model.name, "Region created");
        Ok(model.into())
    }

    async fn find_region(&self, id: Uuid) -> Result<Option<Region>, RepositoryError> {
        let model = region_entity::Entity::find_by_id(id).one(self.db.as_ref()).await?;
        Ok(model.map(Into::into))
    }

    async fn update_region(&self, region: &Region) -> Result<Region, RepositoryError> {
        let txn = self.db.begin().await?;
        ensure_exists(&txn, Region::TABLE, region.id).await?;
        prepare_write(&txn, &self.catalog, region).await?;

        let model = region_entity::ActiveModel::from(region)
            .update(&txn)
            .await
            .map_err(|e| self.catalog.classify(e))?;
        txn.commit().await?;

        Ok(model.into())
    }

    async fn delete_region(&self, id: Uuid) -> Result<(), RepositoryError> {
        let txn = self.db.begin().await?;
        delete_row(&txn, &self.catalog, Region::TABLE, id).await?;
        txn.commit().await?;

        debug!(%id, "Region deleted");
        Ok(())
    }

    async fn create_prefix(&self, prefix: &Prefix) -> Result<Prefix, RepositoryError> {
        let txn = self.db.begin().await?;
        prepare_write(&txn, &self.catalog, prefix).await?;

        let model = prefix_entity::ActiveModel::from(prefix)
            .insert(&txn)
            .await
            .map_err(|e| self.catalog.classify(e))?;
        txn.commit().await?;

        debug!(id = %model.id, element = %model.element, "Prefix created");
        Ok(model.into())
    }

    async fn find_prefix(&self, id: Uuid) -> Result<Option<Prefix>, RepositoryError> {
        let model = prefix_entity::Entity::find_by_id(id).one(self.db.as_ref()).await?;
        Ok(model.map(Into::into))
    }

    async fn update_prefix(&self, prefix: &Prefix) -> Result<Prefix, RepositoryError> {
        let txn = self.db.begin().await?;
        ensure_exists(&txn, Prefix::TABLE, prefix.id).await?;
        prepare_write(&txn, &self.catalog, prefix).await?;

        let model = prefix_entity::ActiveModel::from(prefix)
            .update(&txn)
            .await
            .map_err(|e| self.catalog.classify(e))?;
        txn.commit().await?;

        Ok(model.into())
    }

    async fn delete_prefix(&self, id: Uuid) -> Result<(), RepositoryError> {
        let txn = self.db.begin().await?;
        delete_row(&txn, &self.catalog, Prefix::TABLE, id).await?;
        txn.commit().await?;

        debug!(%id, "Prefix deleted");
        Ok(())
    }

    async fn create_registration_group(&self, group: &RegistrationGroup) -> Result<RegistrationGroup, RepositoryError> {
        let txn = self.db.begin().await?;
        prepare_write(&txn, &self.catalog, group).await?;

        let model = registration_group_entity::ActiveModel::from(group)
            .insert(&txn)
            .await
            .map_err(|e| self.catalog.classify(e))?;
        txn.commit().await?;

        debug!(id = %model.id, element = %model.element, "Registration group created");
        Ok(model.into())
    }

    async fn find_registration_group(&self, id: Uuid) -> Result<Option<RegistrationGroup>, RepositoryError> {
        let model = registration_group_entity::Entity::find_by_id(id).one(self.db.as_ref()).await?;
        Ok(model.map(Into::into))
    }

    async fn update_registration_group(&self, group: &RegistrationGroup) -> Result<RegistrationGroup, RepositoryError> {
        let txn = self.db.begin().await?;
        ensure_exists(&txn, RegistrationGroup::TABLE, group.id).await?;
        prepare_write(&txn, &self.catalog, group).await?;

        let model = registration_group_entity::ActiveModel::from(group)
            .update(&txn)
            .await
            .map_err(|e| self.catalog.classify(e))?;
        txn.commit().await?;

        Ok(model.into())
    }

    async fn delete_registration_group(&self, id: Uuid) -> Result<(), RepositoryError> {
        let txn = self.db.begin().await?;
        delete_row(&txn, &self.catalog, RegistrationGroup::TABLE, id).await?;
        txn.commit().await?;

        debug!(%id, "Registration group deleted");
        Ok(())
    }

    async fn create_registrant(&self, registrant: &Registrant) -> Result<Registrant, RepositoryError> {
        let txn = self.db.begin().await?;
        prepare_write(&txn, &self.catalog, registrant).await?;

        let model = registrant_entity::ActiveModel::from(registrant)
            .insert(&txn)
            .await
            .map_err(|e| self.catalog.classify(e))?;
        txn.commit().await?;

        debug!(id = %model.id, element = %model.element, "Registrant created");
        Ok(model.into())
    }

    async fn find_registrant(&self, id: Uuid) -> Result<Option<Registrant>, RepositoryError> {
        let model = registrant_entity::Entity::find_by_id(id).one(self.db.as_ref()).await?;
        Ok(model.map(Into::into))
    }

    async fn update_registrant(&self, registrant: &Registrant) -> Result<Registrant, RepositoryError> {
        let txn = self.db.begin().await?;
        ensure_exists(&txn, Registrant::TABLE, registrant.id).await?;
        prepare_write(&txn, &self.catalog, registrant).await?;

        let model = registrant_entity::ActiveModel::from(registrant)
            .update(&txn)
            .await
            .map_err(|e| self.catalog.classify(e))?;
        txn.commit().await?;

        Ok(model.into())
    }

    async fn delete_registrant(&self, id: Uuid) -> Result<(), RepositoryError> {
        let txn = self.db.begin().await?;
        delete_row(&txn, &self.catalog, Registrant::TABLE, id).await?;
        txn.commit().await?;

        debug!(%id, "Registrant deleted");
        Ok(())
    }

    async fn create_publication(&self, publication: &Publication) -> Result<Publication, RepositoryError> {
        let txn = self.db.begin().await?;
        prepare_write(&txn, &self.catalog, publication).await?;

        let model = publication_entity::ActiveModel::from(publication)
            .insert(&txn)
            .await
            .map_err(|e| self.catalog.classify(e))?;
        txn.commit().await?;

        debug!(id = %model.id, element = %model.element, "Publication created");
        Ok(model.into())
    }

    async fn find_publication(&self, id: Uuid) -> Result<Option<Publication>, RepositoryError> {
        let model = publication_entity::Entity::find_by_id(id).one(self.db.as_ref()).await?;
        Ok(model.map(Into::into))
    }

    async fn update_publication(&self, publication: &Publication) -> Result<Publication, RepositoryError> {
        let txn = self.db.begin().await?;
        ensure_exists(&txn, Publication::TABLE, publication.id).await?;
        prepare_write(&txn, &self.catalog, publication).await?;

        let model = publication_entity::ActiveModel::from(publication)
            .update(&txn)
            .await
            .map_err(|e| self.catalog.classify(e))?;
        txn.commit().await?;

        Ok(model.into())
    }

    async fn delete_publication(&self, id: Uuid) -> Result<(), RepositoryError> {
        let txn = self.db.begin().await?;
        delete_row(&txn, &self.catalog, Publication::TABLE, id).await?;
        txn.commit().await?;

        debug!(%id, "Publication deleted");
        Ok(())
    }

    async fn create_publication_detail(&self, detail: &PublicationDetail) -> Result<PublicationDetail, RepositoryError> {
        let txn = self.db.begin().await?;
        prepare_write(&txn, &self.catalog, detail).await?;

        let model = publication_detail_entity::ActiveModel::from(detail)
            .insert(&txn)
            .await
            .map_err(|e| self.catalog.classify(e))?;
        txn.commit().await?;

        debug!(id = %model.id, price = model.price, "Publication detail created");
        Ok(model.into())
    }

    async fn find_publication_detail(&self, id: Uuid) -> Result<Option<PublicationDetail>, RepositoryError> {
        let model = publication_detail_entity::Entity::find_by_id(id).one(self.db.as_ref()).await?;
        Ok(model.map(Into::into))
    }

    async fn update_publication_detail(&self, detail: &PublicationDetail) -> Result<PublicationDetail, RepositoryError> {
        let txn = self.db.begin().await?;
        ensure_exists(&txn, PublicationDetail::TABLE, detail.id).await?;
        prepare_write(&txn, &self.catalog, detail).await?;

        let model = publication_detail_entity::ActiveModel::from(detail)
            .update(&txn)
            .await
            .map_err(|e| self.catalog.classify(e))?;
        txn.commit().await?;

        Ok(model.into())
    }

    async fn delete_publication_detail(&self, id: Uuid) -> Result<(), RepositoryError> {
        let txn = self.db.begin().await?;
        delete_row(&txn, &self.catalog, PublicationDetail::TABLE, id).await?;
        txn.commit().await?;

        debug!(%id, "Publication detail deleted");
        Ok(())
    }

    async fn list_region_groups(
        &self,
        region_id: Uuid,
    ) -> Result<Vec<RegistrationGroup>, RepositoryError> {
        let models = registration_group_entity::Entity::find()
            .filter(registration_group_entity::Column::RegionId.eq(region_id))
            .order_by_asc(registration_group_entity::Column::Element)
            .order_by_asc(registration_group_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn list_prefix_groups(
        &self,
        prefix_id: Uuid,
    ) -> Result<Vec<RegistrationGroup>, RepositoryError> {
        let models = registration_group_entity::Entity::find()
            .filter(registration_group_entity::Column::PrefixId.eq(prefix_id))
            .order_by_asc(registration_group_entity::Column::Element)
            .order_by_asc(registration_group_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn list_group_registrants(
        &self,
        registration_group_id: Uuid,
    ) -> Result<Vec<Registrant>, RepositoryError> {
        let models = registrant_entity::Entity::find()
            .filter(registrant_entity::Column::RegistrationGroupId.eq(registration_group_id))
            .order_by_asc(registrant_entity::Column::Element)
            .order_by_asc(registrant_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn list_publisher_registrants(
        &self,
        publisher_id: Uuid,
    ) -> Result<Vec<Registrant>, RepositoryError> {
        let models = registrant_entity::Entity::find()
            .filter(registrant_entity::Column::PublisherId.eq(publisher_id))
            .order_by_asc(registrant_entity::Column::Element)
            .order_by_asc(registrant_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn list_registrant_publications(
        &self,
        registrant_id: Uuid,
    ) -> Result<Vec<Publication>, RepositoryError> {
        let models = publication_entity::Entity::find()
            .filter(publication_entity::Column::RegistrantId.eq(registrant_id))
            .order_by_asc(publication_entity::Column::Element)
            .order_by_asc(publication_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_detail_by_publication(
        &self,
        publication_id: Uuid,
    ) -> Result<Option<PublicationDetail>, RepositoryError> {
        let model = publication_detail_entity::Entity::find()
            .filter(publication_detail_entity::Column::PublicationId.eq(publication_id))
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn find_detail_by_magazine(
        &self,
        magazine_id: Uuid,
    ) -> Result<Option<PublicationDetail>, RepositoryError> {
        let model = publication_detail_entity::Entity::find()
            .filter(publication_detail_entity::Column::MagazineId.eq(magazine_id))
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn list_label_details(
        &self,
        label_id: Uuid,
    ) -> Result<Vec<PublicationDetail>, RepositoryError> {
        let models = publication_detail_entity::Entity::find()
            .filter(publication_detail_entity::Column::LabelId.eq(label_id))
            .order_by_asc(publication_detail_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn list_c_code_details(
        &self,
        c_code_id: Uuid,
    ) -> Result<Vec<PublicationDetail>, RepositoryError> {
        let models = publication_detail_entity::Entity::find()
            .filter(publication_detail_entity::Column::CCodeId.eq(c_code_id))
            .order_by_asc(publication_detail_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn isbn_of_publication(
        &self,
        publication_id: Uuid,
    ) -> Result<Option<Isbn>, RepositoryError> {
        let db = self.db.as_ref();

        let publication = publication_entity::Entity::find_by_id(publication_id)
            .one(db)
            .await?
            .ok_or_else(|| RepositoryError::not_found(Publication::TABLE, publication_id))?;
        let registrant = registrant_entity::Entity::find_by_id(publication.registrant_id)
            .one(db)
            .await?
            .ok_or_else(|| RepositoryError::not_found(Registrant::TABLE, publication.registrant_id))?;
        let group = registration_group_entity::Entity::find_by_id(registrant.registration_group_id)
            .one(db)
            .await?
            .ok_or_else(|| RepositoryError::not_found(RegistrationGroup::TABLE, registrant.registration_group_id))?;

        let Some(prefix_id) = group.prefix_id else {
            debug!(group_id = %group.id, "Registration group has no prefix");
            return Ok(None);
        };
        let prefix = prefix_entity::Entity::find_by_id(prefix_id)
            .one(db)
            .await?
            .ok_or_else(|| RepositoryError::not_found(Prefix::TABLE, prefix_id))?;

        let isbn = Isbn::compose(
            &prefix.element,
            &group.element,
            &registrant.element,
            &publication.element,
        )
        .inspect_err(|e| warn!(%publication_id, error = %e, "ISBN elements do not add up"))?;

        Ok(Some(isbn))
    }
}
