// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::error::RepositoryError;
use crate::domain::models::isbn::{
    CCode, Isbn, Prefix, Publication, PublicationDetail, Region, Registrant, RegistrationGroup,
};
use async_trait::async_trait;
use uuid::Uuid;

/// ISBN 仓库特质
///
/// 登记链 地区/前缀 → 登记组 → 出版者记号 → 书名记号 → 发行信息
/// 上的每一级都拒绝删除仍被下级引用的行。
#[async_trait]
pub trait IsbnRepository: Send + Sync {
    async fn create_c_code(&self, c_code: &CCode) -> Result<CCode, RepositoryError>;
    async fn find_c_code(&self, id: Uuid) -> Result<Option<CCode>, RepositoryError>;
    async fn update_c_code(&self, c_code: &CCode) -> Result<CCode, RepositoryError>;
    async fn delete_c_code(&self, id: Uuid) -> Result<(), RepositoryError>;

    async fn create_region(&self, region: &Region) -> Result<Region, RepositoryError>;
    async fn find_region(&self, id: Uuid) -> Result<Option<Region>, RepositoryError>;
    async fn update_region(&self, region: &Region) -> Result<Region, RepositoryError>;
    async fn delete_region(&self, id: Uuid) -> Result<(), RepositoryError>;

    async fn create_prefix(&self, prefix: &Prefix) -> Result<Prefix, RepositoryError>;
    async fn find_prefix(&self, id: Uuid) -> Result<Option<Prefix>, RepositoryError>;
    async fn update_prefix(&self, prefix: &Prefix) -> Result<Prefix, RepositoryError>;
    async fn delete_prefix(&self, id: Uuid) -> Result<(), RepositoryError>;

    async fn create_registration_group(
        &self,
        group: &RegistrationGroup,
    ) -> Result<RegistrationGroup, RepositoryError>;
    async fn find_registration_group(
        &self,
        id: Uuid,
    ) -> Result<Option<RegistrationGroup>, RepositoryError>;
    async fn update_registration_group(
        &self,
        group: &RegistrationGroup,
    ) -> Result<RegistrationGroup, RepositoryError>;
    async fn delete_registration_group(&self, id: Uuid) -> Result<(), RepositoryError>;

    async fn create_registrant(&self, registrant: &Registrant) -> Result<Registrant, RepositoryError>;
    async fn find_registrant(&self, id: Uuid) -> Result<Option<Registrant>, RepositoryError>;
    async fn update_registrant(&self, registrant: &Registrant) -> Result<Registrant, RepositoryError>;
    async fn delete_registrant(&self, id: Uuid) -> Result<(), RepositoryError>;

    async fn create_publication(
        &self,
        publication: &Publication,
    ) -> Result<Publication, RepositoryError>;
    async fn find_publication(&self, id: Uuid) -> Result<Option<Publication>, RepositoryError>;
    async fn update_publication(
        &self,
        publication: &Publication,
    ) -> Result<Publication, RepositoryError>;
    async fn delete_publication(&self, id: Uuid) -> Result<(), RepositoryError>;

    async fn create_publication_detail(
        &self,
        detail: &PublicationDetail,
    ) -> Result<PublicationDetail, RepositoryError>;
    async fn find_publication_detail(
        &self,
        id: Uuid,
    ) -> Result<Option<PublicationDetail>, RepositoryError>;
    async fn update_publication_detail(
        &self,
        detail: &PublicationDetail,
    ) -> Result<PublicationDetail, RepositoryError>;
    async fn delete_publication_detail(&self, id: Uuid) -> Result<(), RepositoryError>;

    async fn list_region_groups(
        &self,
        region_id: Uuid,
    ) -> Result<Vec<RegistrationGroup>, RepositoryError>;
    async fn list_prefix_groups(
        &self,
        prefix_id: Uuid,
    ) -> Result<Vec<RegistrationGroup>, RepositoryError>;
    async fn list_group_registrants(
        &self,
        registration_group_id: Uuid,
    ) -> Result<Vec<Registrant>, RepositoryError>;
    async fn list_publisher_registrants(
        &self,
        publisher_id: Uuid,
    ) -> Result<Vec<Registrant>, RepositoryError>;
    async fn list_registrant_publications(
        &self,
        registrant_id: Uuid,
    ) -> Result<Vec<Publication>, RepositoryError>;
    async fn find_detail_by_publication(
        &self,
        publication_id: Uuid,
    ) -> Result<Option<PublicationDetail>, RepositoryError>;
    async fn find_detail_by_magazine(
        &self,
        magazine_id: Uuid,
    ) -> Result<Option<PublicationDetail>, RepositoryError>;
    async fn list_label_details(
        &self,
        label_id: Uuid,
    ) -> Result<Vec<PublicationDetail>, RepositoryError>;
    async fn list_c_code_details(
        &self,
        c_code_id: Uuid,
    ) -> Result<Vec<PublicationDetail>, RepositoryError>;

    /// 沿登记链拼出出版物的 ISBN-13
    ///
    /// 登记组未关联前缀时返回 `Ok(None)`；出版物不存在时返回 `NotFound`。
    async fn isbn_of_publication(&self, publication_id: Uuid)
        -> Result<Option<Isbn>, RepositoryError>;
}
