// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::error::RepositoryError;
use crate::domain::models::book::Series;
use crate::domain::models::creator::{Circle, Creator, CreatorRole};
use async_trait::async_trait;
use uuid::Uuid;

/// 作者仓库特质
///
/// 管理作者角色、作者、社团，以及三组多对多关联：
/// 社团成员、作者角色、系列作者。关联重复建立返回 `DuplicateKey`，
/// 移除不存在的关联返回 `NotFound`。
#[async_trait]
pub trait CreatorRepository: Send + Sync {
    async fn create_creator_role(&self, role: &CreatorRole) -> Result<CreatorRole, RepositoryError>;
    async fn find_creator_role(&self, id: Uuid) -> Result<Option<CreatorRole>, RepositoryError>;
    async fn find_creator_role_by_name(
        &self,
        name: &str,
    ) -> Result<Option<CreatorRole>, RepositoryError>;
    async fn update_creator_role(&self, role: &CreatorRole) -> Result<CreatorRole, RepositoryError>;
    async fn delete_creator_role(&self, id: Uuid) -> Result<(), RepositoryError>;

    async fn create_creator(&self, creator: &Creator) -> Result<Creator, RepositoryError>;
    async fn find_creator(&self, id: Uuid) -> Result<Option<Creator>, RepositoryError>;
    async fn update_creator(&self, creator: &Creator) -> Result<Creator, RepositoryError>;
    async fn delete_creator(&self, id: Uuid) -> Result<(), RepositoryError>;

    async fn create_circle(&self, circle: &Circle) -> Result<Circle, RepositoryError>;
    async fn find_circle(&self, id: Uuid) -> Result<Option<Circle>, RepositoryError>;
    async fn update_circle(&self, circle: &Circle) -> Result<Circle, RepositoryError>;
    async fn delete_circle(&self, id: Uuid) -> Result<(), RepositoryError>;

    async fn add_circle_member(&self, circle_id: Uuid, creator_id: Uuid)
        -> Result<(), RepositoryError>;
    async fn remove_circle_member(
        &self,
        circle_id: Uuid,
        creator_id: Uuid,
    ) -> Result<(), RepositoryError>;
    async fn list_circle_members(&self, circle_id: Uuid) -> Result<Vec<Creator>, RepositoryError>;
    async fn list_creator_circles(&self, creator_id: Uuid) -> Result<Vec<Circle>, RepositoryError>;

    async fn grant_creator_role(
        &self,
        creator_id: Uuid,
        creator_role_id: Uuid,
    ) -> Result<(), RepositoryError>;
    async fn revoke_creator_role(
        &self,
        creator_id: Uuid,
        creator_role_id: Uuid,
    ) -> Result<(), RepositoryError>;
    async fn list_creator_roles_of(
        &self,
        creator_id: Uuid,
    ) -> Result<Vec<CreatorRole>, RepositoryError>;
    async fn list_creators_with_role(
        &self,
        creator_role_id: Uuid,
    ) -> Result<Vec<Creator>, RepositoryError>;

    async fn add_series_creator(&self, series_id: Uuid, creator_id: Uuid)
        -> Result<(), RepositoryError>;
    async fn remove_series_creator(
        &self,
        series_id: Uuid,
        creator_id: Uuid,
    ) -> Result<(), RepositoryError>;
    async fn list_series_creators(&self, series_id: Uuid) -> Result<Vec<Creator>, RepositoryError>;
    async fn list_creator_series(&self, creator_id: Uuid) -> Result<Vec<Series>, RepositoryError>;
}
