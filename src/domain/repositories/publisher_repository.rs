// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::error::RepositoryError;
use crate::domain::models::publisher::{Label, Publisher};
use async_trait::async_trait;
use uuid::Uuid;

/// 出版社仓库特质
///
/// 仍有品牌或出版者记号引用的出版社不可删除。
#[async_trait]
pub trait PublisherRepository: Send + Sync {
    async fn create_publisher(&self, publisher: &Publisher) -> Result<Publisher, RepositoryError>;
    async fn find_publisher(&self, id: Uuid) -> Result<Option<Publisher>, RepositoryError>;
    async fn update_publisher(&self, publisher: &Publisher) -> Result<Publisher, RepositoryError>;
    async fn delete_publisher(&self, id: Uuid) -> Result<(), RepositoryError>;

    async fn create_label(&self, label: &Label) -> Result<Label, RepositoryError>;
    async fn find_label(&self, id: Uuid) -> Result<Option<Label>, RepositoryError>;
    async fn update_label(&self, label: &Label) -> Result<Label, RepositoryError>;
    async fn delete_label(&self, id: Uuid) -> Result<(), RepositoryError>;
    async fn list_publisher_labels(&self, publisher_id: Uuid) -> Result<Vec<Label>, RepositoryError>;
}
