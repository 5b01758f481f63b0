// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::error::RepositoryError;
use crate::domain::models::catalog::{Format, Genre};
use async_trait::async_trait;
use uuid::Uuid;

/// 书目基础仓库特质
///
/// 管理开本与体裁树。体裁写入时检查父链不成环，
/// 删除仍有子体裁的节点会被拒绝。
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn create_format(&self, format: &Format) -> Result<Format, RepositoryError>;
    async fn find_format(&self, id: Uuid) -> Result<Option<Format>, RepositoryError>;
    async fn update_format(&self, format: &Format) -> Result<Format, RepositoryError>;
    async fn delete_format(&self, id: Uuid) -> Result<(), RepositoryError>;
    /// 按长、宽、名称排序列出全部开本
    async fn list_formats(&self) -> Result<Vec<Format>, RepositoryError>;

    async fn create_genre(&self, genre: &Genre) -> Result<Genre, RepositoryError>;
    async fn find_genre(&self, id: Uuid) -> Result<Option<Genre>, RepositoryError>;
    /// 更新体裁，重新指定父节点时进行环检测
    async fn update_genre(&self, genre: &Genre) -> Result<Genre, RepositoryError>;
    async fn delete_genre(&self, id: Uuid) -> Result<(), RepositoryError>;
    /// 列出直接子体裁
    async fn list_genre_children(&self, genre_id: Uuid) -> Result<Vec<Genre>, RepositoryError>;
    /// 列出祖先体裁，最近的父节点在前
    async fn list_genre_ancestors(&self, genre_id: Uuid) -> Result<Vec<Genre>, RepositoryError>;
}
