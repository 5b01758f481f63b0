// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::catalog::{Format, Genre};
use crate::domain::models::constraint::Row;
use crate::domain::repositories::catalog_repository::CatalogRepository;
use crate::domain::repositories::error::RepositoryError;
use crate::infrastructure::database::catalog::Catalog;
use crate::infrastructure::database::entities::{format as format_entity, genre as genre_entity};
use crate::infrastructure::database::integrity::{delete_row, ensure_exists, prepare_write};
use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::*;
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

/// 书目基础仓库实现
pub struct CatalogRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
    /// 模式目录
    catalog: Arc<Catalog>,
}

impl CatalogRepositoryImpl {
    /// 创建新的书目基础仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    /// * `catalog` - 模式目录
    pub fn new(db: Arc<DatabaseConnection>, catalog: Arc<Catalog>) -> Self {
        Self { db, catalog }
    }
}

/// 校验体裁在树中的位置
///
/// 沿 `parent_id` 向上遍历，遇到自身即判定成环，步数以体裁总数为上限，
/// 已有数据中的环也能终止遍历。遍历时取得的直接父节点用于校验 `depth`。
async fn ensure_tree_position<C: ConnectionTrait>(
    conn: &C,
    genre: &Genre,
) -> Result<(), RepositoryError> {
    let Some(parent_id) = genre.parent_id else {
        return Ok(genre.check_position(None)?);
    };

    let limit = genre_entity::Entity::find().count(conn).await?;
    let mut parent: Option<Genre> = None;
    let mut cursor = Some(parent_id);
    let mut steps: u64 = 0;

    while let Some(current) = cursor {
        if current == genre.id || steps > limit {
            warn!(genre_id = %genre.id, %parent_id, "Genre cycle rejected");
            return Err(RepositoryError::CycleDetected {
                genre_id: genre.id,
                parent_id,
            });
        }
        let model = genre_entity::Entity::find_by_id(current).one(conn).await?;
        cursor = model.as_ref().and_then(|m| m.parent_id);
        if parent.is_none() {
            parent = model.map(Genre::from);
        }
        steps += 1;
    }

    let parent = parent.ok_or_else(|| RepositoryError::not_found(Genre::TABLE, parent_id))?;
    if let Err(violation) = genre.check_position(Some(&parent)) {
        warn!(genre_id = %genre.id, depth = genre.depth, parent_depth = parent.depth, "Genre depth rejected");
        return Err(violation.into());
    }
    Ok(())
}

/// 将 `genre_id` 的全部后代的 `depth` 平移 `shift`
///
/// 调用前已确认树中无环。
async fn shift_descendants<C: ConnectionTrait>(
    conn: &C,
    catalog: &Catalog,
    genre_id: Uuid,
    shift: i32,
) -> Result<u64, RepositoryError> {
    let mut frontier = vec![genre_id];
    let mut descendants: Vec<Uuid> = Vec::new();

    while !frontier.is_empty() {
        let children: Vec<Uuid> = genre_entity::Entity::find()
            .select_only()
            .column(genre_entity::Column::Id)
            .filter(genre_entity::Column::ParentId.is_in(frontier))
            .into_tuple()
            .all(conn)
            .await?;
        descendants.extend(children.iter().copied());
        frontier = children;
    }

    if descendants.is_empty() {
        return Ok(0);
    }

    let result = genre_entity::Entity::update_many()
        .col_expr(
            genre_entity::Column::Depth,
            Expr::col(genre_entity::Column::Depth).add(shift),
        )
        .filter(genre_entity::Column::Id.is_in(descendants))
        .exec(conn)
        .await
        .map_err(|e| catalog.classify(e))?;
    Ok(result.rows_affected)
}

#[async_trait]
impl CatalogRepository for CatalogRepositoryImpl {
    async fn create_format(&self, format: &Format) -> Result<Format, RepositoryError> {
        let txn = self.db.begin().await?;
        prepare_write(&txn, &self.catalog, format).await?;

        let model = format_entity::ActiveModel::from(format)
            .insert(&txn)
            .await
            .map_err(|e| self.catalog.classify(e))?;
        txn.commit().await?;

        debug!(id = %model.id, name = %model.name, "Format created");
        Ok(model.into())
    }

    async fn find_format(&self, id: Uuid) -> Result<Option<Format>, RepositoryError> {
        let model = format_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn update_format(&self, format: &Format) -> Result<Format, RepositoryError> {
        let txn = self.db.begin().await?;
        ensure_exists(&txn, Format::TABLE, format.id).await?;
        prepare_write(&txn, &self.catalog, format).await?;

        let model = format_entity::ActiveModel::from(format)
            .update(&txn)
            .await
            .map_err(|e| self.catalog.classify(e))?;
        txn.commit().await?;

        Ok(model.into())
    }

    async fn delete_format(&self, id: Uuid) -> Result<(), RepositoryError> {
        let txn = self.db.begin().await?;
        delete_row(&txn, &self.catalog, Format::TABLE, id).await?;
        txn.commit().await?;

        debug!(%id, "Format deleted");
        Ok(())
    }

    async fn list_formats(&self) -> Result<Vec<Format>, RepositoryError> {
        let models = format_entity::Entity::find()
            .order_by_asc(format_entity::Column::Length)
            .order_by_asc(format_entity::Column::Width)
            .order_by_asc(format_entity::Column::Name)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn create_genre(&self, genre: &Genre) -> Result<Genre, RepositoryError> {
        let txn = self.db.begin().await?;
        prepare_write(&txn, &self.catalog, genre).await?;
        ensure_tree_position(&txn, genre).await?;

        let model = genre_entity::ActiveModel::from(genre)
            .insert(&txn)
            .await
            .map_err(|e| self.catalog.classify(e))?;
        txn.commit().await?;

        debug!(id = %model.id, name = %model.name, depth = model.depth, "Genre created");
        Ok(model.into())
    }

    async fn find_genre(&self, id: Uuid) -> Result<Option<Genre>, RepositoryError> {
        let model = genre_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn update_genre(&self, genre: &Genre) -> Result<Genre, RepositoryError> {
        let txn = self.db.begin().await?;
        let previous = genre_entity::Entity::find_by_id(genre.id)
            .one(&txn)
            .await?
            .ok_or_else(|| RepositoryError::not_found(Genre::TABLE, genre.id))?;
        prepare_write(&txn, &self.catalog, genre).await?;
        ensure_tree_position(&txn, genre).await?;

        let model = genre_entity::ActiveModel::from(genre)
            .update(&txn)
            .await
            .map_err(|e| self.catalog.classify(e))?;
        let shift = model.depth - previous.depth;
        if shift != 0 {
            let moved = shift_descendants(&txn, &self.catalog, model.id, shift).await?;
            debug!(id = %model.id, shift, moved, "Genre subtree depth shifted");
        }
        txn.commit().await?;

        Ok(model.into())
    }

    async fn delete_genre(&self, id: Uuid) -> Result<(), RepositoryError> {
        let txn = self.db.begin().await?;
        delete_row(&txn, &self.catalog, Genre::TABLE, id).await?;
        txn.commit().await?;

        debug!(%id, "Genre deleted");
        Ok(())
    }

    async fn list_genre_children(&self, genre_id: Uuid) -> Result<Vec<Genre>, RepositoryError> {
        let models = genre_entity::Entity::find()
            .filter(genre_entity::Column::ParentId.eq(genre_id))
            .order_by_asc(genre_entity::Column::Name)
            .order_by_asc(genre_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn list_genre_ancestors(&self, genre_id: Uuid) -> Result<Vec<Genre>, RepositoryError> {
        let db = self.db.as_ref();
        let genre = genre_entity::Entity::find_by_id(genre_id)
            .one(db)
            .await?
            .ok_or_else(|| RepositoryError::not_found(Genre::TABLE, genre_id))?;

        let limit = genre_entity::Entity::find().count(db).await?;
        let mut ancestors: Vec<Genre> = Vec::new();
        let mut cursor = genre.parent_id;

        while let Some(parent_id) = cursor {
            if ancestors.len() as u64 >= limit {
                return Err(RepositoryError::CycleDetected {
                    genre_id,
                    parent_id,
                });
            }
            let parent = genre_entity::Entity::find_by_id(parent_id)
                .one(db)
                .await?
                .ok_or_else(|| RepositoryError::not_found(Genre::TABLE, parent_id))?;
            cursor = parent.parent_id;
            ancestors.push(parent.into());
        }

        Ok(ancestors)
    }
}
