// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库实现模块
///
/// 提供领域仓库接口的 SeaORM 实现。每个写操作在单个事务内完成：
/// 检查约束 → 引用完整性 → 写入（唯一约束由数据库判定并经目录归类）→ 提交。
pub mod book_repo_impl;
pub mod catalog_repo_impl;
pub mod creator_repo_impl;
pub mod event_repo_impl;
pub mod isbn_repo_impl;
pub mod publisher_repo_impl;

use crate::domain::repositories::error::RepositoryError;
use crate::infrastructure::database::catalog::Catalog;
use crate::infrastructure::database::integrity::{check_references, delete_link};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, TransactionTrait,
};
use tracing::debug;
use uuid::Uuid;

/// 在关联表中插入一行，两端外键先行校验
///
/// 重复的关联由复合主键拒绝，归类为 `DuplicateKey`
pub(crate) async fn insert_link<A>(
    db: &DatabaseConnection,
    catalog: &Catalog,
    table: &str,
    references: &[(&'static str, Option<Uuid>)],
    row: A,
) -> Result<(), RepositoryError>
where
    A: ActiveModelTrait + Send,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
{
    let txn = db.begin().await?;
    check_references(&txn, catalog, table, references).await?;

    <A::Entity as EntityTrait>::insert(row)
        .exec_without_returning(&txn)
        .await
        .map_err(|e| catalog.classify(e))?;
    txn.commit().await?;

    debug!(table, "Link created");
    Ok(())
}

/// 删除关联表中的一行，不存在时返回 `NotFound`
pub(crate) async fn remove_link(
    db: &DatabaseConnection,
    table: &str,
    key: &[(&str, Uuid)],
) -> Result<(), RepositoryError> {
    let txn = db.begin().await?;
    delete_link(&txn, table, key).await?;
    txn.commit().await?;

    debug!(table, "Link removed");
    Ok(())
}
