// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 引用完整性守卫
//!
//! 在仓库的写事务内执行：写入前校验外键指向的行存在，
//! 删除时按目录中的策略处理引用方（拒绝、级联删除或置空）。
//! 所有语句通过 sea-query 构建，兼容 SQLite 与 PostgreSQL。

use super::catalog::{Catalog, OnDelete};
use crate::domain::models::constraint::Row;
use crate::domain::repositories::error::RepositoryError;
use sea_orm::sea_query::{Alias, Expr, Query, SelectStatement};
use sea_orm::{ConnectionTrait, DbErr};
use tracing::{debug, warn};
use uuid::Uuid;

async fn count<C: ConnectionTrait>(conn: &C, stmt: &SelectStatement) -> Result<i64, DbErr> {
    let backend = conn.get_database_backend();
    match conn.query_one(backend.build(stmt)).await? {
        Some(row) => row.try_get::<i64>("", "n"),
        None => Ok(0),
    }
}

/// 统计 `table` 中 `column = id` 的行数
pub async fn count_rows<C: ConnectionTrait>(
    conn: &C,
    table: &str,
    column: &str,
    id: Uuid,
) -> Result<i64, DbErr> {
    let stmt = Query::select()
        .expr_as(Expr::col(Alias::new(column)).count(), Alias::new("n"))
        .from(Alias::new(table))
        .and_where(Expr::col(Alias::new(column)).eq(id))
        .to_owned();
    count(conn, &stmt).await
}

pub async fn row_exists<C: ConnectionTrait>(conn: &C, table: &str, id: Uuid) -> Result<bool, DbErr> {
    Ok(count_rows(conn, table, "id", id).await? > 0)
}

/// 目标行不存在时返回 `NotFound`
pub async fn ensure_exists<C: ConnectionTrait>(
    conn: &C,
    table: &str,
    id: Uuid,
) -> Result<(), RepositoryError> {
    if row_exists(conn, table, id).await? {
        Ok(())
    } else {
        Err(RepositoryError::not_found(table, id))
    }
}

/// 校验 `table` 上给出的外键值都指向已存在的行
///
/// `None` 表示可空外键未设置；对不可空外键传入 `None` 视为引用错误。
pub async fn check_references<C: ConnectionTrait>(
    conn: &C,
    catalog: &Catalog,
    table: &str,
    references: &[(&'static str, Option<Uuid>)],
) -> Result<(), RepositoryError> {
    for (column, value) in references {
        let fk = catalog.foreign_key(table, column).ok_or_else(|| {
            DbErr::Custom(format!("{}.{} is not a cataloged foreign key", table, column))
        })?;

        let Some(id) = value else {
            if !fk.nullable {
                return Err(RepositoryError::referential(
                    fk.table,
                    fk.column,
                    "value required",
                ));
            }
            continue;
        };

        if !row_exists(conn, fk.references, *id).await? {
            warn!(table = fk.table, column = fk.column, %id, "Dangling reference rejected");
            return Err(RepositoryError::referential(
                fk.table,
                fk.column,
                format!("no {} row with id {}", fk.references, id),
            ));
        }
    }
    Ok(())
}

/// 写入前的完整检查：检查约束在前，引用完整性在后
pub async fn prepare_write<C: ConnectionTrait, R: Row + Sync>(
    conn: &C,
    catalog: &Catalog,
    row: &R,
) -> Result<(), RepositoryError> {
    if let Err(violation) = row.check_constraints() {
        warn!(table = R::TABLE, constraint = %violation.constraint, "Check constraint rejected");
        return Err(violation.into());
    }
    check_references(conn, catalog, R::TABLE, &row.references()).await
}

/// 按目录中的删除策略删除 `table` 中的一行
///
/// 先检查所有 `Restrict` 引用，全部通过后再执行级联删除与置空，
/// 最后删除目标行。调用方负责提供事务并在成功后提交。
pub async fn delete_row<C: ConnectionTrait>(
    conn: &C,
    catalog: &Catalog,
    table: &str,
    id: Uuid,
) -> Result<(), RepositoryError> {
    ensure_exists(conn, table, id).await?;

    for fk in catalog
        .referencing(table)
        .filter(|fk| fk.on_delete == OnDelete::Restrict)
    {
        let n = count_rows(conn, fk.table, fk.column, id).await?;
        if n > 0 {
            warn!(table, %id, referenced_by = %fk.name(), "Delete restricted");
            return Err(RepositoryError::referential(
                fk.table,
                fk.column,
                format!("{} row(s) still reference {} {}", n, table, id),
            ));
        }
    }

    let backend = conn.get_database_backend();
    for fk in catalog.referencing(table) {
        let stmt = match fk.on_delete {
            OnDelete::Restrict => continue,
            OnDelete::Cascade => backend.build(
                &Query::delete()
                    .from_table(Alias::new(fk.table))
                    .and_where(Expr::col(Alias::new(fk.column)).eq(id))
                    .to_owned(),
            ),
            OnDelete::SetNull => backend.build(
                &Query::update()
                    .table(Alias::new(fk.table))
                    .value(Alias::new(fk.column), Option::<Uuid>::None)
                    .and_where(Expr::col(Alias::new(fk.column)).eq(id))
                    .to_owned(),
            ),
        };
        let affected = conn.execute(stmt).await?.rows_affected();
        if affected > 0 {
            debug!(table = fk.table, column = fk.column, affected, policy = ?fk.on_delete, "Applied delete policy");
        }
    }

    let stmt = Query::delete()
        .from_table(Alias::new(table))
        .and_where(Expr::col(Alias::new("id")).eq(id))
        .to_owned();
    conn.execute(backend.build(&stmt)).await?;
    Ok(())
}

/// 删除关联表中由 `key` 确定的一行，不存在时返回 `NotFound`
pub async fn delete_link<C: ConnectionTrait>(
    conn: &C,
    table: &str,
    key: &[(&str, Uuid)],
) -> Result<(), RepositoryError> {
    let mut stmt = Query::delete();
    stmt.from_table(Alias::new(table));
    for (column, id) in key {
        stmt.and_where(Expr::col(Alias::new(*column)).eq(*id));
    }

    let backend = conn.get_database_backend();
    let affected = conn.execute(backend.build(&stmt)).await?.rows_affected();
    if affected == 0 {
        let key = key
            .iter()
            .map(|(column, id)| format!("{}={}", column, id))
            .collect::<Vec<_>>()
            .join(", ");
        return Err(RepositoryError::not_found(table, key));
    }
    Ok(())
}

/// 确认目录中的每张表都可查询，返回各表行数
pub async fn verify_schema<C: ConnectionTrait>(
    conn: &C,
    catalog: &Catalog,
) -> Result<Vec<(&'static str, i64)>, DbErr> {
    let mut counts = Vec::with_capacity(catalog.tables().len());
    for table in catalog.tables() {
        let stmt = Query::select()
            .expr_as(Expr::cust("COUNT(*)"), Alias::new("n"))
            .from(Alias::new(table.name))
            .to_owned();
        counts.push((table.name, count(conn, &stmt).await?));
    }
    Ok(counts)
}
