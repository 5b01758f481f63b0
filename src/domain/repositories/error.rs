// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::constraint::ConstraintViolation;
use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

/// 仓库错误类型
///
/// 约束类错误原样返回给调用方，不做重试或本地恢复。
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 唯一键冲突
    #[error("Duplicate key on {table} ({})", columns.join(", "))]
    DuplicateKey { table: String, columns: Vec<String> },
    /// 检查约束违反
    #[error(transparent)]
    ConstraintViolation(#[from] ConstraintViolation),
    /// 引用完整性错误：引用不存在的行，或删除仍被引用的行
    #[error("Referential integrity violated on {table}.{column}: {detail}")]
    ReferentialIntegrityError {
        table: String,
        column: String,
        detail: String,
    },
    /// 体裁树出现环
    #[error("Genre {genre_id} cannot have {parent_id} as parent: cycle detected")]
    CycleDetected { genre_id: Uuid, parent_id: Uuid },
    /// 记录未找到
    #[error("Record not found in {table}: {key}")]
    NotFound { table: String, key: String },
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl RepositoryError {
    pub fn not_found(table: &str, key: impl ToString) -> Self {
        Self::NotFound {
            table: table.to_string(),
            key: key.to_string(),
        }
    }

    pub fn referential(table: &str, column: &str, detail: impl Into<String>) -> Self {
        Self::ReferentialIntegrityError {
            table: table.to_string(),
            column: column.to_string(),
            detail: detail.into(),
        }
    }

    /// 是否属于约束类错误（而非底层数据库故障）
    pub fn is_constraint(&self) -> bool {
        !matches!(self, Self::Database(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = RepositoryError::DuplicateKey {
            table: "formats".to_string(),
            columns: vec!["length".to_string(), "name".to_string(), "width".to_string()],
        };
        assert_eq!(err.to_string(), "Duplicate key on formats (length, name, width)");

        let err = RepositoryError::not_found("genres", "42");
        assert_eq!(err.to_string(), "Record not found in genres: 42");
        assert!(err.is_constraint());

        let err = RepositoryError::from(ConstraintViolation::new("formats", "width > 0", 0));
        assert_eq!(err.to_string(), "formats: constraint `width > 0` violated by 0");
    }

    #[test]
    fn test_database_errors_are_not_constraints() {
        let err = RepositoryError::from(DbErr::Custom("boom".to_string()));
        assert!(!err.is_constraint());
    }
}
