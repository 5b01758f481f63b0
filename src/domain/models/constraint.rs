// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt::Display;
use std::ops::RangeInclusive;
use thiserror::Error;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

/// 标签到 URL 的外部链接集合，按标签排序存储
pub type Links = BTreeMap<String, String>;

static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// 检查约束违反
///
/// `constraint` 与迁移中声明的 CHECK 表达式（或字段长度规则）一致，
/// `value` 为触发违反的值的文本形式。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{table}: constraint `{constraint}` violated by {value}")]
pub struct ConstraintViolation {
    pub table: String,
    pub constraint: String,
    pub value: String,
}

impl ConstraintViolation {
    pub fn new(table: &str, constraint: &str, value: impl Display) -> Self {
        Self {
            table: table.to_string(),
            constraint: constraint.to_string(),
            value: value.to_string(),
        }
    }

    /// 将 validator 的字段错误折叠为单个违反
    ///
    /// 字段按名称排序后取第一个，保证同一输入总是报告同一约束。
    pub fn from_validation(table: &str, errors: &ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        for (field, field_errors) in fields {
            if let Some(error) = field_errors.first() {
                let value = error
                    .params
                    .get("value")
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "?".to_string());
                return Self::new(table, &format!("{} {}", field, error.code), value);
            }
        }

        Self::new(table, "validation", errors)
    }
}

/// 当 `holds` 为假时返回以 `constraint` 命名的违反
pub fn ensure(
    table: &str,
    holds: bool,
    constraint: &str,
    value: impl Display,
) -> Result<(), ConstraintViolation> {
    if holds {
        Ok(())
    } else {
        Err(ConstraintViolation::new(table, constraint, value))
    }
}

/// 是否为长度落在 `len` 内的纯数字串
pub fn is_digits(value: &str, len: RangeInclusive<usize>) -> bool {
    len.contains(&value.len()) && DIGITS.is_match(value)
}

/// 持久化行的公共约束接口
///
/// 每个实体声明自己的表名、行级检查表达式以及外键列，
/// 仓库在写事务开始前调用 [`Row::check_constraints`]，
/// 并在事务内依据 [`Row::references`] 校验被引用的行是否存在。
pub trait Row: Validate {
    const TABLE: &'static str;

    /// 行级 CHECK 表达式，与迁移中的声明一致
    const CHECKS: &'static [&'static str] = &[];

    fn check_row(&self) -> Result<(), ConstraintViolation> {
        Ok(())
    }

    /// 外键列及其取值，`None` 表示可空外键未设置
    fn references(&self) -> Vec<(&'static str, Option<Uuid>)> {
        Vec::new()
    }

    fn check_constraints(&self) -> Result<(), ConstraintViolation> {
        self.validate()
            .map_err(|errors| ConstraintViolation::from_validation(Self::TABLE, &errors))?;
        self.check_row()
    }
}
