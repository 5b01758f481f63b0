// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::constraint::{ensure, ConstraintViolation, Row};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

pub const FORMAT_LENGTH_POSITIVE: &str = "length > 0";
pub const FORMAT_WIDTH_POSITIVE: &str = "width > 0";
pub const GENRE_DEPTH_NON_NEGATIVE: &str = "depth >= 0";
pub const GENRE_ROOT_DEPTH: &str = "depth = 0 when parent_id IS NULL";
pub const GENRE_DEPTH_FOLLOWS_PARENT: &str = "depth = parent.depth + 1";

/// 开本（如 A5、B6），以长宽毫米数与名称唯一确定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Format {
    pub id: Uuid,
    pub length: i32,
    #[validate(length(max = 31))]
    pub name: String,
    pub width: i32,
}

impl Format {
    pub fn new(length: i32, name: impl Into<String>, width: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            length,
            name: name.into(),
            width,
        }
    }
}

impl Row for Format {
    const TABLE: &'static str = "formats";
    const CHECKS: &'static [&'static str] = &[FORMAT_LENGTH_POSITIVE, FORMAT_WIDTH_POSITIVE];

    fn check_row(&self) -> Result<(), ConstraintViolation> {
        ensure(Self::TABLE, self.length > 0, FORMAT_LENGTH_POSITIVE, self.length)?;
        ensure(Self::TABLE, self.width > 0, FORMAT_WIDTH_POSITIVE, self.width)
    }
}

/// 体裁树节点
///
/// 根节点 `depth` 为 0，子节点为父节点 `depth + 1`。存储层只保证其非负，
/// 层级与成环由仓库在写入时沿祖先链检查，移动节点时其子树的 `depth` 随之平移。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Genre {
    pub id: Uuid,
    pub depth: i32,
    #[validate(length(max = 63))]
    pub name: String,
    pub parent_id: Option<Uuid>,
}

impl Genre {
    /// 创建根体裁
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            depth: 0,
            name: name.into(),
            parent_id: None,
        }
    }

    /// 在 `parent` 之下创建子体裁，深度为父节点加一
    pub fn child_of(parent: &Genre, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            depth: parent.depth + 1,
            name: name.into(),
            parent_id: Some(parent.id),
        }
    }

    /// 检查 `depth` 是否与父节点一致
    pub fn check_position(&self, parent: Option<&Genre>) -> Result<(), ConstraintViolation> {
        match parent {
            None => ensure(Self::TABLE, self.depth == 0, GENRE_ROOT_DEPTH, self.depth),
            Some(parent) => ensure(
                Self::TABLE,
                self.depth == parent.depth + 1,
                GENRE_DEPTH_FOLLOWS_PARENT,
                self.depth,
            ),
        }
    }
}

impl Row for Genre {
    const TABLE: &'static str = "genres";
    const CHECKS: &'static [&'static str] = &[GENRE_DEPTH_NON_NEGATIVE];

    fn check_row(&self) -> Result<(), ConstraintViolation> {
        ensure(Self::TABLE, self.depth >= 0, GENRE_DEPTH_NON_NEGATIVE, self.depth)
    }

    fn references(&self) -> Vec<(&'static str, Option<Uuid>)> {
        vec![("parent_id", self.parent_id)]
    }
}
