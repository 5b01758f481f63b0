// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 数据库实体模块
//!
//! 每张表对应一个 SeaORM 实体，并提供与领域模型之间的双向转换。
//! 关联表（books_genres 等）以两个外键组成复合主键。

use crate::domain::models::constraint::Links;
use sea_orm::entity::prelude::{Json, Uuid};
use tracing::warn;

pub mod book;
pub mod books_creators;
pub mod books_genres;
pub mod c_code;
pub mod circle;
pub mod circles_creators;
pub mod creator;
pub mod creator_role;
pub mod creator_roles_creators;
pub mod creators_series;
pub mod event;
pub mod event_series;
pub mod fanzine;
pub mod format;
pub mod genre;
pub mod label;
pub mod magazine;
pub mod prefix;
pub mod publication;
pub mod publication_detail;
pub mod publisher;
pub mod region;
pub mod registrant;
pub mod registration_group;
pub mod series;

/// 链接集合写入 JSON 列
pub(crate) fn links_to_json(links: &Links) -> Json {
    Json::Object(
        links
            .iter()
            .map(|(label, url)| (label.clone(), Json::String(url.clone())))
            .collect(),
    )
}

/// 从 JSON 列读取链接集合
///
/// 列内容不是字符串到字符串的对象时记录告警并返回空集合
pub(crate) fn links_from_json(table: &str, id: Uuid, value: Json) -> Links {
    serde_json::from_value::<Links>(value).unwrap_or_else(|e| {
        warn!(table, %id, error = %e, "Malformed links column ignored");
        Links::new()
    })
}
