// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::constraint::{Links, Row};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Publisher {
    pub id: Uuid,
    #[validate(length(max = 255))]
    pub image: Option<String>,
    #[serde(default)]
    pub links: Links,
    #[validate(length(max = 255))]
    pub name: String,
    #[validate(length(max = 255))]
    pub name_ruby: String,
}

impl Publisher {
    pub fn new(name: impl Into<String>, name_ruby: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            image: None,
            links: Links::new(),
            name: name.into(),
            name_ruby: name_ruby.into(),
        }
    }
}

impl Row for Publisher {
    const TABLE: &'static str = "publishers";
}

/// 出版社旗下的品牌（文库、书系）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Label {
    pub id: Uuid,
    #[validate(length(max = 255))]
    pub image: Option<String>,
    #[serde(default)]
    pub links: Links,
    #[validate(length(max = 255))]
    pub name: String,
    #[validate(length(max = 255))]
    pub name_ruby: String,
    pub publisher_id: Uuid,
}

impl Label {
    pub fn new(publisher_id: Uuid, name: impl Into<String>, name_ruby: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            image: None,
            links: Links::new(),
            name: name.into(),
            name_ruby: name_ruby.into(),
            publisher_id,
        }
    }
}

impl Row for Label {
    const TABLE: &'static str = "labels";

    fn references(&self) -> Vec<(&'static str, Option<Uuid>)> {
        vec![("publisher_id", Some(self.publisher_id))]
    }
}
