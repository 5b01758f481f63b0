// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::constraint::{Links, Row};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// 作者角色（作画、原作、编辑等），名称唯一
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CreatorRole {
    pub id: Uuid,
    #[validate(length(max = 31))]
    pub name: String,
}

impl CreatorRole {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

impl Row for CreatorRole {
    const TABLE: &'static str = "creator_roles";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Creator {
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

impl Creator {
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

impl Row for Creator {
    const TABLE: &'static str = "creators";
}

/// 同人社团
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Circle {
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

impl Circle {
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

impl Row for Circle {
    const TABLE: &'static str = "circles";
}
