// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::constraint::{ensure, is_digits, ConstraintViolation, Row};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;
use validator::Validate;

pub const C_CODE_TARGET: &str = "(length(target) = 1) AND (target BETWEEN '0' AND '9')";
pub const C_CODE_FORMAT: &str = "(length(format) = 1) AND (format BETWEEN '0' AND '9')";
pub const C_CODE_CONTENT: &str = "(length(content) = 2) AND (content BETWEEN '00' AND '99')";
pub const PREFIX_LENGTH: &str = "length(element) = 3";
pub const PREFIX_RANGE: &str = "element BETWEEN '000' AND '999'";
pub const ELEMENT_LENGTH: &str = "length(element) BETWEEN 1 AND 7";
pub const ELEMENT_RANGE: &str = "element BETWEEN '0000000' AND '9999999'";
pub const PRICE_NON_NEGATIVE: &str = "price >= 0";

/// ISBN-13 中前缀、登记组、出版者与出版物四段数字的总长度
pub const ISBN_BODY_DIGITS: usize = 12;

/// 检查 1~7 位数字的 ISBN 段，长度与数字性分别报告
fn check_element(table: &str, element: &str) -> Result<(), ConstraintViolation> {
    ensure(
        table,
        (1..=7).contains(&element.chars().count()),
        ELEMENT_LENGTH,
        element,
    )?;
    ensure(table, is_digits(element, 1..=7), ELEMENT_RANGE, element)
}

/// 日本图书分类码（C 码）：对象、形态、内容
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CCode {
    pub id: Uuid,
    pub target: String,
    pub format: String,
    pub content: String,
}

impl CCode {
    pub fn new(
        target: impl Into<String>,
        format: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            target: target.into(),
            format: format.into(),
            content: content.into(),
        }
    }
}

/// 印刷形式，如 `C0093`
impl fmt::Display for CCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{}{}{}", self.target, self.format, self.content)
    }
}

impl Row for CCode {
    const TABLE: &'static str = "c_codes";
    const CHECKS: &'static [&'static str] = &[C_CODE_TARGET, C_CODE_FORMAT, C_CODE_CONTENT];

    fn check_row(&self) -> Result<(), ConstraintViolation> {
        ensure(Self::TABLE, is_digits(&self.target, 1..=1), C_CODE_TARGET, &self.target)?;
        ensure(Self::TABLE, is_digits(&self.format, 1..=1), C_CODE_FORMAT, &self.format)?;
        ensure(Self::TABLE, is_digits(&self.content, 2..=2), C_CODE_CONTENT, &self.content)
    }
}

/// 登记组所属的国家或语言地区
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Region {
    pub id: Uuid,
    #[validate(length(max = 255))]
    pub image: Option<String>,
    #[validate(length(max = 31))]
    pub name: String,
}

impl Region {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            image: None,
            name: name.into(),
        }
    }
}

impl Row for Region {
    const TABLE: &'static str = "regions";
}

/// GS1 前缀（978 / 979）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Prefix {
    pub id: Uuid,
    pub element: String,
}

impl Prefix {
    pub fn new(element: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            element: element.into(),
        }
    }
}

impl Row for Prefix {
    const TABLE: &'static str = "prefixes";
    const CHECKS: &'static [&'static str] = &[PREFIX_LENGTH, PREFIX_RANGE];

    fn check_row(&self) -> Result<(), ConstraintViolation> {
        ensure(Self::TABLE, self.element.chars().count() == 3, PREFIX_LENGTH, &self.element)?;
        ensure(Self::TABLE, is_digits(&self.element, 3..=3), PREFIX_RANGE, &self.element)
    }
}

/// 登记组，同一前缀下 `element` 唯一
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RegistrationGroup {
    pub id: Uuid,
    pub element: String,
    pub prefix_id: Option<Uuid>,
    pub region_id: Uuid,
}

impl RegistrationGroup {
    pub fn new(element: impl Into<String>, region_id: Uuid, prefix_id: Option<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            element: element.into(),
            prefix_id,
            region_id,
        }
    }
}

impl Row for RegistrationGroup {
    const TABLE: &'static str = "registration_groups";
    const CHECKS: &'static [&'static str] = &[ELEMENT_LENGTH, ELEMENT_RANGE];

    fn check_row(&self) -> Result<(), ConstraintViolation> {
        check_element(Self::TABLE, &self.element)
    }

    fn references(&self) -> Vec<(&'static str, Option<Uuid>)> {
        vec![("prefix_id", self.prefix_id), ("region_id", Some(self.region_id))]
    }
}

/// 出版者记号，同一登记组下 `element` 唯一
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Registrant {
    pub id: Uuid,
    pub element: String,
    pub publisher_id: Uuid,
    pub registration_group_id: Uuid,
}

impl Registrant {
    pub fn new(element: impl Into<String>, registration_group_id: Uuid, publisher_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            element: element.into(),
            publisher_id,
            registration_group_id,
        }
    }
}

impl Row for Registrant {
    const TABLE: &'static str = "registrants";
    const CHECKS: &'static [&'static str] = &[ELEMENT_LENGTH, ELEMENT_RANGE];

    fn check_row(&self) -> Result<(), ConstraintViolation> {
        check_element(Self::TABLE, &self.element)
    }

    fn references(&self) -> Vec<(&'static str, Option<Uuid>)> {
        vec![
            ("publisher_id", Some(self.publisher_id)),
            ("registration_group_id", Some(self.registration_group_id)),
        ]
    }
}

/// 书名记号，同一出版者下 `element` 唯一
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Publication {
    pub id: Uuid,
    pub element: String,
    pub registrant_id: Uuid,
}

impl Publication {
    pub fn new(element: impl Into<String>, registrant_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            element: element.into(),
            registrant_id,
        }
    }
}

impl Row for Publication {
    const TABLE: &'static str = "publications";
    const CHECKS: &'static [&'static str] = &[ELEMENT_LENGTH, ELEMENT_RANGE];

    fn check_row(&self) -> Result<(), ConstraintViolation> {
        check_element(Self::TABLE, &self.element)
    }

    fn references(&self) -> Vec<(&'static str, Option<Uuid>)> {
        vec![("registrant_id", Some(self.registrant_id))]
    }
}

/// 商业出版物的发行信息，与杂志、出版物各自一对一
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PublicationDetail {
    pub id: Uuid,
    pub price: i32,
    pub c_code_id: Uuid,
    pub label_id: Option<Uuid>,
    pub magazine_id: Uuid,
    pub publication_id: Uuid,
}

impl PublicationDetail {
    pub fn new(price: i32, c_code_id: Uuid, magazine_id: Uuid, publication_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            price,
            c_code_id,
            label_id: None,
            magazine_id,
            publication_id,
        }
    }

    pub fn with_label(mut self, label_id: Uuid) -> Self {
        self.label_id = Some(label_id);
        self
    }
}

impl Row for PublicationDetail {
    const TABLE: &'static str = "publication_details";
    const CHECKS: &'static [&'static str] = &[PRICE_NON_NEGATIVE];

    fn check_row(&self) -> Result<(), ConstraintViolation> {
        ensure(Self::TABLE, self.price >= 0, PRICE_NON_NEGATIVE, self.price)
    }

    fn references(&self) -> Vec<(&'static str, Option<Uuid>)> {
        vec![
            ("c_code_id", Some(self.c_code_id)),
            ("label_id", self.label_id),
            ("magazine_id", Some(self.magazine_id)),
            ("publication_id", Some(self.publication_id)),
        ]
    }
}

/// 由登记链拼出的 ISBN-13
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Isbn {
    pub prefix: String,
    pub group: String,
    pub registrant: String,
    pub publication: String,
    pub check_digit: u8,
}

impl Isbn {
    /// 拼接四段数字并计算校验位，四段合计必须恰好 12 位
    pub fn compose(
        prefix: &str,
        group: &str,
        registrant: &str,
        publication: &str,
    ) -> Result<Self, ConstraintViolation> {
        let body = format!("{prefix}{group}{registrant}{publication}");
        ensure(
            Publication::TABLE,
            is_digits(&body, ISBN_BODY_DIGITS..=ISBN_BODY_DIGITS),
            "length(prefix || group || registrant || publication) = 12",
            &body,
        )?;

        let sum: u32 = body
            .bytes()
            .enumerate()
            .map(|(i, b)| u32::from(b - b'0') * if i % 2 == 0 { 1 } else { 3 })
            .sum();

        Ok(Self {
            prefix: prefix.to_string(),
            group: group.to_string(),
            registrant: registrant.to_string(),
            publication: publication.to_string(),
            check_digit: ((10 - sum % 10) % 10) as u8,
        })
    }

    /// 不带连字符的 13 位数字
    pub fn digits(&self) -> String {
        format!(
            "{}{}{}{}{}",
            self.prefix, self.group, self.registrant, self.publication, self.check_digit
        )
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}-{}",
            self.prefix, self.group, self.registrant, self.publication, self.check_digit
        )
    }
}
