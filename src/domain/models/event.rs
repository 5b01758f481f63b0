// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::constraint::{ensure, ConstraintViolation, Links, Row};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

pub const EVENT_DATE_ORDER: &str = "date_from <= date_to";
pub const EVENT_NUMBER_NON_NEGATIVE: &str = "number >= 0";

/// 即卖会系列（如同一展会的历届）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct EventSeries {
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

impl EventSeries {
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

impl Row for EventSeries {
    const TABLE: &'static str = "event_series";
}

/// 单场即卖会
///
/// `(name, number)` 唯一；`number` 默认为 0，表示未编号的场次。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Event {
    pub id: Uuid,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    #[validate(length(max = 255))]
    pub name: String,
    #[validate(length(max = 255))]
    pub name_ruby: String,
    pub number: i32,
    pub event_series_id: Option<Uuid>,
}

impl Event {
    pub fn new(
        name: impl Into<String>,
        name_ruby: impl Into<String>,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date_from,
            date_to,
            name: name.into(),
            name_ruby: name_ruby.into(),
            number: 0,
            event_series_id: None,
        }
    }

    pub fn numbered(mut self, number: i32) -> Self {
        self.number = number;
        self
    }

    pub fn in_series(mut self, event_series_id: Uuid) -> Self {
        self.event_series_id = Some(event_series_id);
        self
    }
}

impl Row for Event {
    const TABLE: &'static str = "events";
    const CHECKS: &'static [&'static str] = &[EVENT_DATE_ORDER, EVENT_NUMBER_NON_NEGATIVE];

    fn check_row(&self) -> Result<(), ConstraintViolation> {
        ensure(
            Self::TABLE,
            self.date_from <= self.date_to,
            EVENT_DATE_ORDER,
            format_args!("{} .. {}", self.date_from, self.date_to),
        )?;
        ensure(Self::TABLE, self.number >= 0, EVENT_NUMBER_NON_NEGATIVE, self.number)
    }

    fn references(&self) -> Vec<(&'static str, Option<Uuid>)> {
        vec![("event_series_id", self.event_series_id)]
    }
}
