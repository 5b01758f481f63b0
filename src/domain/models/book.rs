// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::constraint::{ensure, ConstraintViolation, Links, Row};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

pub const BOOK_LENGTH_POSITIVE: &str = "length > 0";
pub const BOOK_SINGLE_SOURCE: &str = "(fanzine_id IS NOT NULL AND magazine_id IS NULL) OR (fanzine_id IS NULL AND magazine_id IS NOT NULL)";

/// 书籍的来源：同人志或商业杂志，二者必居其一
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookSource {
    Fanzine(Uuid),
    Magazine(Uuid),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Book {
    pub id: Uuid,
    #[validate(length(max = 255))]
    pub image: Option<String>,
    pub length: i32,
    #[serde(default)]
    pub links: Links,
    pub release_date: NaiveDate,
    #[validate(length(max = 255))]
    pub subtitle: Option<String>,
    #[validate(length(max = 255))]
    pub subtitle_ruby: Option<String>,
    #[validate(length(max = 255))]
    pub title: String,
    #[validate(length(max = 255))]
    pub title_ruby: String,
    pub volume: Option<f64>,
    pub fanzine_id: Option<Uuid>,
    pub format_id: Uuid,
    pub magazine_id: Option<Uuid>,
    pub series_id: Option<Uuid>,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        title_ruby: impl Into<String>,
        length: i32,
        release_date: NaiveDate,
        format_id: Uuid,
        source: BookSource,
    ) -> Self {
        let (fanzine_id, magazine_id) = match source {
            BookSource::Fanzine(id) => (Some(id), None),
            BookSource::Magazine(id) => (None, Some(id)),
        };

        Self {
            id: Uuid::new_v4(),
            image: None,
            length,
            links: Links::new(),
            release_date,
            subtitle: None,
            subtitle_ruby: None,
            title: title.into(),
            title_ruby: title_ruby.into(),
            volume: None,
            fanzine_id,
            format_id,
            magazine_id,
            series_id: None,
        }
    }

    /// 当前来源；两列同时设置或同时为空时返回 `None`
    pub fn source(&self) -> Option<BookSource> {
        match (self.fanzine_id, self.magazine_id) {
            (Some(id), None) => Some(BookSource::Fanzine(id)),
            (None, Some(id)) => Some(BookSource::Magazine(id)),
            _ => None,
        }
    }
}

impl Row for Book {
    const TABLE: &'static str = "books";
    const CHECKS: &'static [&'static str] = &[BOOK_LENGTH_POSITIVE, BOOK_SINGLE_SOURCE];

    fn check_row(&self) -> Result<(), ConstraintViolation> {
        ensure(Self::TABLE, self.length > 0, BOOK_LENGTH_POSITIVE, self.length)?;
        ensure(
            Self::TABLE,
            self.source().is_some(),
            BOOK_SINGLE_SOURCE,
            format_args!(
                "fanzine_id={:?}, magazine_id={:?}",
                self.fanzine_id, self.magazine_id
            ),
        )
    }

    fn references(&self) -> Vec<(&'static str, Option<Uuid>)> {
        vec![
            ("fanzine_id", self.fanzine_id),
            ("format_id", Some(self.format_id)),
            ("magazine_id", self.magazine_id),
            ("series_id", self.series_id),
        ]
    }
}

/// 同人志：可选地关联发行社团与首发即卖会
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Fanzine {
    pub id: Uuid,
    pub circle_id: Option<Uuid>,
    pub event_id: Option<Uuid>,
}

impl Fanzine {
    pub fn new(circle_id: Option<Uuid>, event_id: Option<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            circle_id,
            event_id,
        }
    }
}

impl Row for Fanzine {
    const TABLE: &'static str = "fanzines";

    fn references(&self) -> Vec<(&'static str, Option<Uuid>)> {
        vec![("circle_id", self.circle_id), ("event_id", self.event_id)]
    }
}

/// 商业出版物，发行信息见 `PublicationDetail`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Magazine {
    pub id: Uuid,
}

impl Magazine {
    pub fn new() -> Self {
        Self { id: Uuid::new_v4() }
    }
}

impl Default for Magazine {
    fn default() -> Self {
        Self::new()
    }
}

impl Row for Magazine {
    const TABLE: &'static str = "magazines";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Series {
    pub id: Uuid,
    #[serde(default)]
    pub links: Links,
    #[validate(length(max = 255))]
    pub title: String,
    #[validate(length(max = 255))]
    pub title_ruby: String,
}

impl Series {
    pub fn new(title: impl Into<String>, title_ruby: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            links: Links::new(),
            title: title.into(),
            title_ruby: title_ruby.into(),
        }
    }
}

impl Row for Series {
    const TABLE: &'static str = "series";
}

/// 书籍署名：某作者以某角色参与某本书
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
pub struct BookCreatorAssociation {
    pub book_id: Uuid,
    pub creator_id: Uuid,
    pub creator_role_id: Uuid,
}

impl BookCreatorAssociation {
    pub fn new(book_id: Uuid, creator_id: Uuid, creator_role_id: Uuid) -> Self {
        Self {
            book_id,
            creator_id,
            creator_role_id,
        }
    }
}

impl Row for BookCreatorAssociation {
    const TABLE: &'static str = "books_creators";

    fn references(&self) -> Vec<(&'static str, Option<Uuid>)> {
        vec![
            ("book_id", Some(self.book_id)),
            ("creator_id", Some(self.creator_id)),
            ("creator_role_id", Some(self.creator_role_id)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn release() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, 11).unwrap()
    }

    #[test]
    fn test_book_source_exclusive() {
        let fanzine = Uuid::new_v4();
        let book = Book::new("title", "たいとる", 32, release(), Uuid::new_v4(), BookSource::Fanzine(fanzine));
        assert_eq!(book.source(), Some(BookSource::Fanzine(fanzine)));
        assert!(book.check_constraints().is_ok());

        let mut both = book.clone();
        both.magazine_id = Some(Uuid::new_v4());
        let violation = both.check_constraints().unwrap_err();
        assert_eq!(violation.constraint, BOOK_SINGLE_SOURCE);

        let mut neither = book;
        neither.fanzine_id = None;
        let violation = neither.check_constraints().unwrap_err();
        assert_eq!(violation.constraint, BOOK_SINGLE_SOURCE);
    }

    #[test]
    fn test_book_length_positive() {
        let book = Book::new("title", "たいとる", 0, release(), Uuid::new_v4(), BookSource::Magazine(Uuid::new_v4()));
        let violation = book.check_constraints().unwrap_err();
        assert_eq!(violation.constraint, BOOK_LENGTH_POSITIVE);
    }

    #[test]
    fn test_book_references_skip_nothing() {
        let format = Uuid::new_v4();
        let book = Book::new("title", "たいとる", 10, release(), format, BookSource::Magazine(Uuid::new_v4()));
        let references = book.references();
        assert_eq!(references.len(), 4);
        assert!(references.contains(&("format_id", Some(format))));
        assert!(references.contains(&("fanzine_id", None)));
    }
}
