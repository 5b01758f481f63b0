// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::book::{Book, BookCreatorAssociation, Fanzine, Magazine, Series};
use crate::domain::models::catalog::{Format, Genre};
use crate::domain::models::constraint::{ConstraintViolation, Row};
use crate::domain::models::creator::{Circle, Creator, CreatorRole};
use crate::domain::models::event::{Event, EventSeries};
use crate::domain::models::isbn::{
    CCode, Prefix, Publication, PublicationDetail, Region, Registrant, RegistrationGroup,
};
use crate::domain::models::publisher::{Label, Publisher};
use crate::domain::repositories::error::RepositoryError;
use once_cell::sync::Lazy;
use regex::Regex;
use sea_orm::{DbErr, SqlErr};

static SQLITE_UNIQUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"UNIQUE constraint failed: ([\w.]+(?:, [\w.]+)*)").unwrap());
static POSTGRES_UNIQUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"unique constraint "([^"]+)""#).unwrap());
static SQLITE_CHECK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"CHECK constraint failed: (.+)").unwrap());
static POSTGRES_CHECK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"relation "([^"]+)" violates check constraint "([^"]+)""#).unwrap());
static SQL_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"'[^']*'|\b([A-Za-z_][A-Za-z0-9_]*)\b(\s*\()?").unwrap());
static POSTGRES_FOREIGN_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"foreign key constraint "([^"]+)""#).unwrap());

/// 删除被引用行时对引用方采取的动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnDelete {
    /// 仍有引用时拒绝删除
    Restrict,
    /// 一并删除引用行
    Cascade,
    /// 将引用列置空
    SetNull,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDef {
    pub name: &'static str,
    pub primary_key: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyDef {
    pub table: &'static str,
    pub column: &'static str,
    pub references: &'static str,
    pub nullable: bool,
    pub on_delete: OnDelete,
}

impl ForeignKeyDef {
    /// 迁移中使用的约束名 `fk_<table>_<column>`
    pub fn name(&self) -> String {
        format!("fk_{}_{}", self.table, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueDef {
    pub name: &'static str,
    pub table: &'static str,
    pub columns: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckDef {
    pub table: &'static str,
    pub expression: &'static str,
}

/// 模式目录
///
/// 记录每张表的主键、外键（含删除策略）、唯一约束与检查约束。
/// 启动时构建一次，以 `Arc<Catalog>` 共享给所有仓库：
/// 完整性守卫据此执行删除策略，错误分类据此把存储引擎的报错
/// 还原为具体的表和列。
#[derive(Debug, Clone)]
pub struct Catalog {
    tables: Vec<TableDef>,
    foreign_keys: Vec<ForeignKeyDef>,
    uniques: Vec<UniqueDef>,
    checks: Vec<CheckDef>,
}

const fn table(name: &'static str, primary_key: &'static [&'static str]) -> TableDef {
    TableDef { name, primary_key }
}

const fn fk(
    table: &'static str,
    column: &'static str,
    references: &'static str,
    nullable: bool,
    on_delete: OnDelete,
) -> ForeignKeyDef {
    ForeignKeyDef {
        table,
        column,
        references,
        nullable,
        on_delete,
    }
}

const fn unique(
    name: &'static str,
    table: &'static str,
    columns: &'static [&'static str],
) -> UniqueDef {
    UniqueDef {
        name,
        table,
        columns,
    }
}

fn checks_of<R: Row>() -> impl Iterator<Item = CheckDef> {
    R::CHECKS.iter().copied().map(|expression| CheckDef {
        table: R::TABLE,
        expression,
    })
}

impl Catalog {
    /// 书目模型的完整目录，与迁移声明保持一致
    pub fn bookshelf() -> Self {
        use OnDelete::{Cascade, Restrict, SetNull};

        let tables = vec![
            table(Format::TABLE, &["id"]),
            table(Genre::TABLE, &["id"]),
            table(CreatorRole::TABLE, &["id"]),
            table(Creator::TABLE, &["id"]),
            table(Circle::TABLE, &["id"]),
            table("circles_creators", &["circle_id", "creator_id"]),
            table("creator_roles_creators", &["creator_role_id", "creator_id"]),
            table(EventSeries::TABLE, &["id"]),
            table(Event::TABLE, &["id"]),
            table(Publisher::TABLE, &["id"]),
            table(Label::TABLE, &["id"]),
            table(CCode::TABLE, &["id"]),
            table(Region::TABLE, &["id"]),
            table(Prefix::TABLE, &["id"]),
            table(RegistrationGroup::TABLE, &["id"]),
            table(Registrant::TABLE, &["id"]),
            table(Publication::TABLE, &["id"]),
            table(Series::TABLE, &["id"]),
            table("creators_series", &["creator_id", "series_id"]),
            table(Fanzine::TABLE, &["id"]),
            table(Magazine::TABLE, &["id"]),
            table(PublicationDetail::TABLE, &["id"]),
            table(Book::TABLE, &["id"]),
            table("books_genres", &["book_id", "genre_id"]),
            table(
                BookCreatorAssociation::TABLE,
                &["book_id", "creator_id", "creator_role_id"],
            ),
        ];

        let foreign_keys = vec![
            fk("genres", "parent_id", "genres", true, Restrict),
            fk("circles_creators", "circle_id", "circles", false, Cascade),
            fk("circles_creators", "creator_id", "creators", false, Cascade),
            fk("creator_roles_creators", "creator_role_id", "creator_roles", false, Cascade),
            fk("creator_roles_creators", "creator_id", "creators", false, Cascade),
            fk("events", "event_series_id", "event_series", true, SetNull),
            fk("labels", "publisher_id", "publishers", false, Restrict),
            fk("registration_groups", "prefix_id", "prefixes", true, Restrict),
            fk("registration_groups", "region_id", "regions", false, Restrict),
            fk("registrants", "publisher_id", "publishers", false, Restrict),
            fk("registrants", "registration_group_id", "registration_groups", false, Restrict),
            fk("publications", "registrant_id", "registrants", false, Restrict),
            fk("creators_series", "creator_id", "creators", false, Cascade),
            fk("creators_series", "series_id", "series", false, Cascade),
            fk("fanzines", "circle_id", "circles", true, SetNull),
            fk("fanzines", "event_id", "events", true, SetNull),
            fk("publication_details", "c_code_id", "c_codes", false, Restrict),
            fk("publication_details", "label_id", "labels", true, SetNull),
            fk("publication_details", "magazine_id", "magazines", false, Restrict),
            fk("publication_details", "publication_id", "publications", false, Restrict),
            fk("books", "fanzine_id", "fanzines", true, Restrict),
            fk("books", "format_id", "formats", false, Restrict),
            fk("books", "magazine_id", "magazines", true, Restrict),
            fk("books", "series_id", "series", true, SetNull),
            fk("books_genres", "book_id", "books", false, Cascade),
            fk("books_genres", "genre_id", "genres", false, Cascade),
            fk("books_creators", "book_id", "books", false, Cascade),
            fk("books_creators", "creator_id", "creators", false, Cascade),
            fk("books_creators", "creator_role_id", "creator_roles", false, Restrict),
        ];

        let uniques = vec![
            unique("uq_formats_length_name_width", "formats", &["length", "name", "width"]),
            unique("uq_creator_roles_name", "creator_roles", &["name"]),
            unique("uq_events_name_number", "events", &["name", "number"]),
            unique("uq_c_codes_target_format_content", "c_codes", &["target", "format", "content"]),
            unique("uq_regions_name", "regions", &["name"]),
            unique("uq_prefixes_element", "prefixes", &["element"]),
            unique(
                "uq_registration_groups_element_prefix_id",
                "registration_groups",
                &["element", "prefix_id"],
            ),
            unique(
                "uq_registrants_element_registration_group_id",
                "registrants",
                &["element", "registration_group_id"],
            ),
            unique(
                "uq_publications_element_registrant_id",
                "publications",
                &["element", "registrant_id"],
            ),
            unique("uq_publication_details_magazine_id", "publication_details", &["magazine_id"]),
            unique(
                "uq_publication_details_publication_id",
                "publication_details",
                &["publication_id"],
            ),
            unique("uq_books_fanzine_id", "books", &["fanzine_id"]),
            unique("uq_books_magazine_id", "books", &["magazine_id"]),
        ];

        let checks = checks_of::<Format>()
            .chain(checks_of::<Genre>())
            .chain(checks_of::<Event>())
            .chain(checks_of::<CCode>())
            .chain(checks_of::<Prefix>())
            .chain(checks_of::<RegistrationGroup>())
            .chain(checks_of::<Registrant>())
            .chain(checks_of::<Publication>())
            .chain(checks_of::<PublicationDetail>())
            .chain(checks_of::<Book>())
            .collect();

        Self {
            tables,
            foreign_keys,
            uniques,
            checks,
        }
    }

    /// 按依赖顺序排列的全部表
    pub fn tables(&self) -> &[TableDef] {
        &self.tables
    }

    pub fn table(&self, name: &str) -> Option<&TableDef> {
        self.tables.iter().find(|t| t.name == name)
    }

    pub fn foreign_key(&self, table: &str, column: &str) -> Option<&ForeignKeyDef> {
        self.foreign_keys
            .iter()
            .find(|fk| fk.table == table && fk.column == column)
    }

    /// `table` 自身声明的外键
    pub fn foreign_keys_of<'a>(&'a self, table: &'a str) -> impl Iterator<Item = &'a ForeignKeyDef> {
        self.foreign_keys.iter().filter(move |fk| fk.table == table)
    }

    /// 指向 `table` 的外键
    pub fn referencing<'a>(&'a self, table: &'a str) -> impl Iterator<Item = &'a ForeignKeyDef> {
        self.foreign_keys
            .iter()
            .filter(move |fk| fk.references == table)
    }

    pub fn uniques_of<'a>(&'a self, table: &'a str) -> impl Iterator<Item = &'a UniqueDef> {
        self.uniques.iter().filter(move |u| u.table == table)
    }

    pub fn checks_of<'a>(&'a self, table: &'a str) -> impl Iterator<Item = &'a CheckDef> {
        self.checks.iter().filter(move |c| c.table == table)
    }

    /// 将存储引擎返回的错误归类为仓库错误
    ///
    /// 同时识别 SQLite 与 PostgreSQL 的报错格式；无法识别的错误原样
    /// 包装为 `RepositoryError::Database`。
    pub fn classify(&self, err: DbErr) -> RepositoryError {
        let message = match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(message))
            | Some(SqlErr::ForeignKeyConstraintViolation(message)) => message,
            _ => err.to_string(),
        };

        self.duplicate_key(&message)
            .or_else(|| self.foreign_key_violation(&message))
            .or_else(|| self.check_violation(&message))
            .unwrap_or(RepositoryError::Database(err))
    }

    fn duplicate_key(&self, message: &str) -> Option<RepositoryError> {
        if let Some(caps) = SQLITE_UNIQUE.captures(message) {
            let mut table = String::new();
            let mut columns = Vec::new();
            for qualified in caps[1].split(", ") {
                let (t, c) = qualified.split_once('.').unwrap_or(("", qualified));
                table = t.to_string();
                columns.push(c.to_string());
            }
            return Some(RepositoryError::DuplicateKey { table, columns });
        }

        let caps = POSTGRES_UNIQUE.captures(message)?;
        let name = &caps[1];
        if let Some(def) = self.uniques.iter().find(|u| u.name == name) {
            return Some(duplicate(def.table, def.columns));
        }
        if let Some(def) = name
            .strip_suffix("_pkey")
            .and_then(|table| self.table(table))
        {
            return Some(duplicate(def.name, def.primary_key));
        }
        Some(RepositoryError::DuplicateKey {
            table: String::new(),
            columns: vec![name.to_string()],
        })
    }

    fn foreign_key_violation(&self, message: &str) -> Option<RepositoryError> {
        if message.contains("FOREIGN KEY constraint failed") {
            return Some(RepositoryError::referential("", "", message));
        }

        let caps = POSTGRES_FOREIGN_KEY.captures(message)?;
        let name = &caps[1];
        let err = match self.foreign_keys.iter().find(|fk| fk.name() == name) {
            Some(fk) => RepositoryError::referential(fk.table, fk.column, message),
            None => RepositoryError::referential("", name, message),
        };
        Some(err)
    }

    /// PostgreSQL 为 `table` 上未命名检查约束生成的名称，按声明顺序
    ///
    /// 只引用一列时为 `<表>_<列>_check`，否则为 `<表>_check`；同名时依次追加 1、2。
    fn postgres_check_names<'a>(&'a self, table: &'a str) -> Vec<(String, &'a CheckDef)> {
        let mut names: Vec<(String, &CheckDef)> = Vec::new();
        for check in self.checks_of(table) {
            let base = match referenced_columns(check.expression).as_slice() {
                [column] => format!("{table}_{column}_check"),
                _ => format!("{table}_check"),
            };
            let mut name = base.clone();
            let mut pass = 0;
            while names.iter().any(|(taken, _)| *taken == name) {
                pass += 1;
                name = format!("{base}{pass}");
            }
            names.push((name, check));
        }
        names
    }

    fn check_violation(&self, message: &str) -> Option<RepositoryError> {
        if let Some(caps) = POSTGRES_CHECK.captures(message) {
            let (table, name) = (&caps[1], &caps[2]);
            let constraint = self
                .postgres_check_names(table)
                .into_iter()
                .find(|(generated, _)| generated == name)
                .map_or(name, |(_, check)| check.expression);
            return Some(ConstraintViolation::new(table, constraint, "(rejected by database)").into());
        }

        let caps = SQLITE_CHECK.captures(message)?;
        let expression = caps[1].trim();
        let mut owners = self.checks.iter().filter(|c| c.expression == expression);
        let table = match (owners.next(), owners.next()) {
            (Some(check), None) => check.table,
            _ => "",
        };
        Some(ConstraintViolation::new(table, expression, "(rejected by database)").into())
    }
}

/// 检查表达式引用的列，按首次出现的顺序
fn referenced_columns(expression: &str) -> Vec<&str> {
    const KEYWORDS: &[&str] = &["and", "or", "not", "is", "null", "between", "in", "like"];

    let mut columns: Vec<&str> = Vec::new();
    for caps in SQL_WORD.captures_iter(expression) {
        // string literals and function calls
        let Some(word) = caps.get(1) else { continue };
        if caps.get(2).is_some() {
            continue;
        }
        let word = word.as_str();
        if !KEYWORDS.iter().any(|k| k.eq_ignore_ascii_case(word)) && !columns.contains(&word) {
            columns.push(word);
        }
    }
    columns
}

fn duplicate(table: &str, columns: &[&str]) -> RepositoryError {
    RepositoryError::DuplicateKey {
        table: table.to_string(),
        columns: columns.iter().map(|c| c.to_string()).collect(),
    }
}
