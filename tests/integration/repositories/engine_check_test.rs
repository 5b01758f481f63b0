// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 绕过仓库直接写库，确认数据库自身的检查约束仍会拒绝非法行

use super::super::helpers::{date, seed_magazine_book, setup, TestContext};
use bookshelf::domain::models::book::BOOK_SINGLE_SOURCE;
use bookshelf::domain::models::constraint::ConstraintViolation;
use bookshelf::domain::models::event::{Event, EVENT_DATE_ORDER};
use bookshelf::domain::models::isbn::{CCode, C_CODE_TARGET};
use bookshelf::domain::repositories::book_repository::BookRepository;
use bookshelf::domain::repositories::error::RepositoryError;
use bookshelf::domain::repositories::event_repository::EventRepository;
use bookshelf::domain::repositories::isbn_repository::IsbnRepository;
use sea_orm::{ConnectionTrait, DbBackend, Statement, Value};

async fn raw_write(ctx: &TestContext, sql: &str, values: Vec<Value>) -> ConstraintViolation {
    let err = ctx
        .db
        .execute(Statement::from_sql_and_values(DbBackend::Sqlite, sql, values))
        .await
        .expect_err("engine accepted an invalid row");
    match ctx.catalog.classify(err) {
        RepositoryError::ConstraintViolation(v) => v,
        other => panic!("expected ConstraintViolation, got {other:?}"),
    }
}

/// 书籍去掉唯一来源后被引擎拒绝
#[tokio::test]
async fn test_engine_rejects_book_without_source() {
    let ctx = setup().await;
    let (book, _) = seed_magazine_book(&ctx, "Raw").await;

    let v = raw_write(
        &ctx,
        "UPDATE books SET magazine_id = NULL WHERE id = ?",
        vec![book.id.into()],
    )
    .await;
    assert_eq!(v.table, "books");
    assert_eq!(v.constraint, BOOK_SINGLE_SOURCE);

    let stored = ctx.book_repo().find_book(book.id).await.unwrap().unwrap();
    assert_eq!(stored, book);
}

/// C-Code 写入字母被引擎拒绝
#[tokio::test]
async fn test_engine_rejects_c_code_letter() {
    let ctx = setup().await;
    let c_code = ctx
        .isbn_repo()
        .create_c_code(&CCode::new("0", "0", "93"))
        .await
        .unwrap();

    let v = raw_write(
        &ctx,
        "UPDATE c_codes SET target = 'A' WHERE id = ?",
        vec![c_code.id.into()],
    )
    .await;
    assert_eq!(v.table, "c_codes");
    assert_eq!(v.constraint, C_CODE_TARGET);
}

/// 开始日期晚于结束日期的即卖会被引擎拒绝
#[tokio::test]
async fn test_engine_rejects_reversed_event_dates() {
    let ctx = setup().await;
    let event = ctx
        .event_repo()
        .create_event(&Event::new("Raw", "raw", date(2024, 5, 1), date(2024, 5, 2)))
        .await
        .unwrap();

    let v = raw_write(
        &ctx,
        "UPDATE events SET date_from = ? WHERE id = ?",
        vec![date(2024, 6, 1).into(), event.id.into()],
    )
    .await;
    assert_eq!(v.table, "events");
    assert_eq!(v.constraint, EVENT_DATE_ORDER);

    let stored = ctx.event_repo().find_event(event.id).await.unwrap().unwrap();
    assert_eq!(stored.date_from, date(2024, 5, 1));
}
