// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::{date, seed_fanzine_book, seed_format, seed_magazine_book, setup};
use bookshelf::domain::models::book::{
    Book, BookCreatorAssociation, BookSource, Fanzine, Magazine, Series, BOOK_SINGLE_SOURCE,
};
use bookshelf::domain::models::catalog::Genre;
use bookshelf::domain::models::creator::{Circle, Creator, CreatorRole};
use bookshelf::domain::models::event::Event;
use bookshelf::domain::repositories::book_repository::BookRepository;
use bookshelf::domain::repositories::catalog_repository::CatalogRepository;
use bookshelf::domain::repositories::creator_repository::CreatorRepository;
use bookshelf::domain::repositories::error::RepositoryError;
use bookshelf::domain::repositories::event_repository::EventRepository;
use uuid::Uuid;

/// 书籍的创建、查询与更新，链接字段按 JSON 往返
#[tokio::test]
async fn test_book_crud() {
    let ctx = setup().await;
    let repo = ctx.book_repo();
    let (mut book, magazine) = seed_magazine_book(&ctx, "Monthly").await;

    let found = repo.find_book(book.id).await.unwrap().unwrap();
    assert_eq!(found, book);
    assert_eq!(
        repo.find_book_by_magazine(magazine.id).await.unwrap().map(|b| b.id),
        Some(book.id)
    );

    book.subtitle = Some("Spring issue".to_string());
    book.volume = Some(4.5);
    book.links.insert("official".to_string(), "https://example.com".to_string());
    let updated = repo.update_book(&book).await.unwrap();
    assert_eq!(updated, book);
    assert_eq!(repo.find_book(book.id).await.unwrap(), Some(book.clone()));

    repo.delete_book(book.id).await.unwrap();
    assert!(repo.find_book(book.id).await.unwrap().is_none());
    // The source is free again
    repo.delete_magazine(magazine.id).await.unwrap();
}

/// 同人志与杂志必须恰好关联其一
#[tokio::test]
async fn test_book_requires_single_source() {
    let ctx = setup().await;
    let repo = ctx.book_repo();
    let format = seed_format(&ctx).await;
    let magazine = repo.create_magazine(&Magazine::new()).await.unwrap();
    let fanzine = repo.create_fanzine(&Fanzine::new(None, None)).await.unwrap();

    let mut both = Book::new(
        "Both",
        "both",
        100,
        date(2024, 1, 1),
        format.id,
        BookSource::Magazine(magazine.id),
    );
    both.fanzine_id = Some(fanzine.id);
    let err = repo.create_book(&both).await.unwrap_err();
    assert!(
        matches!(&err, RepositoryError::ConstraintViolation(v) if v.constraint == BOOK_SINGLE_SOURCE),
        "unexpected error: {err:?}"
    );

    let mut neither = both.clone();
    neither.fanzine_id = None;
    neither.magazine_id = None;
    let err = repo.create_book(&neither).await.unwrap_err();
    assert!(
        matches!(&err, RepositoryError::ConstraintViolation(v) if v.constraint == BOOK_SINGLE_SOURCE),
        "unexpected error: {err:?}"
    );

    assert!(repo.list_books_by_format(format.id).await.unwrap().is_empty());
}

/// 更新时同样要求恰好一个来源，失败后原行不变
#[tokio::test]
async fn test_update_book_requires_single_source() {
    let ctx = setup().await;
    let repo = ctx.book_repo();
    let (book, magazine) = seed_magazine_book(&ctx, "Stable").await;
    let fanzine = repo.create_fanzine(&Fanzine::new(None, None)).await.unwrap();

    let mut both = book.clone();
    both.fanzine_id = Some(fanzine.id);
    let err = repo.update_book(&both).await.unwrap_err();
    assert!(
        matches!(&err, RepositoryError::ConstraintViolation(v)
            if v.table == "books" && v.constraint == BOOK_SINGLE_SOURCE),
        "unexpected error: {err:?}"
    );

    let mut neither = book.clone();
    neither.magazine_id = None;
    let err = repo.update_book(&neither).await.unwrap_err();
    assert!(
        matches!(&err, RepositoryError::ConstraintViolation(v) if v.constraint == BOOK_SINGLE_SOURCE),
        "unexpected error: {err:?}"
    );

    let stored = repo.find_book(book.id).await.unwrap().unwrap();
    assert_eq!(stored, book);
    assert_eq!(stored.magazine_id, Some(magazine.id));
    assert_eq!(stored.fanzine_id, None);
}

/// 同一杂志只能对应一本书
#[tokio::test]
async fn test_magazine_backs_one_book() {
    let ctx = setup().await;
    let repo = ctx.book_repo();
    let (book, magazine) = seed_magazine_book(&ctx, "Single").await;

    let second = Book::new(
        "Second",
        "second",
        100,
        date(2024, 2, 1),
        book.format_id,
        BookSource::Magazine(magazine.id),
    );
    let err = repo.create_book(&second).await.unwrap_err();
    match err {
        RepositoryError::DuplicateKey { table, columns } => {
            assert_eq!(table, "books");
            assert_eq!(columns, vec!["magazine_id"]);
        }
        other => panic!("expected DuplicateKey, got {other:?}"),
    }
}

/// 书籍引用不存在的判型或来源时被拒绝
#[tokio::test]
async fn test_book_dangling_references() {
    let ctx = setup().await;
    let repo = ctx.book_repo();
    let format = seed_format(&ctx).await;

    let book = Book::new(
        "Ghost",
        "ghost",
        100,
        date(2024, 1, 1),
        format.id,
        BookSource::Fanzine(Uuid::new_v4()),
    );
    let err = repo.create_book(&book).await.unwrap_err();
    assert!(matches!(
        err,
        RepositoryError::ReferentialIntegrityError { ref column, .. } if column == "fanzine_id"
    ));
}

/// 同人志与杂志仍被书籍引用时拒绝删除
#[tokio::test]
async fn test_source_delete_restricted() {
    let ctx = setup().await;
    let repo = ctx.book_repo();
    let (_, fanzine) = seed_fanzine_book(&ctx, "Kept").await;
    let (_, magazine) = seed_magazine_book(&ctx, "Kept too").await;

    let err = repo.delete_fanzine(fanzine.id).await.unwrap_err();
    assert!(matches!(err, RepositoryError::ReferentialIntegrityError { .. }));
    let err = repo.delete_magazine(magazine.id).await.unwrap_err();
    assert!(matches!(err, RepositoryError::ReferentialIntegrityError { .. }));
}

/// 删除社团或即卖会时同人志的引用置空
#[tokio::test]
async fn test_fanzine_links_set_null() {
    let ctx = setup().await;
    let repo = ctx.book_repo();
    let circle = ctx
        .creator_repo()
        .create_circle(&Circle::new("Circle", "circle"))
        .await
        .unwrap();
    let event = ctx
        .event_repo()
        .create_event(&Event::new("Market", "market", date(2024, 8, 10), date(2024, 8, 11)))
        .await
        .unwrap();
    let fanzine = repo
        .create_fanzine(&Fanzine::new(Some(circle.id), Some(event.id)))
        .await
        .unwrap();

    assert_eq!(repo.list_circle_fanzines(circle.id).await.unwrap(), vec![fanzine.clone()]);
    assert_eq!(repo.list_event_fanzines(event.id).await.unwrap(), vec![fanzine.clone()]);

    ctx.creator_repo().delete_circle(circle.id).await.unwrap();
    ctx.event_repo().delete_event(event.id).await.unwrap();

    let stored = repo.find_fanzine(fanzine.id).await.unwrap().unwrap();
    assert_eq!(stored.circle_id, None);
    assert_eq!(stored.event_id, None);
}

/// 系列内按卷号排序，删除系列后书籍脱离系列
#[tokio::test]
async fn test_series_ordering_and_removal() {
    let ctx = setup().await;
    let repo = ctx.book_repo();
    let series = repo.create_series(&Series::new("Saga", "saga")).await.unwrap();

    let (mut second, _) = seed_magazine_book(&ctx, "Saga 2").await;
    let (mut first, _) = seed_magazine_book(&ctx, "Saga 1").await;
    second.series_id = Some(series.id);
    second.volume = Some(2.0);
    first.series_id = Some(series.id);
    first.volume = Some(1.0);
    repo.update_book(&second).await.unwrap();
    repo.update_book(&first).await.unwrap();

    let ids: Vec<_> = repo
        .list_books_in_series(series.id)
        .await
        .unwrap()
        .into_iter()
        .map(|b| b.id)
        .collect();
    assert_eq!(ids, vec![first.id, second.id]);

    repo.delete_series(series.id).await.unwrap();
    let stored = repo.find_book(first.id).await.unwrap().unwrap();
    assert_eq!(stored.series_id, None);
}

/// 体裁关联：重复关联与删除不存在的关联
#[tokio::test]
async fn test_book_genre_links() {
    let ctx = setup().await;
    let repo = ctx.book_repo();
    let (book, _) = seed_fanzine_book(&ctx, "Genres").await;
    let genres = ctx.catalog_repo();
    let fiction = genres.create_genre(&Genre::root("Fiction")).await.unwrap();
    let sf = genres.create_genre(&Genre::child_of(&fiction, "SF")).await.unwrap();

    repo.add_book_genre(book.id, sf.id).await.unwrap();
    repo.add_book_genre(book.id, fiction.id).await.unwrap();

    let err = repo.add_book_genre(book.id, sf.id).await.unwrap_err();
    assert!(matches!(err, RepositoryError::DuplicateKey { ref table, .. } if table == "books_genres"));

    let names: Vec<_> = repo
        .list_book_genres(book.id)
        .await
        .unwrap()
        .into_iter()
        .map(|g| g.name)
        .collect();
    assert_eq!(names, vec!["Fiction", "SF"]);
    assert_eq!(repo.list_genre_books(sf.id).await.unwrap().len(), 1);

    repo.remove_book_genre(book.id, sf.id).await.unwrap();
    let err = repo.remove_book_genre(book.id, sf.id).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { .. }));

    let err = repo.add_book_genre(book.id, Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, RepositoryError::ReferentialIntegrityError { .. }));
}

/// 同一作者可以不同角色署名同一本书；删除书籍时署名一并移除
#[tokio::test]
async fn test_book_credits() {
    let ctx = setup().await;
    let repo = ctx.book_repo();
    let creators = ctx.creator_repo();
    let (book, _) = seed_fanzine_book(&ctx, "Credits").await;
    let author = creators.create_creator(&Creator::new("Author", "author")).await.unwrap();
    let writer = creators.create_creator_role(&CreatorRole::new("Writer")).await.unwrap();
    let artist = creators.create_creator_role(&CreatorRole::new("Artist")).await.unwrap();

    let as_writer = BookCreatorAssociation::new(book.id, author.id, writer.id);
    let as_artist = BookCreatorAssociation::new(book.id, author.id, artist.id);
    repo.credit_creator(&as_writer).await.unwrap();
    repo.credit_creator(&as_artist).await.unwrap();

    let err = repo.credit_creator(&as_writer).await.unwrap_err();
    assert!(matches!(err, RepositoryError::DuplicateKey { ref table, .. } if table == "books_creators"));

    assert_eq!(repo.list_book_credits(book.id).await.unwrap().len(), 2);
    assert_eq!(repo.list_creator_credits(author.id).await.unwrap().len(), 2);

    // A role still used by a credit cannot go away
    let err = creators.delete_creator_role(artist.id).await.unwrap_err();
    assert!(matches!(err, RepositoryError::ReferentialIntegrityError { .. }));

    repo.remove_credit(&as_artist).await.unwrap();
    let err = repo.remove_credit(&as_artist).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { ref table, .. } if table == "books_creators"));

    repo.delete_book(book.id).await.unwrap();
    assert!(repo.list_creator_credits(author.id).await.unwrap().is_empty());
    creators.delete_creator_role(artist.id).await.unwrap();
}
