// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::{seed_fanzine_book, setup};
use bookshelf::domain::models::catalog::{
    Format, Genre, GENRE_DEPTH_FOLLOWS_PARENT, GENRE_ROOT_DEPTH,
};
use bookshelf::domain::repositories::book_repository::BookRepository;
use bookshelf::domain::repositories::catalog_repository::CatalogRepository;
use bookshelf::domain::repositories::error::RepositoryError;
use uuid::Uuid;

/// 测试判型的创建、查询与更新
#[tokio::test]
async fn test_format_crud() {
    let ctx = setup().await;
    let repo = ctx.catalog_repo();

    let format = repo.create_format(&Format::new(182, "B6", 128)).await.unwrap();
    let found = repo.find_format(format.id).await.unwrap();
    assert_eq!(found, Some(format.clone()));

    let mut renamed = format.clone();
    renamed.name = "B6 judge".to_string();
    let updated = repo.update_format(&renamed).await.unwrap();
    assert_eq!(updated.name, "B6 judge");

    repo.delete_format(format.id).await.unwrap();
    assert!(repo.find_format(format.id).await.unwrap().is_none());
    assert!(repo.find_format(Uuid::new_v4()).await.unwrap().is_none());
}

/// 长、宽必须为正数
#[tokio::test]
async fn test_format_dimensions_must_be_positive() {
    let ctx = setup().await;
    let repo = ctx.catalog_repo();

    let err = repo.create_format(&Format::new(0, "Zero", 128)).await.unwrap_err();
    assert!(
        matches!(&err, RepositoryError::ConstraintViolation(v) if v.constraint == "length > 0"),
        "unexpected error: {err:?}"
    );

    let err = repo.create_format(&Format::new(182, "Negative", -1)).await.unwrap_err();
    assert!(
        matches!(&err, RepositoryError::ConstraintViolation(v) if v.constraint == "width > 0"),
        "unexpected error: {err:?}"
    );

    assert!(repo.list_formats().await.unwrap().is_empty());
}

/// 相同的 (length, name, width) 只能存在一行
#[tokio::test]
async fn test_duplicate_format_rejected() {
    let ctx = setup().await;
    let repo = ctx.catalog_repo();

    repo.create_format(&Format::new(182, "B6", 128)).await.unwrap();
    let err = repo.create_format(&Format::new(182, "B6", 128)).await.unwrap_err();
    match err {
        RepositoryError::DuplicateKey { table, mut columns } => {
            assert_eq!(table, "formats");
            columns.sort();
            assert_eq!(columns, vec!["length", "name", "width"]);
        }
        other => panic!("expected DuplicateKey, got {other:?}"),
    }

    // Any differing component is a different format
    repo.create_format(&Format::new(182, "B6", 130)).await.unwrap();
    assert_eq!(repo.list_formats().await.unwrap().len(), 2);
}

/// 更新不存在的判型返回 NotFound
#[tokio::test]
async fn test_update_missing_format() {
    let ctx = setup().await;
    let err = ctx
        .catalog_repo()
        .update_format(&Format::new(182, "B6", 128))
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { ref table, .. } if table == "formats"));

    let err = ctx.catalog_repo().delete_format(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { .. }));
}

/// 仍被书籍使用的判型不能删除
#[tokio::test]
async fn test_delete_format_in_use_restricted() {
    let ctx = setup().await;
    let (book, _) = seed_fanzine_book(&ctx, "Restricted").await;

    let err = ctx.catalog_repo().delete_format(book.format_id).await.unwrap_err();
    match err {
        RepositoryError::ReferentialIntegrityError { table, column, .. } => {
            assert_eq!(table, "books");
            assert_eq!(column, "format_id");
        }
        other => panic!("expected ReferentialIntegrityError, got {other:?}"),
    }
    assert!(ctx.book_repo().find_book(book.id).await.unwrap().is_some());
}

/// 体裁树：子节点、祖先链与深度
#[tokio::test]
async fn test_genre_tree_navigation() {
    let ctx = setup().await;
    let repo = ctx.catalog_repo();

    let fiction = repo.create_genre(&Genre::root("Fiction")).await.unwrap();
    let mystery = repo.create_genre(&Genre::child_of(&fiction, "Mystery")).await.unwrap();
    let cozy = repo.create_genre(&Genre::child_of(&mystery, "Cozy")).await.unwrap();
    let horror = repo.create_genre(&Genre::child_of(&fiction, "Horror")).await.unwrap();

    assert_eq!(cozy.depth, 2);

    let children = repo.list_genre_children(fiction.id).await.unwrap();
    let names: Vec<_> = children.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Horror", "Mystery"]);

    let ancestors = repo.list_genre_ancestors(cozy.id).await.unwrap();
    let ids: Vec<_> = ancestors.iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![mystery.id, fiction.id]);

    assert!(repo.list_genre_ancestors(fiction.id).await.unwrap().is_empty());
    assert!(repo.list_genre_children(horror.id).await.unwrap().is_empty());

    let err = repo.list_genre_ancestors(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { .. }));
}

/// 深度不能为负
#[tokio::test]
async fn test_genre_depth_non_negative() {
    let ctx = setup().await;
    let mut genre = Genre::root("Broken");
    genre.depth = -1;

    let err = ctx.catalog_repo().create_genre(&genre).await.unwrap_err();
    assert!(
        matches!(&err, RepositoryError::ConstraintViolation(v) if v.constraint == "depth >= 0"),
        "unexpected error: {err:?}"
    );
}

/// 把祖先改挂到自己的后代下会形成环
#[tokio::test]
async fn test_genre_cycle_rejected() {
    let ctx = setup().await;
    let repo = ctx.catalog_repo();

    let root = repo.create_genre(&Genre::root("Root")).await.unwrap();
    let child = repo.create_genre(&Genre::child_of(&root, "Child")).await.unwrap();
    let grandchild = repo.create_genre(&Genre::child_of(&child, "Grandchild")).await.unwrap();

    let mut moved = root.clone();
    moved.parent_id = Some(grandchild.id);
    let err = repo.update_genre(&moved).await.unwrap_err();
    match err {
        RepositoryError::CycleDetected { genre_id, parent_id } => {
            assert_eq!(genre_id, root.id);
            assert_eq!(parent_id, grandchild.id);
        }
        other => panic!("expected CycleDetected, got {other:?}"),
    }

    let mut own_parent = child.clone();
    own_parent.parent_id = Some(child.id);
    let err = repo.update_genre(&own_parent).await.unwrap_err();
    assert!(matches!(err, RepositoryError::CycleDetected { .. }));

    // Tree is untouched
    let stored = repo.find_genre(root.id).await.unwrap().unwrap();
    assert_eq!(stored.parent_id, None);
}

/// 深度必须与父节点一致，根节点深度为 0
#[tokio::test]
async fn test_genre_depth_follows_parent() {
    let ctx = setup().await;
    let repo = ctx.catalog_repo();
    let fiction = repo.create_genre(&Genre::root("Fiction")).await.unwrap();

    let mut skipped = Genre::child_of(&fiction, "Mystery");
    skipped.depth = 5;
    let err = repo.create_genre(&skipped).await.unwrap_err();
    assert!(
        matches!(&err, RepositoryError::ConstraintViolation(v)
            if v.table == "genres" && v.constraint == GENRE_DEPTH_FOLLOWS_PARENT && v.value == "5"),
        "unexpected error: {err:?}"
    );

    let mut floating = Genre::root("Poetry");
    floating.depth = 1;
    let err = repo.create_genre(&floating).await.unwrap_err();
    assert!(
        matches!(&err, RepositoryError::ConstraintViolation(v) if v.constraint == GENRE_ROOT_DEPTH),
        "unexpected error: {err:?}"
    );

    let mut stale = fiction.clone();
    stale.depth = 2;
    let err = repo.update_genre(&stale).await.unwrap_err();
    assert!(matches!(err, RepositoryError::ConstraintViolation(_)));
    assert_eq!(repo.find_genre(fiction.id).await.unwrap().unwrap().depth, 0);
    assert!(repo.find_genre(skipped.id).await.unwrap().is_none());
}

/// 移动体裁时其子树的深度随之平移
#[tokio::test]
async fn test_genre_move_shifts_subtree() {
    let ctx = setup().await;
    let repo = ctx.catalog_repo();

    let fiction = repo.create_genre(&Genre::root("Fiction")).await.unwrap();
    let crime = repo.create_genre(&Genre::root("Crime")).await.unwrap();
    let noir = repo.create_genre(&Genre::child_of(&crime, "Noir")).await.unwrap();
    let tech = repo.create_genre(&Genre::child_of(&noir, "Tech Noir")).await.unwrap();

    let mut under_fiction = crime.clone();
    under_fiction.parent_id = Some(fiction.id);
    under_fiction.depth = 1;
    let moved = repo.update_genre(&under_fiction).await.unwrap();
    assert_eq!(moved.depth, 1);
    assert_eq!(repo.find_genre(noir.id).await.unwrap().unwrap().depth, 2);
    assert_eq!(repo.find_genre(tech.id).await.unwrap().unwrap().depth, 3);

    let ancestors = repo.list_genre_ancestors(tech.id).await.unwrap();
    let ids: Vec<_> = ancestors.iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![noir.id, crime.id, fiction.id]);
}

/// 指向不存在父体裁的写入被拒绝
#[tokio::test]
async fn test_genre_missing_parent() {
    let ctx = setup().await;
    let mut orphan = Genre::root("Orphan");
    orphan.parent_id = Some(Uuid::new_v4());
    orphan.depth = 1;

    let err = ctx.catalog_repo().create_genre(&orphan).await.unwrap_err();
    assert!(matches!(
        err,
        RepositoryError::ReferentialIntegrityError { ref column, .. } if column == "parent_id"
    ));
}

/// 有子体裁时不能删除；删除叶子会同时移除书籍关联
#[tokio::test]
async fn test_genre_delete_policy() {
    let ctx = setup().await;
    let repo = ctx.catalog_repo();
    let (book, _) = seed_fanzine_book(&ctx, "Tagged").await;

    let parent = repo.create_genre(&Genre::root("Parent")).await.unwrap();
    let leaf = repo.create_genre(&Genre::child_of(&parent, "Leaf")).await.unwrap();
    ctx.book_repo().add_book_genre(book.id, leaf.id).await.unwrap();

    let err = repo.delete_genre(parent.id).await.unwrap_err();
    assert!(matches!(err, RepositoryError::ReferentialIntegrityError { .. }));

    repo.delete_genre(leaf.id).await.unwrap();
    assert!(ctx.book_repo().list_book_genres(book.id).await.unwrap().is_empty());
    repo.delete_genre(parent.id).await.unwrap();
}
