// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::setup;
use bookshelf::domain::models::book::Series;
use bookshelf::domain::models::creator::{Circle, Creator, CreatorRole};
use bookshelf::domain::repositories::book_repository::BookRepository;
use bookshelf::domain::repositories::creator_repository::CreatorRepository;
use bookshelf::domain::repositories::error::RepositoryError;
use uuid::Uuid;

/// 作者的创建、更新与链接字段
#[tokio::test]
async fn test_creator_crud() {
    let ctx = setup().await;
    let repo = ctx.creator_repo();

    let mut creator = Creator::new("Natsume", "natsume");
    creator
        .links
        .insert("site".to_string(), "https://example.com/natsume".to_string());
    let created = repo.create_creator(&creator).await.unwrap();
    assert_eq!(created, creator);

    creator.image = Some("natsume.png".to_string());
    repo.update_creator(&creator).await.unwrap();
    assert_eq!(repo.find_creator(creator.id).await.unwrap(), Some(creator.clone()));

    repo.delete_creator(creator.id).await.unwrap();
    assert!(repo.find_creator(creator.id).await.unwrap().is_none());
}

/// 名称超出长度上限时被拒绝
#[tokio::test]
async fn test_creator_name_length() {
    let ctx = setup().await;
    let long = "x".repeat(256);

    let err = ctx
        .creator_repo()
        .create_creator(&Creator::new(long, "ruby"))
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::ConstraintViolation(ref v) if v.table == "creators"));

    let err = ctx
        .creator_repo()
        .create_creator_role(&CreatorRole::new("x".repeat(32)))
        .await
        .unwrap_err();
    assert!(err.is_constraint());
}

/// 角色名称唯一，可按名称查询
#[tokio::test]
async fn test_creator_role_unique_name() {
    let ctx = setup().await;
    let repo = ctx.creator_repo();

    let role = repo.create_creator_role(&CreatorRole::new("Illustrator")).await.unwrap();
    let err = repo
        .create_creator_role(&CreatorRole::new("Illustrator"))
        .await
        .unwrap_err();
    match err {
        RepositoryError::DuplicateKey { table, columns } => {
            assert_eq!(table, "creator_roles");
            assert_eq!(columns, vec!["name"]);
        }
        other => panic!("expected DuplicateKey, got {other:?}"),
    }

    assert_eq!(
        repo.find_creator_role_by_name("Illustrator").await.unwrap(),
        Some(role)
    );
    assert!(repo.find_creator_role_by_name("Editor").await.unwrap().is_none());
}

/// 社团成员关联双向可查，删除作者时关联一并移除
#[tokio::test]
async fn test_circle_membership() {
    let ctx = setup().await;
    let repo = ctx.creator_repo();
    let circle = repo.create_circle(&Circle::new("Studio", "studio")).await.unwrap();
    let alice = repo.create_creator(&Creator::new("Alice", "alice")).await.unwrap();
    let bob = repo.create_creator(&Creator::new("Bob", "bob")).await.unwrap();

    repo.add_circle_member(circle.id, bob.id).await.unwrap();
    repo.add_circle_member(circle.id, alice.id).await.unwrap();

    let err = repo.add_circle_member(circle.id, alice.id).await.unwrap_err();
    assert!(matches!(err, RepositoryError::DuplicateKey { .. }));

    let members = repo.list_circle_members(circle.id).await.unwrap();
    assert_eq!(members, vec![alice.clone(), bob.clone()]);
    assert_eq!(repo.list_creator_circles(bob.id).await.unwrap(), vec![circle.clone()]);

    repo.delete_creator(bob.id).await.unwrap();
    assert_eq!(repo.list_circle_members(circle.id).await.unwrap(), vec![alice.clone()]);

    repo.remove_circle_member(circle.id, alice.id).await.unwrap();
    let err = repo.remove_circle_member(circle.id, alice.id).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { .. }));

    let err = repo.add_circle_member(Uuid::new_v4(), alice.id).await.unwrap_err();
    assert!(matches!(
        err,
        RepositoryError::ReferentialIntegrityError { ref column, .. } if column == "circle_id"
    ));
}

/// 作者角色授予与撤销
#[tokio::test]
async fn test_creator_roles() {
    let ctx = setup().await;
    let repo = ctx.creator_repo();
    let creator = repo.create_creator(&Creator::new("Carol", "carol")).await.unwrap();
    let writer = repo.create_creator_role(&CreatorRole::new("Writer")).await.unwrap();
    let editor = repo.create_creator_role(&CreatorRole::new("Editor")).await.unwrap();

    repo.grant_creator_role(creator.id, writer.id).await.unwrap();
    repo.grant_creator_role(creator.id, editor.id).await.unwrap();

    let roles = repo.list_creator_roles_of(creator.id).await.unwrap();
    assert_eq!(roles, vec![editor.clone(), writer.clone()]);
    assert_eq!(
        repo.list_creators_with_role(writer.id).await.unwrap(),
        vec![creator.clone()]
    );

    repo.revoke_creator_role(creator.id, writer.id).await.unwrap();
    assert!(repo.list_creators_with_role(writer.id).await.unwrap().is_empty());

    // Deleting the role drops the remaining grant
    repo.delete_creator_role(editor.id).await.unwrap();
    assert!(repo.list_creator_roles_of(creator.id).await.unwrap().is_empty());
}

/// 系列作者关联
#[tokio::test]
async fn test_series_creators() {
    let ctx = setup().await;
    let repo = ctx.creator_repo();
    let series = ctx
        .book_repo()
        .create_series(&Series::new("Chronicle", "chronicle"))
        .await
        .unwrap();
    let dave = repo.create_creator(&Creator::new("Dave", "dave")).await.unwrap();

    repo.add_series_creator(series.id, dave.id).await.unwrap();
    assert_eq!(repo.list_series_creators(series.id).await.unwrap(), vec![dave.clone()]);
    assert_eq!(repo.list_creator_series(dave.id).await.unwrap(), vec![series.clone()]);

    ctx.book_repo().delete_series(series.id).await.unwrap();
    assert!(repo.list_creator_series(dave.id).await.unwrap().is_empty());

    let err = repo.remove_series_creator(series.id, dave.id).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { .. }));
}
