// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::setup;
use bookshelf::domain::models::publisher::{Label, Publisher};
use bookshelf::domain::repositories::error::RepositoryError;
use bookshelf::domain::repositories::publisher_repository::PublisherRepository;
use uuid::Uuid;

/// 出版社与品牌
#[tokio::test]
async fn test_publisher_labels() {
    let ctx = setup().await;
    let repo = ctx.publisher_repo();

    let publisher = repo
        .create_publisher(&Publisher::new("Kodansha", "kodansha"))
        .await
        .unwrap();
    let bunko = repo
        .create_label(&Label::new(publisher.id, "Kodansha Bunko", "kodanshabunko"))
        .await
        .unwrap();
    let comics = repo
        .create_label(&Label::new(publisher.id, "KC", "kc"))
        .await
        .unwrap();

    let labels = repo.list_publisher_labels(publisher.id).await.unwrap();
    assert_eq!(labels, vec![comics.clone(), bunko.clone()]);

    let mut renamed = comics.clone();
    renamed.name = "Kodansha Comics".to_string();
    repo.update_label(&renamed).await.unwrap();
    assert_eq!(repo.find_label(comics.id).await.unwrap(), Some(renamed));
    assert!(repo.list_publisher_labels(Uuid::new_v4()).await.unwrap().is_empty());
}

/// 仍有品牌的出版社不能删除
#[tokio::test]
async fn test_publisher_with_labels_restricted() {
    let ctx = setup().await;
    let repo = ctx.publisher_repo();
    let publisher = repo
        .create_publisher(&Publisher::new("Shueisha", "shueisha"))
        .await
        .unwrap();
    let label = repo
        .create_label(&Label::new(publisher.id, "Jump", "jump"))
        .await
        .unwrap();

    let err = repo.delete_publisher(publisher.id).await.unwrap_err();
    match err {
        RepositoryError::ReferentialIntegrityError { table, column, .. } => {
            assert_eq!(table, "labels");
            assert_eq!(column, "publisher_id");
        }
        other => panic!("expected ReferentialIntegrityError, got {other:?}"),
    }

    repo.delete_label(label.id).await.unwrap();
    repo.delete_publisher(publisher.id).await.unwrap();
    assert!(repo.find_publisher(publisher.id).await.unwrap().is_none());
}

/// 品牌必须属于已存在的出版社
#[tokio::test]
async fn test_label_requires_publisher() {
    let ctx = setup().await;
    let err = ctx
        .publisher_repo()
        .create_label(&Label::new(Uuid::new_v4(), "Nobody", "nobody"))
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::ReferentialIntegrityError { .. }));
}
