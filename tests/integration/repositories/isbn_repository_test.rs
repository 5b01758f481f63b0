// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::{seed_magazine_book, setup, TestContext};
use bookshelf::domain::models::isbn::{
    CCode, Prefix, Publication, PublicationDetail, Region, Registrant, RegistrationGroup,
    C_CODE_TARGET, PREFIX_LENGTH,
};
use bookshelf::domain::models::publisher::{Label, Publisher};
use bookshelf::domain::repositories::book_repository::BookRepository;
use bookshelf::domain::repositories::error::RepositoryError;
use bookshelf::domain::repositories::isbn_repository::IsbnRepository;
use bookshelf::domain::repositories::publisher_repository::PublisherRepository;
use uuid::Uuid;

/// 登记链上的各行
struct Chain {
    publisher: Publisher,
    region: Region,
    prefix: Prefix,
    group: RegistrationGroup,
    registrant: Registrant,
    publication: Publication,
}

async fn seed_chain(ctx: &TestContext) -> Chain {
    let isbn = ctx.isbn_repo();
    let publisher = ctx
        .publisher_repo()
        .create_publisher(&Publisher::new("Kodansha", "kodansha"))
        .await
        .unwrap();
    let region = isbn.create_region(&Region::new("Japan")).await.unwrap();
    let prefix = isbn.create_prefix(&Prefix::new("978")).await.unwrap();
    let group = isbn
        .create_registration_group(&RegistrationGroup::new("4", region.id, Some(prefix.id)))
        .await
        .unwrap();
    let registrant = isbn
        .create_registrant(&Registrant::new("06", group.id, publisher.id))
        .await
        .unwrap();
    let publication = isbn
        .create_publication(&Publication::new("519981", registrant.id))
        .await
        .unwrap();

    Chain {
        publisher,
        region,
        prefix,
        group,
        registrant,
        publication,
    }
}

/// 从出版社到书籍走完整条登记链，再读回价格与 C-Code
#[tokio::test]
async fn test_isbn_chain_round_trip() {
    let ctx = setup().await;
    let isbn = ctx.isbn_repo();
    let chain = seed_chain(&ctx).await;

    let c_code = isbn.create_c_code(&CCode::new("0", "0", "93")).await.unwrap();
    let (book, magazine) = seed_magazine_book(&ctx, "Weekly").await;
    isbn.create_publication_detail(&PublicationDetail::new(
        1500,
        c_code.id,
        magazine.id,
        chain.publication.id,
    ))
    .await
    .unwrap();

    let stored = ctx.book_repo().find_book(book.id).await.unwrap().unwrap();
    let magazine_id = stored.magazine_id.unwrap();
    let detail = isbn.find_detail_by_magazine(magazine_id).await.unwrap().unwrap();
    assert_eq!(detail.price, 1500);
    assert_eq!(detail.publication_id, chain.publication.id);

    let code = isbn.find_c_code(detail.c_code_id).await.unwrap().unwrap();
    assert_eq!(code, c_code);
    assert_eq!(code.to_string(), "C0093");

    let number = isbn
        .isbn_of_publication(chain.publication.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(number.to_string(), "978-4-06-519981-7");
    assert_eq!(number.digits(), "9784065199817");

    assert_eq!(
        isbn.find_detail_by_publication(chain.publication.id).await.unwrap(),
        Some(detail.clone())
    );
    assert_eq!(isbn.list_c_code_details(c_code.id).await.unwrap(), vec![detail]);
}

/// 逆向导航
#[tokio::test]
async fn test_chain_navigation() {
    let ctx = setup().await;
    let isbn = ctx.isbn_repo();
    let chain = seed_chain(&ctx).await;

    assert_eq!(isbn.list_region_groups(chain.region.id).await.unwrap(), vec![chain.group.clone()]);
    assert_eq!(isbn.list_prefix_groups(chain.prefix.id).await.unwrap(), vec![chain.group.clone()]);
    assert_eq!(
        isbn.list_group_registrants(chain.group.id).await.unwrap(),
        vec![chain.registrant.clone()]
    );
    assert_eq!(
        isbn.list_publisher_registrants(chain.publisher.id).await.unwrap(),
        vec![chain.registrant.clone()]
    );
    assert_eq!(
        isbn.list_registrant_publications(chain.registrant.id).await.unwrap(),
        vec![chain.publication.clone()]
    );
    assert!(isbn.list_region_groups(Uuid::new_v4()).await.unwrap().is_empty());
}

/// C-Code 各位必须是数字
#[tokio::test]
async fn test_c_code_rejects_letters() {
    let ctx = setup().await;
    let err = ctx
        .isbn_repo()
        .create_c_code(&CCode::new("A", "0", "93"))
        .await
        .unwrap_err();
    match err {
        RepositoryError::ConstraintViolation(v) => {
            assert_eq!(v.table, "c_codes");
            assert_eq!(v.constraint, C_CODE_TARGET);
            assert_eq!(v.value, "A");
        }
        other => panic!("expected ConstraintViolation, got {other:?}"),
    }
}

/// 前缀必须为 3 位数字
#[tokio::test]
async fn test_prefix_length() {
    let ctx = setup().await;
    let err = ctx
        .isbn_repo()
        .create_prefix(&Prefix::new("97"))
        .await
        .unwrap_err();
    assert!(
        matches!(&err, RepositoryError::ConstraintViolation(v) if v.constraint == PREFIX_LENGTH),
        "unexpected error: {err:?}"
    );
}

/// 同一前缀下登记组号唯一，不同前缀可重复
#[tokio::test]
async fn test_registration_group_unique_per_prefix() {
    let ctx = setup().await;
    let isbn = ctx.isbn_repo();
    let chain = seed_chain(&ctx).await;

    let err = isbn
        .create_registration_group(&RegistrationGroup::new(
            "4",
            chain.region.id,
            Some(chain.prefix.id),
        ))
        .await
        .unwrap_err();
    assert!(
        matches!(&err, RepositoryError::DuplicateKey { table, .. } if table == "registration_groups"),
        "unexpected error: {err:?}"
    );

    let other = isbn.create_prefix(&Prefix::new("979")).await.unwrap();
    isbn.create_registration_group(&RegistrationGroup::new("4", chain.region.id, Some(other.id)))
        .await
        .unwrap();
    assert_eq!(isbn.list_region_groups(chain.region.id).await.unwrap().len(), 2);
}

/// 仍有出版者记号的出版社不能删除
#[tokio::test]
async fn test_publisher_with_registrants_restricted() {
    let ctx = setup().await;
    let chain = seed_chain(&ctx).await;

    let err = ctx
        .publisher_repo()
        .delete_publisher(chain.publisher.id)
        .await
        .unwrap_err();
    match err {
        RepositoryError::ReferentialIntegrityError { table, column, .. } => {
            assert_eq!(table, "registrants");
            assert_eq!(column, "publisher_id");
        }
        other => panic!("expected ReferentialIntegrityError, got {other:?}"),
    }
    assert!(ctx
        .publisher_repo()
        .find_publisher(chain.publisher.id)
        .await
        .unwrap()
        .is_some());
}

/// 登记链自下而上才能删除
#[tokio::test]
async fn test_chain_delete_restricted_top_down() {
    let ctx = setup().await;
    let isbn = ctx.isbn_repo();
    let chain = seed_chain(&ctx).await;

    assert!(isbn.delete_region(chain.region.id).await.is_err());
    assert!(isbn.delete_prefix(chain.prefix.id).await.is_err());
    assert!(isbn.delete_registration_group(chain.group.id).await.is_err());
    assert!(isbn.delete_registrant(chain.registrant.id).await.is_err());

    isbn.delete_publication(chain.publication.id).await.unwrap();
    isbn.delete_registrant(chain.registrant.id).await.unwrap();
    isbn.delete_registration_group(chain.group.id).await.unwrap();
    isbn.delete_prefix(chain.prefix.id).await.unwrap();
    isbn.delete_region(chain.region.id).await.unwrap();
    ctx.publisher_repo().delete_publisher(chain.publisher.id).await.unwrap();
}

/// 删除品牌时发行信息的品牌引用置空
#[tokio::test]
async fn test_label_delete_sets_detail_null() {
    let ctx = setup().await;
    let isbn = ctx.isbn_repo();
    let chain = seed_chain(&ctx).await;
    let label = ctx
        .publisher_repo()
        .create_label(&Label::new(chain.publisher.id, "KC", "kc"))
        .await
        .unwrap();
    let c_code = isbn.create_c_code(&CCode::new("0", "9", "79")).await.unwrap();
    let (_, magazine) = seed_magazine_book(&ctx, "Labelled").await;

    let detail = isbn
        .create_publication_detail(
            &PublicationDetail::new(680, c_code.id, magazine.id, chain.publication.id)
                .with_label(label.id),
        )
        .await
        .unwrap();
    assert_eq!(isbn.list_label_details(label.id).await.unwrap(), vec![detail.clone()]);

    ctx.publisher_repo().delete_label(label.id).await.unwrap();
    let stored = isbn.find_publication_detail(detail.id).await.unwrap().unwrap();
    assert_eq!(stored.label_id, None);

    // The C-Code is still referenced
    let err = isbn.delete_c_code(c_code.id).await.unwrap_err();
    assert!(matches!(err, RepositoryError::ReferentialIntegrityError { .. }));
}

/// 价格不能为负；同一出版物只能有一条发行信息
#[tokio::test]
async fn test_publication_detail_rules() {
    let ctx = setup().await;
    let isbn = ctx.isbn_repo();
    let chain = seed_chain(&ctx).await;
    let c_code = isbn.create_c_code(&CCode::new("0", "0", "93")).await.unwrap();
    let (_, magazine) = seed_magazine_book(&ctx, "Priced").await;
    let (_, other_magazine) = seed_magazine_book(&ctx, "Priced 2").await;

    let err = isbn
        .create_publication_detail(&PublicationDetail::new(
            -1,
            c_code.id,
            magazine.id,
            chain.publication.id,
        ))
        .await
        .unwrap_err();
    assert!(err.is_constraint());

    let mut detail = isbn
        .create_publication_detail(&PublicationDetail::new(
            500,
            c_code.id,
            magazine.id,
            chain.publication.id,
        ))
        .await
        .unwrap();

    let err = isbn
        .create_publication_detail(&PublicationDetail::new(
            500,
            c_code.id,
            other_magazine.id,
            chain.publication.id,
        ))
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::DuplicateKey { .. }));

    detail.price = 550;
    isbn.update_publication_detail(&detail).await.unwrap();
    assert_eq!(
        isbn.find_publication_detail(detail.id).await.unwrap().map(|d| d.price),
        Some(550)
    );
}

/// 未关联前缀的登记组无法拼出 ISBN；不存在的出版物返回 NotFound
#[tokio::test]
async fn test_isbn_of_publication_edge_cases() {
    let ctx = setup().await;
    let isbn = ctx.isbn_repo();
    let chain = seed_chain(&ctx).await;

    let bare = isbn
        .create_registration_group(&RegistrationGroup::new("4", chain.region.id, None))
        .await
        .unwrap();
    let registrant = isbn
        .create_registrant(&Registrant::new("08", bare.id, chain.publisher.id))
        .await
        .unwrap();
    let publication = isbn
        .create_publication(&Publication::new("123456", registrant.id))
        .await
        .unwrap();
    assert!(isbn.isbn_of_publication(publication.id).await.unwrap().is_none());

    let err = isbn.isbn_of_publication(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { ref table, .. } if table == "publications"));
}
