// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use bookshelf::config::settings::DatabaseSettings;
use bookshelf::domain::models::book::{Book, BookSource, Fanzine, Magazine};
use bookshelf::domain::models::catalog::Format;
use bookshelf::domain::repositories::book_repository::BookRepository;
use bookshelf::domain::repositories::catalog_repository::CatalogRepository;
use bookshelf::infrastructure::database::catalog::Catalog;
use bookshelf::infrastructure::database::connection;
use bookshelf::infrastructure::repositories::book_repo_impl::BookRepositoryImpl;
use bookshelf::infrastructure::repositories::catalog_repo_impl::CatalogRepositoryImpl;
use bookshelf::infrastructure::repositories::creator_repo_impl::CreatorRepositoryImpl;
use bookshelf::infrastructure::repositories::event_repo_impl::EventRepositoryImpl;
use bookshelf::infrastructure::repositories::isbn_repo_impl::IsbnRepositoryImpl;
use bookshelf::infrastructure::repositories::publisher_repo_impl::PublisherRepositoryImpl;
use chrono::NaiveDate;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tempfile::TempDir;

/// 测试上下文
///
/// 每个测试独占一个临时目录中的 SQLite 文件，目录随上下文一起释放
#[allow(dead_code)]
pub struct TestContext {
    pub db: Arc<DatabaseConnection>,
    pub catalog: Arc<Catalog>,
    // Keep the directory alive
    pub dir: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    pub fn catalog_repo(&self) -> CatalogRepositoryImpl {
        CatalogRepositoryImpl::new(self.db.clone(), self.catalog.clone())
    }

    pub fn creator_repo(&self) -> CreatorRepositoryImpl {
        CreatorRepositoryImpl::new(self.db.clone(), self.catalog.clone())
    }

    pub fn event_repo(&self) -> EventRepositoryImpl {
        EventRepositoryImpl::new(self.db.clone(), self.catalog.clone())
    }

    pub fn publisher_repo(&self) -> PublisherRepositoryImpl {
        PublisherRepositoryImpl::new(self.db.clone(), self.catalog.clone())
    }

    pub fn isbn_repo(&self) -> IsbnRepositoryImpl {
        IsbnRepositoryImpl::new(self.db.clone(), self.catalog.clone())
    }

    pub fn book_repo(&self) -> BookRepositoryImpl {
        BookRepositoryImpl::new(self.db.clone(), self.catalog.clone())
    }
}

/// 创建已迁移的测试数据库
pub async fn setup() -> TestContext {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let settings = DatabaseSettings {
        url: format!("sqlite://{}?mode=rwc", dir.path().join("bookshelf.db").display()),
        max_connections: Some(1),
        min_connections: Some(1),
        connect_timeout: Some(10),
        idle_timeout: Some(300),
        sqlx_logging: false,
        run_migrations: true,
    };

    let db = connection::create_pool(&settings)
        .await
        .expect("Failed to connect to test database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    TestContext {
        db: Arc::new(db),
        catalog: Arc::new(Catalog::bookshelf()),
        dir,
    }
}

#[allow(dead_code)]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[allow(dead_code)]
pub async fn seed_format(ctx: &TestContext) -> Format {
    ctx.catalog_repo()
        .create_format(&Format::new(182, "B6", 128))
        .await
        .expect("Failed to create format")
}

/// 创建一本以杂志为来源的书
#[allow(dead_code)]
pub async fn seed_magazine_book(ctx: &TestContext, title: &str) -> (Book, Magazine) {
    let format = seed_format_named(ctx, &format!("{title} format")).await;
    let books = ctx.book_repo();
    let magazine = books
        .create_magazine(&Magazine::new())
        .await
        .expect("Failed to create magazine");
    let book = books
        .create_book(&Book::new(
            title,
            title,
            200,
            date(2024, 4, 1),
            format.id,
            BookSource::Magazine(magazine.id),
        ))
        .await
        .expect("Failed to create book");
    (book, magazine)
}

/// 创建一本以同人志为来源的书
#[allow(dead_code)]
pub async fn seed_fanzine_book(ctx: &TestContext, title: &str) -> (Book, Fanzine) {
    let format = seed_format_named(ctx, &format!("{title} format")).await;
    let books = ctx.book_repo();
    let fanzine = books
        .create_fanzine(&Fanzine::new(None, None))
        .await
        .expect("Failed to create fanzine");
    let book = books
        .create_book(&Book::new(
            title,
            title,
            32,
            date(2024, 5, 5),
            format.id,
            BookSource::Fanzine(fanzine.id),
        ))
        .await
        .expect("Failed to create book");
    (book, fanzine)
}

async fn seed_format_named(ctx: &TestContext, name: &str) -> Format {
    ctx.catalog_repo()
        .create_format(&Format::new(210, name, 148))
        .await
        .expect("Failed to create format")
}
