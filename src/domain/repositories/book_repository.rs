// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::error::RepositoryError;
use crate::domain::models::book::{Book, BookCreatorAssociation, Fanzine, Magazine, Series};
use crate::domain::models::catalog::Genre;
use async_trait::async_trait;
use uuid::Uuid;

/// 书籍仓库特质
///
/// 书籍必须且只能关联同人志或杂志之一；同一同人志、杂志至多对应一本书。
/// 署名以 `(book_id, creator_id, creator_role_id)` 为键，
/// 同一作者可以不同角色多次署名同一本书。
#[async_trait]
pub trait BookRepository: Send + Sync {
    async fn create_book(&self, book: &Book) -> Result<Book, RepositoryError>;
    async fn find_book(&self, id: Uuid) -> Result<Option<Book>, RepositoryError>;
    async fn update_book(&self, book: &Book) -> Result<Book, RepositoryError>;
    /// 删除书籍，同时移除其体裁与署名关联
    async fn delete_book(&self, id: Uuid) -> Result<(), RepositoryError>;

    async fn create_fanzine(&self, fanzine: &Fanzine) -> Result<Fanzine, RepositoryError>;
    async fn find_fanzine(&self, id: Uuid) -> Result<Option<Fanzine>, RepositoryError>;
    async fn update_fanzine(&self, fanzine: &Fanzine) -> Result<Fanzine, RepositoryError>;
    async fn delete_fanzine(&self, id: Uuid) -> Result<(), RepositoryError>;

    async fn create_magazine(&self, magazine: &Magazine) -> Result<Magazine, RepositoryError>;
    async fn find_magazine(&self, id: Uuid) -> Result<Option<Magazine>, RepositoryError>;
    async fn update_magazine(&self, magazine: &Magazine) -> Result<Magazine, RepositoryError>;
    async fn delete_magazine(&self, id: Uuid) -> Result<(), RepositoryError>;

    async fn create_series(&self, series: &Series) -> Result<Series, RepositoryError>;
    async fn find_series(&self, id: Uuid) -> Result<Option<Series>, RepositoryError>;
    async fn update_series(&self, series: &Series) -> Result<Series, RepositoryError>;
    async fn delete_series(&self, id: Uuid) -> Result<(), RepositoryError>;

    async fn list_books_by_format(&self, format_id: Uuid) -> Result<Vec<Book>, RepositoryError>;
    /// 按卷号、发行日期排序
    async fn list_books_in_series(&self, series_id: Uuid) -> Result<Vec<Book>, RepositoryError>;
    async fn find_book_by_fanzine(&self, fanzine_id: Uuid) -> Result<Option<Book>, RepositoryError>;
    async fn find_book_by_magazine(
        &self,
        magazine_id: Uuid,
    ) -> Result<Option<Book>, RepositoryError>;
    async fn list_circle_fanzines(&self, circle_id: Uuid) -> Result<Vec<Fanzine>, RepositoryError>;
    async fn list_event_fanzines(&self, event_id: Uuid) -> Result<Vec<Fanzine>, RepositoryError>;

    async fn add_book_genre(&self, book_id: Uuid, genre_id: Uuid) -> Result<(), RepositoryError>;
    async fn remove_book_genre(&self, book_id: Uuid, genre_id: Uuid) -> Result<(), RepositoryError>;
    async fn list_book_genres(&self, book_id: Uuid) -> Result<Vec<Genre>, RepositoryError>;
    async fn list_genre_books(&self, genre_id: Uuid) -> Result<Vec<Book>, RepositoryError>;

    async fn credit_creator(
        &self,
        credit: &BookCreatorAssociation,
    ) -> Result<BookCreatorAssociation, RepositoryError>;
    async fn remove_credit(&self, credit: &BookCreatorAssociation) -> Result<(), RepositoryError>;
    async fn list_book_credits(
        &self,
        book_id: Uuid,
    ) -> Result<Vec<BookCreatorAssociation>, RepositoryError>;
    async fn list_creator_credits(
        &self,
        creator_id: Uuid,
    ) -> Result<Vec<BookCreatorAssociation>, RepositoryError>;
}
