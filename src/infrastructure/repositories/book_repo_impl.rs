// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::book::{Book, BookCreatorAssociation, Fanzine, Magazine, Series};
use crate::domain::models::catalog::Genre;
use crate::domain::models::constraint::Row;
use crate::domain::repositories::book_repository::BookRepository;
use crate::domain::repositories::error::RepositoryError;
use crate::infrastructure::database::catalog::Catalog;
use crate::infrastructure::database::entities::{
    book as book_entity, books_creators, books_genres, fanzine as fanzine_entity,
    genre as genre_entity, magazine as magazine_entity, series as series_entity,
};
use crate::infrastructure::database::integrity::{delete_row, ensure_exists, prepare_write};
use crate::infrastructure::repositories::{insert_link, remove_link};
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

const BOOKS_GENRES: &str = "books_genres";

/// 书籍仓库实现
///
/// 书籍的体裁与署名关联随书籍删除一并移除，
/// 同人志、杂志在仍被书籍引用时拒绝删除
pub struct BookRepositoryImpl {
    db: Arc<DatabaseConnection>,
    catalog: Arc<Catalog>,
}

impl BookRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>, catalog: Arc<Catalog>) -> Self {
        Self { db, catalog }
    }
}

#[async_trait]
impl BookRepository for BookRepositoryImpl {
    async fn create_book(&self, book: &Book) -> Result<Book, RepositoryError> {
        let txn = self.db.begin().await?;
        prepare_write(&txn, &self.catalog, book).await?;

        let model = book_entity::ActiveModel::from(book)
            .insert(&txn)
            .await
            .map_err(|e| self.catalog.classify(e))?;
        txn.commit().await?;

        debug!(id = %model.id, title = %model.title, "Book created");
        Ok(model.into())
    }

    async fn find_book(&self, id: Uuid) -> Result<Option<Book>, RepositoryError> {
        let model = book_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn update_book(&self, book: &Book) -> Result<Book, RepositoryError> {
        let txn = self.db.begin().await?;
        ensure_exists(&txn, Book::TABLE, book.id).await?;
        prepare_write(&txn, &self.catalog, book).await?;

        let model = book_entity::ActiveModel::from(book)
            .update(&txn)
            .await
            .map_err(|e| self.catalog.classify(e))?;
        txn.commit().await?;

        Ok(model.into())
    }

    async fn delete_book(&self, id: Uuid) -> Result<(), RepositoryError> {
        let txn = self.db.begin().await?;
        delete_row(&txn, &self.catalog, Book::TABLE, id).await?;
        txn.commit().await?;

        debug!(%id, "Book deleted");
        Ok(())
    }

    async fn create_fanzine(&self, fanzine: &Fanzine) -> Result<Fanzine, RepositoryError> {
        let txn = self.db.begin().await?;
        prepare_write(&txn, &self.catalog, fanzine).await?;

        let model = fanzine_entity::ActiveModel::from(fanzine)
            .insert(&txn)
            .await
            .map_err(|e| self.catalog.classify(e))?;
        txn.commit().await?;

        debug!(id = %model.id, "Fanzine created");
        Ok(model.into())
    }

    async fn find_fanzine(&self, id: Uuid) -> Result<Option<Fanzine>, RepositoryError> {
        let model = fanzine_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn update_fanzine(&self, fanzine: &Fanzine) -> Result<Fanzine, RepositoryError> {
        let txn = self.db.begin().await?;
        ensure_exists(&txn, Fanzine::TABLE, fanzine.id).await?;
        prepare_write(&txn, &self.catalog, fanzine).await?;

        let model = fanzine_entity::ActiveModel::from(fanzine)
            .update(&txn)
            .await
            .map_err(|e| self.catalog.classify(e))?;
        txn.commit().await?;

        Ok(model.into())
    }

    async fn delete_fanzine(&self, id: Uuid) -> Result<(), RepositoryError> {
        let txn = self.db.begin().await?;
        delete_row(&txn, &self.catalog, Fanzine::TABLE, id).await?;
        txn.commit().await?;

        debug!(%id, "Fanzine deleted");
        Ok(())
    }

    async fn create_magazine(&self, magazine: &Magazine) -> Result<Magazine, RepositoryError> {
        let txn = self.db.begin().await?;
        prepare_write(&txn, &self.catalog, magazine).await?;

        let model = magazine_entity::ActiveModel::from(magazine)
            .insert(&txn)
            .await
            .map_err(|e| self.catalog.classify(e))?;
        txn.commit().await?;

        debug!(id = %model.id, "Magazine created");
        Ok(model.into())
    }

    async fn find_magazine(&self, id: Uuid) -> Result<Option<Magazine>, RepositoryError> {
        let model = magazine_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn update_magazine(&self, magazine: &Magazine) -> Result<Magazine, RepositoryError> {
        // 只有主键列，没有可更新的内容
        ensure_exists(self.db.as_ref(), Magazine::TABLE, magazine.id).await?;
        Ok(magazine.clone())
    }

    async fn delete_magazine(&self, id: Uuid) -> Result<(), RepositoryError> {
        let txn = self.db.begin().await?;
        delete_row(&txn, &self.catalog, Magazine::TABLE, id).await?;
        txn.commit().await?;

        debug!(%id, "Magazine deleted");
        Ok(())
    }

    async fn create_series(&self, series: &Series) -> Result<Series, RepositoryError> {
        let txn = self.db.begin().await?;
        prepare_write(&txn, &self.catalog, series).await?;

        let model = series_entity::ActiveModel::from(series)
            .insert(&txn)
            .await
            .map_err(|e| self.catalog.classify(e))?;
        txn.commit().await?;

        debug!(id = %model.id, title = %model.title, "Series created");
        Ok(model.into())
    }

    async fn find_series(&self, id: Uuid) -> Result<Option<Series>, RepositoryError> {
        let model = series_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn update_series(&self, series: &Series) -> Result<Series, RepositoryError> {
        let txn = self.db.begin().await?;
        ensure_exists(&txn, Series::TABLE, series.id).await?;
        prepare_write(&txn, &self.catalog, series).await?;

        let model = series_entity::ActiveModel::from(series)
            .update(&txn)
            .await
            .map_err(|e| self.catalog.classify(e))?;
        txn.commit().await?;

        Ok(model.into())
    }

    async fn delete_series(&self, id: Uuid) -> Result<(), RepositoryError> {
        let txn = self.db.begin().await?;
        delete_row(&txn, &self.catalog, Series::TABLE, id).await?;
        txn.commit().await?;

        debug!(%id, "Series deleted");
        Ok(())
    }

    async fn list_books_by_format(&self, format_id: Uuid) -> Result<Vec<Book>, RepositoryError> {
        let models = book_entity::Entity::find()
            .filter(book_entity::Column::FormatId.eq(format_id))
            .order_by_asc(book_entity::Column::ReleaseDate)
            .order_by_asc(book_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn list_books_in_series(&self, series_id: Uuid) -> Result<Vec<Book>, RepositoryError> {
        let models = book_entity::Entity::find()
            .filter(book_entity::Column::SeriesId.eq(series_id))
            .order_by_asc(book_entity::Column::Volume)
            .order_by_asc(book_entity::Column::ReleaseDate)
            .order_by_asc(book_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_book_by_fanzine(&self, fanzine_id: Uuid) -> Result<Option<Book>, RepositoryError> {
        let model = book_entity::Entity::find()
            .filter(book_entity::Column::FanzineId.eq(fanzine_id))
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn find_book_by_magazine(
        &self,
        magazine_id: Uuid,
    ) -> Result<Option<Book>, RepositoryError> {
        let model = book_entity::Entity::find()
            .filter(book_entity::Column::MagazineId.eq(magazine_id))
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn list_circle_fanzines(&self, circle_id: Uuid) -> Result<Vec<Fanzine>, RepositoryError> {
        let models = fanzine_entity::Entity::find()
            .filter(fanzine_entity::Column::CircleId.eq(circle_id))
            .order_by_asc(fanzine_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn list_event_fanzines(&self, event_id: Uuid) -> Result<Vec<Fanzine>, RepositoryError> {
        let models = fanzine_entity::Entity::find()
            .filter(fanzine_entity::Column::EventId.eq(event_id))
            .order_by_asc(fanzine_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn add_book_genre(&self, book_id: Uuid, genre_id: Uuid) -> Result<(), RepositoryError> {
        insert_link(
            &self.db,
            &self.catalog,
            BOOKS_GENRES,
            &[("book_id", Some(book_id)), ("genre_id", Some(genre_id))],
            books_genres::ActiveModel {
                book_id: Set(book_id),
                genre_id: Set(genre_id),
            },
        )
        .await
    }

    async fn remove_book_genre(&self, book_id: Uuid, genre_id: Uuid) -> Result<(), RepositoryError> {
        remove_link(
            &self.db,
            BOOKS_GENRES,
            &[("book_id", book_id), ("genre_id", genre_id)],
        )
        .await
    }

    async fn list_book_genres(&self, book_id: Uuid) -> Result<Vec<Genre>, RepositoryError> {
        let models = genre_entity::Entity::find()
            .inner_join(books_genres::Entity)
            .filter(books_genres::Column::BookId.eq(book_id))
            .order_by_asc(genre_entity::Column::Depth)
            .order_by_asc(genre_entity::Column::Name)
            .order_by_asc(genre_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn list_genre_books(&self, genre_id: Uuid) -> Result<Vec<Book>, RepositoryError> {
        let models = book_entity::Entity::find()
            .inner_join(books_genres::Entity)
            .filter(books_genres::Column::GenreId.eq(genre_id))
            .order_by_asc(book_entity::Column::Title)
            .order_by_asc(book_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn credit_creator(
        &self,
        credit: &BookCreatorAssociation,
    ) -> Result<BookCreatorAssociation, RepositoryError> {
        let txn = self.db.begin().await?;
        prepare_write(&txn, &self.catalog, credit).await?;

        books_creators::Entity::insert(books_creators::ActiveModel::from(credit))
            .exec_without_returning(&txn)
            .await
            .map_err(|e| self.catalog.classify(e))?;
        txn.commit().await?;

        debug!(
            book_id = %credit.book_id,
            creator_id = %credit.creator_id,
            creator_role_id = %credit.creator_role_id,
            "Creator credited"
        );
        Ok(*credit)
    }

    async fn remove_credit(&self, credit: &BookCreatorAssociation) -> Result<(), RepositoryError> {
        remove_link(
            &self.db,
            BookCreatorAssociation::TABLE,
            &[
                ("book_id", credit.book_id),
                ("creator_id", credit.creator_id),
                ("creator_role_id", credit.creator_role_id),
            ],
        )
        .await
    }

    async fn list_book_credits(
        &self,
        book_id: Uuid,
    ) -> Result<Vec<BookCreatorAssociation>, RepositoryError> {
        let models = books_creators::Entity::find()
            .filter(books_creators::Column::BookId.eq(book_id))
            .order_by_asc(books_creators::Column::CreatorId)
            .order_by_asc(books_creators::Column::CreatorRoleId)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn list_creator_credits(
        &self,
        creator_id: Uuid,
    ) -> Result<Vec<BookCreatorAssociation>, RepositoryError> {
        let models = books_creators::Entity::find()
            .filter(books_creators::Column::CreatorId.eq(creator_id))
            .order_by_asc(books_creators::Column::BookId)
            .order_by_asc(books_creators::Column::CreatorRoleId)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }
}
