// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// 创建书籍（books）表及其与体裁、作者的关联表
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 1. books
        manager
            .create_table(
                Table::create()
                    .table(Books::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Books::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Books::Links).json().not_null())
                    .col(ColumnDef::new(Books::Image).string_len(255).null())
                    .col(ColumnDef::new(Books::Length).integer().not_null())
                    .col(ColumnDef::new(Books::ReleaseDate).date().not_null())
                    .col(ColumnDef::new(Books::Subtitle).string_len(255).null())
                    .col(ColumnDef::new(Books::SubtitleRuby).string_len(255).null())
                    .col(ColumnDef::new(Books::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Books::TitleRuby).string_len(255).not_null())
                    .col(ColumnDef::new(Books::Volume).double().null())
                    .col(ColumnDef::new(Books::FanzineId).uuid().null())
                    .col(ColumnDef::new(Books::FormatId).uuid().not_null())
                    .col(ColumnDef::new(Books::MagazineId).uuid().null())
                    .col(ColumnDef::new(Books::SeriesId).uuid().null())
                    .check(Expr::cust("length > 0"))
                    .check(Expr::cust(
                        "(fanzine_id IS NOT NULL AND magazine_id IS NULL) OR (fanzine_id IS NULL AND magazine_id IS NOT NULL)",
                    ))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_books_fanzine_id")
                            .from(Books::Table, Books::FanzineId)
                            .to(Fanzines::Table, Fanzines::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_books_format_id")
                            .from(Books::Table, Books::FormatId)
                            .to(Formats::Table, Formats::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_books_magazine_id")
                            .from(Books::Table, Books::MagazineId)
                            .to(Magazines::Table, Magazines::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_books_series_id")
                            .from(Books::Table, Books::SeriesId)
                            .to(Series::Table, Series::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_books_fanzine_id")
                    .table(Books::Table)
                    .col(Books::FanzineId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_books_magazine_id")
                    .table(Books::Table)
                    .col(Books::MagazineId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_books_format_id")
                    .table(Books::Table)
                    .col(Books::FormatId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_books_series_id")
                    .table(Books::Table)
                    .col(Books::SeriesId)
                    .to_owned(),
            )
            .await?;

        // 2. books_genres (pure association)
        manager
            .create_table(
                Table::create()
                    .table(BooksGenres::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(BooksGenres::BookId).uuid().not_null())
                    .col(ColumnDef::new(BooksGenres::GenreId).uuid().not_null())
                    .primary_key(
                        Index::create()
                            .col(BooksGenres::BookId)
                            .col(BooksGenres::GenreId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_books_genres_book_id")
                            .from(BooksGenres::Table, BooksGenres::BookId)
                            .to(Books::Table, Books::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_books_genres_genre_id")
                            .from(BooksGenres::Table, BooksGenres::GenreId)
                            .to(Genres::Table, Genres::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 3. books_creators (attributed association keyed by role)
        manager
            .create_table(
                Table::create()
                    .table(BooksCreators::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(BooksCreators::BookId).uuid().not_null())
                    .col(ColumnDef::new(BooksCreators::CreatorId).uuid().not_null())
                    .col(
                        ColumnDef::new(BooksCreators::CreatorRoleId)
                            .uuid()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(BooksCreators::BookId)
                            .col(BooksCreators::CreatorId)
                            .col(BooksCreators::CreatorRoleId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_books_creators_book_id")
                            .from(BooksCreators::Table, BooksCreators::BookId)
                            .to(Books::Table, Books::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_books_creators_creator_id")
                            .from(BooksCreators::Table, BooksCreators::CreatorId)
                            .to(Creators::Table, Creators::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_books_creators_creator_role_id")
                            .from(BooksCreators::Table, BooksCreators::CreatorRoleId)
                            .to(CreatorRoles::Table, CreatorRoles::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BooksCreators::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BooksGenres::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Books::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Books {
    Table,
    Id,
    Links,
    Image,
    Length,
    ReleaseDate,
    Subtitle,
    SubtitleRuby,
    Title,
    TitleRuby,
    Volume,
    FanzineId,
    FormatId,
    MagazineId,
    SeriesId,
}

#[derive(DeriveIden)]
enum BooksGenres {
    Table,
    BookId,
    GenreId,
}

#[derive(DeriveIden)]
enum BooksCreators {
    Table,
    BookId,
    CreatorId,
    CreatorRoleId,
}

#[derive(DeriveIden)]
enum Fanzines {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Formats {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Magazines {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Series {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Genres {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Creators {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum CreatorRoles {
    Table,
    Id,
}
