// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// 创建开本（formats）与体裁（genres）表
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Formats::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Formats::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Formats::Length).integer().not_null())
                    .col(ColumnDef::new(Formats::Name).string_len(31).not_null())
                    .col(ColumnDef::new(Formats::Width).integer().not_null())
                    .check(Expr::cust("length > 0"))
                    .check(Expr::cust("width > 0"))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_formats_length_name_width")
                    .table(Formats::Table)
                    .col(Formats::Length)
                    .col(Formats::Name)
                    .col(Formats::Width)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Self-referencing tree; cycles are rejected by the write path
        manager
            .create_table(
                Table::create()
                    .table(Genres::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Genres::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Genres::Name).string_len(63).not_null())
                    .col(ColumnDef::new(Genres::Depth).integer().not_null())
                    .col(ColumnDef::new(Genres::ParentId).uuid().null())
                    .check(Expr::cust("depth >= 0"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_genres_parent_id")
                            .from(Genres::Table, Genres::ParentId)
                            .to(Genres::Table, Genres::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_genres_parent_id")
                    .table(Genres::Table)
                    .col(Genres::ParentId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Genres::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Formats::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Formats {
    Table,
    Id,
    Length,
    Name,
    Width,
}

#[derive(DeriveIden)]
enum Genres {
    Table,
    Id,
    Name,
    Depth,
    ParentId,
}
