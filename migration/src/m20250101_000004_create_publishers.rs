// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// 创建出版社（publishers）与品牌（labels）表
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Publishers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Publishers::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Publishers::Image).string_len(255).null())
                    .col(ColumnDef::new(Publishers::Links).json().not_null())
                    .col(ColumnDef::new(Publishers::Name).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Publishers::NameRuby)
                            .string_len(255)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Labels::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Labels::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Labels::Image).string_len(255).null())
                    .col(ColumnDef::new(Labels::Links).json().not_null())
                    .col(ColumnDef::new(Labels::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Labels::NameRuby).string_len(255).not_null())
                    .col(ColumnDef::new(Labels::PublisherId).uuid().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_labels_publisher_id")
                            .from(Labels::Table, Labels::PublisherId)
                            .to(Publishers::Table, Publishers::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_labels_publisher_id")
                    .table(Labels::Table)
                    .col(Labels::PublisherId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Labels::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Publishers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Publishers {
    Table,
    Id,
    Image,
    Links,
    Name,
    NameRuby,
}

#[derive(DeriveIden)]
enum Labels {
    Table,
    Id,
    Image,
    Links,
    Name,
    NameRuby,
    PublisherId,
}
