// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// 创建即卖会系列（event_series）与场次（events）表
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventSeries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EventSeries::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(EventSeries::Image).string_len(255).null())
                    .col(ColumnDef::new(EventSeries::Links).json().not_null())
                    .col(ColumnDef::new(EventSeries::Name).string_len(255).not_null())
                    .col(
                        ColumnDef::new(EventSeries::NameRuby)
                            .string_len(255)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Events::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Events::DateFrom).date().not_null())
                    .col(ColumnDef::new(Events::DateTo).date().not_null())
                    .col(ColumnDef::new(Events::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Events::NameRuby).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Events::Number)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Events::EventSeriesId).uuid().null())
                    .check(Expr::cust("date_from <= date_to"))
                    .check(Expr::cust("number >= 0"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_events_event_series_id")
                            .from(Events::Table, Events::EventSeriesId)
                            .to(EventSeries::Table, EventSeries::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_events_name_number")
                    .table(Events::Table)
                    .col(Events::Name)
                    .col(Events::Number)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(EventSeries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum EventSeries {
    Table,
    Id,
    Image,
    Links,
    Name,
    NameRuby,
}

#[derive(DeriveIden)]
enum Events {
    Table,
    Id,
    DateFrom,
    DateTo,
    Name,
    NameRuby,
    Number,
    EventSeriesId,
}
