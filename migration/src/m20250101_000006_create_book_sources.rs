// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// 创建书籍的来源表：系列、同人志、杂志，以及作者与系列的关联表
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 1. series
        manager
            .create_table(
                Table::create()
                    .table(Series::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Series::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Series::Links).json().not_null())
                    .col(ColumnDef::new(Series::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Series::TitleRuby).string_len(255).not_null())
                    .to_owned(),
            )
            .await?;

        // 2. creators_series (pure association)
        manager
            .create_table(
                Table::create()
                    .table(CreatorsSeries::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(CreatorsSeries::CreatorId).uuid().not_null())
                    .col(ColumnDef::new(CreatorsSeries::SeriesId).uuid().not_null())
                    .primary_key(
                        Index::create()
                            .col(CreatorsSeries::CreatorId)
                            .col(CreatorsSeries::SeriesId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_creators_series_creator_id")
                            .from(CreatorsSeries::Table, CreatorsSeries::CreatorId)
                            .to(Creators::Table, Creators::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_creators_series_series_id")
                            .from(CreatorsSeries::Table, CreatorsSeries::SeriesId)
                            .to(Series::Table, Series::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 3. fanzines
        manager
            .create_table(
                Table::create()
                    .table(Fanzines::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Fanzines::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Fanzines::CircleId).uuid().null())
                    .col(ColumnDef::new(Fanzines::EventId).uuid().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fanzines_circle_id")
                            .from(Fanzines::Table, Fanzines::CircleId)
                            .to(Circles::Table, Circles::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fanzines_event_id")
                            .from(Fanzines::Table, Fanzines::EventId)
                            .to(Events::Table, Events::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 4. magazines
        manager
            .create_table(
                Table::create()
                    .table(Magazines::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Magazines::Id).uuid().not_null().primary_key())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Magazines::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Fanzines::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CreatorsSeries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Series::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Series {
    Table,
    Id,
    Links,
    Title,
    TitleRuby,
}

#[derive(DeriveIden)]
enum CreatorsSeries {
    Table,
    CreatorId,
    SeriesId,
}

#[derive(DeriveIden)]
enum Fanzines {
    Table,
    Id,
    CircleId,
    EventId,
}

#[derive(DeriveIden)]
enum Magazines {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Creators {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Circles {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Events {
    Table,
    Id,
}
