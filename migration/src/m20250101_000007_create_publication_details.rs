// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// 创建出版物详情（publication_details）表
///
/// 与 publications、magazines 各为一对一（唯一外键）
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PublicationDetails::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PublicationDetails::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PublicationDetails::Price).integer().not_null())
                    .col(ColumnDef::new(PublicationDetails::CCodeId).uuid().not_null())
                    .col(ColumnDef::new(PublicationDetails::LabelId).uuid().null())
                    .col(
                        ColumnDef::new(PublicationDetails::MagazineId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PublicationDetails::PublicationId)
                            .uuid()
                            .not_null(),
                    )
                    .check(Expr::cust("price >= 0"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_publication_details_c_code_id")
                            .from(PublicationDetails::Table, PublicationDetails::CCodeId)
                            .to(CCodes::Table, CCodes::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_publication_details_label_id")
                            .from(PublicationDetails::Table, PublicationDetails::LabelId)
                            .to(Labels::Table, Labels::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_publication_details_magazine_id")
                            .from(PublicationDetails::Table, PublicationDetails::MagazineId)
                            .to(Magazines::Table, Magazines::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_publication_details_publication_id")
                            .from(
                                PublicationDetails::Table,
                                PublicationDetails::PublicationId,
                            )
                            .to(Publications::Table, Publications::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_publication_details_magazine_id")
                    .table(PublicationDetails::Table)
                    .col(PublicationDetails::MagazineId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_publication_details_publication_id")
                    .table(PublicationDetails::Table)
                    .col(PublicationDetails::PublicationId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PublicationDetails::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PublicationDetails {
    Table,
    Id,
    Price,
    #[sea_orm(iden = "c_code_id")]
    CCodeId,
    LabelId,
    MagazineId,
    PublicationId,
}

#[derive(DeriveIden)]
enum CCodes {
    #[sea_orm(iden = "c_codes")]
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Labels {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Magazines {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Publications {
    Table,
    Id,
}
