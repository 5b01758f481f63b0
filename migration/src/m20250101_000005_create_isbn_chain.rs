// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// 创建 ISBN 登记链：C 码、地区、前缀、登记组、出版者号、出版物号
///
/// 链上所有外键都是 RESTRICT，删除上游行前必须先删除下游行
#[derive(DeriveMigrationName)]
pub struct Migration;

const ELEMENT_LENGTH: &str = "length(element) BETWEEN 1 AND 7";
const ELEMENT_RANGE: &str = "element BETWEEN '0000000' AND '9999999'";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 1. c_codes
        manager
            .create_table(
                Table::create()
                    .table(CCodes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(CCodes::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(CCodes::Target).string_len(1).not_null())
                    .col(ColumnDef::new(CCodes::Format).string_len(1).not_null())
                    .col(ColumnDef::new(CCodes::Content).string_len(2).not_null())
                    .check(Expr::cust(
                        "(length(target) = 1) AND (target BETWEEN '0' AND '9')",
                    ))
                    .check(Expr::cust(
                        "(length(format) = 1) AND (format BETWEEN '0' AND '9')",
                    ))
                    .check(Expr::cust(
                        "(length(content) = 2) AND (content BETWEEN '00' AND '99')",
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_c_codes_target_format_content")
                    .table(CCodes::Table)
                    .col(CCodes::Target)
                    .col(CCodes::Format)
                    .col(CCodes::Content)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 2. regions
        manager
            .create_table(
                Table::create()
                    .table(Regions::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Regions::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Regions::Image).string_len(255).null())
                    .col(ColumnDef::new(Regions::Name).string_len(31).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_regions_name")
                    .table(Regions::Table)
                    .col(Regions::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 3. prefixes
        manager
            .create_table(
                Table::create()
                    .table(Prefixes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Prefixes::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Prefixes::Element).string_len(3).not_null())
                    .check(Expr::cust("length(element) = 3"))
                    .check(Expr::cust("element BETWEEN '000' AND '999'"))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_prefixes_element")
                    .table(Prefixes::Table)
                    .col(Prefixes::Element)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 4. registration_groups (depends on regions, prefixes)
        manager
            .create_table(
                Table::create()
                    .table(RegistrationGroups::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RegistrationGroups::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(RegistrationGroups::Element)
                            .string_len(7)
                            .not_null(),
                    )
                    .col(ColumnDef::new(RegistrationGroups::PrefixId).uuid().null())
                    .col(
                        ColumnDef::new(RegistrationGroups::RegionId)
                            .uuid()
                            .not_null(),
                    )
                    .check(Expr::cust(ELEMENT_LENGTH))
                    .check(Expr::cust(ELEMENT_RANGE))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_registration_groups_prefix_id")
                            .from(RegistrationGroups::Table, RegistrationGroups::PrefixId)
                            .to(Prefixes::Table, Prefixes::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_registration_groups_region_id")
                            .from(RegistrationGroups::Table, RegistrationGroups::RegionId)
                            .to(Regions::Table, Regions::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_registration_groups_element_prefix_id")
                    .table(RegistrationGroups::Table)
                    .col(RegistrationGroups::Element)
                    .col(RegistrationGroups::PrefixId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 5. registrants (depends on registration_groups, publishers)
        manager
            .create_table(
                Table::create()
                    .table(Registrants::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Registrants::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Registrants::Element).string_len(7).not_null())
                    .col(
                        ColumnDef::new(Registrants::RegistrationGroupId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Registrants::PublisherId).uuid().not_null())
                    .check(Expr::cust(ELEMENT_LENGTH))
                    .check(Expr::cust(ELEMENT_RANGE))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_registrants_registration_group_id")
                            .from(Registrants::Table, Registrants::RegistrationGroupId)
                            .to(RegistrationGroups::Table, RegistrationGroups::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_registrants_publisher_id")
                            .from(Registrants::Table, Registrants::PublisherId)
                            .to(Publishers::Table, Publishers::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_registrants_element_registration_group_id")
                    .table(Registrants::Table)
                    .col(Registrants::Element)
                    .col(Registrants::RegistrationGroupId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 6. publications (depends on registrants)
        manager
            .create_table(
                Table::create()
                    .table(Publications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Publications::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Publications::Element).string_len(7).not_null())
                    .col(ColumnDef::new(Publications::RegistrantId).uuid().not_null())
                    .check(Expr::cust(ELEMENT_LENGTH))
                    .check(Expr::cust(ELEMENT_RANGE))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_publications_registrant_id")
                            .from(Publications::Table, Publications::RegistrantId)
                            .to(Registrants::Table, Registrants::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_publications_element_registrant_id")
                    .table(Publications::Table)
                    .col(Publications::Element)
                    .col(Publications::RegistrantId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Publications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Registrants::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(RegistrationGroups::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Prefixes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Regions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CCodes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CCodes {
    #[sea_orm(iden = "c_codes")]
    Table,
    Id,
    Target,
    Format,
    Content,
}

#[derive(DeriveIden)]
enum Regions {
    Table,
    Id,
    Image,
    Name,
}

#[derive(DeriveIden)]
enum Prefixes {
    Table,
    Id,
    Element,
}

#[derive(DeriveIden)]
enum RegistrationGroups {
    Table,
    Id,
    Element,
    PrefixId,
    RegionId,
}

#[derive(DeriveIden)]
enum Registrants {
    Table,
    Id,
    Element,
    RegistrationGroupId,
    PublisherId,
}

#[derive(DeriveIden)]
enum Publications {
    Table,
    Id,
    Element,
    RegistrantId,
}

#[derive(DeriveIden)]
enum Publishers {
    Table,
    Id,
}
