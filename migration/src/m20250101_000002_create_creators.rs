// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// 创建作者相关表：角色、作者、社团及其关联表
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 1. creator_roles
        manager
            .create_table(
                Table::create()
                    .table(CreatorRoles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CreatorRoles::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CreatorRoles::Name).string_len(31).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_creator_roles_name")
                    .table(CreatorRoles::Table)
                    .col(CreatorRoles::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 2. creators
        manager
            .create_table(
                Table::create()
                    .table(Creators::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Creators::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Creators::Image).string_len(255).null())
                    .col(ColumnDef::new(Creators::Links).json().not_null())
                    .col(ColumnDef::new(Creators::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Creators::NameRuby).string_len(255).not_null())
                    .to_owned(),
            )
            .await?;

        // 3. circles
        manager
            .create_table(
                Table::create()
                    .table(Circles::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Circles::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Circles::Image).string_len(255).null())
                    .col(ColumnDef::new(Circles::Links).json().not_null())
                    .col(ColumnDef::new(Circles::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Circles::NameRuby).string_len(255).not_null())
                    .to_owned(),
            )
            .await?;

        // 4. circles_creators (pure association)
        manager
            .create_table(
                Table::create()
                    .table(CirclesCreators::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(CirclesCreators::CircleId).uuid().not_null())
                    .col(ColumnDef::new(CirclesCreators::CreatorId).uuid().not_null())
                    .primary_key(
                        Index::create()
                            .col(CirclesCreators::CircleId)
                            .col(CirclesCreators::CreatorId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_circles_creators_circle_id")
                            .from(CirclesCreators::Table, CirclesCreators::CircleId)
                            .to(Circles::Table, Circles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_circles_creators_creator_id")
                            .from(CirclesCreators::Table, CirclesCreators::CreatorId)
                            .to(Creators::Table, Creators::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 5. creator_roles_creators (pure association)
        manager
            .create_table(
                Table::create()
                    .table(CreatorRolesCreators::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CreatorRolesCreators::CreatorRoleId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CreatorRolesCreators::CreatorId)
                            .uuid()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(CreatorRolesCreators::CreatorRoleId)
                            .col(CreatorRolesCreators::CreatorId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_creator_roles_creators_creator_role_id")
                            .from(
                                CreatorRolesCreators::Table,
                                CreatorRolesCreators::CreatorRoleId,
                            )
                            .to(CreatorRoles::Table, CreatorRoles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_creator_roles_creators_creator_id")
                            .from(CreatorRolesCreators::Table, CreatorRolesCreators::CreatorId)
                            .to(Creators::Table, Creators::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CreatorRolesCreators::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CirclesCreators::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Circles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Creators::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CreatorRoles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CreatorRoles {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Creators {
    Table,
    Id,
    Image,
    Links,
    Name,
    NameRuby,
}

#[derive(DeriveIden)]
enum Circles {
    Table,
    Id,
    Image,
    Links,
    Name,
    NameRuby,
}

#[derive(DeriveIden)]
enum CirclesCreators {
    Table,
    CircleId,
    CreatorId,
}

#[derive(DeriveIden)]
enum CreatorRolesCreators {
    Table,
    CreatorRoleId,
    CreatorId,
}
