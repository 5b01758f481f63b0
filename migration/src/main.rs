// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// 书目模式迁移命令行
///
/// 支持 up / down / fresh / status 等标准子命令，连接串取自 DATABASE_URL
#[async_std::main]
async fn main() {
    cli::run_cli(migration::Migrator).await;
}
