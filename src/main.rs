// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use bookshelf::config::settings::Settings;
use bookshelf::infrastructure::database::catalog::Catalog;
use bookshelf::infrastructure::database::connection;
use bookshelf::infrastructure::database::integrity::verify_schema;
use bookshelf::utils::telemetry;
use migration::{Migrator, MigratorTrait};
use tracing::info;

/// 主函数
///
/// 初始化日志与配置，连接数据库并应用迁移，最后核对约束目录中的每张表
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting bookshelf...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. Connect to database
    let db = connection::create_pool(&settings.database).await?;
    info!("Database connection established");

    if settings.database.run_migrations {
        info!("Running database migrations...");
        Migrator::up(&db, None).await?;
        info!("Database migrations applied");
    }

    // 4. Verify every catalogued table is reachable
    let catalog = Catalog::bookshelf();
    let counts = verify_schema(&db, &catalog).await?;
    for (table, rows) in &counts {
        info!(table, rows, "Table ready");
    }
    info!(tables = counts.len(), "Catalogue schema verified");

    db.close().await?;
    Ok(())
}
