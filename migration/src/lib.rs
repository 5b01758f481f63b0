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

pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_catalog_primitives;
mod m20250101_000002_create_creators;
mod m20250101_000003_create_events;
mod m20250101_000004_create_publishers;
mod m20250101_000005_create_isbn_chain;
mod m20250101_000006_create_book_sources;
mod m20250101_000007_create_publication_details;
mod m20250101_000008_create_books;

/// 数据库迁移器
///
/// 按依赖顺序创建书目模型的全部表：先建被引用的表，再建引用它们的表
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    /// 获取所有迁移
    ///
    /// # 返回值
    ///
    /// 返回迁移列表
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_catalog_primitives::Migration),
            Box::new(m20250101_000002_create_creators::Migration),
            Box::new(m20250101_000003_create_events::Migration),
            Box::new(m20250101_000004_create_publishers::Migration),
            Box::new(m20250101_000005_create_isbn_chain::Migration),
            Box::new(m20250101_000006_create_book_sources::Migration),
            Box::new(m20250101_000007_create_publication_details::Migration),
            Box::new(m20250101_000008_create_books::Migration),
        ]
    }
}
