// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 默认日志过滤：应用自身 debug，其余 info，sqlx 语句日志仅在 warn 以上输出
const DEFAULT_FILTER: &str = "info,bookshelf=debug,sqlx=warn";

/// 初始化日志
///
/// 过滤规则取自 `RUST_LOG`；`BOOKSHELF_LOG_FORMAT=json` 时输出 JSON 行
pub fn init_telemetry() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_FILTER.into());

    let json = std::env::var("BOOKSHELF_LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
