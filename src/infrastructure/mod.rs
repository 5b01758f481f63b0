// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 提供领域仓库接口背后的持久化实现：
/// - 数据库（database）：连接池、实体映射、约束目录与引用完整性
/// - 仓库实现（repositories）：基于 SeaORM 的仓库实现
pub mod database;
pub mod repositories;
