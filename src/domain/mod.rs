// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含书目模型的核心定义，包括：
/// - 领域模型（models）：实体结构及其行级检查约束
/// - 仓库接口（repositories）：按实体簇划分的持久化契约与错误分类
///
/// 领域层不依赖具体的存储实现。
pub mod models;
pub mod repositories;
