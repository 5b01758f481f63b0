// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含书目实体、约束规则和仓库接口
pub mod domain;

/// 基础设施模块
///
/// 提供数据库连接、实体映射、模式目录与仓库实现
pub mod infrastructure;

/// 工具模块
///
/// 提供日志初始化等通用功能
pub mod utils;
