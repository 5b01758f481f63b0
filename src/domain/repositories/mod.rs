// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 该模块定义了领域层的仓库接口，遵循依赖倒置原则。
/// 仓库接口定义了数据持久化的抽象契约，具体实现由基础设施层提供。
///
/// 包含的仓库接口：
/// - 书目基础仓库（catalog_repository）：开本与体裁树
/// - 作者仓库（creator_repository）：角色、作者、社团及其关联
/// - 即卖会仓库（event_repository）：即卖会系列与场次
/// - 出版社仓库（publisher_repository）：出版社与品牌
/// - ISBN 仓库（isbn_repository）：C 码与 ISBN 登记链
/// - 书籍仓库（book_repository）：书籍、同人志、杂志、系列及书籍关联
///
/// 所有写操作的失败都归入 [`error::RepositoryError`] 的五类约束错误之一。
pub mod book_repository;
pub mod catalog_repository;
pub mod creator_repository;
pub mod error;
pub mod event_repository;
pub mod isbn_repository;
pub mod publisher_repository;
