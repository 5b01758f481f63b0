// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 按实体簇组织：
/// - 书目基础（catalog）：开本、体裁树
/// - 作者（creator）：角色、作者、社团
/// - 即卖会（event）：系列与场次
/// - 出版社（publisher）：出版社与品牌
/// - ISBN 登记链（isbn）：C 码、地区、前缀、登记组、出版者、出版物及详情
/// - 书籍（book）：书籍、同人志、杂志、系列与作者署名关联
///
/// 约束（constraint）子模块提供所有实体共用的检查约束工具。
pub mod book;
pub mod catalog;
pub mod constraint;
pub mod creator;
pub mod event;
pub mod isbn;
pub mod publisher;
