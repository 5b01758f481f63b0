// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::error::RepositoryError;
use crate::domain::models::event::{Event, EventSeries};
use async_trait::async_trait;
use uuid::Uuid;

/// 即卖会仓库特质
#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create_event_series(&self, series: &EventSeries) -> Result<EventSeries, RepositoryError>;
    async fn find_event_series(&self, id: Uuid) -> Result<Option<EventSeries>, RepositoryError>;
    async fn update_event_series(&self, series: &EventSeries) -> Result<EventSeries, RepositoryError>;
    /// 删除系列，所属场次的系列引用置空
    async fn delete_event_series(&self, id: Uuid) -> Result<(), RepositoryError>;

    async fn create_event(&self, event: &Event) -> Result<Event, RepositoryError>;
    async fn find_event(&self, id: Uuid) -> Result<Option<Event>, RepositoryError>;
    async fn find_event_by_name_and_number(
        &self,
        name: &str,
        number: i32,
    ) -> Result<Option<Event>, RepositoryError>;
    async fn update_event(&self, event: &Event) -> Result<Event, RepositoryError>;
    async fn delete_event(&self, id: Uuid) -> Result<(), RepositoryError>;
    /// 按届数、开始日期排序列出系列中的场次
    async fn list_events_in_series(
        &self,
        event_series_id: Uuid,
    ) -> Result<Vec<Event>, RepositoryError>;
}
