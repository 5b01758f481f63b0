// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::{date, setup};
use bookshelf::domain::models::event::{Event, EventSeries, EVENT_DATE_ORDER};
use bookshelf::domain::repositories::error::RepositoryError;
use bookshelf::domain::repositories::event_repository::EventRepository;

/// 结束日期早于开始日期的即卖会被拒绝
#[tokio::test]
async fn test_event_date_order() {
    let ctx = setup().await;
    let repo = ctx.event_repo();

    let event = Event::new("Reversed", "reversed", date(2024, 5, 2), date(2024, 5, 1));
    let err = repo.create_event(&event).await.unwrap_err();
    match err {
        RepositoryError::ConstraintViolation(v) => {
            assert_eq!(v.table, "events");
            assert_eq!(v.constraint, EVENT_DATE_ORDER);
        }
        other => panic!("expected ConstraintViolation, got {other:?}"),
    }

    // Single-day events are fine
    let one_day = Event::new("One day", "oneday", date(2024, 5, 1), date(2024, 5, 1));
    repo.create_event(&one_day).await.unwrap();
}

/// 同名即卖会以回数区分
#[tokio::test]
async fn test_event_name_and_number_unique() {
    let ctx = setup().await;
    let repo = ctx.event_repo();

    let first = repo
        .create_event(&Event::new("Comic Market", "comiket", date(2023, 12, 30), date(2023, 12, 31)).numbered(103))
        .await
        .unwrap();
    repo.create_event(&Event::new("Comic Market", "comiket", date(2024, 8, 11), date(2024, 8, 12)).numbered(104))
        .await
        .unwrap();

    let err = repo
        .create_event(&Event::new("Comic Market", "comiket", date(2024, 8, 11), date(2024, 8, 12)).numbered(104))
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::DuplicateKey { ref table, .. } if table == "events"));

    let found = repo
        .find_event_by_name_and_number("Comic Market", 103)
        .await
        .unwrap();
    assert_eq!(found, Some(first));
    assert!(repo
        .find_event_by_name_and_number("Comic Market", 1)
        .await
        .unwrap()
        .is_none());
}

/// 系列内按回数排序；删除系列时即卖会保留
#[tokio::test]
async fn test_event_series() {
    let ctx = setup().await;
    let repo = ctx.event_repo();
    let series = repo
        .create_event_series(&EventSeries::new("Comitia", "comitia"))
        .await
        .unwrap();

    let later = repo
        .create_event(
            &Event::new("Comitia", "comitia", date(2024, 5, 5), date(2024, 5, 5))
                .numbered(148)
                .in_series(series.id),
        )
        .await
        .unwrap();
    let earlier = repo
        .create_event(
            &Event::new("Comitia", "comitia", date(2024, 2, 11), date(2024, 2, 11))
                .numbered(147)
                .in_series(series.id),
        )
        .await
        .unwrap();

    let events = repo.list_events_in_series(series.id).await.unwrap();
    assert_eq!(events, vec![earlier.clone(), later.clone()]);

    let mut renamed = series.clone();
    renamed.name = "COMITIA".to_string();
    repo.update_event_series(&renamed).await.unwrap();
    assert_eq!(repo.find_event_series(series.id).await.unwrap(), Some(renamed));

    repo.delete_event_series(series.id).await.unwrap();
    let stored = repo.find_event(later.id).await.unwrap().unwrap();
    assert_eq!(stored.event_series_id, None);
}

/// 回数不能为负
#[tokio::test]
async fn test_event_number_non_negative() {
    let ctx = setup().await;
    let event = Event::new("Negative", "negative", date(2024, 1, 1), date(2024, 1, 1)).numbered(-1);

    let err = ctx.event_repo().create_event(&event).await.unwrap_err();
    assert!(err.is_constraint());
}
