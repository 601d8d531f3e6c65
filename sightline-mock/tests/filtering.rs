use chrono::NaiveDate;
use sightline_core::{DateRange, EntityId, SightingFetcher, SightlineError, SiteId};
use sightline_mock::MockFetcher;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn year_2021() -> DateRange {
    DateRange::new(d(2021, 1, 1), d(2021, 12, 31)).unwrap()
}

#[tokio::test]
async fn filters_by_entity_and_range() {
    let mock = MockFetcher::new();
    let records = mock
        .fetch(
            &EntityId::new("eurasian-otter"),
            None,
            DateRange::new(d(2021, 1, 1), d(2021, 3, 31)).unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(records.len(), 4);
    assert!(records.iter().all(|r| r.entity.as_str() == "eurasian-otter"));
    assert!(records.iter().all(|r| r.date <= d(2021, 3, 31)));
}

#[tokio::test]
async fn filters_by_site() {
    let mock = MockFetcher::new();
    let site = SiteId::new("mill-pond");
    let records = mock
        .fetch(&EntityId::new("water-vole"), Some(&site), year_2021())
        .await
        .unwrap();

    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|r| r.site == Some(site.clone())));
}

#[tokio::test]
async fn unresolved_entity_is_distinguished() {
    let mock = MockFetcher::new();
    let err = mock
        .fetch(&EntityId::new("loch-ness-monster"), None, year_2021())
        .await
        .unwrap_err();

    assert!(matches!(err, SightlineError::UnknownEntity { .. }));
}

#[tokio::test]
async fn allowed_entity_without_records_returns_empty() {
    let mock = MockFetcher::new().allow_entity(EntityId::new("pine-marten"));
    let records = mock
        .fetch(&EntityId::new("pine-marten"), None, year_2021())
        .await
        .unwrap();

    assert!(records.is_empty());
}

#[tokio::test]
async fn forced_failure_is_a_fetch_error() {
    let mock = MockFetcher::new();
    let err = mock
        .fetch(&EntityId::new("FAIL"), None, year_2021())
        .await
        .unwrap_err();

    assert!(matches!(err, SightlineError::Fetch { .. }));
}
