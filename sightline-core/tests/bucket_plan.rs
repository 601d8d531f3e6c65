use chrono::{Duration, NaiveDate};
use sightline_core::{BucketMode, DateRange, plan};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn range(from: NaiveDate, to: NaiveDate) -> DateRange {
    DateRange::new(from, to).unwrap()
}

#[test]
fn common_year_from_jan_1_buckets_by_month() {
    let p = plan(range(d(2021, 1, 1), d(2021, 12, 31)));

    assert_eq!(p.mode(), BucketMode::Monthly);
    assert_eq!(p.len(), 12);
    assert_eq!(
        p.labels(),
        vec![
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ]
    );

    let buckets = p.buckets();
    // January runs from the implicit range start through the 31st.
    assert_eq!(buckets[0].lower_exclusive, None);
    assert_eq!(buckets[0].upper_inclusive, d(2021, 1, 31));
    assert_eq!(buckets[1].upper_inclusive, d(2021, 2, 28));
    assert_eq!(buckets[11].upper_inclusive, d(2021, 12, 31));
}

#[test]
fn month_boundaries_step_by_true_month_lengths() {
    let p = plan(range(d(2021, 1, 1), d(2021, 12, 31)));
    let uppers: Vec<_> = p.buckets().iter().map(|b| b.upper_inclusive).collect();
    let expected: [i64; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

    let mut cursor = d(2020, 12, 31);
    for (upper, len) in uppers.iter().zip(expected) {
        cursor = cursor + Duration::days(len);
        assert_eq!(*upper, cursor);
    }
}

#[test]
fn leap_year_falls_through_to_adaptive_mode() {
    // 2024-01-01..2024-12-31 spans 366 days, so the literal 365-day check
    // does not fire.
    let p = plan(range(d(2024, 1, 1), d(2024, 12, 31)));
    assert_eq!(p.mode(), BucketMode::Interval { days: 32 });
}

#[test]
fn year_not_starting_jan_1_is_adaptive() {
    let p = plan(range(d(2021, 3, 1), d(2022, 2, 28)));
    assert!(matches!(p.mode(), BucketMode::Interval { .. }));
}

#[test]
fn ten_day_range_yields_one_bucket_per_day() {
    let from = d(2021, 3, 1);
    let to = d(2021, 3, 10);
    let p = plan(range(from, to));

    assert_eq!(p.mode(), BucketMode::Interval { days: 1 });
    assert_eq!(p.len(), 10);
    for (i, bucket) in p.buckets().iter().enumerate() {
        assert_eq!(bucket.upper_inclusive, from + Duration::days(i as i64));
    }
}

#[test]
fn hundred_day_range_doubles_to_eight_day_strides() {
    let from = d(2021, 2, 1);
    let to = from + Duration::days(99);
    let p = plan(range(from, to));

    assert_eq!(p.mode(), BucketMode::Interval { days: 8 });

    let buckets = p.buckets();
    // Thirteen strides walked back from the end, plus the forced range start.
    assert_eq!(buckets.len(), 14);
    assert_eq!(buckets[0].upper_inclusive, from);
    assert_eq!(buckets[buckets.len() - 1].upper_inclusive, to);
    // The oldest stride is shorter than the interval.
    assert_eq!(buckets[1].upper_inclusive, from + Duration::days(3));
    assert_eq!(buckets[2].upper_inclusive, from + Duration::days(11));
}

#[test]
fn single_day_range_is_one_bucket() {
    let day = d(2021, 7, 4);
    let p = plan(range(day, day));

    assert_eq!(p.len(), 1);
    assert_eq!(p.buckets()[0].lower_exclusive, None);
    assert_eq!(p.buckets()[0].upper_inclusive, day);
    assert_eq!(p.buckets()[0].label, "2021-07-04");
}

#[test]
fn adaptive_labels_are_iso_dates() {
    let p = plan(range(d(2021, 3, 1), d(2021, 3, 3)));
    assert_eq!(p.labels(), vec!["2021-03-01", "2021-03-02", "2021-03-03"]);
}

#[test]
fn planning_twice_yields_identical_plans() {
    let r = range(d(2019, 6, 15), d(2020, 2, 3));
    assert_eq!(plan(r), plan(r));
}
