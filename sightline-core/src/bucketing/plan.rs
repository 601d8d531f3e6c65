use chrono::{Datelike, Duration, NaiveDate};

use crate::types::{Bucket, BucketMode, BucketPlan, DateRange};

/// Nominal ceiling on x-axis labels in adaptive mode.
///
/// The interval search doubles until the range fits under this many strides.
/// The forced start-of-range boundary can add one more label on top, so the
/// hard bound on a plan's length is `MAX_CHART_LABELS + 1`.
pub const MAX_CHART_LABELS: i64 = 20;

/// Day count that triggers calendar-year bucketing.
///
/// A literal 365: a leap year spans 366 days from January 1st and deliberately
/// falls through to adaptive mode. Preserved behavior, not an oversight.
const CALENDAR_YEAR_DAYS: i64 = 365;

const MONTH_LABELS: [&str; 12] = [
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
];

/// Compute the shared bucket boundaries for a review range.
///
/// Pure and deterministic: the same range always yields the same plan, and a
/// valid [`DateRange`] never fails to plan. A range spanning exactly 365 days
/// from a January 1st buckets by calendar month; every other range gets
/// fixed-stride buckets whose width doubles geometrically until at most
/// [`MAX_CHART_LABELS`] strides cover the range.
#[must_use]
pub fn plan(range: DateRange) -> BucketPlan {
    if is_calendar_year(range) {
        month_plan(range)
    } else {
        interval_plan(range)
    }
}

fn is_calendar_year(range: DateRange) -> bool {
    range.days() == CALENDAR_YEAR_DAYS && range.from().month() == 1 && range.from().day() == 1
}

/// Twelve buckets, one per calendar month of the start year.
///
/// Each bucket's upper bound is the last calendar day of its month, so
/// boundaries step by each month's true day count rather than a fixed stride.
/// The range start itself is the implicit lower bound of the January bucket,
/// never a labeled boundary of its own.
fn month_plan(range: DateRange) -> BucketPlan {
    let year = range.from().year();
    let mut buckets = Vec::with_capacity(MONTH_LABELS.len());
    let mut lower: Option<NaiveDate> = None;

    for (month, label) in (1u32..=12).zip(MONTH_LABELS) {
        let upper = month_end(year, month);
        buckets.push(Bucket {
            label: label.to_string(),
            lower_exclusive: lower,
            upper_inclusive: upper,
        });
        lower = Some(upper);
    }

    BucketPlan::new(BucketMode::Monthly, buckets)
}

fn month_end(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// Fixed-stride buckets walked backward from the range end.
///
/// The stride starts at one day and doubles while the range still needs more
/// than [`MAX_CHART_LABELS`] strides. Boundaries are laid down from the range
/// end in stride-sized steps while they stay strictly above the start, then
/// the start itself is appended as the earliest boundary, so the oldest
/// stride may be shorter than the others.
fn interval_plan(range: DateRange) -> BucketPlan {
    let days = range.days();
    let mut interval = 1i64;
    while days > interval * MAX_CHART_LABELS {
        interval *= 2;
    }

    let mut uppers = Vec::new();
    let mut cursor = range.to();
    while cursor > range.from() {
        uppers.push(cursor);
        cursor = cursor - Duration::days(interval);
    }
    uppers.push(range.from());
    uppers.reverse();

    let mut buckets = Vec::with_capacity(uppers.len());
    let mut lower: Option<NaiveDate> = None;
    for upper in uppers {
        buckets.push(Bucket {
            label: upper.to_string(),
            lower_exclusive: lower,
            upper_inclusive: upper,
        });
        lower = Some(upper);
    }

    BucketPlan::new(BucketMode::Interval { days: interval }, buckets)
}
