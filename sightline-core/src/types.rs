//! Foundational value types shared by the planner, aggregator, and composer.
//!
//! Everything here is an immutable value object created fresh per review; no
//! shared mutable state crosses requests.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::SightlineError;

/// Identifier of a tracked entity (a species, or any other countable category).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Wrap an identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Identifier of an observation site.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteId(String);

impl SiteId {
    /// Wrap an identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SiteId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// One dated observation count, as returned by a [`crate::SightingFetcher`].
///
/// Time-of-day is not significant; all comparisons are by calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SightingRecord {
    /// Entity this count belongs to.
    pub entity: EntityId,
    /// Site the sighting was logged at; `None` means the store did not
    /// attribute it to a site.
    pub site: Option<SiteId>,
    /// Calendar date of the observation.
    pub date: NaiveDate,
    /// Number of individuals observed on that date.
    pub count: u64,
}

/// An inclusive calendar-date range with `from <= to` enforced at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    from: NaiveDate,
    to: NaiveDate,
}

impl DateRange {
    /// Build a range, rejecting `from > to`.
    ///
    /// # Errors
    /// Returns [`SightlineError::InvalidRange`] when the end precedes the start.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, SightlineError> {
        if from > to {
            return Err(SightlineError::InvalidRange(format!(
                "end {to} precedes start {from}"
            )));
        }
        Ok(Self { from, to })
    }

    /// First day of the range (inclusive).
    #[must_use]
    pub const fn from(&self) -> NaiveDate {
        self.from
    }

    /// Last day of the range (inclusive).
    #[must_use]
    pub const fn to(&self) -> NaiveDate {
        self.to
    }

    /// Number of calendar days the range spans, counting both endpoints.
    ///
    /// A single-day range spans 1 day; a common year starting January 1st
    /// spans exactly 365.
    #[must_use]
    pub fn days(&self) -> i64 {
        (self.to - self.from).num_days() + 1
    }

    /// Whether `date` falls inside the range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}

/// One contiguous date sub-range of a review, rendered as a single x-axis point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket {
    /// X-axis label (a month name in month mode, an ISO date otherwise).
    pub label: String,
    /// Exclusive lower bound; `None` on the first bucket, which admits any
    /// earlier date.
    pub lower_exclusive: Option<NaiveDate>,
    /// Inclusive upper bound.
    pub upper_inclusive: NaiveDate,
}

impl Bucket {
    /// Whether `date` falls inside this bucket's `(lower, upper]` interval.
    #[must_use]
    pub fn admits(&self, date: NaiveDate) -> bool {
        self.lower_exclusive.is_none_or(|lo| date > lo) && date <= self.upper_inclusive
    }
}

/// How a [`BucketPlan`] divided its range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BucketMode {
    /// Calendar-month buckets for a full-year review.
    Monthly,
    /// Fixed-stride buckets chosen by the adaptive interval search.
    Interval {
        /// Stride between boundaries, in days.
        days: i64,
    },
}

/// The ordered, contiguous set of buckets for one review.
///
/// Computed once per review and shared by every entity/site series so that
/// all series in one response use identical boundaries. Invariants upheld by
/// the planner: each bucket's lower bound equals the previous bucket's upper
/// bound, the first lower bound is open, and uppers strictly increase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketPlan {
    mode: BucketMode,
    buckets: Vec<Bucket>,
}

impl BucketPlan {
    pub(crate) fn new(mode: BucketMode, buckets: Vec<Bucket>) -> Self {
        Self { mode, buckets }
    }

    /// Which bucketing mode produced this plan.
    #[must_use]
    pub const fn mode(&self) -> BucketMode {
        self.mode
    }

    /// Number of buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Whether the plan holds no buckets. Never true for a valid range.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// The buckets, oldest to newest.
    #[must_use]
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// The x-axis labels, in bucket order.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.buckets.iter().map(|b| b.label.clone()).collect()
    }
}

/// Which sites a review covers, decided once at the request boundary.
///
/// The mode is derived from how many site filters the caller supplied, but it
/// is carried as an explicit tag so downstream logic never re-derives intent
/// from argument presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewScope {
    /// Aggregate every entity across all sites.
    Overall,
    /// Aggregate only records logged at one site.
    SingleSite(SiteId),
    /// Aggregate each entity at both sites, side by side.
    Comparison(SiteId, SiteId),
}

impl ReviewScope {
    /// Derive the scope from a caller-supplied site list.
    ///
    /// # Errors
    /// Returns [`SightlineError::InvalidArg`] when more than two sites are given.
    pub fn from_sites(sites: Vec<SiteId>) -> Result<Self, SightlineError> {
        let mut sites = sites.into_iter();
        match (sites.next(), sites.next(), sites.next()) {
            (None, ..) => Ok(Self::Overall),
            (Some(a), None, _) => Ok(Self::SingleSite(a)),
            (Some(a), Some(b), None) => Ok(Self::Comparison(a, b)),
            _ => Err(SightlineError::InvalidArg(
                "a review covers at most two sites".into(),
            )),
        }
    }

    /// The wire-level review type this scope maps to.
    #[must_use]
    pub const fn review_type(&self) -> crate::ReviewType {
        match self {
            Self::Overall => crate::ReviewType::Overall,
            Self::SingleSite(_) => crate::ReviewType::SingleSite,
            Self::Comparison(..) => crate::ReviewType::Comparison,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn range_rejects_reversed_endpoints() {
        let err = DateRange::new(d(2021, 5, 2), d(2021, 5, 1)).unwrap_err();
        assert!(matches!(err, SightlineError::InvalidRange(_)));
    }

    #[test]
    fn range_day_counts_are_inclusive() {
        let single = DateRange::new(d(2021, 5, 1), d(2021, 5, 1)).unwrap();
        assert_eq!(single.days(), 1);
        let year = DateRange::new(d(2021, 1, 1), d(2021, 12, 31)).unwrap();
        assert_eq!(year.days(), 365);
        let leap = DateRange::new(d(2024, 1, 1), d(2024, 12, 31)).unwrap();
        assert_eq!(leap.days(), 366);
    }

    #[test]
    fn scope_derivation_matches_site_count() {
        assert_eq!(ReviewScope::from_sites(vec![]).unwrap(), ReviewScope::Overall);
        assert_eq!(
            ReviewScope::from_sites(vec!["a".into()]).unwrap(),
            ReviewScope::SingleSite("a".into())
        );
        assert_eq!(
            ReviewScope::from_sites(vec!["a".into(), "b".into()]).unwrap(),
            ReviewScope::Comparison("a".into(), "b".into())
        );
        assert!(ReviewScope::from_sites(vec!["a".into(), "b".into(), "c".into()]).is_err());
    }

    #[test]
    fn first_bucket_admits_any_earlier_date() {
        let b = Bucket {
            label: "2021-01-05".into(),
            lower_exclusive: None,
            upper_inclusive: d(2021, 1, 5),
        };
        assert!(b.admits(d(2020, 12, 25)));
        assert!(b.admits(d(2021, 1, 5)));
        assert!(!b.admits(d(2021, 1, 6)));
    }
}
