//! Chart-ready series and the JSON report envelope returned to callers.

use chrono::NaiveDate;
use serde::Serialize;

use crate::types::{EntityId, SiteId};

/// One (label, count) point; exactly one per bucket of the shared plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesPoint {
    /// X-axis label, copied from the bucket.
    pub label: String,
    /// Sum of sighting counts that fell into the bucket.
    pub count: u64,
}

/// A bucket-aligned series for one entity (optionally at one site).
///
/// `points.len()` always equals the shared plan's bucket count; buckets with
/// no matching records carry a zero, never a gap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeries {
    /// Entity the series belongs to.
    pub entity: EntityId,
    /// Site filter the series was aggregated under, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<SiteId>,
    /// One point per bucket, in bucket order.
    pub points: Vec<SeriesPoint>,
}

/// Wire-level review type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReviewType {
    /// All sites together.
    Overall,
    /// One site only.
    SingleSite,
    /// Two sites side by side.
    Comparison,
}

impl std::fmt::Display for ReviewType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Overall => "overall",
            Self::SingleSite => "single-site",
            Self::Comparison => "comparison",
        })
    }
}

/// Per-site half of a comparison review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSeries {
    /// The site these series were aggregated at.
    pub site: SiteId,
    /// One series per requested entity, in caller order.
    pub series: Vec<TimeSeries>,
}

/// The series payload, shaped by the review scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ReviewSeries {
    /// Overall and single-site reviews: one series per entity, caller order.
    Single(Vec<TimeSeries>),
    /// Comparison reviews: the same entities aggregated at each site.
    #[serde(rename_all = "camelCase")]
    Comparison {
        /// First requested site.
        site_a: SiteSeries,
        /// Second requested site.
        site_b: SiteSeries,
    },
}

/// The complete, JSON-serializable result of one review.
///
/// Field names serialize in camelCase (`reviewType`, `fromDate`, ...) to match
/// the consuming chart layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewReport {
    /// Which review mode produced this report.
    pub review_type: ReviewType,
    /// Start of the reviewed range (inclusive).
    pub from_date: NaiveDate,
    /// End of the reviewed range (inclusive).
    pub to_date: NaiveDate,
    /// The requested entities, in caller order.
    pub entities: Vec<EntityId>,
    /// The bucket-aligned series.
    pub series: ReviewSeries,
}
