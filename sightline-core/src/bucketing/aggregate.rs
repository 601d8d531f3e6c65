use crate::report::{SeriesPoint, TimeSeries};
use crate::types::{BucketPlan, EntityId, SightingRecord, SiteId};

/// Sum record counts into the plan's buckets, one total per bucket.
///
/// A record lands in the first bucket whose inclusive upper bound is on or
/// after its date, which with contiguous buckets is exactly the
/// `(lower, upper]` interval: a record dated on an internal boundary belongs
/// to the earlier bucket, never the later one, and never both. The first
/// bucket's open lower bound admits dates before the range start if the
/// fetcher supplied any; dates past the final bound are dropped. Input is
/// assumed pre-filtered by entity and site; no re-filtering happens here.
#[must_use]
pub fn aggregate(plan: &BucketPlan, records: &[SightingRecord]) -> Vec<u64> {
    let buckets = plan.buckets();
    let mut totals = vec![0u64; buckets.len()];

    for record in records {
        let idx = buckets.partition_point(|b| b.upper_inclusive < record.date);
        if idx < buckets.len() {
            totals[idx] += record.count;
        }
    }

    totals
}

/// Aggregate and wrap the totals as a chart-ready [`TimeSeries`].
///
/// The result always has one point per bucket, zero-filled where no record
/// matched: "no data" is a flat line, not a missing series.
#[must_use]
pub fn series(
    plan: &BucketPlan,
    entity: EntityId,
    site: Option<SiteId>,
    records: &[SightingRecord],
) -> TimeSeries {
    let points = plan
        .buckets()
        .iter()
        .zip(aggregate(plan, records))
        .map(|(bucket, count)| SeriesPoint {
            label: bucket.label.clone(),
            count,
        })
        .collect();

    TimeSeries {
        entity,
        site,
        points,
    }
}
