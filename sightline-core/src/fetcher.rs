use async_trait::async_trait;

use crate::error::SightlineError;
use crate::types::{DateRange, EntityId, SightingRecord, SiteId};

/// Record-store boundary consumed by the review composer.
///
/// Implementations return the raw sighting records for one entity within a
/// date range, optionally restricted to a single site. The composer treats
/// this as the only suspension point in a review; everything downstream of it
/// is pure computation.
///
/// Contract notes:
/// - An entity that exists but has no records in range yields `Ok(vec![])`,
///   never an error.
/// - An identifier that does not resolve at all yields
///   [`SightlineError::UnknownEntity`] so callers can distinguish it from
///   transport failures.
/// - Retries, caching, and connection management belong behind this trait,
///   not in the aggregation logic, which has no side effects to replay.
#[async_trait]
pub trait SightingFetcher: Send + Sync {
    /// Stable name of the backing store, used in logs and error tags.
    fn name(&self) -> &'static str;

    /// Fetch the sighting records for `(entity, site?)` within `range`.
    async fn fetch(
        &self,
        entity: &EntityId,
        site: Option<&SiteId>,
        range: DateRange,
    ) -> Result<Vec<SightingRecord>, SightlineError>;
}
