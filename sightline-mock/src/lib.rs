//! Deterministic in-memory [`SightingFetcher`] for tests and examples.

use std::collections::BTreeSet;

use async_trait::async_trait;
use sightline_core::{
    DateRange, EntityId, SightingFetcher, SightingRecord, SightlineError, SiteId,
};

mod fixtures;

pub use fixtures::sightings as fixture_sightings;

/// Mock fetcher backed by a fixed record set.
///
/// Filtering mirrors a real store: entity match, optional site match, and
/// date-range containment. Identifiers with no presence in the store resolve
/// to [`SightlineError::UnknownEntity`]; register data-less entities via
/// [`MockFetcher::allow_entity`] when a test needs an all-zero series.
///
/// Two magic entity ids steer failure paths:
/// - `FAIL` returns a forced store error;
/// - `TIMEOUT` sleeps briefly before returning no records, long enough to
///   trip tight orchestrator deadlines.
pub struct MockFetcher {
    records: Vec<SightingRecord>,
    known: BTreeSet<EntityId>,
}

impl Default for MockFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl MockFetcher {
    /// Fetcher over the built-in fixture dataset.
    #[must_use]
    pub fn new() -> Self {
        Self::with_records(fixtures::sightings())
    }

    /// Fetcher over a caller-supplied record set.
    #[must_use]
    pub fn with_records(records: Vec<SightingRecord>) -> Self {
        let known = records.iter().map(|r| r.entity.clone()).collect();
        Self { records, known }
    }

    /// Register an entity that exists but has no records.
    #[must_use]
    pub fn allow_entity(mut self, entity: EntityId) -> Self {
        self.known.insert(entity);
        self
    }
}

#[async_trait]
impl SightingFetcher for MockFetcher {
    fn name(&self) -> &'static str {
        "sightline-mock"
    }

    async fn fetch(
        &self,
        entity: &EntityId,
        site: Option<&SiteId>,
        range: DateRange,
    ) -> Result<Vec<SightingRecord>, SightlineError> {
        match entity.as_str() {
            "FAIL" => {
                return Err(SightlineError::fetch(
                    entity.as_str(),
                    site.map(SiteId::as_str),
                    "forced failure",
                ));
            }
            "TIMEOUT" => {
                // Long enough to trip millisecond-scale deadlines, short
                // enough to keep the default 5s timeout comfortable.
                tokio::time::sleep(std::time::Duration::from_millis(200)).await;
                return Ok(Vec::new());
            }
            _ => {}
        }

        if !self.known.contains(entity) {
            return Err(SightlineError::unknown_entity(entity.as_str()));
        }

        Ok(self
            .records
            .iter()
            .filter(|r| r.entity == *entity)
            .filter(|r| site.is_none_or(|s| r.site.as_ref() == Some(s)))
            .filter(|r| range.contains(r.date))
            .cloned()
            .collect())
    }
}
