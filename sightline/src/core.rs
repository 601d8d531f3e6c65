use std::sync::Arc;
use std::time::Duration;

use sightline_core::{DateRange, EntityId, SightingFetcher, SightingRecord, SightlineError, SiteId};

/// Tuning knobs for a [`Sightline`] instance.
#[derive(Debug, Clone)]
pub struct SightlineConfig {
    /// Timeout applied to each individual fetch, if any.
    pub fetch_timeout: Option<Duration>,
    /// Deadline applied to a whole review fan-out, if any.
    pub request_timeout: Option<Duration>,
}

impl Default for SightlineConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: Some(Duration::from_secs(5)),
            request_timeout: None,
        }
    }
}

/// Orchestrator that turns review requests into bucket-aligned reports.
pub struct Sightline {
    pub(crate) fetcher: Arc<dyn SightingFetcher>,
    pub(crate) cfg: SightlineConfig,
}

impl std::fmt::Debug for Sightline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sightline")
            .field("cfg", &self.cfg)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing a [`Sightline`] with custom configuration.
pub struct SightlineBuilder {
    fetcher: Option<Arc<dyn SightingFetcher>>,
    cfg: SightlineConfig,
}

impl Default for SightlineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SightlineBuilder {
    /// Create a new builder with conservative defaults: a 5 second per-fetch
    /// timeout and no overall deadline.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fetcher: None,
            cfg: SightlineConfig::default(),
        }
    }

    /// Register the record store the composer will fetch from. Required.
    #[must_use]
    pub fn fetcher(mut self, fetcher: Arc<dyn SightingFetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// Bound each individual fetch. `None` disables the per-fetch timeout.
    #[must_use]
    pub const fn fetch_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.cfg.fetch_timeout = timeout;
        self
    }

    /// Bound a whole review. On expiry the review fails with
    /// [`SightlineError::RequestTimeout`] and in-flight fetches are dropped.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Build the [`Sightline`] orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no fetcher has been registered via [`Self::fetcher`].
    pub fn build(self) -> Result<Sightline, SightlineError> {
        let fetcher = self.fetcher.ok_or_else(|| {
            SightlineError::InvalidArg(
                "no fetcher registered; add a record store via fetcher(...)".to_string(),
            )
        })?;
        Ok(Sightline {
            fetcher,
            cfg: self.cfg,
        })
    }
}

impl Sightline {
    /// Start building a new `Sightline` instance.
    #[must_use]
    pub fn builder() -> SightlineBuilder {
        SightlineBuilder::new()
    }

    /// One fetch against the store, bounded by the per-fetch timeout.
    pub(crate) async fn fetch_records(
        &self,
        entity: &EntityId,
        site: Option<&SiteId>,
        range: DateRange,
    ) -> Result<Vec<SightingRecord>, SightlineError> {
        let fut = self.fetcher.fetch(entity, site, range);
        match self.cfg.fetch_timeout {
            Some(timeout) => (tokio::time::timeout(timeout, fut).await).unwrap_or_else(|_| {
                Err(SightlineError::fetch_timeout(
                    entity.as_str(),
                    site.map(SiteId::as_str),
                ))
            }),
            None => fut.await,
        }
    }
}
