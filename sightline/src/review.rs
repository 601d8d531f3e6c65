use futures::future::try_join_all;
use sightline_core::{
    BucketPlan, DateRange, EntityId, ReviewReport, ReviewScope, ReviewSeries, SightlineError,
    SiteId, SiteSeries, TimeSeries, bucketing,
};
use tracing::{debug, warn};

use crate::Sightline;

/// Ceiling on entities per review; bounds chart complexity, not the engine.
pub const MAX_REVIEW_ENTITIES: usize = 5;

/// One review's worth of selection state, passed in explicitly.
///
/// The range is already validated by [`DateRange::new`]; entity count is
/// checked by [`Sightline::review`] before any fetch occurs.
#[derive(Debug, Clone)]
pub struct ReviewRequest {
    /// Entities to chart, 1 to 5, in the order the caller wants them back.
    pub entities: Vec<EntityId>,
    /// Site coverage, derived once at the boundary.
    pub scope: ReviewScope,
    /// Inclusive date range under review.
    pub range: DateRange,
}

impl Sightline {
    /// Run one review: plan buckets once, fan out fetches, aggregate, compose.
    ///
    /// Per-series fetch+aggregate tasks are independent and run concurrently;
    /// the report preserves caller entity order regardless of which fetch
    /// completes first. Any single fetch failure aborts the whole review and
    /// drops the remaining in-flight fetches; consistency of the chart wins
    /// over best-effort partial rendering.
    ///
    /// # Errors
    /// - [`SightlineError::InvalidEntityCount`] for zero or more than five
    ///   entities, rejected before any fetch.
    /// - [`SightlineError::UnknownEntity`] when the store cannot resolve an
    ///   identifier.
    /// - [`SightlineError::Fetch`] / [`SightlineError::FetchTimeout`] when
    ///   the store fails for any (entity, site) pair.
    /// - [`SightlineError::RequestTimeout`] when the configured deadline
    ///   elapses.
    pub async fn review(&self, req: &ReviewRequest) -> Result<ReviewReport, SightlineError> {
        let count = req.entities.len();
        if count == 0 || count > MAX_REVIEW_ENTITIES {
            return Err(SightlineError::InvalidEntityCount { count });
        }

        let plan = bucketing::plan(req.range);
        debug!(
            days = req.range.days(),
            buckets = plan.len(),
            mode = ?plan.mode(),
            "computed shared bucket plan"
        );

        let sites: Vec<Option<&SiteId>> = match &req.scope {
            ReviewScope::Overall => vec![None],
            ReviewScope::SingleSite(site) => vec![Some(site)],
            ReviewScope::Comparison(a, b) => vec![Some(a), Some(b)],
        };

        let mut tasks = Vec::with_capacity(sites.len() * req.entities.len());
        for site in &sites {
            for entity in &req.entities {
                tasks.push(self.fetch_series(entity, *site, req.range, &plan));
            }
        }

        let mut all = match self.cfg.request_timeout {
            Some(deadline) => tokio::time::timeout(deadline, try_join_all(tasks))
                .await
                .map_err(|_| SightlineError::RequestTimeout)??,
            None => try_join_all(tasks).await?,
        };

        let series = match &req.scope {
            ReviewScope::Overall | ReviewScope::SingleSite(_) => ReviewSeries::Single(all),
            ReviewScope::Comparison(a, b) => {
                let site_b = all.split_off(req.entities.len());
                ReviewSeries::Comparison {
                    site_a: SiteSeries {
                        site: a.clone(),
                        series: all,
                    },
                    site_b: SiteSeries {
                        site: b.clone(),
                        series: site_b,
                    },
                }
            }
        };

        Ok(ReviewReport {
            review_type: req.scope.review_type(),
            from_date: req.range.from(),
            to_date: req.range.to(),
            entities: req.entities.clone(),
            series,
        })
    }

    /// Fetch and aggregate one (entity, site) series against the shared plan.
    async fn fetch_series(
        &self,
        entity: &EntityId,
        site: Option<&SiteId>,
        range: DateRange,
        plan: &BucketPlan,
    ) -> Result<TimeSeries, SightlineError> {
        let records = match self.fetch_records(entity, site, range).await {
            Ok(records) => records,
            Err(e) => {
                warn!(
                    entity = %entity,
                    site = site.map_or("all", SiteId::as_str),
                    from = %range.from(),
                    to = %range.to(),
                    store = self.fetcher.name(),
                    error = %e,
                    "sighting fetch failed"
                );
                return Err(e);
            }
        };

        Ok(bucketing::series(
            plan,
            entity.clone(),
            site.cloned(),
            &records,
        ))
    }
}
