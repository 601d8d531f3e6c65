//! Sightline composes wildlife sighting records into chart-ready time series.
//!
//! Overview
//! - One [`Sightline`] instance wraps a [`SightingFetcher`] record store and
//!   answers review requests: a handful of entities, an optional pair of site
//!   filters, and an inclusive date range.
//! - Every review computes a single shared bucket plan (calendar months for a
//!   full-year range, adaptive fixed strides otherwise) so all series in one
//!   response share identical x-axis boundaries.
//! - Fetches for the (entity, site) cross product run concurrently; the first
//!   failure aborts the whole review and cancels its in-flight siblings; a
//!   review never returns a partial chart.
//!
//! Example
//! ```rust,ignore
//! use std::sync::Arc;
//! use chrono::NaiveDate;
//! use sightline::{DateRange, EntityId, ReviewRequest, ReviewScope, Sightline};
//!
//! let sightline = Sightline::builder()
//!     .fetcher(Arc::new(store))
//!     .request_timeout(std::time::Duration::from_secs(10))
//!     .build()?;
//!
//! let report = sightline
//!     .review(&ReviewRequest {
//!         entities: vec![EntityId::new("eurasian-otter")],
//!         scope: ReviewScope::Overall,
//!         range: DateRange::new(
//!             NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
//!             NaiveDate::from_ymd_opt(2021, 12, 31).unwrap(),
//!         )?,
//!     })
//!     .await?;
//! ```
//!
//! See `sightline/examples/` for a runnable end-to-end demonstration.
#![warn(missing_docs)]

pub(crate) mod core;
mod review;

pub use core::{Sightline, SightlineBuilder, SightlineConfig};
pub use review::{MAX_REVIEW_ENTITIES, ReviewRequest};

// Re-export core types for convenience
pub use sightline_core::{
    Bucket, BucketMode, BucketPlan, DateRange, EntityId, ReviewReport, ReviewScope, ReviewSeries,
    ReviewType, SeriesPoint, SightingFetcher, SightingRecord, SightlineError, SiteId, SiteSeries,
    TimeSeries,
};
