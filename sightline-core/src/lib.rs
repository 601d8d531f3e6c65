//! sightline-core
//!
//! Core types, traits, and utilities shared across the sightline ecosystem.
//!
//! - `types`: common data structures (identifiers, records, date ranges, bucket plans).
//! - `report`: chart-ready series and the review report envelope.
//! - `fetcher`: the `SightingFetcher` trait implemented by record stores.
//! - `bucketing`: the bucket planner and the per-series aggregator.
//!
//! The planner and aggregator are pure functions over small, bounded inputs
//! (at most a handful of entities and a few dozen buckets per review). The
//! only suspension point in the whole pipeline is the `SightingFetcher` call,
//! which is why that trait is async while everything else is synchronous.
#![warn(missing_docs)]

/// Bucket planning and count aggregation.
pub mod bucketing;
/// The unified error type for the sightline workspace.
pub mod error;
/// The `SightingFetcher` record-store trait.
pub mod fetcher;
/// Chart-ready series and report envelopes.
pub mod report;
pub mod types;

pub use bucketing::{MAX_CHART_LABELS, aggregate, plan, series};
pub use error::SightlineError;
pub use fetcher::SightingFetcher;
pub use report::{ReviewReport, ReviewSeries, ReviewType, SeriesPoint, SiteSeries, TimeSeries};
pub use types::*;
