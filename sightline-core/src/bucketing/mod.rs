//! Bucket planning and count aggregation.
//!
//! One shared implementation serves every consumer (live chart API and
//! server-rendered reports alike), so the boundary semantics cannot drift
//! between call sites.

mod aggregate;
mod plan;

pub use aggregate::{aggregate, series};
pub use plan::{MAX_CHART_LABELS, plan};
