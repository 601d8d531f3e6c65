//! End-to-end review against the mock record store.
//!
//! Run with: `cargo run --example review_demo`

use std::sync::Arc;

use chrono::NaiveDate;
use sightline::{
    DateRange, EntityId, ReviewRequest, ReviewScope, ReviewSeries, Sightline, SightlineError,
    SiteId,
};
use sightline_mock::MockFetcher;

#[tokio::main]
async fn main() -> Result<(), SightlineError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sightline=debug".into()),
        )
        .init();

    let sightline = Sightline::builder()
        .fetcher(Arc::new(MockFetcher::new()))
        .request_timeout(std::time::Duration::from_secs(10))
        .build()?;

    let range = DateRange::new(
        NaiveDate::from_ymd_opt(2021, 1, 1).expect("valid date"),
        NaiveDate::from_ymd_opt(2021, 12, 31).expect("valid date"),
    )?;

    let report = sightline
        .review(&ReviewRequest {
            entities: vec![
                EntityId::new("eurasian-otter"),
                EntityId::new("common-kingfisher"),
            ],
            scope: ReviewScope::Comparison(SiteId::new("riverbend"), SiteId::new("mill-pond")),
            range,
        })
        .await?;

    println!(
        "{} review, {} to {}",
        report.review_type, report.from_date, report.to_date
    );

    if let ReviewSeries::Comparison { site_a, site_b } = &report.series {
        for half in [site_a, site_b] {
            println!("site {}:", half.site);
            for series in &half.series {
                let totals: Vec<u64> = series.points.iter().map(|p| p.count).collect();
                println!("  {:<20} {totals:?}", series.entity);
            }
        }
    }

    Ok(())
}
