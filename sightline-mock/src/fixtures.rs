//! Built-in fixture dataset: three river species across two sites in 2021.

use chrono::NaiveDate;
use sightline_core::{EntityId, SightingRecord, SiteId};

fn rec(entity: &str, site: &str, y: i32, m: u32, d: u32, count: u64) -> SightingRecord {
    SightingRecord {
        entity: EntityId::new(entity),
        site: Some(SiteId::new(site)),
        // Fixture dates are static and always valid.
        date: NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date"),
        count,
    }
}

/// The deterministic fixture record set.
#[must_use]
pub fn sightings() -> Vec<SightingRecord> {
    vec![
        rec("eurasian-otter", "riverbend", 2021, 1, 4, 2),
        rec("eurasian-otter", "riverbend", 2021, 1, 31, 1),
        rec("eurasian-otter", "riverbend", 2021, 3, 12, 3),
        rec("eurasian-otter", "riverbend", 2021, 6, 2, 2),
        rec("eurasian-otter", "riverbend", 2021, 9, 18, 4),
        rec("eurasian-otter", "mill-pond", 2021, 2, 1, 1),
        rec("eurasian-otter", "mill-pond", 2021, 5, 20, 2),
        rec("eurasian-otter", "mill-pond", 2021, 11, 7, 1),
        rec("common-kingfisher", "riverbend", 2021, 1, 15, 5),
        rec("common-kingfisher", "riverbend", 2021, 4, 3, 2),
        rec("common-kingfisher", "riverbend", 2021, 7, 22, 6),
        rec("common-kingfisher", "mill-pond", 2021, 3, 30, 3),
        rec("common-kingfisher", "mill-pond", 2021, 8, 14, 4),
        rec("common-kingfisher", "mill-pond", 2021, 12, 24, 2),
        rec("water-vole", "riverbend", 2021, 2, 9, 8),
        rec("water-vole", "riverbend", 2021, 10, 1, 5),
        rec("water-vole", "mill-pond", 2021, 4, 17, 7),
        rec("water-vole", "mill-pond", 2021, 6, 28, 3),
        rec("water-vole", "mill-pond", 2021, 12, 31, 2),
    ]
}
