//! Shared in-memory test data.

use super::model::{LaunchDataset, LaunchRecord, OutcomeClass};

pub fn record(
    site: &str,
    payload_mass_kg: f64,
    class: OutcomeClass,
    category: &str,
    flight_number: u32,
) -> LaunchRecord {
    LaunchRecord {
        flight_number,
        launch_site: site.to_string(),
        class,
        payload_mass_kg,
        booster_version: Some(format!("F9 {category} B{:04}", 1000 + flight_number)),
        booster_version_category: category.to_string(),
    }
}

/// A dozen launches spread over all four pads.
///
/// * CCAFS LC-40:  4 launches, 1 success
/// * VAFB SLC-4E:  2 launches, 0 successes
/// * KSC LC-39A:   4 launches, 3 successes
/// * CCAFS SLC-40: 2 launches, 2 successes
pub fn sample_records() -> Vec<LaunchRecord> {
    vec![
        record("CCAFS LC-40", 0.0, 0, "v1.0", 1),
        record("CCAFS LC-40", 525.0, 0, "v1.0", 2),
        record("CCAFS LC-40", 677.0, 0, "v1.0", 3),
        record("VAFB SLC-4E", 500.0, 0, "v1.1", 4),
        record("CCAFS LC-40", 3170.0, 1, "v1.1", 5),
        record("VAFB SLC-4E", 9600.0, 0, "FT", 6),
        record("KSC LC-39A", 2490.0, 1, "FT", 7),
        record("KSC LC-39A", 5600.0, 1, "FT", 8),
        record("KSC LC-39A", 5300.0, 0, "FT", 9),
        record("CCAFS SLC-40", 4600.0, 1, "B4", 10),
        record("KSC LC-39A", 3600.0, 1, "B4", 11),
        record("CCAFS SLC-40", 2205.0, 1, "B5", 12),
    ]
}

pub fn sample_dataset() -> LaunchDataset {
    LaunchDataset::from_records(sample_records()).unwrap()
}

/// The sample records as a CSV export, including the unnamed index column.
pub fn sample_csv() -> String {
    let mut out = String::from(
        ",Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category\n",
    );
    for (i, rec) in sample_records().iter().enumerate() {
        out.push_str(&format!(
            "{i},{},{},{},{:.1},{},{}\n",
            rec.flight_number,
            rec.launch_site,
            rec.class,
            rec.payload_mass_kg,
            rec.booster_version.as_deref().unwrap_or(""),
            rec.booster_version_category,
        ));
    }
    out
}
