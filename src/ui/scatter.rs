use crate::color::ColorMap;
use crate::data::filter::{records_in_range, PayloadRange};
use crate::data::model::LaunchDataset;
use crate::data::site::SiteSelection;

use super::chart::{ChartSpec, ScatterChart, ScatterPoint, ScatterSeries};

// ---------------------------------------------------------------------------
// Payload vs. outcome scatter chart
// ---------------------------------------------------------------------------

/// Build the payload/outcome scatter chart.
///
/// Keeps the launches of the selected site whose payload lies strictly inside
/// `range`, and plots payload (x) against class (y), one series per booster
/// version category in order of first appearance.
pub fn payload_scatter_chart(
    dataset: &LaunchDataset,
    site: SiteSelection,
    range: PayloadRange,
) -> ChartSpec {
    let records = records_in_range(dataset, site, range);

    let mut series: Vec<ScatterSeries> = Vec::new();
    for rec in &records {
        let idx = match series
            .iter()
            .position(|s| s.name == rec.booster_version_category)
        {
            Some(idx) => idx,
            None => {
                series.push(ScatterSeries {
                    name: rec.booster_version_category.clone(),
                    color: String::new(),
                    points: Vec::new(),
                });
                series.len() - 1
            }
        };
        series[idx].points.push(ScatterPoint {
            x: rec.payload_mass_kg,
            y: rec.class,
            flight_number: rec.flight_number,
            launch_site: rec.launch_site.clone(),
            booster_version: rec.booster_version.clone(),
        });
    }

    let colors = ColorMap::new(series.iter().map(|s| s.name.as_str()));
    for s in &mut series {
        s.color = colors.color_for(&s.name).to_string();
    }

    let title = match site {
        SiteSelection::All => "Correlation between Payload and Success for all Sites".to_string(),
        SiteSelection::Site(launch_site) => format!(
            "Correlation between Payload and Success for Site {}",
            launch_site.code()
        ),
    };

    log::debug!(
        "Scatter chart for '{}' in ({}, {}): {} point(s)",
        site.value(),
        range.low(),
        range.high(),
        records.len()
    );

    ChartSpec::Scatter(ScatterChart {
        title,
        x_label: "Payload Mass (kg)".to_string(),
        y_label: "class".to_string(),
        color_label: "Booster Version Category".to_string(),
        series,
    })
}
