use std::collections::BTreeMap;

use crate::color::ColorMap;
use crate::data::filter::records_for_site;
use crate::data::model::{LaunchDataset, OutcomeClass};
use crate::data::site::SiteSelection;

use super::chart::{ChartSpec, PieChart, PieSlice};

pub const PIE_TITLE: &str = "Total Successful Launches by Site";

// ---------------------------------------------------------------------------
// Success pie chart
// ---------------------------------------------------------------------------

/// Build the success pie chart for the selected site.
///
/// * `All` – one slice per launch site, valued by the sum of `class` over that
///   site's launches (the success count, as class is 0 or 1). Sites without a
///   single success keep a zero-valued slice.
/// * one site – that site's launches grouped by `class`, valued by the number
///   of launches in each group. Only classes that occur get a slice.
pub fn success_pie_chart(dataset: &LaunchDataset, site: SiteSelection) -> ChartSpec {
    let pie = match site {
        SiteSelection::All => successes_by_site(dataset),
        SiteSelection::Site(launch_site) => {
            let mut counts: BTreeMap<OutcomeClass, u64> = BTreeMap::new();
            for rec in records_for_site(dataset, site) {
                *counts.entry(rec.class).or_default() += 1;
            }

            let labels: Vec<String> = counts.keys().map(|class| class.to_string()).collect();
            let colors = ColorMap::new(labels.iter().map(String::as_str));
            let slices = counts
                .iter()
                .zip(&labels)
                .map(|((_, &count), label)| PieSlice {
                    color: colors.color_for(label).to_string(),
                    label: label.clone(),
                    value: count,
                })
                .collect();

            PieChart {
                title: format!("{PIE_TITLE} {}", launch_site.code()),
                names: "class".to_string(),
                values: "Flight Number".to_string(),
                slices,
            }
        }
    };

    log::debug!(
        "Pie chart for '{}': {} slice(s)",
        site.value(),
        pie.slices.len()
    );
    ChartSpec::Pie(pie)
}

fn successes_by_site(dataset: &LaunchDataset) -> PieChart {
    let colors = ColorMap::new(dataset.sites().iter().map(String::as_str));
    let slices = dataset
        .sites()
        .iter()
        .map(|site| {
            let value = dataset
                .records()
                .iter()
                .filter(|rec| &rec.launch_site == site)
                .map(|rec| u64::from(rec.class))
                .sum();
            PieSlice {
                label: site.clone(),
                value,
                color: colors.color_for(site).to_string(),
            }
        })
        .collect();

    PieChart {
        title: PIE_TITLE.to_string(),
        names: "Launch Site".to_string(),
        values: "class".to_string(),
        slices,
    }
}
