use serde::Serialize;

use crate::data::filter::PayloadRange;
use crate::data::model::LaunchDataset;
use crate::data::site::{LaunchSite, SiteSelection};

pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";

pub const SITE_DROPDOWN_ID: &str = "site-dropdown";
pub const PAYLOAD_SLIDER_ID: &str = "payload-slider";
pub const PIE_CHART_ID: &str = "success-pie-chart";
pub const SCATTER_CHART_ID: &str = "success-payload-scatter-chart";

pub const SLIDER_MIN: f64 = 0.0;
pub const SLIDER_MAX: f64 = 10000.0;
pub const SLIDER_STEP: f64 = 1000.0;

// ---------------------------------------------------------------------------
// Component tree
// ---------------------------------------------------------------------------

/// The static page structure, serialized for the browser.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub children: Vec<Component>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Component {
    Heading { text: String, style: TextStyle },
    Dropdown(Dropdown),
    Break,
    Paragraph { text: String },
    Graph { id: String },
    RangeSlider(RangeSlider),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextStyle {
    pub text_align: String,
    pub color: String,
    pub font_size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

/// Single-select dropdown with type-ahead filtering by label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dropdown {
    pub id: String,
    pub options: Vec<DropdownOption>,
    pub value: String,
    pub placeholder: String,
    pub searchable: bool,
}

impl Dropdown {
    /// Options whose label contains `query`, ignoring case. An empty or
    /// blank query keeps every option.
    pub fn filter_options(&self, query: &str) -> Vec<&DropdownOption> {
        let needle = query.trim().to_lowercase();
        self.options
            .iter()
            .filter(|opt| needle.is_empty() || opt.label.to_lowercase().contains(&needle))
            .collect()
    }

    /// Options to show while the user types: the matches for `query`, with the
    /// currently selected option kept at the top even when it does not match.
    pub fn visible_options(&self, query: &str, selected: &str) -> Vec<&DropdownOption> {
        let mut visible = self.filter_options(query);
        if !visible.iter().any(|opt| opt.value == selected) {
            if let Some(current) = self.options.iter().find(|opt| opt.value == selected) {
                visible.insert(0, current);
            }
        }
        visible
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeSlider {
    pub id: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<f64>,
    pub value: PayloadRange,
}

impl Layout {
    pub fn dropdown(&self, id: &str) -> Option<&Dropdown> {
        self.children.iter().find_map(|c| match c {
            Component::Dropdown(d) if d.id == id => Some(d),
            _ => None,
        })
    }

    pub fn range_slider(&self, id: &str) -> Option<&RangeSlider> {
        self.children.iter().find_map(|c| match c {
            Component::RangeSlider(s) if s.id == id => Some(s),
            _ => None,
        })
    }

    pub fn graph_ids(&self) -> Vec<&str> {
        self.children
            .iter()
            .filter_map(|c| match c {
                Component::Graph { id } => Some(id.as_str()),
                _ => None,
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Site dropdown options in display order, `All Sites` first.
pub fn site_options() -> Vec<DropdownOption> {
    std::iter::once(DropdownOption {
        label: "All Sites".to_string(),
        value: SiteSelection::All.value().to_string(),
    })
    .chain(LaunchSite::ALL.into_iter().map(|site| DropdownOption {
        label: site.dataset_name().to_string(),
        value: site.value().to_string(),
    }))
    .collect()
}

/// Build the dashboard layout. Slider bounds are fixed; only the slider's
/// initial selection depends on the data.
pub fn build_layout(dataset: &LaunchDataset) -> Layout {
    let steps = ((SLIDER_MAX - SLIDER_MIN) / SLIDER_STEP).round() as usize;
    let marks = (0..=steps)
        .map(|i| SLIDER_MIN + i as f64 * SLIDER_STEP)
        .collect();

    Layout {
        children: vec![
            Component::Heading {
                text: DASHBOARD_TITLE.to_string(),
                style: TextStyle {
                    text_align: "center".to_string(),
                    color: "#503D36".to_string(),
                    font_size: 40,
                },
            },
            Component::Dropdown(Dropdown {
                id: SITE_DROPDOWN_ID.to_string(),
                options: site_options(),
                value: SiteSelection::All.value().to_string(),
                placeholder: "Select a Launch Site".to_string(),
                searchable: true,
            }),
            Component::Break,
            Component::Graph {
                id: PIE_CHART_ID.to_string(),
            },
            Component::Break,
            Component::Paragraph {
                text: "Payload range (Kg):".to_string(),
            },
            Component::RangeSlider(RangeSlider {
                id: PAYLOAD_SLIDER_ID.to_string(),
                min: SLIDER_MIN,
                max: SLIDER_MAX,
                step: SLIDER_STEP,
                marks,
                value: PayloadRange::of_dataset(dataset),
            }),
            Component::Graph {
                id: SCATTER_CHART_ID.to_string(),
            },
        ],
    }
}
