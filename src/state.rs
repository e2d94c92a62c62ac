use std::sync::Arc;

use crate::callbacks::{dashboard_callbacks, CallbackRegistry};
use crate::data::model::LaunchDataset;
use crate::error::DashboardError;
use crate::ui::layout::{build_layout, Layout};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Everything the server needs to answer requests. Built once after the
/// dataset is loaded and never mutated afterwards, so it is shared between
/// requests without locking.
pub struct AppState {
    /// The launch table, also captured by the chart callbacks.
    pub dataset: Arc<LaunchDataset>,

    /// Static page structure.
    pub layout: Layout,

    /// Output id → chart callback.
    pub callbacks: CallbackRegistry,
}

impl AppState {
    pub fn new(dataset: LaunchDataset) -> Result<Self, DashboardError> {
        let dataset = Arc::new(dataset);
        let layout = build_layout(&dataset);
        let callbacks = dashboard_callbacks(Arc::clone(&dataset))?;

        log::info!(
            "Dashboard ready: {} launches, {} callbacks, graphs {:?}",
            dataset.len(),
            callbacks.len(),
            layout.graph_ids()
        );

        Ok(Self {
            dataset,
            layout,
            callbacks,
        })
    }
}
