//! Reactive update wiring.
//!
//! Every chart on the page is an *output* computed from one or more *inputs*
//! (dropdown value, slider range). The browser reports the current input
//! values; the registry finds the callback for the requested output and runs
//! it. Callbacks are plain closures that capture the shared dataset.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::data::filter::PayloadRange;
use crate::data::model::LaunchDataset;
use crate::data::site::SiteSelection;
use crate::error::DashboardError;
use crate::ui::chart::ChartSpec;
use crate::ui::layout::{PAYLOAD_SLIDER_ID, PIE_CHART_ID, SCATTER_CHART_ID, SITE_DROPDOWN_ID};
use crate::ui::pie::success_pie_chart;
use crate::ui::scatter::payload_scatter_chart;

pub type Handler = Box<dyn Fn(&CallbackInputs) -> Result<ChartSpec, DashboardError> + Send + Sync>;

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// Current input values keyed by component id, as sent by the browser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallbackInputs(BTreeMap<String, Value>);

impl CallbackInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: &str, value: Value) -> Self {
        self.0.insert(id.to_string(), value);
        self
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    fn get(&self, id: &str) -> Result<&Value, DashboardError> {
        self.0
            .get(id)
            .ok_or_else(|| DashboardError::MissingInput(id.to_string()))
    }

    /// Read a site dropdown value.
    pub fn site(&self, id: &str) -> Result<SiteSelection, DashboardError> {
        match self.get(id)? {
            Value::String(s) => s.parse(),
            other => Err(DashboardError::InvalidInput {
                id: id.to_string(),
                reason: format!("expected a site string, got {other}"),
            }),
        }
    }

    /// Read a `[low, high]` range slider value.
    pub fn payload_range(&self, id: &str) -> Result<PayloadRange, DashboardError> {
        let value = self.get(id)?;
        let pair: [f64; 2] =
            serde_json::from_value(value.clone()).map_err(|e| DashboardError::InvalidInput {
                id: id.to_string(),
                reason: format!("expected [low, high], got {value}: {e}"),
            })?;
        PayloadRange::try_from(pair)
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

pub struct Callback {
    output: String,
    inputs: Vec<String>,
    handler: Handler,
}

/// Serializable description of one callback, for the browser.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dependency {
    pub output: String,
    pub inputs: Vec<String>,
}

/// Dispatch table: output id → (input ids, handler).
#[derive(Default)]
pub struct CallbackRegistry {
    callbacks: Vec<Callback>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the callback producing `output`. Each output has exactly one
    /// callback.
    pub fn register<F>(&mut self, output: &str, inputs: &[&str], handler: F) -> Result<(), DashboardError>
    where
        F: Fn(&CallbackInputs) -> Result<ChartSpec, DashboardError> + Send + Sync + 'static,
    {
        if self.find(output).is_some() {
            return Err(DashboardError::DuplicateCallback(output.to_string()));
        }
        self.callbacks.push(Callback {
            output: output.to_string(),
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            handler: Box::new(handler),
        });
        Ok(())
    }

    fn find(&self, output: &str) -> Option<&Callback> {
        self.callbacks.iter().find(|cb| cb.output == output)
    }

    /// Run the callback for `output` with the given input values.
    pub fn dispatch(&self, output: &str, inputs: &CallbackInputs) -> Result<ChartSpec, DashboardError> {
        let callback = self
            .find(output)
            .ok_or_else(|| DashboardError::UnknownOutput(output.to_string()))?;

        if let Some(missing) = callback.inputs.iter().find(|id| !inputs.contains(id)) {
            return Err(DashboardError::MissingInput(missing.clone()));
        }

        log::debug!("Dispatching callback for '{output}'");
        (callback.handler)(inputs)
    }

    /// Outputs that must be recomputed when `input` changes, in registration order.
    pub fn outputs_for_input(&self, input: &str) -> Vec<&str> {
        self.callbacks
            .iter()
            .filter(|cb| cb.inputs.iter().any(|i| i == input))
            .map(|cb| cb.output.as_str())
            .collect()
    }

    pub fn dependencies(&self) -> Vec<Dependency> {
        self.callbacks
            .iter()
            .map(|cb| Dependency {
                output: cb.output.clone(),
                inputs: cb.inputs.clone(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

/// The dashboard's two chart callbacks, both reading from `dataset`.
pub fn dashboard_callbacks(dataset: Arc<LaunchDataset>) -> Result<CallbackRegistry, DashboardError> {
    let mut registry = CallbackRegistry::new();

    let pie_data = Arc::clone(&dataset);
    registry.register(PIE_CHART_ID, &[SITE_DROPDOWN_ID], move |inputs| {
        let site = inputs.site(SITE_DROPDOWN_ID)?;
        Ok(success_pie_chart(&pie_data, site))
    })?;

    let scatter_data = dataset;
    registry.register(
        SCATTER_CHART_ID,
        &[SITE_DROPDOWN_ID, PAYLOAD_SLIDER_ID],
        move |inputs| {
            let site = inputs.site(SITE_DROPDOWN_ID)?;
            let range = inputs.payload_range(PAYLOAD_SLIDER_ID)?;
            Ok(payload_scatter_chart(&scatter_data, site, range))
        },
    )?;

    Ok(registry)
}
