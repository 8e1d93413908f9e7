//! Persisted per-instance visualization state

use crate::data_types::{GridRect, PlotDimensions};
use crate::settings::VizSettings;
use serde::{Deserialize, Serialize};

/// Persisted, serializable state of one mounted visualization instance.
///
/// The discriminant lives in the `type` tag of `settings` and never changes
/// after creation. `settings` always has the full shape of the kind's
/// defaults; missing fields are filled back in at load time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompState {
    pub settings: VizSettings,
    pub open: bool,
    pub selected_column: String,
    pub plot_dimensions: PlotDimensions,
}

impl CompState {
    /// Fresh state for a kind, with the settings panel closed and no column
    /// selected yet.
    pub fn new(settings: VizSettings, width: f64, height: f64) -> Self {
        Self {
            settings,
            open: false,
            selected_column: String::new(),
            plot_dimensions: PlotDimensions::new(width, height),
        }
    }

    /// The state discriminant, equal to the owning descriptor's `state_type`.
    pub fn state_type(&self) -> &'static str {
        self.settings.state_type()
    }
}

/// One placed visualization on the dashboard grid.
///
/// The dashboard controller is the sole owner of the instance list; mounted
/// components report changes through callbacks and never mutate an instance
/// directly. `state` stays `None` until first mount seeds it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VisualizationInstance {
    pub id: String,
    pub kind: String,
    pub title: String,
    pub layout: GridRect,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<CompState>,
}

/// One entry of a grid-layout change callback.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LayoutEntry {
    pub id: String,
    pub layout: GridRect,
}
