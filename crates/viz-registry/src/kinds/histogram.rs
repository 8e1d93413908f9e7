//! Histogram over one selected numeric column

use crate::{UsageContext, VizCategory, VizDescriptor};
use geostress_shared::{CompState, GridSize, HistogramSettings, PlaceholderRenderer, VizSettings};

pub fn descriptor() -> VizDescriptor {
    VizDescriptor {
        id: "histogram",
        title: "Histogram",
        description: "Frequency distribution of a selected data column",
        contexts: &[UsageContext::GeneralAnalysis, UsageContext::RunAnalysis],
        category: VizCategory::Statistics,
        default_layout: GridSize { w: 6, h: 4 },
        state_type: "histogram",
        default_settings,
        create_initial_state,
        make_renderer: || Box::new(PlaceholderRenderer::new("Histogram")),
    }
}

fn default_settings() -> VizSettings {
    VizSettings::Histogram(HistogramSettings::default())
}

fn create_initial_state(width: f64, height: f64) -> CompState {
    CompState::new(default_settings(), width, height)
}
