//! Histogram of angular misfits from an inversion run

use crate::{UsageContext, VizCategory, VizDescriptor};
use geostress_shared::{CompState, GridSize, MisfitSettings, PlaceholderRenderer, VizSettings};

pub fn descriptor() -> VizDescriptor {
    VizDescriptor {
        id: "misfit_histogram",
        title: "Misfit Histogram",
        description: "Distribution of per-datum angular misfit for the last run",
        contexts: &[UsageContext::RunAnalysis],
        category: VizCategory::Statistics,
        default_layout: GridSize { w: 6, h: 4 },
        state_type: "misfit_histogram",
        default_settings,
        create_initial_state,
        make_renderer: || Box::new(PlaceholderRenderer::new("Misfit Histogram")),
    }
}

fn default_settings() -> VizSettings {
    VizSettings::MisfitHistogram(MisfitSettings::default())
}

fn create_initial_state(width: f64, height: f64) -> CompState {
    CompState::new(default_settings(), width, height)
}
