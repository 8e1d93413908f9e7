//! 2D map of fracture traces

use crate::{UsageContext, VizCategory, VizDescriptor};
use geostress_shared::{CompState, FractureMapSettings, GridSize, PlaceholderRenderer, VizSettings};

pub fn descriptor() -> VizDescriptor {
    VizDescriptor {
        id: "fracture_map",
        title: "Fracture Map",
        description: "Plan-view map of digitized fracture traces",
        contexts: &[UsageContext::GeneralAnalysis, UsageContext::ShowAnalysis],
        category: VizCategory::Spatial,
        default_layout: GridSize { w: 6, h: 6 },
        state_type: "fracture_map",
        default_settings,
        create_initial_state,
        make_renderer: || Box::new(PlaceholderRenderer::new("Fracture Map")),
    }
}

fn default_settings() -> VizSettings {
    VizSettings::FractureMap(FractureMapSettings::default())
}

fn create_initial_state(width: f64, height: f64) -> CompState {
    CompState::new(default_settings(), width, height)
}
