//! Striation map: slip lineations with sense-of-slip arrows

use crate::{UsageContext, VizCategory, VizDescriptor};
use geostress_shared::{CompState, GridSize, PlaceholderRenderer, StriationSettings, VizSettings};

pub fn descriptor() -> VizDescriptor {
    VizDescriptor {
        id: "striation_map",
        title: "Striation Map",
        description: "Fault-plane striations with slip-sense arrows",
        contexts: &[UsageContext::GeneralAnalysis],
        category: VizCategory::Spatial,
        default_layout: GridSize { w: 6, h: 6 },
        state_type: "striation_map",
        default_settings,
        create_initial_state,
        make_renderer: || Box::new(PlaceholderRenderer::new("Striation Map")),
    }
}

fn default_settings() -> VizSettings {
    VizSettings::StriationMap(StriationSettings::default())
}

fn create_initial_state(width: f64, height: f64) -> CompState {
    CompState::new(default_settings(), width, height)
}
