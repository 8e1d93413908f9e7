//! Wulff stereonet: equal-angle projection of planes and lineations

use crate::{UsageContext, VizCategory, VizDescriptor};
use geostress_shared::{CompState, GridSize, PlaceholderRenderer, VizSettings, WulffSettings};

pub fn descriptor() -> VizDescriptor {
    VizDescriptor {
        id: "stereonet",
        title: "Stereonet",
        description: "Wulff stereographic projection of planes and poles",
        contexts: &[UsageContext::GeneralAnalysis, UsageContext::ShowAnalysis],
        category: VizCategory::Orientation,
        default_layout: GridSize { w: 5, h: 5 },
        state_type: "stereonet",
        default_settings,
        create_initial_state,
        make_renderer: || Box::new(PlaceholderRenderer::new("Stereonet")),
    }
}

fn default_settings() -> VizSettings {
    VizSettings::Stereonet(WulffSettings::default())
}

fn create_initial_state(width: f64, height: f64) -> CompState {
    CompState::new(default_settings(), width, height)
}
