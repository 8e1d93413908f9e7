//! Mohr circle of the inverted stress tensor

use crate::{UsageContext, VizCategory, VizDescriptor};
use geostress_shared::{CompState, GridSize, MohrSettings, PlaceholderRenderer, VizSettings};

pub fn descriptor() -> VizDescriptor {
    VizDescriptor {
        id: "mohr_circle",
        title: "Mohr Circle",
        description: "Normal versus shear stress for the current stress solution",
        contexts: &[UsageContext::RunAnalysis, UsageContext::ShowAnalysis],
        category: VizCategory::Stress,
        default_layout: GridSize { w: 5, h: 4 },
        state_type: "mohr_circle",
        default_settings,
        create_initial_state,
        make_renderer: || Box::new(PlaceholderRenderer::new("Mohr Circle")),
    }
}

fn default_settings() -> VizSettings {
    VizSettings::MohrCircle(MohrSettings::default())
}

fn create_initial_state(width: f64, height: f64) -> CompState {
    CompState::new(default_settings(), width, height)
}
