//! Rose diagram: angular frequency of fracture strikes and lineation trends

use crate::{UsageContext, VizCategory, VizDescriptor};
use geostress_shared::{CompState, GridSize, PlaceholderRenderer, RoseSettings, VizSettings};

pub fn descriptor() -> VizDescriptor {
    VizDescriptor {
        id: "rose",
        title: "Rose Diagram",
        description: "Angular histogram of strike or trend directions",
        contexts: &[UsageContext::GeneralAnalysis, UsageContext::ShowAnalysis],
        category: VizCategory::Orientation,
        default_layout: GridSize { w: 4, h: 4 },
        state_type: "rose",
        default_settings,
        create_initial_state,
        make_renderer: || Box::new(PlaceholderRenderer::new("Rose Diagram")),
    }
}

fn default_settings() -> VizSettings {
    VizSettings::Rose(RoseSettings::default())
}

fn create_initial_state(width: f64, height: f64) -> CompState {
    CompState::new(default_settings(), width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_shape() {
        let d = descriptor();
        assert_eq!(d.id, "rose");
        assert_eq!(d.default_layout, GridSize { w: 4, h: 4 });
        assert!(matches!((d.default_settings)(), VizSettings::Rose(_)));
    }
}
