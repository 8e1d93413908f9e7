//! Descriptor definitions for every visualization kind

pub mod fracture_map;
pub mod histogram;
pub mod misfit_histogram;
pub mod mohr_circle;
pub mod rose;
pub mod stereonet;
pub mod striation_map;

use crate::VizDescriptor;

/// All descriptors in canonical registration order. This order is what
/// "Add visualization" dialogs show, so it is deliberately stable.
pub fn all_descriptors() -> Vec<VizDescriptor> {
    vec![
        rose::descriptor(),
        stereonet::descriptor(),
        histogram::descriptor(),
        mohr_circle::descriptor(),
        fracture_map::descriptor(),
        striation_map::descriptor(),
        misfit_histogram::descriptor(),
    ]
}
