//! Dashboard grid controller and mounting glue
//!
//! Owns the list of placed visualization instances, mediates add/remove/
//! move/resize, and is the sole writer of the persisted layout. Hosts the
//! thin stress-inversion runner that logs progress and surfaces results.

pub mod controller;
pub mod inversion;
pub mod mount;

use geostress_shared::GeoStressError;
use thiserror::Error;

/// Dashboard-layer errors
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Unknown visualization kind: {0}")]
    UnknownKind(String),

    #[error("Shared error: {0}")]
    Shared(#[from] GeoStressError),
}

pub type Result<T> = std::result::Result<T, DashboardError>;

pub use controller::DashboardController;
pub use mount::{mount, MountOutcome, MountedVisualization};
