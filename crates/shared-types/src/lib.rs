//! Shared types for the GeoStress Charts architecture
//!
//! This crate contains all types that are shared between the registry,
//! state, and dashboard crates: field-data files, grid and pixel geometry,
//! per-kind visualization settings, persisted component state, dashboard
//! events, and the contracts of the external renderer and stress-inversion
//! collaborators.

pub mod data_types;
pub mod errors;
pub mod events;
pub mod inversion;
pub mod render;
pub mod settings;
pub mod viz_state;

pub use data_types::{AvailableColumn, DataFile, DataRow, GridRect, GridSize, PlotDimensions};
pub use errors::{GeoStressError, Result};
pub use events::DashboardEvent;
pub use inversion::{InversionMethod, InversionParams, InversionResult, StressInversion};
pub use render::{PlaceholderRenderer, RenderStatistics, Renderer};
pub use settings::{
    FractureMapSettings, HistogramSettings, MisfitSettings, MohrSettings, RoseSettings,
    StriationSettings, VizSettings, WulffSettings,
};
pub use viz_state::{CompState, LayoutEntry, VisualizationInstance};
