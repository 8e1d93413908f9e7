//! Per-instance visualization state management
//!
//! The runtime contract every mounted visualization uses: read and patch
//! its settings, resolve which data column it is bound to, recompute pixel
//! dimensions when the enclosing panels toggle, and emit serializable state
//! snapshots upward for persistence. One `VizStateHandle` per mounted
//! instance, one owner-supplied change sink per handle.

pub mod columns;
pub mod dimensions;
pub mod handle;
pub mod recompute;
pub mod snapshot;

pub use columns::{column_key, extract_column_data, scan_available_columns, split_column_key};
pub use dimensions::{
    pixel_dimensions, plot_area, GRID_CELL_SIZE, GRID_PADDING, MIN_PLOT_SIZE,
    SETTINGS_PANEL_TRANSITION_MS, SETTINGS_PANEL_WIDTH,
};
pub use handle::VizStateHandle;
pub use recompute::RecomputeQueue;
pub use snapshot::{export_state, import_state, merge_settings_with_defaults};
