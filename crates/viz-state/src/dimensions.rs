//! Grid-unit to pixel translation
//!
//! Once an instance exists, the size handed to its component is always
//! derived from its current layout rectangle through this formula, not from
//! the descriptor's default layout.

use geostress_shared::{GridRect, PlotDimensions};

/// Pixels per grid layout unit.
pub const GRID_CELL_SIZE: f64 = 80.0;

/// Fixed padding subtracted from each axis (panel chrome, margins).
pub const GRID_PADDING: f64 = 16.0;

/// Smallest plot size ever handed to a renderer.
pub const MIN_PLOT_SIZE: f64 = 120.0;

/// Side width the settings panel occupies when open.
pub const SETTINGS_PANEL_WIDTH: f64 = 260.0;

/// Delay before recomputing dimensions after a panel toggle, timed to land
/// after the open/close transition has settled.
pub const SETTINGS_PANEL_TRANSITION_MS: u64 = 150;

/// Derived pixel size of an instance's full plot container.
pub fn pixel_dimensions(layout: GridRect) -> PlotDimensions {
    PlotDimensions::new(
        (layout.w as f64 * GRID_CELL_SIZE - GRID_PADDING).max(MIN_PLOT_SIZE),
        (layout.h as f64 * GRID_CELL_SIZE - GRID_PADDING).max(MIN_PLOT_SIZE),
    )
}

/// Width available to the plot once the settings panel is accounted for.
pub fn plot_area(container: PlotDimensions, panel_open: bool) -> PlotDimensions {
    let width = if panel_open {
        (container.width - SETTINGS_PANEL_WIDTH).max(MIN_PLOT_SIZE)
    } else {
        container.width
    };
    PlotDimensions::new(width, container.height)
}
