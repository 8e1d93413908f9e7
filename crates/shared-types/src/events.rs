//! Upward notifications from the dashboard controller to its host
//!
//! These four events are the whole persistence surface a hosting page needs
//! to implement. Emissions for one instance are strictly ordered; emissions
//! from different instances are independent.

use crate::viz_state::{CompState, VisualizationInstance};

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    VisualizationAdded(VisualizationInstance),
    VisualizationRemoved { id: String },
    LayoutChanged(Vec<VisualizationInstance>),
    VisualizationStateChanged { id: String, state: CompState },
}
