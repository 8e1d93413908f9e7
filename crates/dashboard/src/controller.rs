//! Instance-list state machine
//!
//! The controller is the sole owner of the placed instances. Mounted
//! components report changes through `on_visualization_state_changed`; the
//! grid engine reports drags and resizes through `on_layout_changed`. Every
//! mutation is mirrored to the host through the injected event sink, which
//! is the host's only persistence channel.

use crate::{DashboardError, Result};
use geostress_registry::VizRegistry;
use geostress_shared::{
    CompState, DashboardEvent, GridRect, LayoutEntry, PlotDimensions, VisualizationInstance,
};
use geostress_state::{dimensions, RecomputeQueue, SETTINGS_PANEL_TRANSITION_MS};
use std::time::{Duration, Instant};
use uuid::Uuid;

pub struct DashboardController<'r> {
    registry: &'r VizRegistry,
    instances: Vec<VisualizationInstance>,
    recompute: RecomputeQueue,
    sink: Box<dyn FnMut(DashboardEvent) + 'r>,
}

impl<'r> DashboardController<'r> {
    pub fn new(registry: &'r VizRegistry, sink: Box<dyn FnMut(DashboardEvent) + 'r>) -> Self {
        Self {
            registry,
            instances: Vec::new(),
            recompute: RecomputeQueue::new(),
            sink,
        }
    }

    pub fn instances(&self) -> &[VisualizationInstance] {
        &self.instances
    }

    pub fn get_instance(&self, id: &str) -> Option<&VisualizationInstance> {
        self.instances.iter().find(|i| i.id == id)
    }

    /// Add a visualization of a registered kind.
    ///
    /// New instances are appended below all existing instances (at the max
    /// of `y + h`, `x = 0`) and sized per the descriptor's default layout.
    /// State stays unset until first mount seeds it.
    pub fn add_visualization(&mut self, kind: &str, title: &str) -> Result<VisualizationInstance> {
        let Some(descriptor) = self.registry.get_by_id(kind) else {
            log::warn!("cannot add visualization of unknown kind '{kind}'");
            return Err(DashboardError::UnknownKind(kind.to_string()));
        };

        let y = self
            .instances
            .iter()
            .map(|i| i.layout.y + i.layout.h)
            .max()
            .unwrap_or(0);
        let instance = VisualizationInstance {
            id: Uuid::new_v4().to_string(),
            kind: kind.to_string(),
            title: title.to_string(),
            layout: GridRect {
                x: 0,
                y,
                w: descriptor.default_layout.w,
                h: descriptor.default_layout.h,
            },
            state: None,
        };
        log::info!("added visualization '{title}' ({kind}) at y={y}");

        (self.sink)(DashboardEvent::VisualizationAdded(instance.clone()));
        self.instances.push(instance.clone());
        Ok(instance)
    }

    /// Remove by id. Unknown ids are a no-op, and any pending deferred
    /// recompute for the instance is cancelled so its firing is harmless.
    pub fn remove_visualization(&mut self, id: &str) {
        let before = self.instances.len();
        self.instances.retain(|i| i.id != id);
        if self.instances.len() == before {
            log::debug!("remove of unknown instance '{id}' ignored");
            return;
        }
        self.recompute.cancel(id);
        log::info!("removed visualization '{id}'");
        (self.sink)(DashboardEvent::VisualizationRemoved { id: id.to_string() });
    }

    /// Apply a grid-engine layout callback. Instances without a matching
    /// entry keep their layout; the grid engine sometimes reports partial
    /// updates.
    pub fn on_layout_changed(&mut self, entries: &[LayoutEntry]) {
        for instance in &mut self.instances {
            if let Some(entry) = entries.iter().find(|e| e.id == instance.id) {
                instance.layout = entry.layout;
            }
        }
        (self.sink)(DashboardEvent::LayoutChanged(self.instances.clone()));
    }

    /// Replace an instance's persisted state wholesale. Unknown ids are a
    /// no-op.
    pub fn on_visualization_state_changed(&mut self, id: &str, state: CompState) {
        let Some(instance) = self.instances.iter_mut().find(|i| i.id == id) else {
            log::debug!("state change for unknown instance '{id}' ignored");
            return;
        };
        instance.state = Some(state.clone());
        (self.sink)(DashboardEvent::VisualizationStateChanged {
            id: id.to_string(),
            state,
        });
    }

    /// Authoritative pixel size for a mounted instance, derived from its
    /// current layout rather than the kind's default.
    pub fn pixel_dimensions_for(&self, id: &str) -> Option<PlotDimensions> {
        self.get_instance(id)
            .map(|i| dimensions::pixel_dimensions(i.layout))
    }

    /// Schedule the post-transition dimension recompute after a settings
    /// panel toggle. Last-scheduled wins per instance.
    pub fn schedule_panel_recompute(&mut self, id: &str, panel_open: bool) {
        let Some(container) = self.pixel_dimensions_for(id) else {
            return;
        };
        let area = dimensions::plot_area(container, panel_open);
        self.recompute.schedule(
            id,
            area,
            Duration::from_millis(SETTINGS_PANEL_TRANSITION_MS),
        );
    }

    /// Pop every due recompute whose instance still exists. The host applies
    /// the returned sizes to the matching mounted handles.
    pub fn run_due_recomputes(&mut self, now: Instant) -> Vec<(String, PlotDimensions)> {
        self.recompute
            .drain_due(now)
            .into_iter()
            .filter(|(id, _)| self.get_instance(id).is_some())
            .collect()
    }
}
