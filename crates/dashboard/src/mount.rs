//! Mounting glue between the instance list and the state layer
//!
//! Mounting looks up the instance's descriptor, seeds or adopts its
//! persisted state, and constructs the kind's renderer. A registry miss is
//! recoverable: the caller renders an "unknown visualization type"
//! placeholder instead of the plot, and nothing propagates upward.

use geostress_registry::VizRegistry;
use geostress_shared::{CompState, DataFile, PlotDimensions, Renderer, VisualizationInstance};
use geostress_state::{snapshot, VizStateHandle};

/// One successfully mounted visualization.
pub struct MountedVisualization {
    pub instance_id: String,
    pub handle: VizStateHandle,
    pub renderer: Box<dyn Renderer>,
}

impl MountedVisualization {
    /// Redraw the renderer from the current state: the bound column's data
    /// at the current plot dimensions.
    pub fn redraw(&mut self, files: &[DataFile]) {
        let data = self.handle.selected_column_data(files);
        self.renderer
            .render(&data, self.handle.state().plot_dimensions);
    }

    /// Apply a new plot size and re-render at it. This is what the host
    /// calls for resize-observer pushes and for each entry popped from the
    /// deferred recompute queue.
    pub fn resize(&mut self, dims: PlotDimensions, files: &[DataFile]) {
        self.handle.update_plot_dimensions(dims);
        self.redraw(files);
    }
}

pub enum MountOutcome {
    Mounted(Box<MountedVisualization>),
    /// Registry miss; render the placeholder message instead of a plot.
    UnknownKind { kind: String },
}

impl MountOutcome {
    /// User-visible empty-state message, where applicable.
    pub fn placeholder_message(&self) -> Option<String> {
        match self {
            MountOutcome::Mounted(_) => None,
            MountOutcome::UnknownKind { kind } => {
                Some(format!("Unknown visualization type: {kind}"))
            }
        }
    }
}

/// Mount an instance at the given pixel size.
///
/// `on_change` is the sink the controller's owner wires back into
/// `DashboardController::on_visualization_state_changed`.
pub fn mount(
    registry: &VizRegistry,
    instance: &VisualizationInstance,
    dims: PlotDimensions,
    on_change: Box<dyn FnMut(&CompState)>,
) -> MountOutcome {
    let Some(descriptor) = registry.get_by_id(&instance.kind) else {
        log::warn!(
            "instance '{}' references unknown visualization type '{}'",
            instance.id,
            instance.kind
        );
        return MountOutcome::UnknownKind {
            kind: instance.kind.clone(),
        };
    };

    let incoming = instance.state.as_ref().map(snapshot::state_to_value);
    let handle = VizStateHandle::initialize(
        descriptor,
        dims.width,
        dims.height,
        incoming.as_ref(),
        on_change,
    );

    MountOutcome::Mounted(Box::new(MountedVisualization {
        instance_id: instance.id.clone(),
        handle,
        renderer: (descriptor.make_renderer)(),
    }))
}
