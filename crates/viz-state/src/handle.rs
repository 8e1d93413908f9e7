//! The per-instance state machine
//!
//! `VizStateHandle` bridges the persisted `CompState`, the derived column
//! list, and the live pixel geometry for one mounted visualization. Every
//! mutating operation invokes the owner-supplied change sink exactly once;
//! that callback is the sole channel keeping the dashboard's instance list
//! current. The handle never reaches into the controller directly.

use crate::{columns, snapshot};
use geostress_registry::VizDescriptor;
use geostress_shared::{AvailableColumn, CompState, DataFile, PlotDimensions, VizSettings};
use serde_json::Value;

pub struct VizStateHandle {
    kind: String,
    state_type: &'static str,
    default_settings: fn() -> VizSettings,
    state: CompState,
    on_change: Box<dyn FnMut(&CompState)>,
    in_dimension_update: bool,
}

impl VizStateHandle {
    /// Mount-time initialization.
    ///
    /// Adopts `incoming` (a persisted state blob) when its settings tag
    /// matches this kind, merging any settings fields missing against the
    /// current defaults so old snapshots survive a schema addition. A
    /// missing or mismatched blob yields a factory-fresh state instead.
    pub fn initialize(
        descriptor: &VizDescriptor,
        width: f64,
        height: f64,
        incoming: Option<&Value>,
        on_change: Box<dyn FnMut(&CompState)>,
    ) -> Self {
        let state = match incoming {
            Some(raw) => match snapshot::state_from_value(descriptor, raw, width, height) {
                Ok(state) => state,
                Err(e) => {
                    log::debug!(
                        "persisted state for '{}' not adopted ({e}), starting fresh",
                        descriptor.id
                    );
                    (descriptor.create_initial_state)(width, height)
                }
            },
            None => (descriptor.create_initial_state)(width, height),
        };

        Self {
            kind: descriptor.id.to_string(),
            state_type: descriptor.state_type,
            default_settings: descriptor.default_settings,
            state,
            on_change,
            in_dimension_update: false,
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn state(&self) -> &CompState {
        &self.state
    }

    /// Shallow-merge a settings patch into the current settings and emit.
    ///
    /// An empty patch emits nothing (avoids redundant persistence writes).
    /// A patch that cannot be applied (non-object, or a field of the wrong
    /// type) is logged and dropped without an emission. The `type` tag is
    /// never patchable.
    pub fn update_settings(&mut self, patch: &Value) {
        let Some(fields) = patch.as_object() else {
            log::warn!("settings patch for '{}' is not an object, ignoring", self.kind);
            return;
        };
        if fields.is_empty() {
            return;
        }

        let mut merged = match serde_json::to_value(&self.state.settings) {
            Ok(Value::Object(map)) => map,
            _ => return,
        };
        for (key, value) in fields {
            if key == "type" {
                continue;
            }
            merged.insert(key.clone(), value.clone());
        }

        match serde_json::from_value::<VizSettings>(Value::Object(merged)) {
            Ok(settings) if settings.state_type() == self.state_type => {
                self.state.settings = settings;
                self.emit();
            }
            Ok(_) | Err(_) => {
                log::warn!("rejected settings patch for '{}'", self.kind);
            }
        }
    }

    /// Set the bound column key. The key is not validated against the file
    /// set; a stale key simply resolves to no data downstream.
    pub fn update_selected_column(&mut self, column_key: impl Into<String>) {
        self.state.selected_column = column_key.into();
        self.emit();
    }

    /// Replace the plot dimensions. Re-entrant dimension updates (a resize
    /// observer reacting to the emission) are swallowed to break cascades.
    pub fn update_plot_dimensions(&mut self, dims: PlotDimensions) {
        if self.in_dimension_update {
            log::debug!("re-entrant dimension update for '{}' ignored", self.kind);
            return;
        }
        self.in_dimension_update = true;
        self.state.plot_dimensions = dims;
        self.emit();
        self.in_dimension_update = false;
    }

    /// Flip the settings panel. The caller is responsible for scheduling
    /// the deferred dimension recompute once the panel transition settles.
    pub fn toggle_settings_panel(&mut self) {
        self.state.open = !self.state.open;
        self.emit();
    }

    /// Restore the user-tunable knobs to the kind's defaults. Column
    /// binding, panel state, and geometry are untouched.
    pub fn reset_to_defaults(&mut self) {
        self.state.settings = (self.default_settings)();
        self.emit();
    }

    /// Extract the bound column as finite numbers; empty on any miss.
    pub fn selected_column_data(&self, files: &[DataFile]) -> Vec<f64> {
        columns::extract_column_data(files, &self.state.selected_column)
    }

    pub fn selected_column_info(&self, files: &[DataFile]) -> Option<AvailableColumn> {
        columns::selected_column_info(files, &self.state.selected_column)
    }

    /// Serializable snapshot of the current state.
    pub fn export_snapshot(&self) -> String {
        snapshot::export_state(&self.state)
    }

    fn emit(&mut self) {
        (self.on_change)(&self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geostress_registry::kinds;
    use geostress_shared::{DataRow, HistogramSettings};
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Emissions = Rc<RefCell<Vec<CompState>>>;

    fn handle_with_sink(incoming: Option<&Value>) -> (VizStateHandle, Emissions) {
        let descriptor = kinds::histogram::descriptor();
        let emissions: Emissions = Rc::new(RefCell::new(Vec::new()));
        let sink = emissions.clone();
        let handle = VizStateHandle::initialize(
            &descriptor,
            464.0,
            304.0,
            incoming,
            Box::new(move |state| sink.borrow_mut().push(state.clone())),
        );
        (handle, emissions)
    }

    #[test]
    fn test_initialize_fresh() {
        let (handle, emissions) = handle_with_sink(None);
        assert_eq!(handle.state().state_type(), "histogram");
        assert_eq!(handle.state().plot_dimensions.width, 464.0);
        // Initialization is not a mutation; nothing is emitted.
        assert!(emissions.borrow().is_empty());
    }

    #[test]
    fn test_initialize_adopts_and_merges() {
        let incoming = json!({
            "settings": { "type": "histogram", "bins": 7 },
            "open": true,
            "selectedColumn": "f1:dip",
            "plotDimensions": { "width": 222.0, "height": 111.0 }
        });
        let (handle, _) = handle_with_sink(Some(&incoming));
        let state = handle.state();
        assert!(state.open);
        assert_eq!(state.selected_column, "f1:dip");
        assert_eq!(state.plot_dimensions.width, 222.0);
        match &state.settings {
            VizSettings::Histogram(s) => {
                assert_eq!(s.bins, 7);
                // Field missing from the snapshot falls back to defaults.
                assert_eq!(s.fill_color, "#3498db");
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_initialize_rejects_mismatched_type() {
        let incoming = json!({
            "settings": { "type": "rose", "binAngleDeg": 5.0 },
            "open": true
        });
        let (handle, _) = handle_with_sink(Some(&incoming));
        // Mismatch means "no valid persisted state": factory-fresh.
        assert_eq!(handle.state().state_type(), "histogram");
        assert!(!handle.state().open);
    }

    #[test]
    fn test_empty_patch_is_a_noop() {
        let (mut handle, emissions) = handle_with_sink(None);
        handle.update_settings(&json!({}));
        assert!(emissions.borrow().is_empty());
    }

    #[test]
    fn test_patch_merges_and_emits_once() {
        let (mut handle, emissions) = handle_with_sink(None);
        handle.update_settings(&json!({ "bins": 10 }));

        assert_eq!(emissions.borrow().len(), 1);
        match &emissions.borrow()[0].settings {
            VizSettings::Histogram(s) => {
                assert_eq!(s.bins, 10);
                assert_eq!(s.fill_color, "#3498db");
                assert!(s.show_grid);
            }
            other => panic!("unexpected variant: {other:?}"),
        };
    }

    #[test]
    fn test_patch_cannot_change_type() {
        let (mut handle, _) = handle_with_sink(None);
        handle.update_settings(&json!({ "type": "rose", "bins": 4 }));
        assert_eq!(handle.state().state_type(), "histogram");
        match &handle.state().settings {
            VizSettings::Histogram(s) => assert_eq!(s.bins, 4),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_patch_is_dropped_without_emission() {
        let (mut handle, emissions) = handle_with_sink(None);
        handle.update_settings(&json!({ "bins": "many" }));
        assert!(emissions.borrow().is_empty());
        match &handle.state().settings {
            VizSettings::Histogram(s) => assert_eq!(s.bins, 20),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_reset_preserves_geometry_and_binding() {
        let (mut handle, _) = handle_with_sink(None);
        handle.update_selected_column("f1:dip");
        handle.toggle_settings_panel();
        handle.update_plot_dimensions(PlotDimensions::new(204.0, 304.0));
        handle.update_settings(&json!({ "bins": 10, "fillColor": "#ff0000" }));

        handle.reset_to_defaults();

        let state = handle.state();
        assert_eq!(
            state.settings,
            VizSettings::Histogram(HistogramSettings::default())
        );
        assert_eq!(state.selected_column, "f1:dip");
        assert!(state.open);
        assert_eq!(state.plot_dimensions.width, 204.0);
    }

    #[test]
    fn test_emissions_are_ordered_not_coalesced() {
        let (mut handle, emissions) = handle_with_sink(None);
        handle.update_settings(&json!({ "bins": 10 }));
        handle.update_selected_column("f1:dip");

        let emitted = emissions.borrow();
        assert_eq!(emitted.len(), 2);
        // The settings patch is visible in the first emission even though a
        // column change followed it.
        match &emitted[0].settings {
            VizSettings::Histogram(s) => assert_eq!(s.bins, 10),
            other => panic!("unexpected variant: {other:?}"),
        }
        assert!(emitted[0].selected_column.is_empty());
        assert_eq!(emitted[1].selected_column, "f1:dip");
    }

    #[test]
    fn test_sequential_dimension_updates_both_emit() {
        let (mut handle, emissions) = handle_with_sink(None);
        handle.update_plot_dimensions(PlotDimensions::new(300.0, 200.0));
        handle.update_plot_dimensions(PlotDimensions::new(340.0, 200.0));
        assert_eq!(emissions.borrow().len(), 2);
        assert_eq!(handle.state().plot_dimensions.width, 340.0);
    }

    #[test]
    fn test_column_data_resolution() {
        let (mut handle, _) = handle_with_sink(None);
        let mut file = DataFile::new("f1", "data.csv", vec!["v".to_string()]);
        file.rows = vec![
            DataRow::Positional(vec![json!(1)]),
            DataRow::Positional(vec![json!("x")]),
            DataRow::Positional(vec![json!(2)]),
        ];
        let files = vec![file];

        assert!(handle.selected_column_data(&files).is_empty());
        handle.update_selected_column("f1:v");
        assert_eq!(handle.selected_column_data(&files), vec![1.0, 2.0]);
        assert_eq!(
            handle.selected_column_info(&files).map(|c| c.column_name),
            Some("v".to_string())
        );

        // Stale key after a rename: silently no data.
        handle.update_selected_column("f1:renamed");
        assert!(handle.selected_column_data(&files).is_empty());
        assert!(handle.selected_column_info(&files).is_none());
    }
}
