//! State snapshot export/import and schema-drift recovery
//!
//! Persisted states must survive a settings-shape addition across versions:
//! fields missing from an old snapshot fall back to the kind's current
//! defaults, and everything the snapshot does carry is preserved.

use geostress_registry::VizDescriptor;
use geostress_shared::{CompState, GeoStressError, PlotDimensions, Result, VizSettings};
use serde_json::{Map, Value};

/// Serialize a state snapshot for save/reload round-tripping.
pub fn export_state(state: &CompState) -> String {
    serde_json::to_string_pretty(state).unwrap_or_else(|e| {
        log::error!("failed to serialize state snapshot: {e}");
        "{}".to_string()
    })
}

/// Shallow-merge a persisted settings object over the kind's defaults.
///
/// The `type` tag always comes from `defaults`; a persisted tag is never
/// allowed to reinterpret the variant. If the merged object fails to
/// deserialize (a persisted field changed type), the defaults win wholesale
/// and the drop is logged.
pub fn merge_settings_with_defaults(defaults: &VizSettings, persisted: &Value) -> VizSettings {
    let mut base = match serde_json::to_value(defaults) {
        Ok(Value::Object(map)) => map,
        _ => return defaults.clone(),
    };

    if let Value::Object(overrides) = persisted {
        for (key, value) in overrides {
            if key == "type" {
                continue;
            }
            base.insert(key.clone(), value.clone());
        }
    }

    match serde_json::from_value(Value::Object(base)) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!(
                "persisted settings for '{}' could not be merged, using defaults: {e}",
                defaults.state_type()
            );
            defaults.clone()
        }
    }
}

/// Rebuild a `CompState` from a raw persisted snapshot.
///
/// Tolerates missing fields (defaults fill in) but refuses a snapshot whose
/// settings tag does not match the descriptor; the caller falls back to a
/// factory-fresh state in that case.
pub fn state_from_value(
    descriptor: &VizDescriptor,
    raw: &Value,
    fallback_width: f64,
    fallback_height: f64,
) -> Result<CompState> {
    let settings_value = raw.get("settings").cloned().unwrap_or(Value::Null);
    let found_tag = settings_value
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();
    if found_tag != descriptor.state_type {
        return Err(GeoStressError::StateTypeMismatch {
            expected: descriptor.state_type.to_string(),
            found: found_tag,
        });
    }

    let defaults = (descriptor.default_settings)();
    let settings = merge_settings_with_defaults(&defaults, &settings_value);

    let open = raw.get("open").and_then(Value::as_bool).unwrap_or(false);
    let selected_column = raw
        .get("selectedColumn")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();
    let plot_dimensions = raw
        .get("plotDimensions")
        .and_then(|v| serde_json::from_value(v.clone()).ok())
        .unwrap_or_else(|| PlotDimensions::new(fallback_width, fallback_height));

    Ok(CompState {
        settings,
        open,
        selected_column,
        plot_dimensions,
    })
}

/// Parse a JSON snapshot back into a state for this descriptor.
pub fn import_state(descriptor: &VizDescriptor, raw_json: &str) -> Result<CompState> {
    let raw: Value = serde_json::from_str(raw_json)?;
    state_from_value(descriptor, &raw, 0.0, 0.0)
}

/// Convert a typed in-session state to its persisted blob form.
pub fn state_to_value(state: &CompState) -> Value {
    serde_json::to_value(state).unwrap_or_else(|e| {
        log::error!("failed to convert state to value: {e}");
        Value::Object(Map::new())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use geostress_registry::kinds;
    use serde_json::json;

    #[test]
    fn test_merge_is_additive_safe() {
        let descriptor = kinds::histogram::descriptor();
        let defaults = (descriptor.default_settings)();
        // Old snapshot: knows nothing of strokeColor or labels.
        let persisted = json!({ "type": "histogram", "bins": 12, "showGrid": false });

        let merged = merge_settings_with_defaults(&defaults, &persisted);
        match merged {
            VizSettings::Histogram(settings) => {
                assert_eq!(settings.bins, 12);
                assert!(!settings.show_grid);
                assert_eq!(settings.fill_color, "#3498db");
                assert_eq!(settings.x_label, "Value");
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_merge_never_changes_tag() {
        let descriptor = kinds::histogram::descriptor();
        let defaults = (descriptor.default_settings)();
        let persisted = json!({ "type": "rose", "bins": 5 });
        let merged = merge_settings_with_defaults(&defaults, &persisted);
        assert_eq!(merged.state_type(), "histogram");
    }

    #[test]
    fn test_merge_bad_field_type_falls_back_to_defaults() {
        let descriptor = kinds::histogram::descriptor();
        let defaults = (descriptor.default_settings)();
        let persisted = json!({ "bins": "twenty" });
        let merged = merge_settings_with_defaults(&defaults, &persisted);
        assert_eq!(merged, defaults);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let descriptor = kinds::rose::descriptor();
        let mut state = (descriptor.create_initial_state)(420.0, 300.0);
        state.selected_column = "f1:strike".to_string();
        state.open = true;

        let json = export_state(&state);
        let back = import_state(&descriptor, &json).expect("round-trips");
        assert_eq!(back, state);
    }

    #[test]
    fn test_import_rejects_mismatched_tag() {
        let rose = kinds::rose::descriptor();
        let histogram = kinds::histogram::descriptor();
        let snapshot = export_state(&(histogram.create_initial_state)(100.0, 100.0));

        let err = import_state(&rose, &snapshot).expect_err("tag mismatch");
        assert_eq!(
            err,
            GeoStressError::StateTypeMismatch {
                expected: "rose".to_string(),
                found: "histogram".to_string(),
            }
        );
    }

    #[test]
    fn test_import_fills_missing_fields() {
        let descriptor = kinds::histogram::descriptor();
        let raw = r#"{ "settings": { "type": "histogram", "bins": 8 } }"#;
        let state = import_state(&descriptor, raw).expect("imports");
        assert!(!state.open);
        assert!(state.selected_column.is_empty());
        match state.settings {
            VizSettings::Histogram(s) => assert_eq!(s.bins, 8),
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
