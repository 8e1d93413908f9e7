//! Per-kind visualization settings
//!
//! Each visualization kind has a plain record of user-tunable knobs with a
//! complete `Default` (no partial defaults). `VizSettings` is the tagged
//! union over all kinds; its `type` tag is the discriminant the registry
//! stores as `state_type`.

use serde::{Deserialize, Serialize};

/// Rose diagram (angular frequency of strikes/trends).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoseSettings {
    pub bin_angle_deg: f64,
    pub fill_color: String,
    pub stroke_color: String,
    pub mirrored: bool,
    pub show_grid: bool,
    pub show_labels: bool,
}

impl Default for RoseSettings {
    fn default() -> Self {
        Self {
            bin_angle_deg: 10.0,
            fill_color: "#2980b9".to_string(),
            stroke_color: "#1a5276".to_string(),
            mirrored: true,
            show_grid: true,
            show_labels: true,
        }
    }
}

/// Wulff (equal-angle) stereographic projection of planes and lineations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WulffSettings {
    pub hemisphere: Hemisphere,
    pub point_color: String,
    pub point_size: f64,
    pub show_great_circles: bool,
    pub show_grid: bool,
    pub grid_step_deg: f64,
}

impl Default for WulffSettings {
    fn default() -> Self {
        Self {
            hemisphere: Hemisphere::Lower,
            point_color: "#8e44ad".to_string(),
            point_size: 3.0,
            show_great_circles: true,
            show_grid: true,
            grid_step_deg: 10.0,
        }
    }
}

/// Projection hemisphere for stereonets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Hemisphere {
    Upper,
    Lower,
}

/// Histogram over one selected numeric column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistogramSettings {
    pub bins: u32,
    pub fill_color: String,
    pub stroke_color: String,
    pub show_grid: bool,
    pub show_statistics: bool,
    pub x_label: String,
    pub y_label: String,
}

impl Default for HistogramSettings {
    fn default() -> Self {
        Self {
            bins: 20,
            fill_color: "#3498db".to_string(),
            stroke_color: "#21618c".to_string(),
            show_grid: true,
            show_statistics: true,
            x_label: "Value".to_string(),
            y_label: "Count".to_string(),
        }
    }
}

/// Mohr circle of the inverted stress tensor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MohrSettings {
    pub circle_color: String,
    pub point_color: String,
    pub show_failure_envelope: bool,
    pub friction_angle_deg: f64,
    pub cohesion: f64,
    pub show_grid: bool,
}

impl Default for MohrSettings {
    fn default() -> Self {
        Self {
            circle_color: "#16a085".to_string(),
            point_color: "#c0392b".to_string(),
            show_failure_envelope: true,
            friction_angle_deg: 30.0,
            cohesion: 0.0,
            show_grid: true,
        }
    }
}

/// 2D map of fracture traces.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FractureMapSettings {
    pub line_color: String,
    pub line_width: f64,
    pub color_by: String,
    pub zoom_level: f64,
    pub show_axes: bool,
}

impl Default for FractureMapSettings {
    fn default() -> Self {
        Self {
            line_color: "#2c3e50".to_string(),
            line_width: 1.5,
            color_by: "none".to_string(),
            zoom_level: 1.0,
            show_axes: true,
        }
    }
}

/// Striation (slip lineation) map with slip-sense arrows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StriationSettings {
    pub arrow_color: String,
    pub arrow_scale: f64,
    pub show_plane_traces: bool,
    pub show_grid: bool,
}

impl Default for StriationSettings {
    fn default() -> Self {
        Self {
            arrow_color: "#d35400".to_string(),
            arrow_scale: 1.0,
            show_plane_traces: true,
            show_grid: true,
        }
    }
}

/// Histogram of angular misfits from an inversion run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MisfitSettings {
    pub bins: u32,
    pub fill_color: String,
    pub show_mean: bool,
    pub show_grid: bool,
    pub angle_unit: String,
}

impl Default for MisfitSettings {
    fn default() -> Self {
        Self {
            bins: 18,
            fill_color: "#e74c3c".to_string(),
            show_mean: true,
            show_grid: true,
            angle_unit: "degrees".to_string(),
        }
    }
}

/// Tagged union of every kind's settings.
///
/// The `type` tag is the same string the registry stores as the descriptor's
/// `state_type`; it never changes after a state is created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum VizSettings {
    #[serde(rename = "rose")]
    Rose(RoseSettings),
    #[serde(rename = "stereonet")]
    Stereonet(WulffSettings),
    #[serde(rename = "histogram")]
    Histogram(HistogramSettings),
    #[serde(rename = "mohr_circle")]
    MohrCircle(MohrSettings),
    #[serde(rename = "fracture_map")]
    FractureMap(FractureMapSettings),
    #[serde(rename = "striation_map")]
    StriationMap(StriationSettings),
    #[serde(rename = "misfit_histogram")]
    MisfitHistogram(MisfitSettings),
}

impl VizSettings {
    /// The discriminant string, equal to the serialized `type` tag.
    pub fn state_type(&self) -> &'static str {
        match self {
            VizSettings::Rose(_) => "rose",
            VizSettings::Stereonet(_) => "stereonet",
            VizSettings::Histogram(_) => "histogram",
            VizSettings::MohrCircle(_) => "mohr_circle",
            VizSettings::FractureMap(_) => "fracture_map",
            VizSettings::StriationMap(_) => "striation_map",
            VizSettings::MisfitHistogram(_) => "misfit_histogram",
        }
    }
}
