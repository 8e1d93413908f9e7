//! Renderer collaborator contract
//!
//! Each visualization kind has a leaf renderer (rose binning, Wulff
//! trigonometry, Mohr geometry, histogram statistics, fracture-map plotting)
//! that lives outside this workspace. The core only depends on this uniform
//! contract; `PlaceholderRenderer` is the built-in fallback used for unknown
//! kinds and empty data.

use crate::data_types::PlotDimensions;
use serde::{Deserialize, Serialize};

/// Summary statistics a renderer can expose for its current data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RenderStatistics {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
}

impl RenderStatistics {
    /// Compute statistics over a finite-numeric series. Returns `None` for
    /// an empty series rather than erroring.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let count = values.len();
        let mean = values.iter().sum::<f64>() / count as f64;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count as f64;
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        Some(Self {
            count,
            min,
            max,
            mean,
            std_dev: variance.sqrt(),
        })
    }
}

/// Uniform contract every leaf renderer implements.
pub trait Renderer {
    /// Draw the given series at the given pixel size. Zero data points must
    /// produce an explicit empty state, never an error.
    fn render(&mut self, data: &[f64], dims: PlotDimensions);

    /// Statistics over the last rendered data, `None` when empty.
    fn get_statistics(&self) -> Option<RenderStatistics>;

    /// Export the last rendered data as CSV.
    fn export_data(&self) -> String;

    /// SVG export where the kind supports it.
    fn export_svg(&self) -> Option<String> {
        None
    }
}

/// Fallback renderer: records what it was asked to draw and shows an
/// empty-state message instead of a plot.
#[derive(Debug, Clone)]
pub struct PlaceholderRenderer {
    label: String,
    data: Vec<f64>,
    dims: PlotDimensions,
}

impl PlaceholderRenderer {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            data: Vec::new(),
            dims: PlotDimensions::new(0.0, 0.0),
        }
    }

    /// The message shown in place of the plot area.
    pub fn message(&self) -> String {
        if self.data.is_empty() {
            format!("{}: No data available", self.label)
        } else {
            format!("{}: {} data points", self.label, self.data.len())
        }
    }

    pub fn dimensions(&self) -> PlotDimensions {
        self.dims
    }
}

impl Renderer for PlaceholderRenderer {
    fn render(&mut self, data: &[f64], dims: PlotDimensions) {
        self.data = data.to_vec();
        self.dims = dims;
    }

    fn get_statistics(&self) -> Option<RenderStatistics> {
        RenderStatistics::from_values(&self.data)
    }

    fn export_data(&self) -> String {
        let mut csv = String::from("Index,Value\n");
        for (i, v) in self.data.iter().enumerate() {
            csv.push_str(&format!("{i},{v}\n"));
        }
        csv
    }
}
