//! Stress-inversion collaborator contract
//!
//! The inversion numerics (Monte Carlo sampling, grid search, eigen
//! decomposition of the stress tensor) live outside this workspace. The
//! dashboard only selects a method, passes the bound files through, logs
//! progress, and surfaces the opaque result.

use crate::data_types::DataFile;
use crate::errors::Result;
use serde::{Deserialize, Serialize};

/// Numerical search method for the stress inversion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InversionMethod {
    MonteCarlo,
    GridSearch,
    EigenDecomposition,
}

impl std::fmt::Display for InversionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InversionMethod::MonteCarlo => write!(f, "Monte Carlo"),
            InversionMethod::GridSearch => write!(f, "Grid Search"),
            InversionMethod::EigenDecomposition => write!(f, "Eigen Decomposition"),
        }
    }
}

/// Tuning parameters handed through to the inversion engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InversionParams {
    pub iterations: u32,
    pub friction_angle_deg: f64,
    pub seed: Option<u64>,
}

impl Default for InversionParams {
    fn default() -> Self {
        Self {
            iterations: 50_000,
            friction_angle_deg: 30.0,
            seed: None,
        }
    }
}

/// Principal-stress orientation part of a solution.
///
/// Compressive stresses are negative, sigma1 >= sigma2 >= sigma3.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StressTensorSolution {
    pub sigma1_trend_deg: f64,
    pub sigma1_plunge_deg: f64,
    pub sigma3_trend_deg: f64,
    pub sigma3_plunge_deg: f64,
}

/// Opaque result of one inversion run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InversionResult {
    pub stress_ratio: f64,
    pub misfit: f64,
    pub stress_tensor_solution: StressTensorSolution,
    pub iterations: u32,
}

/// The external inversion engine.
pub trait StressInversion {
    fn run(
        &self,
        method: InversionMethod,
        params: &InversionParams,
        files: &[DataFile],
    ) -> Result<InversionResult>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_serialization() {
        let json = serde_json::to_string(&InversionMethod::MonteCarlo).expect("serializes");
        assert_eq!(json, "\"monte_carlo\"");
    }

    #[test]
    fn test_default_params() {
        let params = InversionParams::default();
        assert_eq!(params.iterations, 50_000);
        assert!(params.seed.is_none());
    }
}
