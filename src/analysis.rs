//! One-shot validate → solve → sample pipeline.
//!
//! Each call produces fresh values with no shared state, so repeated
//! invocations are independent and may run concurrently if the host chooses.

use thiserror::Error;

use transfer_geometry::{GeometryDescription, sample_geometry_default};
use transfer_impulsive::{ComputationError, TransferResult, solve};
use transfer_params::{OrbitalParameters, ParamError};

/// Everything one parameter set produces: the validated inputs, the solved
/// transfer, and the geometry sampled at the default grid.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub params: OrbitalParameters,
    pub result: TransferResult,
    pub geometry: GeometryDescription,
}

/// Top-level pipeline error.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("parameter validation failed: {0}")]
    Params(#[from] ParamError),
    #[error("transfer computation failed: {0}")]
    Computation(#[from] ComputationError),
}

/// Validate numeric inputs, solve the transfer, and sample its geometry.
pub fn analyze(
    mu_m3_s2: f64,
    body_radius_km: f64,
    r1_km: f64,
    r2_km: f64,
) -> Result<Analysis, AnalysisError> {
    run(OrbitalParameters::new(mu_m3_s2, body_radius_km, r1_km, r2_km)?)
}

/// Parse textual inputs, then run the same pipeline.
pub fn analyze_str(
    mu: &str,
    body_radius: &str,
    r1: &str,
    r2: &str,
) -> Result<Analysis, AnalysisError> {
    run(OrbitalParameters::parse(mu, body_radius, r1, r2)?)
}

fn run(params: OrbitalParameters) -> Result<Analysis, AnalysisError> {
    let result = solve(&params)?;
    let geometry = sample_geometry_default(&params, &result);
    Ok(Analysis {
        params,
        result,
        geometry,
    })
}
