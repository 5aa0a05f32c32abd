//! Analytic Hohmann transfer between circular, coplanar orbits.
//!
//! Consumes validated [`OrbitalParameters`] and returns delta-v magnitudes,
//! the transfer-ellipse shape, and the coast time for two-body Keplerian
//! motion about the given central body.

use thiserror::Error;
use transfer_core::units::{mu_m3_s2_to_km3_s2, seconds_to_hours};
use transfer_params::OrbitalParameters;

/// A derived quantity came out non-finite despite validated input.
///
/// Cannot occur for parameters that passed validation; checked anyway so the
/// solver never hands a NaN to its callers.
#[derive(Debug, Error)]
#[error("transfer computation produced a non-finite {quantity}")]
pub struct ComputationError {
    quantity: &'static str,
}

/// Shape, impulses, and coast time of a Hohmann transfer.
///
/// Impulses are magnitudes (km/s), independent of whether the transfer is
/// inbound or outbound; direction is a rendering concern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferResult {
    pub semi_major_axis_km: f64,
    pub eccentricity: f64,
    pub dv1_km_s: f64,
    pub dv2_km_s: f64,
    pub dv_total_km_s: f64,
    pub transfer_time_s: f64,
}

impl TransferResult {
    /// Coast time between the two impulses, in hours.
    pub fn transfer_time_hours(&self) -> f64 {
        seconds_to_hours(self.transfer_time_s)
    }

    fn ensure_finite(&self) -> Result<(), ComputationError> {
        let checks = [
            ("semi-major axis", self.semi_major_axis_km),
            ("eccentricity", self.eccentricity),
            ("departure impulse", self.dv1_km_s),
            ("arrival impulse", self.dv2_km_s),
            ("transfer time", self.transfer_time_s),
        ];
        for (quantity, value) in checks {
            if !value.is_finite() {
                return Err(ComputationError { quantity });
            }
        }
        Ok(())
    }
}

/// Compute the Hohmann transfer between the two circular orbits in `params`.
///
/// All work happens in km and seconds after converting the gravitational
/// parameter from its SI input unit.
pub fn solve(params: &OrbitalParameters) -> Result<TransferResult, ComputationError> {
    let mu = mu_m3_s2_to_km3_s2(params.mu_m3_s2());
    let r1 = params.r1_km();
    let r2 = params.r2_km();

    // Equal radii collapse to a null maneuver with exact zero impulses.
    if r1 == r2 {
        let result = TransferResult {
            semi_major_axis_km: r1,
            eccentricity: 0.0,
            dv1_km_s: 0.0,
            dv2_km_s: 0.0,
            dv_total_km_s: 0.0,
            transfer_time_s: std::f64::consts::PI * (r1.powi(3) / mu).sqrt(),
        };
        result.ensure_finite()?;
        return Ok(result);
    }

    let a = 0.5 * (r1 + r2);
    let e = (r2 - r1).abs() / (r1 + r2);

    let v1 = (mu / r1).sqrt();
    let v2 = (mu / r2).sqrt();

    // Vis-viva on the transfer ellipse at the departure and arrival radii
    let v_depart = (mu * (2.0 / r1 - 1.0 / a)).sqrt();
    let v_arrive = (mu * (2.0 / r2 - 1.0 / a)).sqrt();

    let dv1 = (v_depart - v1).abs();
    let dv2 = (v2 - v_arrive).abs();

    // Half the transfer ellipse's orbital period
    let transfer_time = std::f64::consts::PI * (a.powi(3) / mu).sqrt();

    let result = TransferResult {
        semi_major_axis_km: a,
        eccentricity: e,
        dv1_km_s: dv1,
        dv2_km_s: dv2,
        dv_total_km_s: dv1 + dv2,
        transfer_time_s: transfer_time,
    };
    result.ensure_finite()?;
    Ok(result)
}
