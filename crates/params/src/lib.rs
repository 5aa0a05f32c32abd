//! Validated input parameters for circular-to-circular transfer analysis.
//!
//! `OrbitalParameters` is an immutable value: once constructed it cannot be
//! mutated, and a failed validation never disturbs previously constructed
//! values. Callers replace the whole bundle on every parameter change.

use thiserror::Error;

/// Errors produced while parsing or validating transfer parameters.
#[derive(Debug, Error)]
pub enum ParamError {
    #[error("field '{field}' is not a finite number: '{value}'")]
    Parse { field: &'static str, value: String },
    #[error("{0}")]
    Range(String),
}

/// Immutable bundle of the four physical inputs to a transfer computation.
///
/// The gravitational parameter is SI (m³/s²), all distances are kilometres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalParameters {
    mu_m3_s2: f64,
    body_radius_km: f64,
    r1_km: f64,
    r2_km: f64,
}

impl OrbitalParameters {
    /// Validate numeric inputs and construct the parameter bundle.
    ///
    /// Invariants enforced: `mu > 0`, all distances positive, and both orbit
    /// radii strictly above the central body's radius. There is no ordering
    /// constraint between `r1` and `r2`; either may be the inner orbit.
    pub fn new(
        mu_m3_s2: f64,
        body_radius_km: f64,
        r1_km: f64,
        r2_km: f64,
    ) -> Result<Self, ParamError> {
        let fields = [
            ("mu", mu_m3_s2),
            ("body_radius", body_radius_km),
            ("r1", r1_km),
            ("r2", r2_km),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ParamError::Parse {
                    field,
                    value: value.to_string(),
                });
            }
        }

        if mu_m3_s2 <= 0.0 {
            return Err(ParamError::Range(format!(
                "gravitational parameter must be positive, got {mu_m3_s2} m³/s²"
            )));
        }
        if body_radius_km.min(r1_km).min(r2_km) <= 0.0 {
            return Err(ParamError::Range(
                "all distances must be positive".to_string(),
            ));
        }
        if r1_km <= body_radius_km || r2_km <= body_radius_km {
            return Err(ParamError::Range(format!(
                "orbit radii must exceed the body radius of {body_radius_km} km"
            )));
        }

        Ok(Self {
            mu_m3_s2,
            body_radius_km,
            r1_km,
            r2_km,
        })
    }

    /// Parse the four fields from text, then validate as in [`Self::new`].
    pub fn parse(mu: &str, body_radius: &str, r1: &str, r2: &str) -> Result<Self, ParamError> {
        Self::new(
            parse_field("mu", mu)?,
            parse_field("body_radius", body_radius)?,
            parse_field("r1", r1)?,
            parse_field("r2", r2)?,
        )
    }

    /// Gravitational parameter of the central body (m³/s²).
    pub fn mu_m3_s2(&self) -> f64 {
        self.mu_m3_s2
    }

    /// Radius of the central body (km).
    pub fn body_radius_km(&self) -> f64 {
        self.body_radius_km
    }

    /// Radius of the departure orbit (km).
    pub fn r1_km(&self) -> f64 {
        self.r1_km
    }

    /// Radius of the arrival orbit (km).
    pub fn r2_km(&self) -> f64 {
        self.r2_km
    }
}

fn parse_field(field: &'static str, text: &str) -> Result<f64, ParamError> {
    // `f64::from_str` accepts "inf" and "NaN"; those still count as parse
    // failures here because the contract requires a finite number.
    let value: f64 = text.trim().parse().map_err(|_| ParamError::Parse {
        field,
        value: text.to_string(),
    })?;
    if !value.is_finite() {
        return Err(ParamError::Parse {
            field,
            value: text.to_string(),
        });
    }
    Ok(value)
}
