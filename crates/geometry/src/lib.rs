//! Plottable geometry derived from a transfer solution.
//!
//! Everything here is a projection of [`OrbitalParameters`] and
//! [`TransferResult`] into point sequences an external renderer can draw.
//! Output is recomputed fresh on every call and never cached.

use serde::Serialize;
use transfer_impulsive::TransferResult;
use transfer_params::OrbitalParameters;

/// Number of samples per curve when the caller has no preference.
pub const DEFAULT_POINT_COUNT: usize = 360;

// Arrow length per km/s is 2% of the axis extent; the axis extent is 1.2x
// the larger orbit radius. Display convenience only.
const ARROW_SCALE_PER_KM_S: f64 = 0.02;
const AXIS_MARGIN: f64 = 1.2;

/// A point in the orbital plane (km).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x_km: f64,
    pub y_km: f64,
}

/// A burn marker: where the impulse happens and how to draw its arrow.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ImpulseVector {
    pub position: Point,
    /// Unit direction of the arrow. Display convention, not physics.
    pub direction: Point,
    /// Arrow length in km, proportional to the impulse magnitude.
    pub length_km: f64,
    pub dv_km_s: f64,
}

impl ImpulseVector {
    /// Arrow tip, offset from the burn position along the arrow direction.
    pub fn tip(&self) -> Point {
        Point {
            x_km: self.position.x_km + self.direction.x_km * self.length_km,
            y_km: self.position.y_km + self.direction.y_km * self.length_km,
        }
    }
}

/// Point sequences for the central body, both circular orbits, the transfer
/// ellipse, and the two burn markers.
#[derive(Debug, Clone, Serialize)]
pub struct GeometryDescription {
    pub body: Vec<Point>,
    pub orbit1: Vec<Point>,
    pub orbit2: Vec<Point>,
    pub transfer: Vec<Point>,
    pub burns: [ImpulseVector; 2],
}

impl GeometryDescription {
    /// Symmetric axis extent that fits both orbits with the display margin.
    pub fn axis_extent_km(&self) -> f64 {
        self.burns[0]
            .position
            .x_km
            .abs()
            .max(self.burns[1].position.x_km.abs())
            * AXIS_MARGIN
    }
}

/// Sample the full geometry on `point_count` evenly spaced angles.
pub fn sample_geometry(
    params: &OrbitalParameters,
    result: &TransferResult,
    point_count: usize,
) -> GeometryDescription {
    let r1 = params.r1_km();
    let r2 = params.r2_km();

    let arrow_scale = ARROW_SCALE_PER_KM_S * AXIS_MARGIN * r1.max(r2);
    let burns = [
        ImpulseVector {
            position: Point { x_km: r1, y_km: 0.0 },
            direction: Point { x_km: 0.0, y_km: 1.0 },
            length_km: arrow_scale * result.dv1_km_s,
            dv_km_s: result.dv1_km_s,
        },
        ImpulseVector {
            position: Point { x_km: -r2, y_km: 0.0 },
            direction: Point { x_km: 0.0, y_km: -1.0 },
            length_km: arrow_scale * result.dv2_km_s,
            dv_km_s: result.dv2_km_s,
        },
    ];

    GeometryDescription {
        body: sample_circle(params.body_radius_km(), point_count),
        orbit1: sample_circle(r1, point_count),
        orbit2: sample_circle(r2, point_count),
        transfer: sample_transfer_ellipse(r1, r2, result, point_count),
        burns,
    }
}

/// Sample with the default grid of 360 angles.
pub fn sample_geometry_default(
    params: &OrbitalParameters,
    result: &TransferResult,
) -> GeometryDescription {
    sample_geometry(params, result, DEFAULT_POINT_COUNT)
}

/// Circle of radius `r_km` on `n` evenly spaced angles over `[0, 2π)`.
pub fn sample_circle(r_km: f64, n: usize) -> Vec<Point> {
    angles(n)
        .map(|theta| Point {
            x_km: r_km * theta.cos(),
            y_km: r_km * theta.sin(),
        })
        .collect()
}

/// Transfer ellipse in polar form, oriented so the curve passes through the
/// departure point `(r1, 0)` and the arrival point `(-r2, 0)`.
fn sample_transfer_ellipse(r1: f64, r2: f64, result: &TransferResult, n: usize) -> Vec<Point> {
    let a = result.semi_major_axis_km;
    let e = result.eccentricity;
    let semi_latus = a * (1.0 - e * e);
    // Inbound transfers flip the cos term so that r(0) = r1 and r(pi) = r2
    // hold in both directions.
    let sign = if r2 >= r1 { 1.0 } else { -1.0 };
    angles(n)
        .map(|theta| {
            let r = semi_latus / (1.0 + sign * e * theta.cos());
            Point {
                x_km: r * theta.cos(),
                y_km: r * theta.sin(),
            }
        })
        .collect()
}

fn angles(n: usize) -> impl Iterator<Item = f64> {
    let step = std::f64::consts::TAU / n as f64;
    (0..n).map(move |k| k as f64 * step)
}

#[cfg(test)]
mod tests {
    use super::*;
    use transfer_impulsive::solve;
    use transfer_params::OrbitalParameters;

    fn leo_geo() -> (OrbitalParameters, TransferResult) {
        let params = OrbitalParameters::new(3.986004418e14, 6371.0, 7000.0, 42164.0).unwrap();
        let result = solve(&params).unwrap();
        (params, result)
    }

    #[test]
    fn circle_starts_on_positive_x_axis() {
        let points = sample_circle(7000.0, 360);
        assert_eq!(points.len(), 360);
        assert!((points[0].x_km - 7000.0).abs() < 1e-9);
        assert!(points[0].y_km.abs() < 1e-9);
    }

    #[test]
    fn transfer_runs_from_departure_to_arrival() {
        let (params, result) = leo_geo();
        let geometry = sample_geometry(&params, &result, 360);
        let first = geometry.transfer[0];
        let half = geometry.transfer[180];
        assert!((first.x_km - 7000.0).abs() < 1e-6);
        assert!(first.y_km.abs() < 1e-6);
        assert!((half.x_km + 42164.0).abs() < 1e-6);
        assert!(half.y_km.abs() < 1e-6);
    }

    #[test]
    fn inbound_transfer_keeps_departure_at_r1() {
        let params = OrbitalParameters::new(3.986004418e14, 6371.0, 42164.0, 7000.0).unwrap();
        let result = solve(&params).unwrap();
        let geometry = sample_geometry(&params, &result, 360);
        assert!((geometry.transfer[0].x_km - 42164.0).abs() < 1e-6);
        assert!((geometry.transfer[180].x_km + 7000.0).abs() < 1e-6);
    }

    #[test]
    fn burn_markers_sit_on_the_tangent_points() {
        let (params, result) = leo_geo();
        let geometry = sample_geometry(&params, &result, 360);
        let [departure, arrival] = geometry.burns;
        assert_eq!(departure.position.x_km, 7000.0);
        assert_eq!(arrival.position.x_km, -42164.0);

        // Arrow lengths scale with 0.024 * max(r1, r2) per km/s
        let scale = 0.024 * 42164.0;
        assert!((departure.length_km - scale * result.dv1_km_s).abs() < 1e-9);
        assert!((arrival.length_km - scale * result.dv2_km_s).abs() < 1e-9);

        // Departure arrow points +y, arrival arrow points -y
        assert!(departure.tip().y_km > 0.0);
        assert!(arrival.tip().y_km < 0.0);
    }

    #[test]
    fn degenerate_transfer_collapses_to_the_circle() {
        let params = OrbitalParameters::new(3.986004418e14, 6371.0, 7000.0, 7000.0).unwrap();
        let result = solve(&params).unwrap();
        let geometry = sample_geometry(&params, &result, 90);
        for point in &geometry.transfer {
            let r = (point.x_km * point.x_km + point.y_km * point.y_km).sqrt();
            assert!((r - 7000.0).abs() < 1e-6);
        }
        assert_eq!(geometry.burns[0].length_km, 0.0);
    }

    #[test]
    fn axis_extent_covers_the_larger_orbit() {
        let (params, result) = leo_geo();
        let geometry = sample_geometry(&params, &result, 360);
        assert!((geometry.axis_extent_km() - 1.2 * 42164.0).abs() < 1e-6);
    }
}
