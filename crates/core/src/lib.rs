//! Core constants and unit helpers shared across the Orbital Transfer
//! Analyzer workspace.

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Earth's gravitational parameter (m³/s²).
    pub const EARTH_MU_M3_S2: f64 = 3.986004418e14;
    /// Earth's mean radius (km).
    pub const EARTH_RADIUS_KM: f64 = 6371.0;
    /// Geostationary altitude above Earth's surface (km).
    pub const GEO_ALTITUDE_KM: f64 = 35_786.0;
    /// Seconds per hour.
    pub const SECONDS_PER_HOUR: f64 = 3_600.0;
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::SECONDS_PER_HOUR;

    /// Convert a gravitational parameter from m³/s² to km³/s².
    #[inline]
    pub fn mu_m3_s2_to_km3_s2(mu: f64) -> f64 {
        mu / 1.0e9
    }

    /// Convert seconds to hours.
    #[inline]
    pub fn seconds_to_hours(seconds: f64) -> f64 {
        seconds / SECONDS_PER_HOUR
    }

    /// Convert hours to seconds.
    #[inline]
    pub fn hours_to_seconds(hours: f64) -> f64 {
        hours * SECONDS_PER_HOUR
    }
}
