//! Preset catalogs: built-in Earth transfer cases and file loaders.

use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use transfer_core::constants::{EARTH_MU_M3_S2, EARTH_RADIUS_KM, GEO_ALTITUDE_KM};

/// A named set of transfer inputs.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Preset {
    pub name: String,
    pub mu_m3_s2: f64,
    pub body_radius_km: f64,
    pub r1_km: f64,
    pub r2_km: f64,
}

/// Errors that can occur while loading preset catalogs.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read preset file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Earth presets shipped with the tool.
///
/// Orbit radii are body radius plus altitude, except the MEO entry which is
/// an absolute 20 000 km radius.
pub fn builtin_presets() -> Vec<Preset> {
    let geo_radius = EARTH_RADIUS_KM + GEO_ALTITUDE_KM;
    let earth = |name: &str, r1_km: f64, r2_km: f64| Preset {
        name: name.to_string(),
        mu_m3_s2: EARTH_MU_M3_S2,
        body_radius_km: EARTH_RADIUS_KM,
        r1_km,
        r2_km,
    };

    vec![
        earth("LEO400-GEO", EARTH_RADIUS_KM + 400.0, geo_radius),
        earth("LEO200-GEO", EARTH_RADIUS_KM + 200.0, geo_radius),
        earth("LEO400-MEO20000", EARTH_RADIUS_KM + 400.0, 20_000.0),
        earth("GEO-LEO400", geo_radius, EARTH_RADIUS_KM + 400.0),
        earth("ISS-GEO", EARTH_RADIUS_KM + 408.0, geo_radius),
    ]
}

/// Case-insensitive preset lookup.
pub fn find_preset<'a>(presets: &'a [Preset], name: &str) -> Option<&'a Preset> {
    presets.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// TOML catalogs list presets as an array of tables.
#[derive(Debug, Deserialize)]
struct PresetCatalog {
    #[serde(default)]
    preset: Vec<Preset>,
}

/// Load a preset catalog from a YAML list or a TOML `[[preset]]` file.
pub fn load_presets<P: AsRef<Path>>(path: P) -> Result<Vec<Preset>, ConfigError> {
    let path = path.as_ref();
    if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let catalog: PresetCatalog = toml::from_str(&contents)?;
        Ok(catalog.preset)
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}
