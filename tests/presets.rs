use std::fs::{self, File};
use std::io::Write;

use orbital_transfer_analyzer::analysis::analyze;
use orbital_transfer_analyzer::presets::{builtin_presets, find_preset, load_presets};

#[test]
fn builtin_presets_all_solve() {
    let presets = builtin_presets();
    assert_eq!(presets.len(), 5);
    for preset in &presets {
        let analysis = analyze(
            preset.mu_m3_s2,
            preset.body_radius_km,
            preset.r1_km,
            preset.r2_km,
        )
        .unwrap_or_else(|e| panic!("preset {} failed: {e}", preset.name));
        assert!(analysis.result.dv_total_km_s > 0.0);
    }
}

#[test]
fn shipped_catalog_matches_builtins() {
    let shipped = load_presets("data/presets.yaml").expect("shipped catalog");
    let builtins = builtin_presets();
    assert_eq!(shipped.len(), builtins.len());
    for (loaded, builtin) in shipped.iter().zip(&builtins) {
        assert_eq!(loaded.name, builtin.name);
        assert!((loaded.r1_km - builtin.r1_km).abs() < 1e-9);
        assert!((loaded.r2_km - builtin.r2_km).abs() < 1e-9);
        assert!((loaded.mu_m3_s2 - builtin.mu_m3_s2).abs() < 1.0);
    }
}

#[test]
fn loads_yaml_catalog_from_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("presets.yaml");
    let mut file = File::create(&path).expect("yaml create");
    writeln!(file, "- name: TEST-LEO-GEO").unwrap();
    writeln!(file, "  mu_m3_s2: 3.986004418e14").unwrap();
    writeln!(file, "  body_radius_km: 6371.0").unwrap();
    writeln!(file, "  r1_km: 7000.0").unwrap();
    writeln!(file, "  r2_km: 42164.0").unwrap();

    let presets = load_presets(&path).expect("yaml presets");
    assert_eq!(presets.len(), 1);
    let preset = find_preset(&presets, "test-leo-geo").expect("case-insensitive lookup");
    assert_eq!(preset.r2_km, 42_164.0);
}

#[test]
fn loads_toml_catalog_from_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("presets.toml");
    let mut contents = String::new();
    for (idx, name) in ["a-transfer", "b-transfer"].iter().enumerate() {
        contents.push_str(&format!(
            "[[preset]]\nname = \"{name}\"\nmu_m3_s2 = 3.986004418e14\nbody_radius_km = 6371.0\nr1_km = 7000.0\nr2_km = {:.1}\n\n",
            10_000.0 + idx as f64 * 1000.0
        ));
    }
    fs::write(&path, contents).unwrap();

    let presets = load_presets(&path).expect("toml presets");
    assert_eq!(presets.len(), 2);
    assert_eq!(presets[0].name, "a-transfer");
    assert_eq!(presets[1].r2_km, 11_000.0);
}

#[test]
fn missing_catalog_file_is_an_error() {
    assert!(load_presets("data/does-not-exist.yaml").is_err());
}
