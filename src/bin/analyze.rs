use std::io::Write;
use std::path::PathBuf;

use clap::Parser;

use orbital_transfer_analyzer::analysis::{Analysis, analyze_str};
use orbital_transfer_analyzer::export::{geometry, summary};
use orbital_transfer_analyzer::presets::{builtin_presets, find_preset, load_presets};
use transfer_core::constants::{EARTH_MU_M3_S2, EARTH_RADIUS_KM};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Compute a Hohmann transfer between two circular orbits"
)]
struct Cli {
    /// Gravitational parameter of the central body in m³/s² (defaults to Earth)
    #[arg(long)]
    mu: Option<String>,

    /// Central body radius in km (defaults to Earth)
    #[arg(long)]
    body_radius: Option<String>,

    /// Departure orbit radius in km
    #[arg(long)]
    r1: Option<String>,

    /// Arrival orbit radius in km
    #[arg(long)]
    r2: Option<String>,

    /// Use a named preset instead of explicit parameters
    #[arg(long, conflicts_with_all = ["mu", "body_radius", "r1", "r2"])]
    preset: Option<String>,

    /// Load the preset catalog from a YAML/TOML file instead of the built-ins
    #[arg(long)]
    presets_file: Option<PathBuf>,

    /// List available presets and exit
    #[arg(long, default_value_t = false)]
    list_presets: bool,

    /// Write a CSV summary row to this path ('-' for stdout)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Write the sampled geometry as JSON to this path
    #[arg(long)]
    geometry_json: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let catalog = match &cli.presets_file {
        Some(path) => load_presets(path)?,
        None => builtin_presets(),
    };

    if cli.list_presets {
        for preset in &catalog {
            println!(
                "{:<16} r1 = {:.1} km, r2 = {:.1} km",
                preset.name, preset.r1_km, preset.r2_km
            );
        }
        return Ok(());
    }

    let analysis = match &cli.preset {
        Some(name) => {
            let preset = find_preset(&catalog, name)
                .ok_or_else(|| anyhow::anyhow!("preset '{name}' not found in catalog"))?;
            orbital_transfer_analyzer::analysis::analyze(
                preset.mu_m3_s2,
                preset.body_radius_km,
                preset.r1_km,
                preset.r2_km,
            )?
        }
        None => {
            let r1 = cli
                .r1
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("--r1 is required unless --preset is given"))?;
            let r2 = cli
                .r2
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("--r2 is required unless --preset is given"))?;
            let mu = cli
                .mu
                .clone()
                .unwrap_or_else(|| EARTH_MU_M3_S2.to_string());
            let body_radius = cli
                .body_radius
                .clone()
                .unwrap_or_else(|| EARTH_RADIUS_KM.to_string());
            analyze_str(&mu, &body_radius, r1, r2)?
        }
    };

    print_results(&analysis);

    if let Some(path) = &cli.output {
        let mut writer = summary::writer_for_path(path)?;
        summary::write_header(&mut *writer)?;
        summary::Record::from_solution(&analysis.params, &analysis.result).write_to(&mut *writer)?;
        writer.flush()?;
    }
    if let Some(path) = &cli.geometry_json {
        geometry::write_sidecar(path, &analysis.geometry)?;
    }

    Ok(())
}

fn print_results(analysis: &Analysis) {
    let result = &analysis.result;
    println!("=== Hohmann Transfer ===");
    println!("r1          : {:.1} km", analysis.params.r1_km());
    println!("r2          : {:.1} km", analysis.params.r2_km());
    println!("a (transfer): {:.1} km", result.semi_major_axis_km);
    println!("e (transfer): {:.4}", result.eccentricity);
    println!("Δv1         : {:.3} km/s", result.dv1_km_s);
    println!("Δv2         : {:.3} km/s", result.dv2_km_s);
    println!("Δv_total    : {:.3} km/s", result.dv_total_km_s);
    println!("t_trans     : {:.2} h", result.transfer_time_hours());
}
