use std::fs;
use std::path::PathBuf;

use clap::Parser;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;

use orbital_transfer_analyzer::geometry::{GeometryDescription, Point, sample_geometry};
use orbital_transfer_analyzer::impulsive::solve;
use orbital_transfer_analyzer::params::OrbitalParameters;
use transfer_core::constants::{EARTH_MU_M3_S2, EARTH_RADIUS_KM};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render the orbits and Hohmann transfer ellipse to a PNG"
)]
struct Cli {
    /// Gravitational parameter of the central body (m³/s²)
    #[arg(long, default_value_t = EARTH_MU_M3_S2)]
    mu: f64,

    /// Central body radius (km)
    #[arg(long, default_value_t = EARTH_RADIUS_KM)]
    body_radius: f64,

    /// Departure orbit radius (km)
    #[arg(long)]
    r1: f64,

    /// Arrival orbit radius (km)
    #[arg(long)]
    r2: f64,

    #[arg(long, default_value = "artifacts/transfer.png")]
    output: PathBuf,

    #[arg(long, default_value_t = 900)]
    width: u32,

    #[arg(long, default_value_t = 900)]
    height: u32,

    /// Samples per curve
    #[arg(long, default_value_t = 720)]
    points: usize,
}

const ORBIT1_COLOR: RGBColor = RGBColor(255, 153, 153);
const ORBIT2_COLOR: RGBColor = RGBColor(255, 77, 77);
const TRANSFER_COLOR: RGBColor = RGBColor(204, 0, 0);

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let params = OrbitalParameters::new(cli.mu, cli.body_radius, cli.r1, cli.r2)?;
    let result = solve(&params)?;
    let geometry = sample_geometry(&params, &result, cli.points);

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let root = BitMapBackend::new(&cli.output, (cli.width, cli.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let font_family = select_font_family();
    let caption_font = FontDesc::new(font_family, 24.0, FontStyle::Bold);
    let label_font = FontDesc::new(font_family, 16.0, FontStyle::Normal);

    let lim = geometry.axis_extent_km();
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            format!(
                "Hohmann transfer: r1 = {:.0} km, r2 = {:.0} km",
                cli.r1, cli.r2
            ),
            caption_font,
        )
        .x_label_area_size(60)
        .y_label_area_size(90)
        .build_cartesian_2d(-lim..lim, -lim..lim)?;

    chart
        .configure_mesh()
        .x_desc("x [km]")
        .y_desc("y [km]")
        .label_style(label_font.clone())
        .x_labels(6)
        .y_labels(6)
        .draw()?;

    chart.draw_series(std::iter::once(Polygon::new(
        to_coords(&geometry.body),
        RED.mix(0.15).filled(),
    )))?;

    chart
        .draw_series(LineSeries::new(
            to_coords(&geometry.orbit1),
            ORBIT1_COLOR.stroke_width(2),
        ))?
        .label(format!("Orbit r1 = {:.0} km", cli.r1))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], ORBIT1_COLOR.stroke_width(2)));

    chart
        .draw_series(LineSeries::new(
            to_coords(&geometry.orbit2),
            ORBIT2_COLOR.stroke_width(2),
        ))?
        .label(format!("Orbit r2 = {:.0} km", cli.r2))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], ORBIT2_COLOR.stroke_width(2)));

    chart
        .draw_series(DashedLineSeries::new(
            to_coords(&geometry.transfer),
            6,
            4,
            TRANSFER_COLOR.stroke_width(2),
        ))?
        .label("Hohmann transfer")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], TRANSFER_COLOR.stroke_width(2))
        });

    draw_burns(&mut chart, &geometry, &label_font)?;

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.85))
        .label_font(label_font)
        .draw()?;

    root.present()?;
    Ok(())
}

fn draw_burns<DB: DrawingBackend>(
    chart: &mut ChartContext<DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    geometry: &GeometryDescription,
    label_font: &FontDesc<'static>,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    for (index, burn) in geometry.burns.iter().enumerate() {
        let position = (burn.position.x_km, burn.position.y_km);
        let tip = burn.tip();

        chart.draw_series(std::iter::once(Circle::new(
            position,
            5,
            TRANSFER_COLOR.stroke_width(2),
        )))?;
        chart.draw_series(std::iter::once(PathElement::new(
            vec![position, (tip.x_km, tip.y_km)],
            TRANSFER_COLOR.stroke_width(3),
        )))?;
        chart.draw_series(std::iter::once(Text::new(
            format!("Δv{} = {:.3} km/s", index + 1, burn.dv_km_s),
            (tip.x_km * 1.05, tip.y_km * 1.05),
            label_font.clone().color(&TRANSFER_COLOR),
        )))?;
    }
    Ok(())
}

fn to_coords(points: &[Point]) -> Vec<(f64, f64)> {
    points.iter().map(|p| (p.x_km, p.y_km)).collect()
}

fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}
