//! Export helpers for CSV and JSON artifacts.

pub mod summary {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    use transfer_impulsive::TransferResult;
    use transfer_params::OrbitalParameters;

    const HEADER: &str = "r1_km,r2_km,semi_major_axis_km,eccentricity,dv1_km_s,dv2_km_s,dv_total_km_s,transfer_time_s,transfer_time_hours";

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Write the standard summary CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// CSV row for one solved transfer.
    #[derive(Debug, Clone)]
    pub struct Record {
        pub r1_km: f64,
        pub r2_km: f64,
        pub semi_major_axis_km: f64,
        pub eccentricity: f64,
        pub dv1_km_s: f64,
        pub dv2_km_s: f64,
        pub dv_total_km_s: f64,
        pub transfer_time_s: f64,
        pub transfer_time_hours: f64,
    }

    impl Record {
        /// Build a record from the validated inputs and the solved transfer.
        pub fn from_solution(params: &OrbitalParameters, result: &TransferResult) -> Self {
            Record {
                r1_km: params.r1_km(),
                r2_km: params.r2_km(),
                semi_major_axis_km: result.semi_major_axis_km,
                eccentricity: result.eccentricity,
                dv1_km_s: result.dv1_km_s,
                dv2_km_s: result.dv2_km_s,
                dv_total_km_s: result.dv_total_km_s,
                transfer_time_s: result.transfer_time_s,
                transfer_time_hours: result.transfer_time_hours(),
            }
        }

        /// Serialize the record to CSV, matching the standard header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{:.3},{:.3},{:.3},{:.6},{:.6},{:.6},{:.6},{:.3},{:.4}",
                self.r1_km,
                self.r2_km,
                self.semi_major_axis_km,
                self.eccentricity,
                self.dv1_km_s,
                self.dv2_km_s,
                self.dv_total_km_s,
                self.transfer_time_s,
                self.transfer_time_hours,
            )
        }
    }
}

pub mod geometry {
    use std::fs::{self, File};
    use std::io;
    use std::path::Path;

    use serde_json::to_writer_pretty;
    use transfer_geometry::GeometryDescription;

    /// Write the sampled geometry as a pretty-printed JSON sidecar.
    pub fn write_sidecar(output: &Path, geometry: &GeometryDescription) -> io::Result<()> {
        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        to_writer_pretty(File::create(output)?, geometry)?;
        Ok(())
    }
}
