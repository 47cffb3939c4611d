//! `geofence-check`: validate a candidate service area against existing ones.
//!
//! ```text
//! geofence-check <existing.json> <candidate.json> [--config <path>]
//! ```
//!
//! Exits with 0 when the candidate is a valid area, 1 when it is not, and 2
//! on usage or I/O errors.

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::path::{Path, PathBuf};
    use std::process::ExitCode;

    use geofence::constants::MIN_POLYGON_VERTICES;
    use geofence::format::{FormatError, FormatRegistry, load_existing_areas};
    use geofence::geometry::{Validity, overlapping_areas};
    use geofence::measure::AreaSummary;
    use geofence::{EditorConfig, ExistingAreas, Polygon, Tolerance};

    const USAGE: &str = "Usage: geofence-check <existing.json> <candidate.json> [--config <path>]";

    struct Args {
        existing: PathBuf,
        candidate: PathBuf,
        config: Option<PathBuf>,
    }

    fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
        let mut positional = Vec::new();
        let mut config = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let path = args.next().ok_or("--config requires a path")?;
                    config = Some(PathBuf::from(path));
                }
                "-h" | "--help" => return Err(USAGE.to_string()),
                flag if flag.starts_with("--") => return Err(format!("Unknown option '{}'", flag)),
                _ => positional.push(PathBuf::from(arg)),
            }
        }

        match <[PathBuf; 2]>::try_from(positional) {
            Ok([existing, candidate]) => Ok(Args {
                existing,
                candidate,
                config,
            }),
            Err(_) => Err(USAGE.to_string()),
        }
    }

    fn load_config(path: Option<&Path>) -> Result<EditorConfig, String> {
        match path {
            Some(path) => EditorConfig::load(path)
                .map_err(|e| format!("Failed to load config {:?}: {}", path, e)),
            None => Ok(EditorConfig::load_from_default_path().unwrap_or_default()),
        }
    }

    fn load_candidate(path: &Path) -> Result<Polygon, FormatError> {
        let text = std::fs::read_to_string(path)?;
        let (format_id, area) = FormatRegistry::new()
            .decode_any(&text)
            .map_err(|e| match e {
                FormatError::Unrecognized { path: None } => FormatError::Unrecognized {
                    path: Some(path.to_path_buf()),
                },
                other => other,
            })?;
        log::debug!("Read candidate from {:?} as {}", path, format_id);
        Ok(area)
    }

    /// Existing areas the candidate overlaps. Below the vertex minimum there is
    /// no enclosed area, so nothing is reported, matching [`Validity::evaluate`].
    fn overlap_indices(
        candidate: &Polygon,
        existing: &ExistingAreas,
        tolerance: Tolerance,
    ) -> Vec<usize> {
        if candidate.len() < MIN_POLYGON_VERTICES {
            return Vec::new();
        }
        overlapping_areas(candidate, existing, tolerance)
    }

    /// Print the report and tell whether the candidate may be committed.
    fn report(candidate: &Polygon, existing: &ExistingAreas, tolerance: Tolerance) -> bool {
        let validity = Validity::evaluate(candidate, existing, tolerance);
        let overlaps = overlap_indices(candidate, existing, tolerance);
        let summary = AreaSummary::of(candidate);
        let enough_points = candidate.len() >= MIN_POLYGON_VERTICES;

        println!(
            "Points:             {}{}",
            summary.vertex_count,
            if enough_points { "" } else { " (too few)" }
        );
        println!("Self-intersecting:  {}", yes_no(validity.is_self_intersecting));
        if overlaps.is_empty() {
            println!("Overlaps existing:  no");
        } else {
            let indices: Vec<String> = overlaps.iter().map(ToString::to_string).collect();
            println!("Overlaps existing:  yes (areas {})", indices.join(", "));
        }
        println!(
            "Area:               {:.0} m² ({:.3} km²)",
            summary.area_m2,
            summary.area_km2()
        );
        println!("Perimeter:          {:.0} m", summary.perimeter_m);
        match summary.centroid {
            Some(c) => println!("Centroid:           {:.6}, {:.6}", c.latitude, c.longitude),
            None => println!("Centroid:           n/a"),
        }

        let valid = enough_points && validity.is_clear();
        println!("Result:             {}", if valid { "valid" } else { "invalid" });
        valid
    }

    fn yes_no(flag: bool) -> &'static str {
        if flag { "yes" } else { "no" }
    }

    pub fn run() -> ExitCode {
        let args = match parse_args(std::env::args().skip(1)) {
            Ok(args) => args,
            Err(message) => {
                eprintln!("{}", message);
                return ExitCode::from(2);
            }
        };

        let config = load_config(args.config.as_deref());
        let level = config
            .as_ref()
            .map(|c| c.log_level)
            .unwrap_or_default()
            .to_level_filter();
        env_logger::Builder::new()
            .filter_level(level)
            .parse_default_env()
            .init();

        let config = match config {
            Ok(config) => config,
            Err(message) => {
                eprintln!("{}", message);
                return ExitCode::from(2);
            }
        };

        let existing = match load_existing_areas(&args.existing) {
            Ok(existing) => existing,
            Err(e) => {
                eprintln!("Failed to read existing areas {:?}: {}", args.existing, e);
                return ExitCode::from(2);
            }
        };
        let candidate = match load_candidate(&args.candidate) {
            Ok(candidate) => candidate,
            Err(e) => {
                eprintln!("Failed to read candidate {:?}: {}", args.candidate, e);
                return ExitCode::from(2);
            }
        };
        log::info!(
            "Checking {} points against {} existing areas",
            candidate.len(),
            existing.len()
        );

        if report(&candidate, &existing, config.tolerance()) {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(1)
        }
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    cli::run()
}

// The checker reads files, so there is nothing to run on WASM
#[cfg(target_arch = "wasm32")]
fn main() {}
