//! diversion — compute a route diversion from two shapes and a stop list.
//!
//! ```text
//! cargo run -p diversion -- \
//!     --base demos/diversion/data/base.wkt \
//!     --edited demos/diversion/data/edited.wkt \
//!     --stops demos/diversion/data/stops.csv
//! ```
//!
//! Prints a JSON report with the extracted diversion, the merged shape, and
//! the stops the merged shape no longer serves.  Set `RUST_LOG=debug` to see
//! the pipeline's trace events on stderr.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dv_core::ShapeConfig;
use dv_diversion::DiversionBuilder;
use dv_stops::{Stop, load_stops_csv};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(about = "Merge an edited route shape into its base shape and list affected stops")]
struct Args {
    /// File holding the base route shape as a WKT LINESTRING.
    #[arg(long)]
    base: PathBuf,

    /// File holding the edited shape as a WKT LINESTRING.
    #[arg(long)]
    edited: PathBuf,

    /// Optional stops CSV (stopId, stopLat, stopLon, ...).
    #[arg(long)]
    stops: Option<PathBuf>,

    /// Max distance (m) from each diversion end to the base shape.
    #[arg(long, default_value_t = dv_core::MERGE_DISTANCE_THRESHOLD_M)]
    merge_distance: f64,

    /// A stop farther than this (m) from the merged shape is affected.
    #[arg(long, default_value_t = dv_core::AFFECTED_STOP_DISTANCE_THRESHOLD_M)]
    affected_distance: f64,

    /// Look-ahead window for loop removal.
    #[arg(long, default_value_t = dv_core::DUPLICATE_WINDOW)]
    window: usize,
}

// ── Report ────────────────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report {
    diversion_wkt:  String,
    merged_wkt:     String,
    affected_stops: Vec<Stop>,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let base = read_shape(&args.base)?;
    let edited = read_shape(&args.edited)?;
    let stops = match &args.stops {
        Some(path) => load_stops_csv(path)
            .with_context(|| format!("loading stops from {}", path.display()))?,
        None => Vec::new(),
    };
    info!(stops = stops.len(), "inputs loaded");

    let config = ShapeConfig::default()
        .with_merge_distance(args.merge_distance)
        .with_affected_stop_distance(args.affected_distance)
        .with_duplicate_window(args.window);

    let diversion = DiversionBuilder::new(base)
        .edited_shape(edited)
        .stops(stops)
        .config(config)
        .build()
        .context("computing diversion")?;

    let report = Report {
        diversion_wkt:  diversion.diversion_wkt(),
        merged_wkt:     diversion.merged_wkt(),
        affected_stops: diversion.affected_stops,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn read_shape(path: &Path) -> Result<String> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading shape from {}", path.display()))?;
    Ok(text.trim().to_string())
}
