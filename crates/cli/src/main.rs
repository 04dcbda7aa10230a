// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use litcal::{CalendarView, LayerInputs, Resolution, ResolveOptions, resolve};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// litcal - resolve a layered liturgical calendar bundle
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON calendar bundle
    #[arg(short, long)]
    input: PathBuf,

    /// Calendar year; records outside their validity window are skipped
    #[arg(short, long)]
    year: Option<i32>,

    /// Include the resolution trail in the output
    #[arg(long)]
    trail: bool,

    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,

    /// Write the output to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Reads and decodes a calendar bundle.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid bundle.
fn load_inputs(path: &Path) -> Result<LayerInputs, Box<dyn std::error::Error>> {
    let contents: String = std::fs::read_to_string(path)?;
    let inputs: LayerInputs = serde_json::from_str(&contents)?;
    Ok(inputs)
}

/// Serializes a resolved calendar.
///
/// # Errors
///
/// Returns an error if serialization fails.
fn render(view: &CalendarView, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(view)
    } else {
        serde_json::to_string(view)
    }
}

/// Runs one resolution as described by `args` and returns the rendered
/// calendar.
///
/// # Errors
///
/// Returns an error if the bundle cannot be loaded or resolution fails.
fn run(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    info!(input = %args.input.display(), "Loading calendar bundle");
    let inputs: LayerInputs = load_inputs(&args.input)?;

    let options: ResolveOptions = ResolveOptions { year: args.year };
    let resolution: Resolution = match resolve(&inputs, options) {
        Ok(resolution) => resolution,
        Err(err) => {
            error!(
                error = %err,
                configuration = err.is_configuration_error(),
                "Calendar resolution failed"
            );
            return Err(err.into());
        }
    };

    info!(
        observances = resolution.registry.len(),
        events = resolution.trail.len(),
        "Calendar resolved"
    );

    Ok(render(&CalendarView::new(&resolution, args.trail), args.pretty)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let rendered: String = run(&args)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            info!(output = %path.display(), "Wrote resolved calendar");
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;
    use serde_json::Value;

    const DEMO_BUNDLE: &str = include_str!("../../../demos/bundle.json");

    /// Helper to write a bundle to a fresh temporary file.
    fn write_test_bundle(name: &str, contents: &str) -> PathBuf {
        let path: PathBuf =
            std::env::temp_dir().join(format!("litcal-{}-{name}.json", std::process::id()));
        std::fs::write(&path, contents).expect("Failed to write test bundle");
        path
    }

    fn create_test_args(input: PathBuf) -> Args {
        Args {
            input,
            year: None,
            trail: false,
            pretty: false,
            output: None,
        }
    }

    #[test]
    fn test_args_parse_all_flags() {
        let args: Args = Args::try_parse_from([
            "litcal",
            "--input",
            "bundle.json",
            "--year",
            "2026",
            "--trail",
            "--pretty",
            "--output",
            "out.json",
        ])
        .unwrap();

        assert_eq!(args.input, PathBuf::from("bundle.json"));
        assert_eq!(args.year, Some(2026));
        assert!(args.trail);
        assert!(args.pretty);
        assert_eq!(args.output, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn test_args_require_input() {
        assert!(Args::try_parse_from(["litcal"]).is_err());
    }

    #[test]
    fn test_demo_bundle_decodes() {
        let inputs: LayerInputs = serde_json::from_str(DEMO_BUNDLE).unwrap();

        assert_eq!(inputs.sanctorale.len(), 1);
        assert!(inputs.wider_region().is_some());
        assert!(inputs.diocesan.is_some());
    }

    #[test]
    fn test_run_renders_resolved_calendar() {
        let path: PathBuf = write_test_bundle("demo", DEMO_BUNDLE);
        let mut args: Args = create_test_args(path.clone());
        args.year = Some(2026);
        args.trail = true;

        let rendered: String = run(&args).unwrap();
        std::fs::remove_file(path).ok();

        let output: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(output["settings"]["year"], 2026);
        assert_eq!(output["settings"]["nation"], "IT");
        assert_eq!(output["settings"]["diocese"], "romanus");

        let keys: Vec<&str> = output["litcal"]
            .as_array()
            .unwrap()
            .iter()
            .map(|observance| observance["event_key"].as_str().unwrap())
            .collect();
        assert!(keys.contains(&"StCatherineSiena"));
        assert!(keys.contains(&"romanus_DedicationLateran"));
        assert!(output["trail"].as_array().is_some());
    }

    #[test]
    fn test_run_reports_resolution_errors() {
        let path: PathBuf = write_test_bundle(
            "broken",
            r#"{"decrees": {"names": {}, "decrees": [
                {"decree_id": "d1", "since_year": 1990,
                 "liturgical_event": {"action": "regrade", "event_key": "Nonexistent", "grade": 4}}
            ]}}"#,
        );

        let result = run(&create_test_args(path.clone()));
        std::fs::remove_file(path).ok();

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Nonexistent"));
    }

    #[test]
    fn test_run_rejects_missing_file() {
        let args: Args = create_test_args(PathBuf::from("/nonexistent/litcal-bundle.json"));

        assert!(run(&args).is_err());
    }

    #[test]
    fn test_render_pretty_spans_lines() {
        let resolution: Resolution =
            resolve(&LayerInputs::default(), ResolveOptions::default()).unwrap();
        let view: CalendarView = CalendarView::new(&resolution, false);

        assert!(!render(&view, false).unwrap().contains('\n'));
        assert!(render(&view, true).unwrap().contains('\n'));
    }
}
