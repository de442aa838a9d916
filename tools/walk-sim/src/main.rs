use anyhow::{Context, Result};
use clap::Parser;
use geo::Point;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use snake_hunt_core::prelude::*;

#[derive(Parser, Debug)]
#[command(
    name = "walk-sim",
    author,
    version,
    about = "Replay a recorded walk against a game definition",
    long_about = "Feeds a recorded sequence of location samples through a \
                  target-mode game session and reports every capture decision.\n\n\
                  The game definition is a GeoJSON FeatureCollection of named \
                  Point targets; the trace is a JSON array of [lat, lng] samples \
                  in walking order."
)]
struct Args {
    /// Game definition GeoJSON file
    #[arg(short, long)]
    game: PathBuf,

    /// Walk trace JSON file ([[lat, lng], ...])
    #[arg(short, long)]
    trace: PathBuf,

    /// Override the definition's capture radius, in meters
    #[arg(short, long)]
    radius: Option<f64>,

    /// Verbose output (show per-sample decisions)
    #[arg(short, long)]
    verbose: bool,
}

/// One recorded location sample, latitude first as the tracker logs it.
#[derive(Debug, Deserialize)]
struct Sample(f64, f64);

impl Sample {
    fn position(&self) -> Point {
        // Point is (x, y) = (lng, lat).
        Point::new(self.1, self.0)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let game_text = fs::read_to_string(&args.game)
        .with_context(|| format!("reading game definition {}", args.game.display()))?;
    let definition = GameDefinition::from_geojson(&game_text)
        .with_context(|| format!("parsing game definition {}", args.game.display()))?;

    let trace_text = fs::read_to_string(&args.trace)
        .with_context(|| format!("reading walk trace {}", args.trace.display()))?;
    let samples: Vec<Sample> =
        serde_json::from_str(&trace_text).context("parsing walk trace")?;

    let radius = args.radius.unwrap_or(definition.proximity_threshold_m);
    anyhow::ensure!(
        radius.is_finite() && radius > 0.0,
        "capture radius must be a positive number of meters, got {radius}"
    );
    println!(
        "game '{}': {} targets, capture radius {radius} m, {} samples",
        definition.name,
        definition.targets.len(),
        samples.len()
    );

    let mut session = TargetModeSession::with_targets(definition.targets.clone(), radius);
    for (step, sample) in samples.iter().enumerate() {
        if let Some(capture) = session.on_location_update(sample.position()) {
            let name = definition
                .targets
                .get(capture.target)
                .map(|t| t.name.as_ref())
                .unwrap_or("?");
            println!(
                "sample {step}: captured '{name}' (target {}, slot {})",
                capture.target, capture.slot
            );
        } else {
            tracing::debug!(step, lat = sample.0, lng = sample.1, "no capture");
        }
        if session.state() == GameState::Ended {
            println!("all targets captured after {} samples", step + 1);
            break;
        }
    }

    println!(
        "finished {}: {}/{} captured, path {:?}",
        session.state(),
        session.path().len(),
        definition.targets.len(),
        session.path().visited()
    );
    Ok(())
}
