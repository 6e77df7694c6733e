use std::path::PathBuf;

use clap::Parser;
use route_compare::models::Coordinate;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Compare shortest-path algorithms over a decoded waypoint polyline"
)]
struct Args {
    /// JSON file holding an ordered array of {"lat": .., "lon": ..} waypoints
    #[arg(long)]
    input: PathBuf,

    /// Pretty-print the comparison JSON
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let raw = std::fs::read_to_string(&args.input)?;
    let coordinates: Vec<Coordinate> = serde_json::from_str(&raw)?;
    tracing::info!("comparing {} waypoints from {:?}", coordinates.len(), args.input);

    let comparison = route_compare::compare(&coordinates)?;
    let json = if args.pretty {
        serde_json::to_string_pretty(&comparison)?
    } else {
        serde_json::to_string(&comparison)?
    };
    println!("{json}");

    Ok(())
}
