use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use clipsketch::{build_frame, init_logging, load_script, replay, Config, EditorState};

/// Replay editor input against the ClipSketch geometry core and print the
/// resulting frame as JSON.
#[derive(Parser, Debug)]
#[command(name = "clipsketch", version, about)]
struct Args {
    /// Configuration file (.toml or .json); defaults to the platform config dir
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// JSON array of input events to replay
    #[arg(long, value_name = "PATH")]
    script: Option<PathBuf>,

    /// Pretty-print the frame
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    let args = Args::parse();

    tracing::info!(
        version = clipsketch::VERSION,
        build_date = clipsketch::BUILD_DATE,
        "clipsketch starting"
    );

    let config_path = match args.config {
        Some(path) => Some(path),
        None => clipsketch_settings::default_config_path().ok(),
    };
    let config = Config::load_or_default(config_path.as_deref())
        .context("Failed to load configuration")?;
    let mut state = EditorState::with_config(&config)?;

    if let Some(script) = args.script.as_deref() {
        let events = load_script(script)?;
        let summary = replay(&mut state, &events);
        tracing::info!(
            events = summary.events,
            redraws = summary.redraws,
            shapes = state.scene.len(),
            "replay finished"
        );
    }

    let frame = build_frame(&state);
    let json = if args.pretty {
        serde_json::to_string_pretty(&frame)?
    } else {
        serde_json::to_string(&frame)?
    };
    println!("{json}");

    Ok(())
}
