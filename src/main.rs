//! Opens a window showing the ship circling its path.
use anyhow::{anyhow, Context, Result};
use bevy::log::LogPlugin;
use bevy::prelude::*;
use clap::Parser;
use facing::{init_logging, FacingPolicy, SceneConfig, ShipPlugin};

/// A ship that circles and turns to face where it is going
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON scene config to load
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// Facing policy, overriding the config file
    #[arg(short, long)]
    policy: Option<String>,
}

fn scene_config(args: &Args) -> Result<SceneConfig> {
    let mut config = match &args.config {
        Some(path) => SceneConfig::load(path)
            .with_context(|| format!("loading scene config {}", path.display()))?,
        None => SceneConfig::default(),
    };
    if let Some(name) = &args.policy {
        config.policy =
            FacingPolicy::from_name(name).ok_or_else(|| anyhow!("unknown facing policy {name:?}"))?;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    if !init_logging(args.verbose) {
        log::warn!("a logger was already installed; --verbose has no effect");
    }
    let config = scene_config(&args)?;

    App::new()
        .insert_resource(ClearColor(Color::WHITE))
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Orbiting ship".into(),
                        resolution: (800, 800).into(),
                        ..default()
                    }),
                    ..default()
                })
                .disable::<LogPlugin>(),
        )
        .add_plugins(ShipPlugin::new(config))
        .run();
    Ok(())
}
