//! Headless planet generator.
//!
//! Loads `config.ron`, applies CLI overrides and an optional scene file,
//! builds the mesh and prints its summary.
//! Run with `cargo run -p planetoid-app -- --scene earth.txt --sectors 256 --stacks 128`.

use std::error::Error;
use std::path::Path;

use clap::Parser;
use planetoid_config::{CliArgs, Config, PlanetParams, SceneError, load_scene};
use planetoid_mesh::Planet;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

fn main() -> Result<(), Box<dyn Error>> {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(Config::default_dir);

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    planetoid_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    let params = resolve_params(&config, args.scene.as_deref())?;
    info!(
        radius_km = params.radius_m / 1000.0,
        day_h = params.day_s / 3600.0,
        water = params.water,
        terrestrial = params.terrestrial,
        "planet parameters"
    );

    let planet = Planet::new(params, &config.mesh);
    info!("\n{planet}");
    info!(oblateness = planet.oblateness(), "equatorial bulge");

    if let Some(path) = args.dump.as_deref() {
        write_dump(path, &planet)?;
        info!(
            path = %path.display(),
            bytes = planet.interleaved_size(),
            "wrote interleaved vertex buffer"
        );
    }

    Ok(())
}

/// Physical parameters for this run: the scene file when given, otherwise the config.
///
/// An unreadable scene file falls back to the default terrestrial planet; a
/// malformed one is an error.
fn resolve_params(config: &Config, scene: Option<&Path>) -> Result<PlanetParams, SceneError> {
    let Some(path) = scene else {
        return Ok(config.planet);
    };

    let mut rng = ChaCha8Rng::seed_from_u64(config.mesh.seed);
    match load_scene(path, &mut rng) {
        Ok(params) => Ok(params),
        Err(e @ SceneError::Read { .. }) => {
            warn!("{e}, using default planet");
            Ok(PlanetParams::default())
        }
        Err(e) => Err(e),
    }
}

/// Write the interleaved stream as little-endian `f32`s.
fn write_dump<N>(path: &Path, planet: &Planet<N>) -> std::io::Result<()> {
    let bytes: Vec<u8> = planet
        .interleaved_floats()
        .iter()
        .flat_map(|f| f.to_le_bytes())
        .collect();
    std::fs::write(path, bytes)
}
