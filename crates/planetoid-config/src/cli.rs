//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Planetoid command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "planetoid", about = "Procedural planet surface mesh generator")]
pub struct CliArgs {
    /// Scene description file (R/M/D/S/T/W/C directives).
    #[arg(long)]
    pub scene: Option<PathBuf>,

    /// Display radius of the generated mesh.
    #[arg(long)]
    pub radius: Option<f64>,

    /// Longitude divisions.
    #[arg(long)]
    pub sectors: Option<u32>,

    /// Latitude divisions.
    #[arg(long)]
    pub stacks: Option<u32>,

    /// Seed for terrain noise and biome randomness.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the interleaved vertex buffer to this file as raw little-endian f32.
    #[arg(long)]
    pub dump: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(radius) = args.radius {
            self.mesh.radius = radius;
        }
        if let Some(sectors) = args.sectors {
            self.mesh.sector_count = sectors;
        }
        if let Some(stacks) = args.stacks {
            self.mesh.stack_count = stacks;
        }
        if let Some(seed) = args.seed {
            self.mesh.seed = seed;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_args() -> CliArgs {
        CliArgs {
            scene: None,
            radius: None,
            sectors: None,
            stacks: None,
            seed: None,
            log_level: None,
            config: None,
            dump: None,
        }
    }

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            sectors: Some(36),
            seed: Some(7),
            log_level: Some("debug".to_string()),
            ..empty_args()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.mesh.sector_count, 36);
        assert_eq!(config.mesh.seed, 7);
        assert_eq!(config.debug.log_level, "debug");
        // Non-overridden fields retain defaults
        assert_eq!(config.mesh.stack_count, 256);
        assert_eq!(config.mesh.radius, 1.0);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&empty_args());
        assert_eq!(config, original);
    }

    #[test]
    fn test_cli_parses_flags() {
        let args = CliArgs::try_parse_from([
            "planetoid",
            "--scene",
            "earth.txt",
            "--sectors",
            "64",
            "--stacks",
            "32",
        ])
        .unwrap();
        assert_eq!(args.scene, Some(PathBuf::from("earth.txt")));
        assert_eq!(args.sectors, Some(64));
        assert_eq!(args.stacks, Some(32));
        assert!(args.dump.is_none());
    }
}
