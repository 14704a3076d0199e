//! Configuration for Planetoid.
//!
//! Holds the physical planet parameters and mesh resolution settings, persists
//! them to disk as RON, applies CLI overrides via clap, and parses the
//! plain-text scene description format into [`PlanetParams`].

mod cli;
mod config;
mod error;
mod params;
pub mod scene;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, MeshConfig};
pub use error::{ConfigError, SceneError};
pub use params::{GRAVITATIONAL_CONSTANT, PlanetParams};
pub use scene::{load_scene, parse_scene};
