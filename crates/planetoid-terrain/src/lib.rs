//! Procedural planet terrain: octave noise, the lattice height map, and biome classification.

mod biome;
mod grid;
mod height_map;
mod noise_field;

pub use biome::{Biome, BiomeClassifier, BiomeThresholds, Rgba};
pub use grid::{MIN_SECTOR_COUNT, MIN_STACK_COUNT, Tessellation, sphere_point};
pub use height_map::{DEFAULT_NOISE_SCALE, HeightMap};
pub use noise_field::{NoiseField, OCTAVES};
