//! Physical parameters of a planet, the input record of every mesh build.

use serde::{Deserialize, Serialize};

/// Gravitational constant in m³ / (kg·s²).
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674e-11;

/// Physical description of a planet.
///
/// Units are SI at this boundary: the scene parser converts kilometres and
/// hours before filling the record, the mesh builder never converts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlanetParams {
    /// Physical radius in meters.
    pub radius_m: f64,
    /// Mass in kilograms.
    pub mass_kg: f64,
    /// Sidereal rotation period in seconds.
    pub day_s: f64,
    /// Terrain scale factor `K` applied to raw noise heights.
    pub terrain_scale: f64,
    /// Mean surface temperature in °C.
    pub temperature_c: f64,
    /// Fraction of the height range that lies below sea level, in `[0, 1]`.
    pub water: f64,
    /// Terrestrial planets get sand and grass; others get the tinted banding.
    pub terrestrial: bool,
    /// Base tint (r, g, b) in `[0, 1]` used for non-terrestrial surfaces.
    pub base_color: [f32; 3],
}

impl Default for PlanetParams {
    fn default() -> Self {
        Self::earth_like()
    }
}

impl PlanetParams {
    /// Earth-like preset. This is also the default record.
    pub fn earth_like() -> Self {
        Self {
            radius_m: 6_357_000.0,
            mass_kg: 5.9722e24,
            day_s: 86_164.0,
            terrain_scale: 0.1,
            temperature_c: 15.0,
            water: 0.57,
            terrestrial: true,
            base_color: [0.0, 0.0, 0.0],
        }
    }

    /// Dry, cold, rust-tinted preset (Mars-like).
    pub fn mars_like() -> Self {
        Self {
            radius_m: 3_389_500.0,
            mass_kg: 6.4171e23,
            day_s: 88_642.66,
            terrain_scale: 0.1,
            temperature_c: -63.0,
            water: 0.0,
            terrestrial: false,
            base_color: [0.76, 0.38, 0.2],
        }
    }

    /// Angular velocity `2π / day` in rad/s.
    pub fn angular_velocity(&self) -> f64 {
        std::f64::consts::TAU / self.day_s
    }

    /// Whether the planet has any surface water.
    pub fn has_water(&self) -> bool {
        self.water > 0.0
    }
}
