//! Per-vertex biome classification from elevation, latitude and climate.
//!
//! Thresholds are derived per latitude from the planet's mean temperature,
//! water fraction and terrain scale, relative to the height map's range:
//!
//! - local temperature: `(T + 45) − |lat|°`
//! - snow line: `(min + min(0.85/15 · local, 0.91) · dH) · K`
//! - sea level: `(min + water · dH) · K`
//! - sand line: `sea + (snow − sea) · 0.08`
//!
//! Classification is an ordered decision table; the first matching rule wins
//! and later rules never re-check earlier ones.

use std::f64::consts::FRAC_PI_4;

use noise::NoiseFn;
use planetoid_config::PlanetParams;
use rand::Rng;

use crate::height_map::HeightMap;
use crate::noise_field::NoiseField;

/// Linear RGBA color.
pub type Rgba = [f32; 4];

const SNOW: Rgba = [1.0, 0.98, 0.98, 1.0];
const ICE_SHELF: Rgba = [180.0 / 255.0, 207.0 / 255.0, 250.0 / 255.0, 1.0];
const WATER: Rgba = [0.0, 94.0 / 255.0, 184.0 / 255.0, 1.0];
const SAND: Rgba = [0.761, 0.698, 0.502, 1.0];
const GRASS: Rgba = [0.0, 154.0 / 255.0, 23.0 / 255.0, 1.0];

const SNOW_COEFF_PER_DEGREE: f64 = 0.85 / 15.0;
const MAX_SNOW_COEFF: f64 = 0.91;
const SAND_FRACTION: f64 = 0.08;
const POLAR_OFFSET_C: f64 = 45.0;

/// Surface classes a vertex can fall into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Biome {
    Snow,
    IceShelf,
    Water,
    Sand,
    Grass,
    /// Non-terrestrial surface: the planet's base tint with latitude banding.
    Tinted,
}

impl Biome {
    /// Fixed color of the biome, `None` for [`Biome::Tinted`].
    pub fn color(self) -> Option<Rgba> {
        match self {
            Biome::Snow => Some(SNOW),
            Biome::IceShelf => Some(ICE_SHELF),
            Biome::Water => Some(WATER),
            Biome::Sand => Some(SAND),
            Biome::Grass => Some(GRASS),
            Biome::Tinted => None,
        }
    }
}

/// Elevation thresholds at one latitude, relative to the display radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BiomeThresholds {
    /// Local temperature in °C.
    pub local_temperature: f64,
    pub snow_height: f64,
    pub water_height: f64,
    pub sand_height: f64,
}

/// Maps a vertex's elevation and latitude to a biome and color.
#[derive(Clone, Debug)]
pub struct BiomeClassifier {
    radius: f64,
    temperature: f64,
    water: f64,
    terrain_scale: f64,
    terrestrial: bool,
    base_color: [f32; 3],
    min_height: f64,
    height_range: f64,
}

impl BiomeClassifier {
    /// Classifier for a planet whose lattice heights are `height_map`, drawn at `radius`.
    pub fn new(params: &PlanetParams, height_map: &HeightMap, radius: f64) -> Self {
        Self::from_range(params, radius, height_map.min_height(), height_map.range())
    }

    /// Classifier from an explicit height range.
    pub fn from_range(
        params: &PlanetParams,
        radius: f64,
        min_height: f64,
        height_range: f64,
    ) -> Self {
        Self {
            radius,
            temperature: params.temperature_c,
            water: params.water,
            terrain_scale: params.terrain_scale,
            terrestrial: params.terrestrial,
            base_color: params.base_color,
            min_height,
            height_range,
        }
    }

    /// Sea level relative to the display radius: `(min + water · dH) · K`.
    pub fn water_height(&self) -> f64 {
        (self.min_height + self.water * self.height_range) * self.terrain_scale
    }

    /// Thresholds at `latitude` (radians, signed).
    pub fn thresholds(&self, latitude: f64) -> BiomeThresholds {
        let local_temperature = (self.temperature + POLAR_OFFSET_C) - latitude.abs().to_degrees();
        let snow_coeff = (SNOW_COEFF_PER_DEGREE * local_temperature).min(MAX_SNOW_COEFF);
        let snow_height =
            (self.min_height + snow_coeff * self.height_range) * self.terrain_scale;
        let water_height = self.water_height();
        let sand_height = water_height + (snow_height - water_height) * SAND_FRACTION;

        BiomeThresholds {
            local_temperature,
            snow_height,
            water_height,
            sand_height,
        }
    }

    /// Classify one vertex.
    ///
    /// `adjusted_radius` is the linear terrain radius `radius + h · K` before
    /// any underwater smoothing. `latitude` is the vertex's stack angle.
    /// `rng` drives the polar ice band; `noise` provides the latitude
    /// banding of non-terrestrial surfaces.
    pub fn classify<N: NoiseFn<f64, 3>, R: Rng>(
        &self,
        adjusted_radius: f64,
        latitude: f64,
        noise: &NoiseField<N>,
        rng: &mut R,
    ) -> (Biome, Rgba) {
        let abs_lat = latitude.abs();
        let t = self.thresholds(latitude);
        let has_water = self.water > 0.0;
        let polar_excess = abs_lat - (FRAC_PI_4 + self.temperature.to_radians());

        let biome = if (abs_lat - FRAC_PI_4).to_degrees() > self.temperature
            && draw(rng) < polar_excess.powf(0.25)
            && has_water
        {
            if adjusted_radius > self.radius + t.water_height {
                Biome::Snow
            } else if draw(rng) < polar_excess.powf(0.9) {
                Biome::IceShelf
            } else {
                Biome::Water
            }
        } else if adjusted_radius <= self.radius + t.water_height && has_water {
            Biome::Water
        } else if adjusted_radius < self.radius + t.sand_height && self.terrestrial {
            Biome::Sand
        } else if adjusted_radius > self.radius + t.snow_height && has_water {
            Biome::Snow
        } else if self.terrestrial {
            Biome::Grass
        } else {
            Biome::Tinted
        };

        let color = biome
            .color()
            .unwrap_or_else(|| self.banded_tint(latitude, noise));
        (biome, color)
    }

    fn banded_tint<N: NoiseFn<f64, 3>>(&self, latitude: f64, noise: &NoiseField<N>) -> Rgba {
        let n = noise.sample_1d(latitude * 2.0) as f32;
        let [r, g, b] = self.base_color;
        [r + n, g + n, b + n, 1.0]
    }
}

/// One quantized draw in `{0.00, 0.01, …, 0.49}`.
fn draw<R: Rng>(rng: &mut R) -> f64 {
    rng.random_range(0..50u32) as f64 * 0.01
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    struct Constant(f64);

    impl NoiseFn<f64, 3> for Constant {
        fn get(&self, _point: [f64; 3]) -> f64 {
            self.0
        }
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(1234)
    }

    /// Height range [-1, 1], K = 1, radius 1, half water: sea level at radius 1.0.
    fn classifier(params: PlanetParams) -> BiomeClassifier {
        BiomeClassifier::from_range(&params, 1.0, -1.0, 2.0)
    }

    fn temperate() -> PlanetParams {
        PlanetParams {
            terrain_scale: 1.0,
            temperature_c: 15.0,
            water: 0.5,
            ..PlanetParams::default()
        }
    }

    fn classify(c: &BiomeClassifier, adjusted_radius: f64, latitude_deg: f64) -> Biome {
        c.classify(
            adjusted_radius,
            latitude_deg.to_radians(),
            &NoiseField::new(Constant(0.0)),
            &mut rng(),
        )
        .0
    }

    #[test]
    fn test_thresholds_at_equator() {
        let t = classifier(temperate()).thresholds(0.0);
        assert!((t.local_temperature - 60.0).abs() < 1e-9);
        assert!(t.water_height.abs() < 1e-9);
        // 0.85/15 * 60 = 3.4 is capped at 0.91.
        assert!((t.snow_height - 0.82).abs() < 1e-9);
        assert!((t.sand_height - 0.0656).abs() < 1e-9);
    }

    #[test]
    fn test_snow_line_falls_toward_poles() {
        let c = classifier(temperate());
        let mut previous = f64::INFINITY;
        for deg in (30..=90).step_by(10) {
            let snow = c.thresholds((deg as f64).to_radians()).snow_height;
            assert!(snow <= previous, "snow line rose at {deg}°");
            previous = snow;
        }
    }

    #[test]
    fn test_elevation_bands_at_equator() {
        let c = classifier(temperate());
        assert_eq!(classify(&c, 0.7, 0.0), Biome::Water);
        assert_eq!(classify(&c, 1.0, 0.0), Biome::Water, "sea level is water");
        assert_eq!(classify(&c, 1.03, 0.0), Biome::Sand);
        assert_eq!(classify(&c, 1.5, 0.0), Biome::Grass);
        assert_eq!(classify(&c, 1.9, 0.0), Biome::Snow);
    }

    #[test]
    fn test_non_terrestrial_has_no_sand_or_grass() {
        let c = classifier(PlanetParams {
            terrestrial: false,
            ..temperate()
        });
        assert_eq!(classify(&c, 1.03, 0.0), Biome::Tinted);
        assert_eq!(classify(&c, 1.5, 0.0), Biome::Tinted);
        assert_eq!(classify(&c, 0.9, 0.0), Biome::Water);
    }

    #[test]
    fn test_tint_adds_latitude_noise_to_every_channel() {
        let c = classifier(PlanetParams {
            terrestrial: false,
            base_color: [0.5, 0.25, 0.125],
            ..temperate()
        });
        let (biome, color) = c.classify(1.5, 0.1, &NoiseField::new(Constant(0.25)), &mut rng());
        assert_eq!(biome, Biome::Tinted);
        assert_eq!(color, [0.75, 0.5, 0.375, 1.0]);
    }

    #[test]
    fn test_dry_planet_never_water_or_snow() {
        let c = classifier(PlanetParams {
            water: 0.0,
            temperature_c: -40.0,
            ..temperate()
        });
        let mut rng = rng();
        let field = NoiseField::new(Constant(0.0));
        for deg in (-90..=90).step_by(5) {
            for step in 0..=20 {
                let adjusted = step as f64 * 0.1;
                let (biome, _) =
                    c.classify(adjusted, (deg as f64).to_radians(), &field, &mut rng);
                assert!(
                    matches!(biome, Biome::Sand | Biome::Grass),
                    "dry planet produced {biome:?} at {deg}°, r = {adjusted}"
                );
            }
        }
    }

    #[test]
    fn test_flat_wet_planet_is_all_water_outside_polar_band() {
        // Zero height range: every threshold collapses onto the display radius.
        let params = PlanetParams {
            temperature_c: 40.0,
            ..temperate()
        };
        let c = BiomeClassifier::from_range(&params, 1.0, 0.0, 0.0);
        let mut rng = rng();
        let field = NoiseField::new(Constant(0.0));
        for deg in -80..=80 {
            let (biome, color) = c.classify(1.0, (deg as f64).to_radians(), &field, &mut rng);
            assert_eq!(biome, Biome::Water, "latitude {deg}°");
            assert_eq!(color, WATER);
        }
    }

    #[test]
    fn test_cold_pole_above_sea_is_snow() {
        let c = classifier(PlanetParams {
            temperature_c: -30.0,
            ..temperate()
        });
        // Polar excess of 65° makes both draws always pass.
        assert_eq!(classify(&c, 1.2, 80.0), Biome::Snow);
        assert_eq!(classify(&c, 0.9, -80.0), Biome::IceShelf);
    }

    #[test]
    fn test_polar_sea_mixes_ice_and_water() {
        let c = classifier(temperate());
        let field = NoiseField::new(Constant(0.0));
        let mut rng = rng();
        let mut ice = 0;
        let mut water = 0;
        for _ in 0..200 {
            match c.classify(0.9, 75f64.to_radians(), &field, &mut rng).0 {
                Biome::IceShelf => ice += 1,
                Biome::Water => water += 1,
                other => panic!("unexpected {other:?} in polar sea"),
            }
        }
        assert!(ice > 0 && water > 0, "ice={ice} water={water}");
    }

    #[test]
    fn test_seeded_rng_reproduces_classification() {
        let c = classifier(temperate());
        let field = NoiseField::new(Constant(0.0));
        let run = |seed: u64| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..100)
                .map(|k| c.classify(0.95, (60.0 + k as f64 * 0.3).to_radians(), &field, &mut rng).0)
                .collect::<Vec<_>>()
        };
        assert_eq!(run(9), run(9));
    }

    #[test]
    fn test_fixed_biome_colors() {
        assert_eq!(Biome::Water.color(), Some(WATER));
        assert_eq!(Biome::Sand.color(), Some([0.761, 0.698, 0.502, 1.0]));
        assert_eq!(Biome::Tinted.color(), None);
    }
}
