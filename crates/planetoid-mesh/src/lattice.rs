//! Displaced, colored lattice vertices: elevation, water smoothing and oblateness.

use glam::{DVec3, Vec3};
use noise::NoiseFn;
use planetoid_config::{GRAVITATIONAL_CONSTANT, PlanetParams};
use planetoid_terrain::{BiomeClassifier, HeightMap, NoiseField, Rgba};
use rand::Rng;

/// A shared grid point before flat-shading duplication.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatticeVertex {
    pub position: Vec3,
    pub color: Rgba,
}

/// Equatorial bulge as a fraction of the radius: `R⁴·ω² / (G·M) / R`.
///
/// Returns 0 when the rotation period, mass or physical radius cannot produce
/// a finite bulge (zero, negative or NaN); an infinite rotation period is a
/// non-rotating planet and also yields 0.
pub fn oblateness(params: &PlanetParams) -> f64 {
    let day_valid = params.day_s > 0.0;
    let mass_valid = params.mass_kg > 0.0 && params.mass_kg.is_finite();
    let radius_valid = params.radius_m > 0.0 && params.radius_m.is_finite();

    if !(day_valid && mass_valid && radius_valid) {
        tracing::warn!(
            day_s = params.day_s,
            mass_kg = params.mass_kg,
            radius_m = params.radius_m,
            "degenerate rotation parameters, building without equatorial bulge"
        );
        return 0.0;
    }

    let omega = params.angular_velocity();
    let r = params.radius_m;
    r.powi(4) * omega.powi(2) / (GRAVITATIONAL_CONSTANT * params.mass_kg) / r
}

/// Place and color every lattice point of `height_map`, row-major by stack.
///
/// Terrain sits at `radius + h·K`. Points below sea level are pulled onto a
/// calmer profile `sea + h·K²`. The bulge is added to the horizontal radius
/// only, so poles stay at the terrain radius while the equator widens.
pub fn build_lattice<N: NoiseFn<f64, 3>, R: Rng>(
    height_map: &HeightMap,
    params: &PlanetParams,
    radius: f64,
    noise: &NoiseField<N>,
    rng: &mut R,
) -> Vec<LatticeVertex> {
    let tessellation = height_map.tessellation();
    let classifier = BiomeClassifier::new(params, height_map, radius);
    let bulge = oblateness(params);
    let k = params.terrain_scale;
    let sea_radius = radius + classifier.water_height();

    let mut lattice = Vec::with_capacity(tessellation.lattice_len());

    for i in 0..=tessellation.stack_count() {
        let stack_angle = tessellation.stack_angle(i);
        let (sin_stack, cos_stack) = stack_angle.sin_cos();

        for j in 0..=tessellation.sector_count() {
            let (sin_sector, cos_sector) = tessellation.sector_angle(j).sin_cos();
            let raw = height_map.get(i, j);

            let linear = radius + raw * k;
            let adjusted = if linear < sea_radius {
                sea_radius + raw * k * k
            } else {
                linear
            };

            let xy = (adjusted + bulge) * cos_stack;
            let position = DVec3::new(xy * cos_sector, xy * sin_sector, adjusted * sin_stack);

            let (_, color) = classifier.classify(linear, stack_angle, noise, rng);

            lattice.push(LatticeVertex {
                position: position.as_vec3(),
                color,
            });
        }
    }

    lattice
}
