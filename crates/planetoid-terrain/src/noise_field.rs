//! Octave ("fractal") noise sampled along sphere directions.
//!
//! Sums six octaves of a 3D gradient-noise primitive, each doubling in
//! frequency and halving in amplitude, starting at frequency 1 and amplitude 1.

use glam::DVec3;
use noise::{NoiseFn, Perlin};

/// Number of octaves summed by [`NoiseField::sample`] (frequencies 1 through 32).
pub const OCTAVES: u32 = 6;

const LACUNARITY: f64 = 2.0;
const PERSISTENCE: f64 = 0.5;

/// Height function over 3D directions built from a gradient-noise primitive.
///
/// The primitive is any `noise::NoiseFn<f64, 3>`; [`NoiseField::seeded`]
/// uses Perlin noise.
pub struct NoiseField<N = Perlin> {
    primitive: N,
}

impl NoiseField<Perlin> {
    /// Perlin-backed field with the given seed.
    pub fn seeded(seed: u32) -> Self {
        Self::new(Perlin::new(seed))
    }
}

impl<N: NoiseFn<f64, 3>> NoiseField<N> {
    /// Wrap a noise primitive.
    pub fn new(primitive: N) -> Self {
        Self { primitive }
    }

    /// Sample the summed octaves at `direction`.
    ///
    /// The theoretical range is the primitive's range times
    /// [`NoiseField::max_amplitude`].
    pub fn sample(&self, direction: DVec3) -> f64 {
        let mut total = 0.0;
        let mut frequency = 1.0;
        let mut amplitude = 1.0;

        for _ in 0..OCTAVES {
            let p = direction * frequency;
            total += self.primitive.get([p.x, p.y, p.z]) * amplitude;

            frequency *= LACUNARITY;
            amplitude *= PERSISTENCE;
        }

        total
    }

    /// Single-octave sample of the primitive along the x axis.
    pub fn sample_1d(&self, x: f64) -> f64 {
        self.primitive.get([x, 0.0, 0.0])
    }

    /// Sum of the octave amplitudes (`1 + 1/2 + … + 1/32`).
    pub fn max_amplitude(&self) -> f64 {
        let mut sum = 0.0;
        let mut amp = 1.0;
        for _ in 0..OCTAVES {
            sum += amp;
            amp *= PERSISTENCE;
        }
        sum
    }

    /// The wrapped primitive.
    pub fn primitive(&self) -> &N {
        &self.primitive
    }
}
