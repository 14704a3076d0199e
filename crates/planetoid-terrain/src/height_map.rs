//! Precomputed noise heights at every lattice point.

use noise::NoiseFn;

use crate::grid::{Tessellation, sphere_point};
use crate::noise_field::NoiseField;

/// Spatial frequency applied to unit-sphere directions before sampling.
///
/// Sampling the unit sphere (not the display sphere) keeps terrain feature
/// size independent of the mesh radius.
pub const DEFAULT_NOISE_SCALE: f64 = 2.0;

/// Raw noise heights for one tessellation, with the grid's observed extremes.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightMap {
    tessellation: Tessellation,
    noise_scale: f64,
    heights: Vec<f64>,
    min_height: f64,
    max_height: f64,
}

impl HeightMap {
    /// Sample `field` at every lattice point of `tessellation`.
    pub fn generate<N: NoiseFn<f64, 3>>(
        field: &NoiseField<N>,
        tessellation: Tessellation,
        noise_scale: f64,
    ) -> Self {
        let mut heights = Vec::with_capacity(tessellation.lattice_len());
        let mut min_height = f64::INFINITY;
        let mut max_height = f64::NEG_INFINITY;

        for i in 0..=tessellation.stack_count() {
            let stack_angle = tessellation.stack_angle(i);
            for j in 0..=tessellation.sector_count() {
                let direction = sphere_point(stack_angle, tessellation.sector_angle(j));
                let h = field.sample(direction * noise_scale);

                min_height = min_height.min(h);
                max_height = max_height.max(h);
                heights.push(h);
            }
        }

        tracing::trace!(
            sectors = tessellation.sector_count(),
            stacks = tessellation.stack_count(),
            min_height,
            max_height,
            "sampled height map"
        );

        Self {
            tessellation,
            noise_scale,
            heights,
            min_height,
            max_height,
        }
    }

    /// Raw height at lattice point `(stack, sector)`.
    ///
    /// # Panics
    ///
    /// Panics if the point lies outside the lattice.
    #[inline]
    pub fn get(&self, stack: u32, sector: u32) -> f64 {
        self.heights[self.tessellation.lattice_index(stack, sector)]
    }

    /// Lowest height in the grid.
    pub fn min_height(&self) -> f64 {
        self.min_height
    }

    /// Highest height in the grid.
    pub fn max_height(&self) -> f64 {
        self.max_height
    }

    /// `max_height - min_height`.
    pub fn range(&self) -> f64 {
        self.max_height - self.min_height
    }

    /// Tessellation the map was sampled for.
    pub fn tessellation(&self) -> Tessellation {
        self.tessellation
    }

    /// Frequency the directions were scaled by.
    pub fn noise_scale(&self) -> f64 {
        self.noise_scale
    }

    /// All heights, row-major by stack.
    pub fn heights(&self) -> &[f64] {
        &self.heights
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    struct Zero;

    impl NoiseFn<f64, 3> for Zero {
        fn get(&self, _point: [f64; 3]) -> f64 {
            0.0
        }
    }

    /// Height equals the sampled z coordinate.
    struct Elevation;

    impl NoiseFn<f64, 3> for Elevation {
        fn get(&self, point: [f64; 3]) -> f64 {
            point[2]
        }
    }

    #[test]
    fn test_grid_size_matches_lattice() {
        let map = HeightMap::generate(
            &NoiseField::seeded(3),
            Tessellation::new(8, 4),
            DEFAULT_NOISE_SCALE,
        );
        assert_eq!(map.heights().len(), 9 * 5);
    }

    #[test]
    fn test_zero_noise_has_empty_range() {
        let map = HeightMap::generate(&NoiseField::new(Zero), Tessellation::new(6, 3), 2.0);
        assert_eq!(map.min_height(), 0.0);
        assert_eq!(map.max_height(), 0.0);
        assert_eq!(map.range(), 0.0);
    }

    #[test]
    fn test_extremes_track_whole_grid() {
        let map = HeightMap::generate(
            &NoiseField::seeded(11),
            Tessellation::new(24, 12),
            DEFAULT_NOISE_SCALE,
        );
        let lo = map.heights().iter().copied().fold(f64::INFINITY, f64::min);
        let hi = map.heights().iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(map.min_height(), lo);
        assert_eq!(map.max_height(), hi);
        assert!((map.range() - (hi - lo)).abs() < EPSILON);
    }

    #[test]
    fn test_samples_scaled_unit_sphere() {
        // Elevation noise returns z * frequency per octave, so the pole of a
        // unit sphere scaled by 2 sums to 2 * (1 + 2 * 0.5 + ...) = 12.
        let map = HeightMap::generate(&NoiseField::new(Elevation), Tessellation::new(4, 2), 2.0);
        assert!((map.get(0, 0) - 12.0).abs() < EPSILON);
        assert!((map.get(2, 3) + 12.0).abs() < EPSILON);
        assert!(map.get(1, 1).abs() < EPSILON, "equator has z = 0");
    }

    #[test]
    fn test_seam_column_matches_first_column() {
        let map = HeightMap::generate(
            &NoiseField::seeded(5),
            Tessellation::new(16, 8),
            DEFAULT_NOISE_SCALE,
        );
        for i in 0..=8 {
            assert!(
                (map.get(i, 0) - map.get(i, 16)).abs() < EPSILON,
                "seam mismatch on stack {i}"
            );
        }
    }

    #[test]
    fn test_same_field_same_map() {
        let field = NoiseField::seeded(21);
        let a = HeightMap::generate(&field, Tessellation::new(12, 6), DEFAULT_NOISE_SCALE);
        let b = HeightMap::generate(&field, Tessellation::new(12, 6), DEFAULT_NOISE_SCALE);
        assert_eq!(a, b);
    }
}
