//! Latitude/longitude lattice shared by the height map and the mesh builder.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use glam::DVec3;

/// Fewest longitude divisions that still close the sphere.
pub const MIN_SECTOR_COUNT: u32 = 3;
/// Fewest latitude divisions (two pole caps, no body).
pub const MIN_STACK_COUNT: u32 = 2;

/// Resolution of the latitude/longitude grid.
///
/// The lattice has `(stack_count + 1) × (sector_count + 1)` points stored
/// row-major by stack. The first and last sector columns coincide
/// geometrically but keep distinct indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tessellation {
    sector_count: u32,
    stack_count: u32,
}

impl Tessellation {
    /// Create a tessellation, clamping counts below the minimums up to them.
    pub fn new(sector_count: u32, stack_count: u32) -> Self {
        let clamped = Self {
            sector_count: sector_count.max(MIN_SECTOR_COUNT),
            stack_count: stack_count.max(MIN_STACK_COUNT),
        };
        if clamped.sector_count != sector_count || clamped.stack_count != stack_count {
            tracing::debug!(
                requested_sectors = sector_count,
                requested_stacks = stack_count,
                sectors = clamped.sector_count,
                stacks = clamped.stack_count,
                "clamped tessellation to minimum resolution"
            );
        }
        clamped
    }

    /// Longitude divisions.
    pub fn sector_count(&self) -> u32 {
        self.sector_count
    }

    /// Latitude divisions.
    pub fn stack_count(&self) -> u32 {
        self.stack_count
    }

    /// Lattice points per stack row (`sector_count + 1`).
    pub fn columns(&self) -> usize {
        self.sector_count as usize + 1
    }

    /// Lattice rows (`stack_count + 1`).
    pub fn rows(&self) -> usize {
        self.stack_count as usize + 1
    }

    /// Total lattice points.
    pub fn lattice_len(&self) -> usize {
        self.rows() * self.columns()
    }

    /// Row-major lattice index of `(stack, sector)`.
    #[inline]
    pub fn lattice_index(&self, stack: u32, sector: u32) -> usize {
        stack as usize * self.columns() + sector as usize
    }

    /// Stack angle (latitude) of row `stack`, from `π/2` at the first row to `-π/2` at the last.
    #[inline]
    pub fn stack_angle(&self, stack: u32) -> f64 {
        FRAC_PI_2 - stack as f64 * (PI / self.stack_count as f64)
    }

    /// Sector angle (longitude) of column `sector`, from `0` to `2π`.
    #[inline]
    pub fn sector_angle(&self, sector: u32) -> f64 {
        sector as f64 * (TAU / self.sector_count as f64)
    }

    /// Triangles emitted by the flat-shaded mesh: one per sector in each cap
    /// row, two per sector in every body row.
    pub fn triangle_count(&self) -> usize {
        let sectors = self.sector_count as usize;
        let body_rows = self.stack_count as usize - 2;
        2 * sectors + 2 * sectors * body_rows
    }
}

/// Point on a sphere of radius 1 at the given stack and sector angles.
///
/// `x = cos(stack)·cos(sector)`, `y = cos(stack)·sin(sector)`, `z = sin(stack)`.
#[inline]
pub fn sphere_point(stack_angle: f64, sector_angle: f64) -> DVec3 {
    let xy = stack_angle.cos();
    DVec3::new(
        xy * sector_angle.cos(),
        xy * sector_angle.sin(),
        stack_angle.sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_clamps_to_minimum() {
        let t = Tessellation::new(0, 1);
        assert_eq!(t.sector_count(), MIN_SECTOR_COUNT);
        assert_eq!(t.stack_count(), MIN_STACK_COUNT);
    }

    #[test]
    fn test_valid_counts_unchanged() {
        let t = Tessellation::new(36, 18);
        assert_eq!((t.sector_count(), t.stack_count()), (36, 18));
        assert_eq!(t.columns(), 37);
        assert_eq!(t.rows(), 19);
        assert_eq!(t.lattice_len(), 37 * 19);
    }

    #[test]
    fn test_lattice_index_row_major() {
        let t = Tessellation::new(4, 2);
        assert_eq!(t.lattice_index(0, 0), 0);
        assert_eq!(t.lattice_index(0, 4), 4);
        assert_eq!(t.lattice_index(1, 0), 5);
        assert_eq!(t.lattice_index(2, 4), 14);
    }

    #[test]
    fn test_angles_span_sphere() {
        let t = Tessellation::new(8, 4);
        assert!((t.stack_angle(0) - FRAC_PI_2).abs() < EPSILON);
        assert!((t.stack_angle(2)).abs() < EPSILON);
        assert!((t.stack_angle(4) + FRAC_PI_2).abs() < EPSILON);
        assert_eq!(t.sector_angle(0), 0.0);
        assert!((t.sector_angle(8) - TAU).abs() < EPSILON);
    }

    #[test]
    fn test_triangle_count_formula() {
        assert_eq!(Tessellation::new(4, 2).triangle_count(), 8);
        assert_eq!(Tessellation::new(36, 18).triangle_count(), 72 + 72 * 16);
    }

    #[test]
    fn test_sphere_point_is_unit_length() {
        for (stack, sector) in [(0.3, 1.2), (-1.1, 4.0), (FRAC_PI_2, 0.0)] {
            let p = sphere_point(stack, sector);
            assert!((p.length() - 1.0).abs() < EPSILON);
        }
        let north = sphere_point(FRAC_PI_2, 2.0);
        assert!((north - DVec3::Z).length() < EPSILON);
    }
}
