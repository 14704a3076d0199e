//! Flat-shaded triangle mesh with separate attribute arrays.
//!
//! Every face owns its own vertex copies so a single face normal can be
//! stored per corner. Cap rows emit one triangle per sector, body rows emit
//! a quad (two triangles) per sector.

use glam::Vec3;
use planetoid_terrain::{Rgba, Tessellation};

use crate::lattice::LatticeVertex;

/// Cross products shorter than this produce a zero normal.
const NORMAL_EPSILON: f32 = 1e-6;

/// Unit normal of the triangle `(v1, v2, v3)`, counter-clockwise front face.
///
/// Degenerate triangles yield `(0, 0, 0)`.
pub fn face_normal(v1: Vec3, v2: Vec3, v3: Vec3) -> Vec3 {
    let n = (v2 - v1).cross(v3 - v1);
    let length = n.length();
    if length > NORMAL_EPSILON {
        n / length
    } else {
        Vec3::ZERO
    }
}

/// Separate position/normal/color arrays plus triangle and wireframe indices.
///
/// Indices are `u32` and refer to vertex numbers, so `positions[3 * i..3 * i + 3]`
/// is the position of index `i`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlanetMesh {
    pub positions: Vec<f32>,
    pub normals: Vec<f32>,
    pub colors: Vec<f32>,
    pub indices: Vec<u32>,
    pub line_indices: Vec<u32>,
}

impl PlanetMesh {
    /// Triangulate a lattice laid out row-major for `tessellation`.
    ///
    /// # Panics
    ///
    /// Panics if `lattice` holds fewer than `tessellation.lattice_len()` points.
    pub fn triangulate(lattice: &[LatticeVertex], tessellation: Tessellation) -> Self {
        let sectors = tessellation.sector_count();
        let stacks = tessellation.stack_count();

        let cap_vertices = 3 * 2 * sectors as usize;
        let body_vertices = 4 * sectors as usize * (stacks as usize - 2);
        let mut mesh = Self::with_vertex_capacity(cap_vertices + body_vertices);

        let at = |stack: u32, sector: u32| &lattice[tessellation.lattice_index(stack, sector)];

        for i in 0..stacks {
            for j in 0..sectors {
                let v1 = at(i, j);
                let v2 = at(i + 1, j);
                let v3 = at(i, j + 1);
                let v4 = at(i + 1, j + 1);

                let base = mesh.vertex_count() as u32;

                if i == 0 {
                    // North cap: pole, lower-left, lower-right.
                    let n = face_normal(v1.position, v2.position, v4.position);
                    mesh.push_corners(&[v1, v2, v4], n);
                    mesh.indices.extend_from_slice(&[base, base + 1, base + 2]);
                    mesh.line_indices.extend_from_slice(&[base, base + 1]);
                } else if i == stacks - 1 {
                    // South cap: upper-left, pole, upper-right.
                    let n = face_normal(v1.position, v2.position, v3.position);
                    mesh.push_corners(&[v1, v2, v3], n);
                    mesh.indices.extend_from_slice(&[base, base + 1, base + 2]);
                    mesh.push_lines(base);
                } else {
                    let n = face_normal(v1.position, v2.position, v3.position);
                    mesh.push_corners(&[v1, v2, v3, v4], n);
                    mesh.indices.extend_from_slice(&[
                        base,
                        base + 1,
                        base + 2,
                        base + 2,
                        base + 1,
                        base + 3,
                    ]);
                    mesh.push_lines(base);
                }
            }
        }

        mesh
    }

    fn with_vertex_capacity(vertices: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices * 3),
            normals: Vec::with_capacity(vertices * 3),
            colors: Vec::with_capacity(vertices * 4),
            indices: Vec::new(),
            line_indices: Vec::new(),
        }
    }

    fn push_corners(&mut self, corners: &[&LatticeVertex], normal: Vec3) {
        for corner in corners {
            self.positions.extend_from_slice(&corner.position.to_array());
            self.normals.extend_from_slice(&normal.to_array());
            self.push_color(corner.color);
        }
    }

    fn push_color(&mut self, color: Rgba) {
        self.colors.extend_from_slice(&color);
    }

    /// Left edge and top edge of the face starting at `base`.
    fn push_lines(&mut self, base: u32) {
        self.line_indices
            .extend_from_slice(&[base, base + 1, base, base + 2]);
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn line_index_count(&self) -> usize {
        self.line_indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Position of vertex `index`.
    pub fn position(&self, index: usize) -> Vec3 {
        Vec3::from_slice(&self.positions[index * 3..index * 3 + 3])
    }

    /// Normal of vertex `index`.
    pub fn normal(&self, index: usize) -> Vec3 {
        Vec3::from_slice(&self.normals[index * 3..index * 3 + 3])
    }
}
