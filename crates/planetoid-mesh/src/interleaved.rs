//! Interleaved vertex stream: position, normal, color per vertex.

use bytemuck::{Pod, Zeroable};

use crate::flat_mesh::PlanetMesh;

/// One GPU vertex: `px py pz nx ny nz r g b a`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct PlanetVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

static_assertions::assert_eq_size!(PlanetVertex, [f32; 10]);

/// Floats per interleaved vertex.
pub const FLOATS_PER_VERTEX: usize = 10;

/// Bytes per interleaved vertex.
pub const INTERLEAVED_STRIDE: usize = size_of::<PlanetVertex>();

/// Zip the separate attribute arrays into one stream with the same vertex order.
pub fn interleave(mesh: &PlanetMesh) -> Vec<PlanetVertex> {
    mesh.positions
        .chunks_exact(3)
        .zip(mesh.normals.chunks_exact(3))
        .zip(mesh.colors.chunks_exact(4))
        .map(|((p, n), c)| PlanetVertex {
            position: [p[0], p[1], p[2]],
            normal: [n[0], n[1], n[2]],
            color: [c[0], c[1], c[2], c[3]],
        })
        .collect()
}

/// View vertices as a flat float slice.
pub fn as_floats(vertices: &[PlanetVertex]) -> &[f32] {
    bytemuck::cast_slice(vertices)
}

/// View vertices as raw bytes for upload.
pub fn as_bytes(vertices: &[PlanetVertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_vertex_mesh() -> PlanetMesh {
        PlanetMesh {
            positions: vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            normals: vec![0.0, 0.0, 1.0, 0.0, 1.0, 0.0],
            colors: vec![0.1, 0.2, 0.3, 1.0, 0.4, 0.5, 0.6, 0.5],
            indices: Vec::new(),
            line_indices: Vec::new(),
        }
    }

    #[test]
    fn test_stride_is_forty_bytes() {
        assert_eq!(INTERLEAVED_STRIDE, 40);
        assert_eq!(INTERLEAVED_STRIDE, FLOATS_PER_VERTEX * size_of::<f32>());
    }

    #[test]
    fn test_interleave_orders_attributes() {
        let vertices = interleave(&two_vertex_mesh());
        assert_eq!(vertices.len(), 2);
        assert_eq!(
            as_floats(&vertices),
            &[
                1.0, 2.0, 3.0, 0.0, 0.0, 1.0, 0.1, 0.2, 0.3, 1.0, //
                4.0, 5.0, 6.0, 0.0, 1.0, 0.0, 0.4, 0.5, 0.6, 0.5,
            ]
        );
    }

    #[test]
    fn test_byte_view_length() {
        let vertices = interleave(&two_vertex_mesh());
        assert_eq!(as_bytes(&vertices).len(), 2 * INTERLEAVED_STRIDE);
    }

    #[test]
    fn test_empty_mesh_empty_stream() {
        assert!(interleave(&PlanetMesh::default()).is_empty());
    }
}
