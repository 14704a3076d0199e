//! `wgpu::VertexBufferLayout` for the interleaved planet stream.
//!
//! | Location | Offset | Format    | Field    |
//! |----------|--------|-----------|----------|
//! | 0        | 0      | Float32x3 | position |
//! | 1        | 12     | Float32x3 | normal   |
//! | 2        | 24     | Float32x4 | color    |

use std::mem;

use wgpu::{IndexFormat, VertexAttribute, VertexBufferLayout, VertexFormat, VertexStepMode};

use crate::interleaved::{INTERLEAVED_STRIDE, PlanetVertex};

pub const PLANET_VERTEX_ATTRIBUTES: [VertexAttribute; 3] = [
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: mem::offset_of!(PlanetVertex, position) as u64,
        shader_location: 0,
    },
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: mem::offset_of!(PlanetVertex, normal) as u64,
        shader_location: 1,
    },
    VertexAttribute {
        format: VertexFormat::Float32x4,
        offset: mem::offset_of!(PlanetVertex, color) as u64,
        shader_location: 2,
    },
];

/// Layout for triangle and wireframe pipelines drawing [`PlanetVertex`] buffers.
pub const PLANET_VERTEX_LAYOUT: VertexBufferLayout<'static> = VertexBufferLayout {
    array_stride: INTERLEAVED_STRIDE as u64,
    step_mode: VertexStepMode::Vertex,
    attributes: &PLANET_VERTEX_ATTRIBUTES,
};

/// Triangle and line indices are 32-bit.
pub const PLANET_INDEX_FORMAT: IndexFormat = IndexFormat::Uint32;

/// Owned copy of [`PLANET_VERTEX_LAYOUT`].
pub fn planet_vertex_buffer_layout() -> VertexBufferLayout<'static> {
    PLANET_VERTEX_LAYOUT
}

const _: () = assert!(INTERLEAVED_STRIDE == 40, "PlanetVertex size changed");
const _: () = assert!(PLANET_VERTEX_ATTRIBUTES[0].offset == 0);
const _: () = assert!(PLANET_VERTEX_ATTRIBUTES[1].offset == 12);
const _: () = assert!(PLANET_VERTEX_ATTRIBUTES[2].offset == 24);
const _: () = assert!(
    PLANET_VERTEX_ATTRIBUTES[2].offset + 16 <= INTERLEAVED_STRIDE as u64,
    "color exceeds vertex stride"
);
