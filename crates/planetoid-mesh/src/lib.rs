//! Planet surface meshing: lattice placement, flat-shaded triangulation, and GPU-ready packing.

pub mod flat_mesh;
pub mod interleaved;
pub mod lattice;
pub mod planet;
pub mod vertex_format;

pub use flat_mesh::{PlanetMesh, face_normal};
pub use interleaved::{FLOATS_PER_VERTEX, INTERLEAVED_STRIDE, PlanetVertex, interleave};
pub use lattice::{LatticeVertex, build_lattice, oblateness};
pub use planet::Planet;
pub use vertex_format::{
    PLANET_INDEX_FORMAT, PLANET_VERTEX_ATTRIBUTES, PLANET_VERTEX_LAYOUT, planet_vertex_buffer_layout,
};
