//! The `Planet` orchestrator: owns parameters, the height map and every output buffer.

use std::fmt;
use std::mem::size_of;
use std::time::Instant;

use noise::{NoiseFn, Perlin};
use planetoid_config::{MeshConfig, PlanetParams};
use planetoid_terrain::{HeightMap, NoiseField, Tessellation};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::flat_mesh::PlanetMesh;
use crate::interleaved::{INTERLEAVED_STRIDE, PlanetVertex, as_bytes, as_floats, interleave};
use crate::lattice::{build_lattice, oblateness};

/// A procedurally generated, flat-shaded planet mesh.
///
/// Construction and every effective setter run one complete rebuild. The
/// classifier's random source is reseeded from `seed` on each build, so the
/// same inputs always give the same buffers.
pub struct Planet<N = Perlin> {
    params: PlanetParams,
    radius: f64,
    tessellation: Tessellation,
    noise_scale: f64,
    seed: u64,
    noise: NoiseField<N>,
    height_map: HeightMap,
    mesh: PlanetMesh,
    vertices: Vec<PlanetVertex>,
}

impl Planet<Perlin> {
    /// Perlin-backed planet. The noise seed is the low 32 bits of `config.seed`.
    pub fn new(params: PlanetParams, config: &MeshConfig) -> Self {
        Self::with_noise(params, config, NoiseField::seeded(config.seed as u32))
    }
}

impl<N: NoiseFn<f64, 3>> Planet<N> {
    /// Planet over an arbitrary noise field.
    pub fn with_noise(params: PlanetParams, config: &MeshConfig, noise: NoiseField<N>) -> Self {
        let tessellation = Tessellation::new(config.sector_count, config.stack_count);
        let height_map = HeightMap::generate(&noise, tessellation, config.noise_scale);

        let mut planet = Self {
            params,
            radius: config.radius,
            tessellation,
            noise_scale: config.noise_scale,
            seed: config.seed,
            noise,
            height_map,
            mesh: PlanetMesh::default(),
            vertices: Vec::new(),
        };
        planet.build_vertices();
        planet
    }

    /// Change radius and resolution together; regenerates the height map.
    pub fn set(&mut self, radius: f64, sector_count: u32, stack_count: u32) {
        self.radius = radius;
        self.tessellation = Tessellation::new(sector_count, stack_count);
        self.height_map = HeightMap::generate(&self.noise, self.tessellation, self.noise_scale);
        self.build_vertices();
    }

    pub fn set_radius(&mut self, radius: f64) {
        if radius != self.radius {
            self.set(radius, self.sector_count(), self.stack_count());
        }
    }

    pub fn set_sector_count(&mut self, sector_count: u32) {
        if sector_count != self.sector_count() {
            self.set(self.radius, sector_count, self.stack_count());
        }
    }

    pub fn set_stack_count(&mut self, stack_count: u32) {
        if stack_count != self.stack_count() {
            self.set(self.radius, self.sector_count(), stack_count);
        }
    }

    /// Replace the physical parameters. The height map does not depend on
    /// them, so only the mesh is rebuilt.
    pub fn set_params(&mut self, params: PlanetParams) {
        if params != self.params {
            self.params = params;
            self.build_vertices();
        }
    }

    fn build_vertices(&mut self) {
        let started = Instant::now();
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);

        let lattice = build_lattice(
            &self.height_map,
            &self.params,
            self.radius,
            &self.noise,
            &mut rng,
        );
        self.mesh = PlanetMesh::triangulate(&lattice, self.tessellation);
        self.vertices = interleave(&self.mesh);

        tracing::debug!(
            radius = self.radius,
            sectors = self.sector_count(),
            stacks = self.stack_count(),
            triangles = self.triangle_count(),
            vertices = self.vertex_count(),
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "built planet mesh"
        );
    }
}

impl<N> Planet<N> {
    pub fn params(&self) -> &PlanetParams {
        &self.params
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn sector_count(&self) -> u32 {
        self.tessellation.sector_count()
    }

    pub fn stack_count(&self) -> u32 {
        self.tessellation.stack_count()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn noise_scale(&self) -> f64 {
        self.noise_scale
    }

    /// Equatorial bulge applied to the current mesh.
    pub fn oblateness(&self) -> f64 {
        oblateness(&self.params)
    }

    pub fn height_map(&self) -> &HeightMap {
        &self.height_map
    }

    pub fn mesh(&self) -> &PlanetMesh {
        &self.mesh
    }

    pub fn positions(&self) -> &[f32] {
        &self.mesh.positions
    }

    pub fn normals(&self) -> &[f32] {
        &self.mesh.normals
    }

    pub fn colors(&self) -> &[f32] {
        &self.mesh.colors
    }

    pub fn indices(&self) -> &[u32] {
        &self.mesh.indices
    }

    pub fn line_indices(&self) -> &[u32] {
        &self.mesh.line_indices
    }

    pub fn interleaved_vertices(&self) -> &[PlanetVertex] {
        &self.vertices
    }

    /// Interleaved stream as floats, 10 per vertex.
    pub fn interleaved_floats(&self) -> &[f32] {
        as_floats(&self.vertices)
    }

    /// Interleaved stream as bytes for upload or dumping.
    pub fn interleaved_bytes(&self) -> &[u8] {
        as_bytes(&self.vertices)
    }

    pub fn vertex_count(&self) -> usize {
        self.mesh.positions.len() / 3
    }

    pub fn normal_count(&self) -> usize {
        self.mesh.normals.len() / 3
    }

    pub fn color_count(&self) -> usize {
        self.mesh.colors.len() / 4
    }

    pub fn index_count(&self) -> usize {
        self.mesh.indices.len()
    }

    pub fn line_index_count(&self) -> usize {
        self.mesh.line_indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.mesh.indices.len() / 3
    }

    pub fn position_size(&self) -> usize {
        self.mesh.positions.len() * size_of::<f32>()
    }

    pub fn normal_size(&self) -> usize {
        self.mesh.normals.len() * size_of::<f32>()
    }

    pub fn color_size(&self) -> usize {
        self.mesh.colors.len() * size_of::<f32>()
    }

    pub fn index_size(&self) -> usize {
        self.mesh.indices.len() * size_of::<u32>()
    }

    pub fn line_index_size(&self) -> usize {
        self.mesh.line_indices.len() * size_of::<u32>()
    }

    pub fn interleaved_size(&self) -> usize {
        self.vertices.len() * INTERLEAVED_STRIDE
    }

    pub fn interleaved_stride(&self) -> usize {
        INTERLEAVED_STRIDE
    }
}

impl<N> fmt::Display for Planet<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===== Planet =====")?;
        writeln!(f, "        Radius: {}", self.radius)?;
        writeln!(f, "  Sector Count: {}", self.sector_count())?;
        writeln!(f, "   Stack Count: {}", self.stack_count())?;
        writeln!(f, "Triangle Count: {}", self.triangle_count())?;
        writeln!(f, "   Index Count: {}", self.index_count())?;
        writeln!(f, "  Vertex Count: {}", self.vertex_count())?;
        writeln!(f, "  Normal Count: {}", self.normal_count())?;
        write!(f, "   Color Count: {}", self.color_count())
    }
}
