use bevy::prelude::*;
use bevy::render::mesh::{Indices, MeshVertexAttribute, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::VertexFormat;

use crate::engine::particles::ParticleBuffers;

/// Morph target position, read by the vertex shader at location 2.
pub const ATTRIBUTE_POSITION_TARGET: MeshVertexAttribute =
    MeshVertexAttribute::new("Vertex_PositionTarget", 988_540_917, VertexFormat::Float32x3);

/// Per-particle size scalar in `[0, 1)`, read at location 3.
pub const ATTRIBUTE_PARTICLE_SIZE: MeshVertexAttribute =
    MeshVertexAttribute::new("Vertex_ParticleSize", 988_540_918, VertexFormat::Float32);

pub const VERTICES_PER_PARTICLE: usize = 4;
pub const INDICES_PER_PARTICLE: usize = 6;

const QUAD_CORNERS: [[f32; 2]; VERTICES_PER_PARTICLE] =
    [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

#[derive(Component)]
pub struct Particles;

/// Build the particle mesh. Every particle repeats its origin, target and size on four
/// vertices; the UV channel carries the quad corner the vertex shader expands towards.
pub fn create_particle_mesh(buffers: &ParticleBuffers) -> Mesh {
    let vertex_count = buffers.count * VERTICES_PER_PARTICLE;
    let mut origins = Vec::with_capacity(vertex_count);
    let mut targets = Vec::with_capacity(vertex_count);
    let mut sizes = Vec::with_capacity(vertex_count);
    let mut corners = Vec::with_capacity(vertex_count);
    let mut indices = Vec::with_capacity(buffers.count * INDICES_PER_PARTICLE);

    for i in 0..buffers.count {
        let base = (i * VERTICES_PER_PARTICLE) as u32;
        for corner in QUAD_CORNERS {
            origins.push(buffers.origin[i]);
            targets.push(buffers.target[i]);
            sizes.push(buffers.sizes[i]);
            corners.push(corner);
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, origins);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, corners);
    mesh.insert_attribute(ATTRIBUTE_POSITION_TARGET, targets);
    mesh.insert_attribute(ATTRIBUTE_PARTICLE_SIZE, sizes);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}
