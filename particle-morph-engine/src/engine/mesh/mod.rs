//! Mesh generation for particle rendering primitives.
//!
//! Provides vertex buffer layouts for the particle material, which expands each
//! particle into a screen-aligned quad in the vertex shader.

/// Particle quad mesh generation with morph-target and size attributes.
///
/// Creates indexed triangle geometry where each particle owns four corner vertices.
pub mod particle_mesh;
