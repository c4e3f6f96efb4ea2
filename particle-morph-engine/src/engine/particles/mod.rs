//! Particle buffer preparation.
//!
//! Turns the meshes of the loaded model into equal-length origin/target position
//! buffers plus a per-particle size scalar, ready to be packed into the particle mesh.

/// Position extraction from loaded glTF meshes.
pub mod extract;

/// Vertex padding and per-particle random attributes.
pub mod resample;

use bevy::log::warn;
use rand::Rng;

use crate::engine::error::ParticleError;
use resample::{pad_vertex_sets, random_sizes};

/// CPU-side particle attributes, all of length `count`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleBuffers {
    pub count: usize,
    pub origin: Vec<[f32; 3]>,
    pub target: Vec<[f32; 3]>,
    pub sizes: Vec<f32>,
}

/// Pad the model's meshes and pick the morph pair: mesh 0 is the origin, mesh 1 the
/// target. A single-mesh model morphs onto itself.
pub fn build_particle_buffers<R: Rng + ?Sized>(
    mesh_positions: &[Vec<[f32; 3]>],
    rng: &mut R,
) -> Result<ParticleBuffers, ParticleError> {
    if mesh_positions.is_empty() {
        return Err(ParticleError::EmptyModel);
    }

    let padded = pad_vertex_sets(mesh_positions, rng)?;
    if padded.is_empty() {
        return Err(ParticleError::EmptyMesh { index: 0 });
    }

    let mut sets = padded.sets.into_iter();
    let origin = sets.next().ok_or(ParticleError::EmptyModel)?;
    let target = match sets.next() {
        Some(target) => target,
        None => {
            warn!("Model has a single mesh, particles will morph onto themselves");
            origin.clone()
        }
    };

    Ok(ParticleBuffers {
        count: padded.max_count,
        sizes: random_sizes(padded.max_count, rng),
        origin,
        target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn first_two_meshes_form_the_morph_pair() {
        let mut rng = StdRng::seed_from_u64(11);
        let meshes = vec![
            vec![[0.0, 0.0, 0.0]; 2],
            vec![[1.0, 1.0, 1.0]; 4],
            vec![[2.0, 2.0, 2.0]; 3],
        ];

        let buffers = build_particle_buffers(&meshes, &mut rng).unwrap();

        assert_eq!(buffers.count, 4);
        assert_eq!(buffers.origin, vec![[0.0, 0.0, 0.0]; 4]);
        assert_eq!(buffers.target, vec![[1.0, 1.0, 1.0]; 4]);
        assert_eq!(buffers.sizes.len(), 4);
    }

    #[test]
    fn single_mesh_targets_itself() {
        let mut rng = StdRng::seed_from_u64(2);
        let meshes = vec![vec![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]];

        let buffers = build_particle_buffers(&meshes, &mut rng).unwrap();

        assert_eq!(buffers.origin, buffers.target);
    }

    #[test]
    fn model_without_vertices_is_rejected() {
        let mut rng = StdRng::seed_from_u64(2);

        assert_eq!(
            build_particle_buffers(&[], &mut rng).unwrap_err(),
            ParticleError::EmptyModel
        );
        assert_eq!(
            build_particle_buffers(&[Vec::new()], &mut rng).unwrap_err(),
            ParticleError::EmptyMesh { index: 0 }
        );
    }
}
