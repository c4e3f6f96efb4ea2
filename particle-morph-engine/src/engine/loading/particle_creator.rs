use bevy::gltf::{Gltf, GltfMesh};
use bevy::prelude::*;
use bevy::render::view::NoFrustumCulling;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::engine::assets::particle_assets::ParticleAssets;
use crate::engine::assets::scene_config::SceneConfig;
use crate::engine::error::ParticleError;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::mesh::particle_mesh::{Particles, create_particle_mesh};
use crate::engine::parameters::ParticleParameters;
use crate::engine::particles::extract::extract_mesh_positions;
use crate::engine::particles::{ParticleBuffers, build_particle_buffers};
use crate::engine::shaders::{ParticleMaterial, ParticleUniforms};
use crate::rpc::web_rpc::WebRpcInterface;

pub fn create_particles_when_ready(
    mut loading_progress: ResMut<LoadingProgress>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ParticleMaterial>>,
    mut assets: ResMut<ParticleAssets>,
    gltfs: Res<Assets<Gltf>>,
    gltf_meshes: Res<Assets<GltfMesh>>,
    config: Option<Res<SceneConfig>>,
    params: Res<ParticleParameters>,
) {
    if loading_progress.particles_created
        || loading_progress.failed
        || !loading_progress.model_loaded
    {
        return;
    }

    let Some(config) = config else {
        return;
    };
    let Some(gltf) = gltfs.get(&assets.model) else {
        return;
    };

    let buffers = match prepare_buffers(gltf, &gltf_meshes, &meshes, config.seed) {
        Ok(buffers) => buffers,
        Err(err) => {
            loading_progress.fail(&mut rpc_interface, err.to_string());
            return;
        }
    };

    println!(
        "✓ Particle buffers ready: {} particles from {} meshes",
        buffers.count,
        gltf.meshes.len()
    );

    let material = materials.add(ParticleMaterial {
        uniforms: ParticleUniforms::from(params.as_ref()),
    });

    // Vertices are displaced in the shader, so the CPU-side bounds are meaningless.
    commands.spawn((
        Mesh3d(meshes.add(create_particle_mesh(&buffers))),
        MeshMaterial3d(material.clone()),
        config.particle_transform(),
        NoFrustumCulling,
        Particles,
    ));

    assets.material = Some(material);
    loading_progress.particles_created = true;
}

fn prepare_buffers(
    gltf: &Gltf,
    gltf_meshes: &Assets<GltfMesh>,
    meshes: &Assets<Mesh>,
    seed: Option<u64>,
) -> Result<ParticleBuffers, ParticleError> {
    let positions = extract_mesh_positions(gltf, gltf_meshes, meshes)?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    build_particle_buffers(&positions, &mut rng)
}
