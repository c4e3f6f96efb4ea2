use bevy::gltf::Gltf;
use bevy::prelude::*;

use crate::engine::assets::scene_config::SceneConfig;
use crate::engine::shaders::ParticleMaterial;

/// Asset handles owned by the particle scene.
#[derive(Resource, Default)]
pub struct ParticleAssets {
    pub config: Handle<SceneConfig>,
    pub model: Handle<Gltf>,
    /// Set once the particle entity exists; systems that push uniforms wait for it.
    pub material: Option<Handle<ParticleMaterial>>,
}
