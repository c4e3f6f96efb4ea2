use bevy::asset::{LoadState, RenderAssetUsages};
use bevy::gltf::GltfLoaderSettings;
use bevy::prelude::*;

use constants::path::SCENE_CONFIG_PATH;

use crate::engine::assets::particle_assets::ParticleAssets;
use crate::engine::assets::scene_config::SceneConfig;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::parameters::ParticleParameters;

// Start the loading process
pub fn start_loading(mut assets: ResMut<ParticleAssets>, asset_server: Res<AssetServer>) {
    println!("Loading scene config from: {}", SCENE_CONFIG_PATH);
    assets.config = asset_server.load(SCENE_CONFIG_PATH);
}

// Apply the scene config once it resolves, then request the model
pub fn load_scene_config(
    mut loading_progress: ResMut<LoadingProgress>,
    mut assets: ResMut<ParticleAssets>,
    mut params: ResMut<ParticleParameters>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    configs: Res<Assets<SceneConfig>>,
) {
    if loading_progress.config_loaded {
        return;
    }

    let config = match asset_server.get_load_state(&assets.config) {
        Some(LoadState::Loaded) => {
            println!("✓ Scene config loaded");
            configs.get(&assets.config).cloned().unwrap_or_default()
        }
        Some(LoadState::Failed(err)) => {
            warn!("Scene config unavailable ({}), using built-in scene", err);
            SceneConfig::default()
        }
        _ => return,
    };

    // Keep the resolution the resize system has already measured.
    *params = ParticleParameters::from_config(&config, params.resolution);
    commands.insert_resource(ClearColor(config.clear_color().into()));

    println!("Loading model from: {}", config.model_path);
    // Only vertex positions are read, and on the CPU: keep meshes in the main world and
    // skip materials, textures, cameras and lights.
    assets.model = asset_server.load_with_settings(
        config.model_path.clone(),
        |settings: &mut GltfLoaderSettings| {
            settings.load_meshes = RenderAssetUsages::MAIN_WORLD;
            settings.load_materials = RenderAssetUsages::empty();
            settings.load_cameras = false;
            settings.load_lights = false;
        },
    );
    commands.insert_resource(config);

    loading_progress.config_loaded = true;
    loading_progress.model_requested = true;
}
