use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::engine::assets::particle_assets::ParticleAssets;
use crate::engine::loading::progress::LoadingProgress;
use crate::rpc::web_rpc::WebRpcInterface;

// Check whether the model is available
pub fn check_model_loading(
    mut loading_progress: ResMut<LoadingProgress>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    assets: Res<ParticleAssets>,
    asset_server: Res<AssetServer>,
) {
    if loading_progress.model_loaded
        || loading_progress.failed
        || !loading_progress.model_requested
    {
        return;
    }

    // Meshes are labelled sub-assets of the glTF and land together with it.
    match asset_server.get_load_state(&assets.model) {
        Some(LoadState::Loaded) => {
            println!("✓ Model loaded successfully");
            loading_progress.model_loaded = true;
        }
        Some(LoadState::Failed(err)) => {
            loading_progress.fail(&mut rpc_interface, format!("model could not be loaded: {err}"));
        }
        _ => {}
    }
}
