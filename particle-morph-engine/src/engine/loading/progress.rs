use bevy::prelude::*;

use crate::rpc::web_rpc::WebRpcInterface;

#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub config_loaded: bool,
    pub model_requested: bool,
    pub model_loaded: bool,
    pub particles_created: bool,
    /// Loading stopped on an error; the app stays in `Loading` without particles.
    pub failed: bool,
}

impl LoadingProgress {
    /// Log a fatal loading error, tell the host page and stop the pipeline.
    pub fn fail(&mut self, rpc_interface: &mut WebRpcInterface, message: String) {
        error!("Loading failed: {}", message);
        rpc_interface.send_notification(
            "loading_failed",
            serde_json::json!({
                "message": message
            }),
        );
        self.failed = true;
    }
}
