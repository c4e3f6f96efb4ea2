use thiserror::Error;

/// Failures while turning a loaded model into particle buffers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParticleError {
    #[error("model contains no meshes")]
    EmptyModel,

    #[error("mesh {index} has no vertices to resample from")]
    EmptyMesh { index: usize },

    #[error("mesh '{mesh}' has no position attribute")]
    MissingPositions { mesh: String },

    #[error("asset '{0}' is not available in the asset store")]
    MissingAsset(String),
}
