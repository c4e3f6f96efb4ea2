/// Scene config, relative to the asset root.
pub const SCENE_CONFIG_PATH: &str = "scene/particles.json";

/// Model used when the scene config does not name one. Must be an uncompressed GLB.
pub const DEFAULT_MODEL_PATH: &str = "models/pierre_colpart.glb";

pub const PARTICLE_SHADER_PATH: &str = "shaders/particles.wgsl";
