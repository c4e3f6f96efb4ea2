//! Scene assets: the JSON scene config and the handles loaded from it.

/// Handles to the model and particle entities the loading pipeline produces.
pub mod particle_assets;

/// JSON scene configuration with defaults for every field.
pub mod scene_config;
