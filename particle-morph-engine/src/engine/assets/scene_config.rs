use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use constants::particles::{
    COLOR_A_HEX, COLOR_B_HEX, INITIAL_PROGRESS, PARTICLES_ROTATION_X, PARTICLES_TRANSLATION,
    POINT_SIZE,
};
use constants::path::DEFAULT_MODEL_PATH;
use constants::render_settings::CLEAR_COLOR_HEX;

/// Scene configuration as a Bevy asset. Mirrors the JSON file; any missing field falls
/// back to the built-in scene.
#[derive(Asset, TypePath, Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Model path relative to the asset root. Must be an uncompressed GLB.
    pub model_path: String,
    pub point_size: f32,
    pub initial_progress: f32,
    pub color_a: String,
    pub color_b: String,
    pub clear_color: String,
    pub translation: [f32; 3],
    pub rotation_x: f32,
    /// Fixed seed for vertex resampling and size variation. Random when absent.
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            model_path: DEFAULT_MODEL_PATH.to_string(),
            point_size: POINT_SIZE,
            initial_progress: INITIAL_PROGRESS,
            color_a: COLOR_A_HEX.to_string(),
            color_b: COLOR_B_HEX.to_string(),
            clear_color: CLEAR_COLOR_HEX.to_string(),
            translation: PARTICLES_TRANSLATION.to_array(),
            rotation_x: PARTICLES_ROTATION_X,
            seed: None,
        }
    }
}

impl SceneConfig {
    /// Transform of the particle entity.
    pub fn particle_transform(&self) -> Transform {
        Transform::from_translation(Vec3::from_array(self.translation))
            .with_rotation(Quat::from_rotation_x(self.rotation_x))
    }

    pub fn color_a(&self) -> Srgba {
        parse_hex_or(&self.color_a, COLOR_A_HEX)
    }

    pub fn color_b(&self) -> Srgba {
        parse_hex_or(&self.color_b, COLOR_B_HEX)
    }

    pub fn clear_color(&self) -> Srgba {
        parse_hex_or(&self.clear_color, CLEAR_COLOR_HEX)
    }
}

/// Parse a hex colour, falling back to a built-in one (and logging) when malformed.
fn parse_hex_or(value: &str, fallback: &str) -> Srgba {
    Srgba::hex(value).unwrap_or_else(|err| {
        warn!("Invalid colour '{}' in scene config ({:?}), using {}", value, err, fallback);
        Srgba::hex(fallback).unwrap_or(Srgba::WHITE)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_builtin_scene() {
        let config: SceneConfig = serde_json::from_str("{}").unwrap();

        assert_eq!(config, SceneConfig::default());
        assert_eq!(config.point_size, 0.08);
        assert_eq!(config.initial_progress, -2.0);
        assert_eq!(config.clear_color(), Srgba::hex("#160920").unwrap());
    }

    #[test]
    fn partial_json_overrides_only_given_fields() {
        let config: SceneConfig =
            serde_json::from_str(r##"{ "model_path": "models/other.glb", "seed": 7, "color_b": "#0000ff" }"##)
                .unwrap();

        assert_eq!(config.model_path, "models/other.glb");
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.color_b(), Srgba::rgb(0.0, 0.0, 1.0));
        assert_eq!(config.color_a(), Srgba::rgb(1.0, 0.0, 0.0));
    }

    #[test]
    fn malformed_colour_falls_back() {
        let config = SceneConfig {
            color_a: "not a colour".to_string(),
            ..default()
        };

        assert_eq!(config.color_a(), Srgba::hex(COLOR_A_HEX).unwrap());
    }

    #[test]
    fn particle_transform_lays_model_flat() {
        let transform = SceneConfig::default().particle_transform();

        assert_eq!(transform.translation, Vec3::new(-2.5, 0.0, 8.0));
        let up = transform.rotation * Vec3::Y;
        assert!((up - Vec3::Z).length() < 1e-5);
    }
}
