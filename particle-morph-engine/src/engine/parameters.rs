use std::str::FromStr;

use bevy::prelude::*;
use thiserror::Error;

use constants::particles::{COLOR_A_HEX, COLOR_B_HEX, INITIAL_PROGRESS, POINT_SIZE};
use constants::render_settings::MAX_PIXEL_RATIO;

use crate::engine::assets::scene_config::SceneConfig;

/// Values fed to the particle shader. Written by the debug panel, web RPC and the
/// animation timeline; copied into the material whenever it changes.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ParticleParameters {
    pub size: f32,
    /// Drawing-buffer size in physical pixels.
    pub resolution: Vec2,
    pub progress: f32,
    pub color_a: Srgba,
    pub color_b: Srgba,
}

impl Default for ParticleParameters {
    fn default() -> Self {
        Self {
            size: POINT_SIZE,
            resolution: Vec2::ONE,
            progress: INITIAL_PROGRESS,
            color_a: Srgba::hex(COLOR_A_HEX).unwrap_or(Srgba::RED),
            color_b: Srgba::hex(COLOR_B_HEX).unwrap_or(Srgba::GREEN),
        }
    }
}

impl ParticleParameters {
    pub fn from_config(config: &SceneConfig, resolution: Vec2) -> Self {
        Self {
            size: config.point_size,
            resolution,
            progress: config.initial_progress,
            color_a: config.color_a(),
            color_b: config.color_b(),
        }
    }
}

/// Colours editable from the debug panel and RPC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTarget {
    Clear,
    A,
    B,
}

impl ColorTarget {
    pub const ALL: [ColorTarget; 3] = [ColorTarget::Clear, ColorTarget::A, ColorTarget::B];

    pub fn label(self) -> &'static str {
        match self {
            ColorTarget::Clear => "clearColor",
            ColorTarget::A => "colorA",
            ColorTarget::B => "colorB",
        }
    }

    pub fn get(self, params: &ParticleParameters, clear_color: &ClearColor) -> Srgba {
        match self {
            ColorTarget::Clear => clear_color.0.to_srgba(),
            ColorTarget::A => params.color_a,
            ColorTarget::B => params.color_b,
        }
    }

    /// Write `colour`, touching only the resource that owns it so change detection stays
    /// precise.
    pub fn set(
        self,
        colour: Srgba,
        params: &mut ResMut<ParticleParameters>,
        clear_color: &mut ResMut<ClearColor>,
    ) {
        match self {
            ColorTarget::Clear => clear_color.0 = Color::Srgba(colour),
            ColorTarget::A => params.color_a = colour,
            ColorTarget::B => params.color_b = colour,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown colour target '{0}', expected clearColor, colorA or colorB")]
pub struct UnknownColorTarget(pub String);

impl FromStr for ColorTarget {
    type Err = UnknownColorTarget;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorTarget::ALL
            .into_iter()
            .find(|target| target.label() == s)
            .ok_or_else(|| UnknownColorTarget(s.to_string()))
    }
}

/// Device pixel ratio used for rendering, capped to keep fill rate bounded on
/// high-density displays.
pub fn pixel_ratio(scale_factor: f32) -> f32 {
    scale_factor.clamp(f32::EPSILON, MAX_PIXEL_RATIO)
}

/// Resolution uniform for a window of the given logical size.
pub fn viewport_resolution(logical_width: f32, logical_height: f32, scale_factor: f32) -> Vec2 {
    Vec2::new(logical_width, logical_height) * pixel_ratio(scale_factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_ratio_is_capped_at_two() {
        assert_eq!(pixel_ratio(1.0), 1.0);
        assert_eq!(pixel_ratio(1.5), 1.5);
        assert_eq!(pixel_ratio(3.0), 2.0);
    }

    #[test]
    fn resolution_uses_capped_ratio() {
        assert_eq!(viewport_resolution(800.0, 600.0, 1.0), Vec2::new(800.0, 600.0));
        assert_eq!(viewport_resolution(800.0, 600.0, 3.0), Vec2::new(1600.0, 1200.0));
    }

    #[test]
    fn colour_targets_round_trip_their_labels() {
        for target in ColorTarget::ALL {
            assert_eq!(target.label().parse::<ColorTarget>(), Ok(target));
        }
        assert!("colorC".parse::<ColorTarget>().is_err());
    }

    #[test]
    fn parameters_from_config() {
        let config = SceneConfig {
            point_size: 0.2,
            initial_progress: 0.5,
            ..default()
        };

        let params = ParticleParameters::from_config(&config, Vec2::new(10.0, 20.0));

        assert_eq!(params.size, 0.2);
        assert_eq!(params.progress, 0.5);
        assert_eq!(params.resolution, Vec2::new(10.0, 20.0));
        assert_eq!(params.color_b, Srgba::hex("#00ff9d").unwrap());
    }
}
