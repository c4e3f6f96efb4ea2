use bevy::math::Vec3;

/// Base point size fed to the `size` uniform.
pub const POINT_SIZE: f32 = 0.08;

/// Progress value before any animation has run. Negative values keep every particle
/// at its origin position.
pub const INITIAL_PROGRESS: f32 = -2.0;

pub const COLOR_A_HEX: &str = "#ff0000";
pub const COLOR_B_HEX: &str = "#00ff9d";

pub const PARTICLES_TRANSLATION: Vec3 = Vec3::new(-2.5, 0.0, 8.0);
pub const PARTICLES_ROTATION_X: f32 = std::f32::consts::FRAC_PI_2;

/// Progress slider range exposed in the debug panel.
pub const PROGRESS_SLIDER_MIN: f32 = 0.0;
pub const PROGRESS_SLIDER_MAX: f32 = 1.0;
pub const PROGRESS_SLIDER_STEP: f32 = 0.0001;

/// Step used by the colour channel sliders (8-bit resolution).
pub const COLOR_CHANNEL_STEP: f32 = 1.0 / 255.0;
