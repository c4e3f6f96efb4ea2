use bevy::math::Vec3;

/// Vertical field of view of the scene camera, in degrees.
pub const CAMERA_FOV_DEGREES: f32 = 35.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;

/// Camera start position. The camera looks at the world origin.
pub const CAMERA_START_POSITION: Vec3 = Vec3::new(1.0, 1.0, 14.0);

pub const CLEAR_COLOR_HEX: &str = "#160920";

/// Upper bound for the device pixel ratio used by the renderer and the resolution uniform.
pub const MAX_PIXEL_RATIO: f32 = 2.0;

/// Fraction of the pending orbit rotation applied (and removed) each frame.
pub const ORBIT_DAMPING_FACTOR: f32 = 0.05;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_SPEED: f32 = 1.0;
pub const ORBIT_MIN_DISTANCE: f32 = 0.5;
pub const ORBIT_MAX_DISTANCE: f32 = 90.0;
pub const SCROLL_PIXELS_PER_LINE: f32 = 100.0;

pub const DEBUG_PANEL_WIDTH: f32 = 340.0;
pub const DEBUG_PANEL_COLLAPSED_WIDTH: f32 = 32.0;
