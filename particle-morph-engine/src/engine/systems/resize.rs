use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use constants::render_settings::MAX_PIXEL_RATIO;

use crate::engine::camera::orbit_camera::SceneCamera;
use crate::engine::parameters::{ParticleParameters, pixel_ratio, viewport_resolution};

/// Keep the pixel ratio capped, the camera aspect in step with the window and the
/// resolution uniform in physical pixels.
pub fn handle_viewport_resize(
    mut resized: EventReader<WindowResized>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
    mut params: ResMut<ParticleParameters>,
    mut projections: Query<&mut Projection, With<SceneCamera>>,
    mut initialised: Local<bool>,
) {
    let resize_seen = resized.read().count() > 0;
    if !resize_seen && *initialised {
        return;
    }
    let Ok(mut window) = windows.single_mut() else {
        return;
    };
    *initialised = true;

    let base_scale = window.resolution.base_scale_factor();
    if base_scale > MAX_PIXEL_RATIO
        && window.resolution.scale_factor_override() != Some(MAX_PIXEL_RATIO)
    {
        window.resolution.set_scale_factor_override(Some(MAX_PIXEL_RATIO));
    }

    let (width, height) = (window.width(), window.height());
    if width <= 0.0 || height <= 0.0 {
        return;
    }

    for mut projection in &mut projections {
        if let Projection::Perspective(perspective) = projection.as_mut() {
            perspective.aspect_ratio = width / height;
        }
    }

    let resolution = viewport_resolution(width, height, base_scale);
    if params.resolution != resolution {
        params.resolution = resolution;
        info!(
            "Viewport {}x{} at pixel ratio {}, resolution uniform {}x{}",
            width,
            height,
            pixel_ratio(base_scale),
            resolution.x,
            resolution.y
        );
    }
}
