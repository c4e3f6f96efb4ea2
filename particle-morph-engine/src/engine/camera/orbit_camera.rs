use bevy::input::mouse::MouseScrollUnit;
use bevy::{
    input::mouse::{MouseMotion, MouseWheel},
    prelude::*,
    window::PrimaryWindow,
};

use constants::render_settings::{
    ORBIT_DAMPING_FACTOR, ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE, ORBIT_ROTATE_SPEED,
    ORBIT_ZOOM_SPEED, SCROLL_PIXELS_PER_LINE,
};

use crate::tools::debug_panel::state::PointerOverPanel;

/// Marks the camera the orbit controller and animation timeline drive.
#[derive(Component)]
pub struct SceneCamera;

const POLAR_EPSILON: f32 = 1e-6;

#[derive(Resource, Debug, Clone)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    // Pending spherical deltas, consumed by `update`.
    pub delta_theta: f32,
    pub delta_phi: f32,
    pub scale: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            enable_damping: true,
            damping_factor: ORBIT_DAMPING_FACTOR,
            rotate_speed: ORBIT_ROTATE_SPEED,
            zoom_speed: ORBIT_ZOOM_SPEED,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            delta_theta: 0.0,
            delta_phi: 0.0,
            scale: 1.0,
        }
    }
}

impl OrbitCamera {
    /// Rotate around the vertical axis through the target.
    pub fn rotate_left(&mut self, angle: f32) {
        self.delta_theta -= angle;
    }

    pub fn rotate_up(&mut self, angle: f32) {
        self.delta_phi -= angle;
    }

    /// Positive steps move towards the target.
    pub fn dolly(&mut self, steps: f32) {
        self.scale *= 0.95f32.powf(self.zoom_speed * steps);
    }

    /// Apply pending input to a camera at `position` and return the new position.
    pub fn update(&mut self, position: Vec3) -> Vec3 {
        let offset = position - self.target;
        let radius = offset.length();
        if radius <= f32::EPSILON {
            return position;
        }

        let mut theta = offset.x.atan2(offset.z);
        let mut phi = (offset.y / radius).clamp(-1.0, 1.0).acos();

        let factor = if self.enable_damping {
            self.damping_factor
        } else {
            1.0
        };
        theta += self.delta_theta * factor;
        phi = (phi + self.delta_phi * factor).clamp(POLAR_EPSILON, std::f32::consts::PI - POLAR_EPSILON);
        let radius = (radius * self.scale).clamp(self.min_distance, self.max_distance);

        if self.enable_damping {
            self.delta_theta *= 1.0 - self.damping_factor;
            self.delta_phi *= 1.0 - self.damping_factor;
        } else {
            self.delta_theta = 0.0;
            self.delta_phi = 0.0;
        }
        self.scale = 1.0;

        self.target
            + Vec3::new(
                radius * phi.sin() * theta.sin(),
                radius * phi.cos(),
                radius * phi.sin() * theta.cos(),
            )
    }
}

/// Wheel input in line steps. Browsers report pixels, about 100 per notch.
fn scroll_steps(unit: MouseScrollUnit, amount: f32) -> f32 {
    match unit {
        MouseScrollUnit::Line => amount,
        MouseScrollUnit::Pixel => amount / SCROLL_PIXELS_PER_LINE,
    }
}

pub fn orbit_camera_controller(
    mut camera_query: Query<&mut Transform, With<SceneCamera>>,
    mut orbit: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    windows: Query<&Window, With<PrimaryWindow>>,
    pointer_over_panel: Res<PointerOverPanel>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    let scroll_accum: f32 = scroll_events
        .read()
        .map(|ev| scroll_steps(ev.unit, ev.y))
        .sum();

    if !pointer_over_panel.0 {
        if mouse_button.pressed(MouseButton::Left) && mouse_delta != Vec2::ZERO {
            let height = windows
                .single()
                .map(|w| w.height())
                .unwrap_or(1.0)
                .max(1.0);
            let turn = std::f32::consts::TAU * orbit.rotate_speed / height;
            orbit.rotate_left(mouse_delta.x * turn);
            orbit.rotate_up(mouse_delta.y * turn);
        }

        if scroll_accum.abs() > f32::EPSILON {
            orbit.dolly(scroll_accum);
        }
    }

    let position = orbit.update(camera_transform.translation);
    camera_transform.translation = position;
    camera_transform.look_at(orbit.target, Vec3::Y);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_vec(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn idle_update_keeps_position() {
        let mut orbit = OrbitCamera::default();
        let start = Vec3::new(1.0, 1.0, 14.0);

        assert!(approx_vec(orbit.update(start), start));
    }

    #[test]
    fn rotation_preserves_distance_to_target() {
        let mut orbit = OrbitCamera::default();
        let mut position = Vec3::new(1.0, 1.0, 14.0);
        let radius = position.length();

        orbit.rotate_left(0.8);
        orbit.rotate_up(-0.3);
        for _ in 0..30 {
            position = orbit.update(position);
        }

        assert!((position.length() - radius).abs() < 1e-3);
        assert!(!approx_vec(position, Vec3::new(1.0, 1.0, 14.0)));
    }

    #[test]
    fn damping_spreads_rotation_over_frames() {
        let mut orbit = OrbitCamera::default();
        orbit.rotate_left(1.0);

        orbit.update(Vec3::new(0.0, 0.0, 10.0));

        assert!((orbit.delta_theta + 0.95).abs() < 1e-6);
    }

    #[test]
    fn without_damping_input_is_applied_at_once() {
        let mut orbit = OrbitCamera {
            enable_damping: false,
            ..default()
        };
        orbit.rotate_left(-std::f32::consts::FRAC_PI_2);

        let position = orbit.update(Vec3::new(0.0, 0.0, 10.0));

        assert!(approx_vec(position, Vec3::new(10.0, 0.0, 0.0)));
        assert_eq!(orbit.delta_theta, 0.0);
    }

    #[test]
    fn polar_angle_is_clamped_above_the_pole() {
        let mut orbit = OrbitCamera {
            enable_damping: false,
            ..default()
        };
        orbit.rotate_up(10.0);

        let position = orbit.update(Vec3::new(0.0, 0.0, 10.0));

        assert!(position.y > 9.99);
        assert!(position.y <= 10.0);
    }

    #[test]
    fn dolly_respects_distance_limits() {
        let mut orbit = OrbitCamera::default();
        orbit.dolly(1_000.0);
        let close = orbit.update(Vec3::new(0.0, 0.0, 10.0));
        assert!((close.length() - ORBIT_MIN_DISTANCE).abs() < 1e-4);

        orbit.dolly(-1_000.0);
        let far = orbit.update(close);
        assert!((far.length() - ORBIT_MAX_DISTANCE).abs() < 1e-2);
    }

    #[test]
    fn pixel_notch_dollies_like_one_line() {
        let notch = scroll_steps(MouseScrollUnit::Pixel, 100.0);
        assert!((notch - scroll_steps(MouseScrollUnit::Line, 1.0)).abs() < 1e-6);

        let mut by_pixels = OrbitCamera::default();
        let mut by_lines = OrbitCamera::default();
        by_pixels.dolly(notch);
        by_lines.dolly(1.0);
        let start = Vec3::new(0.0, 0.0, 10.0);
        assert_eq!(by_pixels.update(start), by_lines.update(start));
    }
}
