//! Scene camera navigation.
//!
//! Provides damped orbit controls around a fixed target. The controller re-derives its
//! state from the camera transform each frame, so animation tweens of the camera
//! position and user input compose.

/// Orbit camera resource, marker component and controller system.
pub mod orbit_camera;
