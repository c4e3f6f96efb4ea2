//! Core runtime systems for viewport, uniform and diagnostics upkeep.

/// FPS tracking and notification systems for performance monitoring.
///
/// Sends frame rate updates to the host page via RPC and updates the native overlay.
pub mod fps_tracking;

/// Viewport resize handling: pixel ratio cap, camera aspect, resolution uniform.
pub mod resize;

/// Pushes shader parameter changes into the particle material.
pub mod uniform_sync;
