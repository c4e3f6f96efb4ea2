//! Asset loading and initialisation systems for the particle scene.
//!
//! Manages the loading pipeline from scene config parsing through model loading to
//! particle creation, with progress tracking for the state transition.

/// Scene config loading and parameter initialisation from JSON.
///
/// Requests the model once the config (or its built-in fallback) is in place.
pub mod config_loader;

/// Model load state monitoring and failure reporting.
pub mod model_loader;

/// Particle entity creation from the loaded model.
///
/// Extracts and pads vertex positions, then builds the particle mesh and material.
pub mod particle_creator;

/// Loading progress tracking resource for state transitions.
pub mod progress;
