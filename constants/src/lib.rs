//! Compile-time defaults shared by the particle morph engine.
//!
//! Values here mirror the hardcoded scene the viewer was built around. Anything a
//! deployment may want to change at runtime is also exposed through the JSON scene
//! config, which falls back to these constants.

pub mod particles;
pub mod path;
pub mod render_settings;
