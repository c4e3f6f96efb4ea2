//! Interactive tools for tuning the particle scene.
//!
//! ## Debug Panel
//!
//! - **Placement**: docked to the right edge, collapsible from its header chevron
//! - **Controls**: clear colour, morph progress, animate button, particle colours A and B
//! - **Shortcut**: `Space` triggers animate on native builds
//! - **Input**: while the cursor is over the panel the orbit camera ignores the mouse
//!
//! ```text
//! Panel / RPC / Space
//!   └─> AnimateRequestEvent
//!       └─> start_animation_on_request()
//!           └─> advance_timeline() writes progress and camera position
//!               └─> sync_particle_uniforms()
//! ```

/// Debug panel UI, state and interactions.
pub mod debug_panel;
