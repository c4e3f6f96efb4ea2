//! Debug panel for live tuning of the particle scene.
//!
//! A collapsible side panel docked to the right edge with the clear colour, the morph
//! progress slider, the animate button and both particle colours. Every control reads
//! its value back each frame, so changes made by the timeline or web RPC show up.

/// Button and slider interactions, plus the native keyboard shortcut.
pub mod interactions;

/// Panel resources, marker components and slider value mapping.
pub mod state;

/// Panel spawning and per-frame reflection of bound values.
pub mod ui;

use bevy::prelude::*;

use crate::engine::animation::{advance_timeline, start_animation_on_request};
use crate::engine::core::app_state::AppState;

pub use state::{DebugPanelState, PointerOverPanel};

use ui::{apply_collapse_state, reflect_colour_rows, reflect_slider_values, spawn_debug_panel};

use interactions::{
    animate_button_interaction, collapse_button_interaction, slider_drag_interaction,
    update_pointer_over_panel,
};

// Registers the debug panel, its resources and systems.
pub struct DebugPanelPlugin;

impl Plugin for DebugPanelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugPanelState>()
            .init_resource::<PointerOverPanel>()
            .add_systems(OnEnter(AppState::Running), spawn_debug_panel)
            .add_systems(
                Update,
                (
                    // Input, ahead of the timeline so requests start this frame
                    update_pointer_over_panel,
                    collapse_button_interaction,
                    animate_button_interaction,
                    slider_drag_interaction,
                )
                    .before(start_animation_on_request)
                    .run_if(in_state(AppState::Running)),
            )
            .add_systems(
                Update,
                (apply_collapse_state, reflect_slider_values, reflect_colour_rows)
                    .after(advance_timeline)
                    .run_if(in_state(AppState::Running)),
            );

        #[cfg(not(target_arch = "wasm32"))]
        {
            use interactions::animate_keyboard_shortcut;
            app.add_systems(
                Update,
                animate_keyboard_shortcut
                    .before(start_animation_on_request)
                    .run_if(in_state(AppState::Running)),
            );
        }
    }
}
