use bevy::prelude::*;
use bevy::ui::RelativeCursorPosition;

use super::state::*;
use crate::engine::animation::AnimateRequestEvent;
use crate::engine::parameters::ParticleParameters;

// Chevron icon toggles collapse state
pub fn collapse_button_interaction(
    mut q: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<Button>, With<CollapseButton>)>,
    mut state: ResMut<DebugPanelState>,
) {
    for (interaction, mut bg) in &mut q {
        match *interaction {
            Interaction::Pressed => { state.collapsed = !state.collapsed; *bg = BackgroundColor(Color::srgb(0.18, 0.20, 0.24)); }
            Interaction::Hovered => *bg = BackgroundColor(Color::srgb(0.26, 0.28, 0.32)),
            Interaction::None    => *bg = BackgroundColor(Color::srgb(0.22, 0.24, 0.28)),
        }
    }
}

// Animate button (re)starts the morph sequence
pub fn animate_button_interaction(
    mut q: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<Button>, With<AnimateButton>)>,
    mut animate_events: EventWriter<AnimateRequestEvent>,
) {
    for (interaction, mut bg) in &mut q {
        match *interaction {
            Interaction::Pressed => { animate_events.write(AnimateRequestEvent); *bg = BackgroundColor(Color::srgb(0.18, 0.20, 0.24)); }
            Interaction::Hovered => *bg = BackgroundColor(Color::srgb(0.26, 0.28, 0.32)),
            Interaction::None    => *bg = BackgroundColor(Color::srgb(0.22, 0.24, 0.28)),
        }
    }
}

// A pressed track keeps tracking the cursor until the button is released
pub fn slider_drag_interaction(
    sliders: Query<(&Interaction, &RelativeCursorPosition, &Slider)>,
    mut params: ResMut<ParticleParameters>,
    mut clear_color: ResMut<ClearColor>,
) {
    for (interaction, cursor, slider) in &sliders {
        if *interaction != Interaction::Pressed { continue; }
        let Some(normalized) = cursor.normalized else { continue; };

        let value = slider.value_from_fraction(normalized.x);
        slider.binding.write(value, &mut params, &mut clear_color);
    }
}

pub fn update_pointer_over_panel(
    panels: Query<&RelativeCursorPosition, With<DebugPanelRoot>>,
    sliders: Query<&Interaction, With<Slider>>,
    mut pointer_over_panel: ResMut<PointerOverPanel>,
) {
    let over = panels.iter().any(RelativeCursorPosition::mouse_over)
        || sliders.iter().any(|interaction| *interaction == Interaction::Pressed);
    if pointer_over_panel.0 != over {
        pointer_over_panel.0 = over;
    }
}

// Space bar mirrors the animate button on native builds
#[cfg(not(target_arch = "wasm32"))]
pub fn animate_keyboard_shortcut(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut animate_events: EventWriter<AnimateRequestEvent>,
) {
    if keyboard.just_pressed(KeyCode::Space) {
        animate_events.write(AnimateRequestEvent);
    }
}
