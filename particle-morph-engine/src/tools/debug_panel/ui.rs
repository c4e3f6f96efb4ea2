use bevy::prelude::*;
use bevy::ui::RelativeCursorPosition;

use super::state::*;
use crate::engine::parameters::{ColorTarget, ParticleParameters};

const TEXT_COLOUR: Color = Color::srgb(1.0, 1.0, 1.0);
const MUTED_TEXT_COLOUR: Color = Color::srgb(0.70, 0.72, 0.76);
const BUTTON_COLOUR: Color = Color::srgb(0.22, 0.24, 0.28);
const TRACK_COLOUR: Color = Color::srgb(0.18, 0.19, 0.22);
const FILL_COLOUR: Color = Color::srgb(0.18, 0.53, 0.85);

// Spawns the debug panel with header, colour rows, progress slider and animate button
pub fn spawn_debug_panel(mut commands: Commands, state: Res<DebugPanelState>) {
    let width = if state.collapsed { state.closed_width } else { state.open_width };
    let body_display = if state.collapsed { Display::None } else { Display::Flex };

    commands
        .spawn((
            DebugPanelRoot,
            Name::new("DebugPanel"),
            RelativeCursorPosition::default(),
            BackgroundColor(Color::srgba(0.10, 0.11, 0.13, 0.94)),
            Node {
                width: Val::Px(width),
                min_width: Val::Px(0.0),
                position_type: PositionType::Absolute,
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Stretch,
                justify_content: JustifyContent::FlexStart,
                overflow: Overflow::clip(),
                ..default()
            },
        ))
        .with_children(|parent| {
            let (pad, btn) = if state.collapsed { (4.0, 24.0) } else { (10.0, 24.0) };

            parent
                .spawn((
                    HeaderNode,
                    Name::new("Header"),
                    BackgroundColor(Color::srgb(0.14, 0.16, 0.20)),
                    Node {
                        width: Val::Percent(100.0),
                        padding: UiRect::all(Val::Px(pad)),
                        display: Display::Flex,
                        align_items: AlignItems::Center,
                        justify_content: if state.collapsed { JustifyContent::FlexEnd } else { JustifyContent::SpaceBetween },
                        ..default()
                    },
                ))
                .with_children(|header| {
                    header.spawn((
                        TitleText,
                        Name::new("Title"),
                        Text::new("Controls"),
                        TextFont { font_size: 16.0, ..default() },
                        TextColor(TEXT_COLOUR),
                        Node { display: if state.collapsed { Display::None } else { Display::Flex }, ..default() },
                    ));

                    let chevron = if state.collapsed { "<" } else { ">" };
                    header
                        .spawn((
                            CollapseButton,
                            Name::new("CollapseButton"),
                            Button,
                            BackgroundColor(BUTTON_COLOUR),
                            BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
                            Node {
                                width: Val::Px(btn),
                                height: Val::Px(btn),
                                display: Display::Flex,
                                align_items: AlignItems::Center,
                                justify_content: JustifyContent::Center,
                                border: UiRect::all(Val::Px(1.0)),
                                ..default()
                            },
                        ))
                        .with_children(|btn_parent| {
                            btn_parent.spawn((
                                CollapseLabel,
                                Text::new(chevron),
                                TextFont { font_size: 16.0, ..default() },
                                TextColor(TEXT_COLOUR),
                            ));
                        });
                });

            parent
                .spawn((
                    DebugPanelBody,
                    Name::new("Body"),
                    Node {
                        width: Val::Percent(100.0),
                        padding: UiRect::axes(Val::Px(10.0), Val::Px(8.0)),
                        row_gap: Val::Px(6.0),
                        display: body_display,
                        flex_direction: FlexDirection::Column,
                        ..default()
                    },
                ))
                .with_children(|body| {
                    spawn_colour_row(body, ColorTarget::Clear);
                    spawn_slider_row(body, Slider::progress(), "progress");
                    spawn_animate_button(body);
                    spawn_colour_row(body, ColorTarget::A);
                    spawn_colour_row(body, ColorTarget::B);
                });
        });
}

fn spawn_animate_button(body: &mut ChildSpawnerCommands) {
    body.spawn((
        AnimateButton,
        Button,
        Name::new("AnimateButton"),
        BackgroundColor(BUTTON_COLOUR),
        BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
        Node {
            width: Val::Percent(100.0),
            height: Val::Px(30.0),
            display: Display::Flex,
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
            border: UiRect::all(Val::Px(1.0)),
            ..default()
        },
    ))
    .with_children(|btn| {
        btn.spawn((
            Text::new("animate"),
            TextFont { font_size: 14.0, ..default() },
            TextColor(TEXT_COLOUR),
        ));
    });
}

// Label, swatch and hex value, followed by one slider per channel
fn spawn_colour_row(body: &mut ChildSpawnerCommands, target: ColorTarget) {
    body.spawn((
        Name::new(format!("{}Row", target.label())),
        Node {
            width: Val::Percent(100.0),
            column_gap: Val::Px(8.0),
            margin: UiRect::top(Val::Px(4.0)),
            display: Display::Flex,
            align_items: AlignItems::Center,
            ..default()
        },
    ))
    .with_children(|row| {
        row.spawn((
            Text::new(target.label()),
            TextFont { font_size: 14.0, ..default() },
            TextColor(TEXT_COLOUR),
            Node { width: Val::Px(96.0), ..default() },
        ));
        row.spawn((
            ColorSwatch(target),
            BackgroundColor(Color::BLACK),
            BorderColor(Color::srgba(1.0, 1.0, 1.0, 0.3)),
            Node {
                width: Val::Px(18.0),
                height: Val::Px(18.0),
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
        ));
        row.spawn((
            HexLabel(target),
            Text::new(""),
            TextFont { font_size: 14.0, ..default() },
            TextColor(MUTED_TEXT_COLOUR),
        ));
    });

    for channel in ColorChannel::ALL {
        spawn_slider_row(body, Slider::channel(target, channel), channel.label());
    }
}

fn spawn_slider_row(body: &mut ChildSpawnerCommands, slider: Slider, label: &str) {
    body.spawn(Node {
        width: Val::Percent(100.0),
        column_gap: Val::Px(8.0),
        display: Display::Flex,
        align_items: AlignItems::Center,
        ..default()
    })
    .with_children(|row| {
        row.spawn((
            Text::new(label),
            TextFont { font_size: 13.0, ..default() },
            TextColor(MUTED_TEXT_COLOUR),
            Node { width: Val::Px(96.0), ..default() },
        ));

        // Track: pressed state and cursor position drive the value
        row.spawn((
            slider,
            Interaction::default(),
            RelativeCursorPosition::default(),
            BackgroundColor(TRACK_COLOUR),
            Node {
                flex_grow: 1.0,
                height: Val::Px(14.0),
                overflow: Overflow::clip(),
                ..default()
            },
        ))
        .with_children(|track| {
            track.spawn((
                SliderFill(slider),
                BackgroundColor(FILL_COLOUR),
                Node {
                    width: Val::Percent(0.0),
                    height: Val::Percent(100.0),
                    ..default()
                },
            ));
        });

        row.spawn((
            ValueLabel(slider.binding),
            Text::new(""),
            TextFont { font_size: 13.0, ..default() },
            TextColor(TEXT_COLOUR),
            Node { width: Val::Px(56.0), ..default() },
        ));
    });
}

pub fn apply_collapse_state(
    state: Res<DebugPanelState>,
    mut nodes: ParamSet<(
        Query<&mut Node, With<DebugPanelRoot>>,
        Query<&mut Node, With<DebugPanelBody>>,
        Query<&mut Node, With<HeaderNode>>,
        Query<&mut Node, With<TitleText>>,
    )>,
    mut chevrons: Query<&mut Text, With<CollapseLabel>>,
) {
    if !state.is_changed() { return; }

    if let Ok(mut n) = nodes.p0().single_mut() {
        n.width = Val::Px(if state.collapsed { state.closed_width } else { state.open_width });
    }
    if let Ok(mut n) = nodes.p1().single_mut() {
        n.display = if state.collapsed { Display::None } else { Display::Flex };
    }
    if let Ok(mut n) = nodes.p2().single_mut() {
        let pad = if state.collapsed { 4.0 } else { 10.0 };
        n.padding = UiRect::all(Val::Px(pad));
        n.justify_content = if state.collapsed { JustifyContent::FlexEnd } else { JustifyContent::SpaceBetween };
    }
    if let Ok(mut n) = nodes.p3().single_mut() {
        n.display = if state.collapsed { Display::None } else { Display::Flex };
    }
    for mut t in &mut chevrons {
        *t = Text::new(if state.collapsed { "<" } else { ">" });
    }
}

// Sliders follow their bound value every frame, so timeline changes show up
pub fn reflect_slider_values(
    params: Res<ParticleParameters>,
    clear_color: Res<ClearColor>,
    mut fills: Query<(&mut Node, &SliderFill)>,
    mut labels: Query<(&mut Text, &ValueLabel)>,
) {
    for (mut node, fill) in &mut fills {
        let value = fill.0.binding.read(&params, &clear_color);
        let width = Val::Percent(fill.0.fraction_from_value(value) * 100.0);
        if node.width != width {
            node.width = width;
        }
    }
    for (mut text, label) in &mut labels {
        let formatted = label.0.format(label.0.read(&params, &clear_color));
        if text.0 != formatted {
            text.0 = formatted;
        }
    }
}

pub fn reflect_colour_rows(
    params: Res<ParticleParameters>,
    clear_color: Res<ClearColor>,
    mut swatches: Query<(&mut BackgroundColor, &ColorSwatch)>,
    mut hex_labels: Query<(&mut Text, &HexLabel)>,
) {
    if !params.is_changed() && !clear_color.is_changed() { return; }

    for (mut bg, swatch) in &mut swatches {
        *bg = BackgroundColor(swatch.0.get(&params, &clear_color).into());
    }
    for (mut text, label) in &mut hex_labels {
        text.0 = label.0.get(&params, &clear_color).to_hex();
    }
}
