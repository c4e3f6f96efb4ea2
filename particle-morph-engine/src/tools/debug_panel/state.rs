use bevy::prelude::*;

use constants::particles::{
    COLOR_CHANNEL_STEP, PROGRESS_SLIDER_MAX, PROGRESS_SLIDER_MIN, PROGRESS_SLIDER_STEP,
};
use constants::render_settings::{DEBUG_PANEL_COLLAPSED_WIDTH, DEBUG_PANEL_WIDTH};

use crate::engine::parameters::{ColorTarget, ParticleParameters};

// Resources
#[derive(Resource)]
pub struct DebugPanelState {
    pub collapsed: bool,
    pub open_width: f32,
    pub closed_width: f32,
}
impl Default for DebugPanelState {
    fn default() -> Self {
        Self {
            collapsed: false,
            open_width: DEBUG_PANEL_WIDTH,
            closed_width: DEBUG_PANEL_COLLAPSED_WIDTH,
        }
    }
}

/// True while the cursor is over the panel or a slider is being dragged. Scene camera
/// input is ignored meanwhile.
#[derive(Resource, Default)]
pub struct PointerOverPanel(pub bool);

// Components
#[derive(Component)]
pub struct DebugPanelRoot;
#[derive(Component)]
pub struct DebugPanelBody;
#[derive(Component)]
pub struct HeaderNode;
#[derive(Component)]
pub struct TitleText;
#[derive(Component)]
pub struct CollapseButton;
#[derive(Component)]
pub struct CollapseLabel;
#[derive(Component)]
pub struct AnimateButton;
#[derive(Component)]
pub struct SliderFill(pub Slider);
#[derive(Component)]
pub struct ValueLabel(pub SliderBinding);
#[derive(Component)]
pub struct ColorSwatch(pub ColorTarget);
#[derive(Component)]
pub struct HexLabel(pub ColorTarget);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChannel {
    Red,
    Green,
    Blue,
}

impl ColorChannel {
    pub const ALL: [ColorChannel; 3] = [ColorChannel::Red, ColorChannel::Green, ColorChannel::Blue];

    pub fn label(self) -> &'static str {
        match self {
            ColorChannel::Red => "R",
            ColorChannel::Green => "G",
            ColorChannel::Blue => "B",
        }
    }

    pub fn get(self, colour: Srgba) -> f32 {
        match self {
            ColorChannel::Red => colour.red,
            ColorChannel::Green => colour.green,
            ColorChannel::Blue => colour.blue,
        }
    }

    pub fn with(self, colour: Srgba, value: f32) -> Srgba {
        match self {
            ColorChannel::Red => colour.with_red(value),
            ColorChannel::Green => colour.with_green(value),
            ColorChannel::Blue => colour.with_blue(value),
        }
    }
}

/// The value a slider edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderBinding {
    Progress,
    Channel(ColorTarget, ColorChannel),
}

impl SliderBinding {
    pub fn read(self, params: &ParticleParameters, clear_color: &ClearColor) -> f32 {
        match self {
            SliderBinding::Progress => params.progress,
            SliderBinding::Channel(target, channel) => channel.get(target.get(params, clear_color)),
        }
    }

    /// Write `value`, leaving resources untouched when nothing changes.
    pub fn write(
        self,
        value: f32,
        params: &mut ResMut<ParticleParameters>,
        clear_color: &mut ResMut<ClearColor>,
    ) {
        if self.read(params, clear_color) == value {
            return;
        }
        match self {
            SliderBinding::Progress => params.progress = value,
            SliderBinding::Channel(target, channel) => {
                let colour = channel.with(target.get(params, clear_color), value);
                target.set(colour, params, clear_color);
            }
        }
    }

    pub fn format(self, value: f32) -> String {
        match self {
            SliderBinding::Progress => format!("{value:.4}"),
            SliderBinding::Channel(..) => format!("{}", (value * 255.0).round() as i32),
        }
    }
}

/// A horizontal slider over `[min, max]` snapping to multiples of `step`.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Slider {
    pub binding: SliderBinding,
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl Slider {
    pub fn progress() -> Self {
        Self {
            binding: SliderBinding::Progress,
            min: PROGRESS_SLIDER_MIN,
            max: PROGRESS_SLIDER_MAX,
            step: PROGRESS_SLIDER_STEP,
        }
    }

    pub fn channel(target: ColorTarget, channel: ColorChannel) -> Self {
        Self {
            binding: SliderBinding::Channel(target, channel),
            min: 0.0,
            max: 1.0,
            step: COLOR_CHANNEL_STEP,
        }
    }

    /// Value under a cursor at `fraction` of the track width.
    pub fn value_from_fraction(&self, fraction: f32) -> f32 {
        let fraction = fraction.clamp(0.0, 1.0);
        let raw = self.min + fraction * (self.max - self.min);
        if self.step <= 0.0 {
            return raw;
        }
        let snapped = self.min + ((raw - self.min) / self.step).round() * self.step;
        snapped.clamp(self.min, self.max)
    }

    /// Filled share of the track for `value`; values outside the range pin to an end.
    pub fn fraction_from_value(&self, value: f32) -> f32 {
        if self.max <= self.min {
            return 0.0;
        }
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_slider_snaps_to_step() {
        let slider = Slider::progress();

        assert_eq!(slider.value_from_fraction(0.0), 0.0);
        assert_eq!(slider.value_from_fraction(1.0), 1.0);
        let v = slider.value_from_fraction(0.123_456);
        assert!((v - 0.1235).abs() < 1e-6);
    }

    #[test]
    fn fraction_is_clamped_both_ways() {
        let slider = Slider::progress();

        assert_eq!(slider.value_from_fraction(-0.5), 0.0);
        assert_eq!(slider.value_from_fraction(3.0), 1.0);
        // The timeline drives progress far outside the slider range.
        assert_eq!(slider.fraction_from_value(-7.0), 0.0);
        assert_eq!(slider.fraction_from_value(20.0), 1.0);
        assert!((slider.fraction_from_value(0.25) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn channel_slider_uses_byte_steps() {
        let slider = Slider::channel(ColorTarget::A, ColorChannel::Green);
        let v = slider.value_from_fraction(0.5);

        assert!(((v * 255.0) - (v * 255.0).round()).abs() < 1e-3);
        assert_eq!(slider.binding.format(1.0), "255");
    }

    #[test]
    fn channel_binding_reads_the_right_colour() {
        let params = ParticleParameters::default();
        let clear = ClearColor(Color::srgb(0.25, 0.5, 0.75));

        let a_red = SliderBinding::Channel(ColorTarget::A, ColorChannel::Red);
        let b_green = SliderBinding::Channel(ColorTarget::B, ColorChannel::Green);
        let clear_blue = SliderBinding::Channel(ColorTarget::Clear, ColorChannel::Blue);

        assert_eq!(a_red.read(&params, &clear), 1.0);
        assert_eq!(b_green.read(&params, &clear), 1.0);
        assert!((clear_blue.read(&params, &clear) - 0.75).abs() < 1e-6);
    }
}
