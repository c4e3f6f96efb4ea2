use std::str::FromStr;

use bevy::math::curve::{Curve, EaseFunction};
use thiserror::Error;

/// Named easing curves, spelled the way timeline authors write them:
/// `linear`, `sine`, `power0`..`power4`, `expo`, with an optional `.in`, `.out` or
/// `.inOut` suffix. A bare name means `.out`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ease {
    curve: EaseFunction,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EaseParseError {
    #[error("unknown ease '{0}'")]
    UnknownCurve(String),
    #[error("unknown ease direction '{0}', expected in, out or inOut")]
    UnknownDirection(String),
}

#[derive(Clone, Copy)]
enum Direction {
    In,
    Out,
    InOut,
}

impl Ease {
    pub const LINEAR: Ease = Ease {
        curve: EaseFunction::Linear,
    };

    /// Eased value of `t`, clamped to `[0, 1]`.
    pub fn sample(&self, t: f32) -> f32 {
        self.curve.sample_clamped(t)
    }
}

impl Default for Ease {
    fn default() -> Self {
        Ease::LINEAR
    }
}

impl FromStr for Ease {
    type Err = EaseParseError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let (family, direction) = match name.split_once('.') {
            Some((family, suffix)) => {
                let direction = match suffix {
                    "in" => Direction::In,
                    "out" => Direction::Out,
                    "inOut" => Direction::InOut,
                    other => return Err(EaseParseError::UnknownDirection(other.to_string())),
                };
                (family, direction)
            }
            None => (name, Direction::Out),
        };

        use Direction::*;
        use EaseFunction as F;
        let curve = match (family, direction) {
            ("linear" | "none" | "power0", _) => F::Linear,
            ("power1", In) => F::QuadraticIn,
            ("power1", Out) => F::QuadraticOut,
            ("power1", InOut) => F::QuadraticInOut,
            ("power2", In) => F::CubicIn,
            ("power2", Out) => F::CubicOut,
            ("power2", InOut) => F::CubicInOut,
            ("power3", In) => F::QuarticIn,
            ("power3", Out) => F::QuarticOut,
            ("power3", InOut) => F::QuarticInOut,
            ("power4", In) => F::QuinticIn,
            ("power4", Out) => F::QuinticOut,
            ("power4", InOut) => F::QuinticInOut,
            ("sine", In) => F::SineIn,
            ("sine", Out) => F::SineOut,
            ("sine", InOut) => F::SineInOut,
            ("expo", In) => F::ExponentialIn,
            ("expo", Out) => F::ExponentialOut,
            ("expo", InOut) => F::ExponentialInOut,
            (other, _) => return Err(EaseParseError::UnknownCurve(other.to_string())),
        };

        Ok(Ease { curve })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_power_names_ease_out() {
        let ease: Ease = "power4".parse().unwrap();

        assert_eq!(ease.curve, EaseFunction::QuinticOut);
        // Quintic out covers almost all of the distance in the first half.
        assert!((ease.sample(0.5) - (1.0 - 0.5f32.powi(5))).abs() < 1e-6);
    }

    #[test]
    fn direction_suffixes() {
        assert_eq!(
            "power2.in".parse::<Ease>().unwrap().curve,
            EaseFunction::CubicIn
        );
        assert_eq!(
            "sine.inOut".parse::<Ease>().unwrap().curve,
            EaseFunction::SineInOut
        );
        assert_eq!("none".parse::<Ease>().unwrap(), Ease::LINEAR);
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(
            "bounce".parse::<Ease>(),
            Err(EaseParseError::UnknownCurve("bounce".to_string()))
        );
        assert_eq!(
            "power2.sideways".parse::<Ease>(),
            Err(EaseParseError::UnknownDirection("sideways".to_string()))
        );
    }

    #[test]
    fn endpoints_are_fixed_and_input_is_clamped() {
        for name in ["linear", "power1.in", "power3.inOut", "power4", "sine", "expo.in"] {
            let ease: Ease = name.parse().unwrap();
            assert!(ease.sample(0.0).abs() < 1e-3, "{name} at 0");
            assert!((ease.sample(1.0) - 1.0).abs() < 1e-3, "{name} at 1");
            assert_eq!(ease.sample(-3.0), ease.sample(0.0));
            assert_eq!(ease.sample(7.0), ease.sample(1.0));
        }
    }
}
