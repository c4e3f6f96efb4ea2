use super::easing::{Ease, EaseParseError};
use super::timeline::{Position, Timeline, TweenTarget};

/// The morph reveal played by the "animate" action.
///
/// Particles sweep in from far outside the morph window while the camera drifts,
/// settle at the origin mesh, cross to the target mesh, then scatter out slowly on a
/// strong ease-out while the camera pulls aside.
pub fn morph_sequence() -> Result<Timeline, EaseParseError> {
    let linear: Ease = "linear".parse()?;
    let power4: Ease = "power4".parse()?;

    Ok(Timeline::new()
        .from_to(TweenTarget::Progress, -7.0, 0.0, 5.0, linear, Position::End)
        .to(TweenTarget::CameraX, 1.0, 5.0, linear, Position::WithPrevious)
        .pause(1.5)
        .to(TweenTarget::Progress, 1.0, 2.0, linear, Position::End)
        .to(TweenTarget::CameraX, -1.0, 2.0, linear, Position::WithPrevious)
        .to(TweenTarget::CameraZ, 14.0, 2.0, linear, Position::WithPrevious)
        .pause(1.5)
        .to(TweenTarget::Progress, 20.0, 50.0, power4, Position::End)
        .to(TweenTarget::CameraX, 3.0, 50.0, power4, Position::WithPrevious))
}
