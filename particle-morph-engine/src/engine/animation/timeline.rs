use super::easing::Ease;

/// Scalar properties a timeline can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TweenTarget {
    Progress,
    CameraX,
    CameraZ,
}

/// Read/write access to the live values behind each [`TweenTarget`].
pub trait TweenTargets {
    fn get(&self, target: TweenTarget) -> f32;
    fn set(&mut self, target: TweenTarget, value: f32);
}

/// Where a tween is placed on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Position {
    /// After everything added so far.
    #[default]
    End,
    /// Same start time as the previously added tween or pause.
    WithPrevious,
}

#[derive(Debug, Clone)]
struct Tween {
    target: TweenTarget,
    start: f32,
    duration: f32,
    /// Explicit start value. `None` means capture the live value on first render.
    from: Option<f32>,
    captured: Option<f32>,
    to: f32,
    ease: Ease,
}

impl Tween {
    fn end(&self) -> f32 {
        self.start + self.duration
    }

    fn progress_at(&self, time: f32) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((time - self.start) / self.duration).clamp(0.0, 1.0)
    }
}

/// A sequence of eased value transitions with overlapping segments.
///
/// Built once, then driven by [`Timeline::advance`]. Tweens render while the playhead is
/// inside them and once more on the frame it leaves them, so values settle on their end
/// state and are left alone afterwards.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    tweens: Vec<Tween>,
    duration: f32,
    last_start: f32,
    elapsed: f32,
    started: bool,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tween from an explicit value. The start value is applied as soon as playback
    /// begins, even if the tween itself starts later.
    pub fn from_to(
        self,
        target: TweenTarget,
        from: f32,
        to: f32,
        duration: f32,
        ease: Ease,
        position: Position,
    ) -> Self {
        self.push(target, Some(from), to, duration, ease, position)
    }

    /// Tween from whatever the target holds when the tween first becomes active.
    pub fn to(
        self,
        target: TweenTarget,
        to: f32,
        duration: f32,
        ease: Ease,
        position: Position,
    ) -> Self {
        self.push(target, None, to, duration, ease, position)
    }

    /// Empty spacer appended at the end of the timeline.
    pub fn pause(mut self, duration: f32) -> Self {
        self.last_start = self.duration;
        self.duration += duration.max(0.0);
        self
    }

    fn push(
        mut self,
        target: TweenTarget,
        from: Option<f32>,
        to: f32,
        duration: f32,
        ease: Ease,
        position: Position,
    ) -> Self {
        let start = match position {
            Position::End => self.duration,
            Position::WithPrevious => self.last_start,
        };
        let duration = duration.max(0.0);

        self.tweens.push(Tween {
            target,
            start,
            duration,
            from,
            captured: None,
            to,
            ease,
        });
        self.last_start = start;
        self.duration = self.duration.max(start + duration);
        self
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn is_finished(&self) -> bool {
        self.started && self.elapsed >= self.duration
    }

    /// Rewind to the start, forgetting any captured start values.
    pub fn restart(&mut self) {
        self.elapsed = 0.0;
        self.started = false;
        for tween in &mut self.tweens {
            tween.captured = None;
        }
    }

    /// Move the playhead forward by `delta` seconds and write the new values.
    /// Returns `true` once the end of the timeline has been rendered.
    pub fn advance(&mut self, delta: f32, targets: &mut impl TweenTargets) -> bool {
        if self.is_finished() {
            return true;
        }

        if !self.started {
            for tween in &self.tweens {
                if let Some(from) = tween.from {
                    targets.set(tween.target, from);
                }
            }
            self.render(0.0, f32::NEG_INFINITY, targets);
            self.started = true;
        }

        let previous = self.elapsed;
        self.elapsed = (self.elapsed + delta.max(0.0)).min(self.duration);
        if self.elapsed > previous {
            self.render(self.elapsed, previous, targets);
        }

        self.is_finished()
    }

    fn render(&mut self, time: f32, previous: f32, targets: &mut impl TweenTargets) {
        for tween in &mut self.tweens {
            if time < tween.start || previous >= tween.end() {
                continue;
            }

            let from = match (tween.from, tween.captured) {
                (Some(from), _) => from,
                (None, Some(captured)) => captured,
                (None, None) => {
                    let live = targets.get(tween.target);
                    tween.captured = Some(live);
                    live
                }
            };

            let eased = tween.ease.sample(tween.progress_at(time));
            targets.set(tween.target, from + (tween.to - from) * eased);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct Values(HashMap<TweenTarget, f32>);

    impl TweenTargets for Values {
        fn get(&self, target: TweenTarget) -> f32 {
            self.0.get(&target).copied().unwrap_or(0.0)
        }

        fn set(&mut self, target: TweenTarget, value: f32) {
            self.0.insert(target, value);
        }
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn positions_follow_end_previous_and_pause() {
        let timeline = Timeline::new()
            .from_to(TweenTarget::Progress, 0.0, 1.0, 2.0, Ease::LINEAR, Position::End)
            .to(TweenTarget::CameraX, 5.0, 1.0, Ease::LINEAR, Position::WithPrevious)
            .pause(0.5)
            .to(TweenTarget::Progress, 3.0, 1.0, Ease::LINEAR, Position::End)
            .to(TweenTarget::CameraZ, 1.0, 4.0, Ease::LINEAR, Position::WithPrevious);

        assert!(approx(timeline.duration(), 6.5));
        let starts: Vec<f32> = timeline.tweens.iter().map(|t| t.start).collect();
        assert_eq!(starts, vec![0.0, 0.0, 2.5, 2.5]);
    }

    #[test]
    fn from_value_applies_on_first_frame() {
        let mut values = Values::default();
        values.set(TweenTarget::Progress, 42.0);
        let mut timeline = Timeline::new()
            .pause(1.0)
            .from_to(TweenTarget::Progress, -7.0, 0.0, 5.0, Ease::LINEAR, Position::End);

        timeline.advance(0.0, &mut values);

        assert_eq!(values.get(TweenTarget::Progress), -7.0);
    }

    #[test]
    fn linear_interpolation_over_time() {
        let mut values = Values::default();
        let mut timeline = Timeline::new()
            .from_to(TweenTarget::Progress, -7.0, 0.0, 5.0, Ease::LINEAR, Position::End);

        timeline.advance(2.5, &mut values);
        assert!(approx(values.get(TweenTarget::Progress), -3.5));

        let finished = timeline.advance(10.0, &mut values);
        assert!(finished);
        assert!(approx(values.get(TweenTarget::Progress), 0.0));
    }

    #[test]
    fn to_captures_value_when_it_starts() {
        let mut values = Values::default();
        values.set(TweenTarget::CameraX, 10.0);
        let mut timeline = Timeline::new()
            .pause(1.0)
            .to(TweenTarget::CameraX, 0.0, 1.0, Ease::LINEAR, Position::End);

        timeline.advance(0.5, &mut values);
        // Something else moves the target before the tween starts.
        values.set(TweenTarget::CameraX, 4.0);
        timeline.advance(1.0, &mut values);

        assert!(approx(values.get(TweenTarget::CameraX), 2.0));
    }

    #[test]
    fn finished_tweens_release_their_target() {
        let mut values = Values::default();
        let mut timeline = Timeline::new()
            .to(TweenTarget::CameraZ, 14.0, 1.0, Ease::LINEAR, Position::End)
            .pause(5.0);

        timeline.advance(1.5, &mut values);
        assert!(approx(values.get(TweenTarget::CameraZ), 14.0));

        values.set(TweenTarget::CameraZ, 3.0);
        timeline.advance(1.0, &mut values);
        assert_eq!(values.get(TweenTarget::CameraZ), 3.0);
    }

    #[test]
    fn restart_replays_from_the_beginning() {
        let mut values = Values::default();
        let mut timeline = Timeline::new()
            .from_to(TweenTarget::Progress, 0.0, 1.0, 1.0, Ease::LINEAR, Position::End)
            .to(TweenTarget::CameraX, 2.0, 1.0, Ease::LINEAR, Position::End);

        assert!(timeline.advance(5.0, &mut values));
        values.set(TweenTarget::CameraX, -2.0);

        timeline.restart();
        assert!(!timeline.is_finished());
        timeline.advance(1.5, &mut values);

        assert!(approx(values.get(TweenTarget::Progress), 1.0));
        assert!(approx(values.get(TweenTarget::CameraX), 0.0));
    }

    #[test]
    fn negative_delta_does_not_rewind() {
        let mut values = Values::default();
        let mut timeline = Timeline::new()
            .from_to(TweenTarget::Progress, 0.0, 1.0, 2.0, Ease::LINEAR, Position::End);

        timeline.advance(1.0, &mut values);
        timeline.advance(-5.0, &mut values);

        assert!(approx(timeline.elapsed, 1.0));
        assert!(approx(values.get(TweenTarget::Progress), 0.5));
    }
}
