//! Timeline-driven animation of the shader progress and the camera.

/// Named easing curves.
pub mod easing;

/// The hardcoded morph sequence.
pub mod sequence;

/// Tween timeline with overlapping, eased segments.
pub mod timeline;

use bevy::prelude::*;

use crate::engine::camera::orbit_camera::SceneCamera;
use crate::engine::parameters::ParticleParameters;
use sequence::morph_sequence;
use timeline::{Timeline, TweenTarget, TweenTargets};

/// Request to (re)start the morph sequence. Sent by the debug panel, the keyboard
/// shortcut and web RPC.
#[derive(Event, Debug, Clone, Copy)]
pub struct AnimateRequestEvent;

/// The sequence currently playing, if any.
#[derive(Resource, Default)]
pub struct ActiveTimeline {
    pub timeline: Option<Timeline>,
}

impl ActiveTimeline {
    pub fn is_playing(&self) -> bool {
        self.timeline.as_ref().is_some_and(|t| !t.is_finished())
    }
}

/// Live scene values seen by the timeline.
struct SceneTargets<'a> {
    params: &'a mut ParticleParameters,
    camera: Option<&'a mut Transform>,
}

impl TweenTargets for SceneTargets<'_> {
    fn get(&self, target: TweenTarget) -> f32 {
        let camera = self.camera.as_deref().map(|t| t.translation).unwrap_or_default();
        match target {
            TweenTarget::Progress => self.params.progress,
            TweenTarget::CameraX => camera.x,
            TweenTarget::CameraZ => camera.z,
        }
    }

    fn set(&mut self, target: TweenTarget, value: f32) {
        match target {
            TweenTarget::Progress => self.params.progress = value,
            TweenTarget::CameraX | TweenTarget::CameraZ => {
                let Some(camera) = self.camera.as_deref_mut() else {
                    return;
                };
                if target == TweenTarget::CameraX {
                    camera.translation.x = value;
                } else {
                    camera.translation.z = value;
                }
            }
        }
    }
}

/// Start the sequence from the beginning. A request while playing restarts it.
pub fn start_animation_on_request(
    mut requests: EventReader<AnimateRequestEvent>,
    mut active: ResMut<ActiveTimeline>,
) {
    if requests.read().count() == 0 {
        return;
    }

    match active.timeline.as_mut() {
        Some(timeline) => timeline.restart(),
        None => match morph_sequence() {
            Ok(timeline) => active.timeline = Some(timeline),
            Err(err) => {
                error!("Morph sequence unavailable: {err}");
                return;
            }
        },
    }
    if let Some(timeline) = &active.timeline {
        info!("Morph sequence started ({:.1} s)", timeline.duration());
    }
}

pub fn advance_timeline(
    time: Res<Time>,
    mut active: ResMut<ActiveTimeline>,
    mut params: ResMut<ParticleParameters>,
    mut camera_query: Query<&mut Transform, With<SceneCamera>>,
) {
    if !active.is_playing() {
        return;
    }
    let Some(timeline) = active.timeline.as_mut() else {
        return;
    };

    let mut camera = camera_query.single_mut().ok();
    let mut targets = SceneTargets {
        params: &mut params,
        camera: camera.as_deref_mut(),
    };

    if timeline.advance(time.delta_secs(), &mut targets) {
        info!("Morph sequence finished");
    }
}
