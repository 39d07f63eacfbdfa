//! Glue between user input, the sequencer and the orientation state.
//!
//! The mutual-exclusion contract lives here: slider input is dropped while a
//! demo sequence is running, so there is exactly one writer per frame.

use std::time::{Duration, Instant};

use crate::easing::Easing;
use crate::eulerangles::{Axis, EulerAngles, RotationOrder};
use crate::gimbal;
use crate::orientationstate::OrientationState;
use crate::sequencer::{AnimationSequence, AnimationSequencer, Keyframe, Phase, RotationMode};

/// One demonstrated orientation (e.g. the Euler-mode cube or the
/// quaternion-mode cube) with its own state and sequencer.
#[derive(Debug)]
pub struct OrientationDemo {
    state: OrientationState,
    sequencer: AnimationSequencer,
}

impl OrientationDemo {
    pub fn new(mode: RotationMode, order: RotationOrder) -> OrientationDemo {
        OrientationDemo {
            state: OrientationState::new(order),
            sequencer: AnimationSequencer::new(mode, order, Easing::default()),
        }
    }

    /// The renderer reads this once per displayed frame.
    pub fn state(&self) -> &OrientationState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.sequencer.is_running()
    }

    pub fn phase(&self) -> Phase {
        self.sequencer.phase()
    }

    /// Slider input. Returns false (and leaves the state untouched) while a
    /// sequence is running.
    pub fn set_axis_angle(&mut self, axis: Axis, degrees: f32) -> bool {
        if self.sequencer.is_running() {
            return false;
        }
        self.state.set_axis_angle(axis, degrees);
        true
    }

    pub fn start_demo(&mut self, sequence: AnimationSequence, now: Instant) {
        self.sequencer.start(sequence, &self.state, now);
    }

    pub fn reset_demo(&mut self) {
        self.sequencer.reset();
    }

    /// Host-driven per-frame callback.
    pub fn tick(&mut self, now: Instant) {
        self.sequencer.tick(now, &mut self.state);
    }

    pub fn lock_imminent(&self) -> bool {
        gimbal::is_lock_imminent(&self.state.euler(), self.state.order())
    }

    pub fn lock_severity(&self) -> f32 {
        gimbal::lock_severity(&self.state.euler(), self.state.order())
    }
}

/// The canned gimbal-lock tour: pitch the middle axis to 90°, hold, swing the
/// two outer axes to show the collapsed degree of freedom, then return to
/// identity.
pub fn gimbal_lock_sequence(order: RotationOrder) -> AnimationSequence {
    let middle = order.middle_axis();
    let mut locked = EulerAngles::identity();
    locked.set_angle(middle, 90.0);
    let mut swung = locked;
    for axis in [Axis::X, Axis::Y, Axis::Z] {
        if axis != middle {
            swung.set_angle(axis, 45.0);
        }
    }
    AnimationSequence::new(vec![
        Keyframe::target(locked, Duration::from_millis(2000)),
        Keyframe::pause(Duration::from_millis(500)),
        Keyframe::target(swung, Duration::from_millis(1500)),
        Keyframe::pause(Duration::from_millis(500)),
        Keyframe::target(locked, Duration::from_millis(1500)),
        Keyframe::target(EulerAngles::identity(), Duration::from_millis(2000)),
    ])
    .unwrap() // the list is statically non-empty
}
