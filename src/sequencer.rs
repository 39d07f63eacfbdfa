//! Keyframe animation over orientation.
//!
//! An [`AnimationSequencer`] walks an ordered list of keyframes, interpolating
//! from the orientation recorded at the start of each step towards the step's
//! target as a function of externally delivered wall-clock ticks. There is no
//! internal scheduling: the host calls [`AnimationSequencer::tick`] once per
//! displayed frame with monotonically non-decreasing timestamps.

use std::time::{Duration, Instant};

use log::{debug, trace};

use crate::easing::Easing;
use crate::eulerangles::{EulerAngles, RotationOrder};
use crate::orientationstate::OrientationState;
use crate::quaternion::{slerp, UnitQuaternion};

/// Which representation the sequencer interpolates in.
///
/// Euler mode interpolates each angle linearly (and exhibits gimbal lock on
/// the way); quaternion mode slerps along the shortest arc.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RotationMode {
    #[default]
    Quaternion,
    Euler,
}

/// A target orientation plus the time to reach it, or a pause that holds the
/// previously reached orientation.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Keyframe {
    target: Option<EulerAngles>,
    duration: Duration,
}

impl Keyframe {
    pub fn target(angles: EulerAngles, duration: Duration) -> Keyframe {
        Keyframe {
            target: Some(angles),
            duration,
        }
    }

    pub fn pause(duration: Duration) -> Keyframe {
        Keyframe {
            target: None,
            duration,
        }
    }

    pub fn target_angles(&self) -> Option<EulerAngles> {
        self.target
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("there must be at least one keyframe")]
    NoKeyframes,
}

/// An ordered, finite list of keyframes, immutable once defined.
#[derive(Clone, Debug)]
pub struct AnimationSequence {
    keyframes: Box<[Keyframe]>,
}

impl AnimationSequence {
    pub fn new(keyframes: impl Into<Box<[Keyframe]>>) -> Result<AnimationSequence, Error> {
        let keyframes = keyframes.into();
        if keyframes.is_empty() {
            return Err(Error::NoKeyframes);
        }
        Ok(AnimationSequence { keyframes })
    }

    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }
}

/// Sequencer lifecycle.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Idle,
    Running,
    Finished,
}

#[derive(Debug)]
struct RunState {
    sequence: AnimationSequence,
    step: usize,
    step_started: Instant,
    /// Orientation at the start of the current step, in both representations
    /// so pauses and mode-specific interpolation need no conversion per tick.
    start_euler: EulerAngles,
    start_quaternion: UnitQuaternion,
}

/// Drives one orientation through an [`AnimationSequence`].
///
/// Each demonstrated orientation owns its own sequencer; run state is never
/// shared and two sequencers may be running at the same time. The sequencer
/// never blocks and never fails: degenerate (zero-length) keyframes complete
/// on their first tick, timestamps past a step's duration clamp to full
/// progress, and a repeated timestamp re-writes the same value.
#[derive(Debug)]
pub struct AnimationSequencer {
    mode: RotationMode,
    order: RotationOrder,
    easing: Easing,
    phase: Phase,
    run: Option<RunState>,
}

impl AnimationSequencer {
    pub fn new(mode: RotationMode, order: RotationOrder, easing: Easing) -> AnimationSequencer {
        AnimationSequencer {
            mode,
            order,
            easing,
            phase: Phase::Idle,
            run: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Callers must check this before forwarding direct user input; the
    /// sequencer itself does not block external writes to the state.
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Begins a run at `now`, recording the state's current orientation as
    /// the start value of the first step. A no-op while already running.
    pub fn start(&mut self, sequence: AnimationSequence, state: &OrientationState, now: Instant) {
        if self.phase == Phase::Running {
            debug!("start ignored, sequencer is already running");
            return;
        }
        debug!("starting sequence of {} keyframes", sequence.len());
        self.run = Some(RunState {
            sequence,
            step: 0,
            step_started: now,
            start_euler: state.euler(),
            start_quaternion: state.quaternion(),
        });
        self.phase = Phase::Running;
    }

    /// Advances the animation to `now` and writes the interpolated
    /// orientation into `state`. A no-op unless running.
    ///
    /// When a step reaches full progress the just-reached orientation becomes
    /// the next step's start value; past the last keyframe the sequencer
    /// snaps to that keyframe's exact target (never an eased approximation)
    /// and becomes [`Phase::Finished`].
    pub fn tick(&mut self, now: Instant, state: &mut OrientationState) {
        if self.phase != Phase::Running {
            return;
        }
        let Some(run) = self.run.as_mut() else {
            return;
        };
        let keyframe = run.sequence.keyframes()[run.step];
        // Timestamps are monotonically non-decreasing by contract, but clamp
        // to zero rather than panicking if the host misbehaves.
        let elapsed = now.saturating_duration_since(run.step_started);
        let progress = if keyframe.duration().is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / keyframe.duration().as_secs_f32()).min(1.0)
        };
        let eased = self.easing.apply(progress);

        match self.mode {
            RotationMode::Euler => {
                let target = keyframe.target_angles().unwrap_or(run.start_euler);
                state.set_euler(run.start_euler.lerp(&target, eased));
            }
            RotationMode::Quaternion => {
                let target = match keyframe.target_angles() {
                    Some(angles) => angles.to_quaternion(self.order),
                    None => run.start_quaternion,
                };
                state.set_quaternion(slerp(&run.start_quaternion, &target, eased));
            }
        }

        let mut finished = false;
        if progress >= 1.0 {
            // End the step on its exact target, not the interpolated value.
            if let Some(angles) = keyframe.target_angles() {
                match self.mode {
                    RotationMode::Euler => state.set_euler(angles),
                    RotationMode::Quaternion => {
                        state.set_quaternion(angles.to_quaternion(self.order))
                    }
                }
            }
            run.start_euler = state.euler();
            run.start_quaternion = state.quaternion();
            run.step += 1;
            run.step_started = now;
            if run.step == run.sequence.len() {
                finished = true;
            } else {
                trace!("advanced to keyframe {}", run.step);
            }
        }
        if finished {
            debug!("sequence finished");
            self.phase = Phase::Finished;
            self.run = None;
        }
    }

    /// Discards any run state and returns to [`Phase::Idle`]. Does not move
    /// the orientation: partial progress stays wherever the last tick wrote
    /// it. Idempotent when already idle.
    pub fn reset(&mut self) {
        if self.phase == Phase::Idle {
            return;
        }
        debug!("sequencer reset");
        self.run = None;
        self.phase = Phase::Idle;
    }
}
