//! Orientation engine behind the Rotate3D visualization: conversion between
//! Euler-angle and quaternion representations of 3D orientation, gimbal-lock
//! proximity detection, and a deterministic keyframe animation sequencer
//! driven by externally delivered per-frame ticks.
//!
//! Rendering, camera/scene lifetime and UI widgets are external collaborators:
//! they read [`OrientationState`] once per displayed frame and forward input
//! through [`OrientationDemo`], which enforces the one-writer-at-a-time
//! contract.

#![deny(unsafe_code)]

pub mod demo;
pub mod easing;
pub mod eulerangles;
pub mod gimbal;
pub mod orientationstate;
pub mod quaternion;
pub mod sequencer;

pub use crate::demo::{gimbal_lock_sequence, OrientationDemo};
pub use crate::easing::Easing;
pub use crate::eulerangles::{Axis, EulerAngles, RotationOrder};
pub use crate::orientationstate::OrientationState;
pub use crate::quaternion::{slerp, UnitQuaternion};
pub use crate::sequencer::{
    AnimationSequence, AnimationSequencer, Keyframe, Phase, RotationMode,
};
