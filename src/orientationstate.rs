use crate::eulerangles::{Axis, EulerAngles, RotationOrder};
use crate::quaternion::UnitQuaternion;

/// The externally visible orientation: an Euler triple and a quaternion kept
/// in sync.
///
/// Whichever representation is written through a setter becomes authoritative
/// and the other is derived from it, so a renderer can read either one.
/// There is exactly one logical writer at any instant (user input or a
/// running sequencer, mutually exclusive by the caller's `is_running()`
/// check), so no locking is involved.
#[derive(Clone, Debug)]
pub struct OrientationState {
    order: RotationOrder,
    euler: EulerAngles,
    quaternion: UnitQuaternion,
}

impl OrientationState {
    /// Starts at the identity orientation: all angles zero, quaternion
    /// `(1, 0, 0, 0)`.
    pub fn new(order: RotationOrder) -> OrientationState {
        OrientationState {
            order,
            euler: EulerAngles::identity(),
            quaternion: UnitQuaternion::identity(),
        }
    }

    pub fn order(&self) -> RotationOrder {
        self.order
    }

    pub fn euler(&self) -> EulerAngles {
        self.euler
    }

    pub fn quaternion(&self) -> UnitQuaternion {
        self.quaternion
    }

    /// Makes the Euler triple authoritative and derives the quaternion.
    pub fn set_euler(&mut self, angles: EulerAngles) {
        self.euler = angles;
        self.quaternion = angles.to_quaternion(self.order);
    }

    /// Makes the quaternion authoritative and derives the Euler triple.
    ///
    /// The input is renormalized defensively; near gimbal lock the derived
    /// triple uses the canonical decomposition branch.
    pub fn set_quaternion(&mut self, q: UnitQuaternion) {
        let q = UnitQuaternion::new_normalize(q.into_inner());
        self.quaternion = q;
        self.euler = EulerAngles::from_quaternion(&q, self.order);
    }

    /// Single-axis slider input. Non-finite values are rejected, everything
    /// else is clamped to the slider range of ±180°.
    pub fn set_axis_angle(&mut self, axis: Axis, degrees: f32) {
        if !degrees.is_finite() {
            return;
        }
        let mut angles = self.euler;
        angles.set_angle(axis, degrees.clamp(-180.0, 180.0));
        self.set_euler(angles);
    }

    /// Euler angles formatted to the nearest whole degree.
    pub fn euler_display(&self) -> String {
        format!(
            "x: {:.0}°, y: {:.0}°, z: {:.0}°",
            self.euler.x, self.euler.y, self.euler.z
        )
    }

    /// Quaternion components formatted to four decimal places.
    pub fn quaternion_display(&self) -> String {
        let c = self.quaternion.coords;
        format!(
            "w: {:.4}, x: {:.4}, y: {:.4}, z: {:.4}",
            c.w, c.x, c.y, c.z
        )
    }
}
