use crate::quaternion::{UnitQuaternion, Vec3};

/// One of the three rotation axes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Intrinsic composition order of the three single-axis rotations.
///
/// An angle triple is only meaningful together with its order; a forward
/// conversion and its inverse must use the same one. Triples with different
/// declared orders are not comparable.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RotationOrder {
    /// X, then Y, then Z. The middle (second-applied) axis is Y.
    #[default]
    Xyz,
    /// Y, then X, then Z. The middle axis is X.
    Yxz,
}

impl RotationOrder {
    /// The axis whose rotation is applied second. This is where gimbal lock
    /// lives: the decomposition degenerates when its angle approaches ±90°.
    pub fn middle_axis(&self) -> Axis {
        match self {
            RotationOrder::Xyz => Axis::Y,
            RotationOrder::Yxz => Axis::X,
        }
    }
}

/// An orientation as three single-axis rotation angles in degrees.
///
/// Degrees are the boundary unit (sliders, display); the trigonometry below
/// converts to radians internally.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct EulerAngles {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl EulerAngles {
    pub const fn new(x: f32, y: f32, z: f32) -> EulerAngles {
        EulerAngles { x, y, z }
    }

    /// No rotation at all.
    pub const fn identity() -> EulerAngles {
        EulerAngles::new(0.0, 0.0, 0.0)
    }

    pub fn angle(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    pub fn set_angle(&mut self, axis: Axis, degrees: f32) {
        match axis {
            Axis::X => self.x = degrees,
            Axis::Y => self.y = degrees,
            Axis::Z => self.z = degrees,
        }
    }

    /// Per-component linear interpolation (the "Euler mode" of the sequencer).
    pub fn lerp(&self, other: &EulerAngles, t: f32) -> EulerAngles {
        EulerAngles::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
            self.z + (other.z - self.z) * t,
        )
    }

    /// Composes the three single-axis rotations in the declared order.
    ///
    /// Total over all finite angles; the result is a unit quaternion and the
    /// zero triple maps to the identity quaternion exactly.
    pub fn to_quaternion(self, order: RotationOrder) -> UnitQuaternion {
        let qx = UnitQuaternion::from_axis_angle(&Vec3::x_axis(), self.x.to_radians());
        let qy = UnitQuaternion::from_axis_angle(&Vec3::y_axis(), self.y.to_radians());
        let qz = UnitQuaternion::from_axis_angle(&Vec3::z_axis(), self.z.to_radians());
        match order {
            RotationOrder::Xyz => qx * qy * qz,
            RotationOrder::Yxz => qy * qx * qz,
        }
    }

    /// Extracts an angle triple from a unit quaternion using the declared
    /// order.
    ///
    /// Succeeds for every unit quaternion, but near gimbal lock (middle-axis
    /// angle within ~2° of ±90°) the decomposition is not unique and callers
    /// must not expect round-trip equality. Canonical branch at the
    /// singularity: the third-applied axis is fixed to zero and the
    /// first-applied axis absorbs the remaining rotation.
    pub fn from_quaternion(q: &UnitQuaternion, order: RotationOrder) -> EulerAngles {
        let m = q.to_rotation_matrix().into_inner();
        let (x, y, z) = match order {
            RotationOrder::Xyz => {
                let sy = m[(0, 2)].clamp(-1.0, 1.0);
                // atan2 against |cos| of the middle angle instead of asin:
                // asin is badly conditioned near ±1 in f32.
                let y = sy.atan2(m[(0, 0)].hypot(m[(0, 1)]));
                if sy.abs() < SINGULARITY_SINE {
                    (
                        (-m[(1, 2)]).atan2(m[(2, 2)]),
                        y,
                        (-m[(0, 1)]).atan2(m[(0, 0)]),
                    )
                } else {
                    (m[(2, 1)].atan2(m[(1, 1)]), y, 0.0)
                }
            }
            RotationOrder::Yxz => {
                let sx = (-m[(1, 2)]).clamp(-1.0, 1.0);
                let x = sx.atan2(m[(1, 0)].hypot(m[(1, 1)]));
                if sx.abs() < SINGULARITY_SINE {
                    (
                        x,
                        m[(0, 2)].atan2(m[(2, 2)]),
                        m[(1, 0)].atan2(m[(1, 1)]),
                    )
                } else {
                    (x, (-m[(2, 0)]).atan2(m[(0, 0)]), 0.0)
                }
            }
        };
        EulerAngles::new(x.to_degrees(), y.to_degrees(), z.to_degrees())
    }
}

/// Middle-axis sine magnitude above which the canonical branch is taken
/// (asin(0.99999) is about 89.74°, well inside the documented ~2° ambiguity
/// zone, with enough slack for f32 rounding at exactly ±90°).
const SINGULARITY_SINE: f32 = 0.999_99;

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_angles_eq(a: EulerAngles, b: EulerAngles, epsilon: f32) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = epsilon);
        assert_abs_diff_eq!(a.y, b.y, epsilon = epsilon);
        assert_abs_diff_eq!(a.z, b.z, epsilon = epsilon);
    }

    #[test]
    fn identity_is_exact() {
        let q = EulerAngles::identity().to_quaternion(RotationOrder::Xyz);
        assert_eq!(q, UnitQuaternion::identity());
        let c = q.coords;
        assert_eq!((c.w, c.x, c.y, c.z), (1.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn results_are_normalized() {
        for &angles in &[
            EulerAngles::new(12.0, 34.0, 56.0),
            EulerAngles::new(-180.0, 180.0, -90.0),
            EulerAngles::new(1234.5, -987.6, 0.001),
        ] {
            for &order in &[RotationOrder::Xyz, RotationOrder::Yxz] {
                let q = angles.to_quaternion(order);
                assert_abs_diff_eq!(q.norm(), 1.0, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn round_trip_away_from_singularity() {
        // Middle axis magnitude up to 85 degrees.
        for &order in &[RotationOrder::Xyz, RotationOrder::Yxz] {
            for &(a, b, c) in &[
                (0.0, 0.0, 0.0),
                (10.0, 20.0, 30.0),
                (-45.0, 85.0, 170.0),
                (120.0, -85.0, -179.0),
                (-170.0, 60.0, 5.5),
            ] {
                let angles = match order.middle_axis() {
                    Axis::Y => EulerAngles::new(a, b, c),
                    _ => EulerAngles::new(b, a, c),
                };
                let back = EulerAngles::from_quaternion(&angles.to_quaternion(order), order);
                assert_angles_eq(back, angles, 1e-3);
            }
        }
    }

    #[test]
    fn canonical_branch_at_lock() {
        // Exactly at the singularity the third-applied angle collapses to
        // zero and the rotation still round-trips as a quaternion.
        let angles = EulerAngles::new(30.0, 90.0, 40.0);
        let q = angles.to_quaternion(RotationOrder::Xyz);
        let back = EulerAngles::from_quaternion(&q, RotationOrder::Xyz);
        assert_eq!(back.z, 0.0);
        assert_abs_diff_eq!(back.y, 90.0, epsilon = 1e-3);
        assert_abs_diff_eq!(
            back.to_quaternion(RotationOrder::Xyz).angle_to(&q),
            0.0,
            epsilon = 1e-5
        );
    }

    #[test]
    fn lerp_is_exact_at_endpoints() {
        let a = EulerAngles::new(0.0, 0.0, 0.0);
        let b = EulerAngles::new(90.0, -45.0, 10.0);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
        assert_eq!(a.lerp(&b, 0.5), EulerAngles::new(45.0, -22.5, 5.0));
    }

    #[test]
    fn middle_axis_per_order() {
        assert_eq!(RotationOrder::Xyz.middle_axis(), Axis::Y);
        assert_eq!(RotationOrder::Yxz.middle_axis(), Axis::X);
    }
}
