// Rename to keep the alias usable alongside other nalgebra imports
use nalgebra::UnitQuaternion as GenericUnitQuaternion;
use nalgebra::Vector3;

pub type UnitQuaternion = GenericUnitQuaternion<f32>;

pub type Vec3 = Vector3<f32>;

/// A dot this close to zero is rounding noise (the w component of a nominal
/// 180° rotation lands at ~-4e-8 in f32) and must not reverse the arc.
const DOT_EPSILON: f32 = 1e-6;

/// Shortest-arc spherical interpolation.
///
/// If the four-component dot product of `a` and `b` is clearly negative, `b`
/// is negated first (same rotation, opposite sign) so the interpolated path
/// never exceeds 180 degrees. Total: every input produces a unit result.
pub fn slerp(a: &UnitQuaternion, b: &UnitQuaternion, t: f32) -> UnitQuaternion {
    let mut dot = a.quaternion().dot(b.quaternion());
    let b = if dot < -DOT_EPSILON {
        dot = -dot;
        UnitQuaternion::new_unchecked(-b.into_inner())
    } else {
        *b
    };
    // NB: nalgebra's slerp() panics if angle is 180 degrees, and applies a
    // sign flip of its own that can undo the canonicalization above, so the
    // interpolation is spelled out here instead.
    let angle = dot.clamp(-1.0, 1.0).acos();
    let sin = angle.sin();
    if sin <= 1e-6 {
        // Nearly parallel (or degenerate antipodal input): lerp is exact
        // enough and avoids the 0/0.
        return UnitQuaternion::new_normalize(a.quaternion().lerp(&b.into_inner(), t));
    }
    let wa = ((1.0 - t) * angle).sin() / sin;
    let wb = (t * angle).sin() / sin;
    UnitQuaternion::new_normalize(a.into_inner() * wa + b.into_inner() * wb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn yaw(degrees: f32) -> UnitQuaternion {
        UnitQuaternion::from_axis_angle(&Vector3::y_axis(), degrees.to_radians())
    }

    #[test]
    fn endpoints() {
        let a = yaw(10.0);
        let b = yaw(70.0);
        assert_abs_diff_eq!(slerp(&a, &b, 0.0).angle_to(&a), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(slerp(&a, &b, 1.0).angle_to(&b), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn results_are_unit() {
        let a = yaw(-120.0);
        let b = yaw(45.0);
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert_abs_diff_eq!(slerp(&a, &b, t).norm(), 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn half_turn_goes_the_short_way() {
        // Half-way from identity to a 180 degree yaw is a 90 degree yaw
        // about +Y. The 180 degree target's w is tiny rounding noise below
        // zero, which must not flip the interpolation onto the -Y arc.
        let half = slerp(&UnitQuaternion::identity(), &yaw(180.0), 0.5);
        assert_abs_diff_eq!(half.angle_to(&yaw(90.0)), 0.0, epsilon = 1e-6);
        assert!(half.coords.y > 0.0);
    }

    #[test]
    fn opposite_signs_take_the_short_arc() {
        let a = yaw(10.0);
        let b = UnitQuaternion::new_unchecked(-yaw(30.0).into_inner());
        // 20 degrees apart as rotations, despite the sign flip.
        let mid = slerp(&a, &b, 0.5);
        assert_abs_diff_eq!(mid.angle_to(&yaw(20.0)), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn identical_inputs_interpolate_to_themselves() {
        let a = yaw(33.0);
        let mid = slerp(&a, &a, 0.5);
        assert_abs_diff_eq!(mid.angle_to(&a), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(mid.norm(), 1.0, epsilon = 1e-6);
    }
}
