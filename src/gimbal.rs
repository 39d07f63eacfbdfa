//! Gimbal-lock proximity: a threshold predicate over the middle-axis angle,
//! plus a derived severity ramp for UI emphasis.

use crate::eulerangles::{EulerAngles, RotationOrder};

/// Middle-axis magnitude (degrees) at which lock is reported.
pub const LOCK_THRESHOLD: f32 = 88.0;

/// Degrees over which the severity ramps from 0 to 1 past the threshold.
const SEVERITY_RANGE: f32 = 2.0;

/// True iff the middle-axis angle of the declared order is within 2° of ±90°.
pub fn is_lock_imminent(angles: &EulerAngles, order: RotationOrder) -> bool {
    angles.angle(order.middle_axis()).abs() >= LOCK_THRESHOLD
}

/// Display-only lock emphasis in `[0, 1]`: 0 below the threshold, 1 at ±90°.
pub fn lock_severity(angles: &EulerAngles, order: RotationOrder) -> f32 {
    let middle = angles.angle(order.middle_axis()).abs();
    ((middle - LOCK_THRESHOLD) / SEVERITY_RANGE).clamp(0.0, 1.0)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::eulerangles::RotationOrder::{Xyz, Yxz};

    #[test]
    fn threshold_is_inclusive() {
        assert!(!is_lock_imminent(&EulerAngles::new(0.0, 87.9, 0.0), Xyz));
        assert!(is_lock_imminent(&EulerAngles::new(0.0, 88.0, 0.0), Xyz));
        assert!(is_lock_imminent(&EulerAngles::new(0.0, 90.0, 0.0), Xyz));
        assert!(is_lock_imminent(&EulerAngles::new(45.0, -89.0, 170.0), Xyz));
    }

    #[test]
    fn middle_axis_follows_order() {
        let pitched = EulerAngles::new(90.0, 0.0, 0.0);
        assert!(!is_lock_imminent(&pitched, Xyz));
        assert!(is_lock_imminent(&pitched, Yxz));
    }

    #[test]
    fn severity_ramp() {
        assert_eq!(lock_severity(&EulerAngles::new(0.0, 0.0, 0.0), Xyz), 0.0);
        assert_eq!(lock_severity(&EulerAngles::new(0.0, 88.0, 0.0), Xyz), 0.0);
        assert_eq!(lock_severity(&EulerAngles::new(0.0, 89.0, 0.0), Xyz), 0.5);
        assert_eq!(lock_severity(&EulerAngles::new(0.0, -90.0, 0.0), Xyz), 1.0);
        assert_eq!(lock_severity(&EulerAngles::new(0.0, 180.0, 0.0), Xyz), 1.0);
    }
}
