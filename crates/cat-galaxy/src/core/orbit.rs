//! Circular orbits in the horizontal (XZ) plane.

use glam::Vec3;

/// Position on a circle of `radius` around the origin at `angle` radians.
/// Y is always zero.
pub fn circular_position(radius: f32, angle: f32) -> Vec3 {
    Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, TAU};

    #[test]
    fn zero_angle_is_on_positive_x() {
        let p = circular_position(250.0, 0.0);
        assert!((p - Vec3::new(250.0, 0.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn quarter_turn_is_on_positive_z() {
        let p = circular_position(100.0, FRAC_PI_2);
        assert!(p.x.abs() < 1e-4);
        assert!((p.z - 100.0).abs() < 1e-4);
    }

    #[test]
    fn periodic_in_tau() {
        let a = circular_position(530.0, 0.7);
        let b = circular_position(530.0, 0.7 + 3.0 * TAU);
        assert!((a - b).length() < 1e-2);
    }
}
