//! Predictive Aim - a turret that shoots down moving projectiles
//!
//! Core modules:
//! - `sim`: Simulation (kinematics, intercept solver, collisions, state)
//! - `renderer`: GPU-ready draw list for a rendering harness
//! - `settings`: Configurable speeds, sizes and arena layout

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::DVec2;

/// Default configuration constants
pub mod consts {
    /// Arena dimensions (origin top-left, y grows downward)
    pub const ARENA_WIDTH: f64 = 400.0;
    pub const ARENA_HEIGHT: f64 = 400.0;

    /// Projectile defaults
    pub const PROJECTILE_RADIUS: f64 = 10.0;
    pub const SHOOTER_PROJECTILE_SPEED: f64 = 150.0;
    pub const TURRET_PROJECTILE_SPEED: f64 = 200.0;
    /// Opposing projectiles closer than this are destroyed (about half the drawn diameter)
    pub const COLLISION_THRESHOLD: f64 = 5.0;

    /// Body placement
    pub const SHOOTER_START: (f64, f64) = (200.0, 200.0);
    pub const TURRET_POSITION: (f64, f64) = (200.0, 390.0);
    pub const BODY_SIZE: f64 = 20.0;

    /// Substitute for a zero leading coefficient when both speeds match
    pub const DEGENERATE_EPSILON: f64 = 1e-10;

    /// Harness timestep (60 Hz)
    pub const HARNESS_DT: f64 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
}

/// Normalize an angle to [0, 2π) by adding a full turn when negative
#[inline]
pub fn normalize_turn(angle: f64) -> f64 {
    if angle < 0.0 {
        std::f64::consts::TAU + angle
    } else {
        angle
    }
}

/// Unsigned angle between two vectors in [0, π]
///
/// Returns 0 when either vector has zero length.
#[inline]
pub fn unsigned_angle_between(a: DVec2, b: DVec2) -> f64 {
    let denom = (a.length_squared() * b.length_squared()).sqrt();
    if denom == 0.0 {
        return 0.0;
    }
    (a.dot(b) / denom).clamp(-1.0, 1.0).acos()
}

/// Signed angle from `a` to `b` in [-π, π]
///
/// The magnitude comes from [`unsigned_angle_between`]; the sign follows the
/// 2D cross product, with a zero cross product counting as positive.
#[inline]
pub fn signed_angle_between(a: DVec2, b: DVec2) -> f64 {
    let angle = unsigned_angle_between(a, b);
    if a.perp_dot(b) < 0.0 { -angle } else { angle }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn test_signed_angle_sign() {
        let right = DVec2::X;
        // y grows downward on screen but the math is plain cartesian
        assert!((signed_angle_between(right, DVec2::Y) - FRAC_PI_2).abs() < 1e-12);
        assert!((signed_angle_between(right, -DVec2::Y) + FRAC_PI_2).abs() < 1e-12);
        assert!((signed_angle_between(right, -DVec2::X) - PI).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_turn() {
        assert!((normalize_turn(-FRAC_PI_2) - 3.0 * FRAC_PI_2).abs() < 1e-12);
        assert_eq!(normalize_turn(0.0), 0.0);
        assert!(normalize_turn(-1e-9) < TAU);
    }

    #[test]
    fn test_zero_length_angle() {
        assert_eq!(unsigned_angle_between(DVec2::ZERO, DVec2::X), 0.0);
        assert_eq!(signed_angle_between(DVec2::X, DVec2::ZERO), 0.0);
    }
}
