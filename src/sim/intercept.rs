//! Intercept solver
//!
//! Finds the launch velocity a turret projectile needs to meet a target that
//! moves in a straight line at constant velocity.
//!
//! Construct a triangle with three points:
//! - A: target's current position
//! - B: turret (pursuer origin)
//! - C: intercept point (unknown)
//!
//! The angle at A, `alpha`, is known from the target's velocity and the
//! direction to B, as is the side `dC = |AB|`. With `r = sA / sB` the side
//! lengths are `AC = r * x` and `BC = x`, where `x` is the pursuer's path
//! length. The law of cosines then gives
//!
//! ```text
//! x² = (r·x)² + dC² - 2·(r·x)·dC·cos(alpha)
//! (1 - r²)·x² + 2·dC·r·cos(alpha)·x - dC² = 0
//! ```
//!
//! and the time to intercept is `x / sB`.

use glam::DVec2;

use super::projectile::Projectile;
use crate::consts::DEGENERATE_EPSILON;
use crate::{normalize_turn, signed_angle_between};

/// Real roots of a quadratic, after discarding all-negative pairs
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadraticRoots {
    /// No real roots, or both roots negative
    None,
    /// Discriminant is exactly zero
    One(f64),
    /// `(-b + √D) / 2a` and `(-b - √D) / 2a`, in that order
    Two(f64, f64),
}

impl QuadraticRoots {
    /// Number of usable roots (0, 1 or 2)
    pub fn count(&self) -> usize {
        match self {
            QuadraticRoots::None => 0,
            QuadraticRoots::One(_) => 1,
            QuadraticRoots::Two(..) => 2,
        }
    }

    /// Both roots as a pair (a single root is repeated)
    pub fn pair(&self) -> Option<(f64, f64)> {
        match *self {
            QuadraticRoots::None => None,
            QuadraticRoots::One(root) => Some((root, root)),
            QuadraticRoots::Two(root1, root2) => Some((root1, root2)),
        }
    }
}

/// Solve `a·x² + b·x + c = 0` for real roots
///
/// A pair of strictly negative roots is reported as [`QuadraticRoots::None`]:
/// negative distances and times are not physical here.
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> QuadraticRoots {
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 || a == 0.0 || discriminant.is_nan() {
        return QuadraticRoots::None;
    }

    let sqrt_d = discriminant.sqrt();
    let root1 = (-b + sqrt_d) / (2.0 * a);
    let root2 = (-b - sqrt_d) / (2.0 * a);

    if root1 < 0.0 && root2 < 0.0 {
        return QuadraticRoots::None;
    }

    if discriminant == 0.0 {
        QuadraticRoots::One(root1)
    } else {
        QuadraticRoots::Two(root1, root2)
    }
}

/// Pick the root to intercept with
///
/// Both positive: the smaller one (earliest intercept). Otherwise the larger,
/// which is the only non-negative one.
#[inline]
pub fn select_root(root1: f64, root2: f64) -> f64 {
    if root1 > 0.0 && root2 > 0.0 {
        root1.min(root2)
    } else {
        root1.max(root2)
    }
}

/// Inputs for a single intercept computation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterceptProblem {
    /// Target's current position (vertex A)
    pub target_pos: DVec2,
    /// Target's velocity
    pub target_vel: DVec2,
    /// Target's speed (`sA`)
    pub target_speed: f64,
    /// Where the pursuer launches from (vertex B)
    pub origin: DVec2,
    /// Pursuer's fixed speed (`sB`)
    pub pursuer_speed: f64,
}

impl InterceptProblem {
    /// Build a problem aimed at a live projectile
    pub fn for_projectile(
        target: &Projectile,
        target_speed: f64,
        origin: DVec2,
        pursuer_speed: f64,
    ) -> Self {
        Self {
            target_pos: target.pos,
            target_vel: target.vel,
            target_speed,
            origin,
            pursuer_speed,
        }
    }

    /// Angle at A between the target's velocity and the direction to B, in [0, 2π)
    pub fn alpha(&self) -> f64 {
        let to_origin = self.origin - self.target_pos;
        normalize_turn(signed_angle_between(self.target_vel, to_origin))
    }

    /// Quadratic coefficients `(a, b, c)` for the pursuer's path length
    pub fn coefficients(&self) -> (f64, f64, f64) {
        let d_c = (self.origin - self.target_pos).length();
        let r = self.target_speed / self.pursuer_speed;

        let mut a = 1.0 - r * r;
        if a == 0.0 {
            // Equal speeds: keep the formula usable, results may be unstable
            a = DEGENERATE_EPSILON;
        }
        let b = 2.0 * d_c * r * self.alpha().cos();
        let c = -d_c * d_c;
        (a, b, c)
    }
}

/// A launch that meets the target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterceptSolution {
    /// Launch velocity (magnitude equals the pursuer speed)
    pub launch_vel: DVec2,
    /// Where the two projectiles meet
    pub point: DVec2,
    /// Seconds from launch until they meet
    pub time: f64,
}

/// Solve for the pursuer's launch velocity
///
/// Returns `None` when no real, non-negative root exists, or when the
/// launch direction cannot be formed.
pub fn solve_intercept(problem: &InterceptProblem) -> Option<InterceptSolution> {
    if !(problem.pursuer_speed.is_finite() && problem.pursuer_speed > 0.0) {
        return None;
    }

    let (a, b, c) = problem.coefficients();
    let (root1, root2) = solve_quadratic(a, b, c).pair()?;
    let path_len = select_root(root1, root2);

    let time = path_len / problem.pursuer_speed;
    let point = problem.target_pos + problem.target_vel * time;
    let heading = (point - problem.origin).try_normalize()?;

    log::trace!(
        "intercept at ({:.1}, {:.1}) in {:.3}s (roots {:.3}, {:.3})",
        point.x,
        point.y,
        time,
        root1,
        root2
    );

    Some(InterceptSolution {
        launch_vel: heading * problem.pursuer_speed,
        point,
        time,
    })
}

/// Launch velocity only, see [`solve_intercept`]
pub fn predict_launch_velocity(problem: &InterceptProblem) -> Option<DVec2> {
    solve_intercept(problem).map(|solution| solution.launch_vel)
}
