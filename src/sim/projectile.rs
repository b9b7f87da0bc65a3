//! Projectile kinematics
//!
//! A projectile is a point moving in a straight line at constant velocity.
//! It is culled once its bounding circle leaves the arena.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Which side fired a projectile (same-side projectiles never collide)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The player-controlled shooter; its projectiles are the targets
    Shooter,
    /// The fixed turret that fires predictive intercepts
    Turret,
}

impl Side {
    pub fn opposes(self, other: Side) -> bool {
        self != other
    }
}

/// Axis-aligned arena rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl Bounds {
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    /// Bounds anchored at the origin (top-left) with the given size
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(DVec2::ZERO, DVec2::new(width, height))
    }

    /// True if a circle lies entirely outside the rectangle on any side
    ///
    /// A circle exactly tangent to a side still counts as inside.
    pub fn excludes_circle(&self, center: DVec2, radius: f64) -> bool {
        center.x + radius < self.min.x
            || center.x - radius > self.max.x
            || center.y + radius < self.min.y
            || center.y - radius > self.max.y
    }
}

/// A projectile in flight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: DVec2,
    pub vel: DVec2,
    pub side: Side,
    /// Cleared on cull or collision, never set again
    enabled: bool,
}

impl Projectile {
    pub fn new(id: u32, pos: DVec2, vel: DVec2, side: Side) -> Self {
        Self {
            id,
            pos,
            vel,
            side,
            enabled: true,
        }
    }

    /// Current speed
    #[inline]
    pub fn speed(&self) -> f64 {
        self.vel.length()
    }

    /// Move along the velocity for `dt` seconds (disabled projectiles stay put)
    pub fn advance(&mut self, dt: f64) {
        if !self.enabled {
            return;
        }
        self.pos += self.vel * dt;
    }

    /// Check whether the projectile's bounding circle has left the bounds
    pub fn is_out_of_bounds(&self, bounds: &Bounds, radius: f64) -> bool {
        bounds.excludes_circle(self.pos, radius)
    }

    /// Advance, then disable if out of bounds
    ///
    /// Returns true if this call culled the projectile.
    pub fn step(&mut self, dt: f64, bounds: &Bounds, radius: f64) -> bool {
        if !self.enabled {
            return false;
        }
        self.advance(dt);
        if self.is_out_of_bounds(bounds, radius) {
            self.disable();
            return true;
        }
        false
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Opposing side and closer than `threshold`, enabled or not
    pub fn in_range(&self, other: &Projectile, threshold: f64) -> bool {
        self.side.opposes(other.side) && self.pos.distance(other.pos) < threshold
    }

    /// Whether this projectile can collide with `other` right now
    pub fn hits(&self, other: &Projectile, threshold: f64) -> bool {
        self.enabled && other.enabled && self.in_range(other, threshold)
    }
}
