//! Simulation settings
//!
//! Speeds, sizes and layout. The solver never reads these directly; the
//! simulation passes them in for every shot.

use std::path::Path;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Bounds;

/// Simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Projectiles ===
    /// Shooter projectile speed (units/s)
    pub shooter_speed: f64,
    /// Turret projectile speed (units/s)
    pub turret_speed: f64,
    /// Projectile radius used for culling (also the drawn diameter)
    pub projectile_radius: f64,
    /// Opposing projectiles closer than this collide
    pub collision_threshold: f64,

    // === Arena ===
    pub arena_width: f64,
    pub arena_height: f64,
    /// Shooter position at startup
    pub shooter_start: DVec2,
    /// Fixed turret position
    pub turret_pos: DVec2,
    /// Drawn diameter of the shooter and turret bodies
    pub body_size: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            shooter_speed: SHOOTER_PROJECTILE_SPEED,
            turret_speed: TURRET_PROJECTILE_SPEED,
            projectile_radius: PROJECTILE_RADIUS,
            collision_threshold: COLLISION_THRESHOLD,

            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            shooter_start: DVec2::new(SHOOTER_START.0, SHOOTER_START.1),
            turret_pos: DVec2::new(TURRET_POSITION.0, TURRET_POSITION.1),
            body_size: BODY_SIZE,
        }
    }
}

impl Settings {
    /// Arena rectangle, origin top-left
    pub fn bounds(&self) -> Bounds {
        Bounds::from_size(self.arena_width, self.arena_height)
    }

    /// Ratio of shooter to turret speed (below 1 means every shot can be answered)
    pub fn speed_ratio(&self) -> f64 {
        self.shooter_speed / self.turret_speed
    }

    /// Parse settings from JSON (missing fields take defaults)
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        Ok(settings.validated())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Replace values that would break the simulation with defaults
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();

        fn fix(name: &str, value: &mut f64, default: f64, allow_zero: bool) {
            let ok = value.is_finite() && (*value > 0.0 || (allow_zero && *value == 0.0));
            if !ok {
                log::warn!("Invalid {} {}, using {}", name, value, default);
                *value = default;
            }
        }

        let d = &defaults;
        fix("shooter_speed", &mut self.shooter_speed, d.shooter_speed, false);
        fix("turret_speed", &mut self.turret_speed, d.turret_speed, false);
        fix("projectile_radius", &mut self.projectile_radius, d.projectile_radius, true);
        fix("collision_threshold", &mut self.collision_threshold, d.collision_threshold, true);
        fix("arena_width", &mut self.arena_width, d.arena_width, false);
        fix("arena_height", &mut self.arena_height, d.arena_height, false);
        fix("body_size", &mut self.body_size, d.body_size, true);

        if !self.shooter_start.is_finite() {
            log::warn!("Invalid shooter_start, using default");
            self.shooter_start = defaults.shooter_start;
        }
        if !self.turret_pos.is_finite() {
            log::warn!("Invalid turret_pos, using default");
            self.turret_pos = defaults.turret_pos;
        }

        self
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Bad settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::info!("Using default settings ({}: {})", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = self.to_json().map_err(std::io::Error::other)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }
}
