//! Simulation state and firing
//!
//! Owns every projectile in flight plus the two fixed bodies: the shooter the
//! player moves around and the turret that answers each shot.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::intercept::{InterceptProblem, solve_intercept};
use super::projectile::{Bounds, Projectile, Side};
use crate::settings::Settings;

/// Which button a click came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FireButton {
    /// Fire a shooter projectile toward the point
    Primary,
    /// Move the shooter to the point without firing
    Secondary,
}

/// A click in arena coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FireInput {
    pub point: DVec2,
    pub button: FireButton,
}

impl FireInput {
    pub fn primary(point: DVec2) -> Self {
        Self {
            point,
            button: FireButton::Primary,
        }
    }

    pub fn secondary(point: DVec2) -> Self {
        Self {
            point,
            button: FireButton::Secondary,
        }
    }
}

/// Things the harness may want to log or play a sound for
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimEvent {
    ShooterFired { id: u32, vel: DVec2 },
    /// Turret answered shot `target` with projectile `id`
    TurretFired {
        id: u32,
        target: u32,
        vel: DVec2,
        intercept: DVec2,
        eta: f64,
    },
    /// No launch reaches shot `target`
    NoIntercept { target: u32 },
    ShooterMoved { pos: DVec2 },
    OutOfBounds { id: u32 },
    Collision { a: u32, b: u32, pos: DVec2 },
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct SimState {
    /// Speeds, sizes and layout
    pub settings: Settings,
    /// Arena rectangle used for culling
    pub bounds: Bounds,
    /// Where shooter projectiles start
    pub shooter_pos: DVec2,
    /// Where turret projectiles start
    pub turret_pos: DVec2,
    /// Projectiles in firing order (disabled ones stay until pruned)
    pub projectiles: Vec<Projectile>,
    /// Events since the harness last drained them
    pub events: Vec<SimEvent>,
    /// Simulated seconds
    pub time: f64,
    /// Next projectile ID
    next_id: u32,
}

impl SimState {
    pub fn new(settings: Settings) -> Self {
        Self {
            bounds: settings.bounds(),
            shooter_pos: settings.shooter_start,
            turret_pos: settings.turret_pos,
            settings,
            projectiles: Vec::new(),
            events: Vec::new(),
            time: 0.0,
            next_id: 1,
        }
    }

    /// Allocate a new projectile ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Apply a click
    pub fn handle_fire(&mut self, input: FireInput) {
        match input.button {
            FireButton::Primary => {
                self.fire_toward(input.point);
            }
            FireButton::Secondary => self.move_shooter(input.point),
        }
    }

    /// Reposition the shooter; projectiles already in flight are unaffected
    pub fn move_shooter(&mut self, pos: DVec2) {
        self.shooter_pos = pos;
        self.events.push(SimEvent::ShooterMoved { pos });
    }

    /// Fire from the shooter toward `point`, then let the turret answer
    ///
    /// Returns the shooter projectile's ID, or `None` if `point` is the
    /// shooter's own position (no heading).
    pub fn fire_toward(&mut self, point: DVec2) -> Option<u32> {
        let Some(heading) = (point - self.shooter_pos).try_normalize() else {
            log::debug!("Ignoring shot with no heading at {:?}", point);
            return None;
        };

        let id = self.next_entity_id();
        let shot = Projectile::new(
            id,
            self.shooter_pos,
            heading * self.settings.shooter_speed,
            Side::Shooter,
        );
        self.events.push(SimEvent::ShooterFired { id, vel: shot.vel });

        let problem = InterceptProblem::for_projectile(
            &shot,
            self.settings.shooter_speed,
            self.turret_pos,
            self.settings.turret_speed,
        );
        self.projectiles.push(shot);

        match solve_intercept(&problem) {
            Some(solution) => {
                let answer_id = self.next_entity_id();
                self.projectiles.push(Projectile::new(
                    answer_id,
                    self.turret_pos,
                    solution.launch_vel,
                    Side::Turret,
                ));
                self.events.push(SimEvent::TurretFired {
                    id: answer_id,
                    target: id,
                    vel: solution.launch_vel,
                    intercept: solution.point,
                    eta: solution.time,
                });
                log::debug!(
                    "Turret answers shot {} with {} (eta {:.2}s)",
                    id,
                    answer_id,
                    solution.time
                );
            }
            None => {
                self.events.push(SimEvent::NoIntercept { target: id });
                log::debug!("No intercept for shot {}", id);
            }
        }

        Some(id)
    }

    /// Projectiles still in flight
    pub fn active(&self) -> impl Iterator<Item = &Projectile> {
        self.projectiles.iter().filter(|p| p.is_enabled())
    }

    /// Look up a projectile by ID (enabled or not)
    pub fn projectile(&self, id: u32) -> Option<&Projectile> {
        self.projectiles.iter().find(|p| p.id == id)
    }

    /// True once nothing is left in flight
    pub fn is_quiet(&self) -> bool {
        self.active().next().is_none()
    }

    /// Drop disabled projectiles from storage (keeps firing order)
    pub fn prune_disabled(&mut self) {
        self.projectiles.retain(|p| p.is_enabled());
    }

    /// Take the pending events
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for SimState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
