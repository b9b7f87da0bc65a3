//! Simulation tick
//!
//! Applies queued clicks, moves every projectile, culls the ones that left
//! the arena, then destroys opposing pairs that got close enough.

use super::state::{FireInput, SimEvent, SimState};

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Clicks since the previous tick, in arrival order
    pub fire: Vec<FireInput>,
}

/// Advance the simulation by `dt` seconds
pub fn tick(state: &mut SimState, input: &TickInput, dt: f64) {
    for fire in &input.fire {
        state.handle_fire(*fire);
    }

    let radius = state.settings.projectile_radius;
    let bounds = state.bounds;
    for projectile in &mut state.projectiles {
        if projectile.step(dt, &bounds, radius) {
            state.events.push(SimEvent::OutOfBounds { id: projectile.id });
        }
    }

    resolve_collisions(state);

    state.time += dt;
}

/// Disable every opposing pair closer than the collision threshold
///
/// The projectiles swept are the ones enabled when the sweep starts, in
/// firing order. Each is paired with the first still-enabled opposing
/// projectile in range, so a projectile that already collided this tick can
/// still take down a second one next to it. O(n²).
pub fn resolve_collisions(state: &mut SimState) {
    let threshold = state.settings.collision_threshold;
    let projectiles = &mut state.projectiles;

    let candidates: Vec<usize> = (0..projectiles.len())
        .filter(|&i| projectiles[i].is_enabled())
        .collect();

    for i in candidates {
        let hit = (0..projectiles.len()).find(|&j| {
            j != i
                && projectiles[j].is_enabled()
                && projectiles[i].in_range(&projectiles[j], threshold)
        });

        if let Some(j) = hit {
            projectiles[i].disable();
            projectiles[j].disable();
            let pos = (projectiles[i].pos + projectiles[j].pos) * 0.5;
            state.events.push(SimEvent::Collision {
                a: projectiles[i].id,
                b: projectiles[j].id,
                pos,
            });
            log::debug!(
                "Projectiles {} and {} collided at ({:.1}, {:.1})",
                projectiles[i].id,
                projectiles[j].id,
                pos.x,
                pos.y
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::projectile::{Projectile, Side};
    use glam::DVec2;

    const DT: f64 = 1.0 / 60.0;

    fn push(state: &mut SimState, pos: DVec2, side: Side) -> u32 {
        let id = state.next_entity_id();
        state.projectiles.push(Projectile::new(id, pos, DVec2::ZERO, side));
        id
    }

    #[test]
    fn test_opposing_pair_destroyed_same_tick() {
        let mut state = SimState::default();
        push(&mut state, DVec2::new(100.0, 100.0), Side::Shooter);
        push(&mut state, DVec2::new(103.0, 100.0), Side::Turret);

        tick(&mut state, &TickInput::default(), DT);

        assert!(state.is_quiet());
        assert!(
            state
                .events
                .iter()
                .any(|e| matches!(e, SimEvent::Collision { a: 1, b: 2, .. }))
        );
    }

    #[test]
    fn test_same_side_never_collides() {
        let mut state = SimState::default();
        push(&mut state, DVec2::new(100.0, 100.0), Side::Turret);
        push(&mut state, DVec2::new(100.0, 100.0), Side::Turret);
        push(&mut state, DVec2::new(300.0, 300.0), Side::Shooter);
        push(&mut state, DVec2::new(301.0, 300.0), Side::Shooter);

        tick(&mut state, &TickInput::default(), DT);

        assert_eq!(state.active().count(), 4);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_out_of_range_pair_survives() {
        let mut state = SimState::default();
        push(&mut state, DVec2::new(100.0, 100.0), Side::Shooter);
        push(&mut state, DVec2::new(105.0, 100.0), Side::Turret);

        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.active().count(), 2);
    }

    #[test]
    fn test_turret_shot_between_two_shots_takes_both() {
        // S1 and the turret shot collide first; the turret shot still takes S2
        let mut state = SimState::default();
        let s1 = push(&mut state, DVec2::new(100.0, 100.0), Side::Shooter);
        let t = push(&mut state, DVec2::new(102.0, 100.0), Side::Turret);
        let s2 = push(&mut state, DVec2::new(104.0, 100.0), Side::Shooter);

        tick(&mut state, &TickInput::default(), 0.0);

        assert!(state.is_quiet());
        let collisions: Vec<(u32, u32)> = state
            .events
            .iter()
            .filter_map(|e| match *e {
                SimEvent::Collision { a, b, .. } => Some((a, b)),
                _ => None,
            })
            .collect();
        assert_eq!(collisions, vec![(s1, t), (t, s2)]);
    }

    #[test]
    fn test_projectile_disabled_before_sweep_is_skipped() {
        let mut state = SimState::default();
        let first = push(&mut state, DVec2::new(100.0, 100.0), Side::Shooter);
        push(&mut state, DVec2::new(102.0, 100.0), Side::Turret);
        let last = push(&mut state, DVec2::new(104.0, 100.0), Side::Shooter);
        state.projectiles[1].disable();

        resolve_collisions(&mut state);

        let active: Vec<u32> = state.active().map(|p| p.id).collect();
        assert_eq!(active, vec![first, last]);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_out_of_bounds_culled() {
        let mut state = SimState::default();
        let id = state.next_entity_id();
        state.projectiles.push(Projectile::new(
            id,
            DVec2::new(2.0, 200.0),
            DVec2::new(-1200.0, 0.0),
            Side::Shooter,
        ));

        tick(&mut state, &TickInput::default(), DT); // x = -18
        assert!(state.is_quiet());
        assert_eq!(state.events, vec![SimEvent::OutOfBounds { id }]);

        // Culled projectiles do not move or report again
        let pos = state.projectiles[0].pos;
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.projectiles[0].pos, pos);
        assert_eq!(state.events.len(), 1);
    }

    #[test]
    fn test_tick_applies_clicks_in_order() {
        let mut state = SimState::default();
        let input = TickInput {
            fire: vec![
                FireInput::secondary(DVec2::new(100.0, 100.0)),
                FireInput::primary(DVec2::new(100.0, 0.0)),
            ],
        };
        tick(&mut state, &input, 0.0);

        assert_eq!(state.shooter_pos, DVec2::new(100.0, 100.0));
        assert_eq!(state.projectiles[0].pos, DVec2::new(100.0, 100.0));
        assert_eq!(state.time, 0.0);
    }

    #[test]
    fn test_upward_shot_escapes_before_intercept() {
        let mut state = SimState::default();
        let input = TickInput {
            fire: vec![FireInput::primary(DVec2::new(200.0, 0.0))],
        };
        tick(&mut state, &input, DT);

        // Straight up at 150 escapes the arena long before the 3.8s intercept
        for _ in 0..600 {
            tick(&mut state, &TickInput::default(), DT);
        }
        assert!(state.is_quiet());
        assert!(
            !state
                .events
                .iter()
                .any(|e| matches!(e, SimEvent::Collision { .. }))
        );
    }

    #[test]
    fn test_turret_shoots_down_sideways_shot() {
        // Shooter low and to the left, firing right across the turret's face
        let mut settings = Settings::default();
        settings.shooter_start = DVec2::new(20.0, 300.0);
        let mut state = SimState::new(settings);

        let input = TickInput {
            fire: vec![FireInput::primary(DVec2::new(400.0, 300.0))],
        };
        tick(&mut state, &input, DT);

        for _ in 0..600 {
            if state.is_quiet() {
                break;
            }
            tick(&mut state, &TickInput::default(), DT);
        }

        assert!(state.is_quiet());
        assert!(
            state
                .events
                .iter()
                .any(|e| matches!(e, SimEvent::Collision { a: 1, b: 2, .. }))
        );
    }
}
