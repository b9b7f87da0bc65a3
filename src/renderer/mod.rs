//! Draw list for a rendering harness
//!
//! The simulation does not draw anything itself. Each frame the harness asks
//! for a list of filled circles and uploads it (`bytemuck::cast_slice`) or
//! tessellates it with [`shapes::tessellate`].

pub mod shapes;
pub mod vertex;

pub use vertex::{CircleInstance, Vertex, colors};

use crate::sim::{Side, SimState};

/// Color for a projectile fired by `side`
pub fn projectile_color(side: Side) -> [f32; 4] {
    match side {
        Side::Shooter => colors::SHOOTER_PROJECTILE,
        Side::Turret => colors::TURRET_PROJECTILE,
    }
}

/// Circles to draw this frame: enabled projectiles, then the turret and shooter
pub fn draw_list(state: &SimState) -> Vec<CircleInstance> {
    let settings = &state.settings;
    let size = settings.projectile_radius as f32;

    let mut list: Vec<CircleInstance> = state
        .active()
        .map(|p| {
            CircleInstance::new(p.pos.x as f32, p.pos.y as f32, size, projectile_color(p.side))
        })
        .collect();

    let body = settings.body_size as f32;
    list.push(CircleInstance::new(
        state.turret_pos.x as f32,
        state.turret_pos.y as f32,
        body,
        colors::TURRET,
    ));
    list.push(CircleInstance::new(
        state.shooter_pos.x as f32,
        state.shooter_pos.y as f32,
        body,
        colors::SHOOTER,
    ));
    list
}
