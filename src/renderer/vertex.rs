//! Vertex and instance types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// One filled circle, ready to upload as instance data
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct CircleInstance {
    pub center: [f32; 2],
    /// Drawn diameter
    pub size: f32,
    pub _pad: f32,
    pub color: [f32; 4],
}

impl CircleInstance {
    pub const fn new(x: f32, y: f32, size: f32, color: [f32; 4]) -> Self {
        Self {
            center: [x, y],
            size,
            _pad: 0.0,
            color,
        }
    }

    pub fn radius(&self) -> f32 {
        self.size * 0.5
    }
}

/// Colors for simulation elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.196, 0.196, 0.196, 1.0];
    pub const SHOOTER: [f32; 4] = [0.0, 0.5, 0.0, 1.0];
    pub const TURRET: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const SHOOTER_PROJECTILE: [f32; 4] = [0.784, 0.784, 0.784, 1.0];
    pub const TURRET_PROJECTILE: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
}
