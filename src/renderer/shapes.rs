//! Shape generation for 2D primitives

use std::f32::consts::PI;

use super::vertex::{CircleInstance, Vertex};

/// Generate vertices for a filled circle (triangle list)
pub fn circle(center: [f32; 2], radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let segments = segments.max(3);
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center[0], center[1], color));
        vertices.push(Vertex::new(
            center[0] + radius * theta1.cos(),
            center[1] + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center[0] + radius * theta2.cos(),
            center[1] + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Tessellate a whole draw list, for harnesses without instancing
pub fn tessellate(instances: &[CircleInstance], segments: u32) -> Vec<Vertex> {
    instances
        .iter()
        .flat_map(|c| circle(c.center, c.radius(), c.color, segments))
        .collect()
}
