use std::f64::consts::PI;

use glam::{DVec2, DVec3};

use super::Mesh;


/// The fewest segments that still enclose an area.
pub const MIN_SEGMENT_COUNT: usize = 3;

/// A circle drawn on the map together with a crosshair on its center.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleAnnotation {
    pub center: DVec2,
    pub radius: f64,
    /// Z the meshes are placed at.
    pub altitude: f64,
    pub line_width: f64,
    /// Arm length of the center crosshair.
    pub center_cross_size: f64,
    pub segment_count: usize,
}

impl CircleAnnotation {
    pub fn new(
        center: DVec2,
        radius: f64,
        altitude: f64,
        line_width: f64,
        center_cross_size: f64,
        segment_count: usize,
    ) -> Self {
        CircleAnnotation {
            center,
            radius,
            altitude,
            line_width,
            center_cross_size,
            segment_count: segment_count.max(MIN_SEGMENT_COUNT),
        }
    }

    /// The circle as a band of trapezoids, two triangles each.
    pub fn ring_mesh(&self) -> Mesh {
        let n = self.segment_count.max(MIN_SEGMENT_COUNT);
        let inner = self.radius - self.line_width / 2.0;
        let outer = self.radius + self.line_width / 2.0;

        let mut positions = Vec::with_capacity(2 * n);
        for i in 0..n {
            let angle = 2.0 * PI * (i as f64 / n as f64);
            let direction = DVec2::new(angle.cos(), angle.sin());
            positions.push((self.center + inner * direction).extend(self.altitude));
            positions.push((self.center + outer * direction).extend(self.altitude));
        }

        let n = n as u32;
        let mut indices = Vec::with_capacity(6 * n as usize);
        for i in 0..n - 1 {
            indices.extend_from_slice(&[
                2 * i,
                2 * i + 1,
                2 * (i + 1) + 1,
                2 * i,
                2 * (i + 1) + 1,
                2 * (i + 1),
            ]);
        }
        // closing seam
        indices.extend_from_slice(&[2 * n - 2, 2 * n - 1, 1, 2 * n - 2, 1, 0]);

        solid_mesh(positions, indices)
    }

    /// A plus sign of four thin triangles meeting at the center.
    pub fn crosshair_mesh(&self) -> Mesh {
        let DVec2 { x, y } = self.center;
        let size = self.center_cross_size;
        let half_line = self.line_width / 2.0;
        let z = self.altitude;

        let positions = vec![
            DVec3::new(x, y, z),
            DVec3::new(x + size, y - half_line, z),
            DVec3::new(x + size, y + half_line, z),
            DVec3::new(x - size, y + half_line, z),
            DVec3::new(x - size, y - half_line, z),
            DVec3::new(x + half_line, y + size, z),
            DVec3::new(x - half_line, y + size, z),
            DVec3::new(x - half_line, y - size, z),
            DVec3::new(x + half_line, y - size, z),
        ];

        solid_mesh(positions, vec![0, 1, 2, 0, 3, 4, 0, 5, 6, 0, 7, 8])
    }
}

/// Flat, viewer-facing mesh meant for a solid color fill.
fn solid_mesh(positions: Vec<DVec3>, triangle_indices: Vec<u32>) -> Mesh {
    Mesh {
        normals: vec![DVec3::Z; positions.len()],
        texture_coordinates: vec![DVec2::ZERO; positions.len()],
        positions,
        triangle_indices,
    }
}

/// Ring and crosshair meshes for a circle annotation.
pub fn build_circle(
    center: DVec2,
    radius: f64,
    altitude: f64,
    line_width: f64,
    center_size: f64,
    segment_count: usize,
) -> (Mesh, Mesh) {
    let circle = CircleAnnotation::new(center, radius, altitude, line_width, center_size, segment_count);
    (circle.ring_mesh(), circle.crosshair_mesh())
}
