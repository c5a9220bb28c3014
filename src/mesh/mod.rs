mod circle;
mod terrain;

use glam::{DVec2, DVec3};
use serde::Serialize;

pub use circle::{build_circle, CircleAnnotation};
pub use terrain::build_terrain;

/// Renderer-facing triangle mesh, four parallel buffers.
///
/// Every three entries of `triangle_indices` form one counter-clockwise
/// triangle.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Mesh {
    pub positions: Vec<DVec3>,
    pub normals: Vec<DVec3>,
    pub texture_coordinates: Vec<DVec2>,
    pub triangle_indices: Vec<u32>,
}

impl Mesh {
    pub fn triangle_count(&self) -> usize {
        self.triangle_indices.len() / 3
    }

    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.triangle_indices
            .chunks_exact(3)
            .map(|t| [t[0], t[1], t[2]])
    }
}
