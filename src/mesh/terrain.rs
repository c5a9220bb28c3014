use glam::{DVec2, DVec3};

use super::Mesh;
use crate::dem::ElevationGrid;


/// Builds the renderable surface of a grid.
///
/// One vertex per sample and one normal per quad; the quads are not
/// averaged into vertex normals.
pub fn build_terrain(grid: &ElevationGrid) -> Mesh {
    let positions = positions(grid);
    let normals = normals(grid, &positions);

    Mesh {
        normals,
        texture_coordinates: texture_coordinates(grid),
        triangle_indices: triangle_indices(grid),
        positions,
    }
}

fn positions(grid: &ElevationGrid) -> Vec<DVec3> {
    let mut positions = Vec::with_capacity(grid.row_count() * grid.column_count());

    for (row, values) in grid.rows().enumerate() {
        let y = grid.row_to_y(row);
        for (column, altitude) in values.iter().enumerate() {
            positions.push(DVec3::new(grid.column_to_x(column), y, *altitude as f64));
        }
    }

    positions
}

/// Cross product of the edge to the next row and the edge to the next column,
/// taken at each quad's north-west vertex.
fn normals(grid: &ElevationGrid, positions: &[DVec3]) -> Vec<DVec3> {
    let columns = grid.column_count();
    let mut normals = Vec::with_capacity((grid.row_count() - 1) * (columns - 1));

    for row in 0..grid.row_count() - 1 {
        for column in 0..columns - 1 {
            let origin = positions[row * columns + column];
            let next_row = positions[(row + 1) * columns + column];
            let next_column = positions[row * columns + column + 1];

            normals.push((next_row - origin).cross(next_column - origin));
        }
    }

    normals
}

/// Lowest point maps to `(0, 0)`, highest to `(1, 1)`.
fn texture_coordinates(grid: &ElevationGrid) -> Vec<DVec2> {
    let min = grid.min_altitude() as f64;
    let range = grid.max_altitude() as f64 - min;

    grid.altitudes()
        .iter()
        .map(|altitude| {
            let t = if range == 0.0 {
                0.0
            } else {
                (*altitude as f64 - min) / range
            };
            DVec2::splat(t)
        })
        .collect()
}

fn triangle_indices(grid: &ElevationGrid) -> Vec<u32> {
    let columns = grid.column_count() as u32;
    let rows = grid.row_count() as u32;
    let mut indices = Vec::with_capacity(6 * ((rows - 1) * (columns - 1)) as usize);

    for row in 0..rows - 1 {
        for column in 0..columns - 1 {
            let top_left = row * columns + column;
            let bottom_left = (row + 1) * columns + column;
            let bottom_right = bottom_left + 1;
            let top_right = top_left + 1;

            indices.extend_from_slice(&[
                top_left,
                bottom_left,
                bottom_right,
                top_left,
                bottom_right,
                top_right,
            ]);
        }
    }

    indices
}
