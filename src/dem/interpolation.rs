use glam::{DMat4, DVec2, DVec4};

use super::ElevationGrid;


/// Bilinear altitude estimate from the four samples surrounding a point.
///
/// Fits `z = a + b*x + c*y + d*x*y` through the corners of the enclosing cell.
/// The caller is responsible for bounds checking; indices past the grid are
/// clamped onto its edge.
pub struct AltitudeInterpolator<'a> {
    grid: &'a ElevationGrid,
}

impl<'a> AltitudeInterpolator<'a> {
    pub fn new(grid: &'a ElevationGrid) -> Self {
        AltitudeInterpolator { grid }
    }

    pub fn interpolate(&self, point: DVec2) -> f64 {
        let column_below = self.column(point.x, false);
        let column_above = self.column(point.x, true);
        // rounding the row up lands on the southern (lower y) sample
        let row_south = self.row(point.y, true);
        let row_north = self.row(point.y, false);

        let x1 = self.grid.column_to_x(column_below);
        let x2 = self.grid.column_to_x(column_above);
        let y1 = self.grid.row_to_y(row_south);
        let y2 = self.grid.row_to_y(row_north);

        let z11 = self.sample(row_south, column_below);
        let z12 = self.sample(row_north, column_below);
        let z21 = self.sample(row_south, column_above);
        let z22 = self.sample(row_north, column_above);

        match (column_below == column_above, row_south == row_north) {
            (true, true) => z11,
            (true, false) => lerp(z11, z12, (point.y - y1) / (y2 - y1)),
            (false, true) => lerp(z11, z21, (point.x - x1) / (x2 - x1)),
            (false, false) => {
                #[rustfmt::skip]
                let transform = DMat4::from_cols_array_2d(&[
                    [x2 * y2, -x2 * y1, -x1 * y2, x1 * y1],
                    [    -y2,       y1,       y2,     -y1],
                    [    -x2,       x2,       x1,     -x1],
                    [    1.0,     -1.0,     -1.0,     1.0],
                ])
                .transpose();

                let coefficients =
                    transform * DVec4::new(z11, z12, z21, z22) / ((x2 - x1) * (y2 - y1));

                coefficients.x
                    + coefficients.y * point.x
                    + coefficients.z * point.y
                    + coefficients.w * point.x * point.y
            }
        }
    }

    fn column(&self, x: f64, round_up: bool) -> usize {
        clamp_index(self.grid.x_to_column(x, round_up), self.grid.column_count())
    }

    fn row(&self, y: f64, round_up: bool) -> usize {
        clamp_index(self.grid.y_to_row(y, round_up), self.grid.row_count())
    }

    fn sample(&self, row: usize, column: usize) -> f64 {
        self.grid.altitude(row, column) as f64
    }
}

fn clamp_index(index: isize, count: usize) -> usize {
    index.clamp(0, count as isize - 1) as usize
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}
