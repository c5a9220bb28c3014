use glam::{DVec2, DVec3};

use super::interpolation::AltitudeInterpolator;


#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("A grid needs at least 2 columns and 2 rows, got {columns}x{rows}")]
    InvalidDimensions { columns: usize, rows: usize },

    #[error("Cell size must be a positive number, got {0}")]
    InvalidCellSize(f64),

    #[error("Expected {expected} altitude values, got {found}")]
    DataLength { expected: usize, found: usize },
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
#[error("Point ({}, {}) is outside of the map", .point.x, .point.y)]
pub struct CoordinatesOutOfBoundsError {
    pub point: DVec2,
}

/// The five header records of a grid file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridHeader {
    pub column_count: usize,
    pub row_count: usize,
    pub x_ll_corner: f64,
    pub y_ll_corner: f64,
    pub cell_size: f64,
}

/// Regular grid of altitude samples placed in world space.
///
/// Row 0 is the northernmost row: sample `[0][0]` sits at
/// `(x_ll_corner, y_ll_corner + (row_count - 1) * cell_size)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ElevationGrid {
    source_path: String,
    header: GridHeader,
    /// row-major, `row_count` rows of `column_count` values
    altitude: Vec<i32>,
    min_altitude: i32,
    max_altitude: i32,
}

impl ElevationGrid {
    pub fn new(
        source_path: impl Into<String>,
        header: GridHeader,
        altitude: Vec<i32>,
    ) -> Result<Self, GridError> {
        if header.column_count < 2 || header.row_count < 2 {
            return Err(GridError::InvalidDimensions {
                columns: header.column_count,
                rows: header.row_count,
            });
        }

        if !(header.cell_size.is_finite() && header.cell_size > 0.0) {
            return Err(GridError::InvalidCellSize(header.cell_size));
        }

        let expected = match header.column_count.checked_mul(header.row_count) {
            Some(expected) => expected,
            None => {
                return Err(GridError::InvalidDimensions {
                    columns: header.column_count,
                    rows: header.row_count,
                })
            }
        };
        if altitude.len() != expected {
            return Err(GridError::DataLength {
                expected,
                found: altitude.len(),
            });
        }

        // non-empty: at least 2x2 values at this point
        let min_altitude = altitude.iter().copied().min().unwrap_or_default();
        let max_altitude = altitude.iter().copied().max().unwrap_or_default();

        Ok(ElevationGrid {
            source_path: source_path.into(),
            header,
            altitude,
            min_altitude,
            max_altitude,
        })
    }

    pub fn source_path(&self) -> &str {
        &self.source_path
    }

    pub fn header(&self) -> &GridHeader {
        &self.header
    }

    pub fn column_count(&self) -> usize {
        self.header.column_count
    }

    pub fn row_count(&self) -> usize {
        self.header.row_count
    }

    pub fn x_ll_corner(&self) -> f64 {
        self.header.x_ll_corner
    }

    pub fn y_ll_corner(&self) -> f64 {
        self.header.y_ll_corner
    }

    pub fn cell_size(&self) -> f64 {
        self.header.cell_size
    }

    pub fn min_altitude(&self) -> i32 {
        self.min_altitude
    }

    pub fn max_altitude(&self) -> i32 {
        self.max_altitude
    }

    pub fn altitude(&self, row: usize, column: usize) -> i32 {
        self.altitude[row * self.header.column_count + column]
    }

    /// All samples in row-major order.
    pub fn altitudes(&self) -> &[i32] {
        &self.altitude
    }

    pub fn rows(&self) -> std::slice::Chunks<'_, i32> {
        self.altitude.chunks(self.header.column_count)
    }

    /// Distance between the westernmost and easternmost samples.
    pub fn width(&self) -> f64 {
        self.header.cell_size * (self.header.column_count - 1) as f64
    }

    pub fn x_center(&self) -> f64 {
        self.header.x_ll_corner + self.header.cell_size * (self.header.column_count - 1) as f64 / 2.0
    }

    pub fn y_center(&self) -> f64 {
        self.header.y_ll_corner + self.header.cell_size * (self.header.row_count - 1) as f64 / 2.0
    }

    pub fn column_to_x(&self, column: usize) -> f64 {
        self.header.x_ll_corner + column as f64 * self.header.cell_size
    }

    pub fn row_to_y(&self, row: usize) -> f64 {
        self.header.y_ll_corner + (self.header.row_count - 1 - row) as f64 * self.header.cell_size
    }

    pub fn x_to_column(&self, x: f64, round_up: bool) -> isize {
        let column = (x - self.header.x_ll_corner) / self.header.cell_size;
        if round_up {
            column.ceil() as isize
        } else {
            column.floor() as isize
        }
    }

    /// Rows grow southwards, so rounding the row index up means flooring the
    /// distance from the southern edge.
    pub fn y_to_row(&self, y: f64, round_up: bool) -> isize {
        let from_bottom = (y - self.header.y_ll_corner) / self.header.cell_size;
        let last_row = self.header.row_count as isize - 1;
        if round_up {
            last_row - from_bottom.floor() as isize
        } else {
            last_row - from_bottom.ceil() as isize
        }
    }

    /// Interpolated altitude at a world point.
    ///
    /// The accepted extent reaches one full cell past the last sample on both
    /// axes; points in that margin take the value of the nearest edge.
    pub fn get_altitude(&self, point: DVec2) -> Result<f64, CoordinatesOutOfBoundsError> {
        let h = &self.header;
        let x_max = h.x_ll_corner + h.cell_size * h.column_count as f64;
        let y_max = h.y_ll_corner + h.cell_size * h.row_count as f64;

        let inside_x = point.x >= h.x_ll_corner && point.x <= x_max;
        let inside_y = point.y >= h.y_ll_corner && point.y <= y_max;
        if !(inside_x && inside_y) {
            return Err(CoordinatesOutOfBoundsError { point });
        }

        Ok(AltitudeInterpolator::new(self).interpolate(point))
    }

    /// Cursor reading: the point lifted onto the terrain.
    pub fn probe(&self, point: DVec2) -> Result<DVec3, CoordinatesOutOfBoundsError> {
        Ok(point.extend(self.get_altitude(point)?))
    }
}
