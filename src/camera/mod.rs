pub mod navigator;

use glam::{DVec2, DVec3};
use serde::Serialize;

use crate::dem::ElevationGrid;

#[cfg(test)]
mod tests {
    use glam::{DVec2, DVec3};

    use crate::camera::Camera;
    use crate::dem::{ElevationGrid, GridHeader};

    #[test]
    fn overview_frames_the_whole_grid_from_above() {
        let header = GridHeader {
            column_count: 5,
            row_count: 3,
            x_ll_corner: 10.0,
            y_ll_corner: 20.0,
            cell_size: 2.0,
        };
        let grid = ElevationGrid::new("mem", header, (0..15).collect()).unwrap();

        let camera = Camera::overview(&grid);

        assert_eq!(DVec3::new(14.0, 22.0, 14.0), camera.position);
        assert_eq!(DVec3::NEG_Z, camera.look_direction);
        assert_eq!(DVec3::Y, camera.up_direction);
        assert_eq!(8.0, camera.width);
    }

    #[test]
    fn horizontal_direction_is_look_cross_up() {
        let camera = Camera::looking_down(DVec2::ZERO, 0.0, 1.0);
        assert_eq!(DVec3::X, camera.horizontal_direction());
    }
}

/// Orthographic camera. Every navigation step produces a new value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Camera {
    pub position: DVec3,
    pub look_direction: DVec3,
    /// Expected to stay perpendicular to `look_direction`; not renormalized.
    pub up_direction: DVec3,
    /// World-space extent covered by the viewport horizontally.
    pub width: f64,
}

impl Camera {
    pub fn new(position: DVec3, look_direction: DVec3, up_direction: DVec3, width: f64) -> Self {
        Camera {
            position,
            look_direction,
            up_direction,
            width,
        }
    }

    /// Looking straight down (-Z) with north (+Y) up.
    pub fn looking_down(center: DVec2, altitude: f64, width: f64) -> Self {
        Camera::new(center.extend(altitude), DVec3::NEG_Z, DVec3::Y, width)
    }

    /// The reset view: the whole grid from above its highest point.
    pub fn overview(grid: &ElevationGrid) -> Self {
        Camera::looking_down(
            DVec2::new(grid.x_center(), grid.y_center()),
            grid.max_altitude() as f64,
            grid.width(),
        )
    }

    /// The camera's right-hand axis, `look x up`.
    pub fn horizontal_direction(&self) -> DVec3 {
        self.look_direction.cross(self.up_direction)
    }
}
