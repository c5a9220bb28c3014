//! Pure camera transforms. Each takes the previous camera and returns the next.

use glam::{DVec2, DVec3};

use super::Camera;

#[cfg(test)]
mod tests {
    use glam::{DVec2, DVec3};
    use rstest::rstest;

    use crate::camera::navigator::*;
    use crate::camera::Camera;

    const EPSILON: f64 = 1e-9;

    fn camera() -> Camera {
        Camera::looking_down(DVec2::new(100.0, 50.0), 30.0, 20.0)
    }

    fn assert_close(expected: DVec3, actual: DVec3) {
        assert!(
            expected.abs_diff_eq(actual, EPSILON),
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn pan_moves_against_the_drag() {
        let panned = pan(&camera(), DVec2::new(3.0, -4.0));

        assert_eq!(DVec3::new(97.0, 54.0, 30.0), panned.position);
        assert_eq!(camera().width, panned.width);
    }

    #[test]
    fn zoom_keeps_cursor_point_fixed() {
        let before = camera();
        let cursor = DVec2::new(104.0, 52.0);
        let after = zoom(&before, 100.0, 0.1, cursor);

        assert_eq!(10.0, after.width);
        // the cursor halves its distance to the center when the width halves
        assert_close(DVec3::new(102.0, 51.0, 30.0), after.position);

        let viewport = DVec2::new(0.2, 0.1);
        let aspect = 2.0;
        let anchored = DVec2::new(100.0, 50.0) + viewport * DVec2::new(20.0, 10.0);
        let zoomed = zoom(&before, 50.0, 0.1, anchored);
        assert!(
            (viewport_to_world(&zoomed, viewport, aspect) - anchored).length() < EPSILON,
            "cursor drifted"
        );
    }

    #[test]
    fn zoom_out_grows_width() {
        let after = zoom(&camera(), -100.0, 0.1, DVec2::new(100.0, 50.0));
        assert_eq!(30.0, after.width);
        assert_eq!(camera().position, after.position);
    }

    #[test]
    fn zoom_width_never_drops_below_floor() {
        let mut camera = camera();
        let cursor = DVec2::new(90.0, 40.0);

        for _ in 0..10 {
            camera = zoom(&camera, 120.0, 0.05, cursor);
            assert!(camera.width >= MIN_WIDTH);
        }
        assert_eq!(MIN_WIDTH, camera.width);

        let pinned = zoom(&camera, 120.0, 0.05, cursor);
        assert_eq!(camera.position, pinned.position);
        assert_eq!(MIN_WIDTH, pinned.width);
    }

    #[rstest]
    #[case(DVec3::new(2.5, 0.0, 0.0), Move::Horizontal)]
    #[case(DVec3::new(0.0, 2.5, 0.0), Move::Vertical)]
    #[case(DVec3::new(0.0, 0.0, -2.5), Move::Lateral)]
    fn moves_follow_camera_axes(#[case] offset: DVec3, #[case] direction: Move) {
        let moved = match direction {
            Move::Horizontal => move_horizontal(&camera(), 2.5),
            Move::Vertical => move_vertical(&camera(), 2.5),
            Move::Lateral => move_lateral(&camera(), 2.5),
        };
        assert_eq!(camera().position + offset, moved.position);
    }

    #[derive(Debug)]
    enum Move {
        Horizontal,
        Vertical,
        Lateral,
    }

    #[test]
    fn rotate_vertical_full_turn_is_identity() {
        let tilted = rotate_around_horizontal_axis(&camera(), 30.0);
        let turned = rotate_around_vertical_axis(&tilted, 360.0);

        assert_close(tilted.look_direction, turned.look_direction);
        assert_eq!(tilted.up_direction, turned.up_direction);
    }

    #[test]
    fn rotate_vertical_quarter_turn() {
        // looking north, up is +Z: turning 90 degrees faces west
        let camera = Camera::new(DVec3::ZERO, DVec3::Y, DVec3::Z, 1.0);
        let turned = rotate_around_vertical_axis(&camera, 90.0);

        assert_close(DVec3::NEG_X, turned.look_direction);
        assert_eq!(DVec3::Z, turned.up_direction);
    }

    #[test]
    fn rotate_horizontal_tilts_look_and_up_together() {
        let tilted = rotate_around_horizontal_axis(&camera(), 90.0);

        assert_close(DVec3::Y, tilted.look_direction);
        assert_close(DVec3::Z, tilted.up_direction);
        assert!(tilted.look_direction.dot(tilted.up_direction).abs() < EPSILON);
    }

    #[test]
    fn rodrigues_matches_closed_form() {
        let v = DVec3::new(1.0, 2.0, 3.0);
        let axis = DVec3::new(1.0, 1.0, 0.0).normalize();
        let theta = 37.0_f64.to_radians();

        let expected = v * theta.cos()
            + axis.cross(v) * theta.sin()
            + axis * axis.dot(v) * (1.0 - theta.cos());

        assert_close(expected, rotate_vector_around_axis(v, axis, 37.0));
    }

    #[test]
    fn viewport_center_is_camera_position() {
        assert_eq!(DVec2::new(100.0, 50.0), viewport_to_world(&camera(), DVec2::ZERO, 1.5));
        assert_eq!(
            DVec2::new(110.0, 45.0),
            viewport_to_world(&camera(), DVec2::new(0.5, -0.5), 2.0)
        );
    }
}

/// Narrowest view width zooming can reach.
pub const MIN_WIDTH: f64 = 0.5;

/// Drags the world along with the cursor: the camera moves by `-world_delta`.
pub fn pan(camera: &Camera, world_delta: DVec2) -> Camera {
    Camera {
        position: camera.position - world_delta.extend(0.0),
        ..*camera
    }
}

/// Narrows (positive delta) or widens the view while keeping `cursor` at the
/// same place on screen.
pub fn zoom(camera: &Camera, wheel_delta: f64, sensitivity: f64, cursor: DVec2) -> Camera {
    let width = (camera.width - wheel_delta * sensitivity).max(MIN_WIDTH);
    let position = camera.position.truncate();
    let position = position + (cursor - position) * (1.0 - width / camera.width);

    Camera {
        position: position.extend(camera.position.z),
        width,
        ..*camera
    }
}

pub fn move_horizontal(camera: &Camera, amount: f64) -> Camera {
    translate(camera, camera.horizontal_direction() * amount)
}

pub fn move_vertical(camera: &Camera, amount: f64) -> Camera {
    translate(camera, camera.up_direction * amount)
}

pub fn move_lateral(camera: &Camera, amount: f64) -> Camera {
    translate(camera, camera.look_direction * amount)
}

fn translate(camera: &Camera, offset: DVec3) -> Camera {
    Camera {
        position: camera.position + offset,
        ..*camera
    }
}

/// Pitch: both directions turn around the camera's horizontal axis.
pub fn rotate_around_horizontal_axis(camera: &Camera, degrees: f64) -> Camera {
    let axis = camera.horizontal_direction();
    Camera {
        look_direction: rotate_vector_around_axis(camera.look_direction, axis, degrees),
        up_direction: rotate_vector_around_axis(camera.up_direction, axis, degrees),
        ..*camera
    }
}

/// Yaw: only the look direction turns, around the up direction.
pub fn rotate_around_vertical_axis(camera: &Camera, degrees: f64) -> Camera {
    Camera {
        look_direction: rotate_vector_around_axis(camera.look_direction, camera.up_direction, degrees),
        ..*camera
    }
}

/// Rodrigues' rotation formula, `v + sin(a)(k x v) + (1 - cos(a))(k x (k x v))`.
///
/// `axis` is expected to be a unit vector.
pub fn rotate_vector_around_axis(vector: DVec3, axis: DVec3, degrees: f64) -> DVec3 {
    let theta = degrees * std::f64::consts::PI / 180.0;
    let axis_x_vector = axis.cross(vector);
    let axis_x_axis_x_vector = axis.cross(axis_x_vector);

    vector + theta.sin() * axis_x_vector + (1.0 - theta.cos()) * axis_x_axis_x_vector
}

/// Maps a viewport point, with the viewport spanning `[-0.5, 0.5]` on both
/// axes around its center, to world X/Y.
pub fn viewport_to_world(camera: &Camera, viewport_point: DVec2, aspect_ratio: f64) -> DVec2 {
    viewport_point * DVec2::new(camera.width, camera.width / aspect_ratio) + camera.position.truncate()
}
