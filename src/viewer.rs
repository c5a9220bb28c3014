use glam::{DVec2, DVec3};

use crate::camera::{navigator, Camera};
use crate::dem::{CoordinatesOutOfBoundsError, ElevationGrid};
use crate::mesh::{build_terrain, CircleAnnotation, Mesh};
use crate::settings::Settings;


/// Keyboard navigation steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    MoveLeft,
    MoveRight,
    MoveForward,
    MoveBack,
    MoveDown,
    MoveUp,
    PitchUp,
    PitchDown,
    YawRight,
    YawLeft,
}

/// Shape of the on-screen viewport a point was taken from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// width / height
    pub aspect_ratio: f64,
    pub width_px: f64,
}

/// Everything a host needs to display one map.
///
/// Input points are viewport-relative, `[-0.5, 0.5]` on both axes with the
/// origin at the viewport center.
pub struct Viewer {
    grid: ElevationGrid,
    terrain: Mesh,
    camera: Camera,
    settings: Settings,
    circle: Option<CircleAnnotation>,
    cursor: Option<DVec3>,
    /// first click of a circle in progress
    circle_center: Option<DVec2>,
    pan_anchor: Option<DVec2>,
}

impl Viewer {
    pub fn new(grid: ElevationGrid, settings: Settings) -> Self {
        let terrain = build_terrain(&grid);
        let camera = Camera::overview(&grid);

        Viewer {
            grid,
            terrain,
            camera,
            settings,
            circle: None,
            cursor: None,
            circle_center: None,
            pan_anchor: None,
        }
    }

    pub fn grid(&self) -> &ElevationGrid {
        &self.grid
    }

    pub fn terrain(&self) -> &Mesh {
        &self.terrain
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn circle(&self) -> Option<&CircleAnnotation> {
        self.circle.as_ref()
    }

    /// Ring and crosshair of the current circle.
    pub fn circle_meshes(&self) -> Option<(Mesh, Mesh)> {
        self.circle
            .as_ref()
            .map(|circle| (circle.ring_mesh(), circle.crosshair_mesh()))
    }

    pub fn last_cursor(&self) -> Option<DVec3> {
        self.cursor
    }

    pub fn reset_view(&mut self) {
        self.camera = Camera::overview(&self.grid);
        self.circle = None;
        self.circle_center = None;
        self.pan_anchor = None;
    }

    /// Updates the cursor reading; points off the map clear it.
    pub fn cursor(
        &mut self,
        point: DVec2,
        viewport: Viewport,
    ) -> Result<DVec3, CoordinatesOutOfBoundsError> {
        let world = self.to_world(point, viewport);
        let probed = self.grid.probe(world);
        self.cursor = probed.ok();
        probed
    }

    pub fn key(&mut self, action: KeyAction) {
        let step = self.settings.movement_step;
        let angle = self.settings.rotation_step;
        let camera = &self.camera;

        self.camera = match action {
            KeyAction::MoveLeft => navigator::move_horizontal(camera, -step),
            KeyAction::MoveRight => navigator::move_horizontal(camera, step),
            KeyAction::MoveBack => navigator::move_lateral(camera, -step),
            KeyAction::MoveForward => navigator::move_lateral(camera, step),
            KeyAction::MoveDown => navigator::move_vertical(camera, -step),
            KeyAction::MoveUp => navigator::move_vertical(camera, step),
            KeyAction::PitchUp => navigator::rotate_around_horizontal_axis(camera, angle),
            KeyAction::PitchDown => navigator::rotate_around_horizontal_axis(camera, -angle),
            KeyAction::YawRight => navigator::rotate_around_vertical_axis(camera, angle),
            KeyAction::YawLeft => navigator::rotate_around_vertical_axis(camera, -angle),
        };
    }

    /// The first click picks the circle center, the second one its radius.
    pub fn click(&mut self, point: DVec2, viewport: Viewport) {
        let world = self.to_world(point, viewport);

        match self.circle_center.take() {
            Some(center) => self.draw_circle(center, center.distance(world), viewport),
            None => self.circle_center = Some(world),
        }
    }

    /// Redraws a circle in progress through the cursor.
    pub fn hover(&mut self, point: DVec2, viewport: Viewport) {
        if let Some(center) = self.circle_center {
            let world = self.to_world(point, viewport);
            self.draw_circle(center, center.distance(world), viewport);
        }
    }

    /// Drag with the pan button held. The first call only anchors the drag.
    pub fn drag_pan(&mut self, point: DVec2, viewport: Viewport) {
        let world = self.to_world(point, viewport);
        let anchor = *self.pan_anchor.get_or_insert(world);

        self.camera = navigator::pan(&self.camera, world - anchor);
    }

    pub fn end_pan(&mut self) {
        self.pan_anchor = None;
    }

    /// Zooms towards the cursor and keeps the circle's on-screen line width.
    pub fn wheel(&mut self, delta: f64, point: DVec2, viewport: Viewport) {
        let cursor = self.to_world(point, viewport);
        self.camera = navigator::zoom(&self.camera, delta, self.settings.zoom_sensitivity, cursor);

        if let Some(circle) = self.circle.take() {
            self.draw_circle(circle.center, circle.radius, viewport);
        }
    }

    fn draw_circle(&mut self, center: DVec2, radius: f64, viewport: Viewport) {
        let to_world = self.camera.width / viewport.width_px;

        self.circle = Some(CircleAnnotation::new(
            center,
            radius,
            self.grid.max_altitude() as f64,
            self.settings.line_width * to_world,
            self.settings.center_size * to_world,
            self.settings.segment_count,
        ));
    }

    fn to_world(&self, point: DVec2, viewport: Viewport) -> DVec2 {
        navigator::viewport_to_world(&self.camera, point, viewport.aspect_ratio)
    }
}
