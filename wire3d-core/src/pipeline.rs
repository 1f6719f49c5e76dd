/// Camera state, projection and the per-redraw transform pipeline
use nalgebra::{Matrix4, Vector4};

use crate::depth::sort_back_to_front;
use crate::error::CameraError;
use crate::geometry::{Mesh, Triangle};
use crate::math::{
    multiply, perspective, rotation_x, rotation_y, transform_point, transform_vector, translation,
};
use crate::screen::{to_screen_triangle, ScreenTriangle, Viewport};

/// Orbit parameters driven by the input controls
///
/// Values are immutable; input handlers build a new state per event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Rotation about the Y axis in degrees
    pub rotation_y: f32,
    /// Rotation about the X axis in degrees
    pub rotation_x: f32,
    /// Distance from the camera to the model origin
    pub distance: f32,
}

impl CameraState {
    pub fn new(rotation_y: f32, rotation_x: f32, distance: f32) -> Self {
        Self {
            rotation_y,
            rotation_x,
            distance,
        }
    }

    pub fn with_rotation_y(self, rotation_y: f32) -> Self {
        Self { rotation_y, ..self }
    }

    pub fn with_rotation_x(self, rotation_x: f32) -> Self {
        Self { rotation_x, ..self }
    }

    pub fn with_distance(self, distance: f32) -> Self {
        Self { distance, ..self }
    }

    /// `T(0, 0, -distance) * Ry * Rx`: rotate about X, then Y, then push away from the camera
    pub fn view_matrix(&self) -> Matrix4<f32> {
        let trans = translation(0.0, 0.0, -self.distance);
        let rot_y = rotation_y(self.rotation_y);
        let rot_x = rotation_x(self.rotation_x);
        multiply(&multiply(&trans, &rot_y), &rot_x)
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new(45.0, 0.0, 4.0)
    }
}

/// Perspective lens parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lens {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Lens {
    pub fn validate(&self) -> Result<(), CameraError> {
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(CameraError::InvalidLens(format!(
                "field of view must be in (0, 180) degrees, got {}",
                self.fov_degrees
            )));
        }
        if !(self.near > 0.0 && self.far > self.near && self.far.is_finite()) {
            return Err(CameraError::InvalidLens(format!(
                "clip planes must satisfy 0 < near < far, got near={} far={}",
                self.near, self.far
            )));
        }
        Ok(())
    }

    pub fn projection_matrix(&self, aspect: f32) -> Matrix4<f32> {
        perspective(self.fov_degrees, aspect, self.near, self.far)
    }
}

impl Default for Lens {
    fn default() -> Self {
        Self {
            fov_degrees: 90.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

/// A triangle after view and projection, before the perspective divide
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedTriangle {
    pub vertices: [Vector4<f32>; 3],
    /// Mean of the three post-projection `z` components
    pub depth: f32,
}

/// Screen-space triangles in draw order for one redraw
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    /// Back to front
    pub triangles: Vec<ScreenTriangle>,
    /// Triangles dropped because a vertex had `w == 0`
    pub skipped: usize,
}

/// Fixed optics of the viewer: lens and target surface
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Camera {
    pub lens: Lens,
    pub viewport: Viewport,
}

impl Camera {
    pub fn new(lens: Lens, viewport: Viewport) -> Result<Self, CameraError> {
        lens.validate()?;
        Ok(Self { lens, viewport })
    }

    pub fn projection_matrix(&self) -> Matrix4<f32> {
        self.lens.projection_matrix(self.viewport.aspect())
    }

    /// Transform every triangle by the view and then the projection matrix
    ///
    /// Output order matches mesh order; nothing is sorted or dropped here.
    pub fn project_mesh(&self, mesh: &Mesh, state: &CameraState) -> Vec<ProjectedTriangle> {
        let view = state.view_matrix();
        let projection = self.projection_matrix();

        mesh.triangles
            .iter()
            .map(|t| project_triangle(t, &view, &projection))
            .collect()
    }

    /// One full redraw: project, sort back to front, map to the screen
    pub fn render_frame(&self, mesh: &Mesh, state: &CameraState) -> Frame {
        let mut projected = self.project_mesh(mesh, state);
        sort_back_to_front(&mut projected);

        let mut frame = Frame {
            triangles: Vec::with_capacity(projected.len()),
            skipped: 0,
        };
        for triangle in &projected {
            match to_screen_triangle(triangle, &self.viewport) {
                Some(screen) => frame.triangles.push(screen),
                None => frame.skipped += 1,
            }
        }

        log::trace!(
            "frame: {} triangles, {} skipped (ry={} rx={} d={})",
            frame.triangles.len(),
            frame.skipped,
            state.rotation_y,
            state.rotation_x,
            state.distance
        );
        frame
    }
}

/// View transform followed by a separate projection transform per vertex
pub fn project_triangle(
    triangle: &Triangle,
    view: &Matrix4<f32>,
    projection: &Matrix4<f32>,
) -> ProjectedTriangle {
    let vertices = triangle
        .vertices
        .map(|v| transform_vector(projection, &transform_point(view, &v)));
    let depth = (vertices[0].z + vertices[1].z + vertices[2].z) / 3.0;
    ProjectedTriangle { vertices, depth }
}
