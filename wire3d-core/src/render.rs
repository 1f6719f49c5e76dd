/// Seam between the geometry pipeline and a concrete drawing surface
use crate::pipeline::Frame;
use crate::screen::ScreenTriangle;

/// A surface that can stroke triangle outlines
pub trait RenderDriver {
    /// Wipe the surface before a new frame
    fn clear(&mut self);

    /// Stroke the closed outline of one triangle
    fn stroke_triangle(&mut self, triangle: &ScreenTriangle);
}

/// Clear the surface and stroke every triangle in frame order (back to front)
pub fn draw_frame<D: RenderDriver + ?Sized>(frame: &Frame, driver: &mut D) {
    driver.clear();
    for triangle in &frame.triangles {
        driver.stroke_triangle(triangle);
    }
}

/// Flatten a frame into `x0, y0, x1, y1` quadruples, three edges per triangle
pub fn frame_segments(frame: &Frame) -> Vec<f32> {
    let mut out = Vec::with_capacity(frame.triangles.len() * 12);
    for triangle in &frame.triangles {
        for (a, b) in triangle.edges() {
            out.extend_from_slice(&[a.x, a.y, b.x, b.y]);
        }
    }
    out
}
