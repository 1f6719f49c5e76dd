/// Perspective divide and mapping from normalized device coordinates to pixels
use nalgebra::{Point2, Vector4};

use crate::error::CameraError;
use crate::pipeline::ProjectedTriangle;

/// Target surface size in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Result<Self, CameraError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(CameraError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 800.0,
        }
    }
}

/// A vertex in pixel space; `z` is the NDC depth, passed through untouched
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl ScreenPoint {
    pub fn xy(&self) -> Point2<f32> {
        Point2::new(self.x, self.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// A triangle ready to be stroked as a closed outline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenTriangle {
    pub points: [ScreenPoint; 3],
    pub depth: f32,
}

impl ScreenTriangle {
    /// The three outline segments `0-1`, `1-2`, `2-0`
    pub fn edges(&self) -> [(Point2<f32>, Point2<f32>); 3] {
        let [a, b, c] = self.points.map(|p| p.xy());
        [(a, b), (b, c), (c, a)]
    }
}

/// Perspective-divide a clip-space vertex and map it onto the viewport
///
/// Returns `None` when `w` is exactly zero, i.e. the vertex lies on the
/// camera's focal plane. Screen Y grows downwards while NDC +Y points up.
pub fn to_screen(v: &Vector4<f32>, viewport: &Viewport) -> Option<ScreenPoint> {
    if v.w == 0.0 {
        return None;
    }

    let ndc_x = v.x / v.w;
    let ndc_y = v.y / v.w;
    let ndc_z = v.z / v.w;

    Some(ScreenPoint {
        x: (ndc_x + 1.0) * 0.5 * viewport.width,
        y: (1.0 - ndc_y) * 0.5 * viewport.height,
        z: ndc_z,
    })
}

/// Map all three vertices, or nothing if any of them is unprojectable
pub fn to_screen_triangle(triangle: &ProjectedTriangle, viewport: &Viewport) -> Option<ScreenTriangle> {
    let [a, b, c] = &triangle.vertices;
    Some(ScreenTriangle {
        points: [
            to_screen(a, viewport)?,
            to_screen(b, viewport)?,
            to_screen(c, viewport)?,
        ],
        depth: triangle.depth,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_w_is_absent() {
        let viewport = Viewport::default();
        assert!(to_screen(&Vector4::new(1.0, 2.0, 3.0, 0.0), &viewport).is_none());
        assert!(to_screen(&Vector4::new(0.0, 0.0, 0.0, -0.0), &viewport).is_none());
    }

    #[test]
    fn test_ndc_corners_map_to_surface_corners() {
        let viewport = Viewport::new(800.0, 600.0).unwrap();

        let top_left = to_screen(&Vector4::new(-1.0, 1.0, 0.0, 1.0), &viewport).unwrap();
        assert_eq!((top_left.x, top_left.y), (0.0, 0.0));

        let bottom_right = to_screen(&Vector4::new(2.0, -2.0, 0.0, 2.0), &viewport).unwrap();
        assert_eq!((bottom_right.x, bottom_right.y), (800.0, 600.0));

        let center = to_screen(&Vector4::new(0.0, 0.0, 0.5, 1.0), &viewport).unwrap();
        assert_eq!((center.x, center.y, center.z), (400.0, 300.0, 0.5));
    }

    #[test]
    fn test_negative_w_still_divides() {
        let viewport = Viewport::default();
        let p = to_screen(&Vector4::new(1.0, 1.0, 1.0, -1.0), &viewport).unwrap();
        assert_eq!((p.x, p.y, p.z), (0.0, 800.0, -1.0));
    }

    #[test]
    fn test_triangle_with_absent_vertex_is_skipped() {
        let projected = ProjectedTriangle {
            vertices: [
                Vector4::new(0.0, 0.0, 0.0, 1.0),
                Vector4::new(0.5, 0.0, 0.0, 0.0),
                Vector4::new(0.0, 0.5, 0.0, 1.0),
            ],
            depth: 0.0,
        };
        assert!(to_screen_triangle(&projected, &Viewport::default()).is_none());
    }

    #[test]
    fn test_edges_close_the_outline() {
        let p = |x, y| ScreenPoint { x, y, z: 0.0 };
        let tri = ScreenTriangle {
            points: [p(0.0, 0.0), p(10.0, 0.0), p(0.0, 10.0)],
            depth: 0.0,
        };
        let edges = tri.edges();
        assert_eq!(edges[0].0, Point2::new(0.0, 0.0));
        assert_eq!(edges[2].1, Point2::new(0.0, 0.0));
        assert_eq!(edges[1], (Point2::new(10.0, 0.0), Point2::new(0.0, 10.0)));
    }

    #[test]
    fn test_invalid_viewport() {
        assert!(Viewport::new(0.0, 100.0).is_err());
        assert!(Viewport::new(100.0, f32::NAN).is_err());
        assert_eq!(Viewport::default().aspect(), 1.0);
    }
}
