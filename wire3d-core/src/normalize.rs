/// Bounding boxes and rescaling of meshes into the canonical [-1, 1] cube
use nalgebra::{Point3, Vector3};

use crate::error::MeshError;
use crate::geometry::{Mesh, Triangle};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point3<f32>,
    pub max: Point3<f32>,
}

impl Bounds {
    /// Bounds containing nothing: `min` at +inf and `max` at -inf
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY),
            max: Point3::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
        }
    }

    pub fn include(&mut self, p: &Point3<f32>) {
        self.min = self.min.inf(p);
        self.max = self.max.sup(p);
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    pub fn center(&self) -> Point3<f32> {
        nalgebra::center(&self.min, &self.max)
    }

    pub fn size(&self) -> Vector3<f32> {
        self.max - self.min
    }

    /// Largest of the three axis extents
    pub fn max_extent(&self) -> f32 {
        self.size().max()
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::empty()
    }
}

/// Component-wise min/max over every vertex of every triangle
pub fn compute_bounds(triangles: &[Triangle]) -> Bounds {
    let mut bounds = Bounds::empty();
    for triangle in triangles {
        for v in &triangle.vertices {
            bounds.include(v);
        }
    }
    bounds
}

/// Recentre on the origin and scale so the largest axis spans exactly 2 units
///
/// Returns a new triangle list; the input is left untouched. Every vertex maps
/// as `(v - center) * (2 / max_extent)`, so triangle count and vertex order
/// are preserved.
pub fn normalize_model(triangles: &[Triangle]) -> Result<Vec<Triangle>, MeshError> {
    if triangles.is_empty() {
        return Err(MeshError::Empty);
    }

    let bounds = compute_bounds(triangles);
    let max_size = bounds.max_extent();
    if !max_size.is_finite() || max_size <= 0.0 {
        return Err(MeshError::Degenerate(max_size));
    }

    let center = bounds.center();
    let scale = 2.0 / max_size;

    Ok(triangles
        .iter()
        .map(|t| t.map(|v| Point3::from((v - center) * scale)))
        .collect())
}

impl Mesh {
    pub fn bounds(&self) -> Bounds {
        compute_bounds(&self.triangles)
    }

    /// Normalized copy of this mesh, see [`normalize_model`]
    pub fn normalized(&self) -> Result<Mesh, MeshError> {
        normalize_model(&self.triangles).map(Mesh::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn tri(a: [f32; 3], b: [f32; 3], c: [f32; 3]) -> Triangle {
        Triangle::new(Point3::from(a), Point3::from(b), Point3::from(c))
    }

    #[test]
    fn test_empty_bounds_are_inverted() {
        let bounds = compute_bounds(&[]);
        assert!(bounds.is_empty());
        assert_eq!(bounds.min.x, f32::INFINITY);
        assert_eq!(bounds.max.z, f32::NEG_INFINITY);
    }

    #[test]
    fn test_bounds_cover_all_points() {
        let tris = [
            tri([0.0, 0.0, 0.0], [4.0, 1.0, 0.0], [0.0, 2.0, -1.0]),
            tri([-3.0, 0.5, 2.0], [1.0, 1.0, 1.0], [0.0, 0.0, 0.0]),
        ];
        let bounds = compute_bounds(&tris);
        assert_eq!(bounds.min, Point3::new(-3.0, 0.0, -1.0));
        assert_eq!(bounds.max, Point3::new(4.0, 2.0, 2.0));
        assert_eq!(bounds.max_extent(), 7.0);
    }

    #[test]
    fn test_normalized_mesh_spans_two_units_around_origin() {
        let tris = vec![
            tri([10.0, 10.0, 10.0], [14.0, 11.0, 10.0], [10.0, 12.0, 9.0]),
            tri([7.0, 10.5, 12.0], [11.0, 11.0, 11.0], [10.0, 10.0, 10.0]),
        ];
        let normalized = normalize_model(&tris).unwrap();
        assert_eq!(normalized.len(), tris.len());

        let bounds = compute_bounds(&normalized);
        assert!((bounds.max_extent() - 2.0).abs() < EPS);
        let center = bounds.center();
        assert!(center.coords.norm() < EPS);
    }

    #[test]
    fn test_normalize_keeps_point_correspondence() {
        let tris = vec![tri([0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 1.0, 0.0])];
        let normalized = normalize_model(&tris).unwrap();
        assert_eq!(normalized[0].vertices[0], Point3::new(-1.0, -0.5, 0.0));
        assert_eq!(normalized[0].vertices[1], Point3::new(1.0, -0.5, 0.0));
        assert_eq!(normalized[0].vertices[2], Point3::new(-1.0, 0.5, 0.0));
        // Input is left untouched
        assert_eq!(tris[0].vertices[1], Point3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_normalize_empty_mesh_is_an_error() {
        assert!(matches!(normalize_model(&[]), Err(MeshError::Empty)));
    }

    #[test]
    fn test_normalize_single_point_is_degenerate() {
        let tris = [tri([1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, 1.0])];
        assert!(matches!(
            normalize_model(&tris),
            Err(MeshError::Degenerate(size)) if size == 0.0
        ));
    }

    #[test]
    fn test_normalize_flat_mesh_is_fine() {
        // Coplanar meshes still have a positive largest extent
        let tris = [tri([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0])];
        let bounds = compute_bounds(&normalize_model(&tris).unwrap());
        assert!((bounds.max_extent() - 2.0).abs() < EPS);
        assert_eq!(bounds.size().z, 0.0);
    }

    #[test]
    fn test_normalize_non_finite_is_degenerate() {
        let tris = [tri([f32::INFINITY, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0])];
        assert!(matches!(
            normalize_model(&tris),
            Err(MeshError::Degenerate(size)) if size.is_infinite()
        ));
    }

    #[test]
    fn test_cube_is_already_normalized() {
        let cube = Mesh::cube(2.0);
        assert_eq!(cube.normalized().unwrap(), cube);
    }
}
