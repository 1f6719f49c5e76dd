/// Geometry primitives for wireframe rendering
use nalgebra::Point3;

/// A triangle face defined by three points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Point3<f32>; 3],
}

impl Triangle {
    pub fn new(v0: Point3<f32>, v1: Point3<f32>, v2: Point3<f32>) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    /// Build a new triangle by applying `f` to every vertex, keeping vertex order
    pub fn map<F>(&self, mut f: F) -> Self
    where
        F: FnMut(&Point3<f32>) -> Point3<f32>,
    {
        Self {
            vertices: [
                f(&self.vertices[0]),
                f(&self.vertices[1]),
                f(&self.vertices[2]),
            ],
        }
    }
}

/// A 3D mesh composed of triangles, kept in source order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(capacity),
        }
    }

    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Iterate over every vertex of every triangle
    pub fn points(&self) -> impl Iterator<Item = &Point3<f32>> {
        self.triangles.iter().flat_map(|t| t.vertices.iter())
    }

    /// Axis-aligned cube centred on the origin, 12 triangles, two per face
    pub fn cube(size: f32) -> Self {
        let h = size / 2.0;
        let p = |x: f32, y: f32, z: f32| Point3::new(x * h, y * h, z * h);
        let mut mesh = Self::with_capacity(12);

        // Front face
        mesh.add_triangle(Triangle::new(p(-1.0, -1.0, 1.0), p(1.0, -1.0, 1.0), p(1.0, 1.0, 1.0)));
        mesh.add_triangle(Triangle::new(p(-1.0, -1.0, 1.0), p(1.0, 1.0, 1.0), p(-1.0, 1.0, 1.0)));

        // Back face
        mesh.add_triangle(Triangle::new(p(-1.0, -1.0, -1.0), p(-1.0, 1.0, -1.0), p(1.0, 1.0, -1.0)));
        mesh.add_triangle(Triangle::new(p(-1.0, -1.0, -1.0), p(1.0, 1.0, -1.0), p(1.0, -1.0, -1.0)));

        // Top face
        mesh.add_triangle(Triangle::new(p(-1.0, 1.0, -1.0), p(-1.0, 1.0, 1.0), p(1.0, 1.0, 1.0)));
        mesh.add_triangle(Triangle::new(p(-1.0, 1.0, -1.0), p(1.0, 1.0, 1.0), p(1.0, 1.0, -1.0)));

        // Bottom face
        mesh.add_triangle(Triangle::new(p(-1.0, -1.0, -1.0), p(1.0, -1.0, -1.0), p(1.0, -1.0, 1.0)));
        mesh.add_triangle(Triangle::new(p(-1.0, -1.0, -1.0), p(1.0, -1.0, 1.0), p(-1.0, -1.0, 1.0)));

        // Right face
        mesh.add_triangle(Triangle::new(p(1.0, -1.0, -1.0), p(1.0, 1.0, -1.0), p(1.0, 1.0, 1.0)));
        mesh.add_triangle(Triangle::new(p(1.0, -1.0, -1.0), p(1.0, 1.0, 1.0), p(1.0, -1.0, 1.0)));

        // Left face
        mesh.add_triangle(Triangle::new(p(-1.0, -1.0, -1.0), p(-1.0, -1.0, 1.0), p(-1.0, 1.0, 1.0)));
        mesh.add_triangle(Triangle::new(p(-1.0, -1.0, -1.0), p(-1.0, 1.0, 1.0), p(-1.0, 1.0, -1.0)));

        mesh
    }
}

impl From<Vec<Triangle>> for Mesh {
    fn from(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }
}
