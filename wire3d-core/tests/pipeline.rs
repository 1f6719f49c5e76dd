//! End-to-end checks of the mesh → frame pipeline

use wire3d_core::{
    draw_frame, fallback_mesh, loader::mesh_from_obj, Camera, CameraState, Frame, RenderDriver,
    ScreenTriangle,
};

#[test]
fn test_fallback_cube_front_view() {
    let camera = Camera::default();
    let state = CameraState::new(0.0, 0.0, 4.0);
    let mesh = fallback_mesh();

    let projected = camera.project_mesh(&mesh, &state);
    assert_eq!(projected.len(), 12);

    let frame = camera.render_frame(&mesh, &state);
    assert_eq!(frame.triangles.len(), 12);
    assert_eq!(frame.skipped, 0);
    for triangle in &frame.triangles {
        for p in &triangle.points {
            assert!(p.is_finite(), "non-finite screen point {:?}", p);
        }
    }

    // Depths are non-increasing in draw order
    for pair in frame.triangles.windows(2) {
        assert!(pair[0].depth >= pair[1].depth);
    }
}

#[test]
fn test_frame_is_deterministic() {
    let camera = Camera::default();
    let state = CameraState::new(0.0, 0.0, 4.0);
    let mesh = fallback_mesh();

    let first = camera.render_frame(&mesh, &state);
    for _ in 0..5 {
        assert_eq!(camera.render_frame(&mesh, &state), first);
    }
}

#[test]
fn test_front_face_drawn_last() {
    let camera = Camera::default();
    let frame = camera.render_frame(&fallback_mesh(), &CameraState::new(0.0, 0.0, 4.0));

    // Back face (z = -1) triangles are 2 and 3 in mesh order, front face (z = 1) 0 and 1.
    // The front face square spans x in [-1, 1] at distance 3: 1/3 of NDC half width.
    let last = &frame.triangles[11];
    let front_x = [400.0 - 400.0 / 3.0, 400.0 + 400.0 / 3.0];
    for p in &last.points {
        assert!(
            front_x.iter().any(|x| (p.x - x).abs() < 1e-2),
            "unexpected x {} for a front-face vertex",
            p.x
        );
    }
}

#[test]
fn test_default_view_fits_on_surface() {
    let camera = Camera::default();
    let frame = camera.render_frame(&fallback_mesh(), &CameraState::default());
    assert_eq!(frame.triangles.len(), 12);

    for triangle in &frame.triangles {
        for p in &triangle.points {
            assert!(p.x > 0.0 && p.x < 800.0, "x out of surface: {}", p.x);
            assert!(p.y > 0.0 && p.y < 800.0, "y out of surface: {}", p.y);
            // Everything sits between the clip planes
            assert!(p.z > -1.0 && p.z < 1.0);
        }
    }
}

struct Counter(usize);

impl RenderDriver for Counter {
    fn clear(&mut self) {
        self.0 = 0;
    }

    fn stroke_triangle(&mut self, _triangle: &ScreenTriangle) {
        self.0 += 1;
    }
}

#[test]
fn test_obj_source_to_driver() {
    let source = "\
# tetrahedron
v 0 0 0
v 2 0 0
v 0 2 0
v 0 0 2
f 1 3 2
f 1 2 4
f 1 4 3
f 2 3 4
f 1 2
";
    let mesh = mesh_from_obj(source).unwrap();
    assert_eq!(mesh.len(), 4);

    let camera = Camera::default();
    let frame: Frame = camera.render_frame(&mesh, &CameraState::default());
    let mut counter = Counter(7);
    draw_frame(&frame, &mut counter);
    assert_eq!(counter.0, 4);
}
