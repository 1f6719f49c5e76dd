/// Example: Render one wireframe frame of an OBJ file to stdout
///
/// Usage: cargo run --example print_frame -- path/to/file.obj [rotation_y] [rotation_x] [distance]

use std::env;
use wire3d_core::{draw_frame, fallback_mesh, load_or_fallback, Camera, CameraState};
use wire3d_terminal::AsciiRenderer;

fn main() {
    let args: Vec<String> = env::args().collect();

    let mesh = match args.get(1) {
        Some(path) => load_or_fallback(path).mesh,
        None => {
            eprintln!("Usage: {} <obj-file> [rotation_y] [rotation_x] [distance]", args[0]);
            eprintln!("\nNo OBJ file provided, using default cube...");
            fallback_mesh()
        }
    };

    let arg = |i: usize, default: f32| {
        args.get(i)
            .and_then(|s| s.parse::<f32>().ok())
            .unwrap_or(default)
    };
    let home = CameraState::default();
    let state = CameraState::new(arg(2, home.rotation_y), arg(3, home.rotation_x), arg(4, home.distance));

    let camera = Camera::default();
    let frame = camera.render_frame(&mesh, &state);

    let mut renderer = AsciiRenderer::new(80, 40, camera.viewport);
    draw_frame(&frame, &mut renderer);
    for line in renderer.lines() {
        println!("{}", line.trim_end());
    }
    println!(
        "{} triangles drawn, {} skipped",
        frame.triangles.len(),
        frame.skipped
    );
}
