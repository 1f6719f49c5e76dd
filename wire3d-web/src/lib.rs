/// Wire3D Web - WASM binding that draws the wireframe on an HTML canvas
///
/// The host page owns the sliders and forwards their values; every setter
/// builds a new camera state and redraws once.
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use wire3d_core::loader::mesh_from_obj;
use wire3d_core::{
    draw_frame, fallback_mesh, frame_segments, Camera, CameraState, Frame, Mesh, RenderDriver,
    ScreenTriangle, Viewport,
};

const STROKE_STYLE: &str = "#ff0000";
const LINE_WIDTH: f64 = 1.0;

/// [`RenderDriver`] over a 2D canvas context
pub struct CanvasDriver {
    context: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasDriver {
    pub fn new(context: CanvasRenderingContext2d, width: f64, height: f64) -> Self {
        context.set_stroke_style(&JsValue::from_str(STROKE_STYLE));
        context.set_line_width(LINE_WIDTH);
        Self {
            context,
            width,
            height,
        }
    }
}

impl RenderDriver for CanvasDriver {
    fn clear(&mut self) {
        self.context.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn stroke_triangle(&mut self, triangle: &ScreenTriangle) {
        let [a, b, c] = triangle.points;
        self.context.begin_path();
        self.context.move_to(a.x as f64, a.y as f64);
        self.context.line_to(b.x as f64, b.y as f64);
        self.context.line_to(c.x as f64, c.y as f64);
        self.context.close_path();
        self.context.stroke();
    }
}

#[wasm_bindgen]
pub struct WebViewer {
    mesh: Mesh,
    camera: Camera,
    state: CameraState,
    driver: CanvasDriver,
}

#[wasm_bindgen]
impl WebViewer {
    /// Attach to a canvas element; the canvas is resized to the default 800x800 surface
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<WebViewer, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id '{}'", canvas_id)))?
            .dyn_into()?;

        let viewport = Viewport::default();
        canvas.set_width(viewport.width as u32);
        canvas.set_height(viewport.height as u32);

        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into()?;

        Ok(WebViewer {
            mesh: fallback_mesh(),
            camera: Camera {
                viewport,
                ..Camera::default()
            },
            state: CameraState::default(),
            driver: CanvasDriver::new(context, viewport.width as f64, viewport.height as f64),
        })
    }

    /// Replace the mesh with parsed OBJ text, or the cube if it is unusable
    ///
    /// Returns the number of triangles now loaded.
    pub fn load_obj(&mut self, text: &str) -> usize {
        self.mesh = match mesh_from_obj(text) {
            Ok(mesh) => {
                log::info!("Loaded {} triangles", mesh.len());
                mesh
            }
            Err(e) => {
                log::warn!("could not use OBJ source: {}; using cube", e);
                fallback_mesh()
            }
        };
        self.draw();
        self.mesh.len()
    }

    /// Switch to the built-in cube, e.g. after the mesh fetch failed
    pub fn use_fallback(&mut self) {
        self.mesh = fallback_mesh();
        self.draw();
    }

    pub fn set_rotation_y(&mut self, degrees: f32) {
        self.state = self.state.with_rotation_y(degrees);
        self.draw();
    }

    pub fn set_rotation_x(&mut self, degrees: f32) {
        self.state = self.state.with_rotation_x(degrees);
        self.draw();
    }

    pub fn set_camera_distance(&mut self, distance: f32) {
        if !(distance.is_finite() && distance > 0.0) {
            log::warn!("ignoring camera distance {}", distance);
            return;
        }
        self.state = self.state.with_distance(distance);
        self.draw();
    }

    pub fn draw(&mut self) {
        let frame = self.frame();
        draw_frame(&frame, &mut self.driver);
    }

    /// Current frame as `x0, y0, x1, y1` edge quadruples in draw order
    pub fn segments(&self) -> Vec<f32> {
        frame_segments(&self.frame())
    }

    pub fn triangle_count(&self) -> usize {
        self.mesh.len()
    }
}

impl WebViewer {
    fn frame(&self) -> Frame {
        self.camera.render_frame(&self.mesh, &self.state)
    }
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Setup panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    init_logger();

    Ok(())
}

#[cfg(feature = "console_log")]
fn init_logger() {
    use wasm_bindgen_console_logger::DEFAULT_LOGGER;
    // A second start call keeps the logger already installed
    if log::set_logger(&DEFAULT_LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Info);
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logger() {}
