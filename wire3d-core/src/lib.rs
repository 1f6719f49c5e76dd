/// Wire3D Core Library - Wireframe geometry pipeline
///
/// Loads triangle meshes, normalizes them, transforms them through a view and
/// perspective projection, orders them back to front and maps them to screen
/// space. Drawing is left to a [`RenderDriver`] implementation.

pub mod depth;
pub mod error;
pub mod geometry;
pub mod loader;
pub mod math;
pub mod normalize;
pub mod obj;
pub mod pipeline;
pub mod render;
pub mod screen;

// Re-export commonly used types
pub use error::{CameraError, MeshError};
pub use geometry::{Mesh, Triangle};
pub use loader::{fallback_mesh, load_or_fallback, LoadedMesh, MeshOrigin};
pub use normalize::{compute_bounds, normalize_model, Bounds};
pub use obj::{parse_obj, parse_obj_with_report, ObjReport};
pub use pipeline::{Camera, CameraState, Frame, Lens, ProjectedTriangle};
pub use render::{draw_frame, frame_segments, RenderDriver};
pub use screen::{to_screen, ScreenPoint, ScreenTriangle, Viewport};
