/// Mesh loading with a built-in fallback shape
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::MeshError;
use crate::geometry::Mesh;
use crate::obj::parse_obj_with_report;

/// Where a loaded mesh came from
#[derive(Debug, Clone, PartialEq)]
pub enum MeshOrigin {
    File(PathBuf),
    Fallback,
}

/// A mesh ready for rendering plus its provenance
#[derive(Debug, Clone)]
pub struct LoadedMesh {
    pub mesh: Mesh,
    pub origin: MeshOrigin,
}

/// Axis-aligned cube with corners at +/-1, already in normalized form
pub fn fallback_mesh() -> Mesh {
    Mesh::cube(2.0)
}

/// Parse OBJ text and normalize it into the [-1, 1] cube
pub fn mesh_from_obj(text: &str) -> Result<Mesh, MeshError> {
    let (mesh, report) = parse_obj_with_report(text);
    log::info!(
        "parsed {} vertices into {} triangles ({} short faces, {} malformed lines)",
        report.vertices,
        report.triangles,
        report.short_faces,
        report.malformed_lines.len()
    );
    mesh.normalized()
}

/// Read and normalize an OBJ file
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
pub fn load_mesh_file<P: AsRef<Path>>(path: P) -> Result<Mesh, MeshError> {
    let data = fs::read(path.as_ref())?;
    mesh_from_obj(&String::from_utf8_lossy(&data))
}

/// Load a mesh, substituting the fallback cube on any failure
pub fn load_or_fallback<P: AsRef<Path>>(path: P) -> LoadedMesh {
    let path = path.as_ref();
    match load_mesh_file(path) {
        Ok(mesh) => {
            log::info!("loaded {} triangles from {}", mesh.len(), path.display());
            LoadedMesh {
                mesh,
                origin: MeshOrigin::File(path.to_path_buf()),
            }
        }
        Err(e) => {
            log::warn!("could not load {}: {}; using cube", path.display(), e);
            LoadedMesh {
                mesh: fallback_mesh(),
                origin: MeshOrigin::Fallback,
            }
        }
    }
}
