/// Wire3D Terminal Viewer
///
/// Usage: wire3d-terminal [path/to/model.obj]
///
/// Falls back to a cube when the model cannot be loaded.
/// Controls:
///   - A/D / Left/Right: Rotate about Y
///   - W/S / Up/Down: Rotate about X
///   - +/-: Move the camera closer / farther
///   - R: Reset view
///   - Q/ESC: Quit

use std::env;
use std::io;
use wire3d_core::load_or_fallback;
use wire3d_terminal::{AppConfig, TerminalApp};

fn main() -> io::Result<()> {
    let config = AppConfig::load();

    let log_level = config
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
    log::info!("Starting Wire3D terminal viewer");

    let config = config.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let path = env::args().nth(1).unwrap_or_else(|| config.mesh.path.clone());
    let loaded = load_or_fallback(&path);
    log::info!("Rendering {} triangles ({:?})", loaded.mesh.len(), loaded.origin);

    let mut app = TerminalApp::new(loaded.mesh, &config)?;
    app.run()?;

    log::info!("Final camera state: {:?}", app.state());
    Ok(())
}
