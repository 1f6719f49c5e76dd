/// Terminal-based wireframe viewer
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use std::io::{self, stdout, Write};
use wire3d_core::{draw_frame, Camera, CameraState, Mesh};

pub mod config;
pub mod renderer;

pub use config::{AppConfig, ConfigError, ControlsConfig};
pub use renderer::AsciiRenderer;

/// Outcome of a single key press
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyAction {
    Quit,
    /// A new camera state; triggers one redraw
    Update(CameraState),
    Ignore,
}

/// Map a key to a new camera state
///
/// `home` is the state restored by `r`. Angles wrap into [-180, 180) and the
/// distance is clamped to the configured limits.
pub fn apply_key(
    state: CameraState,
    code: KeyCode,
    controls: &ControlsConfig,
    home: CameraState,
) -> KeyAction {
    let step = controls.rotation_step;
    let zoom = |d: f32| (state.distance + d).clamp(controls.min_distance, controls.max_distance);

    match code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('a') | KeyCode::Left => {
            KeyAction::Update(state.with_rotation_y(wrap_degrees(state.rotation_y - step)))
        }
        KeyCode::Char('d') | KeyCode::Right => {
            KeyAction::Update(state.with_rotation_y(wrap_degrees(state.rotation_y + step)))
        }
        KeyCode::Char('w') | KeyCode::Up => {
            KeyAction::Update(state.with_rotation_x(wrap_degrees(state.rotation_x - step)))
        }
        KeyCode::Char('s') | KeyCode::Down => {
            KeyAction::Update(state.with_rotation_x(wrap_degrees(state.rotation_x + step)))
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            KeyAction::Update(state.with_distance(zoom(-controls.distance_step)))
        }
        KeyCode::Char('-') | KeyCode::Char('_') => {
            KeyAction::Update(state.with_distance(zoom(controls.distance_step)))
        }
        KeyCode::Char('r') => KeyAction::Update(home),
        _ => KeyAction::Ignore,
    }
}

fn wrap_degrees(angle: f32) -> f32 {
    (angle + 180.0).rem_euclid(360.0) - 180.0
}

/// Main application struct for terminal wireframe rendering
pub struct TerminalApp {
    mesh: Mesh,
    camera: Camera,
    state: CameraState,
    home: CameraState,
    controls: ControlsConfig,
    renderer: AsciiRenderer,
    running: bool,
}

impl TerminalApp {
    pub fn new(mesh: Mesh, config: &AppConfig) -> io::Result<Self> {
        let camera = config
            .camera_optics()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
        let (cols, rows) = terminal::size()?;
        let state = config.initial_state();

        Ok(Self {
            mesh,
            camera,
            state,
            home: state,
            controls: config.controls.clone(),
            renderer: AsciiRenderer::new(cols as usize, rows as usize, camera.viewport),
            running: true,
        })
    }

    pub fn state(&self) -> CameraState {
        self.state
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        self.render()?;

        // Redraw only when a parameter or the terminal size changes
        while self.running {
            match event::read()? {
                Event::Key(KeyEvent {
                    code,
                    kind: KeyEventKind::Press,
                    ..
                }) => self.handle_key(code)?,
                Event::Resize(cols, rows) => {
                    self.renderer.resize(cols as usize, rows as usize);
                    self.render()?;
                }
                _ => {}
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) -> io::Result<()> {
        match apply_key(self.state, code, &self.controls, self.home) {
            KeyAction::Quit => {
                self.running = false;
                Ok(())
            }
            KeyAction::Update(state) => {
                log::debug!("camera state {:?}", state);
                self.state = state;
                self.render()
            }
            KeyAction::Ignore => Ok(()),
        }
    }

    fn render(&mut self) -> io::Result<()> {
        let frame = self.camera.render_frame(&self.mesh, &self.state);
        draw_frame(&frame, &mut self.renderer);

        let mut stdout = stdout();
        self.renderer.draw(&mut stdout)?;

        // Status line overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(status_line(&self.state, frame.triangles.len(), frame.skipped)),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}

fn status_line(state: &CameraState, drawn: usize, skipped: usize) -> String {
    format!(
        "Wire3D | rotY {}° rotX {}° dist {} | {} tris ({} skipped) | A/D W/S=Rotate +/-=Zoom R=Reset Q=Quit",
        state.rotation_y, state.rotation_x, state.distance, drawn, skipped
    )
}
