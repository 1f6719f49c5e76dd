/// ASCII line rasterizer for terminal rendering
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;
use nalgebra::Point2;
use wire3d_core::{RenderDriver, ScreenTriangle, Viewport};

/// Terminal cells are roughly twice as tall as they are wide
const CELL_ASPECT: f32 = 2.0;

/// Stroke colour, matching the canvas viewer
const STROKE_COLOR: Color = Color::Red;

/// Renders triangle outlines from surface pixel space into a character grid
///
/// The surface is fitted into the grid keeping its aspect ratio and centred.
pub struct AsciiRenderer {
    cols: usize,
    rows: usize,
    surface: Viewport,
    char_buffer: Vec<char>,
}

impl AsciiRenderer {
    pub fn new(cols: usize, rows: usize, surface: Viewport) -> Self {
        Self {
            cols,
            rows,
            surface,
            char_buffer: vec![' '; cols * rows],
        }
    }

    pub fn resize(&mut self, cols: usize, rows: usize) {
        self.cols = cols;
        self.rows = rows;
        self.char_buffer = vec![' '; cols * rows];
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell(&self, col: usize, row: usize) -> Option<char> {
        if col < self.cols && row < self.rows {
            Some(self.char_buffer[row * self.cols + col])
        } else {
            None
        }
    }

    /// Grid rows as strings, top to bottom
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.char_buffer
            .chunks(self.cols.max(1))
            .map(|row| row.iter().collect())
    }

    /// Map a surface pixel position to fractional grid coordinates
    pub fn to_cell(&self, p: Point2<f32>) -> Point2<f32> {
        let cell_width = (self.surface.width / self.cols as f32)
            .max(self.surface.height / (self.rows as f32 * CELL_ASPECT));
        let cell_height = cell_width * CELL_ASPECT;
        let offset_col = (self.cols as f32 - self.surface.width / cell_width) / 2.0;
        let offset_row = (self.rows as f32 - self.surface.height / cell_height) / 2.0;

        Point2::new(p.x / cell_width + offset_col, p.y / cell_height + offset_row)
    }

    fn draw_line(&mut self, a: Point2<f32>, b: Point2<f32>) {
        if self.cols == 0 || self.rows == 0 {
            return;
        }
        let (a, b) = (self.to_cell(a), self.to_cell(b));
        let glyph = slope_glyph(b.x - a.x, b.y - a.y);

        let Some((a, b)) = clip_segment(a, b, self.cols as f32, self.rows as f32) else {
            return;
        };

        // Bresenham between cell centres
        let (mut x0, mut y0) = (a.x.floor() as i64, a.y.floor() as i64);
        let (x1, y1) = (b.x.floor() as i64, b.y.floor() as i64);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x0, y0, glyph);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    fn plot(&mut self, col: i64, row: i64, glyph: char) {
        if col >= 0 && row >= 0 && (col as usize) < self.cols && (row as usize) < self.rows {
            self.char_buffer[row as usize * self.cols + col as usize] = glyph;
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.queue(SetForegroundColor(STROKE_COLOR))?;
        for (row, line) in self.lines().enumerate() {
            writer.queue(cursor::MoveTo(0, row as u16))?;
            writer.queue(Print(line))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl RenderDriver for AsciiRenderer {
    fn clear(&mut self) {
        self.char_buffer.fill(' ');
    }

    fn stroke_triangle(&mut self, triangle: &ScreenTriangle) {
        for (a, b) in triangle.edges() {
            self.draw_line(a, b);
        }
    }
}

/// Pick a character that follows the on-screen direction of a segment
fn slope_glyph(dx: f32, dy: f32) -> char {
    let (vx, vy) = (dx.abs(), (dy * CELL_ASPECT).abs());
    if vx >= 2.0 * vy {
        '-'
    } else if vy >= 2.0 * vx {
        '|'
    } else if (dx > 0.0) == (dy > 0.0) {
        '\\'
    } else {
        '/'
    }
}

/// Liang-Barsky clip of a segment to `[0, width) x [0, height)` in grid space
///
/// Keeps rasterization bounded when a vertex projects far off the surface.
fn clip_segment(
    a: Point2<f32>,
    b: Point2<f32>,
    width: f32,
    height: f32,
) -> Option<(Point2<f32>, Point2<f32>)> {
    if !(a.x.is_finite() && a.y.is_finite() && b.x.is_finite() && b.y.is_finite()) {
        return None;
    }

    // Stay just inside the far edges so floor() lands on the last cell
    let max_x = width - 1e-3;
    let max_y = height - 1e-3;
    let d = b - a;
    let (mut t0, mut t1) = (0.0_f32, 1.0_f32);

    for (p, q) in [
        (-d.x, a.x),
        (d.x, max_x - a.x),
        (-d.y, a.y),
        (d.y, max_y - a.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            t0 = t0.max(t);
        } else {
            t1 = t1.min(t);
        }
        if t0 > t1 {
            return None;
        }
    }

    Some((a + d * t0, a + d * t1))
}
