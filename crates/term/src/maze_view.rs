//! MazeView: maps a [`MazeSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::MazeSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{CellState, DEFAULT_TILE_WIDTH};

pub const WALL_COLOR: Rgb = Rgb::new(0, 0, 0);
pub const CORRIDOR_COLOR: Rgb = Rgb::new(192, 192, 192);
pub const PLAYER_COLOR: Rgb = Rgb::new(0, 0, 255);
pub const GOAL_COLOR: Rgb = Rgb::new(255, 215, 0);
pub const TRAIL_COLOR: Rgb = Rgb::new(0, 0, 255);

/// Glyph used for every maze tile.
pub const TILE: char = '█';

/// Lines below the maze frame used by the status area.
const STATUS_LINES: u16 = 2;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Host-side state shown under the maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudView<'a> {
    pub solver: &'a str,
    pub seed: u32,
    /// Large centered message, e.g. when the goal has been reached.
    pub banner: Option<&'a str>,
}

impl Default for HudView<'_> {
    fn default() -> Self {
        Self {
            solver: "idle",
            seed: 0,
            banner: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Draws the maze as a grid of fixed-size tiles inside a border.
pub struct MazeView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
    anchor_y: AnchorY,
}

impl Default for MazeView {
    fn default() -> Self {
        Self::new(DEFAULT_TILE_WIDTH, 1)
    }
}

impl MazeView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w: tile_w.max(1),
            tile_h: tile_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Size of the bordered maze frame for a `rows x cols` maze.
    pub fn frame_size(&self, rows: usize, cols: usize) -> (u16, u16) {
        let cols = u16::try_from(cols).unwrap_or(u16::MAX);
        let rows = u16::try_from(rows).unwrap_or(u16::MAX);
        let w = cols.saturating_mul(self.tile_w).saturating_add(2);
        let h = rows.saturating_mul(self.tile_h).saturating_add(2);
        (w, h)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// Callers reuse one framebuffer across frames.
    pub fn render_into(
        &self,
        snap: &MazeSnapshot,
        hud: &HudView<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (frame_w, frame_h) = self.frame_size(snap.rows, snap.cols);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => {
                let needed = frame_h.saturating_add(STATUS_LINES);
                viewport.height.saturating_sub(needed) / 2
            }
            AnchorY::Top => 0,
        };

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        // Tiles past the viewport edge are never visible.
        for row in 0..snap.rows {
            let Some(py) = tile_origin(start_y, row, self.tile_h, viewport.height) else {
                break;
            };
            for col in 0..snap.cols {
                let Some(px) = tile_origin(start_x, col, self.tile_w, viewport.width) else {
                    break;
                };
                let style = CellStyle::solid(tile_color(snap.cell(row, col)));
                fb.fill_rect(px, py, self.tile_w, self.tile_h, TILE, style);
            }
        }

        self.draw_status(fb, snap, hud, start_x, start_y.saturating_add(frame_h));

        if let Some(text) = hud.banner {
            draw_banner(fb, start_x, start_y, frame_w, frame_h, text);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &MazeSnapshot,
        hud: &HudView<'_>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let style = CellStyle::text(Rgb::new(200, 200, 200));
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);
        // Edges stop at the framebuffer.
        let last_x = right.min(fb.width());
        let last_y = bottom.min(fb.height());

        fb.put_char(x, y, '┌', style);
        fb.put_char(right, y, '┐', style);
        fb.put_char(x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);
        for cx in x.saturating_add(1)..last_x {
            fb.put_char(cx, y, '─', style);
            fb.put_char(cx, bottom, '─', style);
        }
        for cy in y.saturating_add(1)..last_y {
            fb.put_char(x, cy, '│', style);
            fb.put_char(right, cy, '│', style);
        }
    }

    fn draw_status(
        &self,
        fb: &mut FrameBuffer,
        snap: &MazeSnapshot,
        hud: &HudView<'_>,
        x: u16,
        y: u16,
    ) {
        let label = CellStyle::text(Rgb::new(220, 220, 220)).bold();
        let value = CellStyle::text(Rgb::new(200, 200, 200));
        let hint = value.dim();

        let mut cx = fb.put_str(x, y, "MOVES ", label);
        cx = fb.put_u32(cx, y, snap.moves, value);
        cx = fb.put_str(cx, y, "  SOLVER ", label);
        cx = fb.put_str(cx, y, hud.solver, value);
        cx = fb.put_str(cx, y, "  SEED ", label);
        fb.put_u32(cx, y, hud.seed, value);

        fb.put_str(x, y.saturating_add(1), "arrows/hjkl move  space solve  q quit", hint);
    }
}

/// Tile color for each cell state.
pub fn tile_color(state: CellState) -> Rgb {
    match state {
        CellState::Wall => WALL_COLOR,
        CellState::Corridor => CORRIDOR_COLOR,
        CellState::Player => PLAYER_COLOR,
        CellState::Goal => GOAL_COLOR,
        CellState::Trail => TRAIL_COLOR,
    }
}

fn draw_banner(
    fb: &mut FrameBuffer,
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
    text: &str,
) {
    let text_w = u16::try_from(text.chars().count())
        .unwrap_or(u16::MAX)
        .saturating_add(2);
    let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
    let y = start_y.saturating_add(frame_h / 2);
    let style = CellStyle {
        fg: Rgb::new(255, 255, 255),
        bg: Rgb::new(0, 0, 0),
        bold: true,
        dim: false,
    };
    fb.put_char(x, y, ' ', style);
    let end = fb.put_str(x.saturating_add(1), y, text, style);
    fb.put_char(end, y, ' ', style);
}

/// Screen coordinate of tile `index` along one axis, or `None` once it
/// falls at or past `limit`.
fn tile_origin(start: u16, index: usize, tile: u16, limit: u16) -> Option<u16> {
    let offset = u16::try_from(index).ok()?.checked_mul(tile)?;
    let pos = start.checked_add(1)?.checked_add(offset)?;
    (pos < limit).then_some(pos)
}
