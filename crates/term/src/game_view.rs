//! GameView: maps a core `RenderSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{template, RenderSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{ColorTag, ShapeId, BOARD_HEIGHT, BOARD_WIDTH, GRID_SIZE};

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where the well frame landed in the last layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Allocation free: callers reuse one framebuffer across frames and it
    /// only grows when the viewport does.
    pub fn render_into(&self, snap: &RenderSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let frame = self.layout(viewport);
        let well = CellStyle::new(Rgb::new(80, 80, 90), WELL_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            frame.w - 2,
            frame.h - 2,
            ' ',
            well,
        );
        draw_border(fb, frame.x, frame.y, frame.w, frame.h, border);

        // Locked cells, dotted grid elsewhere.
        for y in 0..BOARD_HEIGHT as u16 {
            for x in 0..BOARD_WIDTH as u16 {
                match snap.locked_at(x as usize, y as usize) {
                    Some(shape) => self.draw_block(fb, frame, x, y, shape),
                    None => self.draw_empty_cell(fb, frame, x, y),
                }
            }
        }

        if let Some(active) = snap.active {
            if let Some(ghost_y) = snap.ghost_y {
                for (x, y) in active.ghost_cells(ghost_y) {
                    let Some((x, y)) = on_board(x, y) else {
                        continue;
                    };
                    // A swapped-in hold piece can sit on the stack; keep locked cells visible.
                    if snap.locked_at(x as usize, y as usize).is_none() {
                        self.draw_ghost_cell(fb, frame, x, y);
                    }
                }
            }
            // Cells above the top row stay hidden.
            for (x, y) in active.cells {
                if let Some((x, y)) = on_board(x, y) {
                    self.draw_block(fb, frame, x, y, active.shape);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.game_over {
            draw_game_over(fb, frame);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &RenderSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn layout(&self, viewport: Viewport) -> Frame {
        let w = (BOARD_WIDTH as u16) * self.cell_w + 2;
        let h = (BOARD_HEIGHT as u16) * self.cell_h + 2;
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        Frame { x, y, w, h }
    }

    fn cell_origin(&self, frame: Frame, x: u16, y: u16) -> (u16, u16) {
        (frame.x + 1 + x * self.cell_w, frame.y + 1 + y * self.cell_h)
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), WELL_BG).dim();
        let (px, py) = self.cell_origin(frame, x, y);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '·', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, shape: ShapeId) {
        let style = CellStyle::new(shape_rgb(shape), WELL_BG).bold();
        let (px, py) = self.cell_origin(frame, x, y);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
    }

    /// `[]` outline, or a shade glyph when cells are one column wide.
    fn draw_ghost_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(140, 140, 140), WELL_BG);
        let (px, py) = self.cell_origin(frame, x, y);
        if self.cell_w < 2 {
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '░', style);
            return;
        }
        for dy in 0..self.cell_h {
            fb.fill_rect(px, py + dy, self.cell_w, 1, ' ', style);
            fb.put_char(px, py + dy, '[', style);
            fb.put_char(px + self.cell_w - 1, py + dy, ']', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &RenderSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        let box_w = GRID_SIZE as u16 * 2 + 2;
        if panel_x >= viewport.width || viewport.width - panel_x < box_w {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = frame.y;
        for (name, n) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), n, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        draw_preview(fb, panel_x, y, Some(snap.next), false);
        y = y.saturating_add(GRID_SIZE as u16 + 3);

        fb.put_str(panel_x, y, "HOLD", label);
        y = y.saturating_add(1);
        // Greyed out while the hold has been used for this piece.
        draw_preview(fb, panel_x, y, snap.hold, !snap.can_hold);
        y = y.saturating_add(GRID_SIZE as u16 + 3);

        let keys = CellStyle::new(Rgb::new(150, 150, 160), PANEL_BG);
        for line in CONTROLS {
            fb.put_str(panel_x, y, line, keys);
            y = y.saturating_add(1);
        }
    }

    /// Paint whole well rows as solid bars, for the line clear blink.
    ///
    /// Call after [`GameView::render_into`] with the same viewport; `bright`
    /// alternates between white and dark gray frames.
    pub fn draw_row_flash(
        &self,
        fb: &mut FrameBuffer,
        viewport: Viewport,
        rows: &[u8],
        bright: bool,
    ) {
        let frame = self.layout(viewport);
        let fg = if bright {
            Rgb::new(255, 255, 255)
        } else {
            Rgb::new(90, 90, 90)
        };
        let style = CellStyle::new(fg, WELL_BG).bold();
        for &row in rows.iter().filter(|&&r| r < BOARD_HEIGHT) {
            let (px, py) = self.cell_origin(frame, 0, row as u16);
            fb.fill_rect(px, py, frame.w - 2, self.cell_h, '█', style);
        }
    }
}

const CONTROLS: [&str; 4] = ["WASD / Arrows", "Space: Drop", "C: Hold", "Q: Quit"];

/// Bordered 4x4 box showing a shape template, two columns per cell.
fn draw_preview(fb: &mut FrameBuffer, x: u16, y: u16, shape: Option<ShapeId>, dim: bool) {
    let border = CellStyle::new(Rgb::new(120, 120, 130), PANEL_BG);
    let w = GRID_SIZE as u16 * 2 + 2;
    let h = GRID_SIZE as u16 + 2;
    draw_border(fb, x, y, w, h, border);

    let Some(shape) = shape else {
        return;
    };
    let mut style = CellStyle::new(shape_rgb(shape), PANEL_BG).bold();
    if dim {
        style = CellStyle { bold: false, ..style }.dim();
    }
    for (row, col) in template(shape).cells() {
        let px = x + 1 + col as u16 * 2;
        let py = y + 1 + row as u16;
        fb.fill_rect(px, py, 2, 1, '█', style);
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn draw_game_over(fb: &mut FrameBuffer, frame: Frame) {
    let title = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
    let hint = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
    let mid_y = frame.y.saturating_add(frame.h / 2);
    put_centered(fb, frame, mid_y, "GAME OVER", title);
    put_centered(fb, frame, mid_y.saturating_add(2), "R restart  Q quit", hint);
}

fn put_centered(fb: &mut FrameBuffer, frame: Frame, y: u16, text: &str, style: CellStyle) {
    let text_w = text.chars().count() as u16;
    let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
    fb.put_str(x, y, text, style);
}

fn on_board(x: i8, y: i8) -> Option<(u16, u16)> {
    let inside = (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y);
    inside.then_some((x as u16, y as u16))
}

fn shape_rgb(shape: ShapeId) -> Rgb {
    color_rgb(crate::core::shapes::color(shape))
}

/// Terminal color for a shape's color tag.
pub fn color_rgb(tag: ColorTag) -> Rgb {
    match tag {
        ColorTag::LightCyan => Rgb::new(80, 220, 220),
        ColorTag::Yellow => Rgb::new(240, 220, 80),
        ColorTag::Magenta => Rgb::new(200, 120, 220),
        ColorTag::Brown => Rgb::new(190, 120, 60),
        ColorTag::Blue => Rgb::new(80, 120, 220),
        ColorTag::Green => Rgb::new(100, 220, 120),
        ColorTag::Red => Rgb::new(220, 80, 80),
    }
}
