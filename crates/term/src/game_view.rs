//! GameView: maps a `GameSnapshot` onto a character surface.
//!
//! This module is pure (no I/O). The layout follows the playfield's own
//! proportions: the cell height is the viewport height divided by the 22 rows,
//! the cell width is a fixed multiple of that to offset the glyph aspect ratio,
//! and the well is centered horizontally.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};

const BLOCK: char = '█';
/// Largest accepted columns-per-row ratio
const MAX_ASPECT: u16 = 8;
const GAME_OVER_TEXT: &str = "GAME OVER!";

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

/// Where the playfield lands on the surface for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub cell_w: u16,
    pub cell_h: u16,
    /// Column of the playfield's left edge; negative when the viewport is too narrow
    pub offset_x: i32,
}

impl Layout {
    /// Surface origin of playfield cell (row, col)
    pub fn origin(&self, row: i32, col: i32) -> (i32, i32) {
        (
            self.offset_x + col * self.cell_w as i32,
            row * self.cell_h as i32,
        )
    }

    /// Drawn width of a block inside its cell
    pub fn block_width(&self) -> u16 {
        if self.cell_w > 1 {
            self.cell_w - 1
        } else {
            self.cell_w
        }
    }

    /// Width of the playfield on the surface
    pub fn field_width(&self) -> u16 {
        self.cell_w.saturating_mul(PLAYFIELD_WIDTH as u16)
    }
}

pub struct GameView {
    /// Terminal columns per cell row
    aspect: u16,
    background: Rgb,
    well: Rgb,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per row compensates for typical terminal glyph proportions.
        Self {
            aspect: 2,
            background: Rgb::new(30, 30, 40),
            well: Rgb::BLACK,
        }
    }
}

impl GameView {
    pub fn new(aspect: u16) -> Self {
        Self {
            aspect: aspect.clamp(1, MAX_ASPECT),
            ..Self::default()
        }
    }

    pub fn layout(&self, viewport: Viewport) -> Layout {
        let cell_h = (viewport.height / PLAYFIELD_HEIGHT as u16).max(1);
        let cell_w = cell_h.saturating_mul(self.aspect);
        let offset_x = viewport.width as i32 / 2 - (cell_w as i32 * PLAYFIELD_WIDTH as i32 / 2);
        Layout {
            cell_w,
            cell_h,
            offset_x,
        }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is reset to the
    /// viewport size on every call.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);
        fb.fill_rect(
            0,
            0,
            viewport.width,
            viewport.height,
            ' ',
            CellStyle::new(self.background, self.background),
        );

        let layout = self.layout(viewport);
        fb.fill_rect(
            layout.offset_x - 1,
            0,
            layout.field_width().saturating_add(2),
            viewport.height,
            ' ',
            CellStyle::new(self.well, self.well),
        );

        for row in 0..PLAYFIELD_HEIGHT {
            for col in 0..PLAYFIELD_WIDTH {
                if let Some(kind) = snap.locked_at(row, col) {
                    self.draw_block(fb, &layout, row as i32, col as i32, kind);
                }
            }
        }

        // Blocks above row 0 land at negative surface rows and are clipped.
        if let Some(active) = snap.active {
            for (row, col) in active.blocks() {
                self.draw_block(fb, &layout, row, col, active.kind);
            }
        }

        if snap.game_over {
            self.draw_game_over(fb, viewport);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Fill one cell. The last column stays well-colored when the cell is
    /// wider than one column, so neighbouring blocks read as separate squares.
    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        row: i32,
        col: i32,
        kind: PieceKind,
    ) {
        let (x, y) = layout.origin(row, col);
        let style = CellStyle::new(Rgb::from(kind.color()), self.well);
        fb.fill_rect(x, y, layout.block_width(), layout.cell_h, BLOCK, style);
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        let mid_y = viewport.height as i32 / 2;
        fb.shade_rect(0, mid_y - 1, viewport.width, 3);
        fb.fill_text_centered(
            viewport.width as i32 / 2,
            mid_y,
            GAME_OVER_TEXT,
            CellStyle::new(Rgb::WHITE, Rgb::BLACK).bold(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_scales_with_height() {
        let view = GameView::default();

        let small = view.layout(Viewport::new(80, 24));
        assert_eq!((small.cell_w, small.cell_h), (2, 1));
        assert_eq!(small.offset_x, 30);

        let tall = view.layout(Viewport::new(100, 44));
        assert_eq!((tall.cell_w, tall.cell_h), (4, 2));
        assert_eq!(tall.offset_x, 30);
    }

    #[test]
    fn large_aspect_is_clamped() {
        let view = GameView::new(u16::MAX);
        let layout = view.layout(Viewport::new(u16::MAX, u16::MAX));
        assert_eq!(layout.cell_w, layout.cell_h * MAX_ASPECT);
        assert_eq!(layout.field_width(), u16::MAX);
    }

    #[test]
    fn blocks_leave_a_gap_column() {
        let view = GameView::default();
        assert_eq!(view.layout(Viewport::new(80, 24)).block_width(), 1);
        assert_eq!(view.layout(Viewport::new(100, 44)).block_width(), 3);

        let narrow = GameView::new(1).layout(Viewport::new(80, 24));
        assert_eq!(narrow.block_width(), 1);
    }

    #[test]
    fn tiny_viewport_still_has_one_row_per_cell() {
        let view = GameView::default();
        let layout = view.layout(Viewport::new(10, 5));
        assert_eq!(layout.cell_h, 1);
        assert_eq!(layout.offset_x, -5);
    }
}
