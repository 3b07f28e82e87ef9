//! Character-cell drawing surface.
//!
//! The surface mirrors a small subset of a 2D canvas API (`fill_rect`,
//! `fill_text`, a translucent `shade_rect`) on top of a grid of styled
//! terminal cells.

use crate::types::PieceColor;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Blend toward black, keeping `keep / 4` of the original brightness.
    fn darken(self, keep: u8) -> Self {
        let scale = |v: u8| ((v as u16 * keep as u16) / 4) as u8;
        Self::new(scale(self.r), scale(self.g), scale(self.b))
    }
}

impl From<PieceColor> for Rgb {
    /// CSS named color values.
    fn from(color: PieceColor) -> Self {
        match color {
            PieceColor::Cyan => Rgb::new(0, 255, 255),
            PieceColor::Yellow => Rgb::new(255, 255, 0),
            PieceColor::Purple => Rgb::new(128, 0, 128),
            PieceColor::Green => Rgb::new(0, 128, 0),
            PieceColor::Red => Rgb::new(255, 0, 0),
            PieceColor::Blue => Rgb::new(0, 0, 255),
            PieceColor::Orange => Rgb::new(255, 165, 0),
        }
    }
}

/// Foreground/background pair plus bold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::BLACK)
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D grid of styled character cells. Writes outside the grid are clipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize and blank the surface, reusing the allocation where possible.
    pub fn reset(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells
            .resize(width as usize * height as usize, Cell::default());
    }

    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x as i32, y as i32).map(|i| self.cells[i])
    }

    /// One row of cells, or an empty slice past the bottom edge
    pub fn row(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = y as usize * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    /// Fill a rectangle with `ch`. Coordinates may be negative or overhang.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h as i32 {
            for dx in 0..w as i32 {
                if let Some(i) = self.idx(x + dx, y + dy) {
                    self.cells[i] = Cell { ch, style };
                }
            }
        }
    }

    /// Darken everything inside a rectangle, like a black fill at 75% alpha.
    pub fn shade_rect(&mut self, x: i32, y: i32, w: u16, h: u16) {
        for dy in 0..h as i32 {
            for dx in 0..w as i32 {
                if let Some(i) = self.idx(x + dx, y + dy) {
                    let style = &mut self.cells[i].style;
                    style.fg = style.fg.darken(1);
                    style.bg = style.bg.darken(1);
                }
            }
        }
    }

    /// Write text starting at (x, y), clipped to the surface.
    pub fn fill_text(&mut self, x: i32, y: i32, text: &str, style: CellStyle) {
        for (i, ch) in text.chars().enumerate() {
            if let Some(idx) = self.idx(x + i as i32, y) {
                self.cells[idx] = Cell { ch, style };
            }
        }
    }

    /// Write text horizontally centered on `center_x`.
    pub fn fill_text_centered(&mut self, center_x: i32, y: i32, text: &str, style: CellStyle) {
        let len = text.chars().count() as i32;
        self.fill_text(center_x - len / 2, y, text, style);
    }
}
