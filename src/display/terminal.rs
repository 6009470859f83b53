//! Cell-buffer canvas that rasterises the 800×600 world onto the terminal
//! grid and flushes it with queued crossterm commands.

use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{self, Color, Print},
    QueueableCommand,
};

use super::{Align, Canvas};
use crate::constants::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::entities::Rgb;
use crate::geometry::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Rgb,
    pub bg: Rgb,
}

impl Cell {
    const BLANK: Cell = Cell { ch: ' ', fg: Rgb::WHITE, bg: Rgb::BLACK };
}

fn color(c: Rgb) -> Color {
    Color::Rgb { r: c.0, g: c.1, b: c.2 }
}

pub struct TerminalCanvas {
    cols: u16,
    rows: u16,
    cells: Vec<Cell>,
}

impl TerminalCanvas {
    pub fn new(cols: u16, rows: u16) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        TerminalCanvas {
            cols,
            rows,
            cells: vec![Cell::BLANK; cols as usize * rows as usize],
        }
    }

    pub fn size(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    pub fn cell(&self, col: u16, row: u16) -> Option<&Cell> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells.get(row as usize * self.cols as usize + col as usize)
    }

    fn scale(&self) -> (f32, f32) {
        (self.cols as f32 / WORLD_WIDTH, self.rows as f32 / WORLD_HEIGHT)
    }

    fn to_cell(&self, x: f32, y: f32) -> (i32, i32) {
        let (sx, sy) = self.scale();
        ((x * sx).floor() as i32, (y * sy).floor() as i32)
    }

    /// World coordinates of the centre of a terminal cell; used to turn
    /// mouse positions into world positions.
    pub fn cell_to_world(&self, col: u16, row: u16) -> (f32, f32) {
        let (sx, sy) = self.scale();
        ((col as f32 + 0.5) / sx, (row as f32 + 0.5) / sy)
    }

    fn cell_mut(&mut self, col: i32, row: i32) -> Option<&mut Cell> {
        if col < 0 || row < 0 || col >= self.cols as i32 || row >= self.rows as i32 {
            return None;
        }
        self.cells.get_mut(row as usize * self.cols as usize + col as usize)
    }

    fn paint(&mut self, col: i32, row: i32, bg: Rgb) {
        if let Some(cell) = self.cell_mut(col, row) {
            *cell = Cell { ch: ' ', fg: cell.fg, bg };
        }
    }

    /// Write the whole buffer, switching colours only when they change.
    pub fn flush<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mut current: Option<(Rgb, Rgb)> = None;
        for row in 0..self.rows {
            out.queue(cursor::MoveTo(0, row))?;
            let start = row as usize * self.cols as usize;
            for cell in &self.cells[start..start + self.cols as usize] {
                if current != Some((cell.fg, cell.bg)) {
                    out.queue(style::SetForegroundColor(color(cell.fg)))?;
                    out.queue(style::SetBackgroundColor(color(cell.bg)))?;
                    current = Some((cell.fg, cell.bg));
                }
                out.queue(Print(cell.ch))?;
            }
        }
        out.queue(style::ResetColor)?;
        out.flush()
    }
}

impl Canvas for TerminalCanvas {
    fn fill(&mut self, color: Rgb) {
        for cell in self.cells.iter_mut() {
            *cell = Cell { ch: ' ', fg: Rgb::WHITE, bg: color };
        }
    }

    fn filled_rect(&mut self, rect: Rect, color: Rgb) {
        if rect.w <= 0.0 || rect.h <= 0.0 {
            return;
        }
        let (sx, sy) = self.scale();
        let (c0, r0) = self.to_cell(rect.x, rect.y);
        // Anything with area covers at least one cell.
        let c1 = ((rect.right() * sx).ceil() as i32 - 1).max(c0);
        let r1 = ((rect.bottom() * sy).ceil() as i32 - 1).max(r0);
        for row in r0..=r1 {
            for col in c0..=c1 {
                self.paint(col, row, color);
            }
        }
    }

    fn filled_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgb) {
        let rect = Rect::new(cx - radius, cy - radius, radius * 2.0, radius * 2.0);
        let (c0, r0) = self.to_cell(rect.left(), rect.top());
        let (c1, r1) = self.to_cell(rect.right(), rect.bottom());
        let mut painted = false;
        for row in r0..=r1 {
            for col in c0..=c1 {
                let (wx, wy) = self.cell_to_world(col.max(0) as u16, row.max(0) as u16);
                if (wx - cx).powi(2) + (wy - cy).powi(2) <= radius * radius {
                    self.paint(col, row, color);
                    painted = true;
                }
            }
        }
        if !painted {
            let (col, row) = self.to_cell(cx, cy);
            self.paint(col, row, color);
        }
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Rgb) {
        let (c0, r0) = self.to_cell(x1, y1);
        let (c1, r1) = self.to_cell(x2, y2);
        let steps = (c1 - c0).abs().max((r1 - r0).abs()).max(1);
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let col = c0 as f32 + (c1 - c0) as f32 * t;
            let row = r0 as f32 + (r1 - r0) as f32 * t;
            self.paint(col.round() as i32, row.round() as i32, color);
        }
    }

    fn text(&mut self, text: &str, x: f32, y: f32, color: Rgb, align: Align) {
        let (mut col, row) = self.to_cell(x, y);
        if align == Align::Center {
            col -= text.chars().count() as i32 / 2;
        }
        for ch in text.chars() {
            if let Some(cell) = self.cell_mut(col, row) {
                cell.ch = ch;
                cell.fg = color;
            }
            col += 1;
        }
    }
}
