//! Character-grid renderer for terminals
//!
//! Keeps the latest draw command per element and rasterizes them on demand,
//! one glyph per element at the cell containing its center.

use std::collections::{BTreeMap, BTreeSet};
use std::f32::consts::{FRAC_PI_4, PI};
use std::fmt::Write as _;

use glam::Vec2;

use super::shapes::rgba;
use super::{Banner, DrawCommand, Renderer, Shape};
use crate::sim::entity::ElementId;
use crate::sim::geom::Arena;

#[derive(Debug, Clone)]
pub struct AsciiRenderer {
    arena: Arena,
    cols: usize,
    rows: usize,
    /// Emit 24-bit ANSI color escapes around glyphs
    ansi: bool,
    elements: BTreeMap<ElementId, DrawCommand>,
    hidden: BTreeSet<ElementId>,
    banner: Option<Banner>,
}

impl AsciiRenderer {
    pub fn new(arena: Arena, cols: usize, rows: usize) -> Self {
        Self {
            arena,
            cols: cols.max(1),
            rows: rows.max(1),
            ansi: false,
            elements: BTreeMap::new(),
            hidden: BTreeSet::new(),
            banner: None,
        }
    }

    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// Grid cell for an arena point (off-arena points stick to the border)
    fn cell(&self, point: Vec2) -> (usize, usize) {
        let p = self.arena.clamp(point);
        let col = (p.x / self.arena.width * self.cols as f32) as usize;
        let row = (p.y / self.arena.height * self.rows as f32) as usize;
        (col.min(self.cols - 1), row.min(self.rows - 1))
    }

    fn glyph(shape: Shape) -> char {
        match shape {
            Shape::Rect { filled: true } => '#',
            Shape::Rect { filled: false } => 'H',
            Shape::Oval => 'o',
            Shape::Cross => 'x',
            Shape::Turtle { heading } => {
                // Screen y points down, so a positive heading faces down
                let octant = ((heading + PI) / (2.0 * FRAC_PI_4)).round() as i32 % 4;
                match octant {
                    0 => '<',
                    1 => '^',
                    2 => '>',
                    _ => 'v',
                }
            }
        }
    }

    fn paint(&self, cmd: &DrawCommand) -> String {
        let glyph = Self::glyph(cmd.shape);
        if self.ansi {
            let [r, g, b, _] = rgba(cmd.color).map(|c| (c * 255.0) as u8);
            format!("\x1b[38;2;{r};{g};{b}m{glyph}\x1b[0m")
        } else {
            glyph.to_string()
        }
    }

    /// Render the current picture, framed by a border
    pub fn frame(&self) -> String {
        let mut grid = vec![vec![" ".to_string(); self.cols]; self.rows];

        for (id, cmd) in &self.elements {
            if self.hidden.contains(id) {
                continue;
            }
            let (col, row) = self.cell(cmd.center);
            grid[row][col] = self.paint(cmd);
        }

        if let Some(banner) = &self.banner {
            let (_, row) = self.cell(banner.center);
            let start = self.cols.saturating_sub(banner.text.len()) / 2;
            for (i, ch) in banner.text.chars().enumerate().take(self.cols) {
                grid[row][start + i] = ch.to_string();
            }
        }

        let border = format!("+{}+", "-".repeat(self.cols));
        let mut out = String::new();
        let _ = writeln!(out, "{border}");
        for row in grid {
            let _ = writeln!(out, "|{}|", row.concat());
        }
        let _ = write!(out, "{border}");
        out
    }
}

impl Renderer for AsciiRenderer {
    fn draw(&mut self, cmd: &DrawCommand) {
        self.hidden.remove(&cmd.id);
        self.elements.insert(cmd.id, *cmd);
    }

    fn hide(&mut self, id: ElementId) {
        self.hidden.insert(id);
    }

    fn remove(&mut self, id: ElementId) {
        self.elements.remove(&id);
        self.hidden.remove(&id);
    }

    fn banner(&mut self, banner: &Banner) {
        self.banner = Some(*banner);
    }
}
