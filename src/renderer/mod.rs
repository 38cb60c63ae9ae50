//! Rendering seam
//!
//! The simulation never draws. Each tick it describes every element as a
//! [`DrawCommand`] and hands it to a [`Renderer`]; what happens next is up
//! to the implementation (canvas, terminal, test recorder).

pub mod ascii;
pub mod shapes;

pub use ascii::AsciiRenderer;

use glam::Vec2;
use serde::Serialize;

use crate::sim::entity::{Color, ElementId};

/// Primitive used to depict an element
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Shape {
    /// Axis-aligned square; outline only when `filled` is false
    Rect { filled: bool },
    /// Filled circle
    Oval,
    /// Two crossing diagonal lines
    Cross,
    /// Player marker pointing along `heading` (radians)
    Turtle { heading: f32 },
}

/// One element as it should appear this frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DrawCommand {
    pub id: ElementId,
    pub shape: Shape,
    pub center: Vec2,
    /// Half the side length of the element's square
    pub half_extent: f32,
    pub color: Color,
}

/// Font description for overlay text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Font {
    pub family: &'static str,
    pub size: u32,
    pub bold: bool,
}

/// The end-of-game font
pub const BANNER_FONT: Font = Font {
    family: "Arial",
    size: 36,
    bold: true,
};

/// Centered text overlay shown when the session ends
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Banner {
    pub text: &'static str,
    pub color: Color,
    pub center: Vec2,
    pub font: Font,
}

/// Output side of the game
pub trait Renderer {
    /// Draw or move an element
    fn draw(&mut self, cmd: &DrawCommand);
    /// Keep an element's resources but stop showing it
    fn hide(&mut self, id: ElementId);
    /// Element is gone for good
    fn remove(&mut self, id: ElementId);
    /// End-of-game overlay; sent once per session
    fn banner(&mut self, banner: &Banner);
    /// Called after every element has been drawn for the tick
    fn present(&mut self) {}
}

/// Discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&mut self, _cmd: &DrawCommand) {}
    fn hide(&mut self, _id: ElementId) {}
    fn remove(&mut self, _id: ElementId) {}
    fn banner(&mut self, _banner: &Banner) {}
}

/// Everything a [`FrameRecorder`] saw
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RenderEvent {
    Draw(DrawCommand),
    Hide(ElementId),
    Remove(ElementId),
    Banner(Banner),
    Present,
}

/// Records every call, for tests and run summaries
#[derive(Debug, Default, Clone)]
pub struct FrameRecorder {
    pub events: Vec<RenderEvent>,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn banners(&self) -> Vec<&Banner> {
        self.events
            .iter()
            .filter_map(|e| match e {
                RenderEvent::Banner(b) => Some(b),
                _ => None,
            })
            .collect()
    }

    /// Draw commands issued since the last `present`
    pub fn last_frame(&self) -> Vec<&DrawCommand> {
        let body = match self.events.iter().rposition(|e| *e == RenderEvent::Present) {
            Some(end) => {
                let start = self.events[..end]
                    .iter()
                    .rposition(|e| *e == RenderEvent::Present)
                    .map_or(0, |i| i + 1);
                &self.events[start..end]
            }
            None => &self.events[..],
        };
        body.iter()
            .filter_map(|e| match e {
                RenderEvent::Draw(cmd) => Some(cmd),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for FrameRecorder {
    fn draw(&mut self, cmd: &DrawCommand) {
        self.events.push(RenderEvent::Draw(*cmd));
    }

    fn hide(&mut self, id: ElementId) {
        self.events.push(RenderEvent::Hide(id));
    }

    fn remove(&mut self, id: ElementId) {
        self.events.push(RenderEvent::Remove(id));
    }

    fn banner(&mut self, banner: &Banner) {
        self.events.push(RenderEvent::Banner(*banner));
    }

    fn present(&mut self) {
        self.events.push(RenderEvent::Present);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd(id: ElementId) -> DrawCommand {
        DrawCommand {
            id,
            shape: Shape::Oval,
            center: Vec2::ZERO,
            half_extent: 10.0,
            color: Color::Red,
        }
    }

    #[test]
    fn test_recorder_last_frame() {
        let mut rec = FrameRecorder::new();
        rec.draw(&cmd(1));
        rec.present();
        rec.draw(&cmd(2));
        rec.draw(&cmd(3));
        rec.present();
        let ids: Vec<_> = rec.last_frame().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_recorder_without_present() {
        let mut rec = FrameRecorder::new();
        rec.draw(&cmd(5));
        rec.hide(6);
        assert_eq!(rec.last_frame().len(), 1);
        assert!(rec.banners().is_empty());
    }
}
