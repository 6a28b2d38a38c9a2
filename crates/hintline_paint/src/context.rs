//! Paint context - the main drawing API
//!
//! Widgets record [`PaintCommand`]s into a [`PaintContext`]; the host renderer
//! replays them onto its surface.

use crate::color::Color;
use crate::path::{Path, Point};

/// Fill style for shapes and text
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FillStyle {
    Color(Color),
}

impl From<Color> for FillStyle {
    fn from(color: Color) -> Self {
        FillStyle::Color(color)
    }
}

/// Stroke style
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
        }
    }
}

impl StrokeStyle {
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            ..Default::default()
        }
    }

    pub fn with_join(mut self, line_join: LineJoin) -> Self {
        self.line_join = line_join;
        self
    }

    pub fn with_cap(mut self, line_cap: LineCap) -> Self {
        self.line_cap = line_cap;
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// A paint command for the renderer
#[derive(Clone, Debug, PartialEq)]
pub enum PaintCommand {
    FillPath {
        path: Path,
        style: FillStyle,
    },
    StrokePath {
        path: Path,
        style: StrokeStyle,
    },
    /// Straight segment between two points
    StrokeLine {
        from: Point,
        to: Point,
        style: StrokeStyle,
    },
    /// Text laid out along `path`. `h_offset` moves glyphs along the path,
    /// `v_offset` moves them perpendicular to it (positive is below).
    DrawTextOnPath {
        text: String,
        path: Path,
        h_offset: f32,
        v_offset: f32,
        size: f32,
        style: FillStyle,
    },
}

/// The paint context used for custom drawing
pub struct PaintContext {
    commands: Vec<PaintCommand>,
}

impl PaintContext {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Get all recorded commands
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Take ownership of recorded commands
    pub fn take_commands(&mut self) -> Vec<PaintCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    // === Path drawing ===

    pub fn fill_path(&mut self, path: Path, style: impl Into<FillStyle>) {
        self.commands.push(PaintCommand::FillPath {
            path,
            style: style.into(),
        });
    }

    pub fn stroke_path(&mut self, path: Path, style: StrokeStyle) {
        self.commands.push(PaintCommand::StrokePath { path, style });
    }

    pub fn stroke_line(&mut self, from: Point, to: Point, style: StrokeStyle) {
        self.commands
            .push(PaintCommand::StrokeLine { from, to, style });
    }

    // === Text ===

    pub fn draw_text_on_path(
        &mut self,
        text: impl Into<String>,
        path: Path,
        h_offset: f32,
        v_offset: f32,
        size: f32,
        style: impl Into<FillStyle>,
    ) {
        self.commands.push(PaintCommand::DrawTextOnPath {
            text: text.into(),
            path,
            h_offset,
            v_offset,
            size,
            style: style.into(),
        });
    }
}

impl Default for PaintContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut ctx = PaintContext::new();
        let path = Path::quad(Point::new(0.0, 0.0), Point::new(5.0, 5.0), Point::new(10.0, 0.0));

        ctx.draw_text_on_path("Email", path.clone(), 0.0, -4.0, 16.0, Color::BLACK);
        ctx.stroke_path(path, StrokeStyle::new(Color::BLACK, 1.0).with_join(LineJoin::Round));
        ctx.stroke_line(Point::ZERO, Point::new(10.0, 0.0), StrokeStyle::default());

        let commands = ctx.take_commands();
        assert_eq!(commands.len(), 3);
        assert!(matches!(commands[0], PaintCommand::DrawTextOnPath { ref text, .. } if text == "Email"));
        assert!(matches!(
            commands[1],
            PaintCommand::StrokePath { style: StrokeStyle { line_join: LineJoin::Round, .. }, .. }
        ));
        assert!(matches!(commands[2], PaintCommand::StrokeLine { .. }));
        assert!(ctx.commands().is_empty());
    }
}
