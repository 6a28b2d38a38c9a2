//! Decoration painting
//!
//! Turns a [`FieldState`] and its [`DecorationValues`] into paint commands:
//! the hint label drawn along a bendable baseline, the underline, and the
//! animated highlight segment on top of it.

use hintline_paint::{Color, LineJoin, PaintContext, Path, Point, StrokeStyle};
use hintline_theme::{ColorToken, FieldDimensions, FieldTheme};

use super::state::{DecorationValues, FieldState};

/// Layout of the editable text as measured by the host, in pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldGeometry {
    pub width: f32,
    /// Baseline of the first line of editable text
    pub baseline: f32,
    /// Size of the editable text, which the inline label matches
    pub text_size: f32,
    /// Right padding of the field, including the text margin
    pub padding_right: f32,
}

impl FieldGeometry {
    pub fn new(width: f32, baseline: f32, text_size: f32, padding_right: f32) -> Self {
        Self {
            width,
            baseline,
            text_size,
            padding_right,
        }
    }

    fn line_end(&self) -> f32 {
        self.width - self.padding_right
    }
}

/// Paints the field decoration
#[derive(Clone, Debug)]
pub struct DecorationRenderer {
    hint_color: Color,
    line_color: Color,
    accent_color: Color,
    dimensions: FieldDimensions,
}

impl DecorationRenderer {
    pub fn new(theme: &FieldTheme, dimensions: FieldDimensions) -> Self {
        Self {
            hint_color: theme.color(ColorToken::Hint),
            line_color: theme.color(ColorToken::Line),
            accent_color: theme.color(ColorToken::Accent),
            dimensions,
        }
    }

    /// Record the hint label, underline, and highlight. Nothing is recorded
    /// until the geometry leaves room for a line between the margins.
    pub fn paint(
        &self,
        ctx: &mut PaintContext,
        state: FieldState,
        values: &DecorationValues,
        geometry: &FieldGeometry,
        hint: &str,
    ) {
        if geometry.line_end() <= self.dimensions.text_margin {
            return;
        }
        if !hint.is_empty() {
            self.paint_hint(ctx, state, values, geometry, hint);
        }
        self.paint_underline(ctx, state, values, geometry);
        self.paint_highlight(ctx, state, values, geometry);
    }

    fn paint_hint(
        &self,
        ctx: &mut PaintContext,
        state: FieldState,
        values: &DecorationValues,
        geometry: &FieldGeometry,
        hint: &str,
    ) {
        let dims = &self.dimensions;
        let rise = values.text_rise_fraction;
        let size = geometry.text_size - rise * (geometry.text_size - dims.small_text_size);

        // The label rides the bent line only until it lifts off
        let pull = match state {
            FieldState::TextRise | FieldState::TextDrop => values.line_pull_degree * (1.0 - rise),
            _ => values.line_pull_degree,
        };

        let path = Path::quad(
            Point::new(dims.text_margin, geometry.baseline),
            Point::new(geometry.width / 2.0, geometry.baseline + pull),
            Point::new(geometry.line_end(), geometry.baseline),
        );
        let v_offset = rise * (dims.small_text_baseline - geometry.baseline);

        ctx.draw_text_on_path(hint, path, 0.0, v_offset, size, self.hint_color);
    }

    fn paint_underline(
        &self,
        ctx: &mut PaintContext,
        state: FieldState,
        values: &DecorationValues,
        geometry: &FieldGeometry,
    ) {
        let dims = &self.dimensions;
        let line_y = geometry.baseline + dims.line_offset;

        let color = match state {
            FieldState::PullLine | FieldState::TextRise | FieldState::Expanded => self.accent_color,
            FieldState::ShowHighlight if values.show_line_fraction >= 1.0 => self.accent_color,
            _ => self.line_color,
        };
        let bend = match state {
            FieldState::TextRise => values.line_shake_offset,
            _ => values.line_pull_degree,
        };

        let path = Path::quad(
            Point::new(dims.text_margin, line_y),
            Point::new(geometry.width / 2.0, line_y + bend),
            Point::new(geometry.line_end(), line_y),
        );
        ctx.stroke_path(
            path,
            StrokeStyle::new(color, dims.line_width).with_join(LineJoin::Round),
        );
    }

    fn paint_highlight(
        &self,
        ctx: &mut PaintContext,
        state: FieldState,
        values: &DecorationValues,
        geometry: &FieldGeometry,
    ) {
        let show = values.show_line_fraction;
        if show <= 0.0 || show >= 1.0 {
            return;
        }

        let dims = &self.dimensions;
        let line_y = geometry.baseline + dims.line_offset;
        let length = geometry.line_end() - dims.text_margin;

        let (start, end) = match state {
            FieldState::ShowHighlight => {
                let centre = geometry.width / 2.0;
                let half = length * show / 2.0;
                (centre - half, centre + half)
            }
            FieldState::HideHighlight => (dims.text_margin + length * show, geometry.line_end()),
            _ => return,
        };

        ctx.stroke_line(
            Point::new(start, line_y),
            Point::new(end, line_y),
            StrokeStyle::new(self.accent_color, dims.line_width),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hintline_paint::{PaintCommand, PathCommand};
    use hintline_theme::Density;

    fn renderer() -> DecorationRenderer {
        let theme = FieldTheme::default();
        DecorationRenderer::new(&theme, theme.resolve(Density::BASELINE))
    }

    // width 200, baseline 40, text 16, right padding 8
    const GEOMETRY: FieldGeometry = FieldGeometry {
        width: 200.0,
        baseline: 40.0,
        text_size: 16.0,
        padding_right: 8.0,
    };

    fn record(state: FieldState, values: DecorationValues, hint: &str) -> Vec<PaintCommand> {
        let mut ctx = PaintContext::new();
        renderer().paint(&mut ctx, state, &values, &GEOMETRY, hint);
        ctx.take_commands()
    }

    fn control_y(path: &Path) -> f32 {
        match path.commands()[1] {
            PathCommand::QuadTo { control, .. } => control.y,
            _ => panic!("expected a quadratic segment"),
        }
    }

    #[test]
    fn test_resting_field_draws_inline_hint_and_plain_line() {
        let commands = record(FieldState::Normal, DecorationValues::default(), "Email");
        assert_eq!(commands.len(), 2);

        match &commands[0] {
            PaintCommand::DrawTextOnPath { text, size, v_offset, path, .. } => {
                assert_eq!(text, "Email");
                assert_eq!(*size, 16.0);
                assert_eq!(*v_offset, 0.0);
                assert_eq!(control_y(path), 40.0);
            }
            other => panic!("unexpected {other:?}"),
        }
        match &commands[1] {
            PaintCommand::StrokePath { style, path } => {
                assert_eq!(style.color, Color::from_hex(0xCCCCCC));
                assert_eq!(style.line_join, LineJoin::Round);
                assert_eq!(control_y(path), 52.0);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_floating_hint_is_small_and_lifted() {
        let values = DecorationValues::at_rest(FieldState::Expanded, true);
        let commands = record(FieldState::Expanded, values, "Email");
        match &commands[0] {
            PaintCommand::DrawTextOnPath { size, v_offset, .. } => {
                assert_eq!(*size, 12.0);
                assert_eq!(*v_offset, 22.0 - 40.0);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(
            &commands[1],
            PaintCommand::StrokePath { style, .. } if style.color == Color::from_hex(0xD81B60)
        ));
    }

    #[test]
    fn test_empty_hint_is_skipped() {
        let commands = record(FieldState::Normal, DecorationValues::default(), "");
        assert_eq!(commands.len(), 1);
        assert!(matches!(commands[0], PaintCommand::StrokePath { .. }));
    }

    #[test]
    fn test_unmeasured_field_paints_nothing() {
        let mut ctx = PaintContext::new();
        let geometry = FieldGeometry::new(0.0, 40.0, 16.0, 8.0);
        renderer().paint(
            &mut ctx,
            FieldState::Normal,
            &DecorationValues::default(),
            &geometry,
            "Email",
        );
        assert!(ctx.take_commands().is_empty());
    }

    #[test]
    fn test_highlight_grows_from_centre() {
        let values = DecorationValues {
            show_line_fraction: 0.5,
            ..Default::default()
        };
        let commands = record(FieldState::ShowHighlight, values, "");
        // length = 200 - 8 - 8 = 184, half of it centred on 100
        assert!(matches!(
            commands[1],
            PaintCommand::StrokeLine { from, to, .. }
                if from == Point::new(54.0, 52.0) && to == Point::new(146.0, 52.0)
        ));
    }

    #[test]
    fn test_highlight_retracts_toward_right_edge() {
        let values = DecorationValues {
            show_line_fraction: 0.25,
            text_rise_fraction: 1.0,
            ..Default::default()
        };
        let commands = record(FieldState::HideHighlight, values, "");
        assert!(matches!(
            commands[1],
            PaintCommand::StrokeLine { from, to, .. }
                if from == Point::new(54.0, 52.0) && to == Point::new(192.0, 52.0)
        ));
    }

    #[test]
    fn test_no_highlight_at_extremes() {
        for show in [0.0, 1.0] {
            let values = DecorationValues {
                show_line_fraction: show,
                ..Default::default()
            };
            let commands = record(FieldState::ShowHighlight, values, "");
            assert_eq!(commands.len(), 1);
        }
    }

    #[test]
    fn test_underline_follows_shake_while_rising() {
        let values = DecorationValues {
            show_line_fraction: 1.0,
            line_pull_degree: 30.0,
            line_shake_offset: -20.0,
            text_rise_fraction: 0.5,
        };
        let commands = record(FieldState::TextRise, values, "Email");
        match &commands[0] {
            PaintCommand::DrawTextOnPath { path, size, .. } => {
                assert_eq!(control_y(path), 40.0 + 15.0);
                assert_eq!(*size, 14.0);
            }
            other => panic!("unexpected {other:?}"),
        }
        match &commands[1] {
            PaintCommand::StrokePath { path, .. } => assert_eq!(control_y(path), 52.0 - 20.0),
            other => panic!("unexpected {other:?}"),
        }

        let commands = record(FieldState::PullLine, values, "");
        match &commands[0] {
            PaintCommand::StrokePath { path, .. } => assert_eq!(control_y(path), 52.0 + 30.0),
            other => panic!("unexpected {other:?}"),
        }
    }
}
