//! Discrete and animated state of a text field decoration

use hintline_animation::AnimatedProperties;

/// Phase of the focus transition
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum FieldState {
    /// Unfocused; label inline when the text is empty
    #[default]
    Normal,
    /// Highlight growing out from the centre (or retracting into it)
    ShowHighlight,
    /// Underline bending downward
    PullLine,
    /// Label rising while the underline wobbles
    TextRise,
    /// Focused, label floating
    Expanded,
    /// Highlight shrinking toward the right edge
    HideHighlight,
    /// Label bouncing back inline
    TextDrop,
}

impl FieldState {
    /// States the field settles into once animations finish
    pub fn is_rest(self) -> bool {
        matches!(self, FieldState::Normal | FieldState::Expanded)
    }
}

/// Animated scalars of the decoration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Property {
    ShowLineFraction,
    LinePullDegree,
    LineShakeOffset,
    TextRiseFraction,
}

/// Current values of every animated scalar
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DecorationValues {
    /// Highlight progress, 0.0 to 1.0
    pub show_line_fraction: f32,
    /// Downward bend of the underline, in pixels
    pub line_pull_degree: f32,
    /// Underline wobble while the label rises, in pixels
    pub line_shake_offset: f32,
    /// 0.0 inline label, 1.0 floating label
    pub text_rise_fraction: f32,
}

impl DecorationValues {
    /// Values at rest in `state`. A resting unfocused field keeps its label
    /// floated while it holds text.
    pub fn at_rest(state: FieldState, text_empty: bool) -> Self {
        match state {
            FieldState::Expanded => Self {
                show_line_fraction: 1.0,
                text_rise_fraction: 1.0,
                ..Self::default()
            },
            _ => Self {
                text_rise_fraction: if text_empty { 0.0 } else { 1.0 },
                ..Self::default()
            },
        }
    }

    pub fn get(&self, property: Property) -> f32 {
        match property {
            Property::ShowLineFraction => self.show_line_fraction,
            Property::LinePullDegree => self.line_pull_degree,
            Property::LineShakeOffset => self.line_shake_offset,
            Property::TextRiseFraction => self.text_rise_fraction,
        }
    }
}

impl AnimatedProperties<Property> for DecorationValues {
    fn get(&self, key: Property) -> f32 {
        DecorationValues::get(self, key)
    }

    fn set(&mut self, key: Property, value: f32) {
        match key {
            Property::ShowLineFraction => self.show_line_fraction = value,
            Property::LinePullDegree => self.line_pull_degree = value,
            Property::LineShakeOffset => self.line_shake_offset = value,
            Property::TextRiseFraction => self.text_rise_fraction = value,
        }
    }
}
