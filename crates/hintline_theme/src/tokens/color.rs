//! Color tokens for text field decorations

use hintline_paint::Color;
use serde::{Deserialize, Deserializer};

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    /// Hint label, inline or floating
    Hint,
    /// Underline at rest
    Line,
    /// Highlight segment and focused underline
    Accent,
}

/// Complete set of decoration color tokens
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorTokens {
    #[serde(deserialize_with = "hex_color")]
    pub hint: Color,
    #[serde(deserialize_with = "hex_color")]
    pub line: Color,
    #[serde(deserialize_with = "hex_color")]
    pub accent: Color,
}

impl ColorTokens {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Hint => self.hint,
            ColorToken::Line => self.line,
            ColorToken::Accent => self.accent,
        }
    }
}

impl Default for ColorTokens {
    fn default() -> Self {
        Self {
            hint: Color::from_hex(0xAAAAAA),
            line: Color::from_hex(0xCCCCCC),
            accent: Color::from_hex(0xD81B60),
        }
    }
}

fn hex_color<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
    let text = String::deserialize(deserializer)?;
    Color::parse_hex(&text).ok_or_else(|| {
        serde::de::Error::custom(format!("invalid color `{text}`, expected #RRGGBB or #RRGGBBAA"))
    })
}
