//! Field theme: tokens grouped together, loaded from TOML and resolved to
//! pixels for a display density

use serde::Deserialize;

use crate::density::Density;
use crate::error::{Result, ThemeError};
use crate::tokens::*;
use hintline_paint::Color;

/// Everything that styles a text field decoration
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldTheme {
    pub colors: ColorTokens,
    pub metrics: MetricTokens,
    pub motion: MotionTokens,
}

impl FieldTheme {
    /// Parse a theme from TOML. Missing tables and keys keep their defaults.
    ///
    /// ```toml
    /// [colors]
    /// accent = "#3f51b5"
    ///
    /// [metrics]
    /// max_pull = 24.0
    ///
    /// [motion]
    /// drop_ms = 450
    /// ```
    pub fn from_toml_str(src: &str) -> Result<Self> {
        let theme: FieldTheme = toml::from_str(src)?;
        theme.validate()?;
        tracing::debug!(
            accent = ?theme.colors.accent,
            max_pull = theme.metrics.max_pull,
            "loaded field theme"
        );
        Ok(theme)
    }

    /// Check every metric is finite and non-negative, and that sizes which
    /// must be visible are positive
    pub fn validate(&self) -> Result<()> {
        for token in MetricToken::ALL {
            let value = self.metrics.get(token);
            let must_be_positive =
                matches!(token, MetricToken::SmallTextSize | MetricToken::LineWidth);
            let valid = value.is_finite() && (value > 0.0 || (!must_be_positive && value == 0.0));
            if !valid {
                return Err(ThemeError::InvalidMetric {
                    name: token.name(),
                    value,
                });
            }
        }
        Ok(())
    }

    pub fn color(&self, token: ColorToken) -> Color {
        self.colors.get(token)
    }

    pub fn duration_ms(&self, token: MotionToken) -> u32 {
        self.motion.get(token)
    }

    /// Convert every metric to physical pixels
    pub fn resolve(&self, density: Density) -> FieldDimensions {
        let m = &self.metrics;
        FieldDimensions {
            text_margin: density.dp(m.text_margin),
            small_text_size: density.dp(m.small_text_size),
            small_text_baseline: density.dp(m.small_text_baseline),
            line_offset: density.dp(m.line_offset),
            line_width: density.dp(m.line_width),
            shake_amplitude: density.dp(m.shake_amplitude),
            max_pull: density.dp(m.max_pull),
            shake_dip: density.dp(m.shake_dip),
            shake_rebound: density.dp(m.shake_rebound),
        }
    }
}

/// Metric tokens resolved to physical pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldDimensions {
    pub text_margin: f32,
    pub small_text_size: f32,
    pub small_text_baseline: f32,
    pub line_offset: f32,
    pub line_width: f32,
    pub shake_amplitude: f32,
    pub max_pull: f32,
    pub shake_dip: f32,
    pub shake_rebound: f32,
}

impl FieldDimensions {
    /// Padding the host must add around the editable text so it clears the
    /// floating label above and the wobbling underline below
    pub fn content_padding(&self) -> ContentPadding {
        ContentPadding {
            left: self.text_margin,
            top: self.text_margin + self.small_text_size,
            right: self.text_margin,
            bottom: self.shake_amplitude,
        }
    }

    /// Keyframes of the underline wobble while the label rises
    pub fn shake_keyframes(&self) -> [f32; 5] {
        [self.max_pull, -self.shake_dip, 0.0, self.shake_rebound, 0.0]
    }
}

/// Extra padding around the editable text, in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContentPadding {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}
