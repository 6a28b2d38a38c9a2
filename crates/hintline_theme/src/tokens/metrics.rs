//! Size tokens, in density-independent pixels

use serde::Deserialize;

/// Metric token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum MetricToken {
    TextMargin,
    SmallTextSize,
    SmallTextBaseline,
    LineOffset,
    LineWidth,
    ShakeAmplitude,
    MaxPull,
    ShakeDip,
    ShakeRebound,
}

impl MetricToken {
    pub const ALL: [MetricToken; 9] = [
        MetricToken::TextMargin,
        MetricToken::SmallTextSize,
        MetricToken::SmallTextBaseline,
        MetricToken::LineOffset,
        MetricToken::LineWidth,
        MetricToken::ShakeAmplitude,
        MetricToken::MaxPull,
        MetricToken::ShakeDip,
        MetricToken::ShakeRebound,
    ];

    /// Key used in config files
    pub fn name(self) -> &'static str {
        match self {
            MetricToken::TextMargin => "text_margin",
            MetricToken::SmallTextSize => "small_text_size",
            MetricToken::SmallTextBaseline => "small_text_baseline",
            MetricToken::LineOffset => "line_offset",
            MetricToken::LineWidth => "line_width",
            MetricToken::ShakeAmplitude => "shake_amplitude",
            MetricToken::MaxPull => "max_pull",
            MetricToken::ShakeDip => "shake_dip",
            MetricToken::ShakeRebound => "shake_rebound",
        }
    }
}

/// Complete set of metric tokens (dp)
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MetricTokens {
    /// Horizontal inset of the hint and underline from the left edge
    pub text_margin: f32,
    /// Font size of the floating label
    pub small_text_size: f32,
    /// Baseline of the floating label, from the top
    pub small_text_baseline: f32,
    /// Distance from the text baseline down to the underline
    pub line_offset: f32,
    pub line_width: f32,
    /// Extra bottom room reserved for the underline wobble
    pub shake_amplitude: f32,
    /// How far the pull bends the underline; the shake starts here too
    pub max_pull: f32,
    /// Upward overshoot of the shake
    pub shake_dip: f32,
    /// Second, smaller downward swing of the shake
    pub shake_rebound: f32,
}

impl MetricTokens {
    /// Get a metric by token key
    pub fn get(&self, token: MetricToken) -> f32 {
        match token {
            MetricToken::TextMargin => self.text_margin,
            MetricToken::SmallTextSize => self.small_text_size,
            MetricToken::SmallTextBaseline => self.small_text_baseline,
            MetricToken::LineOffset => self.line_offset,
            MetricToken::LineWidth => self.line_width,
            MetricToken::ShakeAmplitude => self.shake_amplitude,
            MetricToken::MaxPull => self.max_pull,
            MetricToken::ShakeDip => self.shake_dip,
            MetricToken::ShakeRebound => self.shake_rebound,
        }
    }
}

impl Default for MetricTokens {
    fn default() -> Self {
        Self {
            text_margin: 8.0,
            small_text_size: 12.0,
            small_text_baseline: 22.0,
            line_offset: 12.0,
            line_width: 1.0,
            shake_amplitude: 15.0,
            max_pull: 30.0,
            shake_dip: 20.0,
            shake_rebound: 8.0,
        }
    }
}
