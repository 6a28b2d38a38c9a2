//! Animation duration tokens

use serde::Deserialize;

/// Motion token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum MotionToken {
    Reveal,
    Hide,
    Pull,
    Rise,
    Shake,
    Drop,
}

impl MotionToken {
    pub const ALL: [MotionToken; 6] = [
        MotionToken::Reveal,
        MotionToken::Hide,
        MotionToken::Pull,
        MotionToken::Rise,
        MotionToken::Shake,
        MotionToken::Drop,
    ];

    /// Key used in config files
    pub fn name(self) -> &'static str {
        match self {
            MotionToken::Reveal => "reveal_ms",
            MotionToken::Hide => "hide_ms",
            MotionToken::Pull => "pull_ms",
            MotionToken::Rise => "rise_ms",
            MotionToken::Shake => "shake_ms",
            MotionToken::Drop => "drop_ms",
        }
    }
}

/// Durations of each animation phase, in milliseconds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MotionTokens {
    /// Highlight growing out from the centre
    pub reveal_ms: u32,
    /// Highlight shrinking toward the right edge
    pub hide_ms: u32,
    pub pull_ms: u32,
    pub rise_ms: u32,
    pub shake_ms: u32,
    /// Bounced fall of the label back inline
    pub drop_ms: u32,
}

impl MotionTokens {
    /// Get a duration by token key
    pub fn get(&self, token: MotionToken) -> u32 {
        match token {
            MotionToken::Reveal => self.reveal_ms,
            MotionToken::Hide => self.hide_ms,
            MotionToken::Pull => self.pull_ms,
            MotionToken::Rise => self.rise_ms,
            MotionToken::Shake => self.shake_ms,
            MotionToken::Drop => self.drop_ms,
        }
    }
}

impl Default for MotionTokens {
    fn default() -> Self {
        Self {
            reveal_ms: 500,
            hide_ms: 500,
            pull_ms: 300,
            rise_ms: 300,
            shake_ms: 400,
            drop_ms: 600,
        }
    }
}
