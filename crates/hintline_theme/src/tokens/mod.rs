//! Design tokens for text field decorations
//!
//! Tokens are the atomic values a field theme is made of:
//! - Colors
//! - Metrics (dp)
//! - Animation durations

mod color;
mod metrics;
mod motion;

pub use color::*;
pub use metrics::*;
pub use motion::*;
