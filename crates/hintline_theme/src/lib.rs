//! Hintline Theme System
//!
//! Design tokens for the floating-label text field: colors, metrics in
//! density-independent pixels, and animation durations.
//!
//! # Quick Start
//!
//! ```rust
//! use hintline_theme::{Density, FieldTheme};
//!
//! let theme = FieldTheme::from_toml_str(r##"
//!     [colors]
//!     accent = "#3f51b5"
//! "##).unwrap();
//!
//! let dims = theme.resolve(Density::new(2.0).unwrap());
//! assert_eq!(dims.text_margin, 16.0);
//! ```
//!
//! # Tokens
//!
//! - [`ColorTokens`]: hint, resting underline and accent colors
//! - [`MetricTokens`]: margins, label sizes, underline offsets and wobble (dp)
//! - [`MotionTokens`]: phase durations (ms)

pub mod density;
pub mod error;
pub mod theme;
pub mod tokens;

pub use density::Density;
pub use error::{Result, ThemeError};
pub use theme::{ContentPadding, FieldDimensions, FieldTheme};
pub use tokens::*;
