//! Hintline Paint API
//!
//! A small 2D drawing API for widget decorations, similar to HTML Canvas or Skia.
//!
//! # Features
//!
//! - Path drawing (lines, quadratic curves)
//! - Fills and strokes with colors, joins and caps
//! - Text laid out along a path
//! - Curve flattening for polyline-only renderers

pub mod color;
pub mod context;
pub mod path;

pub use color::Color;
pub use context::{FillStyle, LineCap, LineJoin, PaintCommand, PaintContext, StrokeStyle};
pub use path::{Path, PathBuilder, PathCommand, Point};
