//! Hintline Widget Library
//!
//! A text field whose hint label floats above the text when focused, with
//! FSM-driven focus animation.
//!
//! # Example
//!
//! ```rust
//! use hintline_widgets::{FieldState, TextField, Widget};
//! use hintline_paint::PaintContext;
//!
//! let mut field = TextField::builder().hint("Email").build();
//! field.request_focus();
//!
//! // Drive frames until the expansion settles
//! while field.advance(16.0) {}
//! assert_eq!(field.state(), FieldState::Expanded);
//!
//! let mut ctx = PaintContext::new();
//! field.paint(&mut ctx);
//! assert!(!ctx.commands().is_empty());
//! ```

pub mod focus;
pub mod gesture;
pub mod keyboard;
pub mod text_field;
pub mod widget;

pub use focus::FocusCoordinator;
pub use gesture::LongClickHandler;
pub use keyboard::{NoKeyboard, SoftKeyboard};
pub use text_field::{
    DecorationRenderer, DecorationValues, FieldGeometry, FieldState, FocusAnimationController,
    InputType, Property, TextField, TextFieldBuilder,
};
pub use widget::{Widget, WidgetId};
