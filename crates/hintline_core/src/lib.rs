//! Hintline Core Runtime
//!
//! This crate provides the foundational primitives shared by the Hintline crates:
//!
//! - **State Machines**: typed, flat machines for widget interaction states
//! - **Events**: the widget-level events a text field reacts to
//! - **Errors**: failures reported by host gesture handling
//!
//! # Example
//!
//! ```rust
//! use hintline_core::fsm::{StateMachine, Transition, Transitions};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! enum Light { Off, On }
//!
//! struct Switch;
//!
//! impl Transitions for Switch {
//!     type State = Light;
//!     type Event = ();
//!     type Context = ();
//!     type Effect = &'static str;
//!
//!     fn transition(state: Light, _: (), _: &()) -> Option<Transition<Light, &'static str>> {
//!         Some(match state {
//!             Light::Off => Transition::new(Light::On).with_effect("lit"),
//!             Light::On => Transition::new(Light::Off),
//!         })
//!     }
//! }
//!
//! let mut fsm = StateMachine::<Switch>::new(Light::Off);
//! let effects = fsm.send((), &());
//! assert_eq!(fsm.current_state(), Light::On);
//! assert_eq!(effects.as_slice(), &["lit"]);
//! ```

pub mod error;
pub mod events;
pub mod fsm;

pub use error::{GestureError, Result};
pub use events::{Event, EventData, EventType};
pub use fsm::{StateMachine, Transition, Transitions};
