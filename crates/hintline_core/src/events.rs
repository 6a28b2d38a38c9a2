//! Widget events
//!
//! The subset of platform events a text field decoration reacts to. Platform
//! layers translate their native callbacks into these before dispatching.

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    /// Pointer held past the platform long-press timeout
    pub const LONG_PRESS: EventType = 8;
    pub const FOCUS: EventType = 10;
    pub const BLUR: EventType = 11;
    /// Text input event (for character input, IME commit)
    pub const TEXT_INPUT: EventType = 22;

    // Element lifecycle events
    pub const UNMOUNT: EventType = 61;
}

/// A UI event with associated data
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    pub event_type: EventType,
    pub target: u64, // Widget ID
    pub data: EventData,
    pub timestamp: u64,
    pub propagation_stopped: bool,
}

/// Event-specific data
#[derive(Clone, Debug, PartialEq)]
pub enum EventData {
    Pointer {
        x: f32,
        y: f32,
    },
    /// Text input from keyboard or IME
    TextInput {
        /// The input text (may be multiple characters for IME)
        text: String,
    },
    None,
}

impl Event {
    /// Create an event without payload
    pub fn new(event_type: EventType, target: u64) -> Self {
        Self {
            event_type,
            target,
            data: EventData::None,
            timestamp: 0,
            propagation_stopped: false,
        }
    }

    /// Attach a payload
    pub fn with_data(mut self, data: EventData) -> Self {
        self.data = data;
        self
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Pointer position, if this event carries one
    pub fn position(&self) -> Option<(f32, f32)> {
        match self.data {
            EventData::Pointer { x, y } => Some((x, y)),
            _ => None,
        }
    }
}
