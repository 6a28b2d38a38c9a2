//! Base widget trait and types

use std::sync::atomic::{AtomicU64, Ordering};

use hintline_core::events::Event;
use hintline_paint::PaintContext;

/// Unique widget identifier, matching [`Event::target`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(u64);

impl WidgetId {
    /// Allocate a fresh identifier
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// Base trait for all widgets
pub trait Widget {
    /// Get the widget's unique ID
    fn id(&self) -> WidgetId;

    /// Record the widget's drawing
    fn paint(&self, ctx: &mut PaintContext);

    /// Handle an event, returning true if it was consumed
    fn handle_event(&mut self, event: &Event) -> bool;

    /// Advance animations by `dt_ms`; returns true while a redraw is needed
    fn update(&mut self, dt_ms: f32) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = WidgetId::next();
        let b = WidgetId::next();
        assert_ne!(a, b);
        assert!(b.as_u64() > a.as_u64());
    }
}
