//! Long-press handling supplied by the host

use hintline_core::Result;
use hintline_paint::Point;

/// Runs the platform's long-click behaviour (selection, context menu, ...)
///
/// Returns whether the gesture was consumed.
pub trait LongClickHandler {
    fn perform_long_click(&mut self, position: Option<Point>) -> Result<bool>;
}

impl<F> LongClickHandler for F
where
    F: FnMut(Option<Point>) -> Result<bool>,
{
    fn perform_long_click(&mut self, position: Option<Point>) -> Result<bool> {
        self(position)
    }
}
