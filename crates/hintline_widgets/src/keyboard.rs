//! Soft keyboard collaborator

use crate::widget::WidgetId;

/// Shows and hides the on-screen keyboard for a field
pub trait SoftKeyboard {
    fn show(&mut self, field: WidgetId);
    fn hide(&mut self, field: WidgetId);
}

/// Keyboard for hosts without an on-screen keyboard
#[derive(Clone, Copy, Debug, Default)]
pub struct NoKeyboard;

impl SoftKeyboard for NoKeyboard {
    fn show(&mut self, _: WidgetId) {}
    fn hide(&mut self, _: WidgetId) {}
}
