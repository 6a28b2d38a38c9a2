//! Focus coordination between sibling fields
//!
//! While one field plays its empty-text expansion, its siblings refuse
//! focus. Fields sharing a [`FocusCoordinator`] hold clones of the same
//! handle; everything runs on the UI thread.

use std::cell::Cell;
use std::rc::Rc;

use crate::widget::WidgetId;

/// Shared record of which field, if any, is mid-expansion
#[derive(Clone, Debug, Default)]
pub struct FocusCoordinator {
    animating: Rc<Cell<Option<WidgetId>>>,
}

impl FocusCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field currently holding the claim
    pub fn animating(&self) -> Option<WidgetId> {
        self.animating.get()
    }

    /// Whether `field` must refuse focus right now
    pub fn is_blocked(&self, field: WidgetId) -> bool {
        self.animating.get().is_some_and(|owner| owner != field)
    }

    pub fn claim(&self, field: WidgetId) {
        if let Some(owner) = self.animating.get() {
            if owner != field {
                tracing::warn!(?owner, ?field, "focus animation claimed while another field holds it");
            }
        }
        self.animating.set(Some(field));
    }

    /// Release the claim if `field` holds it
    pub fn release(&self, field: WidgetId) {
        if self.animating.get() == Some(field) {
            self.animating.set(None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_blocks_siblings_only() {
        let coordinator = FocusCoordinator::new();
        let sibling = coordinator.clone();
        let (a, b) = (WidgetId::next(), WidgetId::next());

        coordinator.claim(a);
        assert!(!coordinator.is_blocked(a));
        assert!(sibling.is_blocked(b));

        // A sibling can't release someone else's claim
        sibling.release(b);
        assert_eq!(sibling.animating(), Some(a));

        coordinator.release(a);
        assert!(!sibling.is_blocked(b));
    }
}
