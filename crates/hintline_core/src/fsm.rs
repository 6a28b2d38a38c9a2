//! State Machine Runtime
//!
//! Flat, typed state machines for widget interaction states.
//! Supports:
//! - Pure transition functions over `(state, event, context)`
//! - Guards, expressed as conditions on the context
//! - Transition effects handed back to the owner to carry out
//! - Bounded transition history for debugging
//!
//! Machines never run side effects themselves. [`StateMachine::send`] returns
//! the effects of the taken transition and the owner applies them, which keeps
//! every machine testable without a rendering surface.

use smallvec::SmallVec;
use std::fmt::Debug;

/// Default number of history entries kept per machine
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// Describes a machine: its state, event, context and effect types, and the
/// transition function tying them together
pub trait Transitions {
    type State: Copy + Eq + Debug;
    type Event: Copy + Debug;
    /// Read-only data guards are evaluated against
    type Context;
    type Effect;

    /// Compute the transition for `event` in `state`, or `None` if the event
    /// is ignored there
    fn transition(
        state: Self::State,
        event: Self::Event,
        ctx: &Self::Context,
    ) -> Option<Transition<Self::State, Self::Effect>>;
}

/// A taken transition: the target state plus effects for the owner
#[derive(Debug)]
pub struct Transition<S, A> {
    pub to: S,
    pub effects: SmallVec<[A; 4]>,
}

impl<S, A> Transition<S, A> {
    /// Create a transition without effects
    pub fn new(to: S) -> Self {
        Self {
            to,
            effects: SmallVec::new(),
        }
    }

    /// Add an effect to carry out after the transition
    pub fn with_effect(mut self, effect: A) -> Self {
        self.effects.push(effect);
        self
    }

    /// Add several effects at once
    pub fn with_effects(mut self, effects: impl IntoIterator<Item = A>) -> Self {
        self.effects.extend(effects);
        self
    }
}

/// A state machine instance
pub struct StateMachine<T: Transitions> {
    current_state: T::State,
    /// History of state transitions (for debugging)
    history: Vec<(T::State, T::Event, T::State)>,
}

impl<T: Transitions> StateMachine<T> {
    /// Create a new state machine in its initial state
    pub fn new(initial_state: T::State) -> Self {
        Self {
            current_state: initial_state,
            history: Vec::new(),
        }
    }

    /// Get the current state
    pub fn current_state(&self) -> T::State {
        self.current_state
    }

    /// Get transition history
    pub fn history(&self) -> &[(T::State, T::Event, T::State)] {
        &self.history
    }

    /// Send an event to the state machine, returning the effects of the
    /// transition taken (empty if the event is ignored)
    pub fn send(&mut self, event: T::Event, ctx: &T::Context) -> SmallVec<[T::Effect; 4]> {
        let current = self.current_state;

        let Some(transition) = T::transition(current, event, ctx) else {
            tracing::trace!(state = ?current, ?event, "event ignored");
            return SmallVec::new();
        };

        self.current_state = transition.to;
        if current != transition.to {
            tracing::trace!(from = ?current, ?event, to = ?transition.to, "state transition");
        }

        self.history.push((current, event, transition.to));
        self.trim_history();

        transition.effects
    }

    fn trim_history(&mut self) {
        if self.history.len() > DEFAULT_HISTORY_LIMIT {
            let excess = self.history.len() - DEFAULT_HISTORY_LIMIT;
            self.history.drain(..excess);
        }
    }
}
