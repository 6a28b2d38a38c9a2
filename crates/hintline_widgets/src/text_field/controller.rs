//! Focus animation controller
//!
//! Couples the [`FocusMachine`] to an [`AnimationScheduler`]. The machine
//! decides; the controller plays the chosen plans, feeds stage milestones
//! back into the machine, and hands the remaining effects to the widget.

use std::collections::VecDeque;

use hintline_animation::{AnimationScheduler, TimelineEvent, TimelineId};
use hintline_core::fsm::StateMachine;
use hintline_theme::{Density, FieldDimensions, FieldTheme, MotionTokens};
use smallvec::SmallVec;

use super::machine::{FieldContext, FieldEffect, FieldEvent, FocusMachine, HostEffect};
use super::state::{DecorationValues, FieldState, Property};

/// Host effects produced by one controller call, in order
pub type HostEffects = SmallVec<[HostEffect; 4]>;

#[derive(Clone, Copy, Debug)]
struct RunningPlan {
    id: TimelineId,
    settle: FieldState,
}

/// Drives the decoration scalars through focus transitions
pub struct FocusAnimationController {
    fsm: StateMachine<FocusMachine>,
    scheduler: AnimationScheduler<Property, FieldState>,
    values: DecorationValues,
    running: Option<RunningPlan>,
    /// Emptiness of the text at the last text change
    text_empty: bool,
    editing_locked: bool,
    dimensions: FieldDimensions,
    motion: MotionTokens,
}

impl FocusAnimationController {
    pub fn new(theme: &FieldTheme, density: Density, text_empty: bool) -> Self {
        Self {
            fsm: StateMachine::new(FieldState::Normal),
            scheduler: AnimationScheduler::new(),
            values: DecorationValues::at_rest(FieldState::Normal, text_empty),
            running: None,
            text_empty,
            editing_locked: false,
            dimensions: theme.resolve(density),
            motion: theme.motion,
        }
    }

    pub fn state(&self) -> FieldState {
        self.fsm.current_state()
    }

    pub fn values(&self) -> &DecorationValues {
        &self.values
    }

    pub fn dimensions(&self) -> &FieldDimensions {
        &self.dimensions
    }

    /// Rest state the running plan will settle in
    pub fn settles_to(&self) -> Option<FieldState> {
        self.running.map(|r| r.settle)
    }

    pub fn is_animating(&self) -> bool {
        self.running.is_some()
    }

    /// Text input is locked until the running expansion settles
    pub fn editing_locked(&self) -> bool {
        self.editing_locked
    }

    /// Transition history, oldest first
    pub fn history(&self) -> &[(FieldState, FieldEvent, FieldState)] {
        self.fsm.history()
    }

    /// Scalars driven by the running plan right now
    pub fn active_targets(&self) -> impl Iterator<Item = Property> + '_ {
        self.scheduler.active_targets()
    }

    /// Number of running timelines; never more than one
    pub fn timeline_count(&self) -> usize {
        self.scheduler.timeline_count()
    }

    pub fn on_focus_changed(&mut self, has_focus: bool, text_empty: bool) -> HostEffects {
        let event = if has_focus {
            FieldEvent::FocusGained
        } else {
            FieldEvent::FocusLost
        };
        self.dispatch(event, text_empty)
    }

    /// Only a change of emptiness can move the label
    pub fn on_text_changed(&mut self, text_empty: bool) -> HostEffects {
        if text_empty == self.text_empty {
            return HostEffects::new();
        }
        self.text_empty = text_empty;
        self.dispatch(FieldEvent::TextChanged, text_empty)
    }

    /// Cancel any running plan and rest unfocused
    pub fn reset(&mut self, text_empty: bool) -> HostEffects {
        self.cancel_running();
        self.dispatch(FieldEvent::Reset, text_empty)
    }

    /// Advance by wall-clock time since the previous frame
    pub fn tick(&mut self, text_empty: bool) -> HostEffects {
        let events = self.scheduler.tick(&mut self.values);
        self.handle_timeline_events(events, text_empty)
    }

    /// Advance by a fixed delta in milliseconds
    pub fn advance(&mut self, dt_ms: f32, text_empty: bool) -> HostEffects {
        let events = self.scheduler.advance(dt_ms, &mut self.values);
        self.handle_timeline_events(events, text_empty)
    }

    fn handle_timeline_events(
        &mut self,
        events: impl IntoIterator<Item = (TimelineId, TimelineEvent<FieldState>)>,
        text_empty: bool,
    ) -> HostEffects {
        let mut queue = VecDeque::new();
        for (id, event) in events {
            if let Some(event) = self.field_event(id, event) {
                queue.push_back(event);
            }
        }

        let mut out = HostEffects::new();
        self.run(queue, text_empty, &mut out);
        out
    }

    fn dispatch(&mut self, event: FieldEvent, text_empty: bool) -> HostEffects {
        let mut out = HostEffects::new();
        self.run(VecDeque::from([event]), text_empty, &mut out);
        out
    }

    /// Send queued events through the machine, applying effects as they come.
    /// Starting a plan can produce milestones of its own, which join the queue.
    fn run(&mut self, mut queue: VecDeque<FieldEvent>, text_empty: bool, out: &mut HostEffects) {
        while let Some(event) = queue.pop_front() {
            let ctx = self.context(text_empty);
            for effect in self.fsm.send(event, &ctx) {
                match effect {
                    FieldEffect::Play(plan) => {
                        self.cancel_running();
                        tracing::debug!(?plan, "playing focus plan");
                        let (id, events) = self.scheduler.start(plan.timeline, &mut self.values);
                        self.running = Some(RunningPlan {
                            id,
                            settle: plan.settle,
                        });
                        for (id, event) in events {
                            if let Some(event) = self.field_event(id, event) {
                                queue.push_back(event);
                            }
                        }
                    }
                    FieldEffect::Snap(values) => self.values = values,
                    FieldEffect::Host(effect) => {
                        if let HostEffect::SetEditable(editable) = effect {
                            self.editing_locked = !editable;
                        }
                        out.push(effect);
                    }
                }
            }
        }
    }

    fn cancel_running(&mut self) {
        if let Some(running) = self.running.take() {
            tracing::trace!(settle = ?running.settle, "cancelling focus plan");
            self.scheduler.cancel(running.id);
        }
    }

    /// Translate a timeline milestone; milestones of cancelled plans are dropped
    fn field_event(&mut self, id: TimelineId, event: TimelineEvent<FieldState>) -> Option<FieldEvent> {
        let running = self.running.filter(|r| r.id == id)?;
        match event {
            TimelineEvent::StageStarted(stage) => Some(FieldEvent::StageStarted(stage)),
            TimelineEvent::StageEnded(_) => None,
            TimelineEvent::Finished => {
                self.running = None;
                Some(FieldEvent::Settled(running.settle))
            }
        }
    }

    fn context(&self, text_empty: bool) -> FieldContext {
        FieldContext {
            text_empty,
            values: self.values,
            settles_to: self.settles_to(),
            editing_locked: self.editing_locked,
            dimensions: self.dimensions,
            motion: self.motion,
        }
    }
}
