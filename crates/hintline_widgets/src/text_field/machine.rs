//! Focus transition machine
//!
//! A pure transition function over [`FieldState`]. Focus changes pick an
//! animation [`Plan`] from the current state and scalar values; stage
//! milestones of the running plan move the machine through the intermediate
//! states, and the plan's completion settles it into a rest state.
//!
//! The normal sequences are:
//!
//! ```text
//! gain, text empty:      ShowHighlight -> PullLine -> TextRise -> Expanded
//! gain, text present:    ShowHighlight -> Expanded
//! loss, text empty:      HideHighlight -> TextDrop -> Normal
//! loss, text present:    HideHighlight -> Normal
//! ```
//!
//! A focus change in the middle of a sequence replans from the values the
//! decoration has reached, so the field always settles in the rest state
//! matching its focus.

use std::fmt;

use hintline_animation::{Easing, Timeline, Tween};
use hintline_core::fsm::{Transition, Transitions};
use hintline_theme::{FieldDimensions, MotionTokens};

use super::state::{DecorationValues, FieldState, Property};

/// Inputs of the focus machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldEvent {
    FocusGained,
    FocusLost,
    /// Text content changed while it may affect the rest layout
    TextChanged,
    /// A stage of the running plan started
    StageStarted(FieldState),
    /// The running plan finished
    Settled(FieldState),
    /// Drop any running plan and return to the unfocused rest state
    Reset,
}

/// Effects the host widget must carry out
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostEffect {
    /// Allow or refuse text input. Refusing also clears the input type;
    /// allowing restores it.
    SetEditable(bool),
    SetCursorVisible(bool),
    ShowKeyboard,
    /// Start blocking focus on sibling fields
    ClaimFocusAnimation,
    ReleaseFocusAnimation,
}

/// Effects of a focus machine transition
#[derive(Debug)]
pub enum FieldEffect {
    /// Cancel the running plan, if any, and start this one
    Play(Plan),
    /// Jump every scalar to these values
    Snap(DecorationValues),
    Host(HostEffect),
}

/// A timeline of decoration stages plus the rest state it settles in
pub struct Plan {
    pub timeline: Timeline<Property, FieldState>,
    pub settle: FieldState,
}

impl fmt::Debug for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Plan")
            .field("stages", &self.timeline.stage_count())
            .field("duration_ms", &self.timeline.duration_ms())
            .field("settle", &self.settle)
            .finish()
    }
}

/// Snapshot the machine decides against
#[derive(Clone, Copy, Debug)]
pub struct FieldContext {
    pub text_empty: bool,
    pub values: DecorationValues,
    /// Rest state of the running plan, `None` when idle
    pub settles_to: Option<FieldState>,
    /// Text input is locked for the empty-text expansion
    pub editing_locked: bool,
    pub dimensions: FieldDimensions,
    pub motion: MotionTokens,
}

/// The text field focus machine
pub struct FocusMachine;

impl Transitions for FocusMachine {
    type State = FieldState;
    type Event = FieldEvent;
    type Context = FieldContext;
    type Effect = FieldEffect;

    fn transition(
        state: FieldState,
        event: FieldEvent,
        ctx: &FieldContext,
    ) -> Option<Transition<FieldState, FieldEffect>> {
        use FieldEvent::*;
        use FieldState::*;

        match (state, event) {
            (_, StageStarted(stage)) => Some(Transition::new(stage)),
            (_, Settled(rest)) => Some(settle(rest, ctx)),
            (_, Reset) => Some(settle(Normal, ctx)),

            // Already heading for the right rest state
            (_, FocusGained) if ctx.settles_to == Some(Expanded) => None,
            (_, FocusLost) if ctx.settles_to == Some(Normal) => None,

            (Normal | ShowHighlight | PullLine, FocusGained) => Some(expand(state, ctx)),
            (HideHighlight, FocusGained) => Some(play(
                state,
                Timeline::new().then(
                    HideHighlight,
                    [Tween::to(
                        Property::ShowLineFraction,
                        0.0,
                        scaled(ctx.motion.hide_ms, ctx.values.show_line_fraction),
                    )],
                ),
                Expanded,
            )),
            (TextDrop, FocusGained) => Some(play(
                state,
                Timeline::new()
                    .then(TextRise, [rise_tween(ctx)])
                    .then(
                        ShowHighlight,
                        [Tween::between(
                            Property::ShowLineFraction,
                            0.0,
                            1.0,
                            ctx.motion.reveal_ms,
                        )],
                    ),
                Expanded,
            )),

            (ShowHighlight, FocusLost) => Some(retract_highlight(ctx)),
            (PullLine, FocusLost) => Some(release_pull(ctx)),
            (TextRise, FocusLost) => Some(play(
                state,
                Timeline::new().then(
                    TextDrop,
                    [
                        drop_tween(ctx),
                        pull_release(ctx),
                        Tween::to(Property::LineShakeOffset, 0.0, ctx.motion.pull_ms),
                    ],
                ),
                Normal,
            )),
            (Expanded, FocusLost) => {
                let timeline = Timeline::new().then(
                    HideHighlight,
                    [Tween::between(
                        Property::ShowLineFraction,
                        0.0,
                        1.0,
                        ctx.motion.hide_ms,
                    )],
                );
                Some(play(state, with_label(timeline, ctx), Normal))
            }
            (HideHighlight, FocusLost) => Some(finish_hide(ctx)),

            (Normal, TextChanged) if ctx.settles_to.is_none() => Some(
                Transition::new(Normal)
                    .with_effect(FieldEffect::Snap(DecorationValues::at_rest(Normal, ctx.text_empty))),
            ),
            // A collapse in flight must end with the label where the new
            // text leaves it
            (ShowHighlight, TextChanged) if ctx.settles_to == Some(Normal) => {
                Some(retract_highlight(ctx))
            }
            (PullLine, TextChanged) if ctx.settles_to == Some(Normal) => Some(release_pull(ctx)),
            (HideHighlight, TextChanged) if ctx.settles_to == Some(Normal) => Some(finish_hide(ctx)),
            (TextDrop, TextChanged) if ctx.settles_to == Some(Normal) => {
                let tween = if ctx.text_empty {
                    drop_tween(ctx)
                } else {
                    rise_tween(ctx)
                };
                Some(play(TextDrop, Timeline::new().then(TextDrop, [tween]), Normal))
            }

            _ => None,
        }
    }
}

/// Shrink a partly revealed highlight back into the centre, then move the
/// label to its resting height
fn retract_highlight(ctx: &FieldContext) -> Transition<FieldState, FieldEffect> {
    let timeline = Timeline::new().then(
        FieldState::ShowHighlight,
        [Tween::to(
            Property::ShowLineFraction,
            0.0,
            scaled(ctx.motion.reveal_ms, ctx.values.show_line_fraction),
        )],
    );
    play(
        FieldState::ShowHighlight,
        with_label(timeline, ctx),
        FieldState::Normal,
    )
}

/// Finish hiding the highlight from where it is, then move the label to its
/// resting height
fn finish_hide(ctx: &FieldContext) -> Transition<FieldState, FieldEffect> {
    let timeline = Timeline::new().then(
        FieldState::HideHighlight,
        [Tween::to(
            Property::ShowLineFraction,
            1.0,
            scaled(ctx.motion.hide_ms, 1.0 - ctx.values.show_line_fraction),
        )],
    );
    play(
        FieldState::HideHighlight,
        with_label(timeline, ctx),
        FieldState::Normal,
    )
}

/// Straighten the pulled line, then retract the highlight
fn release_pull(ctx: &FieldContext) -> Transition<FieldState, FieldEffect> {
    let timeline = Timeline::new()
        .then(FieldState::PullLine, [pull_release(ctx)])
        .then(
            FieldState::ShowHighlight,
            [Tween::to(
                Property::ShowLineFraction,
                0.0,
                ctx.motion.reveal_ms,
            )],
        );
    play(
        FieldState::PullLine,
        with_label(timeline, ctx),
        FieldState::Normal,
    )
}

/// Duration for covering `fraction` of a full-length animation
fn scaled(full_ms: u32, fraction: f32) -> u32 {
    (full_ms as f32 * fraction.clamp(0.0, 1.0)).round() as u32
}

fn play(
    state: FieldState,
    timeline: Timeline<Property, FieldState>,
    settle: FieldState,
) -> Transition<FieldState, FieldEffect> {
    Transition::new(state).with_effect(FieldEffect::Play(Plan { timeline, settle }))
}

fn rise_tween(ctx: &FieldContext) -> Tween<Property> {
    Tween::to(
        Property::TextRiseFraction,
        1.0,
        scaled(ctx.motion.rise_ms, 1.0 - ctx.values.text_rise_fraction),
    )
}

fn drop_tween(ctx: &FieldContext) -> Tween<Property> {
    Tween::to(
        Property::TextRiseFraction,
        0.0,
        scaled(ctx.motion.drop_ms, ctx.values.text_rise_fraction),
    )
    .with_easing(Easing::Bounce)
}

fn pull_release(ctx: &FieldContext) -> Tween<Property> {
    let pulled = if ctx.dimensions.max_pull > 0.0 {
        ctx.values.line_pull_degree / ctx.dimensions.max_pull
    } else {
        0.0
    };
    Tween::to(Property::LinePullDegree, 0.0, scaled(ctx.motion.pull_ms, pulled))
}

/// Append the label move toward its unfocused rest height: the bounced drop
/// for an empty field, a rise for one holding text
fn with_label(
    timeline: Timeline<Property, FieldState>,
    ctx: &FieldContext,
) -> Timeline<Property, FieldState> {
    let rise = ctx.values.text_rise_fraction;
    if ctx.text_empty && rise > 0.0 {
        timeline.then(FieldState::TextDrop, [drop_tween(ctx)])
    } else if !ctx.text_empty && rise < 1.0 {
        timeline.then(FieldState::TextDrop, [rise_tween(ctx)])
    } else {
        timeline
    }
}

/// Gain focus from `Normal`, or resume an expansion that was being reversed
fn expand(state: FieldState, ctx: &FieldContext) -> Transition<FieldState, FieldEffect> {
    let reveal = Tween::to(
        Property::ShowLineFraction,
        1.0,
        scaled(ctx.motion.reveal_ms, 1.0 - ctx.values.show_line_fraction),
    );

    if !ctx.text_empty {
        return play(
            state,
            Timeline::new().then(FieldState::ShowHighlight, [reveal]),
            FieldState::Expanded,
        );
    }

    let mut timeline = Timeline::new();
    if state != FieldState::PullLine {
        timeline = timeline.then(FieldState::ShowHighlight, [reveal]);
    }
    let timeline = timeline
        .then(
            FieldState::PullLine,
            [Tween::to(
                Property::LinePullDegree,
                ctx.dimensions.max_pull,
                ctx.motion.pull_ms,
            )],
        )
        .then(
            FieldState::TextRise,
            [
                Tween::to(Property::TextRiseFraction, 1.0, ctx.motion.rise_ms),
                Tween::through(
                    Property::LineShakeOffset,
                    &ctx.dimensions.shake_keyframes(),
                    ctx.motion.shake_ms,
                ),
            ],
        );

    let mut transition = Transition::new(state);
    if !ctx.editing_locked {
        transition = transition.with_effects([
            FieldEffect::Host(HostEffect::SetEditable(false)),
            FieldEffect::Host(HostEffect::SetCursorVisible(false)),
            FieldEffect::Host(HostEffect::ClaimFocusAnimation),
        ]);
    }
    transition.with_effect(FieldEffect::Play(Plan {
        timeline,
        settle: FieldState::Expanded,
    }))
}

/// Enter a rest state: snap the scalars and lift the input lock
fn settle(rest: FieldState, ctx: &FieldContext) -> Transition<FieldState, FieldEffect> {
    let transition = Transition::new(rest)
        .with_effect(FieldEffect::Snap(DecorationValues::at_rest(rest, ctx.text_empty)));
    if !ctx.editing_locked {
        return transition;
    }

    let transition = transition.with_effects([
        FieldEffect::Host(HostEffect::SetEditable(true)),
        FieldEffect::Host(HostEffect::SetCursorVisible(true)),
        FieldEffect::Host(HostEffect::ReleaseFocusAnimation),
    ]);
    if rest == FieldState::Expanded {
        transition.with_effect(FieldEffect::Host(HostEffect::ShowKeyboard))
    } else {
        transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hintline_theme::{Density, FieldTheme};

    fn context(text_empty: bool) -> FieldContext {
        let theme = FieldTheme::default();
        FieldContext {
            text_empty,
            values: DecorationValues::at_rest(FieldState::Normal, text_empty),
            settles_to: None,
            editing_locked: false,
            dimensions: theme.resolve(Density::BASELINE),
            motion: theme.motion,
        }
    }

    fn plan_of(transition: &Transition<FieldState, FieldEffect>) -> Option<&Plan> {
        transition.effects.iter().find_map(|e| match e {
            FieldEffect::Play(plan) => Some(plan),
            _ => None,
        })
    }

    fn host_effects(transition: &Transition<FieldState, FieldEffect>) -> Vec<HostEffect> {
        transition
            .effects
            .iter()
            .filter_map(|e| match e {
                FieldEffect::Host(h) => Some(*h),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_empty_gain_locks_input_and_plays_three_stages() {
        let t = FocusMachine::transition(FieldState::Normal, FieldEvent::FocusGained, &context(true))
            .unwrap();
        assert_eq!(
            host_effects(&t),
            vec![
                HostEffect::SetEditable(false),
                HostEffect::SetCursorVisible(false),
                HostEffect::ClaimFocusAnimation
            ]
        );
        let plan = plan_of(&t).unwrap();
        assert_eq!(plan.settle, FieldState::Expanded);
        assert_eq!(plan.timeline.stage_count(), 3);
        // reveal 500 + pull 300 + max(rise 300, shake 400)
        assert_eq!(plan.timeline.duration_ms(), 1200);
    }

    #[test]
    fn test_filled_gain_only_reveals() {
        let t = FocusMachine::transition(FieldState::Normal, FieldEvent::FocusGained, &context(false))
            .unwrap();
        assert!(host_effects(&t).is_empty());
        let plan = plan_of(&t).unwrap();
        assert_eq!(plan.timeline.stage_count(), 1);
        assert_eq!(plan.timeline.duration_ms(), 500);
    }

    #[test]
    fn test_collapse_appends_drop_only_for_empty_text() {
        let mut ctx = context(true);
        ctx.values = DecorationValues::at_rest(FieldState::Expanded, true);
        let t = FocusMachine::transition(FieldState::Expanded, FieldEvent::FocusLost, &ctx).unwrap();
        assert_eq!(plan_of(&t).unwrap().timeline.stage_count(), 2);
        assert_eq!(plan_of(&t).unwrap().timeline.duration_ms(), 1100);

        ctx.text_empty = false;
        let t = FocusMachine::transition(FieldState::Expanded, FieldEvent::FocusLost, &ctx).unwrap();
        assert_eq!(plan_of(&t).unwrap().timeline.stage_count(), 1);
    }

    #[test]
    fn test_reversal_duration_scales_with_distance() {
        let mut ctx = context(false);
        ctx.values.show_line_fraction = 0.4;
        ctx.settles_to = Some(FieldState::Expanded);
        let t = FocusMachine::transition(FieldState::ShowHighlight, FieldEvent::FocusLost, &ctx)
            .unwrap();
        assert_eq!(plan_of(&t).unwrap().timeline.duration_ms(), 200);
        assert_eq!(plan_of(&t).unwrap().settle, FieldState::Normal);
    }

    #[test]
    fn test_redundant_focus_events_are_ignored() {
        let mut ctx = context(true);
        ctx.settles_to = Some(FieldState::Expanded);
        assert!(FocusMachine::transition(FieldState::PullLine, FieldEvent::FocusGained, &ctx).is_none());

        ctx.settles_to = Some(FieldState::Normal);
        assert!(FocusMachine::transition(FieldState::TextDrop, FieldEvent::FocusLost, &ctx).is_none());

        ctx.settles_to = None;
        assert!(FocusMachine::transition(FieldState::Expanded, FieldEvent::FocusGained, &ctx).is_none());
        assert!(FocusMachine::transition(FieldState::Normal, FieldEvent::FocusLost, &ctx).is_none());
    }

    #[test]
    fn test_settle_unlocks_and_shows_keyboard_after_expansion() {
        let mut ctx = context(true);
        ctx.editing_locked = true;
        let t = FocusMachine::transition(
            FieldState::TextRise,
            FieldEvent::Settled(FieldState::Expanded),
            &ctx,
        )
        .unwrap();
        assert_eq!(t.to, FieldState::Expanded);
        assert_eq!(
            host_effects(&t),
            vec![
                HostEffect::SetEditable(true),
                HostEffect::SetCursorVisible(true),
                HostEffect::ReleaseFocusAnimation,
                HostEffect::ShowKeyboard
            ]
        );
    }

    #[test]
    fn test_settle_without_lock_only_snaps() {
        let t = FocusMachine::transition(
            FieldState::HideHighlight,
            FieldEvent::Settled(FieldState::Normal),
            &context(false),
        )
        .unwrap();
        assert!(host_effects(&t).is_empty());
        assert!(matches!(
            t.effects.as_slice(),
            [FieldEffect::Snap(v)] if v.text_rise_fraction == 1.0 && v.show_line_fraction == 0.0
        ));
    }

    #[test]
    fn test_clearing_text_mid_collapse_adds_the_drop() {
        let mut ctx = context(true);
        ctx.values = DecorationValues {
            show_line_fraction: 0.2,
            text_rise_fraction: 1.0,
            ..Default::default()
        };
        ctx.settles_to = Some(FieldState::Normal);
        let t = FocusMachine::transition(FieldState::HideHighlight, FieldEvent::TextChanged, &ctx)
            .unwrap();
        let plan = plan_of(&t).unwrap();
        assert_eq!(plan.settle, FieldState::Normal);
        // hide the remaining 80%, then the full bounced drop
        assert_eq!(plan.timeline.stage_count(), 2);
        assert_eq!(plan.timeline.duration_ms(), 400 + 600);
    }

    #[test]
    fn test_typing_mid_drop_raises_the_label_again() {
        let mut ctx = context(false);
        ctx.values.text_rise_fraction = 0.5;
        ctx.settles_to = Some(FieldState::Normal);
        let t = FocusMachine::transition(FieldState::TextDrop, FieldEvent::TextChanged, &ctx).unwrap();
        let plan = plan_of(&t).unwrap();
        assert_eq!(plan.timeline.duration_ms(), 150);
        assert_eq!(plan.settle, FieldState::Normal);
    }

    #[test]
    fn test_text_arriving_mid_retract_lifts_the_label() {
        let mut ctx = context(false);
        ctx.values.show_line_fraction = 0.5;
        ctx.values.text_rise_fraction = 0.0;
        ctx.settles_to = Some(FieldState::Normal);
        let t = FocusMachine::transition(FieldState::ShowHighlight, FieldEvent::TextChanged, &ctx)
            .unwrap();
        let plan = plan_of(&t).unwrap();
        assert_eq!(plan.timeline.stage_count(), 2);
        assert_eq!(plan.timeline.duration_ms(), 250 + 300);
    }

    #[test]
    fn test_text_change_snaps_only_when_idle() {
        let mut ctx = context(false);
        assert!(FocusMachine::transition(FieldState::Normal, FieldEvent::TextChanged, &ctx).is_some());
        ctx.settles_to = Some(FieldState::Expanded);
        assert!(FocusMachine::transition(FieldState::Normal, FieldEvent::TextChanged, &ctx).is_none());
        assert!(FocusMachine::transition(FieldState::Expanded, FieldEvent::TextChanged, &context(true))
            .is_none());
    }
}
