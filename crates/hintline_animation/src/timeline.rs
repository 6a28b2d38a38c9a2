//! Timeline orchestration for multiple animations
//!
//! A timeline is a sequence of stages. Stages play strictly one after the
//! other; the tweens inside a stage play together and the stage ends when its
//! slowest tween does. Each stage carries a caller-defined tag that is
//! reported when the stage starts and ends, so owners can hang state changes
//! on animation milestones.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::fmt::Debug;

use crate::easing::Easing;
use crate::keyframe::KeyframeAnimation;

new_key_type! {
    pub struct TimelineEntryId;
}

/// Storage the timeline reads start values from and writes animated values to
pub trait AnimatedProperties<K> {
    fn get(&self, key: K) -> f32;
    fn set(&mut self, key: K, value: f32);
}

/// Lifecycle notifications produced while a timeline plays
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineEvent<T> {
    StageStarted(T),
    StageEnded(T),
    /// Every stage has ended
    Finished,
}

/// Events produced by one timeline step
pub type TimelineEvents<T> = SmallVec<[TimelineEvent<T>; 4]>;

/// One animated property inside a stage, eased with
/// [`Easing::AccelerateDecelerate`] unless told otherwise
#[derive(Clone, Debug)]
pub struct Tween<K> {
    target: K,
    animation: KeyframeAnimation,
    /// Read the start value from the property when the stage starts
    from_current: bool,
}

impl<K: Copy> Tween<K> {
    /// Animate `target` from its value at stage start to `end`
    pub fn to(target: K, end: f32, duration_ms: u32) -> Self {
        Self {
            target,
            animation: KeyframeAnimation::tween(end, end, duration_ms)
                .with_easing(Easing::AccelerateDecelerate),
            from_current: true,
        }
    }

    /// Animate `target` between two fixed values
    pub fn between(target: K, start: f32, end: f32, duration_ms: u32) -> Self {
        Self {
            target,
            animation: KeyframeAnimation::tween(start, end, duration_ms)
                .with_easing(Easing::AccelerateDecelerate),
            from_current: false,
        }
    }

    /// Animate `target` through evenly spaced values
    pub fn through(target: K, values: &[f32], duration_ms: u32) -> Self {
        Self {
            target,
            animation: KeyframeAnimation::from_values(values, duration_ms)
                .with_easing(Easing::AccelerateDecelerate),
            from_current: false,
        }
    }

    /// Builder: set the easing curve
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.animation = self.animation.with_easing(easing);
        self
    }

    pub fn target(&self) -> K {
        self.target
    }

    pub fn duration_ms(&self) -> u32 {
        self.animation.duration_ms()
    }

    pub fn end_value(&self) -> f32 {
        self.animation.end_value()
    }
}

/// An entry in a timeline
struct TimelineEntry<K> {
    stage: usize,
    tween: Tween<K>,
    finished: bool,
}

struct Stage<T> {
    tag: T,
    /// Offset in milliseconds from timeline start
    offset_ms: u32,
    duration_ms: u32,
    started: bool,
    finished: bool,
}

/// A timeline that orchestrates multiple animations
pub struct Timeline<K, T> {
    entries: SlotMap<TimelineEntryId, TimelineEntry<K>>,
    stages: SmallVec<[Stage<T>; 4]>,
    current_time: f32,
    duration_ms: u32,
    playing: bool,
}

impl<K, T> Timeline<K, T>
where
    K: Copy + PartialEq + Debug,
    T: Copy + Debug,
{
    pub fn new() -> Self {
        Self {
            entries: SlotMap::with_key(),
            stages: SmallVec::new(),
            current_time: 0.0,
            duration_ms: 0,
            playing: false,
        }
    }

    /// Append a stage whose tweens play together after every earlier stage
    /// has ended
    pub fn then(mut self, tag: T, tweens: impl IntoIterator<Item = Tween<K>>) -> Self {
        let stage = self.stages.len();
        let offset_ms = self.duration_ms;
        let mut duration_ms = 0;

        for tween in tweens {
            debug_assert!(
                !self
                    .entries
                    .values()
                    .any(|e| e.stage == stage && e.tween.target == tween.target),
                "two tweens in one stage drive {:?}",
                tween.target
            );
            duration_ms = duration_ms.max(tween.duration_ms());
            self.entries.insert(TimelineEntry {
                stage,
                tween,
                finished: false,
            });
        }

        self.stages.push(Stage {
            tag,
            offset_ms,
            duration_ms,
            started: false,
            finished: false,
        });
        self.duration_ms = offset_ms + duration_ms;
        self
    }

    /// Start playing from the beginning. The first stage starts immediately.
    pub fn start(&mut self, props: &mut dyn AnimatedProperties<K>) -> TimelineEvents<T> {
        self.current_time = 0.0;
        self.playing = true;
        for stage in self.stages.iter_mut() {
            stage.started = false;
            stage.finished = false;
        }
        for entry in self.entries.values_mut() {
            entry.finished = false;
        }
        self.process(props)
    }

    /// Stop without reaching the end; no further events are produced
    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Total duration of all stages
    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn elapsed_ms(&self) -> f32 {
        self.current_time
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Tag of the stage currently playing
    pub fn current_stage(&self) -> Option<T> {
        self.stages
            .iter()
            .find(|s| s.started && !s.finished)
            .map(|s| s.tag)
    }

    /// Properties being driven right now
    pub fn active_targets(&self) -> impl Iterator<Item = K> + '_ {
        self.entries
            .values()
            .filter(|e| !e.finished && self.stages[e.stage].started)
            .map(|e| e.tween.target)
    }

    /// Advance the timeline
    pub fn tick(&mut self, dt_ms: f32, props: &mut dyn AnimatedProperties<K>) -> TimelineEvents<T> {
        if !self.playing {
            return SmallVec::new();
        }

        self.current_time = (self.current_time + dt_ms).min(self.duration_ms as f32);
        self.process(props)
    }

    /// Fire milestones and write values for the current time. Stages are
    /// visited in order so an ending stage always reports before the next
    /// one starts.
    fn process(&mut self, props: &mut dyn AnimatedProperties<K>) -> TimelineEvents<T> {
        let mut events = SmallVec::new();
        let now = self.current_time;

        for index in 0..self.stages.len() {
            let stage = &mut self.stages[index];
            if stage.finished {
                continue;
            }
            if now < stage.offset_ms as f32 {
                break;
            }

            if !stage.started {
                stage.started = true;
                events.push(TimelineEvent::StageStarted(stage.tag));
                tracing::trace!(stage = ?stage.tag, at_ms = now, "stage started");

                for entry in self.entries.values_mut().filter(|e| e.stage == index) {
                    if entry.tween.from_current {
                        let current = props.get(entry.tween.target);
                        entry.tween.animation.set_start_value(current);
                    }
                    entry.tween.animation.start();
                }
            }

            let stage = &mut self.stages[index];
            let local = now - stage.offset_ms as f32;
            for entry in self.entries.values_mut().filter(|e| e.stage == index) {
                if entry.finished {
                    continue;
                }
                entry.tween.animation.seek(local);
                props.set(entry.tween.target, entry.tween.animation.value());
                entry.finished = !entry.tween.animation.is_playing();
            }

            if local >= stage.duration_ms as f32 {
                stage.finished = true;
                events.push(TimelineEvent::StageEnded(stage.tag));
                tracing::trace!(stage = ?stage.tag, at_ms = now, "stage ended");
            } else {
                break;
            }
        }

        if self.stages.iter().all(|s| s.finished) {
            self.playing = false;
            events.push(TimelineEvent::Finished);
        }

        events
    }
}

impl<K, T> Default for Timeline<K, T>
where
    K: Copy + PartialEq + Debug,
    T: Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Prop {
        A,
        B,
    }

    #[derive(Default)]
    struct Props {
        a: f32,
        b: f32,
    }

    impl AnimatedProperties<Prop> for Props {
        fn get(&self, key: Prop) -> f32 {
            match key {
                Prop::A => self.a,
                Prop::B => self.b,
            }
        }

        fn set(&mut self, key: Prop, value: f32) {
            match key {
                Prop::A => self.a = value,
                Prop::B => self.b = value,
            }
        }
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_first_stage_starts_immediately() {
        let mut props = Props::default();
        let mut timeline = Timeline::new().then(1u8, [Tween::to(Prop::A, 1.0, 100)]);

        let events = timeline.start(&mut props);
        assert_eq!(events.as_slice(), &[TimelineEvent::StageStarted(1)]);
        assert!(timeline.is_playing());
        assert_eq!(timeline.current_stage(), Some(1));
    }

    #[test]
    fn test_sequential_stage_ordering() {
        let mut props = Props::default();
        let mut timeline = Timeline::new()
            .then(1u8, [Tween::to(Prop::A, 1.0, 100)])
            .then(2u8, [Tween::to(Prop::B, 4.0, 100)]);
        assert_eq!(timeline.duration_ms(), 200);

        timeline.start(&mut props);
        let events = timeline.tick(120.0, &mut props);
        assert_eq!(
            events.as_slice(),
            &[TimelineEvent::StageEnded(1), TimelineEvent::StageStarted(2)]
        );
        assert!(approx(props.a, 1.0));
        // 20% into stage 2 on the default curve
        assert!((props.b - 0.382).abs() < 0.01);

        let events = timeline.tick(500.0, &mut props);
        assert_eq!(
            events.as_slice(),
            &[TimelineEvent::StageEnded(2), TimelineEvent::Finished]
        );
        assert!(approx(props.b, 4.0));
        assert!(!timeline.is_playing());
    }

    #[test]
    fn test_tweens_ease_in_and_out_by_default() {
        let mut props = Props::default();
        let mut timeline = Timeline::new().then(
            1u8,
            [
                Tween::between(Prop::A, 0.0, 1.0, 200),
                Tween::between(Prop::B, 0.0, 1.0, 200).with_easing(Easing::Linear),
            ],
        );
        timeline.start(&mut props);
        timeline.tick(50.0, &mut props);
        assert!((props.a - 0.146).abs() < 0.01);
        assert!(approx(props.b, 0.25));
    }

    #[test]
    fn test_parallel_stage_waits_for_slowest() {
        let mut props = Props::default();
        let mut timeline = Timeline::new().then(
            7u8,
            [
                Tween::to(Prop::A, 1.0, 300),
                Tween::through(Prop::B, &[30.0, -20.0, 0.0, 8.0, 0.0], 400),
            ],
        );
        assert_eq!(timeline.duration_ms(), 400);

        timeline.start(&mut props);
        let events = timeline.tick(300.0, &mut props);
        assert!(events.is_empty());
        assert!(approx(props.a, 1.0));
        assert_eq!(timeline.active_targets().collect::<Vec<_>>(), vec![Prop::B]);

        let events = timeline.tick(100.0, &mut props);
        assert_eq!(
            events.as_slice(),
            &[TimelineEvent::StageEnded(7), TimelineEvent::Finished]
        );
        assert!(approx(props.b, 0.0));
    }

    #[test]
    fn test_from_current_reads_value_at_stage_start() {
        let mut props = Props {
            a: 0.0,
            b: 0.5,
        };
        let mut timeline = Timeline::new()
            .then(1u8, [Tween::to(Prop::A, 1.0, 100)])
            .then(2u8, [Tween::to(Prop::B, 1.0, 100)]);

        timeline.start(&mut props);
        timeline.tick(50.0, &mut props);
        // Changed before stage 2 starts; stage 2 must pick this up
        props.b = 0.0;
        timeline.tick(100.0, &mut props);
        assert!(approx(props.b, 0.5));
    }

    #[test]
    fn test_stop_silences_events() {
        let mut props = Props::default();
        let mut timeline = Timeline::new().then(1u8, [Tween::to(Prop::A, 1.0, 100)]);
        timeline.start(&mut props);
        timeline.stop();
        assert!(timeline.tick(500.0, &mut props).is_empty());
        assert!(approx(props.a, 0.0));
    }

    #[test]
    fn test_zero_duration_stage_completes_on_start() {
        let mut props = Props::default();
        let mut timeline = Timeline::new().then(1u8, [Tween::between(Prop::A, 0.0, 2.0, 0)]);
        let events = timeline.start(&mut props);
        assert_eq!(
            events.as_slice(),
            &[
                TimelineEvent::StageStarted(1),
                TimelineEvent::StageEnded(1),
                TimelineEvent::Finished
            ]
        );
        assert!(approx(props.a, 2.0));
    }
}
