//! Animation scheduler
//!
//! Owns running timelines and advances them each frame.

use crate::timeline::{AnimatedProperties, Timeline, TimelineEvent};
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::fmt::Debug;
use std::time::Instant;

new_key_type! {
    pub struct TimelineId;
}

/// Events from one scheduler step, tagged with the timeline that produced them
pub type ScheduledEvents<T> = SmallVec<[(TimelineId, TimelineEvent<T>); 8]>;

/// The animation scheduler that ticks all active timelines
pub struct AnimationScheduler<K, T> {
    timelines: SlotMap<TimelineId, Timeline<K, T>>,
    last_frame: Instant,
}

impl<K, T> AnimationScheduler<K, T>
where
    K: Copy + PartialEq + Debug,
    T: Copy + Debug,
{
    pub fn new() -> Self {
        Self {
            timelines: SlotMap::with_key(),
            last_frame: Instant::now(),
        }
    }

    /// Start a timeline; events of its first stage are returned immediately
    pub fn start(
        &mut self,
        mut timeline: Timeline<K, T>,
        props: &mut dyn AnimatedProperties<K>,
    ) -> (TimelineId, ScheduledEvents<T>) {
        if !self.has_active_animations() {
            // Don't count idle time as the first frame's delta
            self.last_frame = Instant::now();
        }

        let events = timeline.start(props);
        let finished = !timeline.is_playing();
        let id = self.timelines.insert(timeline);
        if finished {
            self.timelines.remove(id);
        }

        (id, events.into_iter().map(|e| (id, e)).collect())
    }

    /// Cancel a timeline, leaving its properties where they are
    pub fn cancel(&mut self, id: TimelineId) -> bool {
        match self.timelines.remove(id) {
            Some(mut timeline) => {
                timeline.stop();
                true
            }
            None => false,
        }
    }

    /// Check whether a timeline is still running
    pub fn is_running(&self, id: TimelineId) -> bool {
        self.timelines.contains_key(id)
    }

    /// Tick all timelines using wall-clock time since the previous frame
    pub fn tick(&mut self, props: &mut dyn AnimatedProperties<K>) -> ScheduledEvents<T> {
        let now = Instant::now();
        let dt_ms = (now - self.last_frame).as_secs_f32() * 1000.0;
        self.last_frame = now;

        self.advance(dt_ms, props)
    }

    /// Advance all timelines by a fixed delta (in milliseconds)
    pub fn advance(
        &mut self,
        dt_ms: f32,
        props: &mut dyn AnimatedProperties<K>,
    ) -> ScheduledEvents<T> {
        let mut events = SmallVec::new();
        let mut finished: SmallVec<[TimelineId; 2]> = SmallVec::new();

        for (id, timeline) in self.timelines.iter_mut() {
            for event in timeline.tick(dt_ms, props) {
                if matches!(event, TimelineEvent::Finished) {
                    finished.push(id);
                }
                events.push((id, event));
            }
        }

        for id in finished {
            self.timelines.remove(id);
        }

        events
    }

    /// Check if any animations are still active
    pub fn has_active_animations(&self) -> bool {
        !self.timelines.is_empty()
    }

    /// Number of timelines currently running
    pub fn timeline_count(&self) -> usize {
        self.timelines.len()
    }

    /// Properties driven by any running timeline; a property listed twice is
    /// being fought over
    pub fn active_targets(&self) -> impl Iterator<Item = K> + '_ {
        self.timelines.values().flat_map(|t| t.active_targets())
    }
}

impl<K, T> Default for AnimationScheduler<K, T>
where
    K: Copy + PartialEq + Debug,
    T: Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
