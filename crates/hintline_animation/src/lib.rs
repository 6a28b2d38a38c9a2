//! Hintline Animation System
//!
//! Keyframe animations and timeline orchestration.
//!
//! # Features
//!
//! - **Easing**: linear, accelerate-decelerate, and bounce curves
//! - **Keyframe Animations**: timed value sequences, evenly spaced or explicit
//! - **Timelines**: stages played in sequence, tweens inside a stage in parallel
//! - **Interruptible**: tweens can start from the property's current value, so
//!   a replacement timeline picks up wherever a cancelled one left off

pub mod easing;
pub mod keyframe;
pub mod scheduler;
pub mod timeline;

pub use easing::Easing;
pub use keyframe::{Keyframe, KeyframeAnimation};
pub use scheduler::{AnimationScheduler, ScheduledEvents, TimelineId};
pub use timeline::{AnimatedProperties, Timeline, TimelineEvent, TimelineEvents, Tween};
