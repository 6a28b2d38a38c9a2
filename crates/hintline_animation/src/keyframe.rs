//! Keyframe animations
//!
//! Single-value animations described by timed keyframes. A plain tween is the
//! two-keyframe case; [`KeyframeAnimation::from_values`] spreads a value list
//! evenly over the duration.

use crate::easing::Easing;

/// A single keyframe in a single-value animation
#[derive(Clone, Debug)]
pub struct Keyframe {
    /// Time position (0.0 to 1.0)
    pub time: f32,
    /// Target value at this keyframe
    pub value: f32,
    /// Easing function to use when transitioning TO this keyframe
    pub easing: Easing,
}

impl Keyframe {
    pub fn new(time: f32, value: f32) -> Self {
        Self {
            time,
            value,
            easing: Easing::Linear,
        }
    }
}

/// A keyframe-based animation (single value)
#[derive(Clone, Debug)]
pub struct KeyframeAnimation {
    duration_ms: u32,
    keyframes: Vec<Keyframe>,
    /// Easing applied to overall progress before keyframes are looked up
    easing: Easing,
    current_time: f32,
    playing: bool,
}

impl KeyframeAnimation {
    pub fn new(duration_ms: u32, keyframes: Vec<Keyframe>) -> Self {
        Self {
            duration_ms,
            keyframes,
            easing: Easing::Linear,
            current_time: 0.0,
            playing: false,
        }
    }

    /// Animate from `from` to `to`
    pub fn tween(from: f32, to: f32, duration_ms: u32) -> Self {
        Self::new(
            duration_ms,
            vec![Keyframe::new(0.0, from), Keyframe::new(1.0, to)],
        )
    }

    /// Animate through `values`, spaced evenly over the duration
    pub fn from_values(values: &[f32], duration_ms: u32) -> Self {
        let keyframes = match values.len() {
            0 => Vec::new(),
            1 => vec![Keyframe::new(0.0, values[0]), Keyframe::new(1.0, values[0])],
            n => {
                let step = 1.0 / (n - 1) as f32;
                values
                    .iter()
                    .enumerate()
                    .map(|(i, &value)| Keyframe::new(i as f32 * step, value))
                    .collect()
            }
        };
        Self::new(duration_ms, keyframes)
    }

    /// Builder: set the overall easing
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn start(&mut self) {
        self.current_time = 0.0;
        self.playing = true;
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn progress(&self) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        self.current_time / self.duration_ms as f32
    }

    /// Value of the first keyframe
    pub fn start_value(&self) -> f32 {
        self.keyframes.first().map_or(0.0, |kf| kf.value)
    }

    /// Value of the last keyframe
    pub fn end_value(&self) -> f32 {
        self.keyframes.last().map_or(0.0, |kf| kf.value)
    }

    /// Rebind the first keyframe, used when an animation starts from
    /// wherever its property currently is
    pub fn set_start_value(&mut self, value: f32) {
        if let Some(first) = self.keyframes.first_mut() {
            first.value = value;
        }
    }

    /// Get the current interpolated value
    pub fn value(&self) -> f32 {
        self.value_at(self.progress())
    }

    /// Interpolated value at a progress point (0.0 to 1.0)
    pub fn value_at(&self, progress: f32) -> f32 {
        if self.keyframes.is_empty() {
            return 0.0;
        }

        let progress = progress.clamp(0.0, 1.0);
        if progress >= 1.0 {
            return self.end_value();
        }
        let progress = self.easing.apply(progress).clamp(0.0, 1.0);

        // Find surrounding keyframes
        let mut prev_kf = &self.keyframes[0];
        let mut next_kf = &self.keyframes[0];

        for kf in &self.keyframes {
            if kf.time <= progress {
                prev_kf = kf;
            }
            if kf.time >= progress {
                next_kf = kf;
                break;
            }
        }

        if (prev_kf.time - next_kf.time).abs() < f32::EPSILON {
            return prev_kf.value;
        }

        // Interpolate between keyframes
        let local_progress = (progress - prev_kf.time) / (next_kf.time - prev_kf.time);
        let eased = next_kf.easing.apply(local_progress);

        prev_kf.value + (next_kf.value - prev_kf.value) * eased
    }

    /// Advance the animation by delta time (in milliseconds)
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.playing {
            return;
        }

        self.seek(self.current_time + dt_ms);
    }

    /// Jump to an absolute time (in milliseconds) since the start
    pub fn seek(&mut self, time_ms: f32) {
        self.current_time = time_ms.max(0.0);

        if self.current_time >= self.duration_ms as f32 {
            self.current_time = self.duration_ms as f32;
            self.playing = false;
        }
    }

    /// Get the keyframes
    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }
}
