//! Easing functions for animations

use std::f32::consts::PI;

/// Easing function type
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    /// Slow start and end, fastest in the middle (cosine curve)
    AccelerateDecelerate,
    /// Lands on the end early, then rebounds below it in shrinking hops like a
    /// dropped ball
    Bounce,
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::AccelerateDecelerate => ((t + 1.0) * PI).cos() / 2.0 + 0.5,
            Easing::Bounce => bounce_ease(t),
        }
    }
}

/// Piecewise parabolic bounce: three rebounds of decreasing height before
/// settling at 1.0.
fn bounce_ease(t: f32) -> f32 {
    fn parabola(t: f32) -> f32 {
        t * t * 8.0
    }

    let t = t * 1.1226;
    if t < 0.3535 {
        parabola(t)
    } else if t < 0.7408 {
        parabola(t - 0.54719) + 0.7
    } else if t < 0.9644 {
        parabola(t - 0.8526) + 0.9
    } else {
        parabola(t - 1.0435) + 0.95
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn test_endpoints() {
        for easing in [Easing::Linear, Easing::AccelerateDecelerate, Easing::Bounce] {
            assert!(approx(easing.apply(0.0), 0.0), "{easing:?} at 0");
            assert!(approx(easing.apply(1.0), 1.0), "{easing:?} at 1");
        }
    }

    #[test]
    fn test_accelerate_decelerate_is_symmetric() {
        let easing = Easing::AccelerateDecelerate;
        assert!(approx(easing.apply(0.5), 0.5));
        assert!(approx(easing.apply(0.25), 0.146));
        assert!(approx(easing.apply(0.75), 0.854));
    }

    #[test]
    fn test_bounce_rebounds_without_overshoot() {
        let easing = Easing::Bounce;
        // First impact reaches 1.0 before the end, then the value dips again
        let first_impact = easing.apply(0.3535 / 1.1226);
        assert!(approx(first_impact, 1.0));
        assert!(easing.apply(0.48) < first_impact);
        for i in 0..=100 {
            let v = easing.apply(i as f32 / 100.0);
            assert!((0.0..=1.001).contains(&v), "bounce out of range: {v}");
        }
    }
}
