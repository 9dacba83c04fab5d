/// Blend between linear progress and a cubic smoothstep.
///
/// `strength` selects the curve:
/// - `0.0` is linear
/// - `1.0` is smoothstep (`t² (3 − 2t)`)
/// - values above `1.0` overdrive the smoothstep and overshoot it
///
/// The result is not clamped; overshoot is intentional.
pub fn smooth_step_overdrive(t: f32, strength: f32) -> f32 {
    let smooth = t * t * (3.0 - 2.0 * t);
    let linear = t;

    linear + strength * (smooth - linear)
}

/// Easing curve applied to tween progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Easing {
    /// Blend strength between linear (0) and smoothstep (1)
    pub strength: f32,
}

impl Easing {
    pub const fn new(strength: f32) -> Self {
        Self { strength }
    }

    pub const fn linear() -> Self {
        Self::new(0.0)
    }

    pub const fn smooth() -> Self {
        Self::new(1.0)
    }

    /// Apply the easing curve to a normalized progress value
    pub fn apply(&self, t: f32) -> f32 {
        smooth_step_overdrive(t, self.strength)
    }
}

impl Default for Easing {
    fn default() -> Self {
        Self::smooth()
    }
}

/// Main interpolation utilities
pub struct Interpolation;

impl Interpolation {
    /// Linear interpolation between two values
    pub fn linear(start: f32, end: f32, t: f32) -> f32 {
        start + (end - start) * t
    }

    /// Interpolation with easing applied to `t`
    pub fn ease(start: f32, end: f32, t: f32, easing: Easing) -> f32 {
        Self::linear(start, end, easing.apply(t))
    }
}
