use crate::animation::ease::Ease;
use crate::foundation::core::Mat4;

/// Fraction of a transition completed per second.
pub const ANIMATION_RATE: f64 = 0.3;

/// Whether a [`TransformAnimation`] is still moving.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationPhase {
    /// Clock below 1.
    Animating,
    /// Clock saturated at 1; the current transform equals the target.
    Settled,
}

/// Eased blend from a `source` transform to a `target` transform.
///
/// The clock runs from 0 to 1 at `rate` per second and restarts at 0 on every
/// [`retarget`](Self::retarget), with the previous target becoming the new source. A transition
/// therefore always takes `1 / rate` seconds and never jumps, however far the previous one got.
#[derive(Clone, Debug, PartialEq)]
pub struct TransformAnimation {
    source: Mat4,
    target: Mat4,
    clock: f64,
    rate: f64,
    ease: Ease,
}

impl Default for TransformAnimation {
    fn default() -> Self {
        Self::new(ANIMATION_RATE, Ease::SmoothStep)
    }
}

impl TransformAnimation {
    /// Settled at identity.
    pub fn new(rate: f64, ease: Ease) -> Self {
        Self {
            source: Mat4::IDENTITY,
            target: Mat4::IDENTITY,
            clock: 1.0,
            rate,
            ease,
        }
    }

    /// Transform at the start of the current transition.
    pub fn source(&self) -> &Mat4 {
        &self.source
    }

    /// Transform being animated toward.
    pub fn target(&self) -> &Mat4 {
        &self.target
    }

    /// Normalized progress in `[0, 1]`.
    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn phase(&self) -> AnimationPhase {
        if self.clock >= 1.0 {
            AnimationPhase::Settled
        } else {
            AnimationPhase::Animating
        }
    }

    /// Move the clock forward. Negative or non-finite durations count as zero.
    pub fn advance(&mut self, elapsed_secs: f64) {
        let dt = if elapsed_secs.is_finite() {
            elapsed_secs.max(0.0)
        } else {
            0.0
        };
        self.clock = (self.clock + dt * self.rate).min(1.0);
    }

    /// Start a new transition from the current target to `target`.
    pub fn retarget(&mut self, target: Mat4) {
        self.source = self.target;
        self.target = target;
        self.clock = 0.0;
    }

    /// Eased blend factor for the current clock.
    pub fn blend(&self) -> f64 {
        self.ease.apply(self.clock)
    }

    /// Cell-wise eased interpolation of source toward target.
    pub fn current_transform(&self) -> Mat4 {
        Mat4::lerp(&self.source, &self.target, self.blend())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/transition.rs"]
mod tests;
