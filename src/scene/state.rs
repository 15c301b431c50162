use crate::animation::ease::Ease;
use crate::animation::transition::TransformAnimation;
use crate::foundation::core::{Mat4, Point};
use crate::scene::parser::{SceneParseError, parse};
use crate::scene::source::SceneSource;

/// What a poll of the control text did to the scene.
#[derive(Debug, Clone, PartialEq)]
pub enum ReloadOutcome {
    /// The source could not be read; nothing changed.
    Unavailable,
    /// Same bytes as the last successful read; nothing changed.
    Unchanged,
    /// New text parsed cleanly.
    Reloaded {
        /// A `transform` command started a new transition.
        retargeted: bool,
        /// Size of the new point set.
        points: usize,
    },
    /// New text contained a malformed command; the prefix before it was applied.
    ReloadedPartial {
        /// A `transform` before the error started a new transition.
        retargeted: bool,
        /// Size of the point set after applying the prefix.
        points: usize,
        /// The malformed command.
        error: SceneParseError,
    },
}

impl ReloadOutcome {
    /// Return `true` when new text was accepted.
    pub fn is_reload(&self) -> bool {
        matches!(self, Self::Reloaded { .. } | Self::ReloadedPartial { .. })
    }
}

/// Everything a frame needs to know about the scene.
#[derive(Debug, Clone, Default)]
pub struct SceneState {
    raw: Option<Vec<u8>>,
    animation: TransformAnimation,
    points: Vec<Point>,
    revision: u64,
}

impl SceneState {
    /// Empty scene settled at identity, animating with `rate` and `ease`.
    pub fn new(rate: f64, ease: Ease) -> Self {
        Self {
            raw: None,
            animation: TransformAnimation::new(rate, ease),
            points: Vec::new(),
            revision: 0,
        }
    }

    pub fn animation(&self) -> &TransformAnimation {
        &self.animation
    }

    /// Points in local space, in file order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of accepted control text revisions.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Last accepted control text.
    pub fn raw_text(&self) -> Option<&[u8]> {
        self.raw.as_deref()
    }

    /// Transform for this frame.
    pub fn current_transform(&self) -> Mat4 {
        self.animation.current_transform()
    }

    /// Move the animation clock forward.
    pub fn advance(&mut self, elapsed_secs: f64) {
        self.animation.advance(elapsed_secs);
    }

    /// Read from `source` and apply the text if it changed.
    pub fn poll(&mut self, source: &mut dyn SceneSource) -> ReloadOutcome {
        match source.read() {
            Ok(bytes) => self.apply_control_text(bytes),
            Err(err) => {
                tracing::debug!(source = %source.describe(), error = %err, "control text unavailable");
                ReloadOutcome::Unavailable
            }
        }
    }

    /// Apply one revision of control text.
    ///
    /// Identical bytes are a no-op. A parsed transform that differs from the current target
    /// retargets the animation; an equal one leaves the running transition alone. The point set
    /// is replaced unless the text held no recognized command at all. After a malformed command
    /// the point set is only replaced when the prefix before the error produced at least one
    /// point.
    pub fn apply_control_text(&mut self, bytes: Vec<u8>) -> ReloadOutcome {
        if self.raw.as_deref() == Some(bytes.as_slice()) {
            return ReloadOutcome::Unchanged;
        }

        let scene = parse(&String::from_utf8_lossy(&bytes));
        self.raw = Some(bytes);
        self.revision += 1;

        let retargeted = match scene.transform {
            Some(target) if target != *self.animation.target() => {
                self.animation.retarget(target);
                true
            }
            _ => false,
        };

        match scene.error {
            None => {
                if scene.transform.is_some() || !scene.points.is_empty() {
                    self.points = scene.points;
                }
                tracing::info!(
                    revision = self.revision,
                    retargeted,
                    points = self.points.len(),
                    "control text reloaded"
                );
                ReloadOutcome::Reloaded {
                    retargeted,
                    points: self.points.len(),
                }
            }
            Some(error) => {
                if !scene.points.is_empty() {
                    self.points = scene.points;
                }
                tracing::warn!(
                    revision = self.revision,
                    retargeted,
                    points = self.points.len(),
                    %error,
                    "control text partially applied"
                );
                ReloadOutcome::ReloadedPartial {
                    retargeted,
                    points: self.points.len(),
                    error,
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/state.rs"]
mod tests;
