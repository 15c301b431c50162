//! Easing and the source-to-target transform transition.

/// Easing curves.
pub mod ease;
/// Clock-driven transform interpolation.
pub mod transition;
