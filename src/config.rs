use std::path::{Path, PathBuf};

use crate::animation::ease::Ease;
use crate::animation::transition::ANIMATION_RATE;
use crate::foundation::core::Rgb;
use crate::foundation::error::{LaLineaError, LaLineaResult};
use crate::scene::source::DEFAULT_CONTROL_PATH;

/// Largest accepted `grid_half_extent`; keeps the cached grid near a few million quads.
pub const MAX_GRID_HALF_EXTENT: i32 = 1024;

/// Tuning knobs for the viewer. Every field has a default, so a config file only needs the
/// fields it changes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    /// Control file polled every frame.
    pub control_path: PathBuf,
    /// Fraction of a transition completed per second.
    pub animation_rate: f64,
    /// Easing applied to the transition clock.
    pub ease: Ease,
    /// Visible world height; width follows the viewport aspect ratio.
    pub world_height: f64,
    pub clear_color: Rgb,
    /// Grid spans `-half_extent..half_extent` cells on both axes.
    pub grid_half_extent: i32,
    /// Period of the red/green color ramp, in cells.
    pub grid_ramp_period: i32,
    /// Column-major 2x2 applied to the grid only.
    pub grid_shear: [f64; 4],
    pub axis_color: Rgb,
    pub axis_width_px: f64,
    pub axis_extent: f64,
    pub marker_radius: f64,
    pub marker_segments: u32,
    pub point_line_width_px: f64,
    /// Lines and markers in local space.
    pub local_color: Rgb,
    /// Lines and markers after the current transform.
    pub transformed_color: Rgb,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            control_path: PathBuf::from(DEFAULT_CONTROL_PATH),
            animation_rate: ANIMATION_RATE,
            ease: Ease::SmoothStep,
            world_height: 20.0,
            clear_color: Rgb::new(0.125, 0.125, 0.125),
            grid_half_extent: 200,
            grid_ramp_period: 30,
            grid_shear: [0.977568548, -0.210617505, 0.210617505, 0.977568548],
            axis_color: Rgb::new(1.0, 0.0, 0.0),
            axis_width_px: 5.0,
            axis_extent: 200.0,
            marker_radius: 0.4,
            marker_segments: 100,
            point_line_width_px: 2.0,
            local_color: Rgb::new(0.1, 0.1, 0.1),
            transformed_color: Rgb::new(0.15, 0.3, 0.95),
        }
    }
}

impl ViewerConfig {
    /// Load a JSON config file and validate it.
    pub fn from_path(path: impl AsRef<Path>) -> LaLineaResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            LaLineaError::config(format!("failed to read '{}': {e}", path.display()))
        })?;
        Self::from_json(&text)
    }

    /// Parse a JSON config and validate it.
    pub fn from_json(text: &str) -> LaLineaResult<Self> {
        let cfg: Self = serde_json::from_str(text)
            .map_err(|e| LaLineaError::config(format!("invalid config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check value ranges.
    pub fn validate(&self) -> LaLineaResult<()> {
        if !(self.animation_rate.is_finite() && self.animation_rate > 0.0) {
            return Err(LaLineaError::config("animation_rate must be finite and > 0"));
        }
        if !(self.world_height.is_finite() && self.world_height > 0.0) {
            return Err(LaLineaError::config("world_height must be finite and > 0"));
        }
        if !(0..=MAX_GRID_HALF_EXTENT).contains(&self.grid_half_extent) {
            return Err(LaLineaError::config(format!(
                "grid_half_extent must be in 0..={MAX_GRID_HALF_EXTENT}"
            )));
        }
        if self.grid_ramp_period < 2 {
            return Err(LaLineaError::config("grid_ramp_period must be >= 2"));
        }
        if self.marker_segments < 3 {
            return Err(LaLineaError::config("marker_segments must be >= 3"));
        }
        for (name, v) in [
            ("axis_width_px", self.axis_width_px),
            ("point_line_width_px", self.point_line_width_px),
            ("marker_radius", self.marker_radius),
            ("axis_extent", self.axis_extent),
        ] {
            if !(v.is_finite() && v >= 0.0) {
                return Err(LaLineaError::config(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        if self.grid_shear.iter().any(|v| !v.is_finite()) {
            return Err(LaLineaError::config("grid_shear must be finite"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
