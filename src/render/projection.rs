use crate::foundation::core::{Affine, Rect, Viewport};

/// Orthographic world window mapped onto a viewport, y up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    /// Visible world rectangle.
    pub world: Rect,
    /// Target viewport in pixels.
    pub viewport: Viewport,
}

impl Projection {
    /// Window of fixed `world_height`, centered on the origin, widened to the viewport aspect.
    pub fn ortho(viewport: Viewport, world_height: f64) -> Self {
        let h = world_height;
        let w = viewport.aspect() * h;
        Self {
            world: Rect::new(-w * 0.5, -h * 0.5, w * 0.5, h * 0.5),
            viewport,
        }
    }

    /// Vertical scale from world units to pixels.
    pub fn pixels_per_unit(&self) -> f64 {
        f64::from(self.viewport.height.max(1)) / self.world.height()
    }

    /// Affine from world coordinates to pixel coordinates (origin top-left).
    pub fn world_to_pixel(&self) -> Affine {
        let sx = f64::from(self.viewport.width) / self.world.width();
        let sy = f64::from(self.viewport.height.max(1)) / self.world.height();
        Affine::new([sx, 0.0, 0.0, -sy, -self.world.x0 * sx, self.world.y1 * sy])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/projection.rs"]
mod tests;
