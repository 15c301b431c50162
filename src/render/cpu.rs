use crate::foundation::core::{Affine, Point, Rect, Rgb, Vec2, Viewport};
use crate::foundation::error::{LaLineaError, LaLineaResult};
use crate::render::backend::FrameRGBA;
use crate::render::projection::Projection;
use crate::render::surface::{ColoredQuad, DrawSurface};

/// Headless [`DrawSurface`] rasterizing with `vello_cpu`.
///
/// The render context and target pixmap are kept across frames and only reallocated when the
/// viewport size changes.
pub struct CpuSurface {
    viewport: Viewport,
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
    projection: Projection,
    model: Affine,
}

impl std::fmt::Debug for CpuSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuSurface")
            .field("viewport", &self.viewport)
            .field("projection", &self.projection)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

fn checked_dims(viewport: Viewport) -> LaLineaResult<(u16, u16)> {
    let w = u16::try_from(viewport.width).ok().filter(|&w| w > 0);
    let h = u16::try_from(viewport.height).ok().filter(|&h| h > 0);
    match (w, h) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => Err(LaLineaError::render(format!(
            "viewport {}x{} must be within 1..={} on both axes",
            viewport.width,
            viewport.height,
            u16::MAX
        ))),
    }
}

impl CpuSurface {
    pub fn new(viewport: Viewport) -> LaLineaResult<Self> {
        let (w, h) = checked_dims(viewport)?;
        Ok(Self {
            viewport,
            ctx: vello_cpu::RenderContext::new(w, h),
            pixmap: vello_cpu::Pixmap::new(w, h),
            projection: Projection::ortho(viewport, f64::from(viewport.height)),
            model: Affine::IDENTITY,
        })
    }

    /// Change the target size, keeping buffers when it is unchanged.
    pub fn resize(&mut self, viewport: Viewport) -> LaLineaResult<()> {
        let (w, h) = checked_dims(viewport)?;
        if self.ctx.width() == w && self.ctx.height() == h {
            self.viewport = viewport;
            return Ok(());
        }
        tracing::debug!(width = w, height = h, "reallocating cpu surface");
        self.ctx = vello_cpu::RenderContext::new(w, h);
        self.pixmap = vello_cpu::Pixmap::new(w, h);
        self.viewport = viewport;
        Ok(())
    }

    /// Reset draw state for a new frame.
    pub fn begin_frame(&mut self) {
        self.ctx.reset();
        self.ctx.set_blend_mode(vello_cpu::peniko::BlendMode::default());
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.projection = Projection::ortho(self.viewport, f64::from(self.viewport.height));
        self.model = Affine::IDENTITY;
    }

    /// Rasterize everything submitted since [`begin_frame`](Self::begin_frame) and read it back.
    pub fn finish(&mut self) -> FrameRGBA {
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut self.pixmap);
        FrameRGBA {
            width: self.viewport.width,
            height: self.viewport.height,
            data: self.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }

    fn full_transform(&self) -> Affine {
        self.projection.world_to_pixel() * self.model
    }

    fn pixel_bounds(&self) -> Rect {
        Rect::new(
            0.0,
            0.0,
            f64::from(self.viewport.width),
            f64::from(self.viewport.height),
        )
    }
}

impl DrawSurface for CpuSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn clear(&mut self, color: Rgb) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(color_to_cpu(color));
        self.ctx.fill_rect(&rect_to_cpu(self.pixel_bounds()));
    }

    fn set_projection(&mut self, projection: Projection) {
        self.projection = projection;
    }

    fn set_model_transform(&mut self, transform: Affine) {
        self.model = transform;
    }

    fn fill_quads(&mut self, quads: &[ColoredQuad]) {
        let full = self.full_transform();
        let bounds = self.pixel_bounds();
        self.ctx.set_transform(affine_to_cpu(full));

        let mut drawn = 0usize;
        for q in quads {
            let bb = full.transform_rect_bbox(q.rect);
            if bb.x1 < bounds.x0 || bb.y1 < bounds.y0 || bb.x0 > bounds.x1 || bb.y0 > bounds.y1 {
                continue;
            }
            self.ctx.set_paint(color_to_cpu(q.color));
            self.ctx.fill_rect(&rect_to_cpu(q.rect));
            drawn += 1;
        }
        tracing::trace!(submitted = quads.len(), drawn, "filled quads");
    }

    fn fill_polygon(&mut self, vertices: &[Point], color: Rgb) {
        let Some((first, rest)) = vertices.split_first() else {
            return;
        };
        let mut path = vello_cpu::kurbo::BezPath::new();
        path.move_to(point_to_cpu(*first));
        for &p in rest {
            path.line_to(point_to_cpu(p));
        }
        path.close_path();

        self.ctx.set_transform(affine_to_cpu(self.full_transform()));
        self.ctx.set_paint(color_to_cpu(color));
        self.ctx.fill_path(&path);
    }

    fn draw_line(&mut self, from: Point, to: Point, width_px: f64, color: Rgb) {
        // Extruded in pixel space so the width does not scale with the projection.
        let full = self.full_transform();
        let a = full * from;
        let b = full * to;
        let d = b - a;
        let len = d.hypot();
        if len <= f64::EPSILON || width_px <= 0.0 {
            return;
        }
        let n = Vec2::new(-d.y, d.x) * (width_px * 0.5 / len);

        let mut path = vello_cpu::kurbo::BezPath::new();
        path.move_to(point_to_cpu(a + n));
        path.line_to(point_to_cpu(b + n));
        path.line_to(point_to_cpu(b - n));
        path.line_to(point_to_cpu(a - n));
        path.close_path();

        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(color_to_cpu(color));
        self.ctx.fill_path(&path);
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn color_to_cpu(c: Rgb) -> vello_cpu::peniko::Color {
    let [r, g, b, a] = c.to_rgba8();
    vello_cpu::peniko::Color::from_rgba8(r, g, b, a)
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
