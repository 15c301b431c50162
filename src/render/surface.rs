use crate::foundation::core::{Affine, Point, Rect, Rgb, Viewport};
use crate::render::projection::Projection;

/// Axis-aligned rectangle with a flat color, in model space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColoredQuad {
    pub rect: Rect,
    pub color: Rgb,
}

/// Immediate-mode drawing surface provided by the platform for one frame.
///
/// Geometry is given in model space; the surface maps it through the current model transform
/// and then the projection. Line widths are in pixels.
pub trait DrawSurface {
    /// Current drawable size.
    fn viewport(&self) -> Viewport;
    /// Fill the whole viewport.
    fn clear(&mut self, color: Rgb);
    fn set_projection(&mut self, projection: Projection);
    fn set_model_transform(&mut self, transform: Affine);
    fn fill_quads(&mut self, quads: &[ColoredQuad]);
    /// Fill a closed convex polygon.
    fn fill_polygon(&mut self, vertices: &[Point], color: Rgb);
    fn draw_line(&mut self, from: Point, to: Point, width_px: f64, color: Rgb);
}

/// One call recorded by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Rgb),
    Projection(Projection),
    ModelTransform(Affine),
    Quads { count: usize },
    Polygon { vertices: Vec<Point>, color: Rgb },
    Line {
        from: Point,
        to: Point,
        width_px: f64,
        color: Rgb,
    },
}

/// Surface that records calls instead of drawing; used to inspect draw order.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    viewport: Viewport,
    /// Calls in submission order.
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            commands: Vec::new(),
        }
    }
}

impl DrawSurface for RecordingSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn clear(&mut self, color: Rgb) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn set_projection(&mut self, projection: Projection) {
        self.commands.push(DrawCommand::Projection(projection));
    }

    fn set_model_transform(&mut self, transform: Affine) {
        self.commands.push(DrawCommand::ModelTransform(transform));
    }

    fn fill_quads(&mut self, quads: &[ColoredQuad]) {
        self.commands.push(DrawCommand::Quads { count: quads.len() });
    }

    fn fill_polygon(&mut self, vertices: &[Point], color: Rgb) {
        self.commands.push(DrawCommand::Polygon {
            vertices: vertices.to_vec(),
            color,
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, width_px: f64, color: Rgb) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width_px,
            color,
        });
    }
}
