use crate::config::ViewerConfig;
use crate::foundation::core::{Affine, Point, Rect, Rgb, Vec2};
use crate::render::projection::Projection;
use crate::render::surface::{ColoredQuad, DrawSurface};
use crate::scene::state::SceneState;

/// Triangular ramp over one period: rises from 0 to 1 across the first half, falls back across
/// the second.
pub fn ramp(index: i32, period: i32) -> f32 {
    let half = period / 2;
    let i = index.rem_euclid(period);
    if i < half {
        i as f32 / half as f32
    } else {
        1.0 - (i - half) as f32 / half as f32
    }
}

/// Checkerboard cells covering `-half_extent..half_extent` on both axes.
///
/// Only cells with an even `xi + yi` are emitted. Color is `(ramp(x), 1, ramp(y))` with the
/// ramp index measured from the grid's lower-left corner.
pub fn checkerboard(half_extent: i32, period: i32) -> Vec<ColoredQuad> {
    let mut out = Vec::with_capacity((half_extent.max(0) as usize).pow(2) * 2);
    for xi in -half_extent..half_extent {
        for yi in -half_extent..half_extent {
            if (xi + yi).rem_euclid(2) != 0 {
                continue;
            }
            let r = ramp(xi + half_extent, period);
            let g = ramp(yi + half_extent, period);
            out.push(ColoredQuad {
                rect: Rect::new(
                    f64::from(xi),
                    f64::from(yi),
                    f64::from(xi + 1),
                    f64::from(yi + 1),
                ),
                color: Rgb::new(r, 1.0, g),
            });
        }
    }
    out
}

/// Vertices of a regular `segments`-gon of `radius` around the origin.
pub fn circle_offsets(radius: f64, segments: u32) -> Vec<Vec2> {
    (0..segments)
        .map(|i| {
            let a = std::f64::consts::TAU * f64::from(i) / f64::from(segments);
            Vec2::new(a.cos() * radius, a.sin() * radius)
        })
        .collect()
}

/// Draws one frame of the scene. Grid cells and the marker outline are built once and reused.
#[derive(Debug, Clone)]
pub struct FrameRenderer {
    cfg: ViewerConfig,
    grid: Vec<ColoredQuad>,
    marker: Vec<Vec2>,
    scratch: Vec<Point>,
}

impl FrameRenderer {
    pub fn new(cfg: &ViewerConfig) -> Self {
        Self {
            grid: checkerboard(cfg.grid_half_extent, cfg.grid_ramp_period),
            marker: circle_offsets(cfg.marker_radius, cfg.marker_segments),
            scratch: Vec::with_capacity(cfg.marker_segments as usize),
            cfg: cfg.clone(),
        }
    }

    /// Grid cells in draw order.
    pub fn grid(&self) -> &[ColoredQuad] {
        &self.grid
    }

    /// Model transform applied to the grid.
    pub fn grid_transform(&self) -> Affine {
        let [a, b, c, d] = self.cfg.grid_shear;
        Affine::new([a, b, c, d, 0.0, 0.0])
    }

    /// Grid, axes, local points, transformed points, in that stacking order.
    pub fn render(&mut self, scene: &SceneState, surface: &mut dyn DrawSurface) {
        let viewport = surface.viewport();
        surface.clear(self.cfg.clear_color);
        surface.set_projection(Projection::ortho(viewport, self.cfg.world_height));

        surface.set_model_transform(self.grid_transform());
        surface.fill_quads(&self.grid);

        surface.set_model_transform(Affine::IDENTITY);
        let e = self.cfg.axis_extent;
        surface.draw_line(
            Point::new(-e, 0.0),
            Point::new(e, 0.0),
            self.cfg.axis_width_px,
            self.cfg.axis_color,
        );
        surface.draw_line(
            Point::new(0.0, -e),
            Point::new(0.0, e),
            self.cfg.axis_width_px,
            self.cfg.axis_color,
        );

        for &p in scene.points() {
            self.draw_marker(surface, p, self.cfg.local_color);
        }

        let current = scene.current_transform();
        for &p in scene.points() {
            self.draw_marker(surface, current.apply_linear(p), self.cfg.transformed_color);
        }
    }

    fn draw_marker(&mut self, surface: &mut dyn DrawSurface, at: Point, color: Rgb) {
        surface.draw_line(Point::ORIGIN, at, self.cfg.point_line_width_px, color);
        self.scratch.clear();
        self.scratch.extend(self.marker.iter().map(|&off| at + off));
        surface.fill_polygon(&self.scratch, color);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
