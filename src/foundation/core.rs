use crate::foundation::error::{LaLineaError, LaLineaResult};

pub use kurbo::{Affine, Point, Rect, Vec2};

/// 4x4 transform stored column-major (cell `col * 4 + row`), the layout fixed-function GL loads.
///
/// Control-file matrices are 3x3 row-major acting on column vectors `(x, y, 1)`; see
/// [`Mat4::from_rows3`] for how they are packed.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Mat4 {
    /// Column-major cells.
    pub cells: [f64; 16],
}

impl Mat4 {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        cells: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    /// Pack a row-major 3x3 matrix `[a b tx; c d ty; p q w]`.
    ///
    /// The 2x2 linear block lands in the upper-left, `(tx, ty)` in the translation column,
    /// `(p, q, w)` in the bottom row and z passes through unchanged.
    pub fn from_rows3(m: [f64; 9]) -> Self {
        let mut cells = [0.0; 16];
        cells[0] = m[0];
        cells[4] = m[1];
        cells[12] = m[2];
        cells[1] = m[3];
        cells[5] = m[4];
        cells[13] = m[5];
        cells[3] = m[6];
        cells[7] = m[7];
        cells[15] = m[8];
        cells[10] = 1.0;
        Self { cells }
    }

    /// Inverse of [`Mat4::from_rows3`].
    pub fn to_rows3(&self) -> [f64; 9] {
        let c = &self.cells;
        [c[0], c[4], c[12], c[1], c[5], c[13], c[3], c[7], c[15]]
    }

    /// Cell at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.cells[col * 4 + row]
    }

    /// Cell-wise `blend * to + (1 - blend) * from`.
    pub fn lerp(from: &Self, to: &Self, blend: f64) -> Self {
        let mut cells = [0.0; 16];
        for (i, out) in cells.iter_mut().enumerate() {
            *out = blend * to.cells[i] + (1.0 - blend) * from.cells[i];
        }
        Self { cells }
    }

    /// The 2x2 linear block only; translation and the projective row are dropped.
    pub fn linear_affine(&self) -> Affine {
        let c = &self.cells;
        Affine::new([c[0], c[1], c[4], c[5], 0.0, 0.0])
    }

    /// Linear block plus translation, ignoring the projective row.
    pub fn to_affine(&self) -> Affine {
        let c = &self.cells;
        Affine::new([c[0], c[1], c[4], c[5], c[12], c[13]])
    }

    /// Apply only the linear block to `p`.
    pub fn apply_linear(&self, p: Point) -> Point {
        self.linear_affine() * p
    }

    /// Return `true` when all cells are finite.
    pub fn is_finite(&self) -> bool {
        self.cells.iter().all(|v| v.is_finite())
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Straight RGB color with channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
}

impl Rgb {
    /// Build a color from float channels.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Quantize to opaque RGBA8.
    pub fn to_rgba8(self) -> [u8; 4] {
        fn q(v: f32) -> u8 {
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        [q(self.r), q(self.g), q(self.b), 255]
    }
}

/// Drawable area in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Create a validated, non-empty viewport.
    pub fn new(width: u32, height: u32) -> LaLineaResult<Self> {
        if width == 0 || height == 0 {
            return Err(LaLineaError::validation("Viewport must be at least 1x1"));
        }
        Ok(Self { width, height })
    }

    /// Width divided by height; an empty height counts as 1.
    pub fn aspect(self) -> f64 {
        f64::from(self.width) / f64::from(self.height.max(1))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
