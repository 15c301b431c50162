//! Frame rendering: the draw surface seam, the scene renderer and the CPU raster surface.

/// Rendered frame buffers.
pub mod backend;
/// `vello_cpu` draw surface.
pub mod cpu;
/// Scene draw orchestration.
pub mod frame;
/// World-to-pixel mapping.
pub mod projection;
/// Immediate-mode surface trait.
pub mod surface;
