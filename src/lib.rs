//! La Linea renders an animated checkerboard grid under a coordinate frame whose transform is
//! read from a hot-reloaded control file.
//!
//! Each frame the client:
//!
//! - re-reads the control text and, when it changed, parses a new target transform and point set
//! - advances the eased transition from the previous target to the new one
//! - draws the grid, the axes and every point both as written and under the current transform
//!
//! The windowing platform is external; it drives [`ClientHooks`]. [`HeadlessPlatform`] is a
//! windowless stand-in that rasterizes frames with `vello_cpu`.
#![forbid(unsafe_code)]

mod foundation;

/// Transform easing and transitions.
pub mod animation;
/// Viewer configuration.
pub mod config;
/// Platform hooks and the headless driver.
pub mod platform;
/// Draw surfaces and the frame renderer.
pub mod render;
/// Control text parsing and scene state.
pub mod scene;

pub use crate::foundation::core::{Affine, Mat4, Point, Rect, Rgb, Vec2, Viewport};
pub use crate::foundation::error::{LaLineaError, LaLineaResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::transition::{ANIMATION_RATE, AnimationPhase, TransformAnimation};
pub use crate::config::ViewerConfig;
pub use crate::platform::{
    ClientHooks, FrameContext, HeadlessPlatform, LaLinea, WindowBackend, WindowConfig,
};
pub use crate::render::backend::FrameRGBA;
pub use crate::render::cpu::CpuSurface;
pub use crate::render::frame::FrameRenderer;
pub use crate::render::projection::Projection;
pub use crate::render::surface::{ColoredQuad, DrawCommand, DrawSurface, RecordingSurface};
pub use crate::scene::parser::{Command, OperandError, ParsedScene, SceneParseError, parse};
pub use crate::scene::source::{ControlFile, DEFAULT_CONTROL_PATH, SceneSource, StaticSource};
pub use crate::scene::state::{ReloadOutcome, SceneState};
