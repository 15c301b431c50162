//! Contract with the windowing platform: a one-time init hook and a per-frame hook.
//!
//! A real platform layer owns the window, the GL context and the frame loop and calls into a
//! [`ClientHooks`] implementation. [`HeadlessPlatform`] plays that role without a window,
//! driving the hooks with caller-chosen frame times and rasterizing through [`CpuSurface`].

use crate::config::ViewerConfig;
use crate::foundation::core::Viewport;
use crate::foundation::error::LaLineaResult;
use crate::render::backend::FrameRGBA;
use crate::render::cpu::CpuSurface;
use crate::render::frame::FrameRenderer;
use crate::render::surface::DrawSurface;
use crate::scene::source::{ControlFile, SceneSource};
use crate::scene::state::{ReloadOutcome, SceneState};

/// Rendering API the platform should create a context for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowBackend {
    OpenGl,
    Software,
}

/// Window and context settings requested by the client during init.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct WindowConfig {
    pub title: String,
    pub backend: WindowBackend,
    /// Suppress OS window open/close animations.
    pub disable_animations: bool,
    pub gl_major: u32,
    pub gl_minor: u32,
    /// Vsync interval in frames; 0 disables vsync.
    pub swap_interval: u32,
    /// Multisample count.
    pub sample_count: u32,
    pub depth_bits: u32,
    pub stencil_bits: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            backend: WindowBackend::Software,
            disable_animations: false,
            gl_major: 0,
            gl_minor: 0,
            swap_interval: 0,
            sample_count: 1,
            depth_bits: 0,
            stencil_bits: 0,
        }
    }
}

/// Per-frame input from the platform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameContext {
    /// Seconds since the previous frame.
    pub elapsed_secs: f64,
    /// Current drawable size.
    pub viewport: Viewport,
}

/// Lifecycle hooks the platform calls.
pub trait ClientHooks {
    /// Called once before the window is created.
    fn init(&mut self, window: &mut WindowConfig);

    /// Called once per frame with a surface sized to `ctx.viewport`.
    fn frame(&mut self, ctx: &FrameContext, surface: &mut dyn DrawSurface) -> LaLineaResult<()>;
}

/// The visualization client: polls the control text, advances the animation, draws the frame.
#[derive(Debug)]
pub struct LaLinea<S: SceneSource> {
    scene: SceneState,
    source: S,
    renderer: FrameRenderer,
    last_outcome: Option<ReloadOutcome>,
}

impl LaLinea<ControlFile> {
    /// Client reading the control file named in `cfg`.
    pub fn from_config(cfg: &ViewerConfig) -> Self {
        Self::new(cfg, ControlFile::new(cfg.control_path.clone()))
    }
}

impl<S: SceneSource> LaLinea<S> {
    pub fn new(cfg: &ViewerConfig, source: S) -> Self {
        Self {
            scene: SceneState::new(cfg.animation_rate, cfg.ease),
            source,
            renderer: FrameRenderer::new(cfg),
            last_outcome: None,
        }
    }

    pub fn scene(&self) -> &SceneState {
        &self.scene
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Result of the most recent control text poll.
    pub fn last_outcome(&self) -> Option<&ReloadOutcome> {
        self.last_outcome.as_ref()
    }
}

impl<S: SceneSource> ClientHooks for LaLinea<S> {
    fn init(&mut self, window: &mut WindowConfig) {
        window.title = "La Linea".to_owned();
        window.backend = WindowBackend::OpenGl;
        window.disable_animations = true;
        window.gl_major = 1;
        window.gl_minor = 1;
        window.swap_interval = 1;
        window.sample_count = 4;
        window.depth_bits = 0;
        window.stencil_bits = 0;
    }

    #[tracing::instrument(level = "trace", skip_all, fields(elapsed = ctx.elapsed_secs))]
    fn frame(&mut self, ctx: &FrameContext, surface: &mut dyn DrawSurface) -> LaLineaResult<()> {
        let outcome = self.scene.poll(&mut self.source);
        self.scene.advance(ctx.elapsed_secs);
        self.renderer.render(&self.scene, surface);
        self.last_outcome = Some(outcome);
        Ok(())
    }
}

/// Windowless platform: runs the init hook once, then renders one frame per [`step`](Self::step).
#[derive(Debug)]
pub struct HeadlessPlatform<C: ClientHooks> {
    client: C,
    window: WindowConfig,
    surface: CpuSurface,
    frames: u64,
}

impl<C: ClientHooks> HeadlessPlatform<C> {
    pub fn new(mut client: C, viewport: Viewport) -> LaLineaResult<Self> {
        let mut window = WindowConfig::default();
        client.init(&mut window);
        tracing::debug!(title = %window.title, ?viewport, "headless platform initialized");
        Ok(Self {
            client,
            window,
            surface: CpuSurface::new(viewport)?,
            frames: 0,
        })
    }

    /// Settings the client requested during init.
    pub fn window(&self) -> &WindowConfig {
        &self.window
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn client_mut(&mut self) -> &mut C {
        &mut self.client
    }

    /// Frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Change the drawable size for subsequent frames.
    pub fn resize(&mut self, viewport: Viewport) -> LaLineaResult<()> {
        self.surface.resize(viewport)
    }

    /// Render one frame `elapsed_secs` after the previous one.
    pub fn step(&mut self, elapsed_secs: f64) -> LaLineaResult<FrameRGBA> {
        let ctx = FrameContext {
            elapsed_secs,
            viewport: self.surface.viewport(),
        };
        self.surface.begin_frame();
        self.client.frame(&ctx, &mut self.surface)?;
        self.frames += 1;
        Ok(self.surface.finish())
    }
}

#[cfg(test)]
#[path = "../tests/unit/platform.rs"]
mod tests;
