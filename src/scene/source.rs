use std::path::{Path, PathBuf};

/// Default control file name, resolved against the working directory.
pub const DEFAULT_CONTROL_PATH: &str = "control.txt";

/// Where the raw control text comes from.
///
/// Called once per frame; an `Err` leaves the scene untouched and is retried on the next frame.
pub trait SceneSource {
    /// Read the full current control text.
    fn read(&mut self) -> std::io::Result<Vec<u8>>;

    /// Human-readable origin for logs.
    fn describe(&self) -> String;
}

/// Control file on disk, re-read in full on every poll.
#[derive(Debug, Clone)]
pub struct ControlFile {
    path: PathBuf,
}

impl ControlFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ControlFile {
    fn default() -> Self {
        Self::new(DEFAULT_CONTROL_PATH)
    }
}

impl SceneSource for ControlFile {
    fn read(&mut self) -> std::io::Result<Vec<u8>> {
        std::fs::read(&self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory control text; `None` behaves like a missing file.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    text: Option<Vec<u8>>,
}

impl StaticSource {
    pub fn new(text: impl Into<Vec<u8>>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    /// A source whose reads always fail.
    pub fn unavailable() -> Self {
        Self { text: None }
    }

    /// Replace the served text.
    pub fn set(&mut self, text: impl Into<Vec<u8>>) {
        self.text = Some(text.into());
    }

    /// Make subsequent reads fail.
    pub fn clear(&mut self) {
        self.text = None;
    }
}

impl SceneSource for StaticSource {
    fn read(&mut self) -> std::io::Result<Vec<u8>> {
        self.text.clone().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "no control text set")
        })
    }

    fn describe(&self) -> String {
        "<memory>".to_owned()
    }
}
