use crate::scene::parser::SceneParseError;

/// Convenience result alias used across the crate.
pub type LaLineaResult<T> = Result<T, LaLineaError>;

/// Top-level error type.
#[derive(thiserror::Error, Debug)]
pub enum LaLineaError {
    /// Filesystem failure outside the fail-soft control file poll.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The control file contained a malformed command.
    #[error("parse error: {0}")]
    Parse(#[from] SceneParseError),

    /// Surface or rasterization failure.
    #[error("render error: {0}")]
    Render(String),

    /// Invalid or unreadable configuration.
    #[error("config error: {0}")]
    Config(String),

    /// A value failed a precondition check.
    #[error("validation error: {0}")]
    Validation(String),

    /// Escape hatch for third-party errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LaLineaError {
    /// Build a [`LaLineaError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`LaLineaError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`LaLineaError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
