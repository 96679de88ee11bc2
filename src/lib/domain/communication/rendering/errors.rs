//! Renderer errors

use thiserror::Error;

/// Errors raised by a [`Renderer`](super::Renderer) implementation
#[derive(Debug, Error)]
pub enum RenderError {
    /// The template could not be parsed
    #[error("template syntax error: {0}")]
    Syntax(String),

    /// The template could not be evaluated against the model
    #[error("template evaluation error: {0}")]
    Evaluation(String),

    /// Rendering was cancelled
    #[error("rendering was cancelled")]
    Cancelled,

    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}
