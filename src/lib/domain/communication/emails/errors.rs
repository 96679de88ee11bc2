//! Error types for composing and rendering emails

use std::{path::PathBuf, string::FromUtf8Error};

use thiserror::Error;
use tracing::debug;

use crate::domain::communication::{addresses::AddressError, rendering::RenderError};

/// Errors that can occur while composing an email
#[derive(Debug, Error)]
pub enum ComposeError {
    /// An address was invalid
    #[error(transparent)]
    InvalidAddress(#[from] AddressError),

    /// A required argument was missing
    #[error("{0} is required")]
    MissingArgument(&'static str),

    /// A header with that name was already added
    #[error("header \"{0}\" has already been added")]
    DuplicateHeader(String),

    /// The template model could not be serialized
    #[error("template model could not be serialized")]
    InvalidModel(#[source] serde_json::Error),

    /// The template file could not be read
    #[error("could not read template file {path:?}")]
    TemplateFile {
        /// Path to the template file
        path: PathBuf,

        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The embedded template could not be found
    #[error("embedded template \"{0}\" not found")]
    EmbeddedTemplateNotFound(String),

    /// The embedded template is not valid UTF-8
    #[error("embedded template \"{path}\" is not valid UTF-8")]
    InvalidTemplateEncoding {
        /// Path of the template inside its bundle
        path: String,

        /// The underlying decoding error
        #[source]
        source: FromUtf8Error,
    },
}

impl From<serde_json::Error> for ComposeError {
    fn from(err: serde_json::Error) -> Self {
        debug!("serde_json::Error -> ComposeError");

        ComposeError::InvalidModel(err)
    }
}

/// Errors that can occur while rendering an email body
#[derive(Debug, Error)]
pub enum RenderBodyError {
    /// Neither a body nor a template was set
    #[error("body or template must be set")]
    MissingBody,

    /// The renderer failed
    #[error(transparent)]
    Render(#[from] RenderError),
}
