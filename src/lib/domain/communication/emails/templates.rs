//! Template source loading

use std::{fs, path::Path};

use rust_embed::RustEmbed;
use tracing::debug;

use super::errors::ComposeError;

/// Read a template file fully into a string
pub fn read_template_file(path: impl AsRef<Path>) -> Result<String, ComposeError> {
    let path = path.as_ref();

    debug!(path = %path.display(), "reading template file");

    fs::read_to_string(path).map_err(|source| ComposeError::TemplateFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a template from the embedded bundle `E`
///
/// # Arguments
/// * `path` - The path of the template inside the bundle.
///
/// # Returns
/// - [`Ok`] with the template source.
/// - [`Err`] with [`ComposeError::EmbeddedTemplateNotFound`] if the bundle has no such file.
pub fn read_embedded_template<E: RustEmbed>(path: &str) -> Result<String, ComposeError> {
    debug!(path, "reading embedded template");

    let file = E::get(path)
        .ok_or_else(|| ComposeError::EmbeddedTemplateNotFound(path.to_string()))?;

    String::from_utf8(file.data.into_owned()).map_err(|source| {
        ComposeError::InvalidTemplateEncoding {
            path: path.to_string(),
            source,
        }
    })
}
