//! Email attachments

use std::path::{Path, PathBuf};

use super::errors::ComposeError;

/// Where the content of an attachment comes from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttachmentSource {
    /// A file on disk, read by the delivery backend
    File(PathBuf),

    /// Content already held in memory
    Bytes(Vec<u8>),
}

/// A file attached to an email.
///
/// Attachments are passed through to the delivery backend untouched. The MIME
/// type is whatever the caller supplies; nothing here guesses it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attachment {
    source: AttachmentSource,
    name: String,
    mime: Option<String>,
}

impl Attachment {
    /// Create an attachment from a file on disk
    ///
    /// # Arguments
    /// * `path` - The file to attach.
    /// * `name` - The attachment name. Defaults to the file name of `path`.
    pub fn from_file(path: impl AsRef<Path>, name: Option<&str>) -> Result<Self, ComposeError> {
        let path = path.as_ref();

        let name = match name {
            Some(name) => name.to_string(),
            None => path
                .file_name()
                .map(|file_name| file_name.to_string_lossy().into_owned())
                .ok_or(ComposeError::MissingArgument("attachment name"))?,
        };

        Ok(Self {
            source: AttachmentSource::File(path.to_path_buf()),
            name,
            mime: None,
        })
    }

    /// Create an attachment from in-memory content
    pub fn from_bytes(bytes: impl Into<Vec<u8>>, name: &str, mime: Option<&str>) -> Self {
        Self {
            source: AttachmentSource::Bytes(bytes.into()),
            name: name.to_string(),
            mime: mime.map(str::to_string),
        }
    }

    /// Set the MIME type
    pub fn with_mime(mut self, mime: &str) -> Self {
        self.mime = Some(mime.to_string());
        self
    }

    /// Where the content comes from
    pub fn source(&self) -> &AttachmentSource {
        &self.source
    }

    /// The attachment name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The MIME type, if known
    pub fn mime(&self) -> Option<&str> {
        self.mime.as_deref()
    }
}
