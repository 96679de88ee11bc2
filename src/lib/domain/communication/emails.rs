//! Email composition module.

mod attachment;
mod email;
mod priority;
mod templates;

pub mod errors;

pub use attachment::{Attachment, AttachmentSource};
pub use email::{Email, Template};
pub use priority::Priority;
pub use templates::{read_embedded_template, read_template_file};
