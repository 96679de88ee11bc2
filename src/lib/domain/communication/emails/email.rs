//! Email message

use std::{
    collections::{hash_map::Entry, HashMap},
    path::Path,
};

use rust_embed::RustEmbed;
use serde::Serialize;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::trace;

use crate::domain::communication::{addresses::Address, rendering::Renderer};

use super::{
    errors::{ComposeError, RenderBodyError},
    read_embedded_template, read_template_file, Attachment, Priority,
};

/// A template source together with the model it is rendered against
#[derive(Clone, Debug, PartialEq)]
pub struct Template {
    source: String,
    model: Value,
}

impl Template {
    /// The unrendered template source
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The model bound to the template
    pub fn model(&self) -> &Value {
        &self.model
    }
}

/// An email message.
///
/// Messages are composed in place: every `with_*` and `using_*_template` call
/// mutates the message and hands back `&mut Email` for chaining. Calls that
/// can fail validate their input first and leave the message untouched on
/// error.
///
/// The body is resolved only when [`Email::render_body`] is called. If a
/// template has been set it always wins over a literal body, whatever order
/// the two were set in.
///
/// ```
/// # use herald::domain::communication::{addresses::Address, emails::{Email, Priority}};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut email = Email::new(Address::new("me@example.com", Some("Me"))?);
///
/// email
///     .with_subject("hi there!")
///     .with_priority(Priority::High)
///     .with_to(Address::new("friend@example.com", None)?)?
///     .with_header("X-Campaign", "spring")?
///     .with_plain_text_body("what's up?");
///
/// assert_eq!(email.to().len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Email {
    from: Address,
    to: Vec<Address>,
    cc: Vec<Address>,
    bcc: Vec<Address>,
    subject: Option<String>,
    body: Option<String>,
    template: Option<Template>,
    is_html: bool,
    priority: Priority,
    attachments: Vec<Attachment>,
    headers: HashMap<String, String>,
}

impl Email {
    /// Create an empty email from the given sender
    pub fn new(from: Address) -> Self {
        Self {
            from,
            to: Vec::new(),
            cc: Vec::new(),
            bcc: Vec::new(),
            subject: None,
            body: None,
            template: None,
            is_html: true,
            priority: Priority::default(),
            attachments: Vec::new(),
            headers: HashMap::new(),
        }
    }

    /// Compose an email with a single recipient and an HTML body in one call
    ///
    /// # Arguments
    /// * `from` - The sender address.
    /// * `to` - The recipient address.
    /// * `subject` - The subject.
    /// * `body_html` - The HTML body.
    ///
    /// # Returns
    /// - [`Ok`] with the [`Email`].
    /// - [`Err`] with [`ComposeError::InvalidAddress`] if `from` or `to` is not a valid address.
    pub fn compose(
        from: &str,
        to: &str,
        subject: &str,
        body_html: &str,
    ) -> Result<Self, ComposeError> {
        let from = Address::new(from, None)?;
        let to = Address::new(to, None)?;

        let mut email = Self::new(from);
        email.to.push(to);
        email.subject = Some(subject.to_string());
        email.body = Some(body_html.to_string());

        Ok(email)
    }

    /// Set the subject
    pub fn with_subject(&mut self, subject: impl Into<String>) -> &mut Self {
        self.subject = Some(subject.into());
        self
    }

    /// Add a "to" recipient
    pub fn with_to(
        &mut self,
        address: impl Into<Option<Address>>,
    ) -> Result<&mut Self, ComposeError> {
        let address = address.into().ok_or(ComposeError::MissingArgument("address"))?;
        self.to.push(address);
        Ok(self)
    }

    /// Add a "cc" (carbon copy) recipient
    pub fn with_cc(
        &mut self,
        address: impl Into<Option<Address>>,
    ) -> Result<&mut Self, ComposeError> {
        let address = address.into().ok_or(ComposeError::MissingArgument("address"))?;
        self.cc.push(address);
        Ok(self)
    }

    /// Add a "bcc" (blind carbon copy) recipient
    pub fn with_bcc(
        &mut self,
        address: impl Into<Option<Address>>,
    ) -> Result<&mut Self, ComposeError> {
        let address = address.into().ok_or(ComposeError::MissingArgument("address"))?;
        self.bcc.push(address);
        Ok(self)
    }

    /// Add an attachment
    pub fn with_attachment(
        &mut self,
        attachment: impl Into<Option<Attachment>>,
    ) -> Result<&mut Self, ComposeError> {
        let attachment = attachment
            .into()
            .ok_or(ComposeError::MissingArgument("attachment"))?;
        self.attachments.push(attachment);
        Ok(self)
    }

    /// Add a header
    ///
    /// Fails with [`ComposeError::DuplicateHeader`] if a header with the same
    /// name was already added; the existing value is kept.
    pub fn with_header(&mut self, name: &str, value: &str) -> Result<&mut Self, ComposeError> {
        match self.headers.entry(name.to_string()) {
            Entry::Occupied(_) => Err(ComposeError::DuplicateHeader(name.to_string())),
            Entry::Vacant(entry) => {
                entry.insert(value.to_string());
                Ok(self)
            }
        }
    }

    /// Set the body as HTML
    ///
    /// A template set earlier is kept and still takes precedence.
    pub fn with_html_body(&mut self, body: impl Into<String>) -> &mut Self {
        self.body = Some(body.into());
        self.is_html = true;
        self
    }

    /// Set the body as plain text
    ///
    /// A template set earlier is kept and still takes precedence.
    pub fn with_plain_text_body(&mut self, body: impl Into<String>) -> &mut Self {
        self.body = Some(body.into());
        self.is_html = false;
        self
    }

    /// Remove the literal body
    pub fn clear_body(&mut self) -> &mut Self {
        self.body = None;
        self
    }

    /// Set the priority
    pub fn with_priority(&mut self, priority: Priority) -> &mut Self {
        self.priority = priority;
        self
    }

    /// Render the body from a template string
    ///
    /// # Arguments
    /// * `template` - The template source.
    /// * `model` - The data the template is rendered against. Must not serialize to `null`.
    /// * `is_html` - Whether the rendered output is HTML.
    pub fn using_string_template<M: Serialize>(
        &mut self,
        template: &str,
        model: M,
        is_html: bool,
    ) -> Result<&mut Self, ComposeError> {
        let model = serde_json::to_value(model)?;

        if model.is_null() {
            return Err(ComposeError::MissingArgument("model"));
        }

        self.template = Some(Template {
            source: template.to_string(),
            model,
        });
        self.is_html = is_html;

        Ok(self)
    }

    /// Render the body from a template file
    ///
    /// The file is read immediately; see [`Email::using_string_template`].
    pub fn using_file_template<M: Serialize>(
        &mut self,
        path: impl AsRef<Path>,
        model: M,
        is_html: bool,
    ) -> Result<&mut Self, ComposeError> {
        let template = read_template_file(path)?;
        self.using_string_template(&template, model, is_html)
    }

    /// Render the body from a template embedded in the bundle `E`
    ///
    /// The template is looked up immediately; see [`Email::using_string_template`].
    pub fn using_embedded_template<E: RustEmbed, M: Serialize>(
        &mut self,
        path: &str,
        model: M,
        is_html: bool,
    ) -> Result<&mut Self, ComposeError> {
        let template = read_embedded_template::<E>(path)?;
        self.using_string_template(&template, model, is_html)
    }

    /// Resolve the final body text
    ///
    /// # Arguments
    /// * `renderer` - Renders the template, if one is set.
    /// * `cancellation` - Passed to the renderer untouched.
    ///
    /// # Returns
    /// - The rendered template if a template is set.
    /// - Otherwise the literal body, without calling `renderer`.
    /// - [`RenderBodyError::MissingBody`] if neither is set.
    pub async fn render_body<R>(
        &self,
        renderer: &R,
        cancellation: &CancellationToken,
    ) -> Result<String, RenderBodyError>
    where
        R: Renderer + ?Sized,
    {
        match (&self.template, &self.body) {
            (Some(template), _) => {
                trace!("rendering body from template");

                Ok(renderer
                    .render(&template.source, &template.model, cancellation)
                    .await?)
            }
            (None, Some(body)) => {
                trace!("using literal body");

                Ok(body.clone())
            }
            (None, None) => Err(RenderBodyError::MissingBody),
        }
    }

    /// The sender
    pub fn from(&self) -> &Address {
        &self.from
    }

    /// The "to" recipients, in the order they were added
    pub fn to(&self) -> &[Address] {
        &self.to
    }

    /// The "cc" recipients, in the order they were added
    pub fn cc(&self) -> &[Address] {
        &self.cc
    }

    /// The "bcc" recipients, in the order they were added
    pub fn bcc(&self) -> &[Address] {
        &self.bcc
    }

    /// The subject
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// The literal body
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// The template and its model
    pub fn template(&self) -> Option<&Template> {
        self.template.as_ref()
    }

    /// Whether the body is HTML
    pub fn is_html(&self) -> bool {
        self.is_html
    }

    /// The priority
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// The attachments, in the order they were added
    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    /// The headers
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}
