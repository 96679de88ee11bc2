//! Template rendering capability

mod errors;

use async_trait::async_trait;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

#[cfg(test)]
use mockall::mock;

pub use errors::RenderError;

/// Turns a template and its model into final body text.
///
/// Any templating engine can sit behind this trait. The model is opaque to
/// the caller; only the renderer interprets it.
#[async_trait]
pub trait Renderer: Send + Sync {
    /// Render a template
    ///
    /// # Arguments
    /// * `template` - The template source.
    /// * `model` - The data bound to the template.
    /// * `cancellation` - Signalled when the caller no longer wants the result.
    ///   Honoring it is up to the implementation.
    ///
    /// # Returns
    /// The rendered text, or a [`RenderError`].
    async fn render(
        &self,
        template: &str,
        model: &Value,
        cancellation: &CancellationToken,
    ) -> Result<String, RenderError>;
}

#[cfg(test)]
mock! {
    pub Renderer {}

    #[async_trait]
    impl Renderer for Renderer {
        async fn render(
            &self,
            template: &str,
            model: &Value,
            cancellation: &CancellationToken,
        ) -> Result<String, RenderError>;
    }
}

#[cfg(test)]
pub mod tests {
    pub use super::MockRenderer;
}
