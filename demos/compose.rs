//! Compose an email from the command line and print its rendered body.
//!
//! ```text
//! HERALD_SENDER=me@example.com cargo run --example compose -- \
//!     --to friend@example.com --subject "hi" \
//!     --template welcome.html --model '{"name": "Ada"}'
//! ```

use anyhow::{Context, Result};
use async_trait::async_trait;
use clap::Parser;
use herald::{
    domain::communication::{
        addresses::Address,
        rendering::{RenderError, Renderer},
    },
    infrastructure::config::SenderConfig,
};
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// Sender configuration
    #[clap(flatten)]
    pub sender: SenderConfig,

    /// Recipient addresses
    #[clap(long, required = true)]
    pub to: Vec<String>,

    /// The subject
    #[clap(long)]
    pub subject: String,

    /// Template file name, relative to the template directory
    #[clap(long, conflicts_with = "body")]
    pub template: Option<String>,

    /// Template model as JSON
    #[clap(long, default_value = "{}")]
    pub model: String,

    /// Literal plain-text body
    #[clap(long)]
    pub body: Option<String>,
}

/// Replaces `{{key}}` placeholders with top-level string fields of the model
struct PlaceholderRenderer;

#[async_trait]
impl Renderer for PlaceholderRenderer {
    async fn render(
        &self,
        template: &str,
        model: &Value,
        cancellation: &CancellationToken,
    ) -> Result<String, RenderError> {
        if cancellation.is_cancelled() {
            return Err(RenderError::Cancelled);
        }

        let fields = model
            .as_object()
            .ok_or_else(|| RenderError::Evaluation("model must be a JSON object".to_string()))?;

        Ok(fields.iter().fold(template.to_string(), |rendered, (key, value)| {
            let value = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            rendered.replace(&format!("{{{{{key}}}}}"), &value)
        }))
    }
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let mut email = args.sender.email()?;
    email.with_subject(&args.subject);

    for to in &args.to {
        email.with_to(Address::new(to, None)?)?;
    }

    if let Some(template) = &args.template {
        let model: Value = serde_json::from_str(&args.model).context("invalid --model JSON")?;
        email.using_file_template(args.sender.template_path(template), model, true)?;
    }

    if let Some(body) = &args.body {
        email.with_plain_text_body(body);
    }

    let body = email
        .render_body(&PlaceholderRenderer, &CancellationToken::new())
        .await?;

    info!(
        from = %email.from(),
        recipients = email.to().len(),
        html = email.is_html(),
        "rendered email"
    );

    println!("Subject: {}", email.subject().unwrap_or_default());
    println!();
    println!("{body}");

    Ok(())
}
