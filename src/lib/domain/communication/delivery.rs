//! Email delivery contract

mod send_response;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

#[cfg(test)]
use mockall::mock;

use crate::domain::communication::emails::Email;

pub use send_response::SendResponse;

/// Delivers composed emails.
///
/// Implementations render the body with [`Email::render_body`] and then
/// transmit the message, reporting the outcome as a [`SendResponse`] rather
/// than an error.
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Send an email
    ///
    /// # Arguments
    /// * `email` - The composed [`Email`].
    /// * `cancellation` - Signalled when the caller no longer wants the email sent.
    async fn send(&self, email: &Email, cancellation: &CancellationToken) -> SendResponse;
}

#[cfg(test)]
mock! {
    pub EmailSender {}

    #[async_trait]
    impl EmailSender for EmailSender {
        async fn send(&self, email: &Email, cancellation: &CancellationToken) -> SendResponse;
    }
}

#[cfg(test)]
pub mod tests {
    pub use super::MockEmailSender;

    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use serde_json::json;
    use testresult::TestResult;
    use tokio_util::sync::CancellationToken;

    use crate::domain::communication::{
        addresses::Address,
        rendering::{tests::MockRenderer, Renderer},
    };

    use super::*;

    /// Renders the body and records what would have been transmitted
    struct RecordingSender<R: Renderer> {
        renderer: R,
        sent: Arc<Mutex<Vec<(String, String)>>>,
    }

    #[async_trait]
    impl<R: Renderer> EmailSender for RecordingSender<R> {
        async fn send(&self, email: &Email, cancellation: &CancellationToken) -> SendResponse {
            let body = match email.render_body(&self.renderer, cancellation).await {
                Ok(body) => body,
                Err(err) => return err.into(),
            };

            let mut sent = self.sent.lock().expect("lock poisoned");
            for recipient in email.to() {
                sent.push((recipient.to_string(), body.clone()));
            }

            SendResponse::SUCCESS
        }
    }

    #[tokio::test]
    async fn test_sender_renders_and_delivers() -> TestResult {
        let mut renderer = MockRenderer::new();
        renderer
            .expect_render()
            .times(1)
            .returning(|_, model, _| {
                Ok(format!("hello {}", model["who"].as_str().unwrap_or_default()))
            });

        let sent = Arc::new(Mutex::new(Vec::new()));
        let sender = RecordingSender {
            renderer,
            sent: sent.clone(),
        };

        let mut email = Email::new(Address::new("a@b.com", None)?);
        email
            .with_to(Address::new("c@d.com", Some("C"))?)?
            .using_string_template("hello {{who}}", json!({"who": "world"}), false)?;

        let response = sender.send(&email, &CancellationToken::new()).await;

        assert!(response.is_successful());
        assert_eq!(
            *sent.lock().expect("lock poisoned"),
            vec![("C <c@d.com>".to_string(), "hello world".to_string())]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_sender_reports_missing_body() -> TestResult {
        let mut renderer = MockRenderer::new();
        renderer.expect_render().times(0);

        let sender = RecordingSender {
            renderer,
            sent: Arc::new(Mutex::new(Vec::new())),
        };

        let email = Email::new(Address::new("a@b.com", None)?);

        let response = sender.send(&email, &CancellationToken::new()).await;

        assert!(!response.is_successful());
        assert_eq!(response.errors(), &["body or template must be set".to_string()]);

        Ok(())
    }

    #[tokio::test]
    async fn test_mock_sender() -> TestResult {
        let mut sender = MockEmailSender::new();
        sender
            .expect_send()
            .withf(|email, _| email.subject() == Some("hi"))
            .times(1)
            .returning(|_, _| SendResponse::fail(["mailbox full"]));

        let email = Email::compose("a@b.com", "c@d.com", "hi", "<p>hi</p>")?;

        let response = sender.send(&email, &CancellationToken::new()).await;

        assert_eq!(response.errors(), &["mailbox full".to_string()]);

        Ok(())
    }
}
