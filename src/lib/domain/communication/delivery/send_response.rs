//! Delivery outcome

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::communication::emails::errors::RenderBodyError;

/// The outcome of handing an email to a delivery backend.
///
/// A response is successful exactly when it carries no errors.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SendResponse {
    errors: Vec<String>,
}

impl SendResponse {
    /// A successful response
    pub const SUCCESS: SendResponse = SendResponse { errors: Vec::new() };

    /// A failed response carrying `messages`, in order
    pub fn fail<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            errors: messages.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the email was delivered
    pub fn is_successful(&self) -> bool {
        self.errors.is_empty()
    }

    /// The error messages
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

impl From<RenderBodyError> for SendResponse {
    fn from(err: RenderBodyError) -> Self {
        debug!("RenderBodyError -> SendResponse");

        SendResponse::fail([err.to_string()])
    }
}
