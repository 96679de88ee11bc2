//! Sender configuration

use std::path::PathBuf;

use clap::Parser;

use crate::domain::communication::{
    addresses::{Address, AddressError},
    emails::Email,
};

/// Default sender and template location
#[derive(Clone, Debug, Parser)]
pub struct SenderConfig {
    /// The sender email address
    #[clap(long, env = "HERALD_SENDER")]
    pub sender: String,

    /// The sender display name
    #[clap(long, env = "HERALD_SENDER_NAME")]
    pub sender_name: Option<String>,

    /// The directory template files are resolved against
    #[clap(long, env = "HERALD_TEMPLATE_DIR", default_value = "templates")]
    pub template_dir: PathBuf,
}

impl SenderConfig {
    /// The configured sender address
    pub fn sender(&self) -> Result<Address, AddressError> {
        Address::new(&self.sender, self.sender_name.as_deref())
    }

    /// Start a new email from the configured sender
    pub fn email(&self) -> Result<Email, AddressError> {
        Ok(Email::new(self.sender()?))
    }

    /// Resolve a template file name against the template directory
    pub fn template_path(&self, name: &str) -> PathBuf {
        self.template_dir.join(name)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_parse_sender_config() -> TestResult {
        let config = SenderConfig::try_parse_from([
            "herald",
            "--sender",
            "noreply@example.com",
            "--sender-name",
            "Example",
            "--template-dir",
            "/srv/templates",
        ])?;

        let sender = config.sender()?;
        assert_eq!(sender.email_address(), "noreply@example.com");
        assert_eq!(sender.name(), Some("Example"));
        assert_eq!(
            config.template_path("welcome.html"),
            Path::new("/srv/templates/welcome.html")
        );

        Ok(())
    }

    #[test]
    fn test_email_from_config() -> TestResult {
        let config = SenderConfig {
            sender: "noreply@example.com".to_string(),
            sender_name: None,
            template_dir: PathBuf::from("templates"),
        };

        let email = config.email()?;

        assert_eq!(email.from().to_string(), "noreply@example.com");
        assert!(email.to().is_empty());

        Ok(())
    }

    #[test]
    fn test_invalid_sender() {
        let config = SenderConfig {
            sender: "noreply".to_string(),
            sender_name: None,
            template_dir: PathBuf::from("templates"),
        };

        assert!(matches!(
            config.email(),
            Err(AddressError::InvalidEmailAddress(_))
        ));
    }
}
