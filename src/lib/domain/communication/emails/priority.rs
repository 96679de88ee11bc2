//! Email priority

use serde::{Deserialize, Serialize};

/// How urgently an email should be treated by the recipient's client
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Low priority
    Low,

    /// Normal priority
    #[default]
    Normal,

    /// High priority
    High,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_default_priority_is_normal() {
        assert_eq!(Priority::default(), Priority::Normal);
    }

    #[test]
    fn test_priority_serializes_lowercase() -> TestResult {
        assert_eq!(serde_json::to_string(&Priority::High)?, "\"high\"");
        assert_eq!(serde_json::from_str::<Priority>("\"low\"")?, Priority::Low);

        Ok(())
    }
}
