//! Mailbox address

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use thiserror::Error;

use AddressError::*;

/// An error that can occur when creating an address
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    /// The email address is empty
    #[error("email is empty")]
    EmptyEmailAddress,

    /// The email address has no `@`
    #[error("email \"{0}\" is invalid")]
    InvalidEmailAddress(String),
}

/// A single mailbox: an email address with an optional display name.
///
/// Two addresses are equal when their email addresses are equal; the display
/// name takes no part in equality or hashing.
#[derive(Clone, Debug)]
pub struct Address {
    email_address: String,
    name: Option<String>,
}

impl Address {
    /// Create a new address
    ///
    /// # Arguments
    /// * `email_address` - The email address, e.g. `john.doe@example.com`.
    /// * `name` - The display name, e.g. `John Doe`.
    ///
    /// # Returns
    /// - [`Ok`] with the [`Address`] if `email_address` contains an `@`.
    /// - [`Err`] with an [`AddressError`] otherwise.
    pub fn new(email_address: &str, name: Option<&str>) -> Result<Self, AddressError> {
        if email_address.is_empty() {
            return Err(EmptyEmailAddress);
        }

        if !email_address.contains('@') {
            return Err(InvalidEmailAddress(email_address.to_string()));
        }

        Ok(Self {
            email_address: email_address.to_string(),
            name: name.map(str::to_string),
        })
    }

    /// The email address
    pub fn email_address(&self) -> &str {
        &self.email_address
    }

    /// The display name, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl PartialEq for Address {
    fn eq(&self, other: &Self) -> bool {
        self.email_address == other.email_address
    }
}

impl Eq for Address {}

impl Hash for Address {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.email_address.hash(state);
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s, None)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} <{}>", name, self.email_address),
            None => write!(f, "{}", self.email_address),
        }
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.email_address
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_address_without_at_symbol_is_invalid() {
        for raw in ["invalid", "from", "to", "john.doe.example.com", " "] {
            let result = Address::new(raw, None);
            assert!(matches!(result, Err(InvalidEmailAddress(ref s)) if s == raw));
        }
    }

    #[test]
    fn test_empty_address_is_invalid() {
        let result = Address::new("", Some("Nobody"));
        assert_eq!(result.unwrap_err(), EmptyEmailAddress);
    }

    #[test]
    fn test_address_with_at_symbol_is_valid() -> TestResult {
        for raw in ["email@address", "@", "a@b.com", "John <john@example.com>"] {
            let address = Address::new(raw, None)?;
            assert_eq!(address.email_address(), raw);
            assert_eq!(address.name(), None);
        }

        Ok(())
    }

    #[test]
    fn test_address_equality_ignores_name() -> TestResult {
        let a = Address::new("john@example.com", Some("John"))?;
        let b = Address::new("john@example.com", Some("Johnny"))?;
        let c = Address::new("john@example.com", None)?;

        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_ne!(a, Address::new("jane@example.com", Some("John"))?);

        let set: HashSet<Address> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 1);

        Ok(())
    }

    #[test]
    fn test_address_display() -> TestResult {
        let named = Address::new("john@example.com", Some("John Doe"))?;
        let bare: Address = "jane@example.com".parse()?;

        assert_eq!(named.to_string(), "John Doe <john@example.com>");
        assert_eq!(bare.to_string(), "jane@example.com");
        assert_eq!(String::from(named), "john@example.com");

        Ok(())
    }
}
