//! Mailing Address

use std::fmt;

use serde::Deserialize;

/// Postal address kept on file for a customer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MailingAddress {
    /// Street line
    pub street: String,

    /// City
    pub city: String,

    /// State or province code
    pub state: String,
}

impl MailingAddress {
    /// Create a new mailing address.
    pub fn new(street: impl Into<String>, city: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            state: state.into(),
        }
    }
}

impl fmt::Display for MailingAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.street, self.city, self.state)
    }
}
