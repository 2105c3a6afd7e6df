//! Quote request validation.
//!
//! Submission is a stub: a request that passes validation is acknowledged
//! and nothing is stored or sent.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Why a quote request was turned away. Display text is the user prompt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    #[error("Please fill in all required fields.")]
    MissingFields(Vec<&'static str>),
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Contents of the quote form. Every field except `message` is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub property_type: String,
    pub timeframe: String,
    pub message: String,
}

/// Acknowledgement for an accepted quote request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteReceipt {
    pub first_name: String,
    pub email: String,
    pub message: String,
}

impl QuoteRequest {
    /// Required field names, in form order.
    pub const REQUIRED_FIELDS: &[&str] = &[
        "first_name",
        "last_name",
        "email",
        "phone",
        "address",
        "property_type",
        "timeframe",
    ];

    fn field(&self, name: &str) -> &str {
        match name {
            "first_name" => &self.first_name,
            "last_name" => &self.last_name,
            "email" => &self.email,
            "phone" => &self.phone,
            "address" => &self.address,
            "property_type" => &self.property_type,
            "timeframe" => &self.timeframe,
            _ => &self.message,
        }
    }

    /// Required fields left empty, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        Self::REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|name| self.field(name).is_empty())
            .collect()
    }

    /// Validates the form and builds the acknowledgement.
    ///
    /// Missing fields are reported before the email format is checked.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::MissingFields`] or [`QuoteError::InvalidEmail`].
    pub fn submit(&self) -> Result<QuoteReceipt, QuoteError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(QuoteError::MissingFields(missing));
        }
        if !is_valid_email(&self.email) {
            return Err(QuoteError::InvalidEmail);
        }
        Ok(QuoteReceipt {
            first_name: self.first_name.clone(),
            email: self.email.clone(),
            message: format!(
                "Thank you {}! Your quote request has been submitted. \
                 Our team will contact you within 24 hours at {}.",
                self.first_name, self.email
            ),
        })
    }
}

/// Loose `local@domain.tld` shape check: no whitespace, exactly one `@`,
/// and a dot somewhere after it.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}
