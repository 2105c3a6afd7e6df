//! Form-field parsing and the call-boundary check in front of the estimator.

use thiserror::Error;
use tracing::debug;

use crate::estimator::{EstimateInput, LocationTier};

/// Rejection raised before the estimator is invoked.
///
/// This is a user-input problem, not a fault: the display text is the prompt
/// shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InputError {
    #[error("Please enter valid values for monthly bill and home size.")]
    InvalidValues { monthly_bill: f64, home_size: f64 },
}

/// Raw text as typed into the estimator form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EstimateForm {
    pub monthly_bill: String,
    pub home_size: String,
    pub location: String,
}

impl EstimateForm {
    pub fn new(
        monthly_bill: impl Into<String>,
        home_size: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            monthly_bill: monthly_bill.into(),
            home_size: home_size.into(),
            location: location.into(),
        }
    }

    /// Parses both numeric fields and applies the positivity check.
    ///
    /// Unparseable text counts as zero and is therefore rejected.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidValues`] if either parsed value is not `> 0`.
    pub fn validate(&self) -> Result<EstimateInput, InputError> {
        let input = EstimateInput::new(
            parse_amount(&self.monthly_bill),
            parse_amount(&self.home_size),
            self.location.clone(),
        )?;
        if LocationTier::from_key(&input.location).is_none() {
            debug!(location = %input.location, "unrecognized location, using neutral multiplier");
        }
        Ok(input)
    }
}

/// Parses the leading decimal number of a form field, or `0.0`.
///
/// Leading whitespace is skipped and trailing garbage ignored, so `"120abc"`
/// is `120.0`. Text with no numeric prefix is `0.0`. A signed `Infinity`
/// prefix parses to infinity.
///
/// # Examples
///
/// ```
/// use solar_estimator::input::parse_amount;
///
/// assert_eq!(parse_amount(" 99.5 dollars"), 99.5);
/// assert_eq!(parse_amount("1e2"), 100.0);
/// assert_eq!(parse_amount("$100"), 0.0);
/// assert_eq!(parse_amount(""), 0.0);
/// ```
pub fn parse_amount(text: &str) -> f64 {
    let s = text.trim_start();
    let value = numeric_prefix(s)
        .and_then(|p| p.parse::<f64>().ok())
        .unwrap_or(0.0);
    if value.is_nan() || value == 0.0 {
        0.0
    } else {
        value
    }
}

/// Longest prefix of `s` shaped like `[+-](Infinity | digits[.digits][e[+-]digits])`.
fn numeric_prefix(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return Some(&s[..end + "Infinity".len()]);
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    Some(&s[..end])
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
