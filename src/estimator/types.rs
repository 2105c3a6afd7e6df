//! Estimate request and result types.

use serde::{Deserialize, Serialize};

use super::location::LocationTier;
use crate::input::InputError;

/// The three values collected by the estimator form.
///
/// `location` keeps the raw key so that unrecognized values reach the model
/// unchanged and get the neutral multiplier. Missing numeric fields
/// deserialize as `0.0` and are then rejected by [`EstimateInput::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateInput {
    /// Average monthly electricity bill (currency units).
    #[serde(default)]
    pub monthly_bill: f64,
    /// Home floor area (area units). Collected but not used by the model.
    #[serde(default)]
    pub home_size: f64,
    /// Location tier key: `high`, `medium`, `low`, or anything else.
    #[serde(default)]
    pub location: String,
}

impl EstimateInput {
    /// Builds a validated input.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidValues`] if either number is not `> 0`.
    pub fn new(
        monthly_bill: f64,
        home_size: f64,
        location: impl Into<String>,
    ) -> Result<Self, InputError> {
        let input = Self {
            monthly_bill,
            home_size,
            location: location.into(),
        };
        input.validate()?;
        Ok(input)
    }

    /// Checks the call boundary: both numbers must be strictly positive.
    ///
    /// NaN fails the check; positive infinity passes and propagates through
    /// the model.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidValues`] carrying the offending values.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.monthly_bill > 0.0 && self.home_size > 0.0 {
            Ok(())
        } else {
            Err(InputError::InvalidValues {
                monthly_bill: self.monthly_bill,
                home_size: self.home_size,
            })
        }
    }

    /// The recognized tier, if the location key is one.
    pub fn tier(&self) -> Option<LocationTier> {
        LocationTier::from_key(&self.location)
    }
}

/// Projected outcome of installing solar, recomputed fresh per call.
///
/// Savings are whole currency amounts stored as `f64` so that non-finite
/// inputs propagate instead of saturating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimateResult {
    /// Projected yearly savings (whole currency units).
    pub annual_savings: f64,
    /// Savings over the model's lifetime horizon (whole currency units).
    pub lifetime_savings: f64,
    /// Estimated installed capacity (kW, one decimal).
    pub system_size_kw: f64,
    /// Estimated CO2 avoided per year (tons, one decimal).
    pub carbon_offset_tons_per_year: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_positive_values() {
        let input = EstimateInput::new(100.0, 1500.0, "medium");
        assert!(input.is_ok());
        assert_eq!(input.ok().and_then(|i| i.tier()), Some(LocationTier::Medium));
    }

    #[test]
    fn zero_bill_is_rejected() {
        let err = EstimateInput::new(0.0, 1500.0, "medium");
        assert!(matches!(
            err,
            Err(InputError::InvalidValues { monthly_bill, .. }) if monthly_bill == 0.0
        ));
    }

    #[test]
    fn negative_home_size_is_rejected() {
        assert!(EstimateInput::new(100.0, -1.0, "low").is_err());
    }

    #[test]
    fn nan_is_rejected_at_the_boundary() {
        assert!(EstimateInput::new(f64::NAN, 1500.0, "low").is_err());
    }

    #[test]
    fn missing_fields_default_to_zero() {
        let input: EstimateInput =
            toml::from_str("location = \"high\"").expect("partial input should deserialize");
        assert_eq!(input.monthly_bill, 0.0);
        assert_eq!(input.home_size, 0.0);
        assert!(input.validate().is_err());
    }
}
