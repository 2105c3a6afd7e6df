//! Coarse solar-irradiance categories for a site.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Three-level proxy for how much sun a site receives.
///
/// Parsed from the lowercase keys `high`, `medium` and `low`. Anything else
/// is not a tier; callers fall back to a neutral multiplier instead of
/// failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationTier {
    High,
    Medium,
    Low,
}

impl LocationTier {
    /// All tiers, sunniest first.
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    /// Looks up a tier by its form key. Matching is exact (case-sensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use solar_estimator::estimator::LocationTier;
    ///
    /// assert_eq!(LocationTier::from_key("high"), Some(LocationTier::High));
    /// assert_eq!(LocationTier::from_key("High"), None);
    /// assert_eq!(LocationTier::from_key(""), None);
    /// ```
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }

    /// The form key for this tier.
    pub fn key(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for LocationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
