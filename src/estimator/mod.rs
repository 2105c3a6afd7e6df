//! Solar savings estimation engine.
//!
//! A stateless calculation: a monthly bill and a location tier go in, a
//! projected system size, annual and lifetime savings, and carbon offset come
//! out. Range checks belong to the caller (see [`crate::input`]).

/// Location tiers and their form keys.
pub mod location;
/// Savings model factors and the estimate calculation.
pub mod model;
pub mod types;

pub use location::LocationTier;
pub use model::{NEUTRAL_MULTIPLIER, SavingsModel, TierMultipliers};
pub use types::{EstimateInput, EstimateResult};

/// Runs the published savings model.
///
/// Defined for `monthly_bill > 0` and `home_size > 0`; callers must reject
/// anything else before calling. Unrecognized `location` keys use the
/// neutral multiplier.
///
/// # Examples
///
/// ```
/// use solar_estimator::estimator::estimate;
///
/// let r = estimate(100.0, 1500.0, "medium");
/// assert_eq!(r.annual_savings, 1080.0);
/// assert_eq!(r.lifetime_savings, 27000.0);
/// assert_eq!(r.system_size_kw, 9.6);
/// assert_eq!(r.carbon_offset_tons_per_year, 14.4);
/// ```
pub fn estimate(monthly_bill: f64, home_size: f64, location: &str) -> EstimateResult {
    SavingsModel::default().estimate(&EstimateInput {
        monthly_bill,
        home_size,
        location: location.to_string(),
    })
}
