use serde::Serialize;

use super::location::LocationTier;
use super::types::{EstimateInput, EstimateResult};

/// Multiplier applied when the location is not a recognized tier.
pub const NEUTRAL_MULTIPLIER: f64 = 1.0;

const MONTHS_PER_YEAR: f64 = 12.0;

/// Sun multiplier for each location tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierMultipliers {
    pub high: f64,
    pub medium: f64,
    pub low: f64,
}

impl TierMultipliers {
    /// Multiplier for a recognized tier.
    pub fn get(&self, tier: LocationTier) -> f64 {
        match tier {
            LocationTier::High => self.high,
            LocationTier::Medium => self.medium,
            LocationTier::Low => self.low,
        }
    }
}

impl Default for TierMultipliers {
    fn default() -> Self {
        Self {
            high: 1.3,
            medium: 1.0,
            low: 0.7,
        }
    }
}

/// Industry-average factors that turn a bill into a savings estimate.
///
/// [`SavingsModel::default`] is the published model. Every step rounds half
/// away from zero, and the carbon offset is derived from the already rounded
/// system size, so results are reproducible to the bit for a given model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavingsModel {
    /// Fraction of the household's energy needs the installation covers.
    pub solar_offset: f64,
    /// Horizon for lifetime savings (years).
    pub lifetime_years: u32,
    /// Installed kW per currency unit of annual bill.
    pub kw_per_annual_bill: f64,
    /// Tons of CO2 avoided per installed kW per year.
    pub tons_co2_per_kw: f64,
    /// Per-tier sun multipliers.
    pub multipliers: TierMultipliers,
}

impl Default for SavingsModel {
    fn default() -> Self {
        Self {
            solar_offset: 0.9,
            lifetime_years: 25,
            kw_per_annual_bill: 0.008,
            tons_co2_per_kw: 1.5,
            multipliers: TierMultipliers::default(),
        }
    }
}

impl SavingsModel {
    /// Resolves a location key to its sun multiplier, falling back to
    /// [`NEUTRAL_MULTIPLIER`] for anything that is not a tier.
    pub fn sun_multiplier(&self, location: &str) -> f64 {
        LocationTier::from_key(location).map_or(NEUTRAL_MULTIPLIER, |t| self.multipliers.get(t))
    }

    /// Computes the estimate for one request.
    ///
    /// Only meaningful for inputs that passed [`EstimateInput::validate`];
    /// the model itself does not check ranges, so non-finite values flow
    /// through to the result. `home_size` does not enter the calculation.
    pub fn estimate(&self, input: &EstimateInput) -> EstimateResult {
        let sun = self.sun_multiplier(&input.location);
        let annual_bill = input.monthly_bill * MONTHS_PER_YEAR;

        let annual_savings = (annual_bill * self.solar_offset * sun).round();
        let lifetime_savings = (annual_savings * f64::from(self.lifetime_years)).round();

        let system_size_kw = round_tenths(annual_bill * self.kw_per_annual_bill * sun);
        // Uses the rounded system size.
        let carbon_offset_tons_per_year = round_tenths(system_size_kw * self.tons_co2_per_kw * sun);

        EstimateResult {
            annual_savings,
            lifetime_savings,
            system_size_kw,
            carbon_offset_tons_per_year,
        }
    }
}

/// Rounds to one decimal place, half away from zero.
fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn input(bill: f64, location: &str) -> EstimateInput {
        EstimateInput {
            monthly_bill: bill,
            home_size: 1500.0,
            location: location.to_string(),
        }
    }

    #[test]
    fn medium_reference_case() {
        let r = SavingsModel::default().estimate(&input(100.0, "medium"));
        assert_eq!(
            r,
            EstimateResult {
                annual_savings: 1080.0,
                lifetime_savings: 27000.0,
                system_size_kw: 9.6,
                carbon_offset_tons_per_year: 14.4,
            }
        );
    }

    #[test]
    fn high_reference_case() {
        let r = SavingsModel::default().estimate(&EstimateInput {
            monthly_bill: 200.0,
            home_size: 2000.0,
            location: "high".to_string(),
        });
        assert_eq!(r.annual_savings, 2808.0);
        assert_eq!(r.lifetime_savings, 70200.0);
        assert_eq!(r.system_size_kw, 25.0);
        assert_eq!(r.carbon_offset_tons_per_year, 48.8);
    }

    #[test]
    fn low_tier_scales_down() {
        // 1200 * 0.9 * 0.7 = 756; 9.6 * 0.7 = 6.72 -> 6.7; 6.7 * 1.5 * 0.7 = 7.035 -> 7.0
        let r = SavingsModel::default().estimate(&input(100.0, "low"));
        assert_eq!(r.annual_savings, 756.0);
        assert_eq!(r.lifetime_savings, 18900.0);
        assert_eq!(r.system_size_kw, 6.7);
        assert_eq!(r.carbon_offset_tons_per_year, 7.0);
    }

    #[test]
    fn carbon_uses_rounded_system_size() {
        // 75 * 12 = 900; 900 * 0.008 = 7.2 kW; 7.2 * 1.5 = 10.8 t
        let model = SavingsModel::default();
        let r = model.estimate(&input(75.0, "medium"));
        assert_eq!(r.system_size_kw, 7.2);
        assert_eq!(r.carbon_offset_tons_per_year, round_tenths(r.system_size_kw * 1.5));
    }

    #[test]
    fn unknown_location_matches_medium() {
        let model = SavingsModel::default();
        let medium = model.estimate(&input(137.5, "medium"));
        for key in ["", "sunny", "HIGH", "none"] {
            assert_eq!(model.estimate(&input(137.5, key)), medium, "key {key:?}");
        }
    }

    #[test]
    fn home_size_does_not_change_result() {
        let model = SavingsModel::default();
        let small = EstimateInput {
            monthly_bill: 150.0,
            home_size: 1.0,
            location: "high".into(),
        };
        let large = EstimateInput {
            home_size: 10_000.0,
            ..small.clone()
        };
        assert_eq!(model.estimate(&small), model.estimate(&large));
    }

    #[test]
    fn non_finite_inputs_propagate() {
        let model = SavingsModel::default();
        let r = model.estimate(&input(f64::NAN, "medium"));
        assert!(r.annual_savings.is_nan());
        assert!(r.carbon_offset_tons_per_year.is_nan());

        let r = model.estimate(&input(f64::INFINITY, "high"));
        assert_eq!(r.annual_savings, f64::INFINITY);
        assert_eq!(r.system_size_kw, f64::INFINITY);
    }

    #[test]
    fn round_tenths_is_half_away_from_zero() {
        assert_eq!(round_tenths(0.25), 0.3);
        assert_eq!(round_tenths(-0.25), -0.3);
        assert_eq!(round_tenths(48.75), 48.8);
    }

    #[test]
    fn sun_multiplier_lookup() {
        let model = SavingsModel::default();
        assert_eq!(model.sun_multiplier("high"), 1.3);
        assert_eq!(model.sun_multiplier("medium"), 1.0);
        assert_eq!(model.sun_multiplier("low"), 0.7);
        assert_eq!(model.sun_multiplier("desert"), NEUTRAL_MULTIPLIER);
    }
}
