//! Display formatting for estimate results.

use std::fmt;

use serde::Serialize;

use crate::estimator::EstimateResult;

/// An estimate rendered the way the results panel shows it.
///
/// # Examples
///
/// ```
/// use solar_estimator::estimator::estimate;
/// use solar_estimator::report::SavingsReport;
///
/// let report = SavingsReport::new(&estimate(200.0, 2000.0, "high"));
/// assert_eq!(report.annual_savings, "$2,808");
/// assert_eq!(report.lifetime_savings, "$70,200");
/// assert_eq!(report.system_size, "25 kW");
/// assert_eq!(report.carbon_offset, "48.8 tons/year");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavingsReport {
    pub annual_savings: String,
    pub lifetime_savings: String,
    pub system_size: String,
    pub carbon_offset: String,
}

impl SavingsReport {
    pub fn new(result: &EstimateResult) -> Self {
        Self {
            annual_savings: format_currency(result.annual_savings),
            lifetime_savings: format_currency(result.lifetime_savings),
            system_size: format!("{} kW", format_decimal(result.system_size_kw)),
            carbon_offset: format!(
                "{} tons/year",
                format_decimal(result.carbon_offset_tons_per_year)
            ),
        }
    }
}

impl fmt::Display for SavingsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Savings Estimate ---")?;
        writeln!(f, "Annual savings:    {}", self.annual_savings)?;
        writeln!(f, "Lifetime savings:  {}", self.lifetime_savings)?;
        writeln!(f, "System size:       {}", self.system_size)?;
        write!(f, "Carbon offset:     {}", self.carbon_offset)
    }
}

/// Formats a whole currency amount with a `$` sign and `,` grouping.
///
/// The sign follows the `$`. Non-finite amounts render as `$NaN`, `$∞`
/// or `$-∞`.
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return "$NaN".to_string();
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    if amount.is_infinite() {
        return format!("${sign}∞");
    }
    let digits = format!("{:.0}", amount.abs());
    format!("${sign}{}", group_thousands(&digits))
}

/// Formats a decimal in its shortest form, `25` rather than `25.0`.
///
/// Non-finite values render as `NaN`, `Infinity` or `-Infinity`.
pub fn format_decimal(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let s = if value > 0.0 { "Infinity" } else { "-Infinity" };
        s.to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn currency_grouping() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(756.0), "$756");
        assert_eq!(format_currency(1080.0), "$1,080");
        assert_eq!(format_currency(27000.0), "$27,000");
        assert_eq!(format_currency(1_234_567.0), "$1,234,567");
        assert_eq!(format_currency(-4500.0), "$-4,500");
    }

    #[test]
    fn currency_non_finite() {
        assert_eq!(format_currency(f64::NAN), "$NaN");
        assert_eq!(format_currency(f64::INFINITY), "$∞");
    }

    #[test]
    fn decimal_shortest_form() {
        assert_eq!(format_decimal(25.0), "25");
        assert_eq!(format_decimal(9.6), "9.6");
        assert_eq!(format_decimal(-0.0), "0");
        assert_eq!(format_decimal(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn report_for_reference_case() {
        let result = EstimateResult {
            annual_savings: 1080.0,
            lifetime_savings: 27000.0,
            system_size_kw: 9.6,
            carbon_offset_tons_per_year: 14.4,
        };
        let report = SavingsReport::new(&result);
        assert_eq!(
            report.to_string(),
            "--- Savings Estimate ---\n\
             Annual savings:    $1,080\n\
             Lifetime savings:  $27,000\n\
             System size:       9.6 kW\n\
             Carbon offset:     14.4 tons/year"
        );
    }
}
