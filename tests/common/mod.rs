//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use solar_estimator::estimator::{EstimateInput, SavingsModel};

/// Monthly bills spanning small apartments to large homes.
pub const BILLS: &[f64] = &[
    0.01, 1.0, 12.5, 37.49, 50.0, 75.0, 99.99, 100.0, 137.5, 200.0, 333.33, 1000.0, 25_000.0,
];

/// Location keys that are not tiers.
pub const UNKNOWN_LOCATIONS: &[&str] = &["", "coastal", "Medium", "HIGH", " low"];

/// The published savings model.
pub fn published_model() -> SavingsModel {
    SavingsModel::default()
}

/// An input with a fixed home size.
pub fn input(monthly_bill: f64, location: &str) -> EstimateInput {
    EstimateInput {
        monthly_bill,
        home_size: 1500.0,
        location: location.to_string(),
    }
}

/// Path to a file under `tests/data`.
pub fn data_path(name: &str) -> String {
    format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"))
}

/// Path to a file under `configs`.
pub fn config_path(name: &str) -> String {
    format!("{}/configs/{name}", env!("CARGO_MANIFEST_DIR"))
}
