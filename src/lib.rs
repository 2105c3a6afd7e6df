//! Residential solar savings estimator and quote-request validation.

#[cfg(feature = "api")]
pub mod api;
pub mod config;
/// Savings model, location tiers, and estimate types.
pub mod estimator;
pub mod input;
pub mod io;
pub mod logging;
/// Quote request validation and acknowledgement.
pub mod quote;
pub mod report;
