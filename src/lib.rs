//! Conformance checks for STAC API services.
//!
//! The validator walks a live service: it reads the landing page, works out
//! which STAC API capabilities are advertised, and exercises each of them over
//! HTTP. Findings are collected into a [`ValidationReport`].

pub mod client;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod orchestrator;
pub mod report;
pub mod schema;
pub mod stac;
pub mod validators;

pub use config::ValidatorConfig;
pub use error::{ValidatorError, ValidatorResult};
pub use orchestrator::{Validator, validate_api};
pub use report::ValidationReport;
