#![deny(warnings)]
//! The calculator framework for the fincalc catalog.
//!
//! This crate provides the `Calculator` trait implemented by every entry in
//! the catalog, the `CalculatorInputs` accessor for typed field reads, the
//! structured `CalcError` taxonomy, and the `CalculatorRegistry` built once
//! at application bootstrap.
//!
//! Every calculator is a stateless, deterministic input → output
//! transformation: `calculate` validates, runs a pure formula for the numeric
//! result, then derives a textual analysis and a coarse risk level.

pub mod contract;
pub mod error;
pub mod inputs;
pub mod registry;

pub use contract::Calculator;
pub use error::{CalcError, CalcResult};
pub use inputs::CalculatorInputs;
pub use registry::{CalculatorRegistry, RegistryBuilder};

// Re-export the shared type model so downstream crates can depend on
// `fincalc-core` alone.
pub use fincalc_types::{
    Analysis, CalcValue, CalculatorDescriptor, Outputs, RiskLevel, ValidationReport,
};
