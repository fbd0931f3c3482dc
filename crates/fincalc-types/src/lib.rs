//! Fincalc Types
//!
//! This crate defines the core types and data structures shared across the
//! fincalc ecosystem (`fincalc-core` and `fincalc-catalog`). It provides the
//! tagged input value model (`CalcValue`) and the serializable result types
//! consumed by presentation layers, and eliminates circular dependencies
//! between crates.

#![deny(warnings)]
#![deny(clippy::all)]

mod report;
mod value;

pub use report::{Analysis, CalculatorDescriptor, Outputs, RiskLevel, ValidationReport};
pub use value::CalcValue;
