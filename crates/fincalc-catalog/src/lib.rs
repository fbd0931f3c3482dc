#![deny(warnings)]
//! Built-in calculators for the fincalc catalog.
//!
//! Each module holds one calculator: its validation rules, its closed-form
//! formula, and its risk thresholds. `standard_registry` wires every
//! built-in into a frozen `CalculatorRegistry` at bootstrap.

use fincalc_core::{CalcResult, CalculatorRegistry, RegistryBuilder};
use std::sync::Arc;

// Lending & growth
pub mod cagr;
pub mod compound_growth;
pub mod loan_payment;
pub mod present_value;

// Corporate finance & securities
pub mod bond_convexity;
pub mod wacc;
pub mod warrant_price;

// Fund economics & performance
pub mod modified_dietz;
pub mod waterfall_carry;

// Construction
pub mod drywall_area;

pub use bond_convexity::BondConvexityCalculator;
pub use cagr::CagrCalculator;
pub use compound_growth::CompoundGrowthCalculator;
pub use drywall_area::DrywallAreaCalculator;
pub use loan_payment::LoanPaymentCalculator;
pub use modified_dietz::ModifiedDietzCalculator;
pub use present_value::PresentValueCalculator;
pub use wacc::WaccCalculator;
pub use warrant_price::WarrantPriceCalculator;
pub use waterfall_carry::WaterfallCarryCalculator;

/// Builds the registry holding every built-in calculator.
///
/// Fails only if two built-ins claim the same id, which would be a bug in
/// this crate.
pub fn standard_registry() -> CalcResult<CalculatorRegistry> {
    let mut builder = RegistryBuilder::new();
    builder.register(Arc::new(LoanPaymentCalculator))?;
    builder.register(Arc::new(CagrCalculator))?;
    builder.register(Arc::new(CompoundGrowthCalculator))?;
    builder.register(Arc::new(PresentValueCalculator))?;
    builder.register(Arc::new(WaccCalculator))?;
    builder.register(Arc::new(DrywallAreaCalculator))?;
    builder.register(Arc::new(WarrantPriceCalculator))?;
    builder.register(Arc::new(BondConvexityCalculator))?;
    builder.register(Arc::new(WaterfallCarryCalculator))?;
    builder.register(Arc::new(ModifiedDietzCalculator))?;
    Ok(builder.build())
}
