//! Weighted average cost of capital.
//!
//! WACC = E/V * Re + D/V * Rd * (1 - Tc)
//!
//! All rates are fractions (0.10 for 10%).

use fincalc_core::{
    Analysis, CalcResult, Calculator, CalculatorInputs, RiskLevel, ValidationReport,
};

#[derive(Debug, Default)]
pub struct WaccCalculator;

fn wacc(equity: f64, debt: f64, cost_of_equity: f64, cost_of_debt: f64, tax_rate: f64) -> f64 {
    let total = equity + debt;
    let equity_weight = equity / total;
    let debt_weight = debt / total;
    equity_weight * cost_of_equity + debt_weight * cost_of_debt * (1.0 - tax_rate)
}

impl Calculator for WaccCalculator {
    fn id(&self) -> &str {
        "wacc"
    }

    fn name(&self) -> &str {
        "WACC Calculator"
    }

    fn description(&self) -> &str {
        "Blended after-tax cost of a company's equity and debt capital"
    }

    fn validate_inputs(&self, inputs: &CalculatorInputs) -> ValidationReport {
        let mut errors = Vec::new();

        let mut capital = [0.0f64; 2];
        for (slot, field) in ["equity", "debt"].iter().enumerate() {
            match inputs.get_f64(field) {
                Ok(v) if v >= 0.0 => capital[slot] = v,
                Ok(_) => errors.push(format!("{field} cannot be negative")),
                Err(e) => errors.push(e.to_string()),
            }
        }
        // Cross-field rule: the capital structure cannot be empty.
        if errors.is_empty() && capital[0] + capital[1] <= 0.0 {
            errors.push("equity and debt cannot both be zero".to_string());
        }

        for field in ["cost_of_equity", "cost_of_debt", "tax_rate"] {
            match inputs.get_f64(field) {
                Ok(v) if (0.0..=1.0).contains(&v) => {}
                Ok(_) => {
                    errors.push(format!("{field} must be a fraction between 0 and 1"));
                }
                Err(e) => errors.push(e.to_string()),
            }
        }
        ValidationReport::from_errors(errors)
    }

    fn compute(&self, inputs: &CalculatorInputs) -> CalcResult<f64> {
        Ok(wacc(
            inputs.get_f64("equity")?,
            inputs.get_f64("debt")?,
            inputs.get_f64("cost_of_equity")?,
            inputs.get_f64("cost_of_debt")?,
            inputs.get_f64("tax_rate")?,
        ))
    }

    fn analyze(&self, result: f64, _inputs: &CalculatorInputs) -> Analysis {
        let pct = result * 100.0;
        let risk = if result < 0.07 {
            RiskLevel::Low
        } else if result < 0.12 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        };
        Analysis {
            recommendation: format!(
                "The blended cost of capital is {pct:.2}%; projects must clear this hurdle rate to create value."
            ),
            risk,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blends_after_tax_costs() {
        // 60/40 structure, 10% equity, 5% debt, 21% tax.
        let r = wacc(600_000.0, 400_000.0, 0.10, 0.05, 0.21);
        assert!((r - 0.0758).abs() < 1e-12);
    }

    #[test]
    fn all_equity_firm_pays_cost_of_equity() {
        assert_eq!(wacc(1_000_000.0, 0.0, 0.09, 0.04, 0.30), 0.09);
    }
}
