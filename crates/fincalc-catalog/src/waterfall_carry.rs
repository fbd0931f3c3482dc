//! European waterfall carry distribution.
//!
//! Profit is distributed in tiers: limited partners first receive their
//! preferred return (invested capital times the hurdle rate); the residual
//! is then split, with the general partner taking the carry percentage.
//! The result is the GP's carried interest in dollars.

use fincalc_core::{
    Analysis, CalcResult, Calculator, CalculatorInputs, RiskLevel, ValidationReport,
};

#[derive(Debug, Default)]
pub struct WaterfallCarryCalculator;

fn carry(invested: f64, profit: f64, hurdle_rate: f64, carry_rate: f64) -> f64 {
    let preferred = invested * hurdle_rate;
    let residual = (profit - preferred).max(0.0);
    residual * carry_rate
}

impl Calculator for WaterfallCarryCalculator {
    fn id(&self) -> &str {
        "waterfall-carry"
    }

    fn name(&self) -> &str {
        "Waterfall Carry Calculator"
    }

    fn description(&self) -> &str {
        "General partner carried interest under a European distribution waterfall"
    }

    fn validate_inputs(&self, inputs: &CalculatorInputs) -> ValidationReport {
        let mut errors = Vec::new();
        match inputs.get_f64("invested_capital") {
            Ok(v) if v > 0.0 => {}
            Ok(_) => errors.push("invested_capital must be greater than zero".to_string()),
            Err(e) => errors.push(e.to_string()),
        }
        match inputs.get_f64("total_profit") {
            Ok(p) if p >= 0.0 => {}
            Ok(_) => errors.push("total_profit cannot be negative".to_string()),
            Err(e) => errors.push(e.to_string()),
        }
        for field in ["hurdle_rate", "carry_rate"] {
            match inputs.get_f64(field) {
                Ok(r) if (0.0..=1.0).contains(&r) => {}
                Ok(_) => errors.push(format!("{field} must be a fraction between 0 and 1")),
                Err(e) => errors.push(e.to_string()),
            }
        }
        ValidationReport::from_errors(errors)
    }

    fn compute(&self, inputs: &CalculatorInputs) -> CalcResult<f64> {
        Ok(carry(
            inputs.get_f64("invested_capital")?,
            inputs.get_f64("total_profit")?,
            inputs.get_f64("hurdle_rate")?,
            inputs.get_f64("carry_rate")?,
        ))
    }

    fn analyze(&self, result: f64, inputs: &CalculatorInputs) -> Analysis {
        let profit = inputs.get_f64("total_profit").unwrap_or(0.0);
        let share = if profit > 0.0 { result / profit } else { 0.0 };
        let risk = if share < 0.10 {
            RiskLevel::Low
        } else if share < 0.20 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        };
        Analysis {
            recommendation: format!(
                "The GP earns ${result:.2} in carry, {:.1}% of total profit; LPs keep the remainder after their preferred return.",
                share * 100.0
            ),
            risk,
        }
    }
}
