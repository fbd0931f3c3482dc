//! Compound annual growth rate.
//!
//! CAGR = (ending / beginning)^(1/periods) - 1

use fincalc_core::{
    Analysis, CalcResult, Calculator, CalculatorInputs, RiskLevel, ValidationReport,
};

#[derive(Debug, Default)]
pub struct CagrCalculator;

fn cagr(beginning: f64, ending: f64, periods: f64) -> f64 {
    (ending / beginning).powf(1.0 / periods) - 1.0
}

impl Calculator for CagrCalculator {
    fn id(&self) -> &str {
        "cagr"
    }

    fn name(&self) -> &str {
        "CAGR Calculator"
    }

    fn description(&self) -> &str {
        "Compound annual growth rate between two values over a number of periods"
    }

    fn validate_inputs(&self, inputs: &CalculatorInputs) -> ValidationReport {
        let mut errors = Vec::new();
        for field in ["beginning_value", "ending_value"] {
            match inputs.get_f64(field) {
                Ok(v) if v > 0.0 => {}
                Ok(_) => errors.push(format!("{field} must be greater than zero")),
                Err(e) => errors.push(e.to_string()),
            }
        }
        match inputs.get_f64("periods") {
            Ok(p) if p > 0.0 => {}
            Ok(_) => errors.push("periods must be greater than zero".to_string()),
            Err(e) => errors.push(e.to_string()),
        }
        ValidationReport::from_errors(errors)
    }

    fn compute(&self, inputs: &CalculatorInputs) -> CalcResult<f64> {
        Ok(cagr(
            inputs.get_f64("beginning_value")?,
            inputs.get_f64("ending_value")?,
            inputs.get_f64("periods")?,
        ))
    }

    fn analyze(&self, result: f64, _inputs: &CalculatorInputs) -> Analysis {
        let pct = result * 100.0;
        let (risk, recommendation) = if result < 0.0 {
            (
                RiskLevel::High,
                format!("Growth of {pct:.2}% per period; the value is shrinking."),
            )
        } else if result < 0.10 {
            (
                RiskLevel::Low,
                format!("Growth of {pct:.2}% per period, a steady compounding rate."),
            )
        } else if result < 0.25 {
            (
                RiskLevel::Medium,
                format!("Growth of {pct:.2}% per period; strong but verify it is sustainable."),
            )
        } else {
            (
                RiskLevel::High,
                format!(
                    "Growth of {pct:.2}% per period; rates this high rarely persist, plan conservatively."
                ),
            )
        };
        Analysis { recommendation, risk }
    }
}
