//! Present value of a future lump sum.
//!
//! PV = FV / (1 + r)^n

use fincalc_core::{
    Analysis, CalcResult, Calculator, CalculatorInputs, RiskLevel, ValidationReport,
};

#[derive(Debug, Default)]
pub struct PresentValueCalculator;

impl Calculator for PresentValueCalculator {
    fn id(&self) -> &str {
        "present-value"
    }

    fn name(&self) -> &str {
        "Present Value Calculator"
    }

    fn description(&self) -> &str {
        "Discounts a future amount back to today at a fixed rate"
    }

    fn validate_inputs(&self, inputs: &CalculatorInputs) -> ValidationReport {
        let mut errors = Vec::new();
        match inputs.get_f64("future_value") {
            Ok(v) if v > 0.0 => {}
            Ok(_) => errors.push("future_value must be greater than zero".to_string()),
            Err(e) => errors.push(e.to_string()),
        }
        match inputs.get_f64("discount_rate") {
            Ok(r) if (0.0..=1.0).contains(&r) => {}
            Ok(_) => errors.push(
                "discount_rate must be a fraction between 0 and 1 (0.05 for 5%)".to_string(),
            ),
            Err(e) => errors.push(e.to_string()),
        }
        match inputs.get_f64("periods") {
            Ok(n) if n > 0.0 => {}
            Ok(_) => errors.push("periods must be greater than zero".to_string()),
            Err(e) => errors.push(e.to_string()),
        }
        ValidationReport::from_errors(errors)
    }

    fn compute(&self, inputs: &CalculatorInputs) -> CalcResult<f64> {
        let fv = inputs.get_f64("future_value")?;
        let r = inputs.get_f64("discount_rate")?;
        let n = inputs.get_f64("periods")?;
        Ok(fv / (1.0 + r).powf(n))
    }

    fn analyze(&self, result: f64, inputs: &CalculatorInputs) -> Analysis {
        let fv = inputs.get_f64("future_value").unwrap_or(result);
        let haircut = 1.0 - result / fv;
        let risk = if haircut < 0.25 {
            RiskLevel::Low
        } else if haircut < 0.60 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        };
        Analysis {
            recommendation: format!(
                "${fv:.2} in the future is worth ${result:.2} today, a {:.1}% discount; the further out or higher the rate, the less reliable the estimate.",
                haircut * 100.0
            ),
            risk,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fincalc_core::CalcValue;
    use std::collections::HashMap;

    #[test]
    fn discounting_inverts_compounding() {
        let map = HashMap::from([
            ("future_value".to_string(), CalcValue::Float(1000.0)),
            ("discount_rate".to_string(), CalcValue::Float(0.05)),
            ("periods".to_string(), CalcValue::Float(10.0)),
        ]);
        let pv = PresentValueCalculator.compute(&CalculatorInputs::new(&map)).unwrap();
        assert!((pv * 1.05_f64.powi(10) - 1000.0).abs() < 1e-9);
    }
}
