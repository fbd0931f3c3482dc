//! Compound growth / future value.
//!
//! FV = P * (1 + r/m)^(m*n)
//!
//! `compounds_per_year` defaults to annual compounding when omitted.

use fincalc_core::{
    Analysis, CalcResult, Calculator, CalculatorInputs, RiskLevel, ValidationReport,
};

#[derive(Debug, Default)]
pub struct CompoundGrowthCalculator;

fn future_value(principal: f64, annual_rate: f64, years: f64, compounds_per_year: f64) -> f64 {
    principal * (1.0 + annual_rate / compounds_per_year).powf(compounds_per_year * years)
}

impl Calculator for CompoundGrowthCalculator {
    fn id(&self) -> &str {
        "compound-growth"
    }

    fn name(&self) -> &str {
        "Compound Growth Calculator"
    }

    fn description(&self) -> &str {
        "Future value of a principal compounding at a fixed annual rate"
    }

    fn validate_inputs(&self, inputs: &CalculatorInputs) -> ValidationReport {
        let mut errors = Vec::new();
        match inputs.get_f64("principal") {
            Ok(p) if p > 0.0 => {}
            Ok(_) => errors.push("principal must be greater than zero".to_string()),
            Err(e) => errors.push(e.to_string()),
        }
        match inputs.get_f64("annual_rate") {
            Ok(r) if (0.0..=1.0).contains(&r) => {}
            Ok(_) => errors.push(
                "annual_rate must be a fraction between 0 and 1 (0.07 for 7%)".to_string(),
            ),
            Err(e) => errors.push(e.to_string()),
        }
        match inputs.get_f64("years") {
            Ok(y) if y > 0.0 => {}
            Ok(_) => errors.push("years must be greater than zero".to_string()),
            Err(e) => errors.push(e.to_string()),
        }
        match inputs.get_optional_f64("compounds_per_year") {
            // NaN also fails `m >= 1.0`
            Ok(Some(m)) if !(m >= 1.0) => {
                errors.push("compounds_per_year must be at least 1".to_string());
            }
            Ok(_) => {}
            Err(e) => errors.push(e.to_string()),
        }
        ValidationReport::from_errors(errors)
    }

    fn compute(&self, inputs: &CalculatorInputs) -> CalcResult<f64> {
        let principal = inputs.get_f64("principal")?;
        let rate = inputs.get_f64("annual_rate")?;
        let years = inputs.get_f64("years")?;
        let m = inputs.get_optional_f64("compounds_per_year")?.unwrap_or(1.0);
        Ok(future_value(principal, rate, years, m))
    }

    fn analyze(&self, result: f64, inputs: &CalculatorInputs) -> Analysis {
        let principal = inputs.get_f64("principal").unwrap_or(result);
        let multiple = result / principal;
        let risk = if multiple < 2.0 {
            RiskLevel::Low
        } else if multiple < 5.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        };
        Analysis {
            recommendation: format!(
                "The principal grows to ${result:.2}, a {multiple:.2}x multiple; projections past a few multiples are sensitive to the assumed rate."
            ),
            risk,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annual_compounding() {
        // 1000 at 7% for 10 years.
        let fv = future_value(1000.0, 0.07, 10.0, 1.0);
        assert!((fv - 1967.151_357).abs() < 1e-3);
    }

    #[test]
    fn monthly_beats_annual_compounding() {
        let annual = future_value(1000.0, 0.06, 5.0, 1.0);
        let monthly = future_value(1000.0, 0.06, 5.0, 12.0);
        assert!(monthly > annual);
    }
}
