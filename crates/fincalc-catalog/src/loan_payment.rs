//! Amortized loan payment calculator (vehicle financing).
//!
//! PMT = P * r * (1+r)^n / ((1+r)^n - 1)
//!
//! where P is the financed principal (price minus down payment), r the
//! monthly rate, and n the number of monthly payments. A zero-rate loan
//! degenerates to P / n. The payment is rounded to cents.

use fincalc_core::{
    Analysis, CalcError, CalcResult, Calculator, CalculatorInputs, RiskLevel, ValidationReport,
};

#[derive(Debug, Default)]
pub struct LoanPaymentCalculator;

/// Monthly payment for a fully amortizing loan. `annual_rate_pct` is a
/// percentage (6 means 6% APR).
fn monthly_payment(principal: f64, annual_rate_pct: f64, months: u32) -> f64 {
    let n = f64::from(months);
    let r = annual_rate_pct / 100.0 / 12.0;
    let raw = if r == 0.0 {
        principal / n
    } else {
        let growth = (1.0 + r).powf(n);
        principal * r * growth / (growth - 1.0)
    };
    (raw * 100.0).round() / 100.0
}

impl Calculator for LoanPaymentCalculator {
    fn id(&self) -> &str {
        "loan-payment"
    }

    fn name(&self) -> &str {
        "Car Loan Payment Calculator"
    }

    fn description(&self) -> &str {
        "Monthly payment for a fully amortizing vehicle loan"
    }

    fn validate_inputs(&self, inputs: &CalculatorInputs) -> ValidationReport {
        let mut errors = Vec::new();

        let price = match inputs.get_f64("vehicle_price") {
            Ok(p) if p > 0.0 => Some(p),
            Ok(_) => {
                errors.push("vehicle_price must be greater than zero".to_string());
                None
            }
            Err(e) => {
                errors.push(e.to_string());
                None
            }
        };

        match inputs.get_f64("down_payment") {
            // NaN also fails `d >= 0.0`
            Ok(d) if !(d >= 0.0) => errors.push("down_payment cannot be negative".to_string()),
            Ok(d) => {
                // Cross-field rule: something must be left to finance.
                if let Some(p) = price {
                    if d >= p {
                        errors.push(
                            "down_payment must be less than vehicle_price".to_string(),
                        );
                    }
                }
            }
            Err(e) => errors.push(e.to_string()),
        }

        match inputs.get_f64("interest_rate") {
            Ok(r) if !(0.0..=100.0).contains(&r) => {
                errors.push("interest_rate must be between 0 and 100 percent".to_string());
            }
            Ok(_) => {}
            Err(e) => errors.push(e.to_string()),
        }

        match inputs.get_f64("loan_term_years") {
            Ok(y) if !(y > 0.0 && y <= 50.0) => {
                errors.push("loan_term_years must be between 0 and 50".to_string());
            }
            Ok(_) => {}
            Err(e) => errors.push(e.to_string()),
        }

        ValidationReport::from_errors(errors)
    }

    fn compute(&self, inputs: &CalculatorInputs) -> CalcResult<f64> {
        let price = inputs.get_f64("vehicle_price")?;
        let down = inputs.get_f64("down_payment")?;
        let rate = inputs.get_f64("interest_rate")?;
        let years = inputs.get_f64("loan_term_years")?;

        let months = (years * 12.0).round();
        if months < 1.0 {
            return Err(CalcError::domain("loan term is shorter than one month"));
        }
        Ok(monthly_payment(price - down, rate, months as u32))
    }

    fn analyze(&self, result: f64, inputs: &CalculatorInputs) -> Analysis {
        let rate = inputs.get_f64("interest_rate").unwrap_or(0.0);
        let risk = if rate < 5.0 {
            RiskLevel::Low
        } else if rate < 10.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        };
        let recommendation = match risk {
            RiskLevel::Low => format!(
                "Monthly payment of ${result:.2} at a competitive rate; the financing cost is modest."
            ),
            RiskLevel::Medium => format!(
                "Monthly payment of ${result:.2}; consider a larger down payment or shopping for a lower rate."
            ),
            RiskLevel::High => format!(
                "Monthly payment of ${result:.2} at a high rate; refinancing or delaying the purchase may save significantly."
            ),
        };
        Analysis { recommendation, risk }
    }
}
