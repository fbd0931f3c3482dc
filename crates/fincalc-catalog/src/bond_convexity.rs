//! Bond convexity from discounted cash flows.
//!
//! With periodic yield i = y/m over N = years * m periods,
//!
//! convexity = sum(CF_t * t * (t+1) / (1+i)^(t+2)) / (P * m^2)
//!
//! expressed in years^2. `payments_per_year` defaults to semiannual.

use fincalc_core::{
    Analysis, CalcError, CalcResult, Calculator, CalculatorInputs, RiskLevel, ValidationReport,
};

#[derive(Debug, Default)]
pub struct BondConvexityCalculator;

fn convexity(face: f64, coupon_rate: f64, yield_rate: f64, periods: u32, per_year: f64) -> f64 {
    let i = yield_rate / per_year;
    let coupon = face * coupon_rate / per_year;

    let mut price = 0.0;
    let mut weighted = 0.0;
    for t in 1..=periods {
        let mut cash_flow = coupon;
        if t == periods {
            cash_flow += face;
        }
        let tf = f64::from(t);
        price += cash_flow / (1.0 + i).powf(tf);
        weighted += cash_flow * tf * (tf + 1.0) / (1.0 + i).powf(tf + 2.0);
    }
    weighted / (price * per_year * per_year)
}

impl Calculator for BondConvexityCalculator {
    fn id(&self) -> &str {
        "bond-convexity"
    }

    fn name(&self) -> &str {
        "Bond Convexity Calculator"
    }

    fn description(&self) -> &str {
        "Convexity of a fixed-coupon bond's price/yield curve"
    }

    fn validate_inputs(&self, inputs: &CalculatorInputs) -> ValidationReport {
        let mut errors = Vec::new();
        match inputs.get_f64("face_value") {
            Ok(v) if v > 0.0 => {}
            Ok(_) => errors.push("face_value must be greater than zero".to_string()),
            Err(e) => errors.push(e.to_string()),
        }
        match inputs.get_f64("coupon_rate") {
            Ok(c) if (0.0..=1.0).contains(&c) => {}
            Ok(_) => {
                errors.push("coupon_rate must be a fraction between 0 and 1".to_string());
            }
            Err(e) => errors.push(e.to_string()),
        }
        match inputs.get_f64("yield_rate") {
            Ok(y) if (0.0..=1.0).contains(&y) => {}
            Ok(_) => {
                errors.push("yield_rate must be a fraction between 0 and 1".to_string());
            }
            Err(e) => errors.push(e.to_string()),
        }
        match inputs.get_f64("years_to_maturity") {
            Ok(y) if y > 0.0 && y <= 100.0 => {}
            Ok(_) => errors.push("years_to_maturity must be between 0 and 100".to_string()),
            Err(e) => errors.push(e.to_string()),
        }
        match inputs.get_optional_f64("payments_per_year") {
            // NaN also fails `m >= 1.0`
            Ok(Some(m)) if !(m >= 1.0) => {
                errors.push("payments_per_year must be at least 1".to_string());
            }
            Ok(_) => {}
            Err(e) => errors.push(e.to_string()),
        }
        ValidationReport::from_errors(errors)
    }

    fn compute(&self, inputs: &CalculatorInputs) -> CalcResult<f64> {
        let face = inputs.get_f64("face_value")?;
        let coupon_rate = inputs.get_f64("coupon_rate")?;
        let yield_rate = inputs.get_f64("yield_rate")?;
        let years = inputs.get_f64("years_to_maturity")?;
        let per_year = inputs.get_optional_f64("payments_per_year")?.unwrap_or(2.0);

        let periods = (years * per_year).round();
        if periods < 1.0 {
            return Err(CalcError::domain(
                "maturity is shorter than one payment period",
            ));
        }
        Ok(convexity(
            face,
            coupon_rate,
            yield_rate,
            periods as u32,
            per_year,
        ))
    }

    fn analyze(&self, result: f64, _inputs: &CalculatorInputs) -> Analysis {
        let risk = if result < 20.0 {
            RiskLevel::Low
        } else if result < 80.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        };
        Analysis {
            recommendation: format!(
                "Convexity of {result:.2} years squared; {}",
                match risk {
                    RiskLevel::Low => "price response to yield moves is close to linear.",
                    RiskLevel::Medium =>
                        "duration alone will misestimate price moves for large yield shifts.",
                    RiskLevel::High =>
                        "the bond is highly sensitive to rate changes, size positions accordingly.",
                }
            ),
            risk,
        }
    }
}
