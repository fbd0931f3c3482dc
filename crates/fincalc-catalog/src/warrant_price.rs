//! Warrant / call option pricing via Black-Scholes.
//!
//! C = S * N(d1) - K * e^(-rT) * N(d2)
//! d1 = (ln(S/K) + (r + sigma^2/2) * T) / (sigma * sqrt(T))
//! d2 = d1 - sigma * sqrt(T)
//!
//! The standard normal CDF uses the Abramowitz & Stegun 7.1.26 polynomial
//! approximation (max error 1.5e-7), which is more than enough precision for
//! a pricing estimate.

use fincalc_core::{
    Analysis, CalcResult, Calculator, CalculatorInputs, RiskLevel, ValidationReport,
};

#[derive(Debug, Default)]
pub struct WarrantPriceCalculator;

/// Standard normal CDF, Abramowitz & Stegun 7.1.26.
fn norm_cdf(x: f64) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let z = x.abs() / std::f64::consts::SQRT_2;
    let t = 1.0 / (1.0 + 0.327_591_1 * z);
    let poly = ((((1.061_405_429 * t - 1.453_152_027) * t + 1.421_413_741) * t - 0.284_496_736)
        * t
        + 0.254_829_592)
        * t;
    let erf = 1.0 - poly * (-z * z).exp();
    0.5 * (1.0 + sign * erf)
}

fn black_scholes_call(spot: f64, strike: f64, rate: f64, volatility: f64, time: f64) -> f64 {
    let sqrt_t = time.sqrt();
    let d1 = ((spot / strike).ln() + (rate + volatility * volatility / 2.0) * time)
        / (volatility * sqrt_t);
    let d2 = d1 - volatility * sqrt_t;
    spot * norm_cdf(d1) - strike * (-rate * time).exp() * norm_cdf(d2)
}

impl Calculator for WarrantPriceCalculator {
    fn id(&self) -> &str {
        "warrant-price"
    }

    fn name(&self) -> &str {
        "Warrant Pricing Calculator"
    }

    fn description(&self) -> &str {
        "Black-Scholes value of a stock warrant or call option"
    }

    fn validate_inputs(&self, inputs: &CalculatorInputs) -> ValidationReport {
        let mut errors = Vec::new();
        for field in ["spot_price", "strike_price", "time_to_expiry"] {
            match inputs.get_f64(field) {
                Ok(v) if v > 0.0 => {}
                Ok(_) => errors.push(format!("{field} must be greater than zero")),
                Err(e) => errors.push(e.to_string()),
            }
        }
        match inputs.get_f64("volatility") {
            Ok(v) if v > 0.0 && v <= 3.0 => {}
            Ok(_) => errors.push(
                "volatility must be a fraction greater than 0 and at most 3 (0.2 for 20%)"
                    .to_string(),
            ),
            Err(e) => errors.push(e.to_string()),
        }
        match inputs.get_f64("risk_free_rate") {
            Ok(r) if (0.0..=1.0).contains(&r) => {}
            Ok(_) => {
                errors.push("risk_free_rate must be a fraction between 0 and 1".to_string());
            }
            Err(e) => errors.push(e.to_string()),
        }
        ValidationReport::from_errors(errors)
    }

    fn compute(&self, inputs: &CalculatorInputs) -> CalcResult<f64> {
        Ok(black_scholes_call(
            inputs.get_f64("spot_price")?,
            inputs.get_f64("strike_price")?,
            inputs.get_f64("risk_free_rate")?,
            inputs.get_f64("volatility")?,
            inputs.get_f64("time_to_expiry")?,
        ))
    }

    fn analyze(&self, result: f64, inputs: &CalculatorInputs) -> Analysis {
        let volatility = inputs.get_f64("volatility").unwrap_or(0.0);
        let risk = if volatility <= 0.20 {
            RiskLevel::Low
        } else if volatility <= 0.40 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        };
        Analysis {
            recommendation: format!(
                "The warrant is worth about ${result:.2} under Black-Scholes assumptions; at {:.0}% volatility the estimate is {} sensitive to the inputs.",
                volatility * 100.0,
                match risk {
                    RiskLevel::Low => "only mildly",
                    RiskLevel::Medium => "moderately",
                    RiskLevel::High => "highly",
                }
            ),
            risk,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cdf_is_symmetric_around_zero() {
        assert!((norm_cdf(0.0) - 0.5).abs() < 1e-9);
        assert!((norm_cdf(1.96) - 0.975).abs() < 1e-3);
        assert!((norm_cdf(-1.96) + norm_cdf(1.96) - 1.0).abs() < 1e-7);
    }

    #[test]
    fn at_the_money_call_matches_textbook_value() {
        // S=100, K=100, r=5%, sigma=20%, T=1y -> ~10.4506
        let price = black_scholes_call(100.0, 100.0, 0.05, 0.20, 1.0);
        assert!((price - 10.4506).abs() < 1e-3);
    }

    #[test]
    fn deep_in_the_money_approaches_intrinsic_value() {
        let price = black_scholes_call(200.0, 100.0, 0.05, 0.20, 0.5);
        let intrinsic = 200.0 - 100.0 * (-0.05f64 * 0.5).exp();
        assert!((price - intrinsic).abs() < 0.05);
    }
}
