//! Drywall coverage estimator.
//!
//! Net area = 2 * (L + W) * H, plus the ceiling L * W when requested, minus
//! the combined area of doors and windows. Clamped at zero so oversized
//! opening entries cannot go negative.

use fincalc_core::{
    Analysis, CalcResult, Calculator, CalculatorInputs, RiskLevel, ValidationReport,
};

/// Area of a standard 4x8 drywall sheet, square feet.
const SHEET_AREA_SQFT: f64 = 32.0;

#[derive(Debug, Default)]
pub struct DrywallAreaCalculator;

fn net_area(
    length: f64,
    width: f64,
    height: f64,
    include_ceiling: bool,
    openings_area: f64,
) -> f64 {
    let mut area = 2.0 * (length + width) * height;
    if include_ceiling {
        area += length * width;
    }
    (area - openings_area).max(0.0)
}

impl Calculator for DrywallAreaCalculator {
    fn id(&self) -> &str {
        "drywall-area"
    }

    fn name(&self) -> &str {
        "Drywall Calculator"
    }

    fn description(&self) -> &str {
        "Square footage of drywall needed for a room"
    }

    fn validate_inputs(&self, inputs: &CalculatorInputs) -> ValidationReport {
        let mut errors = Vec::new();
        for field in ["length", "width", "height"] {
            match inputs.get_f64(field) {
                Ok(v) if v > 0.0 => {}
                Ok(_) => errors.push(format!("{field} must be greater than zero")),
                Err(e) => errors.push(e.to_string()),
            }
        }
        match inputs.get_optional_f64("openings_area") {
            // NaN also fails `a >= 0.0`
            Ok(Some(a)) if !(a >= 0.0) => {
                errors.push("openings_area cannot be negative".to_string());
            }
            Ok(_) => {}
            Err(e) => errors.push(e.to_string()),
        }
        if let Err(e) = inputs.get_optional_bool("include_ceiling") {
            errors.push(e.to_string());
        }
        ValidationReport::from_errors(errors)
    }

    fn compute(&self, inputs: &CalculatorInputs) -> CalcResult<f64> {
        let length = inputs.get_f64("length")?;
        let width = inputs.get_f64("width")?;
        let height = inputs.get_f64("height")?;
        let include_ceiling = inputs.get_optional_bool("include_ceiling")?.unwrap_or(false);
        let openings = inputs.get_optional_f64("openings_area")?.unwrap_or(0.0);
        Ok(net_area(length, width, height, include_ceiling, openings))
    }

    fn analyze(&self, result: f64, _inputs: &CalculatorInputs) -> Analysis {
        let sheets = (result / SHEET_AREA_SQFT).ceil();
        let risk = if result < 500.0 {
            RiskLevel::Low
        } else if result < 2000.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        };
        Analysis {
            recommendation: format!(
                "You need about {result:.0} sq ft of drywall ({sheets:.0} standard 4x8 sheets); add roughly 10% for cuts and waste."
            ),
            risk,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walls_only() {
        assert_eq!(net_area(10.0, 12.0, 8.0, false, 0.0), 352.0);
    }

    #[test]
    fn ceiling_adds_floor_plan_area() {
        assert_eq!(net_area(10.0, 12.0, 8.0, true, 0.0), 352.0 + 120.0);
    }

    #[test]
    fn openings_never_drive_area_negative() {
        assert_eq!(net_area(2.0, 2.0, 2.0, false, 1000.0), 0.0);
    }
}
