//! The contract every catalog calculator implements.

use crate::error::{CalcError, CalcResult};
use crate::inputs::CalculatorInputs;
use fincalc_types::{Analysis, CalculatorDescriptor, Outputs, ValidationReport};
use tracing::debug;

/// A named, pure input → output transformation plus validation and textual
/// analysis.
///
/// Implementations are stateless and thread-safe; every call is an
/// independent request/response with no suspension points, so results are
/// deterministic for fixed inputs.
///
/// Implementors supply the metadata accessors, `validate_inputs`, the pure
/// formula in `compute`, and the threshold classification in `analyze`;
/// `calculate` and `validate` are provided.
pub trait Calculator: Send + Sync {
    /// Unique identifier, the registry key.
    fn id(&self) -> &str;

    /// Human-readable display name.
    fn name(&self) -> &str;

    /// One-sentence summary for catalog listings.
    fn description(&self) -> &str;

    /// Field-level range checks and cross-field business rules. Collects
    /// every violation rather than stopping at the first.
    fn validate_inputs(&self, inputs: &CalculatorInputs) -> ValidationReport;

    /// The pure formula. Only called with inputs that passed
    /// `validate_inputs`; degenerate cases the formula can name (such as a
    /// zero denominator) should fail with `CalcError::Domain`. Overflow to
    /// a non-finite value is caught by `calculate`.
    fn compute(&self, inputs: &CalculatorInputs) -> CalcResult<f64>;

    /// Derive the recommendation text and risk bucket from the result and
    /// the original inputs.
    fn analyze(&self, result: f64, inputs: &CalculatorInputs) -> Analysis;

    /// Static metadata for catalog views.
    fn descriptor(&self) -> CalculatorDescriptor {
        CalculatorDescriptor {
            id: self.id().to_string(),
            name: self.name().to_string(),
            description: self.description().to_string(),
        }
    }

    /// Convenience boolean view of `validate_inputs`.
    fn validate(&self, inputs: &CalculatorInputs) -> bool {
        self.validate_inputs(inputs).is_valid
    }

    /// Run the full pipeline: validate, compute, analyze.
    ///
    /// Invalid inputs yield `CalcError::Validation` carrying every
    /// violation message; there is no partial result. A formula that
    /// overflows to `inf` or `NaN` yields `CalcError::Domain`, so every
    /// `Ok` carries a finite number.
    fn calculate(&self, inputs: &CalculatorInputs) -> CalcResult<Outputs> {
        let report = self.validate_inputs(inputs);
        if !report.is_valid {
            debug!(calculator = self.id(), violations = report.errors.len(), "inputs rejected");
            return Err(CalcError::Validation { errors: report.errors });
        }
        let result = self.compute(inputs)?;
        if !result.is_finite() {
            debug!(calculator = self.id(), "formula produced a non-finite result");
            return Err(CalcError::domain("formula produced a non-finite result"));
        }
        let analysis = self.analyze(result, inputs);
        Ok(Outputs { result, analysis })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fincalc_types::{CalcValue, RiskLevel};
    use std::collections::HashMap;

    struct Doubler;

    impl Calculator for Doubler {
        fn id(&self) -> &str {
            "doubler"
        }
        fn name(&self) -> &str {
            "Doubler"
        }
        fn description(&self) -> &str {
            "Doubles a non-negative value"
        }
        fn validate_inputs(&self, inputs: &CalculatorInputs) -> ValidationReport {
            let mut errors = Vec::new();
            match inputs.get_f64("value") {
                Ok(v) if v >= 0.0 => {}
                Ok(_) => errors.push("value must be non-negative".to_string()),
                Err(e) => errors.push(e.to_string()),
            }
            ValidationReport::from_errors(errors)
        }
        fn compute(&self, inputs: &CalculatorInputs) -> CalcResult<f64> {
            Ok(inputs.get_f64("value")? * 2.0)
        }
        fn analyze(&self, result: f64, _inputs: &CalculatorInputs) -> Analysis {
            Analysis { recommendation: format!("doubled to {result}"), risk: RiskLevel::Low }
        }
    }

    fn inputs_of(map: &HashMap<String, CalcValue>) -> CalculatorInputs<'_> {
        CalculatorInputs::new(map)
    }

    #[test]
    fn calculate_runs_validation_first() {
        let map = HashMap::from([("value".to_string(), CalcValue::Float(-1.0))]);
        let err = Doubler.calculate(&inputs_of(&map)).unwrap_err();
        assert_eq!(
            err,
            CalcError::Validation { errors: vec!["value must be non-negative".to_string()] }
        );
    }

    #[test]
    fn valid_inputs_flow_through_compute_and_analyze() {
        let map = HashMap::from([("value".to_string(), CalcValue::Float(21.0))]);
        let outputs = Doubler.calculate(&inputs_of(&map)).unwrap();
        assert_eq!(outputs.result, 42.0);
        assert_eq!(outputs.analysis.risk, RiskLevel::Low);
    }

    #[test]
    fn overflowing_result_is_a_domain_error() {
        // f64::MAX doubles to infinity; calculate must refuse to return it.
        let map = HashMap::from([("value".to_string(), CalcValue::Float(f64::MAX))]);
        let inputs = inputs_of(&map);
        assert!(Doubler.validate(&inputs));
        let err = Doubler.calculate(&inputs).unwrap_err();
        assert_eq!(err.category(), "domain");
    }

    #[test]
    fn validate_agrees_with_calculate() {
        let good = HashMap::from([("value".to_string(), CalcValue::Float(1.0))]);
        let bad = HashMap::from([("value".to_string(), CalcValue::Boolean(true))]);
        assert!(Doubler.validate(&inputs_of(&good)));
        assert!(Doubler.calculate(&inputs_of(&good)).is_ok());
        assert!(!Doubler.validate(&inputs_of(&bad)));
        assert!(Doubler.calculate(&inputs_of(&bad)).is_err());
    }
}
