use serde::{Deserialize, Serialize};
use std::fmt;

/// Static metadata describing a registered calculator. Created once at
/// bootstrap and immutable thereafter; catalog/browse views render these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorDescriptor {
    /// Unique identifier, e.g. `"loan-payment"`. Registry key.
    pub id: String,
    /// Human-readable display name.
    pub name: String,
    /// One-sentence summary shown in catalog listings.
    pub description: String,
}

/// Coarse three-bucket classification derived from a calculator's numeric
/// result via per-calculator thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

/// Human-readable interpretation of a result. Not used in further
/// computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub recommendation: String,
    pub risk: RiskLevel,
}

/// The complete output of one `calculate` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outputs {
    /// The numeric result of the calculator's formula.
    pub result: f64,
    pub analysis: Analysis,
}

/// The outcome of validating one set of inputs. Ephemeral, produced and
/// consumed within a single `calculate` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    /// A report with no violations.
    #[must_use]
    pub const fn valid() -> Self {
        Self { is_valid: true, errors: Vec::new() }
    }

    /// Build a report from collected violation messages; an empty list means
    /// the inputs are valid.
    #[must_use]
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self { is_valid: errors.is_empty(), errors }
    }
}
