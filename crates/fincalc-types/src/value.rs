use anyhow::{Result, anyhow};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::convert::TryFrom;
use std::fmt;

/// A tagged input value supplied to a calculator.
///
/// Calculator inputs arrive from form-like callers as loosely shaped data;
/// `CalcValue` replaces untyped bags with an explicit variant per supported
/// shape so accessors can report precise type mismatches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CalcValue {
    /// String value
    String(String),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// Boolean value
    Boolean(bool),
    /// Array of `CalcValue`s
    Array(Vec<CalcValue>),
    /// Object/map of string keys to `CalcValue`s
    Object(HashMap<String, CalcValue>),
    /// UTC date/time value
    Date(DateTime<Utc>),
    /// Null value
    Null,
}

impl CalcValue {
    /// Numeric view of this value. Returns `None` when the variant is not
    /// `Integer` or `Float`.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get the type name as a string, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Boolean(_) => "boolean",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
            Self::Date(_) => "date",
            Self::Null => "null",
        }
    }
}

impl fmt::Display for CalcValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(fl) => write!(f, "{fl}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Array(arr) => {
                write!(f, "[")?;
                for (i, item) in arr.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Object(obj) => {
                write!(f, "{{")?;
                let mut first = true;
                for (key, value) in obj {
                    if !first {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                    first = false;
                }
                write!(f, "}}")
            }
            Self::Date(dt) => write!(f, "{}", dt.to_rfc3339()),
            Self::Null => write!(f, "null"),
        }
    }
}

// -------------------------------------------------------------------------------------------------
// Conversions between `CalcValue` and `serde_json::Value`, so the UI layer can
// hand over form payloads without hand-written mapping code.
// -------------------------------------------------------------------------------------------------

impl From<CalcValue> for serde_json::Value {
    fn from(value: CalcValue) -> Self {
        match value {
            CalcValue::String(s) => Self::String(s),
            CalcValue::Integer(i) => Self::Number(serde_json::Number::from(i)),
            CalcValue::Float(f) => serde_json::Number::from_f64(f).map_or(Self::Null, Self::Number),
            CalcValue::Boolean(b) => Self::Bool(b),
            CalcValue::Array(arr) => {
                Self::Array(arr.into_iter().map(std::convert::Into::into).collect())
            }
            CalcValue::Object(map) => {
                let json_map = map
                    .into_iter()
                    .map(|(k, v)| (k, v.into()))
                    .collect::<serde_json::Map<String, Self>>();
                Self::Object(json_map)
            }
            CalcValue::Date(dt) => Self::String(dt.to_rfc3339()),
            CalcValue::Null => Self::Null,
        }
    }
}

impl TryFrom<&serde_json::Value> for CalcValue {
    type Error = anyhow::Error;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        Ok(match value {
            serde_json::Value::String(s) => Self::String(s.clone()),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Integer(i)
                } else if let Some(f) = n.as_f64() {
                    Self::Float(f)
                } else {
                    return Err(anyhow!("Unsupported number value: {}", n));
                }
            }
            serde_json::Value::Bool(b) => Self::Boolean(*b),
            serde_json::Value::Array(arr) => {
                let inner = arr.iter().map(Self::try_from).collect::<Result<Vec<_>, _>>()?;
                Self::Array(inner)
            }
            serde_json::Value::Object(map) => {
                let mut inner = HashMap::new();
                for (k, v) in map {
                    inner.insert(k.clone(), Self::try_from(v)?);
                }
                Self::Object(inner)
            }
            serde_json::Value::Null => Self::Null,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_f64_covers_numeric_variants_only() {
        assert_eq!(CalcValue::Integer(3).as_f64(), Some(3.0));
        assert_eq!(CalcValue::Float(2.5).as_f64(), Some(2.5));
        assert_eq!(CalcValue::Boolean(true).as_f64(), None);
        assert_eq!(CalcValue::Null.as_f64(), None);
    }

    #[test]
    fn json_round_trip_preserves_structure() {
        let json = serde_json::json!({
            "price": 30000,
            "rate": 6.5,
            "flows": [{"amount": -100.0}],
            "include_ceiling": false,
        });
        let value = CalcValue::try_from(&json).unwrap();
        let back: serde_json::Value = value.into();
        assert_eq!(back, json);
    }

    #[test]
    fn date_serializes_to_rfc3339_string() {
        let dt: DateTime<Utc> = "2024-01-01T00:00:00Z".parse().unwrap();
        let json: serde_json::Value = CalcValue::Date(dt).into();
        assert_eq!(json, serde_json::json!("2024-01-01T00:00:00+00:00"));
    }
}
