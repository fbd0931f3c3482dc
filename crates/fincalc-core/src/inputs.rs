//! Typed access to calculator input fields.
//!
//! Callers hand over a flat map of named `CalcValue`s (one per form field);
//! `CalculatorInputs` borrows that map and exposes accessors that produce a
//! structured error naming the field and the expected type instead of a
//! silent fallback.

use crate::error::{CalcError, CalcResult};
use chrono::{DateTime, Utc};
use fincalc_types::CalcValue;
use std::collections::HashMap;

/// A safe, borrowed view over one invocation's input fields.
#[derive(Debug, Clone, Copy)]
pub struct CalculatorInputs<'a> {
    fields: &'a HashMap<String, CalcValue>,
}

impl<'a> CalculatorInputs<'a> {
    /// Creates a new `CalculatorInputs` over the caller's field map.
    #[must_use]
    pub const fn new(fields: &'a HashMap<String, CalcValue>) -> Self {
        Self { fields }
    }

    /// Gets a floating-point number, accepting `Integer` values as well.
    pub fn get_f64(&self, field: &str) -> CalcResult<f64> {
        match self.fields.get(field) {
            Some(CalcValue::Float(f)) => Ok(*f),
            Some(CalcValue::Integer(i)) => Ok(*i as f64),
            Some(other) => Err(CalcError::invalid_field_type(
                field,
                "number",
                other.type_name(),
            )),
            None => Err(CalcError::missing_field(field)),
        }
    }

    /// Gets a floating-point number if the field is present.
    pub fn get_optional_f64(&self, field: &str) -> CalcResult<Option<f64>> {
        match self.fields.get(field) {
            None | Some(CalcValue::Null) => Ok(None),
            Some(_) => self.get_f64(field).map(Some),
        }
    }

    /// Gets an integer value.
    pub fn get_i64(&self, field: &str) -> CalcResult<i64> {
        match self.fields.get(field) {
            Some(CalcValue::Integer(i)) => Ok(*i),
            Some(other) => Err(CalcError::invalid_field_type(
                field,
                "integer",
                other.type_name(),
            )),
            None => Err(CalcError::missing_field(field)),
        }
    }

    /// Gets a string value.
    pub fn get_string(&self, field: &str) -> CalcResult<String> {
        match self.fields.get(field) {
            Some(CalcValue::String(s)) => Ok(s.clone()),
            Some(other) => Err(CalcError::invalid_field_type(
                field,
                "string",
                other.type_name(),
            )),
            None => Err(CalcError::missing_field(field)),
        }
    }

    /// Gets a boolean value.
    pub fn get_bool(&self, field: &str) -> CalcResult<bool> {
        match self.fields.get(field) {
            Some(CalcValue::Boolean(b)) => Ok(*b),
            Some(other) => Err(CalcError::invalid_field_type(
                field,
                "boolean",
                other.type_name(),
            )),
            None => Err(CalcError::missing_field(field)),
        }
    }

    /// Gets a boolean if the field is present.
    pub fn get_optional_bool(&self, field: &str) -> CalcResult<Option<bool>> {
        match self.fields.get(field) {
            None | Some(CalcValue::Null) => Ok(None),
            Some(_) => self.get_bool(field).map(Some),
        }
    }

    /// Gets an array value.
    pub fn get_array(&self, field: &str) -> CalcResult<&'a Vec<CalcValue>> {
        match self.fields.get(field) {
            Some(CalcValue::Array(arr)) => Ok(arr),
            Some(other) => Err(CalcError::invalid_field_type(
                field,
                "array",
                other.type_name(),
            )),
            None => Err(CalcError::missing_field(field)),
        }
    }

    /// Gets an array if the field is present.
    pub fn get_optional_array(&self, field: &str) -> CalcResult<Option<&'a Vec<CalcValue>>> {
        match self.fields.get(field) {
            None | Some(CalcValue::Null) => Ok(None),
            Some(_) => self.get_array(field).map(Some),
        }
    }

    /// Gets a UTC date, accepting either a `Date` value or an RFC 3339
    /// string (the shape form payloads arrive in).
    pub fn get_date(&self, field: &str) -> CalcResult<DateTime<Utc>> {
        match self.fields.get(field) {
            Some(CalcValue::Date(dt)) => Ok(*dt),
            Some(CalcValue::String(s)) => s.parse::<DateTime<Utc>>().map_err(|_| {
                CalcError::invalid_field_type(field, "RFC 3339 date", format!("string '{s}'"))
            }),
            Some(other) => Err(CalcError::invalid_field_type(
                field,
                "date",
                other.type_name(),
            )),
            None => Err(CalcError::missing_field(field)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, CalcValue)]) -> HashMap<String, CalcValue> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), v.clone())).collect()
    }

    #[test]
    fn get_f64_accepts_integers() {
        let map = fields(&[("price", CalcValue::Integer(30000))]);
        let inputs = CalculatorInputs::new(&map);
        assert_eq!(inputs.get_f64("price").unwrap(), 30000.0);
    }

    #[test]
    fn missing_field_is_reported_by_name() {
        let map = fields(&[]);
        let inputs = CalculatorInputs::new(&map);
        assert_eq!(
            inputs.get_f64("rate"),
            Err(CalcError::missing_field("rate"))
        );
    }

    #[test]
    fn type_mismatch_names_both_types() {
        let map = fields(&[("rate", CalcValue::String("six".into()))]);
        let inputs = CalculatorInputs::new(&map);
        let err = inputs.get_f64("rate").unwrap_err();
        assert_eq!(err.to_string(), "field 'rate' expected number, got string");
    }

    #[test]
    fn optional_accessors_treat_null_as_absent() {
        let map = fields(&[("ceiling", CalcValue::Null)]);
        let inputs = CalculatorInputs::new(&map);
        assert_eq!(inputs.get_optional_bool("ceiling").unwrap(), None);
        assert_eq!(inputs.get_optional_f64("openings").unwrap(), None);
    }

    #[test]
    fn get_date_parses_rfc3339_strings() {
        let map = fields(&[
            ("start", CalcValue::String("2024-01-01T00:00:00Z".into())),
            ("bogus", CalcValue::String("last tuesday".into())),
        ]);
        let inputs = CalculatorInputs::new(&map);
        assert_eq!(inputs.get_date("start").unwrap().to_rfc3339(), "2024-01-01T00:00:00+00:00");
        assert!(inputs.get_date("bogus").is_err());
    }
}
