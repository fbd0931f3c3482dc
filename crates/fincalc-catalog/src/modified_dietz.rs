//! Modified Dietz portfolio return.
//!
//! R = (EMV - BMV - CF) / (BMV + sum(w_i * CF_i))
//!
//! where CF is the net external cash flow and each flow is day-weighted by
//! the fraction of the period remaining after it lands:
//! w_i = (CD - D_i) / CD.

use chrono::{DateTime, Utc};
use fincalc_core::{
    Analysis, CalcError, CalcResult, CalcValue, Calculator, CalculatorInputs, RiskLevel,
    ValidationReport,
};

#[derive(Debug, Default)]
pub struct ModifiedDietzCalculator;

struct CashFlow {
    date: DateTime<Utc>,
    amount: f64,
}

/// Parses the optional `cash_flows` array: objects with an `amount` number
/// and a `date` (date value or RFC 3339 string).
fn parse_flows(inputs: &CalculatorInputs) -> CalcResult<Vec<CashFlow>> {
    let Some(raw) = inputs.get_optional_array("cash_flows")? else {
        return Ok(Vec::new());
    };
    let mut flows = Vec::with_capacity(raw.len());
    for (idx, entry) in raw.iter().enumerate() {
        let CalcValue::Object(obj) = entry else {
            return Err(CalcError::invalid_field_type(
                format!("cash_flows[{idx}]"),
                "object",
                entry.type_name(),
            ));
        };
        let amount = obj
            .get("amount")
            .and_then(CalcValue::as_f64)
            .ok_or_else(|| CalcError::missing_field(format!("cash_flows[{idx}].amount")))?;
        let date = match obj.get("date") {
            Some(CalcValue::Date(dt)) => *dt,
            Some(CalcValue::String(s)) => s.parse::<DateTime<Utc>>().map_err(|_| {
                CalcError::invalid_field_type(
                    format!("cash_flows[{idx}].date"),
                    "RFC 3339 date",
                    format!("string '{s}'"),
                )
            })?,
            Some(other) => {
                return Err(CalcError::invalid_field_type(
                    format!("cash_flows[{idx}].date"),
                    "date",
                    other.type_name(),
                ));
            }
            None => {
                return Err(CalcError::missing_field(format!("cash_flows[{idx}].date")));
            }
        };
        flows.push(CashFlow { date, amount });
    }
    Ok(flows)
}

impl Calculator for ModifiedDietzCalculator {
    fn id(&self) -> &str {
        "modified-dietz"
    }

    fn name(&self) -> &str {
        "Modified Dietz Return Calculator"
    }

    fn description(&self) -> &str {
        "Money-weighted portfolio return with day-weighted external cash flows"
    }

    fn validate_inputs(&self, inputs: &CalculatorInputs) -> ValidationReport {
        let mut errors = Vec::new();

        match inputs.get_f64("beginning_value") {
            Ok(v) if v > 0.0 => {}
            Ok(_) => errors.push("beginning_value must be greater than zero".to_string()),
            Err(e) => errors.push(e.to_string()),
        }
        match inputs.get_f64("ending_value") {
            Ok(v) if v >= 0.0 => {}
            Ok(_) => errors.push("ending_value cannot be negative".to_string()),
            Err(e) => errors.push(e.to_string()),
        }

        let period = match (inputs.get_date("period_start"), inputs.get_date("period_end")) {
            (Ok(start), Ok(end)) => {
                if (end - start).num_days() < 1 {
                    errors.push("period_end must be at least one day after period_start".to_string());
                    None
                } else {
                    Some((start, end))
                }
            }
            (start, end) => {
                if let Err(e) = start {
                    errors.push(e.to_string());
                }
                if let Err(e) = end {
                    errors.push(e.to_string());
                }
                None
            }
        };

        match parse_flows(inputs) {
            Ok(flows) => {
                if let Some((start, end)) = period {
                    for flow in &flows {
                        if flow.date < start || flow.date > end {
                            errors.push(format!(
                                "cash flow dated {} falls outside the measurement period",
                                flow.date.to_rfc3339()
                            ));
                        }
                    }
                }
            }
            Err(e) => errors.push(e.to_string()),
        }

        ValidationReport::from_errors(errors)
    }

    fn compute(&self, inputs: &CalculatorInputs) -> CalcResult<f64> {
        let beginning = inputs.get_f64("beginning_value")?;
        let ending = inputs.get_f64("ending_value")?;
        let start = inputs.get_date("period_start")?;
        let end = inputs.get_date("period_end")?;
        let flows = parse_flows(inputs)?;

        let calendar_days = (end - start).num_days() as f64;
        let mut net_flow = 0.0;
        let mut weighted_flow = 0.0;
        for flow in &flows {
            let day = (flow.date - start).num_days() as f64;
            let weight = (calendar_days - day) / calendar_days;
            net_flow += flow.amount;
            weighted_flow += weight * flow.amount;
        }

        let denominator = beginning + weighted_flow;
        if denominator == 0.0 {
            return Err(CalcError::domain(
                "weighted capital base is zero, the return is undefined",
            ));
        }
        Ok((ending - beginning - net_flow) / denominator)
    }

    fn analyze(&self, result: f64, _inputs: &CalculatorInputs) -> Analysis {
        let pct = result * 100.0;
        let risk = if result.abs() < 0.05 {
            RiskLevel::Low
        } else if result.abs() < 0.15 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        };
        Analysis {
            recommendation: format!(
                "The portfolio returned {pct:.2}% for the period after adjusting for the timing of external flows."
            ),
            risk,
        }
    }
}
