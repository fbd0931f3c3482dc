use fincalc_catalog::standard_registry;
use fincalc_core::{CalcError, CalcValue, Calculator, CalculatorInputs, RiskLevel};
use std::collections::HashMap;

fn fields(pairs: &[(&str, CalcValue)]) -> HashMap<String, CalcValue> {
    pairs.iter().map(|(k, v)| ((*k).to_string(), v.clone())).collect()
}

fn calculate(id: &str, pairs: &[(&str, CalcValue)]) -> anyhow::Result<f64> {
    let registry = standard_registry()?;
    let map = fields(pairs);
    let outputs = registry.calculate(id, &CalculatorInputs::new(&map))?;
    Ok(outputs.result)
}

#[test]
fn registry_holds_every_built_in_sorted_by_id() -> anyhow::Result<()> {
    let registry = standard_registry()?;
    let ids: Vec<_> = registry.list().into_iter().map(|d| d.id).collect();
    assert_eq!(
        ids,
        vec![
            "bond-convexity",
            "cagr",
            "compound-growth",
            "drywall-area",
            "loan-payment",
            "modified-dietz",
            "present-value",
            "wacc",
            "warrant-price",
            "waterfall-carry",
        ]
    );
    Ok(())
}

#[test]
fn car_loan_scenario() -> anyhow::Result<()> {
    // $30,000 vehicle, $5,000 down, 6% APR, 5 years.
    let payment = calculate(
        "loan-payment",
        &[
            ("vehicle_price", CalcValue::Float(30000.0)),
            ("down_payment", CalcValue::Float(5000.0)),
            ("interest_rate", CalcValue::Float(6.0)),
            ("loan_term_years", CalcValue::Float(5.0)),
        ],
    )?;
    assert_eq!(payment, 483.32);
    Ok(())
}

#[test]
fn cagr_scenario() -> anyhow::Result<()> {
    let rate = calculate(
        "cagr",
        &[
            ("beginning_value", CalcValue::Float(100.0)),
            ("ending_value", CalcValue::Float(200.0)),
            ("periods", CalcValue::Float(10.0)),
        ],
    )?;
    assert!((rate - 0.0718).abs() < 5e-5);
    Ok(())
}

#[test]
fn drywall_scenario() -> anyhow::Result<()> {
    let area = calculate(
        "drywall-area",
        &[
            ("length", CalcValue::Float(10.0)),
            ("width", CalcValue::Float(12.0)),
            ("height", CalcValue::Float(8.0)),
            ("include_ceiling", CalcValue::Boolean(false)),
        ],
    )?;
    assert_eq!(area, 352.0);
    Ok(())
}

#[test]
fn wacc_scenario() -> anyhow::Result<()> {
    let wacc = calculate(
        "wacc",
        &[
            ("equity", CalcValue::Float(600_000.0)),
            ("debt", CalcValue::Float(400_000.0)),
            ("cost_of_equity", CalcValue::Float(0.10)),
            ("cost_of_debt", CalcValue::Float(0.05)),
            ("tax_rate", CalcValue::Float(0.21)),
        ],
    )?;
    assert!((wacc - 0.0758).abs() < 1e-9);
    Ok(())
}

#[test]
fn waterfall_scenario() -> anyhow::Result<()> {
    let carry = calculate(
        "waterfall-carry",
        &[
            ("invested_capital", CalcValue::Float(1_000_000.0)),
            ("total_profit", CalcValue::Float(500_000.0)),
            ("hurdle_rate", CalcValue::Float(0.08)),
            ("carry_rate", CalcValue::Float(0.20)),
        ],
    )?;
    assert_eq!(carry, 84_000.0);
    Ok(())
}

#[test]
fn invalid_inputs_report_every_violation() -> anyhow::Result<()> {
    let registry = standard_registry()?;
    let calculator = registry.get("cagr").unwrap();

    // Two bad fields and one missing field.
    let map = fields(&[
        ("beginning_value", CalcValue::Float(-100.0)),
        ("ending_value", CalcValue::Float(0.0)),
    ]);
    let inputs = CalculatorInputs::new(&map);

    let report = calculator.validate_inputs(&inputs);
    assert!(!report.is_valid);
    assert_eq!(report.errors.len(), 3);

    let err = calculator.calculate(&inputs).unwrap_err();
    assert_eq!(err.category(), "validation");
    let message = err.to_string();
    for violation in &report.errors {
        assert!(message.contains(violation), "missing violation: {violation}");
    }
    Ok(())
}

#[test]
fn overflowing_formula_is_a_domain_error_not_an_infinite_result() -> anyhow::Result<()> {
    let registry = standard_registry()?;
    let calculator = registry.get("cagr").unwrap();

    // Every field passes its range check, but the ratio overflows f64.
    let map = fields(&[
        ("beginning_value", CalcValue::Float(1e-300)),
        ("ending_value", CalcValue::Float(1e300)),
        ("periods", CalcValue::Float(0.5)),
    ]);
    let inputs = CalculatorInputs::new(&map);
    assert!(calculator.validate(&inputs));
    let err = calculator.calculate(&inputs).unwrap_err();
    assert_eq!(err.category(), "domain");
    Ok(())
}

#[test]
fn nan_inputs_fail_validation() -> anyhow::Result<()> {
    let registry = standard_registry()?;

    let loan = fields(&[
        ("vehicle_price", CalcValue::Float(30000.0)),
        ("down_payment", CalcValue::Float(f64::NAN)),
        ("interest_rate", CalcValue::Float(6.0)),
        ("loan_term_years", CalcValue::Float(5.0)),
    ]);
    assert!(!registry.get("loan-payment").unwrap().validate(&CalculatorInputs::new(&loan)));

    let drywall = fields(&[
        ("length", CalcValue::Float(10.0)),
        ("width", CalcValue::Float(12.0)),
        ("height", CalcValue::Float(8.0)),
        ("openings_area", CalcValue::Float(f64::NAN)),
    ]);
    assert!(!registry.get("drywall-area").unwrap().validate(&CalculatorInputs::new(&drywall)));

    let growth = fields(&[
        ("principal", CalcValue::Float(1000.0)),
        ("annual_rate", CalcValue::Float(0.07)),
        ("years", CalcValue::Float(10.0)),
        ("compounds_per_year", CalcValue::Float(f64::NAN)),
    ]);
    assert!(!registry.get("compound-growth").unwrap().validate(&CalculatorInputs::new(&growth)));

    let bond = fields(&[
        ("face_value", CalcValue::Float(1000.0)),
        ("coupon_rate", CalcValue::Float(0.05)),
        ("yield_rate", CalcValue::Float(0.05)),
        ("years_to_maturity", CalcValue::Float(10.0)),
        ("payments_per_year", CalcValue::Float(f64::NAN)),
    ]);
    assert!(!registry.get("bond-convexity").unwrap().validate(&CalculatorInputs::new(&bond)));
    Ok(())
}

#[test]
fn unknown_calculator_dispatch_fails() -> anyhow::Result<()> {
    let registry = standard_registry()?;
    let map = fields(&[]);
    let err = registry.calculate("mortgage-on-mars", &CalculatorInputs::new(&map)).unwrap_err();
    assert_eq!(
        err,
        CalcError::UnknownCalculator { id: "mortgage-on-mars".to_string() }
    );
    Ok(())
}

#[test]
fn analysis_reflects_risk_thresholds() -> anyhow::Result<()> {
    let registry = standard_registry()?;

    let low = fields(&[
        ("vehicle_price", CalcValue::Float(30000.0)),
        ("down_payment", CalcValue::Float(5000.0)),
        ("interest_rate", CalcValue::Float(3.0)),
        ("loan_term_years", CalcValue::Float(5.0)),
    ]);
    let outputs = registry.calculate("loan-payment", &CalculatorInputs::new(&low))?;
    assert_eq!(outputs.analysis.risk, RiskLevel::Low);

    let high = fields(&[
        ("vehicle_price", CalcValue::Float(30000.0)),
        ("down_payment", CalcValue::Float(5000.0)),
        ("interest_rate", CalcValue::Float(14.0)),
        ("loan_term_years", CalcValue::Float(5.0)),
    ]);
    let outputs = registry.calculate("loan-payment", &CalculatorInputs::new(&high))?;
    assert_eq!(outputs.analysis.risk, RiskLevel::High);
    assert!(!outputs.analysis.recommendation.is_empty());
    Ok(())
}

#[test]
fn warrant_price_scenario() -> anyhow::Result<()> {
    let price = calculate(
        "warrant-price",
        &[
            ("spot_price", CalcValue::Float(100.0)),
            ("strike_price", CalcValue::Float(100.0)),
            ("risk_free_rate", CalcValue::Float(0.05)),
            ("volatility", CalcValue::Float(0.20)),
            ("time_to_expiry", CalcValue::Float(1.0)),
        ],
    )?;
    assert!((price - 10.4506).abs() < 1e-3);
    Ok(())
}

#[test]
fn bond_convexity_zero_coupon_scenario() -> anyhow::Result<()> {
    let convexity = calculate(
        "bond-convexity",
        &[
            ("face_value", CalcValue::Float(1000.0)),
            ("coupon_rate", CalcValue::Float(0.0)),
            ("yield_rate", CalcValue::Float(0.05)),
            ("years_to_maturity", CalcValue::Float(5.0)),
            ("payments_per_year", CalcValue::Float(1.0)),
        ],
    )?;
    assert!((convexity - 30.0 / (1.05 * 1.05)).abs() < 1e-9);
    Ok(())
}

#[test]
fn modified_dietz_scenario() -> anyhow::Result<()> {
    let flow = CalcValue::Object(HashMap::from([
        ("amount".to_string(), CalcValue::Float(5000.0)),
        (
            "date".to_string(),
            CalcValue::String("2024-01-16T00:00:00Z".to_string()),
        ),
    ]));
    let rate = calculate(
        "modified-dietz",
        &[
            ("beginning_value", CalcValue::Float(100_000.0)),
            ("ending_value", CalcValue::Float(110_000.0)),
            (
                "period_start",
                CalcValue::String("2024-01-01T00:00:00Z".to_string()),
            ),
            (
                "period_end",
                CalcValue::String("2024-01-31T00:00:00Z".to_string()),
            ),
            ("cash_flows", CalcValue::Array(vec![flow])),
        ],
    )?;
    assert!((rate - 0.04878).abs() < 5e-6);
    Ok(())
}
