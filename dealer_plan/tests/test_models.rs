use dealer_plan::models::FittedModel;
use dealer_plan::PlannerError;
use rstest::rstest;

fn monthly_series(months: usize) -> Vec<f64> {
    (0..months)
        .map(|t| 1000.0 + 50.0 * (t % 12) as f64 + 2.0 * t as f64)
        .collect()
}

#[rstest]
#[case(2, false)]
#[case(12, false)]
#[case(23, false)]
#[case(24, true)]
#[case(36, true)]
fn variant_follows_series_length(#[case] months: usize, #[case] seasonal: bool) {
    let model = FittedModel::train(&monthly_series(months)).unwrap();
    assert_eq!(model.is_seasonal(), seasonal);
}

#[test]
fn too_short_series_is_rejected() {
    for values in [vec![], vec![42.0]] {
        match FittedModel::train(&values) {
            Err(PlannerError::InsufficientData(_)) => {}
            other => panic!("expected InsufficientData, got {:?}", other),
        }
    }
}

#[rstest]
#[case(1)]
#[case(3)]
#[case(12)]
fn forecast_length_matches_horizon(#[case] horizon: usize) {
    for months in [6, 36] {
        let model = FittedModel::train(&monthly_series(months)).unwrap();
        let forecast = model.forecast(horizon).unwrap();
        assert_eq!(forecast.len(), horizon);
    }
}

#[test]
fn zero_horizon_is_rejected() {
    let model = FittedModel::train(&monthly_series(30)).unwrap();
    match model.forecast(0) {
        Err(PlannerError::InvalidHorizon(_)) => {}
        other => panic!("expected InvalidHorizon, got {:?}", other),
    }
}

#[test]
fn forecasts_are_deterministic() {
    let model = FittedModel::train(&monthly_series(36)).unwrap();
    assert_eq!(model.forecast(3).unwrap(), model.forecast(3).unwrap());

    // Retraining on the same series gives the same model
    let retrained = FittedModel::train(&monthly_series(36)).unwrap();
    assert_eq!(model, retrained);
}

#[test]
fn serialized_model_forecasts_identically() {
    let model = FittedModel::train(&monthly_series(36)).unwrap();
    let json = serde_json::to_string(&model).unwrap();
    let restored: FittedModel = serde_json::from_str(&json).unwrap();

    assert_eq!(model.forecast(6).unwrap(), restored.forecast(6).unwrap());
}
