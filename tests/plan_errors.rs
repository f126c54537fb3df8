// Test intent: verifies plan construction rejects bad sizes and factor hints.
use mixfft::plan::create_plan_with_config;
use mixfft::{create_plan, Direction, FactorPair, PlanConfig, PlanError};

#[test]
fn zero_length_is_invalid_size() {
    assert_eq!(
        create_plan::<f32>(0, Direction::Forward, None).unwrap_err(),
        PlanError::InvalidSize
    );
    assert_eq!(
        create_plan::<f32>(0, Direction::Forward, Some(FactorPair::new(0, 0))).unwrap_err(),
        PlanError::InvalidSize
    );
}

#[test]
fn mismatched_hint_is_rejected() {
    assert_eq!(
        create_plan::<f32>(15, Direction::Forward, Some(FactorPair::new(4, 4))).unwrap_err(),
        PlanError::FactorizationMismatch
    );
    assert_eq!(
        create_plan::<f64>(6, Direction::Inverse, Some(FactorPair::new(0, 6))).unwrap_err(),
        PlanError::FactorizationMismatch
    );
    assert_eq!(
        create_plan::<f64>(8, Direction::Forward, Some(FactorPair::new(usize::MAX, 2)))
            .unwrap_err(),
        PlanError::FactorizationMismatch
    );
}

#[test]
fn size_limit_is_configurable() {
    let config = PlanConfig {
        max_size: 100,
        ..PlanConfig::default()
    };
    assert!(create_plan_with_config::<f32>(100, Direction::Forward, None, &config).is_ok());
    assert_eq!(
        create_plan_with_config::<f32>(101, Direction::Forward, None, &config).unwrap_err(),
        PlanError::InvalidSize
    );
}

#[cfg(feature = "std")]
#[test]
fn error_messages() {
    assert_eq!(PlanError::InvalidSize.to_string(), "invalid transform size");
    assert_eq!(
        PlanError::FactorizationMismatch.to_string(),
        "factor hint does not multiply to the transform size"
    );
    let boxed: Box<dyn std::error::Error> = Box::new(PlanError::InvalidSize);
    assert!(boxed.source().is_none());
}
