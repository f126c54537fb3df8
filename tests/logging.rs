// Test intent: verifies the logging observer runs alongside a normal transform.
#![cfg(feature = "verbose-logging")]

use mixfft::plan::LogObserver;
use mixfft::{create_plan, Complex64, Direction, FactorPair};

#[test]
fn log_observer_does_not_change_output() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Trace)
        .try_init();
    let plan = create_plan::<f64>(12, Direction::Forward, Some(FactorPair::new(3, 4))).unwrap();
    let x: Vec<Complex64> = (0..12).map(|i| Complex64::new(i as f64, 0.0)).collect();
    let logged = plan.execute_observed(&x, &mut LogObserver);
    assert_eq!(logged, plan.execute(&x));
}
