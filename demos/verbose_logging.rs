//! Demonstrates enabling verbose logging for mixfft.
use mixfft::plan::LogObserver;
use mixfft::{create_plan, Complex32, Direction, FactorPair};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .init();

    let x: Vec<Complex32> = (0..30).map(|i| Complex32::new(i as f32, 0.0)).collect();
    let plan = create_plan::<f32>(30, Direction::Forward, Some(FactorPair::new(5, 6))).unwrap();
    let y = plan.execute_observed(&x, &mut LogObserver);
    println!("DC bin: {:?}", y[0]);
}
