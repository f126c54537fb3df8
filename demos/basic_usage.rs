//! Plans a few transforms and checks them against the direct DFT.
use mixfft::{
    create_plan, direct_transform, rms_error, Complex32, Direction, FactorPair, FftPlanner,
};

fn main() {
    // Explicit split: 15 = 5 * 3
    let x: Vec<Complex32> = (0..15)
        .map(|i| Complex32::new(i as f32, 3.0 - i as f32))
        .collect();
    let plan = create_plan::<f32>(15, Direction::Forward, Some(FactorPair::new(5, 3)))
        .expect("15 = 5 * 3");
    let y = plan.execute(&x);
    let expected = direct_transform(&x, Direction::Forward);
    println!("n=15 (5x3) RMS error: {:.3e}", rms_error(&y, &expected));

    // Let the planner pick the factorization and reuse scratch
    let mut planner = FftPlanner::<f32>::new();
    for n in [12usize, 64, 97, 360] {
        let signal: Vec<Complex32> = (0..n)
            .map(|i| Complex32::new((i as f32 * 0.1).sin(), 0.0))
            .collect();
        let mut data = signal.clone();
        planner.fft(&mut data).unwrap();
        let plan = planner.plan_forward(n).unwrap();
        println!(
            "n={n:4} {:?} depth={} RMS error: {:.3e}",
            plan.method(),
            plan.depth(),
            rms_error(&data, &direct_transform(&signal, Direction::Forward))
        );
    }
}
