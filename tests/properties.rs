// Test intent: property checks of the engine over random inputs and factor pairs.
use mixfft::{create_plan, direct_transform, rms_error, Complex32, Direction, FactorPair};
use proptest::prelude::*;

fn pair_strategy() -> impl Strategy<Value = FactorPair> {
    (1usize..=12, 1usize..=12).prop_map(|(p, q)| FactorPair::new(p, q))
}

proptest! {
    #[test]
    fn prop_hinted_plan_matches_direct(
        pair in pair_strategy(),
        inverse in any::<bool>(),
        ref signal in proptest::collection::vec((-1.0f32..1.0, -1.0f32..1.0), 144),
    ) {
        let n = pair.p * pair.q;
        let direction = if inverse { Direction::Inverse } else { Direction::Forward };
        let x: Vec<Complex32> = signal.iter().take(n).map(|&(re, im)| Complex32::new(re, im)).collect();
        let plan = create_plan::<f32>(n, direction, Some(pair)).unwrap();
        let y = plan.execute(&x);
        let err = rms_error(&y, &direct_transform(&x, direction));
        prop_assert!(err < 1e-3, "{:?}: rmse {}", pair, err);
    }

    #[test]
    fn prop_linearity(
        ref a in proptest::collection::vec(-1.0f32..1.0, 20),
        ref b in proptest::collection::vec(-1.0f32..1.0, 20),
    ) {
        let plan = create_plan::<f32>(20, Direction::Forward, None).unwrap();
        let xa: Vec<Complex32> = a.iter().map(|&v| Complex32::new(v, 0.0)).collect();
        let xb: Vec<Complex32> = b.iter().map(|&v| Complex32::new(0.0, v)).collect();
        let sum: Vec<Complex32> = xa.iter().zip(&xb).map(|(&u, &v)| u + v).collect();
        let ya = plan.execute(&xa);
        let yb = plan.execute(&xb);
        let ys = plan.execute(&sum);
        let combined: Vec<Complex32> = ya.iter().zip(&yb).map(|(&u, &v)| u + v).collect();
        prop_assert!(rms_error(&ys, &combined) < 1e-3);
    }
}
