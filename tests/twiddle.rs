// Test intent: verifies twiddle tables sit on the unit circle and follow the direction sign.
use mixfft::{generate_twiddles, Direction, PlanError};

#[test]
fn twiddles_have_unit_magnitude() {
    for n in 1..=512usize {
        for direction in [Direction::Forward, Direction::Inverse] {
            let table = generate_twiddles::<f32>(n, direction).unwrap();
            assert_eq!(table.len(), n);
            for (k, w) in table.as_slice().iter().enumerate() {
                let mag = w.norm();
                assert!((mag - 1.0).abs() < 1e-6, "n={n} k={k}: |w|={mag}");
            }
        }
    }
}

#[test]
fn inverse_table_is_conjugate_of_forward() {
    let fwd = generate_twiddles::<f64>(30, Direction::Forward).unwrap();
    let inv = generate_twiddles::<f64>(30, Direction::Inverse).unwrap();
    for (a, b) in fwd.as_slice().iter().zip(inv.as_slice()) {
        assert_eq!(a.conj(), *b);
    }
    assert_eq!(fwd.direction(), Direction::Forward);
    assert_eq!(inv.direction(), Direction::Inverse);
}

#[test]
fn forward_first_entry_matches_expected_phase() {
    let table = generate_twiddles::<f32>(8, Direction::Forward).unwrap();
    let expected = -2.0 * std::f32::consts::PI / 8.0;
    assert!((table.get(1).re - expected.cos()).abs() < 1e-6);
    assert!((table.get(1).im - expected.sin()).abs() < 1e-6);
}

#[test]
fn zero_length_is_invalid() {
    assert_eq!(
        generate_twiddles::<f64>(0, Direction::Inverse).unwrap_err(),
        PlanError::InvalidSize
    );
}
