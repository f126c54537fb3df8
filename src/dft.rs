//! Reference DFT.
//!
//! `y[i] = Σ x[k] · exp(sign · j · 2π · i · k / n)`, computed term by term in
//! O(n²). The mixed-radix engine uses the same sum for prime leaves, and the
//! test suites use it as the oracle every fast path is compared against.

use alloc::vec;
use alloc::vec::Vec;

use crate::num::{Complex, Float};
use crate::twiddle::{root_of_unity, Direction};

/// Direct DFT of `input`. Inverse transforms are not scaled by `1/n`.
///
/// An empty input produces an empty output.
pub fn direct_transform<T: Float>(input: &[Complex<T>], direction: Direction) -> Vec<Complex<T>> {
    let mut output = vec![Complex::zero(); input.len()];
    direct_transform_into(input, &mut output, direction);
    output
}

/// Direct DFT of `input` written to `output`.
///
/// # Panics
/// Panics if the two slices differ in length.
pub fn direct_transform_into<T: Float>(
    input: &[Complex<T>],
    output: &mut [Complex<T>],
    direction: Direction,
) {
    assert_eq!(
        input.len(),
        output.len(),
        "direct transform: input and output lengths differ"
    );
    let n = input.len();
    for (i, out) in output.iter_mut().enumerate() {
        let mut acc = Complex::zero();
        for (k, &x) in input.iter().enumerate() {
            // (i * k) mod n without overflowing for large n
            let r = ((i as u128 * k as u128) % n as u128) as usize;
            acc += x * root_of_unity(r, n, direction);
        }
        *out = acc;
    }
}

/// Root-mean-square difference between two equally long sequences.
///
/// Returns zero for empty input.
///
/// # Panics
/// Panics if the two slices differ in length.
pub fn rms_error<T: Float>(a: &[Complex<T>], b: &[Complex<T>]) -> T {
    assert_eq!(a.len(), b.len(), "rms_error: lengths differ");
    if a.is_empty() {
        return T::zero();
    }
    let sum: f64 = a
        .iter()
        .zip(b)
        .map(|(&x, &y)| (x - y).norm_sqr().to_f64())
        .sum();
    T::from_f64(libm::sqrt(sum / a.len() as f64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::Complex64;

    #[test]
    fn test_impulse_gives_flat_spectrum() {
        let mut x = vec![Complex64::zero(); 6];
        x[0] = Complex64::new(1.0, 0.0);
        let y = direct_transform(&x, Direction::Forward);
        for c in &y {
            assert!((c.re - 1.0).abs() < 1e-12 && c.im.abs() < 1e-12);
        }
    }

    #[test]
    fn test_single_tone_lands_in_one_bin() {
        let n = 5;
        let x: Vec<Complex64> = (0..n)
            .map(|k| root_of_unity(2 * k, n, Direction::Inverse))
            .collect();
        let y = direct_transform(&x, Direction::Forward);
        for (i, c) in y.iter().enumerate() {
            let expected = if i == 2 { n as f64 } else { 0.0 };
            assert!((c.re - expected).abs() < 1e-9, "bin {i}: {c:?}");
            assert!(c.im.abs() < 1e-9, "bin {i}: {c:?}");
        }
    }

    #[test]
    fn test_forward_then_inverse_scales_by_n() {
        let x: Vec<Complex64> = (0..7)
            .map(|i| Complex64::new(i as f64, 3.0 - i as f64))
            .collect();
        let y = direct_transform(&x, Direction::Forward);
        let z = direct_transform(&y, Direction::Inverse);
        for (a, b) in x.iter().zip(&z) {
            assert!((a.re * 7.0 - b.re).abs() < 1e-9);
            assert!((a.im * 7.0 - b.im).abs() < 1e-9);
        }
    }

    #[test]
    fn test_empty_and_rms() {
        let empty: Vec<Complex64> = Vec::new();
        assert!(direct_transform(&empty, Direction::Forward).is_empty());
        assert_eq!(rms_error(&empty, &empty), 0.0);

        let a = [Complex64::new(1.0, 0.0), Complex64::new(0.0, 1.0)];
        let b = [Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0)];
        assert!((rms_error(&a, &b) - 1.0).abs() < 1e-12);
    }
}
