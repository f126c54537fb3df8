//! Root-of-unity tables.
//!
//! A [`TwiddleTable`] of length `n` holds `exp(sign * j * 2π * k / n)` for
//! `k = 0..n`, where `sign` is `-1` for [`Direction::Forward`] and `+1` for
//! [`Direction::Inverse`]. Phases are evaluated in `f64` and rounded once, so
//! `f32` tables are as close to the unit circle as the format allows.

use alloc::vec::Vec;
use core::f64::consts::PI;

use crate::error::PlanError;
use crate::num::{Complex, Float};

/// Transform direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Forward,
    Inverse,
}

impl Direction {
    /// Sign of the exponent: `-1` forward, `+1` inverse.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Direction::Forward => -1.0,
            Direction::Inverse => 1.0,
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            Direction::Forward => Direction::Inverse,
            Direction::Inverse => Direction::Forward,
        }
    }
}

/// Unit-magnitude phase for `k / n` turns in the given direction.
///
/// `k` is reduced modulo `n` before the division so large products keep full
/// precision.
#[inline]
pub(crate) fn root_of_unity<T: Float>(k: usize, n: usize, direction: Direction) -> Complex<T> {
    let k = k % n;
    let w = Complex::<f64>::expi(-2.0 * PI * (k as f64) / (n as f64));
    let w = match direction {
        Direction::Forward => w,
        Direction::Inverse => w.conj(),
    };
    Complex::new(T::from_f64(w.re), T::from_f64(w.im))
}

#[derive(Clone, Debug, PartialEq)]
pub struct TwiddleTable<T: Float> {
    direction: Direction,
    factors: Vec<Complex<T>>,
}

impl<T: Float> TwiddleTable<T> {
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    /// Always `false`; tables are built for `n >= 1`.
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Factor `k`, with `k` taken modulo the table length.
    #[inline]
    pub fn get(&self, k: usize) -> Complex<T> {
        self.factors[k % self.factors.len()]
    }

    /// Factor `k` of a length-`n / stride` table, read from this length-`n`
    /// table. `stride` must divide the table length.
    #[inline]
    pub fn strided(&self, k: usize, stride: usize) -> Complex<T> {
        debug_assert_eq!(self.factors.len() % stride, 0);
        self.factors[(k * stride) % self.factors.len()]
    }

    pub fn as_slice(&self) -> &[Complex<T>] {
        &self.factors
    }
}

/// Build the length-`n` twiddle table for `direction`.
///
/// # Errors
/// [`PlanError::InvalidSize`] when `n == 0`.
pub fn generate_twiddles<T: Float>(
    n: usize,
    direction: Direction,
) -> Result<TwiddleTable<T>, PlanError> {
    if n == 0 {
        return Err(PlanError::InvalidSize);
    }
    let factors = (0..n).map(|k| root_of_unity(k, n, direction)).collect();
    Ok(TwiddleTable { direction, factors })
}
