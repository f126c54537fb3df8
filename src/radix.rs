//! Size and index helpers: power-of-two classification, bit reversal and
//! factorization.

use alloc::vec::Vec;

/// Returns `true` when exactly one bit of `n` is set.
///
/// `0` has no bits set and is therefore not a power of two (nor a valid
/// transform size).
///
/// ```
/// use mixfft::radix::is_power_of_two;
/// assert!(is_power_of_two(1));
/// assert!(is_power_of_two(64));
/// assert!(!is_power_of_two(0));
/// assert!(!is_power_of_two(12));
/// ```
#[inline]
pub fn is_power_of_two(n: usize) -> bool {
    n.count_ones() == 1
}

/// Reverse the low `width` bits of `i`. Bits at or above `width` are dropped.
///
/// `width` may range over `0..=usize::BITS`; a zero width yields `0`.
///
/// # Panics
/// Panics if `width > usize::BITS`.
///
/// ```
/// use mixfft::radix::bit_reverse;
/// assert_eq!(bit_reverse(0b0001, 4), 0b1000);
/// assert_eq!(bit_reverse(0b1101, 4), 0b1011);
/// assert_eq!(bit_reverse(0b1_0110, 4), 0b0110);
/// ```
#[inline]
pub fn bit_reverse(i: usize, width: u32) -> usize {
    assert!(
        width <= usize::BITS,
        "bit width {width} exceeds usize::BITS ({})",
        usize::BITS
    );
    if width == 0 {
        return 0;
    }
    i.reverse_bits() >> (usize::BITS - width)
}

/// Reorder `data` into bit-reversed index order in place.
///
/// # Panics
/// Panics if `data.len()` is not a power of two.
pub fn bit_reverse_permute<T>(data: &mut [T]) {
    let n = data.len();
    assert!(
        is_power_of_two(n),
        "bit-reversal permutation needs a power-of-two length, got {n}"
    );
    let width = n.trailing_zeros();
    for i in 0..n {
        let j = bit_reverse(i, width);
        if j > i {
            data.swap(i, j);
        }
    }
}

/// Smallest factor of `n` greater than one. Prime `n` returns itself;
/// `0` and `1` have no such factor.
pub fn smallest_factor(n: usize) -> Option<usize> {
    if n < 2 {
        return None;
    }
    if n % 2 == 0 {
        return Some(2);
    }
    let mut f = 3;
    while f <= n / f {
        if n % f == 0 {
            return Some(f);
        }
        f += 2;
    }
    Some(n)
}

/// Prime factorization of `n` in ascending order. `0` and `1` yield an empty list.
pub fn factorize(mut n: usize) -> Vec<usize> {
    let mut factors = Vec::new();
    if n < 2 {
        return factors;
    }
    for &p in &[2, 3, 5] {
        while n % p == 0 {
            factors.push(p);
            n /= p;
        }
    }
    let mut f = 7;
    while f <= n / f {
        while n % f == 0 {
            factors.push(f);
            n /= f;
        }
        f += 2;
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}
