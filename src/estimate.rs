//! Strategy selection for a transform length.
//!
//! [`estimate_method`] decides whether a length is computed directly, by the
//! radix-2 butterfly kernel, or split into two factors. The cut-over points
//! live in [`PlanConfig`] and are resolved from three layers:
//!
//! 1. compiled defaults ([`PlanConfig::default`]),
//! 2. environment variables, read once per process (`std` only):
//!    `MIXFFT_DIRECT_THRESHOLD`, `MIXFFT_MAX_SIZE`, `MIXFFT_MAX_DEPTH`,
//!    `MIXFFT_RADIX2` (`0`/`false` disables radix-2 leaves),
//! 3. runtime overrides set with [`set_direct_threshold`], [`set_max_size`]
//!    and [`set_max_depth`]. Passing `0` reverts an override.

use core::sync::atomic::{AtomicUsize, Ordering};
#[cfg(feature = "std")]
use std::sync::OnceLock;

use crate::radix::{is_power_of_two, smallest_factor};

/// Lengths below this are always computed directly.
pub const DEFAULT_DIRECT_THRESHOLD: usize = 8;
/// Largest transform length accepted by the planner.
pub const DEFAULT_MAX_SIZE: usize = 1 << 24;
/// Deepest factor tree accepted by the planner.
pub const DEFAULT_MAX_DEPTH: usize = 32;

static DIRECT_THRESHOLD_OVERRIDE: AtomicUsize = AtomicUsize::new(0);
static MAX_SIZE_OVERRIDE: AtomicUsize = AtomicUsize::new(0);
static MAX_DEPTH_OVERRIDE: AtomicUsize = AtomicUsize::new(0);

#[cfg(feature = "std")]
static PLAN_ENV: OnceLock<PlanConfig> = OnceLock::new();

/// Two factors with `p * q == n`.
///
/// `p` is the length of the first-stage sub-transforms (there are `q` of them)
/// and `q` the length of the second-stage ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FactorPair {
    pub p: usize,
    pub q: usize,
}

impl FactorPair {
    pub fn new(p: usize, q: usize) -> Self {
        Self { p, q }
    }

    /// `p * q`, or `None` on overflow.
    pub fn len(&self) -> Option<usize> {
        self.p.checked_mul(self.q)
    }

    /// A pair with a unit factor is just a direct transform of the other one.
    pub fn is_degenerate(&self) -> bool {
        self.p == 1 || self.q == 1
    }
}

/// How a single length is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// O(n²) sum; used for small and prime lengths.
    Direct,
    /// In-place radix-2 butterflies after a bit-reversal permutation.
    Radix2,
    /// Cooley–Tukey split into `q` transforms of length `p` followed by `p`
    /// transforms of length `q`.
    MixedRadix(FactorPair),
}

/// Tunable planning limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanConfig {
    /// Lengths strictly below this use [`Method::Direct`].
    pub direct_threshold: usize,
    /// Lengths above this are rejected.
    pub max_size: usize,
    /// Factor trees deeper than this are rejected.
    pub max_depth: usize,
    /// Allow [`Method::Radix2`] for power-of-two lengths.
    pub radix2_leaves: bool,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            direct_threshold: DEFAULT_DIRECT_THRESHOLD,
            max_size: DEFAULT_MAX_SIZE,
            max_depth: DEFAULT_MAX_DEPTH,
            radix2_leaves: true,
        }
    }
}

#[cfg(feature = "std")]
fn env_usize(key: &str) -> Option<usize> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse::<usize>() {
        Ok(v) if v != 0 => Some(v),
        _ => {
            crate::debug_log!("ignoring {}={:?}: expected a positive integer", key, raw);
            None
        }
    }
}

#[cfg(feature = "std")]
fn plan_env() -> &'static PlanConfig {
    PLAN_ENV.get_or_init(|| {
        let defaults = PlanConfig::default();
        let radix2_leaves = std::env::var("MIXFFT_RADIX2")
            .map(|v| !matches!(v.trim(), "0" | "false" | "off"))
            .unwrap_or(defaults.radix2_leaves);
        PlanConfig {
            direct_threshold: env_usize("MIXFFT_DIRECT_THRESHOLD")
                .unwrap_or(defaults.direct_threshold),
            max_size: env_usize("MIXFFT_MAX_SIZE").unwrap_or(defaults.max_size),
            max_depth: env_usize("MIXFFT_MAX_DEPTH").unwrap_or(defaults.max_depth),
            radix2_leaves,
        }
    })
}

fn layered(over: &AtomicUsize, base: usize) -> usize {
    match over.load(Ordering::Relaxed) {
        0 => base,
        v => v,
    }
}

impl PlanConfig {
    /// Configuration in effect: defaults, then environment, then runtime
    /// overrides.
    pub fn current() -> Self {
        #[cfg(feature = "std")]
        let base = *plan_env();
        #[cfg(not(feature = "std"))]
        let base = PlanConfig::default();
        Self {
            direct_threshold: layered(&DIRECT_THRESHOLD_OVERRIDE, base.direct_threshold),
            max_size: layered(&MAX_SIZE_OVERRIDE, base.max_size),
            max_depth: layered(&MAX_DEPTH_OVERRIDE, base.max_depth),
            radix2_leaves: base.radix2_leaves,
        }
    }
}

/// Set the length below which transforms are computed directly.
///
/// Passing `0` reverts to the environment or built-in default.
pub fn set_direct_threshold(threshold: usize) {
    DIRECT_THRESHOLD_OVERRIDE.store(threshold, Ordering::Relaxed);
}

/// Set the largest length the planner accepts. `0` reverts.
pub fn set_max_size(size: usize) {
    MAX_SIZE_OVERRIDE.store(size, Ordering::Relaxed);
}

/// Set the deepest factor tree the planner accepts. `0` reverts.
pub fn set_max_depth(depth: usize) {
    MAX_DEPTH_OVERRIDE.store(depth, Ordering::Relaxed);
}

/// Pick a method for length `n` under [`PlanConfig::current`].
pub fn estimate_method(n: usize) -> Method {
    estimate_method_with(n, &PlanConfig::current())
}

/// Pick a method for length `n` under `config`.
///
/// Small lengths and primes go direct. Powers of two use radix-2 when
/// enabled. Everything else splits off its smallest factor as `p`, leaving
/// `q = n / p` to be planned the same way.
pub fn estimate_method_with(n: usize, config: &PlanConfig) -> Method {
    if n < config.direct_threshold.max(2) {
        return Method::Direct;
    }
    if config.radix2_leaves && is_power_of_two(n) {
        return Method::Radix2;
    }
    match smallest_factor(n) {
        Some(p) if p < n => Method::MixedRadix(FactorPair::new(p, n / p)),
        _ => Method::Direct,
    }
}
