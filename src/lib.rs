//! # mixfft - Mixed-radix FFT for arbitrary lengths
//!
//! Computes the Discrete Fourier Transform of any length `n >= 1` by splitting
//! `n = p * q` into smaller transforms (Cooley–Tukey), recursively, until the
//! pieces are prime or small enough to sum directly. Every fast path is checked
//! against an O(n²) reference DFT.
//!
//! ## Features
//!
//! - **Any length**: composite lengths split on their factors, primes fall back
//!   to the direct sum, powers of two use radix-2 butterflies
//! - **Plan once, run many**: immutable [`TransformPlan`]s own their twiddle
//!   table and factor tree and are `Send + Sync`
//! - **No allocation on the hot path**: callers own the scratch buffer
//! - **Stage observers** for inspecting intermediate buffers
//! - **`no_std` + `alloc`** compatible
//!
//! ## Cargo Features
//!
//! - `std` (default): environment configuration and `std::error::Error`
//! - `verbose-logging`: plan construction logs and [`plan::LogObserver`] via `log`
//!
//! ## Example
//!
//! ```
//! use mixfft::{create_plan, direct_transform, rms_error, Complex32, Direction, FactorPair};
//!
//! let x: Vec<Complex32> = (0..15)
//!     .map(|i| Complex32::new(i as f32, 3.0 - i as f32))
//!     .collect();
//! let plan = create_plan::<f32>(15, Direction::Forward, Some(FactorPair::new(5, 3))).unwrap();
//! let y = plan.execute(&x);
//! assert!(rms_error(&y, &direct_transform(&x, Direction::Forward)) < 1e-3);
//! ```
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or https://www.apache.org/licenses/LICENSE-2.0)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or https://opensource.org/licenses/MIT)
//!
//! at your option.

#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

/// Debug line for plan construction and configuration, compiled out unless
/// `verbose-logging` is enabled.
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "verbose-logging")]
        {
            log::debug!($($arg)*);
        }
    };
}
pub(crate) use debug_log;

/// Scalar and complex number types.
pub mod num;

/// Power-of-two test, bit reversal and factorization helpers.
pub mod radix;

pub mod error;

/// Root-of-unity tables and transform direction.
pub mod twiddle;

/// O(n²) reference DFT and error metrics.
pub mod dft;

/// Strategy selection and planning limits.
pub mod estimate;

/// Mixed-radix plans and the decomposition engine.
pub mod plan;

/// Plan cache with reusable scratch.
pub mod fft;

pub use dft::{direct_transform, direct_transform_into, rms_error};
pub use error::PlanError;
pub use estimate::{estimate_method, FactorPair, Method, PlanConfig};
pub use fft::FftPlanner;
pub use num::{Complex, Complex32, Complex64, Float};
pub use plan::{create_plan, execute, TransformPlan};
pub use radix::{bit_reverse, is_power_of_two};
pub use twiddle::{generate_twiddles, Direction, TwiddleTable};
