//! Cached planning front end.
//!
//! [`FftPlanner`] keeps one [`TransformPlan`] per `(length, direction)` and a
//! scratch buffer that grows to the largest plan it has run, so repeated
//! transforms of the same sizes plan and allocate only once.

use alloc::sync::Arc;
use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::error::PlanError;
use crate::estimate::PlanConfig;
use crate::num::{Complex, Float};
use crate::plan::{create_plan_with_config, TransformPlan};
use crate::twiddle::Direction;

pub use crate::num::{Complex32, Complex64};

pub struct FftPlanner<T: Float> {
    config: PlanConfig,
    cache: HashMap<(usize, Direction), Arc<TransformPlan<T>>>,
    scratch: Vec<Complex<T>>,
}

impl<T: Float> Default for FftPlanner<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> FftPlanner<T> {
    /// Planner using [`PlanConfig::current`] at the time of the call.
    pub fn new() -> Self {
        Self::with_config(PlanConfig::current())
    }

    pub fn with_config(config: PlanConfig) -> Self {
        Self {
            config,
            cache: HashMap::new(),
            scratch: Vec::new(),
        }
    }

    pub fn config(&self) -> &PlanConfig {
        &self.config
    }

    /// Shared plan for `n` points in `direction`, built on first use.
    pub fn plan(
        &mut self,
        n: usize,
        direction: Direction,
    ) -> Result<Arc<TransformPlan<T>>, PlanError> {
        if let Some(plan) = self.cache.get(&(n, direction)) {
            return Ok(Arc::clone(plan));
        }
        let plan = Arc::new(create_plan_with_config(n, direction, None, &self.config)?);
        self.cache.insert((n, direction), Arc::clone(&plan));
        Ok(plan)
    }

    pub fn plan_forward(&mut self, n: usize) -> Result<Arc<TransformPlan<T>>, PlanError> {
        self.plan(n, Direction::Forward)
    }

    pub fn plan_inverse(&mut self, n: usize) -> Result<Arc<TransformPlan<T>>, PlanError> {
        self.plan(n, Direction::Inverse)
    }

    /// Number of cached plans.
    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    /// Drop all cached plans and the scratch buffer.
    pub fn clear(&mut self) {
        self.cache.clear();
        self.scratch = Vec::new();
    }

    fn transform(
        &mut self,
        buffer: &mut [Complex<T>],
        direction: Direction,
    ) -> Result<(), PlanError> {
        let plan = self.plan(buffer.len(), direction)?;
        let mut scratch = core::mem::take(&mut self.scratch);
        if scratch.len() < plan.scratch_len() {
            scratch.resize(plan.scratch_len(), Complex::zero());
        }
        plan.process_with_scratch(buffer, &mut scratch);
        // Return scratch to planner for reuse.
        self.scratch = scratch;
        Ok(())
    }

    /// In-place forward transform.
    ///
    /// # Errors
    /// [`PlanError::InvalidSize`] for an empty buffer or one longer than the
    /// configured maximum.
    pub fn fft(&mut self, buffer: &mut [Complex<T>]) -> Result<(), PlanError> {
        self.transform(buffer, Direction::Forward)
    }

    /// In-place inverse transform without the `1/n` factor.
    pub fn ifft(&mut self, buffer: &mut [Complex<T>]) -> Result<(), PlanError> {
        self.transform(buffer, Direction::Inverse)
    }

    /// In-place inverse transform scaled by `1/n`, so `fft` followed by this
    /// returns the original samples.
    pub fn ifft_normalized(&mut self, buffer: &mut [Complex<T>]) -> Result<(), PlanError> {
        self.transform(buffer, Direction::Inverse)?;
        let n = buffer.len();
        let scale = T::one() / T::from_usize(n).unwrap_or_else(|| T::from_f64(n as f64));
        for c in buffer.iter_mut() {
            *c = c.scale(scale);
        }
        Ok(())
    }

    /// Forward transform into a new vector.
    pub fn fft_vec(&mut self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>, PlanError> {
        let mut out = input.to_vec();
        self.fft(&mut out)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dft::{direct_transform, rms_error};
    use alloc::vec;

    #[test]
    fn test_plans_are_cached_per_direction() {
        let mut planner = FftPlanner::<f32>::new();
        let a = planner.plan_forward(12).unwrap();
        let b = planner.plan_forward(12).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        let c = planner.plan_inverse(12).unwrap();
        assert!(!Arc::ptr_eq(&a, &c));
        assert_eq!(planner.cached(), 2);
        planner.clear();
        assert_eq!(planner.cached(), 0);
    }

    #[test]
    fn test_empty_buffer_is_invalid() {
        let mut planner = FftPlanner::<f32>::new();
        let mut data: Vec<Complex32> = vec![];
        assert_eq!(planner.fft(&mut data), Err(PlanError::InvalidSize));
        assert_eq!(planner.ifft(&mut data), Err(PlanError::InvalidSize));
    }

    #[test]
    fn test_fft_matches_direct_across_sizes() {
        let mut planner = FftPlanner::<f64>::new();
        for n in [1usize, 2, 9, 12, 16, 21, 30, 64, 100] {
            let x: Vec<Complex64> = (0..n)
                .map(|i| Complex64::new(i as f64 * 0.5, 1.0 - i as f64))
                .collect();
            let y = planner.fft_vec(&x).unwrap();
            let expected = direct_transform(&x, Direction::Forward);
            assert!(rms_error(&y, &expected) < 1e-8, "n = {n}");
        }
    }

    #[test]
    fn test_normalized_roundtrip() {
        let mut planner = FftPlanner::<f32>::new();
        let orig: Vec<Complex32> = (0..24)
            .map(|i| Complex32::new((i % 5) as f32, -((i % 3) as f32)))
            .collect();
        let mut data = orig.clone();
        planner.fft(&mut data).unwrap();
        planner.ifft_normalized(&mut data).unwrap();
        for (a, b) in data.iter().zip(orig.iter()) {
            assert!((a.re - b.re).abs() < 1e-4, "re: {} vs {}", a.re, b.re);
            assert!((a.im - b.im).abs() < 1e-4, "im: {} vs {}", a.im, b.im);
        }
    }
}
