//! Mixed-radix Cooley–Tukey plans.
//!
//! A [`TransformPlan`] is built once per `(n, direction)` and then executed any
//! number of times. Construction factors `n` into a tree of two-factor splits
//! stored in a flat arena (`Vec<PlanNode>`, children referenced by index), picks
//! a leaf kernel for every length that is not split further, and computes how
//! much scratch space execution needs. Nothing is allocated or validated during
//! execution apart from the convenience wrappers that return a fresh `Vec`.
//!
//! One split of `n = p * q` runs four steps on the working buffer `y`:
//!
//! 1. decimate in time: `y[p*i + k] = x[k*q + i]` for `i < q`, `k < p`;
//! 2. `q` transforms of length `p` over the contiguous blocks of `y`;
//! 3. multiply `y[p*k + i]` by `w_n^(i*k)` for `i < p`, `k < q`;
//! 4. `p` transforms of length `q` over the columns `{y[p*k + i] : k < q}`.
//!
//! `y` then holds the spectrum in natural order. The twiddle index `i*k` is at
//! most `(p-1)(q-1) < n`, so the length-`n` table never wraps in step 3.

use alloc::vec;
use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::error::PlanError;
use crate::estimate::{estimate_method_with, FactorPair, Method, PlanConfig};
use crate::num::{Complex, Float};
use crate::radix::bit_reverse_permute;
use crate::twiddle::{generate_twiddles, Direction, TwiddleTable};

/// Pipeline point reported to a [`PipelineObserver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// After the stride permutation.
    Decimated,
    /// After the `q` first-stage transforms of length `p`.
    SubTransformed,
    /// After the twiddle multiplication.
    Twiddled,
    /// After the `p` second-stage transforms of length `q`.
    Combined,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageEvent {
    pub stage: Stage,
    /// Length of the split being executed.
    pub len: usize,
    /// 0 for the root split, increasing towards the leaves.
    pub depth: usize,
}

/// Hook invoked with the working buffer of every split at each [`Stage`].
///
/// Only the `*_observed` execution methods call observers; the plain ones run
/// with [`NoObserver`], which compiles away.
pub trait PipelineObserver<T: Float> {
    fn on_stage(&mut self, event: StageEvent, data: &[Complex<T>]);
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoObserver;

impl<T: Float> PipelineObserver<T> for NoObserver {
    #[inline(always)]
    fn on_stage(&mut self, _event: StageEvent, _data: &[Complex<T>]) {}
}

/// Observer that logs the length, depth and energy of each stage at `trace`
/// level.
#[cfg(feature = "verbose-logging")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

#[cfg(feature = "verbose-logging")]
impl<T: Float> PipelineObserver<T> for LogObserver {
    fn on_stage(&mut self, event: StageEvent, data: &[Complex<T>]) {
        let energy: f64 = data.iter().map(|c| c.norm_sqr().to_f64()).sum();
        log::trace!(
            "{:?}: len={} depth={} energy={:.6e}",
            event.stage,
            event.len,
            event.depth,
            energy
        );
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeKind {
    Direct,
    Radix2,
    Split {
        p: usize,
        q: usize,
        first: usize,
        second: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PlanNode {
    len: usize,
    /// `n / len`; entry `k` of this node's roots of unity is `twiddles[k * stride]`.
    stride: usize,
    kind: NodeKind,
    /// Levels in the subtree rooted here, leaves count as one.
    height: usize,
    scratch: usize,
}

struct TreeBuilder<'a> {
    n: usize,
    config: &'a PlanConfig,
    nodes: Vec<PlanNode>,
    memo: HashMap<usize, usize>,
}

impl TreeBuilder<'_> {
    /// Node for a sub-length chosen by the estimator; identical lengths share
    /// one node.
    fn planned(&mut self, len: usize, depth: usize) -> Result<usize, PlanError> {
        if let Some(&idx) = self.memo.get(&len) {
            if depth - 1 + self.nodes[idx].height > self.config.max_depth {
                return Err(PlanError::InvalidSize);
            }
            return Ok(idx);
        }
        let idx = self.build(len, estimate_method_with(len, self.config), depth)?;
        self.memo.insert(len, idx);
        Ok(idx)
    }

    fn build(&mut self, len: usize, method: Method, depth: usize) -> Result<usize, PlanError> {
        if depth > self.config.max_depth {
            return Err(PlanError::InvalidSize);
        }
        let stride = self.n / len;
        let node = match method {
            Method::MixedRadix(pair) if !pair.is_degenerate() => {
                let first = self.planned(pair.p, depth + 1)?;
                let second = self.planned(pair.q, depth + 1)?;
                let (a, b) = (&self.nodes[first], &self.nodes[second]);
                PlanNode {
                    len,
                    stride,
                    kind: NodeKind::Split {
                        p: pair.p,
                        q: pair.q,
                        first,
                        second,
                    },
                    height: 1 + a.height.max(b.height),
                    scratch: len.max(pair.q + b.scratch).max(a.scratch),
                }
            }
            Method::Radix2 => PlanNode {
                len,
                stride,
                kind: NodeKind::Radix2,
                height: 1,
                scratch: 0,
            },
            Method::Direct | Method::MixedRadix(_) => PlanNode {
                len,
                stride,
                kind: NodeKind::Direct,
                height: 1,
                scratch: if len > 1 { len } else { 0 },
            },
        };
        self.nodes.push(node);
        Ok(self.nodes.len() - 1)
    }
}

/// Immutable, reusable transform of one length and direction.
///
/// Plans hold no per-call state and are `Send + Sync`; share them behind an
/// `Arc` to transform from several threads at once, each thread bringing its
/// own scratch buffer.
#[derive(Debug, Clone)]
pub struct TransformPlan<T: Float> {
    len: usize,
    direction: Direction,
    factors: FactorPair,
    method: Method,
    twiddles: TwiddleTable<T>,
    nodes: Vec<PlanNode>,
    root: usize,
}

/// Plan a length-`n` transform using [`PlanConfig::current`].
///
/// With a `factor_hint` the root split uses exactly that pair (a pair with a
/// unit factor means a direct transform); sub-lengths are always planned by
/// the estimator.
///
/// # Errors
/// - [`PlanError::InvalidSize`] if `n == 0`, `n` exceeds the configured maximum,
///   or the factor tree is deeper than the configured bound.
/// - [`PlanError::FactorizationMismatch`] if the hint does not multiply to `n`.
pub fn create_plan<T: Float>(
    n: usize,
    direction: Direction,
    factor_hint: Option<FactorPair>,
) -> Result<TransformPlan<T>, PlanError> {
    create_plan_with_config(n, direction, factor_hint, &PlanConfig::current())
}

/// [`create_plan`] with explicit limits.
pub fn create_plan_with_config<T: Float>(
    n: usize,
    direction: Direction,
    factor_hint: Option<FactorPair>,
    config: &PlanConfig,
) -> Result<TransformPlan<T>, PlanError> {
    if n == 0 || n > config.max_size {
        return Err(PlanError::InvalidSize);
    }
    let requested = match factor_hint {
        Some(pair) if pair.len() != Some(n) => return Err(PlanError::FactorizationMismatch),
        Some(pair) => Method::MixedRadix(pair),
        None => estimate_method_with(n, config),
    };
    let method = match requested {
        Method::MixedRadix(pair) if pair.is_degenerate() => Method::Direct,
        m => m,
    };
    let factors = match method {
        Method::MixedRadix(pair) => pair,
        Method::Direct | Method::Radix2 => FactorPair::new(n, 1),
    };

    let mut builder = TreeBuilder {
        n,
        config,
        nodes: Vec::new(),
        memo: HashMap::new(),
    };
    let root = builder.build(n, method, 1)?;
    let twiddles = generate_twiddles(n, direction)?;
    let plan = TransformPlan {
        len: n,
        direction,
        factors,
        method,
        twiddles,
        nodes: builder.nodes,
        root,
    };
    crate::debug_log!(
        "planned n={} (prime factors {:?}) {:?} {:?}: {} nodes, depth {}, scratch {}",
        n,
        crate::radix::factorize(n),
        direction,
        method,
        plan.node_count(),
        plan.depth(),
        plan.scratch_len()
    );
    Ok(plan)
}

/// Run `plan` on `input` and return the spectrum.
pub fn execute<T: Float>(plan: &TransformPlan<T>, input: &[Complex<T>]) -> Vec<Complex<T>> {
    plan.execute(input)
}

impl<T: Float> TransformPlan<T> {
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; a plan covers at least one sample.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Root split. Plans that do not split at the root report `(n, 1)`.
    pub fn factors(&self) -> FactorPair {
        self.factors
    }

    /// Method used at the root.
    pub fn method(&self) -> Method {
        self.method
    }

    pub fn twiddles(&self) -> &TwiddleTable<T> {
        &self.twiddles
    }

    /// Number of distinct nodes in the factor tree.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Levels in the factor tree; a plan that does not split has depth 1.
    pub fn depth(&self) -> usize {
        self.nodes[self.root].height
    }

    /// Minimum scratch length accepted by the `*_with_scratch` methods.
    pub fn scratch_len(&self) -> usize {
        self.nodes[self.root].scratch
    }

    /// A zeroed scratch buffer of [`scratch_len`](Self::scratch_len).
    pub fn make_scratch(&self) -> Vec<Complex<T>> {
        vec![Complex::zero(); self.scratch_len()]
    }

    /// Transform `input` into a new vector.
    ///
    /// # Panics
    /// Panics if `input.len() != self.len()`.
    pub fn execute(&self, input: &[Complex<T>]) -> Vec<Complex<T>> {
        self.execute_observed(input, &mut NoObserver)
    }

    /// [`execute`](Self::execute) reporting every stage to `observer`.
    pub fn execute_observed<O>(&self, input: &[Complex<T>], observer: &mut O) -> Vec<Complex<T>>
    where
        O: PipelineObserver<T> + ?Sized,
    {
        self.check_len(input.len());
        let mut output = input.to_vec();
        let mut scratch = self.make_scratch();
        self.run(self.root, &mut output, &mut scratch, 0, observer);
        output
    }

    /// Transform `input` into `output`, allocating scratch internally.
    ///
    /// # Panics
    /// Panics if either slice length differs from `self.len()`.
    pub fn execute_into(&self, input: &[Complex<T>], output: &mut [Complex<T>]) {
        let mut scratch = self.make_scratch();
        self.execute_with_scratch(input, output, &mut scratch);
    }

    /// Transform `input` into `output` without allocating.
    ///
    /// # Panics
    /// Panics if either slice length differs from `self.len()` or `scratch` is
    /// shorter than [`scratch_len`](Self::scratch_len).
    pub fn execute_with_scratch(
        &self,
        input: &[Complex<T>],
        output: &mut [Complex<T>],
        scratch: &mut [Complex<T>],
    ) {
        self.check_len(input.len());
        self.check_len(output.len());
        output.copy_from_slice(input);
        self.process_with_scratch(output, scratch);
    }

    /// Transform `buffer` in place without allocating.
    ///
    /// # Panics
    /// Same conditions as [`execute_with_scratch`](Self::execute_with_scratch).
    pub fn process_with_scratch(&self, buffer: &mut [Complex<T>], scratch: &mut [Complex<T>]) {
        self.process_with_scratch_observed(buffer, scratch, &mut NoObserver);
    }

    /// [`process_with_scratch`](Self::process_with_scratch) reporting every
    /// stage to `observer`.
    pub fn process_with_scratch_observed<O>(
        &self,
        buffer: &mut [Complex<T>],
        scratch: &mut [Complex<T>],
        observer: &mut O,
    ) where
        O: PipelineObserver<T> + ?Sized,
    {
        self.check_len(buffer.len());
        assert!(
            scratch.len() >= self.scratch_len(),
            "scratch holds {} samples, plan needs {}",
            scratch.len(),
            self.scratch_len()
        );
        self.run(self.root, buffer, scratch, 0, observer);
    }

    fn check_len(&self, len: usize) {
        assert_eq!(
            len, self.len,
            "buffer length {} does not match plan length {}",
            len, self.len
        );
    }

    fn run<O>(
        &self,
        idx: usize,
        data: &mut [Complex<T>],
        scratch: &mut [Complex<T>],
        depth: usize,
        observer: &mut O,
    ) where
        O: PipelineObserver<T> + ?Sized,
    {
        let node = self.nodes[idx];
        match node.kind {
            NodeKind::Direct => self.direct_leaf(&node, data, scratch),
            NodeKind::Radix2 => self.radix2_leaf(&node, data),
            NodeKind::Split {
                p,
                q,
                first,
                second,
            } => {
                let n = node.len;
                let emit = |stage| StageEvent {
                    stage,
                    len: n,
                    depth,
                };

                {
                    let x = &mut scratch[..n];
                    x.copy_from_slice(data);
                    for i in 0..q {
                        for k in 0..p {
                            data[p * i + k] = x[k * q + i];
                        }
                    }
                }
                observer.on_stage(emit(Stage::Decimated), data);

                for block in data.chunks_exact_mut(p) {
                    self.run(first, block, scratch, depth + 1, observer);
                }
                observer.on_stage(emit(Stage::SubTransformed), data);

                // row 0 and column 0 multiply by w^0 = 1
                for k in 1..q {
                    for i in 1..p {
                        data[p * k + i] *= self.twiddles.strided(i * k, node.stride);
                    }
                }
                observer.on_stage(emit(Stage::Twiddled), data);

                let (column, rest) = scratch.split_at_mut(q);
                for i in 0..p {
                    for k in 0..q {
                        column[k] = data[p * k + i];
                    }
                    self.run(second, column, rest, depth + 1, observer);
                    for k in 0..q {
                        data[p * k + i] = column[k];
                    }
                }
                observer.on_stage(emit(Stage::Combined), data);
            }
        }
    }

    fn direct_leaf(&self, node: &PlanNode, data: &mut [Complex<T>], scratch: &mut [Complex<T>]) {
        let n = node.len;
        if n == 1 {
            return;
        }
        let table = self.twiddles.as_slice();
        let out = &mut scratch[..n];
        for (i, y) in out.iter_mut().enumerate() {
            let mut acc = Complex::zero();
            // r tracks (i * k) mod n
            let mut r = 0;
            for &x in data.iter() {
                acc += x * table[r * node.stride];
                r += i;
                if r >= n {
                    r -= n;
                }
            }
            *y = acc;
        }
        data.copy_from_slice(out);
    }

    fn radix2_leaf(&self, node: &PlanNode, data: &mut [Complex<T>]) {
        let n = node.len;
        let table = self.twiddles.as_slice();
        bit_reverse_permute(data);
        let mut size = 2;
        while size <= n {
            let half = size / 2;
            let step = (n / size) * node.stride;
            for block in data.chunks_exact_mut(size) {
                let (lo, hi) = block.split_at_mut(half);
                for (j, (u, v)) in lo.iter_mut().zip(hi.iter_mut()).enumerate() {
                    let t = *v * table[j * step];
                    *v = *u - t;
                    *u = *u + t;
                }
            }
            size <<= 1;
        }
    }
}
