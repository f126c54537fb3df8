use std::env;
use std::fmt::Write as _;
use std::process::Command;

use anyhow::{bail, Context, Result};
use mixfft::{create_plan, direct_transform, rms_error, Complex32, Direction, FactorPair};

/// RMS error below which a mixed-radix run counts as a pass.
pub const DEFAULT_RMSE_THRESHOLD: f32 = 1e-3;

/// Options shared by the cargo commands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BuildConfig {
    pub features: Vec<String>,
}

impl BuildConfig {
    /// Join features into a single string suitable for passing to cargo.
    pub fn features_arg(&self) -> Option<String> {
        if self.features.is_empty() {
            None
        } else {
            Some(self.features.join(" "))
        }
    }
}

/// Read extra crate features from `MIXFFT_FEATURES`.
pub fn detect_config() -> BuildConfig {
    compute_config(&env::var("MIXFFT_FEATURES").unwrap_or_default())
}

/// Compute a [`BuildConfig`] from a whitespace separated feature list.
pub fn compute_config(extra: &str) -> BuildConfig {
    BuildConfig {
        features: extra.split_whitespace().map(str::to_string).collect(),
    }
}

fn cargo_with_features(subcommand: &str, cfg: &BuildConfig) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.arg(subcommand);
    if let Some(f) = cfg.features_arg() {
        cmd.arg("--features").arg(f);
    }
    cmd
}

pub fn build_command(cfg: &BuildConfig) -> Command {
    cargo_with_features("build", cfg)
}

pub fn test_command(cfg: &BuildConfig) -> Command {
    cargo_with_features("test", cfg)
}

pub fn clippy_command() -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["clippy", "--all-targets", "--all-features"]);
    cmd
}

pub fn fmt_command() -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["fmt", "--all"]);
    cmd
}

pub fn bench_command() -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["bench", "-p", "mixfft-bench"]);
    cmd
}

/// Result of comparing a hinted mixed-radix plan with the direct DFT.
#[derive(Debug, Clone)]
pub struct VerifyReport {
    pub factors: FactorPair,
    pub direction: Direction,
    pub output: Vec<Complex32>,
    pub expected: Vec<Complex32>,
    pub rmse: f32,
    pub threshold: f32,
}

impl VerifyReport {
    pub fn passed(&self) -> bool {
        self.rmse < self.threshold
    }

    /// One line per bin followed by the RMS summary.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, (y, e)) in self.output.iter().zip(&self.expected).enumerate() {
            let _ = writeln!(
                out,
                "  y[{i:3}] = {:12.6} + j*{:12.6} (expected {:12.6} + j{:12.6})",
                y.re, y.im, e.re, e.im
            );
        }
        let _ = writeln!(
            out,
            "RMS error : {:12.4e} ({})",
            self.rmse,
            if self.passed() { "pass" } else { "FAIL" }
        );
        out
    }
}

/// Test input `x[i] = i + j(3 - i)`.
pub fn ramp_input(n: usize) -> Vec<Complex32> {
    (0..n)
        .map(|i| Complex32::new(i as f32, 3.0 - i as f32))
        .collect()
}

/// Run an `n = p * q` transform split as `(p, q)` and compare it with the
/// direct transform of the same input.
pub fn verify(p: usize, q: usize, direction: Direction, threshold: f32) -> Result<VerifyReport> {
    let n = p.checked_mul(q).context("transform size overflows")?;
    if n == 0 {
        bail!("input transform size must be at least 1");
    }
    let factors = FactorPair::new(p, q);
    let plan = create_plan::<f32>(n, direction, Some(factors))
        .with_context(|| format!("planning {p} x {q}"))?;
    let input = ramp_input(n);
    let output = plan.execute(&input);
    let expected = direct_transform(&input, direction);
    let rmse = rms_error(&output, &expected);
    Ok(VerifyReport {
        factors,
        direction,
        output,
        expected,
        rmse,
        threshold,
    })
}
