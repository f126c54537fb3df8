use core::fmt;

/// Errors detected while building a transform plan.
///
/// Execution itself never fails once a plan exists; every size problem is
/// reported here, at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanError {
    /// The length is zero, above the configured maximum, or needs a deeper
    /// factor tree than the configured recursion bound.
    InvalidSize,
    /// A caller-supplied factor hint `(p, q)` does not satisfy `p * q == n`.
    FactorizationMismatch,
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::InvalidSize => write!(f, "invalid transform size"),
            PlanError::FactorizationMismatch => {
                write!(f, "factor hint does not multiply to the transform size")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlanError {}
