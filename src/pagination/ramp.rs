//! Page size ramp-up
//!
//! Starting with a small `limit` keeps the first request cheap; growing it on
//! every followed page cuts the number of requests for large result sets.

/// Policy mapping the current `limit` to the one used for the next page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RampUp {
    /// Keep the limit unchanged
    #[default]
    Constant,
    /// Multiply the limit on every page, capped at `ceiling`
    Geometric {
        /// Factor applied per page
        multiplier: u64,
        /// Upper bound for the limit
        ceiling: u64,
    },
}

impl RampUp {
    /// Create a geometric ramp-up policy
    pub fn geometric(multiplier: u64, ceiling: u64) -> Self {
        Self::Geometric {
            multiplier,
            ceiling,
        }
    }

    /// Compute the next limit
    pub fn apply(&self, current: u64) -> u64 {
        match *self {
            Self::Constant => current,
            Self::Geometric {
                multiplier,
                ceiling,
            } => current.saturating_mul(multiplier).min(ceiling),
        }
    }
}
