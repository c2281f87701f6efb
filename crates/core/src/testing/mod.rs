//! Shared test support for fallible pipelines
//!
//! Spies that record call order, arithmetic fixtures that fail in known ways,
//! and proptest strategies for their operands. Enabled for downstream crates
//! through the `testing` feature.

use parking_lot::Mutex;
use std::sync::Arc;

/// Install a fmt subscriber for tests, filtered by `RUST_LOG`
///
/// Defaults to `warn`. Safe to call from every test; only the first call wins.
pub fn init_test_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .with_target(false)
        .compact()
        .try_init();
}

/// Records which steps of a pipeline ran and in what order
#[derive(Debug, Default)]
pub struct CallLog {
    entries: Mutex<Vec<&'static str>>,
}

impl CallLog {
    /// Create a new shared log
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Record that `step` was invoked
    pub fn record(&self, step: &'static str) {
        self.entries.lock().push(step);
    }

    /// Steps in invocation order
    #[must_use]
    pub fn entries(&self) -> Vec<&'static str> {
        self.entries.lock().clone()
    }

    /// How many times `step` was invoked
    #[must_use]
    pub fn count(&self, step: &str) -> usize {
        self.entries.lock().iter().filter(|s| **s == step).count()
    }

    /// Whether nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

/// Arithmetic steps with well-defined failures
pub mod fixtures {
    /// Failure raised by the arithmetic fixtures
    #[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
    pub enum MathError {
        #[error("division by zero")]
        DivideByZero,
        #[error("arithmetic overflow")]
        Overflow,
        #[error("negative operand: {0}")]
        Negative(i64),
    }

    /// `t + u`, never fails for operands from [`super::generators::operand`]
    pub fn sum(t: i64, u: i64) -> Result<i64, MathError> {
        t.checked_add(u).ok_or(MathError::Overflow)
    }

    /// `t / u`, failing on a zero divisor
    pub fn divide(t: i64, u: i64) -> Result<i64, MathError> {
        if u == 0 {
            return Err(MathError::DivideByZero);
        }
        t.checked_div(u).ok_or(MathError::Overflow)
    }

    /// `r * 2`
    pub fn double(r: i64) -> Result<i64, MathError> {
        r.checked_mul(2).ok_or(MathError::Overflow)
    }

    /// Passes non-negative values through, rejects the rest
    pub fn non_negative(r: i64) -> Result<i64, MathError> {
        if r < 0 {
            Err(MathError::Negative(r))
        } else {
            Ok(r)
        }
    }
}

/// Property-based test generators
pub mod generators {
    use proptest::prelude::*;

    /// Operands small enough that sums and doubles never overflow
    pub fn operand() -> impl Strategy<Value = i64> {
        -1_000_000i64..1_000_000
    }

    /// Operands that are safe divisors
    pub fn divisor() -> impl Strategy<Value = i64> {
        prop_oneof![-1_000_000i64..0, 1i64..1_000_000]
    }
}
