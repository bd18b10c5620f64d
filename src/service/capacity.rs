//! Theoretical capacity of an alphabet/format combination.

use crate::domain::{AlphabetSet, FormatSpec};

/// Default safety ceiling on the number of distinct codes reasoned about.
pub const DEFAULT_MAX_CODES: u64 = 100_000_000;

/// The running product may exceed the ceiling by this factor before
/// estimation gives up.
const OVERFLOW_FACTOR: u64 = 10;

/// Number of distinct codes a configuration can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capacity {
    /// A placeholder selects an empty pool, or the format carries no
    /// entropy at all.
    Zero,
    /// Exact number of distinct codes.
    Exact(u64),
    /// Too large to reason about precisely.
    Overflow,
}

impl Capacity {
    /// Integer form: `0`, the exact count, or `-1` for [`Capacity::Overflow`].
    #[must_use]
    pub fn as_i64(self) -> i64 {
        match self {
            Self::Zero => 0,
            Self::Exact(n) => i64::try_from(n).unwrap_or(i64::MAX),
            Self::Overflow => -1,
        }
    }

    /// Whether a batch of `count` distinct codes fits.
    #[must_use]
    pub fn allows(self, count: usize) -> bool {
        match self {
            Self::Zero => false,
            Self::Exact(n) => count as u64 <= n,
            Self::Overflow => true,
        }
    }
}

/// Computes [`Capacity`] as the product of derived pool sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityEstimator {
    max_codes: u64,
}

impl CapacityEstimator {
    /// Create an estimator with the given safety ceiling.
    #[must_use]
    pub const fn new(max_codes: u64) -> Self {
        Self { max_codes }
    }

    /// Estimate the capacity of `format` drawn from `alphabet`.
    ///
    /// Pools are sized from the alphabet as it is now; nothing is cached.
    #[must_use]
    pub fn estimate(&self, alphabet: &AlphabetSet, format: &FormatSpec) -> Capacity {
        let threshold = self.max_codes.saturating_mul(OVERFLOW_FACTOR);
        let mut total: u64 = 1;

        for selector in format.placeholders() {
            total = total.saturating_mul(alphabet.derived_len(selector) as u64);
            if total > threshold {
                return Capacity::Overflow;
            }
        }

        match total {
            0 | 1 => Capacity::Zero,
            n => Capacity::Exact(n),
        }
    }
}

impl Default for CapacityEstimator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CODES)
    }
}
