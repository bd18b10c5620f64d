//! Batch generation with bounded-retry duplicate rejection.

use std::collections::HashSet;

use rand::Rng;
use tracing::{debug, trace, warn};

use crate::domain::{AlphabetSet, FormatSpec, Token};
use crate::error::{CodeError, Result};
use crate::service::capacity::Capacity;

/// Share of the requested count granted as collision retries, in percent.
pub const RETRY_PERCENT: usize = 10;

/// Retries granted on top of the proportional share.
pub const RETRY_BASE: usize = 4;

/// Upper bound on the slots reserved up front for a batch. Larger batches
/// grow as codes are accepted.
pub const MAX_PREALLOCATED: usize = 1 << 16;

/// Number of collisions tolerated while generating `count` codes.
#[must_use]
pub const fn retry_budget(count: usize) -> usize {
    count.saturating_mul(RETRY_PERCENT) / 100 + RETRY_BASE
}

/// Initial reservation for a batch of `count` codes.
const fn initial_reservation(count: usize) -> usize {
    if count < MAX_PREALLOCATED {
        count
    } else {
        MAX_PREALLOCATED
    }
}

/// One template position with its candidate characters resolved.
#[derive(Debug)]
enum Slot {
    Literal(char),
    Draw(Vec<char>),
}

/// A single batch request, validated and ready to run.
#[derive(Debug)]
pub struct BatchGenerator<'a> {
    slots: Vec<Slot>,
    prefix: &'a str,
    suffix: &'a str,
    count: usize,
    max_retries: usize,
}

impl<'a> BatchGenerator<'a> {
    /// Check `count` against `capacity` and resolve every placeholder pool
    /// once for the whole batch.
    ///
    /// # Errors
    ///
    /// Returns [`CodeError::NoCharactersAvailable`] when the capacity is zero
    /// or a placeholder selects an empty pool, and
    /// [`CodeError::TooManyCodesRequested`] when `count` exceeds an exact
    /// capacity.
    pub fn prepare(
        alphabet: &AlphabetSet,
        format: &FormatSpec,
        prefix: &'a str,
        suffix: &'a str,
        capacity: Capacity,
        count: usize,
    ) -> Result<Self> {
        match capacity {
            Capacity::Zero => return Err(CodeError::NoCharactersAvailable),
            Capacity::Exact(max) if !capacity.allows(count) => {
                return Err(CodeError::TooManyCodesRequested {
                    requested: count,
                    capacity: max,
                });
            }
            Capacity::Exact(_) | Capacity::Overflow => {}
        }

        let slots = format
            .tokens()
            .iter()
            .map(|token| match token {
                Token::Literal(c) => Ok(Slot::Literal(*c)),
                Token::Placeholder(selector) => {
                    let pool = alphabet.derived_pool(*selector);
                    if pool.is_empty() {
                        Err(CodeError::NoCharactersAvailable)
                    } else {
                        Ok(Slot::Draw(pool))
                    }
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            slots,
            prefix,
            suffix,
            count,
            max_retries: retry_budget(count),
        })
    }

    /// Draw codes until `count` distinct ones have been collected.
    ///
    /// # Errors
    ///
    /// Returns [`CodeError::MaxRetriesExceeded`] once more duplicates were
    /// drawn than [`retry_budget`] grants for the batch. No partial batch is
    /// returned.
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<String>> {
        debug!(
            count = self.count,
            max_retries = self.max_retries,
            "Generating batch"
        );

        let reserved = initial_reservation(self.count);
        let mut codes = Vec::with_capacity(reserved);
        let mut seen = HashSet::with_capacity(reserved);
        let mut retries = 0;

        while codes.len() < self.count {
            let code = self.draw(rng);

            if seen.contains(&code) {
                retries += 1;
                trace!(retries, code = %code, "Duplicate code drawn");
                if retries > self.max_retries {
                    warn!(
                        generated = codes.len(),
                        requested = self.count,
                        max_retries = self.max_retries,
                        "Retry budget exhausted"
                    );
                    return Err(CodeError::MaxRetriesExceeded {
                        retries: self.max_retries,
                    });
                }
                continue;
            }

            seen.insert(code.clone());
            codes.push(code);
        }

        debug!(count = codes.len(), retries, "Batch generated");
        Ok(codes)
    }

    /// Build one candidate code.
    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let mut code =
            String::with_capacity(self.prefix.len() + self.slots.len() * 4 + self.suffix.len());
        code.push_str(self.prefix);

        for slot in &self.slots {
            match slot {
                Slot::Literal(c) => code.push(*c),
                Slot::Draw(pool) => code.push(pool[rng.random_range(0..pool.len())]),
            }
        }

        code.push_str(self.suffix);
        code
    }
}
