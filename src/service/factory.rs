//! Code factory.
//!
//! Bundles an alphabet, a format template, a prefix and a suffix with its own
//! random source, and produces batches of distinct codes from them.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::{GeneratorSettings, Preset};
use crate::domain::{AlphabetSet, FormatSpec};
use crate::error::{CodeError, Result};
use crate::service::capacity::{Capacity, CapacityEstimator};
use crate::service::generator::BatchGenerator;

/// Generator configuration with an owned random source.
///
/// Every setter either applies its change completely or leaves the factory
/// untouched.
///
/// Cloning copies the configuration but reseeds the random source from the
/// operating system, so a clone never replays the codes of its original.
/// Call [`with_seed`](Self::with_seed) on the clone for a reproducible stream.
#[derive(Debug)]
pub struct CodeFactory {
    alphabet: AlphabetSet,
    format: FormatSpec,
    prefix: String,
    suffix: String,
    estimator: CapacityEstimator,
    rng: StdRng,
}

impl CodeFactory {
    /// Create a factory with the default pools and the `#aaaa` template,
    /// seeded from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self {
            alphabet: AlphabetSet::default(),
            format: FormatSpec::default(),
            prefix: String::new(),
            suffix: String::new(),
            estimator: CapacityEstimator::default(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a factory without uppercase letters or the lowercase `l`, to
    /// avoid visually ambiguous characters.
    #[must_use]
    pub fn readable() -> Self {
        Self {
            alphabet: AlphabetSet::readable(),
            ..Self::new()
        }
    }

    /// Build a factory from settings.
    ///
    /// Starts from the preset, then applies exclusions, extensions, the
    /// custom pool, the format, the prefix and the suffix, in that order.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any of the setters.
    pub fn from_settings(settings: &GeneratorSettings) -> Result<Self> {
        let mut factory = match settings.preset {
            Preset::Standard => Self::new(),
            Preset::Readable => Self::readable(),
        };

        if let Some(seed) = settings.seed {
            factory = factory.with_seed(seed);
        }
        factory.set_max_codes(settings.max_codes)?;

        factory.exclude(&settings.exclude)?;
        factory.extend(&settings.extend)?;
        factory.set_custom(&settings.custom)?;
        factory.set_format(&settings.format)?;
        factory.set_prefix(&settings.prefix)?;
        factory.set_suffix(&settings.suffix)?;

        Ok(factory)
    }

    /// Replace the random source with one seeded from `seed`.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Character pools.
    #[must_use]
    pub const fn alphabet(&self) -> &AlphabetSet {
        &self.alphabet
    }

    /// Format template.
    #[must_use]
    pub const fn format(&self) -> &FormatSpec {
        &self.format
    }

    /// Prefix prepended to every code.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Suffix appended to every code.
    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Remove digits and letters from their pools.
    ///
    /// # Errors
    ///
    /// See [`AlphabetSet::exclude`].
    pub fn exclude(&mut self, chars: &str) -> Result<()> {
        self.alphabet.exclude(chars)
    }

    /// Add Latin-1 letters to the letter pools.
    ///
    /// # Errors
    ///
    /// See [`AlphabetSet::extend`].
    pub fn extend(&mut self, chars: &str) -> Result<()> {
        self.alphabet.extend(chars)
    }

    /// Replace the custom pool.
    ///
    /// # Errors
    ///
    /// See [`AlphabetSet::set_custom`].
    pub fn set_custom(&mut self, chars: &str) -> Result<()> {
        self.alphabet.set_custom(chars)
    }

    /// Replace the format template.
    ///
    /// # Errors
    ///
    /// Returns [`CodeError::InvalidFormatCharacter`]; the old template is kept.
    pub fn set_format(&mut self, template: &str) -> Result<()> {
        self.format = FormatSpec::parse(template).inspect_err(|err| {
            debug!(template, error = %err, "rejected format");
        })?;
        Ok(())
    }

    /// Set the prefix.
    ///
    /// # Errors
    ///
    /// Returns [`CodeError::LeadingWhitespaceInPrefix`].
    pub fn set_prefix(&mut self, prefix: &str) -> Result<()> {
        if prefix.starts_with(char::is_whitespace) {
            return Err(CodeError::LeadingWhitespaceInPrefix);
        }
        prefix.clone_into(&mut self.prefix);
        Ok(())
    }

    /// Set the suffix.
    ///
    /// # Errors
    ///
    /// Returns [`CodeError::TrailingWhitespaceInSuffix`].
    pub fn set_suffix(&mut self, suffix: &str) -> Result<()> {
        if suffix.ends_with(char::is_whitespace) {
            return Err(CodeError::TrailingWhitespaceInSuffix);
        }
        suffix.clone_into(&mut self.suffix);
        Ok(())
    }

    /// Set the safety ceiling used by capacity estimation.
    ///
    /// # Errors
    ///
    /// Returns [`CodeError::Config`] when `max_codes` is zero; the old
    /// ceiling is kept.
    pub fn set_max_codes(&mut self, max_codes: u64) -> Result<()> {
        if max_codes == 0 {
            return Err(CodeError::Config("max_codes cannot be 0".to_string()));
        }
        self.estimator = CapacityEstimator::new(max_codes);
        Ok(())
    }

    /// Theoretical number of distinct codes.
    #[must_use]
    pub fn capacity(&self) -> Capacity {
        self.estimator.estimate(&self.alphabet, &self.format)
    }

    /// Capacity as an integer: `0` when nothing can be generated, `-1` when
    /// the capacity is too large to reason about.
    #[must_use]
    pub fn max_codes(&self) -> i64 {
        self.capacity().as_i64()
    }

    /// Generate `count` distinct codes using the factory's random source.
    ///
    /// # Errors
    ///
    /// Returns [`CodeError::NoCharactersAvailable`],
    /// [`CodeError::TooManyCodesRequested`] or
    /// [`CodeError::MaxRetriesExceeded`]. No partial batch is ever returned.
    pub fn generate(&mut self, count: usize) -> Result<Vec<String>> {
        let capacity = self.capacity();
        let generator = BatchGenerator::prepare(
            &self.alphabet,
            &self.format,
            &self.prefix,
            &self.suffix,
            capacity,
            count,
        )?;
        generator.run(&mut self.rng)
    }

    /// Generate `count` distinct codes drawing from `rng`.
    ///
    /// # Errors
    ///
    /// Same as [`generate`](Self::generate).
    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<String>> {
        BatchGenerator::prepare(
            &self.alphabet,
            &self.format,
            &self.prefix,
            &self.suffix,
            self.capacity(),
            count,
        )?
        .run(rng)
    }
}

impl Clone for CodeFactory {
    fn clone(&self) -> Self {
        Self {
            alphabet: self.alphabet.clone(),
            format: self.format.clone(),
            prefix: self.prefix.clone(),
            suffix: self.suffix.clone(),
            estimator: self.estimator,
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for CodeFactory {
    fn default() -> Self {
        Self::new()
    }
}
