//! Character pools.
//!
//! An [`AlphabetSet`] owns the four base pools codes are drawn from. Pools are
//! value snapshots: every mutation builds a new set and swaps it in only once
//! the whole input has been accepted, so a failed call never leaves a pool
//! half-modified.

use std::collections::HashSet;
use std::fmt;

use tracing::debug;

use crate::domain::format::Selector;
use crate::error::{CodeError, Result};

/// Default digit pool.
pub const DEFAULT_NUMBERS: &str = "0123456789";
/// Default lowercase pool.
pub const DEFAULT_LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
/// Default uppercase pool.
pub const DEFAULT_UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Lowercase letters dropped by the readable preset.
const AMBIGUOUS_LOWERCASE: [char; 1] = ['l'];

/// Highest code point accepted by [`AlphabetSet::extend`].
const MAX_LATIN1: char = '\u{ff}';

/// Ordered set of unique characters.
///
/// Iteration order is stable so a random index always maps to the same
/// character for a given pool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterPool(Vec<char>);

impl CharacterPool {
    /// Build a pool from a string, rejecting whitespace and duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`CodeError::WhitespaceNotAllowed`] or
    /// [`CodeError::DuplicateCharacters`].
    pub fn parse(chars: &str) -> Result<Self> {
        if chars.chars().any(char::is_whitespace) {
            return Err(CodeError::WhitespaceNotAllowed);
        }
        if has_duplicates(chars) {
            return Err(CodeError::DuplicateCharacters);
        }
        Ok(Self(chars.chars().collect()))
    }

    /// Build a pool from a string known to be valid.
    fn from_known(chars: &str) -> Self {
        Self(chars.chars().collect())
    }

    /// Number of characters in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the pool contains `c`.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    /// The pool as a slice, in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[char] {
        &self.0
    }

    /// Copy of this pool without `c`.
    fn without(&self, c: char) -> Self {
        let mut chars = self.0.clone();
        if let Some(pos) = chars.iter().position(|&existing| existing == c) {
            chars.remove(pos);
        }
        Self(chars)
    }

    /// Copy of this pool with `c` appended.
    fn with(&self, c: char) -> Self {
        let mut chars = self.0.clone();
        chars.push(c);
        Self(chars)
    }
}

impl fmt::Display for CharacterPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// Base pool a single character belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PoolKind {
    Numbers,
    Lowercase,
    Uppercase,
}

/// The four base character pools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphabetSet {
    numbers: CharacterPool,
    lowercase: CharacterPool,
    uppercase: CharacterPool,
    custom: CharacterPool,
}

impl AlphabetSet {
    /// Default pools without uppercase letters or visually ambiguous
    /// lowercase letters.
    #[must_use]
    pub fn readable() -> Self {
        let lowercase = AMBIGUOUS_LOWERCASE
            .iter()
            .fold(CharacterPool::from_known(DEFAULT_LOWERCASE), |pool, &c| {
                pool.without(c)
            });

        Self {
            lowercase,
            uppercase: CharacterPool::default(),
            ..Self::default()
        }
    }

    /// Digit pool.
    #[must_use]
    pub const fn numbers(&self) -> &CharacterPool {
        &self.numbers
    }

    /// Lowercase letter pool.
    #[must_use]
    pub const fn lowercase(&self) -> &CharacterPool {
        &self.lowercase
    }

    /// Uppercase letter pool.
    #[must_use]
    pub const fn uppercase(&self) -> &CharacterPool {
        &self.uppercase
    }

    /// Custom pool.
    #[must_use]
    pub const fn custom(&self) -> &CharacterPool {
        &self.custom
    }

    /// Remove characters from the digit and letter pools.
    ///
    /// Digits are removed from the number pool, letters from the pool
    /// matching their case. Characters not currently in a pool are ignored.
    /// The call is atomic: every character is classified before any pool
    /// changes.
    ///
    /// # Errors
    ///
    /// Returns [`CodeError::NotALetterOrDigit`] for the first character that
    /// is neither a digit nor a letter.
    pub fn exclude(&mut self, chars: &str) -> Result<()> {
        let mut next = self.clone();

        for c in chars.chars() {
            let kind = exclusion_kind(c).inspect_err(|_| {
                debug!(character = ?c, "rejected exclusion");
            })?;
            let pool = next.pool_mut(kind);
            *pool = pool.without(c);
        }

        *self = next;
        Ok(())
    }

    /// Add Latin-1 letters to the lowercase and uppercase pools.
    ///
    /// The call is atomic: on any error both letter pools keep their previous
    /// contents.
    ///
    /// # Errors
    ///
    /// Checked in order: [`CodeError::NotLatin1`],
    /// [`CodeError::WhitespaceNotAllowed`], [`CodeError::DuplicateCharacters`],
    /// then per character [`CodeError::CharacterAlreadyExists`] or
    /// [`CodeError::NotALetter`].
    pub fn extend(&mut self, chars: &str) -> Result<()> {
        if let Some(c) = chars.chars().find(|&c| c > MAX_LATIN1) {
            return Err(CodeError::NotLatin1(c));
        }
        if chars.chars().any(char::is_whitespace) {
            return Err(CodeError::WhitespaceNotAllowed);
        }
        if has_duplicates(chars) {
            return Err(CodeError::DuplicateCharacters);
        }

        let mut next = self.clone();

        for c in chars.chars() {
            let kind = if c.is_lowercase() {
                PoolKind::Lowercase
            } else if c.is_uppercase() {
                PoolKind::Uppercase
            } else {
                return Err(CodeError::NotALetter(c));
            };

            let pool = next.pool_mut(kind);
            if pool.contains(c) {
                debug!(character = ?c, "extension already present");
                return Err(CodeError::CharacterAlreadyExists(c));
            }
            *pool = pool.with(c);
        }

        *self = next;
        Ok(())
    }

    /// Replace the custom pool.
    ///
    /// # Errors
    ///
    /// Returns [`CodeError::WhitespaceNotAllowed`] or
    /// [`CodeError::DuplicateCharacters`]; the previous pool is kept.
    pub fn set_custom(&mut self, chars: &str) -> Result<()> {
        self.custom = CharacterPool::parse(chars)?;
        Ok(())
    }

    /// Candidate characters for a placeholder, computed from the current pools.
    #[must_use]
    pub fn derived_pool(&self, selector: Selector) -> Vec<char> {
        self.derived_parts(selector).concat()
    }

    /// Size of the derived pool without materializing it.
    #[must_use]
    pub fn derived_len(&self, selector: Selector) -> usize {
        self.derived_parts(selector).iter().map(|part| part.len()).sum()
    }

    fn derived_parts(&self, selector: Selector) -> Vec<&[char]> {
        let numbers = self.numbers.as_slice();
        let lower = self.lowercase.as_slice();
        let upper = self.uppercase.as_slice();

        match selector {
            Selector::Any => vec![numbers, upper, lower],
            Selector::Digit => vec![numbers],
            Selector::Lower => vec![lower],
            Selector::LowerOrDigit => vec![lower, numbers],
            Selector::Upper => vec![upper],
            Selector::UpperOrDigit => vec![upper, numbers],
            Selector::Letter => vec![upper, lower],
            Selector::Custom => vec![self.custom.as_slice()],
        }
    }

    fn pool_mut(&mut self, kind: PoolKind) -> &mut CharacterPool {
        match kind {
            PoolKind::Numbers => &mut self.numbers,
            PoolKind::Lowercase => &mut self.lowercase,
            PoolKind::Uppercase => &mut self.uppercase,
        }
    }
}

impl Default for AlphabetSet {
    fn default() -> Self {
        Self {
            numbers: CharacterPool::from_known(DEFAULT_NUMBERS),
            lowercase: CharacterPool::from_known(DEFAULT_LOWERCASE),
            uppercase: CharacterPool::from_known(DEFAULT_UPPERCASE),
            custom: CharacterPool::default(),
        }
    }
}

/// Pool an excluded character is removed from.
fn exclusion_kind(c: char) -> Result<PoolKind> {
    if c.is_ascii_digit() {
        Ok(PoolKind::Numbers)
    } else if c.is_lowercase() {
        Ok(PoolKind::Lowercase)
    } else if c.is_uppercase() {
        Ok(PoolKind::Uppercase)
    } else {
        Err(CodeError::NotALetterOrDigit(c))
    }
}

fn has_duplicates(chars: &str) -> bool {
    let mut seen = HashSet::new();
    !chars.chars().all(|c| seen.insert(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LATIN1_UPPER: &str = "ÀÁÂÃÄÅÆÇÈÉÊËÌÍÎÏÐÑÒÓÔÕÖØÙÚÛÜÝÞ";
    const LATIN1_LOWER: &str = "µßàáâãäåæçèéêëìíîïðñòóôõöøùúûüýþÿ";

    fn assert_default_letters(alphabet: &AlphabetSet) {
        assert_eq!(alphabet.lowercase().to_string(), DEFAULT_LOWERCASE);
        assert_eq!(alphabet.uppercase().to_string(), DEFAULT_UPPERCASE);
    }

    #[test]
    fn test_defaults() {
        let alphabet = AlphabetSet::default();
        assert_eq!(alphabet.numbers().to_string(), DEFAULT_NUMBERS);
        assert_default_letters(&alphabet);
        assert!(alphabet.custom().is_empty());
    }

    #[test]
    fn test_readable() {
        let alphabet = AlphabetSet::readable();
        assert!(alphabet.uppercase().is_empty());
        assert!(!alphabet.lowercase().contains('l'));
        assert_eq!(alphabet.lowercase().len(), 25);
        assert_eq!(alphabet.numbers().to_string(), DEFAULT_NUMBERS);
    }

    #[test]
    fn test_exclude_from_each_pool() {
        let mut alphabet = AlphabetSet::default();
        alphabet.exclude("1aZ").unwrap();

        assert_eq!(alphabet.numbers().to_string(), "023456789");
        assert_eq!(alphabet.lowercase().to_string(), "bcdefghijklmnopqrstuvwxyz");
        assert_eq!(alphabet.uppercase().to_string(), "ABCDEFGHIJKLMNOPQRSTUVWXY");
    }

    #[test]
    fn test_exclude_full_pool() {
        let mut alphabet = AlphabetSet::default();
        alphabet.exclude(DEFAULT_UPPERCASE).unwrap();

        assert!(alphabet.uppercase().is_empty());
        assert_eq!(alphabet.lowercase().to_string(), DEFAULT_LOWERCASE);
    }

    #[test]
    fn test_exclude_empty_and_missing() {
        let mut alphabet = AlphabetSet::default();
        alphabet.exclude("").unwrap();
        alphabet.exclude("a").unwrap();
        alphabet.exclude("a").unwrap();

        assert_eq!(alphabet.lowercase().len(), 25);
    }

    #[test]
    fn test_exclude_is_atomic() {
        let mut alphabet = AlphabetSet::default();
        let before = alphabet.clone();

        assert_eq!(alphabet.exclude("ab$"), Err(CodeError::NotALetterOrDigit('$')));
        assert_eq!(alphabet, before);
    }

    #[test]
    fn test_extend_latin1_letters() {
        let mut alphabet = AlphabetSet::default();
        alphabet
            .extend(&format!("{LATIN1_UPPER}{LATIN1_LOWER}"))
            .unwrap();

        assert_eq!(
            alphabet.lowercase().to_string(),
            format!("{DEFAULT_LOWERCASE}{LATIN1_LOWER}")
        );
        assert_eq!(
            alphabet.uppercase().to_string(),
            format!("{DEFAULT_UPPERCASE}{LATIN1_UPPER}")
        );
        assert_eq!(alphabet.numbers().to_string(), DEFAULT_NUMBERS);
    }

    #[test]
    fn test_extend_rejections_leave_pools_untouched() {
        let cases = [
            ("ÀÀ", CodeError::DuplicateCharacters),
            ("ÀÁÂ您好", CodeError::NotLatin1('您')),
            ("À Á", CodeError::WhitespaceNotAllowed),
            ("ÀD", CodeError::CharacterAlreadyExists('D')),
            ("ñc", CodeError::CharacterAlreadyExists('c')),
            ("ñ9", CodeError::NotALetter('9')),
        ];

        for (input, expected) in cases {
            let mut alphabet = AlphabetSet::default();
            assert_eq!(alphabet.extend(input), Err(expected), "input {input:?}");
            assert_default_letters(&alphabet);
        }
    }

    #[test]
    fn test_consecutive_extends() {
        let mut alphabet = AlphabetSet::default();
        alphabet.extend("ñ").unwrap();
        alphabet.extend("ß").unwrap();

        assert_eq!(
            alphabet.lowercase().to_string(),
            format!("{DEFAULT_LOWERCASE}ñß")
        );
        assert_eq!(alphabet.extend("ñ"), Err(CodeError::CharacterAlreadyExists('ñ')));
    }

    #[test]
    fn test_exclude_extended_letter() {
        let mut alphabet = AlphabetSet::default();
        alphabet.extend("Ñ").unwrap();
        alphabet.exclude("Ñ").unwrap();

        assert_default_letters(&alphabet);
    }

    #[test]
    fn test_set_custom() {
        let mut alphabet = AlphabetSet::default();
        alphabet.set_custom("!@#abc").unwrap();
        assert_eq!(alphabet.custom().to_string(), "!@#abc");

        assert_eq!(alphabet.set_custom("a b"), Err(CodeError::WhitespaceNotAllowed));
        assert_eq!(alphabet.set_custom("aa"), Err(CodeError::DuplicateCharacters));
        assert_eq!(alphabet.custom().to_string(), "!@#abc");

        alphabet.set_custom("").unwrap();
        assert!(alphabet.custom().is_empty());
    }

    #[test]
    fn test_derived_pools() {
        let alphabet = AlphabetSet::default();

        assert_eq!(alphabet.derived_len(Selector::Any), 62);
        assert_eq!(alphabet.derived_len(Selector::Digit), 10);
        assert_eq!(alphabet.derived_len(Selector::Lower), 26);
        assert_eq!(alphabet.derived_len(Selector::LowerOrDigit), 36);
        assert_eq!(alphabet.derived_len(Selector::Upper), 26);
        assert_eq!(alphabet.derived_len(Selector::UpperOrDigit), 36);
        assert_eq!(alphabet.derived_len(Selector::Letter), 52);
        assert_eq!(alphabet.derived_len(Selector::Custom), 0);

        let any = alphabet.derived_pool(Selector::Any);
        assert_eq!(any.first(), Some(&'0'));
        assert_eq!(any.last(), Some(&'z'));

        let lower_or_digit = alphabet.derived_pool(Selector::LowerOrDigit);
        assert_eq!(lower_or_digit.first(), Some(&'a'));
        assert_eq!(lower_or_digit.last(), Some(&'9'));
    }
}
