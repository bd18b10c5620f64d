//! Domain models for code generation.
//!
//! This module contains the character pools and the format template that
//! together describe which codes can be produced.

pub mod alphabet;
pub mod format;

pub use alphabet::{
    AlphabetSet, CharacterPool, DEFAULT_LOWERCASE, DEFAULT_NUMBERS, DEFAULT_UPPERCASE,
};
pub use format::{DEFAULT_FORMAT, FormatSpec, Selector, Token};
