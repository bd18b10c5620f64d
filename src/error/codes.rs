//! Error code constants.
//!
//! Error codes are organized by category:
//! - 1xxx: Alphabet errors
//! - 2xxx: Format, prefix and suffix errors
//! - 3xxx: Generation errors
//! - 5xxx: Configuration errors

/// Error code type with semantic categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(i32);

impl ErrorCode {
    // ===== Alphabet Errors (1xxx) =====

    /// Input contains the same character twice.
    pub const DUPLICATE_CHARACTERS: Self = Self(1001);

    /// Input contains whitespace.
    pub const WHITESPACE_NOT_ALLOWED: Self = Self(1002);

    /// Character is already part of the target pool.
    pub const CHARACTER_ALREADY_EXISTS: Self = Self(1003);

    /// Character is neither a digit nor a letter.
    pub const NOT_A_LETTER_OR_DIGIT: Self = Self(1004);

    /// Character is not a letter.
    pub const NOT_A_LETTER: Self = Self(1005);

    /// Character lies outside the Latin-1 range.
    pub const NOT_LATIN1: Self = Self(1006);

    // ===== Format Errors (2xxx) =====

    /// Character not allowed in a format template.
    pub const INVALID_FORMAT_CHARACTER: Self = Self(2001);

    /// Prefix starts with whitespace.
    pub const LEADING_WHITESPACE_IN_PREFIX: Self = Self(2002);

    /// Suffix ends with whitespace.
    pub const TRAILING_WHITESPACE_IN_SUFFIX: Self = Self(2003);

    // ===== Generation Errors (3xxx) =====

    /// Format selects an empty pool or carries no entropy.
    pub const NO_CHARACTERS_AVAILABLE: Self = Self(3001);

    /// Requested batch is larger than the capacity.
    pub const TOO_MANY_CODES_REQUESTED: Self = Self(3002);

    /// Too many collisions while filling a batch.
    pub const MAX_RETRIES_EXCEEDED: Self = Self(3003);

    // ===== Configuration Errors (5xxx) =====

    /// Settings could not be loaded or are invalid.
    pub const INVALID_CONFIG: Self = Self(5001);

    /// Get the error code as an i32.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }

    /// Get the category of this error code.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self.0 {
            1000..=1999 => ErrorCategory::Alphabet,
            2000..=2999 => ErrorCategory::Format,
            3000..=3999 => ErrorCategory::Generation,
            5000..=5999 => ErrorCategory::Configuration,
            _ => ErrorCategory::Unknown,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        code.0
    }
}

/// Error category based on error code range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Character pool errors (1xxx).
    Alphabet,
    /// Template and affix errors (2xxx).
    Format,
    /// Batch generation errors (3xxx).
    Generation,
    /// Settings errors (5xxx).
    Configuration,
    /// Unknown category.
    Unknown,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Alphabet => write!(f, "alphabet"),
            Self::Format => write!(f, "format"),
            Self::Generation => write!(f, "generation"),
            Self::Configuration => write!(f, "configuration"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}
