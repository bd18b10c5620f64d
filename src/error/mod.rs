//! Error handling module.
//!
//! Every failure of the engine is a local, recoverable condition returned to
//! the caller as a [`CodeError`]. Each variant maps to a stable [`ErrorCode`].

pub mod codes;

pub use codes::{ErrorCategory, ErrorCode};

/// Code generation error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodeError {
    /// Input contains the same character more than once.
    #[error("can't include duplicates")]
    DuplicateCharacters,

    /// Input contains whitespace.
    #[error("can't include whitespace")]
    WhitespaceNotAllowed,

    /// Character already exists in the pool it would extend.
    #[error("can't extend with character {0:?}: it already exists")]
    CharacterAlreadyExists(char),

    /// Character in a template is neither a literal nor a placeholder.
    #[error("invalid format character {0:?}")]
    InvalidFormatCharacter(char),

    /// Character to exclude is neither a digit nor a letter.
    #[error("the character {0:?} is not a letter or a digit")]
    NotALetterOrDigit(char),

    /// Character to extend with is not a letter.
    #[error("the character {0:?} is not a letter")]
    NotALetter(char),

    /// Character to extend with lies outside Latin-1.
    #[error("can only extend with Latin-1 letters, got {0:?}")]
    NotLatin1(char),

    /// Prefix starts with whitespace.
    #[error("prefix can't start with whitespace")]
    LeadingWhitespaceInPrefix,

    /// Suffix ends with whitespace.
    #[error("suffix can't end with whitespace")]
    TrailingWhitespaceInSuffix,

    /// The template selects an empty pool or contains no placeholder.
    #[error("no characters available to generate codes with the given format")]
    NoCharactersAvailable,

    /// More codes were requested than the configuration can produce.
    #[error("too many codes requested: {requested} exceeds capacity of {capacity}")]
    TooManyCodesRequested {
        /// Requested batch size.
        requested: usize,
        /// Theoretical capacity.
        capacity: u64,
    },

    /// Collision budget exhausted before the batch was filled.
    #[error("too many duplicate codes generated ({retries} retries); consider using a longer code")]
    MaxRetriesExceeded {
        /// Retry budget that was exceeded.
        retries: usize,
    },

    /// Settings could not be loaded or are invalid.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl CodeError {
    /// Get the error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::DuplicateCharacters => ErrorCode::DUPLICATE_CHARACTERS,
            Self::WhitespaceNotAllowed => ErrorCode::WHITESPACE_NOT_ALLOWED,
            Self::CharacterAlreadyExists(_) => ErrorCode::CHARACTER_ALREADY_EXISTS,
            Self::InvalidFormatCharacter(_) => ErrorCode::INVALID_FORMAT_CHARACTER,
            Self::NotALetterOrDigit(_) => ErrorCode::NOT_A_LETTER_OR_DIGIT,
            Self::NotALetter(_) => ErrorCode::NOT_A_LETTER,
            Self::NotLatin1(_) => ErrorCode::NOT_LATIN1,
            Self::LeadingWhitespaceInPrefix => ErrorCode::LEADING_WHITESPACE_IN_PREFIX,
            Self::TrailingWhitespaceInSuffix => ErrorCode::TRAILING_WHITESPACE_IN_SUFFIX,
            Self::NoCharactersAvailable => ErrorCode::NO_CHARACTERS_AVAILABLE,
            Self::TooManyCodesRequested { .. } => ErrorCode::TOO_MANY_CODES_REQUESTED,
            Self::MaxRetriesExceeded { .. } => ErrorCode::MAX_RETRIES_EXCEEDED,
            Self::Config(_) => ErrorCode::INVALID_CONFIG,
        }
    }

    /// Get the category of this error.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        self.error_code().category()
    }
}

impl From<config::ConfigError> for CodeError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias using `CodeError`.
pub type Result<T> = std::result::Result<T, CodeError>;
