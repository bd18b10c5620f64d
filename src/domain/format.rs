//! Format templates.
//!
//! A template such as `#aaaa` or `xx-dddd-pp` is a sequence of tokens. Letters
//! from the placeholder vocabulary select a character pool; punctuation,
//! symbols and spaces are copied through as literals.

use std::fmt;
use std::str::FromStr;

use unicode_general_category::{GeneralCategory, get_general_category};

use crate::error::{CodeError, Result};

/// Default template: a `#` followed by four letters.
pub const DEFAULT_FORMAT: &str = "#aaaa";

/// Placeholder selector naming which pool a character is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    /// Digits, lowercase and uppercase letters (`x`).
    Any,
    /// Digits (`d`).
    Digit,
    /// Lowercase letters (`l`).
    Lower,
    /// Lowercase letters or digits (`w`).
    LowerOrDigit,
    /// Uppercase letters (`u`).
    Upper,
    /// Uppercase letters or digits (`p`).
    UpperOrDigit,
    /// Upper- or lowercase letters (`a`).
    Letter,
    /// The custom pool (`c`).
    Custom,
}

impl Selector {
    /// Every selector, in vocabulary order.
    pub const ALL: [Self; 8] = [
        Self::Any,
        Self::Digit,
        Self::Lower,
        Self::LowerOrDigit,
        Self::Upper,
        Self::UpperOrDigit,
        Self::Letter,
        Self::Custom,
    ];

    /// Look up the selector for a template letter.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'x' => Some(Self::Any),
            'd' => Some(Self::Digit),
            'l' => Some(Self::Lower),
            'w' => Some(Self::LowerOrDigit),
            'u' => Some(Self::Upper),
            'p' => Some(Self::UpperOrDigit),
            'a' => Some(Self::Letter),
            'c' => Some(Self::Custom),
            _ => None,
        }
    }

    /// The template letter for this selector.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Any => 'x',
            Self::Digit => 'd',
            Self::Lower => 'l',
            Self::LowerOrDigit => 'w',
            Self::Upper => 'u',
            Self::UpperOrDigit => 'p',
            Self::Letter => 'a',
            Self::Custom => 'c',
        }
    }
}

/// One unit of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Character copied verbatim into every code.
    Literal(char),
    /// Character drawn at random from the selected pool.
    Placeholder(Selector),
}

/// Validated format template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSpec {
    tokens: Vec<Token>,
}

impl FormatSpec {
    /// Parse and validate a template string.
    ///
    /// # Errors
    ///
    /// Returns [`CodeError::InvalidFormatCharacter`] for the first character
    /// that is neither a placeholder letter nor a punctuation, symbol or space.
    pub fn parse(template: &str) -> Result<Self> {
        let tokens = template
            .chars()
            .map(parse_token)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { tokens })
    }

    /// The tokens in template order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Selectors of all placeholder tokens, in template order.
    pub fn placeholders(&self) -> impl Iterator<Item = Selector> + '_ {
        self.tokens.iter().filter_map(|token| match token {
            Token::Placeholder(selector) => Some(*selector),
            Token::Literal(_) => None,
        })
    }

    /// Number of characters each code occupies, excluding prefix and suffix.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the template is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self {
            tokens: vec![
                Token::Literal('#'),
                Token::Placeholder(Selector::Letter),
                Token::Placeholder(Selector::Letter),
                Token::Placeholder(Selector::Letter),
                Token::Placeholder(Selector::Letter),
            ],
        }
    }
}

impl FromStr for FormatSpec {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            let c = match token {
                Token::Literal(c) => *c,
                Token::Placeholder(selector) => selector.as_char(),
            };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// Classify one template character.
fn parse_token(c: char) -> Result<Token> {
    if let Some(selector) = Selector::from_char(c) {
        return Ok(Token::Placeholder(selector));
    }
    if is_literal(c) {
        Ok(Token::Literal(c))
    } else {
        Err(CodeError::InvalidFormatCharacter(c))
    }
}

/// Punctuation, symbol or a plain space.
///
/// Letters and digits are reserved for placeholders. Marks, format and
/// private-use characters, unassigned code points and any whitespace other
/// than U+0020 are rejected.
fn is_literal(c: char) -> bool {
    c == ' '
        || matches!(
            get_general_category(c),
            GeneralCategory::ConnectorPunctuation
                | GeneralCategory::DashPunctuation
                | GeneralCategory::OpenPunctuation
                | GeneralCategory::ClosePunctuation
                | GeneralCategory::InitialPunctuation
                | GeneralCategory::FinalPunctuation
                | GeneralCategory::OtherPunctuation
                | GeneralCategory::MathSymbol
                | GeneralCategory::CurrencySymbol
                | GeneralCategory::ModifierSymbol
                | GeneralCategory::OtherSymbol
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_format() {
        let format = FormatSpec::parse(DEFAULT_FORMAT).unwrap();
        assert_eq!(format, FormatSpec::default());
        assert_eq!(format.placeholders().count(), 4);
        assert_eq!(format.to_string(), DEFAULT_FORMAT);
    }

    #[test]
    fn test_parse_all_selectors() {
        let format = FormatSpec::parse("xdlwupac").unwrap();
        let selectors: Vec<_> = format.placeholders().collect();
        assert_eq!(selectors, Selector::ALL);
    }

    #[test]
    fn test_literals() {
        let format = FormatSpec::parse("#-$ €+(d)").unwrap();
        assert_eq!(format.len(), 9);
        assert_eq!(format.placeholders().count(), 1);
        assert_eq!(format.tokens()[3], Token::Literal(' '));
        assert_eq!(format.tokens()[4], Token::Literal('€'));
    }

    #[test]
    fn test_documented_templates_parse() {
        for template in ["#aaaa", "xx-dddd", "xx-dddd-pp"] {
            let format = FormatSpec::parse(template).unwrap();
            assert_eq!(format.to_string(), template);
        }
        assert_eq!(
            FormatSpec::parse("XX-dddd"),
            Err(CodeError::InvalidFormatCharacter('X'))
        );
    }

    #[test]
    fn test_invalid_characters() {
        assert_eq!(
            FormatSpec::parse("#aaq"),
            Err(CodeError::InvalidFormatCharacter('q'))
        );
        assert_eq!(
            FormatSpec::parse("A"),
            Err(CodeError::InvalidFormatCharacter('A'))
        );
        assert_eq!(
            FormatSpec::parse("d1"),
            Err(CodeError::InvalidFormatCharacter('1'))
        );
        assert_eq!(
            FormatSpec::parse("d\td"),
            Err(CodeError::InvalidFormatCharacter('\t'))
        );
        assert_eq!(
            FormatSpec::parse("dé"),
            Err(CodeError::InvalidFormatCharacter('é'))
        );
    }

    #[test]
    fn test_non_punctuation_characters_rejected() {
        let cases = [
            ('\u{301}', "combining mark"),
            ('\u{200D}', "zero width joiner"),
            ('\u{E000}', "private use"),
            ('\u{0378}', "unassigned"),
            ('\u{A0}', "no-break space"),
        ];

        for (c, desc) in cases {
            assert_eq!(
                FormatSpec::parse(&format!("d{c}d")),
                Err(CodeError::InvalidFormatCharacter(c)),
                "{desc}"
            );
        }
    }

    #[test]
    fn test_punctuation_and_symbols_accepted() {
        let format = FormatSpec::parse("_-([{}])«»!@#$%^&*+=<>~|`¢£¥©®°×÷").unwrap();
        assert_eq!(format.placeholders().count(), 0);
    }

    #[test]
    fn test_empty_format() {
        let format: FormatSpec = "".parse().unwrap();
        assert!(format.is_empty());
        assert_eq!(format.placeholders().count(), 0);
    }

    #[test]
    fn test_selector_letters_round_trip() {
        for selector in Selector::ALL {
            assert_eq!(Selector::from_char(selector.as_char()), Some(selector));
        }
        assert_eq!(Selector::from_char('z'), None);
    }
}
