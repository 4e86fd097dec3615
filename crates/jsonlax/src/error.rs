//! The single error type produced by the parser.

use thiserror::Error;

/// A malformed-input error.
///
/// Parsing is all-or-nothing: the first violation aborts the parse and is
/// reported through one of these variants. `offset` is the character offset
/// (not byte offset) at which the problem was detected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// A character that no grammar production can start with, or that is
    /// invalid in its position.
    #[error("unexpected character '{ch}' at offset {offset}")]
    UnexpectedCharacter {
        /// The offending character.
        ch: char,
        /// Where it was found.
        offset: usize,
    },

    /// The input ended while a production was still incomplete.
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEndOfInput {
        /// The end-of-input position.
        offset: usize,
    },

    /// A string literal was still open at end of input.
    #[error("unterminated string at offset {offset}")]
    UnterminatedString {
        /// The end-of-input position.
        offset: usize,
    },

    /// A `/* */` comment was still open at end of input.
    #[error("unterminated block comment at offset {offset}")]
    UnterminatedComment {
        /// The end-of-input position.
        offset: usize,
    },

    /// A `\u` escape contained a character outside the accepted digit range.
    #[error("invalid unicode escape character '{ch}' at offset {offset}")]
    InvalidUnicodeEscape {
        /// The offending character.
        ch: char,
        /// Where it was found.
        offset: usize,
    },

    /// An unescaped control character (below U+0020) inside a string.
    #[error("control character in string at offset {offset}")]
    ControlCharacterInString {
        /// Where it was found.
        offset: usize,
    },

    /// A numeric lexeme that does not convert to a finite double, or a
    /// forbidden leading-zero form.
    #[error("invalid number at offset {offset}")]
    InvalidNumber {
        /// Where the number ended.
        offset: usize,
    },

    /// Non-whitespace, non-comment content after the top-level value.
    #[error("unexpected trailing content at offset {offset}")]
    TrailingContent {
        /// Where the extra content begins.
        offset: usize,
    },

    /// Containers nested deeper than the parser's fixed depth limit.
    /// The bound turns adversarial nesting into an ordinary error instead
    /// of stack exhaustion.
    #[error("nesting depth limit exceeded at offset {offset}")]
    DepthLimitExceeded {
        /// Where the limit was crossed.
        offset: usize,
    },
}
