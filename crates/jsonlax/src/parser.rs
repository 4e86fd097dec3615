//! The recursive-descent parsing engine.
//!
//! One function per grammar production: value dispatch, string, number,
//! array, and object, all sharing a single [`Cursor`] for the duration of a
//! parse call. Array and object decoding recurse back into value dispatch
//! for their elements, so call depth tracks document nesting depth.
//!
//! Lexical structure ("insignificant content": whitespace and, when enabled,
//! comments) is skipped by [`Parser::skip`] before and after every value and
//! between structural tokens.

use alloc::string::String;

use crate::{
    cursor::Cursor,
    error::SyntaxError,
    options::ParseOptions,
    value::{Array, Map, Value},
};

/// Maximum container nesting depth.
///
/// Turns stack exhaustion on adversarial input (`[[[[...`) into an ordinary
/// syntax error; well-formed documents never get close.
const MAX_DEPTH: usize = 512;

/// Parses `text` as one complete JSON document with default options.
///
/// The entire input must consist of exactly one JSON value surrounded by
/// optional whitespace; anything else is an error.
///
/// # Examples
///
/// ```rust
/// use jsonlax::{Value, parse};
///
/// assert_eq!(parse("[1, 2]").unwrap().to_string(), "[1,2]");
/// assert!(parse("{} {}").is_err());
/// ```
///
/// # Errors
///
/// Returns a [`SyntaxError`] on the first malformed construct; no partial
/// result is produced.
pub fn parse(text: &str) -> Result<Value, SyntaxError> {
    parse_with_options(text, ParseOptions::default())
}

/// Parses `text` as one complete JSON document with the given options.
///
/// # Examples
///
/// ```rust
/// use jsonlax::{ParseOptions, parse_with_options};
///
/// let options = ParseOptions {
///     allow_comments: true,
///     ..Default::default()
/// };
/// let v = parse_with_options("// header\n{}", options).unwrap();
/// assert!(v.is_object(), "{v:?}");
/// ```
///
/// # Errors
///
/// Returns a [`SyntaxError`] on the first malformed construct; no partial
/// result is produced.
pub fn parse_with_options(text: &str, options: ParseOptions) -> Result<Value, SyntaxError> {
    Parser {
        cursor: Cursor::new(text),
        options,
    }
    .parse_document()
}

struct Parser<'a> {
    cursor: Cursor<'a>,
    options: ParseOptions,
}

impl Parser<'_> {
    /// Top-level entry: skip, parse exactly one value, skip, require EOF.
    fn parse_document(&mut self) -> Result<Value, SyntaxError> {
        self.skip()?;
        let value = self.parse_value(0)?;
        self.skip()?;
        if self.cursor.is_eof() {
            Ok(value)
        } else {
            Err(SyntaxError::TrailingContent {
                offset: self.cursor.offset(),
            })
        }
    }

    /// Dispatches on the next character to one grammar production.
    ///
    /// `0` is deliberately not a dispatch character: JSON forbids leading
    /// zeros, and a bare `0` therefore fails here rather than in the number
    /// decoder.
    fn parse_value(&mut self, depth: usize) -> Result<Value, SyntaxError> {
        if depth > MAX_DEPTH {
            return Err(SyntaxError::DepthLimitExceeded {
                offset: self.cursor.offset(),
            });
        }
        match self.cursor.next() {
            Some('"') => self.parse_string_body().map(Value::String),
            Some(c @ ('1'..='9' | '-')) => self.parse_number(c).map(Value::Number),
            Some('[') => self.parse_array(depth).map(Value::Array),
            Some('{') => self.parse_object(depth).map(Value::Object),
            Some('t') => {
                self.expect_rest("rue")?;
                Ok(Value::Boolean(true))
            }
            Some('f') => {
                self.expect_rest("alse")?;
                Ok(Value::Boolean(false))
            }
            Some('n') => {
                self.expect_rest("ull")?;
                Ok(Value::Null)
            }
            Some(c) => Err(self.unexpected(c)),
            None => Err(self.end_of_input()),
        }
    }

    /// Consumes the remaining characters of a fixed literal after its
    /// distinguishing first character has been dispatched on.
    fn expect_rest(&mut self, rest: &str) -> Result<(), SyntaxError> {
        for expected in rest.chars() {
            match self.cursor.next() {
                Some(c) if c == expected => {}
                Some(c) => return Err(self.unexpected(c)),
                None => return Err(self.end_of_input()),
            }
        }
        Ok(())
    }

    /// Decodes a string body after the opening `"` has been consumed.
    fn parse_string_body(&mut self) -> Result<String, SyntaxError> {
        let mut result = String::new();
        while let Some(c) = self.cursor.next() {
            match c {
                '"' => return Ok(result),
                '\\' => match self.cursor.next() {
                    Some('"') => result.push('"'),
                    Some('\\') => result.push('\\'),
                    Some('/') => result.push('/'),
                    Some('b') => result.push('\u{0008}'),
                    Some('f') => result.push('\u{000C}'),
                    Some('n') => result.push('\n'),
                    Some('r') => result.push('\r'),
                    Some('t') => result.push('\t'),
                    Some('u') => result.push(self.parse_unicode_escape()?),
                    // Any other escape character is consumed and appends
                    // nothing. End of input lands here too; the loop then
                    // exits and reports the string as unterminated.
                    _ => {}
                },
                c if (c as u32) < 0x20 => {
                    return Err(SyntaxError::ControlCharacterInString {
                        offset: self.cursor.offset().saturating_sub(1),
                    });
                }
                c => result.push(c),
            }
        }
        Err(SyntaxError::UnterminatedString {
            offset: self.cursor.offset(),
        })
    }

    /// Decodes the four digits of a `\u` escape.
    ///
    /// The accepted digit range is deliberately `0`-`9`, `A`-`F`, and
    /// `a`-`z`, wider than strict JSON's `a`-`f`. The lexeme converts by
    /// its longest valid hex prefix, so characters from the permissive tail
    /// contribute no value and an entirely invalid run converts to zero. A
    /// code point that is not a Unicode scalar value (an unpaired
    /// surrogate) decodes to U+FFFD.
    fn parse_unicode_escape(&mut self) -> Result<char, SyntaxError> {
        let mut code: u32 = 0;
        let mut in_hex_prefix = true;
        for _ in 0..4 {
            let Some(c) = self.cursor.next() else {
                return Err(self.end_of_input());
            };
            if !matches!(c, '0'..='9' | 'A'..='F' | 'a'..='z') {
                return Err(SyntaxError::InvalidUnicodeEscape {
                    ch: c,
                    offset: self.cursor.offset().saturating_sub(1),
                });
            }
            if in_hex_prefix {
                if let Some(digit) = c.to_digit(16) {
                    code = code * 16 + digit;
                } else {
                    in_hex_prefix = false;
                }
            }
        }
        Ok(char::from_u32(code).unwrap_or('\u{FFFD}'))
    }

    /// Decodes a number whose first character (`1`-`9` or `-`) has already
    /// been consumed by value dispatch.
    ///
    /// Builds the lexeme left to right: integer digits, then an optional
    /// fractional part introduced by `.`, which alone may carry an exponent.
    /// The character terminating the lexeme is pushed back for the caller.
    /// The finished lexeme is handed to `str::parse::<f64>`, so forms the
    /// float grammar rejects (`-`, `1.e`, `1.5e+`) fail there.
    fn parse_number(&mut self, first: char) -> Result<f64, SyntaxError> {
        let mut lexeme = String::new();
        lexeme.push(first);

        // No-leading-zero rule: `-0`, and therefore `-0.5`, are hard errors.
        if first == '-' && self.cursor.peek() == Some('0') {
            return Err(SyntaxError::InvalidNumber {
                offset: self.cursor.offset(),
            });
        }

        let mut fractional = false;
        while let Some(c) = self.cursor.next() {
            match c {
                '0'..='9' => lexeme.push(c),
                '.' => {
                    lexeme.push(c);
                    fractional = true;
                    break;
                }
                _ => {
                    self.cursor.unread(c);
                    break;
                }
            }
        }

        if fractional {
            let mut exponent = false;
            while let Some(c) = self.cursor.next() {
                match c {
                    '0'..='9' => lexeme.push(c),
                    'e' | 'E' => {
                        lexeme.push(c);
                        exponent = true;
                        break;
                    }
                    _ => {
                        self.cursor.unread(c);
                        break;
                    }
                }
            }

            if exponent {
                if let Some(sign @ ('+' | '-')) = self.cursor.peek() {
                    self.cursor.next();
                    lexeme.push(sign);
                }
                while let Some(c) = self.cursor.next() {
                    match c {
                        '0'..='9' => lexeme.push(c),
                        _ => {
                            self.cursor.unread(c);
                            break;
                        }
                    }
                }
            }
        }

        lexeme.parse::<f64>().map_err(|_| SyntaxError::InvalidNumber {
            offset: self.cursor.offset(),
        })
    }

    /// Decodes an array after the opening `[` has been consumed.
    ///
    /// The pending slot holds the most recently parsed element until a `,`
    /// or `]` commits it, which is what distinguishes a legal trailing comma
    /// (slot empty at `]`, at least one commit behind us) from a comma with
    /// no value before it (slot empty at `,`).
    fn parse_array(&mut self, depth: usize) -> Result<Array, SyntaxError> {
        let mut result = Array::new();
        let mut pending: Option<Value> = None;

        self.skip()?;
        let mut c = self.next_or_eof()?;
        if c == ']' {
            return Ok(result);
        }

        loop {
            match c {
                ']' => {
                    if let Some(v) = pending.take() {
                        result.push(v);
                    } else if !self.options.allow_trailing_commas {
                        return Err(self.unexpected(']'));
                    }
                    return Ok(result);
                }
                ',' => {
                    let Some(v) = pending.take() else {
                        return Err(self.unexpected(','));
                    };
                    result.push(v);
                }
                other => {
                    self.cursor.unread(other);
                    pending = Some(self.parse_value(depth + 1)?);
                }
            }
            self.skip()?;
            c = self.next_or_eof()?;
        }
    }

    /// Decodes an object after the opening `{` has been consumed.
    ///
    /// Mirrors the array decoder but tracks a pending key and pending value
    /// independently. A pending value always has its key: `:` only accepts
    /// a value while a key is pending, and keys are only cleared when a pair
    /// commits. `BTreeMap::insert` makes duplicate keys last-write-wins.
    fn parse_object(&mut self, depth: usize) -> Result<Map, SyntaxError> {
        let mut result = Map::new();
        let mut key: Option<String> = None;
        let mut value: Option<Value> = None;

        self.skip()?;
        let mut c = self.next_or_eof()?;
        if c == '}' {
            return Ok(result);
        }

        loop {
            match c {
                '}' => {
                    if value.is_some() {
                        let (Some(k), Some(v)) = (key.take(), value.take()) else {
                            return Err(self.unexpected('}'));
                        };
                        result.insert(k, v);
                    } else if key.is_some() || !self.options.allow_trailing_commas {
                        // A key with no value (`{"a"}`) is an error even
                        // when trailing commas are allowed.
                        return Err(self.unexpected('}'));
                    }
                    return Ok(result);
                }
                ',' => {
                    let (Some(k), Some(v)) = (key.take(), value.take()) else {
                        return Err(self.unexpected(','));
                    };
                    result.insert(k, v);
                }
                ':' => {
                    if key.is_none() || value.is_some() {
                        return Err(self.unexpected(':'));
                    }
                    self.skip()?;
                    value = Some(self.parse_value(depth + 1)?);
                }
                '"' => {
                    if key.is_some() || value.is_some() {
                        // Either two keys in a row with no colon between
                        // them, or a completed pair with no comma before
                        // the next key.
                        return Err(self.unexpected('"'));
                    }
                    key = Some(self.parse_string_body()?);
                }
                other => return Err(self.unexpected(other)),
            }
            self.skip()?;
            c = self.next_or_eof()?;
        }
    }

    /// Consumes a run of JSON whitespace (space, tab, LF, CR), reporting
    /// whether anything was consumed.
    fn skip_whitespace(&mut self) -> bool {
        let mut skipped = false;
        while let Some(' ' | '\t' | '\n' | '\r') = self.cursor.peek() {
            self.cursor.next();
            skipped = true;
        }
        skipped
    }

    /// Consumes one comment if the cursor sits on `//` or `/*`, reporting
    /// whether anything was consumed. A lone `/` is pushed back and reported
    /// as no progress; dispatch will reject it later.
    fn skip_comment(&mut self) -> Result<bool, SyntaxError> {
        if self.cursor.peek() != Some('/') {
            return Ok(false);
        }
        self.cursor.next();
        match self.cursor.peek() {
            Some('/') => {
                self.cursor.next();
                // Runs to the line terminator (consumed) or end of input.
                while let Some(c) = self.cursor.next() {
                    if c == '\n' || c == '\r' {
                        break;
                    }
                }
                Ok(true)
            }
            Some('*') => {
                self.cursor.next();
                while let Some(c) = self.cursor.next() {
                    if c == '*' && self.cursor.peek() == Some('/') {
                        self.cursor.next();
                        return Ok(true);
                    }
                }
                Err(SyntaxError::UnterminatedComment {
                    offset: self.cursor.offset(),
                })
            }
            _ => {
                self.cursor.unread('/');
                Ok(false)
            }
        }
    }

    /// Skips insignificant content: whitespace and, when enabled, comments,
    /// alternating until neither makes progress. This is the single
    /// significant-content boundary used around every value and between
    /// structural tokens.
    fn skip(&mut self) -> Result<(), SyntaxError> {
        loop {
            if self.skip_whitespace() {
                continue;
            }
            if self.options.allow_comments && self.skip_comment()? {
                continue;
            }
            return Ok(());
        }
    }

    fn next_or_eof(&mut self) -> Result<char, SyntaxError> {
        self.cursor.next().ok_or_else(|| self.end_of_input())
    }

    fn unexpected(&self, ch: char) -> SyntaxError {
        SyntaxError::UnexpectedCharacter {
            ch,
            offset: self.cursor.offset().saturating_sub(1),
        }
    }

    fn end_of_input(&self) -> SyntaxError {
        SyntaxError::UnexpectedEndOfInput {
            offset: self.cursor.offset(),
        }
    }
}
