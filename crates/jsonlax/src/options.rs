/// Configuration options for the parser.
///
/// Both switches are independent and gate non-standard extensions to the
/// JSON grammar. With the defaults, the parser accepts standard JSON only.
///
/// # Examples
///
/// ```rust
/// use jsonlax::{ParseOptions, parse_with_options};
///
/// let options = ParseOptions {
///     allow_comments: true,
///     allow_trailing_commas: true,
/// };
/// let v = parse_with_options("[1, /* two */ 2,]", options).unwrap();
/// assert_eq!(v.to_string(), "[1,2]");
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Whether to allow `//` and `/* */` comments wherever whitespace may
    /// appear between tokens.
    ///
    /// Single-line comments run to the next line feed, carriage return, or
    /// end of input. Block comments must be closed by `*/`; reaching end of
    /// input inside one is a syntax error.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_comments: bool,

    /// Whether to permit one trailing comma immediately before the closing
    /// `]` or `}` of an array or object with at least one element.
    ///
    /// A comma with no preceding value (`[,]`, `{,}`) is never legal,
    /// regardless of this flag.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_trailing_commas: bool,
}
