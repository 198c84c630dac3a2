//! Error types for inline style parsing.

use thiserror::Error;

/// Errors that can occur while parsing inline declarations.
///
/// # Examples
///
/// ```rust
/// use gcss::parser::parse_inline_style;
///
/// // A width needs a numeric value
/// let result = parse_inline_style("width: wide");
/// assert!(result.is_err());
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GcssError {
    /// The declaration list itself could not be tokenized.
    #[error("syntax error: {0}")]
    InvalidSyntax(String),

    /// A known property carried a value it does not accept.
    #[error("invalid value for `{property}`: {value}")]
    InvalidValue { property: String, value: String },
}
