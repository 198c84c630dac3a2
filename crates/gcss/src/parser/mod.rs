//! Parsing for inline `style` attributes and declaration lists.
//!
//! - [`parse_declarations`]: tokenizes `name: value; ...` into [`RawDeclaration`]s
//! - [`parse_inline_style`]: builds a typed [`InlineStyle`] from an attribute value
//! - [`units`]: numeric value and unit parsing
//!
//! ## Example
//!
//! ```rust
//! use gcss::parser::parse_inline_style;
//! use gcss::Length;
//!
//! let style = parse_inline_style("width: 800px; color: red").unwrap();
//! assert_eq!(style.width, Some(Length::px(800.0)));
//! ```

pub mod units;

use nom::{
    IResult,
    bytes::complete::{take_while, take_while1},
    character::complete::{char, multispace0},
    combinator::opt,
    multi::many0,
    sequence::tuple,
};

use crate::GcssError;
use crate::types::{BoxSizing, Display, InlineStyle, Length, Position, Spacing};

/// An untyped `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDeclaration {
    /// Lowercased property name.
    pub property: String,
    /// Trimmed value text.
    pub value: String,
}

/// Parse a property identifier (e.g., "box-sizing", "items-per-row").
pub fn parse_ident(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_')(input)
}

fn parse_raw_declaration(input: &str) -> IResult<&str, RawDeclaration> {
    let (input, _) = take_while(|c: char| c.is_whitespace() || c == ';')(input)?;
    let (input, property) = parse_ident(input)?;
    let (input, _) = tuple((multispace0, char(':'), multispace0))(input)?;
    let (input, value) = take_while1(|c: char| c != ';')(input)?;
    let (input, _) = opt(char(';'))(input)?;

    Ok((
        input,
        RawDeclaration {
            property: property.to_ascii_lowercase(),
            value: value.trim().to_string(),
        },
    ))
}

/// Tokenize a declaration list such as `width: 10px; display: block;`.
pub fn parse_declarations(source: &str) -> Result<Vec<RawDeclaration>, GcssError> {
    let (remaining, declarations) = many0(parse_raw_declaration)(source)
        .map_err(|e| GcssError::InvalidSyntax(e.to_string()))?;

    let rest = remaining.trim_matches(|c: char| c.is_whitespace() || c == ';');
    if !rest.is_empty() {
        return Err(GcssError::InvalidSyntax(format!(
            "Unexpected tokens at end of declarations: {rest}"
        )));
    }

    Ok(declarations)
}

/// Parse a complete length value, rejecting trailing text.
pub fn parse_length_value(property: &str, value: &str) -> Result<Length, GcssError> {
    match units::parse_length(value) {
        Ok((rest, length)) if rest.trim().is_empty() => Ok(length),
        _ => Err(invalid(property, value)),
    }
}

/// Parse a complete spacing value, rejecting trailing text.
pub fn parse_spacing_value(property: &str, value: &str) -> Result<Spacing, GcssError> {
    match units::parse_spacing(value) {
        Ok((rest, spacing)) if rest.trim().is_empty() => Ok(spacing),
        _ => Err(invalid(property, value)),
    }
}

fn parse_keyword<T>(
    property: &str,
    value: &str,
    from_keyword: fn(&str) -> Option<T>,
) -> Result<T, GcssError> {
    from_keyword(&value.to_ascii_lowercase()).ok_or_else(|| invalid(property, value))
}

fn invalid(property: &str, value: &str) -> GcssError {
    GcssError::InvalidValue {
        property: property.to_string(),
        value: value.to_string(),
    }
}

/// Parse an inline `style` attribute into an [`InlineStyle`].
///
/// Properties a gallery does not manage (colors, borders, ...) are skipped.
pub fn parse_inline_style(source: &str) -> Result<InlineStyle, GcssError> {
    let mut style = InlineStyle::new();

    for declaration in parse_declarations(source)? {
        let RawDeclaration { property, value } = &declaration;
        match property.as_str() {
            "position" => {
                style.position = Some(parse_keyword(property, value, Position::from_keyword)?)
            }
            "display" => {
                style.display = Some(parse_keyword(property, value, Display::from_keyword)?)
            }
            "box-sizing" => {
                style.box_sizing = Some(parse_keyword(property, value, BoxSizing::from_keyword)?)
            }
            "width" => style.width = Some(parse_length_value(property, value)?),
            "height" => style.height = Some(parse_length_value(property, value)?),
            "left" => style.left = Some(parse_length_value(property, value)?),
            "top" => style.top = Some(parse_length_value(property, value)?),
            "padding" => style.padding = Some(parse_spacing_value(property, value)?),
            _ => {}
        }
    }

    Ok(style)
}
