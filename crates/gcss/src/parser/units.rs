use crate::types::geometry::{Length, Spacing, Unit};
use nom::{
    IResult,
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit1, multispace0},
    combinator::{map, map_res, opt, recognize},
    sequence::{pair, preceded, tuple},
};

/// Parse a floating point or integer number, including the `.5` shorthand.
fn parse_number(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(tuple((
            opt(char('-')),
            alt((
                recognize(pair(digit1, opt(pair(char('.'), digit1)))),
                recognize(pair(char('.'), digit1)),
            )),
        ))),
        |s: &str| s.parse::<f64>(),
    )(input)
}

/// Parse the unit suffix (e.g., px, %, vw).
fn parse_unit_suffix(input: &str) -> IResult<&str, Unit> {
    alt((
        map(tag("px"), |_| Unit::Px),
        map(tag("vw"), |_| Unit::ViewWidth),
        map(tag("vh"), |_| Unit::ViewHeight),
        map(char('%'), |_| Unit::Percent),
    ))(input)
}

/// Parse a single length (e.g., "10px", "50%", "auto", "12").
pub fn parse_length(input: &str) -> IResult<&str, Length> {
    let input = input.trim_start();

    if let Ok((remaining, _)) = tag::<&str, &str, nom::error::Error<&str>>("auto")(input) {
        return Ok((remaining, Length::AUTO));
    }

    let (input, value) = parse_number(input)?;
    let (input, unit) = opt(parse_unit_suffix)(input)?;

    Ok((
        input,
        Length {
            value,
            unit: unit.unwrap_or(Unit::Px),
        },
    ))
}

/// Parse CSS box spacing.
/// Supports 1 value (all), 2 values (v, h), 3 values (t, h, b) or 4 values (t, r, b, l).
pub fn parse_spacing(input: &str) -> IResult<&str, Spacing> {
    let (input, first) = parse_length(input)?;
    let (input, second) = opt(preceded(multispace0, parse_length))(input)?;
    let Some(second) = second else {
        return Ok((input, Spacing::all(first)));
    };

    let (input, third) = opt(preceded(multispace0, parse_length))(input)?;
    let Some(third) = third else {
        return Ok((input, Spacing::vertical_horizontal(first, second)));
    };

    let (input, fourth) = opt(preceded(multispace0, parse_length))(input)?;
    let spacing = Spacing {
        top: first,
        right: second,
        bottom: third,
        left: fourth.unwrap_or(second),
    };
    Ok((input, spacing))
}
