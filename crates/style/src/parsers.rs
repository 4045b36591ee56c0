//! Low-level nom parser functions for textual style values.
//!
//! Style inputs arrive either as numbers or as short CSS-like strings
//! (`"50%"`, `"auto"`, `"4 8"`). The parsers here turn the strings into typed
//! values.

use crate::dimension::Dimension;
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{char, digit0, digit1, space0, space1};
use nom::combinator::{all_consuming, map, map_res, opt, recognize, value};
use nom::multi::separated_list1;
use nom::sequence::{delimited, terminated};
use nom::{IResult, Parser};
use thiserror::Error;

/// Errors that can occur during style parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: &'static str, value: String },
}

fn parse_f32(input: &str) -> IResult<&str, f32> {
    map_res(
        recognize((
            opt(alt((char('+'), char('-')))),
            alt((
                recognize((digit1, opt((char('.'), digit0)))),
                recognize((char('.'), digit1)),
            )),
        )),
        |s: &str| s.parse::<f32>(),
    )
    .parse(input)
}

/// Parses a dimension value (number, percentage, or "auto").
///
/// A trailing `px` is accepted and ignored; scene units are unitless.
pub fn parse_dimension(input: &str) -> IResult<&str, Dimension> {
    alt((
        value(Dimension::Auto, tag_no_case("auto")),
        map(terminated(parse_f32, char('%')), Dimension::Percent),
        map(terminated(parse_f32, opt(tag_no_case("px"))), Dimension::Points),
    ))
    .parse(input)
}

/// Parses a whitespace separated list of numbers, e.g. `"4 8 4"`.
pub fn parse_number_list(input: &str) -> IResult<&str, Vec<f32>> {
    separated_list1(space1, parse_f32).parse(input)
}

/// Parses a complete dimension string, rejecting trailing garbage.
pub fn dimension_from_str(input: &str) -> Result<Dimension, StyleParseError> {
    all_consuming(delimited(space0, parse_dimension, space0))
        .parse(input)
        .map(|(_, dimension)| dimension)
        .map_err(|_| StyleParseError::InvalidValue {
            property: "dimension",
            value: input.to_string(),
        })
}

/// Parses a complete box shorthand string into its (unexpanded) values.
pub fn sides_from_str(input: &str) -> Result<Vec<f32>, StyleParseError> {
    all_consuming(delimited(space0, parse_number_list, space0))
        .parse(input)
        .map(|(_, values)| values)
        .map_err(|_| StyleParseError::InvalidValue {
            property: "box shorthand",
            value: input.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dimension_variants() {
        assert_eq!(dimension_from_str("auto"), Ok(Dimension::Auto));
        assert_eq!(dimension_from_str("AUTO"), Ok(Dimension::Auto));
        assert_eq!(dimension_from_str("50%"), Ok(Dimension::Percent(50.0)));
        assert_eq!(dimension_from_str(" 12.5 "), Ok(Dimension::Points(12.5)));
        assert_eq!(dimension_from_str("-3px"), Ok(Dimension::Points(-3.0)));
        assert_eq!(dimension_from_str(".5"), Ok(Dimension::Points(0.5)));
    }

    #[test]
    fn test_parse_dimension_rejects_garbage() {
        assert!(dimension_from_str("12 apples").is_err());
        assert!(dimension_from_str("").is_err());
        assert!(dimension_from_str("%").is_err());
    }

    #[test]
    fn test_sides_from_str() {
        assert_eq!(sides_from_str("5"), Ok(vec![5.0]));
        assert_eq!(sides_from_str("5 10 15"), Ok(vec![5.0, 10.0, 15.0]));
        assert!(sides_from_str("5,10").is_err());
    }
}
