// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module contains a parser that parses a hex color string into a [`RgbValue`]
//! struct. The hex color string can be in the following format: `#RRGGBB`, eg:
//! `#CC2B5E` for the default gradient's left color.

use nom::{IResult, Parser,
          bytes::complete::{tag, take_while_m_n},
          combinator::{map, map_res},
          sequence::preceded};

use crate::RgbValue;

/// Parse function that generate an [`RgbValue`] struct from a valid hex color string.
/// Any input after the six hex digits is returned as the remainder.
///
/// # Errors
///
/// Returns a [`nom::Err`] if the input does not start with `#` followed by six hex
/// digits.
pub fn parse_hex_color(input: &str) -> IResult<&str, RgbValue> {
    map(
        preceded(
            tag("#"),
            (helper_fns::parse_hex_seg, helper_fns::parse_hex_seg, helper_fns::parse_hex_seg),
        ),
        |(red, green, blue)| RgbValue { red, green, blue },
    )
    .parse(input)
}

/// Helper functions to match and parse hex digits.
mod helper_fns {
    use super::{IResult, Parser, map_res, take_while_m_n};

    /// This function is used by [`map_res`] and it returns a [Result], not [`IResult`].
    pub fn parse_str_to_hex_num(input: &str) -> Result<u8, std::num::ParseIntError> {
        u8::from_str_radix(input, 16)
    }

    /// This function is used by [`take_while_m_n`] and as long as it returns `true`
    /// items will be taken from the input.
    pub fn match_is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }

    pub fn parse_hex_seg(input: &str) -> IResult<&str, u8> {
        map_res(take_while_m_n(2, 2, match_is_hex_digit), parse_str_to_hex_num)
            .parse(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn parse_valid_color() {
        let mut input = String::new();
        input.push_str("#2F14DF");
        input.push('🔅');

        let result = parse_hex_color(&input);

        let Ok((remainder, color)) = result else {
            panic!();
        };
        assert_eq2!(remainder, "🔅");
        assert_eq2!(color, RgbValue::from_u8(47, 20, 223));
    }

    #[test]
    fn parse_invalid_color() {
        assert!(parse_hex_color("🔅#2F14DF").is_err());
        assert!(parse_hex_color("#2F14D").is_err());
        assert!(parse_hex_color("#2F1XDF").is_err());
    }
}
