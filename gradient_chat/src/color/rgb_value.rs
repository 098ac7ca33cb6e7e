// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB (24-bit truecolor) color representation.
//!
//! Each channel is a `u8`, so the `[0, 255]` range is enforced by the type itself.

use std::fmt::Write as _;

use crate::{GradientError, GradientResult, parse_hex_color};

/// Represents a color in RGB (24-bit truecolor) format.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug)]
pub struct RgbValue {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl From<(u8, u8, u8)> for RgbValue {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

/// Packed `0xRRGGBB`. Anything above the low 24 bits is ignored.
impl From<u32> for RgbValue {
    fn from(value: u32) -> Self {
        let [_, red, green, blue] = value.to_be_bytes();
        Self { red, green, blue }
    }
}

impl RgbValue {
    #[must_use]
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    /// # Errors
    ///
    /// Returns [`GradientError::InvalidHexColorFormat`] if the input is not exactly
    /// `#RRGGBB` (either case). Trailing characters are rejected.
    pub fn try_from_hex_color(input: &str) -> GradientResult<RgbValue> {
        match parse_hex_color(input) {
            Ok(("", color)) => Ok(color),
            _ => Err(GradientError::InvalidHexColorFormat {
                input: input.to_string(),
            }),
        }
    }

    /// Lowercase `rrggbb`, without the leading `#`.
    #[must_use]
    pub fn as_hex_string(&self) -> String {
        let mut acc = String::with_capacity(6);
        _ = write!(acc, "{:02x}{:02x}{:02x}", self.red, self.green, self.blue);
        acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test]
    fn test_new() {
        let value = RgbValue::from_u8(1, 2, 3);
        assert_eq2!((value.red, value.green, value.blue), (1, 2, 3));
    }

    #[test]
    fn test_from_tuple_and_u32() {
        assert_eq2!(RgbValue::from((204, 43, 94)), RgbValue::from_u8(204, 43, 94));
        assert_eq2!(RgbValue::from(0x00CC_2B5E_u32), RgbValue::from_u8(204, 43, 94));
        assert_eq2!(RgbValue::from(0xFFCC_2B5E_u32), RgbValue::from_u8(204, 43, 94));
    }

    #[test]
    fn test_try_from_hex_color() {
        // Valid.
        {
            let value = RgbValue::try_from_hex_color("#ff0000").unwrap();
            assert_eq2!((value.red, value.green, value.blue), (255, 0, 0));
        }

        // Invalid.
        {
            let value = RgbValue::try_from_hex_color("#ff000");
            assert_eq2!(
                value,
                Err(GradientError::InvalidHexColorFormat {
                    input: "#ff000".into()
                })
            );
        }
    }

    #[test_case("#CC2B5E", (204, 43, 94))]
    #[test_case("#cc2b5e", (204, 43, 94))]
    #[test_case("#753A88", (117, 58, 136))]
    #[test_case("#000000", (0, 0, 0))]
    fn test_try_from_hex_color_cases(input: &str, expected: (u8, u8, u8)) {
        assert_eq2!(RgbValue::try_from_hex_color(input), Ok(RgbValue::from(expected)));
    }

    #[test_case("CC2B5E")]
    #[test_case("#CC2B5E00")]
    #[test_case("#GG2B5E")]
    #[test_case("")]
    fn test_try_from_hex_color_rejects(input: &str) {
        assert!(RgbValue::try_from_hex_color(input).is_err());
    }

    #[test]
    fn test_as_hex_string() {
        assert_eq2!(RgbValue::from_u8(204, 43, 94).as_hex_string(), "cc2b5e");
        assert_eq2!(RgbValue::from_u8(0, 10, 255).as_hex_string(), "000aff");
    }
}
