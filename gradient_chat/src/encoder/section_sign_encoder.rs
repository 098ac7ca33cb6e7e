// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The hex color convention used by chat servers (`§x§r§r§g§g§b§b`). Each of the six
//! hex digits gets its own `§` escape, and the run is introduced by `§x`.

use strum::IntoEnumIterator;

use super::ColorMarkerEncoder;
use crate::{Channel, RgbValue};

pub const SECTION_SIGN: char = '§';
pub const HEX_COLOR_INTRODUCER: char = 'x';

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Encodes colors as `§x` followed by six `§`-prefixed lowercase hex digits, red
/// then green then blue. Eg: `(204, 43, 94)` becomes `§x§c§c§2§b§5§e`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionSignEncoder;

impl ColorMarkerEncoder for SectionSignEncoder {
    fn write_marker(&self, color: RgbValue, acc: &mut String) {
        acc.push(SECTION_SIGN);
        acc.push(HEX_COLOR_INTRODUCER);
        for channel in Channel::iter() {
            let value = channel.get(color);
            for nibble in [value >> 4, value & 0x0F] {
                acc.push(SECTION_SIGN);
                acc.push(char::from(HEX_DIGITS[usize::from(nibble)]));
            }
        }
    }

    /// 7 section signs (2 bytes each) and 7 ASCII chars.
    fn marker_len_hint(&self) -> usize { 21 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test_case((204, 43, 94), "§x§c§c§2§b§5§e")]
    #[test_case((160, 50, 115), "§x§a§0§3§2§7§3")]
    #[test_case((0, 0, 0), "§x§0§0§0§0§0§0")]
    #[test_case((255, 255, 255), "§x§f§f§f§f§f§f")]
    #[test_case((1, 16, 171), "§x§0§1§1§0§a§b")]
    fn test_encode(rgb: (u8, u8, u8), expected: &str) {
        assert_eq2!(SectionSignEncoder.encode(rgb.into()), expected);
    }

    #[test]
    fn test_marker_len_hint_is_exact() {
        let marker = SectionSignEncoder.encode(RgbValue::from_u8(12, 34, 56));
        assert_eq2!(marker.len(), SectionSignEncoder.marker_len_hint());
        assert_eq2!(marker.chars().count(), 14);
    }

    #[test]
    fn test_write_marker_appends() {
        let mut acc = String::from("A");
        SectionSignEncoder.write_marker(RgbValue::from_u8(255, 0, 0), &mut acc);
        assert_eq2!(acc, "A§x§f§f§0§0§0§0");
    }
}
