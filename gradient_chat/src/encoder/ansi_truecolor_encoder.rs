// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#24-bit>

use std::fmt::Write as _;

use super::ColorMarkerEncoder;
use crate::RgbValue;

pub const CSI: &str = "\x1b[";
pub const SGR: &str = "m";

/// Encodes colors as the SGR "set foreground to truecolor" command,
/// `ESC[38;2;{r};{g};{b}m`. Handy for previewing a gradient in a terminal.
///
/// No reset is emitted after the text. Callers that print to a terminal should
/// append `ESC[0m` themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnsiTruecolorEncoder;

impl ColorMarkerEncoder for AnsiTruecolorEncoder {
    fn write_marker(&self, color: RgbValue, acc: &mut String) {
        let RgbValue { red, green, blue } = color;
        _ = write!(acc, "{CSI}38;2;{red};{green};{blue}{SGR}");
    }

    fn marker_len_hint(&self) -> usize { 19 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn fg_color_rgb() {
        let marker = AnsiTruecolorEncoder.encode(RgbValue::from_u8(175, 215, 135));
        assert_eq2!(marker, "\x1b[38;2;175;215;135m");
    }

    #[test]
    fn fg_color_rgb_single_digits() {
        let marker = AnsiTruecolorEncoder.encode(RgbValue::from_u8(0, 7, 9));
        assert_eq2!(marker, "\x1b[38;2;0;7;9m");
    }
}
