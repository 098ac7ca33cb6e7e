// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::EnumIter;

use crate::RgbValue;

/// One of the three additive color components of an [`RgbValue`].
///
/// Interpolation runs the same arithmetic once per channel, so instead of passing
/// around accessor closures, callers walk `Channel::iter()` (red, green, blue).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    #[must_use]
    pub const fn get(self, color: RgbValue) -> u8 {
        match self {
            Channel::Red => color.red,
            Channel::Green => color.green,
            Channel::Blue => color.blue,
        }
    }

    pub const fn set(self, color: &mut RgbValue, value: u8) {
        match self {
            Channel::Red => color.red = value,
            Channel::Green => color.green = value,
            Channel::Blue => color.blue = value,
        }
    }
}
