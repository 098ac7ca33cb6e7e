// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum::IntoEnumIterator;

use crate::{Channel, GradientError, GradientResult, RgbValue};

/// Two endpoint colors. Characters near index `0` of a string take on the `left`
/// color, characters near its end drift towards `right`.
///
/// Immutable once built, so a single instance can be shared by every thread that
/// colorizes text (eg: in a `static` or behind an `Arc`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GradientModel {
    left: RgbValue,
    right: RgbValue,
}

impl Default for GradientModel {
    fn default() -> Self { Self::DEFAULT }
}

impl GradientModel {
    /// Pink (`#CC2B5E`) to purple (`#753A88`).
    pub const DEFAULT: GradientModel = GradientModel {
        left: RgbValue::from_u8(204, 43, 94),
        right: RgbValue::from_u8(117, 58, 136),
    };

    #[must_use]
    pub fn new(left: RgbValue, right: RgbValue) -> Self {
        tracing::debug!(?left, ?right, "gradient model created");
        Self { left, right }
    }

    /// For callers whose endpoints may be absent (eg: optional settings).
    ///
    /// # Errors
    ///
    /// Returns [`GradientError::InvalidArgument`] naming the first missing endpoint.
    pub fn try_new(left: Option<RgbValue>, right: Option<RgbValue>) -> GradientResult<Self> {
        let Some(left) = left else {
            return Err(GradientError::InvalidArgument { argument: "left" });
        };
        let Some(right) = right else {
            return Err(GradientError::InvalidArgument { argument: "right" });
        };
        Ok(Self::new(left, right))
    }

    /// # Errors
    ///
    /// Returns [`GradientError::InvalidHexColorFormat`] if either string is not
    /// `#RRGGBB`.
    pub fn try_from_hex(left: &str, right: &str) -> GradientResult<Self> {
        let left = RgbValue::try_from_hex_color(left)?;
        let right = RgbValue::try_from_hex_color(right)?;
        Ok(Self::new(left, right))
    }

    #[must_use]
    pub const fn left(&self) -> RgbValue { self.left }

    #[must_use]
    pub const fn right(&self) -> RgbValue { self.right }

    /// Color of the char at `index` in a string of `len` chars (both counted in
    /// UTF-16 code units by [`GradientTransformer`](crate::GradientTransformer)).
    ///
    /// `percent` is `index / len`, so it stays below `1.0` and the last char never
    /// quite reaches `right`. Each channel is then `left + percent * (right - left)`,
    /// computed in `f32` and truncated (floored) rather than rounded. Existing output
    /// depends on both of these.
    ///
    /// `index` must be less than `len`. Larger indices extrapolate past `right` and
    /// the channels saturate at `0` or `255` (debug builds panic instead). `len == 0`
    /// has no chars to color and returns `left`.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn color_at(&self, index: usize, len: usize) -> RgbValue {
        if len == 0 {
            return self.left;
        }
        debug_assert!(index < len, "index {index} out of range for len {len}");

        let percent = index as f32 / len as f32;

        let mut acc = self.left;
        for channel in Channel::iter() {
            let left_channel = f32::from(channel.get(self.left));
            let right_channel = f32::from(channel.get(self.right));
            let distance = percent * (right_channel - left_channel);
            // In [min(left, right), max(left, right)] while index < len.
            let value = (left_channel + distance).floor();
            channel.set(&mut acc, value as u8);
        }
        acc
    }
}
