// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Debug;

use crate::RgbValue;

/// Turns an [`RgbValue`] into renderer specific marker text.
///
/// Implementations must be pure: the same color always produces the same marker.
/// They are shared across threads along with the transformer that owns them.
pub trait ColorMarkerEncoder: Debug + Send + Sync {
    /// Append the marker for `color` to `acc`.
    fn write_marker(&self, color: RgbValue, acc: &mut String);

    /// Typical marker length in bytes. Used to reserve output capacity up front, so
    /// it does not need to be exact.
    fn marker_len_hint(&self) -> usize { 0 }

    /// Returns the marker for `color` as a new string.
    fn encode(&self, color: RgbValue) -> String {
        let mut acc = String::with_capacity(self.marker_len_hint());
        self.write_marker(color, &mut acc);
        acc
    }
}
