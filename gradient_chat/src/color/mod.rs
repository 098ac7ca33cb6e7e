// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Core color types.
//!
//! This module provides:
//! - [`RgbValue`]: a 24-bit truecolor value, one `u8` per channel
//! - [`Channel`]: the three additive channels, used to interpolate each one in turn
//! - [`parse_hex_color`]: a `nom` parser for `#RRGGBB` strings

// Attach.
mod channel;
mod hex_color_parser;
mod rgb_value;

// Re-export.
pub use channel::*;
pub use hex_color_parser::*;
pub use rgb_value::*;
