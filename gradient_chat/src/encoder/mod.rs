// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Color marker encoders. A marker is the text a downstream renderer reads as
//! "switch to this color for what follows". Interpolation does not care which
//! renderer is targeted, it only hands an [`RgbValue`] to a [`ColorMarkerEncoder`].
//!
//! - [`SectionSignEncoder`]: the `§x§r§r§g§g§b§b` convention of chat servers
//! - [`AnsiTruecolorEncoder`]: SGR truecolor escape sequences for terminals
//!
//! [`RgbValue`]: crate::RgbValue

// Attach.
mod ansi_truecolor_encoder;
mod color_marker_encoder;
mod section_sign_encoder;

// Re-export.
pub use ansi_truecolor_encoder::*;
pub use color_marker_encoder::*;
pub use section_sign_encoder::*;
