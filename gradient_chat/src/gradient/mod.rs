// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Two-color gradients and the per-character text transform built on them.
//!
//! - [`GradientModel`]: the immutable `left` / `right` endpoint pair, plus the
//!   interpolation step [`GradientModel::color_at`]
//! - [`GradientTransformer`]: prefixes every char of a string with a color marker

// Attach.
mod gradient_model;
mod gradient_transformer;

// Re-export.
pub use gradient_model::*;
pub use gradient_transformer::*;
