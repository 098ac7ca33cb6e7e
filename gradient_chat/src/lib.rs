// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # `gradient_chat`
//!
//! Colorize a line of chat text with a two-color gradient. Every character is
//! prefixed by a color marker, and the marker's color slides linearly from the
//! gradient's `left` color (first character) towards its `right` color (last
//! character).
//!
//! ```text
//! "Hi"  ──▶  marker(204,43,94) "H"  marker(160,50,115) "i"
//! ```
//!
//! # Architecture
//!
//! ```text
//! GradientConfig (json, hex strings)
//!     │
//!     ▼
//! GradientModel:       two immutable RgbValue endpoints
//!     │
//!     ▼
//! GradientTransformer: per-char interpolation (color_at)
//!     │
//!     ▼
//! ColorMarkerEncoder:  RgbValue -> marker text (§x§r§r§g§g§b§b, SGR, ...)
//! ```
//!
//! The crate is a pure text transform. It does no I/O, holds no mutable state,
//! and never installs a `tracing` subscriber. Wiring it into a chat server (event
//! subscription, plugin lifecycle) is the host's job.
//!
//! # Example
//!
//! ```
//! use gradient_chat::{GradientModel, GradientTransformer, RgbValue};
//!
//! let model = GradientModel::new(
//!     RgbValue::from_u8(204, 43, 94),
//!     RgbValue::from_u8(117, 58, 136),
//! );
//! let transformer = GradientTransformer::new(model);
//! assert_eq!(transformer.apply("Hi"), "§x§c§c§2§b§5§eH§x§a§0§3§2§7§3i");
//! ```

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod color;
pub mod common;
pub mod config;
pub mod decl_macros;
pub mod encoder;
pub mod gradient;

// Re-export.
pub use color::*;
pub use common::*;
pub use config::*;
pub use encoder::*;
pub use gradient::*;
