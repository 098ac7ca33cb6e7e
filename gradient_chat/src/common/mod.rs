// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod gradient_error;

// Re-export.
pub use gradient_error::*;
