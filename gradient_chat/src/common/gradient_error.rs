// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Error types for this crate. For more information on how these compose with
//! [`miette`], see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

/// Type alias to make it easy to work with [`GradientError`].
pub type GradientResult<T> = Result<T, GradientError>;

/// Everything that can go wrong in this crate. Failures are reported right away to
/// the caller, there is no partial success mode.
///
/// | Variant                   | Cause                                           |
/// | :------------------------ | :---------------------------------------------- |
/// | [`InvalidArgument`]       | A gradient endpoint or the model is missing     |
/// | [`InvalidHexColorFormat`] | A color string is not `#RRGGBB`                 |
/// | [`InvalidConfig`]         | Gradient configuration JSON could not be parsed |
///
/// Transforming text never fails once a [`GradientModel`] exists.
///
/// [`InvalidArgument`]: Self::InvalidArgument
/// [`InvalidHexColorFormat`]: Self::InvalidHexColorFormat
/// [`InvalidConfig`]: Self::InvalidConfig
/// [`GradientModel`]: crate::GradientModel
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum GradientError {
    #[error("🎨 Missing required argument: '{argument}'")]
    #[diagnostic(
        code(gradient_chat::invalid_argument),
        help("Both gradient endpoints (and the model passed to apply) must be present.")
    )]
    InvalidArgument {
        /// Name of the absent argument, eg: `"left"`, `"right"`, `"model"`.
        argument: &'static str,
    },

    #[error("🎨 Invalid hex color: '{input}'")]
    #[diagnostic(
        code(gradient_chat::invalid_hex_color_format),
        help("Use the `#RRGGBB` format, eg: `#CC2B5E`.")
    )]
    InvalidHexColorFormat { input: String },

    #[error("📑 Invalid gradient config: {reason}")]
    #[diagnostic(code(gradient_chat::invalid_config))]
    InvalidConfig { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use miette::Diagnostic;

    #[test]
    fn test_display_names_the_argument() {
        let error = GradientError::InvalidArgument { argument: "left" };
        assert_eq2!(error.to_string(), "🎨 Missing required argument: 'left'");
    }

    #[test]
    fn test_diagnostic_code() {
        let error = GradientError::InvalidHexColorFormat {
            input: "#ff00".into(),
        };
        let code = error.code().map(|it| it.to_string());
        assert_eq2!(
            code.as_deref(),
            Some("gradient_chat::invalid_hex_color_format")
        );
    }
}
