// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ColorMarkerEncoder, GradientError, GradientModel, GradientResult,
            SectionSignEncoder};

/// Colorizes text with a [`GradientModel`]: every char of the input is prefixed by
/// the marker for its color, in the original order.
///
/// ```
/// use gradient_chat::{AnsiTruecolorEncoder, GradientModel, GradientTransformer};
///
/// // Chat server markers (the default).
/// let chat = GradientTransformer::new(GradientModel::DEFAULT);
/// assert_eq!(chat.apply("X"), "§x§c§c§2§b§5§eX");
///
/// // Terminal escape sequences.
/// let term = GradientTransformer::with_encoder(GradientModel::DEFAULT, AnsiTruecolorEncoder);
/// assert_eq!(term.apply("X"), "\x1b[38;2;204;43;94mX");
/// ```
///
/// The transform is not idempotent. Applying it to its own output colors the
/// marker characters too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientTransformer<E = SectionSignEncoder> {
    model: GradientModel,
    encoder: E,
}

impl Default for GradientTransformer {
    fn default() -> Self { Self::new(GradientModel::DEFAULT) }
}

impl From<GradientModel> for GradientTransformer {
    fn from(model: GradientModel) -> Self { Self::new(model) }
}

impl GradientTransformer {
    #[must_use]
    pub fn new(model: GradientModel) -> Self { Self::with_encoder(model, SectionSignEncoder) }
}

impl<E: ColorMarkerEncoder> GradientTransformer<E> {
    #[must_use]
    pub fn with_encoder(model: GradientModel, encoder: E) -> Self { Self { model, encoder } }

    #[must_use]
    pub fn model(&self) -> &GradientModel { &self.model }

    #[must_use]
    pub fn encoder(&self) -> &E { &self.encoder }

    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        apply_gradient_with_encoder(&self.model, &self.encoder, text)
    }
}

/// Applies `model` to `text` using the [`SectionSignEncoder`].
///
/// # Errors
///
/// Returns [`GradientError::InvalidArgument`] if `model` is `None`. Any text,
/// including the empty string, is valid.
pub fn apply_gradient(model: Option<&GradientModel>, text: &str) -> GradientResult<String> {
    let Some(model) = model else {
        return Err(GradientError::InvalidArgument { argument: "model" });
    };
    Ok(apply_gradient_with_encoder(model, &SectionSignEncoder, text))
}

/// Single pass over the chars of `text`, one marker per char.
///
/// Positions are measured in UTF-16 code units, the unit chat clients count in:
/// `N` is the UTF-16 length of `text` and a char's index is its UTF-16 offset. A char
/// outside the BMP (eg: most emoji) takes up two units, so the chars after it are
/// colored as if it were two chars wide.
#[must_use]
pub fn apply_gradient_with_encoder(
    model: &GradientModel,
    encoder: &impl ColorMarkerEncoder,
    text: &str,
) -> String {
    let len = text.encode_utf16().count();
    let char_count = text.chars().count();
    let mut acc =
        String::with_capacity(text.len() + char_count * encoder.marker_len_hint());

    let mut index = 0;
    for ch in text.chars() {
        encoder.write_marker(model.color_at(index, len), &mut acc);
        acc.push(ch);
        index += ch.len_utf16();
    }

    // % is Display, ? is Debug.
    tracing::trace!(
        message = "applied gradient",
        chars = char_count,
        utf16_units = len,
        output_bytes = acc.len(),
        encoder = ?encoder,
    );

    acc
}
