// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Serializable gradient settings. The host reads the text (from a plugin config
//! file, a database, an env var, ...) and hands it over. This crate does no I/O.
//!
//! ```json
//! { "left": "#CC2B5E", "right": "#753A88" }
//! ```

use serde::{Deserialize, Serialize};

use crate::{GradientError, GradientModel, GradientResult, RgbValue};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradientConfig {
    /// `#RRGGBB` color of the first character.
    pub left: String,
    /// `#RRGGBB` color that the last character drifts towards.
    pub right: String,
}

impl Default for GradientConfig {
    fn default() -> Self { Self::from(&GradientModel::DEFAULT) }
}

impl GradientConfig {
    /// # Errors
    ///
    /// Returns [`GradientError::InvalidConfig`] if `input` is not a JSON object with
    /// string `left` and `right` fields. The colors themselves are only checked when
    /// converting into a [`GradientModel`].
    pub fn try_from_json_str(input: &str) -> GradientResult<Self> {
        let config: Self =
            serde_json::from_str(input).map_err(|err| GradientError::InvalidConfig {
                reason: err.to_string(),
            })?;
        tracing::debug!(?config, "gradient config loaded");
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`GradientError::InvalidConfig`] if serialization fails.
    pub fn try_to_json_string(&self) -> GradientResult<String> {
        serde_json::to_string_pretty(self).map_err(|err| GradientError::InvalidConfig {
            reason: err.to_string(),
        })
    }

    /// # Errors
    ///
    /// See [`GradientConfig::try_from_json_str`] and [`GradientModel::try_from`].
    pub fn try_model_from_json_str(input: &str) -> GradientResult<GradientModel> {
        GradientModel::try_from(&Self::try_from_json_str(input)?)
    }
}

impl TryFrom<&GradientConfig> for GradientModel {
    type Error = GradientError;

    fn try_from(config: &GradientConfig) -> GradientResult<Self> {
        GradientModel::try_from_hex(&config.left, &config.right)
    }
}

impl From<&GradientModel> for GradientConfig {
    fn from(model: &GradientModel) -> Self {
        let as_hex = |color: RgbValue| format!("#{}", color.as_hex_string());
        Self {
            left: as_hex(model.left()),
            right: as_hex(model.right()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_default_config() {
        let config = GradientConfig::default();
        assert_eq2!(config.left, "#cc2b5e");
        assert_eq2!(config.right, "#753a88");
        assert_eq2!(GradientModel::try_from(&config), Ok(GradientModel::DEFAULT));
    }

    #[test]
    fn test_from_json_str() {
        let model = GradientConfig::try_model_from_json_str(
            r##"{ "left": "#000000", "right": "#FFFFFF" }"##,
        )
        .unwrap();
        assert_eq2!(model.left(), RgbValue::from_u8(0, 0, 0));
        assert_eq2!(model.right(), RgbValue::from_u8(255, 255, 255));
    }

    #[test]
    fn test_json_round_trip() {
        let config = GradientConfig::default();
        let json = config.try_to_json_string().unwrap();
        assert_eq2!(GradientConfig::try_from_json_str(&json), Ok(config));
    }

    #[test]
    fn test_missing_field_is_invalid_config() {
        let result = GradientConfig::try_from_json_str(r##"{ "left": "#000000" }"##);
        assert!(matches!(result, Err(GradientError::InvalidConfig { .. })));
    }

    #[test]
    fn test_bad_hex_is_invalid_hex_color() {
        let result = GradientConfig::try_model_from_json_str(
            r##"{ "left": "#000000", "right": "white" }"##,
        );
        assert_eq2!(
            result,
            Err(GradientError::InvalidHexColorFormat {
                input: "white".into()
            })
        );
    }
}
