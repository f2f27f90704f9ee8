//! Survey theming.
//!
//! Themes arrive as loosely-typed JSON from clients. Missing fields fall
//! back to defaults instead of failing the request, while present fields
//! are validated strictly.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::errors::SurveyError;

/// Default primary (accent) color.
pub const DEFAULT_PRIMARY_COLOR: &str = "#d90429";
/// Default page background color.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#ffffff";
/// Default body text color.
pub const DEFAULT_TEXT_COLOR: &str = "#333333";
/// Default font stack.
pub const DEFAULT_FONT: &str = "Poppins, sans-serif";
/// Default layout intent.
pub const DEFAULT_INTENT: &str = "professional";

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-fA-F]{6}$").unwrap_or_else(|e| panic!("invalid hex color regex: {}", e))
});

/// A validated six-digit hex color, stored lowercase with a leading `#`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    /// Parses a color string into canonical `#rrggbb` form.
    ///
    /// Accepts an optional leading `#` and three-digit shorthand
    /// (each digit doubled). An empty string falls back to black
    /// rather than failing, so omitted colors never reject a survey.
    pub fn parse(value: &str) -> Result<Self, SurveyError> {
        if value.is_empty() {
            return Ok(HexColor("#000000".to_string()));
        }

        let stripped = value.strip_prefix('#').unwrap_or(value);
        let normalized = if stripped.len() == 3 {
            stripped
                .chars()
                .flat_map(|c| [c, c])
                .collect::<String>()
        } else {
            stripped.to_string()
        };

        if !HEX_COLOR.is_match(&normalized) {
            return Err(SurveyError::invalid_color(format!("#{}", normalized)));
        }

        Ok(HexColor(format!("#{}", normalized.to_lowercase())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for HexColor {
    fn default() -> Self {
        HexColor("#000000".to_string())
    }
}

/// Color slots of a theme. Serialized as the nested `colors` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub primary: HexColor,
    pub background: HexColor,
    pub text: HexColor,
}

impl Default for ThemeColors {
    fn default() -> Self {
        ThemeColors {
            primary: HexColor(DEFAULT_PRIMARY_COLOR.to_string()),
            background: HexColor(DEFAULT_BACKGROUND_COLOR.to_string()),
            text: HexColor(DEFAULT_TEXT_COLOR.to_string()),
        }
    }
}

/// Visual theme attached to every survey.
///
/// Wire shape, on input and in stored documents alike:
/// `{font, intent, colors: {primary, background, text}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default = "default_font")]
    pub font: String,
    #[serde(default = "default_intent")]
    pub intent: String,
    #[serde(default)]
    pub colors: ThemeColors,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            font: default_font(),
            intent: default_intent(),
            colors: ThemeColors::default(),
        }
    }
}

fn default_font() -> String {
    DEFAULT_FONT.to_string()
}

fn default_intent() -> String {
    DEFAULT_INTENT.to_string()
}

impl Theme {
    /// Builds a theme from the optional `theme` member of a request body.
    ///
    /// `None` and JSON `null` both produce the default theme. Anything
    /// other than an object is rejected, and so is a non-object `colors`
    /// member. Per-field defaults apply only when a key is absent; an
    /// explicit `null` color is treated as an empty string, which
    /// resolves to black. Every color present runs through the hex
    /// validator.
    pub fn from_value(value: Option<&serde_json::Value>) -> Result<Self, SurveyError> {
        let value = match value {
            None | Some(serde_json::Value::Null) => return Ok(Theme::default()),
            Some(v) => v,
        };

        let map = value
            .as_object()
            .ok_or_else(|| SurveyError::validation("theme", "Theme must be an object"))?;

        static EMPTY: Lazy<serde_json::Map<String, serde_json::Value>> =
            Lazy::new(serde_json::Map::new);
        let colors = match map.get("colors") {
            None | Some(serde_json::Value::Null) => &*EMPTY,
            Some(serde_json::Value::Object(colors)) => colors,
            Some(_) => {
                return Err(SurveyError::validation(
                    "colors",
                    "Theme colors must be an object",
                ))
            }
        };

        let primary = Self::color_field(colors, "primary", DEFAULT_PRIMARY_COLOR)?;
        let background = Self::color_field(colors, "background", DEFAULT_BACKGROUND_COLOR)?;
        let text = Self::color_field(colors, "text", DEFAULT_TEXT_COLOR)?;

        let font = match map.get("font") {
            Some(serde_json::Value::String(s)) if !s.is_empty() => s.clone(),
            _ => DEFAULT_FONT.to_string(),
        };
        let intent = match map.get("intent") {
            Some(serde_json::Value::String(s)) if !s.is_empty() => s.clone(),
            _ => DEFAULT_INTENT.to_string(),
        };

        Ok(Theme {
            font,
            intent,
            colors: ThemeColors {
                primary,
                background,
                text,
            },
        })
    }

    fn color_field(
        map: &serde_json::Map<String, serde_json::Value>,
        key: &str,
        default: &str,
    ) -> Result<HexColor, SurveyError> {
        let raw = match map.get(key) {
            None => return HexColor::parse(default),
            Some(serde_json::Value::Null) => return HexColor::parse(""),
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(_) => {
                return Err(SurveyError::validation(
                    key,
                    "Invalid theme color: Color must be a string",
                ))
            }
        };

        HexColor::parse(&raw).map_err(|err| match err {
            SurveyError::InvalidColor(value) => SurveyError::validation(
                key,
                format!("Invalid theme color: Invalid hex color code: {}", value),
            ),
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_full_hex_with_hash() {
        let color = HexColor::parse("#D90429").unwrap();
        assert_eq!(color.as_str(), "#d90429");
    }

    #[test]
    fn parses_without_hash() {
        let color = HexColor::parse("ffffff").unwrap();
        assert_eq!(color.as_str(), "#ffffff");
    }

    #[test]
    fn expands_three_digit_shorthand() {
        let color = HexColor::parse("#f0a").unwrap();
        assert_eq!(color.as_str(), "#ff00aa");
    }

    #[test]
    fn empty_string_falls_back_to_black() {
        let color = HexColor::parse("").unwrap();
        assert_eq!(color.as_str(), "#000000");
    }

    #[test]
    fn rejects_invalid_characters() {
        let err = HexColor::parse("zzz").unwrap_err();
        assert_eq!(err.message(), "Invalid hex color code: #zzzzzz");
    }

    #[test]
    fn rejects_wrong_length() {
        let err = HexColor::parse("#12345").unwrap_err();
        assert_eq!(err.message(), "Invalid hex color code: #12345");
    }

    #[test]
    fn missing_theme_uses_defaults() {
        let theme = Theme::from_value(None).unwrap();
        assert_eq!(theme.colors.primary.as_str(), "#d90429");
        assert_eq!(theme.colors.background.as_str(), "#ffffff");
        assert_eq!(theme.colors.text.as_str(), "#333333");
        assert_eq!(theme.font, "Poppins, sans-serif");
        assert_eq!(theme.intent, "professional");
    }

    #[test]
    fn null_theme_uses_defaults() {
        let theme = Theme::from_value(Some(&serde_json::Value::Null)).unwrap();
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn non_object_theme_rejected() {
        let err = Theme::from_value(Some(&json!("dark"))).unwrap_err();
        assert_eq!(err.message(), "Validation failed for 'theme': Theme must be an object");
    }

    #[test]
    fn non_object_colors_rejected() {
        let err = Theme::from_value(Some(&json!({"colors": "dark"}))).unwrap_err();
        assert_eq!(
            err.message(),
            "Validation failed for 'colors': Theme colors must be an object"
        );
    }

    #[test]
    fn nested_colors_are_validated_and_normalized() {
        let theme = Theme::from_value(Some(&json!({
            "colors": {"primary": "#ABC", "background": "1A2B3C"}
        })))
        .unwrap();
        assert_eq!(theme.colors.primary.as_str(), "#aabbcc");
        assert_eq!(theme.colors.background.as_str(), "#1a2b3c");
        assert_eq!(theme.colors.text.as_str(), "#333333");
    }

    #[test]
    fn absent_keys_use_field_defaults() {
        let theme = Theme::from_value(Some(&json!({"font": "Inter"}))).unwrap();
        assert_eq!(theme.colors.primary.as_str(), "#d90429");
        assert_eq!(theme.font, "Inter");

        let theme = Theme::from_value(Some(&json!({"colors": null}))).unwrap();
        assert_eq!(theme.colors, ThemeColors::default());
    }

    #[test]
    fn explicit_null_color_resolves_to_black() {
        let theme =
            Theme::from_value(Some(&json!({"colors": {"primary": null}}))).unwrap();
        assert_eq!(theme.colors.primary.as_str(), "#000000");
    }

    #[test]
    fn non_string_color_rejected() {
        let err = Theme::from_value(Some(&json!({"colors": {"primary": 12}}))).unwrap_err();
        match err {
            SurveyError::ValidationFailed { field, message } => {
                assert_eq!(field, "primary");
                assert_eq!(message, "Invalid theme color: Color must be a string");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn invalid_color_wrapped_with_context() {
        let err = Theme::from_value(Some(&json!({"colors": {"text": "zzz"}}))).unwrap_err();
        match err {
            SurveyError::ValidationFailed { field, message } => {
                assert_eq!(field, "text");
                assert_eq!(
                    message,
                    "Invalid theme color: Invalid hex color code: #zzzzzz"
                );
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn theme_serializes_with_nested_colors() {
        let theme = Theme::default();
        let value = serde_json::to_value(&theme).unwrap();
        assert_eq!(value["colors"]["primary"], "#d90429");
        assert_eq!(value["colors"]["background"], "#ffffff");
        assert_eq!(value["colors"]["text"], "#333333");
        assert_eq!(value["font"], "Poppins, sans-serif");
        assert!(value.get("primary_color").is_none());
    }

    #[test]
    fn theme_round_trips_through_stored_documents() {
        let theme = Theme::from_value(Some(&json!({
            "font": "Inter",
            "intent": "playful",
            "colors": {"primary": "#1a2b3c"}
        })))
        .unwrap();
        let value = serde_json::to_value(&theme).unwrap();
        let back: Theme = serde_json::from_value(value).unwrap();
        assert_eq!(back, theme);
    }
}
