//! Wire and state types shared by the relay, the server and the renderers.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ThemeError, UnknownVariant};

/// Default primary color applied to buttons in previews.
pub const DEFAULT_PRIMARY_COLOR: &str = "#3B82F6";

/// Gradient used by the `colorful` theme.
pub const COLORFUL_GRADIENT: &str = "linear-gradient(to right, #3B82F6, #8B5CF6)";

/// What kind of markup the model is asked to produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// A complete HTML5 document.
    #[default]
    Html,
    /// A JSX fragment rendered as a React component.
    React,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Html => "html",
            ContentType::React => "react",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "html" => Ok(ContentType::Html),
            "react" => Ok(ContentType::React),
            other => Err(UnknownVariant {
                kind: "content type",
                value: other.to_string(),
                expected: "html, react",
            }),
        }
    }
}

/// One user submission. `prompt` defaults to empty so that a missing field
/// and a blank field are rejected the same way by the relay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    #[serde(default)]
    pub prompt: String,
    #[serde(rename = "type", default)]
    pub content_type: ContentType,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>, content_type: ContentType) -> Self {
        Self {
            prompt: prompt.into(),
            content_type,
        }
    }
}

/// The raw model output for one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub content: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    #[serde(rename = "modelUsed")]
    pub model_used: String,
}

/// Named color scheme for previews.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Colorful,
}

impl Theme {
    pub fn background(&self) -> &'static str {
        match self {
            Theme::Light => "white",
            Theme::Dark => "#111827",
            Theme::Colorful => "transparent",
        }
    }

    pub fn text_color(&self) -> &'static str {
        match self {
            Theme::Light => "#111827",
            Theme::Dark | Theme::Colorful => "white",
        }
    }

    /// Background gradient layered over `background()`, if the theme has one.
    pub fn gradient(&self) -> Option<&'static str> {
        match self {
            Theme::Colorful => Some(COLORFUL_GRADIENT),
            Theme::Light | Theme::Dark => None,
        }
    }
}

impl FromStr for Theme {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "colorful" => Ok(Theme::Colorful),
            other => Err(UnknownVariant {
                kind: "theme",
                value: other.to_string(),
                expected: "light, dark, colorful",
            }),
        }
    }
}

/// Font family for previews.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Font {
    #[default]
    Sans,
    Serif,
    Mono,
}

impl Font {
    /// CSS `font-family` stack.
    pub fn stack(&self) -> &'static str {
        match self {
            Font::Sans => "ui-sans-serif, system-ui, sans-serif",
            Font::Serif => "ui-serif, Georgia, serif",
            Font::Mono => "ui-monospace, monospace",
        }
    }
}

impl FromStr for Font {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sans" => Ok(Font::Sans),
            "serif" => Ok(Font::Serif),
            "mono" => Ok(Font::Mono),
            other => Err(UnknownVariant {
                kind: "font",
                value: other.to_string(),
                expected: "sans, serif, mono",
            }),
        }
    }
}

/// Theme overrides applied on every preview render.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeConfig {
    pub theme: Theme,
    pub font: Font,
    pub primary_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            font: Font::default(),
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
        }
    }
}

impl ThemeConfig {
    pub fn new(theme: Theme, font: Font, primary_color: impl Into<String>) -> Self {
        Self {
            theme,
            font,
            primary_color: primary_color.into(),
        }
    }

    /// Check that the primary color is safe to splice into CSS and script.
    pub fn validate(&self) -> Result<(), ThemeError> {
        static COLOR_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = COLOR_REGEX.get_or_init(|| {
            Regex::new(r"^(#([0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})|[a-zA-Z]+)$")
                .expect("color regex is valid")
        });

        if re.is_match(&self.primary_color) {
            Ok(())
        } else {
            Err(ThemeError::InvalidColor {
                value: self.primary_color.clone(),
            })
        }
    }
}

/// Body of a preview request: editable code plus the theme to render it with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewRequest {
    #[serde(default)]
    pub content: String,
    #[serde(rename = "type", default)]
    pub content_type: ContentType,
    #[serde(default)]
    pub theme: ThemeConfig,
}
