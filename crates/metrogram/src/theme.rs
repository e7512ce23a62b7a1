//! Theme tuples and type-picker metadata.
//!
//! A [`Theme`] is the opaque tuple handed over by the theming collaborator.
//! Station types that expose a color attribute store it as a default and
//! hand it to the color-picker custom field without interpreting its
//! internal structure; the only values read back out are the two colors.

use metrogram_core::color::Color;
use serde::{Deserialize, Serialize};

/// City a theme or station type belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CityTag {
    Generic,
    Shanghai,
    Hongkong,
    London,
}

/// Canvas a station type can be placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanvasKind {
    RailMap,
    LineDiagram,
}

/// Category a station type is listed under in the type picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    Metro,
    NationalRail,
    Tram,
}

/// The `[city, theme id, primary color, contrast color]` tuple from the
/// theming collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme(CityTag, String, Color, Color);

impl Theme {
    pub fn new(city: CityTag, line: impl Into<String>, primary: Color, contrast: Color) -> Self {
        Self(city, line.into(), primary, contrast)
    }

    pub fn city(&self) -> CityTag {
        self.0
    }

    pub fn line(&self) -> &str {
        &self.1
    }

    pub fn primary(&self) -> &Color {
        &self.2
    }

    pub fn contrast(&self) -> &Color {
        &self.3
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self(
            CityTag::Generic,
            String::from("l1"),
            Color::new("#78BA25").unwrap(),
            Color::new("white").unwrap(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_accessors() {
        let theme = Theme::new(
            CityTag::Shanghai,
            "l2",
            Color::new("#009944").unwrap(),
            Color::new("white").unwrap(),
        );
        assert_eq!(theme.city(), CityTag::Shanghai);
        assert_eq!(theme.line(), "l2");
        assert_eq!(theme.primary(), &Color::new("#009944").unwrap());
    }

    #[test]
    fn test_theme_default_contrast_is_white() {
        let theme = Theme::default();
        assert_eq!(theme.city(), CityTag::Generic);
        assert_eq!(theme.contrast(), &Color::new("white").unwrap());
    }
}
