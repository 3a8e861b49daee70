use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub primary: ColorSpec,
    pub accent: ColorSpec,
    pub banner: ColorSpec,

    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Theme {
    /// Get the default theme (Storefront Dark).
    ///
    pub fn default() -> Self {
        Self::storefront_dark()
    }

    /// Look up a built-in theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Theme> {
        match name {
            "storefront-dark" => Some(Self::storefront_dark()),
            "paper-light" => Some(Self::paper_light()),
            _ => None,
        }
    }

    /// Storefront Dark theme.
    ///
    pub fn storefront_dark() -> Self {
        Theme {
            name: "storefront-dark".to_string(),
            primary: ColorSpec {
                r: 122,
                g: 162,
                b: 247,
            }, // Blue
            accent: ColorSpec {
                r: 158,
                g: 206,
                b: 106,
            }, // Green
            banner: ColorSpec {
                r: 122,
                g: 162,
                b: 247,
            }, // Blue
            text: ColorSpec {
                r: 192,
                g: 202,
                b: 245,
            }, // Text
            text_muted: ColorSpec {
                r: 86,
                g: 95,
                b: 137,
            }, // Muted
            border_active: ColorSpec {
                r: 122,
                g: 162,
                b: 247,
            }, // Blue
            border_normal: ColorSpec {
                r: 59,
                g: 66,
                b: 97,
            }, // Dim
            highlight_bg: ColorSpec {
                r: 40,
                g: 52,
                b: 87,
            }, // Selection
            highlight_fg: ColorSpec {
                r: 192,
                g: 202,
                b: 245,
            }, // Text
        }
    }

    /// Paper Light theme.
    ///
    pub fn paper_light() -> Self {
        Theme {
            name: "paper-light".to_string(),
            primary: ColorSpec {
                r: 30,
                g: 102,
                b: 245,
            }, // Blue
            accent: ColorSpec {
                r: 64,
                g: 160,
                b: 43,
            }, // Green
            banner: ColorSpec {
                r: 136,
                g: 57,
                b: 239,
            }, // Purple
            text: ColorSpec {
                r: 76,
                g: 79,
                b: 105,
            }, // Text
            text_muted: ColorSpec {
                r: 156,
                g: 160,
                b: 176,
            }, // Muted
            border_active: ColorSpec {
                r: 30,
                g: 102,
                b: 245,
            }, // Blue
            border_normal: ColorSpec {
                r: 188,
                g: 192,
                b: 204,
            }, // Dim
            highlight_bg: ColorSpec {
                r: 220,
                g: 224,
                b: 232,
            }, // Selection
            highlight_fg: ColorSpec {
                r: 76,
                g: 79,
                b: 105,
            }, // Text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_finds_builtin_themes() {
        assert_eq!(Theme::from_name("storefront-dark").unwrap().name, "storefront-dark");
        assert_eq!(Theme::from_name("paper-light").unwrap().name, "paper-light");
        assert!(Theme::from_name("no-such-theme").is_none());
    }

    #[test]
    fn test_color_spec_to_color() {
        let spec = ColorSpec { r: 1, g: 2, b: 3 };
        assert_eq!(spec.to_color(), Color::Rgb(1, 2, 3));
    }
}
