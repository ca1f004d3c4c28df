//! Highlight configuration for pathdisplay
//!
//! Maps the labels carried by style spans to colors. Read from the `[highlights]` table of
//! the configuration file, with internal defaults for every label the crate emits.
//!
//! # Examples
//! ```toml
//! [highlights]
//! ResultsComment = { fg = "#777777" }
//! DevIconRs = { fg = "red", bg = "black" }
//! ```

use crate::core::COMMENT_STYLE;
use crate::ui::icons::builtin_icons;
use crate::utils::parse_color;

use once_cell::sync::Lazy;
use ratatui::style::{Color, Style};
use serde::Deserialize;

use std::collections::HashMap;

/// Foreground and background colors. [Color::Reset] means "not set".
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    #[serde(default, deserialize_with = "deserialize_color_field")]
    fg: Color,
    #[serde(default, deserialize_with = "deserialize_color_field")]
    bg: Color,
}

impl Default for ColorPair {
    fn default() -> Self {
        Self {
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

impl ColorPair {
    pub fn new(fg: Color, bg: Color) -> Self {
        Self { fg, bg }
    }

    pub fn fg(fg: Color) -> Self {
        Self {
            fg,
            ..Self::default()
        }
    }

    /// Resolves the ColorPair by replacing Reset colors with those from another ColorPair.
    pub fn resolve(&self, other: &ColorPair) -> Self {
        Self {
            fg: if self.fg == Color::Reset {
                other.fg
            } else {
                self.fg
            },
            bg: if self.bg == Color::Reset {
                other.bg
            } else {
                self.bg
            },
        }
    }

    /// Converts the ColorPair to a Style, falling back to `fallback` for Reset colors.
    pub fn style_or(&self, fallback: &ColorPair) -> Style {
        let resolved = self.resolve(fallback);
        Style::default().fg(resolved.fg).bg(resolved.bg)
    }
}

/// Highlight label to colors
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct HighlightTheme {
    highlights: HashMap<String, ColorPair>,
}

impl HighlightTheme {
    /// Built-in highlights: the directory comment style and every devicon color
    pub fn internal_defaults() -> &'static Self {
        static DEFAULT: Lazy<HighlightTheme> = Lazy::new(HighlightTheme::builtin);
        &DEFAULT
    }

    fn builtin() -> Self {
        let mut highlights = HashMap::new();
        highlights.insert(COMMENT_STYLE.to_owned(), ColorPair::fg(Color::DarkGray));
        for icon in builtin_icons() {
            highlights.insert(icon.label().to_owned(), ColorPair::fg(parse_color(icon.color())));
        }
        Self { highlights }
    }

    pub fn set(&mut self, label: impl Into<String>, colors: ColorPair) {
        self.highlights.insert(label.into(), colors);
    }

    pub fn get(&self, label: &str) -> Option<&ColorPair> {
        self.highlights.get(label)
    }

    /// Style for `label`. Unset colors fall back to the internal defaults.
    pub fn style(&self, label: &str) -> Style {
        let fallback = Self::internal_defaults()
            .get(label)
            .copied()
            .unwrap_or_default();
        match self.highlights.get(label) {
            Some(colors) => colors.style_or(&fallback),
            None => fallback.style_or(&ColorPair::default()),
        }
    }
}

/// Deserialize a color name or hex code
fn deserialize_color_field<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(parse_color(&s))
}
