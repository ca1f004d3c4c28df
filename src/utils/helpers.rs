//! Helpers for pathdisplay.
//!
//! Small string utilities shared by the config layer and the formatter:
//! - Expanding `~` to the home directory
//! - Splitting a string a bounded number of times
//! - Parsing color names and hex codes

use ratatui::style::Color;

use std::borrow::Cow;
use std::path::PathBuf;

/// Returns the home directory of the current user, if any.
pub fn get_home() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Expands a leading `~` to the home directory.
///
/// Only `~` on its own or followed by a separator is expanded, `~user` is left alone.
/// Without a home directory the input is returned unchanged.
pub fn expand_home_path(path: &str) -> Cow<'_, str> {
    let Some(rest) = path.strip_prefix('~') else {
        return Cow::Borrowed(path);
    };
    if !(rest.is_empty() || rest.starts_with('/') || rest.starts_with('\\')) {
        return Cow::Borrowed(path);
    }
    match get_home().as_deref().and_then(|home| home.to_str()) {
        Some(home) => Cow::Owned(format!("{}{}", home, rest)),
        None => Cow::Borrowed(path),
    }
}

/// Splits `s` on `sep` at most `maxsplit` times. `None` splits on every occurrence.
///
/// # Examples
/// max_split("a:b:c", ":", Some(1)) == ["a", "b:c"]
pub fn max_split<'a>(s: &'a str, sep: &str, maxsplit: Option<usize>) -> Vec<&'a str> {
    if sep.is_empty() {
        return vec![s];
    }
    match maxsplit {
        Some(n) => s.splitn(n + 1, sep).collect(),
        None => s.split(sep).collect(),
    }
}

/// Parses a string (color name or hex) into a [Color].
///
/// Supports standard names (red, green, etc.) as well as hex values (#RRGGBB or #RGB).
/// Anything else resolves to [Color::Reset].
pub fn parse_color(s: &str) -> Color {
    match s.to_lowercase().as_str() {
        "default" | "reset" => Color::Reset,
        "yellow" => Color::Yellow,
        "red" => Color::Red,
        "blue" => Color::Blue,
        "green" => Color::Green,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "black" => Color::Black,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        _ => s.strip_prefix('#').and_then(parse_hex).unwrap_or(Color::Reset),
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    let expanded: Cow<'_, str> = match hex.len() {
        6 => Cow::Borrowed(hex),
        3 => Cow::Owned(hex.chars().flat_map(|c| [c, c]).collect()),
        _ => return None,
    };
    let rgb = u32::from_str_radix(&expanded, 16).ok()?;
    Some(Color::Rgb(
        ((rgb >> 16) & 0xFF) as u8,
        ((rgb >> 8) & 0xFF) as u8,
        (rgb & 0xFF) as u8,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_home_path() {
        let Some(home) = get_home() else {
            return;
        };
        let home = home.to_string_lossy().into_owned();

        assert_eq!(expand_home_path("~"), home);
        assert_eq!(expand_home_path("~/src"), format!("{}/src", home));
        assert_eq!(expand_home_path("~other/src"), "~other/src");
        assert_eq!(expand_home_path("/abs/~"), "/abs/~");
    }

    #[test]
    fn test_max_split() {
        assert_eq!(max_split("a:b:c", ":", Some(1)), vec!["a", "b:c"]);
        assert_eq!(max_split("a:b:c", ":", Some(0)), vec!["a:b:c"]);
        assert_eq!(max_split("a:b:c", ":", None), vec!["a", "b", "c"]);
        assert_eq!(max_split("a:b:c", ":", Some(10)), vec!["a", "b", "c"]);
        assert_eq!(
            max_split("file.rs:12:4:text: x", ":", Some(3)),
            vec!["file.rs", "12", "4", "text: x"]
        );
        assert_eq!(max_split("abc", "", None), vec!["abc"]);
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("DarkGray"), Color::DarkGray);
        assert_eq!(parse_color("#ff8000"), Color::Rgb(255, 128, 0));
        assert_eq!(parse_color("#f80"), Color::Rgb(255, 136, 0));
        assert_eq!(parse_color("#zzzzzz"), Color::Reset);
        assert_eq!(parse_color("not-a-color"), Color::Reset);
    }
}
