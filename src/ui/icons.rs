//! Module for mapping file names to Nerd Font icons.
//!
//! [DevIcons] looks up a glyph and a highlight label for a path, caching the result per
//! file name, and can prepend the icon to a [FormattedPath].
//!
//! Lookup order is: special file names, then the extension (case-insensitive), then a
//! generic file icon.

use crate::config::DisplayConfig;
use crate::core::path::split_segments;
use crate::core::{FormattedPath, StyleSpan};

use phf::phf_map;

use std::collections::HashMap;

/// Gap between the icon and the path
const ICON_GAP: &str = " ";
/// Columns taken by an icon and its gap
pub const ICON_COLUMN_WIDTH: usize = 2;

/// A Nerd Font glyph with the highlight label and default color used to draw it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    glyph: &'static str,
    label: &'static str,
    color: &'static str,
}

impl Icon {
    const fn new(glyph: &'static str, label: &'static str, color: &'static str) -> Self {
        Self {
            glyph,
            label,
            color,
        }
    }

    pub fn glyph(&self) -> &'static str {
        self.glyph
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Default color as a hex code
    pub fn color(&self) -> &'static str {
        self.color
    }
}

static DEFAULT_FILE_ICON: Icon = Icon::new("\u{f15b}", "DevIconDefault", "#6d8086");

/// File extension to icon mapping
/// For example, "rs" maps to the Rust icon.
static EXT_ICON_MAP: phf::Map<&'static str, Icon> = phf_map! {
    "rs" => Icon::new("\u{e7a8}", "DevIconRs", "#dea584"),
    "py" => Icon::new("\u{e606}", "DevIconPy", "#ffbc03"),
    "js" => Icon::new("\u{e74e}", "DevIconJs", "#cbcb41"),
    "ts" => Icon::new("\u{e628}", "DevIconTs", "#519aba"),
    "tsx" => Icon::new("\u{e7ba}", "DevIconTsx", "#1354bf"),
    "jsx" => Icon::new("\u{e7ba}", "DevIconJsx", "#20c2e3"),
    "lua" => Icon::new("\u{e620}", "DevIconLua", "#51a0cf"),
    "go" => Icon::new("\u{e627}", "DevIconGo", "#00add8"),
    "c" => Icon::new("\u{e61e}", "DevIconC", "#599eff"),
    "h" => Icon::new("\u{f0fd}", "DevIconH", "#a074c4"),
    "cpp" => Icon::new("\u{e61d}", "DevIconCpp", "#519aba"),
    "hpp" => Icon::new("\u{f0fd}", "DevIconHpp", "#a074c4"),
    "java" => Icon::new("\u{e738}", "DevIconJava", "#cc3e44"),
    "rb" => Icon::new("\u{e791}", "DevIconRb", "#701516"),
    "php" => Icon::new("\u{e73d}", "DevIconPhp", "#a074c4"),
    "sh" => Icon::new("\u{e795}", "DevIconSh", "#4d5a5e"),
    "md" => Icon::new("\u{f48a}", "DevIconMd", "#dddddd"),
    "html" => Icon::new("\u{e736}", "DevIconHtml", "#e44d26"),
    "css" => Icon::new("\u{e749}", "DevIconCss", "#42a5f5"),
    "json" => Icon::new("\u{e60b}", "DevIconJson", "#cbcb41"),
    "toml" => Icon::new("\u{e6b2}", "DevIconToml", "#9c4221"),
    "yml" => Icon::new("\u{e6a8}", "DevIconYml", "#6d8086"),
    "yaml" => Icon::new("\u{e6a8}", "DevIconYaml", "#6d8086"),
    "lock" => Icon::new("\u{f023}", "DevIconLock", "#bbbbbb"),
    "txt" => Icon::new("\u{f0f6}", "DevIconTxt", "#89e051"),
    "log" => Icon::new("\u{f4ed}", "DevIconLog", "#dddddd"),
    "png" => Icon::new("\u{f03e}", "DevIconPng", "#a074c4"),
    "jpg" => Icon::new("\u{f03e}", "DevIconJpg", "#a074c4"),
    "svg" => Icon::new("\u{f03e}", "DevIconSvg", "#ffb13b"),
    "zip" => Icon::new("\u{f410}", "DevIconZip", "#eca517"),
    "pdf" => Icon::new("\u{f1c1}", "DevIconPdf", "#b30b00"),
    "sql" => Icon::new("\u{e706}", "DevIconSql", "#dad8d8"),
    "vim" => Icon::new("\u{e62b}", "DevIconVim", "#019833"),
    "diff" => Icon::new("\u{e728}", "DevIconDiff", "#41535b"),
};

/// Special file names
/// For example, "Cargo.toml" maps to the Rust icon.
static SPECIAL_FILE_ICON_MAP: phf::Map<&'static str, Icon> = phf_map! {
    "Cargo.toml" => Icon::new("\u{e7a8}", "DevIconCargo", "#dea584"),
    "Cargo.lock" => Icon::new("\u{f023}", "DevIconCargoLock", "#dea584"),
    "Makefile" => Icon::new("\u{e779}", "DevIconMakefile", "#6d8086"),
    "Dockerfile" => Icon::new("\u{f308}", "DevIconDockerfile", "#458ee6"),
    "LICENSE" => Icon::new("\u{f02d}", "DevIconLicense", "#d0bf41"),
    "README.md" => Icon::new("\u{f48a}", "DevIconReadme", "#ededed"),
    ".gitignore" => Icon::new("\u{e702}", "DevIconGitIgnore", "#41535b"),
    ".gitconfig" => Icon::new("\u{e702}", "DevIconGitConfig", "#41535b"),
    "package.json" => Icon::new("\u{e71e}", "DevIconPackageJson", "#e8274b"),
    ".bashrc" => Icon::new("\u{e795}", "DevIconBashrc", "#89e051"),
    ".vimrc" => Icon::new("\u{e62b}", "DevIconVimrc", "#019833"),
};

/// Every icon of the built-in tables, used for default highlight colors
pub(crate) fn builtin_icons() -> impl Iterator<Item = &'static Icon> {
    EXT_ICON_MAP
        .values()
        .chain(SPECIAL_FILE_ICON_MAP.values())
        .chain(std::iter::once(&DEFAULT_FILE_ICON))
}

fn resolve_icon(name: &str) -> Icon {
    if let Some(icon) = SPECIAL_FILE_ICON_MAP.get(name) {
        return *icon;
    }

    if let Some(dot_idx) = name.rfind('.')
        && dot_idx > 0
        && dot_idx < name.len() - 1
    {
        let ext = &name[dot_idx + 1..];
        if let Some(icon) = EXT_ICON_MAP.get(ext) {
            return *icon;
        }
        if let Some(icon) = EXT_ICON_MAP.get(ext.to_ascii_lowercase().as_str()) {
            return *icon;
        }
    }

    DEFAULT_FILE_ICON
}

/// Icon lookup with a per file name cache
#[derive(Debug, Clone, Default)]
pub struct DevIcons {
    enabled: bool,
    cache: HashMap<String, Icon>,
}

impl DevIcons {
    pub fn new() -> Self {
        Self {
            enabled: true,
            cache: HashMap::new(),
        }
    }

    /// Icons turned off: [decorate](DevIcons::decorate) leaves paths untouched
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Number of file names cached so far
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Icon for the file name of `path`. Accepts both `/` and `\` separated paths.
    pub fn lookup(&mut self, path: &str) -> Icon {
        let name = split_segments(path, "\\").pop().unwrap_or_default();
        if let Some(icon) = self.cache.get(name) {
            return *icon;
        }
        let icon = resolve_icon(name);
        self.cache.insert(name.to_owned(), icon);
        icon
    }

    /// Tells `config` that each row starts with an icon column, so truncation leaves room.
    pub fn reserve_prefix(&self, config: &DisplayConfig) {
        if self.enabled {
            config.set_prefix_width(ICON_COLUMN_WIDTH);
        }
    }

    /// Prepends the icon for `path` to `formatted` and highlights it.
    /// Existing spans are moved along with the text.
    pub fn decorate(&mut self, path: &str, mut formatted: FormattedPath) -> FormattedPath {
        if !self.enabled {
            return formatted;
        }
        let icon = self.lookup(path);
        formatted.prepend(&format!("{}{}", icon.glyph(), ICON_GAP));
        formatted.push_style(StyleSpan::new(0, icon.glyph().len(), icon.label()));
        formatted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::COMMENT_STYLE;

    #[test]
    fn test_lookup_order() {
        let mut icons = DevIcons::new();
        assert_eq!(icons.lookup("/repo/Cargo.toml").label(), "DevIconCargo");
        assert_eq!(icons.lookup("/repo/other.toml").label(), "DevIconToml");
        assert_eq!(icons.lookup("C:\\repo\\MAIN.RS").label(), "DevIconRs");
        assert_eq!(icons.lookup("no_extension").label(), "DevIconDefault");
        assert_eq!(icons.lookup(".hidden").label(), "DevIconDefault");
        assert_eq!(icons.lookup("trailing.").label(), "DevIconDefault");
    }

    #[test]
    fn test_lookup_is_cached_by_file_name() {
        let mut icons = DevIcons::new();
        icons.lookup("/a/lib.rs");
        icons.lookup("/b/lib.rs");
        icons.lookup("/b/mod.rs");
        assert_eq!(icons.cache_len(), 2);
    }

    #[test]
    fn test_decorate_shifts_styles() {
        let mut icons = DevIcons::new();
        let formatted = FormattedPath::new(
            "lib.rs src".into(),
            vec![StyleSpan::new(6, 10, COMMENT_STYLE)],
        );
        let out = icons.decorate("src/lib.rs", formatted);

        let glyph = "\u{e7a8}";
        assert_eq!(out.display(), format!("{} lib.rs src", glyph));
        let offset = glyph.len() + ICON_GAP.len();
        assert_eq!(out.styles()[0].range(), 6 + offset..10 + offset);
        assert_eq!(out.styles()[1], StyleSpan::new(0, glyph.len(), "DevIconRs"));
    }

    #[test]
    fn test_disabled_icons() {
        let mut icons = DevIcons::disabled();
        let formatted = FormattedPath::plain("x.rs");
        assert_eq!(icons.decorate("x.rs", formatted.clone()), formatted);

        let config = DisplayConfig::default();
        icons.reserve_prefix(&config);
        assert_eq!(config.prefix_width(), 0);
        DevIcons::new().reserve_prefix(&config);
        assert_eq!(config.prefix_width(), ICON_COLUMN_WIDTH);
    }
}
