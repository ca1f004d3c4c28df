//! The main config loading module for pathdisplay.
//!
//! Handles loading and deserializing settings from `pathdisplay.toml`.
//!
//! Provides the main [Config] struct and the internal [RawConfig] used for parsing. The
//! raw `path_display` value accepts a few shapes (a mode name, a list of rule names or a
//! table of rules) and is converted into the typed [PathDisplay] here.

use crate::config::{
    DisplayConfig, FilenameFirst, HighlightTheme, PathDisplay, RuleFlags, ShortenOptions, Truncate,
};
use crate::error::{Error, Result};
use crate::ui::DevIcons;
use crate::utils::{Level, get_home, notify};

use serde::Deserialize;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::{fs, io};

/// Raw configuration as read from the toml file.
/// Converted into the main [Config] struct.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub(crate) struct RawConfig {
    path_display: Option<RawPathDisplay>,
    base_directory: Option<String>,
    selection_caret: Option<String>,
    icons: bool,
    highlights: HighlightTheme,
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum RawPathDisplay {
    Name(String),
    Names(Vec<String>),
    Rules(RawRules),
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct RawRules {
    hidden: bool,
    tail: bool,
    absolute: bool,
    smart: bool,
    shorten: Option<RawShorten>,
    truncate: Option<RawTruncate>,
    filename_first: Option<RawFilenameFirst>,
    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum RawShorten {
    Flag(bool),
    Len(usize),
    Options {
        len: Option<usize>,
        exclude: Option<Vec<isize>>,
    },
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum RawTruncate {
    Flag(bool),
    Reserve(usize),
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum RawFilenameFirst {
    Flag(bool),
    Options {
        #[serde(default)]
        reverse_directories: bool,
    },
}

impl From<RawShorten> for Option<ShortenOptions> {
    fn from(raw: RawShorten) -> Self {
        match raw {
            RawShorten::Flag(false) => None,
            RawShorten::Flag(true) => Some(ShortenOptions::default()),
            RawShorten::Len(len) => Some(ShortenOptions::new(len)),
            RawShorten::Options { len, exclude } => Some(ShortenOptions {
                len: len.unwrap_or(1),
                exclude,
            }),
        }
    }
}

impl From<RawTruncate> for Option<Truncate> {
    fn from(raw: RawTruncate) -> Self {
        match raw {
            RawTruncate::Flag(false) => None,
            RawTruncate::Flag(true) => Some(Truncate::Enabled),
            RawTruncate::Reserve(n) => Some(Truncate::Reserve(n)),
        }
    }
}

impl From<RawFilenameFirst> for Option<FilenameFirst> {
    fn from(raw: RawFilenameFirst) -> Self {
        match raw {
            RawFilenameFirst::Flag(false) => None,
            RawFilenameFirst::Flag(true) => Some(FilenameFirst::default()),
            RawFilenameFirst::Options {
                reverse_directories,
            } => Some(FilenameFirst {
                reverse_directories,
            }),
        }
    }
}

/// Applies a rule given by name. Returns false for names that are not rules.
fn enable_rule(flags: &mut RuleFlags, name: &str) -> bool {
    match name {
        "absolute" => flags.absolute = true,
        "smart" => flags.smart = true,
        "shorten" => flags.shorten = Some(ShortenOptions::default()),
        "truncate" => flags.truncate = Some(Truncate::Enabled),
        "filename_first" => flags.filename_first = Some(FilenameFirst::default()),
        _ => return false,
    }
    true
}

impl From<RawPathDisplay> for PathDisplay {
    fn from(raw: RawPathDisplay) -> Self {
        match raw {
            RawPathDisplay::Name(name) => match name.as_str() {
                "hidden" => PathDisplay::Hidden,
                "tail" => PathDisplay::Tail,
                other => {
                    let mut flags = RuleFlags::default();
                    if enable_rule(&mut flags, other) {
                        PathDisplay::Full(flags)
                    } else {
                        PathDisplay::Unrecognized(other.to_owned())
                    }
                }
            },
            RawPathDisplay::Names(names) => {
                if names.iter().any(|n| n == "hidden") {
                    return PathDisplay::Hidden;
                }
                if names.iter().any(|n| n == "tail") {
                    return PathDisplay::Tail;
                }
                let mut flags = RuleFlags::default();
                for name in &names {
                    if !enable_rule(&mut flags, name) {
                        notify(
                            "config",
                            Level::Warn,
                            &format!("ignoring unknown path_display rule '{}'", name),
                        );
                    }
                }
                PathDisplay::Full(flags)
            }
            RawPathDisplay::Rules(rules) => {
                if rules.hidden {
                    return PathDisplay::Hidden;
                }
                if rules.tail {
                    return PathDisplay::Tail;
                }
                for key in rules.unknown.keys() {
                    notify(
                        "config",
                        Level::Warn,
                        &format!("ignoring unknown path_display rule '{}'", key),
                    );
                }
                PathDisplay::Full(RuleFlags {
                    absolute: rules.absolute,
                    smart: rules.smart,
                    shorten: rules.shorten.and_then(Into::into),
                    truncate: rules.truncate.and_then(Into::into),
                    filename_first: rules.filename_first.and_then(Into::into),
                })
            }
        }
    }
}

/// Main configuration struct for pathdisplay
#[derive(Debug, Default)]
pub struct Config {
    display: DisplayConfig,
    highlights: HighlightTheme,
    icons: bool,
}

/// Conversion from RawConfig to Config
impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        let mode = raw.path_display.map(PathDisplay::from).unwrap_or_default();
        let mut display = DisplayConfig::new(mode);
        if let Some(dir) = raw.base_directory {
            display = display.with_base_directory(dir);
        }
        if let Some(caret) = raw.selection_caret {
            display = display.with_selection_caret(caret);
        }
        Self {
            display,
            highlights: raw.highlights,
            icons: raw.icons,
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    /// If the file does not exist or fails to parse, returns the default configuration.
    pub fn load() -> Self {
        let path = Self::default_path();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file found, using defaults");
            return Self::default();
        }

        match Self::from_path(&path) {
            Ok(config) => config,
            Err(e) => {
                notify("config", Level::Warn, &format!("{}; using defaults", e));
                Self::default()
            }
        }
    }

    /// Load configuration from `path`, failing on I/O or parse errors
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str::<RawConfig>(&content)
            .map(Into::into)
            .map_err(|source| Error::Config {
                path: path.to_path_buf(),
                source,
            })
    }

    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str::<RawConfig>(content).map(Into::into)
    }

    // Getters

    #[inline]
    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    #[inline]
    pub fn highlights(&self) -> &HighlightTheme {
        &self.highlights
    }

    #[inline]
    pub fn icons(&self) -> bool {
        self.icons
    }

    /// Devicon lookup matching the `icons` setting
    pub fn devicons(&self) -> DevIcons {
        if self.icons {
            DevIcons::new()
        } else {
            DevIcons::disabled()
        }
    }

    pub fn into_display(self) -> DisplayConfig {
        self.display
    }

    /// Determine the default configuration file path.
    /// Checks the PATHDISPLAY_CONFIG environment variable first,
    /// then XDG_CONFIG_HOME,
    /// then defaults to ~/.config/pathdisplay/pathdisplay.toml
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("PATHDISPLAY_CONFIG") {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("pathdisplay/pathdisplay.toml");
        }

        if let Some(home) = get_home() {
            return home.join(".config/pathdisplay/pathdisplay.toml");
        }
        PathBuf::from("pathdisplay.toml")
    }

    /// Generate a default configuration file at the specified path.
    /// If the file already exists, returns an error.
    pub fn generate_default(path: &Path) -> Result<()> {
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Config file already exists at {:?}", path),
            )
            .into());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = r##"# pathdisplay.toml - default configuration for pathdisplay

# Commented values are the internal defaults.

# Directory paths are shown relative to. Defaults to the working directory.
# base_directory = "~/src"
# selection_caret = "> "
# icons = false

# Either a mode name ("hidden", "tail"), a list of rules or a table:
# path_display = ["smart", "truncate"]
[path_display]
# absolute = false
# smart = false
# shorten = { len = 1, exclude = [-1] }
# truncate = true
# filename_first = { reverse_directories = false }

# [highlights]
# ResultsComment = { fg = "darkgray" }
"##;

        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mode_of(content: &str) -> PathDisplay {
        match Config::from_toml_str(content) {
            Ok(config) => config.into_display().mode().clone(),
            Err(e) => panic!("failed to parse {:?}: {}", content, e),
        }
    }

    fn flags_of(content: &str) -> RuleFlags {
        match mode_of(content) {
            PathDisplay::Full(flags) => flags,
            other => panic!("expected rules, got {:?}", other),
        }
    }

    #[test]
    fn test_named_modes() {
        assert!(matches!(mode_of("path_display = \"hidden\""), PathDisplay::Hidden));
        assert!(matches!(mode_of("path_display = \"tail\""), PathDisplay::Tail));
        assert!(flags_of("path_display = \"smart\"").smart);
        assert!(matches!(
            mode_of("path_display = \"fancy\""),
            PathDisplay::Unrecognized(name) if name == "fancy"
        ));
        assert_eq!(flags_of(""), RuleFlags::default());
    }

    #[test]
    fn test_rule_list() {
        let flags = flags_of("path_display = [\"smart\", \"truncate\", \"bogus\"]");
        assert!(flags.smart);
        assert_eq!(flags.truncate, Some(Truncate::Enabled));
        assert!(!flags.absolute);
        assert!(matches!(mode_of("path_display = [\"smart\", \"hidden\"]"), PathDisplay::Hidden));
    }

    #[test]
    fn test_rule_table() {
        let flags = flags_of(
            r#"
            [path_display]
            absolute = true
            shorten = { len = 3, exclude = [1, -1] }
            truncate = 4
            filename_first = { reverse_directories = true }
            "#,
        );
        assert!(flags.absolute);
        assert_eq!(flags.shorten, Some(ShortenOptions::new(3).with_exclude(vec![1, -1])));
        assert_eq!(flags.truncate, Some(Truncate::Reserve(4)));
        assert_eq!(
            flags.filename_first,
            Some(FilenameFirst {
                reverse_directories: true
            })
        );
    }

    #[test]
    fn test_rule_table_shorthands() {
        let flags = flags_of(
            r#"
            [path_display]
            shorten = 2
            truncate = false
            filename_first = true
            mystery = 1
            "#,
        );
        assert_eq!(flags.shorten, Some(ShortenOptions::new(2)));
        assert_eq!(flags.truncate, None);
        assert_eq!(flags.filename_first, Some(FilenameFirst::default()));

        assert_eq!(
            flags_of("path_display = { shorten = true }").shorten,
            Some(ShortenOptions::default())
        );
        assert!(matches!(mode_of("path_display = { tail = true }"), PathDisplay::Tail));
    }

    #[test]
    fn test_other_settings() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let config = Config::from_toml_str(
            r#"
            base_directory = "/srv/code"
            selection_caret = "❯ "
            icons = true
            "#,
        )?;
        assert_eq!(config.display().base_directory(), Some("/srv/code"));
        assert_eq!(config.display().selection_caret(), "❯ ");
        assert!(config.icons());
        assert!(config.devicons().is_enabled());
        Ok(())
    }
}
