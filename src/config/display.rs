//! Path display configuration.
//!
//! [DisplayConfig] selects how the formatter renders a path through [PathDisplay] and
//! carries the per pass width cache used by the truncate rule.
//!
//! A [DisplayConfig] is meant to be used for one formatting pass on one thread. The
//! width cache lives in `Cell`s, which keeps the type `!Sync`.

use crate::core::env::PathEnv;
use crate::core::formatter::StyleSpan;
use crate::utils::expand_home_path;

use unicode_width::UnicodeWidthStr;

use std::cell::Cell;
use std::fmt;
use std::sync::Arc;

/// Columns reserved next to the selection caret in a results list.
const CHROME_PADDING: usize = 2;

/// Shorten exclusions used when none are configured: keep the file name.
pub const DEFAULT_SHORTEN_EXCLUDE: &[isize] = &[-1];

/// Signature of a caller supplied formatter.
/// Returning `None` for the styles is the same as returning no styles.
pub type CustomFn = dyn Fn(&DisplayConfig, &str) -> (String, Option<Vec<StyleSpan>>) + Send + Sync;

/// A caller supplied formatting strategy, see [PathDisplay::Custom].
#[derive(Clone)]
pub struct CustomDisplay(Arc<CustomFn>);

impl CustomDisplay {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&DisplayConfig, &str) -> (String, Option<Vec<StyleSpan>>) + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub(crate) fn call(&self, config: &DisplayConfig, path: &str) -> (String, Vec<StyleSpan>) {
        let (display, styles) = (self.0)(config, path);
        (display, styles.unwrap_or_default())
    }
}

impl fmt::Debug for CustomDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomDisplay(..)")
    }
}

/// How a path is displayed
#[derive(Debug, Clone)]
pub enum PathDisplay {
    /// Paths are not shown at all
    Hidden,
    /// Only the last path segment
    Tail,
    /// The rule pipeline
    Full(RuleFlags),
    /// Caller supplied formatter
    Custom(CustomDisplay),
    /// A mode name from a config file that does not exist
    Unrecognized(String),
}

impl Default for PathDisplay {
    fn default() -> Self {
        PathDisplay::Full(RuleFlags::default())
    }
}

/// Rules applied by [PathDisplay::Full], always in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleFlags {
    /// Keep absolute paths instead of making them relative to the base directory
    pub absolute: bool,
    pub smart: bool,
    pub shorten: Option<ShortenOptions>,
    pub truncate: Option<Truncate>,
    pub filename_first: Option<FilenameFirst>,
}

/// Options for the shorten rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenOptions {
    /// Number of chars kept per segment
    pub len: usize,
    /// 1-based segment indices left untouched, negative counts from the end
    pub exclude: Option<Vec<isize>>,
}

impl ShortenOptions {
    pub fn new(len: usize) -> Self {
        Self { len, exclude: None }
    }

    pub fn with_exclude(mut self, exclude: Vec<isize>) -> Self {
        self.exclude = Some(exclude);
        self
    }

    /// Configured exclusions or [DEFAULT_SHORTEN_EXCLUDE]
    pub fn excluded(&self) -> &[isize] {
        self.exclude.as_deref().unwrap_or(DEFAULT_SHORTEN_EXCLUDE)
    }
}

impl Default for ShortenOptions {
    fn default() -> Self {
        Self::new(1)
    }
}

/// The truncate rule: either plain, or reserving extra columns on top of the UI chrome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Truncate {
    Enabled,
    Reserve(usize),
}

impl Truncate {
    pub fn reserve(self) -> usize {
        match self {
            Truncate::Enabled => 0,
            Truncate::Reserve(n) => n,
        }
    }
}

/// Options for the filename first rule
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilenameFirst {
    pub reverse_directories: bool,
}

/// Display configuration for one formatting pass
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    mode: PathDisplay,
    base_directory: Option<String>,
    selection_caret: String,
    resolved_display_width: Cell<Option<usize>>,
    prefix_width: Cell<usize>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            mode: PathDisplay::default(),
            base_directory: None,
            selection_caret: "> ".to_string(),
            resolved_display_width: Cell::new(None),
            prefix_width: Cell::new(0),
        }
    }
}

impl DisplayConfig {
    pub fn new(mode: PathDisplay) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Sets the directory relative paths are computed against. `~` is expanded.
    pub fn with_base_directory(mut self, dir: impl AsRef<str>) -> Self {
        self.base_directory = Some(expand_home_path(dir.as_ref()).into_owned());
        self
    }

    pub fn with_selection_caret(mut self, caret: impl Into<String>) -> Self {
        self.selection_caret = caret.into();
        self
    }

    // Getters

    #[inline]
    pub fn mode(&self) -> &PathDisplay {
        &self.mode
    }

    #[inline]
    pub fn base_directory(&self) -> Option<&str> {
        self.base_directory.as_deref()
    }

    #[inline]
    pub fn selection_caret(&self) -> &str {
        &self.selection_caret
    }

    /// Columns taken by the selection caret and its padding
    pub fn reserved_width(&self) -> usize {
        self.selection_caret.width() + CHROME_PADDING
    }

    /// Forgets the cached widths. Call before rendering a new listing.
    pub fn begin_pass(&self) {
        self.resolved_display_width.set(None);
        self.prefix_width.set(0);
    }

    /// Records columns already used in front of the path, e.g. by an icon
    pub fn set_prefix_width(&self, width: usize) {
        self.prefix_width.set(width);
    }

    pub fn prefix_width(&self) -> usize {
        self.prefix_width.get()
    }

    /// Width resolved for the current pass, if the truncate rule ran already
    pub fn resolved_display_width(&self) -> Option<usize> {
        self.resolved_display_width.get()
    }

    /// Columns available to a truncated path.
    ///
    /// The surface width minus chrome and the truncate reserve is resolved once per pass,
    /// the prefix width is subtracted on every call.
    pub(crate) fn truncate_width<E: PathEnv + ?Sized>(&self, truncate: Truncate, env: &E) -> usize {
        let width = match self.resolved_display_width.get() {
            Some(width) => width,
            None => {
                let width = env
                    .available_width(self.reserved_width())
                    .saturating_sub(truncate.reserve());
                self.resolved_display_width.set(Some(width));
                width
            }
        };
        width.saturating_sub(self.prefix_width.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::env::FixedEnv;

    #[test]
    fn test_default_mode_is_relative_pipeline() {
        let config = DisplayConfig::default();
        match config.mode() {
            PathDisplay::Full(flags) => assert_eq!(flags, &RuleFlags::default()),
            other => panic!("unexpected default mode {:?}", other),
        }
        assert_eq!(config.reserved_width(), 4);
    }

    #[test]
    fn test_shorten_default_exclusions() {
        assert_eq!(ShortenOptions::default().excluded(), &[-1]);
        assert_eq!(ShortenOptions::new(2).with_exclude(vec![1]).excluded(), &[1]);
    }

    #[test]
    fn test_truncate_width_is_cached_per_pass() {
        let config = DisplayConfig::default();
        let env = FixedEnv::new("/", 40);

        assert_eq!(config.truncate_width(Truncate::Reserve(6), &env), 30);
        assert_eq!(config.resolved_display_width(), Some(30));

        config.set_prefix_width(2);
        assert_eq!(config.truncate_width(Truncate::Reserve(6), &FixedEnv::new("/", 100)), 28);

        config.begin_pass();
        assert_eq!(config.prefix_width(), 0);
        assert_eq!(config.truncate_width(Truncate::Enabled, &FixedEnv::new("/", 100)), 96);
    }

    #[test]
    fn test_truncate_width_saturates() {
        let config = DisplayConfig::default().with_selection_caret("");
        config.set_prefix_width(50);
        assert_eq!(config.truncate_width(Truncate::Reserve(500), &FixedEnv::new("/", 10)), 0);
    }
}
