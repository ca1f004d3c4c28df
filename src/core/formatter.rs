//! The path display formatter.
//!
//! [PathDisplayFormatter] turns a raw path into a [FormattedPath]: the string to show
//! plus [StyleSpan]s marking parts to be drawn with a named highlight.
//!
//! Rules of [PathDisplay::Full] run in a fixed order:
//! relative, smart, shorten, truncate, filename first.
//! Filename first has to be last since it is the only rule that emits styles, and its
//! byte offsets refer to the final string.

use crate::config::{DisplayConfig, PathDisplay, RuleFlags};
use crate::core::env::{PathEnv, SystemEnv};
use crate::core::path::{filename_first, path_tail, shorten_path, truncate_left};
use crate::core::smart::SmartPathState;
use crate::core::uri::is_uri;
use crate::error::{Error, Result};
use crate::utils::{Level, notify_once};

use std::ops::Range;
use std::path::Path;

/// Highlight label for the de-emphasized directory part of a path
pub const COMMENT_STYLE: &str = "ResultsComment";

/// A half-open byte range of a display string tagged with a highlight label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSpan {
    start: usize,
    end: usize,
    label: String,
}

impl StyleSpan {
    pub fn new(start: usize, end: usize, label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            label: label.into(),
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Same span moved right by `offset` bytes
    pub fn shifted(&self, offset: usize) -> Self {
        Self {
            start: self.start + offset,
            end: self.end + offset,
            label: self.label.clone(),
        }
    }

    /// True if the span lies inside `s` on char boundaries
    pub fn fits(&self, s: &str) -> bool {
        self.start <= self.end
            && self.end <= s.len()
            && s.is_char_boundary(self.start)
            && s.is_char_boundary(self.end)
    }
}

/// A display string and its styles
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormattedPath {
    display: String,
    styles: Vec<StyleSpan>,
}

impl FormattedPath {
    pub fn new(display: String, styles: Vec<StyleSpan>) -> Self {
        Self { display, styles }
    }

    /// A display string without styles
    pub fn plain(display: impl Into<String>) -> Self {
        Self::new(display.into(), Vec::new())
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn styles(&self) -> &[StyleSpan] {
        &self.styles
    }

    pub fn is_empty(&self) -> bool {
        self.display.is_empty()
    }

    pub fn into_parts(self) -> (String, Vec<StyleSpan>) {
        (self.display, self.styles)
    }

    /// Inserts `prefix` in front of the display string, moving every span along
    pub fn prepend(&mut self, prefix: &str) {
        self.display.insert_str(0, prefix);
        for span in &mut self.styles {
            *span = span.shifted(prefix.len());
        }
    }

    pub fn push_style(&mut self, span: StyleSpan) {
        self.styles.push(span);
    }
}

impl From<FormattedPath> for (String, Vec<StyleSpan>) {
    fn from(formatted: FormattedPath) -> Self {
        formatted.into_parts()
    }
}

/// Formats paths for display according to a [DisplayConfig].
///
/// Owns the [SmartPathState] of the current listing session, which is why formatting
/// takes `&mut self`. Use one formatter per thread.
#[derive(Debug, Default)]
pub struct PathDisplayFormatter<E = SystemEnv> {
    env: E,
    smart: SmartPathState,
}

impl PathDisplayFormatter<SystemEnv> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: PathEnv> PathDisplayFormatter<E> {
    pub fn with_env(env: E) -> Self {
        Self {
            env,
            smart: SmartPathState::new(),
        }
    }

    /// Continues a session with previously collected smart state
    pub fn with_smart_state(mut self, state: SmartPathState) -> Self {
        self.smart = state;
        self
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut E {
        &mut self.env
    }

    pub fn smart_state(&self) -> &SmartPathState {
        &self.smart
    }

    /// Ends the listing session, returning the smart state collected so far
    pub fn reset_session(&mut self) -> SmartPathState {
        std::mem::take(&mut self.smart)
    }

    /// Formats `path` according to `config`.
    ///
    /// Empty paths give an empty result and URIs are returned untouched, whatever the mode.
    pub fn format(&mut self, path: &str, config: &DisplayConfig) -> FormattedPath {
        if path.is_empty() {
            return FormattedPath::default();
        }
        if is_uri(path) {
            return FormattedPath::plain(path);
        }

        match config.mode() {
            PathDisplay::Custom(custom) => {
                let (display, styles) = custom.call(config, path);
                let styles = valid_styles(&display, styles);
                FormattedPath::new(display, styles)
            }
            PathDisplay::Hidden => FormattedPath::default(),
            PathDisplay::Tail => FormattedPath::plain(path_tail(path, self.env.separator())),
            PathDisplay::Full(flags) => self.apply_rules(path, flags, config),
            PathDisplay::Unrecognized(name) => {
                notify_once(
                    "transform_path",
                    Level::Warn,
                    &format!("unknown path_display mode '{}', showing paths unmodified", name),
                );
                FormattedPath::plain(path)
            }
        }
    }

    /// Formats a [Path]. Paths that are not valid UTF-8 are rejected.
    pub fn format_path(&mut self, path: &Path, config: &DisplayConfig) -> Result<FormattedPath> {
        let path = path
            .to_str()
            .ok_or_else(|| Error::InvalidArgument(format!("path {:?} is not valid UTF-8", path)))?;
        Ok(self.format(path, config))
    }

    fn apply_rules(
        &mut self,
        path: &str,
        flags: &RuleFlags,
        config: &DisplayConfig,
    ) -> FormattedPath {
        let sep = self.env.separator();
        let mut out = path.to_owned();

        if !flags.absolute {
            let base = config
                .base_directory()
                .map(str::to_owned)
                .or_else(|| self.env.current_dir());
            if let Some(base) = base {
                out = self.env.make_relative(&out, &base);
            }
        }

        if flags.smart {
            out = self.smart.shorten(&out, sep);
        }

        if let Some(shorten) = &flags.shorten {
            out = shorten_path(&out, sep, shorten.len, shorten.excluded());
        }

        if let Some(truncate) = flags.truncate {
            let width = config.truncate_width(truncate, &self.env);
            out = truncate_left(&out, width);
        }

        match flags.filename_first {
            Some(opts) => filename_first(&out, sep, opts.reverse_directories),
            None => FormattedPath::plain(out),
        }
    }
}

/// Drops spans that fall outside `display` or overlap an earlier span.
fn valid_styles(display: &str, mut styles: Vec<StyleSpan>) -> Vec<StyleSpan> {
    styles.sort_by_key(|span| span.start());
    let mut kept: Vec<StyleSpan> = Vec::with_capacity(styles.len());
    for span in styles {
        let overlaps = kept.last().is_some_and(|last| span.start() < last.end());
        if !span.fits(display) || overlaps {
            tracing::warn!(
                start = span.start(),
                end = span.end(),
                label = span.label(),
                "dropping custom style span that is out of bounds or overlaps another span"
            );
            continue;
        }
        kept.push(span);
    }
    kept
}
