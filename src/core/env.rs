//! Environment capabilities the formatter depends on.
//!
//! The pipeline never asks the OS or the terminal directly. It goes through [PathEnv],
//! which has a real implementation in [SystemEnv] and a fixed one in [FixedEnv] for
//! widgets of known size and for tests.

use crate::core::path;

use std::path::MAIN_SEPARATOR_STR;

/// Width assumed when the terminal size cannot be queried.
const FALLBACK_COLUMNS: u16 = 80;

pub trait PathEnv {
    /// Path separator of the paths being formatted
    fn separator(&self) -> &str;

    /// Columns available for a path once `reserved` columns of UI chrome are taken
    fn available_width(&self, reserved: usize) -> usize;

    /// Base directory used when the config does not set one
    fn current_dir(&self) -> Option<String>;

    /// Lexical relative path of `path` from `base`
    fn make_relative(&self, path: &str, base: &str) -> String {
        path::make_relative(path, base, self.separator())
    }
}

/// The running process: native separator, terminal width and working directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl PathEnv for SystemEnv {
    fn separator(&self) -> &str {
        MAIN_SEPARATOR_STR
    }

    fn available_width(&self, reserved: usize) -> usize {
        let (cols, _) = crossterm::terminal::size().unwrap_or((FALLBACK_COLUMNS, 0));
        usize::from(cols).saturating_sub(reserved)
    }

    fn current_dir(&self) -> Option<String> {
        std::env::current_dir()
            .ok()
            .and_then(|dir| dir.to_str().map(str::to_owned))
    }
}

/// An environment with explicit values
#[derive(Debug, Clone)]
pub struct FixedEnv {
    separator: String,
    width: usize,
    cwd: Option<String>,
}

impl FixedEnv {
    pub fn new(separator: impl Into<String>, width: usize) -> Self {
        Self {
            separator: separator.into(),
            width,
            cwd: None,
        }
    }

    pub fn with_cwd(mut self, cwd: impl Into<String>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    pub fn set_width(&mut self, width: usize) {
        self.width = width;
    }
}

impl PathEnv for FixedEnv {
    fn separator(&self) -> &str {
        &self.separator
    }

    fn available_width(&self, reserved: usize) -> usize {
        self.width.saturating_sub(reserved)
    }

    fn current_dir(&self) -> Option<String> {
        self.cwd.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_env() {
        let env = FixedEnv::new("\\", 30).with_cwd("C:\\code");
        assert_eq!(env.separator(), "\\");
        assert_eq!(env.available_width(4), 26);
        assert_eq!(env.available_width(40), 0);
        assert_eq!(env.current_dir().as_deref(), Some("C:\\code"));
        assert_eq!(env.make_relative("C:\\code\\a.rs", "C:\\code"), "a.rs");
    }

    #[test]
    fn test_system_env() {
        let env = SystemEnv;
        assert_eq!(env.separator(), MAIN_SEPARATOR_STR);
        assert!(env.available_width(usize::MAX) == 0);
        assert!(env.current_dir().is_some());
    }
}
