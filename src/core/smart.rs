//! State for the smart shortening rule.
//!
//! [SmartPathState] remembers every path that went through the rule, in first seen
//! order, and shortens new paths to the trailing segments that still tell them apart
//! from what was shown before.
//!
//! The first result computed for a path is remembered and returned again for every
//! repeat, so a path keeps its form for the whole session.
//!
//! The state only grows. Keep one per listing session and drop or [clear] it when the
//! session ends.
//!
//! [clear]: SmartPathState::clear

use crate::core::path::split_segments;

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct SmartPathState {
    seen: Vec<String>,
    shown: HashMap<String, String>,
}

impl SmartPathState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.shown.contains_key(path)
    }

    /// Paths seen so far, in first seen order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.seen.iter().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.seen.clear();
        self.shown.clear();
    }

    /// Shortens `path` against the paths seen before and registers it.
    ///
    /// The first path into an empty state is returned as is. Shortened results are
    /// prefixed with `..` and the separator. Repeats return the first result.
    pub fn shorten(&mut self, path: &str, sep: &str) -> String {
        if let Some(shown) = self.shown.get(path) {
            return shown.clone();
        }

        let result = if self.seen.is_empty() {
            path.to_owned()
        } else {
            self.shorten_against_seen(path, sep)
        };

        self.shown.insert(path.to_owned(), result.clone());
        self.seen.push(path.to_owned());
        result
    }

    fn shorten_against_seen(&self, path: &str, sep: &str) -> String {
        let dirs = split_segments(path, sep);
        let divergence = self.divergence(path, &dirs, sep);

        // Keep segments from 1-based index `divergence - 1` onward
        let skip = divergence.saturating_sub(2);
        // A kept run starting with the empty root segment loses its leading separator
        let dropped = skip > 0 || dirs.get(skip).is_some_and(|dir| dir.is_empty());
        if !dropped {
            return path.to_owned();
        }

        let mut joined = String::with_capacity(path.len());
        for dir in dirs.iter().skip(skip) {
            if !joined.is_empty() {
                joined.push_str(sep);
            }
            joined.push_str(dir);
        }
        format!("..{}{}", sep, joined)
    }

    /// Highest 1-based segment index at which `path` first differs from a prior path.
    fn divergence(&self, path: &str, dirs: &[&str], sep: &str) -> usize {
        let mut max = 1;
        for prior in &self.seen {
            if prior.is_empty() || prior == path {
                continue;
            }
            let other = split_segments(prior, sep);
            for i in 1..=dirs.len().min(other.len()) {
                if dirs[i - 1] != other[i - 1] && i > max {
                    max = i;
                    break;
                }
            }
        }

        // Nothing told the paths apart past the first segment: keep the last two
        if max == 1 && dirs.len() >= 2 {
            max = dirs.len() - 2;
        }
        max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_path_is_unchanged() {
        let mut state = SmartPathState::new();
        assert_eq!(state.shorten("/proj/a/x.lua", "/"), "/proj/a/x.lua");
        assert_eq!(state.len(), 1);
        assert!(state.contains("/proj/a/x.lua"));
    }

    #[test]
    fn test_siblings_are_disambiguated() {
        let mut state = SmartPathState::new();
        state.shorten("lua/picker/utils.lua", "/");
        assert_eq!(state.shorten("lua/picker/init.lua", "/"), "../picker/init.lua");
    }

    #[test]
    fn test_absolute_siblings() {
        let mut state = SmartPathState::new();
        state.shorten("/proj/a/x.lua", "/");
        assert_eq!(state.shorten("/proj/b/x.lua", "/"), "../proj/b/x.lua");
        assert_eq!(state.shorten("/proj/c/x.lua", "/"), "../proj/c/x.lua");
    }

    #[test]
    fn test_paths_registered_once_in_order() {
        let mut state = SmartPathState::new();
        for p in ["a/b", "c/d", "a/b", "e/f", "c/d"] {
            state.shorten(p, "/");
        }
        assert_eq!(state.paths().collect::<Vec<_>>(), vec!["a/b", "c/d", "e/f"]);
    }

    #[test]
    fn test_fallback_keeps_tail() {
        // Shares every compared segment with "a/b", so the fallback kicks in
        let mut state = SmartPathState::new();
        state.shorten("a/b", "/");
        assert_eq!(state.shorten("a/b/c/d.rs", "/"), "a/b/c/d.rs");

        let mut state = SmartPathState::new();
        state.shorten("a/b", "/");
        assert_eq!(state.shorten("a/b/c/d/e.rs", "/"), "../b/c/d/e.rs");
    }

    #[test]
    fn test_repeats_return_first_result() {
        let mut state = SmartPathState::new();
        assert_eq!(state.shorten("/proj/a/x.lua", "/"), "/proj/a/x.lua");
        assert_eq!(state.shorten("/proj/a/x.lua", "/"), "/proj/a/x.lua");

        assert_eq!(state.shorten("/proj/b/x.lua", "/"), "../proj/b/x.lua");
        assert_eq!(state.shorten("/proj/a/x.lua", "/"), "/proj/a/x.lua");
        assert_eq!(state.shorten("/proj/b/x.lua", "/"), "../proj/b/x.lua");
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn test_forward_slashes_with_backslash_separator() {
        let mut state = SmartPathState::new();
        state.shorten("C:/x/y.rs", "\\");
        assert_eq!(state.shorten("C:/a/b.rs", "\\"), "C:/a/b.rs");

        // Dropped segments are joined with the separator
        let mut state = SmartPathState::new();
        state.shorten("src/core/a/x.rs", "\\");
        assert_eq!(state.shorten("src/core/b/x.rs", "\\"), "..\\core\\b\\x.rs");
    }

    #[test]
    fn test_clear() {
        let mut state = SmartPathState::new();
        state.shorten("x/y", "/");
        state.clear();
        assert!(state.is_empty());
        assert!(!state.contains("x/y"));
    }
}
