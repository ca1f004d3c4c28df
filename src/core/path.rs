//! Lexical path transforms used by the display pipeline.
//!
//! Everything in here works on plain strings and an explicit separator. Nothing touches
//! the filesystem, so paths do not need to exist and results are the same on every
//! platform given the same separator.
//!
//! With a `\` separator both `\` and `/` are accepted when splitting, since Windows
//! paths routinely mix the two.

use crate::core::formatter::{COMMENT_STYLE, FormattedPath, StyleSpan};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Marker inserted at the cut point by [truncate_left].
pub const ELLIPSIS: &str = "…";

/// Split `s` into segments on `sep`, keeping empty segments.
pub fn split_segments<'a>(s: &'a str, sep: &str) -> Vec<&'a str> {
    if sep.is_empty() {
        return vec![s];
    }
    if sep == "\\" {
        s.split(['\\', '/']).collect()
    } else {
        s.split(sep).collect()
    }
}

/// Returns the last segment of `path`.
///
/// # Examples
/// path_tail("/a/b/c.txt", "/") == "c.txt"
pub fn path_tail<'a>(path: &'a str, sep: &str) -> &'a str {
    if sep.is_empty() {
        return path;
    }
    let cut = if sep == "\\" {
        path.rfind(['\\', '/']).map(|i| i + 1)
    } else {
        path.rfind(sep).map(|i| i + sep.len())
    };
    cut.map_or(path, |i| &path[i..])
}

/// Root of an absolute path.
#[derive(Debug, Clone, Copy)]
enum Root<'a> {
    Unix,
    Drive(u8),
    Unc { server: &'a str, share: &'a str },
}

impl Root<'_> {
    fn same_as(self, other: Root<'_>) -> bool {
        match (self, other) {
            (Root::Unix, Root::Unix) => true,
            (Root::Drive(a), Root::Drive(b)) => a.eq_ignore_ascii_case(&b),
            (Root::Unc { server, share }, Root::Unc { server: s, share: t }) => {
                server.eq_ignore_ascii_case(s) && share.eq_ignore_ascii_case(t)
            }
            _ => false,
        }
    }

    fn render(self, sep: &str) -> String {
        match self {
            Root::Unix => sep.to_owned(),
            Root::Drive(d) => format!("{}:{}", d as char, sep),
            Root::Unc { server, share } => {
                let mut root = format!("{0}{0}{1}{0}", sep, server);
                if !share.is_empty() {
                    root.push_str(share);
                    root.push_str(sep);
                }
                root
            }
        }
    }
}

/// Splits `s` at its first `\` or `/`. The remainder is empty if there is none.
fn split_first_component(s: &str) -> (&str, &str) {
    match s.find(['\\', '/']) {
        Some(i) => (&s[..i], &s[i + 1..]),
        None => (s, ""),
    }
}

/// Splits an absolute path into its root and the remainder.
/// Returns None for relative paths.
fn split_root<'a>(path: &'a str, sep: &str) -> Option<(Root<'a>, &'a str)> {
    if sep.is_empty() {
        return None;
    }
    if sep == "\\" {
        let bytes = path.as_bytes();
        let is_sep = |b: u8| b == b'\\' || b == b'/';
        if bytes.len() >= 2 && is_sep(bytes[0]) && is_sep(bytes[1]) {
            let (server, rest) = split_first_component(&path[2..]);
            let (share, rest) = split_first_component(rest);
            return Some((Root::Unc { server, share }, rest));
        }
        if bytes.len() >= 3
            && bytes[0].is_ascii_alphabetic()
            && bytes[1] == b':'
            && is_sep(bytes[2])
        {
            return Some((Root::Drive(bytes[0]), &path[3..]));
        }
        if bytes.first().is_some_and(|b| is_sep(*b)) {
            return Some((Root::Unix, &path[1..]));
        }
        return None;
    }
    path.strip_prefix(sep).map(|rest| (Root::Unix, rest))
}

/// Collapses `.` and empty segments and applies `..` lexically.
fn push_components<'a>(out: &mut Vec<&'a str>, rest: &'a str, sep: &str) {
    for part in split_segments(rest, sep) {
        match part {
            "" | "." => {}
            ".." => {
                if out.last().is_some_and(|last| *last != "..") {
                    out.pop();
                } else {
                    out.push("..");
                }
            }
            other => out.push(other),
        }
    }
}

/// Computes `path` relative to `base` without touching the filesystem.
///
/// Both paths must be absolute and share a root, otherwise `path` is returned as is.
/// Each base component that is not shared becomes a `..`.
/// Equal paths yield `"."`.
pub fn make_relative(path: &str, base: &str, sep: &str) -> String {
    let (Some((path_root, path_rest)), Some((base_root, base_rest))) =
        (split_root(path, sep), split_root(base, sep))
    else {
        return path.to_owned();
    };
    if !path_root.same_as(base_root) {
        return path.to_owned();
    }

    let mut target = Vec::new();
    push_components(&mut target, path_rest, sep);
    let mut from = Vec::new();
    push_components(&mut from, base_rest, sep);
    // `..` directly under the root refers to the root itself
    target.retain(|c| *c != "..");
    from.retain(|c| *c != "..");

    let common = target
        .iter()
        .zip(from.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<&str> = vec![".."; from.len() - common];
    parts.extend_from_slice(&target[common..]);

    if parts.is_empty() {
        ".".to_owned()
    } else {
        parts.join(sep)
    }
}

/// Joins a relative path onto `base`, applying `.` and `..` lexically.
/// Absolute `rel` is returned unchanged. Inverse of [make_relative].
pub fn resolve_relative(rel: &str, base: &str, sep: &str) -> String {
    if split_root(rel, sep).is_some() {
        return rel.to_owned();
    }
    let (root, base_rest) = match split_root(base, sep) {
        Some((root, rest)) => (Some(root), rest),
        None => (None, base),
    };

    let mut parts = Vec::new();
    push_components(&mut parts, base_rest, sep);
    push_components(&mut parts, rel, sep);
    if root.is_some() {
        parts.retain(|c| *c != "..");
    }

    let joined = parts.join(sep);
    match root {
        Some(root) => root.render(sep) + &joined,
        None if joined.is_empty() => ".".to_owned(),
        None => joined,
    }
}

/// Maps a 1-based (negative counts from the end) segment index to a 0-based one.
fn resolve_index(index: isize, count: usize) -> Option<usize> {
    match index {
        0 => None,
        i if i > 0 => {
            let i = (i - 1) as usize;
            (i < count).then_some(i)
        }
        i => {
            let back = i.unsigned_abs();
            count.checked_sub(back)
        }
    }
}

/// Abbreviates every non-empty segment to its first `len` chars.
///
/// Indices in `exclude` are 1-based over the non-empty segments, negative indices
/// count from the end (`-1` is the file name). Empty segments, such as the one before
/// a leading separator, are kept so the path keeps its shape.
pub fn shorten_path(path: &str, sep: &str, len: usize, exclude: &[isize]) -> String {
    let len = len.max(1);
    let segments = split_segments(path, sep);
    let count = segments.iter().filter(|s| !s.is_empty()).count();
    let excluded: Vec<usize> = exclude
        .iter()
        .filter_map(|&i| resolve_index(i, count))
        .collect();

    let mut idx = 0;
    let parts: Vec<&str> = segments
        .into_iter()
        .map(|seg| {
            if seg.is_empty() {
                return seg;
            }
            let keep = excluded.contains(&idx);
            idx += 1;
            if keep {
                return seg;
            }
            match seg.char_indices().nth(len) {
                Some((cut, _)) => &seg[..cut],
                None => seg,
            }
        })
        .collect();

    parts.join(sep)
}

/// Truncates `s` from the left so its display width fits `width` columns.
///
/// The trailing part of the string is preserved and [ELLIPSIS] marks the cut. A width
/// too small to even hold the ellipsis yields an empty string.
pub fn truncate_left(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_owned();
    }
    let Some(budget) = width.checked_sub(ELLIPSIS.width()) else {
        return String::new();
    };

    let mut used = 0;
    let mut start = s.len();
    for (idx, ch) in s.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        start = idx;
    }

    let mut out = String::with_capacity(ELLIPSIS.len() + s.len() - start);
    out.push_str(ELLIPSIS);
    out.push_str(&s[start..]);
    out
}

/// Moves the file name in front of its directories.
///
/// `"/home/user/file.go"` becomes `"file.go /home/user"`, with the directory part
/// covered by a [COMMENT_STYLE] span. With `reverse_directories` the directories are
/// listed innermost first: `"file.go user/home/"`.
pub fn filename_first(path: &str, sep: &str, reverse_directories: bool) -> FormattedPath {
    let mut dirs = split_segments(path, sep);
    let filename = if reverse_directories {
        dirs.reverse();
        if dirs.is_empty() { "" } else { dirs.remove(0) }
    } else {
        dirs.pop().unwrap_or_default()
    };
    let tail = dirs.join(sep);

    let raw = format!("{} {}", filename, tail);
    let leading = raw.len() - raw.trim_start().len();
    let display = raw.trim().to_owned();

    // Trimming may shift the filename boundary
    let start = filename.len().saturating_sub(leading).min(display.len());
    let end = display.len();

    FormattedPath::new(display, vec![StyleSpan::new(start, end, COMMENT_STYLE)])
}
