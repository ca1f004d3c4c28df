//! Property tests for the lexical path transforms and the smart state.

use pathdisplay::core::{
    ELLIPSIS, SmartPathState, filename_first, make_relative, resolve_relative, shorten_path,
    truncate_left,
};
use pathdisplay::is_uri;

use proptest::prelude::*;
use unicode_width::UnicodeWidthStr;

fn segments() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,6}", 0..6)
}

fn absolute(parts: &[String]) -> String {
    format!("/{}", parts.join("/"))
}

proptest! {
    #[test]
    fn test_truncate_fits_and_keeps_tail(s in "[a-zé🦀/]{0,40}", width in 0usize..50) {
        let out = truncate_left(&s, width);
        prop_assert!(out.width() <= width);
        if s.width() <= width {
            prop_assert_eq!(&out, &s);
        } else if let Some(kept) = out.strip_prefix(ELLIPSIS) {
            prop_assert!(s.ends_with(kept));
        } else {
            prop_assert!(out.is_empty());
        }
    }

    #[test]
    fn test_relative_round_trip(path in segments(), base in segments()) {
        let path = absolute(&path);
        let base = absolute(&base);
        let rel = make_relative(&path, &base, "/");
        prop_assert!(!rel.starts_with('/'));
        prop_assert_eq!(resolve_relative(&rel, &base, "/"), path);
    }

    #[test]
    fn test_shorten_keeps_file_name(
        path in prop::collection::vec("[a-z]{1,6}", 1..6),
        len in 1usize..4,
    ) {
        let joined = path.join("/");
        let out = shorten_path(&joined, "/", len, &[-1]);
        let last = path.last().map(String::as_str).unwrap_or_default();
        prop_assert!(out.ends_with(last));
        prop_assert_eq!(out.split('/').count(), path.len());
    }

    #[test]
    fn test_filename_first_span_fits(path in "[a-zé/]{0,30}", reverse in any::<bool>()) {
        let out = filename_first(&path, "/", reverse);
        for span in out.styles() {
            prop_assert!(span.fits(out.display()));
        }
    }

    #[test]
    fn test_smart_repeats_are_stable(
        paths in prop::collection::vec(prop::collection::vec("[ab]{1,2}", 1..5), 1..8),
    ) {
        let paths: Vec<String> = paths.iter().map(|p| p.join("/")).collect();
        let mut state = SmartPathState::new();
        let shown: Vec<String> = paths.iter().map(|p| state.shorten(p, "/")).collect();
        for (p, first) in paths.iter().zip(&shown) {
            let again = state.shorten(p, "/");
            prop_assert_eq!(&again, first);
        }
        prop_assert!(state.len() <= paths.len());
    }

    #[test]
    fn test_paths_are_not_uris(parts in segments()) {
        let unix = absolute(&parts);
        let windows = format!("C:\\{}", parts.join("\\"));
        prop_assert!(!is_uri(&unix));
        prop_assert!(!is_uri(&windows));
    }
}
