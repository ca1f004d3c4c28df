//! Rendering of formatted paths as styled ratatui lines.

use crate::config::HighlightTheme;
use crate::core::{FormattedPath, StyleSpan};

use ratatui::text::{Line, Span};

/// Splits the display string of `formatted` at its span boundaries and styles each
/// highlighted piece through `theme`. Text outside of spans is left unstyled.
///
/// Spans that do not fit the display string, or overlap a previous span, are skipped.
pub fn to_line(formatted: &FormattedPath, theme: &HighlightTheme) -> Line<'static> {
    let display = formatted.display();
    let mut styles: Vec<&StyleSpan> = formatted
        .styles()
        .iter()
        .filter(|span| span.fits(display))
        .collect();
    styles.sort_by_key(|span| span.start());

    let mut spans = Vec::with_capacity(styles.len() * 2 + 1);
    let mut pos = 0;
    for span in styles {
        if span.start() < pos {
            continue;
        }
        if span.start() > pos {
            spans.push(Span::raw(display[pos..span.start()].to_owned()));
        }
        if span.end() > span.start() {
            spans.push(Span::styled(
                display[span.range()].to_owned(),
                theme.style(span.label()),
            ));
        }
        pos = span.end();
    }
    if pos < display.len() {
        spans.push(Span::raw(display[pos..].to_owned()));
    }

    Line::from(spans)
}
