//! Page-size input widget content.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::state::PageSizeControl;
use crate::view::search_input::draft_spans;

/// Build the page-size input content: the numeric-text draft plus the
/// advisory bound hint.
pub fn page_size_lines(control: &PageSizeControl, focused: bool) -> Vec<Line<'static>> {
    let mut spans = draft_spans(control.draft(), control.cursor(), focused);
    spans.push(Span::styled(
        "  (0–20, ↑↓)",
        Style::default().fg(Color::DarkGray),
    ));
    vec![Line::from(spans)]
}
