//! Search input widget content.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::state::SearchControl;

/// Build spans for a draft with a visible cursor.
///
/// Shared by all three draft inputs. The cursor cell is only highlighted
/// when the control is focused; an unfocused draft renders as plain text.
pub(crate) fn draft_spans(draft: &str, cursor: usize, focused: bool) -> Vec<Span<'static>> {
    if !focused {
        return vec![Span::raw(draft.to_string())];
    }

    let before: String = draft.chars().take(cursor).collect();
    let at: String = draft
        .chars()
        .nth(cursor)
        .map(|c| c.to_string())
        .unwrap_or_else(|| " ".to_string());
    let after: String = draft.chars().skip(cursor + 1).collect();

    vec![
        Span::raw(before),
        Span::styled(
            at,
            Style::default()
                .bg(Color::White)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(after),
    ]
}

/// Build the search input content: the uncommitted filter draft.
pub fn search_lines(control: &SearchControl, focused: bool) -> Vec<Line<'static>> {
    vec![Line::from(draft_spans(
        control.draft(),
        control.cursor(),
        focused,
    ))]
}
