//! List pane content: derived rows, selection, and the new-entry input.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::state::{AppState, Focus};
use crate::view::search_input::draft_spans;

/// Block title summarizing the derivation inputs.
pub fn list_title(state: &AppState) -> String {
    let derived = state.derived_list().len();
    let raw = state.entries().len();
    let options = state.options();
    format!(
        " Entries {derived}/{raw} · filter {:?} · page {} ",
        options.filter, options.page_size
    )
}

/// Build the list pane content.
///
/// One row per derived entry, the selected row highlighted when the pane
/// has focus, followed by the new-entry input line. The removal action
/// is bound to the displayed value of the selected row, so the rows here
/// are exactly what a remove can act on.
pub fn list_lines(state: &AppState) -> Vec<Line<'static>> {
    let focused = state.focus == Focus::ListEditor;
    let derived = state.derived_list();
    let selected = state.list_editor.selected(derived.len());

    let mut lines: Vec<Line<'static>> = Vec::with_capacity(derived.len() + 3);

    if derived.is_empty() {
        lines.push(Line::from(Span::styled(
            "  (no entries match)",
            Style::default().fg(Color::DarkGray),
        )));
    }

    for (i, entry) in derived.iter().enumerate() {
        let is_selected = focused && selected == Some(i);
        let marker = if is_selected { "▸ " } else { "  " };
        let style = if is_selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(
            format!("{marker}{}", entry.name()),
            style,
        )));
    }

    lines.push(Line::from(""));

    let editor = &state.list_editor;
    let mut add_spans = vec![Span::styled(
        "Add: ",
        Style::default().fg(Color::Yellow),
    )];
    add_spans.extend(draft_spans(editor.draft(), editor.cursor(), focused));
    if !editor.can_add() {
        add_spans.push(Span::styled(
            "  (type a name to enable)",
            Style::default().fg(Color::DarkGray),
        ));
    }
    lines.push(Line::from(add_spans));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntryList;

    #[test]
    fn renders_one_row_per_derived_entry() {
        let mut state = AppState::new();
        state.set_filter("o".to_string());
        let rendered = format!("{:?}", list_lines(&state));
        assert!(rendered.contains("loan"));
        assert!(rendered.contains("otravaliev"));
        assert!(rendered.contains("ecok"));
        assert!(!rendered.contains("mani"));
    }

    #[test]
    fn selection_marker_appears_only_when_focused() {
        let mut state = AppState::new();
        let unfocused = format!("{:?}", list_lines(&state));
        assert!(!unfocused.contains('▸'));
        state.focus = Focus::ListEditor;
        let focused = format!("{:?}", list_lines(&state));
        assert!(focused.contains('▸'));
    }

    #[test]
    fn empty_derivation_shows_a_placeholder() {
        let mut state = AppState::new();
        state.set_page_size(0);
        let rendered = format!("{:?}", list_lines(&state));
        assert!(rendered.contains("no entries match"));
    }

    #[test]
    fn add_hint_disappears_once_draft_is_non_empty() {
        let mut state = AppState::with_entries(EntryList::seed());
        state.focus = Focus::ListEditor;
        let disabled = format!("{:?}", list_lines(&state));
        assert!(disabled.contains("type a name"));
        state.list_editor.insert('x');
        let enabled = format!("{:?}", list_lines(&state));
        assert!(!enabled.contains("type a name"));
    }

    #[test]
    fn title_tracks_the_derivation_inputs() {
        let mut state = AppState::new();
        state.set_filter("o".to_string());
        state.set_page_size(1);
        assert_eq!(list_title(&state), " Entries 1/4 · filter \"o\" · page 1 ");
    }
}
