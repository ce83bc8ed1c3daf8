//! Keyboard action and text-edit dispatch (pure).
//!
//! The shell translates terminal events into either a [`KeyAction`]
//! (via the configured bindings) or a [`TextEdit`] (unmapped character
//! and editing keys); both are applied here as pure transitions on
//! `AppState`, testable without a terminal.
//!
//! Draft edits pair the control mutation with an invalidation of that
//! control's own draft slice and nothing else. This is where the
//! isolation guarantee is enforced: typing in the search box can only
//! ever move the search domain's revision.

use crate::model::KeyAction;
use crate::state::domain::StateSlice;
use crate::state::{AppState, Focus};

/// A draft-editing input: unmapped keys routed to the focused control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEdit {
    /// Insert a character at the cursor.
    Insert(char),
    /// Delete the character before the cursor.
    Backspace,
    /// Move the cursor one character left.
    CursorLeft,
    /// Move the cursor one character right.
    CursorRight,
}

/// Apply a domain-level action. Returns `true` when the app should quit.
pub fn handle_action(state: &mut AppState, action: KeyAction) -> bool {
    match action {
        KeyAction::Quit => return true,
        KeyAction::CycleFocus => state.cycle_focus(),
        KeyAction::CycleFocusBack => state.cycle_focus_back(),
        KeyAction::Commit => commit_focused(state),
        KeyAction::MoveUp => move_vertical(state, true),
        KeyAction::MoveDown => move_vertical(state, false),
        KeyAction::RemoveSelected => remove_selected(state),
        KeyAction::ToggleHeader => {
            let visible = state.options().show_header;
            state.set_show_header(!visible);
        }
    }
    false
}

/// Route a text edit to the focused control's draft.
pub fn handle_edit(state: &mut AppState, edit: TextEdit) {
    match state.focus {
        Focus::Search => {
            match edit {
                TextEdit::Insert(ch) => state.search.insert(ch),
                TextEdit::Backspace => state.search.backspace(),
                TextEdit::CursorLeft => state.search.cursor_left(),
                TextEdit::CursorRight => state.search.cursor_right(),
            }
            state.ledger.invalidate(StateSlice::SearchDraft);
        }
        Focus::PageSize => {
            match edit {
                TextEdit::Insert(ch) => state.page_size.insert(ch),
                TextEdit::Backspace => state.page_size.backspace(),
                // The page-size widget is short enough that cursor
                // movement is append-only; left/right are ignored.
                TextEdit::CursorLeft | TextEdit::CursorRight => return,
            }
            state.ledger.invalidate(StateSlice::PageSizeDraft);
        }
        Focus::ListEditor => {
            match edit {
                TextEdit::Insert(ch) => state.list_editor.insert(ch),
                TextEdit::Backspace => state.list_editor.backspace(),
                TextEdit::CursorLeft | TextEdit::CursorRight => return,
            }
            state.ledger.invalidate(StateSlice::ListDraft);
        }
    }
}

/// Commit the focused control's draft into canonical state.
fn commit_focused(state: &mut AppState) {
    match state.focus {
        Focus::Search => {
            let term = state.search.commit_value();
            state.set_filter(term);
        }
        Focus::PageSize => {
            let size = state.page_size.commit_value();
            state.set_page_size(size);
        }
        Focus::ListEditor => {
            // Disabled for an empty draft; the take clears the draft so
            // a repeated commit cannot duplicate the add.
            if let Some(name) = state.list_editor.take_draft() {
                state.ledger.invalidate(StateSlice::ListDraft);
                state.add_entry(name);
            }
        }
    }
}

/// Up/Down: step the page-size draft, or move the row selection.
fn move_vertical(state: &mut AppState, up: bool) {
    match state.focus {
        Focus::PageSize => {
            if up {
                state.page_size.step_up();
            } else {
                state.page_size.step_down();
            }
            state.ledger.invalidate(StateSlice::PageSizeDraft);
        }
        Focus::ListEditor => {
            let rows = state.derived_list().len();
            if up {
                state.list_editor.select_up(rows);
            } else {
                state.list_editor.select_down(rows);
            }
            state.ledger.invalidate(StateSlice::Selection);
        }
        Focus::Search => {}
    }
}

/// Remove the selected row by its displayed literal value.
fn remove_selected(state: &mut AppState) {
    if state.focus != Focus::ListEditor {
        return;
    }
    // Capture the displayed value before mutating: removal acts on the
    // literal value, never the index, so a stale selection cannot
    // remove a shifted neighbor.
    let value = {
        let displayed = state.derived_list();
        state.list_editor.selected_value(&displayed)
    };
    if let Some(name) = value {
        state.remove_entry(&name);
    }
}
