//! List editor: the new-entry draft and row selection.
//!
//! The editor reads the derived (filtered, paginated) list but issues
//! add/remove mutations against the raw list through the coordinator.
//! Removal always acts on the literal value of the selected row as
//! currently displayed, never on an index, so a stale selection after
//! the list changed can at worst remove nothing, not the wrong entry.

use crate::model::Entry;
use crate::state::search_control::byte_pos;

/// Uncommitted new-entry draft plus the selected row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListEditor {
    draft: String,
    cursor: usize,
    selected: usize,
}

impl ListEditor {
    /// Create with an empty draft and the first row selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current new-entry draft.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Insert a character at the cursor.
    pub fn insert(&mut self, ch: char) {
        let byte = byte_pos(&self.draft, self.cursor);
        self.draft.insert(byte, ch);
        self.cursor += 1;
    }

    /// Delete the character before the cursor, if any.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let byte = byte_pos(&self.draft, self.cursor);
            self.draft.remove(byte);
        }
    }

    /// Whether the add action is enabled. Empty-name adds are prevented
    /// here, at the control boundary, not rejected with an error.
    pub fn can_add(&self) -> bool {
        !self.draft.is_empty()
    }

    /// Take the draft for an add, clearing it.
    ///
    /// Returns `None` when the add is disabled. Clearing on take is what
    /// keeps a repeated commit from silently duplicating the add.
    pub fn take_draft(&mut self) -> Option<String> {
        if !self.can_add() {
            return None;
        }
        self.cursor = 0;
        Some(std::mem::take(&mut self.draft))
    }

    /// Selected row index, clamped against the displayed row count.
    pub fn selected(&self, row_count: usize) -> Option<usize> {
        if row_count == 0 {
            None
        } else {
            Some(self.selected.min(row_count - 1))
        }
    }

    /// Move the selection up one row.
    pub fn select_up(&mut self, row_count: usize) {
        self.selected = self
            .selected
            .min(row_count.saturating_sub(1))
            .saturating_sub(1);
    }

    /// Move the selection down one row.
    pub fn select_down(&mut self, row_count: usize) {
        if row_count > 0 && self.selected < row_count - 1 {
            self.selected += 1;
        }
    }

    /// The literal value of the selected row in the displayed list.
    pub fn selected_value(&self, displayed: &[&Entry]) -> Option<String> {
        self.selected(displayed.len())
            .map(|i| displayed[i].name().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntryList;

    fn displayed(list: &EntryList) -> Vec<&Entry> {
        list.iter().collect()
    }

    #[test]
    fn empty_draft_disables_add() {
        let mut editor = ListEditor::new();
        assert!(!editor.can_add());
        assert_eq!(editor.take_draft(), None);
    }

    #[test]
    fn take_draft_clears_so_a_repeat_cannot_duplicate() {
        let mut editor = ListEditor::new();
        for ch in "otto".chars() {
            editor.insert(ch);
        }
        assert_eq!(editor.take_draft(), Some("otto".to_string()));
        assert_eq!(editor.draft(), "");
        assert_eq!(editor.take_draft(), None);
    }

    #[test]
    fn selection_clamps_to_displayed_rows() {
        let mut editor = ListEditor::new();
        editor.select_down(3);
        editor.select_down(3);
        editor.select_down(3);
        assert_eq!(editor.selected(3), Some(2));
        // The list shrank under the selection.
        assert_eq!(editor.selected(2), Some(1));
        let shrunk = EntryList::from_names(["a", "b"]);
        assert_eq!(
            editor.selected_value(&displayed(&shrunk)),
            Some("b".to_string())
        );
    }

    #[test]
    fn selection_on_empty_list_is_none() {
        let editor = ListEditor::new();
        assert_eq!(editor.selected(0), None);
        assert_eq!(editor.selected_value(&[]), None);
    }

    #[test]
    fn select_up_saturates_at_the_first_row() {
        let mut editor = ListEditor::new();
        editor.select_up(3);
        assert_eq!(editor.selected(3), Some(0));
    }

    #[test]
    fn selected_value_is_the_displayed_literal() {
        let mut editor = ListEditor::new();
        let list = EntryList::from_names(["a", "b", "a"]);
        let rows = displayed(&list);
        editor.select_down(rows.len());
        editor.select_down(rows.len());
        assert_eq!(editor.selected_value(&rows), Some("a".to_string()));
    }
}
