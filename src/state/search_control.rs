//! Search control: the uncommitted filter draft.
//!
//! The draft is exclusively owned here and invisible to the rest of the
//! state until commit. Editing it must never recompute the derived list
//! or redraw the list pane; the key handler pairs every edit with an
//! invalidation of the `SearchDraft` slice only.

/// Uncommitted search text with a cursor, initial `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchControl {
    draft: String,
    cursor: usize,
}

impl SearchControl {
    /// Create with an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current draft text.
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

    /// Move the cursor one character left.
    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor one character right.
    pub fn cursor_right(&mut self) {
        if self.cursor < self.draft.chars().count() {
            self.cursor += 1;
        }
    }

    /// The value a commit hands to the coordinator. The draft is *not*
    /// cleared by committing; it persists as the displayed value.
    pub fn commit_value(&self) -> String {
        self.draft.clone()
    }
}

/// Byte offset of the `cursor`-th character, or the string's end.
pub(crate) fn byte_pos(s: &str, cursor: usize) -> usize {
    s.char_indices()
        .nth(cursor)
        .map(|(byte, _)| byte)
        .unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let control = SearchControl::new();
        assert_eq!(control.draft(), "");
        assert_eq!(control.cursor(), 0);
    }

    #[test]
    fn insert_advances_cursor() {
        let mut control = SearchControl::new();
        control.insert('a');
        control.insert('b');
        assert_eq!(control.draft(), "ab");
        assert_eq!(control.cursor(), 2);
    }

    #[test]
    fn insert_at_cursor_in_the_middle() {
        let mut control = SearchControl::new();
        control.insert('a');
        control.insert('c');
        control.cursor_left();
        control.insert('b');
        assert_eq!(control.draft(), "abc");
    }

    #[test]
    fn backspace_at_start_is_a_noop() {
        let mut control = SearchControl::new();
        control.backspace();
        assert_eq!(control.draft(), "");
    }

    #[test]
    fn backspace_removes_before_cursor() {
        let mut control = SearchControl::new();
        for ch in "abc".chars() {
            control.insert(ch);
        }
        control.cursor_left();
        control.backspace();
        assert_eq!(control.draft(), "ac");
        assert_eq!(control.cursor(), 1);
    }

    #[test]
    fn cursor_is_clamped_to_draft_bounds() {
        let mut control = SearchControl::new();
        control.insert('x');
        control.cursor_right();
        control.cursor_right();
        assert_eq!(control.cursor(), 1);
        control.cursor_left();
        control.cursor_left();
        assert_eq!(control.cursor(), 0);
    }

    #[test]
    fn multibyte_input_is_edited_at_char_boundaries() {
        let mut control = SearchControl::new();
        control.insert('é');
        control.insert('n');
        control.cursor_left();
        control.backspace();
        assert_eq!(control.draft(), "n");
    }

    #[test]
    fn commit_does_not_clear_the_draft() {
        let mut control = SearchControl::new();
        control.insert('o');
        let committed = control.commit_value();
        assert_eq!(committed, "o");
        assert_eq!(control.draft(), "o");
    }
}
