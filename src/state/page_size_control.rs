//! Page-size control: the uncommitted numeric-text draft.
//!
//! The draft is kept as text, not a number, because that is what the
//! user edits. Up/Down step it within `[0, PAGE_SIZE_MAX]`, an advisory
//! widget bound, not a commit-path clamp. Committing parses the text and
//! coerces anything non-numeric to `0`; see `commit_value`.

use crate::model::options::{PAGE_SIZE_DEFAULT, PAGE_SIZE_MAX};
use crate::state::search_control::byte_pos;

/// Uncommitted page-size text with a cursor, initial `"10"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSizeControl {
    draft: String,
    cursor: usize,
}

impl Default for PageSizeControl {
    fn default() -> Self {
        let draft = PAGE_SIZE_DEFAULT.to_string();
        let cursor = draft.len();
        Self { draft, cursor }
    }
}

impl PageSizeControl {
    /// Create with the default draft.
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

    /// Insert a character at the cursor. Any character is accepted; the
    /// coercion to a number happens at commit, not here.
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

    /// Step the draft up by one, clamped to `PAGE_SIZE_MAX`.
    /// A non-numeric draft steps from `0`.
    pub fn step_up(&mut self) {
        let next = (self.numeric_or_zero() + 1).min(PAGE_SIZE_MAX);
        self.set_numeric(next);
    }

    /// Step the draft down by one, saturating at `0`.
    pub fn step_down(&mut self) {
        let next = self.numeric_or_zero().saturating_sub(1);
        self.set_numeric(next);
    }

    /// The page size a commit hands to the coordinator.
    ///
    /// Non-numeric text (including empty) deliberately coerces to `0`
    /// rather than being rejected or falling back to the prior committed
    /// value; tests pin the coercion down as intended behavior.
    pub fn commit_value(&self) -> usize {
        self.draft.trim().parse().unwrap_or(0)
    }

    fn numeric_or_zero(&self) -> usize {
        self.draft.trim().parse().unwrap_or(0)
    }

    fn set_numeric(&mut self, value: usize) {
        self.draft = value.to_string();
        self.cursor = self.draft.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_the_default_page_size() {
        let control = PageSizeControl::new();
        assert_eq!(control.draft(), "10");
        assert_eq!(control.commit_value(), 10);
    }

    #[test]
    fn step_up_clamps_at_the_widget_bound() {
        let mut control = PageSizeControl::new();
        for _ in 0..15 {
            control.step_up();
        }
        assert_eq!(control.draft(), "20");
        assert_eq!(control.commit_value(), PAGE_SIZE_MAX);
    }

    #[test]
    fn step_down_saturates_at_zero() {
        let mut control = PageSizeControl::new();
        for _ in 0..15 {
            control.step_down();
        }
        assert_eq!(control.draft(), "0");
    }

    #[test]
    fn typed_text_is_not_clamped_until_stepped() {
        // The [0,20] bound is advisory, on the stepping only. Typed text
        // commits as-is.
        let mut control = PageSizeControl::new();
        control.insert('0');
        assert_eq!(control.draft(), "100");
        assert_eq!(control.commit_value(), 100);
    }

    #[test]
    fn non_numeric_draft_commits_as_zero() {
        // Unparsable text deliberately commits as 0 instead of keeping
        // the prior value.
        let mut control = PageSizeControl::new();
        control.backspace();
        control.backspace();
        control.insert('x');
        assert_eq!(control.commit_value(), 0);
    }

    #[test]
    fn empty_draft_commits_as_zero() {
        let mut control = PageSizeControl::new();
        control.backspace();
        control.backspace();
        assert_eq!(control.draft(), "");
        assert_eq!(control.commit_value(), 0);
    }

    #[test]
    fn stepping_a_non_numeric_draft_restarts_from_zero() {
        let mut control = PageSizeControl::new();
        control.insert('x');
        control.step_up();
        assert_eq!(control.draft(), "1");
    }
}
