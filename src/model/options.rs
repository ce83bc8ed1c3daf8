//! Canonical view options and the list derivation.
//!
//! `Options` is the single source of truth for the filter term, page
//! size, and header visibility. It is owned by the coordinator and
//! mutated only through its transition methods; controls hold their own
//! uncommitted drafts and never write here directly.

use crate::model::entry::{Entry, EntryList};

/// Advisory upper bound on the page size, enforced by the input widget's
/// stepping, not by the commit path.
pub const PAGE_SIZE_MAX: usize = 20;

/// Default page size at startup.
pub const PAGE_SIZE_DEFAULT: usize = 10;

// ===== Options =====

/// Canonical options: filter term, page size, header visibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Committed filter term. Matched case-insensitively as a substring
    /// against entry names. Empty matches everything.
    pub filter: String,
    /// Committed page size. `0` yields an empty derived list; values
    /// beyond the raw list length yield the full filtered list.
    pub page_size: usize,
    /// Whether the controls header is visible. Hiding it does not unmount
    /// the controls; their drafts survive hide/show.
    pub show_header: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            filter: String::new(),
            page_size: PAGE_SIZE_DEFAULT,
            show_header: true,
        }
    }
}

impl Options {
    /// Compute the derived list: the filtered subsequence of `raw`
    /// (case-insensitive substring match on `filter`), truncated to
    /// `page_size`, in original relative order.
    ///
    /// Never stored; callers recompute from the latest raw list and
    /// options on every read.
    pub fn derive<'a>(&self, raw: &'a EntryList) -> Vec<&'a Entry> {
        let filter_lower = self.filter.to_lowercase();
        raw.iter()
            .filter(|e| e.matches(&filter_lower))
            .take(self.page_size)
            .collect()
    }
}
