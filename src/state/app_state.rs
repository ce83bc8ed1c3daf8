//! Application state and transitions.
//!
//! `AppState` is the coordinator: it owns the canonical state (options
//! and the raw entry list) and computes the derived list on every read.
//! All transitions are pure, synchronous state replacements; none can
//! fail. Each transition reports the state slices it changed to the
//! update-domain ledger so only the dependent view regions redraw.
//!
//! Controls own their drafts (`SearchControl`, `PageSizeControl`,
//! `ListEditor`); draft edits are routed by the key handler and never
//! pass through the coordinator methods here.

use crate::model::{Entry, EntryList, Options};
use crate::state::domain::{RenderLedger, StateSlice};
use crate::state::{ListEditor, PageSizeControl, SearchControl};
use tracing::debug;

// ===== Focus =====

/// Which control has keyboard focus.
///
/// Cycle order: Search → PageSize → ListEditor → Search. Hiding the
/// header does not change focus; a hidden control keeps its draft and
/// its place in the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The search input.
    #[default]
    Search,
    /// The page-size input.
    PageSize,
    /// The list pane.
    ListEditor,
}

impl Focus {
    /// Next control in the cycle.
    pub fn next(self) -> Self {
        match self {
            Focus::Search => Focus::PageSize,
            Focus::PageSize => Focus::ListEditor,
            Focus::ListEditor => Focus::Search,
        }
    }

    /// Previous control in the cycle.
    pub fn prev(self) -> Self {
        match self {
            Focus::Search => Focus::ListEditor,
            Focus::PageSize => Focus::Search,
            Focus::ListEditor => Focus::PageSize,
        }
    }
}

// ===== AppState =====

/// Root application state: canonical state, control drafts, focus, and
/// the update-domain ledger.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Canonical options; mutated only via the `set_*` methods below.
    options: Options,
    /// The raw entry collection; mutated only via `add_entry` /
    /// `remove_entry`.
    entries: EntryList,

    /// Keyboard focus.
    pub focus: Focus,
    /// Search control draft state.
    pub search: SearchControl,
    /// Page-size control draft state.
    pub page_size: PageSizeControl,
    /// List editor draft and selection state.
    pub list_editor: ListEditor,
    /// Per-domain render revisions.
    pub ledger: RenderLedger,
}

impl AppState {
    /// Create with default options and the seed roster.
    pub fn new() -> Self {
        Self::with_entries(EntryList::seed())
    }

    /// Create with default options and a given raw list.
    pub fn with_entries(entries: EntryList) -> Self {
        Self {
            entries,
            ..Self::default()
        }
    }

    /// Create with explicit options and raw list (config-resolved).
    pub fn with_options(options: Options, entries: EntryList) -> Self {
        Self {
            options,
            entries,
            ..Self::default()
        }
    }

    /// Current canonical options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The raw entry collection.
    pub fn entries(&self) -> &EntryList {
        &self.entries
    }

    /// The derived list: filtered by the committed term, truncated to
    /// the committed page size, in original order. Recomputed on every
    /// call; never stored.
    pub fn derived_list(&self) -> Vec<&Entry> {
        self.options.derive(&self.entries)
    }

    // ===== Canonical transitions =====

    /// Replace the committed filter term. No validation.
    pub fn set_filter(&mut self, term: String) {
        debug!(filter = %term, "commit filter");
        self.options.filter = term;
        self.ledger.invalidate(StateSlice::Filter);
    }

    /// Replace the committed page size. The value has already been
    /// coerced from numeric text by the control (non-numeric → 0); no
    /// clamping happens here.
    pub fn set_page_size(&mut self, n: usize) {
        debug!(page_size = n, "commit page size");
        self.options.page_size = n;
        self.ledger.invalidate(StateSlice::PageSize);
    }

    /// Toggle or set header visibility. Controls stay mounted and keep
    /// their drafts across hide/show.
    pub fn set_show_header(&mut self, flag: bool) {
        debug!(show_header = flag, "toggle header");
        self.options.show_header = flag;
        self.ledger.invalidate(StateSlice::ShowHeader);
    }

    /// Append an entry to the raw list. Unconditional: duplicates are
    /// allowed, and preventing empty names is the list editor's job.
    pub fn add_entry(&mut self, name: String) {
        debug!(name = %name, "add entry");
        self.entries.push(Entry::new(name));
        self.ledger.invalidate(StateSlice::Entries);
    }

    /// Remove the first occurrence of `name` from the raw list; silent
    /// no-op when absent.
    pub fn remove_entry(&mut self, name: &str) {
        debug!(name = %name, "remove entry");
        self.entries.remove_first(name);
        self.ledger.invalidate(StateSlice::Entries);
    }

    // ===== Focus =====

    /// Cycle focus forward.
    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
        self.ledger.invalidate(StateSlice::Focus);
    }

    /// Cycle focus backward.
    pub fn cycle_focus_back(&mut self) {
        self.focus = self.focus.prev();
        self.ledger.invalidate(StateSlice::Focus);
    }
}
