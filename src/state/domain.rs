//! Update-domain ledger: partitioned render invalidation.
//!
//! Every stateful region of the view declares which state slices it
//! reads. State transitions report the slices they changed, and the
//! ledger bumps a monotonic revision for exactly the dependent domains.
//! The revision is the observable "was this update domain re-evaluated"
//! marker: the view rebuilds a widget's content only when its domain's
//! revision moved, and tests assert the isolation guarantees (a search
//! draft edit never moves the list editor's revision, a list edit never
//! moves the search input's revision) directly against it.

// ===== Domain =====

/// An isolated update domain: the minimal view region that must redraw
/// when a given piece of state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    /// The header line with the show/hide indicator.
    HeaderBar,
    /// The search input (filter draft).
    Search,
    /// The page-size input (numeric draft).
    PageSize,
    /// The list pane: derived rows, selection, new-entry draft.
    ListEditor,
}

impl Domain {
    /// All domains, in layout order.
    pub const ALL: [Domain; 4] = [
        Domain::HeaderBar,
        Domain::Search,
        Domain::PageSize,
        Domain::ListEditor,
    ];

    fn index(self) -> usize {
        match self {
            Domain::HeaderBar => 0,
            Domain::Search => 1,
            Domain::PageSize => 2,
            Domain::ListEditor => 3,
        }
    }

    /// Whether this domain reads the given state slice.
    ///
    /// This is the static dependency matrix behind the isolation
    /// guarantees. Note what is *absent*: `ShowHeader` is not read by
    /// the list editor (hiding the header never redraws the list), and
    /// no draft slice is read by more than its own control.
    pub fn reads(self, slice: StateSlice) -> bool {
        use StateSlice::*;
        match self {
            Domain::HeaderBar => matches!(slice, ShowHeader),
            Domain::Search => matches!(slice, SearchDraft | Focus),
            Domain::PageSize => matches!(slice, PageSizeDraft | Focus),
            Domain::ListEditor => matches!(
                slice,
                Entries | Filter | PageSize | ListDraft | Selection | Focus
            ),
        }
    }
}

// ===== StateSlice =====

/// A slice of application state a domain can depend on.
///
/// Canonical slices (`Filter`, `PageSize`, `ShowHeader`, `Entries`) are
/// owned by the coordinator; draft slices are owned by one control each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateSlice {
    /// Committed filter term.
    Filter,
    /// Committed page size.
    PageSize,
    /// Header visibility flag.
    ShowHeader,
    /// The raw entry collection.
    Entries,
    /// Search control's uncommitted text draft.
    SearchDraft,
    /// Page-size control's uncommitted numeric-text draft.
    PageSizeDraft,
    /// List editor's uncommitted new-entry draft.
    ListDraft,
    /// List editor's row selection.
    Selection,
    /// Which control has keyboard focus.
    Focus,
}

// ===== RenderLedger =====

/// Per-domain monotonic revision counters.
///
/// A domain's revision moves exactly when a slice it reads changes;
/// unrelated transitions leave it untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderLedger {
    revisions: [u64; 4],
}

impl RenderLedger {
    /// Create a ledger with all revisions at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Report that `slice` changed; bumps every dependent domain.
    pub fn invalidate(&mut self, slice: StateSlice) {
        for domain in Domain::ALL {
            if domain.reads(slice) {
                self.revisions[domain.index()] += 1;
            }
        }
    }

    /// Bump every domain (terminal resize, first paint).
    pub fn invalidate_all(&mut self) {
        for rev in &mut self.revisions {
            *rev += 1;
        }
    }

    /// Current revision of a domain.
    pub fn revision(&self, domain: Domain) -> u64 {
        self.revisions[domain.index()]
    }
}
