//! Roster entries and the raw entry collection.
//!
//! The raw list is an ordered sequence with insertion order significant:
//! adds append, and removal takes the *first* occurrence of a value.
//! Duplicates are permitted; an entry has no identity beyond its value
//! and position.

// ===== Entry =====

/// A single roster entry: a plain string name.
///
/// Entries carry no identity beyond their value. Two entries with the
/// same name are distinguishable only by position in the raw list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry(String);

impl Entry {
    /// Create an entry from a name. No validation: empty names are the
    /// caller's concern (the list editor disables add for empty drafts).
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The entry's name.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring containment, used by list derivation.
    pub fn matches(&self, filter_lower: &str) -> bool {
        self.0.to_lowercase().contains(filter_lower)
    }
}

impl From<&str> for Entry {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

// ===== EntryList =====

/// The raw ordered entry collection.
///
/// Owned exclusively by the coordinator (`AppState`); all mutation goes
/// through [`EntryList::push`] and [`EntryList::remove_first`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryList {
    entries: Vec<Entry>,
}

impl EntryList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from entry names, preserving order.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: names.into_iter().map(Entry::new).collect(),
        }
    }

    /// The default seed roster.
    pub fn seed() -> Self {
        Self::from_names(["loan", "otravaliev", "mani", "ecok"])
    }

    /// Append an entry. Unconditional: duplicates are allowed.
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Remove the **first** entry equal to `name`, scanning from the
    /// start. Absent values are a silent no-op. When two entries share a
    /// value, only the earliest is removed. This tie-break is load
    /// bearing for removal-by-displayed-value.
    pub fn remove_first(&mut self, name: &str) {
        if let Some(index) = self.entries.iter().position(|e| e.name() == name) {
            self.entries.remove(index);
        }
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Number of entries in the raw list.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the raw list is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry names in insertion order (test/diagnostic convenience).
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(Entry::name).collect()
    }
}
