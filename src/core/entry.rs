//! # Entry Store
//!
//! The checklist data: an ordered, growable sequence of entries. Insertion
//! order is display order.
//!
//! ## Sentinel Slot
//!
//! Collection ends when the user submits the `.e` command. That line is stored
//! like any other entry, then the store is *sealed*: from then on `len()`,
//! `entries()` and `get()` only see `[0, len)`, and the sentinel sits in the
//! hidden slot at index `len`. Nothing outside this module does index
//! arithmetic around it.
//!
//! ```text
//! storage:  [ "buy milk" | "walk dog" | ".e" ]
//! visible:  [ "buy milk" | "walk dog" ]          len() == 2
//! ```

use log::debug;

use crate::core::error::Result;

/// Entries are reserved in blocks of this size.
pub const GROWTH_BLOCK: usize = 32;

/// Command prefix that ends entry collection.
pub const SENTINEL: &str = ".e";

/// A single checklist line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub text: String,
    pub checked: bool,
}

impl Entry {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            checked: false,
        }
    }

    /// Flip the checked flag.
    pub fn toggle(&mut self) {
        self.checked = !self.checked;
    }
}

/// Whether a submitted line is the end-of-collection command.
///
/// Only the first two characters are compared, so `.edit` also matches.
pub fn is_sentinel(line: &str) -> bool {
    line.starts_with(SENTINEL)
}

#[derive(Debug, Default)]
pub struct EntryStore {
    entries: Vec<Entry>,
    sealed: bool,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, growing storage one block at a time.
    ///
    /// Fails with `ChecklistError::Allocation` if the block can't be reserved.
    pub fn push(&mut self, entry: Entry) -> Result<()> {
        if self.entries.len() == self.entries.capacity() {
            self.entries.try_reserve_exact(GROWTH_BLOCK)?;
            debug!("Entry storage grown to {}", self.entries.capacity());
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Hide the most recently pushed entry (the sentinel) from callers.
    pub fn seal(&mut self) {
        if !self.entries.is_empty() {
            self.sealed = true;
        }
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Number of visible entries.
    pub fn len(&self) -> usize {
        if self.sealed {
            self.entries.len() - 1
        } else {
            self.entries.len()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Visible entries in display order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries[..self.len()]
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries().get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Entry> {
        let len = self.len();
        self.entries[..len].get_mut(index)
    }

    /// The hidden sentinel slot, once sealed.
    pub fn sentinel(&self) -> Option<&Entry> {
        if self.sealed {
            self.entries.last()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_starts_unchecked() {
        let entry = Entry::new("buy milk");
        assert_eq!(entry.text, "buy milk");
        assert!(!entry.checked);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let original = Entry::new("walk dog");
        let mut entry = original.clone();
        entry.toggle();
        assert!(entry.checked);
        entry.toggle();
        assert_eq!(entry, original);
    }

    #[test]
    fn test_is_sentinel_checks_prefix() {
        assert!(is_sentinel(".e"));
        assert!(is_sentinel(".edit later"));
        assert!(!is_sentinel("e"));
        assert!(!is_sentinel(" .e"));
        assert!(!is_sentinel("."));
        assert!(!is_sentinel(""));
    }

    #[test]
    fn test_push_grows_in_blocks() {
        let mut store = EntryStore::new();
        store.push(Entry::new("one")).unwrap();
        assert!(store.entries.capacity() >= GROWTH_BLOCK);

        for i in 1..=GROWTH_BLOCK {
            store.push(Entry::new(format!("item {i}"))).unwrap();
        }
        assert_eq!(store.len(), GROWTH_BLOCK + 1);
        assert!(store.entries.capacity() >= GROWTH_BLOCK * 2);
    }

    #[test]
    fn test_seal_hides_last_entry() {
        let mut store = EntryStore::new();
        store.push(Entry::new("buy milk")).unwrap();
        store.push(Entry::new(".e")).unwrap();
        store.seal();

        assert_eq!(store.len(), 1);
        assert_eq!(store.entries().len(), 1);
        assert!(store.get(1).is_none());
        assert!(store.get_mut(1).is_none());
        assert_eq!(store.sentinel().map(|e| e.text.as_str()), Some(".e"));
    }

    #[test]
    fn test_seal_on_empty_store_is_ignored() {
        let mut store = EntryStore::new();
        store.seal();
        assert!(!store.is_sealed());
        assert_eq!(store.len(), 0);
        assert!(store.sentinel().is_none());
    }

    #[test]
    fn test_unsealed_store_has_no_sentinel() {
        let mut store = EntryStore::new();
        store.push(Entry::new(".e")).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.sentinel().is_none());
    }
}
