//! Ordered, unique-by-id entry storage
//!
//! Both queue realizations delegate to [`EntryList`] so that upsert, removal
//! and clearing behave identically no matter which one a component receives.

/// One `(id, data)` pair held by a notification queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueEntry<T> {
    pub id: String,
    pub data: T,
}

impl<T> QueueEntry<T> {
    pub fn new(id: impl Into<String>, data: T) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }
}

/// Outcome of an upsert, used by callers that react to changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Inserted,
    Replaced,
}

/// Insertion-ordered list holding at most one entry per id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryList<T> {
    entries: Vec<QueueEntry<T>>,
}

impl<T> Default for EntryList<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> EntryList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    /// Replace the payload of `id` in place, or append a new entry
    pub fn upsert(&mut self, id: &str, data: T) -> Upsert {
        match self.position(id) {
            Some(index) => {
                self.entries[index].data = data;
                Upsert::Replaced
            }
            None => {
                self.entries.push(QueueEntry::new(id, data));
                Upsert::Inserted
            }
        }
    }

    /// Remove the entry for `id`, returning it if it was present
    pub fn remove(&mut self, id: &str) -> Option<QueueEntry<T>> {
        // Vec::remove keeps the relative order of the remaining entries
        self.position(id).map(|index| self.entries.remove(index))
    }

    /// Drop every entry, returning how many were removed
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        removed
    }

    pub fn as_slice(&self) -> &[QueueEntry<T>] {
        &self.entries
    }
}

impl<T> FromIterator<QueueEntry<T>> for EntryList<T> {
    /// Builds the list through successive upserts, so duplicate ids collapse
    /// onto the first position with the last payload.
    fn from_iter<I: IntoIterator<Item = QueueEntry<T>>>(iter: I) -> Self {
        let mut list = Self::new();
        for entry in iter {
            list.upsert(&entry.id, entry.data);
        }
        list
    }
}

#[cfg(test)]
#[path = "entry_list_tests.rs"]
mod entry_list_tests;
