//! In-memory notification queue for tests
//!
//! Behaves exactly like [`LiveQueue`](super::LiveQueue) for `add`, `remove`,
//! `remove_all` and `list`, without any render bookkeeping. Every call is
//! recorded so tests can assert on what a component did to the queue.

use super::entry_list::{EntryList, QueueEntry};
use super::queue::NotificationQueue;

/// One recorded operation on a [`MockQueue`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueCall {
    Add(String),
    Remove(String),
    RemoveAll,
}

#[derive(Debug)]
pub struct MockQueue<T> {
    entries: EntryList<T>,
    calls: Vec<QueueCall>,
}

impl<T> Default for MockQueue<T> {
    fn default() -> Self {
        Self {
            entries: EntryList::new(),
            calls: Vec::new(),
        }
    }
}

impl<T> MockQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the queue; duplicate ids collapse the same way repeated `add`s do.
    /// Seeding is not recorded in [`calls`](Self::calls).
    pub fn with_entries(entries: impl IntoIterator<Item = QueueEntry<T>>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
            calls: Vec::new(),
        }
    }

    pub fn calls(&self) -> &[QueueCall] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl<T> NotificationQueue<T> for MockQueue<T> {
    fn add(&mut self, id: &str, data: T) {
        self.calls.push(QueueCall::Add(id.to_string()));
        self.entries.upsert(id, data);
    }

    fn remove(&mut self, id: &str) {
        self.calls.push(QueueCall::Remove(id.to_string()));
        self.entries.remove(id);
    }

    fn remove_all(&mut self) {
        self.calls.push(QueueCall::RemoveAll);
        self.entries.clear();
    }

    fn list(&self) -> &[QueueEntry<T>] {
        self.entries.as_slice()
    }
}

#[cfg(test)]
#[path = "mock_queue_tests.rs"]
mod mock_queue_tests;
