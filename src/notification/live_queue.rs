//! Live notification queue
//!
//! The queue the running UI uses. Alongside the entries it keeps the reactive
//! bits the render loop needs: a dirty flag that asks for a redraw and a
//! revision counter that moves on every effective change.

use super::entry_list::{EntryList, QueueEntry, Upsert};
use super::queue::NotificationQueue;

#[derive(Debug)]
pub struct LiveQueue<T> {
    entries: EntryList<T>,
    revision: u64,
    needs_render: bool,
}

impl<T> Default for LiveQueue<T> {
    fn default() -> Self {
        Self {
            entries: EntryList::new(),
            revision: 0,
            // First frame always renders
            needs_render: true,
        }
    }
}

impl<T> LiveQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of effective changes since construction
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn needs_render(&self) -> bool {
        self.needs_render
    }

    pub fn mark_dirty(&mut self) {
        self.needs_render = true;
    }

    pub fn clear_dirty(&mut self) {
        self.needs_render = false;
    }

    fn changed(&mut self) {
        self.revision += 1;
        self.needs_render = true;
    }
}

impl<T> NotificationQueue<T> for LiveQueue<T> {
    fn add(&mut self, id: &str, data: T) {
        match self.entries.upsert(id, data) {
            Upsert::Inserted => log::debug!("Notification '{}' added", id),
            Upsert::Replaced => log::debug!("Notification '{}' updated in place", id),
        }
        self.changed();
    }

    fn remove(&mut self, id: &str) {
        if self.entries.remove(id).is_some() {
            log::debug!("Notification '{}' removed", id);
            self.changed();
        }
    }

    fn remove_all(&mut self) {
        let removed = self.entries.clear();
        if removed > 0 {
            log::debug!("Cleared {} notifications", removed);
            self.changed();
        }
    }

    fn list(&self) -> &[QueueEntry<T>] {
        self.entries.as_slice()
    }
}

#[cfg(test)]
#[path = "live_queue_tests.rs"]
mod live_queue_tests;
