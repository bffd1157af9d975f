//! The notification queue contract
//!
//! Components talk to a queue only through [`NotificationQueue`], so the live
//! queue used by the running UI and the mock queue used by tests can be
//! swapped behind a provider without the components noticing.

use std::cell::RefCell;
use std::rc::Rc;

use super::entry_list::QueueEntry;

/// Shared handle a provider hands to its consumers
///
/// `Rc` keeps the handle on the UI thread; the queue is never touched from
/// another thread.
pub type SharedQueue<T> = Rc<RefCell<dyn NotificationQueue<T>>>;

/// Ordered, unique-by-id collection of notification entries
///
/// All mutations are total: adding an existing id is an upsert and removing
/// an absent id does nothing.
pub trait NotificationQueue<T> {
    /// Replace the payload of `id` in place, or append a new entry at the end
    fn add(&mut self, id: &str, data: T);

    /// Remove the entry for `id` if present
    fn remove(&mut self, id: &str);

    /// Remove every entry
    fn remove_all(&mut self);

    /// Current entries in display order
    fn list(&self) -> &[QueueEntry<T>];

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }

    /// Look up the entry for `id`
    fn get(&self, id: &str) -> Option<&QueueEntry<T>> {
        self.list().iter().find(|entry| entry.id == id)
    }

    fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }
}
