//! Bound notification API for one payload type
//!
//! An application defines its payload once and gets every piece of the queue
//! API already specialized for it:
//!
//! ```
//! use notiq::notification::{NotificationQueue, create_notifications};
//!
//! struct Toast(String);
//!
//! let toasts = create_notifications::<Toast>();
//! let provider = toasts.live_provider();
//!
//! provider.scope(|| {
//!     let queue = toasts.use_queue().unwrap();
//!     queue.borrow_mut().add("saved", Toast("Saved!".into()));
//! });
//!
//! assert_eq!(provider.queue().borrow().len(), 1);
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::entry_list::QueueEntry;
use super::live_queue::LiveQueue;
use super::mock_queue::MockQueue;
use super::provider::{NotificationProvider, use_notifications};
use super::queue::SharedQueue;
use crate::error::NotiqError;

/// Provider, consumer and queue factories specialized for payload `T`
pub struct Notifications<T: 'static> {
    _payload: PhantomData<fn() -> T>,
}

/// Create the notification API for payload type `T`
///
/// `const`, so an application can bind its API once as a constant.
pub const fn create_notifications<T: 'static>() -> Notifications<T> {
    Notifications {
        _payload: PhantomData,
    }
}

impl<T: 'static> Clone for Notifications<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Notifications<T> {}

impl<T: 'static> fmt::Debug for Notifications<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Notifications<{}>", std::any::type_name::<T>())
    }
}

impl<T: 'static> Notifications<T> {
    /// Provider over an existing queue handle
    pub fn provider(&self, queue: SharedQueue<T>) -> NotificationProvider<T> {
        NotificationProvider::new(queue)
    }

    /// Provider over a fresh live queue
    pub fn live_provider(&self) -> NotificationProvider<T> {
        NotificationProvider::from_queue(self.live_queue())
    }

    /// Consumer accessor; fails outside every provider for `T`
    pub fn use_queue(&self) -> Result<SharedQueue<T>, NotiqError> {
        use_notifications::<T>()
    }

    /// Provider over a mock queue seeded with `entries`
    pub fn mock_provider(
        &self,
        entries: impl IntoIterator<Item = QueueEntry<T>>,
    ) -> NotificationProvider<T> {
        NotificationProvider::from_queue(self.mock_queue(entries))
    }

    pub fn mock_queue(&self, entries: impl IntoIterator<Item = QueueEntry<T>>) -> MockQueue<T> {
        MockQueue::with_entries(entries)
    }

    pub fn live_queue(&self) -> LiveQueue<T> {
        LiveQueue::new()
    }
}
