//! Notification queue for notiq
//!
//! An ordered, unique-by-id list of notification entries that any component
//! can reach through a provider. The live queue drives the running UI; the
//! mock queue stands in for it in tests.

mod entry_list;
mod factory;
mod live_queue;
mod mock_queue;
mod provider;
mod queue;

pub use entry_list::{EntryList, QueueEntry, Upsert};
pub use factory::{Notifications, create_notifications};
pub use live_queue::LiveQueue;
pub use mock_queue::{MockQueue, QueueCall};
pub use provider::{NotificationProvider, ProviderGuard, use_notifications};
pub use queue::{NotificationQueue, SharedQueue};
