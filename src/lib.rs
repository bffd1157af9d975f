//! notiq library - ordered notification queue for terminal UIs
//!
//! The [`notification`] module is the reusable part: a keyed, ordered queue
//! with live and mock realizations and a provider that makes one queue
//! available to every component inside its scope. The remaining modules make
//! up the demo binary and are exposed for testing purposes.

pub mod app;
pub mod config;
pub mod error;
pub mod notification;
#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod widgets;

// Re-export commonly used types for convenience
pub use error::NotiqError;
pub use notification::{
    LiveQueue, MockQueue, NotificationProvider, NotificationQueue, QueueEntry,
    create_notifications, use_notifications,
};
