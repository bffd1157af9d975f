use std::cell::RefCell;
use std::rc::Rc;

use super::toast::Toast;
use crate::config::{Config, ToastConfig};
use crate::notification::{LiveQueue, NotificationProvider, Notifications, create_notifications};

/// Notification API bound to the demo's toast payload
pub const TOASTS: Notifications<Toast> = create_notifications();

pub struct App {
    /// Typed handle on the live queue; components reach the same queue
    /// through [`TOASTS`] once the provider is entered.
    pub toasts: Rc<RefCell<LiveQueue<Toast>>>,
    pub toast_config: ToastConfig,
    pub should_quit: bool,
    provider: NotificationProvider<Toast>,
    next_toast: u64,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let toasts = Rc::new(RefCell::new(TOASTS.live_queue()));
        let provider = TOASTS.provider(toasts.clone());

        Self {
            toasts,
            toast_config: config.toasts.clone(),
            should_quit: false,
            provider,
            next_toast: 0,
        }
    }

    /// Provider that makes [`App::toasts`] visible to components
    pub fn provider(&self) -> &NotificationProvider<Toast> {
        &self.provider
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn should_render(&self) -> bool {
        self.toasts.borrow().needs_render()
    }

    pub fn mark_dirty(&self) {
        self.toasts.borrow_mut().mark_dirty();
    }

    pub fn clear_dirty(&self) {
        self.toasts.borrow_mut().clear_dirty();
    }

    /// Fresh key for a new toast; keys are never reused within a session
    pub(super) fn next_toast_id(&mut self) -> (u64, String) {
        self.next_toast += 1;
        (self.next_toast, format!("toast-{}", self.next_toast))
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
