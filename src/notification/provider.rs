//! Provider/consumer wiring for notification queues
//!
//! A [`NotificationProvider`] installs one queue for every component that runs
//! inside its scope. Components fetch it with [`use_notifications`] instead of
//! having the queue threaded through every render and event function.
//!
//! Installed providers live on a per-thread stack. Lookup walks the stack from
//! the top, so the innermost provider for a payload type wins and leaving its
//! scope makes the outer one visible again.

use std::any::{Any, TypeId, type_name};
use std::cell::{Cell, RefCell};
use std::marker::PhantomData;
use std::rc::Rc;

use super::queue::{NotificationQueue, SharedQueue};
use crate::error::NotiqError;

struct Installed {
    token: u64,
    payload: TypeId,
    queue: Box<dyn Any>,
}

thread_local! {
    static PROVIDERS: RefCell<Vec<Installed>> = const { RefCell::new(Vec::new()) };
    static NEXT_TOKEN: Cell<u64> = const { Cell::new(0) };
}

/// Makes one queue available to every consumer inside its scope
pub struct NotificationProvider<T: 'static> {
    queue: SharedQueue<T>,
}

impl<T: 'static> Clone for NotificationProvider<T> {
    fn clone(&self) -> Self {
        Self {
            queue: Rc::clone(&self.queue),
        }
    }
}

impl<T: 'static> NotificationProvider<T> {
    pub fn new(queue: SharedQueue<T>) -> Self {
        Self { queue }
    }

    /// Wrap an owned queue in a fresh shared handle
    pub fn from_queue(queue: impl NotificationQueue<T> + 'static) -> Self {
        Self::new(Rc::new(RefCell::new(queue)))
    }

    /// The handle consumers inside this provider receive
    pub fn queue(&self) -> SharedQueue<T> {
        Rc::clone(&self.queue)
    }

    /// Install the queue until the returned guard is dropped
    pub fn enter(&self) -> ProviderGuard {
        let token = NEXT_TOKEN.with(|next| {
            let token = next.get();
            next.set(token + 1);
            token
        });

        PROVIDERS.with(|providers| {
            providers.borrow_mut().push(Installed {
                token,
                payload: TypeId::of::<T>(),
                queue: Box::new(Rc::clone(&self.queue)),
            });
        });

        log::trace!("Entered provider {} for {}", token, type_name::<T>());

        ProviderGuard {
            token,
            _not_send: PhantomData,
        }
    }

    /// Run `f` with the queue installed
    pub fn scope<R>(&self, f: impl FnOnce() -> R) -> R {
        let _guard = self.enter();
        f()
    }
}

/// Keeps a provider installed; dropping it leaves the scope
#[must_use = "the provider is uninstalled as soon as the guard is dropped"]
pub struct ProviderGuard {
    token: u64,
    _not_send: PhantomData<Rc<()>>,
}

impl Drop for ProviderGuard {
    fn drop(&mut self) {
        // Guards may be dropped out of order, so match on the token rather
        // than popping. try_with: the stack may already be gone at thread exit.
        let _ = PROVIDERS.try_with(|providers| {
            let mut providers = providers.borrow_mut();
            if let Some(index) = providers.iter().rposition(|p| p.token == self.token) {
                providers.remove(index);
            }
        });
        log::trace!("Left provider {}", self.token);
    }
}

/// Fetch the queue of the innermost enclosing provider for payload type `T`
pub fn use_notifications<T: 'static>() -> Result<SharedQueue<T>, NotiqError> {
    PROVIDERS.with(|providers| {
        providers
            .borrow()
            .iter()
            .rev()
            .filter(|installed| installed.payload == TypeId::of::<T>())
            .find_map(|installed| installed.queue.downcast_ref::<SharedQueue<T>>())
            .map(Rc::clone)
            .ok_or(NotiqError::MissingProvider {
                payload: type_name::<T>(),
            })
    })
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod provider_tests;
