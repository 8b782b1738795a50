// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Publish/subscribe primitives.
//!
//! This module provides:
//! - `Observer` trait for anything that reacts to notifications
//! - `ObserverList` ordered handle storage with identity lookup
//! - `Subject` which owns a list and fans a context out to it

pub mod list;

pub use list::{ObserverHandle, ObserverList};

use std::cell::{Ref, RefCell};

use tracing::{trace, warn};

use crate::error::{Result, SequencerError};

/// Something that reacts to a subject's notifications.
///
/// The default implementation ignores every notification.
pub trait Observer<C> {
    /// Receive a notification
    fn update(&self, _context: &C) {}
}

/// Owner of an observer list that broadcasts contexts to it.
///
/// Registrations go through a shared reference, so observers may add or
/// remove observers on the same subject from inside `update`.
pub struct Subject<C> {
    observers: RefCell<ObserverList<C>>,
}

impl<C> Default for Subject<C> {
    fn default() -> Self {
        Self {
            observers: RefCell::new(ObserverList::new()),
        }
    }
}

impl<C> Subject<C> {
    /// Create a subject with no observers
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer. The same observer may be registered twice.
    pub fn add_observer(&self, observer: ObserverHandle<C>) {
        self.observers.borrow_mut().add(observer);
    }

    /// Remove the first registration of `observer`.
    ///
    /// Returns `ObserverNotRegistered` and leaves the list untouched when the
    /// observer is not present.
    pub fn remove_observer(&self, observer: &ObserverHandle<C>) -> Result<()> {
        let mut observers = self.observers.borrow_mut();
        match observers.index_of(observer, 0) {
            Some(index) => {
                observers.remove_at(index);
                Ok(())
            }
            None => {
                warn!("remove_observer called with an unregistered observer");
                Err(SequencerError::ObserverNotRegistered)
            }
        }
    }

    /// Call `update` on every registered observer in registration order.
    ///
    /// The set of observers is fixed when the call starts: observers
    /// registered during the call are first notified on the next one, and
    /// observers removed during the call still receive this one.
    pub fn notify(&self, context: &C) {
        // Release the borrow before dispatch so `update` can re-register
        let observers = self.observers.borrow().snapshot();
        trace!(count = observers.len(), "notifying observers");
        for observer in observers {
            observer.update(context);
        }
    }

    /// Number of registered observers
    pub fn observer_count(&self) -> usize {
        self.observers.borrow().count()
    }

    /// Read access to the underlying list
    pub fn observers(&self) -> Ref<'_, ObserverList<C>> {
        self.observers.borrow()
    }
}
