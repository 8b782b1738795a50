// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Tracks: subjects driven by their mute and solo buttons.

use std::cell::Cell;
use std::rc::Rc;

use tracing::debug;

use super::markup::{MUTE_BUTTON_CLASS, SOLO_BUTTON_CLASS};
use super::{Button, NotificationContext};
use crate::dom::{Element, VisualElement, CLASS_ACTIVE};
use crate::error::Result;
use crate::observer::{ObserverHandle, Subject};

/// A sequencer track bound to its container element.
///
/// The track listens for clicks on its container. Clicks on the mute or
/// solo button bubble up to it, flip the matching flag, toggle the
/// button's `active` class and notify every registered observer.
/// Mute and solo are independent of each other.
pub struct Track<E: VisualElement = Element> {
    name: String,
    element: E,
    is_mute: Cell<bool>,
    is_solo: Cell<bool>,
    subject: Subject<NotificationContext>,
}

impl<E: VisualElement> Track<E> {
    /// Create a track and attach its click listener to `element`
    pub fn new(name: impl Into<String>, element: E) -> Rc<Self> {
        let track = Rc::new(Self {
            name: name.into(),
            element,
            is_mute: Cell::new(false),
            is_solo: Cell::new(false),
            subject: Subject::new(),
        });

        // The track owns the element, so the listener only holds it weakly
        let weak = Rc::downgrade(&track);
        track.element.on_click(move |event| {
            if let Some(track) = weak.upgrade() {
                track.handle_click(&event.target);
            }
        });

        track
    }

    fn handle_click(&self, target: &E) {
        if target.has_class(MUTE_BUTTON_CLASS) {
            self.press(Button::Mute, target);
        }
        if target.has_class(SOLO_BUTTON_CLASS) {
            self.press(Button::Solo, target);
        }
    }

    fn press(&self, button: Button, target: &E) {
        let flag = match button {
            Button::Mute => &self.is_mute,
            Button::Solo => &self.is_solo,
        };
        let status = !flag.get();
        flag.set(status);
        target.toggle_class(CLASS_ACTIVE);

        debug!(track = %self.name, %button, status, "track button pressed");
        self.notify(&NotificationContext { button, status });
    }

    /// Track name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Container element
    pub fn element(&self) -> &E {
        &self.element
    }

    /// Whether the mute button is engaged
    pub fn is_mute(&self) -> bool {
        self.is_mute.get()
    }

    /// Whether the solo button is engaged
    pub fn is_solo(&self) -> bool {
        self.is_solo.get()
    }

    /// Register a step (or any other observer)
    pub fn add_observer(&self, observer: ObserverHandle<NotificationContext>) {
        self.subject.add_observer(observer);
    }

    /// Unregister the first occurrence of an observer
    pub fn remove_observer(&self, observer: &ObserverHandle<NotificationContext>) -> Result<()> {
        self.subject.remove_observer(observer)
    }

    /// Send a context to all observers.
    ///
    /// Observers may add or remove observers on this track from `update`.
    pub fn notify(&self, context: &NotificationContext) {
        self.subject.notify(context);
    }

    /// Number of registered observers
    pub fn observer_count(&self) -> usize {
        self.subject.observer_count()
    }
}
