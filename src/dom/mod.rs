// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! In-memory element tree used as the sequencer's rendering surface.
//!
//! The sequencer core only talks to the `VisualElement` trait. `Element`
//! is the tree-backed implementation: ids, class lists, parent/child
//! links, click listeners with bubbling, and HTML output.

mod element;
mod html;

pub use element::Element;
pub use html::escape;

use crate::error::{Result, SequencerError};

/// Class applied to pressed buttons and enabled steps
pub const CLASS_ACTIVE: &str = "active";
/// Class applied to steps of a muted track
pub const CLASS_MUTE: &str = "mute";
/// Class applied to steps of a soloed track
pub const CLASS_SOLO: &str = "solo";

/// A click delivered to a listener.
///
/// `target` is the element that was clicked; `current_target` is the
/// element whose listener is running, which differs once the event has
/// bubbled up to an ancestor.
#[derive(Debug, Clone)]
pub struct ClickEvent<E> {
    /// Element the click originated on
    pub target: E,
    /// Element the running listener is attached to
    pub current_target: E,
}

/// Handle to a visual element.
///
/// Handles are cheap to clone and all clones refer to the same element.
pub trait VisualElement: Clone + 'static {
    /// Element id, if one is set
    fn id(&self) -> Option<String>;

    /// Add a class (no-op if present)
    fn add_class(&self, class: &str);

    /// Remove a class (no-op if absent)
    fn remove_class(&self, class: &str);

    /// Check class membership
    fn has_class(&self, class: &str) -> bool;

    /// Current classes in insertion order
    fn class_list(&self) -> Vec<String>;

    /// Register a click listener
    fn on_click<F>(&self, listener: F)
    where
        F: Fn(&ClickEvent<Self>) + 'static;

    /// Flip a class, returning whether it is now present
    fn toggle_class(&self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    /// Add or remove a class depending on `present`
    fn set_class(&self, class: &str, present: bool) {
        if present {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }
}

/// A document: a `body` element plus id-based lookup and click dispatch
#[derive(Debug, Clone)]
pub struct Document {
    body: Element,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self {
            body: Element::new("body"),
        }
    }

    /// The document body
    pub fn body(&self) -> &Element {
        &self.body
    }

    /// Create a detached element
    pub fn create_element(&self, tag: &str) -> Element {
        Element::new(tag)
    }

    /// Find an element anywhere in the document
    pub fn get_element_by_id(&self, id: &str) -> Option<Element> {
        self.body.get_element_by_id(id)
    }

    /// Find an element or report which id was missing
    pub fn require(&self, id: &str) -> Result<Element> {
        self.get_element_by_id(id)
            .ok_or_else(|| SequencerError::ElementNotFound(id.to_string()))
    }

    /// Dispatch a click on the element with this id
    pub fn click(&self, id: &str) -> Result<()> {
        self.require(id)?.click();
        Ok(())
    }

    /// Serialize the whole body as indented HTML
    pub fn to_html(&self) -> String {
        self.body.pretty_html()
    }
}
