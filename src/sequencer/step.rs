// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Steps: observers that mirror their track's mute/solo state.

use std::rc::Rc;

use tracing::debug;

use super::{Button, NotificationContext};
use crate::dom::{Element, VisualElement, CLASS_ACTIVE, CLASS_MUTE, CLASS_SOLO};
use crate::observer::Observer;

/// A step cell.
///
/// Clicking the cell toggles its `active` class. Track notifications add
/// or remove the `mute` and `solo` classes. The class list is the only
/// state a step has.
pub struct Step<E: VisualElement = Element> {
    element: E,
}

impl<E: VisualElement> Step<E> {
    /// Create a step and attach its click listener to `element`
    pub fn new(element: E) -> Rc<Self> {
        element.on_click(|event| {
            event.target.toggle_class(CLASS_ACTIVE);
        });
        Rc::new(Self { element })
    }

    /// Cell element
    pub fn element(&self) -> &E {
        &self.element
    }

    /// Whether the step is switched on
    pub fn is_active(&self) -> bool {
        self.element.has_class(CLASS_ACTIVE)
    }
}

impl<E: VisualElement> Observer<NotificationContext> for Step<E> {
    fn update(&self, context: &NotificationContext) {
        let class = match context.button {
            Button::Mute => CLASS_MUTE,
            Button::Solo => CLASS_SOLO,
        };
        self.element.set_class(class, context.status);
        debug!(
            step = ?self.element.id(),
            classes = ?self.element.class_list(),
            "step updated"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Element stand-in that only tracks classes and listeners
    #[derive(Clone, Default)]
    struct FakeElement {
        classes: Rc<RefCell<Vec<String>>>,
        listeners: Rc<RefCell<Vec<Rc<dyn Fn(&crate::dom::ClickEvent<FakeElement>)>>>>,
    }

    impl FakeElement {
        fn click(&self) {
            let event = crate::dom::ClickEvent {
                target: self.clone(),
                current_target: self.clone(),
            };
            let listeners = self.listeners.borrow().clone();
            for listener in listeners {
                listener(&event);
            }
        }
    }

    impl VisualElement for FakeElement {
        fn id(&self) -> Option<String> {
            None
        }

        fn add_class(&self, class: &str) {
            if !self.has_class(class) {
                self.classes.borrow_mut().push(class.to_string());
            }
        }

        fn remove_class(&self, class: &str) {
            self.classes.borrow_mut().retain(|c| c != class);
        }

        fn has_class(&self, class: &str) -> bool {
            self.classes.borrow().iter().any(|c| c == class)
        }

        fn class_list(&self) -> Vec<String> {
            self.classes.borrow().clone()
        }

        fn on_click<F>(&self, listener: F)
        where
            F: Fn(&crate::dom::ClickEvent<Self>) + 'static,
        {
            self.listeners.borrow_mut().push(Rc::new(listener));
        }
    }

    #[test]
    fn test_update_mute_and_solo() {
        let element = FakeElement::default();
        let step = Step::new(element.clone());

        step.update(&NotificationContext { button: Button::Mute, status: true });
        assert!(element.has_class(CLASS_MUTE));
        assert!(!element.has_class(CLASS_SOLO));

        step.update(&NotificationContext { button: Button::Solo, status: true });
        assert!(element.has_class(CLASS_SOLO));

        step.update(&NotificationContext { button: Button::Mute, status: false });
        assert!(!element.has_class(CLASS_MUTE));
        assert!(element.has_class(CLASS_SOLO));
    }

    #[test]
    fn test_click_toggles_active_only() {
        let element = FakeElement::default();
        let step = Step::new(element.clone());

        element.click();
        assert!(step.is_active());
        assert_eq!(element.class_list(), vec![CLASS_ACTIVE.to_string()]);

        element.click();
        assert!(!step.is_active());
    }

    #[test]
    fn test_step_on_real_element() {
        let cell = Element::new("div").with_id("kickTrackstep1").with_class("step");
        let step = Step::new(cell.clone());

        cell.click();
        step.update(&NotificationContext { button: Button::Mute, status: true });
        assert_eq!(cell.class_name(), "step active mute");
        assert!(step.element().ptr_eq(&cell));
    }
}
