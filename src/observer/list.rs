// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Ordered collection of observer handles.

use std::rc::Rc;

use super::Observer;

/// Shared handle to an observer
pub type ObserverHandle<C> = Rc<dyn Observer<C>>;

/// An ordered list of observers.
///
/// Insertion order is preserved and duplicates are allowed. Removing an
/// element shifts every later element one slot to the left.
pub struct ObserverList<C> {
    observers: Vec<ObserverHandle<C>>,
}

impl<C> Default for ObserverList<C> {
    fn default() -> Self {
        Self {
            observers: Vec::new(),
        }
    }
}

impl<C> ObserverList<C> {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an observer, returning the new length
    pub fn add(&mut self, observer: ObserverHandle<C>) -> usize {
        self.observers.push(observer);
        self.observers.len()
    }

    /// Get the observer at `index`, or `None` when out of range
    pub fn get(&self, index: usize) -> Option<&ObserverHandle<C>> {
        self.observers.get(index)
    }

    /// Remove the observer at `index`.
    ///
    /// Out-of-range indices leave the list untouched and return `None`.
    pub fn remove_at(&mut self, index: usize) -> Option<ObserverHandle<C>> {
        if index < self.observers.len() {
            Some(self.observers.remove(index))
        } else {
            None
        }
    }

    /// Number of registered observers
    pub fn count(&self) -> usize {
        self.observers.len()
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Find the first index at or after `start` holding this exact observer.
    ///
    /// Comparison is by identity (same allocation), not by value.
    pub fn index_of(&self, observer: &ObserverHandle<C>, start: usize) -> Option<usize> {
        self.observers
            .iter()
            .enumerate()
            .skip(start)
            .find(|(_, candidate)| same_observer(candidate, observer))
            .map(|(index, _)| index)
    }

    /// Clone the current handles so callers can iterate without holding a borrow
    pub fn snapshot(&self) -> Vec<ObserverHandle<C>> {
        self.observers.clone()
    }
}

/// Identity comparison on the data pointer, ignoring vtables
fn same_observer<C>(a: &ObserverHandle<C>, b: &ObserverHandle<C>) -> bool {
    std::ptr::eq(
        Rc::as_ptr(a) as *const (),
        Rc::as_ptr(b) as *const (),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Silent;

    impl Observer<()> for Silent {}

    fn silent() -> ObserverHandle<()> {
        Rc::new(Silent)
    }

    #[test]
    fn test_add_increments_count() {
        let mut list = ObserverList::new();
        assert_eq!(list.count(), 0);
        assert!(list.is_empty());

        for expected in 1..=5 {
            assert_eq!(list.add(silent()), expected);
            assert_eq!(list.count(), expected);
        }
    }

    #[test]
    fn test_get_in_and_out_of_range() {
        let mut list = ObserverList::new();
        let first = silent();
        let second = silent();
        list.add(Rc::clone(&first));
        list.add(Rc::clone(&second));

        assert!(same_observer(list.get(0).unwrap(), &first));
        assert!(same_observer(list.get(1).unwrap(), &second));
        assert!(list.get(2).is_none());
        assert!(list.get(usize::MAX).is_none());
    }

    #[test]
    fn test_index_of_uses_identity() {
        let mut list = ObserverList::new();
        let a = silent();
        let b = silent(); // same type and contents, different allocation
        list.add(Rc::clone(&a));

        assert_eq!(list.index_of(&a, 0), Some(0));
        assert_eq!(list.index_of(&b, 0), None);
    }

    #[test]
    fn test_index_of_respects_start() {
        let mut list = ObserverList::new();
        let a = silent();
        let b = silent();
        list.add(Rc::clone(&a));
        list.add(Rc::clone(&b));
        list.add(Rc::clone(&a));

        assert_eq!(list.index_of(&a, 0), Some(0));
        assert_eq!(list.index_of(&a, 1), Some(2));
        assert_eq!(list.index_of(&a, 3), None);
        assert_eq!(list.index_of(&b, 10), None);
    }

    #[test]
    fn test_remove_at_shifts_left() {
        let mut list = ObserverList::new();
        let handles: Vec<_> = (0..4).map(|_| silent()).collect();
        for handle in &handles {
            list.add(Rc::clone(handle));
        }

        let removed = list.remove_at(1).unwrap();
        assert!(same_observer(&removed, &handles[1]));
        assert_eq!(list.count(), 3);
        assert!(same_observer(list.get(1).unwrap(), &handles[2]));
        assert!(same_observer(list.get(2).unwrap(), &handles[3]));
    }

    #[test]
    fn test_remove_at_out_of_range_is_noop() {
        let mut list = ObserverList::new();
        list.add(silent());

        assert!(list.remove_at(1).is_none());
        assert!(list.remove_at(usize::MAX).is_none());
        assert_eq!(list.count(), 1);
    }
}
