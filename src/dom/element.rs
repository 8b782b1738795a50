// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Reference-counted element nodes.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use super::{ClickEvent, VisualElement};

type Listener = Rc<dyn Fn(&ClickEvent<Element>)>;

struct Node {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    text: Option<String>,
    children: Vec<Element>,
    parent: Weak<RefCell<Node>>,
    listeners: Vec<Listener>,
}

/// Handle to a node in the element tree.
///
/// Cloning a handle does not copy the node; all clones see the same
/// classes, children and listeners.
#[derive(Clone)]
pub struct Element {
    node: Rc<RefCell<Node>>,
}

impl Element {
    /// Create a detached element
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            node: Rc::new(RefCell::new(Node {
                tag: tag.into(),
                id: None,
                classes: Vec::new(),
                text: None,
                children: Vec::new(),
                parent: Weak::new(),
                listeners: Vec::new(),
            })),
        }
    }

    /// Set the id
    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.set_id(id);
        self
    }

    /// Set the class attribute from a space-separated list
    pub fn with_class(self, class_name: &str) -> Self {
        self.set_class_name(class_name);
        self
    }

    /// Set the text content
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    /// Tag name
    pub fn tag(&self) -> String {
        self.node.borrow().tag.clone()
    }

    /// Set the id
    pub fn set_id(&self, id: impl Into<String>) {
        self.node.borrow_mut().id = Some(id.into());
    }

    /// Space-separated class attribute
    pub fn class_name(&self) -> String {
        self.node.borrow().classes.join(" ")
    }

    /// Replace all classes from a space-separated list
    pub fn set_class_name(&self, class_name: &str) {
        let mut node = self.node.borrow_mut();
        node.classes.clear();
        for class in class_name.split_whitespace() {
            if !node.classes.iter().any(|c| c == class) {
                node.classes.push(class.to_string());
            }
        }
    }

    /// Text content of this node only
    pub fn text(&self) -> Option<String> {
        self.node.borrow().text.clone()
    }

    /// Set the text content
    pub fn set_text(&self, text: impl Into<String>) {
        self.node.borrow_mut().text = Some(text.into());
    }

    /// Append a child, detaching it from any previous parent
    pub fn append_child(&self, child: &Element) {
        if let Some(old_parent) = child.parent() {
            old_parent
                .node
                .borrow_mut()
                .children
                .retain(|c| !c.ptr_eq(child));
        }
        child.node.borrow_mut().parent = Rc::downgrade(&self.node);
        self.node.borrow_mut().children.push(child.clone());
    }

    /// Child handles in document order
    pub fn children(&self) -> Vec<Element> {
        self.node.borrow().children.clone()
    }

    /// Number of direct children
    pub fn child_count(&self) -> usize {
        self.node.borrow().children.len()
    }

    /// Parent handle, if attached
    pub fn parent(&self) -> Option<Element> {
        self.node
            .borrow()
            .parent
            .upgrade()
            .map(|node| Element { node })
    }

    /// Whether two handles point at the same node
    pub fn ptr_eq(&self, other: &Element) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }

    /// Depth-first search for an id, starting with this element
    pub fn get_element_by_id(&self, id: &str) -> Option<Element> {
        if self.node.borrow().id.as_deref() == Some(id) {
            return Some(self.clone());
        }
        self.children()
            .iter()
            .find_map(|child| child.get_element_by_id(id))
    }

    /// All descendants (not including self) carrying a class, in document order
    pub fn get_elements_by_class_name(&self, class: &str) -> Vec<Element> {
        let mut found = Vec::new();
        for child in self.children() {
            if child.has_class(class) {
                found.push(child.clone());
            }
            found.extend(child.get_elements_by_class_name(class));
        }
        found
    }

    /// Dispatch a click on this element.
    ///
    /// Listeners run on this element first, then on each ancestor up to
    /// the root. Listener lists are copied before they run, so listeners
    /// are free to modify the tree.
    pub fn click(&self) {
        let mut current = Some(self.clone());
        while let Some(element) = current {
            let listeners = element.node.borrow().listeners.clone();
            if !listeners.is_empty() {
                let event = ClickEvent {
                    target: self.clone(),
                    current_target: element.clone(),
                };
                for listener in listeners {
                    listener(&event);
                }
            }
            current = element.parent();
        }
    }

    /// Compact HTML for this element and its subtree
    pub fn outer_html(&self) -> String {
        let mut out = String::new();
        super::html::write_compact(self, &mut out);
        out
    }

    /// Indented HTML for this element and its subtree
    pub fn pretty_html(&self) -> String {
        let mut out = String::new();
        super::html::write_pretty(self, 0, &mut out);
        out
    }

    /// Opening tag with attributes, e.g. `<div id="a" class="b">`
    pub(super) fn open_tag(&self) -> String {
        let node = self.node.borrow();
        let mut tag = format!("<{}", node.tag);
        if let Some(ref id) = node.id {
            tag.push_str(&format!(" id=\"{}\"", super::escape(id)));
        }
        if !node.classes.is_empty() {
            tag.push_str(&format!(
                " class=\"{}\"",
                super::escape(&node.classes.join(" "))
            ));
        }
        tag.push('>');
        tag
    }
}

impl VisualElement for Element {
    fn id(&self) -> Option<String> {
        self.node.borrow().id.clone()
    }

    fn add_class(&self, class: &str) {
        let mut node = self.node.borrow_mut();
        if !node.classes.iter().any(|c| c == class) {
            node.classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.node.borrow_mut().classes.retain(|c| c != class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.node.borrow().classes.iter().any(|c| c == class)
    }

    fn class_list(&self) -> Vec<String> {
        self.node.borrow().classes.clone()
    }

    fn on_click<F>(&self, listener: F)
    where
        F: Fn(&ClickEvent<Self>) + 'static,
    {
        self.node.borrow_mut().listeners.push(Rc::new(listener));
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.node.borrow();
        f.debug_struct("Element")
            .field("tag", &node.tag)
            .field("id", &node.id)
            .field("classes", &node.classes)
            .field("children", &node.children.len())
            .finish()
    }
}
