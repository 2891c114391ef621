#![forbid(unsafe_code)]

//! Retained element tree.
//!
//! The host owns a container element; a control grafts its chrome into it
//! and moves long-lived editor surfaces between a detached and a mounted
//! position. Nodes are never re-created on a swap, so anything keyed to
//! node identity (focus, selection, composition) survives.
//!
//! [`Element`] is a cheap clonable handle: clones refer to the same node,
//! and identity is pointer identity ([`Element::same_node`]). The tree is
//! single-threaded by construction, matching the host's UI loop.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// A handle to a retained tree node.
#[derive(Clone)]
pub struct Element {
    inner: Rc<RefCell<Node>>,
}

struct Node {
    tag: &'static str,
    class: String,
    children: Vec<Element>,
    parent: Weak<RefCell<Node>>,
}

impl Element {
    /// Create a new detached element with the given tag.
    #[must_use]
    pub fn new(tag: &'static str) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Node {
                tag,
                class: String::new(),
                children: Vec::new(),
                parent: Weak::new(),
            })),
        }
    }

    /// Set the class string (builder).
    #[must_use]
    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.inner.borrow_mut().class = class.into();
        self
    }

    /// The element's tag.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        self.inner.borrow().tag
    }

    /// The element's class string (cloned out of the node).
    #[must_use]
    pub fn class(&self) -> String {
        self.inner.borrow().class.clone()
    }

    /// True if both handles refer to the same node.
    #[must_use]
    pub fn same_node(&self, other: &Element) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Append `child` as the last child, detaching it from any previous
    /// parent first. Appending an element to itself is a no-op.
    pub fn append_child(&self, child: &Element) {
        if self.same_node(child) {
            return;
        }
        child.detach();
        child.inner.borrow_mut().parent = Rc::downgrade(&self.inner);
        self.inner.borrow_mut().children.push(child.clone());
        #[cfg(feature = "tracing")]
        tracing::trace!(parent = self.tag(), child = child.tag(), "element.mount");
    }

    /// Replace all children with exactly `child`.
    ///
    /// This is a full replace: afterwards the element has one child, and
    /// every previous child is detached.
    pub fn replace_children(&self, child: &Element) {
        if self.same_node(child) {
            return;
        }
        let old = std::mem::take(&mut self.inner.borrow_mut().children);
        for c in &old {
            c.inner.borrow_mut().parent = Weak::new();
        }
        self.append_child(child);
    }

    /// Detach this element from its parent. No-op when already detached.
    pub fn detach(&self) {
        let Some(parent) = self.parent() else {
            return;
        };
        parent
            .inner
            .borrow_mut()
            .children
            .retain(|c| !c.same_node(self));
        self.inner.borrow_mut().parent = Weak::new();
        #[cfg(feature = "tracing")]
        tracing::trace!(parent = parent.tag(), child = self.tag(), "element.detach");
    }

    /// The parent element, if attached.
    #[must_use]
    pub fn parent(&self) -> Option<Element> {
        self.inner
            .borrow()
            .parent
            .upgrade()
            .map(|inner| Element { inner })
    }

    /// True if the element currently has a parent.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.parent().is_some()
    }

    /// Number of children.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.inner.borrow().children.len()
    }

    /// The child at `index`, if any.
    #[must_use]
    pub fn child(&self, index: usize) -> Option<Element> {
        self.inner.borrow().children.get(index).cloned()
    }

    /// True if `other` is a direct child of this element.
    #[must_use]
    pub fn contains(&self, other: &Element) -> bool {
        self.inner
            .borrow()
            .children
            .iter()
            .any(|c| c.same_node(other))
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.inner.borrow();
        f.debug_struct("Element")
            .field("tag", &node.tag)
            .field("class", &node.class)
            .field("children", &node.children.len())
            .finish()
    }
}
