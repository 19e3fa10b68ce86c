//! Singly linked list with a sentinel head node
//!
//! Nodes are pushed at the front only and traversed forward. The list owns
//! every node through `Option<Box<ListNode>>` links, so the whole chain is
//! released when the list is dropped.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::boxed::Box;
use core::fmt;
use core::iter::FusedIterator;

use static_assertions::assert_eq_size;

/// A single list node
///
/// Layout matches the C `struct node { int elem; struct node *next; }`:
/// `Option<Box<_>>` is guaranteed to be a nullable pointer.
#[repr(C)]
#[derive(Debug, Default)]
pub struct ListNode {
    pub elem: i32,
    pub next: Option<Box<ListNode>>,
}

assert_eq_size!(Option<Box<ListNode>>, *const ListNode);
assert_eq_size!(ListNode, [usize; 2]);

impl ListNode {
    /// Create an unlinked node
    pub const fn new(elem: i32) -> Self {
        Self { elem, next: None }
    }
}

/// Singly linked list headed by a sentinel node
pub struct List {
    head: ListNode,
    len: usize,
}

impl List {
    /// Create an empty list holding only the sentinel
    pub const fn new() -> Self {
        Self {
            head: ListNode::new(0),
            len: 0,
        }
    }

    /// Link a new node holding `elem` directly after the sentinel
    pub fn push_front(&mut self, elem: i32) {
        let node = Box::new(ListNode {
            elem,
            next: self.head.next.take(),
        });
        self.head.next = Some(node);
        self.len += 1;
    }

    /// Iterate payloads from the first real node to the last
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.next.as_deref(),
            remaining: self.len,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.next.is_none()
    }

    /// The sentinel node. Its payload carries no meaning.
    pub fn head(&self) -> &ListNode {
        &self.head
    }
}

impl Default for List {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for List {
    // Unlink one node at a time; the default recursive drop would use
    // stack proportional to the list length.
    fn drop(&mut self) {
        let mut cur = self.head.next.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Forward iterator over list payloads
#[derive(Clone)]
pub struct Iter<'a> {
    next: Option<&'a ListNode>,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            node.elem
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
