//! Singly linked list anchored by a sentinel node.
//!
//! Nodes live in an arena owned by the list and are chained by slot index.
//! Slot [`SENTINEL`] never carries a value; its link is the head of the list.
//! `tail` is a cursor to the last live slot and is patched by every mutation
//! that adds or removes the last element.
//!
//! # Front and back
//!
//! The names are inverted relative to `std::collections::VecDeque`:
//! [`SequentialList::front`] returns the **last** element (the tail, where
//! `push_back` lands) and [`SequentialList::back`] returns the **first**
//! element (the head, where `push_front` lands).

use crate::errors::ListError;
use crate::iter::Iter;
use crate::node::{Node, SENTINEL};
use std::fmt;
use tracing::trace;

/// Freed slots tolerated before a removal compacts the arena.
const COMPACT_MIN_FREE: usize = 64;

/// Ordered, mutable sequence of `T` with a single forward link per node.
///
/// [`front`](Self::front) is the **last** element and [`back`](Self::back)
/// is the **first**. Removed nodes are given back: the arena is reset once
/// the list empties and compacted when freed slots outnumber live ones.
pub struct SequentialList<T> {
    nodes: Vec<Node<T>>,
    free: Vec<usize>,
    tail: Option<usize>,
    length: usize,
}

impl<T> Default for SequentialList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SequentialList<T> {
    /// Create an empty list holding only the sentinel.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty list with room for `capacity` elements before the
    /// arena reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity + 1);
        nodes.push(Node::sentinel());
        SequentialList {
            nodes,
            free: Vec::new(),
            tail: None,
            length: 0,
        }
    }

    /// Number of elements, not counting the sentinel.
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Reference to the **last** element, the one most recently placed by
    /// `push_back`.
    ///
    /// Note the inverted naming: this reads the tail, not the head. Use
    /// [`back`](Self::back) for the first element.
    pub fn front(&self) -> Result<&T, ListError> {
        self.tail
            .and_then(|slot| self.nodes[slot].value.as_ref())
            .ok_or(ListError::EmptyList)
    }

    pub fn front_mut(&mut self) -> Result<&mut T, ListError> {
        match self.tail {
            Some(slot) => self.nodes[slot].value.as_mut().ok_or(ListError::EmptyList),
            None => Err(ListError::EmptyList),
        }
    }

    /// Reference to the **first** element (the head).
    ///
    /// Note the inverted naming: this reads the head, not the tail. Use
    /// [`front`](Self::front) for the last element.
    pub fn back(&self) -> Result<&T, ListError> {
        self.nodes[SENTINEL]
            .next
            .and_then(|slot| self.nodes[slot].value.as_ref())
            .ok_or(ListError::EmptyList)
    }

    pub fn back_mut(&mut self) -> Result<&mut T, ListError> {
        match self.nodes[SENTINEL].next {
            Some(slot) => self.nodes[slot].value.as_mut().ok_or(ListError::EmptyList),
            None => Err(ListError::EmptyList),
        }
    }

    /// Element at `index` (0 is the head). Walks the chain, O(index).
    pub fn get_at(&self, index: usize) -> Result<&T, ListError> {
        let slot = self.slot_at(index)?;
        self.nodes[slot]
            .value
            .as_ref()
            .ok_or_else(|| self.out_of_range(index))
    }

    pub fn get_at_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        let slot = self.slot_at(index)?;
        let err = self.out_of_range(index);
        self.nodes[slot].value.as_mut().ok_or(err)
    }

    /// Replace the element at `index`, returning the previous value.
    pub fn set_at(&mut self, index: usize, value: T) -> Result<T, ListError> {
        let current = self.get_at_mut(index)?;
        Ok(std::mem::replace(current, value))
    }

    /// First element, head to tail, matching `pred`.
    pub fn find<P>(&self, mut pred: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|value| pred(*value))
    }

    pub fn find_mut<P>(&mut self, pred: P) -> Option<&mut T>
    where
        P: FnMut(&T) -> bool,
    {
        let slot = self.find_slot(pred)?;
        self.nodes[slot].value.as_mut()
    }

    /// Index of the first element matching `pred`.
    pub fn position<P>(&self, mut pred: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().position(|value| pred(value))
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == value)
    }

    /// Insert `value` as the new head. O(1).
    pub fn push_front(&mut self, value: T) {
        self.link_after(SENTINEL, value);
    }

    /// Insert `value` after the current tail. O(1).
    ///
    /// On an empty list the new node hangs off the sentinel.
    pub fn push_back(&mut self, value: T) {
        let prev = self.tail.unwrap_or(SENTINEL);
        self.link_after(prev, value);
    }

    /// Insert `value` so that it ends up at `index`.
    ///
    /// `index == len()` appends. Anything larger is rejected.
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<(), ListError> {
        if index > self.length {
            return Err(self.out_of_range(index));
        }

        if index == 0 {
            self.push_front(value);
        } else if index == self.length {
            self.push_back(value);
        } else {
            let prev = self.walk(index).ok_or_else(|| self.out_of_range(index))?;
            self.link_after(prev, value);
            trace!("Spliced element in at index {}", index);
        }
        Ok(())
    }

    /// Insert `value` right after the first element matching `pred`.
    ///
    /// Returns `false`, leaving the list untouched, when nothing matches.
    pub fn insert_after<P>(&mut self, pred: P, value: T) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        match self.find_slot(pred) {
            Some(slot) => {
                self.link_after(slot, value);
                trace!("Inserted element after predicate match, length now {}", self.length);
                true
            }
            None => false,
        }
    }

    /// Insert `value` right before the first element matching `pred`.
    ///
    /// Returns `false`, leaving the list untouched, when nothing matches.
    pub fn insert_before<P>(&mut self, pred: P, value: T) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        match self.find_prev_slot(pred) {
            Some(prev) => {
                self.link_after(prev, value);
                trace!("Inserted element before predicate match, length now {}", self.length);
                true
            }
            None => false,
        }
    }

    /// Remove and return the head. O(1).
    pub fn pop_front(&mut self) -> Result<T, ListError> {
        self.unlink_after(SENTINEL).ok_or(ListError::EmptyList)
    }

    /// Remove and return the tail.
    ///
    /// A singly linked chain has no back link, so finding the new tail walks
    /// the whole list.
    pub fn pop_back(&mut self) -> Result<T, ListError> {
        if self.length == 0 {
            return Err(ListError::EmptyList);
        }
        let prev = self.walk(self.length - 1).ok_or(ListError::EmptyList)?;
        self.unlink_after(prev).ok_or(ListError::EmptyList)
    }

    /// Remove and return the element at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        if index >= self.length {
            return Err(self.out_of_range(index));
        }

        if index == 0 {
            return self.pop_front();
        }
        if index == self.length - 1 {
            return self.pop_back();
        }

        let err = self.out_of_range(index);
        let prev = self.walk(index).ok_or(err)?;
        let value = self.unlink_after(prev).ok_or(err)?;
        trace!("Removed element at index {}", index);
        Ok(value)
    }

    /// Remove the first element matching `pred` and hand it back.
    pub fn remove_if<P>(&mut self, pred: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        let prev = self.find_prev_slot(pred)?;
        let value = self.unlink_after(prev);
        trace!("Removed element matching predicate, length now {}", self.length);
        value
    }

    /// Reverse the chain in place. The old head becomes the tail.
    ///
    /// An empty list is reported as [`ListError::EmptyList`] rather than
    /// treated as a no-op.
    pub fn reverse(&mut self) -> Result<(), ListError> {
        if self.length == 0 {
            return Err(ListError::EmptyList);
        }

        let first = self.nodes[SENTINEL].next;
        let mut prev = None;
        let mut cur = first;
        while let Some(slot) = cur {
            cur = self.nodes[slot].next;
            self.nodes[slot].next = prev;
            prev = Some(slot);
        }

        self.nodes[SENTINEL].next = prev;
        self.tail = first;
        trace!("Reversed list of length {}", self.length);
        Ok(())
    }

    /// Drop every element. The sentinel stays.
    pub fn clear(&mut self) {
        let dropped = self.length;
        self.reset_arena();
        self.length = 0;
        trace!("Cleared {} elements", dropped);
    }

    /// Move every element of `other` onto the back of `self`, keeping their
    /// order. `other` is left empty.
    pub fn append(&mut self, other: &mut SequentialList<T>) {
        let moved = other.length;
        self.extend(std::mem::take(other));
        trace!("Appended {} elements, length now {}", moved, self.length);
    }

    /// Iterate head to tail.
    ///
    /// Each call starts again from the head. The iterator borrows the list,
    /// so the list cannot be mutated until it is dropped.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.nodes, self.nodes[SENTINEL].next, self.length)
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Walk the arena and panic if any structural invariant is broken.
    #[cfg(any(test, debug_assertions))]
    #[doc(hidden)]
    pub fn check_invariants(&self) {
        assert!(!self.nodes[SENTINEL].is_live(), "sentinel must not hold a value");

        let head = self.nodes[SENTINEL].next;
        assert_eq!(self.length == 0, head.is_none());
        assert_eq!(self.length == 0, self.tail.is_none());

        let mut seen = vec![false; self.nodes.len()];
        let mut last = None;
        let mut count = 0;
        let mut cur = head;
        while let Some(slot) = cur {
            assert!(!seen[slot], "slot {} reached twice", slot);
            assert!(self.nodes[slot].is_live(), "slot {} in chain is not live", slot);
            seen[slot] = true;
            count += 1;
            last = Some(slot);
            cur = self.nodes[slot].next;
        }
        assert_eq!(count, self.length);
        assert_eq!(last, self.tail);

        for &slot in &self.free {
            assert!(!self.nodes[slot].is_live(), "free slot {} is live", slot);
        }
        assert_eq!(self.free.len() + self.length + 1, self.nodes.len());
        assert!(
            self.free.len() < COMPACT_MIN_FREE || self.free.len() <= self.length,
            "{} free slots kept for {} elements",
            self.free.len(),
            self.length
        );
    }

    fn out_of_range(&self, index: usize) -> ListError {
        ListError::IndexOutOfRange {
            index,
            len: self.length,
        }
    }

    /// Slot reached after `steps` hops from the sentinel.
    fn walk(&self, steps: usize) -> Option<usize> {
        let mut cur = SENTINEL;
        for _ in 0..steps {
            cur = self.nodes[cur].next?;
        }
        Some(cur)
    }

    fn slot_at(&self, index: usize) -> Result<usize, ListError> {
        if index >= self.length {
            return Err(self.out_of_range(index));
        }
        self.walk(index + 1).ok_or_else(|| self.out_of_range(index))
    }

    fn find_slot<P>(&self, mut pred: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        let mut cur = self.nodes[SENTINEL].next;
        while let Some(slot) = cur {
            if self.nodes[slot].value.as_ref().is_some_and(|v| pred(v)) {
                return Some(slot);
            }
            cur = self.nodes[slot].next;
        }
        None
    }

    /// Slot whose successor is the first element matching `pred`.
    fn find_prev_slot<P>(&self, mut pred: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        let mut prev = SENTINEL;
        while let Some(slot) = self.nodes[prev].next {
            if self.nodes[slot].value.as_ref().is_some_and(|v| pred(v)) {
                return Some(prev);
            }
            prev = slot;
        }
        None
    }

    fn alloc(&mut self, value: T, next: Option<usize>) -> usize {
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = Node::new(value, next);
                slot
            }
            None => {
                self.nodes.push(Node::new(value, next));
                self.nodes.len() - 1
            }
        }
    }

    fn link_after(&mut self, prev: usize, value: T) {
        let next = self.nodes[prev].next;
        let slot = self.alloc(value, next);
        self.nodes[prev].next = Some(slot);
        if next.is_none() {
            self.tail = Some(slot);
        }
        self.length += 1;
    }

    fn unlink_after(&mut self, prev: usize) -> Option<T> {
        let slot = self.nodes[prev].next?;
        let next = self.nodes[slot].next.take();
        self.nodes[prev].next = next;
        if self.tail == Some(slot) {
            self.tail = if prev == SENTINEL { None } else { Some(prev) };
        }
        self.length -= 1;
        self.free.push(slot);
        let value = self.nodes[slot].value.take();

        if self.length == 0 {
            self.reset_arena();
        } else if self.free.len() >= COMPACT_MIN_FREE && self.free.len() > self.length {
            self.compact();
        }
        value
    }

    /// Drop every slot but the sentinel and release oversized buffers.
    fn reset_arena(&mut self) {
        self.nodes.truncate(1);
        self.nodes[SENTINEL].next = None;
        self.nodes.shrink_to(COMPACT_MIN_FREE);
        self.free.clear();
        self.free.shrink_to(COMPACT_MIN_FREE);
        self.tail = None;
    }

    /// Rebuild the arena in chain order with no free slots.
    fn compact(&mut self) {
        let freed = self.free.len();
        let mut nodes = Vec::with_capacity(self.length + 1);
        nodes.push(Node::sentinel());

        let mut cur = self.nodes[SENTINEL].next;
        while let Some(slot) = cur {
            cur = self.nodes[slot].next;
            let moved = nodes.len();
            nodes[moved - 1].next = Some(moved);
            nodes.push(Node {
                value: self.nodes[slot].value.take(),
                next: None,
            });
        }

        self.tail = if nodes.len() > 1 {
            Some(nodes.len() - 1)
        } else {
            None
        };
        self.nodes = nodes;
        self.free = Vec::new();
        trace!("Compacted arena, released {} slots", freed);
    }
}

impl<T: Clone> Clone for SequentialList<T> {
    fn clone(&self) -> Self {
        let mut list = SequentialList::with_capacity(self.length);
        list.extend(self.iter().cloned());
        list
    }
}

impl<T: PartialEq> PartialEq for SequentialList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SequentialList<T> {}

impl<T: fmt::Debug> fmt::Debug for SequentialList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for SequentialList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str("]")
    }
}

impl<T> Extend<T> for SequentialList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> std::iter::FromIterator<T> for SequentialList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SequentialList::new();
        list.extend(iter);
        list
    }
}
