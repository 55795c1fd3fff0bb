//! Binary min-heap with a reverse index for arbitrary removal.
//!
//! The heap lives in a `Vec`; a `HashMap` records the slot of every element
//! and is updated on each swap. That map gives O(1) `contains` and lets
//! [`IndexedPriorityQueue::remove`] find any element before restoring the
//! heap in O(log N).
//!
//! Elements that compare equal under the comparator come out in an
//! unspecified order. Callers needing a stable order must encode a
//! secondary key in the comparator.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::error::QueueError;

/// Orders two queue elements. The smaller element is served first.
///
/// Any `Fn(&E, &E) -> Ordering` closure is a comparator.
pub trait Comparator<E> {
    /// Compares `left` with `right`.
    fn compare(&self, left: &E, right: &E) -> Ordering;
}

impl<E, F> Comparator<E> for F
where
    F: Fn(&E, &E) -> Ordering,
{
    fn compare(&self, left: &E, right: &E) -> Ordering {
        self(left, right)
    }
}

/// Comparator using the element's [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default)]
pub struct NaturalOrder;

impl<E: Ord> Comparator<E> for NaturalOrder {
    fn compare(&self, left: &E, right: &E) -> Ordering {
        left.cmp(right)
    }
}

/// Min-priority queue supporting membership tests and removal of any
/// element, not just the minimum.
///
/// Elements are unique by equality: pushing an element that is already
/// queued is refused.
///
/// # Examples
/// ```
/// use spanwood_core::IndexedPriorityQueue;
///
/// let mut queue = IndexedPriorityQueue::new(|a: &i32, b: &i32| b.cmp(a));
/// for value in [3, 9, 1] {
///     assert!(queue.push(value));
/// }
/// assert!(!queue.push(9));
/// assert_eq!(queue.top(), Some(&9));
///
/// assert!(queue.remove(&3));
/// assert_eq!(queue.pop(), Ok(9));
/// assert_eq!(queue.pop(), Ok(1));
/// assert!(queue.pop().is_err());
/// ```
#[derive(Clone)]
pub struct IndexedPriorityQueue<E, C = NaturalOrder> {
    comparator: C,
    heap: Vec<E>,
    slots: HashMap<E, usize>,
}

impl<E> IndexedPriorityQueue<E, NaturalOrder>
where
    E: Clone + Eq + Hash + Ord,
{
    /// Creates an empty queue ordered by `E`'s [`Ord`] implementation.
    #[must_use]
    pub fn natural() -> Self {
        Self::new(NaturalOrder)
    }
}

impl<E> Default for IndexedPriorityQueue<E, NaturalOrder>
where
    E: Clone + Eq + Hash + Ord,
{
    fn default() -> Self {
        Self::natural()
    }
}

impl<E, C> IndexedPriorityQueue<E, C>
where
    E: Clone + Eq + Hash,
    C: Comparator<E>,
{
    /// Creates an empty queue ordered by `comparator`.
    #[must_use]
    pub fn new(comparator: C) -> Self {
        Self::with_capacity(comparator, 0)
    }

    /// Creates an empty queue with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(comparator: C, capacity: usize) -> Self {
        Self {
            comparator,
            heap: Vec::with_capacity(capacity),
            slots: HashMap::with_capacity(capacity),
        }
    }

    /// Returns `true` when the queue holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of queued elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Queues `element`. Returns `false`, leaving the queue unchanged, when
    /// an equal element is already queued.
    pub fn push(&mut self, element: E) -> bool {
        if self.slots.contains_key(&element) {
            return false;
        }
        let slot = self.heap.len();
        self.slots.insert(element.clone(), slot);
        self.heap.push(element);
        self.sift_up(slot);
        true
    }

    /// Returns `true` when an element equal to `element` is queued.
    #[must_use]
    pub fn contains(&self, element: &E) -> bool {
        self.slots.contains_key(element)
    }

    /// Returns the minimum element without removing it.
    #[must_use]
    pub fn top(&self) -> Option<&E> {
        self.heap.first()
    }

    /// Removes and returns the minimum element.
    ///
    /// # Errors
    /// Returns [`QueueError::Empty`] when the queue holds no elements.
    pub fn pop(&mut self) -> Result<E, QueueError> {
        self.take(0).ok_or(QueueError::Empty)
    }

    /// Removes `element` from wherever it sits in the heap. Returns `false`
    /// when it is not queued.
    pub fn remove(&mut self, element: &E) -> bool {
        match self.slots.get(element) {
            Some(&slot) => self.take(slot).is_some(),
            None => false,
        }
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.slots.clear();
    }

    /// Moves the last element into `slot`, drops the old occupant and
    /// restores the heap around the moved element.
    fn take(&mut self, slot: usize) -> Option<E> {
        let last = self.heap.len().checked_sub(1)?;
        if slot > last {
            return None;
        }
        self.swap(slot, last);
        let removed = self.heap.pop()?;
        self.slots.remove(&removed);

        if slot < self.heap.len() {
            let settled = self.sift_down(slot);
            if settled == slot {
                self.sift_up(slot);
            }
        }
        Some(removed)
    }

    /// Moves the element at `slot` towards the root while it is smaller than
    /// its parent. Returns its final slot.
    fn sift_up(&mut self, mut slot: usize) -> usize {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.less(slot, parent) {
                self.swap(slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
        slot
    }

    /// Moves the element at `slot` towards the leaves while a child is
    /// smaller. Returns its final slot.
    fn sift_down(&mut self, mut slot: usize) -> usize {
        loop {
            let left = slot.saturating_mul(2).saturating_add(1);
            let right = left.saturating_add(1);
            let mut smallest = slot;

            if left < self.heap.len() && self.less(left, smallest) {
                smallest = left;
            }
            if right < self.heap.len() && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == slot {
                return slot;
            }
            self.swap(slot, smallest);
            slot = smallest;
        }
    }

    fn less(&self, left: usize, right: usize) -> bool {
        match (self.heap.get(left), self.heap.get(right)) {
            (Some(left), Some(right)) => self.comparator.compare(left, right) == Ordering::Less,
            _ => false,
        }
    }

    fn swap(&mut self, left: usize, right: usize) {
        if left == right {
            return;
        }
        self.heap.swap(left, right);
        for slot in [left, right] {
            if let Some(element) = self.heap.get(slot) {
                if let Some(index) = self.slots.get_mut(element) {
                    *index = slot;
                }
            }
        }
    }

    /// Iterates over the queued elements in heap (not priority) order.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.heap.iter()
    }

    /// Checks the heap property and the reverse index. Used by tests.
    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        let ordered = (1..self.heap.len()).all(|slot| !self.less(slot, (slot - 1) / 2));
        let indexed = self.slots.len() == self.heap.len()
            && self
                .heap
                .iter()
                .enumerate()
                .all(|(slot, element)| self.slots.get(element) == Some(&slot));
        ordered && indexed
    }
}

impl<E: fmt::Debug, C> fmt::Debug for IndexedPriorityQueue<E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedPriorityQueue")
            .field("heap", &self.heap)
            .finish_non_exhaustive()
    }
}
