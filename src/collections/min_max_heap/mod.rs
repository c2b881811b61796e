//! A double-ended priority queue implemented with a min-max heap.
//!
//! Pushing an item and popping either the least or the greatest item have
//! *O*(log(*n*)) time complexity. Peeking at either extremum is *O*(1).
//! Converting a vector to a min-max heap can be done in-place, and has *O*(*n*)
//! complexity.
//!
//! A min-max heap is a complete binary tree stored level by level in a single
//! vector. Nodes on even levels (the root is on level 0) are no greater than
//! any of their descendants; nodes on odd levels are no less than any of their
//! descendants. The least item is therefore the root, and the greatest is one
//! of the root's two children.
//!
//! # Examples
//!
//! A bounded "keep the best `k`" buffer is a natural use: new candidates are
//! pushed, and once the buffer is over capacity the worst candidate is evicted
//! from the other end.
//!
//! ```
//! use minmax_heap::MinMaxHeap;
//!
//! fn best_k(scores: impl IntoIterator<Item = u32>, k: usize) -> Vec<u32> {
//!     let mut heap: MinMaxHeap<u32> = MinMaxHeap::with_capacity(Default::default(), k + 1);
//!     for score in scores {
//!         heap.push(score);
//!         if heap.len() > k {
//!             // Evict the current worst.
//!             heap.pop_min().unwrap();
//!         }
//!     }
//!     let mut best = heap.into_sorted_vec();
//!     best.reverse();
//!     best
//! }
//!
//! assert_eq!(best_k([40, 7, 93, 12, 61, 5, 88], 3), [93, 88, 61]);
//! ```

use core::fmt;
#[cfg(feature = "trusted_len")]
use core::iter::TrustedLen;
use core::iter::FusedIterator;
use core::mem;
use core::ops::{Deref, DerefMut};

use alloc::slice;
use alloc::vec::{self, Vec};

use super::{EmptyHeapError, EmptyHeapErrorKind};
use crate::{OrdTotalOrder, SortableBy, TotalOrder};

#[cfg(test)]
mod tests;

/// A double-ended priority queue implemented with a min-max heap.
///
/// Items are ordered by the heap's total order `O` (see [`TotalOrder`]), which
/// defaults to the items' own [`Ord`] implementation.
///
/// It is a logic error for an item or the total order to be modified (except via
/// the [`order_mut`] method) in such a way that the item's ordering relative to
/// any other item, as determined by that total order, changes while they are in
/// the heap. This is normally only possible through the [`order_mut_unchecked`]
/// method, interior mutability, global state, I/O, or unsafe code. The behavior
/// resulting from such a logic error is not specified, but will be encapsulated
/// to the `MinMaxHeap` that observed the logic error and not result in undefined
/// behavior. This could include panics or incorrect results.
///
/// # Examples
///
/// ```
/// use minmax_heap::MinMaxHeap;
///
/// let mut heap: MinMaxHeap<i32> = MinMaxHeap::default();
///
/// // There's nothing to look at in an empty heap.
/// assert_eq!(heap.peek_min(), None);
/// assert_eq!(heap.peek_max(), None);
///
/// heap.push(1);
/// heap.push(5);
/// heap.push(2);
///
/// // Both ends are visible.
/// assert_eq!(heap.peek_min(), Some(&1));
/// assert_eq!(heap.peek_max(), Some(&5));
/// assert_eq!(heap.len(), 3);
///
/// // We can iterate over the items in the heap, although they are returned in
/// // an arbitrary order.
/// for x in &heap {
///     println!("{x}");
/// }
///
/// // Items can be taken from either end.
/// assert_eq!(heap.pop_max(), Ok(5));
/// assert_eq!(heap.pop_min(), Ok(1));
/// assert_eq!(heap.pop_min(), Ok(2));
///
/// // Taking from an empty heap is an error, and leaves the heap untouched.
/// assert!(heap.pop_max().is_err());
/// assert!(heap.is_empty());
/// ```
///
/// A `MinMaxHeap` with a known list of items can be initialized from an array:
///
/// ```
/// use minmax_heap::MinMaxHeap;
///
/// let heap: MinMaxHeap<i32> = MinMaxHeap::from([1, 5, 2]);
/// ```
///
/// # Time complexity
///
/// | [push]        | [pop_min]/[pop_max] | [peek_min]/[peek_max] |
/// |---------------|---------------------|-----------------------|
/// | *O*(log(*n*)) | *O*(log(*n*))       | *O*(1)                |
///
/// [`order_mut`]: Self::order_mut
/// [`order_mut_unchecked`]: Self::order_mut_unchecked
/// [push]: MinMaxHeap::push
/// [pop_min]: MinMaxHeap::pop_min
/// [pop_max]: MinMaxHeap::pop_max
/// [peek_min]: MinMaxHeap::peek_min
/// [peek_max]: MinMaxHeap::peek_max
pub struct MinMaxHeap<T, O = OrdTotalOrder<T>> {
    data: Vec<T>,
    order: O,
}

/// Which extremum a level of the tree, or a sift along it, is concerned with.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Polarity {
    Min,
    Max,
}

impl Polarity {
    /// Even levels hold minima, odd levels hold maxima.
    #[inline]
    fn of(pos: usize) -> Self {
        if level(pos) % 2 == 0 {
            Polarity::Min
        } else {
            Polarity::Max
        }
    }

    #[inline]
    fn opposite(self) -> Self {
        match self {
            Polarity::Min => Polarity::Max,
            Polarity::Max => Polarity::Min,
        }
    }

    /// Whether an item comparing as `ord` to another must sit above it.
    #[inline]
    fn precedes(self, ord: core::cmp::Ordering) -> bool {
        match self {
            Polarity::Min => ord.is_lt(),
            Polarity::Max => ord.is_gt(),
        }
    }
}

/// Depth of `pos` in the implicit tree.
#[inline(always)]
fn level(pos: usize) -> u32 {
    usize::BITS - (pos + 1).leading_zeros() - 1
}

/// The root is its own parent.
#[inline(always)]
fn parent(pos: usize) -> usize {
    if pos == 0 {
        0
    } else {
        (pos - 1) >> 1
    }
}

impl<T: Clone, O: Clone> Clone for MinMaxHeap<T, O> {
    fn clone(&self) -> Self {
        MinMaxHeap { data: self.data.clone(), order: self.order.clone() }
    }

    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
        self.order.clone_from(&source.order);
    }
}

impl<T, O: Default> Default for MinMaxHeap<T, O> {
    /// Creates an empty `MinMaxHeap<T, O>`.
    #[inline]
    fn default() -> MinMaxHeap<T, O> {
        MinMaxHeap { data: Vec::new(), order: O::default() }
    }
}

impl<T: fmt::Debug, O> fmt::Debug for MinMaxHeap<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, O> MinMaxHeap<T, O> {
    /// Creates an empty `MinMaxHeap` ordered by `order`.
    ///
    /// # Examples
    ///
    /// ```
    /// use minmax_heap::{MinMaxHeap, OrdTotalOrder};
    /// let mut heap: MinMaxHeap<i32> = MinMaxHeap::new(OrdTotalOrder::default());
    /// heap.push(4);
    /// ```
    #[must_use]
    pub fn new(order: O) -> MinMaxHeap<T, O> {
        MinMaxHeap { data: Vec::new(), order }
    }

    /// Creates an empty `MinMaxHeap` ordered by `order`, with at least the
    /// specified capacity.
    ///
    /// The heap will be able to hold at least `capacity` elements without
    /// reallocating. If `capacity` is 0, the heap will not allocate.
    ///
    /// # Examples
    ///
    /// ```
    /// use minmax_heap::MinMaxHeap;
    /// let mut heap: MinMaxHeap<i32> = MinMaxHeap::with_capacity(Default::default(), 10);
    /// assert!(heap.capacity() >= 10);
    /// heap.push(4);
    /// ```
    #[must_use]
    pub fn with_capacity(order: O, capacity: usize) -> MinMaxHeap<T, O> {
        MinMaxHeap { data: Vec::with_capacity(capacity), order }
    }

    /// Borrow this heap's total order.
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Mutably borrow this heap's total order. It is a logic error for the order
    /// to be modified in a way that changes the relative ordering of any two
    /// items contained in the heap.
    ///
    /// If the order might be modified in such a way, use [`order_mut`] instead,
    /// which restores the heap's invariants once its guard is dropped.
    ///
    /// [`order_mut`]: Self::order_mut
    pub fn order_mut_unchecked(&mut self) -> &mut O {
        &mut self.order
    }

    /// Returns an iterator visiting all values in the underlying vector, in
    /// arbitrary order.
    ///
    /// # Examples
    ///
    /// ```
    /// use minmax_heap::MinMaxHeap;
    /// let heap: MinMaxHeap<i32> = MinMaxHeap::from([1, 2, 3, 4]);
    ///
    /// // Print 1, 2, 3, 4 in arbitrary order
    /// for x in heap.iter() {
    ///     println!("{x}");
    /// }
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { iter: self.data.iter() }
    }

    /// Returns the least item in the heap, or `None` if it is empty.
    ///
    /// # Time complexity
    ///
    /// Cost is *O*(1) in the worst case.
    #[must_use]
    pub fn peek_min(&self) -> Option<&T> {
        self.data.first()
    }

    /// Returns the number of elements the heap can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves the minimum capacity for at least `additional` elements more than
    /// the current length.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows [`usize`].
    pub fn reserve_exact(&mut self, additional: usize) {
        self.data.reserve_exact(additional);
    }

    /// Reserves capacity for at least `additional` elements more than the
    /// current length.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows [`usize`].
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Discards as much additional capacity as possible.
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Returns a slice of all values in the underlying vector, in arbitrary
    /// order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    /// Consumes the `MinMaxHeap` and returns the underlying vector in arbitrary
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use minmax_heap::MinMaxHeap;
    /// let heap: MinMaxHeap<i32> = MinMaxHeap::from([1, 2, 3, 4, 5, 6, 7]);
    /// let mut vec = heap.into_vec();
    ///
    /// vec.sort();
    /// assert_eq!(vec, [1, 2, 3, 4, 5, 6, 7]);
    /// ```
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_vec(self) -> Vec<T> {
        self.into()
    }

    /// Returns the number of items in the heap.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Checks if the heap is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the heap, returning an iterator over the removed elements in
    /// arbitrary order. If the iterator is dropped before being fully consumed,
    /// it drops the remaining elements in arbitrary order.
    ///
    /// # Examples
    ///
    /// ```
    /// use minmax_heap::MinMaxHeap;
    /// let mut heap: MinMaxHeap<i32> = MinMaxHeap::from([1, 3]);
    ///
    /// assert!(!heap.is_empty());
    ///
    /// for x in heap.drain() {
    ///     println!("{x}");
    /// }
    ///
    /// assert!(heap.is_empty());
    /// ```
    #[inline]
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain { iter: self.data.drain(..) }
    }

    /// Drops all items from the heap.
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl<T, O> MinMaxHeap<T, O>
where
    O: TotalOrder,
    T: SortableBy<O>,
{
    /// Creates a `MinMaxHeap` ordered by `order` from the items of `vec`, which
    /// may be in any order.
    ///
    /// The vector is reused as the heap's buffer and reordered in place, in
    /// *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use minmax_heap::{MinMaxHeap, OrdTotalOrder};
    /// let heap = MinMaxHeap::from_vec(OrdTotalOrder::<i32>::default(), vec![7, 3, 9, 1]);
    ///
    /// assert_eq!(heap.peek_min(), Some(&1));
    /// assert_eq!(heap.peek_max(), Some(&9));
    /// ```
    pub fn from_vec(order: O, vec: Vec<T>) -> MinMaxHeap<T, O> {
        let mut heap = MinMaxHeap { data: vec, order };
        heap.rebuild();
        heap
    }

    /// Returns the greatest item in the heap, or `None` if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use minmax_heap::MinMaxHeap;
    /// let mut heap: MinMaxHeap<i32> = MinMaxHeap::default();
    /// assert_eq!(heap.peek_max(), None);
    ///
    /// heap.push(1);
    /// assert_eq!(heap.peek_max(), Some(&1));
    /// heap.push(5);
    /// heap.push(2);
    /// assert_eq!(heap.peek_max(), Some(&5));
    /// ```
    ///
    /// # Time complexity
    ///
    /// Cost is *O*(1) in the worst case.
    #[must_use]
    pub fn peek_max(&self) -> Option<&T> {
        self.max_pos().map(|pos| &self.data[pos])
    }

    /// Pushes an item onto the heap.
    ///
    /// # Examples
    ///
    /// ```
    /// use minmax_heap::MinMaxHeap;
    /// let mut heap: MinMaxHeap<i32> = MinMaxHeap::default();
    /// heap.push(3);
    /// heap.push(5);
    /// heap.push(1);
    ///
    /// assert_eq!(heap.len(), 3);
    /// assert_eq!(heap.peek_min(), Some(&1));
    /// assert_eq!(heap.peek_max(), Some(&5));
    /// ```
    ///
    /// # Time complexity
    ///
    /// The worst case cost of `push` is *O*(log(*n*)), plus an occasional
    /// *O*(*n*) reallocation of the buffer whose cost is amortized over all
    /// pushes.
    pub fn push(&mut self, item: T) {
        let pos = self.len();
        self.data.push(item);
        self.push_up(pos);
    }

    /// Removes the least item from the heap and returns it.
    ///
    /// # Errors
    ///
    /// Returns an [`EmptyHeapError`] of kind [`EmptyHeapErrorKind::Min`] if the
    /// heap is empty, in which case it is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use minmax_heap::{EmptyHeapErrorKind, MinMaxHeap};
    /// let mut heap: MinMaxHeap<i32> = MinMaxHeap::from([1, 3]);
    ///
    /// assert_eq!(heap.pop_min(), Ok(1));
    /// assert_eq!(heap.pop_min(), Ok(3));
    /// assert_eq!(heap.pop_min().unwrap_err().kind(), EmptyHeapErrorKind::Min);
    /// ```
    ///
    /// # Time complexity
    ///
    /// The worst case cost of `pop_min` on a heap containing *n* elements is
    /// *O*(log(*n*)).
    pub fn pop_min(&mut self) -> Result<T, EmptyHeapError> {
        if self.is_empty() {
            return Err(EmptyHeapErrorKind::Min.into());
        }
        let item = self.data.swap_remove(0);
        self.push_down(0);
        Ok(item)
    }

    /// Removes the greatest item from the heap and returns it.
    ///
    /// # Errors
    ///
    /// Returns an [`EmptyHeapError`] of kind [`EmptyHeapErrorKind::Max`] if the
    /// heap is empty, in which case it is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use minmax_heap::{EmptyHeapErrorKind, MinMaxHeap};
    /// let mut heap: MinMaxHeap<i32> = MinMaxHeap::from([1, 3]);
    ///
    /// assert_eq!(heap.pop_max(), Ok(3));
    /// assert_eq!(heap.pop_max(), Ok(1));
    /// assert_eq!(heap.pop_max().unwrap_err().kind(), EmptyHeapErrorKind::Max);
    /// ```
    ///
    /// # Time complexity
    ///
    /// The worst case cost of `pop_max` on a heap containing *n* elements is
    /// *O*(log(*n*)).
    pub fn pop_max(&mut self) -> Result<T, EmptyHeapError> {
        let pos = self.max_pos().ok_or(EmptyHeapErrorKind::Max)?;
        let item = self.data.swap_remove(pos);
        // The vacated slot is a child of the root at most, so repairing every
        // position from it back to the root is a constant number of sifts.
        for i in (0..=pos).rev() {
            self.push_down(i);
        }
        Ok(item)
    }

    /// Consumes the `MinMaxHeap` and returns a vector in sorted (ascending)
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use minmax_heap::MinMaxHeap;
    ///
    /// let mut heap: MinMaxHeap<i32> = MinMaxHeap::from([1, 2, 4, 5, 7]);
    /// heap.push(6);
    /// heap.push(3);
    ///
    /// let vec = heap.into_sorted_vec();
    /// assert_eq!(vec, [1, 2, 3, 4, 5, 6, 7]);
    /// ```
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Ok(item) = self.pop_min() {
            sorted.push(item);
        }
        sorted
    }

    /// Moves all the elements of `other` into `self`, leaving `other` empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use minmax_heap::MinMaxHeap;
    ///
    /// let mut a: MinMaxHeap<i32> = MinMaxHeap::from([-10, 1, 2, 3, 3]);
    /// let mut b: MinMaxHeap<i32> = MinMaxHeap::from([-20, 5, 43]);
    ///
    /// a.append(&mut b);
    ///
    /// assert_eq!(a.into_sorted_vec(), [-20, -10, 1, 2, 3, 3, 5, 43]);
    /// assert!(b.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        if self.len() < other.len() {
            mem::swap(&mut self.data, &mut other.data);
        }
        self.data.append(&mut other.data);
        self.rebuild();
    }

    /// Retains only the elements specified by the predicate.
    ///
    /// In other words, remove all elements `e` for which `f(&e)` returns
    /// `false`. The elements are visited in unsorted (and unspecified) order.
    ///
    /// # Examples
    ///
    /// ```
    /// use minmax_heap::MinMaxHeap;
    ///
    /// let mut heap: MinMaxHeap<i32> = MinMaxHeap::from([-10, -5, 1, 2, 4, 13]);
    ///
    /// heap.retain(|x| x % 2 == 0); // only keep even numbers
    ///
    /// assert_eq!(heap.into_sorted_vec(), [-10, 2, 4])
    /// ```
    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&T) -> bool,
    {
        let len = self.len();
        self.data.retain(f);
        if self.len() != len {
            self.rebuild();
        }
    }

    /// Mutably borrow this heap's total order. When the returned guard is
    /// dropped, the heap is rebuilt under the (possibly changed) order.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::cmp::Ordering;
    /// use minmax_heap::{MinMaxHeap, SortableBy, TotalOrder};
    ///
    /// struct Flippable(bool);
    ///
    /// impl TotalOrder for Flippable {
    ///     type OrderedType = i32;
    ///     fn cmp(&self, this: &i32, that: &i32) -> Ordering {
    ///         if self.0 { that.cmp(this) } else { this.cmp(that) }
    ///     }
    /// }
    ///
    /// impl SortableBy<Flippable> for i32 {
    ///     fn key(&self) -> &i32 {
    ///         self
    ///     }
    /// }
    ///
    /// let mut heap = MinMaxHeap::from_vec(Flippable(false), vec![2, 8, 5]);
    /// assert_eq!(heap.peek_min(), Some(&2));
    ///
    /// heap.order_mut().0 = true;
    /// assert_eq!(heap.peek_min(), Some(&8));
    /// ```
    pub fn order_mut(&mut self) -> OrderMut<'_, T, O> {
        OrderMut(self)
    }

    #[inline]
    fn precedes(&self, polarity: Polarity, a: usize, b: usize) -> bool {
        polarity.precedes(self.order.cmp(self.data[a].key(), self.data[b].key()))
    }

    /// Position of the greatest item: the root of a one-item heap, or else the
    /// greater of the root's children, favouring the first on ties.
    fn max_pos(&self) -> Option<usize> {
        match self.len() {
            0 => None,
            1 => Some(0),
            2 => Some(1),
            _ if self.precedes(Polarity::Max, 2, 1) => Some(2),
            _ => Some(1),
        }
    }

    /// The position among `pos`, its children and its grandchildren holding the
    /// item that `polarity` places highest. Candidates are visited in pre-order
    /// and only a strictly better candidate displaces the current best.
    fn extremum_below(&self, pos: usize, polarity: Polarity) -> usize {
        let end = self.len();
        let mut best = pos;
        for child in [2 * pos + 1, 2 * pos + 2] {
            if child >= end {
                break;
            }
            for candidate in [child, 2 * child + 1, 2 * child + 2] {
                if candidate >= end {
                    break;
                }
                if self.precedes(polarity, candidate, best) {
                    best = candidate;
                }
            }
        }
        best
    }

    /// Move the item at `pos` down the heap until no descendant should sit
    /// above it. Out-of-range positions are ignored.
    fn push_down(&mut self, mut pos: usize) {
        let polarity = Polarity::of(pos);
        while pos < self.len() {
            let best = self.extremum_below(pos, polarity);
            if best == pos {
                return;
            }

            self.data.swap(pos, best);
            if best <= 2 * pos + 2 {
                // Children sit on the opposite polarity, and the item that
                // moved up already dominated everything below `pos`.
                return;
            }

            // `best` is a grandchild, so shares the polarity of `pos`. The item
            // now there may belong above its new parent instead.
            let par = parent(best);
            if self.precedes(polarity.opposite(), best, par) {
                self.data.swap(best, par);
            }
            // Continue from the grandchild: stopping after one step leaves the
            // item above grandchildren of its own that it may not dominate.
            pos = best;
        }
    }

    /// Move the newly placed item at `pos` up the heap.
    fn push_up(&mut self, pos: usize) {
        if pos == 0 {
            return;
        }

        let polarity = Polarity::of(pos);
        let par = parent(pos);
        if self.precedes(polarity.opposite(), pos, par) {
            // The item belongs on its parent's side of the order, so it now
            // only has to be checked against ancestors of that polarity.
            self.data.swap(pos, par);
            self.push_up_by_grandparent(par, polarity.opposite());
        } else {
            self.push_up_by_grandparent(pos, polarity);
        }
    }

    /// Climb through grandparents, which share the polarity of `pos`, while the
    /// item should sit above them.
    fn push_up_by_grandparent(&mut self, mut pos: usize, polarity: Polarity) {
        // Positions 0, 1 and 2 have no grandparent.
        while pos > 2 {
            let grandparent = parent(parent(pos));
            if !self.precedes(polarity, pos, grandparent) {
                return;
            }
            self.data.swap(pos, grandparent);
            pos = grandparent;
        }
    }

    /// Restore the heap invariants over the whole buffer, bottom up.
    fn rebuild(&mut self) {
        let mut n = self.len() / 2;
        while n > 0 {
            n -= 1;
            self.push_down(n);
        }
    }
}

/// Guard returned by [`MinMaxHeap::order_mut`], which rebuilds the heap when
/// dropped.
pub struct OrderMut<'a, T, O>(&'a mut MinMaxHeap<T, O>)
where
    O: TotalOrder,
    T: SortableBy<O>;

impl<T, O> Deref for OrderMut<'_, T, O>
where
    O: TotalOrder,
    T: SortableBy<O>,
{
    type Target = O;
    fn deref(&self) -> &O {
        &self.0.order
    }
}

impl<T, O> DerefMut for OrderMut<'_, T, O>
where
    O: TotalOrder,
    T: SortableBy<O>,
{
    fn deref_mut(&mut self) -> &mut O {
        &mut self.0.order
    }
}

impl<T, O> Drop for OrderMut<'_, T, O>
where
    O: TotalOrder,
    T: SortableBy<O>,
{
    fn drop(&mut self) {
        self.0.rebuild()
    }
}

/// An iterator over the elements of a `MinMaxHeap`.
///
/// This `struct` is created by [`MinMaxHeap::iter()`]. See its
/// documentation for more.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    iter: slice::Iter<'a, T>,
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.iter.as_slice()).finish()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { iter: self.iter.clone() }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    #[inline]
    fn last(self) -> Option<&'a T> {
        self.iter.last()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    #[cfg(feature = "exact_size_is_empty")]
    fn is_empty(&self) -> bool {
        self.iter.is_empty()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

#[cfg(feature = "trusted_len")]
unsafe impl<T> TrustedLen for Iter<'_, T> {}

/// An owning iterator over the elements of a `MinMaxHeap`, in arbitrary order.
///
/// This `struct` is created by [`MinMaxHeap::into_iter()`]
/// (provided by the [`IntoIterator`] trait).
#[derive(Clone)]
pub struct IntoIter<T> {
    iter: vec::IntoIter<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.iter.as_slice()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    #[cfg(feature = "exact_size_is_empty")]
    fn is_empty(&self) -> bool {
        self.iter.is_empty()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

#[cfg(feature = "trusted_len")]
unsafe impl<T> TrustedLen for IntoIter<T> {}

/// A draining iterator over the elements of a `MinMaxHeap`.
///
/// This `struct` is created by [`MinMaxHeap::drain()`]. See its
/// documentation for more.
#[derive(Debug)]
pub struct Drain<'a, T: 'a> {
    iter: vec::Drain<'a, T>,
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> DoubleEndedIterator for Drain<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {
    #[cfg(feature = "exact_size_is_empty")]
    fn is_empty(&self) -> bool {
        self.iter.is_empty()
    }
}

impl<T> FusedIterator for Drain<'_, T> {}

impl<T, O> From<Vec<T>> for MinMaxHeap<T, O>
where
    O: TotalOrder + Default,
    T: SortableBy<O>,
{
    /// Converts a `Vec<T>` into a `MinMaxHeap<T, O>`.
    ///
    /// This conversion happens in-place, and has *O*(*n*) time complexity.
    fn from(vec: Vec<T>) -> MinMaxHeap<T, O> {
        MinMaxHeap::from_vec(O::default(), vec)
    }
}

impl<T, O, const N: usize> From<[T; N]> for MinMaxHeap<T, O>
where
    O: TotalOrder + Default,
    T: SortableBy<O>,
{
    /// ```
    /// use minmax_heap::MinMaxHeap;
    ///
    /// let mut h1: MinMaxHeap<i32> = MinMaxHeap::from([1, 4, 2, 3]);
    /// let mut h2: MinMaxHeap<i32> = [1, 4, 2, 3].into();
    /// while let Some((a, b)) = h1.pop_min().ok().zip(h2.pop_min().ok()) {
    ///     assert_eq!(a, b);
    /// }
    /// ```
    fn from(arr: [T; N]) -> Self {
        Self::from_iter(arr)
    }
}

impl<T, O> From<MinMaxHeap<T, O>> for Vec<T> {
    /// Converts a `MinMaxHeap<T, O>` into a `Vec<T>`.
    ///
    /// This conversion requires no data movement or allocation, and has
    /// constant time complexity.
    fn from(heap: MinMaxHeap<T, O>) -> Vec<T> {
        heap.data
    }
}

impl<T, O> FromIterator<T> for MinMaxHeap<T, O>
where
    O: TotalOrder + Default,
    T: SortableBy<O>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> MinMaxHeap<T, O> {
        MinMaxHeap::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T, O> IntoIterator for MinMaxHeap<T, O> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Creates a consuming iterator, that is, one that moves each value out of
    /// the heap in arbitrary order. The heap cannot be used after calling this.
    fn into_iter(self) -> IntoIter<T> {
        IntoIter { iter: self.data.into_iter() }
    }
}

impl<'a, T, O> IntoIterator for &'a MinMaxHeap<T, O> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, O> Extend<T> for MinMaxHeap<T, O>
where
    O: TotalOrder,
    T: SortableBy<O>,
{
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iterator = iter.into_iter();
        let (lower, _) = iterator.size_hint();

        self.reserve(lower);

        iterator.for_each(move |elem| self.push(elem));
    }
}

impl<'a, T, O> Extend<&'a T> for MinMaxHeap<T, O>
where
    O: TotalOrder,
    T: 'a + SortableBy<O> + Copy,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}
