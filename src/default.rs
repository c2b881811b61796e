//! The default total order, under which a [`MinMaxHeap`] compares its elements by
//! their [`Ord`] implementation.
//!
//! [`MinMaxHeap`]: crate::MinMaxHeap

use crate::{SortableBy, TotalOrder};
use core::{borrow::Borrow, cmp::Ordering, fmt, marker::PhantomData};

/// A zero-sized total order that delegates to the [`Ord`] implementation
/// of its type parameter `T`.
///
/// Any type that borrows as `T` is sortable by this order, so a heap of
/// [`String`](alloc::string::String) may use `OrdTotalOrder<str>`.
pub struct OrdTotalOrder<T: ?Sized + Ord>(PhantomData<fn(&T)>);

impl<T: ?Sized + Ord> Default for OrdTotalOrder<T> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<T: ?Sized + Ord> Clone for OrdTotalOrder<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized + Ord> Copy for OrdTotalOrder<T> {}

impl<T: ?Sized + Ord> fmt::Debug for OrdTotalOrder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OrdTotalOrder")
    }
}

impl<T: ?Sized + Ord> TotalOrder for OrdTotalOrder<T> {
    type OrderedType = T;

    fn cmp(&self, this: &T, that: &T) -> Ordering {
        this.cmp(that)
    }

    // Overridden so that comparisons go through `T`'s [`PartialEq`] and
    // [`PartialOrd`] directly rather than through its [`Ord`].

    fn eq(&self, this: &T, that: &T) -> bool {
        this == that
    }
    fn ne(&self, this: &T, that: &T) -> bool {
        this != that
    }

    fn ge(&self, this: &T, that: &T) -> bool {
        this >= that
    }
    fn gt(&self, this: &T, that: &T) -> bool {
        this > that
    }
    fn le(&self, this: &T, that: &T) -> bool {
        this <= that
    }
    fn lt(&self, this: &T, that: &T) -> bool {
        this < that
    }
}

impl<T: ?Sized + Ord, K: ?Sized + Borrow<T>> SortableBy<OrdTotalOrder<T>> for K {
    fn key(&self) -> &T {
        self.borrow()
    }
}
