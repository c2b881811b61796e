use crate::{SortableBy, TotalOrder};
use core::{cmp::Ordering, fmt, marker::PhantomData};

/// A total order over `T` defined by a comparison function.
///
/// The function must be consistent (see [`TotalOrder`]); it is called repeatedly
/// with the same pairs of elements over the lifetime of a collection.
///
/// # Examples
///
/// ```
/// use minmax_heap::{CmpFn, MinMaxHeap};
///
/// // A descending order turns `pop_min` into "pop greatest".
/// let descending = CmpFn::new(|a: &u32, b: &u32| b.cmp(a));
/// let mut heap = MinMaxHeap::from_vec(descending, vec![3, 9, 1]);
///
/// assert_eq!(heap.pop_min(), Ok(9));
/// assert_eq!(heap.pop_max(), Ok(1));
/// ```
pub struct CmpFn<T: ?Sized, F> {
    cmp: F,
    marker: PhantomData<fn(&T)>,
}

impl<T: ?Sized, F> CmpFn<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Creates a total order that compares with `cmp`.
    pub fn new(cmp: F) -> Self {
        CmpFn { cmp, marker: PhantomData }
    }
}

impl<T: ?Sized, F> CmpFn<T, F> {
    /// Returns the wrapped comparison function.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::cmp::Ordering;
    /// use minmax_heap::CmpFn;
    ///
    /// let order = CmpFn::new(|a: &i32, b: &i32| b.cmp(a));
    /// let cmp = order.into_inner();
    /// assert_eq!(cmp(&1, &2), Ordering::Greater);
    /// ```
    pub fn into_inner(self) -> F {
        self.cmp
    }
}

impl<T: ?Sized, F: Clone> Clone for CmpFn<T, F> {
    fn clone(&self) -> Self {
        CmpFn { cmp: self.cmp.clone(), marker: PhantomData }
    }
}

impl<T: ?Sized, F: Copy> Copy for CmpFn<T, F> {}

impl<T: ?Sized, F> fmt::Debug for CmpFn<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CmpFn").finish_non_exhaustive()
    }
}

impl<T: ?Sized, F> TotalOrder for CmpFn<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    type OrderedType = T;

    fn cmp(&self, this: &T, that: &T) -> Ordering {
        (self.cmp)(this, that)
    }
}

impl<T: ?Sized, F> SortableBy<CmpFn<T, F>> for T
where
    F: Fn(&T, &T) -> Ordering,
{
    fn key(&self) -> &T {
        self
    }
}
