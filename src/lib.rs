#![doc = include_str!("../README.md")]
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(feature = "error_in_core", feature(error_in_core))]
#![cfg_attr(feature = "exact_size_is_empty", feature(exact_size_is_empty))]
#![cfg_attr(feature = "trusted_len", feature(trusted_len))]
// documentation controls
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![deny(missing_docs)]
#![cfg_attr(
    test,
    allow(
        clippy::bool_assert_comparison,
        clippy::needless_range_loop,
        clippy::redundant_clone,
        clippy::uninlined_format_args,
        clippy::useless_vec,
    )
)]

extern crate alloc;

use core::cmp::Ordering;

mod polyfill;

mod cmp_fn;
pub mod collections;
mod default;

pub use cmp_fn::CmpFn;
pub use collections::min_max_heap::{self, MinMaxHeap};
pub use collections::{EmptyHeapError, EmptyHeapErrorKind};
pub use default::OrdTotalOrder;

/// A runtime-supplied total order over some [`OrderedType`](TotalOrder::OrderedType).
///
/// Implementations must be consistent: repeated comparisons of the same pair must
/// always yield the same [`Ordering`], and the relation must be a total order in the
/// mathematical sense. A [`MinMaxHeap`] whose order violates this contract may return
/// elements in an unspecified order, but it will not exhibit undefined behavior.
///
/// # Examples
///
/// ```
/// use core::cmp::Ordering;
/// use minmax_heap::{MinMaxHeap, SortableBy, TotalOrder};
///
/// // Orders strings by their length alone.
/// struct ByLength;
///
/// impl TotalOrder for ByLength {
///     type OrderedType = str;
///
///     fn cmp(&self, this: &str, that: &str) -> Ordering {
///         this.len().cmp(&that.len())
///     }
/// }
///
/// struct Word(String);
///
/// impl SortableBy<ByLength> for Word {
///     fn key(&self) -> &str {
///         &self.0
///     }
/// }
///
/// let mut heap = MinMaxHeap::new(ByLength);
/// heap.push(Word("forest".to_owned()));
/// heap.push(Word("oak".to_owned()));
/// heap.push(Word("sycamore".to_owned()));
///
/// assert_eq!(heap.pop_max().unwrap().0, "sycamore");
/// assert_eq!(heap.pop_min().unwrap().0, "oak");
/// ```
pub trait TotalOrder {
    /// The type over which this total order is defined.
    type OrderedType: ?Sized;

    /// Compares `this` with `that`.
    fn cmp(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> Ordering;

    /// Whether `this` and `that` are equal under this order.
    fn eq(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.cmp(this, that).is_eq()
    }
    /// Whether `this` and `that` are not equal under this order.
    fn ne(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.cmp(this, that).is_ne()
    }

    /// Whether `this` is greater than or equal to `that`.
    fn ge(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.cmp(this, that).is_ge()
    }
    /// Whether `this` is strictly greater than `that`.
    fn gt(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.cmp(this, that).is_gt()
    }
    /// Whether `this` is less than or equal to `that`.
    fn le(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.cmp(this, that).is_le()
    }
    /// Whether `this` is strictly less than `that`.
    fn lt(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.cmp(this, that).is_lt()
    }
}

/// Types whose values can be compared under the total order `O`, by way of a key
/// that the order understands.
pub trait SortableBy<O: TotalOrder + ?Sized> {
    /// The key of `self` under `O`.
    fn key(&self) -> &O::OrderedType;
}
