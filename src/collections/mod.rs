//! Collection types.

pub mod min_max_heap;

#[doc(no_inline)]
pub use min_max_heap::MinMaxHeap;

use core::fmt::{self, Display};

/// The error type for taking an extremum out of an empty [`MinMaxHeap`].
///
/// The heap is left unchanged (and still empty) when this error is returned.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct EmptyHeapError {
    kind: EmptyHeapErrorKind,
}

impl EmptyHeapError {
    /// Which end of the heap the failed operation tried to take from.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> EmptyHeapErrorKind {
        self.kind
    }
}

/// Details of the operation that caused an [`EmptyHeapError`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum EmptyHeapErrorKind {
    /// [`MinMaxHeap::pop_min`] was called on an empty heap.
    Min,

    /// [`MinMaxHeap::pop_max`] was called on an empty heap.
    Max,
}

impl From<EmptyHeapErrorKind> for EmptyHeapError {
    #[inline]
    fn from(kind: EmptyHeapErrorKind) -> Self {
        Self { kind }
    }
}

impl Display for EmptyHeapError {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let end = match self.kind {
            EmptyHeapErrorKind::Min => "minimum",
            EmptyHeapErrorKind::Max => "maximum",
        };
        write!(fmt, "cannot take the {end} of an empty heap")
    }
}

#[cfg(any(feature = "error_in_core", feature = "std"))]
impl crate::polyfill::Error for EmptyHeapError {}
