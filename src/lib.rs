#![no_std]

//! `DynArray`: a growable, contiguous array with a predictable doubling growth policy.
//!
//! `DynArray<T>` owns a single backing store of `capacity()` slots. The first
//! `len()` slots hold the live elements; the rest are allocated but inert. All
//! positional operations are bounds-checked and report
//! [`DynArrayError::OutOfRange`] instead of clamping.
//!
//! # Capacity Policy
//!
//! - A new array starts with [`DEFAULT_CAPACITY`] (32) slots.
//! - Sized constructors start from 32 (or an explicit base) and double until
//!   the requested length fits.
//! - `push_back()` and `insert()` double the capacity when the store is full.
//! - Nothing ever shrinks the store. A copy (`clone()`) is the one exception
//!   to the doubling rule: it is sized exactly to the source length.
//!
//! ```
//! # use dynarray::DynArray;
//! let mut array = DynArray::new();
//! for i in 0..33 {
//!     array.push_back(i);
//! }
//! assert_eq!(array.len(), 33);
//! assert_eq!(array.capacity(), 64);
//! assert_eq!(array.at(32), Ok(&32));
//! assert!(array.at(33).is_err());
//! ```
//!
//! ## Time Complexity
//! - `push_back()`: amortized O(1)
//! - `at()`, `at_mut()`, indexing: O(1)
//! - `insert()`, `erase()`: O(len - pos)
//! - `find()`: O(len)
//! - `clear()`: O(1), old values stay in the store as inert slots
//!
//! # Copy and Move
//!
//! `clone()` is a deep copy. [`DynArray::take`] moves the store out and
//! leaves the source released, with no store and zero length and capacity:
//!
//! ```
//! # use dynarray::dynarray;
//! let mut source = dynarray![1, 2, 3];
//! let copy = source.clone();
//! let moved = source.take();
//!
//! assert_eq!(copy.capacity(), 3);
//! assert_eq!(moved, [1, 2, 3]);
//! assert_eq!((source.len(), source.capacity()), (0, 0));
//! ```
//!
//! # Cursors
//!
//! `begin()`, `end()` and `find()` return [`Cursor`]s: random-access positions
//! over the live range. A cursor borrows the array, so it cannot outlive a
//! reallocation or reshuffle.
//!
//! ```
//! # use dynarray::dynarray;
//! let array = dynarray![1, 2, 3, 4, 5];
//! assert_eq!(array.find(&4), array.begin() + 3);
//! assert_eq!(array.find(&7), array.end());
//!
//! let middle: Vec<_> = (array.begin() + 1).until(array.end() - 1).collect();
//! assert_eq!(middle, [&2, &3, &4]);
//! ```
//!
//! # Diagnostics
//!
//! ```
//! # use dynarray::dynarray;
//! let mut out = String::new();
//! dynarray![1, 2, 3].dump(&mut out).unwrap();
//! assert_eq!(out, "Vector size: 3\nVector capacity: 32\n{ 1 2 3 }\n");
//! ```
//!
//! Backing-store reallocations and moves are reported as `tracing` events at
//! the `TRACE` level.
//!
//! ## `no_std` Compatibility
//!
//! The crate only needs `core` and `alloc`. Enable the `std` feature for
//! `DynArray::print()` and `std` support in the error type:
//! ```toml
//! [dependencies]
//! dynarray = { version = "0.1", features = ["std"] }
//! ```

extern crate alloc;
#[cfg(any(feature = "std", test))]
extern crate std;

mod buffer;
mod core;
mod cursor;
mod error;
mod iter;

// Re-export public types and traits
pub use buffer::DEFAULT_CAPACITY;
pub use crate::core::{DynArray, Dump};
pub use cursor::{Cursor, CursorMut};
pub use error::{DynArrayError, Result};
pub use iter::{IntoIter, Iter, IterMut};

/// Creates a [`DynArray`] from a literal sequence.
///
/// - `dynarray![]` is an empty array.
/// - `dynarray![a, b, c]` holds the listed values in order.
/// - `dynarray![value; n]` holds `n` copies of `value`.
///
/// ```
/// # use dynarray::dynarray;
/// let array = dynarray![1, 2, 3];
/// assert_eq!(array, [1, 2, 3]);
///
/// let zeros = dynarray![0u8; 40];
/// assert_eq!(zeros.len(), 40);
/// assert_eq!(zeros.capacity(), 64);
/// ```
#[macro_export]
macro_rules! dynarray {
    () => {
        $crate::DynArray::new()
    };
    ($value:expr; $len:expr) => {
        $crate::DynArray::with_len_value($len, $value)
    };
    ($($item:expr),+ $(,)?) => {
        $crate::DynArray::from([$($item),+])
    };
}
