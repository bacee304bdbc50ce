use alloc::boxed::Box;
use core::fmt;
use core::mem;
use core::ops::{Index, IndexMut};

use crate::buffer::{doubled_capacity, next_capacity, Buffer, DEFAULT_CAPACITY};
use crate::cursor::{Cursor, CursorMut};
use crate::error::{DynArrayError, Result};
use crate::iter::{Iter, IterMut};

/// A growable, contiguous array that owns its backing store.
///
/// The live elements occupy `[0, len)`. The store always has
/// `capacity() >= len()` slots and only grows, by doubling, when an append or
/// insert would overflow it.
pub struct DynArray<T> {
    buffer: Buffer<T>,
    len: usize,
}

impl<T> DynArray<T> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots in the backing store.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// True once the backing store has been moved out with [`DynArray::take`].
    #[must_use]
    pub fn is_released(&self) -> bool {
        self.buffer.is_released()
    }

    fn out_of_range(&self, index: usize) -> DynArrayError {
        DynArrayError::OutOfRange {
            index,
            length: self.len,
        }
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::OutOfRange` if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T> {
        self.as_slice()
            .get(index)
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Returns the element at `index` for modification.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::OutOfRange` if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let error = self.out_of_range(index);
        self.as_mut_slice().get_mut(index).ok_or(error)
    }

    /// Drops the logical content. Capacity and the store are kept; old values
    /// stay in place as inert slots until overwritten.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    #[must_use]
    #[allow(clippy::indexing_slicing)] // len <= capacity
    pub fn as_slice(&self) -> &[T] {
        &self.buffer.slots()[..self.len]
    }

    #[must_use]
    #[allow(clippy::indexing_slicing)] // len <= capacity
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        &mut self.buffer.slots_mut()[..len]
    }

    /// Moves the whole store out into a new array.
    ///
    /// `self` is left released: no store, `len() == 0` and `capacity() == 0`.
    /// It stays usable and starts over at the default capacity on the next
    /// append.
    #[must_use]
    pub fn take(&mut self) -> Self {
        tracing::trace!(
            capacity = self.capacity(),
            length = self.len,
            "moving dynamic array storage"
        );
        Self {
            buffer: self.buffer.take(),
            len: mem::replace(&mut self.len, 0),
        }
    }

    /// Move-assignment: adopts the store of `source`, releasing the one held
    /// before. `source` is left released.
    pub fn assign_from(&mut self, source: &mut Self) {
        tracing::trace!(
            old_capacity = self.capacity(),
            new_capacity = source.capacity(),
            length = source.len,
            "releasing dynamic array storage"
        );
        *self = source.take();
    }

    /// Cursor at the first live element.
    #[must_use]
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), self.identity(), 0)
    }

    /// Cursor one past the last live element.
    #[must_use]
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), self.identity(), self.len)
    }

    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        let owner = self.identity();
        CursorMut::new(self.as_mut_slice(), owner, 0)
    }

    pub fn end_mut(&mut self) -> CursorMut<'_, T> {
        let owner = self.identity();
        let len = self.len;
        CursorMut::new(self.as_mut_slice(), owner, len)
    }

    /// Returns an iterator over the live elements.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        self.begin().until(self.end())
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.as_mut_slice())
    }

    /// Display adapter that renders the diagnostic dump.
    #[must_use]
    pub fn display(&self) -> Dump<'_, T> {
        Dump { array: self }
    }

    /// Address of the array itself, which tells its cursors apart from those
    /// of any other array borrowed at the same time.
    fn identity(&self) -> usize {
        core::ptr::from_ref(self) as usize
    }

    pub(crate) fn into_parts(self) -> (Box<[T]>, usize) {
        (self.buffer.into_boxed(), self.len)
    }
}

impl<T: PartialEq> DynArray<T> {
    /// Cursor at the first element equal to `value`, or `end()` if there is none.
    #[must_use]
    pub fn find(&self, value: &T) -> Cursor<'_, T> {
        let position = self.position_of(value);
        Cursor::new(self.as_slice(), self.identity(), position)
    }

    pub fn find_mut(&mut self, value: &T) -> CursorMut<'_, T> {
        let position = self.position_of(value);
        let owner = self.identity();
        CursorMut::new(self.as_mut_slice(), owner, position)
    }

    fn position_of(&self, value: &T) -> usize {
        self.as_slice()
            .iter()
            .position(|item| item == value)
            .unwrap_or(self.len)
    }
}

impl<T: Default> DynArray<T> {
    /// Creates an empty array with `DEFAULT_CAPACITY` slots.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty array with `base` slots. A base of zero is treated as one.
    #[must_use]
    pub fn with_base_capacity(base: usize) -> Self {
        Self::fitting(base, 0)
    }

    /// Overwrites every live element with `T::default()`. Length and
    /// capacity are unchanged.
    pub fn reset_default(&mut self) {
        self.as_mut_slice().fill_with(T::default);
    }

    /// Creates an array of `len` default values.
    #[must_use]
    pub fn with_len(len: usize) -> Self {
        let mut array = Self::fitting(DEFAULT_CAPACITY, len);
        array.len = len;
        array
    }

    /// Empty array whose capacity is `base` doubled until it fits `len`.
    fn fitting(base: usize, len: usize) -> Self {
        Self {
            buffer: Buffer::with_capacity(doubled_capacity(base, len)),
            len: 0,
        }
    }

    fn grow_for_one_more(&mut self) {
        let capacity = self.capacity();
        if self.len + 1 > capacity {
            self.buffer.reallocate(self.len, next_capacity(capacity));
        }
    }

    /// Appends `value` after the last live element, doubling the capacity
    /// first if the store is full.
    #[allow(clippy::indexing_slicing)] // grow_for_one_more guarantees a free slot
    pub fn push_back(&mut self, value: T) {
        self.grow_for_one_more();
        let len = self.len;
        self.buffer.slots_mut()[len] = value;
        self.len += 1;
    }

    /// Inserts `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::OutOfRange` if `index > len()`. The array is
    /// left untouched in that case.
    #[allow(clippy::indexing_slicing)] // index <= len < capacity after growing
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len {
            return Err(self.out_of_range(index));
        }

        self.grow_for_one_more();
        let len = self.len;
        let slots = self.buffer.slots_mut();
        slots[len] = value;
        slots[index..=len].rotate_right(1);
        self.len += 1;

        Ok(())
    }

    /// Removes and returns the element at `index`, shifting the following
    /// elements one slot left. Capacity is not reduced.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::OutOfRange` if `index >= len()`.
    #[allow(clippy::indexing_slicing)] // index < len <= capacity
    pub fn erase(&mut self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(self.out_of_range(index));
        }

        let len = self.len;
        let slots = self.buffer.slots_mut();
        slots[index..len].rotate_left(1);
        let removed = mem::take(&mut slots[len - 1]);
        self.len -= 1;

        Ok(removed)
    }
}

impl<T: Clone> DynArray<T> {
    /// Overwrites every live element with `value`. Length and capacity are unchanged.
    pub fn reset(&mut self, value: T) {
        self.as_mut_slice().fill(value);
    }
}

impl<T: Clone + Default> DynArray<T> {
    /// Creates an array of `len` copies of `value`.
    #[must_use]
    pub fn with_len_value(len: usize, value: T) -> Self {
        Self::with_len_value_in_base(len, value, DEFAULT_CAPACITY)
    }

    /// Like [`DynArray::with_len_value`], but doubling starts from `base`
    /// instead of `DEFAULT_CAPACITY`.
    #[must_use]
    pub fn with_len_value_in_base(len: usize, value: T, base: usize) -> Self {
        let mut array = Self::fitting(base, len);
        array.len = len;
        array.reset(value);
        array
    }

    /// Creates an array holding copies of `items` in order.
    #[must_use]
    pub fn from_slice(items: &[T]) -> Self {
        let mut array = Self::fitting(DEFAULT_CAPACITY, items.len());
        array.len = items.len();
        array.as_mut_slice().clone_from_slice(items);
        array
    }
}

impl<T: fmt::Display> DynArray<T> {
    /// Writes the length, capacity and live elements to `out`.
    ///
    /// # Errors
    ///
    /// Propagates any error reported by `out`.
    pub fn dump<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        write!(out, "{}", self.display())
    }

    /// Prints the diagnostic dump to stdout.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        std::print!("{}", self.display());
    }
}

/// Diagnostic rendering of a `DynArray`, created by [`DynArray::display`].
pub struct Dump<'a, T> {
    array: &'a DynArray<T>,
}

impl<T: fmt::Display> fmt::Display for Dump<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Vector size: {}", self.array.len())?;
        writeln!(f, "Vector capacity: {}", self.array.capacity())?;
        f.write_str("{ ")?;
        for item in self.array {
            write!(f, "{item} ")?;
        }
        writeln!(f, "}}")
    }
}

impl<T: Clone> Clone for DynArray<T> {
    /// Deep copy of the live elements. The copy has no spare capacity:
    /// `capacity() == len()`.
    fn clone(&self) -> Self {
        tracing::trace!(length = self.len, "copying dynamic array");
        Self {
            buffer: Buffer::copy_exact(self.as_slice()),
            len: self.len,
        }
    }
}

impl<T: Default> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Index<usize> for DynArray<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len()`.
    fn index(&self, index: usize) -> &T {
        match self.at(index) {
            Ok(item) => item,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T> IndexMut<usize> for DynArray<T> {
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    fn index_mut(&mut self, index: usize) -> &mut T {
        let length = self.len;
        match self.as_mut_slice().get_mut(index) {
            Some(item) => item,
            None => panic!("{}", DynArrayError::OutOfRange { index, length }),
        }
    }
}

impl<T, U> PartialEq<DynArray<U>> for DynArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &DynArray<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynArray<T> {}

impl<T, U> PartialEq<[U]> for DynArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U> PartialEq<&[U]> for DynArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for DynArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T> AsRef<[T]> for DynArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for DynArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Default, const N: usize> From<[T; N]> for DynArray<T> {
    fn from(items: [T; N]) -> Self {
        let mut array = Self::fitting(DEFAULT_CAPACITY, N);
        for item in items {
            array.push_back(item);
        }
        array
    }
}

impl<T: Clone + Default> From<&[T]> for DynArray<T> {
    fn from(items: &[T]) -> Self {
        Self::from_slice(items)
    }
}

impl<T: Default> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T: Default> Extend<T> for DynArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}
