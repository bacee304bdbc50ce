//! Random-access positions over the live range of a `DynArray`.
//!
//! A cursor is an index paired with a borrow of the live elements. Positions
//! run from `0` (the `begin()` cursor) to `len` (the `end()` cursor, one past
//! the last live element). Because a cursor borrows the array, nothing can
//! reallocate or reshuffle the storage while it is alive; operations that
//! would invalidate it simply do not compile until the cursor is gone.
//!
//! Cursors also record the address of the array they came from. Two arrays
//! that are borrowed at the same time never share an address, while their
//! element slices can (every empty store, and every store of a zero-sized
//! type, starts at the same dangling address).

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use crate::iter::Iter;

/// Read-only cursor into a `DynArray`.
pub struct Cursor<'a, T> {
    pub(crate) items: &'a [T],
    pub(crate) owner: usize,
    pub(crate) position: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(items: &'a [T], owner: usize, position: usize) -> Self {
        debug_assert!(position <= items.len());
        Self {
            items,
            owner,
            position,
        }
    }

    /// Index of the element this cursor points at.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// True for the end-of-range cursor.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.position == self.items.len()
    }

    /// The element under the cursor, or `None` at the end of the range.
    #[must_use]
    pub fn get(&self) -> Option<&'a T> {
        self.items.get(self.position)
    }

    /// Moves one element forward.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is already at the end of the range.
    pub fn advance(&mut self) {
        *self += 1;
    }

    /// Moves one element back.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is already at the start of the range.
    pub fn retreat(&mut self) {
        *self -= 1;
    }

    /// Cursor `delta` elements away, or `None` if that leaves `[0, len]`.
    #[must_use]
    pub fn checked_offset(self, delta: isize) -> Option<Self> {
        let position = offset_position(self.position, delta, self.items.len())?;
        Some(Self {
            items: self.items,
            owner: self.owner,
            position,
        })
    }

    /// Signed number of steps from `self` to `other`.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn distance(&self, other: &Self) -> isize {
        other.position as isize - self.position as isize
    }

    /// Iterates the elements in `[self, end)`.
    ///
    /// # Panics
    ///
    /// Panics if `end` belongs to another array or lies before `self`.
    #[must_use]
    pub fn until(self, end: Self) -> Iter<'a, T> {
        Iter::new(self, end)
    }
}

pub(crate) fn offset_position(position: usize, delta: isize, len: usize) -> Option<usize> {
    position
        .checked_add_signed(delta)
        .filter(|moved| *moved <= len)
}

fn moved_or_panic(position: Option<usize>) -> usize {
    match position {
        Some(position) => position,
        None => panic!("cursor moved outside of the live range"),
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .field("len", &self.items.len())
            .finish()
    }
}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && self.position == other.position
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> PartialOrd for Cursor<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.owner == other.owner {
            Some(self.position.cmp(&other.position))
        } else {
            None
        }
    }
}

impl<T> AddAssign<usize> for Cursor<'_, T> {
    fn add_assign(&mut self, rhs: usize) {
        let len = self.items.len();
        self.position = moved_or_panic(
            self.position
                .checked_add(rhs)
                .filter(|moved| *moved <= len),
        );
    }
}

impl<T> SubAssign<usize> for Cursor<'_, T> {
    fn sub_assign(&mut self, rhs: usize) {
        self.position = moved_or_panic(self.position.checked_sub(rhs));
    }
}

impl<T> Add<usize> for Cursor<'_, T> {
    type Output = Self;

    fn add(mut self, rhs: usize) -> Self {
        self += rhs;
        self
    }
}

impl<T> Sub<usize> for Cursor<'_, T> {
    type Output = Self;

    fn sub(mut self, rhs: usize) -> Self {
        self -= rhs;
        self
    }
}

/// Cursor that can also modify the element it points at.
pub struct CursorMut<'a, T> {
    items: &'a mut [T],
    owner: usize,
    position: usize,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(items: &'a mut [T], owner: usize, position: usize) -> Self {
        debug_assert!(position <= items.len());
        Self {
            items,
            owner,
            position,
        }
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn is_end(&self) -> bool {
        self.position == self.items.len()
    }

    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.items.get(self.position)
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.items.get_mut(self.position)
    }

    /// Consumes the cursor, keeping the mutable borrow of its element.
    #[must_use]
    pub fn into_mut(self) -> Option<&'a mut T> {
        let Self {
            items, position, ..
        } = self;
        items.get_mut(position)
    }

    /// Read-only view at the same position.
    #[must_use]
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(&*self.items, self.owner, self.position)
    }

    /// Moves one element forward.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is already at the end of the range.
    pub fn advance(&mut self) {
        *self += 1;
    }

    /// Moves one element back.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is already at the start of the range.
    pub fn retreat(&mut self) {
        *self -= 1;
    }

    /// Moves by `delta` elements. Returns `false` and stays put if that
    /// would leave `[0, len]`.
    pub fn seek(&mut self, delta: isize) -> bool {
        match offset_position(self.position, delta, self.items.len()) {
            Some(position) => {
                self.position = position;
                true
            }
            None => false,
        }
    }
}

impl<T> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("position", &self.position)
            .field("len", &self.items.len())
            .finish()
    }
}

impl<T> AddAssign<usize> for CursorMut<'_, T> {
    fn add_assign(&mut self, rhs: usize) {
        let len = self.items.len();
        self.position = moved_or_panic(
            self.position
                .checked_add(rhs)
                .filter(|moved| *moved <= len),
        );
    }
}

impl<T> SubAssign<usize> for CursorMut<'_, T> {
    fn sub_assign(&mut self, rhs: usize) {
        self.position = moved_or_panic(self.position.checked_sub(rhs));
    }
}

impl<T> Add<usize> for CursorMut<'_, T> {
    type Output = Self;

    fn add(mut self, rhs: usize) -> Self {
        self += rhs;
        self
    }
}

impl<T> Sub<usize> for CursorMut<'_, T> {
    type Output = Self;

    fn sub(mut self, rhs: usize) -> Self {
        self -= rhs;
        self
    }
}
