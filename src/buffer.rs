use alloc::boxed::Box;
use core::iter;
use core::mem;

/// Capacity of a freshly created array, and the base the doubling rule starts from.
pub const DEFAULT_CAPACITY: usize = 32;

/// Smallest capacity reachable by doubling `base` that fits `length` slots.
///
/// A `base` of zero is treated as one, otherwise doubling would never terminate.
pub(crate) fn doubled_capacity(base: usize, length: usize) -> usize {
    let mut capacity = base.max(1);
    while capacity < length {
        match capacity.checked_mul(2) {
            Some(next) => capacity = next,
            None => return length,
        }
    }
    capacity
}

/// Capacity to grow to when the current store is full.
///
/// A released store has no capacity to double and starts over at `DEFAULT_CAPACITY`.
pub(crate) fn next_capacity(current: usize) -> usize {
    if current == 0 {
        DEFAULT_CAPACITY
    } else {
        current.saturating_mul(2)
    }
}

/// Backing store of a `DynArray`.
///
/// Every slot of an owned store holds a value: the live prefix belongs to the
/// array, the rest are inert fillers that are overwritten before they are read.
/// A moved-from array holds the `Released` variant, which owns nothing.
pub(crate) enum Buffer<T> {
    Owned(Box<[T]>),
    Released,
}

impl<T> Buffer<T> {
    pub(crate) fn capacity(&self) -> usize {
        match self {
            Buffer::Owned(slots) => slots.len(),
            Buffer::Released => 0,
        }
    }

    pub(crate) fn is_released(&self) -> bool {
        matches!(self, Buffer::Released)
    }

    pub(crate) fn slots(&self) -> &[T] {
        match self {
            Buffer::Owned(slots) => slots,
            Buffer::Released => &[],
        }
    }

    pub(crate) fn slots_mut(&mut self) -> &mut [T] {
        match self {
            Buffer::Owned(slots) => slots,
            Buffer::Released => &mut [],
        }
    }

    /// Hands the store over to the caller, leaving `Released` behind.
    pub(crate) fn take(&mut self) -> Self {
        mem::replace(self, Buffer::Released)
    }

    pub(crate) fn into_boxed(self) -> Box<[T]> {
        match self {
            Buffer::Owned(slots) => slots,
            Buffer::Released => Box::new([]),
        }
    }
}

impl<T: Default> Buffer<T> {
    /// Allocates `capacity` slots, all holding the default value.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Buffer::Owned(iter::repeat_with(T::default).take(capacity).collect())
    }

    /// Replaces the store with one of `new_capacity` slots and moves the first
    /// `length` values into it. The old store is freed.
    pub(crate) fn reallocate(&mut self, length: usize, new_capacity: usize) {
        let old_capacity = self.capacity();
        tracing::trace!(
            old_capacity,
            new_capacity,
            length,
            "reallocating dynamic array storage"
        );

        let mut fresh = Self::with_capacity(new_capacity);
        for (dst, src) in fresh
            .slots_mut()
            .iter_mut()
            .zip(self.slots_mut().iter_mut().take(length))
        {
            mem::swap(dst, src);
        }
        *self = fresh;
    }
}

impl<T: Clone> Buffer<T> {
    /// Deep copy sized exactly to `live`, with no spare slots.
    pub(crate) fn copy_exact(live: &[T]) -> Self {
        Buffer::Owned(Box::from(live))
    }
}
