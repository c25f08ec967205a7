//! The growable, owning contiguous sequence.
//!
//! A [`Slice`] is a `(pointer, len, capacity)` triple over a single heap
//! allocation it owns exclusively:
//!
//! - slots `[0, len)` hold live elements;
//! - slots `[len, capacity)` are uninitialized and never dropped;
//! - `capacity == 0` means no allocation and a null pointer.
//!
//! Copying ([`Clone`]) allocates a fresh buffer sized to the source length
//! and clones every live element. Moving ([`Slice::take`],
//! [`Slice::move_from`]) hands the triple over and resets the source to
//! empty without touching any element.
//!
//! Insertion grows the capacity to 2 from empty and doubles it after that,
//! relocating existing elements bytewise with `realloc`.
//!
//! Slices are single-owner values and are neither `Send` nor `Sync`.

#![allow(unsafe_code)]

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::mem;
use std::ops::{Index, IndexMut};
use std::ptr;

use gx_core::Container;

use crate::check;
use crate::config;
use crate::raw::{capacity_overflow, RawBuf};

/// An owning, growable, bounds-checked contiguous sequence.
pub struct Slice<T> {
    buf: RawBuf<T>,
    len: usize,
}

impl<T> Slice<T> {
    /// An empty slice. Does not allocate.
    pub const fn new() -> Self {
        Self {
            buf: RawBuf::new(),
            len: 0,
        }
    }

    /// An empty slice with room for exactly `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: RawBuf::with_capacity(capacity),
            len: 0,
        }
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the slice holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of element slots allocated.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Address of the first slot, or null when nothing is allocated.
    ///
    /// The pointer is invalidated by any growth, reassignment or drop.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// The live elements as a standard slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        if self.buf.capacity() == 0 {
            return &[];
        }
        // SAFETY: the buffer is allocated, aligned, and its first `len` slots
        // are initialized.
        unsafe { std::slice::from_raw_parts(self.buf.base().as_ptr(), self.len) }
    }

    /// The live elements as a mutable standard slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        if self.buf.capacity() == 0 {
            return &mut [];
        }
        // SAFETY: as in `as_slice`, and `&mut self` guarantees uniqueness.
        unsafe { std::slice::from_raw_parts_mut(self.buf.base().as_ptr(), self.len) }
    }

    /// The element at `index`.
    ///
    /// Reports `slice index out of bounds` and terminates unless
    /// `index < len()`.
    #[inline]
    pub fn get(&self, index: usize) -> &T {
        check::elem(Container::Slice, self.as_slice(), index)
    }

    /// Mutable reference to the element at `index`.
    ///
    /// Reports `slice index out of bounds` and terminates unless
    /// `index < len()`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        check::elem_mut(Container::Slice, self.as_mut_slice(), index)
    }

    /// Insert `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// Reports `slice index out of bounds` and terminates unless
    /// `index <= len()`. Grows the buffer when it is full.
    pub fn insert(&mut self, index: usize, value: T) {
        check::position(Container::Slice, index, self.len);
        if self.len == self.buf.capacity() {
            self.grow();
        }
        let base = self.buf.base().as_ptr();
        // SAFETY: capacity > len, so slots up to and including `len` are inside
        // the allocation. The tail is moved with an overlapping copy, after
        // which slot `index` holds a stale bitwise duplicate that is
        // overwritten without being dropped.
        unsafe {
            let slot = base.add(index);
            if index < self.len {
                ptr::copy(slot, slot.add(1), self.len - index);
            }
            ptr::write(slot, value);
        }
        self.len += 1;
    }

    /// Append `value` at the end.
    #[inline]
    pub fn append(&mut self, value: T) {
        self.insert(self.len, value);
    }

    /// Append `T::default()` and return a reference to it for in-place
    /// initialization.
    pub fn append_default(&mut self) -> &mut T
    where
        T: Default,
    {
        self.append(T::default());
        let last = self.len - 1;
        &mut self.as_mut_slice()[last]
    }

    /// Remove and return the element at `index`, shifting `(index, len)`
    /// one slot left. Dropping the returned value destroys it.
    ///
    /// Reports `slice index out of bounds` and terminates unless
    /// `index < len()`.
    pub fn remove(&mut self, index: usize) -> T {
        check::index(Container::Slice, index, self.len);
        let base = self.buf.base().as_ptr();
        // SAFETY: `index < len`, so the slot is live. Its value is moved out
        // before the tail is shifted over it, so nothing is dropped twice.
        unsafe {
            let slot = base.add(index);
            let value = ptr::read(slot);
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            self.len -= 1;
            value
        }
    }

    /// Drop every element, keeping the allocation.
    pub fn clear(&mut self) {
        let live: *mut [T] = self.as_mut_slice();
        // Zero the length first so a panicking destructor cannot cause a
        // second drop of the same elements.
        self.len = 0;
        // SAFETY: `live` covers exactly the previously live elements, which
        // are no longer reachable through `self`.
        unsafe { ptr::drop_in_place(live) };
    }

    /// Move this slice's contents into a new slice, leaving `self` empty.
    ///
    /// No element is touched; only the pointer, length and capacity move.
    /// `self` stays usable and can grow again.
    pub fn take(&mut self) -> Self {
        Self {
            buf: self.buf.take(),
            len: mem::replace(&mut self.len, 0),
        }
    }

    /// Release this slice's contents, then take over `other`'s, leaving
    /// `other` empty.
    pub fn move_from(&mut self, other: &mut Self) {
        self.release();
        self.buf = other.buf.take();
        self.len = mem::replace(&mut other.len, 0);
    }

    /// Iterate over the live elements in index order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Mutably iterate over the live elements in index order.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Clone each of `items` into a new slice with exactly
    /// `items.len()` slots.
    pub fn from_literal(items: &[T]) -> Self
    where
        T: Clone,
    {
        let mut out = Self::with_capacity(items.len());
        for item in items {
            out.write_next(item.clone());
        }
        out
    }

    /// Drop every element and free the allocation.
    fn release(&mut self) {
        self.clear();
        self.buf = RawBuf::new();
    }

    fn grow(&mut self) {
        let old = self.buf.capacity();
        let new = config::grown_capacity(old).unwrap_or_else(|| capacity_overflow());
        log::trace!(target: "gx::slice", "growing slice capacity {old} -> {new}");
        self.buf.resize(new);
    }

    /// Write into the first free slot of a buffer that still has room.
    fn write_next(&mut self, value: T) {
        debug_assert!(self.len < self.buf.capacity());
        // SAFETY: len < capacity, so slot `len` is allocated and uninitialized.
        unsafe { ptr::write(self.buf.base().as_ptr().add(self.len), value) };
        self.len += 1;
    }
}

impl<T> Drop for Slice<T> {
    fn drop(&mut self) {
        let live: *mut [T] = self.as_mut_slice();
        // SAFETY: the live elements are dropped exactly once; the RawBuf field
        // frees the allocation afterwards.
        unsafe { ptr::drop_in_place(live) };
    }
}

impl<T> Default for Slice<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Slice<T> {
    fn clone(&self) -> Self {
        Self::from_literal(self.as_slice())
    }

    /// Release `self` first, then deep-copy `source` into a buffer of
    /// exactly `source.len()` slots.
    fn clone_from(&mut self, source: &Self) {
        self.release();
        self.buf = RawBuf::with_capacity(source.len);
        for item in source.iter() {
            self.write_next(item.clone());
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Slice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq<U>, U> PartialEq<Slice<U>> for Slice<T> {
    fn eq(&self, other: &Slice<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Slice<T> {}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for Slice<T> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq<U>, U> PartialEq<[U]> for Slice<T> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T: Hash> Hash for Slice<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T> Index<usize> for Slice<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for Slice<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.get_mut(index)
    }
}

impl<T, const N: usize> From<[T; N]> for Slice<T> {
    fn from(items: [T; N]) -> Self {
        let mut out = Self::with_capacity(N);
        for item in items {
            out.write_next(item);
        }
        out
    }
}

impl<T: Clone> From<&[T]> for Slice<T> {
    fn from(items: &[T]) -> Self {
        Self::from_literal(items)
    }
}

impl<T> FromIterator<T> for Slice<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut out = Self::new();
        out.extend(iter);
        out
    }
}

impl<T> Extend<T> for Slice<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.append(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a Slice<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Slice<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for Slice<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> IntoIter<T> {
        let end = mem::replace(&mut self.len, 0);
        IntoIter {
            buf: self.buf.take(),
            start: 0,
            end,
        }
    }
}

/// Owning iterator over a [`Slice`]'s elements.
///
/// Elements not yielded are dropped with the iterator.
pub struct IntoIter<T> {
    buf: RawBuf<T>,
    start: usize,
    end: usize,
}

impl<T> IntoIter<T> {
    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        if self.start == self.end {
            return &[];
        }
        // SAFETY: slots `[start, end)` are live and owned by the iterator.
        unsafe {
            let first = self.buf.base().as_ptr().add(self.start);
            std::slice::from_raw_parts(first, self.end - self.start)
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: slot `start` is live; advancing `start` forgets it.
        let value = unsafe { ptr::read(self.buf.base().as_ptr().add(self.start)) };
        self.start += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        // SAFETY: slot `end` was live and is now outside the live range.
        Some(unsafe { ptr::read(self.buf.base().as_ptr().add(self.end)) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        if self.start == self.end {
            return;
        }
        let remaining = ptr::slice_from_raw_parts_mut(
            // SAFETY: `start < end <= capacity`, so the offset is in bounds.
            unsafe { self.buf.base().as_ptr().add(self.start) },
            self.end - self.start,
        );
        self.start = self.end;
        // SAFETY: the remaining slots are live and never yielded.
        unsafe { ptr::drop_in_place(remaining) };
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}
