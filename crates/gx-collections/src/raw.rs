//! Low-level allocation for [`Slice`](crate::Slice) storage.
//!
//! [`RawBuf`] owns an uninitialized allocation of `capacity` slots and
//! nothing else: it never constructs or drops elements. The owner tracks
//! which slots are live. Reallocation relocates raw bytes with
//! `std::alloc::realloc`, so live elements move without being re-built.
//!
//! Zero-sized element types never touch the allocator; once their capacity
//! is non-zero they use a dangling, well-aligned pointer.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem;
use std::ptr::{self, NonNull};

/// An owned, possibly empty, uninitialized buffer of `T` slots.
///
/// Invariant: `ptr` is `None` exactly when `cap == 0`.
pub(crate) struct RawBuf<T> {
    ptr: Option<NonNull<T>>,
    cap: usize,
    _owns: PhantomData<T>,
}

#[cold]
#[inline(never)]
pub(crate) fn capacity_overflow() -> ! {
    panic!("slice capacity overflow");
}

fn layout_for<T>(cap: usize) -> Layout {
    Layout::array::<T>(cap).unwrap_or_else(|_| capacity_overflow())
}

const fn is_zst<T>() -> bool {
    mem::size_of::<T>() == 0
}

impl<T> RawBuf<T> {
    /// The unallocated buffer: null pointer, zero capacity.
    pub(crate) const fn new() -> Self {
        Self {
            ptr: None,
            cap: 0,
            _owns: PhantomData,
        }
    }

    /// A buffer with exactly `cap` slots (unallocated when `cap == 0`).
    pub(crate) fn with_capacity(cap: usize) -> Self {
        let mut buf = Self::new();
        if cap > 0 {
            buf.resize(cap);
        }
        buf
    }

    /// Number of allocated slots.
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    /// Base pointer, null when unallocated.
    #[inline]
    pub(crate) fn as_ptr(&self) -> *mut T {
        match self.ptr {
            Some(p) => p.as_ptr(),
            None => ptr::null_mut(),
        }
    }

    /// Base pointer of an allocated buffer.
    ///
    /// Only called once `capacity() > 0`; an unallocated buffer has no slots
    /// to address.
    #[inline]
    pub(crate) fn base(&self) -> NonNull<T> {
        self.ptr.expect("slot access requires an allocated buffer")
    }

    /// Change the capacity to `new_cap > 0`, preserving the bytes of the
    /// first `min(old, new)` slots.
    pub(crate) fn resize(&mut self, new_cap: usize) {
        debug_assert!(new_cap > 0);
        if is_zst::<T>() {
            self.ptr = Some(NonNull::dangling());
            self.cap = new_cap;
            return;
        }

        let new_layout = layout_for::<T>(new_cap);
        let raw = match self.ptr {
            // SAFETY: new_layout has non-zero size because T is not zero-sized
            // and new_cap > 0.
            None => unsafe { alloc::alloc(new_layout) },
            // SAFETY: p was allocated by this allocator with the layout of
            // `self.cap` slots, and the new size is non-zero and was validated
            // by Layout::array not to overflow isize.
            Some(p) => unsafe {
                alloc::realloc(
                    p.as_ptr().cast::<u8>(),
                    layout_for::<T>(self.cap),
                    new_layout.size(),
                )
            },
        };
        let Some(raw) = NonNull::new(raw.cast::<T>()) else {
            alloc::handle_alloc_error(new_layout);
        };
        self.ptr = Some(raw);
        self.cap = new_cap;
    }

    /// Move the allocation out, leaving this buffer unallocated.
    pub(crate) fn take(&mut self) -> Self {
        mem::replace(self, Self::new())
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        if is_zst::<T>() {
            return;
        }
        if let Some(p) = self.ptr {
            // SAFETY: p was allocated with the layout of `self.cap` slots and is
            // released exactly once, here.
            unsafe { alloc::dealloc(p.as_ptr().cast::<u8>(), layout_for::<T>(self.cap)) };
        }
    }
}
