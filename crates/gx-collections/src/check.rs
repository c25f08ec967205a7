//! Index precondition checks shared by every container.
//!
//! With [`BOUNDS_CHECKS`] on, a failed check reports through
//! [`gx_core::violation`] and never returns. With the `unchecked` feature
//! the checks vanish and the element accessors skip the slice bounds check
//! too, so an out-of-range index is undefined behavior.

use gx_core::{Container, ContractViolation};

use crate::config::BOUNDS_CHECKS;

#[cold]
#[inline(never)]
fn out_of_bounds(container: Container, index: usize, len: usize) -> ! {
    gx_core::violation(ContractViolation::IndexOutOfBounds {
        container,
        index,
        len,
    })
}

/// Require `index < len`.
#[inline(always)]
pub(crate) fn index(container: Container, index: usize, len: usize) {
    if BOUNDS_CHECKS && index >= len {
        out_of_bounds(container, index, len);
    }
}

/// Require `index <= len` (an insertion point).
#[inline(always)]
pub(crate) fn position(container: Container, index: usize, len: usize) {
    if BOUNDS_CHECKS && index > len {
        out_of_bounds(container, index, len);
    }
}

/// Checked shared access to `elems[i]`.
#[cfg(not(feature = "unchecked"))]
#[inline(always)]
pub(crate) fn elem<T>(container: Container, elems: &[T], i: usize) -> &T {
    index(container, i, elems.len());
    &elems[i]
}

/// Checked mutable access to `elems[i]`.
#[cfg(not(feature = "unchecked"))]
#[inline(always)]
pub(crate) fn elem_mut<T>(container: Container, elems: &mut [T], i: usize) -> &mut T {
    index(container, i, elems.len());
    &mut elems[i]
}

/// Unchecked shared access to `elems[i]`.
#[cfg(feature = "unchecked")]
#[allow(unsafe_code)]
#[inline(always)]
pub(crate) fn elem<T>(_container: Container, elems: &[T], i: usize) -> &T {
    // SAFETY: the build opted out of bounds checks; callers uphold `i < len`.
    unsafe { elems.get_unchecked(i) }
}

/// Unchecked mutable access to `elems[i]`.
#[cfg(feature = "unchecked")]
#[allow(unsafe_code)]
#[inline(always)]
pub(crate) fn elem_mut<T>(_container: Container, elems: &mut [T], i: usize) -> &mut T {
    // SAFETY: the build opted out of bounds checks; callers uphold `i < len`.
    unsafe { elems.get_unchecked_mut(i) }
}
