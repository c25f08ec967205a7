//! Build-time container configuration.
//!
//! All values are compile-time constants; the only switch is the
//! `unchecked` cargo feature.

/// Whether index preconditions are checked.
///
/// `true` unless the crate is built with the `unchecked` feature. With
/// checks off, out-of-range access is undefined behavior.
pub const BOUNDS_CHECKS: bool = !cfg!(feature = "unchecked");

/// Capacity a [`Slice`](crate::Slice) grows to from zero.
pub const INITIAL_CAPACITY: usize = 2;

/// Factor a full [`Slice`](crate::Slice) multiplies its capacity by.
pub const GROWTH_FACTOR: usize = 2;

/// Capacity after one growth step from `capacity`.
///
/// Returns `None` if the doubled capacity overflows `usize`.
pub const fn grown_capacity(capacity: usize) -> Option<usize> {
    if capacity == 0 {
        Some(INITIAL_CAPACITY)
    } else {
        capacity.checked_mul(GROWTH_FACTOR)
    }
}
