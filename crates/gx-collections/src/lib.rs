//! Runtime containers for the gx language.
//!
//! Three containers built on manually managed contiguous memory:
//!
//! ```text
//! Array<T, N>   inline, fixed size, bounds-checked
//! Slice<T>      owning heap buffer, doubling growth
//! └── RawBuf<T> (raw.rs: allocation only, no element lifetimes)
//! ByteString    Slice<u8> with a trailing 0 terminator
//! ```
//!
//! Every index precondition funnels through [`gx_core::violation`], which
//! reports and terminates. The `unchecked` feature compiles those checks
//! out (see [`config::BOUNDS_CHECKS`]).
//!
//! # Unsafe code
//!
//! Only `raw.rs` (allocation) and `slice.rs` (element construction,
//! relocation and destruction) contain `unsafe`, plus the unchecked element
//! accessors in `check.rs` when the `unchecked` feature is on. Every block
//! carries a `// SAFETY:` comment.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod array;
mod check;
pub mod config;
mod raw;
pub mod slice;
pub mod string;

pub use array::Array;
pub use slice::Slice;
pub use string::ByteString;

/// Build a [`Slice`] from a list of elements, like `vec!`.
///
/// The slice's capacity equals the number of elements.
///
/// ```
/// let s = gx_collections::slice![1, 2, 3];
/// assert_eq!(s.len(), 3);
/// assert_eq!(s.capacity(), 3);
/// ```
#[macro_export]
macro_rules! slice {
    () => {
        $crate::Slice::new()
    };
    ($($elem:expr),+ $(,)?) => {
        $crate::Slice::from([$($elem),+])
    };
}
