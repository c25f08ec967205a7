//! gx: runtime containers for a small compiled language.
//!
//! This is the facade crate re-exporting the public API of the gx
//! sub-crates. Generated programs depend on `gx` alone.
//!
//! # Quick start
//!
//! ```rust
//! use gx::prelude::*;
//!
//! let mut s: Slice<i32> = slice![1, 2, 3];
//! s.insert(1, 99);
//! s.remove(0);
//! assert_eq!(s, [99, 2, 3]);
//!
//! let mut grid: Array<Slice<u8>, 2> = Array::new();
//! grid[1].append(7);
//! assert_eq!(grid[1].len(), 1);
//!
//! let name = ByteString::from("gx");
//! assert_eq!(name.as_bytes_with_nul(), b"gx\0");
//! gx_println!("name=", name, " len=", name.len());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`core`](crate::core) | `gx-core` | Fatal reporter, printing, contract violations, reflection |
//! | [`collections`](crate::collections) | `gx-collections` | `Array`, `Slice`, `ByteString` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Fatal-error reporting, printing and reflection (`gx-core`).
///
/// Everything that terminates the process goes through
/// [`gx_core::fatal()`]. Tests that expect a violation switch
/// [`gx_core::FatalMode`] to `Unwind`.
pub use gx_core as core;

/// Runtime containers (`gx-collections`).
pub use gx_collections as collections;

pub use gx_collections::slice;
pub use gx_core::{fatal, gx_print, gx_println, reflect};

/// Common imports for code using gx containers.
///
/// ```rust
/// use gx::prelude::*;
///
/// let a: Array<f64, 3> = Array::from([0.5, 1.0, 1.5]);
/// let total: f64 = a.iter().sum();
/// assert_eq!(total, 3.0);
/// ```
pub mod prelude {
    pub use gx_collections::{slice, Array, ByteString, Slice};
    pub use gx_core::reflect::{FieldAttribs, Reflect};
    pub use gx_core::{deref, deref_mut, fatal, gx_print, gx_println, FatalMode, Print};
}
