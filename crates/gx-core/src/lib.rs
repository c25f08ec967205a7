//! Core runtime services for the gx language.
//!
//! This is the leaf crate with zero internal dependencies. It provides the
//! pieces every gx container leans on but does not own:
//!
//! - [`fatal`]: the process-wide fatal-error reporter. Every contract
//!   violation in the containers funnels through it.
//! - [`print`]: the [`Print`] trait and the per-type formatting rules the
//!   reporter and the `gx_print!`/`gx_println!` macros share.
//! - [`error`]: the [`ContractViolation`] category carried in fatal messages.
//! - [`config`]: the [`FatalMode`] switch deciding how the reporter ends the
//!   process.
//! - [`reflect`]: the field-traversal contract containers can appear in as
//!   leaf values.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod fatal;
pub mod print;
pub mod reflect;

pub use config::{fatal_mode, set_fatal_mode, FatalMode};
pub use error::{Container, ContractViolation};
pub use fatal::{deref, deref_mut, fatal, violation};
pub use print::Print;
pub use reflect::{FieldAttribs, Reflect};
