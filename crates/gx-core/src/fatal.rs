//! The fatal-error reporter.
//!
//! [`fatal`] is the single exit point for contract violations: it formats
//! its arguments with [`Print`], writes them plus a newline to standard
//! output in one write, flushes, logs the message at `error` level and
//! terminates according to the current [`FatalMode`]. It never returns.

use std::io::{self, Write};

use smallvec::SmallVec;

use crate::config::{fatal_mode, FatalMode};
use crate::error::ContractViolation;
use crate::print::{print_all, Print};

/// Inline capacity of the message buffer. Longer messages spill to the heap.
const MESSAGE_INLINE_BYTES: usize = 256;

/// Report a fatal error built from `args` and terminate.
///
/// Under [`FatalMode::Abort`] the process aborts after the flush. Under
/// [`FatalMode::Unwind`] this panics with the message (minus the newline).
#[cold]
#[inline(never)]
pub fn fatal(args: &[&dyn Print]) -> ! {
    let mut message: SmallVec<[u8; MESSAGE_INLINE_BYTES]> = SmallVec::new();
    // Writing into memory only fails on allocation failure, which aborts anyway.
    let _ = print_all(&mut message, args);
    message.push(b'\n');

    {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        // Nothing useful can be done if stdout is gone; termination proceeds.
        let _ = lock.write_all(&message);
        let _ = lock.flush();
    }

    let text = String::from_utf8_lossy(&message[..message.len() - 1]);
    log::error!(target: "gx::fatal", "{text}");

    match fatal_mode() {
        FatalMode::Abort => std::process::abort(),
        FatalMode::Unwind => panic!("{text}"),
    }
}

/// Report a violated contract and terminate.
#[cold]
#[inline(never)]
pub fn violation(violation: ContractViolation) -> ! {
    fatal(&[&violation])
}

/// Report a fatal error from any number of [`Print`] values and terminate.
///
/// ```no_run
/// gx_core::fatal!("bad state: ", 3, " of ", 2);
/// ```
#[macro_export]
macro_rules! fatal {
    ($($arg:expr),* $(,)?) => {
        $crate::fatal::fatal(&[$(&$arg as &dyn $crate::print::Print),*])
    };
}

/// Dereference a possibly-nil reference.
///
/// `None` is a nil pointer: it is reported as
/// [`ContractViolation::NilDereference`] and the call does not return.
#[inline]
pub fn deref<T: ?Sized>(ptr: Option<&T>) -> &T {
    match ptr {
        Some(target) => target,
        None => violation(ContractViolation::NilDereference),
    }
}

/// Mutable counterpart of [`deref`].
#[inline]
pub fn deref_mut<T: ?Sized>(ptr: Option<&mut T>) -> &mut T {
    match ptr {
        Some(target) => target,
        None => violation(ContractViolation::NilDereference),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::set_fatal_mode;
    use crate::error::Container;

    #[test]
    #[should_panic(expected = "slice index out of bounds: index 3, length 3")]
    fn violation_reports_container_message() {
        set_fatal_mode(FatalMode::Unwind);
        violation(ContractViolation::IndexOutOfBounds {
            container: Container::Slice,
            index: 3,
            len: 3,
        });
    }

    #[test]
    #[should_panic(expected = "bad count: 7 (expected true)")]
    fn fatal_formats_heterogeneous_arguments() {
        set_fatal_mode(FatalMode::Unwind);
        crate::fatal!("bad count: ", 7, " (expected ", true, ")");
    }

    #[test]
    #[should_panic(expected = "nil pointer dereference")]
    fn deref_of_nil_is_fatal() {
        set_fatal_mode(FatalMode::Unwind);
        let nil: Option<&i32> = None;
        deref(nil);
    }

    #[test]
    #[should_panic(expected = "nil pointer dereference")]
    fn deref_mut_of_nil_is_fatal() {
        set_fatal_mode(FatalMode::Unwind);
        let nil: Option<&mut i32> = None;
        deref_mut(nil);
    }

    #[test]
    fn deref_passes_through_live_references() {
        let mut x = 5;
        assert_eq!(*deref(Some(&x)), 5);
        *deref_mut(Some(&mut x)) = 6;
        assert_eq!(x, 6);
        let text: &str = deref(Some("unsized"));
        assert_eq!(text, "unsized");
    }

    #[test]
    #[should_panic(expected = "long message")]
    fn messages_longer_than_inline_buffer_survive() {
        set_fatal_mode(FatalMode::Unwind);
        let padding = "x".repeat(MESSAGE_INLINE_BYTES * 2);
        crate::fatal!(padding, " long message");
    }
}
