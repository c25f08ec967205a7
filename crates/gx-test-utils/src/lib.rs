//! Test utilities for gx development.
//!
//! - [`fixtures`]: drop-tracking element types for leak and double-drop
//!   checks on containers.
//! - Fatal-path helpers: [`unwind_on_fatal`] turns contract violations into
//!   panics for `#[should_panic]` tests, and [`run_in_child`] re-runs a test
//!   in a child process to observe real termination.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::env;
use std::process::{Command, ExitStatus};

use gx_core::{set_fatal_mode, FatalMode};

pub use fixtures::{DropTracker, Tracked};

/// Make contract violations panic instead of aborting.
///
/// Call at the top of every `#[should_panic]` test that expects a fatal
/// error. The setting is process-wide and idempotent.
pub fn unwind_on_fatal() {
    set_fatal_mode(FatalMode::Unwind);
}

/// Environment variable marking a re-run child test process.
pub const CHILD_MARKER: &str = "GX_TEST_FATAL_CHILD";

/// Whether this process is a child started by [`run_in_child`].
pub fn is_child() -> bool {
    env::var_os(CHILD_MARKER).is_some()
}

/// What a child test process did.
#[derive(Debug)]
pub struct ChildOutcome {
    pub status: ExitStatus,
    pub stdout: String,
}

impl ChildOutcome {
    /// True if the child did not exit successfully (abort, signal or
    /// non-zero code).
    pub fn terminated_abnormally(&self) -> bool {
        !self.status.success()
    }
}

/// Re-run the current test binary, restricted to `test_name`, with
/// [`CHILD_MARKER`] set.
///
/// The named test should check [`is_child`] and take the fatal path only in
/// the child. Integration-test names are bare function names; unit-test
/// names include the module path (`tests::name`).
pub fn run_in_child(test_name: &str) -> ChildOutcome {
    let exe = env::current_exe().expect("current test binary path");
    let output = Command::new(exe)
        .args([test_name, "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_MARKER, "1")
        .output()
        .expect("spawn child test process");
    ChildOutcome {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
    }
}
