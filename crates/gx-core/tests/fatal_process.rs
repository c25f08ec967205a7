//! The reporter's default mode must end the process, not unwind.
//!
//! Each test re-runs this test binary filtered to itself with a marker
//! variable set; the child takes the fatal path and the parent inspects
//! its exit status and captured stdout.

use std::env;
use std::process::{Command, Output};

const CHILD_MARKER: &str = "GX_CORE_FATAL_CHILD";

fn rerun_as_child(test_name: &str) -> Output {
    let exe = env::current_exe().expect("test binary path");
    Command::new(exe)
        .args([test_name, "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_MARKER, "1")
        .output()
        .expect("spawn child test process")
}

fn in_child() -> bool {
    env::var_os(CHILD_MARKER).is_some()
}

#[test]
fn fatal_terminates_with_flushed_message() {
    if in_child() {
        gx_core::fatal!("slice index out of bounds: ", 4);
    }
    let output = rerun_as_child("fatal_terminates_with_flushed_message");
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("slice index out of bounds: 4\n"),
        "stdout was: {stdout}"
    );
}

#[test]
fn nil_dereference_terminates() {
    if in_child() {
        let nil: Option<&u8> = None;
        let _ = gx_core::deref(nil);
        // Unreachable when the reporter works; exit cleanly so the parent notices.
        std::process::exit(0);
    }
    let output = rerun_as_child("nil_dereference_terminates");
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("nil pointer dereference\n"), "stdout was: {stdout}");
}

#[test]
fn printing_before_fatal_is_not_lost() {
    if in_child() {
        gx_core::gx_print!("partial ");
        gx_core::fatal!("then fatal");
    }
    let output = rerun_as_child("printing_before_fatal_is_not_lost");
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("partial then fatal\n"), "stdout was: {stdout}");
}
