//! Process-wide runtime configuration.
//!
//! The only run-time knob is how the fatal reporter ends the process.
//! Bounds checking is a build-time switch and lives with the containers.

use std::sync::atomic::{AtomicU8, Ordering};

/// How [`fatal`](crate::fatal::fatal) terminates once its message is out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FatalMode {
    /// Abort the process. Nothing runs after the message is flushed.
    #[default]
    Abort = 0,
    /// Panic with the message instead of aborting.
    ///
    /// Intended for test harnesses that assert on violations with
    /// `#[should_panic]`. Must be opted into explicitly.
    Unwind = 1,
}

impl FatalMode {
    fn from_u8(raw: u8) -> Self {
        match raw {
            1 => Self::Unwind,
            _ => Self::Abort,
        }
    }
}

static FATAL_MODE: AtomicU8 = AtomicU8::new(FatalMode::Abort as u8);

/// Select how subsequent fatal errors terminate. Applies process-wide.
pub fn set_fatal_mode(mode: FatalMode) {
    FATAL_MODE.store(mode as u8, Ordering::Relaxed);
}

/// The currently selected [`FatalMode`].
pub fn fatal_mode() -> FatalMode {
    FatalMode::from_u8(FATAL_MODE.load(Ordering::Relaxed))
}
