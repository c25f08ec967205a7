//! Drop-tracking element fixtures.
//!
//! A [`DropTracker`] hands out [`Tracked`] values and counts how many were
//! created (including clones) and how many were dropped. After a container
//! is gone, `live() == 0` proves every element was destroyed exactly once.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

#[derive(Default)]
struct Counts {
    created: Cell<usize>,
    dropped: Cell<usize>,
}

/// Counts creations and drops of the [`Tracked`] values it produced.
#[derive(Clone, Default)]
pub struct DropTracker {
    counts: Rc<Counts>,
}

impl DropTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `value` so its lifetime is counted.
    pub fn track<T>(&self, value: T) -> Tracked<T> {
        bump(&self.counts.created);
        Tracked {
            value,
            counts: Rc::clone(&self.counts),
        }
    }

    /// Values created so far, clones included.
    pub fn created(&self) -> usize {
        self.counts.created.get()
    }

    /// Values dropped so far.
    pub fn dropped(&self) -> usize {
        self.counts.dropped.get()
    }

    /// Values created but not yet dropped.
    pub fn live(&self) -> usize {
        self.created() - self.dropped()
    }

    /// Assert that every tracked value has been dropped.
    pub fn assert_all_dropped(&self) {
        assert_eq!(
            self.live(),
            0,
            "{} of {} tracked values leaked",
            self.live(),
            self.created()
        );
    }
}

fn bump(counter: &Cell<usize>) {
    counter.set(counter.get() + 1);
}

/// A value whose creation, cloning and drop are counted by a
/// [`DropTracker`].
pub struct Tracked<T> {
    value: T,
    counts: Rc<Counts>,
}

impl<T> Tracked<T> {
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T: Clone> Clone for Tracked<T> {
    fn clone(&self) -> Self {
        bump(&self.counts.created);
        Self {
            value: self.value.clone(),
            counts: Rc::clone(&self.counts),
        }
    }
}

impl<T> Drop for Tracked<T> {
    fn drop(&mut self) {
        bump(&self.counts.dropped);
        assert!(
            self.counts.dropped.get() <= self.counts.created.get(),
            "more drops than creations: a value was dropped twice"
        );
    }
}

impl<T: PartialEq> PartialEq for Tracked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Tracked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}
