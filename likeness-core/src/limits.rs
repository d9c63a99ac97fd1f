// likeness-core - Traversal limits
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Traversal limits for comparison.
//!
//! Comparison recurses through nested values. The depth is bounded so deep
//! inputs end in an `Incomparable` outcome instead of a stack overflow.
//! Free functions such as [`compare`](crate::compare) read the calling
//! thread's default, configured with [`set_max_depth`]; a
//! [`Comparator`](crate::Comparator) carries its own [`Limits`].

use std::cell::Cell;

/// Default maximum nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 1_024;

thread_local! {
    static MAX_DEPTH: Cell<usize> = const { Cell::new(DEFAULT_MAX_DEPTH) };
}

/// Set this thread's default maximum nesting depth. Returns the previous value.
#[inline]
#[must_use]
pub fn set_max_depth(depth: usize) -> usize {
    MAX_DEPTH.with(|d| d.replace(depth))
}

/// Get this thread's default maximum nesting depth.
#[inline]
#[must_use]
pub fn max_depth() -> usize {
    MAX_DEPTH.with(|d| d.get())
}

/// Limits applied to a single comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    /// Deepest nesting level compared before giving up
    pub max_depth: usize,
}

impl Limits {
    /// Limits with the library defaults.
    pub fn new() -> Self {
        Limits {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Limits from this thread's configured defaults.
    pub fn current() -> Self {
        Limits {
            max_depth: max_depth(),
        }
    }

    /// Replace the maximum nesting depth.
    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Limits { max_depth }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Limits::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_default_round_trip() {
        let previous = set_max_depth(8);
        assert_eq!(max_depth(), 8);
        assert_eq!(Limits::current().max_depth, 8);
        let _ = set_max_depth(previous);
        assert_eq!(max_depth(), previous);
    }

    #[test]
    fn test_builder() {
        let limits = Limits::default().with_max_depth(3);
        assert_eq!(limits.max_depth, 3);
        assert_eq!(Limits::new().max_depth, DEFAULT_MAX_DEPTH);
    }
}
