//! Carrier code uniqueness across a whole run.

use std::collections::HashSet;

/// Trailing marker that exempts a carrier code from the uniqueness check.
pub const WILDCARD_SUFFIX: char = '*';

/// Returns true if the code ends with the wildcard marker.
pub fn is_wildcard(code: &str) -> bool {
    code.ends_with(WILDCARD_SUFFIX)
}

/// Carrier codes accepted so far.
///
/// Only codes of accepted records belong here. A code without the wildcard
/// suffix is accepted at most once; wildcarded codes are stored but never
/// cause a rejection. Not synchronized: share behind a lock if records are
/// ever validated from more than one thread, holding it across
/// [`contains`](Self::contains) and [`insert`](Self::insert).
#[derive(Debug, Clone, Default)]
pub struct UniquenessTracker {
    seen: HashSet<String>,
}

impl UniquenessTracker {
    /// Start with no codes seen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the code was already accepted.
    pub fn contains(&self, code: &str) -> bool {
        self.seen.contains(code)
    }

    /// Remember an accepted code. Re-inserting a known code is a no-op.
    pub fn insert(&mut self, code: impl Into<String>) {
        self.seen.insert(code.into());
    }

    /// Returns true if accepting `code` now would break uniqueness.
    pub fn is_duplicate(&self, code: &str) -> bool {
        self.contains(code) && !is_wildcard(code)
    }

    /// Number of distinct codes seen.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// True until the first code is inserted.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
