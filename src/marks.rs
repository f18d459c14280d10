// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Per-cell mark storage used by backtracking to avoid revisiting the same
//! part-solution twice while unwinding a dead branch.
//!
//! Marks are tracked by *pointer identity*, not by structural equality: two
//! `IntervalMultiset`s with identical contents but different `Rc` allocations
//! are distinct marks. This mirrors the original `markStorage.c`, which
//! compares `IntervalSet*` pointers, not set contents, and which never frees
//! the sets it marks -- a `MarkStorage` never owns the sets it tracks.

use std::rc::Rc;

use fxhash::FxHashSet;

use crate::multiset::IntervalMultiset;

/// A set of marked part-solutions, compared by `Rc` pointer identity.
#[derive(Debug, Default)]
pub struct MarkStorage {
    marked: FxHashSet<usize>,
}

impl MarkStorage {
    pub fn new() -> Self {
        MarkStorage {
            marked: FxHashSet::default(),
        }
    }

    /// Marks `set`. Idempotent: marking an already-marked set is a no-op.
    pub fn mark(&mut self, set: &Rc<IntervalMultiset>) {
        self.marked.insert(Rc::as_ptr(set) as usize);
    }

    /// `true` iff `set` has previously been marked, tested by identity.
    pub fn is_marked(&self, set: &Rc<IntervalMultiset>) -> bool {
        self.marked.contains(&(Rc::as_ptr(set) as usize))
    }

    pub fn len(&self) -> usize {
        self.marked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marked.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::Interval;

    fn set() -> Rc<IntervalMultiset> {
        Rc::new(IntervalMultiset::new(vec![Interval::new(1, 1, 1)], None))
    }

    #[test]
    fn unmarked_set_is_not_marked() {
        let storage = MarkStorage::new();
        assert!(!storage.is_marked(&set()));
    }

    #[test]
    fn marking_is_identity_based_not_structural() {
        let mut storage = MarkStorage::new();
        let a = set();
        let b = set(); // structurally identical, different allocation
        storage.mark(&a);
        assert!(storage.is_marked(&a));
        assert!(!storage.is_marked(&b));
    }

    #[test]
    fn marking_twice_is_idempotent() {
        let mut storage = MarkStorage::new();
        let a = set();
        storage.mark(&a);
        storage.mark(&a);
        assert_eq!(1, storage.len());
    }

    #[test]
    fn sharing_the_same_rc_is_recognised_as_marked() {
        let mut storage = MarkStorage::new();
        let a = set();
        let alias = Rc::clone(&a);
        storage.mark(&a);
        assert!(storage.is_marked(&alias));
    }
}
