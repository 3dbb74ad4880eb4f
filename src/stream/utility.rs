//! Utility queries: exists, for_all, find, nth, count, fold_left, last
//!
//! These walk the stream with a loop rather than `fold_right`, so they use
//! constant stack however far they have to look. `exists`, `for_all`, `find`
//! and `nth` stop at the first element that decides the answer and are safe
//! on infinite streams whenever that element exists.
use super::core::Stream;

/// Extension trait providing short-circuiting queries
pub trait UtilityStreamExt<T> {
    fn exists<P>(&self, p: P) -> bool
    where
        P: FnMut(&T) -> bool;

    fn for_all<P>(&self, p: P) -> bool
    where
        P: FnMut(&T) -> bool;

    fn find<P>(&self, p: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool;

    fn nth(&self, index: usize) -> Option<&T>;

    /// Number of elements; does not terminate on an infinite stream
    fn count(&self) -> usize;

    /// Left fold over every element; does not terminate on an infinite stream
    fn fold_left<B, F>(&self, init: B, f: F) -> B
    where
        F: FnMut(B, &T) -> B;

    fn last(&self) -> Option<&T>;
}

impl<T: 'static> UtilityStreamExt<T> for Stream<T> {
    fn exists<P>(&self, mut p: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(|item| p(item))
    }

    fn for_all<P>(&self, mut p: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().all(|item| p(item))
    }

    fn find<P>(&self, mut p: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|item| p(*item))
    }

    fn nth(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    fn count(&self) -> usize {
        self.iter().count()
    }

    fn fold_left<B, F>(&self, init: B, mut f: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.iter().fold(init, |acc, item| f(acc, item))
    }

    fn last(&self) -> Option<&T> {
        self.iter().last()
    }
}
