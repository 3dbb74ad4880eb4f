//! Advanced stream combinators: zipping, suffixes, subsequence search and
//! right-to-left scans
use std::rc::Rc;

use super::constructors::unfold;
use super::core::Stream;
use super::deferred::{Deferred, Thunk};
use super::utility::UtilityStreamExt;

/// Extension trait providing the unfold-based and scan combinators
pub trait AdvancedStreamExt<T> {
    /// Combine elements pairwise; ends as soon as either side ends
    fn zip_with<U, V, F>(&self, other: &Stream<U>, f: F) -> Stream<V>
    where
        U: 'static,
        V: 'static,
        F: Fn(&T, &U) -> V + 'static;

    fn zip<U>(&self, other: &Stream<U>) -> Stream<(T, U)>
    where
        U: Clone + 'static;

    /// Pair elements until *both* sides end, padding the shorter with `None`
    fn zip_all<U>(&self, other: &Stream<U>) -> Stream<(Option<T>, Option<U>)>
    where
        U: Clone + 'static;

    /// Every suffix of the stream, ending with the empty one
    fn tails(&self) -> Stream<Stream<T>>;

    /// Whether the stream begins with `prefix`. Forces at most as many
    /// elements of `self` as `prefix` has, and stops at the first mismatch.
    fn starts_with(&self, prefix: &Stream<T>) -> bool
    where
        T: PartialEq;

    /// Whether `sub` occurs contiguously somewhere in the stream
    fn has_subsequence(&self, sub: &Stream<T>) -> bool
    where
        T: PartialEq;

    /// Right-to-left running folds: element `i` is the fold of the suffix
    /// starting at `i`, and the last element is `z()`.
    ///
    /// Each intermediate result is computed once and shared with the node
    /// before it, so an `n`-element stream costs `n` calls to `f`.
    ///
    /// Recursion depth grows with the length of the stream: forcing the first
    /// result forces every later one, a few frames per element. A few hundred
    /// elements are safe on a default thread stack; for longer inputs fold a
    /// reversed [`to_list_tr`](Stream::to_list_tr) instead.
    fn scan_right<B, Z, F>(&self, z: Z, f: F) -> Stream<B>
    where
        B: 'static,
        Z: FnOnce() -> B + 'static,
        F: Fn(&T, &B) -> B + 'static;
}

/// Running result and the stream of results built so far
type ScanState<B> = (Rc<Deferred<B>>, Stream<B>);

impl<T: Clone + 'static> AdvancedStreamExt<T> for Stream<T> {
    fn zip_with<U, V, F>(&self, other: &Stream<U>, f: F) -> Stream<V>
    where
        U: 'static,
        V: 'static,
        F: Fn(&T, &U) -> V + 'static,
    {
        unfold((self.clone(), other.clone()), move |(left, right)| {
            match (&left, &right) {
                (Stream::Cons(a), Stream::Cons(b)) => {
                    let value = f(a.head(), b.head());
                    Some((value, (a.tail().clone(), b.tail().clone())))
                }
                _ => None,
            }
        })
    }

    fn zip<U>(&self, other: &Stream<U>) -> Stream<(T, U)>
    where
        U: Clone + 'static,
    {
        self.zip_with(other, |a, b| (a.clone(), b.clone()))
    }

    fn zip_all<U>(&self, other: &Stream<U>) -> Stream<(Option<T>, Option<U>)>
    where
        U: Clone + 'static,
    {
        unfold((self.clone(), other.clone()), |(left, right)| {
            let a = left.head_option().cloned();
            let b = right.head_option().cloned();
            if a.is_none() && b.is_none() {
                return None;
            }
            Some(((a, b), (left.tail(), right.tail())))
        })
    }

    fn tails(&self) -> Stream<Stream<T>> {
        unfold(Some(self.clone()), |seed| {
            let suffix = seed?;
            let next = match &suffix {
                Stream::Empty => None,
                Stream::Cons(node) => Some(node.tail().clone()),
            };
            Some((suffix, next))
        })
    }

    fn starts_with(&self, prefix: &Stream<T>) -> bool
    where
        T: PartialEq,
    {
        let mut current = self;
        let mut expected = prefix;
        loop {
            let wanted = match expected {
                Stream::Empty => return true,
                Stream::Cons(node) => node,
            };
            let node = match current {
                Stream::Empty => return false,
                Stream::Cons(node) => node,
            };
            if node.head() != wanted.head() {
                return false;
            }
            expected = wanted.tail();
            // Checked before advancing so `self` is never forced past the
            // prefix.
            if expected.is_empty() {
                return true;
            }
            current = node.tail();
        }
    }

    fn has_subsequence(&self, sub: &Stream<T>) -> bool
    where
        T: PartialEq,
    {
        self.tails().exists(|suffix| suffix.starts_with(sub))
    }

    fn scan_right<B, Z, F>(&self, z: Z, f: F) -> Stream<B>
    where
        B: 'static,
        Z: FnOnce() -> B + 'static,
        F: Fn(&T, &B) -> B + 'static,
    {
        let z = Rc::new(Deferred::new(z));
        let f = Rc::new(f);

        let (_, results) = self.fold_right(
            move || -> ScanState<B> {
                (z.clone(), Stream::from_cells(z.clone(), Deferred::ready(Stream::Empty)))
            },
            move |head: &T, rest: Thunk<ScanState<B>>| -> ScanState<B> {
                // The rest of the fold is forced once and read by both the
                // value and the tail of this node.
                let previous = Rc::new(Deferred::new(rest));

                let f = f.clone();
                let head = head.clone();
                let from_previous = previous.clone();
                let value = Rc::new(Deferred::new(move || {
                    (*f)(&head, from_previous.force().0.force())
                }));

                let results = Stream::from_cells(
                    value.clone(),
                    Deferred::new(move || previous.force().1.clone()),
                );
                (value, results)
            },
        );
        results
    }
}
