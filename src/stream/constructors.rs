//! Stream constructors: unfold, pull-source bridging and the generators
//! built on them
use std::iter::FromIterator;
use std::rc::Rc;

use super::core::Stream;
use super::deferred::Deferred;
use crate::list::List;

// ================================
// Unfold
// ================================

/// Build a stream from a seed and a step function.
///
/// `step` returns the next element together with the next seed, or `None` to
/// end the stream. The first step runs immediately; every later step runs
/// when the previous node's tail is forced, so each forcing does a bounded
/// amount of work.
pub fn unfold<S, A, F>(seed: S, step: F) -> Stream<A>
where
    S: 'static,
    A: 'static,
    F: Fn(S) -> Option<(A, S)> + 'static,
{
    unfold_shared(seed, Rc::new(step))
}

fn unfold_shared<S, A, F>(seed: S, step: Rc<F>) -> Stream<A>
where
    S: 'static,
    A: 'static,
    F: Fn(S) -> Option<(A, S)> + 'static,
{
    match (*step)(seed) {
        Some((value, next)) => Stream::from_cells(
            Rc::new(Deferred::ready(value)),
            Deferred::new(move || unfold_shared(next, step)),
        ),
        None => Stream::Empty,
    }
}

// ================================
// Pull sources
// ================================

/// An external producer pulled one element at a time.
///
/// `pull` has the same shape as an unfold step: it consumes the current state
/// and returns the element with the successor state, or `None` when done.
pub trait PullSource: Sized {
    type Item;

    fn pull(self) -> Option<(Self::Item, Self)>;
}

/// Adapts any `Iterator` into a [`PullSource`]
pub struct IterSource<I> {
    iter: I,
}

impl<I: Iterator> IterSource<I> {
    pub fn new(iter: I) -> Self {
        Self { iter }
    }
}

impl<I: Iterator> PullSource for IterSource<I> {
    type Item = I::Item;

    fn pull(mut self) -> Option<(Self::Item, Self)> {
        let item = self.iter.next()?;
        Some((item, self))
    }
}

// ================================
// Named generators
// ================================

impl<T: 'static> Stream<T> {
    pub fn unfold<S, F>(seed: S, step: F) -> Self
    where
        S: 'static,
        F: Fn(S) -> Option<(T, S)> + 'static,
    {
        unfold(seed, step)
    }

    /// Lift a pull source into a stream, pulling only on demand
    pub fn from_source<P>(source: P) -> Self
    where
        P: PullSource<Item = T> + 'static,
    {
        unfold(source, P::pull)
    }

    /// Lazily bridge an iterator; `iter.next()` runs once per forced node
    pub fn from_iterator<I>(iter: I) -> Self
    where
        I: Iterator<Item = T> + 'static,
    {
        Self::from_source(IterSource::new(iter))
    }

    /// A finite stream of the given values.
    ///
    /// `values` is collected up front, so its iterator need not be `'static`.
    pub fn of<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_iterator(values.into_iter().collect::<Vec<_>>().into_iter())
    }

    /// The infinite stream of `value`, as a single self-referential node
    pub fn constant(value: T) -> Self {
        Stream::cyclic(move || value, |this| this)
    }
}

impl<T: Clone + 'static> Stream<T> {
    /// The infinite stream of `value`, one fresh node per forced tail
    pub fn constant_unfold(value: T) -> Self {
        unfold((), move |()| Some((value.clone(), ())))
    }

    /// `seed`, `f(seed)`, `f(f(seed))`, ...
    pub fn iterate<F>(seed: T, f: F) -> Self
    where
        F: Fn(&T) -> T + 'static,
    {
        unfold(seed, move |current| {
            let next = f(&current);
            Some((current, next))
        })
    }
}

impl Stream<i64> {
    /// `n`, `n + 1`, `n + 2`, ...
    pub fn naturals_from(n: i64) -> Self {
        unfold(n, |current| Some((current, current + 1)))
    }
}

impl Stream<u64> {
    /// The Fibonacci numbers, ending before the first one that overflows `u64`
    pub fn fibs() -> Self {
        unfold((Some(0u64), Some(1u64)), |(current, next)| {
            let value = current?;
            let after = next.and_then(|n| value.checked_add(n));
            Some((value, (next, after)))
        })
    }
}

// ================================
// Conversions
// ================================

impl<T: 'static> FromIterator<T> for Stream<T> {
    /// Collects eagerly, then serves the values lazily
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stream::of(iter)
    }
}

impl<T: 'static> From<Vec<T>> for Stream<T> {
    fn from(values: Vec<T>) -> Self {
        Stream::from_iterator(values.into_iter())
    }
}

impl<T: Clone + 'static> From<&List<T>> for Stream<T> {
    fn from(list: &List<T>) -> Self {
        unfold(list.clone(), |rest| {
            let head = rest.head()?.clone();
            Some((head, rest.tail()))
        })
    }
}
