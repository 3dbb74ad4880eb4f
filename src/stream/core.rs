//! Core lazy stream type and its fold-based combinators
//!
//! A [`Stream`] is either `Empty` or a shared node whose head and tail live
//! in [`Deferred`] cells. Cloning a stream clones an `Rc`, so every binding
//! of a stream refers to the same nodes and each cell is evaluated at most
//! once no matter how many consumers walk it.

use std::fmt;
use std::rc::{Rc, Weak};

use super::deferred::{Deferred, Thunk};

/// Longest prefix `Debug` prints before eliding the rest
const DEBUG_LIMIT: usize = 32;

/// A lazy, possibly infinite sequence
pub enum Stream<T> {
    /// Terminal stream
    Empty,
    /// A head cell paired with a deferred tail
    Cons(Rc<Node<T>>),
}

/// One cell of a non-empty stream
pub struct Node<T> {
    head: Rc<Deferred<T>>,
    tail: Deferred<Stream<T>>,
}

impl<T> Node<T> {
    /// Force and return the head value
    pub fn head(&self) -> &T {
        self.head.force()
    }

    /// Force and return the rest of the stream
    pub fn tail(&self) -> &Stream<T> {
        self.tail.force()
    }

    pub fn head_cell(&self) -> &Deferred<T> {
        &self.head
    }

    pub fn tail_cell(&self) -> &Deferred<Stream<T>> {
        &self.tail
    }
}

// A fully forced chain would otherwise be released recursively, one stack
// frame per node.
impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut next = self.tail.take_forced();
        while let Some(Stream::Cons(node)) = next {
            next = match Rc::try_unwrap(node) {
                Ok(mut node) => node.tail.take_forced(),
                Err(_) => None,
            };
        }
    }
}

impl<T> Clone for Stream<T> {
    fn clone(&self) -> Self {
        match self {
            Stream::Empty => Stream::Empty,
            Stream::Cons(node) => Stream::Cons(node.clone()),
        }
    }
}

impl<T> Default for Stream<T> {
    fn default() -> Self {
        Stream::Empty
    }
}

// ================================
// Inspection
// ================================

impl<T> Stream<T> {
    /// Exhaustive dispatch on the two variants
    pub fn match_with<B, E, C>(&self, on_empty: E, on_cons: C) -> B
    where
        E: FnOnce() -> B,
        C: FnOnce(&Deferred<T>, &Deferred<Stream<T>>) -> B,
    {
        match self {
            Stream::Empty => on_empty(),
            Stream::Cons(node) => on_cons(node.head_cell(), node.tail_cell()),
        }
    }

    /// Checks the variant; forces nothing
    pub fn is_empty(&self) -> bool {
        matches!(self, Stream::Empty)
    }

    pub fn head_option(&self) -> Option<&T> {
        match self {
            Stream::Empty => None,
            Stream::Cons(node) => Some(node.head()),
        }
    }

    /// The rest of the stream; the tail of `Empty` is `Empty`
    pub fn tail(&self) -> Stream<T> {
        match self {
            Stream::Empty => Stream::Empty,
            Stream::Cons(node) => node.tail().clone(),
        }
    }

    pub fn uncons(&self) -> Option<(&T, &Stream<T>)> {
        match self {
            Stream::Empty => None,
            Stream::Cons(node) => Some((node.head(), node.tail())),
        }
    }

    /// True when both streams are the same node (or both empty)
    pub fn ptr_eq(&self, other: &Stream<T>) -> bool {
        match (self, other) {
            (Stream::Empty, Stream::Empty) => true,
            (Stream::Cons(a), Stream::Cons(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            state: Cursor::At(self),
        }
    }
}

// ================================
// Primitives
// ================================

impl<T: 'static> Stream<T> {
    /// The terminal stream
    pub fn empty() -> Self {
        Stream::Empty
    }

    /// Build a node from a delayed head and a delayed tail.
    ///
    /// Neither closure runs until the corresponding part is demanded.
    pub fn cons<H, F>(head: H, tail: F) -> Self
    where
        H: FnOnce() -> T + 'static,
        F: FnOnce() -> Stream<T> + 'static,
    {
        Self::from_cells(Rc::new(Deferred::new(head)), Deferred::new(tail))
    }

    pub(crate) fn from_cells(head: Rc<Deferred<T>>, tail: Deferred<Stream<T>>) -> Self {
        Stream::Cons(Rc::new(Node { head, tail }))
    }

    /// Build a stream whose tail may refer back to the stream itself.
    ///
    /// The node is allocated first and the tail closure receives a handle to
    /// it, so `Stream::cyclic(|| 1, |ones| ones)` is the infinite stream of
    /// ones held in a single node. A forced cycle keeps itself alive until
    /// the process exits.
    pub fn cyclic<H, F>(head: H, tail: F) -> Self
    where
        H: FnOnce() -> T + 'static,
        F: FnOnce(Stream<T>) -> Stream<T> + 'static,
    {
        let node = Rc::new_cyclic(|this: &Weak<Node<T>>| {
            let this = this.clone();
            Node {
                head: Rc::new(Deferred::new(head)),
                tail: Deferred::new(move || match this.upgrade() {
                    Some(node) => tail(Stream::Cons(node)),
                    // The tail cell lives inside the node, so whoever forces
                    // it holds a strong reference to the node.
                    None => unreachable!("stream tail forced after its node was released"),
                }),
            }
        });
        Stream::Cons(node)
    }

    /// Right fold where `f` receives the head and the *unevaluated* fold of
    /// the rest.
    ///
    /// A combiner that never calls the thunk stops the traversal, which is
    /// what lets a fold finish on an infinite stream. Every thunk it does call
    /// adds a level of recursion.
    pub fn fold_right<B, Z, F>(&self, z: Z, f: F) -> B
    where
        B: 'static,
        Z: Fn() -> B + 'static,
        F: Fn(&T, Thunk<B>) -> B + 'static,
    {
        self.fold_right_shared(Rc::new(z), Rc::new(f))
    }

    fn fold_right_shared<B, Z, F>(&self, z: Rc<Z>, f: Rc<F>) -> B
    where
        B: 'static,
        Z: Fn() -> B + 'static,
        F: Fn(&T, Thunk<B>) -> B + 'static,
    {
        match self {
            Stream::Empty => (*z)(),
            Stream::Cons(node) => {
                let source = node.clone();
                let next_f = f.clone();
                let rest: Thunk<B> = Box::new(move || source.tail().fold_right_shared(z, next_f));
                (*f)(node.head(), rest)
            }
        }
    }

    // ================================
    // Prefixes and suffixes
    // ================================

    /// The first `n` elements. Head cells are shared with `self` and stay
    /// unevaluated; the source tail is never forced past the `n`th node.
    pub fn take(&self, n: usize) -> Stream<T> {
        match self {
            Stream::Cons(node) if n > 1 => {
                let source = node.clone();
                Stream::from_cells(
                    node.head.clone(),
                    Deferred::new(move || source.tail().take(n - 1)),
                )
            }
            Stream::Cons(node) if n == 1 => {
                Stream::from_cells(node.head.clone(), Deferred::ready(Stream::Empty))
            }
            _ => Stream::Empty,
        }
    }

    /// Force and discard the first `n` tails, returning the remainder as is
    #[doc(alias = "drop")]
    pub fn skip(&self, n: usize) -> Stream<T> {
        let mut current = self.clone();
        for _ in 0..n {
            current = match &current {
                Stream::Empty => return Stream::Empty,
                Stream::Cons(node) => node.tail().clone(),
            };
        }
        current
    }

    /// Elements up to the first one failing `p`, by direct recursion on the
    /// structure
    pub fn take_while<P>(&self, p: P) -> Stream<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        self.take_while_shared(Rc::new(p))
    }

    fn take_while_shared<P>(&self, p: Rc<P>) -> Stream<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        match self {
            Stream::Cons(node) if (*p)(node.head()) => {
                let source = node.clone();
                Stream::from_cells(
                    node.head.clone(),
                    Deferred::new(move || source.tail().take_while_shared(p)),
                )
            }
            _ => Stream::Empty,
        }
    }

    /// Lazy concatenation; `other` is built only once `self` is exhausted
    pub fn append<F>(&self, other: F) -> Stream<T>
    where
        F: FnOnce() -> Stream<T> + 'static,
    {
        self.append_shared(Rc::new(Deferred::new(other)))
    }

    fn append_shared(&self, other: Rc<Deferred<Stream<T>>>) -> Stream<T> {
        match self {
            Stream::Empty => other.force().clone(),
            Stream::Cons(node) => {
                let source = node.clone();
                Stream::from_cells(
                    node.head.clone(),
                    Deferred::new(move || source.tail().append_shared(other)),
                )
            }
        }
    }

    /// Keep the elements satisfying `p`.
    ///
    /// Rejected elements are skipped in a loop, so a long run of them costs
    /// no stack; accepted ones produce nodes on demand.
    pub fn filter<P>(&self, p: P) -> Stream<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        self.filter_shared(Rc::new(p))
    }

    fn filter_shared<P>(&self, p: Rc<P>) -> Stream<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        let mut current = self.clone();
        loop {
            current = match &current {
                Stream::Empty => return Stream::Empty,
                Stream::Cons(node) if (*p)(node.head()) => {
                    let source = node.clone();
                    return Stream::from_cells(
                        node.head.clone(),
                        Deferred::new(move || source.tail().filter_shared(p)),
                    );
                }
                Stream::Cons(node) => node.tail().clone(),
            };
        }
    }

    /// Map every element through `f`, then flatten the resulting streams.
    ///
    /// Elements mapping to an empty stream are skipped in a loop, like
    /// rejected elements in [`filter`](Stream::filter).
    pub fn flat_map<U, F>(&self, f: F) -> Stream<U>
    where
        U: 'static,
        F: Fn(&T) -> Stream<U> + 'static,
    {
        self.flat_map_shared(Rc::new(f))
    }

    fn flat_map_shared<U, F>(&self, f: Rc<F>) -> Stream<U>
    where
        U: 'static,
        F: Fn(&T) -> Stream<U> + 'static,
    {
        let mut current = self.clone();
        loop {
            current = match &current {
                Stream::Empty => return Stream::Empty,
                Stream::Cons(node) => {
                    let inner = (*f)(node.head());
                    if !inner.is_empty() {
                        let source = node.clone();
                        return inner.append(move || source.tail().flat_map_shared(f));
                    }
                    node.tail().clone()
                }
            };
        }
    }
}

impl<T: Clone + 'static> Stream<T> {
    /// Apply `f` to every element. `f` runs when a mapped head is forced.
    pub fn map<U, F>(&self, f: F) -> Stream<U>
    where
        U: 'static,
        F: Fn(&T) -> U + 'static,
    {
        let f = Rc::new(f);
        self.fold_right(Stream::empty, move |head, rest| {
            let f = f.clone();
            let head = head.clone();
            Stream::cons(move || (*f)(&head), rest)
        })
    }

    /// `take_while` expressed as a right fold; the remainder is folded only
    /// when the result's tail is demanded
    pub fn take_while_lazy<P>(&self, p: P) -> Stream<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        self.fold_right(Stream::empty, move |head, rest| {
            if p(head) {
                let head = head.clone();
                Stream::cons(move || head, rest)
            } else {
                Stream::Empty
            }
        })
    }
}

// ================================
// Iteration
// ================================

/// Borrowing iterator. A node's tail is forced only when the element after
/// it is requested.
pub struct Iter<'a, T> {
    state: Cursor<&'a Stream<T>, &'a Node<T>>,
}

/// Either a stream still to be inspected, or the node last yielded
enum Cursor<S, N> {
    At(S),
    After(N),
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = match &self.state {
            Cursor::At(stream) => *stream,
            Cursor::After(node) => node.tail(),
        };
        match current {
            Stream::Empty => {
                self.state = Cursor::At(current);
                None
            }
            Stream::Cons(node) => {
                self.state = Cursor::After(&**node);
                Some(node.head())
            }
        }
    }
}

impl<'a, T> IntoIterator for &'a Stream<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator that clones each forced head
pub struct IntoIter<T> {
    state: Cursor<Stream<T>, Rc<Node<T>>>,
}

impl<T: Clone> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = match &self.state {
            Cursor::At(stream) => stream.clone(),
            Cursor::After(node) => node.tail().clone(),
        };
        match current {
            Stream::Empty => {
                self.state = Cursor::At(Stream::Empty);
                None
            }
            Stream::Cons(node) => {
                let value = node.head().clone();
                self.state = Cursor::After(node);
                Some(value)
            }
        }
    }
}

impl<T: Clone> IntoIterator for Stream<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            state: Cursor::At(self),
        }
    }
}

/// Prints the already-forced prefix; never runs a producer
impl<T: fmt::Debug> fmt::Debug for Stream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stream(")?;
        let mut current = self;
        let mut shown = 0;
        while let Stream::Cons(node) = current {
            if shown > 0 {
                write!(f, ", ")?;
            }
            if shown == DEBUG_LIMIT {
                write!(f, "..")?;
                break;
            }
            match node.head.get() {
                Some(value) => write!(f, "{:?}", value)?,
                None => write!(f, "?")?,
            }
            shown += 1;
            match node.tail.get() {
                Some(next) => current = next,
                None => {
                    write!(f, ", ..")?;
                    break;
                }
            }
        }
        write!(f, ")")
    }
}
