//! Single-shot memoizing cells
//!
//! A [`Deferred`] owns a zero-argument producer and runs it at most once.
//! Every stream node stores its head and its tail in deferred cells, which is
//! what makes streams lazy without repeating work when a node is shared.

use once_cell::unsync::OnceCell;
use std::cell::Cell;
use std::fmt;

use crate::error::{StreamError, StreamResult};

/// A deferred, zero-argument computation
pub type Thunk<T> = Box<dyn FnOnce() -> T>;

/// Evaluation tag of a [`Deferred`] cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredState {
    /// The producer has not run yet
    Pending,
    /// The producer is running (or panicked while running)
    Evaluating,
    /// The value is cached
    Forced,
}

/// Memoizing holder for a deferred computation.
///
/// The producer runs on the first call to [`force`](Deferred::force); every
/// later call returns the cached value. Nothing can reset the cell.
pub struct Deferred<T> {
    producer: Cell<Option<Thunk<T>>>,
    value: OnceCell<T>,
}

impl<T> Deferred<T> {
    /// Wrap a producer without running it
    pub fn new<F>(producer: F) -> Self
    where
        F: FnOnce() -> T + 'static,
    {
        Self {
            producer: Cell::new(Some(Box::new(producer))),
            value: OnceCell::new(),
        }
    }

    /// Create a cell that is already forced
    pub fn ready(value: T) -> Self {
        Self {
            producer: Cell::new(None),
            value: OnceCell::with_value(value),
        }
    }

    /// Evaluate the cell, running the producer if this is the first access.
    ///
    /// # Panics
    ///
    /// Panics if the cell is forced again from inside its own producer. Such a
    /// definition can never produce a value.
    pub fn force(&self) -> &T {
        match self.try_force() {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }

    /// Evaluate the cell, reporting reentrant evaluation as an error
    pub fn try_force(&self) -> StreamResult<&T> {
        if let Some(value) = self.value.get() {
            return Ok(value);
        }

        let producer = self.producer.take().ok_or(StreamError::ReentrantForce)?;
        log::trace!("forcing deferred cell");
        let value = producer();
        Ok(self.value.get_or_init(move || value))
    }

    /// Peek at the cached value without running the producer
    pub fn get(&self) -> Option<&T> {
        self.value.get()
    }

    pub fn is_forced(&self) -> bool {
        self.value.get().is_some()
    }

    pub fn state(&self) -> DeferredState {
        if self.value.get().is_some() {
            return DeferredState::Forced;
        }
        // Look at the producer slot without disturbing it.
        let producer = self.producer.take();
        let state = if producer.is_some() {
            DeferredState::Pending
        } else {
            DeferredState::Evaluating
        };
        self.producer.set(producer);
        state
    }

    /// Take the cached value out, leaving the cell empty.
    ///
    /// Only reachable through `&mut`, so no shared handle can observe the
    /// cell changing.
    pub(crate) fn take_forced(&mut self) -> Option<T> {
        self.value.take()
    }
}

impl<T: fmt::Debug> fmt::Debug for Deferred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => f.debug_tuple("Deferred").field(value).finish(),
            None => write!(f, "Deferred(<{:?}>)", self.state()),
        }
    }
}
