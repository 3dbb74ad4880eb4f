//! Lazy, memoized streams
//!
//! A stream is built from two primitives, [`Stream::cons`] over deferred
//! cells and [`unfold`], and every other combinator is derived from them.
//! Streams are pull-based: no element is computed before a consumer asks
//! for it, and no element is computed twice.

pub mod deferred;
pub mod core;
pub mod constructors;
pub mod advanced;
pub mod utility;
pub mod materialize;

// Re-export core types
pub use self::core::{Iter, IntoIter, Node, Stream};
pub use deferred::{Deferred, DeferredState, Thunk};

// Re-export constructors
pub use constructors::{unfold, IterSource, PullSource};

// Re-export combinator traits
pub use advanced::AdvancedStreamExt;
pub use utility::UtilityStreamExt;
