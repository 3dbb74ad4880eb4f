//! lazy-stream - memoized lazy streams for Rust
//!
//! Potentially infinite sequences whose elements are computed on demand and
//! at most once, with an unfold-based generator and a combinator library
//! (folds, prefixes, zips, suffixes, subsequence search, right scans).
//!
//! ```rust
//! use lazy_stream::{AdvancedStreamExt, Stream};
//!
//! let evens = Stream::naturals_from(0).filter(|n| n % 2 == 0);
//! assert_eq!(evens.take(4).to_vec(), vec![0, 2, 4, 6]);
//!
//! let sums = Stream::of([1, 2, 3]).scan_right(|| 0, |a, b| a + b);
//! assert_eq!(sums.to_vec(), vec![6, 5, 3, 0]);
//! ```

pub mod error;
pub mod list;
pub mod stream;
pub mod stream_configuration;

pub use error::{StreamError, StreamResult};
pub use list::List;
pub use stream::{
    unfold, AdvancedStreamExt, Deferred, DeferredState, IntoIter, Iter, IterSource, Node,
    PullSource, Stream, Thunk, UtilityStreamExt,
};
pub use stream_configuration::{MaterializeConfig, RenderConfig};
