//! Full materialization into strict collections, and rendering
//!
//! Everything here walks the whole stream. Called on an infinite stream it
//! does not return; bound the stream with `take` first, or use
//! [`Stream::to_vec_with`] with a `max_elements` limit.
use std::fmt::Display;

use super::core::Stream;
use crate::error::{StreamError, StreamResult};
use crate::list::List;
use crate::stream_configuration::{MaterializeConfig, RenderConfig};

impl<T: Clone + 'static> Stream<T> {
    /// Build a [`List`] with a right fold.
    ///
    /// Recursion depth grows with the length of the stream; prefer
    /// [`to_list_tr`](Stream::to_list_tr) for long streams.
    pub fn to_list(&self) -> List<T> {
        self.fold_right(List::nil, |head, rest| rest().cons(head.clone()))
    }

    /// Build a [`List`] in constant stack: accumulate in reverse, then flip
    pub fn to_list_tr(&self) -> List<T> {
        let reversed = self
            .iter()
            .fold(List::nil(), |acc, item| acc.cons(item.clone()));
        log::debug!("materialized {} elements into a list", reversed.len());
        reversed.reverse()
    }

    pub fn to_vec(&self) -> Vec<T> {
        let values: Vec<T> = self.iter().cloned().collect();
        log::debug!("materialized {} elements into a vec", values.len());
        values
    }

    /// Collect into a `Vec`, failing instead of growing past
    /// `config.max_elements`
    pub fn to_vec_with(&self, config: &MaterializeConfig) -> StreamResult<Vec<T>> {
        let mut values = Vec::new();
        for item in self.iter() {
            if let Some(limit) = config.max_elements {
                if values.len() == limit {
                    log::debug!("materialization stopped at the limit of {} elements", limit);
                    return Err(StreamError::LimitExceeded { limit });
                }
            }
            values.push(item.clone());
            if config.warn_threshold == Some(values.len()) {
                log::warn!(
                    "materialized {} elements so far; the stream may be infinite",
                    values.len()
                );
            }
        }
        log::debug!("materialized {} elements into a vec", values.len());
        Ok(values)
    }
}

impl<T: Display + 'static> Stream<T> {
    /// Render as `Cons(1, Cons(2, Empty))` with the default [`RenderConfig`]
    pub fn show(&self) -> String {
        self.show_with(&RenderConfig::default())
    }

    /// Render at most `config.max_elements` elements, forcing them; a longer
    /// stream ends in `...`
    pub fn show_with(&self, config: &RenderConfig) -> String {
        let mut out = String::new();
        let mut depth = 0;
        let mut current = self;
        while let Stream::Cons(node) = current {
            if depth == config.max_elements {
                out.push_str("...");
                break;
            }
            out.push_str(&format!("Cons({}, ", node.head()));
            depth += 1;
            current = node.tail();
        }
        if current.is_empty() {
            out.push_str("Empty");
        }
        out.push_str(&")".repeat(depth));
        out
    }
}
