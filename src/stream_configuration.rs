//! Configuration types for stream materialization and rendering

use serde::{Deserialize, Serialize};

/// Bounds applied when a stream is collected into a `Vec`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterializeConfig {
    /// Fail with `LimitExceeded` instead of collecting more than this
    pub max_elements: Option<usize>,
    /// Log a warning once this many elements have been collected
    pub warn_threshold: Option<usize>,
}

impl Default for MaterializeConfig {
    fn default() -> Self {
        Self {
            max_elements: None,
            warn_threshold: Some(1_000_000),
        }
    }
}

impl MaterializeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// No bound and no warning
    pub fn unbounded() -> Self {
        Self {
            max_elements: None,
            warn_threshold: None,
        }
    }

    pub fn max_elements(mut self, max_elements: usize) -> Self {
        self.max_elements = Some(max_elements);
        self
    }

    pub fn warn_threshold(mut self, warn_threshold: usize) -> Self {
        self.warn_threshold = Some(warn_threshold);
        self
    }
}

/// Controls how much of a stream `show_with` forces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub max_elements: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { max_elements: 32 }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_elements(mut self, max_elements: usize) -> Self {
        self.max_elements = max_elements;
        self
    }
}
