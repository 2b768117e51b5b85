// Copyright 2025 Cowboy AI, LLC.

//! Error types for the enumerator and the coloring checker

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::coloring::Color;

/// Reasons a push-forward along a vertex mapping is rejected.
///
/// These are user-visible outcomes: the presentation layer renders the
/// `Display` text as a blocking notice. A failed push-forward never touches
/// the stored target coloring.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum PushForwardError {
    /// Two source vertices share an image vertex but disagree on color
    #[error("push-forward failed: vertices mapping to {h_vertex} have different colours ({color_a} and {color_b})")]
    InconsistentFiber {
        /// Target vertex whose fiber is not constant
        h_vertex: String,
        /// Color already recorded for the target vertex
        color_a: Color,
        /// Conflicting color found later in the fiber
        color_b: Color,
    },

    /// The transported coloring is fiber-consistent but not proper
    #[error("push-forward failed: adjacent vertices {} and {} share colour {}", .edge.0, .edge.1, .color)]
    ImproperResult {
        /// Target edge whose endpoints received the same color
        edge: (String, String),
        /// The shared color
        color: Color,
    },

    /// A source vertex in the mapping's domain has no color
    #[error("push-forward failed: source vertex {0} is not coloured")]
    UncoloredSource(String),
}

/// Errors that can occur in demo core operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DemoError {
    /// A vertex id is absent from a coloring's domain
    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),

    /// A set size for the enumerator was zero or outside the configured range
    #[error("Invalid set size for {axis}: {value} (allowed {min}..={max})")]
    InvalidSetSize {
        /// Axis name (`A`, `B` or `C`)
        axis: char,
        /// Rejected value
        value: u32,
        /// Smallest accepted value
        min: u32,
        /// Largest accepted value
        max: u32,
    },

    /// Graph violates vertex-uniqueness or edge-endpoint rules
    #[error("Malformed graph: {0}")]
    MalformedGraph(String),

    /// Vertex mapping is not total over its source or leaves its target
    #[error("Invalid mapping: {0}")]
    InvalidMapping(String),

    /// Configuration failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Push-forward rejected
    #[error(transparent)]
    PushForward(#[from] PushForwardError),
}

/// Result type for demo core operations
pub type DemoResult<T> = Result<T, DemoError>;

impl From<serde_json::Error> for DemoError {
    fn from(err: serde_json::Error) -> Self {
        DemoError::SerializationError(err.to_string())
    }
}

impl DemoError {
    /// Malformed fixture or caller bug rather than a user-triggered outcome
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            DemoError::UnknownVertex(_)
                | DemoError::MalformedGraph(_)
                | DemoError::InvalidMapping(_)
        )
    }

    /// Outcome the presentation layer should show to the user
    pub fn is_user_visible(&self) -> bool {
        matches!(self, DemoError::PushForward(_))
    }
}
