// Copyright 2025 Cowboy AI, LLC.

//! # Category Demos
//!
//! Pure core of a set of category theory teaching demos. Rendering lives in
//! the presentation layer; this crate holds the logic with invariants worth
//! testing:
//! - **Currying**: enumerate the index space of (A×B)→C and its curried
//!   regrouping A→(B→C), and count the functions on either side
//! - **Coloring**: vertex colorings of small graphs as a presheaf, with
//!   push-forward (partial) and pull-back (total) along a vertex mapping
//! - **Fixtures**: the built-in scenarios shown by the presheaf demo
//! - **Session**: explicit per-session state that applies checker results
//!   atomically
//!
//! Every operation is synchronous and returns new values; failures are
//! tagged error variants rather than side effects.

#![warn(missing_docs)]

pub mod coloring;
pub mod config;
pub mod currying;
mod errors;
pub mod fixtures;
pub mod session;

pub use coloring::{
    cycle_color, cycle_color_with, improper_edges, is_proper, pull_back, push_forward, Color,
    Coloring, Graph, Palette, Position, Shape, Vertex, VertexMapping,
};
pub use config::{BoundsPolicy, DemoConfig, SetSizeRange};
pub use currying::{
    enumerate, function_count, CurriedBranch, CurriedRow, CurriedView, SetSizes, UncurriedEntry,
    UncurriedMapping,
};
pub use errors::{DemoError, DemoResult, PushForwardError};
pub use fixtures::{ExampleKind, Scenario};
pub use session::PresheafSession;
