//! Graph colorings as a presheaf
//!
//! Vertex colorings of small graphs, vertex mappings between graphs, and the
//! push-forward / pull-back operations that transport colorings along them.

pub mod checker;
pub mod color;
pub mod graph;
pub mod mapping;

pub use checker::{
    cycle_color, cycle_color_with, improper_edges, is_proper, pull_back, push_forward,
};
pub use color::{Color, Palette};
pub use graph::{Coloring, Graph, Position, Shape, Vertex};
pub use mapping::VertexMapping;
