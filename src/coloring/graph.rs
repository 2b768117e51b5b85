// Copyright 2025 Cowboy AI, LLC.

//! Small undirected graphs and their vertex colorings.
//!
//! Display data (label, position, shape) rides along with each vertex so a
//! presentation layer can render straight from these values; none of it
//! takes part in the checker's logic.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::color::Color;
use crate::errors::{DemoError, DemoResult};

/// Canvas coordinates of a vertex.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Position {
    /// Horizontal offset
    pub x: i32,
    /// Vertical offset
    pub y: i32,
}

/// How a vertex is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Round node (source graphs in the demos)
    #[default]
    Circle,
    /// Square node (target graphs in the demos)
    Square,
}

/// A graph vertex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Vertex {
    /// Unique identifier within its graph
    pub id: String,
    /// Text shown next to the vertex
    pub label: String,
    /// Where the vertex sits on the canvas
    #[serde(default)]
    pub position: Position,
    /// Shape used when rendering
    #[serde(default)]
    pub shape: Shape,
}

impl Vertex {
    /// Vertex labelled by its id, at the origin.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            position: Position::default(),
            shape: Shape::default(),
        }
    }

    /// Place the vertex on the canvas.
    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.position = Position { x, y };
        self
    }

    /// Set the rendering shape.
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }
}

/// Simple undirected graph: unique vertex ids, no loops, no repeated edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Graph {
    vertices: Vec<Vertex>,
    edges: Vec<(String, String)>,
}

impl Graph {
    /// Build a graph, rejecting duplicate ids, loops, repeated edges and
    /// edges whose endpoints are missing.
    pub fn new(vertices: Vec<Vertex>, edges: Vec<(String, String)>) -> DemoResult<Self> {
        let graph = Self { vertices, edges };
        graph.validate()?;
        Ok(graph)
    }

    /// Graph from bare vertex ids and edge pairs.
    pub fn from_ids(ids: &[&str], edges: &[(&str, &str)]) -> DemoResult<Self> {
        Self::new(
            ids.iter().map(|id| Vertex::new(*id)).collect(),
            edges
                .iter()
                .map(|(u, v)| (u.to_string(), v.to_string()))
                .collect(),
        )
    }

    /// Re-check the structural rules; used after deserializing.
    pub fn validate(&self) -> DemoResult<()> {
        let mut ids = BTreeSet::new();
        for vertex in &self.vertices {
            if !ids.insert(vertex.id.as_str()) {
                return Err(DemoError::MalformedGraph(format!(
                    "duplicate vertex id {}",
                    vertex.id
                )));
            }
        }

        let mut seen = BTreeSet::new();
        for (u, v) in &self.edges {
            for endpoint in [u, v] {
                if !ids.contains(endpoint.as_str()) {
                    return Err(DemoError::MalformedGraph(format!(
                        "edge {u}-{v} references missing vertex {endpoint}"
                    )));
                }
            }
            if u == v {
                return Err(DemoError::MalformedGraph(format!("loop at vertex {u}")));
            }
            let key = if u < v { (u, v) } else { (v, u) };
            if !seen.insert(key) {
                return Err(DemoError::MalformedGraph(format!("repeated edge {u}-{v}")));
            }
        }
        Ok(())
    }

    /// Vertices in declaration order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Edges in declaration order.
    pub fn edges(&self) -> &[(String, String)] {
        &self.edges
    }

    /// Vertex ids in declaration order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = &str> {
        self.vertices.iter().map(|v| v.id.as_str())
    }

    /// Look up a vertex by id.
    pub fn vertex(&self, id: &str) -> Option<&Vertex> {
        self.vertices.iter().find(|v| v.id == id)
    }

    /// True if the graph has a vertex with this id.
    pub fn contains(&self, id: &str) -> bool {
        self.vertex(id).is_some()
    }

    /// True if `u` and `v` are adjacent, in either direction.
    pub fn has_edge(&self, u: &str, v: &str) -> bool {
        self.edges
            .iter()
            .any(|(a, b)| (a == u && b == v) || (a == v && b == u))
    }
}

/// Assignment of a color to each vertex id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Coloring(BTreeMap<String, Color>);

impl Coloring {
    /// Empty coloring.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Color of a vertex, if assigned.
    pub fn get(&self, id: &str) -> Option<Color> {
        self.0.get(id).copied()
    }

    /// Return a new coloring with `id` set to `color`.
    pub fn with(&self, id: impl Into<String>, color: Color) -> Self {
        let mut next = self.0.clone();
        next.insert(id.into(), color);
        Self(next)
    }

    /// Overlay `other` onto this coloring; `other` wins on shared ids.
    pub fn merged(&self, other: &Coloring) -> Self {
        let mut next = self.0.clone();
        next.extend(other.0.iter().map(|(k, v)| (k.clone(), *v)));
        Self(next)
    }

    /// True if every vertex of `graph` has a color.
    pub fn covers(&self, graph: &Graph) -> bool {
        graph.vertex_ids().all(|id| self.0.contains_key(id))
    }

    /// Number of colored vertices.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if nothing is colored.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries ordered by vertex id.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Color)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub(crate) fn insert(&mut self, id: String, color: Color) {
        self.0.insert(id, color);
    }
}

impl<K: Into<String>> FromIterator<(K, Color)> for Coloring {
    fn from_iter<I: IntoIterator<Item = (K, Color)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, c)| (k.into(), c)).collect())
    }
}
