// Copyright 2025 Cowboy AI, LLC.

//! Static scenarios for the presheaf demo
//!
//! Each scenario fixes a source graph G, a target graph H, a vertex mapping
//! f: G → H and the colorings shown when the scenario is opened. Scenarios
//! can also be loaded from JSON; loading validates every invariant the
//! checker relies on.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

use crate::coloring::{Color, Coloring, Graph, Shape, Vertex, VertexMapping};
use crate::errors::{DemoError, DemoResult};

/// Which built-in scenario is on screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExampleKind {
    /// Path P3 folded onto the edge K2
    #[default]
    Simple,
    /// Two-vertex independent set collapsed onto a single vertex
    Advanced,
}

impl ExampleKind {
    /// The other scenario.
    pub fn toggled(self) -> Self {
        match self {
            ExampleKind::Simple => ExampleKind::Advanced,
            ExampleKind::Advanced => ExampleKind::Simple,
        }
    }

    /// Caption for the button that switches away from this scenario.
    pub fn toggle_caption(self) -> &'static str {
        match self {
            ExampleKind::Simple => "Show Advanced Example",
            ExampleKind::Advanced => "Show Simple Example",
        }
    }
}

impl Display for ExampleKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ExampleKind::Simple => f.write_str("simple"),
            ExampleKind::Advanced => f.write_str("advanced"),
        }
    }
}

/// A complete, validated demo scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Scenario {
    /// Scenario identity
    pub kind: ExampleKind,
    /// Caption under the source graph
    pub description_g: String,
    /// Caption under the target graph
    pub description_h: String,
    /// Source graph G
    pub graph_g: Graph,
    /// Target graph H
    pub graph_h: Graph,
    /// Coloring of G when the scenario opens
    pub initial_g: Coloring,
    /// Coloring of H when the scenario opens
    pub initial_h: Coloring,
    /// f: G → H
    pub mapping: VertexMapping,
}

impl Scenario {
    /// Built-in scenario for `kind`.
    pub fn for_kind(kind: ExampleKind) -> DemoResult<Self> {
        match kind {
            ExampleKind::Simple => Self::simple(),
            ExampleKind::Advanced => Self::advanced(),
        }
    }

    /// G = path v1–v2–v3, H = edge w1–w2, f folds v3 onto w1.
    pub fn simple() -> DemoResult<Self> {
        let graph_g = Graph::new(
            vec![
                Vertex::new("v1").at(40, 128),
                Vertex::new("v2").at(128, 128),
                Vertex::new("v3").at(216, 128),
            ],
            edges(&[("v1", "v2"), ("v2", "v3")]),
        )?;
        let graph_h = Graph::new(
            vec![
                Vertex::new("w1").at(72, 128).with_shape(Shape::Square),
                Vertex::new("w2").at(184, 128).with_shape(Shape::Square),
            ],
            edges(&[("w1", "w2")]),
        )?;
        let mapping = VertexMapping::new(
            [("v1", "w1"), ("v2", "w2"), ("v3", "w1")],
            &graph_g,
            &graph_h,
        )?;

        let scenario = Self {
            kind: ExampleKind::Simple,
            description_g: "Proper colorings of path P3 (adjacent nodes different colors)"
                .to_string(),
            description_h: "Proper colorings of edge K2 (endpoints have different colors)"
                .to_string(),
            initial_g: [("v1", Color::Red), ("v2", Color::Blue), ("v3", Color::Red)]
                .into_iter()
                .collect(),
            initial_h: [("w1", Color::Red), ("w2", Color::Blue)]
                .into_iter()
                .collect(),
            graph_g,
            graph_h,
            mapping,
        };
        scenario.validate()?;
        Ok(scenario)
    }

    /// G = independent set {v1, v2}, H = single vertex w1.
    pub fn advanced() -> DemoResult<Self> {
        let graph_g = Graph::new(
            vec![Vertex::new("v1").at(72, 128), Vertex::new("v2").at(184, 128)],
            Vec::new(),
        )?;
        let graph_h = Graph::new(
            vec![Vertex::new("w1").at(128, 128).with_shape(Shape::Square)],
            Vec::new(),
        )?;
        let mapping = VertexMapping::new([("v1", "w1"), ("v2", "w1")], &graph_g, &graph_h)?;

        let scenario = Self {
            kind: ExampleKind::Advanced,
            description_g: "Any colorings of independent set (no adjacency constraints)"
                .to_string(),
            description_h: "Any single color".to_string(),
            initial_g: [("v1", Color::Green), ("v2", Color::Green)]
                .into_iter()
                .collect(),
            initial_h: [("w1", Color::Blue)].into_iter().collect(),
            graph_g,
            graph_h,
            mapping,
        };
        scenario.validate()?;
        Ok(scenario)
    }

    /// Parse a scenario from JSON and validate it.
    pub fn from_json(json: &str) -> DemoResult<Self> {
        let scenario: Scenario = serde_json::from_str(json)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> DemoResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check graphs, mapping and that both initial colorings are total.
    pub fn validate(&self) -> DemoResult<()> {
        self.graph_g.validate()?;
        self.graph_h.validate()?;
        self.mapping.validate(&self.graph_g, &self.graph_h)?;
        for (name, coloring, graph) in [
            ("G", &self.initial_g, &self.graph_g),
            ("H", &self.initial_h, &self.graph_h),
        ] {
            if let Some(missing) = graph.vertex_ids().find(|id| coloring.get(id).is_none()) {
                return Err(DemoError::UnknownVertex(format!(
                    "{missing} (initial coloring of {name})"
                )));
            }
        }
        Ok(())
    }
}

fn edges(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(u, v)| (u.to_string(), v.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coloring::is_proper;

    #[test]
    fn test_builtin_scenarios_are_valid() {
        for kind in [ExampleKind::Simple, ExampleKind::Advanced] {
            let scenario = Scenario::for_kind(kind).unwrap();
            assert_eq!(scenario.kind, kind);
            assert!(scenario
                .mapping
                .is_homomorphism(&scenario.graph_g, &scenario.graph_h));
            assert!(is_proper(&scenario.graph_g, &scenario.initial_g));
            assert!(is_proper(&scenario.graph_h, &scenario.initial_h));
        }
    }

    #[test]
    fn test_simple_layout() {
        let scenario = Scenario::simple().unwrap();
        let w1 = scenario.graph_h.vertex("w1").unwrap();
        assert_eq!(w1.shape, Shape::Square);
        assert_eq!((w1.position.x, w1.position.y), (72, 128));
        assert_eq!(scenario.graph_g.vertices().len(), 3);
    }

    #[test]
    fn test_json_round_trip() {
        let scenario = Scenario::advanced().unwrap();
        let json = scenario.to_json().unwrap();
        assert_eq!(Scenario::from_json(&json).unwrap(), scenario);
    }

    #[test]
    fn test_from_json_rejects_partial_initial_coloring() {
        let mut scenario = Scenario::simple().unwrap();
        scenario.initial_h = [("w1", Color::Red)].into_iter().collect();
        let json = serde_json::to_string(&scenario).unwrap();
        let err = Scenario::from_json(&json).unwrap_err();
        assert!(matches!(err, DemoError::UnknownVertex(msg) if msg.starts_with("w2")));
    }

    #[test]
    fn test_toggle() {
        assert_eq!(ExampleKind::Simple.toggled(), ExampleKind::Advanced);
        assert_eq!(ExampleKind::Advanced.toggled().toggled(), ExampleKind::Advanced);
        assert_eq!(ExampleKind::Simple.toggle_caption(), "Show Advanced Example");
    }
}
