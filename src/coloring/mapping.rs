// Copyright 2025 Cowboy AI, LLC.

//! Vertex mappings f: G → H between small graphs.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::graph::Graph;
use crate::errors::{DemoError, DemoResult};

/// Function from the vertices of a source graph to those of a target graph.
///
/// Must be total over the source; need not be injective or surjective.
/// Iteration is ordered by source vertex id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct VertexMapping(BTreeMap<String, String>);

impl VertexMapping {
    /// Build a mapping and check it against its source and target graphs.
    pub fn new<S, T>(
        pairs: impl IntoIterator<Item = (S, T)>,
        source: &Graph,
        target: &Graph,
    ) -> DemoResult<Self>
    where
        S: Into<String>,
        T: Into<String>,
    {
        let mapping: Self = pairs.into_iter().collect();
        mapping.validate(source, target)?;
        Ok(mapping)
    }

    /// Check totality over `source` and that every image lies in `target`.
    pub fn validate(&self, source: &Graph, target: &Graph) -> DemoResult<()> {
        for id in source.vertex_ids() {
            if !self.0.contains_key(id) {
                return Err(DemoError::InvalidMapping(format!(
                    "source vertex {id} has no image"
                )));
            }
        }
        for (g, h) in &self.0 {
            if !source.contains(g) {
                return Err(DemoError::InvalidMapping(format!(
                    "{g} is not a source vertex"
                )));
            }
            if !target.contains(h) {
                return Err(DemoError::InvalidMapping(format!(
                    "{g} maps to {h}, which is not a target vertex"
                )));
            }
        }
        Ok(())
    }

    /// Image of a source vertex.
    pub fn apply(&self, g: &str) -> Option<&str> {
        self.0.get(g).map(String::as_str)
    }

    /// (source, image) pairs ordered by source id.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(g, h)| (g.as_str(), h.as_str()))
    }

    /// Number of mapped source vertices.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if nothing is mapped.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Target vertices hit by at least one source vertex.
    pub fn image(&self) -> BTreeSet<&str> {
        self.0.values().map(String::as_str).collect()
    }

    /// Preimage of each target vertex in the image.
    pub fn fibers(&self) -> BTreeMap<&str, Vec<&str>> {
        let mut fibers: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for (g, h) in self.iter() {
            fibers.entry(h).or_default().push(g);
        }
        fibers
    }

    /// Source edges whose images are not target edges.
    pub fn non_preserved_edges<'a>(
        &self,
        source: &'a Graph,
        target: &Graph,
    ) -> Vec<&'a (String, String)> {
        source
            .edges()
            .iter()
            .filter(|(u, v)| match (self.apply(u), self.apply(v)) {
                (Some(fu), Some(fv)) => !target.has_edge(fu, fv),
                _ => true,
            })
            .collect()
    }

    /// True if every source edge lands on a target edge.
    ///
    /// Only homomorphisms guarantee that pushing forward a proper coloring
    /// yields a proper coloring.
    pub fn is_homomorphism(&self, source: &Graph, target: &Graph) -> bool {
        self.non_preserved_edges(source, target).is_empty()
    }
}

impl<S: Into<String>, T: Into<String>> FromIterator<(S, T)> for VertexMapping {
    fn from_iter<I: IntoIterator<Item = (S, T)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(g, h)| (g.into(), h.into()))
                .collect(),
        )
    }
}
