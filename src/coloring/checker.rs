// Copyright 2025 Cowboy AI, LLC.

//! Push-forward and pull-back of vertex colorings along a vertex mapping.
//!
//! Colorings of a graph form a presheaf: any f: G → H pulls an H-coloring
//! back to a G-coloring by precomposition. Pushing a G-coloring forward is
//! the partial direction. It needs every fiber f⁻¹(h) to be monochrome and no
//! H-edge between two image vertices to receive a single color.
//!
//! Every operation borrows its inputs and returns a fresh value, so a failed
//! call cannot leave caller state half-updated.

use tracing::{debug, warn};

use super::color::{Color, Palette};
use super::graph::{Coloring, Graph};
use super::mapping::VertexMapping;
use crate::errors::{DemoError, DemoResult, PushForwardError};

/// Advance one vertex to the next color of the default palette.
pub fn cycle_color(coloring: &Coloring, vertex_id: &str) -> DemoResult<Coloring> {
    cycle_color_with(&Palette::default(), coloring, vertex_id)
}

/// Advance one vertex to the next color of `palette`, wrapping at the end.
pub fn cycle_color_with(
    palette: &Palette,
    coloring: &Coloring,
    vertex_id: &str,
) -> DemoResult<Coloring> {
    let current = coloring
        .get(vertex_id)
        .ok_or_else(|| DemoError::UnknownVertex(vertex_id.to_string()))?;
    let next = palette
        .next(current)
        .ok_or_else(|| DemoError::InvalidConfig("palette is empty".to_string()))?;
    debug!(vertex = vertex_id, from = %current, to = %next, "cycled vertex color");
    Ok(coloring.with(vertex_id, next))
}

/// Edges of `graph` whose endpoints share a color, with that color.
///
/// Edges with an uncolored endpoint are skipped.
pub fn improper_edges<'a>(
    graph: &'a Graph,
    coloring: &Coloring,
) -> Vec<(&'a (String, String), Color)> {
    graph
        .edges()
        .iter()
        .filter_map(|edge| match (coloring.get(&edge.0), coloring.get(&edge.1)) {
            (Some(cu), Some(cv)) if cu == cv => Some((edge, cu)),
            _ => None,
        })
        .collect()
}

/// True if no edge of `graph` joins two vertices of the same color.
pub fn is_proper(graph: &Graph, coloring: &Coloring) -> bool {
    improper_edges(graph, coloring).is_empty()
}

/// Transport a G-coloring along `mapping` onto H.
///
/// Returns `current_h` overwritten on the image of `mapping`; target vertices
/// outside the image keep their color. Fails without producing anything when
/// a fiber is not monochrome or when two adjacent image vertices receive the
/// same color. Edges leaving the image are not checked.
pub fn push_forward(
    coloring_g: &Coloring,
    mapping: &VertexMapping,
    graph_h: &Graph,
    current_h: &Coloring,
) -> Result<Coloring, PushForwardError> {
    let mut provisional = Coloring::new();
    for (g, h) in mapping.iter() {
        let candidate = coloring_g
            .get(g)
            .ok_or_else(|| PushForwardError::UncoloredSource(g.to_string()))?;
        match provisional.get(h) {
            Some(recorded) if recorded != candidate => {
                warn!(target_vertex = h, %recorded, %candidate, "fiber is not monochrome");
                return Err(PushForwardError::InconsistentFiber {
                    h_vertex: h.to_string(),
                    color_a: recorded,
                    color_b: candidate,
                });
            }
            Some(_) => {}
            None => provisional.insert(h.to_string(), candidate),
        }
    }

    // only edges with both endpoints in the image are judged
    if let Some(((u, v), color)) = improper_edges(graph_h, &provisional).into_iter().next() {
        warn!(u = %u, v = %v, %color, "push-forward result is not proper");
        return Err(PushForwardError::ImproperResult {
            edge: (u.clone(), v.clone()),
            color,
        });
    }

    debug!(updated = provisional.len(), "push-forward succeeded");
    Ok(current_h.merged(&provisional))
}

/// Transport an H-coloring back to G: each g takes the color of f(g).
///
/// Total for a mapping that covers G and an H-coloring that covers the
/// mapping's image; anything else is a caller bug and reports the offending
/// vertex as `UnknownVertex`.
pub fn pull_back(
    coloring_h: &Coloring,
    mapping: &VertexMapping,
    graph_g: &Graph,
) -> DemoResult<Coloring> {
    let mut result = Coloring::new();
    for g in graph_g.vertex_ids() {
        let h = mapping
            .apply(g)
            .ok_or_else(|| DemoError::UnknownVertex(g.to_string()))?;
        let color = coloring_h
            .get(h)
            .ok_or_else(|| DemoError::UnknownVertex(h.to_string()))?;
        result.insert(g.to_string(), color);
    }
    debug!(vertices = result.len(), "pulled back coloring");
    Ok(result)
}
