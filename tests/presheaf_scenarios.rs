// Copyright (c) 2025 - Cowboy AI, LLC.

use category_demos::{
    pull_back, push_forward, Color, Coloring, DemoError, ExampleKind, Graph, PresheafSession,
    PushForwardError, Scenario, VertexMapping,
};
use pretty_assertions::assert_eq;

fn coloring(pairs: &[(&str, Color)]) -> Coloring {
    pairs.iter().map(|(id, c)| (*id, *c)).collect()
}

#[test]
fn simple_fold_pushes_forward() {
    let scenario = Scenario::simple().unwrap();
    let g = coloring(&[("v1", Color::Red), ("v2", Color::Blue), ("v3", Color::Red)]);
    let h = push_forward(&g, &scenario.mapping, &scenario.graph_h, &scenario.initial_h).unwrap();
    assert_eq!(h, coloring(&[("w1", Color::Red), ("w2", Color::Blue)]));
}

#[test]
fn disagreeing_fiber_names_target_and_colors() {
    let scenario = Scenario::simple().unwrap();
    let g = coloring(&[("v1", Color::Red), ("v2", Color::Blue), ("v3", Color::Blue)]);
    let err = push_forward(&g, &scenario.mapping, &scenario.graph_h, &scenario.initial_h)
        .unwrap_err();
    assert_eq!(
        err,
        PushForwardError::InconsistentFiber {
            h_vertex: "w1".to_string(),
            color_a: Color::Red,
            color_b: Color::Blue,
        }
    );
}

#[test]
fn consistent_but_improper_result_is_rejected_atomically() {
    // v1 -> w1, v2 -> w2 is a homomorphism of the edge, but an improper
    // source coloring transports to an improper target coloring.
    let graph_g = Graph::from_ids(&["v1", "v2"], &[]).unwrap();
    let graph_h = Graph::from_ids(&["w1", "w2"], &[("w1", "w2")]).unwrap();
    let mapping = VertexMapping::new([("v1", "w1"), ("v2", "w2")], &graph_g, &graph_h).unwrap();

    let mut session = PresheafSession::from_scenario(
        Scenario {
            kind: ExampleKind::Simple,
            description_g: "independent pair".to_string(),
            description_h: "edge".to_string(),
            initial_g: coloring(&[("v1", Color::Green), ("v2", Color::Green)]),
            initial_h: coloring(&[("w1", Color::Red), ("w2", Color::Blue)]),
            graph_g,
            graph_h,
            mapping,
        },
        Default::default(),
    );
    let before = session.coloring_h().clone();

    let err = session.push_forward().unwrap_err();
    assert_eq!(
        err,
        PushForwardError::ImproperResult {
            edge: ("w1".to_string(), "w2".to_string()),
            color: Color::Green,
        }
    );
    assert_eq!(session.coloring_h(), &before);
}

#[test]
fn pull_back_after_push_forward_reproduces_images() {
    let scenario = Scenario::simple().unwrap();
    let h = push_forward(
        &scenario.initial_g,
        &scenario.mapping,
        &scenario.graph_h,
        &scenario.initial_h,
    )
    .unwrap();
    let g = pull_back(&h, &scenario.mapping, &scenario.graph_g).unwrap();
    for (source, image) in scenario.mapping.iter() {
        assert_eq!(g.get(source), h.get(image));
    }
    assert_eq!(g, scenario.initial_g);
}

#[test]
fn session_walkthrough_of_simple_example() {
    let mut session = PresheafSession::new(ExampleKind::Simple).unwrap();

    // w1 red -> blue makes H improper until pushed over
    session.click_target("w1").unwrap();
    let pushed = session.push_forward().unwrap().clone();
    assert_eq!(pushed, coloring(&[("w1", Color::Red), ("w2", Color::Blue)]));

    // recolor H, then pull back onto the path
    session.click_target("w1").unwrap();
    session.click_target("w1").unwrap();
    let pulled = session.pull_back().unwrap().clone();
    assert_eq!(
        pulled,
        coloring(&[("v1", Color::Green), ("v2", Color::Blue), ("v3", Color::Green)])
    );
}

#[test]
fn session_rejects_unknown_vertex_click() {
    let mut session = PresheafSession::new(ExampleKind::Advanced).unwrap();
    let err = session.click_source("v3").unwrap_err();
    assert_eq!(err, DemoError::UnknownVertex("v3".to_string()));
}

#[test]
fn failure_notice_is_readable() {
    let mut session = PresheafSession::new(ExampleKind::Simple).unwrap();
    session.click_source("v1").unwrap();
    let notice = session.push_forward().unwrap_err().to_string();
    assert_eq!(
        notice,
        "push-forward failed: vertices mapping to w1 have different colours (blue and red)"
    );
}

#[test]
fn edge_with_one_endpoint_outside_image_does_not_block_push() {
    let graph_g = Graph::from_ids(&["v1"], &[]).unwrap();
    let graph_h = Graph::from_ids(&["w1", "w2"], &[("w1", "w2")]).unwrap();
    let mapping = VertexMapping::new([("v1", "w1")], &graph_g, &graph_h).unwrap();
    let h = push_forward(
        &coloring(&[("v1", Color::Red)]),
        &mapping,
        &graph_h,
        &coloring(&[("w1", Color::Blue), ("w2", Color::Red)]),
    )
    .unwrap();
    assert_eq!(h, coloring(&[("w1", Color::Red), ("w2", Color::Red)]));
}

#[test]
fn edge_outside_image_keeps_current_colors() {
    let graph_g = Graph::from_ids(&["v1"], &[]).unwrap();
    let graph_h = Graph::from_ids(&["w1", "w2", "w3"], &[("w2", "w3")]).unwrap();
    let mapping = VertexMapping::new([("v1", "w1")], &graph_g, &graph_h).unwrap();
    let h = push_forward(
        &coloring(&[("v1", Color::Yellow)]),
        &mapping,
        &graph_h,
        &coloring(&[("w1", Color::Blue), ("w2", Color::Green), ("w3", Color::Green)]),
    )
    .unwrap();
    assert_eq!(
        h,
        coloring(&[("w1", Color::Yellow), ("w2", Color::Green), ("w3", Color::Green)])
    );
}
