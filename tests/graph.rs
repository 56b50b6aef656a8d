//! Tests for the flow graph store's editing primitives and validation.
mod common;
use anketo::graph::validate::Violation;
use anketo::prelude::*;

#[test]
fn test_fresh_graph_has_only_the_start_marker() {
    let graph = FlowGraph::new();
    assert_eq!(graph.node_count(), 1);
    let start = graph.start_node().expect("fresh graph has a start");
    assert_eq!(start.kind, QuestionKind::Start);
    assert_eq!(start.prompt, "Start Survey");
    assert!(start.options.is_none());
}

#[test]
fn test_add_node_choice_kinds_get_placeholder_options() {
    let mut graph = FlowGraph::new();
    for kind in [
        QuestionKind::SingleChoice,
        QuestionKind::MultiChoice,
        QuestionKind::Dropdown,
    ] {
        let id = graph.add_node(kind, Position::default());
        let node = graph.node(id).expect("node exists");
        assert_eq!(
            node.options.as_deref(),
            Some(&["Option 1".to_string(), "Option 2".to_string()][..])
        );
        assert_eq!(node.prompt, "New Question");
        assert!(!node.required);
    }

    let text = graph.add_node(QuestionKind::ShortText, Position::default());
    assert!(graph.node(text).expect("node exists").options.is_none());
}

#[test]
fn test_update_node_merges_patch_fields() {
    let mut graph = FlowGraph::new();
    let id = graph.add_node(QuestionKind::SingleChoice, Position::default());

    graph
        .update_node(
            id,
            NodePatch {
                prompt: Some("Pick one".to_string()),
                description: Some(Some("helper text".to_string())),
                required: Some(true),
                options: Some(vec!["A".to_string(), "B".to_string(), "C".to_string()]),
                ..Default::default()
            },
        )
        .expect("node exists");

    let node = graph.node(id).expect("node exists");
    assert_eq!(node.prompt, "Pick one");
    assert_eq!(node.description.as_deref(), Some("helper text"));
    assert!(node.required);
    assert_eq!(node.options.as_ref().map(Vec::len), Some(3));

    // A partial patch leaves the other fields alone.
    graph
        .update_node(
            id,
            NodePatch {
                required: Some(false),
                ..Default::default()
            },
        )
        .expect("node exists");
    let node = graph.node(id).expect("node exists");
    assert_eq!(node.prompt, "Pick one");
    assert!(!node.required);
}

#[test]
fn test_update_node_ignores_options_for_non_choice_kinds() {
    let mut graph = FlowGraph::new();
    let id = graph.add_node(QuestionKind::ShortText, Position::default());

    graph
        .update_node(
            id,
            NodePatch {
                options: Some(vec!["A".to_string(), "B".to_string()]),
                ..Default::default()
            },
        )
        .expect("node exists");

    assert!(graph.node(id).expect("node exists").options.is_none());
}

#[test]
fn test_update_missing_node_fails() {
    let mut graph = FlowGraph::new();
    let id = graph.add_node(QuestionKind::ShortText, Position::default());
    graph.delete_node(id);

    let err = graph.update_node(id, NodePatch::default()).unwrap_err();
    assert_eq!(err, GraphError::NodeNotFound { node_id: id });
}

#[test]
fn test_delete_node_cascades_edges_and_is_idempotent() {
    let fixture = common::create_branching_graph();
    let mut graph = fixture.graph;
    assert_eq!(graph.edge_count(), 4);

    graph.delete_node(fixture.q1);
    assert!(graph.node(fixture.q1).is_none());
    // The inbound edge from start and all three outgoing edges are gone.
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.edges_from(fixture.start).next().is_none());

    // Deleting again is a no-op.
    graph.delete_node(fixture.q1);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_delete_then_validate_reports_dead_end_at_start() {
    let fixture = common::create_branching_graph();
    let mut graph = fixture.graph;
    assert!(graph.validate().is_empty());

    graph.delete_node(fixture.q1);
    let violations = graph.validate();
    assert!(violations.contains(&Violation::DeadEnd {
        node_id: fixture.start
    }));
}

#[test]
fn test_duplicate_node_copies_content_but_not_edges() {
    let fixture = common::create_branching_graph();
    let mut graph = fixture.graph;

    let copy_id = graph.duplicate_node(fixture.q1).expect("q1 exists");
    assert_ne!(copy_id, fixture.q1);

    let original = graph.node(fixture.q1).expect("original exists");
    let copy = graph.node(copy_id).expect("copy exists");
    assert_eq!(copy.kind, original.kind);
    assert_eq!(copy.prompt, original.prompt);
    assert_eq!(copy.options, original.options);
    assert_eq!(copy.required, original.required);
    assert_eq!(copy.position.x, original.position.x + 50.0);

    assert!(graph.edges_from(copy_id).next().is_none());
}

#[test]
fn test_duplicate_missing_node_fails() {
    let mut graph = FlowGraph::new();
    let id = graph.add_node(QuestionKind::ShortText, Position::default());
    graph.delete_node(id);

    let err = graph.duplicate_node(id).unwrap_err();
    assert_eq!(err, GraphError::NodeNotFound { node_id: id });
}

#[test]
fn test_connect_rejects_self_loops() {
    let mut graph = FlowGraph::new();
    let id = graph.add_node(QuestionKind::ShortText, Position::default());

    let err = graph.connect(id, id, None).unwrap_err();
    assert_eq!(err, GraphError::SelfLoop { node_id: id });
}

#[test]
fn test_connect_rejects_duplicate_branch_keys() {
    let fixture = common::create_branching_graph();
    let mut graph = fixture.graph;

    let err = graph
        .connect(fixture.q1, fixture.end, Some("Yes".to_string()))
        .unwrap_err();
    assert!(matches!(
        err,
        GraphError::DuplicateBranch {
            source_id,
            branch_key: Some(ref key),
            ..
        } if source_id == fixture.q1 && key == "Yes"
    ));
}

#[test]
fn test_connect_rejects_second_default_edge() {
    let fixture = common::create_branching_graph();
    let mut graph = fixture.graph;

    // q2 already has a default edge to end.
    let err = graph.connect(fixture.q2, fixture.start, None).unwrap_err();
    assert!(matches!(
        err,
        GraphError::DuplicateBranch {
            source_id,
            branch_key: None,
            ..
        } if source_id == fixture.q2
    ));
}

#[test]
fn test_connect_rejects_missing_endpoints() {
    let mut graph = FlowGraph::new();
    let a = graph.add_node(QuestionKind::ShortText, Position::default());
    let b = graph.add_node(QuestionKind::End, Position::default());
    graph.delete_node(b);

    let err = graph.connect(a, b, None).unwrap_err();
    assert_eq!(err, GraphError::NodeNotFound { node_id: b });
}

#[test]
fn test_disconnect_then_reconnect_restores_an_equivalent_edge() {
    let fixture = common::create_branching_graph();
    let mut graph = fixture.graph;

    let edge_id = graph
        .edges_from(fixture.q2)
        .next()
        .expect("q2 has an edge")
        .id;
    graph.disconnect(edge_id);
    assert!(graph.edge(edge_id).is_none());

    // Idempotent.
    graph.disconnect(edge_id);

    let new_id = graph
        .connect(fixture.q2, fixture.end, None)
        .expect("reconnect succeeds");
    assert_ne!(new_id, edge_id);
    let edge = graph.edge(new_id).expect("edge exists");
    assert_eq!(edge.source, fixture.q2);
    assert_eq!(edge.target, fixture.end);
    assert!(edge.is_default());
}

#[test]
fn test_cycles_are_permitted_at_authoring_time() {
    let graph = common::create_cyclic_graph();
    // The cycle itself is not a violation; only the unreachable end node's
    // wiring shows up as nothing here since every non-end node has an edge.
    assert!(graph.validate().is_empty());
}

#[test]
fn test_validate_reports_missing_markers() {
    let mut graph = FlowGraph::new();
    let start = graph.start_node().expect("fresh graph has a start").id;
    graph.delete_node(start);

    let violations = graph.validate();
    assert!(violations.contains(&Violation::NoStartNode));
    assert!(violations.contains(&Violation::NoEndNode));
}

#[test]
fn test_validate_reports_multiple_starts() {
    let mut graph = FlowGraph::new();
    graph.add_node(QuestionKind::Start, Position::default());
    graph.add_node(QuestionKind::End, Position::default());

    let violations = graph.validate();
    assert!(violations.contains(&Violation::MultipleStartNodes { count: 2 }));
}

#[test]
fn test_validate_reports_stale_branch_keys() {
    let fixture = common::create_branching_graph();
    let mut graph = fixture.graph;

    // Renaming the options leaves the "Yes"/"No" branch edges stale.
    graph
        .update_node(
            fixture.q1,
            NodePatch {
                options: Some(vec!["Definitely".to_string(), "Not really".to_string()]),
                ..Default::default()
            },
        )
        .expect("q1 exists");

    let violations = graph.validate();
    assert!(violations.contains(&Violation::UnknownBranchKey {
        node_id: fixture.q1,
        branch_key: "Yes".to_string()
    }));
    assert!(violations.contains(&Violation::UnknownBranchKey {
        node_id: fixture.q1,
        branch_key: "No".to_string()
    }));
}

#[test]
fn test_validate_reports_too_few_options() {
    let mut graph = FlowGraph::new();
    let id = graph.add_node(QuestionKind::Dropdown, Position::default());
    graph
        .update_node(
            id,
            NodePatch {
                options: Some(vec!["Only".to_string()]),
                ..Default::default()
            },
        )
        .expect("node exists");

    let violations = graph.validate();
    assert!(violations.contains(&Violation::TooFewOptions {
        node_id: id,
        count: 1
    }));
}
