//! Common test utilities for building survey graphs.
use anketo::prelude::*;

/// Handles into the branching fixture graph.
#[allow(dead_code)]
pub struct BranchingGraph {
    pub graph: FlowGraph,
    pub start: NodeId,
    pub q1: NodeId,
    pub q2: NodeId,
    pub end: NodeId,
}

/// Creates the canonical branching fixture:
///
/// `start -> Q1(single-choice, ["Yes", "No"]) --Yes--> Q2(long-text) -> end`
/// `Q1 --No--> end`
#[allow(dead_code)]
pub fn create_branching_graph() -> BranchingGraph {
    let mut graph = FlowGraph::new();
    let start = graph.start_node().expect("fresh graph has a start").id;

    let q1 = graph.add_node(QuestionKind::SingleChoice, Position::new(400.0, 250.0));
    graph
        .update_node(
            q1,
            NodePatch {
                prompt: Some("Did the consultation help you?".to_string()),
                options: Some(vec!["Yes".to_string(), "No".to_string()]),
                ..Default::default()
            },
        )
        .expect("q1 exists");

    let q2 = graph.add_node(QuestionKind::LongText, Position::new(400.0, 400.0));
    graph
        .update_node(
            q2,
            NodePatch {
                prompt: Some("What helped the most?".to_string()),
                ..Default::default()
            },
        )
        .expect("q2 exists");

    let end = graph.add_node(QuestionKind::End, Position::new(400.0, 550.0));

    graph.connect(start, q1, None).expect("start -> q1");
    graph
        .connect(q1, q2, Some("Yes".to_string()))
        .expect("q1 --Yes--> q2");
    graph
        .connect(q1, end, Some("No".to_string()))
        .expect("q1 --No--> end");
    graph.connect(q2, end, None).expect("q2 -> end");

    BranchingGraph {
        graph,
        start,
        q1,
        q2,
        end,
    }
}

/// Handles into the linear fixture graph.
#[allow(dead_code)]
pub struct LinearGraph {
    pub graph: FlowGraph,
    pub start: NodeId,
    pub name: NodeId,
    pub rating: NodeId,
    pub end: NodeId,
}

/// Creates a straight-line survey with a required first question:
///
/// `start -> name(short-text, required) -> rating(scale) -> end`
#[allow(dead_code)]
pub fn create_linear_graph() -> LinearGraph {
    let mut graph = FlowGraph::new();
    let start = graph.start_node().expect("fresh graph has a start").id;

    let name = graph.add_node(QuestionKind::ShortText, Position::new(400.0, 250.0));
    graph
        .update_node(
            name,
            NodePatch {
                prompt: Some("What is your name?".to_string()),
                required: Some(true),
                ..Default::default()
            },
        )
        .expect("name exists");

    let rating = graph.add_node(QuestionKind::Scale, Position::new(400.0, 400.0));
    let end = graph.add_node(QuestionKind::End, Position::new(400.0, 550.0));

    graph.connect(start, name, None).expect("start -> name");
    graph.connect(name, rating, None).expect("name -> rating");
    graph.connect(rating, end, None).expect("rating -> end");

    LinearGraph {
        graph,
        start,
        name,
        rating,
        end,
    }
}

/// Creates a graph whose default edges form a true cycle: `q1 -> q2 -> q1`.
/// An end node exists but is not wired in.
#[allow(dead_code)]
pub fn create_cyclic_graph() -> FlowGraph {
    let mut graph = FlowGraph::new();
    let start = graph.start_node().expect("fresh graph has a start").id;

    let q1 = graph.add_node(QuestionKind::ShortText, Position::new(400.0, 250.0));
    let q2 = graph.add_node(QuestionKind::ShortText, Position::new(400.0, 400.0));
    graph.add_node(QuestionKind::End, Position::new(400.0, 550.0));

    graph.connect(start, q1, None).expect("start -> q1");
    graph.connect(q1, q2, None).expect("q1 -> q2");
    graph.connect(q2, q1, None).expect("q2 -> q1");

    graph
}

/// A builder-style JSON export of the branching fixture, in the canonical
/// definition shape.
#[allow(dead_code)]
pub const BRANCHING_SURVEY_JSON: &str = r#"{
    "title": "Consultation Feedback",
    "nodes": [
        { "id": "start", "kind": "start", "prompt": "Start Survey" },
        {
            "id": "helped",
            "kind": "single-choice",
            "prompt": "Did the consultation help you?",
            "required": true,
            "options": ["Yes", "No"],
            "position": { "x": 400.0, "y": 250.0 }
        },
        {
            "id": "details",
            "kind": "long-text",
            "prompt": "What helped the most?",
            "position": { "x": 400.0, "y": 400.0 }
        },
        { "id": "end", "kind": "end", "prompt": "End Survey" }
    ],
    "edges": [
        { "source": "start", "target": "helped" },
        { "source": "helped", "target": "details", "branchKey": "Yes" },
        { "source": "helped", "target": "end", "branchKey": "No" },
        { "source": "details", "target": "end" }
    ]
}"#;
