use crate::graph::validate::Violation;
use crate::graph::{EdgeId, NodeId};
use thiserror::Error;

/// Errors raised by the flow graph store's mutation operations.
///
/// All of these are caused by editor misuse and are recoverable by retrying
/// the call with corrected arguments.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("'{kind}' is not a recognized question kind")]
    InvalidKind { kind: String },

    #[error("Node '{node_id}' not found in the graph")]
    NodeNotFound { node_id: NodeId },

    #[error("Node '{node_id}' cannot be connected to itself")]
    SelfLoop { node_id: NodeId },

    #[error("Node '{source_id}' already has edge '{existing}' for {}",
        branch_key.as_deref().map_or_else(|| "the default transition".to_string(), |k| format!("branch '{k}'")))]
    DuplicateBranch {
        source_id: NodeId,
        existing: EdgeId,
        branch_key: Option<String>,
    },
}

/// Errors raised while driving an interpreter session.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error("Question '{node_id}' is required and has no answer")]
    ValidationRequired { node_id: NodeId },

    #[error("The graph is not runnable: {}",
        violations.iter().map(|v| v.to_string()).collect::<Vec<_>>().join("; "))]
    GraphNotRunnable { violations: Vec<Violation> },
}

/// Errors raised when converting an editor export into a survey definition
/// or rebuilding a graph from one.
#[derive(Error, Debug, Clone)]
pub enum SurveyConversionError {
    #[error("Invalid survey data: {0}")]
    ValidationError(String),

    #[error("Edge references node '{missing_id}', which is not present in the survey")]
    DanglingEdge { missing_id: String },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Errors raised while saving or loading a binary graph snapshot.
#[derive(Error, Debug, Clone)]
pub enum SnapshotError {
    #[error("{0}")]
    Generic(String),
}
