use crate::graph::NodeId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier for an edge, unique within one graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(pub(crate) u64);

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// A directed transition between two nodes.
///
/// With a `branch_key`, the edge is conditional: it applies only when the
/// answer recorded at the source node selects that key. Without one, it is
/// the default edge taken for non-branching kinds and unmatched answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowEdge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    pub branch_key: Option<String>,
}

impl FlowEdge {
    pub fn is_default(&self) -> bool {
        self.branch_key.is_none()
    }
}
