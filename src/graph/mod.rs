//! The authoring-time flow graph store.
//!
//! A [`FlowGraph`] owns every node and edge of one survey and is the only
//! path through which they are mutated. Transient invalid states (no end
//! node yet, a question left without an outgoing edge) are allowed while
//! editing; [`FlowGraph::validate`] surfaces them as data instead of
//! blocking the edit.

use crate::error::GraphError;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

mod edge;
mod node;
pub mod snapshot;
pub mod validate;

pub use edge::{EdgeId, FlowEdge};
pub use node::{NodeId, NodePatch, Position, QuestionKind, QuestionNode};

/// The aggregate of one survey's nodes and edges, keyed by id.
///
/// Ids are handed out by per-graph monotonic counters and are never reused,
/// so a deleted node's id stays dangling-safe: lookups simply miss.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowGraph {
    nodes: AHashMap<NodeId, QuestionNode>,
    edges: AHashMap<EdgeId, FlowEdge>,
    next_node_id: u64,
    next_edge_id: u64,
}

impl Default for FlowGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl FlowGraph {
    /// Creates a graph holding the single `start` node every editing
    /// session begins with.
    pub fn new() -> Self {
        let mut graph = Self::bare();
        graph.add_node(QuestionKind::Start, Position::new(400.0, 100.0));
        graph
    }

    /// A graph with no nodes at all, used when rebuilding from a definition.
    pub(crate) fn bare() -> Self {
        Self {
            nodes: AHashMap::new(),
            edges: AHashMap::new(),
            next_node_id: 0,
            next_edge_id: 0,
        }
    }

    /// Creates a node with kind-appropriate defaults and returns its id.
    pub fn add_node(&mut self, kind: QuestionKind, position: Position) -> NodeId {
        let id = NodeId(self.next_node_id);
        self.next_node_id += 1;
        self.nodes
            .insert(id, QuestionNode::with_defaults(id, kind, position));
        id
    }

    /// Merges a partial update into an existing node.
    ///
    /// The `options` field of the patch only applies to kinds that carry
    /// options; for any other kind it is ignored, keeping the "options only
    /// on choice kinds" shape structural.
    pub fn update_node(&mut self, node_id: NodeId, patch: NodePatch) -> Result<(), GraphError> {
        let node = self
            .nodes
            .get_mut(&node_id)
            .ok_or(GraphError::NodeNotFound { node_id })?;
        if let Some(prompt) = patch.prompt {
            node.prompt = prompt;
        }
        if let Some(description) = patch.description {
            node.description = description;
        }
        if let Some(required) = patch.required {
            node.required = required;
        }
        if let Some(options) = patch.options {
            if node.kind.has_options() {
                node.options = Some(options);
            }
        }
        if let Some(position) = patch.position {
            node.position = position;
        }
        Ok(())
    }

    /// Removes a node and every edge touching it. Deleting an id that is
    /// already gone is a no-op.
    pub fn delete_node(&mut self, node_id: NodeId) {
        if self.nodes.remove(&node_id).is_none() {
            return;
        }
        self.edges
            .retain(|_, edge| edge.source != node_id && edge.target != node_id);
    }

    /// Creates a structurally identical copy of a node with a fresh id and
    /// no edges; the caller re-wires it.
    pub fn duplicate_node(&mut self, node_id: NodeId) -> Result<NodeId, GraphError> {
        let original = self
            .nodes
            .get(&node_id)
            .ok_or(GraphError::NodeNotFound { node_id })?;
        let mut copy = original.clone();
        copy.id = NodeId(self.next_node_id);
        self.next_node_id += 1;
        copy.position = copy.position.nudged();
        let new_id = copy.id;
        self.nodes.insert(new_id, copy);
        Ok(new_id)
    }

    /// Creates a directed edge from `source` to `target`.
    ///
    /// A `branch_key` makes the edge conditional on the answer at `source`;
    /// `None` creates the default edge. At most one edge may exist per
    /// distinct branch key from one source, and at most one default.
    /// Cycles elsewhere in the graph are permitted at authoring time.
    pub fn connect(
        &mut self,
        source: NodeId,
        target: NodeId,
        branch_key: Option<String>,
    ) -> Result<EdgeId, GraphError> {
        if source == target {
            return Err(GraphError::SelfLoop { node_id: source });
        }
        for endpoint in [source, target] {
            if !self.nodes.contains_key(&endpoint) {
                return Err(GraphError::NodeNotFound { node_id: endpoint });
            }
        }
        if let Some(existing) = self
            .edges
            .values()
            .find(|edge| edge.source == source && edge.branch_key == branch_key)
        {
            return Err(GraphError::DuplicateBranch {
                source_id: source,
                existing: existing.id,
                branch_key,
            });
        }

        let id = EdgeId(self.next_edge_id);
        self.next_edge_id += 1;
        self.edges.insert(
            id,
            FlowEdge {
                id,
                source,
                target,
                branch_key,
            },
        );
        Ok(id)
    }

    /// Removes an edge. Disconnecting an id that is already gone is a no-op.
    pub fn disconnect(&mut self, edge_id: EdgeId) {
        self.edges.remove(&edge_id);
    }

    pub fn node(&self, node_id: NodeId) -> Option<&QuestionNode> {
        self.nodes.get(&node_id)
    }

    pub fn contains_node(&self, node_id: NodeId) -> bool {
        self.nodes.contains_key(&node_id)
    }

    pub fn edge(&self, edge_id: EdgeId) -> Option<&FlowEdge> {
        self.edges.get(&edge_id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &QuestionNode> {
        self.nodes.values()
    }

    pub fn edges(&self) -> impl Iterator<Item = &FlowEdge> {
        self.edges.values()
    }

    /// Outgoing edges of one node, in no particular order.
    pub fn edges_from(&self, source: NodeId) -> impl Iterator<Item = &FlowEdge> {
        self.edges.values().filter(move |edge| edge.source == source)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The unique `start` node, when exactly one exists.
    pub fn start_node(&self) -> Option<&QuestionNode> {
        let mut starts = self
            .nodes
            .values()
            .filter(|node| node.kind == QuestionKind::Start);
        match (starts.next(), starts.next()) {
            (Some(start), None) => Some(start),
            _ => None,
        }
    }

    /// The earliest-authored `end` node, used as the fallback terminal when
    /// a run hits a dead end.
    pub fn end_node(&self) -> Option<&QuestionNode> {
        self.nodes
            .values()
            .filter(|node| node.kind == QuestionKind::End)
            .min_by_key(|node| node.id)
    }

    /// Count of answerable steps, excluding the start/end markers.
    pub fn question_count(&self) -> usize {
        self.nodes
            .values()
            .filter(|node| !node.kind.is_marker())
            .count()
    }
}
