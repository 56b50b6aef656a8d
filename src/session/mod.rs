//! Transient run-time state for one respondent walking a graph.

use crate::graph::NodeId;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

mod answer;

pub use answer::Answer;

/// One respondent's in-progress traversal: recorded answers, the visited
/// path in order, and the node currently presented.
///
/// A session is owned by exactly one run and holds no reference to the
/// graph; the [`crate::interpreter::Interpreter`] pairs the two. Abandoning
/// a run is simply dropping the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    answers: AHashMap<NodeId, Answer>,
    visited_path: Vec<NodeId>,
    current: NodeId,
}

impl Session {
    pub(crate) fn new(visited_path: Vec<NodeId>, current: NodeId) -> Self {
        Self {
            answers: AHashMap::new(),
            visited_path,
            current,
        }
    }

    /// The node currently being presented.
    pub fn current_node(&self) -> NodeId {
        self.current
    }

    pub(crate) fn set_current(&mut self, node_id: NodeId) {
        self.current = node_id;
    }

    /// Records an answer for the current node, replacing any previous one.
    ///
    /// The preview records answers live as the widget changes, before any
    /// navigation happens; retreating leaves recorded answers in place so
    /// re-advancing reproduces the same path.
    pub fn record(&mut self, answer: Answer) {
        self.answers.insert(self.current, answer);
    }

    /// The answer recorded at a node, if any.
    pub fn answer_at(&self, node_id: NodeId) -> Option<&Answer> {
        self.answers.get(&node_id)
    }

    /// All recorded answers, keyed by node id.
    pub fn answers(&self) -> &AHashMap<NodeId, Answer> {
        &self.answers
    }

    /// The ids visited so far, in visitation order, starting at the start
    /// marker.
    pub fn visited_path(&self) -> &[NodeId] {
        &self.visited_path
    }

    pub(crate) fn push_visited(&mut self, node_id: NodeId) {
        self.visited_path.push(node_id);
    }

    pub(crate) fn pop_visited(&mut self) -> Option<NodeId> {
        self.visited_path.pop()
    }

    pub(crate) fn has_visited(&self, node_id: NodeId) -> bool {
        self.visited_path.contains(&node_id)
    }
}
