//! Structural validation of an authored graph.
//!
//! Violations are reported as data, never as errors: the editor shows them
//! as warnings and is free to save a broken draft anyway. Catching these
//! before a respondent runs the survey is what keeps the interpreter free of
//! hard-failure paths.

use crate::graph::{FlowGraph, NodeId, QuestionKind};
use itertools::Itertools;
use std::fmt;

/// A structural defect in an authored graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// No `start` node exists; the interpreter has nowhere to begin.
    NoStartNode,
    /// More than one `start` node exists.
    MultipleStartNodes { count: usize },
    /// No `end` node exists; every run would rely on the missing fallback.
    NoEndNode,
    /// A non-end node has no outgoing edge, so runs passing through it fall
    /// back to the end node early.
    DeadEnd { node_id: NodeId },
    /// A branch edge's key does not match any current option of its
    /// branching source node.
    UnknownBranchKey { node_id: NodeId, branch_key: String },
    /// A node that carries options has fewer than the two the editor
    /// guarantees.
    TooFewOptions { node_id: NodeId, count: usize },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::NoStartNode => write!(f, "the graph has no start node"),
            Violation::MultipleStartNodes { count } => {
                write!(f, "the graph has {count} start nodes, expected exactly one")
            }
            Violation::NoEndNode => write!(f, "the graph has no end node"),
            Violation::DeadEnd { node_id } => {
                write!(f, "node '{node_id}' has no outgoing edge")
            }
            Violation::UnknownBranchKey {
                node_id,
                branch_key,
            } => write!(
                f,
                "node '{node_id}' has a branch edge for '{branch_key}', which is not one of its options"
            ),
            Violation::TooFewOptions { node_id, count } => {
                write!(f, "node '{node_id}' has {count} options, expected at least 2")
            }
        }
    }
}

impl FlowGraph {
    /// Checks the structural invariants a runnable graph must satisfy and
    /// returns every violation found, ordered by node id for stable output.
    pub fn validate(&self) -> Vec<Violation> {
        let mut violations = Vec::new();

        let start_count = self
            .nodes()
            .filter(|node| node.kind == QuestionKind::Start)
            .count();
        match start_count {
            0 => violations.push(Violation::NoStartNode),
            1 => {}
            count => violations.push(Violation::MultipleStartNodes { count }),
        }

        if !self.nodes().any(|node| node.kind == QuestionKind::End) {
            violations.push(Violation::NoEndNode);
        }

        for node in self.nodes().sorted_by_key(|node| node.id) {
            if node.kind != QuestionKind::End && self.edges_from(node.id).next().is_none() {
                violations.push(Violation::DeadEnd { node_id: node.id });
            }

            if let Some(options) = &node.options {
                if options.len() < 2 {
                    violations.push(Violation::TooFewOptions {
                        node_id: node.id,
                        count: options.len(),
                    });
                }
            }

            if node.kind.is_branching() {
                let options = node.options.as_deref().unwrap_or(&[]);
                for edge in self
                    .edges_from(node.id)
                    .sorted_by_key(|edge| edge.id)
                {
                    if let Some(key) = &edge.branch_key {
                        if !options.iter().any(|option| option == key) {
                            violations.push(Violation::UnknownBranchKey {
                                node_id: node.id,
                                branch_key: key.clone(),
                            });
                        }
                    }
                }
            }
        }

        violations
    }
}
