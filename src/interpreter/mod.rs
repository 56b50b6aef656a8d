//! The answer-driven flow interpreter.
//!
//! An [`Interpreter`] pairs a finished, read-only [`FlowGraph`] with one
//! respondent's [`Session`] and computes navigation: which node to show
//! next, how far back the respondent may go, and how close to done the run
//! is.
//!
//! Once an interpreter has been constructed, no respondent-facing call can
//! fail except the required-answer check: an unresolvable transition
//! degrades to the graph's end node rather than surfacing an error
//! mid-survey. Broken graphs are meant to be caught beforehand by
//! [`FlowGraph::validate`].

use crate::error::SessionError;
use crate::graph::validate::Violation;
use crate::graph::{FlowGraph, NodeId, QuestionKind};
use crate::session::{Answer, Session};
use itertools::Itertools;

/// Walks a graph as a questionnaire with conditional navigation.
#[derive(Debug)]
pub struct Interpreter<'a> {
    graph: &'a FlowGraph,
    start: NodeId,
    end: NodeId,
}

impl<'a> Interpreter<'a> {
    /// Creates an interpreter over a finished graph.
    ///
    /// The graph must contain exactly one `start` node and at least one
    /// `end` node; anything else is reported as
    /// [`SessionError::GraphNotRunnable`] with the matching violations.
    /// Other structural defects (dead ends, stale branch keys) do not block
    /// a run; they degrade per the fallback rules instead.
    pub fn new(graph: &'a FlowGraph) -> Result<Self, SessionError> {
        let violations: Vec<Violation> = graph
            .validate()
            .into_iter()
            .filter(|violation| {
                matches!(
                    violation,
                    Violation::NoStartNode
                        | Violation::MultipleStartNodes { .. }
                        | Violation::NoEndNode
                )
            })
            .collect();
        if !violations.is_empty() {
            return Err(SessionError::GraphNotRunnable { violations });
        }

        // Both lookups are covered by the violation check above.
        let start = graph
            .start_node()
            .map(|node| node.id)
            .ok_or(SessionError::GraphNotRunnable {
                violations: vec![Violation::NoStartNode],
            })?;
        let end = graph
            .end_node()
            .map(|node| node.id)
            .ok_or(SessionError::GraphNotRunnable {
                violations: vec![Violation::NoEndNode],
            })?;
        Ok(Self { graph, start, end })
    }

    /// Starts a session positioned at the node following `start`.
    ///
    /// When the start marker has no outgoing edge, the session begins
    /// directly at the end node, same as any other dead end.
    pub fn begin(&self) -> Session {
        let first = self.resolve_next(self.start, None).unwrap_or(self.end);
        Session::new(vec![self.start, first], first)
    }

    /// Computes the node that follows `source` for a given answer.
    ///
    /// For branching kinds, branch edges are matched per selected option
    /// value, in the order the source node defines its options; when
    /// nothing matches, the default edge applies. Non-branching kinds
    /// (dropdown included) always take the default edge. `None` means no
    /// transition exists at all, and the caller falls back to the end node.
    pub fn resolve_next(&self, source: NodeId, answer: Option<&Answer>) -> Option<NodeId> {
        let node = self.graph.node(source)?;

        if let (true, Some(options), Some(answer)) =
            (node.kind.is_branching(), &node.options, answer)
        {
            let selected = answer.selected_values();
            for option in options {
                if !selected.iter().any(|value| value == option) {
                    continue;
                }
                let matched = self
                    .graph
                    .edges_from(source)
                    .find(|edge| edge.branch_key.as_deref() == Some(option.as_str()));
                if let Some(edge) = matched {
                    return Some(edge.target);
                }
            }
        }

        self.graph
            .edges_from(source)
            .find(|edge| edge.is_default())
            .map(|edge| edge.target)
    }

    /// Records `answer` at the current node (when given) and moves the
    /// session to the resolved next node.
    ///
    /// Passing `None` advances on whatever [`Session::record`] already
    /// stored, so retreating and re-advancing without touching the answer
    /// reproduces the same path. A required node with no non-empty answer
    /// rejects the call with [`SessionError::ValidationRequired`]; the
    /// session does not move and nothing is recorded. Advancing at an end
    /// node is a no-op.
    ///
    /// A session is bounded to one forward step per node in the graph;
    /// past that, authoring-time cycles are cut off by forcing the end
    /// node.
    pub fn advance(
        &self,
        session: &mut Session,
        answer: Option<Answer>,
    ) -> Result<NodeId, SessionError> {
        let current = session.current_node();
        let Some(node) = self.graph.node(current) else {
            return Ok(self.force_end(session));
        };
        if node.kind == QuestionKind::End {
            return Ok(current);
        }

        // Validate before recording: a rejected advance must not overwrite
        // an answer already stored at the node.
        let unanswered = match &answer {
            Some(answer) => answer.is_empty(),
            None => session.answer_at(current).is_none_or(Answer::is_empty),
        };
        if node.required && unanswered {
            return Err(SessionError::ValidationRequired { node_id: current });
        }
        if let Some(answer) = answer {
            session.record(answer);
        }

        if session.visited_path().len() >= self.graph.node_count() {
            return Ok(self.force_end(session));
        }

        let next = self
            .resolve_next(current, session.answer_at(current))
            .unwrap_or(self.end);
        session.push_visited(next);
        session.set_current(next);
        Ok(next)
    }

    /// Steps back to the previously visited node.
    ///
    /// Retreating from the first question returns to the start marker;
    /// only a path with fewer than two entries cannot retreat and leaves
    /// the session in place. The answer recorded at the node being left
    /// stays in place.
    pub fn retreat(&self, session: &mut Session) -> NodeId {
        if session.visited_path().len() < 2 {
            return session.current_node();
        }
        session.pop_visited();
        // Non-empty by the length check above.
        if let Some(&previous) = session.visited_path().last() {
            session.set_current(previous);
        }
        session.current_node()
    }

    /// Moves the session directly to `node_id`, outside the answer-driven
    /// flow. Used by outline/review navigation; reachability is not
    /// checked. Ids not present in the graph are ignored.
    pub fn jump_to(&self, session: &mut Session, node_id: NodeId) {
        if !self.graph.contains_node(node_id) {
            return;
        }
        if !session.has_visited(node_id) {
            session.push_visited(node_id);
        }
        session.set_current(node_id);
    }

    /// Whether the session may move forward: false at an end node and at a
    /// required question with no non-empty answer.
    pub fn can_advance(&self, session: &Session) -> bool {
        let Some(node) = self.graph.node(session.current_node()) else {
            return false;
        };
        if node.kind == QuestionKind::End {
            return false;
        }
        if node.required {
            return session
                .answer_at(node.id)
                .is_some_and(|answer| !answer.is_empty());
        }
        true
    }

    /// Whether the session has reached an end node.
    pub fn is_complete(&self, session: &Session) -> bool {
        self.graph
            .node(session.current_node())
            .is_some_and(|node| node.kind == QuestionKind::End)
    }

    /// Completion fraction in `0.0..=1.0`: distinct visited questions over
    /// all questions in the graph.
    ///
    /// The denominator counts every question even when branching makes some
    /// unreachable in a single run, so a finished branched run can report
    /// less than 1.0.
    pub fn progress(&self, session: &Session) -> f64 {
        let total = self.graph.question_count();
        if total == 0 {
            return 0.0;
        }
        let visited = session
            .visited_path()
            .iter()
            .unique()
            .filter(|&&id| {
                self.graph
                    .node(id)
                    .is_some_and(|node| !node.kind.is_marker())
            })
            .count();
        visited as f64 / total as f64
    }

    fn force_end(&self, session: &mut Session) -> NodeId {
        session.push_visited(self.end);
        session.set_current(self.end);
        self.end
    }
}
