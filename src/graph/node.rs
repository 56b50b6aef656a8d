use crate::error::GraphError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identifier for a node, unique within one graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub(crate) u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Canvas coordinates of a node in the visual editor.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The offset applied when duplicating a node, so the copy does not
    /// land exactly on top of the original.
    pub(crate) fn nudged(self) -> Self {
        Self {
            x: self.x + 50.0,
            y: self.y + 50.0,
        }
    }
}

/// The closed set of question kinds a survey step can have.
///
/// `start` and `end` are flow markers rather than questions; only
/// `single-choice` and `multi-choice` have outgoing edges that branch on
/// the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    Start,
    End,
    ShortText,
    LongText,
    Email,
    Number,
    Date,
    SingleChoice,
    MultiChoice,
    Dropdown,
    Scale,
    Rating,
}

impl QuestionKind {
    /// Kinds that carry an ordered option list.
    pub fn has_options(self) -> bool {
        matches!(
            self,
            QuestionKind::SingleChoice | QuestionKind::MultiChoice | QuestionKind::Dropdown
        )
    }

    /// Kinds whose outgoing edges may carry branch keys. Dropdown answers
    /// never route; a dropdown node always takes its default edge.
    pub fn is_branching(self) -> bool {
        matches!(self, QuestionKind::SingleChoice | QuestionKind::MultiChoice)
    }

    /// Flow markers are neither questions nor answerable.
    pub fn is_marker(self) -> bool {
        matches!(self, QuestionKind::Start | QuestionKind::End)
    }

    /// The wire name of this kind, as the editor serializes it.
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionKind::Start => "start",
            QuestionKind::End => "end",
            QuestionKind::ShortText => "short-text",
            QuestionKind::LongText => "long-text",
            QuestionKind::Email => "email",
            QuestionKind::Number => "number",
            QuestionKind::Date => "date",
            QuestionKind::SingleChoice => "single-choice",
            QuestionKind::MultiChoice => "multi-choice",
            QuestionKind::Dropdown => "dropdown",
            QuestionKind::Scale => "scale",
            QuestionKind::Rating => "rating",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QuestionKind {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(QuestionKind::Start),
            "end" => Ok(QuestionKind::End),
            "short-text" => Ok(QuestionKind::ShortText),
            "long-text" => Ok(QuestionKind::LongText),
            "email" => Ok(QuestionKind::Email),
            "number" => Ok(QuestionKind::Number),
            "date" => Ok(QuestionKind::Date),
            "single-choice" => Ok(QuestionKind::SingleChoice),
            "multi-choice" => Ok(QuestionKind::MultiChoice),
            "dropdown" => Ok(QuestionKind::Dropdown),
            "scale" => Ok(QuestionKind::Scale),
            "rating" => Ok(QuestionKind::Rating),
            other => Err(GraphError::InvalidKind {
                kind: other.to_string(),
            }),
        }
    }
}

/// One step in the survey: a question, or a start/end marker.
///
/// A node never references other nodes directly; every relationship in the
/// graph is an id lookup through the owning [`crate::graph::FlowGraph`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionNode {
    pub id: NodeId,
    pub kind: QuestionKind,
    pub prompt: String,
    pub description: Option<String>,
    pub required: bool,
    /// Present only for kinds where `kind.has_options()` holds; the editor
    /// keeps at least two entries while present.
    pub options: Option<Vec<String>>,
    pub position: Position,
}

impl QuestionNode {
    /// Creates a node with kind-appropriate defaults, matching what the
    /// editor palette produces.
    pub(crate) fn with_defaults(id: NodeId, kind: QuestionKind, position: Position) -> Self {
        let prompt = match kind {
            QuestionKind::Start => "Start Survey".to_string(),
            QuestionKind::End => "End Survey".to_string(),
            _ => "New Question".to_string(),
        };
        let options = kind
            .has_options()
            .then(|| vec!["Option 1".to_string(), "Option 2".to_string()]);
        Self {
            id,
            kind,
            prompt,
            description: None,
            required: false,
            options,
            position,
        }
    }
}

/// A partial update merged into a node by [`crate::graph::FlowGraph::update_node`].
///
/// `None` fields are left untouched. The node's kind is fixed at creation and
/// cannot be patched.
#[derive(Debug, Clone, Default)]
pub struct NodePatch {
    pub prompt: Option<String>,
    pub description: Option<Option<String>>,
    pub required: Option<bool>,
    pub options: Option<Vec<String>>,
    pub position: Option<Position>,
}
