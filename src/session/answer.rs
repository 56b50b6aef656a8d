use serde::{Deserialize, Serialize};
use std::fmt;

/// The value a respondent records at one node.
///
/// Which variant applies depends on the node kind: free-text kinds record
/// `Text`, choice kinds record `Text` (single) or `Selection` (multi), and
/// scale/rating kinds record `Number`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Answer {
    Text(String),
    Selection(Vec<String>),
    Number(f64),
}

impl Answer {
    /// Whether this answer counts as unanswered for required-field checks.
    /// An empty string and an empty selection are both unanswered; a number
    /// is always an answer.
    pub fn is_empty(&self) -> bool {
        match self {
            Answer::Text(text) => text.is_empty(),
            Answer::Selection(values) => values.is_empty(),
            Answer::Number(_) => false,
        }
    }

    /// The option values this answer selects, used for branch matching.
    /// Numbers select nothing; branching only applies to choice answers.
    pub fn selected_values(&self) -> &[String] {
        match self {
            Answer::Text(text) => std::slice::from_ref(text),
            Answer::Selection(values) => values,
            Answer::Number(_) => &[],
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Text(text) => write!(f, "{}", text),
            Answer::Selection(values) => write!(f, "{}", values.join(", ")),
            Answer::Number(n) => {
                if n.fract() == 0.0 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
        }
    }
}

impl From<&str> for Answer {
    fn from(text: &str) -> Self {
        Answer::Text(text.to_string())
    }
}

impl From<String> for Answer {
    fn from(text: String) -> Self {
        Answer::Text(text)
    }
}

impl From<Vec<String>> for Answer {
    fn from(values: Vec<String>) -> Self {
        Answer::Selection(values)
    }
}

impl From<f64> for Answer {
    fn from(n: f64) -> Self {
        Answer::Number(n)
    }
}
