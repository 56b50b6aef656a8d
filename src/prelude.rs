//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the anketo crate. Import
//! this module to get access to the core functionality without having to
//! import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use anketo::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let json = std::fs::read_to_string("path/to/survey.json")?;
//! let definition: SurveyDefinition = serde_json::from_str(&json)?;
//! let graph = definition.into_graph()?;
//!
//! for violation in graph.validate() {
//!     eprintln!("warning: {violation}");
//! }
//!
//! let interpreter = Interpreter::new(&graph)?;
//! let mut session = interpreter.begin();
//! interpreter.advance(&mut session, Some(Answer::from("fine, thanks")))?;
//! # Ok(())
//! # }
//! ```

// Graph store and structural types
pub use crate::graph::validate::Violation;
pub use crate::graph::{
    EdgeId, FlowEdge, FlowGraph, NodeId, NodePatch, Position, QuestionKind, QuestionNode,
};

// Interpreter and session state
pub use crate::interpreter::Interpreter;
pub use crate::session::{Answer, Session};

// Editor-facing definition model
pub use crate::survey::{
    IntoSurvey, SurveyDefinition, SurveyEdgeDefinition, SurveyNodeDefinition,
};

// Error types
pub use crate::error::{GraphError, SessionError, SnapshotError, SurveyConversionError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
