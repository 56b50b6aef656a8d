//! # Anketo - Survey Flow Graph Engine
//!
//! **Anketo** models branching questionnaires as directed graphs of question
//! nodes and interprets them at run time: conditional edges route a
//! respondent to different next questions depending on the answer just
//! given, with back-navigation, required-field validation and progress
//! tracking along the way.
//!
//! ## Core Workflow
//!
//! The engine is split into two collaborating components:
//!
//! 1.  **Flow Graph Store** ([`graph::FlowGraph`]): owns the nodes and edges
//!     of one survey and provides the editing primitives (add, update,
//!     duplicate and delete nodes; connect and disconnect edges). Structural
//!     problems are surfaced by [`graph::FlowGraph::validate`] as warnings
//!     rather than blocking edits, so drafts may pass through invalid states
//!     freely.
//! 2.  **Flow Interpreter** ([`interpreter::Interpreter`]): walks a finished
//!     graph for one respondent's [`session::Session`], resolving branch
//!     edges per selected option value and falling back to the default edge.
//!     Dead ends never surface as errors mid-survey; they degrade to the
//!     graph's end node.
//!
//! Surveys enter and leave the engine through [`survey::SurveyDefinition`],
//! the canonical editor-export shape; custom formats convert through the
//! [`survey::IntoSurvey`] trait.
//!
//! ## Quick Start
//!
//! ```rust
//! use anketo::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // A fresh graph always holds the start marker.
//!     let mut graph = FlowGraph::new();
//!     let start = graph.start_node().expect("fresh graph has a start").id;
//!
//!     // One branching question, one follow-up, one end marker.
//!     let helped = graph.add_node(QuestionKind::SingleChoice, Position::new(400.0, 250.0));
//!     graph.update_node(
//!         helped,
//!         NodePatch {
//!             prompt: Some("Did the consultation help you?".to_string()),
//!             options: Some(vec!["Yes".to_string(), "No".to_string()]),
//!             ..Default::default()
//!         },
//!     )?;
//!     let details = graph.add_node(QuestionKind::LongText, Position::new(400.0, 400.0));
//!     let end = graph.add_node(QuestionKind::End, Position::new(400.0, 550.0));
//!
//!     graph.connect(start, helped, None)?;
//!     graph.connect(helped, details, Some("Yes".to_string()))?;
//!     graph.connect(helped, end, Some("No".to_string()))?;
//!     graph.connect(details, end, None)?;
//!     assert!(graph.validate().is_empty());
//!
//!     // Walk it as a respondent answering "No": the follow-up is skipped.
//!     let interpreter = Interpreter::new(&graph)?;
//!     let mut session = interpreter.begin();
//!     assert_eq!(session.current_node(), helped);
//!
//!     interpreter.advance(&mut session, Some(Answer::from("No")))?;
//!     assert!(interpreter.is_complete(&session));
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod graph;
pub mod interpreter;
pub mod prelude;
pub mod session;
pub mod survey;
