use super::definition::SurveyDefinition;
use crate::error::SurveyConversionError;

/// A trait for custom editor formats that can be converted into a
/// [`SurveyDefinition`].
///
/// This is the extension point that keeps the engine format-agnostic: parse
/// whatever your editor exports into your own structs, then implement
/// `IntoSurvey` to translate them into the canonical definition the graph
/// is rebuilt from.
///
/// # Example
///
/// ```rust
/// use anketo::survey::{IntoSurvey, SurveyDefinition, SurveyNodeDefinition};
/// use anketo::error::SurveyConversionError;
///
/// struct MyExportedStep { id: String, question: String, step_kind: String }
/// struct MyExport { steps: Vec<MyExportedStep> }
///
/// impl IntoSurvey for MyExport {
///     fn into_survey(self) -> Result<SurveyDefinition, SurveyConversionError> {
///         let nodes = self
///             .steps
///             .into_iter()
///             .map(|step| SurveyNodeDefinition {
///                 id: step.id,
///                 kind: step.step_kind,
///                 prompt: step.question,
///                 description: None,
///                 required: false,
///                 options: None,
///                 position: Default::default(),
///             })
///             .collect();
///         Ok(SurveyDefinition {
///             title: None,
///             nodes,
///             edges: vec![], // convert your transitions here as well
///         })
///     }
/// }
/// ```
pub trait IntoSurvey {
    /// Consumes the object and converts it into the canonical survey shape.
    fn into_survey(self) -> Result<SurveyDefinition, SurveyConversionError>;
}
