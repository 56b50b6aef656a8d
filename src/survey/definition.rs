use crate::error::SurveyConversionError;
use crate::graph::{FlowGraph, NodePatch, Position, QuestionKind};
use ahash::AHashMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// The canonical, format-stable description of an authored survey.
///
/// This is what the visual editor exports and imports: nodes and edges with
/// string ids, kinds by wire name, and branch edges carrying their option
/// value. [`SurveyDefinition::into_graph`] rebuilds a [`FlowGraph`] from it;
/// custom editor formats convert through
/// [`crate::survey::IntoSurvey`] first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SurveyDefinition {
    #[serde(default)]
    pub title: Option<String>,
    pub nodes: Vec<SurveyNodeDefinition>,
    pub edges: Vec<SurveyEdgeDefinition>,
}

/// One node of an exported survey.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyNodeDefinition {
    pub id: String,
    pub kind: String,
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub options: Option<Vec<String>>,
    #[serde(default)]
    pub position: Position,
}

/// One edge of an exported survey. `branch_key` carries the option value
/// for conditional edges and is absent for the default edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyEdgeDefinition {
    pub source: String,
    pub target: String,
    #[serde(default, alias = "branchKey")]
    pub branch_key: Option<String>,
}

impl SurveyDefinition {
    /// Rebuilds a graph from this definition.
    ///
    /// Unknown kind names fail with [`crate::error::GraphError::InvalidKind`];
    /// edges naming unknown node ids fail with
    /// [`SurveyConversionError::DanglingEdge`]. Edge rules (self loops,
    /// duplicate branches) are enforced the same as interactive editing.
    pub fn into_graph(self) -> Result<FlowGraph, SurveyConversionError> {
        let mut graph = FlowGraph::bare();
        let mut ids: AHashMap<String, _> = AHashMap::new();

        for def in self.nodes {
            let kind: QuestionKind = def.kind.parse()?;
            let node_id = graph.add_node(kind, def.position);
            graph.update_node(
                node_id,
                NodePatch {
                    prompt: Some(def.prompt),
                    description: Some(def.description),
                    required: Some(def.required),
                    options: def.options,
                    position: None,
                },
            )?;
            ids.insert(def.id, node_id);
        }

        for def in self.edges {
            let source = *ids
                .get(&def.source)
                .ok_or(SurveyConversionError::DanglingEdge {
                    missing_id: def.source.clone(),
                })?;
            let target = *ids
                .get(&def.target)
                .ok_or(SurveyConversionError::DanglingEdge {
                    missing_id: def.target.clone(),
                })?;
            graph.connect(source, target, def.branch_key)?;
        }

        Ok(graph)
    }

    /// Exports a graph back into the definition shape, nodes and edges
    /// ordered by id so two exports of the same graph compare equal.
    pub fn from_graph(graph: &FlowGraph) -> Self {
        let nodes = graph
            .nodes()
            .sorted_by_key(|node| node.id)
            .map(|node| SurveyNodeDefinition {
                id: node.id.to_string(),
                kind: node.kind.as_str().to_string(),
                prompt: node.prompt.clone(),
                description: node.description.clone(),
                required: node.required,
                options: node.options.clone(),
                position: node.position,
            })
            .collect();
        let edges = graph
            .edges()
            .sorted_by_key(|edge| edge.id)
            .map(|edge| SurveyEdgeDefinition {
                source: edge.source.to_string(),
                target: edge.target.to_string(),
                branch_key: edge.branch_key.clone(),
            })
            .collect();
        Self {
            title: None,
            nodes,
            edges,
        }
    }
}
