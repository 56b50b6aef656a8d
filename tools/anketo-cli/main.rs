use anketo::prelude::*;
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::io::{self, Write};

// --- JSON Deserialization Structs (Input Format Specific) ---
// These structs match the visual builder's export format and are only used
// here for conversion.

#[derive(Deserialize)]
struct RawSurvey {
    #[serde(default)]
    title: Option<String>,
    nodes: Vec<RawNode>,
    edges: Vec<RawEdge>,
}

#[derive(Deserialize)]
struct RawNode {
    id: String,
    data: RawNodeData,
    #[serde(default)]
    position: RawPosition,
}

#[derive(Deserialize)]
struct RawNodeData {
    #[serde(default)]
    label: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    options: Option<Vec<String>>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Deserialize, Default)]
struct RawPosition {
    #[serde(default)]
    x: f64,
    #[serde(default)]
    y: f64,
}

#[derive(Deserialize)]
struct RawEdge {
    source: String,
    target: String,
    #[serde(default, alias = "sourceHandle")]
    source_handle: Option<String>,
}

// --- Converter Implementation ---
// Maps the builder's node type names onto the engine's wire names and
// decodes branch edges from their `option-<value>` source handles.

fn canonical_kind(raw: &str) -> String {
    match raw {
        "text" => "short-text".to_string(),
        "textarea" => "long-text".to_string(),
        "radio" => "single-choice".to_string(),
        "checkbox" => "multi-choice".to_string(),
        other => other.to_string(),
    }
}

impl IntoSurvey for RawSurvey {
    fn into_survey(self) -> std::result::Result<SurveyDefinition, SurveyConversionError> {
        let nodes = self
            .nodes
            .into_iter()
            .map(|raw| SurveyNodeDefinition {
                id: raw.id,
                kind: canonical_kind(&raw.data.kind),
                prompt: raw.data.label,
                description: raw.data.description,
                required: raw.data.required,
                options: raw.data.options,
                position: Position::new(raw.position.x, raw.position.y),
            })
            .collect();

        let edges = self
            .edges
            .into_iter()
            .map(|raw| {
                let branch_key = raw
                    .source_handle
                    .as_deref()
                    .and_then(|handle| handle.strip_prefix("option-"))
                    .map(str::to_string);
                SurveyEdgeDefinition {
                    source: raw.source,
                    target: raw.target,
                    branch_key,
                }
            })
            .collect();

        Ok(SurveyDefinition {
            title: self.title,
            nodes,
            edges,
        })
    }
}

/// A flow-graph modeling and traversal engine for branching questionnaires
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the survey JSON file exported by the visual builder
    survey_path: Option<String>,

    /// Walk the survey interactively after validating it
    #[arg(short, long)]
    walk: bool,

    /// Run in interactive mode to be prompted for inputs
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    let cli = Cli::parse();

    let (survey_path, walk) = if cli.human {
        let path = prompt_for_input("Enter survey export path", Some("data/survey.json"));
        let walk = prompt_for_input("Walk the survey? (y/n)", Some("y"));
        (path, walk.trim().eq_ignore_ascii_case("y"))
    } else {
        let path = cli
            .survey_path
            .unwrap_or_else(|| exit_with_error("Survey path is required in non-interactive mode."));
        (path, cli.walk)
    };

    let survey_json = fs::read_to_string(&survey_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read survey file '{}': {}",
            &survey_path, e
        ))
    });
    let raw_survey: RawSurvey = serde_json::from_str(&survey_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse survey JSON: {}", e)));

    let definition = raw_survey
        .into_survey()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert survey: {}", e)));
    let title = definition.title.clone().unwrap_or_else(|| "Untitled Survey".to_string());

    let graph = definition
        .into_graph()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to build flow graph: {}", e)));

    println!("Survey: {}", title);
    println!(
        "  {} questions, {} connections",
        graph.question_count(),
        graph.edge_count()
    );

    let violations = graph.validate();
    if violations.is_empty() {
        println!("  Structure OK");
    } else {
        println!("  {} structural warning(s):", violations.len());
        for violation in &violations {
            println!("    - {}", violation);
        }
    }

    if walk {
        walk_survey(&graph);
    }
}

/// Runs one respondent session on the terminal: prints each question,
/// reads answers, and supports "back" for retreating.
fn walk_survey(graph: &FlowGraph) {
    let interpreter = Interpreter::new(graph)
        .unwrap_or_else(|e| exit_with_error(&format!("Cannot start a session: {}", e)));
    let mut session = interpreter.begin();

    while !interpreter.is_complete(&session) {
        let node = match graph.node(session.current_node()) {
            Some(node) => node,
            None => break,
        };

        println!("\n{}", node.prompt);
        if let Some(description) = &node.description {
            println!("  ({})", description);
        }
        if let Some(options) = &node.options {
            for (index, option) in options.iter().enumerate() {
                println!("  {}: {}", index + 1, option);
            }
        }

        let hint = if node.required { "required" } else { "enter to skip" };
        let input = prompt_for_input(&format!("Answer [{}] ('back' to go back)", hint), None);

        if input.trim().eq_ignore_ascii_case("back") {
            interpreter.retreat(&mut session);
            continue;
        }

        let answer = parse_answer(node, input.trim());
        match interpreter.advance(&mut session, answer) {
            Ok(_) => {
                println!(
                    "  Progress: {:.0}%",
                    interpreter.progress(&session) * 100.0
                );
            }
            Err(e) => println!("  {}", e),
        }
    }

    println!("\nSurvey complete. Answers:");
    for &node_id in session.visited_path() {
        if let (Some(node), Some(answer)) = (graph.node(node_id), session.answer_at(node_id)) {
            println!("  {} -> {}", node.prompt, answer);
        }
    }
}

/// Interprets terminal input against the node kind: option numbers or
/// values for choice kinds (comma-separated for multi-select), numbers for
/// scale/rating, free text otherwise.
fn parse_answer(node: &QuestionNode, input: &str) -> Option<Answer> {
    if input.is_empty() {
        return None;
    }
    match node.kind {
        QuestionKind::Scale | QuestionKind::Rating => {
            input.parse::<f64>().ok().map(Answer::Number)
        }
        QuestionKind::MultiChoice => {
            let values: Vec<String> = input
                .split(',')
                .map(|part| resolve_option(node, part.trim()))
                .collect();
            Some(Answer::Selection(values))
        }
        QuestionKind::SingleChoice | QuestionKind::Dropdown => {
            Some(Answer::Text(resolve_option(node, input)))
        }
        _ => Some(Answer::Text(input.to_string())),
    }
}

/// Accepts either a 1-based option number or the option text itself.
fn resolve_option(node: &QuestionNode, input: &str) -> String {
    if let (Some(options), Ok(index)) = (&node.options, input.parse::<usize>()) {
        if index >= 1 && index <= options.len() {
            return options[index - 1].clone();
        }
    }
    input.to_string()
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    io::stdout().flush().unwrap();

    io::stdin()
        .read_line(&mut line)
        .expect("Failed to read line");
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
