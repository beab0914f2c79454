//! Invocation and outcome types shared by the dispatcher and the tools.

use rmcp::model::{CallToolResult, Content, RawContent};
use serde_json::Value;

/// One inbound request to run a tool.
#[derive(Debug, Clone)]
pub struct Invocation {
    /// The name of the tool to execute.
    pub tool_name: String,

    /// The arguments to pass to the tool, not yet validated.
    pub arguments: Option<Value>,
}

impl Invocation {
    pub fn new(tool_name: impl Into<String>, arguments: Option<Value>) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments,
        }
    }
}

/// The result of running a tool.
///
/// Success and failure share this shape: a failure is an outcome whose text
/// describes the error. There is no error flag.
#[derive(Debug, Clone)]
pub struct ToolOutcome {
    pub content: Vec<Content>,
}

impl ToolOutcome {
    /// An outcome made of a single text block.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![Content::text(text.into())],
        }
    }

    /// All text blocks joined together.
    pub fn text_content(&self) -> String {
        self.content
            .iter()
            .filter_map(|c| match &c.raw {
                RawContent::Text(text) => Some(text.text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Convert into the protocol result.
    pub fn into_call_result(self) -> CallToolResult {
        CallToolResult::success(self.content)
    }
}

impl From<ToolOutcome> for CallToolResult {
    fn from(outcome: ToolOutcome) -> Self {
        outcome.into_call_result()
    }
}
