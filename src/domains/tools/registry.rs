//! Tool Registry - central registration of all tools.
//!
//! This module provides:
//! - `ToolDescriptor`, the metadata and type-erased handler of one tool
//! - `ToolRegistry`, the catalogue looked up by the dispatcher
//!
//! The registry is filled once at startup and only read afterwards.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::{JsonObject, Tool};
use serde_json::Value;
use tracing::debug;

use super::definitions::{ListFilesTool, ReadFileTool, ToolDefinition, WriteFileTool};
use super::validate::{ValidationError, validate};
use super::{ToolError, ToolOutcome};
use crate::core::filesystem::FileSystem;

/// A validated call, ready to run.
pub type PreparedCall = BoxFuture<'static, Result<ToolOutcome, ToolError>>;

/// Validates raw arguments and binds them to the tool's logic.
type Handler = Arc<dyn Fn(Option<Value>) -> Result<PreparedCall, ValidationError> + Send + Sync>;

// ============================================================================
// Tool Descriptor
// ============================================================================

/// Static metadata plus handler for one tool.
#[derive(Clone)]
pub struct ToolDescriptor {
    name: String,
    title: String,
    description: String,
    failure_context: String,
    input_schema: Arc<JsonObject>,
    handler: Handler,
}

impl ToolDescriptor {
    /// Build a descriptor from a [`ToolDefinition`] bound to a filesystem driver.
    pub fn from_definition<T: ToolDefinition>(fs: Arc<dyn FileSystem>) -> Self {
        let handler: Handler = Arc::new(
            move |arguments: Option<Value>| -> Result<PreparedCall, ValidationError> {
                let params = validate::<T::Params>(T::NAME, arguments)?;
                Ok(T::execute(params, fs.clone()).boxed())
            },
        );

        Self {
            name: T::NAME.to_string(),
            title: T::TITLE.to_string(),
            description: T::DESCRIPTION.to_string(),
            failure_context: T::FAILURE_CONTEXT.to_string(),
            input_schema: cached_schema_for_type::<T::Params>(),
            handler,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn input_schema(&self) -> &Arc<JsonObject> {
        &self.input_schema
    }

    /// Validate `arguments` against the input shape.
    ///
    /// On success the returned future runs the tool; nothing has executed yet.
    pub fn prepare(&self, arguments: Option<Value>) -> Result<PreparedCall, ValidationError> {
        (self.handler)(arguments)
    }

    /// The outcome reported when the tool fails with `err`.
    pub fn failure(&self, err: &ToolError) -> ToolOutcome {
        ToolOutcome::text(format!("{}: {}", self.failure_context, err))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.clone().into(),
            title: Some(self.title.clone()),
            description: Some(self.description.clone().into()),
            input_schema: self.input_schema.clone(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
        }
    }
}

impl fmt::Debug for ToolDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolDescriptor")
            .field("name", &self.name)
            .field("title", &self.title)
            .field("failure_context", &self.failure_context)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - the catalogue of all available tools.
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<ToolDescriptor>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding `list_files`, `read_file` and `write_file`.
    pub fn with_filesystem_tools(fs: Arc<dyn FileSystem>) -> Result<Self, ToolError> {
        let mut registry = Self::new();
        registry.register(ToolDescriptor::from_definition::<ListFilesTool>(fs.clone()))?;
        registry.register(ToolDescriptor::from_definition::<ReadFileTool>(fs.clone()))?;
        registry.register(ToolDescriptor::from_definition::<WriteFileTool>(fs))?;
        Ok(registry)
    }

    /// Add a tool. Fails if a tool with the same name is already registered.
    pub fn register(&mut self, descriptor: ToolDescriptor) -> Result<(), ToolError> {
        if self.index.contains_key(descriptor.name()) {
            return Err(ToolError::duplicate_name(descriptor.name()));
        }

        debug!("Registering tool: {}", descriptor.name());
        self.index
            .insert(descriptor.name().to_string(), self.tools.len());
        self.tools.push(descriptor);
        Ok(())
    }

    /// Find a tool by exact name.
    pub fn lookup(&self, name: &str) -> Option<&ToolDescriptor> {
        self.index.get(name).map(|&i| &self.tools[i])
    }

    /// Get all tool names, in registration order.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(ToolDescriptor::name).collect()
    }

    /// Get all tools as Tool models, in registration order.
    pub fn tools(&self) -> Vec<Tool> {
        self.tools.iter().map(ToolDescriptor::to_tool).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
