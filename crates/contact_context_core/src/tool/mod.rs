//! Tool advertisement for external callers.
//!
//! # Responsibility
//! - Describe callable operations by name, description and input schema so an
//!   automated caller can pick one.
//! - Dispatch JSON-argument calls to the provider that owns the tool.
//!
//! # Invariants
//! - Tool names are unique within one registry.
//! - Argument checks are shape-only (field present, JSON type right).

use serde::Serialize;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod contact_tools;
pub mod registry;

pub type ToolResult<T> = Result<T, ToolRegistryError>;

/// Advertised metadata for one callable tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    /// JSON Schema of the `arguments` object.
    pub input_schema: Value,
}

/// Anything that can advertise and answer tool calls.
pub trait ToolProvider {
    fn tool_definitions(&self) -> Vec<ToolDefinition>;
    fn call_tool(&self, name: &str, arguments: &Value) -> ToolResult<Value>;
}

/// Tool registration and dispatch errors.
#[derive(Debug)]
pub enum ToolRegistryError {
    InvalidToolName(String),
    DuplicateToolName(String),
    UnknownTool(String),
    InvalidArguments {
        tool: String,
        message: String,
    },
    Handler {
        tool: String,
        source: Box<dyn Error + Send + Sync>,
    },
}

impl ToolRegistryError {
    pub(crate) fn invalid_arguments(tool: &str, message: impl Into<String>) -> Self {
        Self::InvalidArguments {
            tool: tool.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn handler(tool: &str, source: impl Error + Send + Sync + 'static) -> Self {
        Self::Handler {
            tool: tool.to_string(),
            source: Box::new(source),
        }
    }
}

impl Display for ToolRegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidToolName(name) => write!(f, "tool name is invalid: `{name}`"),
            Self::DuplicateToolName(name) => write!(f, "tool already registered: {name}"),
            Self::UnknownTool(name) => write!(f, "unknown tool: {name}"),
            Self::InvalidArguments { tool, message } => {
                write!(f, "invalid arguments for {tool}: {message}")
            }
            Self::Handler { tool, source } => write!(f, "tool {tool} failed: {source}"),
        }
    }
}

impl Error for ToolRegistryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Handler { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}
