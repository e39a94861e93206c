//! In-process tool registry.

use crate::tool::{ToolDefinition, ToolProvider, ToolRegistryError, ToolResult};
use log::{error, info};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::time::Instant;

static TOOL_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").expect("valid tool name regex"));

#[derive(Debug, Clone)]
struct RegisteredTool {
    definition: ToolDefinition,
    provider_index: usize,
}

/// Registry of tool providers, keyed by tool name.
#[derive(Default)]
pub struct ToolRegistry<'p> {
    providers: Vec<Box<dyn ToolProvider + 'p>>,
    entries: BTreeMap<String, RegisteredTool>,
    registration_order: Vec<String>,
}

impl<'p> ToolRegistry<'p> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers every tool a provider advertises.
    ///
    /// Validation runs over the whole provider first; on error nothing from
    /// that provider is registered.
    pub fn register(&mut self, provider: impl ToolProvider + 'p) -> ToolResult<()> {
        let definitions = provider.tool_definitions();
        let mut pending = BTreeSet::new();
        for definition in &definitions {
            let name = definition.name.as_str();
            if !is_valid_tool_name(name) {
                return Err(ToolRegistryError::InvalidToolName(name.to_string()));
            }
            if self.entries.contains_key(name) || !pending.insert(name) {
                return Err(ToolRegistryError::DuplicateToolName(name.to_string()));
            }
        }

        let provider_index = self.providers.len();
        self.providers.push(Box::new(provider));
        for definition in definitions {
            self.registration_order.push(definition.name.clone());
            self.entries.insert(
                definition.name.clone(),
                RegisteredTool {
                    definition,
                    provider_index,
                },
            );
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.entries.get(name).map(|entry| &entry.definition)
    }

    /// Returns definitions in registration order.
    pub fn definitions(&self) -> Vec<&ToolDefinition> {
        self.registration_order
            .iter()
            .filter_map(|name| self.get(name))
            .collect()
    }

    /// Dispatches one call to the provider owning `name`.
    pub fn call(&self, name: &str, arguments: &Value) -> ToolResult<Value> {
        let entry = self
            .entries
            .get(name)
            .ok_or_else(|| ToolRegistryError::UnknownTool(name.to_string()))?;
        let provider = self
            .providers
            .get(entry.provider_index)
            .ok_or_else(|| ToolRegistryError::UnknownTool(name.to_string()))?;

        let started_at = Instant::now();
        match provider.call_tool(name, arguments) {
            Ok(value) => {
                info!(
                    "event=tool_call module=tool status=ok tool={name} duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(value)
            }
            Err(err) => {
                error!(
                    "event=tool_call module=tool status=error tool={name} duration_ms={} error={err}",
                    started_at.elapsed().as_millis()
                );
                Err(err)
            }
        }
    }
}

fn is_valid_tool_name(name: &str) -> bool {
    TOOL_NAME_RE.is_match(name)
}

#[cfg(test)]
mod tests {
    use super::{is_valid_tool_name, ToolRegistry};
    use crate::tool::{ToolDefinition, ToolProvider, ToolRegistryError, ToolResult};
    use serde_json::{json, Value};

    struct EchoProvider {
        names: Vec<&'static str>,
    }

    impl ToolProvider for EchoProvider {
        fn tool_definitions(&self) -> Vec<ToolDefinition> {
            self.names
                .iter()
                .map(|name| ToolDefinition {
                    name: (*name).to_string(),
                    description: format!("Echoes arguments for {name}."),
                    input_schema: json!({ "type": "object" }),
                })
                .collect()
        }

        fn call_tool(&self, name: &str, arguments: &Value) -> ToolResult<Value> {
            Ok(json!({ "tool": name, "arguments": arguments }))
        }
    }

    #[test]
    fn validates_tool_names() {
        assert!(is_valid_tool_name("getContactInfo"));
        assert!(is_valid_tool_name("get_contact_info2"));
        assert!(!is_valid_tool_name(""));
        assert!(!is_valid_tool_name("2fast"));
        assert!(!is_valid_tool_name("get contact"));
        assert!(!is_valid_tool_name("get-contact"));
    }

    #[test]
    fn registers_and_dispatches_in_order() {
        let mut registry = ToolRegistry::new();
        registry
            .register(EchoProvider {
                names: vec!["zeta", "alpha"],
            })
            .expect("registration should succeed");

        assert_eq!(registry.len(), 2);
        let names: Vec<&str> = registry
            .definitions()
            .into_iter()
            .map(|definition| definition.name.as_str())
            .collect();
        assert_eq!(names, vec!["zeta", "alpha"]);

        let result = registry
            .call("alpha", &json!({ "x": 1 }))
            .expect("call should succeed");
        assert_eq!(result, json!({ "tool": "alpha", "arguments": { "x": 1 } }));
    }

    #[test]
    fn rejects_duplicates_across_providers_atomically() {
        let mut registry = ToolRegistry::new();
        registry
            .register(EchoProvider { names: vec!["one"] })
            .expect("first provider");

        let err = registry
            .register(EchoProvider {
                names: vec!["two", "one"],
            })
            .expect_err("duplicate must fail");
        assert!(matches!(err, ToolRegistryError::DuplicateToolName(name) if name == "one"));
        assert!(registry.get("two").is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn rejects_duplicates_within_provider() {
        let mut registry = ToolRegistry::new();
        let err = registry
            .register(EchoProvider {
                names: vec!["same", "same"],
            })
            .expect_err("duplicate must fail");
        assert!(matches!(err, ToolRegistryError::DuplicateToolName(_)));
        assert!(registry.is_empty());
    }

    #[test]
    fn rejects_invalid_name() {
        let mut registry = ToolRegistry::new();
        let err = registry
            .register(EchoProvider {
                names: vec!["bad name"],
            })
            .expect_err("invalid name must fail");
        assert!(matches!(err, ToolRegistryError::InvalidToolName(_)));
    }

    #[test]
    fn unknown_tool_is_an_error() {
        let registry = ToolRegistry::new();
        let err = registry
            .call("missing", &Value::Null)
            .expect_err("unknown tool must fail");
        assert!(matches!(err, ToolRegistryError::UnknownTool(name) if name == "missing"));
    }
}
