//! Central tool registry.
//!
//! Single source of truth for the tool catalog and the HTTP dispatch table.
//! The STDIO/TCP path goes through `router.rs` instead; a test asserts the
//! two stay in sync.

use std::sync::Arc;

use crate::core::config::Config;

#[cfg(feature = "http")]
use super::ToolError;
use super::definitions::{
    AddTool, BrandInfoTool, CalculateTool, DebugEnvTool, MoveDetailsTool, PokemonByTypeTool,
    PokemonEvolutionTool, PokemonInfoTool, PokemonMovesTool,
};

/// Registry of all available tools.
#[derive(Clone)]
pub struct ToolRegistry {
    config: Arc<Config>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// Get the names of all registered tools.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            AddTool::NAME,
            CalculateTool::NAME,
            PokemonInfoTool::NAME,
            PokemonByTypeTool::NAME,
            PokemonEvolutionTool::NAME,
            PokemonMovesTool::NAME,
            MoveDetailsTool::NAME,
            BrandInfoTool::NAME,
            DebugEnvTool::NAME,
        ]
    }

    /// Get all tool metadata (for tools/list responses).
    pub fn get_all_tools(&self) -> Vec<rmcp::model::Tool> {
        vec![
            AddTool::to_tool(),
            CalculateTool::to_tool(),
            PokemonInfoTool::to_tool(),
            PokemonByTypeTool::to_tool(),
            PokemonEvolutionTool::to_tool(),
            PokemonMovesTool::to_tool(),
            MoveDetailsTool::to_tool(),
            BrandInfoTool::to_tool(),
            DebugEnvTool::to_tool(),
        ]
    }

    /// Dispatch a tool call by name (HTTP transport).
    #[cfg(feature = "http")]
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        match name {
            AddTool::NAME => AddTool::http_handler(arguments),
            CalculateTool::NAME => CalculateTool::http_handler(arguments),
            PokemonInfoTool::NAME => PokemonInfoTool::http_handler(arguments, self.config.clone()),
            PokemonByTypeTool::NAME => {
                PokemonByTypeTool::http_handler(arguments, self.config.clone())
            }
            PokemonEvolutionTool::NAME => {
                PokemonEvolutionTool::http_handler(arguments, self.config.clone())
            }
            PokemonMovesTool::NAME => {
                PokemonMovesTool::http_handler(arguments, self.config.clone())
            }
            MoveDetailsTool::NAME => {
                MoveDetailsTool::http_handler(arguments, self.config.clone())
            }
            BrandInfoTool::NAME => BrandInfoTool::http_handler(arguments, self.config.clone()),
            DebugEnvTool::NAME => DebugEnvTool::http_handler(arguments, self.config.clone()),
            _ => Err(ToolError::not_found(name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ToolRegistry {
        ToolRegistry::new(Arc::new(Config::default()))
    }

    #[test]
    fn test_tool_names_complete() {
        let names = registry().tool_names();
        assert_eq!(names.len(), 9);
        assert!(names.contains(&"add"));
        assert!(names.contains(&"get_pokemon_evolution"));
        assert!(names.contains(&"debug_env"));
    }

    #[test]
    fn test_get_all_tools_matches_names() {
        let reg = registry();
        let tools = reg.get_all_tools();
        assert_eq!(tools.len(), reg.tool_names().len());
        for (tool, name) in tools.iter().zip(reg.tool_names()) {
            assert_eq!(tool.name.as_ref(), name);
        }
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_call_tool_add() {
        let result = registry()
            .call_tool("add", serde_json::json!({"a": 2, "b": 3}))
            .unwrap();
        assert_eq!(result["isError"], false);
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_call_tool_unknown_is_not_found() {
        let err = registry()
            .call_tool("no_such_tool", serde_json::json!({}))
            .unwrap_err();
        assert!(matches!(err, ToolError::NotFound(_)));
        assert!(err.to_string().contains("no_such_tool"));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_call_tool_bad_arguments_is_invalid_arguments() {
        let err = registry()
            .call_tool("add", serde_json::json!({"a": "one", "b": 2}))
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }
}
