//! Environment debug tool.
//!
//! Reports the server identity, the active transport, and the `MCP_`
//! environment variables, with sensitive values redacted. Intended for
//! operators diagnosing a deployment, not for end users.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;

use crate::core::config::Config;

use super::super::common::success_result;

#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// Variable-name fragments whose values are never shown.
const SENSITIVE_MARKERS: [&str; 3] = ["KEY", "SECRET", "TOKEN"];

/// Parameters for the environment debug tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DebugEnvParams {
    /// Optional substring filter on variable names.
    #[schemars(description = "Only show variables whose name contains this substring")]
    #[serde(default)]
    pub filter: Option<String>,
}

/// Environment debug tool implementation.
#[derive(Debug, Clone)]
pub struct DebugEnvTool;

impl DebugEnvTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "debug_env";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Report the server identity, active transport, and MCP_* environment variables (sensitive values redacted).";

    pub fn new() -> Self {
        Self
    }

    /// Whether a variable's value must be redacted.
    fn is_sensitive(name: &str) -> bool {
        let upper = name.to_uppercase();
        SENSITIVE_MARKERS.iter().any(|marker| upper.contains(marker))
    }

    /// Execute the tool logic.
    pub fn execute(params: &DebugEnvParams, config: &Config) -> CallToolResult {
        let mut vars: Vec<(String, String)> = std::env::vars()
            .filter(|(name, _)| name.starts_with("MCP_"))
            .filter(|(name, _)| match &params.filter {
                Some(filter) => name.contains(filter.as_str()),
                None => true,
            })
            .collect();
        vars.sort_by(|a, b| a.0.cmp(&b.0));

        let mut lines = vec![
            format!(
                "**Server:** {} v{}",
                config.server.name, config.server.version
            ),
            format!("**Transport:** {}", config.transport.description()),
            "**Environment (MCP_*):**".to_string(),
        ];

        if vars.is_empty() {
            lines.push("  (none)".to_string());
        } else {
            for (name, value) in vars {
                if Self::is_sensitive(&name) {
                    lines.push(format!("  - {}=[redacted]", name));
                } else {
                    lines.push(format!("  - {}={}", name, value));
                }
            }
        }

        success_result(lines.join("\n"))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        config: Arc<Config>,
    ) -> Result<serde_json::Value, ToolError> {
        let params: DebugEnvParams = serde_json::from_value(arguments)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;

        let result = Self::execute(&params, &config);

        Ok(serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<DebugEnvParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let config = config.clone();
            async move {
                let params: DebugEnvParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute(&params, &config))
            }
            .boxed()
        })
    }
}

impl Default for DebugEnvTool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn result_text(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(text) => text.text.clone(),
            _ => panic!("expected text content"),
        }
    }

    #[test]
    fn test_params_filter_is_optional() {
        let params: DebugEnvParams = serde_json::from_str("{}").unwrap();
        assert!(params.filter.is_none());
    }

    #[test]
    fn test_is_sensitive() {
        assert!(DebugEnvTool::is_sensitive("MCP_ACME_API_KEY"));
        assert!(DebugEnvTool::is_sensitive("MCP_CLIENT_SECRET"));
        assert!(DebugEnvTool::is_sensitive("MCP_AUTH_TOKEN"));
        assert!(!DebugEnvTool::is_sensitive("MCP_LOG_LEVEL"));
    }

    #[test]
    fn test_reports_server_and_redacts_secrets() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_TEST_API_KEY", "super-secret");
            std::env::set_var("MCP_TEST_PLAIN", "visible");
        }

        let result = DebugEnvTool::execute(&DebugEnvParams { filter: None }, &Config::default());
        let text = result_text(&result);

        assert!(text.contains("**Server:** pokedex-mcp-server"));
        assert!(text.contains("MCP_TEST_API_KEY=[redacted]"));
        assert!(!text.contains("super-secret"));
        assert!(text.contains("MCP_TEST_PLAIN=visible"));

        unsafe {
            std::env::remove_var("MCP_TEST_API_KEY");
            std::env::remove_var("MCP_TEST_PLAIN");
        }
    }

    #[test]
    fn test_filter_limits_output() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_FILTER_HIT", "yes");
            std::env::set_var("MCP_OTHER_VAR", "no");
        }

        let params = DebugEnvParams {
            filter: Some("FILTER_HIT".to_string()),
        };
        let result = DebugEnvTool::execute(&params, &Config::default());
        let text = result_text(&result);

        assert!(text.contains("MCP_FILTER_HIT=yes"));
        assert!(!text.contains("MCP_OTHER_VAR"));

        unsafe {
            std::env::remove_var("MCP_FILTER_HIT");
            std::env::remove_var("MCP_OTHER_VAR");
        }
    }
}
