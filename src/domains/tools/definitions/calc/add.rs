//! Simple addition tool.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::super::common::success_result;
use super::calculate::format_number;

#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// Parameters for the addition tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddParams {
    #[schemars(description = "First addend")]
    pub a: f64,

    #[schemars(description = "Second addend")]
    pub b: f64,
}

/// Addition tool implementation.
#[derive(Debug, Clone)]
pub struct AddTool;

impl AddTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "add";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Add two numbers and return the sum as text.";

    pub fn new() -> Self {
        Self
    }

    /// Execute the tool logic.
    pub fn execute(params: &AddParams) -> CallToolResult {
        success_result(format_number(params.a + params.b))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let params: AddParams = serde_json::from_value(arguments)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;

        let result = Self::execute(&params);

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
            input_schema: cached_schema_for_type::<AddParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: AddParams = serde_json::from_value(serde_json::Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

impl Default for AddTool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn result_text(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(text) => text.text.clone(),
            _ => panic!("expected text content"),
        }
    }

    #[test]
    fn test_add_integers() {
        let result = AddTool::execute(&AddParams { a: 2.0, b: 3.0 });
        assert_eq!(result_text(&result), "5");
    }

    #[test]
    fn test_add_fractions() {
        let result = AddTool::execute(&AddParams { a: 0.1, b: 0.2 });
        assert_eq!(result_text(&result), "0.30000000000000004");
    }

    #[test]
    fn test_add_negative() {
        let result = AddTool::execute(&AddParams { a: -7.5, b: 2.5 });
        assert_eq!(result_text(&result), "-5");
    }
}
