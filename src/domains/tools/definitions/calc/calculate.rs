//! Four-operation calculator tool.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::super::common::{error_result, success_result};

#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// Render a computed value as display text.
///
/// f64 Display already uses the shortest round-trip representation, so
/// whole numbers print without a trailing ".0".
pub fn format_number(value: f64) -> String {
    value.to_string()
}

/// Supported calculator operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Parameters for the calculator tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CalculateParams {
    /// The operation to perform.
    #[schemars(description = "Operation: 'add', 'subtract', 'multiply', or 'divide'")]
    pub operation: Operation,

    #[schemars(description = "First operand")]
    pub a: f64,

    #[schemars(description = "Second operand")]
    pub b: f64,
}

/// Calculator tool implementation.
#[derive(Debug, Clone)]
pub struct CalculateTool;

impl CalculateTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "calculate";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Perform a basic arithmetic operation (add, subtract, multiply, divide) on two numbers.";

    pub fn new() -> Self {
        Self
    }

    /// Execute the tool logic.
    pub fn execute(params: &CalculateParams) -> CallToolResult {
        let result = match params.operation {
            Operation::Add => params.a + params.b,
            Operation::Subtract => params.a - params.b,
            Operation::Multiply => params.a * params.b,
            Operation::Divide => {
                if params.b == 0.0 {
                    return error_result("Error: Cannot divide by zero");
                }
                params.a / params.b
            }
        };
        success_result(format_number(result))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let params: CalculateParams = serde_json::from_value(arguments)
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
            input_schema: cached_schema_for_type::<CalculateParams>(),
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
                let params: CalculateParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

impl Default for CalculateTool {
    fn default() -> Self {
        Self::new()
    }
}
