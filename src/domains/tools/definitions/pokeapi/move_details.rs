//! Move details lookup tool.
//!
//! Fetches a single move record and formats its combat properties and
//! English effect text.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info};

use crate::core::config::Config;

use super::super::common::{error_result, normalize_name, success_result};
use super::client::{PokeApiClient, PokeApiError};
use super::models::MoveDetails;

#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// Parameters for the move details lookup.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MoveDetailsParams {
    /// The name of the move.
    #[schemars(description = "The name of the move to get details for")]
    pub name: String,
}

/// Move details tool implementation.
#[derive(Debug, Clone)]
pub struct MoveDetailsTool;

impl MoveDetailsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_move_details";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get details for a Pokemon move: type, power, accuracy, PP, priority, damage class, and effect description.";

    pub fn new() -> Self {
        Self
    }

    /// Normalize a move name to its API identifier ("Thunder Shock" -> "thunder-shock").
    fn normalize_move_name(name: &str) -> String {
        normalize_name(name).replace(' ', "-")
    }

    /// Execute the tool logic (runs blocking HTTP; call from a spawned thread).
    pub fn execute(params: &MoveDetailsParams, config: &Config) -> CallToolResult {
        let lookup = Self::normalize_move_name(&params.name);
        info!("Fetching move details for: {}", lookup);

        let client = PokeApiClient::from_config(config);
        match client.move_details(&lookup) {
            Ok(details) => success_result(Self::format_details(&details)),
            Err(PokeApiError::NotFound { .. }) => {
                error_result(&format!("Error: Move \"{}\" not found.", params.name))
            }
            Err(e) => {
                error!("Move details fetch failed: {:?}", e);
                error_result(&format!("Error fetching move details: {}", e))
            }
        }
    }

    /// Format a move record as a markdown block.
    fn format_details(details: &MoveDetails) -> String {
        let power = details
            .power
            .map(|p| p.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        let accuracy = details
            .accuracy
            .map(|a| a.to_string())
            .unwrap_or_else(|| "N/A".to_string());

        [
            format!("**{}**", details.name.replace('-', " ").to_uppercase()),
            format!("**Type:** {}", details.type_.name),
            format!("**Power:** {}", power),
            format!("**Accuracy:** {}%", accuracy),
            format!("**PP:** {}", details.pp),
            format!("**Priority:** {}", details.priority),
            format!("**Damage Class:** {}", details.damage_class.name),
            format!("**Effect:** {}", details.english_effect()),
        ]
        .join("\n")
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        config: Arc<Config>,
    ) -> Result<serde_json::Value, ToolError> {
        let params: MoveDetailsParams = serde_json::from_value(arguments)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;

        let handle = std::thread::spawn(move || Self::execute(&params, &config));
        let result = handle
            .join()
            .map_err(|_| ToolError::internal("Thread panicked during move details lookup"))?;

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
            input_schema: cached_schema_for_type::<MoveDetailsParams>(),
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
                let params: MoveDetailsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                let handle = std::thread::spawn(move || Self::execute(&params, &config));
                let result = handle
                    .join()
                    .map_err(|_| McpError::internal_error("Thread panicked".to_string(), None))?;

                Ok(result)
            }
            .boxed()
        })
    }
}

impl Default for MoveDetailsTool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_move() -> MoveDetails {
        serde_json::from_value(serde_json::json!({
            "name": "thunder-shock",
            "type": {"name": "electric", "url": "u"},
            "power": 40,
            "accuracy": 100,
            "pp": 30,
            "priority": 0,
            "damage_class": {"name": "special", "url": "u"},
            "effect_entries": [
                {
                    "effect": "Has a [effect_chance]% chance to paralyze the target.",
                    "language": {"name": "en", "url": "u"}
                },
                {
                    "effect": "Peut paralyser la cible.",
                    "language": {"name": "fr", "url": "u"}
                }
            ],
            "effect_chance": 10
        }))
        .unwrap()
    }

    #[test]
    fn test_normalize_move_name() {
        assert_eq!(
            MoveDetailsTool::normalize_move_name(" Thunder Shock "),
            "thunder-shock"
        );
        assert_eq!(MoveDetailsTool::normalize_move_name("tackle"), "tackle");
    }

    #[test]
    fn test_format_details() {
        let text = MoveDetailsTool::format_details(&sample_move());
        let expected = "**THUNDER SHOCK**\n\
                        **Type:** electric\n\
                        **Power:** 40\n\
                        **Accuracy:** 100%\n\
                        **PP:** 30\n\
                        **Priority:** 0\n\
                        **Damage Class:** special\n\
                        **Effect:** Has a 10% chance to paralyze the target.";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_format_details_zero_power_rendered_as_number() {
        // PokéAPI uses null for powerless moves, never 0, but a literal 0
        // still renders as a number rather than N/A.
        let mut details = sample_move();
        details.power = Some(0);
        let text = MoveDetailsTool::format_details(&details);
        assert!(text.contains("**Power:** 0"));
    }

    #[test]
    fn test_format_details_missing_power_and_accuracy() {
        let mut details = sample_move();
        details.power = None;
        details.accuracy = None;
        let text = MoveDetailsTool::format_details(&details);
        assert!(text.contains("**Power:** N/A"));
        assert!(text.contains("**Accuracy:** N/A%"));
    }
}
