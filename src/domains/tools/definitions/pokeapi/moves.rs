//! Pokémon move listing tool.
//!
//! Lists the first N moves a Pokémon can learn.

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

use super::super::common::{
    capitalize, clamp_move_limit, default_move_limit, error_result, normalize_name, success_result,
};
use super::client::{PokeApiClient, PokeApiError};
use super::models::Pokemon;

#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// Parameters for the move listing.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PokemonMovesParams {
    /// The name or Pokédex number of the Pokémon.
    #[schemars(description = "The name or ID of the Pokemon to get moves for")]
    pub name: String,

    /// Maximum number of moves to return (default: 10, clamped to 1-50).
    /// Any JSON number is accepted; out-of-range values are clamped.
    #[schemars(description = "Maximum number of moves to return (default: 10)")]
    #[serde(default = "default_move_limit")]
    pub limit: f64,
}

/// Pokémon move listing tool implementation.
#[derive(Debug, Clone)]
pub struct PokemonMovesTool;

impl PokemonMovesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_pokemon_moves";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List the moves a Pokemon can learn. Returns up to `limit` move names (default 10, max 50) as a numbered list.";

    pub fn new() -> Self {
        Self
    }

    /// Execute the tool logic (runs blocking HTTP; call from a spawned thread).
    pub fn execute(params: &PokemonMovesParams, config: &Config) -> CallToolResult {
        let lookup = normalize_name(&params.name);
        let limit = clamp_move_limit(params.limit);
        info!("Fetching up to {} moves for: {}", limit, lookup);

        let client = PokeApiClient::from_config(config);
        match client.pokemon(&lookup) {
            Ok(pokemon) => success_result(Self::format_moves(&params.name, &pokemon, limit)),
            Err(PokeApiError::NotFound { .. }) => {
                error_result(&format!("Error: Pokemon \"{}\" not found.", params.name))
            }
            Err(e) => {
                error!("Pokemon moves fetch failed: {:?}", e);
                error_result(&format!("Error fetching Pokemon moves: {}", e))
            }
        }
    }

    /// Format the first `limit` moves as a numbered list.
    fn format_moves(requested_name: &str, pokemon: &Pokemon, limit: usize) -> String {
        let moves: Vec<&str> = pokemon
            .moves
            .iter()
            .take(limit)
            .map(|slot| slot.move_.name.as_str())
            .collect();

        let mut lines = vec![format!(
            "**Moves for {}** (showing {} moves):",
            capitalize(requested_name.trim()),
            moves.len()
        )];
        lines.extend(
            moves
                .iter()
                .enumerate()
                .map(|(index, name)| format!("{}. {}", index + 1, name.replace('-', " "))),
        );
        lines.join("\n")
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        config: Arc<Config>,
    ) -> Result<serde_json::Value, ToolError> {
        let params: PokemonMovesParams = serde_json::from_value(arguments)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;

        let handle = std::thread::spawn(move || Self::execute(&params, &config));
        let result = handle
            .join()
            .map_err(|_| ToolError::internal("Thread panicked during move listing"))?;

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
            input_schema: cached_schema_for_type::<PokemonMovesParams>(),
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
                let params: PokemonMovesParams =
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

impl Default for PokemonMovesTool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pokemon_with_moves(names: &[&str]) -> Pokemon {
        serde_json::from_value(serde_json::json!({
            "id": 25,
            "name": "pikachu",
            "height": 4,
            "weight": 60,
            "types": [],
            "stats": [],
            "abilities": [],
            "moves": names
                .iter()
                .map(|n| serde_json::json!({"move": {"name": n, "url": "u"}}))
                .collect::<Vec<_>>(),
            "species": {"name": "pikachu", "url": "u"}
        }))
        .unwrap()
    }

    #[test]
    fn test_params_default_limit() {
        let json = r#"{"name": "pikachu"}"#;
        let params: PokemonMovesParams = serde_json::from_str(json).unwrap();
        assert_eq!(clamp_move_limit(params.limit), 10);
    }

    #[test]
    fn test_params_custom_limit() {
        let json = r#"{"name": "pikachu", "limit": 5}"#;
        let params: PokemonMovesParams = serde_json::from_str(json).unwrap();
        assert_eq!(clamp_move_limit(params.limit), 5);
    }

    #[test]
    fn test_params_out_of_range_limits_accepted_and_clamped() {
        // Negative and fractional limits deserialize; clamping handles them.
        let params: PokemonMovesParams =
            serde_json::from_str(r#"{"name": "pikachu", "limit": -5}"#).unwrap();
        assert_eq!(clamp_move_limit(params.limit), 1);

        let params: PokemonMovesParams =
            serde_json::from_str(r#"{"name": "pikachu", "limit": 2.5}"#).unwrap();
        assert_eq!(clamp_move_limit(params.limit), 2);

        let params: PokemonMovesParams =
            serde_json::from_str(r#"{"name": "pikachu", "limit": 9000}"#).unwrap();
        assert_eq!(clamp_move_limit(params.limit), 50);
    }

    #[test]
    fn test_format_moves_replaces_hyphens() {
        let pokemon = pokemon_with_moves(&["thunder-shock", "quick-attack"]);
        let text = PokemonMovesTool::format_moves("pikachu", &pokemon, 10);
        assert_eq!(
            text,
            "**Moves for Pikachu** (showing 2 moves):\n1. thunder shock\n2. quick attack"
        );
    }

    #[test]
    fn test_format_moves_respects_limit() {
        let pokemon = pokemon_with_moves(&["a", "b", "c", "d"]);
        let text = PokemonMovesTool::format_moves("pikachu", &pokemon, 2);
        assert!(text.contains("(showing 2 moves):"));
        assert!(!text.contains("3."));
    }

    #[test]
    fn test_format_moves_fewer_than_limit() {
        let pokemon = pokemon_with_moves(&["tackle"]);
        let text = PokemonMovesTool::format_moves("ditto", &pokemon, 10);
        assert!(text.contains("(showing 1 moves):"));
    }
}
