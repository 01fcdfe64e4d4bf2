//! Pokémon information lookup tool.
//!
//! Fetches a single Pokémon record and formats its vitals, types, base
//! stats, and abilities for display.

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

use super::super::common::{capitalize, error_result, normalize_name, success_result};
use super::client::{PokeApiClient, PokeApiError};
use super::models::Pokemon;

#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// Parameters for the Pokémon info lookup.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PokemonInfoParams {
    /// The name or Pokédex number of the Pokémon.
    #[schemars(description = "The name or ID of the Pokemon to look up")]
    pub name: String,
}

/// Pokémon information tool implementation.
#[derive(Debug, Clone)]
pub struct PokemonInfoTool;

impl PokemonInfoTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_pokemon_info";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Look up basic information about a Pokemon by name or Pokedex number. Returns height, weight, types, base stats, and abilities as formatted text.";

    pub fn new() -> Self {
        Self
    }

    /// Execute the tool logic (runs blocking HTTP; call from a spawned thread).
    pub fn execute(params: &PokemonInfoParams, config: &Config) -> CallToolResult {
        let lookup = normalize_name(&params.name);
        info!("Fetching Pokemon info for: {}", lookup);

        let client = PokeApiClient::from_config(config);
        match client.pokemon(&lookup) {
            Ok(pokemon) => success_result(Self::format_info(&pokemon)),
            Err(PokeApiError::NotFound { .. }) => error_result(&format!(
                "Error: Pokemon \"{}\" not found. Please check the spelling or try a different name.",
                params.name
            )),
            Err(e) => {
                error!("Pokemon info fetch failed: {:?}", e);
                error_result(&format!("Error fetching Pokemon data: {}", e))
            }
        }
    }

    /// Format a Pokémon record as a markdown block.
    fn format_info(pokemon: &Pokemon) -> String {
        let types = pokemon
            .types
            .iter()
            .map(|t| t.type_.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let abilities = pokemon
            .abilities
            .iter()
            .map(|a| a.ability.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        let mut lines = vec![
            format!("**{}** (#{})", capitalize(&pokemon.name), pokemon.id),
            // Raw units are decimetres and hectograms
            format!("**Height:** {} m", pokemon.height as f64 / 10.0),
            format!("**Weight:** {} kg", pokemon.weight as f64 / 10.0),
            format!("**Types:** {}", types),
            "**Base Stats:**".to_string(),
        ];
        lines.extend(
            pokemon
                .stats
                .iter()
                .map(|s| format!("  - {}: {}", s.stat.name, s.base_stat)),
        );
        lines.push(format!("**Abilities:** {}", abilities));
        lines.join("\n")
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        config: Arc<Config>,
    ) -> Result<serde_json::Value, ToolError> {
        let params: PokemonInfoParams = serde_json::from_value(arguments)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;

        // Separate OS thread: reqwest::blocking creates its own runtime.
        let handle = std::thread::spawn(move || Self::execute(&params, &config));
        let result = handle
            .join()
            .map_err(|_| ToolError::internal("Thread panicked during Pokemon info lookup"))?;

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
            input_schema: cached_schema_for_type::<PokemonInfoParams>(),
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
                let params: PokemonInfoParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                // Separate OS thread: reqwest::blocking creates its own runtime.
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

impl Default for PokemonInfoTool {
    fn default() -> Self {
        Self::new()
    }
}
