//! Pokémon evolution chain tool.
//!
//! Resolves a Pokémon to its species, the species to its evolution chain,
//! flattens the chain tree, and renders it as a numbered arrow-joined line.

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
use super::evolution_chain::{EvolutionNode, flatten_evolution_chain};

#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// Parameters for the evolution chain lookup.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PokemonEvolutionParams {
    /// The name or Pokédex number of the Pokémon.
    #[schemars(description = "The name or ID of the Pokemon to get evolution chain for")]
    pub name: String,
}

/// Pokémon evolution chain tool implementation.
#[derive(Debug, Clone)]
pub struct PokemonEvolutionTool;

impl PokemonEvolutionTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_pokemon_evolution";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get the evolution chain for a Pokemon. Branching chains are flattened into a single ordered sequence.";

    pub fn new() -> Self {
        Self
    }

    /// Execute the tool logic (runs blocking HTTP; call from a spawned thread).
    ///
    /// Three upstream fetches: the Pokémon record, the species record it
    /// names, and the evolution chain the species references.
    pub fn execute(params: &PokemonEvolutionParams, config: &Config) -> CallToolResult {
        let lookup = normalize_name(&params.name);
        info!("Fetching evolution chain for: {}", lookup);

        let client = PokeApiClient::from_config(config);

        let pokemon = match client.pokemon(&lookup) {
            Ok(p) => p,
            Err(PokeApiError::NotFound { .. }) => {
                return error_result(&format!("Error: Pokemon \"{}\" not found.", params.name));
            }
            Err(e) => {
                error!("Pokemon fetch failed: {:?}", e);
                return error_result(&format!("Error fetching evolution data: {}", e));
            }
        };

        let chain = client
            .species_by_url(&pokemon.species.url)
            .and_then(|species| client.evolution_chain_by_url(&species.evolution_chain.url));
        match chain {
            Ok(payload) => {
                let root = EvolutionNode::from(&payload.chain);
                let names = flatten_evolution_chain(&root);
                success_result(Self::format_chain(&params.name, &names))
            }
            Err(e) => {
                error!("Evolution chain fetch failed: {:?}", e);
                error_result(&format!("Error fetching evolution data: {}", e))
            }
        }
    }

    /// Format a flattened chain as a numbered, arrow-joined line.
    fn format_chain(requested_name: &str, species: &[String]) -> String {
        let chain_line = species
            .iter()
            .enumerate()
            .map(|(index, name)| format!("{}. {}", index + 1, capitalize(name)))
            .collect::<Vec<_>>()
            .join(" → ");

        format!(
            "**Evolution Chain for {}:**\n{}",
            capitalize(requested_name.trim()),
            chain_line
        )
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        config: Arc<Config>,
    ) -> Result<serde_json::Value, ToolError> {
        let params: PokemonEvolutionParams = serde_json::from_value(arguments)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;

        let handle = std::thread::spawn(move || Self::execute(&params, &config));
        let result = handle
            .join()
            .map_err(|_| ToolError::internal("Thread panicked during evolution lookup"))?;

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
            input_schema: cached_schema_for_type::<PokemonEvolutionParams>(),
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
                let params: PokemonEvolutionParams =
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

impl Default for PokemonEvolutionTool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    #[test]
    fn test_params_deserialize() {
        let json = r#"{"name": "eevee"}"#;
        let params: PokemonEvolutionParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.name, "eevee");
    }

    #[test]
    fn test_format_linear_chain() {
        let species = vec![
            "bulbasaur".to_string(),
            "ivysaur".to_string(),
            "venusaur".to_string(),
        ];
        let text = PokemonEvolutionTool::format_chain("bulbasaur", &species);
        assert_eq!(
            text,
            "**Evolution Chain for Bulbasaur:**\n1. Bulbasaur → 2. Ivysaur → 3. Venusaur"
        );
    }

    #[test]
    fn test_format_single_stage() {
        let species = vec!["tauros".to_string()];
        let text = PokemonEvolutionTool::format_chain("Tauros", &species);
        assert_eq!(text, "**Evolution Chain for Tauros:**\n1. Tauros");
    }

    // Live-network tests (run with: cargo test -- --ignored)
    #[ignore]
    #[test]
    fn test_execute_live_linear() {
        let params = PokemonEvolutionParams {
            name: "bulbasaur".to_string(),
        };
        let result = PokemonEvolutionTool::execute(&params, &Config::default());
        assert!(!result.is_error.unwrap_or(true));
        if let RawContent::Text(text) = &result.content[0].raw {
            assert!(
                text.text
                    .contains("1. Bulbasaur → 2. Ivysaur → 3. Venusaur")
            );
        }
    }

    #[ignore]
    #[test]
    fn test_execute_live_branching() {
        // Eevee's chain branches; every evolution appears in the flat list.
        let params = PokemonEvolutionParams {
            name: "eevee".to_string(),
        };
        let result = PokemonEvolutionTool::execute(&params, &Config::default());
        assert!(!result.is_error.unwrap_or(true));
        if let RawContent::Text(text) = &result.content[0].raw {
            assert!(text.text.contains("Vaporeon"));
            assert!(text.text.contains("Jolteon"));
            assert!(text.text.contains("Flareon"));
        }
    }
}
