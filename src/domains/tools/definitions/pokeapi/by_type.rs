//! Pokémon-by-type listing tool.
//!
//! Lists the first 20 Pokémon of a given type as a numbered list.

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
use super::models::TypeListing;

#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// How many Pokémon of a type are shown.
const TYPE_LISTING_LIMIT: usize = 20;

/// Parameters for the Pokémon-by-type listing.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PokemonByTypeParams {
    /// The Pokémon type to search for.
    #[schemars(description = "The Pokemon type to search for (e.g., fire, water, grass)")]
    #[serde(rename = "type")]
    pub type_: String,
}

/// Pokémon-by-type tool implementation.
#[derive(Debug, Clone)]
pub struct PokemonByTypeTool;

impl PokemonByTypeTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_pokemon_by_type";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List Pokemon of a given type (fire, water, grass, ...). Returns the first 20 matching Pokemon as a numbered list.";

    pub fn new() -> Self {
        Self
    }

    /// Execute the tool logic (runs blocking HTTP; call from a spawned thread).
    pub fn execute(params: &PokemonByTypeParams, config: &Config) -> CallToolResult {
        let lookup = normalize_name(&params.type_);
        info!("Fetching Pokemon of type: {}", lookup);

        let client = PokeApiClient::from_config(config);
        match client.type_listing(&lookup) {
            Ok(listing) => success_result(Self::format_listing(&params.type_, &listing)),
            Err(PokeApiError::NotFound { .. }) => error_result(&format!(
                "Error: Type \"{}\" not found. Valid types include fire, water, grass, electric, psychic, ice, dragon, dark, fairy, normal, fighting, poison, ground, flying, bug, rock, ghost, steel.",
                params.type_
            )),
            Err(e) => {
                error!("Type listing fetch failed: {:?}", e);
                error_result(&format!("Error fetching Pokemon type data: {}", e))
            }
        }
    }

    /// Format the first 20 Pokémon of a type as a numbered list.
    fn format_listing(type_name: &str, listing: &TypeListing) -> String {
        let mut lines = vec![format!(
            "**{}-type Pokemon** (showing first {}):",
            capitalize(type_name),
            TYPE_LISTING_LIMIT
        )];
        lines.extend(
            listing
                .pokemon
                .iter()
                .take(TYPE_LISTING_LIMIT)
                .enumerate()
                .map(|(index, slot)| format!("{}. {}", index + 1, capitalize(&slot.pokemon.name))),
        );
        lines.join("\n")
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        config: Arc<Config>,
    ) -> Result<serde_json::Value, ToolError> {
        let params: PokemonByTypeParams = serde_json::from_value(arguments)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;

        let handle = std::thread::spawn(move || Self::execute(&params, &config));
        let result = handle
            .join()
            .map_err(|_| ToolError::internal("Thread panicked during type listing"))?;

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
            input_schema: cached_schema_for_type::<PokemonByTypeParams>(),
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
                let params: PokemonByTypeParams =
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

impl Default for PokemonByTypeTool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn listing_of(names: &[&str]) -> TypeListing {
        serde_json::from_value(serde_json::json!({
            "pokemon": names
                .iter()
                .map(|n| serde_json::json!({"pokemon": {"name": n, "url": "u"}}))
                .collect::<Vec<_>>()
        }))
        .unwrap()
    }

    #[test]
    fn test_params_use_type_key() {
        let json = r#"{"type": "Fire"}"#;
        let params: PokemonByTypeParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.type_, "Fire");
    }

    #[test]
    fn test_format_listing() {
        let listing = listing_of(&["charmander", "vulpix"]);
        let text = PokemonByTypeTool::format_listing("fire", &listing);
        assert_eq!(
            text,
            "**Fire-type Pokemon** (showing first 20):\n1. Charmander\n2. Vulpix"
        );
    }

    #[test]
    fn test_format_listing_truncates_to_twenty() {
        let names: Vec<String> = (0..30).map(|i| format!("mon-{}", i)).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let listing = listing_of(&refs);
        let text = PokemonByTypeTool::format_listing("water", &listing);
        assert_eq!(text.lines().count(), 21); // header + 20 entries
        assert!(text.contains("20. Mon-19"));
        assert!(!text.contains("21."));
    }

    // Live-network test (run with: cargo test -- --ignored)
    #[ignore]
    #[test]
    fn test_execute_live_unknown_type() {
        let params = PokemonByTypeParams {
            type_: "plasma".to_string(),
        };
        let result = PokemonByTypeTool::execute(&params, &Config::default());
        assert!(result.is_error.unwrap_or(false));
        if let RawContent::Text(text) = &result.content[0].raw {
            assert!(text.text.contains("Valid types include"));
        }
    }
}
