//! Dynamic tool router builder.
//!
//! Builds the `ToolRouter` used by the STDIO and TCP transports. Each tool
//! contributes its own `ToolRoute` via `create_route()`, so registering a
//! new tool is a single `with_route` line here.

use rmcp::handler::server::tool::ToolRouter;
use std::sync::Arc;

use crate::core::config::Config;

use super::definitions::{
    AddTool, BrandInfoTool, CalculateTool, DebugEnvTool, MoveDetailsTool, PokemonByTypeTool,
    PokemonEvolutionTool, PokemonInfoTool, PokemonMovesTool,
};

/// Build the tool router with all registered tools.
///
/// Tools that reach out over the network receive the shared configuration;
/// the pure calculator tools do not need it.
pub fn build_tool_router<S>(config: Arc<Config>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(AddTool::create_route())
        .with_route(CalculateTool::create_route())
        .with_route(PokemonInfoTool::create_route(config.clone()))
        .with_route(PokemonByTypeTool::create_route(config.clone()))
        .with_route(PokemonEvolutionTool::create_route(config.clone()))
        .with_route(PokemonMovesTool::create_route(config.clone()))
        .with_route(MoveDetailsTool::create_route(config.clone()))
        .with_route(BrandInfoTool::create_route(config.clone()))
        .with_route(DebugEnvTool::create_route(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::ToolRegistry;

    struct TestServer;

    #[test]
    fn test_router_has_all_tools() {
        let router = build_tool_router::<TestServer>(Arc::new(Config::default()));
        let tools = router.list_all();
        assert_eq!(tools.len(), 9);
    }

    #[test]
    fn test_router_contains_expected_names() {
        let router = build_tool_router::<TestServer>(Arc::new(Config::default()));
        let names: Vec<String> = router
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();

        for expected in [
            "add",
            "calculate",
            "get_pokemon_info",
            "get_pokemon_by_type",
            "get_pokemon_evolution",
            "get_pokemon_moves",
            "get_move_details",
            "get_brand_info",
            "debug_env",
        ] {
            assert!(names.contains(&expected.to_string()), "missing {expected}");
        }
    }

    #[test]
    fn test_router_matches_registry() {
        let config = Arc::new(Config::default());
        let router = build_tool_router::<TestServer>(config.clone());
        let registry = ToolRegistry::new(config);

        let mut router_names: Vec<String> = router
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();
        router_names.sort();

        let mut registry_names: Vec<String> = registry
            .tool_names()
            .iter()
            .map(|n| n.to_string())
            .collect();
        registry_names.sort();

        assert_eq!(router_names, registry_names);
    }
}
