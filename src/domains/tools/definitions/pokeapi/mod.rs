//! PokéAPI tools module.
//!
//! This module provides the Pokémon lookup tools backed by PokéAPI
//! (https://pokeapi.co):
//! - `info`: Basic Pokémon information (stats, types, abilities)
//! - `by_type`: List Pokémon of a given type
//! - `evolution`: Evolution chain for a Pokémon
//! - `moves`: Moves a Pokémon can learn
//! - `move_details`: Details for a single move
//!
//! Shared plumbing lives alongside the tools: `client` wraps the outbound
//! HTTP calls, `models` holds the serde wire types, and `evolution_chain`
//! holds the chain flattening logic.

pub mod by_type;
pub mod client;
pub mod evolution;
pub mod evolution_chain;
pub mod info;
pub mod models;
pub mod move_details;
pub mod moves;

pub use by_type::{PokemonByTypeParams, PokemonByTypeTool};
pub use client::{PokeApiClient, PokeApiError};
pub use evolution::{PokemonEvolutionParams, PokemonEvolutionTool};
pub use evolution_chain::{EvolutionNode, flatten_evolution_chain};
pub use info::{PokemonInfoParams, PokemonInfoTool};
pub use move_details::{MoveDetailsParams, MoveDetailsTool};
pub use moves::{PokemonMovesParams, PokemonMovesTool};
