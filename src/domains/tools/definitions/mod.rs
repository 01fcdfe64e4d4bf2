//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod brand;
pub mod calc;
pub mod common;
pub mod debug;
pub mod pokeapi;

pub use brand::BrandInfoTool;
pub use calc::{AddTool, CalculateTool};
pub use debug::DebugEnvTool;
pub use pokeapi::{
    MoveDetailsTool, PokemonByTypeTool, PokemonEvolutionTool, PokemonInfoTool, PokemonMovesTool,
};
