//! Serde wire models for the PokéAPI payload slices the tools consume.
//!
//! PokéAPI responses are large; these structs deserialize only the fields
//! the formatters need and ignore the rest.

use serde::Deserialize;

use super::evolution_chain::EvolutionNode;

/// A named reference to another API resource (`{ "name": ..., "url": ... }`).
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// An unnamed reference to another API resource (`{ "url": ... }`).
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceRef {
    pub url: String,
}

/// `/pokemon/{name}` response.
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// Height in decimetres.
    pub height: u32,
    /// Weight in hectograms.
    pub weight: u32,
    pub types: Vec<TypeSlot>,
    pub stats: Vec<StatSlot>,
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub moves: Vec<MoveSlot>,
    pub species: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub type_: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatSlot {
    pub base_stat: i32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MoveSlot {
    #[serde(rename = "move")]
    pub move_: NamedResource,
}

/// `/type/{name}` response.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeListing {
    pub pokemon: Vec<TypePokemonSlot>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypePokemonSlot {
    pub pokemon: NamedResource,
}

/// `/pokemon-species/{name}` response (only the chain reference).
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonSpecies {
    pub evolution_chain: ResourceRef,
}

/// `/evolution-chain/{id}` response.
#[derive(Debug, Clone, Deserialize)]
pub struct EvolutionChain {
    pub chain: ChainLink,
}

/// One link of an evolution chain: a species plus its downstream links.
#[derive(Debug, Clone, Deserialize)]
pub struct ChainLink {
    pub species: NamedResource,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

impl From<&ChainLink> for EvolutionNode {
    fn from(link: &ChainLink) -> Self {
        EvolutionNode {
            species_name: link.species.name.clone(),
            children: link.evolves_to.iter().map(EvolutionNode::from).collect(),
        }
    }
}

/// `/move/{name}` response.
#[derive(Debug, Clone, Deserialize)]
pub struct MoveDetails {
    pub name: String,
    #[serde(rename = "type")]
    pub type_: NamedResource,
    pub power: Option<i32>,
    pub accuracy: Option<i32>,
    pub pp: u32,
    pub priority: i32,
    pub damage_class: NamedResource,
    #[serde(default)]
    pub effect_entries: Vec<EffectEntry>,
    pub effect_chance: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EffectEntry {
    pub effect: String,
    pub language: NamedResource,
}

impl MoveDetails {
    /// The English effect text with the `[effect_chance]%` placeholder
    /// substituted, or a fallback when no English entry exists.
    pub fn english_effect(&self) -> String {
        let effect = self
            .effect_entries
            .iter()
            .find(|entry| entry.language.name == "en")
            .map(|entry| entry.effect.as_str())
            .unwrap_or("No description available");

        effect.replace(
            "[effect_chance]%",
            &format!("{}%", self.effect_chance.unwrap_or(0)),
        )
    }
}
