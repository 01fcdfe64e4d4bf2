//! Blocking PokéAPI client.
//!
//! A thin wrapper over `reqwest::blocking` with typed responses. Tool
//! routes call it from a dedicated spawned thread, never directly on the
//! async runtime. The base URL is taken from configuration so tests and
//! mirrors can point elsewhere.

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::core::config::Config;

use super::models::{EvolutionChain, MoveDetails, Pokemon, PokemonSpecies, TypeListing};

/// Errors from PokéAPI lookups.
#[derive(Debug, Error)]
pub enum PokeApiError {
    /// The resource does not exist upstream (HTTP 404).
    #[error("{resource} \"{name}\" not found")]
    NotFound {
        resource: &'static str,
        name: String,
    },

    /// Upstream answered with an unexpected status.
    #[error("unexpected HTTP {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    /// Network or decoding failure from reqwest.
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

/// Blocking HTTP client for PokéAPI.
pub struct PokeApiClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl PokeApiClient {
    /// Create a client against the given base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a client from server configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.pokeapi.base_url.clone())
    }

    /// Fetch a Pokémon by name or Pokédex number.
    pub fn pokemon(&self, name: &str) -> Result<Pokemon, PokeApiError> {
        let url = format!("{}/pokemon/{}", self.base_url, name);
        self.get_json(&url, "Pokemon", name)
    }

    /// Fetch the listing of Pokémon for a type.
    pub fn type_listing(&self, type_name: &str) -> Result<TypeListing, PokeApiError> {
        let url = format!("{}/type/{}", self.base_url, type_name);
        self.get_json(&url, "Type", type_name)
    }

    /// Fetch details for a move.
    pub fn move_details(&self, move_name: &str) -> Result<MoveDetails, PokeApiError> {
        let url = format!("{}/move/{}", self.base_url, move_name);
        self.get_json(&url, "Move", move_name)
    }

    /// Fetch a species record by the absolute URL a Pokémon payload references.
    pub fn species_by_url(&self, url: &str) -> Result<PokemonSpecies, PokeApiError> {
        self.get_json(url, "Species", url)
    }

    /// Fetch an evolution chain by the absolute URL a species payload references.
    pub fn evolution_chain_by_url(&self, url: &str) -> Result<EvolutionChain, PokeApiError> {
        self.get_json(url, "Evolution chain", url)
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        resource: &'static str,
        name: &str,
    ) -> Result<T, PokeApiError> {
        debug!("GET {}", url);
        let response = self.http.get(url).send()?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(PokeApiError::NotFound {
                resource,
                name: name.to_string(),
            });
        }
        if !status.is_success() {
            return Err(PokeApiError::Status {
                status,
                url: url.to_string(),
            });
        }

        Ok(response.json()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds_resource_urls_from_base() {
        let client = PokeApiClient::new("http://localhost:1/api/v2");
        // Port 1 is never listening; the request must fail with a network
        // error rather than a not-found, proving the URL was attempted.
        let result = client.pokemon("pikachu");
        assert!(matches!(result, Err(PokeApiError::Request(_))));
    }

    #[test]
    fn test_from_config_uses_configured_base_url() {
        let mut config = Config::default();
        config.pokeapi.base_url = "http://localhost:1/api/v2".to_string();
        let client = PokeApiClient::from_config(&config);
        assert!(matches!(
            client.type_listing("fire"),
            Err(PokeApiError::Request(_))
        ));
    }

    #[test]
    fn test_not_found_error_display() {
        let err = PokeApiError::NotFound {
            resource: "Pokemon",
            name: "missingno".to_string(),
        };
        assert_eq!(err.to_string(), "Pokemon \"missingno\" not found");
    }

    // Live-network tests (run with: cargo test -- --ignored)
    #[ignore]
    #[test]
    fn test_fetch_real_pokemon() {
        let client = PokeApiClient::new(crate::core::config::DEFAULT_POKEAPI_BASE_URL);
        let pokemon = client.pokemon("pikachu").unwrap();
        assert_eq!(pokemon.id, 25);
        assert_eq!(pokemon.name, "pikachu");
        assert!(!pokemon.species.url.is_empty());
    }

    #[ignore]
    #[test]
    fn test_fetch_unknown_pokemon_is_not_found() {
        let client = PokeApiClient::new(crate::core::config::DEFAULT_POKEAPI_BASE_URL);
        let result = client.pokemon("notapokemon");
        assert!(matches!(result, Err(PokeApiError::NotFound { .. })));
    }
}
