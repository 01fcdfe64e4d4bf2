//! Common utilities shared across tool definitions.
//!
//! This module provides shared functionality like name normalization,
//! display capitalization, and result construction helpers.

use rmcp::model::{CallToolResult, Content};
use tracing::warn;

/// Capitalize the first character of a name for display.
///
/// PokéAPI identifiers are lowercase ("bulbasaur", "charizard"); output
/// text shows them capitalized the way a Pokédex would.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Normalize a user-supplied identifier for a PokéAPI path segment.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Create an error result with a formatted message.
///
/// Tool failures are reported as error results, never as protocol errors;
/// the caller always gets a descriptive message back.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Default number of moves returned by `get_pokemon_moves`.
pub fn default_move_limit() -> f64 {
    10.0
}

/// Clamp a move limit to the allowed range (1-50).
///
/// The parameter accepts any JSON number; negative, zero, fractional, and
/// oversized values are clamped rather than rejected.
pub fn clamp_move_limit(limit: f64) -> usize {
    limit.clamp(1.0, 50.0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("bulbasaur"), "Bulbasaur");
        assert_eq!(capitalize("mr-mime"), "Mr-mime");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("x"), "X");
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  Pikachu "), "pikachu");
        assert_eq!(normalize_name("CHARIZARD"), "charizard");
        assert_eq!(normalize_name("25"), "25");
    }

    #[test]
    fn test_clamp_move_limit() {
        assert_eq!(clamp_move_limit(10.0), 10);
        assert_eq!(clamp_move_limit(0.0), 1);
        assert_eq!(clamp_move_limit(-5.0), 1);
        assert_eq!(clamp_move_limit(2.5), 2);
        assert_eq!(clamp_move_limit(200.0), 50);
        assert_eq!(clamp_move_limit(50.0), 50);
    }

    #[test]
    fn test_error_result_is_error() {
        let result = error_result("boom");
        assert!(result.is_error.unwrap_or(false));
        if let RawContent::Text(text) = &result.content[0].raw {
            assert_eq!(text.text, "boom");
        } else {
            panic!("expected text content");
        }
    }

    #[test]
    fn test_success_result_is_not_error() {
        let result = success_result("ok".to_string());
        assert!(!result.is_error.unwrap_or(false));
    }
}
