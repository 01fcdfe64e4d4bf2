//! Brand-data webhook tool.
//!
//! Posts a domain name to the configured brand webhook and formats the
//! returned brand record as readable text. The webhook endpoint comes
//! from configuration (`MCP_BRAND_WEBHOOK_URL`); the tool reports an
//! error result when it is unset.

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

use super::super::common::{error_result, success_result};

#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// Parameters for the brand info lookup.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct BrandInfoParams {
    /// The company domain to look up.
    #[schemars(description = "The company domain to look up (e.g., example.com)")]
    pub domain: String,
}

/// Brand-data webhook tool implementation.
#[derive(Debug, Clone)]
pub struct BrandInfoTool;

impl BrandInfoTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_brand_info";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Look up brand data (name, description, colors, links) for a company domain via the configured brand webhook.";

    pub fn new() -> Self {
        Self
    }

    /// Execute the tool logic (runs blocking HTTP; call from a spawned thread).
    pub fn execute(params: &BrandInfoParams, config: &Config) -> CallToolResult {
        let domain = params.domain.trim().to_lowercase();

        let Some(webhook_url) = config.webhooks.brand_url.as_deref() else {
            return error_result(
                "Error: Brand webhook is not configured. Set MCP_BRAND_WEBHOOK_URL to enable this tool.",
            );
        };

        info!("Requesting brand data for: {}", domain);

        let response = reqwest::blocking::Client::new()
            .post(webhook_url)
            .json(&serde_json::json!({ "domain": domain }))
            .send();

        let response = match response {
            Ok(r) => r,
            Err(e) => {
                error!("Brand webhook request failed: {:?}", e);
                return error_result(&format!("Error fetching brand data: {}", e));
            }
        };

        if !response.status().is_success() {
            return error_result(&format!(
                "Error: Brand webhook returned HTTP {} for \"{}\"",
                response.status(),
                domain
            ));
        }

        match response.json::<serde_json::Value>() {
            Ok(payload) => success_result(Self::format_brand(&domain, &payload)),
            Err(e) => {
                error!("Brand webhook returned malformed payload: {:?}", e);
                error_result(&format!("Error fetching brand data: {}", e))
            }
        }
    }

    /// Format a brand payload as readable text.
    ///
    /// The webhook schema is loose; only the fields present are rendered.
    fn format_brand(domain: &str, payload: &serde_json::Value) -> String {
        let mut lines = vec![format!("**Brand info for {}**", domain)];

        if let Some(name) = payload.get("name").and_then(|v| v.as_str()) {
            lines.push(format!("**Name:** {}", name));
        }
        if let Some(description) = payload.get("description").and_then(|v| v.as_str()) {
            lines.push(format!("**Description:** {}", description));
        }
        if let Some(colors) = payload.get("colors").and_then(|v| v.as_array()) {
            // Entries are either "#RRGGBB" strings or objects with a "hex" field
            let rendered: Vec<&str> = colors
                .iter()
                .filter_map(|c| c.as_str().or_else(|| c.get("hex").and_then(|h| h.as_str())))
                .collect();
            if !rendered.is_empty() {
                lines.push(format!("**Colors:** {}", rendered.join(", ")));
            }
        }
        if let Some(links) = payload.get("links").and_then(|v| v.as_array()) {
            for link in links {
                if let (Some(name), Some(url)) = (
                    link.get("name").and_then(|v| v.as_str()),
                    link.get("url").and_then(|v| v.as_str()),
                ) {
                    lines.push(format!("  - {}: {}", name, url));
                }
            }
        }

        if lines.len() == 1 {
            lines.push("No brand fields returned by the webhook.".to_string());
        }
        lines.join("\n")
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        config: Arc<Config>,
    ) -> Result<serde_json::Value, ToolError> {
        let params: BrandInfoParams = serde_json::from_value(arguments)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;

        let handle = std::thread::spawn(move || Self::execute(&params, &config));
        let result = handle
            .join()
            .map_err(|_| ToolError::internal("Thread panicked during brand lookup"))?;

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
            input_schema: cached_schema_for_type::<BrandInfoParams>(),
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
                let params: BrandInfoParams =
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

impl Default for BrandInfoTool {
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
        let params: BrandInfoParams =
            serde_json::from_str(r#"{"domain": "Example.com"}"#).unwrap();
        assert_eq!(params.domain, "Example.com");
    }

    #[test]
    fn test_unconfigured_webhook_is_error_result() {
        let params = BrandInfoParams {
            domain: "example.com".to_string(),
        };
        let result = BrandInfoTool::execute(&params, &Config::default());
        assert!(result.is_error.unwrap_or(false));
        if let RawContent::Text(text) = &result.content[0].raw {
            assert!(text.text.contains("MCP_BRAND_WEBHOOK_URL"));
        }
    }

    #[test]
    fn test_format_brand_full_payload() {
        let payload = serde_json::json!({
            "name": "Example Corp",
            "description": "An example company.",
            "colors": ["#ff0000", {"hex": "#00ff00"}],
            "links": [{"name": "twitter", "url": "https://twitter.com/example"}]
        });
        let text = BrandInfoTool::format_brand("example.com", &payload);
        assert_eq!(
            text,
            "**Brand info for example.com**\n\
             **Name:** Example Corp\n\
             **Description:** An example company.\n\
             **Colors:** #ff0000, #00ff00\n\
             \x20 - twitter: https://twitter.com/example"
        );
    }

    #[test]
    fn test_format_brand_empty_payload() {
        let text = BrandInfoTool::format_brand("example.com", &serde_json::json!({}));
        assert!(text.contains("No brand fields returned"));
    }
}
