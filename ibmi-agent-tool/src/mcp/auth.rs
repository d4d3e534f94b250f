// MCP Authentication Support
//
// The IBM i MCP server authenticates HTTP clients with a static bearer
// token (typically supplied via the IBMI_MCP_ACCESS_TOKEN environment
// variable).

use std::collections::HashMap;

/// Authentication configuration for MCP connections
#[derive(Clone, Default)]
pub enum McpAuth {
    /// No authentication required
    #[default]
    None,
    /// Static bearer token
    Bearer(String),
}

impl std::fmt::Debug for McpAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            McpAuth::None => write!(f, "McpAuth::None"),
            McpAuth::Bearer(_) => write!(f, "McpAuth::Bearer([REDACTED])"),
        }
    }
}

impl McpAuth {
    /// Create bearer token auth
    pub fn bearer(token: impl Into<String>) -> Self {
        McpAuth::Bearer(token.into())
    }

    /// Get authorization headers for a request
    pub fn get_headers(&self) -> HashMap<String, String> {
        let mut headers = HashMap::new();

        match self {
            McpAuth::None => {}
            McpAuth::Bearer(token) => {
                headers.insert("Authorization".to_string(), format!("Bearer {}", token));
            }
        }

        headers
    }

    /// Check if authentication is configured
    pub fn is_configured(&self) -> bool {
        !matches!(self, McpAuth::None)
    }
}
