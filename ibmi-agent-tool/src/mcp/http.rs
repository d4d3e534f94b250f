// MCP HTTP Transport (Streamable HTTP)
//
// Provides HTTP-based transport for connecting to a remote IBM i MCP
// server. Uses the streamable HTTP transport from rmcp when the
// http-transport feature is enabled.

use super::auth::McpAuth;
use std::time::Duration;

#[cfg(not(feature = "http-transport"))]
use ibmi_agent_core::AgentError;
#[cfg(not(feature = "http-transport"))]
use ibmi_agent_core::Result;

/// Builder for HTTP-based MCP connections.
///
/// # Example
///
/// ```rust,ignore
/// use ibmi_agent_tool::mcp::{McpAuth, McpHttpClientBuilder};
///
/// let toolset = McpHttpClientBuilder::new("http://127.0.0.1:3010/mcp")
///     .with_auth(McpAuth::bearer(access_token))
///     .timeout(Duration::from_secs(60))
///     .connect()
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct McpHttpClientBuilder {
    /// MCP server endpoint URL
    endpoint: String,
    /// Authentication configuration
    auth: McpAuth,
    /// Request timeout
    timeout: Duration,
}

impl McpHttpClientBuilder {
    /// Create a new HTTP client builder for the given endpoint.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - The MCP server URL (e.g., "http://127.0.0.1:3010/mcp")
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into(), auth: McpAuth::None, timeout: Duration::from_secs(30) }
    }

    /// Set authentication for the connection.
    pub fn with_auth(mut self, auth: McpAuth) -> Self {
        self.auth = auth;
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Get the configured timeout.
    pub fn get_timeout(&self) -> Duration {
        self.timeout
    }

    /// Get the authentication configuration.
    pub fn get_auth(&self) -> &McpAuth {
        &self.auth
    }

    /// Connect to the MCP server and create a toolset.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `http-transport` feature is not enabled
    /// - Connection to the server fails
    #[cfg(feature = "http-transport")]
    pub async fn connect(
        self,
    ) -> ibmi_agent_core::Result<super::McpToolset<impl rmcp::service::Service<rmcp::RoleClient>>>
    {
        use rmcp::ServiceExt;
        use rmcp::transport::streamable_http_client::{
            StreamableHttpClientTransport, StreamableHttpClientTransportConfig,
        };

        // Extract the raw token from auth config
        // rmcp's bearer_auth() adds "Bearer " prefix automatically
        let token = match &self.auth {
            McpAuth::Bearer(token) => Some(token.clone()),
            McpAuth::None => None,
        };

        let mut config = StreamableHttpClientTransportConfig::with_uri(self.endpoint.as_str());
        if let Some(token) = token {
            config = config.auth_header(token);
        }

        let transport = StreamableHttpClientTransport::from_config(config);

        let client = ().serve(transport).await.map_err(|e| {
            ibmi_agent_core::AgentError::Tool(format!("Failed to connect to MCP server: {}", e))
        })?;

        Ok(super::McpToolset::new(client))
    }

    /// Connect to the MCP server (stub when http-transport feature is disabled).
    #[cfg(not(feature = "http-transport"))]
    pub async fn connect(self) -> Result<()> {
        Err(AgentError::Tool(
            "HTTP transport requires the 'http-transport' feature. \
             Add `ibmi-agent-tool = { features = [\"http-transport\"] }` to your Cargo.toml"
                .to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_new() {
        let builder = McpHttpClientBuilder::new("http://127.0.0.1:3010/mcp");
        assert_eq!(builder.endpoint(), "http://127.0.0.1:3010/mcp");
        assert_eq!(builder.get_timeout(), Duration::from_secs(30));
        assert!(!builder.get_auth().is_configured());
    }

    #[test]
    fn test_builder_with_auth() {
        let builder = McpHttpClientBuilder::new("http://127.0.0.1:3010/mcp")
            .with_auth(McpAuth::bearer("test-token"));
        assert!(builder.get_auth().is_configured());
    }

    #[test]
    fn test_builder_timeout() {
        let builder =
            McpHttpClientBuilder::new("http://127.0.0.1:3010/mcp").timeout(Duration::from_secs(60));
        assert_eq!(builder.get_timeout(), Duration::from_secs(60));
    }
}
