//! Environment-driven configuration.
//!
//! Configuration is loaded once by the binary and passed into agent
//! construction explicitly; nothing here installs process-global state.

use ibmi_agent_core::{AgentError, Result};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Default endpoint of a locally running IBM i MCP server.
pub const DEFAULT_MCP_URL: &str = "http://127.0.0.1:3010/mcp";

/// Default model identifier when `IBMI_AGENT_MODEL` is unset.
pub const DEFAULT_MODEL_ID: &str = "meta-llama/llama-3-3-70b-instruct";

/// How to reach the MCP server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transport {
    /// Streamable HTTP against a remote or local server URL.
    #[default]
    StreamableHttp,
    /// Spawn the server as a child process and talk over stdio.
    Stdio,
}

impl FromStr for Transport {
    type Err = AgentError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "streamable-http" | "streamable_http" => Ok(Transport::StreamableHttp),
            "stdio" => Ok(Transport::Stdio),
            other => Err(AgentError::Config(format!(
                "Unsupported transport type: {}. Must be 'streamable-http' or 'stdio'.",
                other
            ))),
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transport::StreamableHttp => write!(f, "streamable-http"),
            Transport::Stdio => write!(f, "stdio"),
        }
    }
}

/// MCP Server configuration.
#[derive(Debug, Clone)]
pub struct McpConfig {
    pub url: String,
    pub transport: Transport,
    /// Bearer token for the streamable HTTP transport
    /// (`IBMI_MCP_ACCESS_TOKEN`).
    pub access_token: Option<String>,
}

impl Default for McpConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_MCP_URL.to_string(),
            transport: Transport::default(),
            access_token: None,
        }
    }
}

impl McpConfig {
    /// Load MCP configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let transport = match lookup("MCP_TRANSPORT") {
            Some(raw) => raw.parse()?,
            None => Transport::default(),
        };
        Ok(Self {
            url: lookup("MCP_URL").unwrap_or_else(|| DEFAULT_MCP_URL.to_string()),
            transport,
            access_token: lookup("IBMI_MCP_ACCESS_TOKEN").filter(|token| !token.is_empty()),
        })
    }

    /// The bearer token, or a configuration error naming the variable.
    ///
    /// The streamable HTTP transport requires it; stdio servers do not.
    pub fn require_access_token(&self) -> Result<&str> {
        self.access_token.as_deref().ok_or_else(|| {
            AgentError::Config(
                "Missing IBMI_MCP_ACCESS_TOKEN in environment variables for the streamable HTTP transport".to_string(),
            )
        })
    }
}

/// Model selection. Only the identifier travels with the agent; model
/// clients belong to whichever runtime hosts it.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub model_id: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self { model_id: DEFAULT_MODEL_ID.to_string() }
    }
}

impl ModelConfig {
    /// Load model configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            model_id: lookup("IBMI_AGENT_MODEL").unwrap_or_else(|| DEFAULT_MODEL_ID.to_string()),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mcp: McpConfig,
    pub model: ModelConfig,
    pub debug: bool,
    pub log_level: String,
}

impl AppConfig {
    /// Load complete application configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String> + Copy) -> Result<Self> {
        Ok(Self {
            mcp: McpConfig::from_lookup(lookup)?,
            model: ModelConfig::from_lookup(lookup),
            debug: lookup("DEBUG").is_some_and(|raw| truthy(&raw)),
            log_level: lookup("LOG_LEVEL")
                .map(|level| level.to_ascii_lowercase())
                .unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn truthy(raw: &str) -> bool {
    matches!(raw.to_ascii_lowercase().as_str(), "true" | "1" | "yes")
}
