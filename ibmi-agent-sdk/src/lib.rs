//! # ibmi-agent-sdk
//!
//! IBM i agent SDK: specialized LLM agent definitions over
//! annotation-filtered MCP toolsets.
//!
//! ## Overview
//!
//! The IBM i MCP server advertises its SQL service tools with
//! annotations (`toolsets` categories plus the MCP standard behavior
//! hints). This SDK turns that listing into ready-to-host agents:
//!
//! - [`config`] - Environment-driven configuration (`MCP_URL`,
//!   `MCP_TRANSPORT`, `IBMI_MCP_ACCESS_TOKEN`, `IBMI_AGENT_MODEL`)
//! - [`instructions`] - Instruction text shared by the agents
//! - [`Agent`] / [`AgentBuilder`] - Agent assembly
//! - [`AgentKind`] and the `*_agent` constructors - The four
//!   specialized IBM i agents (performance, sysadmin discovery,
//!   sysadmin browse, sysadmin search)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ibmi_agent_sdk::{AgentKind, AppConfig, build_agent};
//! use ibmi_agent_tool::mcp::{McpAuth, McpHttpClientBuilder};
//!
//! let config = AppConfig::from_env()?;
//! let toolset = McpHttpClientBuilder::new(&config.mcp.url)
//!     .with_auth(McpAuth::bearer(config.mcp.require_access_token()?))
//!     .connect()
//!     .await?;
//!
//! let (agent, toolset) = build_agent(
//!     AgentKind::Performance,
//!     toolset,
//!     &config.model,
//!     config.debug,
//! ).await?;
//!
//! for tool in agent.tools() {
//!     println!("{}: {}", tool.name(), tool.description());
//! }
//! toolset.cancellation_token().await.cancel();
//! ```

pub mod agent;
pub mod agents;
pub mod config;
pub mod instructions;

pub use agent::{Agent, AgentBuilder, BootstrapContext};
pub use agents::{
    AVAILABLE_AGENTS, AgentKind, build_agent, performance_agent, sysadmin_browse_agent,
    sysadmin_discovery_agent, sysadmin_search_agent,
};
pub use config::{AppConfig, McpConfig, ModelConfig, Transport};

pub use ibmi_agent_core::{AgentError, ReadonlyContext, Result, Tool, ToolContext, Toolset};
pub use ibmi_agent_tool::mcp::{AnnotationToolFilter, FilterSpec, McpToolset, ToolDescriptor};
