//! # ibmi-agent-tool
//!
//! Tool system for IBM i agents: annotation-filtered MCP toolsets.
//!
//! ## Overview
//!
//! This crate connects agents to the IBM i MCP server:
//!
//! - [`mcp::AnnotationToolFilter`] / [`mcp::FilterSpec`] - Narrow a tool
//!   listing by tool annotations (`toolsets`, `readOnlyHint`,
//!   `destructiveHint`, `openWorldHint`)
//! - [`McpToolset`] - Model Context Protocol integration
//! - [`mcp::McpHttpClientBuilder`] - Streamable HTTP connections
//!   (requires the `http-transport` feature)
//! - [`BasicToolset`] - Group statically constructed tools together
//!
//! ## Filtering
//!
//! The IBM i MCP server tags every tool with annotations. Filter specs
//! select on them declaratively; entries AND together, and list values
//! match on intersection:
//!
//! ```rust
//! use ibmi_agent_tool::mcp::{AnnotationToolFilter, FilterSpec, ToolDescriptor};
//! use serde_json::json;
//!
//! let tools = vec![
//!     ToolDescriptor::new("system_status", "Workload summary")
//!         .with_annotation("toolsets", json!(["performance"]))
//!         .with_annotation("readOnlyHint", true),
//!     ToolDescriptor::new("clear_output_queue", "Clears an output queue")
//!         .with_annotation("toolsets", json!(["sysadmin"])),
//! ];
//!
//! let filter = AnnotationToolFilter::new(
//!     FilterSpec::for_toolsets(["performance"]).with("readOnlyHint", true),
//! );
//! let kept = filter.filter_tools(tools);
//! assert_eq!(kept.len(), 1);
//! assert_eq!(kept[0].name, "system_status");
//! ```

pub mod mcp;
pub mod toolset;

pub use ibmi_agent_core::{Tool, ToolContext, Toolset};
pub use mcp::{AnnotationToolFilter, FilterSpec, McpToolset, ToolDescriptor};
pub use toolset::{BasicToolset, name_predicate};
