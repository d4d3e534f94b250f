//! # ibmi-agent-core
//!
//! Core traits and types for IBM i agents.
//!
//! ## Overview
//!
//! This crate provides the foundational abstractions shared by the IBM i
//! agent crates:
//!
//! - [`Tool`] / [`Toolset`] - Callable actions exposed to an agent
//! - [`ReadonlyContext`] / [`ToolContext`] - Identity views handed to
//!   toolsets and tools
//! - [`AgentError`] / [`Result`] - Unified error handling
//!
//! Agent construction lives in `ibmi-agent-sdk`; the MCP toolset and the
//! annotation-based tool filter live in `ibmi-agent-tool`.

pub mod context;
pub mod error;
pub mod tool;

pub use context::ReadonlyContext;
pub use error::{AgentError, Result};
pub use tool::{Tool, ToolContext, ToolPredicate, Toolset};
