//! IBM i agent definitions.
//!
//! Four specialized agents over the IBM i MCP server:
//! - Performance: system performance monitoring and analysis
//! - Sysadmin discovery: high-level system discovery and summarization
//! - Sysadmin browse: structured browsing of libraries and services
//! - Sysadmin search: search and lookup across services and examples
//!
//! Each agent pairs instruction text with an MCP toolset narrowed to its
//! own toolset annotation, so the agent only ever sees the tools meant
//! for its domain.

use crate::agent::{Agent, BootstrapContext};
use crate::config::ModelConfig;
use crate::instructions::{DYNAMIC_INSTRUCTION, GLOBAL_INSTRUCTION, STATIC_INSTRUCTION};
use ibmi_agent_core::{AgentError, ReadonlyContext, Result, Toolset};
use ibmi_agent_tool::mcp::{AnnotationToolFilter, FilterSpec, McpToolset};
use rmcp::RoleClient;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

/// The agent kinds this SDK knows how to build.
pub const AVAILABLE_AGENTS: [&str; 4] =
    ["performance", "sysadmin_discovery", "sysadmin_browse", "sysadmin_search"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentKind {
    Performance,
    SysadminDiscovery,
    SysadminBrowse,
    SysadminSearch,
}

impl AgentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentKind::Performance => "performance",
            AgentKind::SysadminDiscovery => "sysadmin_discovery",
            AgentKind::SysadminBrowse => "sysadmin_browse",
            AgentKind::SysadminSearch => "sysadmin_search",
        }
    }

    pub fn agent_name(&self) -> &'static str {
        match self {
            AgentKind::Performance => "performance_agent",
            AgentKind::SysadminDiscovery => "sysadmin_discovery_agent",
            AgentKind::SysadminBrowse => "sysadmin_browse_agent",
            AgentKind::SysadminSearch => "sysadmin_search_agent",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AgentKind::Performance => {
                "Analyzes IBM i performance metrics and suggests optimizations."
            }
            AgentKind::SysadminDiscovery => {
                "Discovers IBM i services, schemas, and system structure."
            }
            AgentKind::SysadminBrowse => {
                "Explores and navigates IBM i system objects and libraries."
            }
            AgentKind::SysadminSearch => {
                "Searches for specific IBM i objects and provides quick lookups."
            }
        }
    }

    /// Toolset annotation values this agent is allowed to use.
    pub fn toolsets(&self) -> &'static [&'static str] {
        match self {
            AgentKind::Performance => &["performance"],
            AgentKind::SysadminDiscovery => &["sysadmin_discovery"],
            AgentKind::SysadminBrowse => &["sysadmin_browse"],
            AgentKind::SysadminSearch => &["sysadmin_search"],
        }
    }

    /// The annotation criteria that scope this agent's MCP tools.
    pub fn filter_spec(&self) -> FilterSpec {
        FilterSpec::for_toolsets(self.toolsets().iter().copied())
    }

    /// Agent-specific focus text plus the shared strategy section.
    pub fn instruction(&self) -> String {
        let focus = match self {
            AgentKind::Performance => {
                "You are an IBM i performance optimization assistant. You analyze \
                 performance data and provide actionable tuning recommendations.\n\n\
                 ### Tool Focus\n\
                 Performance-focused MCP tools such as `system_status`, \
                 `system_activity`, and `active_job_info` for workload summaries; \
                 `memory_pools`, `temp_storage_buckets`, and `unnamed_temp_storage` \
                 for memory diagnostics; `http_server` for HTTP performance; \
                 `collection_services` and `collection_categories` for monitoring \
                 insight; `system_values` for performance-related configuration.\n\n\
                 Analyze CPU, memory, I/O, and subsystem performance; surface \
                 bottlenecks, workload trends, and safe optimizations."
            }
            AgentKind::SysadminDiscovery => {
                "You are an IBM i system administration discovery assistant. You \
                 help administrators explore and summarize how their environment \
                 is organized.\n\n\
                 ### Tool Focus\n\
                 Discovery-oriented MCP tools such as `list_service_categories` and \
                 `count_services_by_schema` for service distribution; \
                 `count_services_by_sql_object_type` and `list_categories_for_schema` \
                 for structural mapping; `describe_sql_object` for object \
                 introspection and DDL extraction.\n\n\
                 Give administrators a clear overview of system composition, \
                 schemas, service categories, and object structures."
            }
            AgentKind::SysadminBrowse => {
                "You are an IBM i browsing assistant. You help administrators \
                 explore object libraries, schemas, and services in a structured \
                 manner.\n\n\
                 ### Tool Focus\n\
                 Browsing tools such as `list_services_by_category` and \
                 `list_services_by_schema` for navigating services; \
                 `list_services_by_sql_object_type` for organization by object \
                 type; `describe_sql_object` for inspecting structures.\n\n\
                 Provide hierarchical, intuitive views of system components and \
                 the relationships between libraries, schemas, and services."
            }
            AgentKind::SysadminSearch => {
                "You are an IBM i search and lookup assistant. You locate and \
                 describe IBM i services, objects, and examples efficiently.\n\n\
                 ### Tool Focus\n\
                 Search and metadata tools such as `search_services_by_name` and \
                 `where_is_service` for locating services; \
                 `search_examples_for_keyword` and `get_service_example` for code \
                 examples; `describe_sql_object` for detailed metadata.\n\n\
                 Return fast, accurate results with clear context about each \
                 service, its schema, and where it fits."
            }
        };
        format!("{focus}\n{DYNAMIC_INSTRUCTION}")
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentKind {
    type Err = AgentError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "performance" => Ok(AgentKind::Performance),
            "sysadmin_discovery" => Ok(AgentKind::SysadminDiscovery),
            "sysadmin_browse" => Ok(AgentKind::SysadminBrowse),
            "sysadmin_search" => Ok(AgentKind::SysadminSearch),
            other => Err(AgentError::Agent(format!(
                "Unknown agent type: {}. Available types: {}",
                other,
                AVAILABLE_AGENTS.join(", ")
            ))),
        }
    }
}

/// Build an agent of the given kind over a connected MCP toolset.
///
/// The toolset is narrowed to the kind's toolset annotation before tool
/// discovery; with `debug_filtering` the per-tool decisions are logged.
/// Returns the agent together with the filtered toolset so the caller
/// can shut the connection down when done.
pub async fn build_agent<S>(
    kind: AgentKind,
    toolset: McpToolset<S>,
    model: &ModelConfig,
    debug_filtering: bool,
) -> Result<(Agent, McpToolset<S>)>
where
    S: rmcp::service::Service<RoleClient> + Send + Sync + 'static,
{
    info!(agent = kind.agent_name(), model = %model.model_id, "creating agent");

    let toolset = toolset
        .with_name(format!("{}_toolset", kind.as_str()))
        .with_filter(AnnotationToolFilter::new(kind.filter_spec()).with_debug(debug_filtering));

    let ctx =
        Arc::new(BootstrapContext::new(kind.agent_name(), "ibmi_agents")) as Arc<dyn ReadonlyContext>;
    let tools = toolset.tools(ctx).await?;
    info!(agent = kind.agent_name(), tools = tools.len(), "resolved agent tools");

    let agent = Agent::builder(kind.agent_name())
        .description(kind.description())
        .model(model.model_id.clone())
        .static_instruction(STATIC_INSTRUCTION)
        .instruction(kind.instruction())
        .global_instruction(GLOBAL_INSTRUCTION)
        .tools(tools)
        .build()?;

    Ok((agent, toolset))
}

/// Create a performance monitoring agent for IBM i systems.
pub async fn performance_agent<S>(
    toolset: McpToolset<S>,
    model: &ModelConfig,
    debug_filtering: bool,
) -> Result<(Agent, McpToolset<S>)>
where
    S: rmcp::service::Service<RoleClient> + Send + Sync + 'static,
{
    build_agent(AgentKind::Performance, toolset, model, debug_filtering).await
}

/// Create a system administration discovery agent for IBM i systems.
pub async fn sysadmin_discovery_agent<S>(
    toolset: McpToolset<S>,
    model: &ModelConfig,
    debug_filtering: bool,
) -> Result<(Agent, McpToolset<S>)>
where
    S: rmcp::service::Service<RoleClient> + Send + Sync + 'static,
{
    build_agent(AgentKind::SysadminDiscovery, toolset, model, debug_filtering).await
}

/// Create a system administration browse agent for IBM i systems.
pub async fn sysadmin_browse_agent<S>(
    toolset: McpToolset<S>,
    model: &ModelConfig,
    debug_filtering: bool,
) -> Result<(Agent, McpToolset<S>)>
where
    S: rmcp::service::Service<RoleClient> + Send + Sync + 'static,
{
    build_agent(AgentKind::SysadminBrowse, toolset, model, debug_filtering).await
}

/// Create a system administration search agent for IBM i systems.
pub async fn sysadmin_search_agent<S>(
    toolset: McpToolset<S>,
    model: &ModelConfig,
    debug_filtering: bool,
) -> Result<(Agent, McpToolset<S>)>
where
    S: rmcp::service::Service<RoleClient> + Send + Sync + 'static,
{
    build_agent(AgentKind::SysadminSearch, toolset, model, debug_filtering).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_str_round_trips() {
        for name in AVAILABLE_AGENTS {
            let kind: AgentKind = name.parse().unwrap();
            assert_eq!(kind.as_str(), name);
        }
    }

    #[test]
    fn test_unknown_kind_lists_available_agents() {
        let err = "database".parse::<AgentKind>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Unknown agent type: database"));
        for name in AVAILABLE_AGENTS {
            assert!(message.contains(name));
        }
    }

    #[test]
    fn test_each_kind_filters_on_its_own_toolset() {
        for name in AVAILABLE_AGENTS {
            let kind: AgentKind = name.parse().unwrap();
            let spec = kind.filter_spec();
            assert_eq!(spec.len(), 1);
            assert_eq!(spec.entries()[0].0, "toolsets");
        }
    }

    #[test]
    fn test_instructions_carry_the_shared_strategy() {
        for name in AVAILABLE_AGENTS {
            let kind: AgentKind = name.parse().unwrap();
            let instruction = kind.instruction();
            assert!(instruction.contains("### Tool Focus"));
            assert!(instruction.contains("### Query Strategy"));
        }
    }

    #[test]
    fn test_agent_names_are_distinct() {
        let names: std::collections::HashSet<&str> = AVAILABLE_AGENTS
            .iter()
            .map(|name| name.parse::<AgentKind>().unwrap().agent_name())
            .collect();
        assert_eq!(names.len(), AVAILABLE_AGENTS.len());
    }
}
