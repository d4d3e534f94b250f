// Build a Specialized IBM i Agent
//
// Creates one of the four IBM i agents (performance, sysadmin_discovery,
// sysadmin_browse, sysadmin_search). The agent's MCP toolset is narrowed
// to the toolset annotation for that agent before tool discovery, so the
// printed tool list is exactly what the agent would be allowed to call.
//
// To run this demo:
//   IBMI_MCP_ACCESS_TOKEN=your_token cargo run --example filtered_agent -- \
//       --agent performance --debug
//
// For a stdio server:
//   MCP_TRANSPORT=stdio cargo run --example filtered_agent -- \
//       --agent performance --command npx --args ibmi-mcp-server

use anyhow::{Context, Result};
use clap::Parser;
use ibmi_agent_sdk::{Agent, AgentKind, AppConfig, Transport, build_agent};
use ibmi_agent_tool::McpToolset;
use ibmi_agent_tool::mcp::{McpAuth, McpHttpClientBuilder};
use rmcp::{RoleClient, ServiceExt, transport::TokioChildProcess};
use tokio::process::Command;

#[derive(Parser)]
#[command(about = "Build an IBM i agent with annotation-filtered MCP tools")]
struct Cli {
    /// Agent type: performance, sysadmin_discovery, sysadmin_browse, sysadmin_search
    #[arg(long, default_value = "performance")]
    agent: String,

    /// Log per-tool filtering decisions
    #[arg(long)]
    debug: bool,

    /// MCP server URL (overrides MCP_URL, streamable HTTP only)
    #[arg(long)]
    url: Option<String>,

    /// Command to launch a stdio MCP server (MCP_TRANSPORT=stdio)
    #[arg(long)]
    command: Option<String>,

    /// Arguments for the stdio server command
    #[arg(long)]
    args: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::from_env()?;
    ibmi_agent_telemetry::init_telemetry("filtered-agent", &config.log_level)
        .expect("Failed to initialize telemetry");

    let kind: AgentKind = cli.agent.parse()?;
    let debug_filtering = cli.debug || config.debug;

    println!("Creating {} agent...", kind);

    match config.mcp.transport {
        Transport::StreamableHttp => {
            let url = cli.url.unwrap_or_else(|| config.mcp.url.clone());
            let token = config.mcp.require_access_token()?;
            let toolset = McpHttpClientBuilder::new(&url)
                .with_auth(McpAuth::bearer(token))
                .connect()
                .await?;
            run(kind, toolset, &config, debug_filtering).await
        }
        Transport::Stdio => {
            let command =
                cli.command.context("--command is required for the stdio transport")?;
            let mut cmd = Command::new(&command);
            cmd.args(&cli.args);
            let client = ()
                .serve(TokioChildProcess::new(cmd)?)
                .await
                .context("Failed to start stdio MCP server")?;
            run(kind, McpToolset::new(client), &config, debug_filtering).await
        }
    }
}

async fn run<S>(
    kind: AgentKind,
    toolset: McpToolset<S>,
    config: &AppConfig,
    debug_filtering: bool,
) -> Result<()>
where
    S: rmcp::service::Service<RoleClient> + Send + Sync + 'static,
{
    let (agent, toolset) = build_agent(kind, toolset, &config.model, debug_filtering).await?;

    print_agent(&agent);

    toolset.cancellation_token().await.cancel();
    Ok(())
}

fn print_agent(agent: &Agent) {
    println!("✅ Successfully created {}", agent.name());
    println!("   {}", agent.description());
    println!("   Model: {}", agent.model_id());
    println!("\nTools ({}):", agent.tools().len());
    for tool in agent.tools() {
        let desc = tool.description();
        let short_desc =
            if desc.len() > 60 { format!("{}...", &desc[..60]) } else { desc.to_string() };
        println!("  - {}: {}", tool.name(), short_desc);
    }
}
