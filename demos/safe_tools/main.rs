// Safe Tool Subset
//
// Lists the tools the IBM i MCP server advertises as safe: read-only,
// non-destructive, and closed-world, per the MCP standard annotation
// hints. These three criteria AND together, so a tool must carry all of
// them to appear.
//
// To run this demo:
//   IBMI_MCP_ACCESS_TOKEN=your_token cargo run --example safe_tools

use anyhow::Result;
use clap::Parser;
use ibmi_agent_core::ReadonlyContext;
use ibmi_agent_sdk::{AppConfig, BootstrapContext, Toolset};
use ibmi_agent_tool::mcp::{AnnotationToolFilter, FilterSpec, McpAuth, McpHttpClientBuilder};
use std::sync::Arc;

#[derive(Parser)]
#[command(about = "List the safe subset of IBM i MCP tools")]
struct Cli {
    /// MCP server URL (overrides MCP_URL)
    #[arg(long)]
    url: Option<String>,

    /// Log per-tool filtering decisions
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::from_env()?;
    ibmi_agent_telemetry::init_telemetry("safe-tools", &config.log_level)
        .expect("Failed to initialize telemetry");

    let url = cli.url.unwrap_or_else(|| config.mcp.url.clone());
    let token = config.mcp.require_access_token()?;

    let toolset = McpHttpClientBuilder::new(&url)
        .with_auth(McpAuth::bearer(token))
        .connect()
        .await?
        .with_name("safe_toolset")
        .with_filter(AnnotationToolFilter::new(FilterSpec::safe()).with_debug(cli.debug));

    let ctx =
        Arc::new(BootstrapContext::new("safe_tools_demo", "ibmi_agents")) as Arc<dyn ReadonlyContext>;
    let tools = toolset.tools(ctx).await?;

    println!("Safe tools ({}):", tools.len());
    for tool in &tools {
        println!("  - {}: {}", tool.name(), tool.description());
    }

    toolset.cancellation_token().await.cancel();
    Ok(())
}
