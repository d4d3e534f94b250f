// List IBM i MCP Tools and Their Annotations
//
// Connects to the IBM i MCP server over streamable HTTP, prints every
// advertised tool with its annotations, and summarizes the toolset
// categories in use. Useful for deciding which filter spec an agent
// should carry.
//
// To run this demo:
//   IBMI_MCP_ACCESS_TOKEN=your_token cargo run --example list_tool_annotations

use anyhow::Result;
use clap::Parser;
use ibmi_agent_sdk::AppConfig;
use ibmi_agent_tool::mcp::{McpAuth, McpHttpClientBuilder, TOOLSETS_ANNOTATION};
use serde_json::Value;
use std::collections::BTreeSet;

#[derive(Parser)]
#[command(about = "List all IBM i MCP tools and their annotations")]
struct Cli {
    /// MCP server URL (overrides MCP_URL)
    #[arg(long)]
    url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::from_env()?;
    ibmi_agent_telemetry::init_telemetry("list-tool-annotations", &config.log_level)
        .expect("Failed to initialize telemetry");

    let url = cli.url.unwrap_or_else(|| config.mcp.url.clone());
    let token = config.mcp.require_access_token()?;

    println!("Connecting to IBM i MCP server: {}\n", url);
    let toolset =
        McpHttpClientBuilder::new(&url).with_auth(McpAuth::bearer(token)).connect().await?;

    let descriptors = toolset.descriptors().await?;
    let mut toolsets: BTreeSet<String> = BTreeSet::new();

    println!("=== ALL TOOLS ({}) ===", descriptors.len());
    for tool in &descriptors {
        println!("- {}: {}", tool.name, tool.description);
        if tool.annotations.is_empty() {
            println!("  Annotations: none");
        } else {
            println!("  Annotations: {}", Value::Object(tool.annotations.clone()));
        }
        if let Some(Value::Array(names)) = tool.annotation(TOOLSETS_ANNOTATION) {
            toolsets.extend(names.iter().filter_map(|n| n.as_str().map(str::to_string)));
        }
    }

    println!("\n=== ALL TOOLSETS ===");
    for name in &toolsets {
        println!("- {}", name);
    }

    toolset.cancellation_token().await.cancel();
    Ok(())
}
