// MCP (Model Context Protocol) Toolset Integration
//
// Connects to a running IBM i MCP server, discovers the tools it
// advertises, narrows them with the annotation filter, and exposes the
// survivors as agent-callable tools.

use super::filter::{AnnotationToolFilter, ToolDescriptor};
use async_trait::async_trait;
use ibmi_agent_core::{AgentError, ReadonlyContext, Result, Tool, ToolContext, Toolset};
use rmcp::{
    RoleClient,
    model::{CallToolRequestParams, RawContent, ResourceContents, Tool as McpToolModel},
    service::RunningService,
};
use serde_json::{Map, Value, json};
use std::ops::Deref;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Sanitize JSON schema for LLM compatibility.
/// Removes fields like `$schema`, `additionalProperties`, `definitions`, `$ref`
/// that some LLM APIs don't accept.
fn sanitize_schema(value: &mut Value) {
    if let Value::Object(map) = value {
        map.remove("$schema");
        map.remove("definitions");
        map.remove("$ref");
        map.remove("additionalProperties");

        for (_, v) in map.iter_mut() {
            sanitize_schema(v);
        }
    } else if let Value::Array(arr) = value {
        for v in arr.iter_mut() {
            sanitize_schema(v);
        }
    }
}

/// Collect a tool's annotations from its serialized form.
///
/// Standard hints live under `annotations` with their camelCase wire
/// names; servers that publish extra keys (the IBM i server's `toolsets`)
/// may also carry them in `_meta`. Null entries are dropped so that an
/// unset hint reads as "no value" rather than JSON null.
fn annotations_from_raw(raw: &Value) -> Map<String, Value> {
    let mut annotations = Map::new();

    let Value::Object(raw) = raw else {
        return annotations;
    };

    if let Some(Value::Object(declared)) = raw.get("annotations") {
        for (key, value) in declared {
            if !value.is_null() {
                annotations.insert(key.clone(), value.clone());
            }
        }
    }

    for meta_key in ["_meta", "meta"] {
        if let Some(Value::Object(meta)) = raw.get(meta_key) {
            for (key, value) in meta {
                if !value.is_null() {
                    annotations.entry(key.clone()).or_insert_with(|| value.clone());
                }
            }
        }
    }

    annotations
}

fn tool_descriptor(tool: &McpToolModel) -> ToolDescriptor {
    let mut descriptor = ToolDescriptor::new(
        tool.name.to_string(),
        tool.description.as_ref().map(|d| d.to_string()).unwrap_or_default(),
    );
    if let Ok(raw) = serde_json::to_value(tool) {
        descriptor.annotations = annotations_from_raw(&raw);
    }
    descriptor
}

/// MCP Toolset - connects to an MCP server and exposes its tools.
///
/// This toolset implements the [`Toolset`] trait and bridges the gap
/// between the IBM i MCP server and agent construction. It:
/// 1. Lists the tools advertised by a running MCP client service
/// 2. Applies the annotation filter to decide which tools to expose
/// 3. Converts the survivors into [`Tool`] implementations
/// 4. Proxies tool execution calls back to the MCP server
///
/// # Example
///
/// ```rust,ignore
/// use ibmi_agent_tool::McpToolset;
/// use ibmi_agent_tool::mcp::FilterSpec;
/// use rmcp::{ServiceExt, transport::TokioChildProcess};
/// use tokio::process::Command;
///
/// let client = ().serve(TokioChildProcess::new(
///     Command::new("npx").arg("ibmi-mcp-server")
/// )?).await?;
///
/// let toolset = McpToolset::new(client)
///     .with_filter(FilterSpec::for_toolsets(["performance"]));
/// ```
pub struct McpToolset<S = ()>
where
    S: rmcp::service::Service<RoleClient> + Send + Sync + 'static,
{
    /// The running MCP client service
    client: Arc<Mutex<RunningService<RoleClient, S>>>,
    /// Annotation filter deciding which tools to expose
    tool_filter: Option<AnnotationToolFilter>,
    /// Name of this toolset
    name: String,
}

impl<S> McpToolset<S>
where
    S: rmcp::service::Service<RoleClient> + Send + Sync + 'static,
{
    /// Create a new MCP toolset from a running MCP client service.
    ///
    /// The client should already be connected and initialized.
    /// Use `rmcp::ServiceExt::serve()` to create the client.
    pub fn new(client: RunningService<RoleClient, S>) -> Self {
        Self {
            client: Arc::new(Mutex::new(client)),
            tool_filter: None,
            name: "ibmi_mcp_toolset".to_string(),
        }
    }

    /// Set a custom name for this toolset.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Narrow the exposed tools with an annotation filter.
    ///
    /// Accepts a [`FilterSpec`](super::FilterSpec) directly or a fully
    /// configured [`AnnotationToolFilter`] (custom predicate, debug
    /// tracing).
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let toolset = McpToolset::new(client)
    ///     .with_filter(FilterSpec::for_toolsets(["performance"]).with("readOnlyHint", true));
    /// ```
    pub fn with_filter(mut self, filter: impl Into<AnnotationToolFilter>) -> Self {
        self.tool_filter = Some(filter.into());
        self
    }

    /// The configured annotation filter, if any.
    pub fn filter(&self) -> Option<&AnnotationToolFilter> {
        self.tool_filter.as_ref()
    }

    /// List descriptors for every tool the server advertises, unfiltered.
    ///
    /// Useful for inspecting annotations before deciding on a filter.
    pub async fn descriptors(&self) -> Result<Vec<ToolDescriptor>> {
        let mcp_tools = {
            let client = self.client.lock().await;
            client
                .list_all_tools()
                .await
                .map_err(|e| AgentError::Tool(format!("Failed to list MCP tools: {}", e)))?
        };
        Ok(mcp_tools.iter().map(tool_descriptor).collect())
    }

    /// Get a cancellation token that can be used to shutdown the MCP server.
    ///
    /// Call `cancel()` on the returned token before exiting to avoid
    /// EPIPE errors from a still-attached child process.
    pub async fn cancellation_token(&self) -> rmcp::service::RunningServiceCancellationToken {
        let client = self.client.lock().await;
        client.cancellation_token()
    }
}

#[async_trait]
impl<S> Toolset for McpToolset<S>
where
    S: rmcp::service::Service<RoleClient> + Send + Sync + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn tools(&self, _ctx: Arc<dyn ReadonlyContext>) -> Result<Vec<Arc<dyn Tool>>> {
        let mcp_tools = {
            let client = self.client.lock().await;
            client
                .list_all_tools()
                .await
                .map_err(|e| AgentError::Tool(format!("Failed to list MCP tools: {}", e)))?
        };

        let total = mcp_tools.len();
        let mut tools: Vec<Arc<dyn Tool>> = Vec::new();

        for mcp_tool in &mcp_tools {
            let descriptor = tool_descriptor(mcp_tool);

            if let Some(filter) = &self.tool_filter {
                if !filter.should_include(&descriptor) {
                    continue;
                }
            }

            let tool = McpTool {
                name: descriptor.name,
                description: descriptor.description,
                input_schema: {
                    let mut schema = Value::Object(mcp_tool.input_schema.as_ref().clone());
                    sanitize_schema(&mut schema);
                    Some(schema)
                },
                output_schema: mcp_tool.output_schema.as_ref().map(|s| {
                    let mut schema = Value::Object(s.as_ref().clone());
                    sanitize_schema(&mut schema);
                    schema
                }),
                client: self.client.clone(),
            };

            tools.push(Arc::new(tool) as Arc<dyn Tool>);
        }

        debug!(toolset = %self.name, exposed = tools.len(), total, "resolved MCP tools");
        Ok(tools)
    }
}

/// Individual MCP tool wrapper that proxies execution to the MCP server.
struct McpTool<S>
where
    S: rmcp::service::Service<RoleClient> + Send + Sync + 'static,
{
    name: String,
    description: String,
    input_schema: Option<Value>,
    output_schema: Option<Value>,
    client: Arc<Mutex<RunningService<RoleClient, S>>>,
}

#[async_trait]
impl<S> Tool for McpTool<S>
where
    S: rmcp::service::Service<RoleClient> + Send + Sync + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn parameters_schema(&self) -> Option<Value> {
        self.input_schema.clone()
    }

    fn response_schema(&self) -> Option<Value> {
        self.output_schema.clone()
    }

    async fn execute(&self, _ctx: Arc<dyn ToolContext>, args: Value) -> Result<Value> {
        let arguments = if args.is_null() || args == json!({}) {
            None
        } else {
            match args {
                Value::Object(map) => Some(map),
                _ => {
                    return Err(AgentError::Tool(
                        "Tool arguments must be an object".to_string(),
                    ));
                }
            }
        };
        let mut params = CallToolRequestParams::new(self.name.clone());
        if let Some(arguments) = arguments {
            params = params.with_arguments(arguments);
        }

        let result = {
            let client = self.client.lock().await;
            client.call_tool(params).await.map_err(|e| {
                AgentError::Tool(format!("Failed to call MCP tool '{}': {}", self.name, e))
            })?
        };

        // Check for error response
        if result.is_error.unwrap_or(false) {
            let mut error_msg = format!("MCP tool '{}' execution failed", self.name);

            for content in &result.content {
                if let Some(text_content) = content.deref().as_text() {
                    error_msg.push_str(": ");
                    error_msg.push_str(&text_content.text);
                    break;
                }
            }

            return Err(AgentError::Tool(error_msg));
        }

        // Return structured content if available
        if let Some(structured) = result.structured_content {
            return Ok(json!({ "output": structured }));
        }

        // Otherwise, collect text content
        let mut text_parts: Vec<String> = Vec::new();

        for content in &result.content {
            let raw: &RawContent = content.deref();
            match raw {
                RawContent::Text(text_content) => {
                    text_parts.push(text_content.text.clone());
                }
                RawContent::Image(image_content) => {
                    text_parts.push(format!(
                        "[Image: {} bytes, mime: {}]",
                        image_content.data.len(),
                        image_content.mime_type
                    ));
                }
                RawContent::Resource(resource_content) => {
                    let uri = match &resource_content.resource {
                        ResourceContents::TextResourceContents { uri, .. } => uri,
                        ResourceContents::BlobResourceContents { uri, .. } => uri,
                    };
                    text_parts.push(format!("[Resource: {}]", uri));
                }
                RawContent::Audio(_) => {
                    text_parts.push("[Audio content]".to_string());
                }
                RawContent::ResourceLink(link) => {
                    text_parts.push(format!("[ResourceLink: {}]", link.uri));
                }
            }
        }

        if text_parts.is_empty() {
            return Err(AgentError::Tool(format!(
                "MCP tool '{}' returned no content",
                self.name
            )));
        }

        Ok(json!({ "output": text_parts.join("\n") }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_schema_removes_unsupported_fields() {
        let mut schema = json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "type": "object",
            "additionalProperties": false,
            "properties": {
                "library": { "type": "string", "$ref": "#/definitions/lib" }
            },
            "definitions": { "lib": { "type": "string" } }
        });

        sanitize_schema(&mut schema);

        assert!(schema.get("$schema").is_none());
        assert!(schema.get("additionalProperties").is_none());
        assert!(schema.get("definitions").is_none());
        assert!(schema["properties"]["library"].get("$ref").is_none());
        assert_eq!(schema["properties"]["library"]["type"], "string");
    }

    #[test]
    fn test_annotations_from_raw_uses_wire_names() {
        let raw = json!({
            "name": "system_status",
            "annotations": {
                "title": "System status",
                "readOnlyHint": true,
                "destructiveHint": null
            }
        });

        let annotations = annotations_from_raw(&raw);
        assert_eq!(annotations.get("readOnlyHint"), Some(&json!(true)));
        assert_eq!(annotations.get("title"), Some(&json!("System status")));
        // Null hints mean "not declared", not an annotation value.
        assert!(!annotations.contains_key("destructiveHint"));
    }

    #[test]
    fn test_annotations_from_raw_merges_meta() {
        let raw = json!({
            "name": "system_status",
            "annotations": { "readOnlyHint": true },
            "_meta": { "toolsets": ["performance"], "readOnlyHint": false }
        });

        let annotations = annotations_from_raw(&raw);
        assert_eq!(annotations.get("toolsets"), Some(&json!(["performance"])));
        // Declared annotations win over meta duplicates.
        assert_eq!(annotations.get("readOnlyHint"), Some(&json!(true)));
    }

    #[test]
    fn test_annotations_from_raw_absent() {
        let annotations = annotations_from_raw(&json!({ "name": "bare" }));
        assert!(annotations.is_empty());
    }
}
