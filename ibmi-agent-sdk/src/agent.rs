//! Agent assembly.
//!
//! An [`Agent`] is the constructed artifact handed to whichever runtime
//! hosts it: a name, a description, a model identifier, instruction
//! layers, and the resolved set of callable tools. Reasoning loops and
//! model clients live outside this crate.

use crate::config::DEFAULT_MODEL_ID;
use ibmi_agent_core::{AgentError, ReadonlyContext, Result, Tool};
use std::sync::Arc;

/// A fully constructed IBM i agent definition.
pub struct Agent {
    name: String,
    description: String,
    model_id: String,
    static_instruction: Option<String>,
    instruction: Option<String>,
    global_instruction: Option<String>,
    tools: Vec<Arc<dyn Tool>>,
}

impl Agent {
    pub fn builder(name: impl Into<String>) -> AgentBuilder {
        AgentBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub fn static_instruction(&self) -> Option<&str> {
        self.static_instruction.as_deref()
    }

    pub fn instruction(&self) -> Option<&str> {
        self.instruction.as_deref()
    }

    pub fn global_instruction(&self) -> Option<&str> {
        self.global_instruction.as_deref()
    }

    /// The agent's registered actions, in registration order.
    pub fn tools(&self) -> &[Arc<dyn Tool>] {
        &self.tools
    }
}

impl std::fmt::Debug for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("model_id", &self.model_id)
            .field("tools_count", &self.tools.len())
            .finish()
    }
}

/// Builder for [`Agent`].
///
/// # Example
///
/// ```rust
/// use ibmi_agent_sdk::Agent;
///
/// let agent = Agent::builder("performance_agent")
///     .description("Analyzes IBM i performance metrics")
///     .model("meta-llama/llama-3-3-70b-instruct")
///     .instruction("Focus on CPU, memory, and workload analysis.")
///     .build()
///     .unwrap();
/// assert_eq!(agent.name(), "performance_agent");
/// ```
pub struct AgentBuilder {
    name: String,
    description: Option<String>,
    model_id: Option<String>,
    static_instruction: Option<String>,
    instruction: Option<String>,
    global_instruction: Option<String>,
    tools: Vec<Arc<dyn Tool>>,
}

impl AgentBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            model_id: None,
            static_instruction: None,
            instruction: None,
            global_instruction: None,
            tools: Vec::new(),
        }
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    pub fn static_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.static_instruction = Some(instruction.into());
        self
    }

    pub fn instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = Some(instruction.into());
        self
    }

    pub fn global_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.global_instruction = Some(instruction.into());
        self
    }

    pub fn tool(mut self, tool: Arc<dyn Tool>) -> Self {
        self.tools.push(tool);
        self
    }

    pub fn tools(mut self, tools: Vec<Arc<dyn Tool>>) -> Self {
        self.tools.extend(tools);
        self
    }

    pub fn build(self) -> Result<Agent> {
        if self.name.trim().is_empty() {
            return Err(AgentError::Agent("Agent name must not be empty".to_string()));
        }

        Ok(Agent {
            name: self.name,
            description: self.description.unwrap_or_default(),
            model_id: self.model_id.unwrap_or_else(|| DEFAULT_MODEL_ID.to_string()),
            static_instruction: self.static_instruction,
            instruction: self.instruction,
            global_instruction: self.global_instruction,
            tools: self.tools,
        })
    }
}

/// Minimal context used while resolving an agent's tools at construction
/// time, before any real invocation exists.
pub struct BootstrapContext {
    agent_name: String,
    app_name: String,
}

impl BootstrapContext {
    pub fn new(agent_name: impl Into<String>, app_name: impl Into<String>) -> Self {
        Self { agent_name: agent_name.into(), app_name: app_name.into() }
    }
}

impl ReadonlyContext for BootstrapContext {
    fn invocation_id(&self) -> &str {
        "bootstrap"
    }
    fn agent_name(&self) -> &str {
        &self.agent_name
    }
    fn user_id(&self) -> &str {
        "system"
    }
    fn app_name(&self) -> &str {
        &self.app_name
    }
    fn session_id(&self) -> &str {
        "bootstrap"
    }
}
