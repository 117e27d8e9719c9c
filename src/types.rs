use std::fmt;

use crate::tools::ToolHandle;

/// A named role with a goal, a backstory, and optional capabilities.
/// Immutable once constructed.
pub struct AgentDefinition {
    pub role: String,
    pub goal: String,
    pub backstory: String,
    pub tools: Vec<ToolHandle>,
    pub allow_delegation: bool,
}

impl fmt::Debug for AgentDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Tool handles are trait objects; list their names instead
        let tool_names: Vec<&str> = self.tools.iter().map(|t| t.name()).collect();
        f.debug_struct("AgentDefinition")
            .field("role", &self.role)
            .field("tools", &tool_names)
            .field("allow_delegation", &self.allow_delegation)
            .finish()
    }
}

/// A natural-language prompt bound to one agent. The agent association is a
/// non-owning index into the crew's agent list.
#[derive(Debug)]
pub struct TaskDefinition {
    pub description: String,
    pub agent: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionOrder {
    Sequential,
}

/// The full submission handed to an executor: agents, tasks, and the order
/// directive. Tasks run in list order.
#[derive(Debug)]
pub struct Crew {
    pub agents: Vec<AgentDefinition>,
    pub tasks: Vec<TaskDefinition>,
    pub order: ExecutionOrder,
}

impl Crew {
    /// The agent a task is bound to.
    pub fn agent_for(&self, task: &TaskDefinition) -> &AgentDefinition {
        &self.agents[task.agent]
    }
}
