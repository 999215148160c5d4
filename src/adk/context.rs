// SPDX-License-Identifier: MIT

//! Contexts handed to toolsets and tools

use super::state::State;
use uuid::Uuid;

/// Read-only view of the current invocation, used by toolsets to decide
/// which tools to expose.
#[derive(Debug, Clone, Copy)]
pub struct ReadonlyContext<'a> {
    agent_name: &'a str,
    invocation_id: &'a str,
    state: &'a State,
}

impl<'a> ReadonlyContext<'a> {
    pub fn new(agent_name: &'a str, invocation_id: &'a str, state: &'a State) -> Self {
        Self {
            agent_name,
            invocation_id,
            state,
        }
    }

    pub fn agent_name(&self) -> &'a str {
        self.agent_name
    }

    pub fn invocation_id(&self) -> &'a str {
        self.invocation_id
    }

    pub fn state(&self) -> &'a State {
        self.state
    }
}

/// Context passed to a single tool call. Holds the conversation state mutably.
#[derive(Debug)]
pub struct ToolContext<'a> {
    agent_name: &'a str,
    invocation_id: &'a str,
    state: &'a mut State,
}

impl<'a> ToolContext<'a> {
    pub fn new(agent_name: &'a str, invocation_id: &'a str, state: &'a mut State) -> Self {
        Self {
            agent_name,
            invocation_id,
            state,
        }
    }

    pub fn agent_name(&self) -> &str {
        self.agent_name
    }

    pub fn invocation_id(&self) -> &str {
        self.invocation_id
    }

    pub fn state(&self) -> &State {
        &*self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut *self.state
    }

    /// Reborrow as a read-only context
    pub fn readonly(&self) -> ReadonlyContext<'_> {
        ReadonlyContext::new(self.agent_name, self.invocation_id, &*self.state)
    }
}

/// Owns the state of one conversation and hands out context views.
#[derive(Debug, Clone)]
pub struct InvocationContext {
    agent_name: String,
    invocation_id: String,
    state: State,
}

impl InvocationContext {
    pub fn new(agent_name: impl Into<String>) -> Self {
        Self::with_state(agent_name, State::new())
    }

    pub fn with_state(agent_name: impl Into<String>, state: State) -> Self {
        Self {
            agent_name: agent_name.into(),
            invocation_id: format!("e-{}", Uuid::new_v4()),
            state,
        }
    }

    pub fn agent_name(&self) -> &str {
        &self.agent_name
    }

    pub fn invocation_id(&self) -> &str {
        &self.invocation_id
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    pub fn readonly(&self) -> ReadonlyContext<'_> {
        ReadonlyContext::new(&self.agent_name, &self.invocation_id, &self.state)
    }

    pub fn tool_context(&mut self) -> ToolContext<'_> {
        ToolContext::new(&self.agent_name, &self.invocation_id, &mut self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_invocation_ids_are_unique() {
        let a = InvocationContext::new("agent");
        let b = InvocationContext::new("agent");
        assert_ne!(a.invocation_id(), b.invocation_id());
        assert!(a.invocation_id().starts_with("e-"));
    }

    #[test]
    fn test_tool_context_writes_are_visible_to_invocation() {
        let mut inv = InvocationContext::new("CalculatorAgent");
        {
            let mut ctx = inv.tool_context();
            assert_eq!(ctx.agent_name(), "CalculatorAgent");
            ctx.state_mut().set("last_math_operation", "addition");
        }
        assert_eq!(
            inv.state().get("last_math_operation"),
            Some(&json!("addition"))
        );
        assert_eq!(inv.readonly().state().delta().len(), 1);
    }

    #[test]
    fn test_readonly_from_tool_context() {
        let mut inv = InvocationContext::new("agent");
        let invocation_id = inv.invocation_id().to_string();
        let ctx = inv.tool_context();
        let ro = ctx.readonly();
        assert_eq!(ro.agent_name(), "agent");
        assert_eq!(ro.invocation_id(), invocation_id);
        assert!(ro.state().get("x").is_none());
    }
}
