// SPDX-License-Identifier: MIT

//! Assembly of the calculator agent

use super::functions::{greet_user, GreetArgs};
use super::toolset::SimpleMathToolset;
use crate::adk::agent::LlmAgent;
use crate::adk::context::ToolContext;
use crate::adk::error::Result;
use crate::adk::tool::{FunctionTool, Tool};
use std::sync::Arc;

pub const AGENT_NAME: &str = "CalculatorAgent";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Instruction naming the tools exactly as the toolset exposes them
pub fn instruction(prefix: &str) -> String {
    format!(
        "You are a helpful calculator and greeter. \
Use 'greet_user' for greetings. \
Use '{prefix}add_numbers' to add and '{prefix}subtract_numbers' to subtract. \
Announce the state of 'last_math_operation' if it's set."
    )
}

/// The standalone greeting tool, not part of any toolset
pub fn greet_tool() -> Arc<dyn Tool> {
    Arc::new(FunctionTool::new(
        "greet_user",
        "Greets the user.",
        |args: GreetArgs, _ctx: &mut ToolContext<'_>| greet_user(&args.name),
    ))
}

/// Agent that uses both the individual greeting tool and the math toolset
pub fn calculator_agent(toolset: Arc<SimpleMathToolset>) -> Result<LlmAgent> {
    LlmAgent::builder(AGENT_NAME)
        .model(DEFAULT_MODEL)
        .description("Adds and subtracts numbers and greets the user")
        .instruction(instruction(toolset.prefix()))
        .tool(greet_tool())
        .toolset(toolset)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adk::agent::{ModelProvider, ToolUnion};
    use crate::adk::context::InvocationContext;
    use serde_json::json;

    #[test]
    fn test_agent_wiring() {
        let agent = calculator_agent(Arc::new(SimpleMathToolset::new("calculator_"))).unwrap();
        assert_eq!(agent.name, "CalculatorAgent");
        assert_eq!(agent.model, "gemini-2.0-flash");
        assert_eq!(agent.provider(), ModelProvider::Gemini);
        assert!(agent.instruction.contains("calculator_add_numbers"));

        assert_eq!(agent.tools.len(), 2);
        assert!(matches!(&agent.tools[0], ToolUnion::Tool(t) if t.name() == "greet_user"));
        assert!(matches!(&agent.tools[1], ToolUnion::Toolset(_)));
    }

    #[tokio::test]
    async fn test_instruction_follows_toolset_prefix() {
        let agent = calculator_agent(Arc::new(SimpleMathToolset::new("m_"))).unwrap();
        assert!(agent.instruction.contains("'m_add_numbers'"));
        assert!(agent.instruction.contains("'m_subtract_numbers'"));
        assert!(!agent.instruction.contains("calculator_"));

        // Every math tool the agent exposes is named in its instruction
        for tool in agent.canonical_tools(None).await {
            assert!(agent.instruction.contains(tool.name()), "{}", tool.name());
        }
    }

    #[tokio::test]
    async fn test_canonical_tool_names() {
        let agent = calculator_agent(Arc::new(SimpleMathToolset::new("calculator_"))).unwrap();
        let names: Vec<String> = agent
            .canonical_tools(None)
            .await
            .iter()
            .map(|t| t.name().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "greet_user",
                "calculator_add_numbers",
                "calculator_subtract_numbers"
            ]
        );
    }

    #[tokio::test]
    async fn test_greet_tool_defaults_name() {
        let tool = greet_tool();
        let mut inv = InvocationContext::new(AGENT_NAME);
        let mut ctx = inv.tool_context();

        let out = tool.execute(json!({}), &mut ctx).await.unwrap();
        assert_eq!(out, json!({"greeting": "Hello, User!"}));

        let out = tool.execute(json!({"name": "Ada"}), &mut ctx).await.unwrap();
        assert_eq!(out, json!({"greeting": "Hello, Ada!"}));
    }
}
