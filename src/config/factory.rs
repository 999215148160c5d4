// SPDX-License-Identifier: MIT

//! Agent factory - constructs agents from definitions
//!
//! Resolves tool names against the registry, instantiates toolsets by kind
//! and wires everything into an [`LlmAgent`].

use super::registry::ToolRegistry;
use super::types::{AgentDefinition, ToolsetDefinition};
use crate::adk::agent::{LlmAgent, ModelProvider};
use crate::adk::error::{AdkError, Result};
use crate::adk::toolset::Toolset;
use crate::calculator::agent::DEFAULT_MODEL;
use crate::calculator::{greet_tool, SimpleMathToolset, DEFAULT_PREFIX};
use std::env;
use std::sync::Arc;

/// Registry pre-populated with the standalone tools this crate ships
pub async fn default_registry() -> ToolRegistry {
    let registry = ToolRegistry::new();
    registry.register(greet_tool()).await;
    registry
}

/// Factory for creating agents from definitions
pub struct AgentFactory<'a> {
    registry: &'a ToolRegistry,
}

impl<'a> AgentFactory<'a> {
    pub fn new(registry: &'a ToolRegistry) -> Self {
        Self { registry }
    }

    /// Build an agent from an AgentDefinition
    pub async fn build(&self, def: &AgentDefinition) -> Result<LlmAgent> {
        // Model name from definition, env var, or default
        let model_name = def
            .model
            .model_name
            .clone()
            .unwrap_or_else(|| env::var("MODEL_NAME").unwrap_or_else(|_| DEFAULT_MODEL.to_string()));

        let mut builder = LlmAgent::builder(def.name.clone())
            .description(def.description.clone())
            .instruction(def.instruction.clone())
            .model(model_name);

        if let Some(provider) = &def.model.provider {
            let parsed = ModelProvider::parse(provider)
                .ok_or_else(|| AdkError::config(format!("Unknown model provider: {}", provider)))?;
            builder = builder.provider(parsed);
        }

        for tool_name in &def.tools {
            let tool = self
                .registry
                .get(tool_name)
                .await
                .ok_or_else(|| AdkError::tool_not_found(tool_name.clone()))?;
            builder = builder.tool(tool);
        }

        for toolset_def in &def.toolsets {
            builder = builder.toolset(create_toolset(toolset_def)?);
        }

        let agent = builder.build()?;
        log::info!(
            "Built agent '{}' with model '{}' ({}) and {} tool entries",
            agent.name,
            agent.model,
            agent.provider(),
            agent.tools.len()
        );
        Ok(agent)
    }
}

fn create_toolset(def: &ToolsetDefinition) -> Result<Arc<dyn Toolset>> {
    match def.kind.as_str() {
        "math" => {
            let prefix = def.prefix.as_deref().unwrap_or(DEFAULT_PREFIX);
            Ok(Arc::new(SimpleMathToolset::new(prefix)))
        }
        other => Err(AdkError::UnknownToolset(other.to_string())),
    }
}
