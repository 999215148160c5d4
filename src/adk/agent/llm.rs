// SPDX-License-Identifier: MIT

//! LLM Agent - declarative agent configuration
//!
//! Pairs a model identifier with an instruction and an ordered list of
//! tools and toolsets. Toolsets are expanded lazily through
//! [`LlmAgent::canonical_tools`].

use super::{ModelProvider, ToolUnion};
use crate::adk::context::ReadonlyContext;
use crate::adk::error::{AdkError, Result};
use crate::adk::tool::Tool;
use crate::adk::toolset::Toolset;
use futures::future::join_all;
use std::collections::HashSet;
use std::sync::Arc;

/// Agent backed by a large language model
#[derive(Debug, Clone)]
pub struct LlmAgent {
    pub name: String,
    pub description: String,
    pub model: String,
    pub instruction: String,
    pub tools: Vec<ToolUnion>,
    provider: Option<ModelProvider>,
}

impl LlmAgent {
    pub fn builder(name: impl Into<String>) -> LlmAgentBuilder {
        LlmAgentBuilder::new(name)
    }

    /// Provider serving `model`, either configured explicitly or inferred
    pub fn provider(&self) -> ModelProvider {
        self.provider
            .unwrap_or_else(|| ModelProvider::infer(&self.model))
    }

    /// Flatten tools and toolsets into the list the model gets to see,
    /// keeping the configured order.
    pub async fn canonical_tools(&self, ctx: Option<&ReadonlyContext<'_>>) -> Vec<Arc<dyn Tool>> {
        let mut resolved: Vec<Arc<dyn Tool>> = Vec::new();
        for entry in &self.tools {
            match entry {
                ToolUnion::Tool(tool) => resolved.push(tool.clone()),
                ToolUnion::Toolset(toolset) => {
                    let tools = toolset.get_tools(ctx).await;
                    log::debug!(
                        "Agent {} expanded toolset '{}' into {} tools",
                        self.name,
                        toolset.name(),
                        tools.len()
                    );
                    resolved.extend(tools);
                }
            }
        }

        let mut seen = HashSet::new();
        for tool in &resolved {
            if !seen.insert(tool.name()) {
                log::warn!(
                    "Agent {} exposes tool '{}' more than once",
                    self.name,
                    tool.name()
                );
            }
        }

        resolved
    }

    /// Close every toolset this agent references
    pub async fn close(&self) {
        let closing = self.tools.iter().filter_map(|entry| match entry {
            ToolUnion::Toolset(toolset) => Some(toolset.close()),
            ToolUnion::Tool(_) => None,
        });
        join_all(closing).await;
        log::info!("Agent {} closed its toolsets", self.name);
    }
}

/// Builder for [`LlmAgent`]
#[derive(Debug, Clone, Default)]
pub struct LlmAgentBuilder {
    name: String,
    description: String,
    model: String,
    instruction: String,
    tools: Vec<ToolUnion>,
    provider: Option<ModelProvider>,
}

impl LlmAgentBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the provider instead of inferring it from the model name
    pub fn provider(mut self, provider: ModelProvider) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = instruction.into();
        self
    }

    pub fn tool(mut self, tool: Arc<dyn Tool>) -> Self {
        self.tools.push(tool.into());
        self
    }

    pub fn toolset(mut self, toolset: Arc<dyn Toolset>) -> Self {
        self.tools.push(toolset.into());
        self
    }

    pub fn build(self) -> Result<LlmAgent> {
        if self.name.trim().is_empty() {
            return Err(AdkError::config("agent name must not be empty"));
        }
        if self.model.trim().is_empty() {
            return Err(AdkError::config(format!(
                "agent '{}' has no model configured",
                self.name
            )));
        }

        Ok(LlmAgent {
            name: self.name,
            description: self.description,
            model: self.model,
            instruction: self.instruction,
            tools: self.tools,
            provider: self.provider,
        })
    }
}
