// SPDX-License-Identifier: MIT

//! Agent module - agent configuration types
//!
//! This module provides:
//! - `LlmAgent` - declarative pairing of a model, an instruction and tools
//! - `ToolUnion` - an agent's tool entry, either a single tool or a toolset
//! - `ModelProvider` - provider inferred from a model identifier

mod llm;

pub use llm::{LlmAgent, LlmAgentBuilder};

use crate::adk::tool::Tool;
use crate::adk::toolset::Toolset;
use std::fmt;
use std::sync::Arc;

/// One entry in an agent's tool list
#[derive(Clone)]
pub enum ToolUnion {
    Tool(Arc<dyn Tool>),
    Toolset(Arc<dyn Toolset>),
}

impl ToolUnion {
    /// Name of the tool or toolset
    pub fn name(&self) -> &str {
        match self {
            ToolUnion::Tool(t) => t.name(),
            ToolUnion::Toolset(ts) => ts.name(),
        }
    }
}

impl fmt::Debug for ToolUnion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolUnion::Tool(t) => f.debug_tuple("Tool").field(&t.name()).finish(),
            ToolUnion::Toolset(ts) => f.debug_tuple("Toolset").field(&ts.name()).finish(),
        }
    }
}

impl From<Arc<dyn Tool>> for ToolUnion {
    fn from(tool: Arc<dyn Tool>) -> Self {
        ToolUnion::Tool(tool)
    }
}

impl From<Arc<dyn Toolset>> for ToolUnion {
    fn from(toolset: Arc<dyn Toolset>) -> Self {
        ToolUnion::Toolset(toolset)
    }
}

/// LLM provider behind a model identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelProvider {
    Gemini,
    OpenAI,
    Anthropic,
    DeepSeek,
}

impl ModelProvider {
    /// Infer the provider from the model name prefix. Unknown names map to Gemini.
    pub fn infer(model_name: &str) -> Self {
        let name_lower = model_name.to_lowercase();
        if name_lower.starts_with("gemini") || name_lower.starts_with("models/gemini") {
            ModelProvider::Gemini
        } else if name_lower.starts_with("gpt") || name_lower.starts_with("o1") {
            ModelProvider::OpenAI
        } else if name_lower.starts_with("claude") {
            ModelProvider::Anthropic
        } else if name_lower.starts_with("deepseek") {
            ModelProvider::DeepSeek
        } else {
            ModelProvider::Gemini
        }
    }

    /// Parse an explicit provider name as written in configuration
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "gemini" | "google" => Some(ModelProvider::Gemini),
            "openai" => Some(ModelProvider::OpenAI),
            "anthropic" => Some(ModelProvider::Anthropic),
            "deepseek" => Some(ModelProvider::DeepSeek),
            _ => None,
        }
    }
}

impl fmt::Display for ModelProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ModelProvider::Gemini => "Gemini",
            ModelProvider::OpenAI => "OpenAI",
            ModelProvider::Anthropic => "Anthropic",
            ModelProvider::DeepSeek => "DeepSeek",
        };
        f.write_str(name)
    }
}
