// SPDX-License-Identifier: MIT

//! YAML schema types for agent definitions

use serde::{Deserialize, Serialize};

/// Agent definition as written in YAML
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AgentDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub instruction: String,
    #[serde(default)]
    pub model: ModelDefinition,
    /// Names of standalone tools, resolved in the tool registry
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub toolsets: Vec<ToolsetDefinition>,
}

/// Model configuration
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ModelDefinition {
    /// Provider is optional - inferred from model_name when absent
    pub provider: Option<String>,
    pub model_name: Option<String>,
}

/// Toolset configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ToolsetDefinition {
    /// Toolset kind, e.g. "math"
    pub kind: String,
    /// Name prefix applied to every tool of the toolset
    pub prefix: Option<String>,
}
