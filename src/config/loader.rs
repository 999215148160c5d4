// SPDX-License-Identifier: MIT

//! Agent loader - YAML file loading and parsing

use super::types::AgentDefinition;
use crate::adk::error::Result;
use std::fs;
use std::path::Path;

/// Loads agent definitions from YAML files
pub struct AgentLoader;

impl AgentLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load an agent definition from a YAML file
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<AgentDefinition> {
        let path = path.as_ref();
        log::debug!("Loading agent definition from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::parse_yaml(&content)
    }

    /// Parse an agent definition from a YAML string
    pub fn parse_yaml(content: &str) -> Result<AgentDefinition> {
        let def: AgentDefinition = serde_yaml::from_str(content)?;
        Ok(def)
    }
}

impl Default for AgentLoader {
    fn default() -> Self {
        Self::new()
    }
}
