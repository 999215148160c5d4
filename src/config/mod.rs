// SPDX-License-Identifier: MIT

//! Agent configuration: YAML definitions, the tool registry and the
//! factory that turns definitions into agents.

pub mod factory;
pub mod loader;
pub mod registry;
pub mod types;

pub use factory::{default_registry, AgentFactory};
pub use loader::AgentLoader;
pub use registry::ToolRegistry;
pub use types::{AgentDefinition, ModelDefinition, ToolsetDefinition};
