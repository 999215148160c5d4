// SPDX-License-Identifier: MIT

//! Agent development kit: tools, toolsets, contexts and agent configuration

pub mod agent;
pub mod context;
pub mod error;
pub mod state;
pub mod tool;
pub mod toolset;

pub use agent::{LlmAgent, ModelProvider, ToolUnion};
pub use context::{InvocationContext, ReadonlyContext, ToolContext};
pub use error::{AdkError, Result};
pub use state::State;
pub use tool::{FunctionTool, Tool};
pub use toolset::Toolset;
