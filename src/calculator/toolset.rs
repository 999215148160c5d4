// SPDX-License-Identifier: MIT

use super::functions::{add_numbers, subtract_numbers, MathArgs};
use crate::adk::context::{ReadonlyContext, ToolContext};
use crate::adk::tool::{FunctionTool, Tool};
use crate::adk::toolset::Toolset;
use async_trait::async_trait;
use std::sync::Arc;

/// Prefix used when none is given
pub const DEFAULT_PREFIX: &str = "math_";

/// Groups the addition and subtraction tools under a common name prefix.
pub struct SimpleMathToolset {
    prefix: String,
    add_tool: Arc<dyn Tool>,
    subtract_tool: Arc<dyn Tool>,
}

impl SimpleMathToolset {
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();

        let add_tool = FunctionTool::new(
            "add_numbers",
            "Adds two integer numbers. Returns the sum, e.g. {'status': 'success', 'result': 5}.",
            |args: MathArgs, ctx: &mut ToolContext<'_>| add_numbers(args.a, args.b, ctx),
        )
        .with_name(format!("{prefix}add_numbers"));

        let subtract_tool = FunctionTool::new(
            "subtract_numbers",
            "Subtracts the second number from the first. Returns the difference, e.g. {'status': 'success', 'result': 1}.",
            |args: MathArgs, _ctx: &mut ToolContext<'_>| subtract_numbers(args.a, args.b),
        )
        .with_name(format!("{prefix}subtract_numbers"));

        log::info!("SimpleMathToolset initialized with prefix '{}'", prefix);

        Self {
            prefix,
            add_tool: Arc::new(add_tool),
            subtract_tool: Arc::new(subtract_tool),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for SimpleMathToolset {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

#[async_trait]
impl Toolset for SimpleMathToolset {
    fn name(&self) -> &str {
        "simple_math"
    }

    async fn get_tools(&self, ctx: Option<&ReadonlyContext<'_>>) -> Vec<Arc<dyn Tool>> {
        log::debug!(
            "SimpleMathToolset.get_tools() called (context: {})",
            ctx.map(|c| c.invocation_id()).unwrap_or("none")
        );

        let tools = vec![self.add_tool.clone(), self.subtract_tool.clone()];
        log::info!(
            "SimpleMathToolset providing tools: {:?}",
            tools.iter().map(|t| t.name()).collect::<Vec<_>>()
        );
        tools
    }

    async fn close(&self) {
        log::info!("SimpleMathToolset.close() called for prefix '{}'", self.prefix);
        tokio::task::yield_now().await;
    }
}
