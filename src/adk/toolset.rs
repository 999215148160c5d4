// SPDX-License-Identifier: MIT

use super::context::ReadonlyContext;
use super::tool::Tool;
use async_trait::async_trait;
use std::sync::Arc;

/// A named group of tools that is asked for its members on demand.
///
/// Implementations may inspect the read-only context to vary the returned
/// set per invocation.
#[async_trait]
pub trait Toolset: Send + Sync {
    /// Returns the toolset name, used for logging and diagnostics
    fn name(&self) -> &str;

    /// Returns the tools currently exposed by this toolset
    async fn get_tools(&self, ctx: Option<&ReadonlyContext<'_>>) -> Vec<Arc<dyn Tool>>;

    /// Releases resources held by the toolset
    async fn close(&self) {}
}
