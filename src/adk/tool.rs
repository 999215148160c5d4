// SPDX-License-Identifier: MIT

use super::context::ToolContext;
use super::error::{AdkError, Result};
use async_trait::async_trait;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

/// Trait for tools that can be called by agents.
///
/// - `name()` and `description()` return `&str` to avoid allocation on every call
/// - `schema()` returns `&Value` to avoid cloning the schema on every access
/// - Implementations should store these values in struct fields
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the tool name (must be unique within an agent's tool set)
    fn name(&self) -> &str;

    /// Returns a human-readable description of what the tool does
    fn description(&self) -> &str;

    /// Returns the JSON schema for the tool's input parameters
    fn schema(&self) -> &Value;

    /// Execute the tool with the given input and return the result
    async fn execute(&self, input: Value, ctx: &mut ToolContext<'_>) -> Result<Value>;
}

type BoxedToolFn = Box<dyn Fn(&str, Value, &mut ToolContext<'_>) -> Result<Value> + Send + Sync>;

/// Adapts a plain Rust function into a [`Tool`].
///
/// The input schema is derived from the argument type, so the function's
/// signature is the single source of truth for what the model may send.
pub struct FunctionTool {
    name: String,
    description: String,
    schema: Value,
    func: BoxedToolFn,
}

impl FunctionTool {
    pub fn new<Args, R, F>(name: impl Into<String>, description: impl Into<String>, func: F) -> Self
    where
        Args: DeserializeOwned + JsonSchema + 'static,
        R: Serialize + 'static,
        F: Fn(Args, &mut ToolContext<'_>) -> R + Send + Sync + 'static,
    {
        let wrapped: BoxedToolFn = Box::new(
            move |tool_name: &str, input: Value, ctx: &mut ToolContext<'_>| {
                let args: Args = serde_json::from_value(input)
                    .map_err(|e| AdkError::invalid_arguments(tool_name, e.to_string()))?;
                Ok(serde_json::to_value(func(args, ctx))?)
            },
        );

        Self {
            name: name.into(),
            description: description.into(),
            schema: schema_for_args::<Args>(),
            func: wrapped,
        }
    }

    /// Rename the tool, e.g. so a toolset can prefix its members
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// JSON schema of `Args` without the draft/title envelope models don't need
fn schema_for_args<Args: JsonSchema>() -> Value {
    let root = schemars::schema_for!(Args);
    let mut schema = serde_json::to_value(root).unwrap_or_else(|_| json!({"type": "object"}));
    if let Value::Object(map) = &mut schema {
        map.remove("$schema");
        map.remove("title");
    }
    schema
}

#[async_trait]
impl Tool for FunctionTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn schema(&self) -> &Value {
        &self.schema
    }

    async fn execute(&self, input: Value, ctx: &mut ToolContext<'_>) -> Result<Value> {
        (self.func)(&self.name, input, ctx)
    }
}
