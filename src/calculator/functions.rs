// SPDX-License-Identifier: MIT

//! Plain functions exposed to the calculator agent as tools

use crate::adk::context::ToolContext;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// State key recording the most recent arithmetic operation
pub const LAST_MATH_OPERATION: &str = "last_math_operation";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
}

/// Result record returned by the arithmetic tools
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MathResult {
    pub status: Status,
    pub result: i64,
}

impl MathResult {
    fn success(result: i64) -> Self {
        Self {
            status: Status::Success,
            result,
        }
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MathArgs {
    /// The first number.
    pub a: i64,
    /// The second number.
    pub b: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub greeting: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GreetArgs {
    /// Name of the person to greet.
    #[serde(default = "default_user")]
    pub name: String,
}

fn default_user() -> String {
    "User".to_string()
}

/// Adds two integer numbers and records the operation in state.
///
/// Overflow wraps.
pub fn add_numbers(a: i64, b: i64, ctx: &mut ToolContext<'_>) -> MathResult {
    log::info!("Tool: add_numbers called with a={}, b={}", a, b);
    ctx.state_mut().set(LAST_MATH_OPERATION, "addition");
    MathResult::success(a.wrapping_add(b))
}

/// Subtracts the second number from the first. Overflow wraps.
pub fn subtract_numbers(a: i64, b: i64) -> MathResult {
    log::info!("Tool: subtract_numbers called with a={}, b={}", a, b);
    MathResult::success(a.wrapping_sub(b))
}

/// Greets the user.
pub fn greet_user(name: &str) -> Greeting {
    log::info!("Tool: greet_user called with name={}", name);
    Greeting {
        greeting: format!("Hello, {}!", name),
    }
}
