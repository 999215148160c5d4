// SPDX-License-Identifier: MIT

//! Calculator example: arithmetic tools, a prefixed math toolset and the
//! agent that uses them alongside a standalone greeting tool.

pub mod agent;
pub mod functions;
pub mod toolset;

pub use agent::{calculator_agent, greet_tool};
pub use functions::{add_numbers, greet_user, subtract_numbers, MathResult, Status};
pub use toolset::{SimpleMathToolset, DEFAULT_PREFIX};
