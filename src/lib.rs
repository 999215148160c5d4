// SPDX-License-Identifier: MIT

pub mod adk;
pub mod calculator;
pub mod config;
