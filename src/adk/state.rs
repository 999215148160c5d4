// SPDX-License-Identifier: MIT

//! Conversation state bag shared across tool calls

use serde_json::{Map, Value};
use std::collections::HashMap;

/// Keys shared by every user of the application
pub const APP_PREFIX: &str = "app:";
/// Keys tied to one user across sessions
pub const USER_PREFIX: &str = "user:";
/// Keys that only live for the current invocation
pub const TEMP_PREFIX: &str = "temp:";

/// Key/value state for one conversation with change tracking.
///
/// Writes go through [`State::set`], which updates the current value and
/// records the change in the pending delta so a host can persist exactly
/// what a tool touched.
#[derive(Debug, Clone, Default)]
pub struct State {
    values: HashMap<String, Value>,
    delta: HashMap<String, Value>,
}

impl State {
    /// Create an empty State
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the state with initial values. Seeded values are not part of the delta.
    pub fn from_map(initial: HashMap<String, Value>) -> Self {
        Self {
            values: initial,
            delta: HashMap::new(),
        }
    }

    /// Get a value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Get a nested value using dot notation (e.g., "result.intent")
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        let mut parts = path.split('.');
        let mut current = self.values.get(parts.next()?)?;
        for part in parts {
            current = current.get(part)?;
        }
        Some(current)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Set a value and record it in the pending delta
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        self.delta.insert(key.clone(), value.clone());
        self.values.insert(key, value);
    }

    /// Changes recorded since creation or the last [`State::take_delta`]
    pub fn delta(&self) -> &HashMap<String, Value> {
        &self.delta
    }

    /// Drain the pending delta
    pub fn take_delta(&mut self) -> HashMap<String, Value> {
        std::mem::take(&mut self.delta)
    }

    /// Values whose key starts with `prefix`, prefix included
    pub fn scoped(&self, prefix: &str) -> Map<String, Value> {
        self.values
            .iter()
            .filter(|(k, _)| k.starts_with(prefix))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Convert state to JSON object
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.values
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }

    /// Get all keys
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.values.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_state() {
        let state = State::new();
        assert!(state.get("anything").is_none());
        assert!(state.delta().is_empty());
    }

    #[test]
    fn test_seeded_values_are_not_in_delta() {
        let mut initial = HashMap::new();
        initial.insert("task_status".to_string(), json!("idle"));
        let state = State::from_map(initial);

        assert_eq!(state.get("task_status"), Some(&json!("idle")));
        assert!(state.delta().is_empty());
    }

    #[test]
    fn test_set_records_delta() {
        let mut state = State::new();
        state.set("last_math_operation", "addition");

        assert_eq!(state.get("last_math_operation"), Some(&json!("addition")));
        assert_eq!(
            state.delta().get("last_math_operation"),
            Some(&json!("addition"))
        );
    }

    #[test]
    fn test_last_write_wins_in_delta() {
        let mut state = State::new();
        state.set("op", "addition");
        state.set("op", "subtraction");

        assert_eq!(state.delta().len(), 1);
        assert_eq!(state.delta().get("op"), Some(&json!("subtraction")));
    }

    #[test]
    fn test_take_delta_drains() {
        let mut state = State::new();
        state.set("a", 1);

        let delta = state.take_delta();
        assert_eq!(delta.get("a"), Some(&json!(1)));
        assert!(state.delta().is_empty());
        // Value itself survives the drain
        assert_eq!(state.get("a"), Some(&json!(1)));
    }

    #[test]
    fn test_get_path() {
        let mut state = State::new();
        state.set("result", json!({"data": {"value": 42}}));

        assert_eq!(state.get_path("result.data"), Some(&json!({"value": 42})));
        assert_eq!(state.get_path("result.data.value"), Some(&json!(42)));
        assert_eq!(state.get_path("result.nonexistent"), None);
        assert_eq!(state.get_path("missing"), None);
    }

    #[test]
    fn test_scoped() {
        let mut state = State::new();
        state.set("user:login_count", 1);
        state.set("temp:validation_needed", true);
        state.set("task_status", "active");

        let user = state.scoped(USER_PREFIX);
        assert_eq!(user.len(), 1);
        assert_eq!(user.get("user:login_count"), Some(&json!(1)));
        assert!(state.scoped(APP_PREFIX).is_empty());
        assert_eq!(state.scoped(TEMP_PREFIX).len(), 1);
    }

    #[test]
    fn test_to_json() {
        let mut state = State::new();
        state.set("a", 1);
        state.set("b", "hello");

        let json = state.to_json();
        assert_eq!(json["a"], 1);
        assert_eq!(json["b"], "hello");
        assert_eq!(state.keys().count(), 2);
    }
}
