//! Minimal synchronous publish/subscribe facility for configuration events
//!
//! The real event system belongs to the host application; this registry
//! mirrors its reducer contract so the plugin can be wired and exercised
//! without it. Handlers registered for the same event run in registration
//! order, each one receiving the previous handler's output.

use std::collections::HashMap;

use serde_json::Value;
use tracing::trace;

use crate::error::Result;

/// A configuration reducer attached to a named extension point.
///
/// Receives the current configuration value and an event-specific context and
/// returns the next configuration value.
pub type Reducer = Box<dyn Fn(Value, &Value) -> Result<Value>>;

/// Registry of configuration reducers keyed by event name.
#[derive(Default)]
pub struct Events {
    reducers: HashMap<String, Vec<Reducer>>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a reducer to an event.
    pub fn on<F>(&mut self, event: &str, reducer: F)
    where
        F: Fn(Value, &Value) -> Result<Value> + 'static,
    {
        self.reducers
            .entry(event.to_string())
            .or_default()
            .push(Box::new(reducer));
    }

    /// Fold every reducer registered for `event` over `value`.
    ///
    /// An event nobody listens to returns the value unchanged.
    pub fn reduce(&self, event: &str, value: Value, context: &Value) -> Result<Value> {
        match self.reducers.get(event) {
            None => Ok(value),
            Some(reducers) => {
                trace!("Reducing {event} through {} handler(s)", reducers.len());
                let mut value = value;
                for reducer in reducers {
                    value = reducer(value, context)?;
                }
                Ok(value)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reduce_without_reducers_returns_input() {
        let events = Events::new();
        let value = json!({ "untouched": true });

        let result = events.reduce("unknown-event", value.clone(), &Value::Null).unwrap();

        assert_eq!(result, value);
    }

    #[test]
    fn test_reducers_run_in_registration_order() {
        let mut events = Events::new();
        events.on("list", |value, _| {
            let mut list = value.as_array().cloned().unwrap_or_default();
            list.push(json!("first"));
            Ok(Value::Array(list))
        });
        events.on("list", |value, _| {
            let mut list = value.as_array().cloned().unwrap_or_default();
            list.push(json!("second"));
            Ok(Value::Array(list))
        });

        let result = events.reduce("list", json!([]), &Value::Null).unwrap();

        assert_eq!(result, json!(["first", "second"]));
    }

    #[test]
    fn test_reducers_receive_the_context() {
        let mut events = Events::new();
        events.on("echo", |_, context| Ok(context.clone()));

        let context = json!({ "target": { "name": "my-app" } });
        let result = events.reduce("echo", Value::Null, &context).unwrap();

        assert_eq!(result, context);
    }
}
