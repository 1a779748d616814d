// Keyed argument bundles for command factories

use serde_json::Value;
use std::collections::BTreeMap;

/// Reserved key carrying the registry name of the command being built
pub const LABEL_KEY: &str = "label";

/// Keyed argument bundle handed to command factories
///
/// The GUI shell describes command parameters as loosely typed key/value
/// pairs; factories pull out what they need through the typed accessors.
/// The registry injects the command's registry name under [`LABEL_KEY`]
/// before invoking a factory.
#[derive(Debug, Clone, Default)]
pub struct CommandArgs {
    values: BTreeMap<String, Value>,
}

impl CommandArgs {
    /// Create an empty bundle
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        self.values.insert(key.to_owned(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// String parameter, if present and string-typed
    pub fn string(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    /// Integer parameter, if present and integral
    pub fn integer(&self, key: &str) -> Option<i64> {
        self.values.get(key).and_then(Value::as_i64)
    }

    /// Floating-point parameter, if present and numeric
    pub fn float(&self, key: &str) -> Option<f64> {
        self.values.get(key).and_then(Value::as_f64)
    }

    /// Boolean parameter, if present and boolean-typed
    pub fn flag(&self, key: &str) -> Option<bool> {
        self.values.get(key).and_then(Value::as_bool)
    }

    /// The registry name injected under [`LABEL_KEY`]
    pub fn label(&self) -> Option<&str> {
        self.string(LABEL_KEY)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
