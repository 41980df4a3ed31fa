use serde_json::Value;
use std::collections::HashMap;

/// The host's key-value configuration store.
///
/// Linking only reads from it. Writes belong to whatever edits the
/// configuration.
pub trait ConfigStore {
    fn get(&self, key: &str) -> Option<Value>;
}

/// A configuration store held in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryConfigStore {
    values: HashMap<String, Value>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.values.insert(key.into(), value);
    }
}

impl ConfigStore for MemoryConfigStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }
}

impl<T: ConfigStore + ?Sized> ConfigStore for &T {
    fn get(&self, key: &str) -> Option<Value> {
        (**self).get(key)
    }
}
