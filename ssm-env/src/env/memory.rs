use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use super::EnvironmentWriter;

#[derive(Clone, Debug, Default)]
pub struct MemoryEnvironment {
    vars: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.vars
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.vars.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn snapshot(&self) -> HashMap<String, String> {
        self.vars
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl EnvironmentWriter for MemoryEnvironment {
    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.vars
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
