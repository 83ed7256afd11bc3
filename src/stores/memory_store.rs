use std::collections::HashMap;

use crate::stores::traits::{KeyValueStore, StoreError};

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    data: HashMap<String, String>,
}

impl MemoryStore {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.data.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.data.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
