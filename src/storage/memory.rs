use crate::storage::{KeyValueStorage, Result};
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Keeps values for as long as it lives. Nothing survives the process.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl KeyValueStorage for InMemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn set_all(&self, entries: &[(&str, &str)]) -> Result<()> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        for (key, value) in entries {
            values.insert((*key).to_owned(), (*value).to_owned());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_get_nothing_when_empty() {
        let storage = InMemoryStorage::default();

        assert_eq!(Ok(None), storage.get("key"));
    }

    #[test]
    fn should_get_stored_value() {
        let storage = InMemoryStorage::default();

        storage.set("key", "value").unwrap();

        assert_eq!(Ok(Some("value".to_owned())), storage.get("key"));
        assert_eq!(Ok(None), storage.get("another key"));
    }

    #[test]
    fn should_store_all_values() {
        let storage = InMemoryStorage::default();
        storage.set("key", "value").unwrap();

        storage
            .set_all(&[("key", "new value"), ("another key", "another value")])
            .unwrap();

        assert_eq!(Ok(Some("new value".to_owned())), storage.get("key"));
        assert_eq!(
            Ok(Some("another value".to_owned())),
            storage.get("another key")
        );
    }

    #[test]
    fn should_replace_stored_value() {
        let storage = InMemoryStorage::default();

        storage.set("key", "value").unwrap();
        storage.set("key", "new value").unwrap();

        assert_eq!(Ok(Some("new value".to_owned())), storage.get("key"));
    }
}
