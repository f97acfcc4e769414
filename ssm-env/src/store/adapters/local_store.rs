use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use anyhow::anyhow;

use crate::{
    domain::FetchedParameter,
    store::{MAX_NAMES_PER_REQUEST, ParameterStore},
};

/// In-memory parameter store keyed by fully qualified name.
///
/// Behaves like the remote store for the purposes of a load: oversized
/// requests are refused and unknown names are simply left out of the reply.
/// Values are returned as-is whatever the decryption flag says.
#[derive(Clone, Debug)]
pub struct LocalParameterStore {
    parameters: Arc<RwLock<HashMap<String, String>>>,
}

impl LocalParameterStore {
    pub fn new() -> Self {
        Self {
            parameters: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn with_parameters<K, V>(parameters: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let store = Self::new();
        for (name, value) in parameters {
            store.insert(name, value);
        }
        store
    }

    pub fn insert(&self, name: impl Into<String>, value: impl Into<String>) {
        self.parameters
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.into(), value.into());
    }

    pub fn clear(&self) {
        self.parameters
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Default for LocalParameterStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ParameterStore for LocalParameterStore {
    async fn fetch(
        &self,
        names: &[String],
        _with_decryption: bool,
    ) -> anyhow::Result<Vec<FetchedParameter>> {
        if names.len() > MAX_NAMES_PER_REQUEST {
            return Err(anyhow!(
                "Too many names in one request: {} (max {})",
                names.len(),
                MAX_NAMES_PER_REQUEST
            ));
        }

        let parameters = self
            .parameters
            .read()
            .unwrap_or_else(PoisonError::into_inner);

        Ok(names
            .iter()
            .filter_map(|name| {
                parameters
                    .get(name)
                    .map(|value| FetchedParameter::new(name.as_str(), value.as_str()))
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_fetch_returns_known_names_only() {
        let store = LocalParameterStore::with_parameters([("/app/db", "postgres://")]);

        let result = store
            .fetch(&names(&["/app/db", "/app/missing"]), true)
            .await
            .unwrap();

        assert_eq!(result, vec![FetchedParameter::new("/app/db", "postgres://")]);
    }

    #[tokio::test]
    async fn test_fetch_rejects_oversized_request() {
        let store = LocalParameterStore::new();
        let too_many: Vec<String> = (0..11).map(|i| format!("p{i}")).collect();

        let result = store.fetch(&too_many, true).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_clear_removes_everything() {
        let store = LocalParameterStore::with_parameters([("a", "1"), ("b", "2")]);
        store.clear();

        let result = store.fetch(&names(&["a", "b"]), false).await.unwrap();
        assert!(result.is_empty());
    }
}
