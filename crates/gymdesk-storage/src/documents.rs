use serde::{de::DeserializeOwned, Serialize};

use crate::error::StorageError;
use crate::store::ObjectStore;

const JSON: &str = "application/json";

/// Load and deserialize one JSON document.
pub async fn load_json<T: DeserializeOwned>(
    store: &dyn ObjectStore,
    key: &str,
) -> Result<T, StorageError> {
    let body = store.get(key).await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Serialize and write one JSON document, replacing any previous version.
pub async fn save_json<T: Serialize>(
    store: &dyn ObjectStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec(value)?;
    store.put(key, body, Some(JSON)).await
}

/// Load every `.json` document under `prefix`, in key order.
///
/// A key that disappears between listing and fetching is skipped; any other
/// failure aborts the whole load.
pub async fn load_all_json<T: DeserializeOwned>(
    store: &dyn ObjectStore,
    prefix: &str,
) -> Result<Vec<T>, StorageError> {
    let keys = store.list(prefix).await?;

    let mut documents = Vec::with_capacity(keys.len());
    for key in keys.iter().filter(|k| k.ends_with(".json")) {
        match load_json(store, key).await {
            Ok(doc) => documents.push(doc),
            Err(StorageError::NotFound { key }) => {
                tracing::debug!(key = %key, "document vanished during listing");
            }
            Err(e) => return Err(e),
        }
    }

    Ok(documents)
}
