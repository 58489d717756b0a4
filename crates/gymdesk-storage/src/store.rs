use async_trait::async_trait;

use crate::error::StorageError;

/// A flat key → bytes bucket.
///
/// Writes are last-write-wins; the store offers no locking.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Fetch an object's bytes. Missing keys are [`StorageError::NotFound`].
    async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError>;

    async fn put(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: Option<&str>,
    ) -> Result<(), StorageError>;

    /// Delete an object. Deleting a missing key is not an error.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// All keys under `prefix`, in lexicographic order.
    async fn list(&self, prefix: &str) -> Result<Vec<String>, StorageError>;
}
