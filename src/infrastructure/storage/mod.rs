use async_trait::async_trait;
use object_store::{path::Path as ObjectPath, Error as ObjectStoreError, ObjectStore};
use std::sync::Arc;

/// Port over the content-addressed artifact namespace.
///
/// Artifacts are immutable and write-once per object name; no update or
/// delete is exposed. `exists` distinguishes "object absent" (`Ok(false)`)
/// from every other failure, which surfaces as an error.
///
/// The port gives no cross-request mutual exclusion between `exists` and
/// `put`; the orchestrator documents why the resulting race is benign.
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    async fn exists(&self, object_name: &str) -> Result<bool, String>;
    async fn put(&self, object_name: &str, data: Vec<u8>) -> Result<(), String>;
}

/// GCS-backed artifact store. Objects live at the bucket root under their
/// fingerprint-derived names.
pub struct GcsArtifactStore {
    store: Arc<dyn ObjectStore>,
}

impl GcsArtifactStore {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }

    fn object_path(object_name: &str) -> Result<ObjectPath, String> {
        ObjectPath::parse(object_name).map_err(|e| format!("invalid object name: {e}"))
    }
}

#[async_trait]
impl ArtifactStore for GcsArtifactStore {
    async fn exists(&self, object_name: &str) -> Result<bool, String> {
        let path = Self::object_path(object_name)?;

        match self.store.head(&path).await {
            Ok(_) => Ok(true),
            Err(ObjectStoreError::NotFound { .. }) => Ok(false),
            Err(e) => Err(format!("head {object_name}: {e}")),
        }
    }

    async fn put(&self, object_name: &str, data: Vec<u8>) -> Result<(), String> {
        let path = Self::object_path(object_name)?;

        self.store
            .put(&path, data.into())
            .await
            .map_err(|e| format!("put {object_name}: {e}"))?;

        tracing::debug!(object_name, "artifact written");
        Ok(())
    }
}
