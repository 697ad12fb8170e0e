use crate::store::atomic_writer::replace_file;
use crate::traits::{PersistenceMetadata, PersistenceStore, StoreSnapshot};
use daily_core::DailyResult;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Current on-disk format version.
pub const FORMAT_VERSION: u32 = 1;

/// JSON file-based persistence store
/// Implements the PersistenceStore trait for JSON file operations
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    instance_id: Uuid,
}

/// Wrapper structure for the on-disk JSON format
#[derive(Debug, Serialize, Deserialize)]
struct JsonEnvelope {
    version: u32,
    metadata: PersistenceMetadata,
    data: serde_json::Value,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            instance_id: Uuid::new_v4(),
        }
    }

    /// Create a store with a specific instance ID
    /// (useful for testing or coordinating across instances)
    pub fn with_instance_id(path: impl AsRef<Path>, instance_id: Uuid) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            instance_id,
        }
    }

    pub fn instance_id(&self) -> Uuid {
        self.instance_id
    }
}

#[async_trait::async_trait]
impl PersistenceStore for JsonFileStore {
    async fn save(&self, mut snapshot: StoreSnapshot) -> DailyResult<PersistenceMetadata> {
        // Stamp metadata with this instance and the current time
        snapshot.metadata.instance_id = self.instance_id;
        snapshot.metadata.saved_at = chrono::Utc::now();

        let data_value: serde_json::Value = serde_json::from_slice(&snapshot.data)
            .map_err(|e| daily_core::DailyError::Serialization(e.to_string()))?;
        let envelope = JsonEnvelope {
            version: FORMAT_VERSION,
            metadata: snapshot.metadata.clone(),
            data: data_value,
        };

        let json_bytes = serde_json::to_vec_pretty(&envelope)
            .map_err(|e| daily_core::DailyError::Serialization(e.to_string()))?;

        replace_file(&self.path, &json_bytes).await?;

        tracing::info!(
            "Saved {} bytes to {}",
            json_bytes.len(),
            self.path.display()
        );

        Ok(snapshot.metadata)
    }

    async fn load(&self) -> DailyResult<(StoreSnapshot, PersistenceMetadata)> {
        let file_bytes = tokio::fs::read(&self.path).await?;

        let envelope: JsonEnvelope = serde_json::from_slice(&file_bytes)
            .map_err(|e| daily_core::DailyError::Serialization(e.to_string()))?;

        if envelope.version != FORMAT_VERSION {
            return Err(daily_core::DailyError::Serialization(format!(
                "Unsupported format version: {}",
                envelope.version
            )));
        }

        let data = serde_json::to_vec(&envelope.data)
            .map_err(|e| daily_core::DailyError::Serialization(e.to_string()))?;
        let snapshot = StoreSnapshot {
            data,
            metadata: envelope.metadata.clone(),
        };

        tracing::info!(
            "Loaded {} bytes from {}",
            file_bytes.len(),
            self.path.display()
        );

        Ok((snapshot, envelope.metadata))
    }

    async fn exists(&self) -> bool {
        self.path.exists()
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
